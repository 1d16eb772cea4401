//! Pipeline conversions module
//!
//! This module contains orchestration logic for the bitmap-to-texture-array
//! conversion.

mod texture_to_array;

pub use texture_to_array::TextureArrayPipeline;
