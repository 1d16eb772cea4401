//! Bitmap decoding module
//!
//! This module provides format-agnostic decoding of source bitmaps into
//! in-memory RGB pixel grids.

mod image_reader;
mod reader;
pub mod types;

pub use image_reader::ImageBitmapReader;
pub use reader::BitmapReader;
pub use types::TrueColorImage;
