//! Offline asset preparation utilities for a calculator-class LCD target.
//!
//! Two unrelated generators live here: a bitmap-to-texture-array converter
//! that packs pixels into the panel's 16-bit color layout, and a tone-mapping
//! LUT generator that precomputes the display gamma curve in 12.12 fixed
//! point. Both print array-initializer text meant to be pasted into a header
//! file elsewhere.

pub mod asset_pipeline;
pub mod logger;
