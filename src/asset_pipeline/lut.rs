//! Tone-mapping LUT generation module
//!
//! Precomputes the display gamma and tone-mapping curve as a table of 12.12
//! fixed-point integers. Independent of the texture pipeline.

mod table;

pub use table::{TONE_MAP_LEN, ToneMapTable};
