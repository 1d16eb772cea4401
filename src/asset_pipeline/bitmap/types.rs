//! Decoded bitmap data types

/// Represents a decoded true-color bitmap
#[derive(Debug, Clone)]
pub struct TrueColorImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Interleaved 8-bit pixel data, row-major [R, G, B, R, G, B, ...]
    pub data: Vec<u8>,
}
