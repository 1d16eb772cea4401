//! Bitmap reader implementation using the image library.
//!
//! This module decodes source bitmaps (BMP, PNG, and anything else the image
//! library understands) into an interleaved RGB grid. Whatever the container
//! stores internally, the decoded result is normalized to 8-bit RGB triples
//! so the packer can name its channels explicitly.

use tracing::debug;

use crate::asset_pipeline::bitmap::reader::BitmapReader;
use crate::asset_pipeline::bitmap::types::TrueColorImage;
use crate::asset_pipeline::common::error::{AssetError, Result};

/// Bitmap reader that uses the image library for decoding.
///
/// Channel order note: the image library always delivers red at index 0.
/// Decoders in other toolkits commonly deliver blue first, so the channel
/// mapping lives in the packer rather than being assumed from buffer order.
pub struct ImageBitmapReader;

impl BitmapReader for ImageBitmapReader {
    /// Decodes bitmap bytes into a [`TrueColorImage`].
    ///
    /// Alpha channels and sub-byte palettes are flattened to 8-bit RGB.
    /// Decode failures (truncated file, unsupported container) are fatal
    /// and propagate unchanged.
    fn read_bitmap(&self, data: &[u8]) -> Result<TrueColorImage> {
        debug!("Decoding bitmap, {} bytes", data.len());

        let decoded = image::load_from_memory(data).map_err(|e| match e {
            image::ImageError::Unsupported(err) => AssetError::UnsupportedFormat(err.to_string()),
            other => AssetError::DecodeError(other.to_string()),
        })?;

        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();

        debug!("Decoded image: {}x{}", width, height);

        Ok(TrueColorImage {
            width: width as usize,
            height: height as usize,
            data: rgb.into_raw(),
        })
    }
}
