//! Channel quantization and texel packing.
//!
//! The target panel stores colors as 16-bit integers with three 5-bit
//! channels: blue in bits [0,5), green in bits [6,11), red in bits [11,16).
//! Green sits at shift 6 rather than 5, so bit 5 is always clear in a packed
//! texel. The layout is a property of the panel and is reproduced exactly.

use tracing::debug;

use crate::asset_pipeline::bitmap::types::TrueColorImage;
use crate::asset_pipeline::texel::types::PackedTexture;

const GREEN_SHIFT: u32 = 6;
const RED_SHIFT: u32 = 11;

/// Quantizes an 8-bit channel value down to the panel's 5-bit depth.
///
/// Plain truncation, no rounding or dithering: 0..=7 collapse to 0,
/// 248..=255 collapse to 31.
pub fn quantize_channel(value: u8) -> u16 {
    (value >> 3) as u16
}

/// Packs three quantized (5-bit) channels into one 16-bit texel.
pub fn pack_texel(red: u16, green: u16, blue: u16) -> u16 {
    blue | (green << GREEN_SHIFT) | (red << RED_SHIFT)
}

/// Converts a decoded image into the panel's packed texel format.
pub fn pack_image(image: &TrueColorImage) -> PackedTexture {
    debug!("Packing texels for image {}x{}", image.width, image.height);

    let data = image
        .data
        .chunks_exact(3)
        .map(|px| {
            pack_texel(
                quantize_channel(px[0]),
                quantize_channel(px[1]),
                quantize_channel(px[2]),
            )
        })
        .collect();

    PackedTexture {
        width: image.width,
        height: image.height,
        data,
    }
}
