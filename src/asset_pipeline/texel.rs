//! Texel packing module
//!
//! Quantizes decoded 8-bit RGB pixels down to the panel's 5-bit channels,
//! packs them into the 16-bit VRAM color layout, and formats the result as
//! array-initializer text.

mod hex_row_writer;
mod packer;
pub mod types;
mod writer;

pub use hex_row_writer::HexRowWriter;
pub use packer::{pack_image, pack_texel, quantize_channel};
pub use types::PackedTexture;
pub use writer::TextureWriter;
