//! Asset generation pipeline module
//!
//! This module provides a structured approach to the project's offline asset
//! generators, with separate modules for bitmap decoding, texel packing,
//! tone-map LUT generation, and conversion orchestration.

pub mod bitmap;
pub mod common;
pub mod conversions;
pub mod lut;
pub mod texel;


pub use common::{
    AssetError,
    Result,
};

pub use bitmap::{
    BitmapReader,
    ImageBitmapReader,
    TrueColorImage,
};

pub use texel::{
    HexRowWriter,
    PackedTexture,
    TextureWriter,
    pack_image,
    pack_texel,
    quantize_channel,
};

pub use lut::{
    TONE_MAP_LEN,
    ToneMapTable,
};

pub use conversions::{
    TextureArrayPipeline,
};
