use std::io::Write;

use crate::asset_pipeline::common::error::Result;
use crate::asset_pipeline::texel::types::PackedTexture;

pub trait TextureWriter {
    fn write_texture(&self, texture: &PackedTexture, output: &mut dyn Write) -> Result<()>;
}
