use std::io::Write;
use std::path::Path;
use tracing::{info, instrument};

use crate::asset_pipeline::{
    bitmap::{BitmapReader, ImageBitmapReader},
    common::error::{AssetError, Result},
    texel::{HexRowWriter, TextureWriter, pack_image},
};

pub struct TextureArrayPipeline<R: BitmapReader, W: TextureWriter> {
    reader: R,
    writer: W,
}

impl TextureArrayPipeline<ImageBitmapReader, HexRowWriter> {
    pub fn new() -> Self {
        Self {
            reader: ImageBitmapReader,
            writer: HexRowWriter,
        }
    }
}

impl Default for TextureArrayPipeline<ImageBitmapReader, HexRowWriter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BitmapReader, W: TextureWriter> TextureArrayPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting bitmap to texture array conversion");

        let image = {
            let _span = tracing::info_span!("decode_bitmap").entered();
            self.reader.read_bitmap(input_data)?
        };

        let texture = {
            let _span = tracing::info_span!("pack_texels",
                width = image.width,
                height = image.height
            ).entered();
            pack_image(&image)
        };

        {
            let _span = tracing::info_span!("emit_rows").entered();
            self.writer.write_texture(&texture, output)?;
        }

        info!(
            width = texture.width,
            height = texture.height,
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output))]
    pub fn convert_file<P: AsRef<Path>>(
        &self,
        input_path: P,
        output: &mut dyn Write,
    ) -> Result<()> {
        let input_path = input_path.as_ref();

        info!(input = %input_path.display(), "Converting file");

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                AssetError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        self.convert(&input_data, output)?;

        Ok(())
    }
}
