use std::io::Write;
use tracing::debug;

use crate::asset_pipeline::common::error::Result;
use crate::asset_pipeline::texel::types::PackedTexture;
use crate::asset_pipeline::texel::writer::TextureWriter;

/// Emits a packed texture as brace-delimited rows of lowercase hex values,
/// one line per image row:
///
/// ```text
/// {0x1a2b, 0x3c4d},
/// {0x5e6f, 0x7a8b}
/// ```
///
/// Rows end with a comma so consecutive lines concatenate inside a C array
/// initializer; the final row of a multi-row texture carries no separator.
/// A single-row texture keeps its comma. No array-name wrapper is emitted,
/// that is left to whatever assembles the header file.
pub struct HexRowWriter;

impl TextureWriter for HexRowWriter {
    fn write_texture(&self, texture: &PackedTexture, output: &mut dyn Write) -> Result<()> {
        debug!("Emitting {} rows of {} texels", texture.height, texture.width);

        for (index, row) in texture.rows().enumerate() {
            let cells: Vec<String> = row.iter().map(|texel| format!("{texel:#x}")).collect();
            let line = cells.join(", ");

            let last_of_many = texture.height > 1 && index + 1 == texture.height;
            if last_of_many {
                writeln!(output, "{{{line}}}")?;
            } else {
                writeln!(output, "{{{line}}},")?;
            }
        }

        Ok(())
    }
}
