//! Gamma and tone-mapping curve table.
//!
//! Each entry maps a normalized input level `i / 256` through an inverse
//! gamma of 2.1 (sRGB to linear approximation) and then through the tone
//! curve `-ln(1 - g)`, which compresses linear radiance toward a bound it
//! never reaches. Results are stored in the renderer's 12.12 fixed-point
//! format.

use std::io::Write;
use tracing::debug;

use crate::asset_pipeline::common::error::Result;

/// Number of table entries. The table stops one step short of a normalized
/// level of 1.0; at exactly 1.0 the tone curve's log argument reaches zero.
pub const TONE_MAP_LEN: usize = 255;

/// Divisor normalizing an index to an input level in [0, 1).
const LEVEL_DIVISOR: f64 = 256.0;

/// Inverse gamma exponent approximating the sRGB transfer curve.
const GAMMA: f64 = 2.1;

/// 12.12 fixed-point scale, matching the renderer's arithmetic.
const FIXED_POINT_ONE: f64 = 4096.0;

/// Precomputed tone-mapping curve, one signed 12.12 entry per input level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneMapTable {
    entries: Vec<i32>,
}

impl ToneMapTable {
    /// Generates the full table from the fixed device constants.
    ///
    /// Entries near the top of the domain grow large as the curve blows up
    /// toward its asymptote; no clamping is applied.
    pub fn generate() -> Self {
        debug!("Generating {}-entry tone-map table", TONE_MAP_LEN);

        let entries = (0..TONE_MAP_LEN)
            .map(|i| {
                let level = i as f64 / LEVEL_DIVISOR;
                let linear = level.powf(GAMMA);
                let mapped = -(1.0 - linear).ln();
                (mapped * FIXED_POINT_ONE).floor() as i32
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[i32] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the whole table in debug-listing form, for eyeballing the
    /// curve before committing it to a header.
    pub fn write_preview(&self, output: &mut dyn Write) -> Result<()> {
        writeln!(output, "{:?}", self.entries)?;
        Ok(())
    }

    /// Writes one entry and a trailing comma per line, in index order, ready
    /// to paste into an array initializer. Every line ends with a comma,
    /// including the last.
    pub fn write_initializer(&self, output: &mut dyn Write) -> Result<()> {
        for entry in &self.entries {
            writeln!(output, "{entry},")?;
        }
        Ok(())
    }
}
