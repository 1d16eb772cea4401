use std::io::Write;

use asset_forge::asset_pipeline::ToneMapTable;
use asset_forge::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Generating gamma and tone-mapping LUT...");

    let table = ToneMapTable::generate();

    let stdout = std::io::stdout();
    let mut lock = stdout.lock();

    let result = table
        .write_preview(&mut lock)
        .and_then(|_| table.write_initializer(&mut lock));

    match result {
        Ok(_) => {
            lock.flush()?;
            info!("Generated {} LUT entries", table.len());
            Ok(())
        }
        Err(e) => {
            error!("LUT generation failed: {}", e);
            Err(e.into())
        }
    }
}
