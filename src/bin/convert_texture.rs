use std::io::Write;

use asset_forge::asset_pipeline::TextureArrayPipeline;
use asset_forge::logger;

use tracing::{error, info};

/// Default asset converted when no path argument is given.
const DEFAULT_INPUT: &str = "Floor128.bmp";

fn main() -> anyhow::Result<()> {
    logger::init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let output_path = args.next();

    info!("Starting texture conversion...");

    let pipeline = TextureArrayPipeline::new();

    let result = match output_path {
        Some(path) => {
            let mut file = std::fs::File::create(&path)?;
            pipeline.convert_file(&input, &mut file)
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            let result = pipeline.convert_file(&input, &mut lock);
            lock.flush()?;
            result
        }
    };

    match result {
        Ok(_) => {
            info!("Conversion successful!");
            Ok(())
        }
        Err(e) => {
            error!("Conversion failed: {}", e);
            Err(e.into())
        }
    }
}
