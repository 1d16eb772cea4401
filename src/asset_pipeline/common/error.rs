use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode bitmap: {0}")]
    DecodeError(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to write output: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AssetError>;
