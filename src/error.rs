use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single resize call.
///
/// Every variant is terminal for the call that produced it; nothing is
/// retried internally.
#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<gif::DecodingError> for ResizeError {
    fn from(e: gif::DecodingError) -> Self {
        // Input is always read from memory, so an I/O failure here means a
        // truncated stream rather than a broken sink.
        ResizeError::Decode(e.to_string())
    }
}

impl From<gif::EncodingError> for ResizeError {
    fn from(e: gif::EncodingError) -> Self {
        match e {
            gif::EncodingError::Io(io) => ResizeError::Io(io),
            other => ResizeError::Encode(other.to_string()),
        }
    }
}

impl From<png::EncodingError> for ResizeError {
    fn from(e: png::EncodingError) -> Self {
        match e {
            png::EncodingError::IoError(io) => ResizeError::Io(io),
            other => ResizeError::Encode(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
