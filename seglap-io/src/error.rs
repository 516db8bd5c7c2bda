use std::io;
use thiserror::Error;

/// Error type for seglap-io operations.
#[derive(Error, Debug)]
pub enum SeglapIoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The delimited input or output could not be processed.
    #[error("Delimited file error: {0}")]
    Csv(#[from] csv::Error),

    /// Overlaps could not be serialized to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for seglap-io operations.
pub type Result<T> = std::result::Result<T, SeglapIoError>;
