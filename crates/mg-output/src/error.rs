//! Error types for mg-output.

use thiserror::Error;

/// Errors that can occur while reading or writing persisted records.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A field that needs custom parsing (e.g. a GPS path list) was
    /// malformed.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
