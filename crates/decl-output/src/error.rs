//! Error types for JSON output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the JSON file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Output directory does not exist.
    #[error("output directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to create or write the output file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize records.
    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to read a table cell.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for OutputError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
