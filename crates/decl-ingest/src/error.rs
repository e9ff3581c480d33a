//! Error types for spreadsheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a declaration export.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Spreadsheet file not found.
    #[error("spreadsheet not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file metadata.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Workbook Errors ===
    /// The file could not be opened as a workbook.
    #[error("failed to open workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// The workbook contains no worksheet.
    #[error("workbook has no worksheets: {path}")]
    NoWorksheet { path: PathBuf },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/export.xlsx"),
        };
        assert_eq!(err.to_string(), "spreadsheet not found: /path/to/export.xlsx");
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
