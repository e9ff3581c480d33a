//! Error types for table transformation.

use thiserror::Error;

/// Errors raised by transformation steps.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A column required by a step is absent from the table.
    #[error("column '{column}' not found in table")]
    MissingColumn { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {0}")]
    DataFrame(#[from] polars::prelude::PolarsError),
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
