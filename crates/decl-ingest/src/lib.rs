//! Declaration export ingestion.
//!
//! This crate loads the first worksheet of a spreadsheet export into a
//! Polars DataFrame whose columns are all text. No type inference happens
//! at read time; blank cells and the usual missing-value markers load as
//! nulls.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use decl_ingest::read_sheet_table;
//!
//! let (df, headers) = read_sheet_table(Path::new("exports/declarations.xlsx"))?;
//! ```

mod error;
mod sheet;

// Fixture builders; compiled for unit tests or with the `test-utils` feature
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// === Error Types ===
pub use error::{IngestError, Result};

// === Worksheet Reading ===
pub use sheet::{
    CELL_DATETIME_FORMAT, MISSING_VALUE_MARKERS, SheetHeaders, build_table, cell_to_text,
    is_missing_marker, read_sheet_rows, read_sheet_table,
};
