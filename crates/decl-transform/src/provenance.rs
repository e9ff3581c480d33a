//! Source-file metadata stamped onto every row.

use std::path::Path;

use chrono::{Local, NaiveDateTime};
use polars::prelude::{Column, DataFrame};

use crate::error::Result;

pub const ORIGINAL_FILE_NAME: &str = "original_file_name";
pub const ORIGINAL_FILE_PARSED_ON: &str = "original_file_parsed_on";

/// Layout of the `original_file_parsed_on` timestamp.
pub const PARSED_ON_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Provenance values shared by all rows of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// Base name of the input file.
    pub file_name: String,
    /// Processing timestamp, already formatted.
    pub parsed_on: String,
}

impl Provenance {
    /// Creates provenance from explicit values.
    pub fn new(file_name: impl Into<String>, parsed_on: NaiveDateTime) -> Self {
        Self {
            file_name: file_name.into(),
            parsed_on: parsed_on.format(PARSED_ON_FORMAT).to_string(),
        }
    }

    /// Captures provenance for an input path using the local wall clock.
    pub fn capture(input_path: &Path) -> Self {
        Self::new(file_base_name(input_path), Local::now().naive_local())
    }
}

/// Returns the final component of a path, or an empty string.
pub fn file_base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Appends (or overwrites) the two provenance columns.
pub fn apply_provenance(df: &mut DataFrame, provenance: &Provenance) -> Result<()> {
    let height = df.height();
    df.with_column(Column::new(
        ORIGINAL_FILE_NAME.into(),
        vec![provenance.file_name.as_str(); height],
    ))?;
    df.with_column(Column::new(
        ORIGINAL_FILE_PARSED_ON.into(),
        vec![provenance.parsed_on.as_str(); height],
    ))?;
    Ok(())
}
