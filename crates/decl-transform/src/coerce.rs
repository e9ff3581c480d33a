//! Best-effort typing of the numeric and date columns.
//!
//! The four typed columns are coerced in a fixed order inside one failure
//! boundary: the first error (typically a column missing from the export)
//! ends the step. Columns already coerced keep their new type, the rest
//! stay text, and the error is logged and swallowed.

use polars::prelude::{Column, DataFrame};
use tracing::debug;

use crate::error::{Result, TransformError};
use crate::headers::{CONTAINER_COUNT, GROSS_WEIGHT_KG, NET_WEIGHT_KG, REGISTRATION_DATE};
use crate::normalization::{convert_all, normalize_registration_date, parse_f64, parse_i64};

/// What the coercion step did to each typed column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoercionReport {
    /// `container_count` became an integer column.
    pub container_count: bool,
    /// `registration_date` was normalized to ISO dates.
    pub registration_date: bool,
    /// `gross_weight_kg` became a float column.
    pub gross_weight_kg: bool,
    /// `net_weight_kg` became a float column.
    pub net_weight_kg: bool,
    /// Error that ended the step early, if any.
    pub aborted: Option<String>,
}

impl CoercionReport {
    /// Number of columns whose values were converted.
    pub fn applied_count(&self) -> usize {
        [
            self.container_count,
            self.registration_date,
            self.gross_weight_kg,
            self.net_weight_kg,
        ]
        .iter()
        .filter(|applied| **applied)
        .count()
    }
}

fn required_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| TransformError::MissingColumn {
        column: name.to_string(),
    })
}

/// Converts a text column to integers if every present value parses.
///
/// Returns false and leaves the column untouched otherwise.
pub fn coerce_integer_column(df: &mut DataFrame, name: &str) -> Result<bool> {
    let converted = {
        let values = required_column(df, name)?.str()?;
        convert_all(values.iter(), parse_i64)
    };
    match converted {
        Some(values) => {
            df.with_column(Column::new(name.into(), values))?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Converts a text column to floats if every present value parses.
///
/// Returns false and leaves the column untouched otherwise.
pub fn coerce_float_column(df: &mut DataFrame, name: &str) -> Result<bool> {
    let converted = {
        let values = required_column(df, name)?.str()?;
        convert_all(values.iter(), parse_f64)
    };
    match converted {
        Some(values) => {
            df.with_column(Column::new(name.into(), values))?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Rewrites a date column as `YYYY-MM-DD`, nulling values that match no
/// accepted layout.
pub fn coerce_date_column(df: &mut DataFrame, name: &str) -> Result<bool> {
    let normalized: Vec<Option<String>> = required_column(df, name)?
        .str()?
        .iter()
        .map(normalize_registration_date)
        .collect();
    df.with_column(Column::new(name.into(), normalized))?;
    Ok(true)
}

fn coerce_in_order(df: &mut DataFrame, report: &mut CoercionReport) -> Result<()> {
    report.container_count = coerce_integer_column(df, CONTAINER_COUNT)?;
    report.registration_date = coerce_date_column(df, REGISTRATION_DATE)?;
    report.gross_weight_kg = coerce_float_column(df, GROSS_WEIGHT_KG)?;
    report.net_weight_kg = coerce_float_column(df, NET_WEIGHT_KG)?;
    Ok(())
}

/// Coerces `container_count`, `registration_date`, `gross_weight_kg` and
/// `net_weight_kg`, in that order, sharing one failure boundary.
pub fn coerce_types(df: &mut DataFrame) -> CoercionReport {
    let mut report = CoercionReport::default();
    if let Err(error) = coerce_in_order(df, &mut report) {
        debug!(%error, "type coercion stopped early");
        report.aborted = Some(error.to_string());
    }
    report
}
