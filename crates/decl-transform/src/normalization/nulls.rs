//! Replacement of null-like sentinels with real nulls.

use polars::prelude::{Column, DataFrame, DataType};

use crate::error::Result;

/// Text written for a missing timestamp by date-aware tooling.
pub const NOT_A_TIME: &str = "NaT";

/// Replaces float NaN and `NaT` text cells with null.
///
/// Returns the number of cells that were nulled.
pub fn normalize_nulls(df: &mut DataFrame) -> Result<usize> {
    let mut replaced = 0;
    let mut columns = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        match column.dtype() {
            DataType::Float64 => {
                let values: Vec<Option<f64>> = column
                    .f64()?
                    .iter()
                    .map(|value| match value {
                        Some(v) if v.is_nan() => {
                            replaced += 1;
                            None
                        }
                        other => other,
                    })
                    .collect();
                columns.push(Column::new(column.name().clone(), values));
            }
            DataType::String => {
                let values: Vec<Option<&str>> = column
                    .str()?
                    .iter()
                    .map(|value| match value {
                        Some(NOT_A_TIME) => {
                            replaced += 1;
                            None
                        }
                        other => other,
                    })
                    .collect();
                columns.push(Column::new(column.name().clone(), values));
            }
            _ => columns.push(column.clone()),
        }
    }

    if replaced > 0 {
        *df = DataFrame::new(columns)?;
    }
    Ok(replaced)
}
