//! Row-level filtering.

use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};

use crate::error::Result;

/// Drops every row in which all cells are null.
///
/// Returns the number of rows removed.
pub fn drop_empty_rows(df: &mut DataFrame) -> Result<usize> {
    let height = df.height();
    if height == 0 {
        return Ok(0);
    }

    let mut keep = vec![false; height];
    for column in df.get_columns() {
        let present = column.is_not_null();
        for (idx, present) in (&present).into_iter().enumerate() {
            if present == Some(true) {
                keep[idx] = true;
            }
        }
    }

    let dropped = keep.iter().filter(|k| !**k).count();
    if dropped > 0 {
        let mask = BooleanChunked::from_slice("non_empty".into(), &keep);
        *df = df.filter(&mask)?;
    }
    Ok(dropped)
}
