//! Whitespace cleanup for text cells.

use polars::prelude::{Column, DataFrame, DataType};

use crate::error::Result;

/// Strips leading and trailing whitespace from every text cell.
///
/// Nulls and non-text columns are left alone. Returns the number of cells
/// whose value changed.
pub fn trim_text_cells(df: &mut DataFrame) -> Result<usize> {
    let mut changed = 0;
    let mut columns = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        if column.dtype() != &DataType::String {
            columns.push(column.clone());
            continue;
        }
        let values = column.str()?;
        let trimmed: Vec<Option<&str>> = values
            .iter()
            .map(|value| {
                value.map(|text| {
                    let stripped = text.trim();
                    if stripped.len() != text.len() {
                        changed += 1;
                    }
                    stripped
                })
            })
            .collect();
        columns.push(Column::new(column.name().clone(), trimmed));
    }

    if changed > 0 {
        *df = DataFrame::new(columns)?;
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_preserves_inner_whitespace_and_nulls() {
        let mut df = DataFrame::new(vec![Column::new(
            "goods_description".into(),
            vec![Some("  Трубы  стальные "), None, Some("ok")],
        )])
        .unwrap();

        let changed = trim_text_cells(&mut df).unwrap();

        assert_eq!(changed, 1);
        let values: Vec<Option<&str>> = df
            .column("goods_description")
            .unwrap()
            .str()
            .unwrap()
            .iter()
            .collect();
        assert_eq!(values, vec![Some("Трубы  стальные"), None, Some("ok")]);
    }

    #[test]
    fn test_trim_skips_numeric_columns() {
        let mut df = DataFrame::new(vec![Column::new("n".into(), vec![Some(1i64), None])]).unwrap();
        assert_eq!(trim_text_cells(&mut df).unwrap(), 0);
        assert_eq!(df.column("n").unwrap().dtype(), &DataType::Int64);
    }
}
