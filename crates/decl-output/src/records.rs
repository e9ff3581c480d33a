//! Conversion of a table into ordered JSON records.

use polars::prelude::{AnyValue, DataFrame};
use serde_json::{Map, Number, Value};

use crate::error::Result;

/// One output row: column name -> value, in column order.
pub type Record = Map<String, Value>;

/// Converts a single cell to its JSON value.
///
/// Non-finite floats have no JSON form and become null.
pub fn any_value_to_json(value: AnyValue<'_>) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => Value::Bool(b),
        AnyValue::String(s) => Value::String(s.to_string()),
        AnyValue::StringOwned(s) => Value::String(s.to_string()),
        AnyValue::Int32(i) => Value::from(i),
        AnyValue::Int64(i) => Value::from(i),
        AnyValue::UInt32(u) => Value::from(u),
        AnyValue::UInt64(u) => Value::from(u),
        AnyValue::Float32(f) => Number::from_f64(f64::from(f)).map_or(Value::Null, Value::Number),
        AnyValue::Float64(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
        other => Value::String(other.to_string()),
    }
}

/// Converts every row of the table into a record.
pub fn table_to_records(df: &DataFrame) -> Result<Vec<Record>> {
    let columns = df.get_columns();
    let mut records = Vec::with_capacity(df.height());

    for idx in 0..df.height() {
        let mut record = Map::with_capacity(columns.len());
        for column in columns {
            record.insert(column.name().to_string(), any_value_to_json(column.get(idx)?));
        }
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Column;
    use serde_json::json;

    #[test]
    fn test_records_keep_column_order_and_types() {
        let df = DataFrame::new(vec![
            Column::new("z_last_alphabetically".into(), vec![Some("a"), None]),
            Column::new("container_count".into(), vec![Some(3i64), Some(4)]),
            Column::new("gross_weight_kg".into(), vec![Some(12.5), Some(f64::NAN)]),
        ])
        .unwrap();

        let records = table_to_records(&df).unwrap();

        assert_eq!(records.len(), 2);
        let keys: Vec<&String> = records[0].keys().collect();
        assert_eq!(keys, vec!["z_last_alphabetically", "container_count", "gross_weight_kg"]);
        assert_eq!(
            Value::Object(records[0].clone()),
            json!({"z_last_alphabetically": "a", "container_count": 3, "gross_weight_kg": 12.5})
        );
        assert_eq!(records[1]["z_last_alphabetically"], Value::Null);
        assert_eq!(records[1]["gross_weight_kg"], Value::Null);
    }

    #[test]
    fn test_empty_table_has_no_records() {
        let df = DataFrame::new(vec![Column::new("a".into(), Vec::<Option<&str>>::new())]).unwrap();
        assert!(table_to_records(&df).unwrap().is_empty());
    }
}
