//! JSON output for normalized declaration tables.
//!
//! Rows become JSON objects whose keys follow the table's column order; the
//! array is written pretty-printed with four-space indentation and literal
//! (unescaped) non-ASCII text.

mod error;
mod json;
mod records;

pub use error::{OutputError, Result};
pub use json::{
    JSON_INDENT, output_path, write_records, write_records_file, write_table_json,
};
pub use records::{Record, any_value_to_json, table_to_records};
