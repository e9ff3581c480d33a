//! Worksheet reading utilities.

mod cell;
mod header;
mod reader;

pub use cell::{CELL_DATETIME_FORMAT, MISSING_VALUE_MARKERS, cell_to_text, is_missing_marker};
pub use header::SheetHeaders;
pub use reader::{build_table, read_sheet_rows, read_sheet_table};
