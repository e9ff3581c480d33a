//! Cell-level normalization for declaration tables.
//!
//! - **text**: whitespace trimming
//! - **datetime**: registration date parsing
//! - **numeric**: integer and float conversion
//! - **nulls**: NaN / NaT sentinel cleanup

pub mod datetime;
pub mod nulls;
pub mod numeric;
pub mod text;

pub use datetime::{DATE_FORMATS, normalize_registration_date, parse_registration_date};
pub use nulls::{NOT_A_TIME, normalize_nulls};
pub use numeric::{convert_all, parse_f64, parse_i64};
pub use text::trim_text_cells;
