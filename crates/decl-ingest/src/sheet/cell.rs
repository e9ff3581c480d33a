//! Cell-to-text conversion for worksheet values.

use calamine::Data;

/// Cell texts that load as missing values.
///
/// Matching is exact and happens before any whitespace trimming, so `" NA "`
/// stays a string.
pub const MISSING_VALUE_MARKERS: &[&str] = &[
    "",
    "#N/A",
    "#N/A N/A",
    "#NA",
    "-1.#IND",
    "-1.#QNAN",
    "-NaN",
    "-nan",
    "1.#IND",
    "1.#QNAN",
    "<NA>",
    "N/A",
    "NA",
    "NULL",
    "NaN",
    "None",
    "n/a",
    "nan",
    "null",
];

/// Layout used for date/time cells.
pub const CELL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Returns true when the text is one of the missing-value markers.
pub fn is_missing_marker(value: &str) -> bool {
    MISSING_VALUE_MARKERS.contains(&value)
}

/// Renders a worksheet cell as text, or `None` for a missing value.
///
/// No type inference is performed: numbers, dates and booleans are turned
/// into their textual form and all downstream typing is explicit.
pub fn cell_to_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        // f64 display drops the fraction of whole numbers (3.0 -> "3")
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => String::from(if *b { "True" } else { "False" }),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) if !dt.is_duration() => naive.format(CELL_DATETIME_FORMAT).to_string(),
            _ => dt.as_f64().to_string(),
        },
        Data::DateTimeIso(s) => s.replacen('T', " ", 1),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    };
    if is_missing_marker(&text) {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{CellErrorType, ExcelDateTime, ExcelDateTimeType};

    #[test]
    fn test_empty_cell_is_missing() {
        assert_eq!(cell_to_text(&Data::Empty), None);
        assert_eq!(cell_to_text(&Data::String(String::new())), None);
    }

    #[test]
    fn test_missing_markers() {
        assert_eq!(cell_to_text(&Data::String("NA".into())), None);
        assert_eq!(cell_to_text(&Data::String("null".into())), None);
        assert_eq!(cell_to_text(&Data::Error(CellErrorType::NA)), None);
        assert_eq!(
            cell_to_text(&Data::String(" NA ".into())),
            Some(" NA ".to_string())
        );
    }

    #[test]
    fn test_whitespace_string_is_kept() {
        assert_eq!(
            cell_to_text(&Data::String("   ".into())),
            Some("   ".to_string())
        );
    }

    #[test]
    fn test_numbers_as_text() {
        assert_eq!(cell_to_text(&Data::Int(42)), Some("42".to_string()));
        assert_eq!(cell_to_text(&Data::Float(3.0)), Some("3".to_string()));
        assert_eq!(cell_to_text(&Data::Float(12.5)), Some("12.5".to_string()));
    }

    #[test]
    fn test_bool_as_text() {
        assert_eq!(cell_to_text(&Data::Bool(true)), Some("True".to_string()));
        assert_eq!(cell_to_text(&Data::Bool(false)), Some("False".to_string()));
    }

    #[test]
    fn test_iso_datetime_uses_space_separator() {
        assert_eq!(
            cell_to_text(&Data::DateTimeIso("2021-03-15T10:00:00".into())),
            Some("2021-03-15 10:00:00".to_string())
        );
    }

    #[test]
    fn test_excel_date_cell_as_timestamp() {
        let cell = Data::DateTime(ExcelDateTime::new(44270.0, ExcelDateTimeType::DateTime, false));
        assert_eq!(cell_to_text(&cell), Some("2021-03-15 00:00:00".to_string()));

        let with_time = Data::DateTime(ExcelDateTime::new(44270.5, ExcelDateTimeType::DateTime, false));
        assert_eq!(cell_to_text(&with_time), Some("2021-03-15 12:00:00".to_string()));
    }
}
