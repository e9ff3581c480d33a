//! Registration date parsing.
//!
//! Exports mix a timestamp layout produced by spreadsheet date cells with
//! the day-first layouts typed by hand. Every accepted layout collapses to
//! a plain ISO 8601 date.

use chrono::{NaiveDate, NaiveDateTime};

/// Accepted input layouts, tried in order.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%d.%m.%Y",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

/// Output layout for normalized dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Checks that the digit group matched by `%Y` has exactly four digits.
///
/// chrono accepts years of any width, so `15.03.21` would otherwise parse
/// as year 21. Layouts separate every numeric field with a non-digit, so
/// the n-th specifier lines up with the n-th digit group of the value.
fn has_four_digit_year(value: &str, format: &str) -> bool {
    let Some(year_field) = format
        .split('%')
        .skip(1)
        .position(|spec| spec.starts_with('Y'))
    else {
        return true;
    };
    value
        .split(|c: char| !c.is_ascii_digit())
        .filter(|group| !group.is_empty())
        .nth(year_field)
        .is_some_and(|group| group.len() == 4)
}

/// Parses a value against one layout, returning the calendar date.
///
/// Layouts with a time component are parsed as datetimes so that the time
/// part is validated even though it is discarded.
fn parse_with_format(value: &str, format: &str) -> Option<NaiveDate> {
    if !has_four_digit_year(value, format) {
        return None;
    }
    if format.contains("%H") {
        NaiveDateTime::parse_from_str(value, format)
            .ok()
            .map(|dt| dt.date())
    } else {
        NaiveDate::parse_from_str(value, format).ok()
    }
}

/// Parses a value with the first matching accepted layout.
pub fn parse_registration_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| parse_with_format(value, format))
}

/// Normalizes a registration date cell to `YYYY-MM-DD`.
///
/// Missing or empty input and values matching no layout all yield `None`.
pub fn normalize_registration_date(value: Option<&str>) -> Option<String> {
    let value = value.filter(|v| !v.is_empty())?;
    parse_registration_date(value).map(|date| date.format(ISO_DATE_FORMAT).to_string())
}
