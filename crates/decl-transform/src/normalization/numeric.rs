//! Numeric normalization utilities.

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<i64>().ok()
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Converts every present value of a column, or nothing at all.
///
/// Nulls stay null. Returns `None` as soon as one present value fails to
/// parse, in which case the caller keeps the column as text.
pub fn convert_all<'a, T, I, F>(values: I, parse: F) -> Option<Vec<Option<T>>>
where
    I: IntoIterator<Item = Option<&'a str>>,
    F: Fn(&str) -> Option<T>,
{
    values
        .into_iter()
        .map(|value| match value {
            Some(text) => parse(text).map(Some),
            None => Some(None),
        })
        .collect()
}
