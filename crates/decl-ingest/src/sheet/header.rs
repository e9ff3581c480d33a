//! Worksheet header row handling.

use std::collections::HashSet;

/// Column names taken from the first worksheet row.
///
/// Names are stored as they appear in the sheet (no trimming) so that
/// headers without a canonical translation pass through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetHeaders {
    /// Unique column names in sheet order.
    pub columns: Vec<String>,
}

impl SheetHeaders {
    /// Builds unique column names from raw header cells.
    ///
    /// Blank cells become `Unnamed: <index>` and repeated names get a
    /// `.1`, `.2`, ... suffix in order of appearance.
    pub fn from_cells(cells: Vec<Option<String>>) -> Self {
        let mut seen = HashSet::with_capacity(cells.len());
        let mut columns = Vec::with_capacity(cells.len());

        for (idx, cell) in cells.into_iter().enumerate() {
            let base = cell.unwrap_or_else(|| format!("Unnamed: {idx}"));
            let mut name = base.clone();
            let mut suffix = 1;
            while seen.contains(&name) {
                name = format!("{base}.{suffix}");
                suffix += 1;
            }
            seen.insert(name.clone());
            columns.push(name);
        }

        Self { columns }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(String::from)).collect()
    }

    #[test]
    fn test_headers_kept_verbatim() {
        let headers = SheetHeaders::from_cells(cells(&[Some(" Код таможни "), Some("B")]));
        assert_eq!(headers.columns, vec![" Код таможни ", "B"]);
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_blank_headers_are_named_by_position() {
        let headers = SheetHeaders::from_cells(cells(&[Some("A"), None, Some("C")]));
        assert_eq!(headers.columns, vec!["A", "Unnamed: 1", "C"]);
    }

    #[test]
    fn test_duplicate_headers_get_suffix() {
        let headers = SheetHeaders::from_cells(cells(&[Some("A"), Some("A"), Some("A")]));
        assert_eq!(headers.columns, vec!["A", "A.1", "A.2"]);
    }

    #[test]
    fn test_duplicate_suffix_skips_taken_names() {
        let headers = SheetHeaders::from_cells(cells(&[Some("A"), Some("A.1"), Some("A")]));
        assert_eq!(headers.columns, vec!["A", "A.1", "A.2"]);
    }

    #[test]
    fn test_empty_header_row() {
        let headers = SheetHeaders::from_cells(Vec::new());
        assert!(headers.is_empty());
    }
}
