//! Worksheet reading into string-typed DataFrames.

use std::path::Path;

use calamine::{Reader, open_workbook_auto};
use polars::prelude::{Column, DataFrame};

use crate::error::{IngestError, Result};

use super::cell::cell_to_text;
use super::header::SheetHeaders;

/// Verifies that the input path exists and is readable metadata-wise.
fn check_input_file(path: &Path) -> Result<()> {
    std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    Ok(())
}

/// Reads the cells of the first worksheet as text rows.
///
/// The first returned row is the header row. Missing values are `None`.
pub fn read_sheet_rows(path: &Path) -> Result<Vec<Vec<Option<String>>>> {
    check_input_file(path)?;

    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_text).collect())
        .collect();
    Ok(rows)
}

/// Builds a string-typed table from a header row and data rows.
///
/// Short rows are padded with nulls; cells beyond the header width are
/// ignored.
pub fn build_table(
    header_cells: Vec<Option<String>>,
    rows: &[Vec<Option<String>>],
) -> Result<(DataFrame, SheetHeaders)> {
    let headers = SheetHeaders::from_cells(header_cells);

    let columns: Vec<Column> = headers
        .columns
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values: Vec<Option<String>> = rows
                .iter()
                .map(|row| row.get(idx).cloned().flatten())
                .collect();
            Column::new(name.as_str().into(), values)
        })
        .collect();

    let df = DataFrame::new(columns)?;
    Ok((df, headers))
}

/// Reads the first worksheet of a workbook into a DataFrame.
///
/// Row 1 supplies the column names; every cell is loaded as text or null.
/// Supported formats are whatever the workbook reader detects from the
/// file extension (xlsx, xlsm, xlsb, xls, ods).
///
/// Returns both the DataFrame and the header information.
pub fn read_sheet_table(path: &Path) -> Result<(DataFrame, SheetHeaders)> {
    let mut rows = read_sheet_rows(path)?.into_iter();
    let header_cells = rows.next().unwrap_or_default();
    let data_rows: Vec<Vec<Option<String>>> = rows.collect();

    let (df, headers) = build_table(header_cells, &data_rows)?;

    if df.width() > 500 {
        tracing::warn!(
            path = %path.display(),
            columns = df.width(),
            "Worksheet has more than 500 columns - may impact performance"
        );
    }

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded worksheet"
    );

    Ok((df, headers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{Cell, write_xlsx};

    fn row(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(String::from)).collect()
    }

    #[test]
    fn test_build_table_shape() {
        let (df, headers) = build_table(
            row(&[Some("A"), Some("B")]),
            &[row(&[Some("1"), Some("2")]), row(&[Some("3"), None])],
        )
        .unwrap();

        assert_eq!(headers.columns, vec!["A", "B"]);
        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
        assert_eq!(df.column("B").unwrap().null_count(), 1);
    }

    #[test]
    fn test_build_table_pads_short_rows() {
        let (df, _) = build_table(
            row(&[Some("A"), Some("B"), Some("C")]),
            &[row(&[Some("1")])],
        )
        .unwrap();

        assert_eq!(df.height(), 1);
        assert_eq!(df.column("C").unwrap().null_count(), 1);
    }

    #[test]
    fn test_build_table_header_only() {
        let (df, headers) = build_table(row(&[Some("A")]), &[]).unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 1);
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_sheet_table(Path::new("/nonexistent/export.xlsx"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_not_a_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"definitely not a zip archive").unwrap();

        let result = read_sheet_table(&path);
        assert!(matches!(result, Err(IngestError::Workbook { .. })));
    }

    fn text_column<'a>(df: &'a DataFrame, name: &str) -> Vec<Option<&'a str>> {
        df.column(name).unwrap().str().unwrap().iter().collect()
    }

    #[test]
    fn test_read_headers_and_text_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("declarations.xlsx");
        write_xlsx(
            &path,
            &[
                vec![
                    Cell::Text("Код таможни"),
                    Cell::Text("Дата регистрации"),
                    Cell::Text("Кол-во контейнеров"),
                ],
                vec![Cell::Text("10"), Cell::Text("15.03.2021"), Cell::Number("3")],
                vec![Cell::Empty, Cell::Empty, Cell::Empty],
                vec![Cell::Text("20"), Cell::Text("NA"), Cell::Number("2.5")],
            ],
        )
        .unwrap();

        let (df, headers) = read_sheet_table(&path).unwrap();

        assert_eq!(
            headers.columns,
            vec!["Код таможни", "Дата регистрации", "Кол-во контейнеров"]
        );
        assert_eq!(df.height(), 3);
        assert_eq!(text_column(&df, "Код таможни"), vec![Some("10"), None, Some("20")]);
        assert_eq!(
            text_column(&df, "Дата регистрации"),
            vec![Some("15.03.2021"), None, None]
        );
        assert_eq!(
            text_column(&df, "Кол-во контейнеров"),
            vec![Some("3"), None, Some("2.5")]
        );
    }

    #[test]
    fn test_read_date_cell_as_timestamp_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dates.xlsx");
        write_xlsx(
            &path,
            &[vec![Cell::Text("Дата регистрации")], vec![Cell::Date(44270.0)]],
        )
        .unwrap();

        let (df, _) = read_sheet_table(&path).unwrap();

        assert_eq!(
            text_column(&df, "Дата регистрации"),
            vec![Some("2021-03-15 00:00:00")]
        );
    }

    #[test]
    fn test_read_header_only_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        write_xlsx(&path, &[vec![Cell::Text("Код таможни"), Cell::Text("Код таможни")]]).unwrap();

        let (df, headers) = read_sheet_table(&path).unwrap();

        assert_eq!(headers.columns, vec!["Код таможни", "Код таможни.1"]);
        assert_eq!(df.height(), 0);
    }
}
