//! Pretty-printed JSON file output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{OutputError, Result};
use crate::records::{Record, table_to_records};

/// Indentation used for every nesting level.
pub const JSON_INDENT: &[u8] = b"    ";

/// Returns `<output_dir>/<input base name>.json`.
///
/// The full base name is kept, extension included, so `export.xlsx`
/// becomes `export.xlsx.json`.
pub fn output_path(input_path: &Path, output_dir: &Path) -> PathBuf {
    let base = input_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{base}.json"))
}

/// Serializes records to a writer as a 4-space indented JSON array.
///
/// Non-ASCII text is written as-is; no trailing newline is added.
pub fn write_records<W: Write>(writer: W, records: &[Record]) -> serde_json::Result<W> {
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    records.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Writes records to a file, creating or overwriting it.
pub fn write_records_file(path: &Path, records: &[Record]) -> Result<()> {
    let file = File::create(path).map_err(|e| OutputError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = write_records(BufWriter::new(file), records).map_err(|e| {
        OutputError::Serialize {
            path: path.to_path_buf(),
            source: e,
        }
    })?;
    writer.flush().map_err(|e| OutputError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

/// Writes a normalized table as `<output_dir>/<input base name>.json`.
///
/// Returns the path that was written.
pub fn write_table_json(df: &DataFrame, input_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    if !output_dir.is_dir() {
        return Err(OutputError::DirectoryNotFound {
            path: output_dir.to_path_buf(),
        });
    }

    let path = output_path(input_path, output_dir);
    let records = table_to_records(df)?;
    write_records_file(&path, &records)?;

    tracing::debug!(path = %path.display(), records = records.len(), "wrote JSON output");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("record fixtures are objects"),
        }
    }

    #[test]
    fn test_output_path_keeps_extension() {
        assert_eq!(
            output_path(Path::new("/in/export.xlsx"), Path::new("/out")),
            PathBuf::from("/out/export.xlsx.json")
        );
    }

    #[test]
    fn test_four_space_indent_and_literal_unicode() {
        let records = vec![record(json!({"custom_code": "10", "sender_name": "ООО Ромашка"}))];

        let bytes = write_records(Vec::new(), &records).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            "[\n    {\n        \"custom_code\": \"10\",\n        \"sender_name\": \"ООО Ромашка\"\n    }\n]"
        );
    }

    #[test]
    fn test_empty_array() {
        let bytes = write_records(Vec::new(), &[]).unwrap();
        assert_eq!(bytes, b"[]");
    }
}
