//! The convert command: load, normalize, write.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use decl_ingest::read_sheet_table;
use decl_output::write_table_json;
use decl_transform::{NormalizeReport, Provenance, normalize_table};

/// Outcome of one conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// JSON file that was written.
    pub output_path: PathBuf,
    /// Number of records written.
    pub records: usize,
    /// Per-step counters.
    pub report: NormalizeReport,
}

/// Converts one spreadsheet, taking provenance values from `provenance`
/// once the table has been loaded and typed.
pub fn convert_file<F>(input_file: &Path, output_folder: &Path, provenance: F) -> Result<ConvertResult>
where
    F: FnOnce() -> Provenance,
{
    let span = info_span!("convert", input = %input_file.display());
    let _guard = span.enter();
    let started = Instant::now();

    let (mut df, _headers) = read_sheet_table(input_file)
        .with_context(|| format!("load {}", input_file.display()))?;

    let report = normalize_table(&mut df, provenance)
        .with_context(|| format!("normalize {}", input_file.display()))?;

    let output_path = write_table_json(&df, input_file, output_folder)
        .with_context(|| format!("write output to {}", output_folder.display()))?;

    info!(
        output = %output_path.display(),
        records = df.height(),
        dropped = report.rows_dropped,
        renamed = report.renamed.len(),
        coerced = report.coercion.applied_count(),
        elapsed_ms = started.elapsed().as_millis(),
        "conversion complete"
    );

    Ok(ConvertResult {
        output_path,
        records: df.height(),
        report,
    })
}

/// Converts one spreadsheet, stamping the local time of the provenance step.
pub fn run_convert(input_file: &Path, output_folder: &Path) -> Result<ConvertResult> {
    convert_file(input_file, output_folder, || Provenance::capture(input_file))
}
