//! The fixed-order normalization pipeline.

use polars::prelude::DataFrame;
use tracing::{debug, info_span};

use crate::coerce::{CoercionReport, coerce_types};
use crate::error::Result;
use crate::headers::{RenamedColumn, rename_columns};
use crate::normalization::{normalize_nulls, trim_text_cells};
use crate::provenance::{Provenance, apply_provenance};
use crate::rows::drop_empty_rows;

/// Counters describing one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Rows read from the sheet.
    pub rows_loaded: usize,
    /// Rows removed because every cell was null.
    pub rows_dropped: usize,
    /// Columns that received a canonical name.
    pub renamed: Vec<RenamedColumn>,
    /// Text cells that lost surrounding whitespace.
    pub cells_trimmed: usize,
    /// Outcome of the typed-column step.
    pub coercion: CoercionReport,
    /// Cells turned into nulls by sentinel cleanup.
    pub nulls_normalized: usize,
}

/// Runs every transformation step on a freshly loaded table.
///
/// Order: drop empty rows, rename headers, trim text, coerce typed columns,
/// stamp provenance, normalize null sentinels. `provenance` is called once,
/// when the provenance step runs.
pub fn normalize_table<F>(df: &mut DataFrame, provenance: F) -> Result<NormalizeReport>
where
    F: FnOnce() -> Provenance,
{
    let span = info_span!("normalize", rows = df.height());
    let _guard = span.enter();

    let mut report = NormalizeReport {
        rows_loaded: df.height(),
        ..NormalizeReport::default()
    };

    report.rows_dropped = drop_empty_rows(df)?;
    debug!(dropped = report.rows_dropped, remaining = df.height(), "dropped empty rows");

    report.renamed = rename_columns(df)?;

    report.cells_trimmed = trim_text_cells(df)?;
    debug!(cells = report.cells_trimmed, "trimmed text cells");

    report.coercion = coerce_types(df);
    debug!(applied = report.coercion.applied_count(), "coerced typed columns");

    let provenance = provenance();
    apply_provenance(df, &provenance)?;
    debug!(file = %provenance.file_name, parsed_on = %provenance.parsed_on, "stamped provenance");

    report.nulls_normalized = normalize_nulls(df)?;
    debug!(cells = report.nulls_normalized, "normalized null sentinels");

    Ok(report)
}
