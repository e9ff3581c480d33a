//! Declaration table transformation.
//!
//! This crate turns a freshly loaded, all-text declaration table into its
//! normalized form:
//!
//! - **rows**: removal of fully empty rows
//! - **headers**: localized header → canonical field name translation
//! - **normalization**: trimming, date/number parsing, null sentinels
//! - **coerce**: best-effort typing of the four typed columns
//! - **provenance**: source file name and processing timestamp columns
//! - **pipeline**: all of the above in their fixed order

pub mod coerce;
pub mod error;
pub mod headers;
pub mod normalization;
pub mod pipeline;
pub mod provenance;
pub mod rows;

pub use coerce::{CoercionReport, coerce_types};
pub use error::{Result, TransformError};
pub use headers::{HEADER_ALIASES, RenamedColumn, canonical_name, rename_columns};
pub use pipeline::{NormalizeReport, normalize_table};
pub use provenance::{
    ORIGINAL_FILE_NAME, ORIGINAL_FILE_PARSED_ON, Provenance, apply_provenance, file_base_name,
};
pub use rows::drop_empty_rows;
