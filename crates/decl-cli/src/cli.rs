//! CLI argument definitions for the declaration converter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "decl2json",
    version,
    about = "Convert a customs declaration spreadsheet export to normalized JSON",
    long_about = "Convert a customs / production-industry declaration spreadsheet to JSON.\n\n\
                  Localized headers are translated to canonical field names, cells are\n\
                  trimmed, dates and quantities are typed, and every record is stamped\n\
                  with the source file name and processing time."
)]
pub struct Cli {
    /// Spreadsheet export to convert (first worksheet, header in row 1).
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Existing directory that receives `<INPUT_FILE name>.json`.
    #[arg(value_name = "OUTPUT_FOLDER")]
    pub output_folder: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
