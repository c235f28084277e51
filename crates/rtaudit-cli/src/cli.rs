//! CLI argument definitions for the modality audit.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rtaudit",
    version,
    about = "Audit a radiotherapy export for missing imaging modalities",
    long_about = "Parse a tab-delimited imaging study export, group records by \
                  patient URN and group number, and report every group that is \
                  missing one of the required modalities.\n\n\
                  The default required set is CT, RTSTRUCT, RTPLAN, RTDOSE."
)]
pub struct Cli {
    /// Path to the tab-delimited export file.
    #[arg(value_name = "EXPORT_FILE")]
    pub export_file: PathBuf,

    /// Required modality (repeatable). Replaces the default set entirely.
    #[arg(long = "required-modality", value_name = "MODALITY")]
    pub required_modalities: Vec<String>,

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

    /// Allow patient identifiers (URNs) to appear in log output.
    #[arg(long = "log-data")]
    pub log_data: bool,
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
