//! CLI argument definitions for the recast tool.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "recast",
    version,
    about = "Recast delimited data through a declarative per-column transform mapping",
    long_about = "Apply a JSON-configured sequence of per-column operations (string\n\
                  cleanup, numeric casting, date reformatting, validation checks) to a\n\
                  delimited input file, then project and rename the configured columns\n\
                  into a new delimited output file."
)]
pub struct Cli {
    /// Path to the delimited input file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to the JSON mapping configuration.
    #[arg(long = "config", value_name = "PATH", default_value = "config.json")]
    pub config: PathBuf,

    /// Output file path (default: `<input stem>_out.txt` beside the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Override the configured input field delimiter.
    #[arg(long = "input-delimiter", value_name = "CHAR")]
    pub input_delimiter: Option<char>,

    /// Override the configured output field delimiter.
    #[arg(long = "output-delimiter", value_name = "CHAR")]
    pub output_delimiter: Option<char>,

    /// Process and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit non-zero when data-quality findings are reported.
    ///
    /// Findings never block the output file; by default the tool writes the
    /// result and exits 0 even when the quality report is non-empty.
    #[arg(long = "fail-on-findings")]
    pub fail_on_findings: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
