//! CLI argument definitions for the triage tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "colo-triage",
    version,
    about = "Colonoscopy surveillance triage - recommend follow-up intervals",
    long_about = "Recommend a colonoscopy surveillance interval from structured\n\
                  findings of a colonoscopy and its histology, following a published\n\
                  guideline encoded as an ordered decision table.\n\n\
                  A follow-up of 0 years means the record needs human review;\n\
                  20 years means the patient aged out of surveillance."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow record content (PHI) to appear in logs.
    ///
    /// By default every logged record value is replaced with [REDACTED].
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Triage a structured colonoscopy record and print the recommendation.
    Triage(TriageArgs),

    /// List the surveillance rule registry.
    Rules,
}

#[derive(Parser)]
pub struct TriageArgs {
    /// Path to the structured record JSON, or '-' to read from stdin.
    #[arg(value_name = "RECORD")]
    pub record: PathBuf,

    /// Write the outcome payload as JSON to this path.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the outcome payload as JSON to stdout instead of a table.
    #[arg(long = "json")]
    pub json: bool,
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
