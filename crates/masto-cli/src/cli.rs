//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use masto_cli::DEFAULT_OUTPUT_DIR;

#[derive(Parser)]
#[command(
    name = "masto-analysis",
    version,
    about = "Frequency analysis of mastocytosis patient-reported attributes",
    long_about = "Normalize free-text symptom triggers, primary symptoms and current\n\
                  treatments from a patient CSV and write one frequency report per\n\
                  column (Item, Count, Percentage of patients)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Allow patient-entered values (tokens, labels) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a patient dataset and write frequency reports.
    Analyze(AnalyzeArgs),

    /// Print the normalization rules.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the patient CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory for the generated reports (created if missing).
    #[arg(long = "output-dir", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Parse with `,` only instead of trying `;`, `,` and sniffing.
    #[arg(long = "no-detect-separator")]
    pub no_detect_separator: bool,

    /// Skip target columns missing from the input instead of failing.
    #[arg(long = "skip-missing-columns")]
    pub skip_missing_columns: bool,

    /// Also write a JSON report of the run to this path.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Do not print the summary tables.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// Only print rules for this column (e.g. Symptom_Triggers).
    #[arg(value_name = "COLUMN")]
    pub column: Option<String>,
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
