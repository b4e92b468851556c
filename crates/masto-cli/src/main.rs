//! Mastocytosis attribute analysis CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use masto_cli::logging::{LogConfig, LogFormat, init_logging};
use masto_cli::types::AnalysisRun;
use tracing::level_filters::LevelFilter;
use tracing::warn;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_analyze, run_rules};
use crate::summary::print_summary;

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;
/// Reports were written but some target columns were skipped.
const EXIT_INCOMPLETE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::from(EXIT_FAILURE);
    }
    match dispatch(cli.command) {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn dispatch(command: Command) -> Result<u8> {
    match command {
        Command::Analyze(args) => {
            let run = run_analyze(&args)?;
            if !args.no_summary {
                print_summary(&run);
            }
            Ok(analyze_exit_code(&run))
        }
        Command::Rules(args) => {
            run_rules(&args)?;
            Ok(EXIT_SUCCESS)
        }
    }
}

fn analyze_exit_code(run: &AnalysisRun) -> u8 {
    if run.is_complete() {
        return EXIT_SUCCESS;
    }
    warn!(
        skipped = run.skipped_columns.len(),
        "analysis incomplete, target columns were skipped"
    );
    EXIT_INCOMPLETE
}

/// Map CLI flags onto a [`LogConfig`].
///
/// `--log-level` beats `-v`/`-q`; either one disables the `RUST_LOG` override.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    let mut config = LogConfig::default()
        .with_level(level_filter)
        .with_target(level_filter >= LevelFilter::DEBUG)
        .with_timestamps(cli.log_timestamps)
        .with_format(format)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
        .with_log_data(cli.log_data);
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use masto_model::{Delimiter, TargetColumn};

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("parse args")
    }

    fn run_with_skipped(skipped_columns: Vec<TargetColumn>) -> AnalysisRun {
        AnalysisRun {
            input: PathBuf::from("patients.csv"),
            output_dir: PathBuf::from("."),
            delimiter: Delimiter::Semicolon,
            total_rows: 0,
            columns: Vec::new(),
            skipped_columns,
        }
    }

    #[test]
    fn default_flags_defer_to_rust_log() {
        let config = log_config_from_cli(&parse(&["masto-analysis", "rules"]));
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert!(!config.with_target);
        assert!(!config.with_timestamps);
        assert!(!config.log_data);
    }

    #[test]
    fn debug_verbosity_shows_targets() {
        let config = log_config_from_cli(&parse(&[
            "masto-analysis",
            "-vv",
            "--log-timestamps",
            "--log-format",
            "compact",
            "rules",
        ]));
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert!(config.with_target);
        assert!(config.with_timestamps);
        assert_eq!(config.format, LogFormat::Compact);
    }

    #[test]
    fn explicit_level_wins_over_verbosity() {
        let config = log_config_from_cli(&parse(&[
            "masto-analysis",
            "-vv",
            "--log-level",
            "error",
            "--log-data",
            "rules",
        ]));
        assert_eq!(config.level_filter, LevelFilter::ERROR);
        assert!(!config.with_target);
        assert!(config.log_data);
    }

    #[test]
    fn skipped_columns_give_incomplete_exit_code() {
        assert_eq!(analyze_exit_code(&run_with_skipped(Vec::new())), EXIT_SUCCESS);
        assert_eq!(
            analyze_exit_code(&run_with_skipped(vec![TargetColumn::PrimarySymptoms])),
            EXIT_INCOMPLETE
        );
    }
}
