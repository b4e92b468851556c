//! Error types for dataset ingestion.

use std::fmt;
use std::path::PathBuf;

use masto_model::Delimiter;
use thiserror::Error;

/// Way a parse attempt chose its delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStrategy {
    /// A fixed, caller-chosen delimiter.
    Explicit(Delimiter),
    /// A delimiter inferred from the file contents.
    Sniffed,
}

impl fmt::Display for ParseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStrategy::Explicit(delimiter) => write!(f, "{delimiter}"),
            ParseStrategy::Sniffed => f.write_str("sniffed"),
        }
    }
}

/// Why a single parse attempt did not produce a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("no header record")]
    NoHeader,

    #[error("record {record} has {found} fields, expected {expected}")]
    TooManyFields {
        record: usize,
        expected: usize,
        found: usize,
    },

    #[error("no consistent delimiter among {candidates} candidates")]
    NoConsistentDelimiter { candidates: usize },

    #[error("{message}")]
    Csv { message: String },
}

impl From<csv::Error> for ParseFailure {
    fn from(err: csv::Error) -> Self {
        Self::Csv {
            message: err.to_string(),
        }
    }
}

/// One failed strategy, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAttempt {
    pub strategy: ParseStrategy,
    /// Delimiter actually used; `None` when sniffing found none.
    pub delimiter: Option<Delimiter>,
    pub failure: ParseFailure,
}

impl fmt::Display for ParseAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.strategy, self.delimiter) {
            (ParseStrategy::Sniffed, Some(delimiter)) => {
                write!(f, "sniffed {delimiter}: {}", self.failure)
            }
            (strategy, _) => write!(f, "{strategy}: {}", self.failure),
        }
    }
}

fn format_attempts(attempts: &[ParseAttempt]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input file could not be read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every delimiter strategy failed.
    #[error("failed to parse {}: {}", .path.display(), format_attempts(.attempts))]
    Parse {
        path: PathBuf,
        attempts: Vec<ParseAttempt>,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
