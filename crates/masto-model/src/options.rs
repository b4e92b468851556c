//! Configuration options for dataset processing.

use serde::{Deserialize, Serialize};

/// What to do when a target column is absent from the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissingColumnMode {
    /// Fail the whole run.
    #[default]
    Abort,
    /// Log a warning and produce no report for that column.
    Skip,
}

/// Options controlling a processing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOptions {
    /// Try `;`, then `,`, then delimiter sniffing. When false only `,` is used.
    pub detect_separator: bool,

    /// Handling of target columns missing from the input header.
    pub missing_column: MissingColumnMode,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            detect_separator: true,
            missing_column: MissingColumnMode::Abort,
        }
    }
}

impl ProcessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_detect_separator(mut self, enable: bool) -> Self {
        self.detect_separator = enable;
        self
    }

    #[must_use]
    pub fn with_missing_column(mut self, mode: MissingColumnMode) -> Self {
        self.missing_column = mode;
        self
    }
}
