use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use masto_model::{Delimiter, FrequencyTable, TargetColumn};
use masto_normalization::ExtractionStats;

/// Outcome of one processed column.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnResult {
    pub column: TargetColumn,
    pub output_path: PathBuf,
    pub table: FrequencyTable,
    pub stats: ExtractionStats,
}

/// Outcome of a full analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRun {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub delimiter: Delimiter,
    pub total_rows: usize,
    pub columns: Vec<ColumnResult>,
    /// Target columns absent from the input and skipped.
    pub skipped_columns: Vec<TargetColumn>,
}

impl AnalysisRun {
    /// Written report path per processed column.
    pub fn outputs(&self) -> BTreeMap<TargetColumn, PathBuf> {
        self.columns
            .iter()
            .map(|result| (result.column, result.output_path.clone()))
            .collect()
    }

    /// True when every target column produced a report.
    pub fn is_complete(&self) -> bool {
        self.skipped_columns.is_empty()
    }

    pub fn column(&self, column: TargetColumn) -> Option<&ColumnResult> {
        self.columns.iter().find(|result| result.column == column)
    }
}
