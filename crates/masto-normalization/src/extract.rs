//! Decomposition of multi-valued columns into item frequencies.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use masto_model::{CellValue, Dataset, FrequencyTable};

use crate::error::{ExtractError, Result};
use crate::rules::{NormalizationTable, normalization_table};
use crate::token::{MatchRule, normalize_token, split_items};

/// Multiset of labels that remembers first-seen order.
#[derive(Debug, Default)]
struct ItemCounter {
    index: HashMap<String, usize>,
    counts: Vec<(String, usize)>,
}

impl ItemCounter {
    fn add(&mut self, label: String) {
        if let Some(&slot) = self.index.get(&label) {
            self.counts[slot].1 += 1;
        } else {
            self.index.insert(label.clone(), self.counts.len());
            self.counts.push((label, 1));
        }
    }

    fn into_counts(self) -> Vec<(String, usize)> {
        self.counts
    }
}

/// Counters gathered while extracting one column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// Rows in the dataset, including rows whose cell was skipped.
    pub total_rows: usize,
    /// Cells that were missing or `N/A`.
    pub skipped_cells: usize,
    /// Tokens extracted from non-skipped cells.
    pub tokens: usize,
    pub exact_matches: usize,
    pub prefix_matches: usize,
    pub fallbacks: usize,
    /// Distinct labels produced by the fallback rule, in first-seen order.
    pub unmapped_labels: Vec<String>,
}

impl ExtractionStats {
    fn record(&mut self, rule: MatchRule, label: &str) {
        self.tokens += 1;
        match rule {
            MatchRule::Exact => self.exact_matches += 1,
            MatchRule::Prefix => self.prefix_matches += 1,
            MatchRule::Fallback => {
                self.fallbacks += 1;
                if !self.unmapped_labels.iter().any(|seen| seen == label) {
                    self.unmapped_labels.push(label.to_string());
                }
            }
        }
    }
}

/// Frequency table of one column together with its extraction counters.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnExtraction {
    pub table: FrequencyTable,
    pub stats: ExtractionStats,
}

/// Extracts items from `column` using `table` for normalization.
///
/// # Errors
///
/// Returns [`ExtractError::ColumnNotFound`] when the dataset has no such column.
pub fn extract_with_table(
    dataset: &Dataset,
    column: &str,
    table: &NormalizationTable,
) -> Result<ColumnExtraction> {
    let values = dataset
        .column_values(column)
        .ok_or_else(|| ExtractError::ColumnNotFound {
            column: column.to_string(),
            available: dataset.columns().to_vec(),
        })?;

    let mut counter = ItemCounter::default();
    let mut stats = ExtractionStats {
        total_rows: dataset.row_count(),
        ..ExtractionStats::default()
    };
    for cell in values {
        if cell.is_blank() {
            stats.skipped_cells += 1;
            continue;
        }
        let CellValue::Text(text) = cell else {
            continue;
        };
        for token in split_items(text) {
            let normalized = normalize_token(table, token);
            stats.record(normalized.rule, &normalized.label);
            counter.add(normalized.label);
        }
    }

    let table = FrequencyTable::from_counts(column, stats.total_rows, counter.into_counts());
    debug!(
        column,
        rows = stats.total_rows,
        skipped = stats.skipped_cells,
        tokens = stats.tokens,
        distinct = table.len(),
        fallbacks = stats.fallbacks,
        "column extracted"
    );
    Ok(ColumnExtraction { table, stats })
}

/// Extracts items from `column` with the column's own normalization rules.
///
/// # Errors
///
/// Returns [`ExtractError::ColumnNotFound`] when the dataset has no such column.
pub fn extract_items_with_stats(dataset: &Dataset, column: &str) -> Result<ColumnExtraction> {
    extract_with_table(dataset, column, normalization_table(column))
}

/// Builds the frequency table of a multi-valued column.
///
/// Every non-blank cell is split on `,`, each trimmed token is normalized, and
/// labels are counted. Percentages are relative to the dataset's total row
/// count, so rows with blank cells still weigh in.
///
/// # Errors
///
/// Returns [`ExtractError::ColumnNotFound`] when the dataset has no such column.
pub fn extract_items(dataset: &Dataset, column: &str) -> Result<FrequencyTable> {
    extract_items_with_stats(dataset, column).map(|extraction| extraction.table)
}
