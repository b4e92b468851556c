//! Per-column item frequency tables.

use serde::{Deserialize, Serialize};

/// Rounds to one decimal place, ties to even on the exact binary value.
///
/// Formatting with a fixed precision performs correctly rounded decimal
/// conversion, so parsing it back yields the nearest one-decimal float.
pub fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Share of `total_rows` represented by `count`, in percent, rounded to one decimal.
pub fn percentage_of(count: usize, total_rows: usize) -> f64 {
    if total_rows == 0 {
        return 0.0;
    }
    round_one_decimal(count as f64 / total_rows as f64 * 100.0)
}

/// One normalized label with its occurrence count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyRecord {
    pub item: String,
    pub count: usize,
    pub percentage: f64,
}

impl FrequencyRecord {
    pub fn new(item: impl Into<String>, count: usize, total_rows: usize) -> Self {
        Self {
            item: item.into(),
            count,
            percentage: percentage_of(count, total_rows),
        }
    }
}

/// Frequency records for one column, sorted by count descending.
///
/// Records with equal counts keep the order in which their labels were first
/// encountered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    pub column: String,
    pub total_rows: usize,
    pub records: Vec<FrequencyRecord>,
}

impl FrequencyTable {
    /// Builds a table from `(label, count)` pairs given in first-seen order.
    pub fn from_counts<I, S>(column: impl Into<String>, total_rows: usize, counts: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let mut records: Vec<FrequencyRecord> = counts
            .into_iter()
            .map(|(item, count)| FrequencyRecord::new(item, count, total_rows))
            .collect();
        // Stable: equal counts stay in first-seen order.
        records.sort_by(|a, b| b.count.cmp(&a.count));
        Self {
            column: column.into(),
            total_rows,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all record counts.
    pub fn total_items(&self) -> usize {
        self.records.iter().map(|record| record.count).sum()
    }

    pub fn get(&self, item: &str) -> Option<&FrequencyRecord> {
        self.records.iter().find(|record| record.item == item)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyRecord;
    type IntoIter = std::slice::Iter<'a, FrequencyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
