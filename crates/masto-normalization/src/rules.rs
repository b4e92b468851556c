//! Per-column vocabulary tables.
//!
//! Each table is an ordered list of `(lowercase raw key, canonical label)`
//! pairs. Order matters: prefix matching stops at the first key that matches.

use masto_model::TargetColumn;

/// Ordered, read-only mapping from lowercase raw tokens to canonical labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationTable {
    entries: &'static [(&'static str, &'static str)],
}

impl NormalizationTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Label for a key equal to `key`.
    pub fn exact(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(raw, _)| *raw == key)
            .map(|(_, label)| *label)
    }

    /// Label of the first key, in table order, that `key` starts with.
    pub fn prefix(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(raw, _)| key.starts_with(raw))
            .map(|(_, label)| *label)
    }

    /// Distinct canonical labels in first-defined order.
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = Vec::new();
        for (_, label) in self.entries {
            if !labels.contains(label) {
                labels.push(*label);
            }
        }
        labels
    }
}

pub static SYMPTOM_TRIGGERS: NormalizationTable = NormalizationTable::new(&[
    ("stress", "Stress"),
    ("heat", "Heat"),
    ("alcohol", "Alcohol"),
    ("food", "Food"),
    ("temperature changes", "Temperature changes"),
    ("temperature change", "Temperature changes"),
    ("temperature fluctuations", "Temperature changes"),
]);

pub static PRIMARY_SYMPTOMS: NormalizationTable = NormalizationTable::new(&[
    ("itching", "Itching"),
    ("flushing", "Flushing"),
    ("chronic fatigue", "Chronic fatigue"),
    ("digestive issues", "Digestive issues"),
    ("bone pain", "Bone pain"),
    ("digestive issues (diarrhea, nausea...)", "Digestive issues"),
    ("digestive issues (diarrhea, nausea)", "Digestive issues"),
]);

pub static CURRENT_TREATMENTS: NormalizationTable = NormalizationTable::new(&[
    ("antihistamine", "Antihistamines"),
    ("antihistamines", "Antihistamines"),
    ("corticosteroid", "Corticosteroids"),
    ("corticosteroids", "Corticosteroids"),
]);

/// Table used for columns without rules; every token falls through.
pub static EMPTY: NormalizationTable = NormalizationTable::new(&[]);

/// Rules for a target column.
pub fn rules_for(column: TargetColumn) -> &'static NormalizationTable {
    match column {
        TargetColumn::SymptomTriggers => &SYMPTOM_TRIGGERS,
        TargetColumn::PrimarySymptoms => &PRIMARY_SYMPTOMS,
        TargetColumn::CurrentTreatments => &CURRENT_TREATMENTS,
    }
}

/// Rules for a column by header name; unknown columns get the empty table.
pub fn normalization_table(column: &str) -> &'static NormalizationTable {
    TargetColumn::from_column_name(column).map_or(&EMPTY, rules_for)
}
