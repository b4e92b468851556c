//! Dataset columns that the analysis reports on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Multi-valued patient-attribute columns with a frequency report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TargetColumn {
    #[serde(rename = "Symptom_Triggers")]
    SymptomTriggers,
    #[serde(rename = "Primary_Symptoms")]
    PrimarySymptoms,
    #[serde(rename = "Current_Treatments")]
    CurrentTreatments,
}

impl TargetColumn {
    /// All target columns in processing order.
    pub const ALL: [TargetColumn; 3] = [
        TargetColumn::SymptomTriggers,
        TargetColumn::PrimarySymptoms,
        TargetColumn::CurrentTreatments,
    ];

    /// Header name of the column in the input file.
    pub fn column_name(self) -> &'static str {
        match self {
            TargetColumn::SymptomTriggers => "Symptom_Triggers",
            TargetColumn::PrimarySymptoms => "Primary_Symptoms",
            TargetColumn::CurrentTreatments => "Current_Treatments",
        }
    }

    /// File name of the frequency report written for this column.
    pub fn output_file_name(self) -> &'static str {
        match self {
            TargetColumn::SymptomTriggers => "symptom_triggers_analysis.csv",
            TargetColumn::PrimarySymptoms => "clinical_symptoms_analysis.csv",
            TargetColumn::CurrentTreatments => "treatment_modalities_analysis.csv",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TargetColumn::SymptomTriggers => "Symptom triggers",
            TargetColumn::PrimarySymptoms => "Clinical symptoms",
            TargetColumn::CurrentTreatments => "Treatment modalities",
        }
    }

    pub fn from_column_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|column| column.column_name() == name)
    }
}

impl fmt::Display for TargetColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}
