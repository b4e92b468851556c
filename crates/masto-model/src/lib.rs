//! Data model for mastocytosis patient-attribute frequency analysis.

pub mod column;
pub mod dataset;
pub mod error;
pub mod frequency;
pub mod options;

pub use column::TargetColumn;
pub use dataset::{CellValue, Dataset, Delimiter, NOT_APPLICABLE, Row};
pub use error::{ModelError, Result};
pub use frequency::{FrequencyRecord, FrequencyTable, percentage_of, round_one_decimal};
pub use options::{MissingColumnMode, ProcessOptions};
