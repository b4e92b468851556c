//! Library components of the mastocytosis frequency analysis CLI.

pub mod logging;
pub mod pipeline;
pub mod types;

pub use pipeline::{DEFAULT_OUTPUT_DIR, process_dataset};
pub use types::{AnalysisRun, ColumnResult};
