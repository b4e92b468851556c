//! Patient dataset ingestion.
//!
//! Loads a delimited text file into a [`masto_model::Dataset`]. Files exported
//! from spreadsheets use either `;` or `,` as the field separator, so the
//! loader tries `;`, then `,`, and finally sniffs the delimiter from the first
//! lines of the file.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use masto_ingest::{LoadOptions, read_dataset};
//!
//! let dataset = read_dataset(Path::new("data/patients.csv"), &LoadOptions::default())?;
//! println!("{} rows, delimiter {}", dataset.row_count(), dataset.delimiter());
//! ```

mod delimited;
mod error;

// === Error Types ===
pub use error::{IngestError, ParseAttempt, ParseFailure, ParseStrategy, Result};

// === Dataset Reading ===
pub use delimited::{
    DEFAULT_MISSING_MARKERS, LoadOptions, SNIFF_CANDIDATES, SNIFF_SAMPLE_LINES,
    build_column_names, normalize_header, parse_delimited, read_dataset, sniff_delimiter,
};
