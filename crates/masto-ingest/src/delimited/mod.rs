//! Delimited-file reading.

mod header;
mod reader;
mod sniff;

pub use header::{build_column_names, normalize_header};
pub use reader::{DEFAULT_MISSING_MARKERS, LoadOptions, parse_delimited, read_dataset};
pub use sniff::{SNIFF_CANDIDATES, SNIFF_SAMPLE_LINES, sniff_delimiter};
