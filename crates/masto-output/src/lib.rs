//! Report writing for item frequency tables.
//!
//! Each table is persisted as a CSV file with header `Item,Count,Percentage`,
//! one row per label in table order.

mod csv_report;
mod error;

pub use csv_report::{
    REPORT_HEADER, encode_frequency_table, ensure_output_dir, ensure_parent_dir,
    format_percentage, report_path, write_frequency_table,
};
pub use error::{OutputError, Result};
