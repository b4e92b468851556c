//! `Item,Count,Percentage` CSV reports.

use std::fs;
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use tracing::debug;

use masto_model::{FrequencyTable, TargetColumn};

use crate::error::{OutputError, Result};

/// Header row of every frequency report.
pub const REPORT_HEADER: [&str; 3] = ["Item", "Count", "Percentage"];

/// Formats a percentage with exactly one decimal place.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}")
}

/// Encodes a frequency table as CSV bytes, records in table order.
pub fn encode_frequency_table(table: &FrequencyTable) -> std::result::Result<Vec<u8>, csv::Error> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(REPORT_HEADER)?;
    for record in table {
        writer.write_record([
            record.item.as_str(),
            record.count.to_string().as_str(),
            format_percentage(record.percentage).as_str(),
        ])?;
    }
    writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))
}

/// Ensure a parent directory exists for `path`.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Ensure the output directory exists.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Path of the report file for `column` inside `output_dir`.
pub fn report_path(output_dir: &Path, column: TargetColumn) -> PathBuf {
    output_dir.join(column.output_file_name())
}

/// Writes `table` to `path`, creating parent directories as needed.
///
/// An existing file is replaced.
pub fn write_frequency_table(table: &FrequencyTable, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let bytes = encode_frequency_table(table).map_err(|source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, &bytes).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        column = %table.column,
        records = table.len(),
        bytes = bytes.len(),
        "frequency report written"
    );
    Ok(())
}
