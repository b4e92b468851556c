//! In-memory tabular dataset loaded from a delimited file.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Literal cell value that marks a field as not applicable.
pub const NOT_APPLICABLE: &str = "N/A";

/// Raw value of a single cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// Builds a cell from a raw field; empty fields are `Missing`.
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(raw.to_string())
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value.as_str()),
            CellValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// True for cells that carry no items: missing values and the `N/A` sentinel.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Text(value) => value == NOT_APPLICABLE,
            CellValue::Missing => true,
        }
    }
}

/// Field delimiter a dataset was parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    Comma,
    Semicolon,
    Tab,
    Pipe,
    Colon,
    Space,
}

impl Delimiter {
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
            Delimiter::Tab => b'\t',
            Delimiter::Pipe => b'|',
            Delimiter::Colon => b':',
            Delimiter::Space => b' ',
        }
    }

    pub fn as_char(self) -> char {
        char::from(self.as_byte())
    }

    pub fn name(self) -> &'static str {
        match self {
            Delimiter::Comma => "comma",
            Delimiter::Semicolon => "semicolon",
            Delimiter::Tab => "tab",
            Delimiter::Pipe => "pipe",
            Delimiter::Colon => "colon",
            Delimiter::Space => "space",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered rows sharing one fixed set of column names.
///
/// Rows are stored positionally; every row has exactly one cell per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
    delimiter: Delimiter,
}

impl Dataset {
    pub fn new(columns: Vec<String>, delimiter: Delimiter) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            delimiter,
        }
    }

    /// Appends a row, padding short rows with `Missing`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::RowTooWide`] when the row has more cells than columns.
    pub fn push_row(&mut self, mut cells: Vec<CellValue>) -> Result<()> {
        let expected = self.columns.len();
        if cells.len() > expected {
            return Err(ModelError::RowTooWide {
                row: self.rows.len() + 1,
                expected,
                found: cells.len(),
            });
        }
        cells.resize(expected, CellValue::Missing);
        self.rows.push(cells);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cells of one column in row order, or `None` if the column does not exist.
    pub fn column_values(&self, name: &str) -> Option<impl Iterator<Item = &CellValue> + '_> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[index]))
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        self.rows.get(index).map(|cells| Row {
            columns: &self.columns,
            cells,
        })
    }
}

/// Borrowed view of one dataset row, addressable by column name.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [String],
    cells: &'a [CellValue],
}

impl<'a> Row<'a> {
    pub fn get(&self, column: &str) -> Option<&'a CellValue> {
        let index = self.columns.iter().position(|name| name == column)?;
        self.cells.get(index)
    }

    pub fn cells(&self) -> &'a [CellValue] {
        self.cells
    }
}
