//! Dataset loading with delimiter fallback.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use masto_model::{CellValue, Dataset, Delimiter};

use crate::error::{IngestError, ParseAttempt, ParseFailure, ParseStrategy, Result};

use super::header::build_column_names;
use super::sniff::sniff_delimiter;

/// Field values loaded as `Missing`, in addition to empty fields.
pub const DEFAULT_MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options for [`read_dataset`].
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Try `;`, then `,`, then sniffing. When false only `,` is tried.
    pub detect_separator: bool,
    /// Exact field values treated as missing.
    pub missing_markers: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            detect_separator: true,
            missing_markers: DEFAULT_MISSING_MARKERS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl LoadOptions {
    #[must_use]
    pub fn with_detect_separator(mut self, enable: bool) -> Self {
        self.detect_separator = enable;
        self
    }

    #[must_use]
    pub fn with_missing_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    fn cell(&self, raw: &str) -> CellValue {
        if self.missing_markers.iter().any(|marker| marker == raw) {
            CellValue::Missing
        } else {
            CellValue::from_raw(raw)
        }
    }

    fn strategies(&self) -> &'static [ParseStrategy] {
        if self.detect_separator {
            &[
                ParseStrategy::Explicit(Delimiter::Semicolon),
                ParseStrategy::Explicit(Delimiter::Comma),
                ParseStrategy::Sniffed,
            ]
        } else {
            &[ParseStrategy::Explicit(Delimiter::Comma)]
        }
    }
}

/// Reads the whole file; the handle is closed when this returns.
fn read_file(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let mut contents = Vec::new();
    file.read_to_end(&mut contents)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(contents)
}

fn is_blank_record(record: &csv::StringRecord) -> bool {
    record.len() == 1 && record.get(0).is_some_and(str::is_empty)
}

/// Parses `contents` with one delimiter.
///
/// Records with more fields than the header are a structural failure; shorter
/// records are padded with `Missing`. Blank lines are skipped.
pub fn parse_delimited(
    contents: &[u8],
    delimiter: Delimiter,
    options: &LoadOptions,
) -> std::result::Result<Dataset, ParseFailure> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(true)
        .flexible(true)
        .from_reader(contents);
    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(ParseFailure::NoHeader);
    }
    let columns = build_column_names(headers.iter());
    let expected = columns.len();
    let mut dataset = Dataset::new(columns, delimiter);

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if is_blank_record(&record) {
            continue;
        }
        if record.len() > expected {
            return Err(ParseFailure::TooManyFields {
                record: index + 1,
                expected,
                found: record.len(),
            });
        }
        let cells: Vec<CellValue> = record.iter().map(|raw| options.cell(raw)).collect();
        dataset
            .push_row(cells)
            .map_err(|err| ParseFailure::Csv {
                message: err.to_string(),
            })?;
    }
    Ok(dataset)
}

/// Loads a delimited file into a [`Dataset`].
///
/// With separator detection enabled, `;` is tried first, then `,`, then a
/// sniffed delimiter; the first attempt that parses without a structural
/// error wins. A wrong delimiter that still parses (typically producing a
/// single wide column) is not detected.
///
/// # Errors
///
/// - [`IngestError::FileNotFound`] / [`IngestError::FileRead`] when the file
///   cannot be read.
/// - [`IngestError::Parse`] when every strategy failed, with one
///   [`ParseAttempt`] per strategy.
pub fn read_dataset(path: &Path, options: &LoadOptions) -> Result<Dataset> {
    let contents = read_file(path)?;
    let mut attempts = Vec::new();

    for &strategy in options.strategies() {
        let delimiter = match strategy {
            ParseStrategy::Explicit(delimiter) => delimiter,
            ParseStrategy::Sniffed => match sniff_delimiter(&contents) {
                Ok(delimiter) => delimiter,
                Err(failure) => {
                    debug!(path = %path.display(), %failure, "delimiter sniffing failed");
                    attempts.push(ParseAttempt {
                        strategy,
                        delimiter: None,
                        failure,
                    });
                    continue;
                }
            },
        };
        match parse_delimited(&contents, delimiter, options) {
            Ok(dataset) => {
                if !attempts.is_empty() {
                    debug!(
                        path = %path.display(),
                        failed_attempts = attempts.len(),
                        "earlier delimiter attempts failed"
                    );
                }
                debug!(
                    path = %path.display(),
                    %strategy,
                    %delimiter,
                    rows = dataset.row_count(),
                    columns = dataset.columns().len(),
                    "dataset loaded"
                );
                return Ok(dataset);
            }
            Err(failure) => {
                debug!(path = %path.display(), %strategy, %failure, "parse attempt failed");
                attempts.push(ParseAttempt {
                    strategy,
                    delimiter: Some(delimiter),
                    failure,
                });
            }
        }
    }

    warn!(
        path = %path.display(),
        attempts = attempts.len(),
        "all delimiter strategies failed"
    );
    Err(IngestError::Parse {
        path: path.to_path_buf(),
        attempts,
    })
}
