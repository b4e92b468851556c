//! Analysis pipeline: load, extract, write.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use masto_ingest::{LoadOptions, read_dataset};
use masto_model::{Dataset, MissingColumnMode, ProcessOptions, TargetColumn};
use masto_normalization::{ColumnExtraction, ExtractError, extract_items_with_stats};
use masto_output::{ensure_output_dir, report_path, write_frequency_table};

use crate::logging::redact_value;
use crate::types::{AnalysisRun, ColumnResult};

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Load the input dataset.
pub fn ingest(input: &Path, options: &ProcessOptions) -> Result<Dataset> {
    let load_options = LoadOptions::default().with_detect_separator(options.detect_separator);
    read_dataset(input, &load_options)
        .with_context(|| format!("load dataset {}", input.display()))
}

/// Extract one target column.
///
/// Returns `Ok(None)` when the column is missing and `mode` is
/// [`MissingColumnMode::Skip`].
pub fn extract(
    dataset: &Dataset,
    column: TargetColumn,
    mode: MissingColumnMode,
) -> Result<Option<ColumnExtraction>> {
    match extract_items_with_stats(dataset, column.column_name()) {
        Ok(extraction) => Ok(Some(extraction)),
        Err(err @ ExtractError::ColumnNotFound { .. }) => match mode {
            MissingColumnMode::Abort => {
                Err(err).with_context(|| format!("analyze column {column}"))
            }
            MissingColumnMode::Skip => {
                warn!(column = %column, "column not found, skipping");
                Ok(None)
            }
        },
    }
}

/// Run the full analysis and write one report per target column.
///
/// Creates `output_dir` if needed. Reports are written in the order of
/// [`TargetColumn::ALL`]; a failure stops the run.
pub fn process_dataset(
    input: &Path,
    output_dir: &Path,
    options: &ProcessOptions,
) -> Result<AnalysisRun> {
    let span = info_span!("analysis", input = %input.display());
    let _guard = span.enter();

    ensure_output_dir(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;

    let ingest_start = Instant::now();
    let dataset = info_span!("ingest").in_scope(|| ingest(input, options))?;
    info!(
        rows = dataset.row_count(),
        columns = dataset.columns().len(),
        delimiter = %dataset.delimiter(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let mut run = AnalysisRun {
        input: input.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        delimiter: dataset.delimiter(),
        total_rows: dataset.row_count(),
        columns: Vec::new(),
        skipped_columns: Vec::new(),
    };

    for column in TargetColumn::ALL {
        let column_start = Instant::now();
        let extraction = info_span!("extract", column = %column)
            .in_scope(|| extract(&dataset, column, options.missing_column))?;
        let Some(ColumnExtraction { table, stats }) = extraction else {
            run.skipped_columns.push(column);
            continue;
        };
        if !stats.unmapped_labels.is_empty() {
            debug!(
                column = %column,
                unmapped = stats.unmapped_labels.len(),
                labels = redact_value(&stats.unmapped_labels.join(", ")),
                "labels without a normalization rule"
            );
        }

        let path = report_path(output_dir, column);
        info_span!("write", column = %column).in_scope(|| {
            write_frequency_table(&table, &path)
                .with_context(|| format!("write {} report", column.column_name()))
        })?;
        info!(
            column = %column,
            items = table.len(),
            tokens = stats.tokens,
            skipped_cells = stats.skipped_cells,
            output = %path.display(),
            duration_ms = column_start.elapsed().as_millis(),
            "column analyzed"
        );
        run.columns.push(ColumnResult {
            column,
            output_path: path,
            table,
            stats,
        });
    }

    Ok(run)
}
