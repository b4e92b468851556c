use std::fs;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::info;

use masto_cli::pipeline::process_dataset;
use masto_cli::types::AnalysisRun;
use masto_model::{MissingColumnMode, ProcessOptions, TargetColumn};
use masto_normalization::rules_for;
use masto_output::ensure_parent_dir;

use crate::cli::{AnalyzeArgs, RulesArgs};
use crate::summary::apply_table_style;

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalysisRun> {
    let options = ProcessOptions::default()
        .with_detect_separator(!args.no_detect_separator)
        .with_missing_column(if args.skip_missing_columns {
            MissingColumnMode::Skip
        } else {
            MissingColumnMode::Abort
        });
    let run = process_dataset(&args.input, &args.output_dir, &options)?;

    if let Some(path) = &args.report_json {
        ensure_parent_dir(path)
            .with_context(|| format!("create directory for {}", path.display()))?;
        let json = serde_json::to_string_pretty(&run).context("serialize run report")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "json report written");
    }

    Ok(run)
}

pub fn run_rules(args: &RulesArgs) -> Result<()> {
    let columns = match &args.column {
        Some(name) => match TargetColumn::from_column_name(name) {
            Some(column) => vec![column],
            None => {
                let known: Vec<&str> = TargetColumn::ALL
                    .iter()
                    .map(|column| column.column_name())
                    .collect();
                bail!("unknown column '{name}' (known: {})", known.join(", "));
            }
        },
        None => TargetColumn::ALL.to_vec(),
    };

    for (index, column) in columns.into_iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{} ({}):", column.column_name(), column.description());
        let mut table = Table::new();
        table.set_header(vec!["Key", "Label"]);
        apply_table_style(&mut table);
        let rules = rules_for(column);
        for (key, label) in rules.entries() {
            table.add_row(vec![*key, *label]);
        }
        println!("{table}");
        println!("Labels: {}", rules.labels().join(", "));
    }
    println!();
    println!("Keys match exactly, then as prefixes in table order; other tokens are capitalized.");
    Ok(())
}
