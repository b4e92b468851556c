//! Integration tests for frequency report files.

use std::fs;

use masto_model::{FrequencyTable, TargetColumn};
use masto_output::{OutputError, report_path, write_frequency_table};
use tempfile::TempDir;

fn trigger_table() -> FrequencyTable {
    FrequencyTable::from_counts(
        "Symptom_Triggers",
        4,
        vec![("Stress", 2), ("Heat", 1), ("Food", 1)],
    )
}

#[test]
fn writes_report_and_creates_directories() {
    let dir = TempDir::new().expect("temp dir");
    let output_dir = dir.path().join("reports").join("run-1");
    let path = report_path(&output_dir, TargetColumn::SymptomTriggers);

    write_frequency_table(&trigger_table(), &path).expect("write report");

    assert!(path.ends_with("symptom_triggers_analysis.csv"));
    let contents = fs::read_to_string(&path).expect("read report");
    insta::assert_snapshot!(contents.trim_end(), @r"
    Item,Count,Percentage
    Stress,2,50.0
    Heat,1,25.0
    Food,1,25.0
    ");
}

#[test]
fn rewriting_is_byte_identical() {
    let dir = TempDir::new().expect("temp dir");
    let path = report_path(dir.path(), TargetColumn::CurrentTreatments);

    write_frequency_table(&trigger_table(), &path).expect("first write");
    let first = fs::read(&path).expect("read first");
    write_frequency_table(&trigger_table(), &path).expect("second write");
    let second = fs::read(&path).expect("read second");

    assert_eq!(first, second);
}

#[test]
fn unwritable_target_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    // A regular file where the parent directory should be.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").expect("write blocker");
    let path = blocker.join("report.csv");

    let err = write_frequency_table(&trigger_table(), &path).unwrap_err();

    assert!(matches!(err, OutputError::CreateDir { .. }), "{err}");
}
