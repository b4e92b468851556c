//! Integration tests for the analysis pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use masto_cli::pipeline::process_dataset;
use masto_model::{Delimiter, MissingColumnMode, ProcessOptions, TargetColumn};
use masto_normalization::ExtractError;
use tempfile::TempDir;

const PATIENTS: &str = "\
Patient_ID;Age;Symptom_Triggers;Primary_Symptoms;Current_Treatments
1;34;stress, heat;Itching, flushing;antihistamine
2;51;N/A;digestive issues (diarrhea);Antihistamines, corticosteroid
3;29;Food;bone pain, itching;
4;45;stress;Chronic fatigue;cromolyn
";

fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write input");
    path
}

fn read_report(dir: &Path, column: TargetColumn) -> String {
    fs::read_to_string(dir.join(column.output_file_name())).expect("read report")
}

#[test]
fn writes_one_report_per_target_column() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(dir.path(), "patients.csv", PATIENTS);
    let output_dir = dir.path().join("out");

    let run = process_dataset(&input, &output_dir, &ProcessOptions::default()).expect("run");

    assert_eq!(run.total_rows, 4);
    assert_eq!(run.delimiter, Delimiter::Semicolon);
    assert!(run.skipped_columns.is_empty());
    assert!(run.is_complete());
    let outputs = run.outputs();
    assert_eq!(outputs.len(), 3);
    assert_eq!(
        outputs[&TargetColumn::SymptomTriggers],
        output_dir.join("symptom_triggers_analysis.csv")
    );
    assert_eq!(
        outputs[&TargetColumn::PrimarySymptoms],
        output_dir.join("clinical_symptoms_analysis.csv")
    );
    assert_eq!(
        outputs[&TargetColumn::CurrentTreatments],
        output_dir.join("treatment_modalities_analysis.csv")
    );
    for path in outputs.values() {
        assert!(path.is_file(), "missing {}", path.display());
    }
}

#[test]
fn symptom_triggers_report() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(dir.path(), "patients.csv", PATIENTS);

    process_dataset(&input, dir.path(), &ProcessOptions::default()).expect("run");

    insta::assert_snapshot!(read_report(dir.path(), TargetColumn::SymptomTriggers).trim_end(), @r"
    Item,Count,Percentage
    Stress,2,50.0
    Heat,1,25.0
    Food,1,25.0
    ");
}

#[test]
fn clinical_symptoms_report() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(dir.path(), "patients.csv", PATIENTS);

    process_dataset(&input, dir.path(), &ProcessOptions::default()).expect("run");

    insta::assert_snapshot!(read_report(dir.path(), TargetColumn::PrimarySymptoms).trim_end(), @r"
    Item,Count,Percentage
    Itching,2,50.0
    Flushing,1,25.0
    Digestive issues,1,25.0
    Bone pain,1,25.0
    Chronic fatigue,1,25.0
    ");
}

#[test]
fn treatment_modalities_report() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(dir.path(), "patients.csv", PATIENTS);

    let run = process_dataset(&input, dir.path(), &ProcessOptions::default()).expect("run");

    insta::assert_snapshot!(read_report(dir.path(), TargetColumn::CurrentTreatments).trim_end(), @r"
    Item,Count,Percentage
    Antihistamines,2,50.0
    Corticosteroids,1,25.0
    Cromolyn,1,25.0
    ");
    let treatments = run
        .column(TargetColumn::CurrentTreatments)
        .expect("treatments result");
    assert_eq!(treatments.stats.skipped_cells, 1);
    assert_eq!(treatments.stats.fallbacks, 1);
    assert_eq!(treatments.stats.unmapped_labels, vec!["Cromolyn".to_string()]);
}

#[test]
fn percentages_use_all_rows_as_denominator() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(
        dir.path(),
        "patients.csv",
        "Symptom_Triggers;Primary_Symptoms;Current_Treatments\n\
         heat;itching;\n\
         ;;\n\
         temperature change;flushing;antihistamines\n",
    );

    let run = process_dataset(&input, dir.path(), &ProcessOptions::default()).expect("run");

    let triggers = &run
        .column(TargetColumn::SymptomTriggers)
        .expect("triggers result")
        .table;
    assert_eq!(triggers.total_rows, 3);
    let percentages: Vec<f64> = triggers.iter().map(|record| record.percentage).collect();
    assert_eq!(percentages, vec![33.3, 33.3]);
    assert_eq!(
        read_report(dir.path(), TargetColumn::SymptomTriggers),
        "Item,Count,Percentage\nHeat,1,33.3\nTemperature changes,1,33.3\n"
    );
}

#[test]
fn rerunning_produces_identical_files() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(dir.path(), "patients.csv", PATIENTS);
    let output_dir = dir.path().join("out");

    let first = process_dataset(&input, &output_dir, &ProcessOptions::default()).expect("run");
    let before: Vec<Vec<u8>> = first
        .outputs()
        .values()
        .map(|path| fs::read(path).expect("read"))
        .collect();
    let second = process_dataset(&input, &output_dir, &ProcessOptions::default()).expect("rerun");
    let after: Vec<Vec<u8>> = second
        .outputs()
        .values()
        .map(|path| fs::read(path).expect("read"))
        .collect();

    assert_eq!(before, after);
}

#[test]
fn missing_column_aborts_by_default() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(
        dir.path(),
        "patients.csv",
        "Patient_ID;Symptom_Triggers;Current_Treatments\n1;stress;antihistamine\n",
    );

    let err = process_dataset(&input, dir.path(), &ProcessOptions::default()).unwrap_err();

    let extract = err
        .downcast_ref::<ExtractError>()
        .expect("column lookup error");
    match extract {
        ExtractError::ColumnNotFound { column, .. } => assert_eq!(column, "Primary_Symptoms"),
    }
    // Columns before the missing one were already written.
    assert!(
        dir.path()
            .join(TargetColumn::SymptomTriggers.output_file_name())
            .is_file()
    );
    assert!(
        !dir.path()
            .join(TargetColumn::CurrentTreatments.output_file_name())
            .exists()
    );
}

#[test]
fn missing_column_can_be_skipped() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(
        dir.path(),
        "patients.csv",
        "Patient_ID;Symptom_Triggers;Current_Treatments\n1;stress;antihistamine\n",
    );
    let options = ProcessOptions::default().with_missing_column(MissingColumnMode::Skip);

    let run = process_dataset(&input, dir.path(), &options).expect("run");

    assert_eq!(run.skipped_columns, vec![TargetColumn::PrimarySymptoms]);
    assert!(!run.is_complete());
    assert_eq!(run.columns.len(), 2);
    assert!(
        !dir.path()
            .join(TargetColumn::PrimarySymptoms.output_file_name())
            .exists()
    );
}

#[test]
fn comma_file_without_separator_detection() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(
        dir.path(),
        "patients.csv",
        "Symptom_Triggers,Primary_Symptoms,Current_Treatments\n\
         \"stress, alcohol\",itching,antihistamine\n",
    );
    let options = ProcessOptions::default().with_detect_separator(false);

    let run = process_dataset(&input, dir.path(), &options).expect("run");

    assert_eq!(run.delimiter, Delimiter::Comma);
    assert_eq!(
        read_report(dir.path(), TargetColumn::SymptomTriggers),
        "Item,Count,Percentage\nStress,1,100.0\nAlcohol,1,100.0\n"
    );
}

#[test]
fn comma_file_with_detection_reads_as_one_column() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(
        dir.path(),
        "patients.csv",
        "Symptom_Triggers,Primary_Symptoms,Current_Treatments\nstress,itching,antihistamine\n",
    );

    let err = process_dataset(&input, dir.path(), &ProcessOptions::default()).unwrap_err();

    assert!(err.downcast_ref::<ExtractError>().is_some(), "{err:#}");
}

#[test]
fn missing_input_is_reported() {
    let dir = TempDir::new().expect("temp dir");

    let err = process_dataset(
        &dir.path().join("absent.csv"),
        dir.path(),
        &ProcessOptions::default(),
    )
    .unwrap_err();

    assert!(
        matches!(
            err.downcast_ref::<masto_ingest::IngestError>(),
            Some(masto_ingest::IngestError::FileNotFound { .. })
        ),
        "{err:#}"
    );
}

#[test]
fn run_serializes_to_json() {
    let dir = TempDir::new().expect("temp dir");
    let input = write_input(dir.path(), "patients.csv", PATIENTS);

    let run = process_dataset(&input, dir.path(), &ProcessOptions::default()).expect("run");
    let json = serde_json::to_value(&run).expect("serialize");

    assert_eq!(json["total_rows"], 4);
    assert_eq!(json["columns"][0]["column"], "Symptom_Triggers");
    assert_eq!(json["columns"][0]["table"]["records"][0]["item"], "Stress");
    assert_eq!(json["columns"][0]["table"]["records"][0]["percentage"], 50.0);
}
