//! Integration tests for loading the dataset from disk

mod common;

use co2_dashboard::data::load_csv;
use co2_dashboard::{DashboardError, EmissionRecord, YearRange};
use common::builders::DatasetBuilder;

fn root_cause(err: &DashboardError) -> &DashboardError {
    match err {
        DashboardError::WithContext { source, .. } => root_cause(source),
        other => other,
    }
}

#[test]
fn test_load_generated_file() {
    let dir = tempfile::tempdir().unwrap();
    let builder = DatasetBuilder::new()
        .series("USA", 1990..=1999, 19.0, 0.1)
        .series("China", 1990..=1999, 2.0, 0.3);
    let path = common::write_file(&dir, "co2.csv", &builder.to_csv());

    let (ds, report) = load_csv(&path).unwrap();

    assert_eq!(ds.len(), 20);
    assert_eq!(report.rows_read, 20);
    assert_eq!(report.duplicate_keys, 0);
    assert_eq!(ds.year_bounds(), Some(YearRange::new(1990, 1999)));
    assert_eq!(ds.countries(), &["USA".to_string(), "China".to_string()]);
    common::assert_float_eq(ds.records()[19].co2_per_capita, 2.0 + 0.3 * 9.0, 1e-9);
}

#[test]
fn test_missing_file_error_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_csv(dir.path().join("absent.csv")).unwrap_err();

    assert!(err.to_string().contains("absent.csv"));
    assert!(matches!(root_cause(&err), DashboardError::Io(_)));
}

#[test]
fn test_missing_column_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_file(&dir, "co2.csv", "country,year,co2\nUSA,2000,20.1\n");

    let err = load_csv(&path).unwrap_err();
    assert!(matches!(
        root_cause(&err),
        DashboardError::MissingColumn("co2_per_capita")
    ));
}

#[test]
fn test_bad_value_reports_line() {
    let dir = tempfile::tempdir().unwrap();
    let body = format!("{}\nUSA,2000,20.1\nUSA,2001,lots\n", common::CSV_HEADER);
    let path = common::write_file(&dir, "co2.csv", &body);

    let err = load_csv(&path).unwrap_err();
    match root_cause(&err) {
        DashboardError::InvalidRecord { line, .. } => assert_eq!(*line, 3),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_gaps_and_duplicates_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let body = format!(
        "{}\nUSA,2000,20.1\nUSA,2001,\nUSA,2000,20.2\nChina,2010,6.2\n",
        common::CSV_HEADER
    );
    let path = common::write_file(&dir, "co2.csv", &body);

    let (ds, report) = load_csv(&path).unwrap();
    assert_eq!(report.rows_read, 4);
    assert_eq!(report.skipped_missing, 1);
    assert_eq!(report.duplicate_keys, 1);
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.records()[2], EmissionRecord::new("China", 2010, 6.2));
}
