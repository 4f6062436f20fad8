// ABOUTME: Integration tests for record CSV export and re-import
// ABOUTME: Exported files read back into the same measurements; derived columns are ignored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{at, caliper_measurement, date, init_test_logging, test_person, weigh_in};
use somatrack::errors::ImportError;
use somatrack::export::{export_filename, export_measurements_csv, record_header};
use somatrack::import::read_records;
use somatrack::models::Circumferences;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_exported_file_reads_back_identically() {
    init_test_logging();
    let person = test_person();
    let older = weigh_in(&person, at(2025, 4, 2, 7, 15), 71.4);
    let newer = caliper_measurement(&person, at(2025, 5, 20, 9, 0)).with_circumferences(
        Circumferences {
            waist_cm: Some(81.5),
            hip_cm: Some(97.0),
            ..Circumferences::default()
        },
    );

    let content = export_measurements_csv(&person, &[older.clone(), newer.clone()], date(2025, 6, 1))
        .unwrap()
        .unwrap();

    let dir = TempDir::new().unwrap();
    let path = dir
        .path()
        .join(export_filename(&person, at(2025, 6, 1, 9, 30)));
    fs::write(&path, &content).unwrap();
    assert!(path.ends_with("records_Ana_Ruiz_20250601_093000.csv"));

    let reread = read_records(&fs::read_to_string(&path).unwrap(), person.id).unwrap();
    assert!(reread.errors.is_empty());
    assert_eq!(reread.measurements, vec![newer, older]);
}

#[test]
fn test_export_includes_derived_columns() {
    let person = test_person();
    let content = export_measurements_csv(
        &person,
        &[caliper_measurement(&person, at(2025, 5, 20, 9, 0))],
        date(2025, 6, 1),
    )
    .unwrap()
    .unwrap();

    let mut lines = content.lines();
    let header: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(header.len(), record_header().len());
    let row: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(row[0], "2025-05-20 09:00:00");
    assert_eq!(&row[row.len() - 4..], &["68.6", "13", "25", "Very Good"]);
}

#[test]
fn test_empty_history_exports_nothing() {
    let person = test_person();
    assert_eq!(
        export_measurements_csv(&person, &[], date(2025, 6, 1)).unwrap(),
        None
    );
}

#[test]
fn test_bad_rows_are_reported_and_skipped() {
    init_test_logging();
    let person = test_person();
    let content = "\
recorded_at,weight_kg,height_m,bmi,triceps_1,triceps_2
2025-05-01 08:00:00,70,1.75,,6,7
01/05/2025,70,1.75,,,
2025-05-03,abc,1.75,,,
2025-05-04,70,1.75,,6,x
";
    let import = read_records(content, person.id).unwrap();

    assert_eq!(import.measurements.len(), 1);
    assert!((import.measurements[0].bmi - 22.86).abs() < f64::EPSILON);
    assert_eq!(
        import.errors,
        vec![
            ImportError::row_rejected(3, "invalid date format: 01/05/2025"),
            ImportError::row_rejected(4, "invalid number 'abc' in weight_kg"),
            ImportError::row_rejected(5, "invalid number 'x' in triceps_2"),
        ]
    );
}
