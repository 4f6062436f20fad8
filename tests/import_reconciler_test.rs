// ABOUTME: Integration tests for scale-export import reconciliation
// ABOUTME: Duplicate suppression, idempotent re-imports and batch preconditions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{at, init_test_logging, test_person, weigh_in};
use somatrack::config::ImportConfig;
use somatrack::errors::{AppError, ErrorCode, ImportError};
use somatrack::import::{import_scale_export, reconcile, ImportSummary, WeighIn};
use somatrack::models::Person;
use somatrack::store::{InMemoryMeasurementStore, MeasurementStore};

const EXPORT: &str = "\
Hora,Peso,Cambio,IMC
 22 Sep 2025,,,
10:12 am,98.7 kg,--,22.3
6:40 pm,98.2 kg,--,--
";

fn import_error(error: &AppError) -> Option<&ImportError> {
    error
        .source
        .as_ref()
        .and_then(|source| source.downcast_ref::<ImportError>())
}

#[test]
fn test_existing_timestamp_is_a_duplicate() {
    init_test_logging();
    let person = test_person();
    let mut store = InMemoryMeasurementStore::from_measurements(vec![weigh_in(
        &person,
        at(2025, 9, 22, 10, 12),
        98.7,
    )]);
    let batch = [WeighIn {
        recorded_at: at(2025, 9, 22, 10, 12),
        weight_kg: 98.7,
        bmi: Some(22.3),
    }];

    let summary = reconcile(&person, &batch, &mut store).unwrap();

    assert_eq!(
        summary,
        ImportSummary {
            created: 0,
            duplicates: 1,
            rejected: 0
        }
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn test_reimporting_the_same_file_is_idempotent() {
    init_test_logging();
    let person = test_person();
    let mut store = InMemoryMeasurementStore::new();
    let config = ImportConfig::default();

    let first = import_scale_export(EXPORT, &person, &mut store, &config).unwrap();
    assert_eq!(first.created, 2);
    assert_eq!(first.duplicates, 0);

    let second = import_scale_export(EXPORT, &person, &mut store, &config).unwrap();
    assert_eq!(second.created, 0);
    assert_eq!(second.duplicates, 2);

    let history = store.measurements_for(person.id).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].recorded_at, at(2025, 9, 22, 18, 40));
    // Device BMI kept when present, computed from the cached height otherwise
    assert!((history[1].bmi - 22.3).abs() < f64::EPSILON);
    assert!((history[0].bmi - 32.07).abs() < f64::EPSILON);
    assert!((history[0].height_m - 1.75).abs() < f64::EPSILON);
}

#[test]
fn test_missing_height_rejects_the_batch_before_any_insert() {
    init_test_logging();
    let person = Person::new("Sin", "Altura");
    let mut store = InMemoryMeasurementStore::new();

    let error = import_scale_export(EXPORT, &person, &mut store, &ImportConfig::default())
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::PreconditionFailed);
    assert_eq!(
        import_error(&error),
        Some(&ImportError::MissingHeight {
            person_id: person.id
        })
    );
    assert!(store.is_empty());
}

#[test]
fn test_zero_height_counts_as_missing() {
    let mut person = test_person();
    person.height_m = Some(0.0);
    let mut store = InMemoryMeasurementStore::new();

    let error = import_scale_export(EXPORT, &person, &mut store, &ImportConfig::default())
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::PreconditionFailed);
    assert!(store.is_empty());
}

#[test]
fn test_file_without_weigh_ins_reports_no_records() {
    let person = test_person();
    let mut store = InMemoryMeasurementStore::new();
    let content = "Hora,Peso,Cambio,IMC\nResumen,,,\n";

    let error = import_scale_export(content, &person, &mut store, &ImportConfig::default())
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(import_error(&error), Some(&ImportError::NoRecords));
}

#[test]
fn test_other_people_do_not_cause_duplicates() {
    let person = test_person();
    let other = test_person();
    let mut store = InMemoryMeasurementStore::from_measurements(vec![weigh_in(
        &other,
        at(2025, 9, 22, 10, 12),
        70.0,
    )]);

    let summary =
        import_scale_export(EXPORT, &person, &mut store, &ImportConfig::default()).unwrap();

    assert_eq!(summary.created, 2);
    assert_eq!(summary.duplicates, 0);
    assert_eq!(store.measurements_for(other.id).unwrap().len(), 1);
}
