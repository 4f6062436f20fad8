// ABOUTME: Re-import of the record CSV layout written by the exporter
// ABOUTME: Header-addressed columns with per-row rejection instead of batch failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

//! Record CSV re-import
//!
//! Rows are numbered as a spreadsheet shows them: the header is row 1, the
//! first record row 2. Derived columns are ignored, and site averages are
//! recomputed from the raw readings.

use crate::errors::AppResult;
use crate::export::{
    reading_column, BMI, CIRCUMFERENCE_COLUMNS, HEIGHT_M, RECORDED_AT, WEIGHT_KG,
};
use crate::logging::ImportLogger;
use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};
use somatrack_core::constants::formats::{RECORD_DATE, RECORD_TIMESTAMP};
use somatrack_core::errors::ImportError;
use somatrack_core::models::{Circumferences, Measurement, SkinfoldReadings, SkinfoldSite};
use somatrack_intelligence::algorithms::compute_bmi;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

/// First data row number
const FIRST_DATA_ROW: usize = 2;

/// Measurements read from a record CSV and the rows that were rejected
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordsImport {
    /// Valid measurements in file order
    pub measurements: Vec<Measurement>,
    /// One `ImportError::RowRejected` per rejected row
    pub errors: Vec<ImportError>,
}

/// Header name to column index
struct Columns(HashMap<String, usize>);

impl Columns {
    fn from_header(header: &StringRecord) -> Self {
        Self(
            header
                .iter()
                .enumerate()
                .map(|(index, name)| (name.trim().to_owned(), index))
                .collect(),
        )
    }

    /// Trimmed, non-empty cell of `column`
    fn get<'r>(&self, record: &'r StringRecord, column: &str) -> Option<&'r str> {
        self.0
            .get(column)
            .and_then(|index| record.get(*index))
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    fn number(&self, record: &StringRecord, column: &str) -> Result<Option<f64>, String> {
        self.get(record, column)
            .map(|value| {
                value
                    .parse::<f64>()
                    .map_err(|_| format!("invalid number '{value}' in {column}"))
            })
            .transpose()
    }
}

/// Parse a record timestamp; a bare date means midnight
#[must_use]
pub fn parse_record_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, RECORD_TIMESTAMP)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, RECORD_DATE)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn read_row(columns: &Columns, record: &StringRecord, person_id: Uuid) -> Result<Measurement, String> {
    let (Some(recorded_at), Some(weight), Some(height)) = (
        columns.get(record, RECORDED_AT),
        columns.get(record, WEIGHT_KG),
        columns.get(record, HEIGHT_M),
    ) else {
        return Err(format!(
            "missing required fields ({RECORDED_AT}, {WEIGHT_KG}, {HEIGHT_M})"
        ));
    };

    let recorded_at = parse_record_timestamp(recorded_at)
        .ok_or_else(|| format!("invalid date format: {recorded_at}"))?;
    let weight_kg: f64 = weight
        .parse()
        .map_err(|_| format!("invalid number '{weight}' in {WEIGHT_KG}"))?;
    let height_m: f64 = height
        .parse()
        .map_err(|_| format!("invalid number '{height}' in {HEIGHT_M}"))?;
    let bmi = columns
        .number(record, BMI)?
        .unwrap_or_else(|| compute_bmi(weight_kg, height_m));

    let mut measurement = Measurement::new(person_id, recorded_at, weight_kg, height_m, bmi)
        .map_err(|e| e.message)?;

    for site in SkinfoldSite::ALL {
        let [r1, r2, r3] = [1, 2, 3].map(|n| columns.number(record, &reading_column(site, n)));
        measurement = measurement.with_skinfold(site, SkinfoldReadings::new(r1?, r2?, r3?));
    }

    let mut girths = [None; 8];
    for (slot, column) in girths.iter_mut().zip(CIRCUMFERENCE_COLUMNS) {
        *slot = columns.number(record, column)?;
    }
    let [neck_cm, chest_cm, arm_cm, forearm_cm, waist_cm, hip_cm, thigh_cm, calf_cm] = girths;
    Ok(measurement.with_circumferences(Circumferences {
        neck_cm,
        chest_cm,
        arm_cm,
        forearm_cm,
        waist_cm,
        hip_cm,
        thigh_cm,
        calf_cm,
    }))
}

/// Read a record CSV for `person_id`.
///
/// A bad row is reported in `errors` and reading continues.
///
/// # Errors
///
/// Returns `ImportError::Csv` when the header row cannot be read
pub fn read_records(content: &str, person_id: Uuid) -> AppResult<RecordsImport> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());
    let columns = Columns::from_header(
        reader
            .headers()
            .map_err(|e| ImportError::Csv(e.to_string()))?,
    );

    let mut result = RecordsImport::default();
    for (offset, record) in reader.records().enumerate() {
        let row = FIRST_DATA_ROW + offset;
        let outcome = record
            .map_err(|e| e.to_string())
            .and_then(|record| read_row(&columns, &record, person_id));
        match outcome {
            Ok(measurement) => result.measurements.push(measurement),
            Err(reason) => {
                ImportLogger::log_row_rejected(row, &reason);
                result.errors.push(ImportError::row_rejected(row, reason));
            }
        }
    }

    debug!(
        person_id = %person_id,
        accepted = result.measurements.len(),
        rejected = result.errors.len(),
        "Read record CSV"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_formats() {
        let full = parse_record_timestamp("2025-03-04 07:30:00").unwrap();
        assert_eq!(full.to_string(), "2025-03-04 07:30:00");
        let date_only = parse_record_timestamp("2025-03-04").unwrap();
        assert_eq!(date_only.to_string(), "2025-03-04 00:00:00");
        assert_eq!(parse_record_timestamp("04/03/2025"), None);
    }

    #[test]
    fn test_missing_required_field_rejects_row() {
        let content = "recorded_at,weight_kg,height_m\n2025-03-04,,1.8\n2025-03-05,80,1.8\n";
        let import = read_records(content, Uuid::new_v4()).unwrap();
        assert_eq!(import.measurements.len(), 1);
        assert_eq!(
            import.errors,
            vec![ImportError::row_rejected(
                2,
                "missing required fields (recorded_at, weight_kg, height_m)"
            )]
        );
    }

    #[test]
    fn test_bmi_computed_when_column_empty() {
        let content = "recorded_at,weight_kg,height_m,bmi\n2025-03-04 07:30:00,70,1.75,\n";
        let import = read_records(content, Uuid::new_v4()).unwrap();
        assert!((import.measurements[0].bmi - 22.86).abs() < f64::EPSILON);
    }

    #[test]
    fn test_averages_recomputed_from_readings() {
        let content = "recorded_at,weight_kg,height_m,triceps_1,triceps_2,triceps_3,triceps_avg\n\
                       2025-03-04,70,1.75,10,12,,99\n";
        let import = read_records(content, Uuid::new_v4()).unwrap();
        let triceps = import.measurements[0].skinfolds.site(SkinfoldSite::Triceps);
        assert_eq!(triceps.average(), Some(11.0));
    }

    #[test]
    fn test_bad_number_rejects_row() {
        let content = "recorded_at,weight_kg,height_m,waist_cm\n2025-03-04,70,1.75,abc\n";
        let import = read_records(content, Uuid::new_v4()).unwrap();
        assert!(import.measurements.is_empty());
        assert_eq!(
            import.errors,
            vec![ImportError::row_rejected(2, "invalid number 'abc' in waist_cm")]
        );
    }
}
