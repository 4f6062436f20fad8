// ABOUTME: Record CSV export of a person's measurement history with derived columns
// ABOUTME: Fixed column layout shared with the record re-import, newest measurement first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

//! Record CSV export
//!
//! One row per measurement: raw readings, stored averages, circumferences and
//! four engine-derived columns. Absent values are written as empty cells.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};
use csv::Writer;
use somatrack_core::constants::formats::RECORD_TIMESTAMP;
use somatrack_core::models::{Measurement, Person, SkinfoldSite};
use somatrack_intelligence::algorithms::round_to;
use somatrack_intelligence::DerivedMetrics;
use std::cmp::Reverse;
use tracing::debug;

/// Timestamp column
pub const RECORDED_AT: &str = "recorded_at";
/// Weight column
pub const WEIGHT_KG: &str = "weight_kg";
/// Height column
pub const HEIGHT_M: &str = "height_m";
/// Stored BMI column
pub const BMI: &str = "bmi";

/// Circumference columns in `Circumferences::in_order` order
pub const CIRCUMFERENCE_COLUMNS: [&str; 8] = [
    "neck_cm",
    "chest_cm",
    "arm_cm",
    "forearm_cm",
    "waist_cm",
    "hip_cm",
    "thigh_cm",
    "calf_cm",
];

/// Engine-derived columns, ignored on re-import
pub const DERIVED_COLUMNS: [&str; 4] = [
    "body_fat_percent",
    "aahperd_spc",
    "aahperd_percentile",
    "aahperd_classification",
];

/// Column of the `n`th (1-based) raw reading of a site, e.g. `triceps_2`
#[must_use]
pub fn reading_column(site: SkinfoldSite, n: usize) -> String {
    format!("{}_{n}", site.key())
}

/// Column of a site's stored average, e.g. `front_thigh_avg`
#[must_use]
pub fn average_column(site: SkinfoldSite) -> String {
    format!("{}_avg", site.key())
}

/// The full header row in export order
#[must_use]
pub fn record_header() -> Vec<String> {
    let mut header: Vec<String> = [RECORDED_AT, WEIGHT_KG, HEIGHT_M, BMI]
        .iter()
        .map(|c| (*c).to_owned())
        .collect();
    for site in SkinfoldSite::ALL {
        header.extend((1..=3).map(|n| reading_column(site, n)));
        header.push(average_column(site));
    }
    header.extend(CIRCUMFERENCE_COLUMNS.iter().map(|c| (*c).to_owned()));
    header.extend(DERIVED_COLUMNS.iter().map(|c| (*c).to_owned()));
    header
}

/// Record CSV timestamp text
#[must_use]
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(RECORD_TIMESTAMP).to_string()
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn record_row(person: &Person, measurement: &Measurement, as_of: NaiveDate) -> Vec<String> {
    let mut row = vec![
        format_timestamp(measurement.recorded_at),
        measurement.weight_kg.to_string(),
        measurement.height_m.to_string(),
        measurement.bmi.to_string(),
    ];
    for site in SkinfoldSite::ALL {
        let readings = measurement.skinfolds.site(site);
        row.extend(readings.readings().into_iter().map(optional));
        row.push(optional(readings.average()));
    }
    row.extend(measurement.circumferences.in_order().into_iter().map(optional));

    let metrics = DerivedMetrics::compute(person, measurement, as_of);
    row.push(optional(metrics.body_fat_percent.map(|v| round_to(v, 2))));
    row.push(optional(metrics.aahperd_spc.map(|v| round_to(v, 2))));
    row.push(
        metrics
            .aahperd_percentile
            .map(|p| p.value().to_string())
            .unwrap_or_default(),
    );
    row.push(
        metrics
            .aahperd_class
            .map(|c| c.label().to_owned())
            .unwrap_or_default(),
    );
    row
}

/// Export a person's measurements as record CSV, newest first.
///
/// Returns `None` when there is nothing to export. Derived columns use the
/// person's age on `as_of`.
///
/// # Errors
///
/// Returns a serialization error if the CSV writer fails
pub fn export_measurements_csv(
    person: &Person,
    measurements: &[Measurement],
    as_of: NaiveDate,
) -> AppResult<Option<String>> {
    if measurements.is_empty() {
        return Ok(None);
    }

    let mut ordered: Vec<&Measurement> = measurements.iter().collect();
    ordered.sort_by_key(|m| Reverse(m.recorded_at));

    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(record_header()).map_err(csv_error)?;
    for measurement in &ordered {
        writer
            .write_record(record_row(person, measurement, as_of))
            .map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::serialization(format!("Failed to flush record CSV: {e}")))?;
    let content = String::from_utf8(bytes)
        .map_err(|e| AppError::serialization(format!("Record CSV is not UTF-8: {e}")))?;

    debug!(person_id = %person.id, rows = ordered.len(), "Exported record CSV");
    Ok(Some(content))
}

/// Default download name, e.g. `records_Ana_Ruiz_20250601_093000.csv`
#[must_use]
pub fn export_filename(person: &Person, now: NaiveDateTime) -> String {
    format!(
        "records_{}_{}_{}.csv",
        person.first_name,
        person.last_name,
        now.format("%Y%m%d_%H%M%S")
    )
}

fn csv_error(error: csv::Error) -> AppError {
    AppError::serialization(format!("Failed to write record CSV: {error}")).with_source(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let header = record_header();
        assert_eq!(header.len(), 40);
        assert_eq!(header[0], "recorded_at");
        assert_eq!(header[4], "triceps_1");
        assert_eq!(header[7], "triceps_avg");
        assert_eq!(header[24], "calf_1");
        assert_eq!(header[28], "neck_cm");
        assert_eq!(header[35], "calf_cm");
        assert_eq!(header[39], "aahperd_classification");
    }

    #[test]
    fn test_empty_history_exports_nothing() {
        let person = Person::new("Ana", "Ruiz");
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(export_measurements_csv(&person, &[], as_of).unwrap(), None);
    }

    #[test]
    fn test_export_filename() {
        let person = Person::new("Ana", "Ruiz");
        let now = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(
            export_filename(&person, now),
            "records_Ana_Ruiz_20250601_093000.csv"
        );
    }
}
