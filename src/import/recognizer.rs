// ABOUTME: Row recognizer for scale exports: blank, date-marker, sample or noise rows
// ABOUTME: Date-marker and sample-cell parsing with per-row rejection reasons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

//! Scale-export row recognition
//!
//! A scale export groups samples under date-marker rows:
//!
//! ```text
//! Time,Weight,Change,BMI,Body Fat,...
//!  22 Sep 2025,,,,
//! 10:12 am,98.7 kg,--,22.3,--
//! ```
//!
//! A row whose first cell is non-empty and does not end in `am` or `pm` is a
//! date marker. The suffix check is case-sensitive, so `10:12 AM` is a date
//! marker that fails to parse.

use super::locale::MonthLocale;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use somatrack_core::constants::scale_export::{
    BMI_COLUMN, DATE_MARKER, MIN_SAMPLE_CELLS, MISSING_VALUE, SAMPLE_TIME, WEIGHT_COLUMN,
};
use std::sync::OnceLock;
use thiserror::Error;

static WEIGHT_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

fn weight_pattern() -> Option<&'static Regex> {
    WEIGHT_PATTERN
        .get_or_init(|| Regex::new(r"(\d+\.?\d*)\s*kg").ok())
        .as_ref()
}

/// One weigh-in read from a scale export
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeighIn {
    /// Date marker combined with the sample time
    pub recorded_at: NaiveDateTime,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// BMI reported by the device, if any
    pub bmi: Option<f64>,
}

/// Shape of a row before the parser state is consulted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Every cell empty or whitespace
    Blank,
    /// Date-marker candidate, `None` when the date did not parse
    DateMarker(Option<NaiveDate>),
    /// Two or more cells with a time-like (or empty) first cell
    SampleCandidate,
    /// Anything else
    Noise,
}

/// Why a sample candidate produced no weigh-in
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleRejection {
    /// Sample row seen before any date marker
    #[error("sample row before any date marker")]
    NoDate,
    /// First cell is not a 12-hour time
    #[error("unparsable time '{0}'")]
    Time(String),
    /// Weight cell has no number followed by `kg`
    #[error("no kilogram weight in '{0}'")]
    Weight(String),
}

fn cell<S: AsRef<str>>(cells: &[S], index: usize) -> Option<&str> {
    cells.get(index).map(|c| c.as_ref().trim())
}

/// Classify one row by shape alone
#[must_use]
pub fn classify_row<S: AsRef<str>>(cells: &[S], locale: MonthLocale) -> RowKind {
    if cells.iter().all(|c| c.as_ref().trim().is_empty()) {
        return RowKind::Blank;
    }
    let first = cell(cells, 0).unwrap_or_default();
    if !first.is_empty() && !first.ends_with("am") && !first.ends_with("pm") {
        return RowKind::DateMarker(parse_date_marker(first, locale));
    }
    if cells.len() >= MIN_SAMPLE_CELLS {
        RowKind::SampleCandidate
    } else {
        RowKind::Noise
    }
}

/// Parse `<day> <month> <year>` after month-name normalization
#[must_use]
pub fn parse_date_marker(marker: &str, locale: MonthLocale) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&locale.normalize_date_marker(marker), DATE_MARKER).ok()
}

/// Leading decimal of a `<number> kg` weight cell
#[must_use]
pub fn extract_weight(text: &str) -> Option<f64> {
    weight_pattern()?
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Optional device BMI; `--`, empty and unparsable cells are absent
#[must_use]
pub fn parse_device_bmi(text: Option<&str>) -> Option<f64> {
    text.filter(|t| !t.is_empty() && *t != MISSING_VALUE)
        .and_then(|t| t.parse().ok())
}

/// Build a weigh-in from a sample candidate under `date`
///
/// # Errors
///
/// Returns the reason the row has to be dropped
pub fn parse_sample<S: AsRef<str>>(
    date: NaiveDate,
    cells: &[S],
) -> Result<WeighIn, SampleRejection> {
    let time_text = cell(cells, 0).unwrap_or_default();
    let time = NaiveTime::parse_from_str(time_text, SAMPLE_TIME)
        .map_err(|_| SampleRejection::Time(time_text.to_owned()))?;

    let weight_text = cell(cells, WEIGHT_COLUMN).unwrap_or_default();
    let weight_kg =
        extract_weight(weight_text).ok_or_else(|| SampleRejection::Weight(weight_text.to_owned()))?;

    Ok(WeighIn {
        recorded_at: date.and_time(time),
        weight_kg,
        bmi: parse_device_bmi(cell(cells, BMI_COLUMN)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 22).unwrap()
    }

    #[test]
    fn test_blank_rows() {
        assert_eq!(classify_row::<&str>(&[], MonthLocale::Spanish), RowKind::Blank);
        assert_eq!(
            classify_row(&["", "  ", ""], MonthLocale::Spanish),
            RowKind::Blank
        );
    }

    #[test]
    fn test_date_markers() {
        assert_eq!(
            classify_row(&[" 22 Sep 2025", "", ""], MonthLocale::Spanish),
            RowKind::DateMarker(Some(date()))
        );
        assert_eq!(
            classify_row(&["5 Ene 2025"], MonthLocale::Spanish),
            RowKind::DateMarker(NaiveDate::from_ymd_opt(2025, 1, 5))
        );
        assert_eq!(
            classify_row(&["Time", "Weight"], MonthLocale::Spanish),
            RowKind::DateMarker(None)
        );
    }

    #[test]
    fn test_suffix_check_is_case_sensitive() {
        assert_eq!(
            classify_row(&["10:12 AM", "98.7 kg"], MonthLocale::Spanish),
            RowKind::DateMarker(None)
        );
        assert_eq!(
            classify_row(&["10:12 am", "98.7 kg"], MonthLocale::Spanish),
            RowKind::SampleCandidate
        );
        assert_eq!(
            classify_row(&["10:12 pm"], MonthLocale::Spanish),
            RowKind::Noise
        );
    }

    #[test]
    fn test_parse_sample_row() {
        let weigh_in = parse_sample(date(), &["10:12 am", "98.7 kg", "--", "22.3"]).unwrap();
        assert_eq!(weigh_in.recorded_at, date().and_hms_opt(10, 12, 0).unwrap());
        assert!((weigh_in.weight_kg - 98.7).abs() < f64::EPSILON);
        assert_eq!(weigh_in.bmi, Some(22.3));

        let evening = parse_sample(date(), &["7:05 pm", "98 kg"]).unwrap();
        assert_eq!(evening.recorded_at, date().and_hms_opt(19, 5, 0).unwrap());
        assert_eq!(evening.bmi, None);
    }

    #[test]
    fn test_parse_sample_rejections() {
        assert_eq!(
            parse_sample(date(), &["25:99 am", "98.7 kg"]),
            Err(SampleRejection::Time("25:99 am".into()))
        );
        assert_eq!(
            parse_sample(date(), &["10:12 am", "217 lbs"]),
            Err(SampleRejection::Weight("217 lbs".into()))
        );
    }

    #[test]
    fn test_device_bmi_sentinels() {
        assert_eq!(parse_device_bmi(Some("--")), None);
        assert_eq!(parse_device_bmi(Some("")), None);
        assert_eq!(parse_device_bmi(Some("n/a")), None);
        assert_eq!(parse_device_bmi(None), None);
        assert_eq!(parse_device_bmi(Some("30.5")), Some(30.5));
    }

    #[test]
    fn test_weight_extraction() {
        assert_eq!(extract_weight("98.7 kg"), Some(98.7));
        assert_eq!(extract_weight("98kg"), Some(98.0));
        assert_eq!(extract_weight("kg"), None);
    }
}
