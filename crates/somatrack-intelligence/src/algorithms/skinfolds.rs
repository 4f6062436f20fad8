// ABOUTME: Skinfold averaging policy and site sums used by density and AAHPERD formulas
// ABOUTME: Two-of-three averaging, six-site summary, four-site density sum, triceps+subscapular
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

use somatrack_core::models::{Measurement, SkinfoldReadings, SkinfoldSite};

/// Average of the readings present, absent unless at least two of three exist
#[must_use]
pub fn average_skinfold(r1: Option<f64>, r2: Option<f64>, r3: Option<f64>) -> Option<f64> {
    SkinfoldReadings::new(r1, r2, r3).average()
}

fn sum_sites(measurement: &Measurement, sites: &[SkinfoldSite]) -> f64 {
    sites
        .iter()
        .map(|site| measurement.skinfolds.average(*site).unwrap_or(0.0))
        .sum()
}

/// Sum of all six site averages, absent sites counting as 0.
///
/// Summary figure only; the density formula uses `sum_four_skinfolds`.
#[must_use]
pub fn sum_six_skinfolds(measurement: &Measurement) -> f64 {
    sum_sites(measurement, &SkinfoldSite::ALL)
}

/// Triceps + subscapular + suprailiac + abdominal averages, absent sites counting as 0
#[must_use]
pub fn sum_four_skinfolds(measurement: &Measurement) -> f64 {
    sum_sites(measurement, &SkinfoldSite::DENSITY_SITES)
}

/// AAHPERD SPC: triceps + subscapular, absent unless both averages exist
#[must_use]
pub fn sum_triceps_subscapular(measurement: &Measurement) -> Option<f64> {
    let triceps = measurement.skinfolds.average(SkinfoldSite::Triceps)?;
    let subscapular = measurement.skinfolds.average(SkinfoldSite::Subscapular)?;
    Some(triceps + subscapular)
}
