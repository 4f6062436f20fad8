// ABOUTME: Anthropometric algorithms: BMI, skinfold sums, density, body fat, AAHPERD
// ABOUTME: Pure functions over plain snapshots returning None when inputs are missing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

/// Body mass index and its classification
pub mod bmi;

/// Skinfold averaging and site sums
pub mod skinfolds;

/// Durnin-Womersley body density
pub mod body_density;

/// Siri body fat, classification, percentile and progress
pub mod body_fat;

/// AAHPERD triceps + subscapular percentile and classification
pub mod aahperd;

pub use aahperd::{classify_aahperd, percentile_aahperd, AahperdClass};
pub use bmi::{classify_bmi, compute_bmi, BmiClass};
pub use body_density::{body_density, density_coefficients};
pub use body_fat::{
    body_fat_percent, classify_body_fat, estimate_body_fat, percentile_of_body_fat,
    progress_to_next_band, AgeTier, BandProgress, BodyFatClass,
};
pub use skinfolds::{
    average_skinfold, sum_four_skinfolds, sum_six_skinfolds, sum_triceps_subscapular,
};

/// Round to a fixed number of decimals, applied only to final outputs.
///
/// Rounds the exact decimal expansion of `value` half to even, so a double
/// sitting exactly on a tie such as `15.625` becomes `15.62`. Scaling by a
/// power of ten first would add its own representation error.
#[must_use]
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
