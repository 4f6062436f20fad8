// ABOUTME: Durnin-Womersley body density from the four-site skinfold sum
// ABOUTME: Age-band and gender coefficient selection with no formula below age 16
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

use crate::physiological_constants::body_density::{DensityCoefficients, BANDS, SUM_DIVISOR};
use somatrack_core::models::Gender;

/// Coefficients of the age band containing `age`, absent below 16
#[must_use]
pub fn density_coefficients(age: u32, gender: Gender) -> Option<DensityCoefficients> {
    BANDS
        .iter()
        .find(|band| age >= band.min_age && band.max_age.map_or(true, |max| age <= max))
        .map(|band| match gender {
            Gender::Male => band.male,
            Gender::Female => band.female,
        })
}

/// Estimated body density in g/cm³: `a - b * (sum4 / 10)`.
///
/// Not rounded; the value feeds the Siri equation.
#[must_use]
// Unfused multiply-subtract keeps results identical to the reference tables
#[allow(clippy::suboptimal_flops)]
pub fn body_density(sum_four_skinfolds: f64, age: u32, gender: Gender) -> Option<f64> {
    let coefficients = density_coefficients(age, gender)?;
    Some(coefficients.intercept - coefficients.slope * (sum_four_skinfolds / SUM_DIVISOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_formula_below_sixteen() {
        assert_eq!(density_coefficients(15, Gender::Male), None);
        assert_eq!(body_density(40.0, 15, Gender::Female), None);
    }

    #[test]
    fn test_band_edges_select_expected_coefficients() {
        let teen = density_coefficients(19, Gender::Male).unwrap();
        assert!((teen.intercept - 1.1620).abs() < f64::EPSILON);
        let twenties = density_coefficients(20, Gender::Male).unwrap();
        assert!((twenties.intercept - 1.1631).abs() < f64::EPSILON);
        let senior = density_coefficients(87, Gender::Female).unwrap();
        assert!((senior.slope - 0.0645).abs() < f64::EPSILON);
    }

    #[test]
    fn test_density_linear_formula() {
        // 1.1631 - 0.0632 * 4.0
        let density = body_density(40.0, 25, Gender::Male).unwrap();
        assert!((density - 0.9103).abs() < 1e-9);
    }
}
