// ABOUTME: Siri body-fat estimate with age-tier classification, percentile and progress
// ABOUTME: Six ordered bands per age tier and gender plus seven-point percentile tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

use super::body_density::body_density;
use super::round_to;
use crate::bands::{bucket_index, Percentile, Severity, UpperBound};
use crate::physiological_constants::body_fat::{
    FEMALE_18_39_BANDS, FEMALE_18_39_PERCENTILES, FEMALE_40_59_BANDS, FEMALE_40_59_PERCENTILES,
    FEMALE_60_PLUS_BANDS, FEMALE_60_PLUS_PERCENTILES, MALE_18_39_BANDS, MALE_18_39_PERCENTILES,
    MALE_40_59_BANDS, MALE_40_59_PERCENTILES, MALE_60_PLUS_BANDS, MALE_60_PLUS_PERCENTILES,
    MIDDLE_AGE_MAX_AGE, MIN_AGE, YOUNG_ADULT_MAX_AGE,
};
use crate::physiological_constants::siri::{DENSITY_NUMERATOR, OFFSET, PERCENT_SCALE};
use serde::{Deserialize, Serialize};
use somatrack_core::models::Gender;
use std::fmt;

/// Age tier selecting the body-fat tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeTier {
    /// 18-39
    YoungAdult,
    /// 40-59
    MiddleAge,
    /// 60 and over
    Senior,
}

impl AgeTier {
    /// Tier for an age, absent below 18.
    ///
    /// Ages 16 and 17 have a density band but no body-fat tables; they get no
    /// tier rather than borrowing the 60-and-over tables.
    #[must_use]
    pub const fn from_age(age: u32) -> Option<Self> {
        if age < MIN_AGE {
            None
        } else if age <= YOUNG_ADULT_MAX_AGE {
            Some(Self::YoungAdult)
        } else if age <= MIDDLE_AGE_MAX_AGE {
            Some(Self::MiddleAge)
        } else {
            Some(Self::Senior)
        }
    }

    const fn class_bounds(self, gender: Gender) -> &'static [f64; 6] {
        match (gender, self) {
            (Gender::Male, Self::YoungAdult) => &MALE_18_39_BANDS,
            (Gender::Male, Self::MiddleAge) => &MALE_40_59_BANDS,
            (Gender::Male, Self::Senior) => &MALE_60_PLUS_BANDS,
            (Gender::Female, Self::YoungAdult) => &FEMALE_18_39_BANDS,
            (Gender::Female, Self::MiddleAge) => &FEMALE_40_59_BANDS,
            (Gender::Female, Self::Senior) => &FEMALE_60_PLUS_BANDS,
        }
    }

    const fn percentile_cut_points(self, gender: Gender) -> &'static [f64; 7] {
        match (gender, self) {
            (Gender::Male, Self::YoungAdult) => &MALE_18_39_PERCENTILES,
            (Gender::Male, Self::MiddleAge) => &MALE_40_59_PERCENTILES,
            (Gender::Male, Self::Senior) => &MALE_60_PLUS_PERCENTILES,
            (Gender::Female, Self::YoungAdult) => &FEMALE_18_39_PERCENTILES,
            (Gender::Female, Self::MiddleAge) => &FEMALE_40_59_PERCENTILES,
            (Gender::Female, Self::Senior) => &FEMALE_60_PLUS_PERCENTILES,
        }
    }
}

/// Body-fat band, ordered from leanest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatClass {
    /// Below essential-fat comfort range
    VeryLow,
    /// Athletic
    Low,
    /// Fit
    Acceptable,
    /// Population average
    Average,
    /// Above average
    High,
    /// Well above average
    VeryHigh,
}

impl BodyFatClass {
    const ORDERED: [Self; 6] = [
        Self::VeryLow,
        Self::Low,
        Self::Acceptable,
        Self::Average,
        Self::High,
        Self::VeryHigh,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Acceptable => "Acceptable",
            Self::Average => "Average",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Presentation tag
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::VeryLow | Self::VeryHigh => Severity::Danger,
            Self::Low | Self::High => Severity::Warning,
            Self::Acceptable => Severity::Info,
            Self::Average => Severity::Success,
        }
    }

    /// The band above this one, absent for the top band
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        Self::ORDERED.get(*self as usize + 1).copied()
    }
}

impl fmt::Display for BodyFatClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Distance from the current body-fat band to the next one up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandProgress {
    /// Band the percentage falls in
    pub current: BodyFatClass,
    /// Next band, absent in the top band
    pub next: Option<BodyFatClass>,
    /// Percentage where the next band starts
    pub target_percent: Option<f64>,
    /// `target_percent - percent`, rounded to 1 decimal
    pub delta: Option<f64>,
}

/// Siri equation: `((4.95 / density) - 4.50) * 100`, rounded to 1 decimal.
///
/// Absent when the density is not positive.
#[must_use]
pub fn body_fat_percent(density: f64) -> Option<f64> {
    if density <= 0.0 {
        return None;
    }
    Some(round_to(
        (DENSITY_NUMERATOR / density - OFFSET) * PERCENT_SCALE,
        1,
    ))
}

/// Body-fat percentage from the four-site skinfold sum.
///
/// Absent when no density-site average was recorded (sum of 0), when the age
/// has no density band, or when the density is not positive.
#[must_use]
pub fn estimate_body_fat(sum_four_skinfolds: f64, age: u32, gender: Gender) -> Option<f64> {
    if sum_four_skinfolds == 0.0 {
        return None;
    }
    body_density(sum_four_skinfolds, age, gender).and_then(body_fat_percent)
}

fn band_index(percent: f64, age: u32, gender: Gender) -> Option<(usize, &'static [f64; 6])> {
    let bounds = AgeTier::from_age(age)?.class_bounds(gender);
    // The sixth value is the population ceiling, not a band boundary
    let index = bucket_index(percent, &bounds[..5], UpperBound::Exclusive);
    Some((index, bounds))
}

/// Body-fat band for the person's age tier and gender, absent below 18
#[must_use]
pub fn classify_body_fat(percent: f64, age: u32, gender: Gender) -> Option<BodyFatClass> {
    band_index(percent, age, gender).map(|(index, _)| BodyFatClass::ORDERED[index])
}

/// Population percentile of a body-fat percentage, absent below 18
#[must_use]
pub fn percentile_of_body_fat(percent: f64, age: u32, gender: Gender) -> Option<Percentile> {
    let tier = AgeTier::from_age(age)?;
    Some(Percentile::from_cut_points(
        percent,
        tier.percentile_cut_points(gender),
    ))
}

/// Current band, next band, where it starts and how far away it is.
///
/// In the top band the next band, target and delta are absent.
#[must_use]
pub fn progress_to_next_band(percent: f64, age: u32, gender: Gender) -> Option<BandProgress> {
    let (index, bounds) = band_index(percent, age, gender)?;
    let current = BodyFatClass::ORDERED[index];
    let next = current.next();
    let target_percent = next.map(|_| bounds[index]);
    Some(BandProgress {
        current,
        next,
        target_percent,
        delta: target_percent.map(|target| round_to(target - percent, 1)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_siri_equation() {
        // (4.95 / 1.05 - 4.5) * 100 = 21.428...
        assert_eq!(body_fat_percent(1.05), Some(21.4));
        assert_eq!(body_fat_percent(0.0), None);
        assert_eq!(body_fat_percent(-0.2), None);
    }

    #[test]
    fn test_zero_sum_is_absent() {
        assert_eq!(estimate_body_fat(0.0, 30, Gender::Male), None);
        assert_eq!(estimate_body_fat(40.0, 15, Gender::Male), None);
        assert!(estimate_body_fat(40.0, 30, Gender::Male).is_some());
    }

    #[test]
    fn test_age_tiers() {
        assert_eq!(AgeTier::from_age(16), None);
        assert_eq!(AgeTier::from_age(17), None);
        assert_eq!(AgeTier::from_age(18), Some(AgeTier::YoungAdult));
        assert_eq!(AgeTier::from_age(39), Some(AgeTier::YoungAdult));
        assert_eq!(AgeTier::from_age(40), Some(AgeTier::MiddleAge));
        assert_eq!(AgeTier::from_age(60), Some(AgeTier::Senior));
    }

    #[test]
    fn test_classification_is_lower_closed() {
        assert_eq!(
            classify_body_fat(7.9, 25, Gender::Male),
            Some(BodyFatClass::VeryLow)
        );
        assert_eq!(classify_body_fat(8.0, 25, Gender::Male), Some(BodyFatClass::Low));
        assert_eq!(
            classify_body_fat(25.0, 25, Gender::Male),
            Some(BodyFatClass::VeryHigh)
        );
        assert_eq!(
            classify_body_fat(29.5, 45, Gender::Female),
            Some(BodyFatClass::Average)
        );
        assert_eq!(classify_body_fat(20.0, 17, Gender::Female), None);
    }

    #[test]
    fn test_percentile_is_upper_inclusive() {
        assert_eq!(
            percentile_of_body_fat(14.0, 30, Gender::Male),
            Some(Percentile::P50)
        );
        assert_eq!(
            percentile_of_body_fat(14.1, 30, Gender::Male),
            Some(Percentile::P75)
        );
        assert_eq!(
            percentile_of_body_fat(50.0, 70, Gender::Female),
            Some(Percentile::P95)
        );
    }

    #[test]
    fn test_progress_to_next_band() {
        let progress = progress_to_next_band(16.2, 30, Gender::Male).unwrap();
        assert_eq!(progress.current, BodyFatClass::Average);
        assert_eq!(progress.next, Some(BodyFatClass::High));
        assert_eq!(progress.target_percent, Some(18.0));
        assert_eq!(progress.delta, Some(1.8));

        let top = progress_to_next_band(31.0, 30, Gender::Male).unwrap();
        assert_eq!(top.current, BodyFatClass::VeryHigh);
        assert_eq!(top.next, None);
        assert_eq!(top.target_percent, None);
        assert_eq!(top.delta, None);
    }

    #[test]
    fn test_severity_tags() {
        assert_eq!(BodyFatClass::VeryLow.severity(), Severity::Danger);
        assert_eq!(BodyFatClass::Acceptable.severity(), Severity::Info);
        assert_eq!(BodyFatClass::Average.severity(), Severity::Success);
        assert_eq!(BodyFatClass::High.severity(), Severity::Warning);
    }
}
