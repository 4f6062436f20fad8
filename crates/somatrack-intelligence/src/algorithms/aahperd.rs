// ABOUTME: AAHPERD triceps + subscapular skinfold percentile and classification
// ABOUTME: University (18-25) tables with a separate general-population approximation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

use crate::bands::{bucket_index, Percentile, Severity, UpperBound};
use crate::physiological_constants::aahperd::{
    GENERAL_FEMALE_CLASSES, GENERAL_FEMALE_PERCENTILES, GENERAL_MALE_CLASSES,
    GENERAL_MALE_PERCENTILES, UNIVERSITY_FEMALE_CLASSES, UNIVERSITY_FEMALE_PERCENTILES,
    UNIVERSITY_MALE_CLASSES, UNIVERSITY_MALE_PERCENTILES, UNIVERSITY_MAX_AGE, UNIVERSITY_MIN_AGE,
};
use serde::{Deserialize, Serialize};
use somatrack_core::models::Gender;
use std::fmt;

/// AAHPERD rating of the triceps + subscapular sum, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AahperdClass {
    /// Lowest skinfold sums
    Excellent,
    /// Second band
    VeryGood,
    /// Third band
    Good,
    /// Fourth band
    Average,
    /// Fifth band
    BelowAverage,
    /// Highest skinfold sums
    NeedsImprovement,
}

impl AahperdClass {
    const ORDERED: [Self; 6] = [
        Self::Excellent,
        Self::VeryGood,
        Self::Good,
        Self::Average,
        Self::BelowAverage,
        Self::NeedsImprovement,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::BelowAverage => "Below Average",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }

    /// Presentation tag
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Excellent => Severity::Success,
            Self::VeryGood => Severity::Info,
            Self::Good => Severity::Primary,
            Self::Average | Self::BelowAverage => Severity::Warning,
            Self::NeedsImprovement => Severity::Danger,
        }
    }
}

impl fmt::Display for AahperdClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const fn is_university_age(age: u32) -> bool {
    age >= UNIVERSITY_MIN_AGE && age <= UNIVERSITY_MAX_AGE
}

/// Percentile bucket of the triceps + subscapular sum.
///
/// Ages 18-25 use the university table; every other age uses the general
/// approximation table.
#[must_use]
pub fn percentile_aahperd(spc: f64, age: u32, gender: Gender) -> Percentile {
    let cut_points = match (is_university_age(age), gender) {
        (true, Gender::Male) => &UNIVERSITY_MALE_PERCENTILES,
        (true, Gender::Female) => &UNIVERSITY_FEMALE_PERCENTILES,
        (false, Gender::Male) => &GENERAL_MALE_PERCENTILES,
        (false, Gender::Female) => &GENERAL_FEMALE_PERCENTILES,
    };
    Percentile::from_cut_points(spc, cut_points)
}

/// AAHPERD rating of the triceps + subscapular sum (inclusive upper bounds)
#[must_use]
pub fn classify_aahperd(spc: f64, age: u32, gender: Gender) -> AahperdClass {
    let bounds = match (is_university_age(age), gender) {
        (true, Gender::Male) => &UNIVERSITY_MALE_CLASSES,
        (true, Gender::Female) => &UNIVERSITY_FEMALE_CLASSES,
        (false, Gender::Male) => &GENERAL_MALE_CLASSES,
        (false, Gender::Female) => &GENERAL_FEMALE_CLASSES,
    };
    AahperdClass::ORDERED[bucket_index(spc, bounds, UpperBound::Inclusive)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_resolves_to_lower_bucket() {
        assert_eq!(percentile_aahperd(13.0, 25, Gender::Male), Percentile::P25);
        assert_eq!(percentile_aahperd(13.5, 25, Gender::Male), Percentile::P50);
    }

    #[test]
    fn test_general_table_outside_university_ages() {
        // 17 and 26 both fall outside 18-25
        assert_eq!(percentile_aahperd(13.0, 26, Gender::Male), Percentile::P25);
        assert_eq!(percentile_aahperd(11.0, 17, Gender::Male), Percentile::P10);
        assert_eq!(percentile_aahperd(11.0, 18, Gender::Male), Percentile::P25);
    }

    #[test]
    fn test_classification_tables() {
        assert_eq!(classify_aahperd(10.0, 20, Gender::Male), AahperdClass::Excellent);
        assert_eq!(classify_aahperd(29.0, 20, Gender::Male), AahperdClass::NeedsImprovement);
        assert_eq!(classify_aahperd(19.0, 22, Gender::Female), AahperdClass::VeryGood);
        assert_eq!(classify_aahperd(40.0, 40, Gender::Female), AahperdClass::NeedsImprovement);
        assert_eq!(classify_aahperd(39.0, 40, Gender::Female), AahperdClass::BelowAverage);
    }

    #[test]
    fn test_severity_uses_primary_for_good() {
        assert_eq!(AahperdClass::Good.severity(), Severity::Primary);
        assert_eq!(AahperdClass::BelowAverage.severity(), Severity::Warning);
    }
}
