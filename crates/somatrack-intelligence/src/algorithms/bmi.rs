// ABOUTME: Body mass index computation and WHO weight-status classification
// ABOUTME: weight / height^2 rounded to two decimals with half-open class bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

use super::round_to;
use crate::bands::{bucket_index, Severity, UpperBound};
use crate::physiological_constants::bmi::{NORMAL_UPPER, OVERWEIGHT_UPPER, UNDERWEIGHT_UPPER};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight status derived from BMI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiClass {
    /// BMI < 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// BMI >= 30
    Obese,
}

impl BmiClass {
    const ORDERED: [Self; 4] = [
        Self::Underweight,
        Self::Normal,
        Self::Overweight,
        Self::Obese,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Presentation tag
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Underweight | Self::Overweight => Severity::Warning,
            Self::Normal => Severity::Success,
            Self::Obese => Severity::Danger,
        }
    }
}

impl fmt::Display for BmiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `weight / height²` rounded to 2 decimals.
///
/// Returns 0 when height is not positive instead of failing.
#[must_use]
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> f64 {
    if height_m > 0.0 {
        round_to(weight_kg / height_m.powi(2), 2)
    } else {
        0.0
    }
}

/// Classify a BMI value with `[lo, hi)` bands at 18.5 / 25 / 30
#[must_use]
pub fn classify_bmi(bmi: f64) -> BmiClass {
    let bounds = [UNDERWEIGHT_UPPER, NORMAL_UPPER, OVERWEIGHT_UPPER];
    BmiClass::ORDERED[bucket_index(bmi, &bounds, UpperBound::Exclusive)]
}
