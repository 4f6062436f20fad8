// ABOUTME: Ordered-threshold band lookup shared by every classification table
// ABOUTME: Severity tags, percentile buckets, and the generic first-bucket search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

//! Band lookup
//!
//! Every table in the engine is an ascending array of bounds. A value falls
//! into the first bucket whose bound it does not exceed; whether the bound
//! itself belongs to the bucket depends on the table.

use crate::physiological_constants::percentiles::BUCKETS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a bucket treats a value equal to its upper bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    /// `[lo, hi)`: the bound starts the next bucket
    Exclusive,
    /// `(lo, hi]`: the bound closes this bucket
    Inclusive,
}

/// Index of the first bucket that holds `value`.
///
/// Returns `bounds.len()` when the value lies above every bound, i.e. in the
/// open-ended top bucket.
#[must_use]
pub fn bucket_index(value: f64, bounds: &[f64], upper: UpperBound) -> usize {
    bounds
        .iter()
        .position(|bound| match upper {
            UpperBound::Exclusive => value < *bound,
            UpperBound::Inclusive => value <= *bound,
        })
        .unwrap_or(bounds.len())
}

/// Presentation tag attached to classifications and messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Needs attention
    Danger,
    /// Outside the desirable range
    Warning,
    /// Neutral information
    Info,
    /// Good, highlighted
    Primary,
    /// Desirable
    Success,
}

impl Severity {
    /// Lowercase tag name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Primary => "primary",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Population percentile bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Percentile {
    /// At or below the 5th percentile cut point
    P5,
    /// At or below the 10th percentile cut point
    P10,
    /// At or below the 25th percentile cut point
    P25,
    /// At or below the 50th percentile cut point
    P50,
    /// At or below the 75th percentile cut point
    P75,
    /// At or below the 90th percentile cut point
    P90,
    /// Above the 90th percentile cut point
    P95,
}

impl Percentile {
    const ORDERED: [Self; 7] = [
        Self::P5,
        Self::P10,
        Self::P25,
        Self::P50,
        Self::P75,
        Self::P90,
        Self::P95,
    ];

    /// Resolve a value against seven ascending cut points.
    ///
    /// The smallest bucket whose cut point is `>= value` wins; anything above
    /// the 90th cut point lands in the 95 bucket.
    #[must_use]
    pub fn from_cut_points(value: f64, cut_points: &[f64; 7]) -> Self {
        let index = bucket_index(value, cut_points, UpperBound::Inclusive);
        Self::ORDERED[index.min(Self::ORDERED.len() - 1)]
    }

    /// Numeric bucket value (5, 10, 25, 50, 75, 90 or 95)
    #[must_use]
    pub const fn value(&self) -> u8 {
        BUCKETS[*self as usize]
    }
}

impl From<Percentile> for u8 {
    fn from(percentile: Percentile) -> Self {
        percentile.value()
    }
}

impl TryFrom<u8> for Percentile {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ORDERED
            .iter()
            .copied()
            .find(|p| p.value() == value)
            .ok_or_else(|| format!("{value} is not a percentile bucket"))
    }
}

impl fmt::Display for Percentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.value())
    }
}
