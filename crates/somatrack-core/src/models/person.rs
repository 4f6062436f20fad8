// ABOUTME: Person demographic snapshot read by the metrics engine
// ABOUTME: Gender, birth date, cached height, soft-delete flag, and completed-years age
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

use crate::errors::AppError;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Biological sex used to select gender-specific formula tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male tables
    #[serde(rename = "M")]
    Male,
    /// Female tables
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Single-letter code used in profiles and exports
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" | "m" => Ok(Self::Male),
            "F" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender '{other}'. Valid options: M, F"
            ))),
        }
    }
}

/// Demographic facts about the person being measured.
///
/// Owned by the profile collaborator; the engine only reads it. A person is
/// never hard-deleted while measurements reference it, only deactivated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Stable identifier
    pub id: Uuid,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Birth date, required by every age-banded formula
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Gender, required by every gender-specific table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Height in meters, cached for reuse by imported measurements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_m: Option<f64>,
    /// When the profile was created
    pub created_at: DateTime<Utc>,
    /// False once the profile is deactivated
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

impl Person {
    /// Create an active person with no demographic facts yet
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date: None,
            gender: None,
            height_m: None,
            created_at: Utc::now(),
            active: true,
        }
    }

    /// Set the birth date
    #[must_use]
    pub const fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Set the gender
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set the cached height in meters
    #[must_use]
    pub const fn with_height(mut self, height_m: f64) -> Self {
        self.height_m = Some(height_m);
        self
    }

    /// "First Last"
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age in completed years on `as_of`, absent without a birth date
    #[must_use]
    pub fn age_on(&self, as_of: NaiveDate) -> Option<u32> {
        self.birth_date.and_then(|birth| age_on(birth, as_of))
    }

    /// Cached height usable for new measurements.
    ///
    /// A stored non-positive height is treated as missing.
    #[must_use]
    pub fn usable_height(&self) -> Option<f64> {
        self.height_m.filter(|h| *h > 0.0)
    }

    /// Cache `height_m` only if no usable height is stored yet.
    ///
    /// Returns true when the height was stored.
    pub fn remember_height(&mut self, height_m: f64) -> bool {
        if self.usable_height().is_some() || height_m <= 0.0 {
            return false;
        }
        self.height_m = Some(height_m);
        true
    }

    /// Soft delete
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Age in completed years on `as_of`.
///
/// One year is subtracted while this year's birthday is still ahead, so the
/// birthday itself counts as completed. Returns `None` when `as_of` precedes
/// the birth date.
#[must_use]
pub fn age_on(birth_date: NaiveDate, as_of: NaiveDate) -> Option<u32> {
    if as_of < birth_date {
        return None;
    }
    let mut years = as_of.year() - birth_date.year();
    if (as_of.month(), as_of.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}
