// ABOUTME: Point-in-time physical assessment snapshot with skinfolds and circumferences
// ABOUTME: Enforces positive weight/height and the two-of-three skinfold averaging policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

use crate::constants::skinfolds::{MIN_VALID_READINGS, READINGS_PER_SITE};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Caliper measurement sites, in the order they are recorded and exported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinfoldSite {
    /// Back of the upper arm
    Triceps,
    /// Below the shoulder blade
    Subscapular,
    /// Above the iliac crest
    Suprailiac,
    /// Beside the navel
    Abdominal,
    /// Front of the thigh
    FrontThigh,
    /// Medial calf
    Calf,
}

impl SkinfoldSite {
    /// Every site, in recording order
    pub const ALL: [Self; 6] = [
        Self::Triceps,
        Self::Subscapular,
        Self::Suprailiac,
        Self::Abdominal,
        Self::FrontThigh,
        Self::Calf,
    ];

    /// Sites entering the Durnin-Womersley sum
    pub const DENSITY_SITES: [Self; 4] = [
        Self::Triceps,
        Self::Subscapular,
        Self::Suprailiac,
        Self::Abdominal,
    ];

    /// Stable snake_case key used in CSV headers
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Triceps => "triceps",
            Self::Subscapular => "subscapular",
            Self::Suprailiac => "suprailiac",
            Self::Abdominal => "abdominal",
            Self::FrontThigh => "front_thigh",
            Self::Calf => "calf",
        }
    }
}

impl fmt::Display for SkinfoldSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Up to three raw caliper readings at one site plus their derived average.
///
/// The average exists iff at least two readings are present; it is always
/// derived from the readings and never accepted from outside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawReadings")]
pub struct SkinfoldReadings {
    readings: [Option<f64>; READINGS_PER_SITE],
    average: Option<f64>,
}

/// Deserialization shape: only the raw readings are trusted
#[derive(Deserialize)]
struct RawReadings {
    #[serde(default)]
    readings: [Option<f64>; READINGS_PER_SITE],
}

impl From<RawReadings> for SkinfoldReadings {
    fn from(raw: RawReadings) -> Self {
        let [r1, r2, r3] = raw.readings;
        Self::new(r1, r2, r3)
    }
}

impl SkinfoldReadings {
    /// Record the readings of one site and derive their average
    #[must_use]
    pub fn new(r1: Option<f64>, r2: Option<f64>, r3: Option<f64>) -> Self {
        let readings = [r1, r2, r3];
        let present: Vec<f64> = readings.iter().flatten().copied().collect();
        let average = if present.len() >= MIN_VALID_READINGS {
            Some(present.iter().sum::<f64>() / present.len() as f64)
        } else {
            None
        };
        Self { readings, average }
    }

    /// The raw readings in the order they were taken
    #[must_use]
    pub const fn readings(&self) -> [Option<f64>; READINGS_PER_SITE] {
        self.readings
    }

    /// Average of the present readings, absent below two readings
    #[must_use]
    pub const fn average(&self) -> Option<f64> {
        self.average
    }

    /// Number of readings present
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.readings.iter().flatten().count()
    }
}

/// Readings for all six caliper sites
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Skinfolds {
    /// Triceps readings
    #[serde(default)]
    pub triceps: SkinfoldReadings,
    /// Subscapular readings
    #[serde(default)]
    pub subscapular: SkinfoldReadings,
    /// Suprailiac readings
    #[serde(default)]
    pub suprailiac: SkinfoldReadings,
    /// Abdominal readings
    #[serde(default)]
    pub abdominal: SkinfoldReadings,
    /// Front thigh readings
    #[serde(default)]
    pub front_thigh: SkinfoldReadings,
    /// Calf readings
    #[serde(default)]
    pub calf: SkinfoldReadings,
}

impl Skinfolds {
    /// Readings for one site
    #[must_use]
    pub const fn site(&self, site: SkinfoldSite) -> &SkinfoldReadings {
        match site {
            SkinfoldSite::Triceps => &self.triceps,
            SkinfoldSite::Subscapular => &self.subscapular,
            SkinfoldSite::Suprailiac => &self.suprailiac,
            SkinfoldSite::Abdominal => &self.abdominal,
            SkinfoldSite::FrontThigh => &self.front_thigh,
            SkinfoldSite::Calf => &self.calf,
        }
    }

    /// Replace the readings of one site
    pub fn set_site(&mut self, site: SkinfoldSite, readings: SkinfoldReadings) {
        let slot = match site {
            SkinfoldSite::Triceps => &mut self.triceps,
            SkinfoldSite::Subscapular => &mut self.subscapular,
            SkinfoldSite::Suprailiac => &mut self.suprailiac,
            SkinfoldSite::Abdominal => &mut self.abdominal,
            SkinfoldSite::FrontThigh => &mut self.front_thigh,
            SkinfoldSite::Calf => &mut self.calf,
        };
        *slot = readings;
    }

    /// Derived average of one site
    #[must_use]
    pub const fn average(&self, site: SkinfoldSite) -> Option<f64> {
        self.site(site).average()
    }
}

/// Girth measurements in centimeters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Circumferences {
    /// Neck
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neck_cm: Option<f64>,
    /// Chest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest_cm: Option<f64>,
    /// Relaxed upper arm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arm_cm: Option<f64>,
    /// Forearm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forearm_cm: Option<f64>,
    /// Waist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist_cm: Option<f64>,
    /// Hip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,
    /// Mid thigh
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thigh_cm: Option<f64>,
    /// Calf
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calf_cm: Option<f64>,
}

impl Circumferences {
    /// All eight girths in export order
    #[must_use]
    pub const fn in_order(&self) -> [Option<f64>; 8] {
        [
            self.neck_cm,
            self.chest_cm,
            self.arm_cm,
            self.forearm_cm,
            self.waist_cm,
            self.hip_cm,
            self.thigh_cm,
            self.calf_cm,
        ]
    }
}

/// One point-in-time physical assessment.
///
/// Weight and height are always present and positive. The stored `bmi` is the
/// value recorded at creation time (device-provided or computed); derived
/// metrics are never stored here. Deserialization goes through
/// `Measurement::new`, so stored history cannot bypass the weight and height
/// checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMeasurement")]
pub struct Measurement {
    /// Person the measurement belongs to
    pub person_id: Uuid,
    /// Local wall-clock time the sample was taken
    pub recorded_at: NaiveDateTime,
    /// Body weight in kg
    pub weight_kg: f64,
    /// Height in meters
    pub height_m: f64,
    /// Body mass index recorded with the measurement
    pub bmi: f64,
    /// Caliper readings
    #[serde(default)]
    pub skinfolds: Skinfolds,
    /// Girth measurements
    #[serde(default)]
    pub circumferences: Circumferences,
    /// Free-text observations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Deserialization shape, validated into a `Measurement`
#[derive(Deserialize)]
struct RawMeasurement {
    person_id: Uuid,
    recorded_at: NaiveDateTime,
    weight_kg: f64,
    height_m: f64,
    bmi: f64,
    #[serde(default)]
    skinfolds: Skinfolds,
    #[serde(default)]
    circumferences: Circumferences,
    #[serde(default)]
    notes: Option<String>,
}

impl TryFrom<RawMeasurement> for Measurement {
    type Error = AppError;

    fn try_from(raw: RawMeasurement) -> AppResult<Self> {
        let mut measurement = Self::new(
            raw.person_id,
            raw.recorded_at,
            raw.weight_kg,
            raw.height_m,
            raw.bmi,
        )?
        .with_circumferences(raw.circumferences);
        measurement.skinfolds = raw.skinfolds;
        measurement.notes = raw.notes;
        Ok(measurement)
    }
}

impl Measurement {
    /// Create a measurement with only the required fields.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` if weight or height is not a
    /// positive finite number.
    pub fn new(
        person_id: Uuid,
        recorded_at: NaiveDateTime,
        weight_kg: f64,
        height_m: f64,
        bmi: f64,
    ) -> AppResult<Self> {
        if !(weight_kg.is_finite() && weight_kg > 0.0) {
            return Err(AppError::value_out_of_range(format!(
                "Weight must be positive, got {weight_kg}"
            )));
        }
        if !(height_m.is_finite() && height_m > 0.0) {
            return Err(AppError::value_out_of_range(format!(
                "Height must be positive, got {height_m}"
            )));
        }
        Ok(Self {
            person_id,
            recorded_at,
            weight_kg,
            height_m,
            bmi,
            skinfolds: Skinfolds::default(),
            circumferences: Circumferences::default(),
            notes: None,
        })
    }

    /// Set the readings of one skinfold site
    #[must_use]
    pub fn with_skinfold(mut self, site: SkinfoldSite, readings: SkinfoldReadings) -> Self {
        self.skinfolds.set_site(site, readings);
        self
    }

    /// Set the girth measurements
    #[must_use]
    pub const fn with_circumferences(mut self, circumferences: Circumferences) -> Self {
        self.circumferences = circumferences;
        self
    }

    /// Attach free-text notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
