// ABOUTME: Derived body-composition metrics for one measurement of one person
// ABOUTME: Recomputed on demand from Person + Measurement, never cached or persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

//! Derived metrics aggregation
//!
//! `DerivedMetrics` gathers every value the engine can compute for a
//! measurement. Values depending on age, gender or skinfold averages are
//! `None` when that input is missing.

use crate::algorithms::{
    body_density, classify_aahperd, classify_bmi, classify_body_fat, compute_bmi,
    estimate_body_fat, percentile_aahperd, percentile_of_body_fat, progress_to_next_band,
    sum_four_skinfolds, sum_six_skinfolds, sum_triceps_subscapular, AahperdClass, BandProgress,
    BmiClass, BodyFatClass,
};
use crate::bands::Percentile;
use crate::insights::{motivational_message, MotivationalMessage};
use chrono::NaiveDate;
use serde::Serialize;
use somatrack_core::models::{Measurement, Person};
use tracing::debug;

/// Every derived value for one measurement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    /// Age in completed years at the evaluation date
    pub age: Option<u32>,
    /// BMI recomputed from the measurement's weight and height
    pub bmi: f64,
    /// Weight status
    pub bmi_class: BmiClass,
    /// All six site averages, absent sites as 0
    pub sum_six_skinfolds: f64,
    /// Density sites only, absent sites as 0
    pub sum_four_skinfolds: f64,
    /// Durnin-Womersley density (unrounded)
    pub body_density: Option<f64>,
    /// Siri body fat, 1 decimal
    pub body_fat_percent: Option<f64>,
    /// Body-fat band
    pub body_fat_class: Option<BodyFatClass>,
    /// Body-fat population percentile
    pub body_fat_percentile: Option<Percentile>,
    /// Distance to the next body-fat band
    pub body_fat_progress: Option<BandProgress>,
    /// Triceps + subscapular sum
    pub aahperd_spc: Option<f64>,
    /// AAHPERD percentile of the SPC
    pub aahperd_percentile: Option<Percentile>,
    /// AAHPERD rating of the SPC
    pub aahperd_class: Option<AahperdClass>,
    /// Guidance for the AAHPERD percentile
    pub motivation: Option<MotivationalMessage>,
}

impl DerivedMetrics {
    /// Compute every derived value with age evaluated on `as_of`
    #[must_use]
    pub fn compute(person: &Person, measurement: &Measurement, as_of: NaiveDate) -> Self {
        let age = person.age_on(as_of);
        let gender = person.gender;
        let bmi = compute_bmi(measurement.weight_kg, measurement.height_m);
        let sum_four = sum_four_skinfolds(measurement);

        let demographics = age.zip(gender);
        let body_fat = demographics
            .and_then(|(age, gender)| estimate_body_fat(sum_four, age, gender));
        // Density is only reported alongside the estimate it produced
        let density = body_fat
            .and(demographics)
            .and_then(|(age, gender)| body_density(sum_four, age, gender));
        let fat_inputs = body_fat.zip(age).zip(gender);

        let aahperd_spc = sum_triceps_subscapular(measurement);
        let spc_inputs = aahperd_spc.zip(age).zip(gender);
        let aahperd_percentile =
            spc_inputs.map(|((spc, age), gender)| percentile_aahperd(spc, age, gender));

        let metrics = Self {
            age,
            bmi,
            bmi_class: classify_bmi(bmi),
            sum_six_skinfolds: sum_six_skinfolds(measurement),
            sum_four_skinfolds: sum_four,
            body_density: density,
            body_fat_percent: body_fat,
            body_fat_class: fat_inputs
                .and_then(|((pct, age), gender)| classify_body_fat(pct, age, gender)),
            body_fat_percentile: fat_inputs
                .and_then(|((pct, age), gender)| percentile_of_body_fat(pct, age, gender)),
            body_fat_progress: fat_inputs
                .and_then(|((pct, age), gender)| progress_to_next_band(pct, age, gender)),
            aahperd_spc,
            aahperd_percentile,
            aahperd_class: spc_inputs
                .map(|((spc, age), gender)| classify_aahperd(spc, age, gender)),
            motivation: aahperd_percentile.map(motivational_message),
        };

        debug!(
            person_id = %person.id,
            recorded_at = %measurement.recorded_at,
            age = ?metrics.age,
            body_fat_percent = ?metrics.body_fat_percent,
            aahperd_spc = ?metrics.aahperd_spc,
            "Computed derived metrics"
        );
        metrics
    }
}
