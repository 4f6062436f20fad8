// ABOUTME: Reconciles parsed weigh-ins against a person's stored measurement history
// ABOUTME: Plans new records and duplicates first, then inserts the whole batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

//! Import reconciliation
//!
//! A batch is planned before anything is written: the height precondition,
//! duplicate detection (against the store and within the batch) and record
//! validation all happen first, so a failing batch leaves the store untouched.

use super::recognizer::WeighIn;
use crate::errors::AppResult;
use crate::logging::ImportLogger;
use crate::store::MeasurementStore;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use somatrack_core::errors::ImportError;
use somatrack_core::models::{Measurement, Person};
use somatrack_intelligence::algorithms::compute_bmi;
use std::collections::HashSet;

/// Outcome of one reconciled batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Measurements written
    pub created: usize,
    /// Weigh-ins whose timestamp already existed
    pub duplicates: usize,
    /// Weigh-ins that could not become a valid measurement
    pub rejected: usize,
}

/// Measurements a batch would create, with the skip counts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportPlan {
    /// New measurements in source order
    pub to_create: Vec<Measurement>,
    /// Weigh-ins whose timestamp already existed
    pub duplicates: usize,
    /// Weigh-ins that could not become a valid measurement
    pub rejected: usize,
}

/// BMI for an imported weigh-in: the device value when it is positive,
/// otherwise computed from the weight and the person's height
#[must_use]
pub fn imported_bmi(weigh_in: &WeighIn, height_m: f64) -> f64 {
    weigh_in
        .bmi
        .filter(|bmi| *bmi > 0.0)
        .unwrap_or_else(|| compute_bmi(weigh_in.weight_kg, height_m))
}

/// Decide what a batch would do without writing anything
///
/// # Errors
///
/// Returns `ImportError::MissingHeight` when the person has no stored height,
/// or a storage error from the duplicate lookup
pub fn plan_import<S: MeasurementStore + ?Sized>(
    person: &Person,
    weigh_ins: &[WeighIn],
    store: &S,
) -> AppResult<ImportPlan> {
    let Some(height_m) = person.usable_height() else {
        let error = ImportError::MissingHeight {
            person_id: person.id,
        };
        ImportLogger::log_batch_rejected(person.id, &error.to_string());
        return Err(error.into());
    };

    let mut plan = ImportPlan::default();
    let mut seen: HashSet<NaiveDateTime> = HashSet::new();

    for weigh_in in weigh_ins {
        if seen.contains(&weigh_in.recorded_at)
            || store.has_measurement_at(person.id, weigh_in.recorded_at)?
        {
            plan.duplicates += 1;
            continue;
        }
        let bmi = imported_bmi(weigh_in, height_m);
        match Measurement::new(
            person.id,
            weigh_in.recorded_at,
            weigh_in.weight_kg,
            height_m,
            bmi,
        ) {
            Ok(measurement) => {
                seen.insert(weigh_in.recorded_at);
                plan.to_create.push(measurement);
            }
            Err(e) => {
                plan.rejected += 1;
                ImportLogger::log_weigh_in_rejected(person.id, weigh_in.recorded_at, &e.message);
            }
        }
    }
    Ok(plan)
}

/// Insert every planned measurement
///
/// # Errors
///
/// Returns the first storage error
pub fn apply_plan<S: MeasurementStore + ?Sized>(
    plan: ImportPlan,
    store: &mut S,
) -> AppResult<ImportSummary> {
    let summary = ImportSummary {
        created: plan.to_create.len(),
        duplicates: plan.duplicates,
        rejected: plan.rejected,
    };
    for measurement in plan.to_create {
        store.insert_measurement(measurement)?;
    }
    Ok(summary)
}

/// Reconcile weigh-ins for one person against the store.
///
/// The `&mut` borrow of the store spans the whole batch, which is the
/// exclusive section per person that duplicate detection relies on.
///
/// # Errors
///
/// Returns `ImportError::MissingHeight` before anything is written when the
/// person has no stored height, or the first storage error
pub fn reconcile<S: MeasurementStore + ?Sized>(
    person: &Person,
    weigh_ins: &[WeighIn],
    store: &mut S,
) -> AppResult<ImportSummary> {
    let plan = plan_import(person, weigh_ins, &*store)?;
    let summary = apply_plan(plan, store)?;
    ImportLogger::log_import_summary(person.id, summary.created, summary.duplicates);
    Ok(summary)
}
