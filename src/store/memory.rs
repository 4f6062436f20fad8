// ABOUTME: In-memory measurement store backing the CLI and tests
// ABOUTME: Serializes as a plain JSON array of measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

use super::MeasurementStore;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use somatrack_core::models::Measurement;
use std::cmp::Reverse;
use uuid::Uuid;

/// Measurement history held in memory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryMeasurementStore {
    measurements: Vec<Measurement>,
}

impl InMemoryMeasurementStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with existing history
    #[must_use]
    pub fn from_measurements(measurements: Vec<Measurement>) -> Self {
        Self { measurements }
    }

    /// Number of stored measurements across every person
    #[must_use]
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Every stored measurement in insertion order
    #[must_use]
    pub fn into_measurements(self) -> Vec<Measurement> {
        self.measurements
    }

    fn position(&self, person_id: Uuid, recorded_at: NaiveDateTime) -> Option<usize> {
        self.measurements
            .iter()
            .position(|m| m.person_id == person_id && m.recorded_at == recorded_at)
    }
}

impl MeasurementStore for InMemoryMeasurementStore {
    fn has_measurement_at(&self, person_id: Uuid, recorded_at: NaiveDateTime) -> AppResult<bool> {
        Ok(self.position(person_id, recorded_at).is_some())
    }

    fn insert_measurement(&mut self, measurement: Measurement) -> AppResult<()> {
        if self
            .position(measurement.person_id, measurement.recorded_at)
            .is_some()
        {
            return Err(AppError::already_exists(format!(
                "Measurement at {}",
                measurement.recorded_at
            ))
            .with_person_id(measurement.person_id));
        }
        self.measurements.push(measurement);
        Ok(())
    }

    fn measurements_for(&self, person_id: Uuid) -> AppResult<Vec<Measurement>> {
        let mut history: Vec<Measurement> = self
            .measurements
            .iter()
            .filter(|m| m.person_id == person_id)
            .cloned()
            .collect();
        history.sort_by_key(|m| Reverse(m.recorded_at));
        Ok(history)
    }

    fn remove_measurement(
        &mut self,
        person_id: Uuid,
        recorded_at: NaiveDateTime,
    ) -> AppResult<bool> {
        Ok(self
            .position(person_id, recorded_at)
            .map(|index| self.measurements.remove(index))
            .is_some())
    }
}
