// ABOUTME: Measurement persistence abstraction consulted by the import reconciler
// ABOUTME: Synchronous store trait plus an in-memory, serde-serialisable implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

//! Measurement storage
//!
//! The reconciler needs duplicate detection and insertion only. Implementors
//! provide the per-person exclusive section through `&mut self`: a batch holds
//! the store mutably from its first lookup to its last insert.

use crate::errors::AppResult;
use chrono::NaiveDateTime;
use somatrack_core::models::Measurement;
use uuid::Uuid;

/// In-memory store
pub mod memory;

pub use memory::InMemoryMeasurementStore;

/// Storage abstraction for a person's measurement history
pub trait MeasurementStore {
    /// Whether a measurement exists at exactly this timestamp for the person
    ///
    /// # Errors
    ///
    /// Returns the backend's error when it cannot be queried
    fn has_measurement_at(&self, person_id: Uuid, recorded_at: NaiveDateTime) -> AppResult<bool>;

    /// Persist a new measurement
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` for a `(person, timestamp)` already stored
    fn insert_measurement(&mut self, measurement: Measurement) -> AppResult<()>;

    /// All of a person's measurements, newest first
    ///
    /// # Errors
    ///
    /// Returns the backend's error when it cannot be queried
    fn measurements_for(&self, person_id: Uuid) -> AppResult<Vec<Measurement>>;

    /// Hard-delete one measurement, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns the backend's error when it cannot be updated
    fn remove_measurement(&mut self, person_id: Uuid, recorded_at: NaiveDateTime)
        -> AppResult<bool>;
}
