// ABOUTME: Core data models for body-composition tracking
// ABOUTME: Re-exports Person, Gender, Measurement, skinfold and circumference records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

//! # Data Models
//!
//! Plain, storage-independent snapshots consumed by the metrics engine and
//! produced by the import pipeline. Persistence is an external concern: these
//! types only derive `serde` traits so a caller can store them however it likes.

/// Measurement snapshot with skinfold and circumference records
mod measurement;
/// Person demographics and age helpers
mod person;

pub use measurement::{Circumferences, Measurement, SkinfoldReadings, SkinfoldSite, Skinfolds};
pub use person::{age_on, Gender, Person};
