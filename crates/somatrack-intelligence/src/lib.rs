// ABOUTME: Body-composition metrics engine for Somatrack
// ABOUTME: Anthropometric formulas, banded lookups, motivational insights and derived metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

#![deny(unsafe_code)]

//! # Somatrack Intelligence
//!
//! Pure, synchronous computations over `Person` and `Measurement` snapshots.
//! Every age- or gender-dependent value is `None` when its input is missing;
//! nothing in this crate defaults an unknown age or gender.
//!
//! ## Modules
//!
//! - **algorithms**: BMI, skinfold sums, Durnin-Womersley density, Siri body fat, AAHPERD
//! - **bands**: Ordered-threshold lookup, `Severity` and `Percentile`
//! - **physiological_constants**: Coefficient and threshold tables
//! - **insights**: Motivational messages keyed by AAHPERD percentile
//! - **metrics**: `DerivedMetrics` aggregate

/// Anthropometric formulas
pub mod algorithms;

/// Band lookup, severity tags and percentile buckets
pub mod bands;

/// Formula coefficient and threshold tables
pub mod physiological_constants;

/// Motivational guidance keyed by percentile
pub mod insights;

/// Derived metrics aggregate for one measurement
pub mod metrics;

pub use bands::{Percentile, Severity};
pub use insights::{motivational_message, MotivationalMessage};
pub use metrics::DerivedMetrics;
