// ABOUTME: Core types and constants for the Somatrack body-composition tracker
// ABOUTME: Foundation crate with error handling, measurement models, and age helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

#![deny(unsafe_code)]

//! # Somatrack Core
//!
//! Foundation crate providing shared types for the Somatrack body-composition
//! tracker. The metrics engine and the import pipeline both build on these
//! plain data snapshots; nothing here touches storage or I/O.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ImportError`
//! - **models**: `Person`, `Measurement`, skinfold and circumference records
//! - **constants**: Shared limits and service names

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Person, Measurement, Skinfolds, Circumferences)
pub mod models;
