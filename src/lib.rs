// ABOUTME: Main library entry point for the Somatrack body-composition tracker
// ABOUTME: Scale-export ingestion, record CSV exchange, storage abstraction and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

#![deny(unsafe_code)]

//! # Somatrack
//!
//! Tracks body-composition measurements over time. The metrics engine lives
//! in `somatrack-intelligence`; this crate feeds it data.
//!
//! ## Features
//!
//! - **Scale-export import**: parses date-grouped weigh-ins from a smart-scale
//!   CSV export and reconciles them against stored history without duplicates
//! - **Record CSV**: exports a full history with derived columns and reads it
//!   back
//! - **Storage seam**: `MeasurementStore` trait with an in-memory store
//!
//! ## Architecture
//!
//! - **import**: row recognizer, lazy parser, reconciler, record re-import
//! - **export**: record CSV writer
//! - **store**: measurement persistence abstraction
//! - **config**: environment-only configuration
//! - **logging**: `tracing` subscriber setup and import events

/// Environment-based configuration
pub mod config;

/// Unified error types
pub mod errors;

/// Record CSV export
pub mod export;

/// Scale-export and record CSV ingestion
pub mod import;

/// Structured logging setup
pub mod logging;

/// Measurement persistence abstraction
pub mod store;

pub use somatrack_core::models;
pub use somatrack_intelligence as intelligence;
