// ABOUTME: Configuration management module for Somatrack
// ABOUTME: Environment-only configuration for logging and scale-export import
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

//! Configuration module
//!
//! - **Environment**: `SomatrackConfig` assembled from environment variables
//! - **Import**: header rows, month locale and delimiter of scale exports

/// Environment-based configuration
pub mod environment;

pub use environment::{ImportConfig, SomatrackConfig};
