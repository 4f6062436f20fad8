// ABOUTME: Re-exports the unified error types from somatrack-core
// ABOUTME: Lets application modules import errors from crate::errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

//! Unified error handling, defined in `somatrack_core::errors`

pub use somatrack_core::errors::{AppError, AppResult, ErrorCode, ErrorContext, ImportError};
