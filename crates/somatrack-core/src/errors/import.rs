// ABOUTME: Import-specific error types for device-export and record CSV ingestion
// ABOUTME: Provides structured errors that convert into the unified AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

use super::{AppError, ErrorCode};
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while ingesting and reconciling imported measurements.
///
/// Row-level failures of the scale export are not represented here: they are
/// skipped by the parser. `RowRejected` only appears in the per-row error
/// report of the record CSV re-import.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ImportError {
    /// The person has no cached height, so imported weights cannot get a BMI
    #[error("Person {person_id} has no stored height; set a height before importing")]
    MissingHeight {
        /// Person the batch was imported for
        person_id: Uuid,
    },

    /// The file produced no usable records
    #[error("No valid records could be extracted from the file")]
    NoRecords,

    /// The CSV reader itself failed
    #[error("CSV error: {0}")]
    Csv(String),

    /// A single row could not be turned into a measurement
    #[error("Row {row}: {reason}")]
    RowRejected {
        /// 1-based row number (the header is row 1)
        row: usize,
        /// Why the row was rejected
        reason: String,
    },
}

impl ImportError {
    /// Create a "row rejected" error
    #[must_use]
    pub fn row_rejected(row: usize, reason: impl Into<String>) -> Self {
        Self::RowRejected {
            row,
            reason: reason.into(),
        }
    }

    /// Error code used when this error surfaces as an `AppError`
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingHeight { .. } => ErrorCode::PreconditionFailed,
            Self::NoRecords => ErrorCode::InvalidInput,
            Self::Csv(_) | Self::RowRejected { .. } => ErrorCode::InvalidFormat,
        }
    }
}

impl From<ImportError> for AppError {
    fn from(error: ImportError) -> Self {
        let mut app_error = Self::new(error.error_code(), error.to_string());
        match &error {
            ImportError::MissingHeight { person_id } => {
                app_error = app_error.with_person_id(*person_id);
            }
            ImportError::RowRejected { row, .. } => {
                app_error = app_error.with_row(*row);
            }
            ImportError::NoRecords | ImportError::Csv(_) => {}
        }
        app_error.with_source(error)
    }
}
