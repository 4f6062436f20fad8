// ABOUTME: Measurement ingestion from scale exports and record CSV files
// ABOUTME: Row recognizer, lazy parser, reconciler and the end-to-end scale import
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

//! Measurement import
//!
//! Two formats are read:
//!
//! - **Scale exports**: date-marker rows followed by timestamped weigh-ins,
//!   reconciled against the stored history
//! - **Record CSV**: the layout written by `crate::export`, re-imported row by
//!   row

/// Localized month names in date markers
pub mod locale;

/// Scale-export row classification and cell parsing
pub mod recognizer;

/// Scale-export parser state machine
pub mod scale_csv;

/// Duplicate detection and insertion of parsed weigh-ins
pub mod reconciler;

/// Record CSV re-import
pub mod records_csv;

pub use locale::MonthLocale;
pub use recognizer::{RowKind, SampleRejection, WeighIn};
pub use reconciler::{reconcile, ImportPlan, ImportSummary};
pub use records_csv::{read_records, RecordsImport};
pub use scale_csv::{parse_rows, parse_scale_export, ScaleExportParser};

use crate::config::ImportConfig;
use crate::errors::AppResult;
use crate::store::MeasurementStore;
use somatrack_core::errors::ImportError;
use somatrack_core::models::Person;

/// Parse a scale export and reconcile it into the person's history.
///
/// # Errors
///
/// - `ImportError::NoRecords` when the file yields no weigh-ins
/// - `ImportError::MissingHeight` when the person has no stored height; nothing
///   is written in that case
/// - CSV reader and storage errors
pub fn import_scale_export<S: MeasurementStore + ?Sized>(
    content: &str,
    person: &Person,
    store: &mut S,
    config: &ImportConfig,
) -> AppResult<ImportSummary> {
    let weigh_ins = parse_scale_export(content, config)?;
    if weigh_ins.is_empty() {
        return Err(ImportError::NoRecords.into());
    }
    reconcile(person, &weigh_ins, store)
}
