// ABOUTME: Console output helpers for somatrack-cli
// ABOUTME: JSON documents go to stdout, human-readable reports follow the same layout

use anyhow::{Context, Result};
use serde::Serialize;
use somatrack::errors::ImportError;
use somatrack::import::ImportSummary;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

/// Report the outcome of a scale-export import
pub fn display_import_summary(summary: &ImportSummary) {
    println!("Import complete");
    println!("{}", "=".repeat(40));
    println!("   Created: {}", summary.created);
    println!("   Duplicates skipped: {}", summary.duplicates);
    if summary.rejected > 0 {
        println!("   Rejected: {}", summary.rejected);
    }
}

/// Report the outcome of a record CSV re-import
pub fn display_records_report(created: usize, duplicates: usize, errors: &[ImportError]) {
    println!("Records import complete");
    println!("{}", "=".repeat(40));
    println!("   Created: {created}");
    println!("   Duplicates skipped: {duplicates}");
    if errors.is_empty() {
        return;
    }
    println!("   Rows with errors: {}", errors.len());
    for error in errors {
        println!("   - {error}");
    }
}
