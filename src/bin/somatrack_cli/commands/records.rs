// ABOUTME: Record CSV commands for somatrack-cli
// ABOUTME: Exports a history with derived columns and re-imports previously exported files

use anyhow::{Context, Result};
use chrono::Local;
use somatrack::export::{export_filename, export_measurements_csv};
use somatrack::import::read_records;
use somatrack::store::MeasurementStore;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::helpers::display::display_records_report;
use crate::helpers::files::{load_history, load_person, read_text, save_history};

/// Write the person's history as record CSV to `output`, or stdout
pub fn export(person: &Path, history: &Path, output: Option<&Path>) -> Result<()> {
    let person = load_person(person)?;
    let store = load_history(history)?;
    let measurements = store.measurements_for(person.id)?;

    let now = Local::now().naive_local();
    let Some(content) = export_measurements_csv(&person, &measurements, now.date())? else {
        warn!(person_id = %person.id, "No measurements to export");
        return Ok(());
    };

    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(file = %path.display(), rows = measurements.len(), "Exported records");
        }
        None => {
            info!(
                suggested_name = %export_filename(&person, now),
                rows = measurements.len(),
                "Exporting records to stdout"
            );
            print!("{content}");
        }
    }
    Ok(())
}

/// Insert every valid, not yet stored row of a record CSV into the history
pub fn import(person: &Path, history: &Path, csv: &Path) -> Result<()> {
    let person = load_person(person)?;
    let mut store = load_history(history)?;
    let content = read_text(csv)?;

    let parsed = read_records(&content, person.id)?;
    let mut created = 0;
    let mut duplicates = 0;
    for measurement in parsed.measurements {
        if store.has_measurement_at(person.id, measurement.recorded_at)? {
            duplicates += 1;
            continue;
        }
        store.insert_measurement(measurement)?;
        created += 1;
    }

    if created > 0 {
        save_history(history, &store)?;
    }

    display_records_report(created, duplicates, &parsed.errors);
    Ok(())
}
