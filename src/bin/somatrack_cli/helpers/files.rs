// ABOUTME: JSON persistence for person profiles and measurement histories
// ABOUTME: A missing history file is an empty history; writes are pretty-printed

use anyhow::{Context, Result};
use somatrack::models::Person;
use somatrack::store::InMemoryMeasurementStore;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a text file such as a CSV export
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Load a person profile
pub fn load_person(path: &Path) -> Result<Person> {
    let content = read_text(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid person profile in {}", path.display()))
}

/// Load a measurement history, empty when the file does not exist yet
pub fn load_history(path: &Path) -> Result<InMemoryMeasurementStore> {
    if !path.exists() {
        debug!(path = %path.display(), "History file not found, starting empty");
        return Ok(InMemoryMeasurementStore::new());
    }
    let content = read_text(path)?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid measurement history in {}", path.display()))
}

/// Overwrite the history file with the store contents
pub fn save_history(path: &Path, store: &InMemoryMeasurementStore) -> Result<()> {
    let json = serde_json::to_string_pretty(store).context("Failed to serialize history")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    debug!(path = %path.display(), measurements = store.len(), "Saved history");
    Ok(())
}
