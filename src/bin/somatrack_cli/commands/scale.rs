// ABOUTME: Scale-export commands for somatrack-cli
// ABOUTME: Parse-only inspection and full import into a history file

use anyhow::Result;
use somatrack::config::ImportConfig;
use somatrack::import::{import_scale_export, parse_scale_export};
use std::path::Path;
use tracing::info;

use crate::helpers::display::{display_import_summary, print_json};
use crate::helpers::files::{load_history, load_person, read_text, save_history};

/// Print the weigh-ins a scale export contains without importing them
pub fn parse(csv: &Path, config: &ImportConfig) -> Result<()> {
    let content = read_text(csv)?;
    let weigh_ins = parse_scale_export(&content, config)?;
    info!(file = %csv.display(), weigh_ins = weigh_ins.len(), "Parsed scale export");
    print_json(&weigh_ins)
}

/// Reconcile a scale export into the history and save it
pub fn import(person: &Path, history: &Path, csv: &Path, config: &ImportConfig) -> Result<()> {
    let person = load_person(person)?;
    let mut store = load_history(history)?;
    let content = read_text(csv)?;

    let summary = import_scale_export(&content, &person, &mut store, config)?;
    if summary.created > 0 {
        save_history(history, &store)?;
    }

    display_import_summary(&summary);
    Ok(())
}
