// ABOUTME: Derived-metrics command for somatrack-cli
// ABOUTME: Evaluates every stored measurement of a person and prints the results as JSON

use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Serialize;
use somatrack::intelligence::DerivedMetrics;
use somatrack::store::MeasurementStore;
use std::path::Path;

use crate::helpers::display::print_json;
use crate::helpers::files::{load_history, load_person};

#[derive(Serialize)]
struct MeasurementMetrics {
    recorded_at: NaiveDateTime,
    weight_kg: f64,
    metrics: DerivedMetrics,
}

/// Print derived metrics for each measurement, newest first
pub fn show(person: &Path, history: &Path, as_of: Option<NaiveDate>) -> Result<()> {
    let person = load_person(person)?;
    let store = load_history(history)?;
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());

    let report: Vec<MeasurementMetrics> = store
        .measurements_for(person.id)?
        .into_iter()
        .map(|measurement| MeasurementMetrics {
            recorded_at: measurement.recorded_at,
            weight_kg: measurement.weight_kg,
            metrics: DerivedMetrics::compute(&person, &measurement, as_of),
        })
        .collect();

    print_json(&report)
}
