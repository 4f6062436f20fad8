// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup plus person and measurement builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `somatrack`

use chrono::{NaiveDate, NaiveDateTime};
use somatrack::models::{Gender, Measurement, Person, SkinfoldReadings, SkinfoldSite};
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
}

/// Male born 2003-03-15, 1.75 m
pub fn test_person() -> Person {
    Person::new("Ana", "Ruiz")
        .with_birth_date(date(2003, 3, 15))
        .with_gender(Gender::Male)
        .with_height(1.75)
}

/// Weight-only measurement, BMI precomputed for 1.75 m
pub fn weigh_in(person: &Person, recorded_at: NaiveDateTime, weight_kg: f64) -> Measurement {
    let bmi = weight_kg / (1.75 * 1.75);
    Measurement::new(person.id, recorded_at, weight_kg, 1.75, bmi).unwrap()
}

/// Measurement with triceps 6.5, subscapular 6.5, suprailiac 8 and abdominal 12
pub fn caliper_measurement(person: &Person, recorded_at: NaiveDateTime) -> Measurement {
    Measurement::new(person.id, recorded_at, 70.0, 1.75, 22.86)
        .unwrap()
        .with_skinfold(
            SkinfoldSite::Triceps,
            SkinfoldReadings::new(Some(6.0), Some(7.0), None),
        )
        .with_skinfold(
            SkinfoldSite::Subscapular,
            SkinfoldReadings::new(Some(6.0), Some(7.0), Some(6.5)),
        )
        .with_skinfold(
            SkinfoldSite::Suprailiac,
            SkinfoldReadings::new(Some(8.0), Some(8.0), None),
        )
        .with_skinfold(
            SkinfoldSite::Abdominal,
            SkinfoldReadings::new(Some(12.0), Some(12.0), None),
        )
}
