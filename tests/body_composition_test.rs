// ABOUTME: Integration tests for the anthropometric metrics engine
// ABOUTME: Age boundaries, skinfold sums, body-fat bands and AAHPERD percentiles end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Somatrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{at, caliper_measurement, date, init_test_logging, test_person, weigh_in};
use somatrack::intelligence::algorithms::{AahperdClass, BmiClass, BodyFatClass};
use somatrack::intelligence::{DerivedMetrics, Percentile, Severity};
use somatrack::models::{age_on, Gender, Measurement, Person, SkinfoldReadings, SkinfoldSite};

fn lean_measurement(person: &Person) -> Measurement {
    let readings = SkinfoldReadings::new(Some(2.0), Some(3.0), None);
    SkinfoldSite::DENSITY_SITES
        .iter()
        .fold(weigh_in(person, at(2025, 5, 20, 9, 0), 68.0), |m, site| {
            m.with_skinfold(*site, readings)
        })
}

#[test]
fn test_age_counts_the_birthday_as_completed() {
    let birth = date(2000, 6, 15);
    assert_eq!(age_on(birth, date(2025, 6, 14)), Some(24));
    assert_eq!(age_on(birth, date(2025, 6, 15)), Some(25));
    assert_eq!(age_on(birth, date(1999, 1, 1)), None);

    let person = Person::new("Leap", "Day").with_birth_date(date(2004, 2, 29));
    assert_eq!(person.age_on(date(2025, 2, 28)), Some(20));
    assert_eq!(person.age_on(date(2025, 3, 1)), Some(21));
}

#[test]
fn test_weight_only_measurement_has_no_skinfold_values() {
    init_test_logging();
    let person = test_person();
    let metrics = DerivedMetrics::compute(
        &person,
        &weigh_in(&person, at(2025, 5, 20, 9, 0), 98.7),
        date(2025, 6, 1),
    );

    assert!(metrics.sum_four_skinfolds.abs() < f64::EPSILON);
    assert!(metrics.sum_six_skinfolds.abs() < f64::EPSILON);
    assert_eq!(metrics.body_density, None);
    assert_eq!(metrics.body_fat_percent, None);
    assert_eq!(metrics.body_fat_progress, None);
    assert_eq!(metrics.aahperd_spc, None);
    assert_eq!(metrics.motivation, None);
    assert_eq!(metrics.bmi_class, BmiClass::Obese);
}

#[test]
fn test_university_male_boundary_resolves_to_twenty_fifth_percentile() {
    init_test_logging();
    let person = Person::new("Leo", "Mar")
        .with_birth_date(date(2000, 1, 1))
        .with_gender(Gender::Male)
        .with_height(1.75);
    let metrics = DerivedMetrics::compute(
        &person,
        &caliper_measurement(&person, at(2025, 5, 20, 9, 0)),
        date(2025, 6, 1),
    );

    assert_eq!(metrics.age, Some(25));
    assert_eq!(metrics.aahperd_spc, Some(13.0));
    assert_eq!(metrics.aahperd_percentile, Some(Percentile::P25));
    assert_eq!(metrics.aahperd_class, Some(AahperdClass::VeryGood));
    assert_eq!(
        metrics.motivation.map(|m| m.severity),
        Some(Severity::Primary)
    );
}

#[test]
fn test_lean_measurement_reports_progress_to_next_band() {
    init_test_logging();
    let person = test_person();
    let metrics = DerivedMetrics::compute(&person, &lean_measurement(&person), date(2025, 6, 1));

    assert!((metrics.sum_four_skinfolds - 10.0).abs() < 1e-9);
    // 1.1631 - 0.0632 * 1.0
    assert!((metrics.body_density.unwrap() - 1.0999).abs() < 1e-9);
    assert_eq!(metrics.body_fat_percent, Some(0.0));
    assert_eq!(metrics.body_fat_class, Some(BodyFatClass::VeryLow));
    assert_eq!(metrics.body_fat_percentile, Some(Percentile::P5));

    let progress = metrics.body_fat_progress.unwrap();
    assert_eq!(progress.next, Some(BodyFatClass::Low));
    assert_eq!(progress.target_percent, Some(8.0));
    assert_eq!(progress.delta, Some(8.0));

    assert_eq!(metrics.aahperd_spc, Some(5.0));
    assert_eq!(metrics.aahperd_class, Some(AahperdClass::Excellent));
    assert_eq!(
        metrics.motivation.map(|m| m.severity),
        Some(Severity::Success)
    );
}

#[test]
fn test_top_band_has_no_next_band() {
    let person = test_person();
    let metrics = DerivedMetrics::compute(
        &person,
        &caliper_measurement(&person, at(2025, 5, 20, 9, 0)),
        date(2025, 6, 1),
    );

    // 1.1631 - 0.0632 * 3.3 = 0.95454
    assert_eq!(metrics.body_fat_percent, Some(68.6));
    assert_eq!(metrics.body_fat_class, Some(BodyFatClass::VeryHigh));
    assert_eq!(metrics.body_fat_percentile, Some(Percentile::P95));

    let progress = metrics.body_fat_progress.unwrap();
    assert_eq!(progress.current, BodyFatClass::VeryHigh);
    assert_eq!(progress.next, None);
    assert_eq!(progress.delta, None);
}

#[test]
fn test_minors_get_density_without_adult_bands() {
    let seventeen = Person::new("Teo", "Gil")
        .with_birth_date(date(2008, 1, 1))
        .with_gender(Gender::Male);
    let metrics =
        DerivedMetrics::compute(&seventeen, &lean_measurement(&seventeen), date(2025, 6, 1));
    assert_eq!(metrics.age, Some(17));
    // 16-19 band: 1.1620 - 0.0630 * 1.0
    assert_eq!(metrics.body_fat_percent, Some(0.4));
    assert_eq!(metrics.body_fat_class, None);
    assert_eq!(metrics.body_fat_percentile, None);
    assert_eq!(metrics.body_fat_progress, None);

    let fifteen = Person::new("Ivo", "Gil")
        .with_birth_date(date(2010, 1, 1))
        .with_gender(Gender::Female);
    let metrics = DerivedMetrics::compute(&fifteen, &lean_measurement(&fifteen), date(2025, 6, 1));
    assert_eq!(metrics.age, Some(15));
    assert_eq!(metrics.body_density, None);
    assert_eq!(metrics.body_fat_percent, None);
    // The general AAHPERD table still applies below 18
    assert!(metrics.aahperd_percentile.is_some());
}

#[test]
fn test_single_reading_site_contributes_nothing() {
    let person = test_person();
    let measurement = weigh_in(&person, at(2025, 5, 20, 9, 0), 70.0)
        .with_skinfold(
            SkinfoldSite::Triceps,
            SkinfoldReadings::new(Some(9.0), None, None),
        )
        .with_skinfold(
            SkinfoldSite::Subscapular,
            SkinfoldReadings::new(Some(9.0), Some(11.0), None),
        );
    let metrics = DerivedMetrics::compute(&person, &measurement, date(2025, 6, 1));

    assert!((metrics.sum_four_skinfolds - 10.0).abs() < 1e-9);
    assert_eq!(metrics.aahperd_spc, None);
}

#[test]
fn test_metrics_serialize_for_reporting() {
    let person = test_person();
    let metrics = DerivedMetrics::compute(
        &person,
        &caliper_measurement(&person, at(2025, 5, 20, 9, 0)),
        date(2025, 6, 1),
    );
    let json = serde_json::to_value(&metrics).unwrap();

    assert_eq!(json["age"], 22);
    assert_eq!(json["aahperd_percentile"], 25);
    assert_eq!(json["aahperd_class"], "very_good");
    assert_eq!(json["motivation"]["severity"], "primary");
}
