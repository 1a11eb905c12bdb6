// ABOUTME: Integration tests for raw set validation and canonicalization
// ABOUTME: Covers field rejection, unit conversion, RIR defaults and batch deduplication
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::{bench_id, catalog, raw_set, squat_id};
use liftlens::RawSetRecord;
use liftlens_core::errors::{SetField, ValidationReason};
use liftlens_intelligence::config::NormalizerConfig;
use liftlens_intelligence::SetRecordNormalizer;

fn normalizer() -> SetRecordNormalizer {
    SetRecordNormalizer::new(NormalizerConfig::default(), Arc::new(catalog()))
}

#[test]
fn test_valid_set_is_canonicalized() {
    let mut raw = raw_set("  BENCH press ", 100.0, 5, Some(2), "2024-03-05T18:30:00Z");
    raw.muscle_group = Some(" Chest ".to_owned());

    let record = normalizer().normalize(&raw).unwrap();

    assert_eq!(record.exercise_id, bench_id());
    assert!((record.weight - 100.0).abs() < f64::EPSILON);
    assert_eq!(record.reps, 5);
    assert_eq!(record.rir, 2);
    assert_eq!(record.reps_effective(), 7);
    assert_eq!(record.muscle_group.as_deref(), Some("chest"));
}

#[test]
fn test_alias_resolves_to_same_exercise() {
    let record = normalizer()
        .normalize(&raw_set("bench", 80.0, 3, Some(1), "2024-03-05"))
        .unwrap();
    assert_eq!(record.exercise_id, bench_id());
}

#[test]
fn test_pounds_are_converted_to_kilograms() {
    let mut raw = raw_set("Squat", 225.0, 5, Some(0), "2024-03-05");
    raw.unit = Some("lbs".to_owned());

    let record = normalizer().normalize(&raw).unwrap();

    assert_eq!(record.exercise_id, squat_id());
    assert!((record.weight - 102.058_283_25).abs() < 1e-6);
}

#[test]
fn test_non_positive_weight_is_rejected() {
    for weight in [0.0, -20.0] {
        let error = normalizer()
            .normalize(&raw_set("Squat", weight, 5, Some(1), "2024-03-05"))
            .unwrap_err();
        assert_eq!(error.field, SetField::Weight);
        assert!(matches!(error.reason, ValidationReason::OutOfRange(_)));
    }
}

#[test]
fn test_non_finite_weight_is_unparseable() {
    let error = normalizer()
        .normalize(&raw_set("Squat", f64::NAN, 5, Some(1), "2024-03-05"))
        .unwrap_err();
    assert_eq!(error.field, SetField::Weight);
    assert!(matches!(error.reason, ValidationReason::Unparseable(_)));
}

#[test]
fn test_zero_reps_is_rejected() {
    let error = normalizer()
        .normalize(&raw_set("Squat", 100.0, 0, Some(1), "2024-03-05"))
        .unwrap_err();
    assert_eq!(error.field, SetField::Reps);
}

#[test]
fn test_rir_outside_bounds_is_rejected_not_clamped() {
    for rir in [-1, 6, 40] {
        let error = normalizer()
            .normalize(&raw_set("Squat", 100.0, 5, Some(rir), "2024-03-05"))
            .unwrap_err();
        assert_eq!(error.field, SetField::Rir);
        assert!(matches!(error.reason, ValidationReason::OutOfRange(_)));
    }
}

#[test]
fn test_missing_rir_uses_configured_default() {
    let record = normalizer()
        .normalize(&raw_set("Squat", 100.0, 5, None, "2024-03-05"))
        .unwrap();
    assert_eq!(record.rir, 0);
}

#[test]
fn test_missing_rir_rejected_without_default() {
    let config = NormalizerConfig {
        default_rir: None,
        ..NormalizerConfig::default()
    };
    let strict = SetRecordNormalizer::new(config, Arc::new(catalog()));

    let error = strict
        .normalize(&raw_set("Squat", 100.0, 5, None, "2024-03-05"))
        .unwrap_err();
    assert_eq!(error.field, SetField::Rir);
    assert_eq!(error.reason, ValidationReason::Missing);
}

#[test]
fn test_unknown_exercise_is_rejected() {
    let error = normalizer()
        .normalize(&raw_set("Cable Fly", 20.0, 12, Some(2), "2024-03-05"))
        .unwrap_err();
    assert_eq!(error.field, SetField::Exercise);
    assert_eq!(
        error.reason,
        ValidationReason::UnknownExercise("Cable Fly".to_owned())
    );
}

#[test]
fn test_missing_fields_are_named() {
    let empty = RawSetRecord::default();
    assert_eq!(normalizer().normalize(&empty).unwrap_err().field, SetField::Exercise);

    let mut no_time = raw_set("Squat", 100.0, 5, Some(1), "");
    assert_eq!(normalizer().normalize(&no_time).unwrap_err().field, SetField::Timestamp);
    no_time.timestamp = Some("last tuesday".to_owned());
    let error = normalizer().normalize(&no_time).unwrap_err();
    assert_eq!(error.field, SetField::Timestamp);
    assert!(matches!(error.reason, ValidationReason::Unparseable(_)));
}

#[test]
fn test_unknown_unit_is_rejected() {
    let mut raw = raw_set("Squat", 100.0, 5, Some(1), "2024-03-05");
    raw.unit = Some("stone".to_owned());
    let error = normalizer().normalize(&raw).unwrap_err();
    assert_eq!(error.field, SetField::Unit);
}

#[test]
fn test_batch_keeps_good_records_and_reports_bad_ones() {
    let raws = vec![
        raw_set("Squat", 140.0, 3, Some(1), "2024-03-07T10:00:00Z"),
        raw_set("Squat", 0.0, 3, Some(1), "2024-03-06T10:00:00Z"),
        raw_set("Bench Press", 100.0, 5, Some(2), "2024-03-05T10:00:00Z"),
        raw_set("Squat", 120.0, 12, Some(9), "2024-03-08T10:00:00Z"),
    ];

    let batch = normalizer().normalize_batch(&raws);

    assert_eq!(batch.records.len(), 2);
    assert_eq!(batch.records[0].exercise_id, bench_id());
    assert_eq!(batch.records[1].exercise_id, squat_id());
    let rejected: Vec<usize> = batch.rejected.iter().map(|r| r.index).collect();
    assert_eq!(rejected, vec![1, 3]);
    assert_eq!(batch.rejected[0].error.field, SetField::Weight);
    assert_eq!(batch.rejected[1].error.field, SetField::Rir);
}

#[test]
fn test_batch_later_duplicate_supersedes_earlier() {
    let raws = vec![
        raw_set("Squat", 140.0, 3, Some(1), "2024-03-07T10:00:00Z"),
        raw_set("squat", 145.0, 3, Some(1), "2024-03-07T10:00:00Z"),
    ];

    let batch = normalizer().normalize_batch(&raws);

    assert_eq!(batch.records.len(), 1);
    assert!((batch.records[0].weight - 145.0).abs() < f64::EPSILON);
    assert!(batch.rejected.is_empty());
}
