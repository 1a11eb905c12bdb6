// ABOUTME: End-to-end tests for the analytics engine facade
// ABOUTME: Runs compute_analytics, batch analysis and summaries against a frozen clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Duration;
use common::{
    bench_id, catalog, engine_with, engine_with_profiles, last_timestamp, linear_series, raw_set,
    series_start, sessions, set, squat_id,
};
use liftlens::{
    AnalyticsConfig, AnalyticsEngine, AppError, BatchAnalytics, ConfigError, ErrorCode,
    FailedExercise, FixedClock, StaticTraineeProfiles, TraineeId, TraineeProfile,
};
use liftlens_core::models::{PlateauClassification, SkillTier, VerdictKind};

#[test]
fn test_beginner_progressing_within_range() {
    let records = sessions(&bench_id(), &linear_series(100.0, 0.02, 8), 7);
    let engine = engine_with(
        AnalyticsConfig::default(),
        last_timestamp(&records) + Duration::days(1),
    );

    let analytics = engine
        .compute_analytics(TraineeId::new_random(), &bench_id(), &records)
        .unwrap();

    assert_eq!(analytics.aggregates.len(), 8);
    assert_eq!(analytics.trend.len(), 8);
    let current = analytics.current_plateau().unwrap();
    assert_eq!(current.classification, PlateauClassification::Progressing);
    assert_eq!(analytics.verdict.tier, SkillTier::Beginner);
    assert_eq!(analytics.verdict.verdict, VerdictKind::WithinRange);
    assert!(analytics.verdict.projection.is_some());
    assert!(!analytics.stale);
}

#[test]
fn test_intermediate_plateau_from_profile() {
    let records = sessions(&bench_id(), &[100.0, 102.0, 101.0, 103.0, 102.0, 104.0], 7);
    let trainee = TraineeId::new_random();
    let profile = TraineeProfile::with_bodyweight(80.0)
        .with_first_session(bench_id(), series_start() - Duration::days(365));
    let engine = engine_with_profiles(
        AnalyticsConfig::default(),
        StaticTraineeProfiles::new().with_profile(trainee, profile),
        last_timestamp(&records) + Duration::days(2),
    );

    let analytics = engine
        .compute_analytics(trainee, &bench_id(), &records)
        .unwrap();

    assert_eq!(
        analytics.current_plateau().unwrap().classification,
        PlateauClassification::Plateaued
    );
    assert_eq!(analytics.verdict.tier, SkillTier::Intermediate);
    assert_eq!(analytics.verdict.verdict, VerdictKind::WithinRange);
}

#[test]
fn test_decline_is_below_range() {
    let weights: Vec<f64> = (0..8_i32).map(|i| 1.5f64.mul_add(-f64::from(i), 100.0)).collect();
    let records = sessions(&bench_id(), &weights, 7);
    let engine = engine_with(AnalyticsConfig::default(), last_timestamp(&records));

    let analytics = engine
        .compute_analytics(TraineeId::new_random(), &bench_id(), &records)
        .unwrap();

    assert_eq!(
        analytics.current_plateau().unwrap().classification,
        PlateauClassification::Regressing
    );
    assert_eq!(analytics.verdict.verdict, VerdictKind::BelowRange);
}

#[test]
fn test_too_few_sessions_yield_insufficient_data() {
    let records = sessions(&bench_id(), &[100.0, 102.5, 105.0], 7);
    let engine = engine_with(AnalyticsConfig::default(), last_timestamp(&records));

    let analytics = engine
        .compute_analytics(TraineeId::new_random(), &bench_id(), &records)
        .unwrap();

    assert_eq!(analytics.plateaus.len(), 1);
    assert!(analytics.plateaus[0].is_insufficient_data());
    assert_eq!(analytics.verdict.verdict, VerdictKind::InsufficientData);
    assert!(analytics.verdict.projection.is_none());
    assert!(analytics.latest_one_rm.is_some());
}

#[test]
fn test_no_sessions_is_not_an_error() {
    let engine = engine_with(AnalyticsConfig::default(), series_start());

    let analytics = engine
        .compute_analytics(TraineeId::new_random(), &bench_id(), &[])
        .unwrap();

    assert!(analytics.aggregates.is_empty());
    assert!(analytics.plateaus.is_empty());
    assert_eq!(analytics.latest_one_rm, None);
    assert_eq!(analytics.best_one_rm, None);
    assert_eq!(analytics.verdict.verdict, VerdictKind::InsufficientData);
    assert!(!analytics.stale);
}

#[test]
fn test_stale_when_last_session_older_than_gap() {
    let records = sessions(&bench_id(), &linear_series(100.0, 0.02, 6), 7);
    let engine = engine_with(
        AnalyticsConfig::default(),
        last_timestamp(&records) + Duration::days(30),
    );

    let analytics = engine
        .compute_analytics(TraineeId::new_random(), &bench_id(), &records)
        .unwrap();

    assert!(analytics.stale);
}

#[test]
fn test_other_exercises_are_ignored() {
    let mut records = sessions(&bench_id(), &linear_series(100.0, 0.02, 6), 7);
    records.push(set(&squat_id(), 200.0, 5, 0, series_start()));
    let engine = engine_with(AnalyticsConfig::default(), last_timestamp(&records));

    let analytics = engine
        .compute_analytics(TraineeId::new_random(), &bench_id(), &records)
        .unwrap();

    assert_eq!(analytics.aggregates.len(), 6);
    assert!(analytics.trend.iter().all(|p| p.exercise_id == bench_id()));
    let expected_tonnage: f64 = linear_series(100.0, 0.02, 6).iter().sum();
    assert!((analytics.total_tonnage - expected_tonnage).abs() < 1e-9);
}

#[test]
fn test_best_one_rm_is_highest_session_estimate() {
    let records = sessions(&bench_id(), &[100.0, 120.0, 110.0, 105.0], 7);
    let engine = engine_with(AnalyticsConfig::default(), last_timestamp(&records));

    let analytics = engine
        .compute_analytics(TraineeId::new_random(), &bench_id(), &records)
        .unwrap();

    assert!((analytics.best_one_rm.unwrap() - 120.0 * 31.0 / 30.0).abs() < 1e-9);
    let latest = analytics.trend.last().unwrap().smoothed_one_rm;
    assert!((analytics.latest_one_rm.unwrap() - latest).abs() < f64::EPSILON);
}

#[test]
fn test_analytics_are_deterministic() {
    let records = sessions(&bench_id(), &[100.0, 103.0, 101.0, 104.0, 99.0, 106.0], 4);
    let engine = engine_with(AnalyticsConfig::default(), last_timestamp(&records));
    let trainee = TraineeId::new_random();

    let first = engine.compute_analytics(trainee, &bench_id(), &records).unwrap();
    let second = engine.compute_analytics(trainee, &bench_id(), &records).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_invalid_config_rejected_at_construction() {
    let mut config = AnalyticsConfig::default();
    config.plateau.window_size = 1;

    let result = AnalyticsEngine::new(
        config,
        Arc::new(catalog()),
        Arc::new(StaticTraineeProfiles::new()),
        Arc::new(FixedClock(series_start())),
    );

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_analyze_batch_covers_every_exercise() {
    let mut records = sessions(&bench_id(), &linear_series(100.0, 0.02, 6), 7);
    records.extend(sessions(&squat_id(), &linear_series(140.0, 0.01, 6), 7));
    let engine = engine_with(AnalyticsConfig::default(), last_timestamp(&records));

    let results = engine.analyze_batch(TraineeId::new_random(), &records);

    assert_eq!(results.len(), 2);
    let squat = results.get(&squat_id()).unwrap().as_ref().unwrap();
    assert_eq!(squat.exercise_id, squat_id());
    assert_eq!(squat.aggregates.len(), 6);
    assert!(results.get(&bench_id()).unwrap().is_ok());
}

#[test]
fn test_analyze_raw_reports_rejected_records() {
    let raws = vec![
        raw_set("Bench Press", 100.0, 5, Some(1), "2024-01-01T12:00:00Z"),
        raw_set("Bench Press", 102.5, 5, Some(1), "2024-01-08T12:00:00Z"),
        raw_set("Squat", -10.0, 5, Some(1), "2024-01-08T12:00:00Z"),
        raw_set("Overhead Press", 50.0, 5, Some(1), "2024-01-08T12:00:00Z"),
    ];
    let engine = engine_with(AnalyticsConfig::default(), series_start() + Duration::days(8));

    let batch = engine.analyze_raw(TraineeId::new_random(), &raws);

    assert_eq!(batch.exercises.len(), 1);
    assert_eq!(batch.exercises[0].exercise_id, bench_id());
    assert!(batch.failed.is_empty());
    assert_eq!(batch.rejected.len(), 2);
}

#[test]
fn test_batch_keeps_other_exercises_when_one_fails() {
    let trainee = TraineeId::new_random();
    let records = sessions(&bench_id(), &linear_series(100.0, 0.02, 6), 7);
    let engine = engine_with(AnalyticsConfig::default(), last_timestamp(&records));
    let bench = engine.compute_analytics(trainee, &bench_id(), &records);
    let squat_error = AppError::insufficient_data("regression window collapsed");

    let results = BTreeMap::from([(bench_id(), bench), (squat_id(), Err(squat_error))]);
    let batch = BatchAnalytics::from_results(results, Vec::new());

    assert_eq!(batch.exercises.len(), 1);
    assert_eq!(batch.exercises[0].exercise_id, bench_id());
    assert_eq!(
        batch.failed,
        vec![FailedExercise {
            exercise_id: squat_id(),
            code: ErrorCode::InsufficientData,
            message: "regression window collapsed".to_owned(),
        }]
    );
    assert!(batch.rejected.is_empty());
}

#[test]
fn test_summary_groups_by_muscle() {
    let start = series_start();
    let mut bench = set(&bench_id(), 100.0, 5, 0, start);
    bench.muscle_group = Some("chest".to_owned());
    let mut squat = set(&squat_id(), 140.0, 5, 0, start + Duration::days(2));
    squat.muscle_group = Some("legs".to_owned());
    let unlabeled = set(&squat_id(), 100.0, 10, 0, start + Duration::days(9));
    let engine = engine_with(AnalyticsConfig::default(), start);

    let summary = engine.summarize(&[bench, squat, unlabeled]);

    assert_eq!(summary.total_sessions, 3);
    assert_eq!(summary.unique_exercises, 2);
    assert_eq!(summary.total_sets, 3);
    assert!((summary.total_tonnage - 2200.0).abs() < 1e-9);
    let labels: Vec<&str> = summary
        .muscle_groups
        .iter()
        .map(|group| group.muscle_group.as_str())
        .collect();
    assert_eq!(labels, vec!["chest", "legs", "unassigned"]);
    assert_eq!(summary.muscle_groups[1].best_exercise, squat_id());
    assert_eq!(summary.muscle_groups[2].weekly_tonnage.len(), 1);
}

#[test]
fn test_app_error_code_for_config_error() {
    let error: liftlens::AppError = ConfigError::InvalidRange("window_size must be >= 2").into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}
