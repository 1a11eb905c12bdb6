// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Builds catalogs, engines, and synthetic weekly set series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_possible_wrap
)]
//! Shared test utilities for `liftlens`
//!
//! Synthetic series use singles at RIR 0, so every session's 1RM estimate is
//! the logged weight scaled by the same Epley factor and relative slopes match
//! the weights' own.

use std::sync::{Arc, Once};

use chrono::{DateTime, Duration, TimeZone, Utc};
use liftlens::{
    AnalyticsConfig, AnalyticsEngine, ExerciseId, FixedClock, InMemoryExerciseCatalog,
    RawSetRecord, SetRecord, StaticTraineeProfiles,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Exercises known to the test catalog
pub const BENCH_PRESS: &str = "Bench Press";
pub const SQUAT: &str = "Squat";
pub const DEADLIFT: &str = "Deadlift";

/// Monday 2024-01-01 at noon UTC, the first session of every synthetic series
pub fn series_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

pub fn bench_id() -> ExerciseId {
    ExerciseId::slug(BENCH_PRESS)
}

pub fn squat_id() -> ExerciseId {
    ExerciseId::slug(SQUAT)
}

/// Catalog with the three test lifts plus a "bench" alias
pub fn catalog() -> InMemoryExerciseCatalog {
    InMemoryExerciseCatalog::from_names([BENCH_PRESS, SQUAT, DEADLIFT])
        .with_exercise("bench", bench_id())
}

/// Engine over the test catalog with no profiles and a frozen clock
pub fn engine_with(config: AnalyticsConfig, now: DateTime<Utc>) -> AnalyticsEngine {
    engine_with_profiles(config, StaticTraineeProfiles::new(), now)
}

/// Engine over the test catalog with the given profiles and a frozen clock
pub fn engine_with_profiles(
    config: AnalyticsConfig,
    profiles: StaticTraineeProfiles,
    now: DateTime<Utc>,
) -> AnalyticsEngine {
    init_test_logging();
    AnalyticsEngine::new(
        config,
        Arc::new(catalog()),
        Arc::new(profiles),
        Arc::new(FixedClock(now)),
    )
    .unwrap()
}

/// One validated set
pub fn set(
    exercise_id: &ExerciseId,
    weight: f64,
    reps: u32,
    rir: u8,
    timestamp: DateTime<Utc>,
) -> SetRecord {
    SetRecord {
        exercise_id: exercise_id.clone(),
        weight,
        reps,
        rir,
        timestamp,
        muscle_group: None,
    }
}

/// One single at RIR 0 per weight, sessions `spacing_days` apart from [`series_start`]
pub fn sessions(exercise_id: &ExerciseId, weights: &[f64], spacing_days: i64) -> Vec<SetRecord> {
    weights
        .iter()
        .enumerate()
        .map(|(index, &weight)| {
            let at = series_start() + Duration::days(spacing_days * index as i64);
            set(exercise_id, weight, 1, 0, at)
        })
        .collect()
}

/// Weekly singles growing by `weekly_rate` of the starting weight each week
pub fn linear_series(start: f64, weekly_rate: f64, count: usize) -> Vec<f64> {
    (0..count)
        .map(|week| start * weekly_rate.mul_add(week as f64, 1.0))
        .collect()
}

/// Timestamp of the last set in a series
pub fn last_timestamp(records: &[SetRecord]) -> DateTime<Utc> {
    records.iter().map(|set| set.timestamp).max().unwrap()
}

/// A complete, valid raw set
pub fn raw_set(
    exercise: &str,
    weight: f64,
    reps: i64,
    rir: Option<i64>,
    timestamp: &str,
) -> RawSetRecord {
    RawSetRecord {
        exercise: Some(exercise.to_owned()),
        weight: Some(weight),
        reps: Some(reps),
        rir,
        timestamp: Some(timestamp.to_owned()),
        unit: None,
        muscle_group: None,
    }
}
