// ABOUTME: Criterion benchmarks for the strength analytics pipeline
// ABOUTME: Measures normalization, per-exercise analytics and parallel batch analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the analytics engine.
//!
//! Synthetic logs hold one session every three days per exercise, each with a
//! few working sets of slowly rising load and some deterministic noise.

#![allow(clippy::missing_docs_in_private_items, clippy::panic, missing_docs)]

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use liftlens::{
    AnalyticsConfig, AnalyticsEngine, ExerciseId, FixedClock, InMemoryExerciseCatalog,
    RawSetRecord, SetRecord, StaticTraineeProfiles, TraineeId,
};

const EXERCISES: [&str; 4] = ["Bench Press", "Squat", "Deadlift", "Overhead Press"];
const SETS_PER_SESSION: usize = 4;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 2, 18, 0, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_raw_sets(sessions: usize) -> Vec<RawSetRecord> {
    let mut raws = Vec::with_capacity(sessions * EXERCISES.len() * SETS_PER_SESSION);
    for session in 0..sessions {
        let day = start() + Duration::days(3 * session as i64);
        for (lift, name) in EXERCISES.iter().enumerate() {
            let base = 60.0 + 40.0 * lift as f64;
            let trend = base * (1.0 + 0.002 * session as f64);
            let noise = ((session * 37 + lift * 11) % 7) as f64 - 3.0;
            for set in 0..SETS_PER_SESSION {
                raws.push(RawSetRecord {
                    exercise: Some((*name).to_owned()),
                    weight: Some(trend + noise),
                    reps: Some(5 + (set % 2) as i64),
                    rir: Some(((session + set) % 4) as i64),
                    timestamp: Some(
                        (day + Duration::minutes(4 * (lift * SETS_PER_SESSION + set) as i64))
                            .to_rfc3339(),
                    ),
                    unit: None,
                    muscle_group: None,
                });
            }
        }
    }
    raws
}

fn engine(now: DateTime<Utc>) -> AnalyticsEngine {
    let built = AnalyticsEngine::new(
        AnalyticsConfig::default(),
        Arc::new(InMemoryExerciseCatalog::from_names(EXERCISES)),
        Arc::new(StaticTraineeProfiles::new()),
        Arc::new(FixedClock(now)),
    );
    match built {
        Ok(engine) => engine,
        Err(e) => panic!("default configuration must be valid: {e}"),
    }
}

fn normalized(engine: &AnalyticsEngine, sessions: usize) -> Vec<SetRecord> {
    engine
        .normalizer()
        .normalize_batch(&generate_raw_sets(sessions))
        .records
}

/// Benchmark raw set validation with varying log sizes
#[allow(clippy::cast_possible_truncation)]
fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_batch");
    let engine = engine(start());

    for sessions in [10, 100, 500] {
        let raws = generate_raw_sets(sessions);
        group.throughput(Throughput::Elements(raws.len() as u64));
        group.bench_with_input(BenchmarkId::new("raw_sets", raws.len()), &raws, |b, raws| {
            b.iter(|| engine.normalizer().normalize_batch(black_box(raws)));
        });
    }

    group.finish();
}

/// Benchmark the full single-exercise pipeline
fn bench_compute_analytics(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_analytics");
    let engine = engine(start() + Duration::days(1500));
    let trainee = TraineeId::new_random();
    let bench_press = ExerciseId::slug("Bench Press");

    for sessions in [10, 100, 500] {
        let records = normalized(&engine, sessions);
        group.bench_with_input(BenchmarkId::new("sessions", sessions), &records, |b, records| {
            b.iter(|| engine.compute_analytics(trainee, &bench_press, black_box(records)));
        });
    }

    group.finish();
}

/// Benchmark parallel analysis of every exercise in a log
fn bench_analyze_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_batch");
    let engine = engine(start() + Duration::days(1500));
    let trainee = TraineeId::new_random();
    let records = normalized(&engine, 500);

    group.bench_function("four_exercises_500_sessions", |b| {
        b.iter(|| engine.analyze_batch(trainee, black_box(&records)));
    });
    group.bench_function("training_summary_500_sessions", |b| {
        b.iter(|| engine.summarize(black_box(&records)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalization,
    bench_compute_analytics,
    bench_analyze_batch,
);
criterion_main!(benches);
