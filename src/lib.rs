// ABOUTME: Main library entry point for the LiftLens strength progress analytics toolkit
// ABOUTME: Re-exports the workspace crates and owns logging setup and the workout-log adapter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftLens
//!
//! Estimates a trainee's strength progress from logged sets and decides
//! whether each exercise is progressing, plateaued or regressing relative to
//! the growth expected at the trainee's experience tier.
//!
//! ## Architecture
//!
//! - **`liftlens-core`**: errors, domain models, collaborator interfaces
//! - **`liftlens-intelligence`**: the analytics engine
//! - **this crate**: structured logging, the JSON workout-log adapter and the
//!   `liftlens-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use liftlens::workout_log::WorkoutLog;
//! use liftlens::{AnalyticsConfig, AnalyticsEngine, StaticTraineeProfiles, SystemClock, TraineeId};
//!
//! # fn main() -> anyhow::Result<()> {
//! let log = WorkoutLog::load(Path::new("data/workouts.json"))?;
//! let engine = AnalyticsEngine::new(
//!     AnalyticsConfig::from_environment()?,
//!     Arc::new(log.catalog()),
//!     Arc::new(StaticTraineeProfiles::new()),
//!     Arc::new(SystemClock),
//! )?;
//! let batch = engine.analyze_raw(TraineeId::new_random(), &log.raw_records());
//! for analytics in &batch.exercises {
//!     println!("{}: {}", analytics.exercise_id, analytics.verdict.verdict);
//! }
//! # Ok(())
//! # }
//! ```

/// Structured logging configuration
pub mod logging;

/// JSON workout-log adapter
pub mod workout_log;

pub use liftlens_core::models::{ExerciseAnalytics, ExerciseId, RawSetRecord, SetRecord, TraineeId};
pub use liftlens_core::{
    AppError, AppResult, ErrorCode, ExerciseCatalog, FixedClock, InMemoryExerciseCatalog,
    StaticTraineeProfiles, SystemClock, TimeSource, TraineeProfile, TraineeProfileProvider,
};
pub use liftlens_intelligence::{
    AnalyticsConfig, AnalyticsEngine, BatchAnalytics, ConfigError, FailedExercise,
};
