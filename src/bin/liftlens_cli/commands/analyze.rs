// ABOUTME: analyze subcommand: full progress analytics for one exercise of the log
// ABOUTME: Builds a one-trainee profile from flags and prints a report or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use liftlens::workout_log::WorkoutLog;
use liftlens::{AnalyticsConfig, ExerciseCatalog, StaticTraineeProfiles, TraineeId, TraineeProfile};
use liftlens_intelligence::parse_timestamp;
use tracing::info;

use crate::helpers::display;

/// Analyze one exercise and print the result
pub fn run(
    config: AnalyticsConfig,
    log_path: &Path,
    exercise: &str,
    bodyweight: Option<f64>,
    first_session: Option<&str>,
    json: bool,
) -> Result<()> {
    let log = WorkoutLog::load(log_path)?;
    let exercise_id = log.catalog().resolve(exercise).ok_or_else(|| {
        anyhow!(
            "exercise '{exercise}' not found in log; known exercises: {}",
            log.exercise_names().join(", ")
        )
    })?;

    let trainee_id = TraineeId::new_random();
    let mut profile = TraineeProfile {
        bodyweight_kg: bodyweight,
        ..TraineeProfile::default()
    };
    if let Some(text) = first_session {
        profile = profile.with_first_session(exercise_id.clone(), parse_timestamp(text)?);
    }
    let profiles = StaticTraineeProfiles::new().with_profile(trainee_id, profile);

    let engine = super::build_engine(config, &log, Arc::new(profiles))?;
    let batch = engine.normalizer().normalize_batch(&log.raw_records());
    if !batch.rejected.is_empty() {
        info!(rejected = batch.rejected.len(), "skipped invalid sets");
    }

    let analytics = engine.compute_analytics(trainee_id, &exercise_id, &batch.records)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&analytics)?);
    } else {
        display::print_analytics(exercise, &analytics);
        display::print_rejected(&batch.rejected);
    }
    Ok(())
}
