// ABOUTME: exercises subcommand listing every exercise name found in the log
// ABOUTME: Shows the id each name resolves to so it can be passed to analyze
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use liftlens::workout_log::WorkoutLog;
use liftlens::ExerciseId;

/// Print the exercises in the log
pub fn run(log_path: &Path) -> Result<()> {
    let log = WorkoutLog::load(log_path)?;
    let names = log.exercise_names();
    if names.is_empty() {
        println!("No exercises logged yet.");
        return Ok(());
    }
    for name in names {
        println!("{:<32} {}", name, ExerciseId::slug(&name));
    }
    Ok(())
}
