// ABOUTME: summary subcommand printing sessions, tonnage and per-muscle-group volume
// ABOUTME: Operates on every valid set in the log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use liftlens::workout_log::WorkoutLog;
use liftlens::{AnalyticsConfig, StaticTraineeProfiles};

use crate::helpers::display;

/// Summarize the whole log
pub fn run(config: AnalyticsConfig, log_path: &Path, json: bool) -> Result<()> {
    let log = WorkoutLog::load(log_path)?;
    let engine = super::build_engine(config, &log, Arc::new(StaticTraineeProfiles::new()))?;
    let batch = engine.normalizer().normalize_batch(&log.raw_records());
    let summary = engine.summarize(&batch.records);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        display::print_summary(&summary);
        display::print_rejected(&batch.rejected);
    }
    Ok(())
}
