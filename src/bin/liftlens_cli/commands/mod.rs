// ABOUTME: Command implementations for liftlens-cli
// ABOUTME: Shared configuration loading and engine construction for every subcommand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analyze;
pub mod exercises;
pub mod summary;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use liftlens::workout_log::WorkoutLog;
use liftlens::{AnalyticsConfig, AnalyticsEngine, SystemClock, TraineeProfileProvider};

/// Configuration from a file when given, else defaults; environment overrides apply to both
pub fn load_config(path: Option<&Path>) -> Result<AnalyticsConfig> {
    let config = match path {
        Some(path) => AnalyticsConfig::from_json_file(path)?,
        None => AnalyticsConfig::from_environment()?,
    };
    Ok(config)
}

/// Engine resolving exercise names through the log's own catalog
pub fn build_engine(
    config: AnalyticsConfig,
    log: &WorkoutLog,
    profiles: Arc<dyn TraineeProfileProvider>,
) -> Result<AnalyticsEngine> {
    Ok(AnalyticsEngine::new(
        config,
        Arc::new(log.catalog()),
        profiles,
        Arc::new(SystemClock),
    )?)
}
