// ABOUTME: LiftLens CLI - strength progress analytics over a JSON workout log
// ABOUTME: Analyzes one exercise, lists logged exercises, or summarizes training volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Progress verdict for one exercise
//! liftlens-cli analyze --log data/workouts.json --exercise "Bench Press" --bodyweight 80
//!
//! # Same, as JSON
//! liftlens-cli analyze --log data/workouts.json --exercise "Bench Press" --json
//!
//! # Exercises found in the log
//! liftlens-cli exercises --log data/workouts.json
//!
//! # Sessions, tonnage and per-muscle-group volume
//! liftlens-cli summary --log data/workouts.json
//!
//! # Custom thresholds
//! liftlens-cli --config thresholds.json analyze --log data/workouts.json --exercise squat
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use liftlens::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "liftlens-cli",
    about = "LiftLens strength progress analytics",
    long_about = "Estimates 1RM trends from a workout log, detects plateaus and compares growth with the range expected for the trainee's experience tier."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON analytics configuration file (environment overrides still apply)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Progress analytics for one exercise
    Analyze {
        /// Workout log file
        #[arg(long)]
        log: PathBuf,

        /// Exercise name as logged (case-insensitive)
        #[arg(long)]
        exercise: String,

        /// Trainee bodyweight in kilograms
        #[arg(long)]
        bodyweight: Option<f64>,

        /// Date training of this exercise started, if earlier than the log
        #[arg(long)]
        first_session: Option<String>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List exercises found in the log
    Exercises {
        /// Workout log file
        #[arg(long)]
        log: PathBuf,
    },

    /// Sessions, tonnage and per-muscle-group volume
    Summary {
        /// Workout log file
        #[arg(long)]
        log: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let config = commands::load_config(cli.config.as_deref())?;
    debug!(algorithm = %config.volume.one_rep_max, "analytics configuration loaded");

    match cli.command {
        Command::Analyze {
            log,
            exercise,
            bodyweight,
            first_session,
            json,
        } => commands::analyze::run(
            config,
            &log,
            &exercise,
            bodyweight,
            first_session.as_deref(),
            json,
        ),
        Command::Exercises { log } => commands::exercises::run(&log),
        Command::Summary { log, json } => commands::summary::run(config, &log, json),
    }
}
