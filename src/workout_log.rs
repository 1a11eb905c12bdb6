// ABOUTME: Adapter reading the JSON workout log (workouts > exercises > sets) into raw set records
// ABOUTME: Gives every set a distinct timestamp and builds an exercise catalog from the names seen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The log is a JSON array of workouts:
//!
//! ```json
//! [{
//!   "workout_title": "Push day",
//!   "workout_date": "05, March, 2024",
//!   "workout_time": 60,
//!   "exercises": [{
//!     "exercise_name": "Bench Press",
//!     "muscle_group": "chest",
//!     "rest_time": 3,
//!     "sets": [{ "reps": 5, "weight": 100.0, "rir": 2 }]
//!   }]
//! }]
//! ```
//!
//! Sets carry no time of their own, so each set is stamped with the workout
//! date plus its ordinal within that calendar day, in seconds. Sets therefore keep
//! their order and never collapse under the (exercise, timestamp) key.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use chrono::{Duration, NaiveDate};
use liftlens_core::catalog::InMemoryExerciseCatalog;
use liftlens_core::errors::{AppError, AppResult};
use liftlens_core::models::{ExerciseId, RawSetRecord};
use liftlens_intelligence::parse_timestamp;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One logged set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    /// Repetitions
    #[serde(default)]
    pub reps: Option<i64>,
    /// Weight in kilograms
    #[serde(default)]
    pub weight: Option<f64>,
    /// Reps in reserve
    #[serde(default)]
    pub rir: Option<i64>,
}

/// One exercise within a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Exercise name as typed
    pub exercise_name: String,
    /// Targeted muscle group
    #[serde(default)]
    pub muscle_group: Option<String>,
    /// Rest between sets in minutes
    #[serde(default)]
    pub rest_time: Option<u32>,
    /// Sets performed
    #[serde(default)]
    pub sets: Vec<SetEntry>,
}

/// One workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Title, e.g. "Push day"
    #[serde(default)]
    pub workout_title: String,
    /// Date text, usually `DD, Month, YYYY`
    pub workout_date: String,
    /// Total duration in minutes
    #[serde(default)]
    pub workout_time: Option<u32>,
    /// Exercises performed
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
}

/// A parsed workout log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutLog {
    workouts: Vec<WorkoutEntry>,
}

impl WorkoutLog {
    /// Wrap already-parsed workouts
    #[must_use]
    pub const fn new(workouts: Vec<WorkoutEntry>) -> Self {
        Self { workouts }
    }

    /// Parse a log from JSON text; blank text is an empty log
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON does not match the log shape
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a log file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("cannot read workout log {}", path.display())).with_source(e)
        })?;
        let log = Self::from_json_str(&contents)?;
        debug!(path = %path.display(), workouts = log.workouts.len(), "loaded workout log");
        Ok(log)
    }

    /// Workouts in file order
    #[must_use]
    pub fn workouts(&self) -> &[WorkoutEntry] {
        &self.workouts
    }

    /// Flatten the log into raw set records, one per logged set
    ///
    /// A workout whose date cannot be parsed passes its date text through
    /// unchanged, so the normalizer rejects its sets on the timestamp field.
    #[must_use]
    pub fn raw_records(&self) -> Vec<RawSetRecord> {
        let mut ordinals: HashMap<NaiveDate, i64> = HashMap::new();
        let mut records = Vec::new();

        for workout in &self.workouts {
            let date_text = workout.workout_date.trim();
            let base = parse_timestamp(date_text).ok();
            for exercise in &workout.exercises {
                for set in &exercise.sets {
                    let timestamp = match base {
                        Some(start) => {
                            let ordinal = ordinals.entry(start.date_naive()).or_insert(0);
                            let stamped = start + Duration::seconds(*ordinal);
                            *ordinal += 1;
                            stamped.to_rfc3339()
                        }
                        None => date_text.to_owned(),
                    };

                    records.push(RawSetRecord {
                        exercise: Some(exercise.exercise_name.clone()),
                        weight: set.weight,
                        reps: set.reps,
                        rir: set.rir,
                        timestamp: Some(timestamp),
                        unit: None,
                        muscle_group: exercise.muscle_group.clone(),
                    });
                }
            }
        }
        records
    }

    /// Distinct exercise names, first spelling wins, ordered by id
    #[must_use]
    pub fn exercise_names(&self) -> Vec<String> {
        let mut names: BTreeMap<ExerciseId, String> = BTreeMap::new();
        for exercise in self.workouts.iter().flat_map(|workout| &workout.exercises) {
            let name = exercise.exercise_name.trim();
            if !name.is_empty() {
                names
                    .entry(ExerciseId::slug(name))
                    .or_insert_with(|| name.to_owned());
            }
        }
        names.into_values().collect()
    }

    /// Catalog resolving every spelling of every exercise in the log to its slug id
    #[must_use]
    pub fn catalog(&self) -> InMemoryExerciseCatalog {
        InMemoryExerciseCatalog::from_names(
            self.workouts
                .iter()
                .flat_map(|workout| &workout.exercises)
                .map(|exercise| exercise.exercise_name.trim())
                .filter(|name| !name.is_empty()),
        )
    }
}
