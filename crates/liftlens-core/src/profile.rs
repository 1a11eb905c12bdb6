// ABOUTME: Trainee profile interface supplying bodyweight and first-session dates
// ABOUTME: Feeds the skill-level classifier; the static provider serves tests and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{ExerciseId, TraineeId};

/// Profile facts about one trainee
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraineeProfile {
    /// Bodyweight in kilograms
    pub bodyweight_kg: Option<f64>,
    /// First logged session per exercise
    #[serde(default)]
    pub first_sessions: HashMap<ExerciseId, DateTime<Utc>>,
}

impl TraineeProfile {
    /// Profile with a bodyweight only
    #[must_use]
    pub fn with_bodyweight(bodyweight_kg: f64) -> Self {
        Self {
            bodyweight_kg: Some(bodyweight_kg),
            first_sessions: HashMap::new(),
        }
    }

    /// Record the first logged session for an exercise
    #[must_use]
    pub fn with_first_session(mut self, exercise_id: ExerciseId, at: DateTime<Utc>) -> Self {
        self.first_sessions.insert(exercise_id, at);
        self
    }
}

/// Source of trainee profile facts
pub trait TraineeProfileProvider: Send + Sync {
    /// Bodyweight in kilograms, if known
    fn bodyweight(&self, trainee_id: TraineeId) -> Option<f64>;

    /// First logged session for an exercise, if known
    fn first_session(&self, trainee_id: TraineeId, exercise_id: &ExerciseId)
        -> Option<DateTime<Utc>>;
}

/// Profiles held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticTraineeProfiles {
    profiles: HashMap<TraineeId, TraineeProfile>,
}

impl StaticTraineeProfiles {
    /// Empty provider; every lookup returns `None`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile
    #[must_use]
    pub fn with_profile(mut self, trainee_id: TraineeId, profile: TraineeProfile) -> Self {
        self.profiles.insert(trainee_id, profile);
        self
    }
}

impl TraineeProfileProvider for StaticTraineeProfiles {
    fn bodyweight(&self, trainee_id: TraineeId) -> Option<f64> {
        self.profiles
            .get(&trainee_id)
            .and_then(|profile| profile.bodyweight_kg)
    }

    fn first_session(
        &self,
        trainee_id: TraineeId,
        exercise_id: &ExerciseId,
    ) -> Option<DateTime<Utc>> {
        self.profiles
            .get(&trainee_id)
            .and_then(|profile| profile.first_sessions.get(exercise_id).copied())
    }
}
