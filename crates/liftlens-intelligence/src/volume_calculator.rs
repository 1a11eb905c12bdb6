// ABOUTME: Volume and 1RM calculator building per-day session aggregates from validated sets
// ABOUTME: Session 1RM is the best single-set estimate; tonnage is the exact sum of weight x reps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use chrono::NaiveDate;
use liftlens_core::errors::{AnalysisStage, InsufficientDataError};
use liftlens_core::models::{ExerciseId, SessionAggregate, SetRecord};
use tracing::debug;

use crate::algorithms::OneRepMaxAlgorithm;
use crate::config::VolumeConfig;

/// Derives session aggregates from set records
#[derive(Debug, Clone, Default)]
pub struct VolumeCalculator {
    algorithm: OneRepMaxAlgorithm,
}

impl VolumeCalculator {
    /// Create a calculator using the configured 1RM formula
    #[must_use]
    pub const fn new(config: &VolumeConfig) -> Self {
        Self {
            algorithm: config.one_rep_max,
        }
    }

    /// Formula in use
    #[must_use]
    pub const fn algorithm(&self) -> OneRepMaxAlgorithm {
        self.algorithm
    }

    /// Estimated 1RM for a single set
    #[must_use]
    pub fn set_one_rm(&self, set: &SetRecord) -> f64 {
        self.algorithm.estimate(set.weight, set.reps_effective())
    }

    /// Σ weight × reps over the given sets
    #[must_use]
    pub fn tonnage<'a>(sets: impl IntoIterator<Item = &'a SetRecord>) -> f64 {
        sets.into_iter().map(SetRecord::tonnage).sum()
    }

    /// Aggregate one session: the sets of `exercise_id` logged on `day`
    ///
    /// # Errors
    ///
    /// Returns `InsufficientDataError` when no set of that exercise falls on that
    /// day. Callers treat it as a gap in the series, never as a zero.
    pub fn session_aggregate(
        &self,
        exercise_id: &ExerciseId,
        day: NaiveDate,
        sets: &[SetRecord],
    ) -> Result<SessionAggregate, InsufficientDataError> {
        let session: Vec<&SetRecord> = sets
            .iter()
            .filter(|set| &set.exercise_id == exercise_id && set.session_day() == day)
            .collect();
        self.build_session(exercise_id, day, &session)
    }

    /// Aggregate every session of one exercise, ordered by day
    ///
    /// Sets of other exercises are ignored.
    #[must_use]
    pub fn aggregate_sessions(
        &self,
        exercise_id: &ExerciseId,
        sets: &[SetRecord],
    ) -> Vec<SessionAggregate> {
        let mut by_day: BTreeMap<NaiveDate, Vec<&SetRecord>> = BTreeMap::new();
        for set in sets.iter().filter(|set| &set.exercise_id == exercise_id) {
            by_day.entry(set.session_day()).or_default().push(set);
        }

        let aggregates: Vec<SessionAggregate> = by_day
            .into_iter()
            .filter_map(|(day, session)| self.build_session(exercise_id, day, &session).ok())
            .collect();

        debug!(
            exercise = %exercise_id,
            sessions = aggregates.len(),
            "aggregated sessions"
        );
        aggregates
    }

    fn build_session(
        &self,
        exercise_id: &ExerciseId,
        day: NaiveDate,
        session: &[&SetRecord],
    ) -> Result<SessionAggregate, InsufficientDataError> {
        let mut best: Option<(f64, &SetRecord)> = None;
        for set in session {
            let estimate = self.set_one_rm(set);
            if best.is_none_or(|(top, _)| estimate > top) {
                best = Some((estimate, set));
            }
        }

        let (Some((estimated_one_rm, best_set)), Some(timestamp)) =
            (best, session.iter().map(|set| set.timestamp).min())
        else {
            return Err(InsufficientDataError {
                exercise_id: exercise_id.clone(),
                stage: AnalysisStage::SessionAggregate,
                required: 1,
                available: 0,
            });
        };

        Ok(SessionAggregate {
            exercise_id: exercise_id.clone(),
            timestamp,
            day,
            set_count: session.len(),
            total_tonnage: Self::tonnage(session.iter().copied()),
            estimated_one_rm,
            best_set_weight: best_set.weight,
            best_set_reps_effective: best_set.reps_effective(),
        })
    }
}
