// ABOUTME: Training summary over a batch of sets: sessions, tonnage and per-muscle-group volume
// ABOUTME: Weekly volume is bucketed by ISO week so blocks line up with the training calendar
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet};

use chrono::Datelike;
use liftlens_core::models::{ExerciseId, SetRecord};
use serde::{Deserialize, Serialize};

use crate::volume_calculator::VolumeCalculator;

/// Label used for sets logged without a muscle group
pub const UNASSIGNED_MUSCLE_GROUP: &str = "unassigned";

/// Tonnage for one ISO week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyVolume {
    /// ISO week-numbering year
    pub iso_year: i32,
    /// ISO week number (1-53)
    pub iso_week: u32,
    /// Σ weight × reps in that week
    pub tonnage: f64,
}

/// Volume and peak strength for one muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleGroupSummary {
    /// Muscle group label, lowercased
    pub muscle_group: String,
    /// Sets logged for the group
    pub set_count: usize,
    /// Σ weight × reps
    pub tonnage: f64,
    /// Best single-set 1RM estimate in the group
    pub best_one_rm: f64,
    /// Exercise that produced the best estimate
    pub best_exercise: ExerciseId,
    /// Tonnage per ISO week in calendar order
    pub weekly_tonnage: Vec<WeeklyVolume>,
}

/// Whole-log training summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Distinct training days
    pub total_sessions: usize,
    /// Distinct exercises
    pub unique_exercises: usize,
    /// Sets in the batch
    pub total_sets: usize,
    /// Σ weight × reps over every set
    pub total_tonnage: f64,
    /// Per muscle group, ordered by label
    pub muscle_groups: Vec<MuscleGroupSummary>,
}

impl TrainingSummary {
    /// Summarize a batch of validated sets
    #[must_use]
    pub fn from_records(records: &[SetRecord], calculator: &VolumeCalculator) -> Self {
        let days: BTreeSet<_> = records.iter().map(SetRecord::session_day).collect();
        let exercises: BTreeSet<_> = records.iter().map(|set| &set.exercise_id).collect();

        let mut groups: BTreeMap<&str, Vec<&SetRecord>> = BTreeMap::new();
        for set in records {
            let label = set
                .muscle_group
                .as_deref()
                .unwrap_or(UNASSIGNED_MUSCLE_GROUP);
            groups.entry(label).or_default().push(set);
        }

        let muscle_groups = groups
            .into_iter()
            .filter_map(|(label, sets)| Self::summarize_group(label, &sets, calculator))
            .collect();

        Self {
            total_sessions: days.len(),
            unique_exercises: exercises.len(),
            total_sets: records.len(),
            total_tonnage: VolumeCalculator::tonnage(records),
            muscle_groups,
        }
    }

    fn summarize_group(
        label: &str,
        sets: &[&SetRecord],
        calculator: &VolumeCalculator,
    ) -> Option<MuscleGroupSummary> {
        let (best_one_rm, best_set) = sets
            .iter()
            .map(|set| (calculator.set_one_rm(set), *set))
            .max_by(|a, b| a.0.total_cmp(&b.0))?;

        let mut weekly: BTreeMap<(i32, u32), f64> = BTreeMap::new();
        for set in sets {
            let week = set.session_day().iso_week();
            *weekly.entry((week.year(), week.week())).or_insert(0.0) += set.tonnage();
        }

        Some(MuscleGroupSummary {
            muscle_group: label.to_owned(),
            set_count: sets.len(),
            tonnage: VolumeCalculator::tonnage(sets.iter().copied()),
            best_one_rm,
            best_exercise: best_set.exercise_id.clone(),
            weekly_tonnage: weekly
                .into_iter()
                .map(|((iso_year, iso_week), tonnage)| WeeklyVolume {
                    iso_year,
                    iso_week,
                    tonnage,
                })
                .collect(),
        })
    }
}
