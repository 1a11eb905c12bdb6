// ABOUTME: Derived analytics entities: session aggregates, trend points, plateau segments, verdicts
// ABOUTME: All are pure derivations of a set-record snapshot and carry no mutable state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ExerciseId, TraineeId};
use crate::constants::time::WEEKS_PER_MONTH;

/// Per-exercise, per-day aggregate rebuilt from set records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionAggregate {
    /// Exercise the session covers
    pub exercise_id: ExerciseId,
    /// Earliest set timestamp of the session
    pub timestamp: DateTime<Utc>,
    /// UTC calendar day of the session
    pub day: NaiveDate,
    /// Sets of this exercise in the session
    pub set_count: usize,
    /// Σ weight × reps over the session's sets
    pub total_tonnage: f64,
    /// Best single-set 1RM estimate of the session
    pub estimated_one_rm: f64,
    /// Weight of the set that produced the session estimate
    pub best_set_weight: f64,
    /// Reps + RIR of the set that produced the session estimate
    pub best_set_reps_effective: u32,
}

/// One smoothed point of an exercise's 1RM series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Exercise the point belongs to
    pub exercise_id: ExerciseId,
    /// Session timestamp
    pub timestamp: DateTime<Utc>,
    /// Session 1RM estimate as computed
    pub raw_one_rm: f64,
    /// EWMA-smoothed 1RM
    pub smoothed_one_rm: f64,
    /// Index of the gap-delimited segment this point belongs to
    pub segment_index: usize,
}

/// State of a trend window after hysteresis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateauClassification {
    /// Smoothed 1RM rising faster than the progress threshold
    Progressing,
    /// Slope inside the negligible band
    Plateaued,
    /// Smoothed 1RM falling faster than the regress threshold
    Regressing,
    /// Too few points to classify; terminal and reportable
    InsufficientData,
}

impl PlateauClassification {
    /// Stable name used in reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Progressing => "progressing",
            Self::Plateaued => "plateaued",
            Self::Regressing => "regressing",
            Self::InsufficientData => "insufficient-data",
        }
    }
}

impl fmt::Display for PlateauClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence levels for analysis results
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// Below 0.45
    Low,
    /// 0.45 to 0.70
    Medium,
    /// 0.70 to 0.90
    High,
    /// 0.90 and above
    VeryHigh,
}

impl ConfidenceLevel {
    /// Create from numeric score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 0.90 {
            Self::VeryHigh
        } else if score >= 0.70 {
            Self::High
        } else if score >= 0.45 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Contiguous run of trend points sharing one classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateauSegment {
    /// Exercise the segment belongs to
    pub exercise_id: ExerciseId,
    /// Trend segment (gap-delimited) this run lies in
    pub trend_segment: usize,
    /// First point covered
    pub start: DateTime<Utc>,
    /// Last point covered
    pub end: DateTime<Utc>,
    /// Classification after hysteresis
    pub classification: PlateauClassification,
    /// Mean regression slope in 1RM units per week; `None` when insufficient
    pub slope_per_week: Option<f64>,
    /// Mean slope as a fraction of current 1RM per week; `None` when insufficient
    pub relative_slope: Option<f64>,
    /// Trend points the run spans
    pub sample_count: usize,
    /// Confidence score in `[0, 1]`
    pub confidence: f64,
    /// Bucketed confidence
    pub confidence_level: ConfidenceLevel,
}

impl PlateauSegment {
    /// Whether this segment carries the insufficient-data marker
    #[must_use]
    pub fn is_insufficient_data(&self) -> bool {
        self.classification == PlateauClassification::InsufficientData
    }
}

/// Trainee experience tier for one exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTier {
    /// Under six months or below bodyweight strength
    Beginner,
    /// Middle tier
    Intermediate,
    /// Long training age and high relative strength
    Advanced,
}

impl SkillTier {
    /// All tiers in ascending order
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Ordinal rank (0 = beginner)
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }

    /// Tier for an ordinal rank, saturating at advanced
    #[must_use]
    pub const fn from_ordinal(rank: u8) -> Self {
        match rank {
            0 => Self::Beginner,
            1 => Self::Intermediate,
            _ => Self::Advanced,
        }
    }

    /// Stable name used in reports and configuration
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected weekly growth band, as fractions of current 1RM
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthRange {
    /// Lower bound per week
    pub low: f64,
    /// Upper bound per week
    pub high: f64,
}

impl GrowthRange {
    /// Build a weekly range
    #[must_use]
    pub const fn weekly(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Same range expressed per month
    #[must_use]
    pub fn monthly(&self) -> (f64, f64) {
        (self.low * WEEKS_PER_MONTH, self.high * WEEKS_PER_MONTH)
    }

    /// Whether a weekly rate lies inside the closed range
    #[must_use]
    pub fn contains(&self, rate: f64) -> bool {
        rate >= self.low && rate <= self.high
    }
}

/// Outcome of comparing observed growth against the tier's expectation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictKind {
    /// Inside the expected band, no action
    WithinRange,
    /// Faster than expected
    AboveRange,
    /// Slower than expected
    BelowRange,
    /// Not enough points for a verdict
    InsufficientData,
}

impl VerdictKind {
    /// Stable name used in reports
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WithinRange => "within-range",
            Self::AboveRange => "above-range",
            Self::BelowRange => "below-range",
            Self::InsufficientData => "insufficient-data",
        }
    }
}

impl fmt::Display for VerdictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Projected 1RM over a horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedRange {
    /// Horizon in weeks
    pub horizon_weeks: u32,
    /// Latest smoothed 1RM the projection starts from
    pub current_one_rm: f64,
    /// 1RM at the horizon if growth follows the tier's lower bound
    pub expected_low: f64,
    /// 1RM at the horizon if growth follows the tier's upper bound
    pub expected_high: f64,
    /// 1RM at the horizon if the observed rate continues
    pub observed: f64,
}

/// Growth verdict for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthVerdict {
    /// Exercise judged
    pub exercise_id: ExerciseId,
    /// Tier the expectation was taken from
    pub tier: SkillTier,
    /// Observed relative weekly slope; `None` when insufficient
    pub observed_slope: Option<f64>,
    /// Expected weekly band for the tier
    pub expected_range: GrowthRange,
    /// Verdict
    pub verdict: VerdictKind,
    /// Projection over the configured horizon; `None` when insufficient
    pub projection: Option<ProjectedRange>,
    /// Short guidance for the trainee
    pub note: String,
}

/// Complete result of one analytics request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseAnalytics {
    /// Trainee analysed
    pub trainee_id: TraineeId,
    /// Exercise analysed
    pub exercise_id: ExerciseId,
    /// Per-session aggregates in time order
    pub aggregates: Vec<SessionAggregate>,
    /// Smoothed trend across all segments in time order
    pub trend: Vec<TrendPoint>,
    /// Classified runs in time order
    pub plateaus: Vec<PlateauSegment>,
    /// Growth verdict for the latest segment
    pub verdict: GrowthVerdict,
    /// Latest smoothed 1RM
    pub latest_one_rm: Option<f64>,
    /// Highest session 1RM estimate ever logged
    pub best_one_rm: Option<f64>,
    /// Σ tonnage over every session
    pub total_tonnage: f64,
    /// Last session is older than the maximum gap as of the injected clock
    pub stale: bool,
}

impl ExerciseAnalytics {
    /// Latest plateau segment, if any
    #[must_use]
    pub fn current_plateau(&self) -> Option<&PlateauSegment> {
        self.plateaus.last()
    }
}
