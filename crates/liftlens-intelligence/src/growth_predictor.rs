// ABOUTME: Growth curve predictor comparing observed 1RM growth with tier-conditioned expectations
// ABOUTME: Emits within/above/below-range verdicts and a projected 1RM range, never guessing from gaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlens_core::models::{
    ExerciseId, GrowthRange, GrowthVerdict, PlateauSegment, ProjectedRange, SkillTier,
    VerdictKind,
};
use tracing::debug;

use crate::config::GrowthConfig;

/// Judges a plateau segment against the expected growth band of a tier
#[derive(Debug, Clone)]
pub struct GrowthCurvePredictor {
    config: GrowthConfig,
}

impl GrowthCurvePredictor {
    /// Create a predictor over the configured tier table
    #[must_use]
    pub const fn new(config: GrowthConfig) -> Self {
        Self { config }
    }

    /// Expected weekly growth band for a tier
    #[must_use]
    pub const fn expected_range(&self, tier: SkillTier) -> GrowthRange {
        self.config.tiers.range_for(tier)
    }

    /// Produce a verdict for the current plateau segment
    ///
    /// `current_one_rm` is the latest smoothed 1RM and anchors the projection.
    /// A missing or insufficient segment always yields `InsufficientData`.
    #[must_use]
    pub fn predict(
        &self,
        exercise_id: &ExerciseId,
        tier: SkillTier,
        segment: Option<&PlateauSegment>,
        current_one_rm: Option<f64>,
    ) -> GrowthVerdict {
        let expected_range = self.expected_range(tier);
        let observed = segment
            .filter(|segment| !segment.is_insufficient_data())
            .and_then(|segment| segment.relative_slope);

        let Some(observed_slope) = observed else {
            return GrowthVerdict {
                exercise_id: exercise_id.clone(),
                tier,
                observed_slope: None,
                expected_range,
                verdict: VerdictKind::InsufficientData,
                projection: None,
                note: Self::guidance(VerdictKind::InsufficientData, tier).to_owned(),
            };
        };

        let verdict = if expected_range.contains(observed_slope) {
            VerdictKind::WithinRange
        } else if observed_slope < expected_range.low {
            VerdictKind::BelowRange
        } else {
            VerdictKind::AboveRange
        };
        debug!(
            exercise = %exercise_id,
            tier = %tier,
            observed_slope,
            verdict = %verdict,
            "growth verdict"
        );

        GrowthVerdict {
            exercise_id: exercise_id.clone(),
            tier,
            observed_slope: Some(observed_slope),
            expected_range,
            verdict,
            projection: current_one_rm
                .map(|current| self.project(current, expected_range, observed_slope)),
            note: Self::guidance(verdict, tier).to_owned(),
        }
    }

    /// Linear projection of 1RM over the configured horizon
    #[must_use]
    pub fn project(
        &self,
        current_one_rm: f64,
        range: GrowthRange,
        observed_slope: f64,
    ) -> ProjectedRange {
        let weeks = f64::from(self.config.projection_weeks);
        let at_rate = |rate: f64| current_one_rm * rate.mul_add(weeks, 1.0);
        ProjectedRange {
            horizon_weeks: self.config.projection_weeks,
            current_one_rm,
            expected_low: at_rate(range.low),
            expected_high: at_rate(range.high),
            observed: at_rate(observed_slope),
        }
    }

    fn guidance(verdict: VerdictKind, tier: SkillTier) -> &'static str {
        match (verdict, tier) {
            (VerdictKind::WithinRange, _) => {
                "Progress matches expectations for this training level. Keep the current plan."
            }
            (VerdictKind::BelowRange, SkillTier::Advanced) => {
                "Growth is below the expected range. Review recovery and consider a programming change to break the plateau."
            }
            (VerdictKind::BelowRange, _) => {
                "Growth is below the expected range. Check recovery, sleep and training volume for signs of under-recovery or undertraining."
            }
            (VerdictKind::AboveRange, SkillTier::Beginner) => {
                "Growth is above the expected range. Early gains are often fast; confirm with a few more sessions before raising expectations."
            }
            (VerdictKind::AboveRange, _) => {
                "Growth is above the expected range. This may be measurement noise in the logged sets."
            }
            (VerdictKind::InsufficientData, _) => {
                "Not enough sessions in the current training block to judge growth yet."
            }
        }
    }
}
