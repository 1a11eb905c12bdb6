// ABOUTME: Heuristic skill-level classifier from relative strength and training age
// ABOUTME: Fixed breakpoints per tier; a missing signal defers to the other, none means beginner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Skill tiers exist only to pick an expected growth band. The heuristic is
//! deliberately crude and is the first thing to revisit once real outcome
//! data is available.

use chrono::{DateTime, Utc};
use liftlens_core::constants::time::{DAYS_PER_MONTH, SECONDS_PER_DAY};
use liftlens_core::models::SkillTier;
use serde::{Deserialize, Serialize};

use crate::config::SkillConfig;

/// Inputs to the classifier; any may be unknown
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSignals {
    /// Best recent 1RM over bodyweight
    pub strength_ratio: Option<f64>,
    /// Months since the first logged session of the exercise
    pub training_months: Option<f64>,
}

impl SkillSignals {
    /// Derive signals from raw inputs measured up to `now`
    #[must_use]
    pub fn from_inputs(
        bodyweight_kg: Option<f64>,
        best_one_rm: Option<f64>,
        first_session: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Self {
        let strength_ratio = bodyweight_kg
            .filter(|weight| weight.is_finite() && *weight > 0.0)
            .zip(best_one_rm)
            .map(|(bodyweight, one_rm)| one_rm / bodyweight);
        #[allow(clippy::cast_precision_loss)]
        let training_months = first_session.map(|first| {
            let seconds = (now - first).num_seconds().max(0);
            seconds as f64 / SECONDS_PER_DAY / DAYS_PER_MONTH
        });
        Self {
            strength_ratio,
            training_months,
        }
    }
}

/// Maps skill signals to a tier
#[derive(Debug, Clone)]
pub struct SkillLevelClassifier {
    config: SkillConfig,
}

impl SkillLevelClassifier {
    /// Create a classifier with the given breakpoints
    #[must_use]
    pub const fn new(config: SkillConfig) -> Self {
        Self { config }
    }

    /// Tier implied by strength relative to bodyweight
    #[must_use]
    pub fn tier_from_strength_ratio(&self, ratio: f64) -> SkillTier {
        if ratio >= self.config.advanced_strength_ratio {
            SkillTier::Advanced
        } else if ratio >= self.config.intermediate_strength_ratio {
            SkillTier::Intermediate
        } else {
            SkillTier::Beginner
        }
    }

    /// Tier implied by training age
    #[must_use]
    pub fn tier_from_training_age(&self, months: f64) -> SkillTier {
        if months >= self.config.advanced_training_months {
            SkillTier::Advanced
        } else if months >= self.config.intermediate_training_months {
            SkillTier::Intermediate
        } else {
            SkillTier::Beginner
        }
    }

    /// Combined tier: floor of the mean ordinal of the available signals
    #[must_use]
    pub fn classify(&self, signals: &SkillSignals) -> SkillTier {
        let strength = signals
            .strength_ratio
            .map(|ratio| self.tier_from_strength_ratio(ratio));
        let age = signals
            .training_months
            .map(|months| self.tier_from_training_age(months));

        match (strength, age) {
            (Some(a), Some(b)) => SkillTier::from_ordinal((a.ordinal() + b.ordinal()) / 2),
            (Some(tier), None) | (None, Some(tier)) => tier,
            (None, None) => SkillTier::Beginner,
        }
    }
}
