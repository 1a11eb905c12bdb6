// ABOUTME: Analytics engine facade wiring normalizer, calculator, trend, plateau, skill and growth stages
// ABOUTME: compute_analytics is the single synchronous, deterministic entry point per exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use liftlens_core::catalog::ExerciseCatalog;
use liftlens_core::clock::TimeSource;
use liftlens_core::errors::{AppResult, ErrorCode};
use liftlens_core::models::{
    ExerciseAnalytics, ExerciseId, RawSetRecord, SetRecord, SkillTier, TraineeId, TrendPoint,
};
use liftlens_core::profile::TraineeProfileProvider;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{AnalyticsConfig, ConfigError};
use crate::growth_predictor::GrowthCurvePredictor;
use crate::normalizer::{RejectedRecord, SetRecordNormalizer};
use crate::plateau_detector::PlateauDetector;
use crate::skill_classifier::{SkillLevelClassifier, SkillSignals};
use crate::training_summary::TrainingSummary;
use crate::trend_extractor::TrendExtractor;
use crate::volume_calculator::VolumeCalculator;

/// An exercise whose analytics could not be computed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedExercise {
    /// Exercise that failed
    pub exercise_id: ExerciseId,
    /// Error code of the failure
    pub code: ErrorCode,
    /// Error message
    pub message: String,
}

/// Analytics for every exercise found in a raw batch
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchAnalytics {
    /// Per-exercise results, ordered by exercise id
    pub exercises: Vec<ExerciseAnalytics>,
    /// Exercises whose computation failed, ordered by exercise id
    pub failed: Vec<FailedExercise>,
    /// Raw records that failed validation
    pub rejected: Vec<RejectedRecord>,
}

impl BatchAnalytics {
    /// Split per-exercise results into successes and failures, keeping both
    #[must_use]
    pub fn from_results(
        results: BTreeMap<ExerciseId, AppResult<ExerciseAnalytics>>,
        rejected: Vec<RejectedRecord>,
    ) -> Self {
        let mut exercises = Vec::with_capacity(results.len());
        let mut failed = Vec::new();
        for (exercise_id, result) in results {
            match result {
                Ok(analytics) => exercises.push(analytics),
                Err(error) => {
                    warn!(
                        exercise = %exercise_id,
                        error = %error,
                        "exercise analytics failed"
                    );
                    failed.push(FailedExercise {
                        exercise_id,
                        code: error.code,
                        message: error.message,
                    });
                }
            }
        }
        Self {
            exercises,
            failed,
            rejected,
        }
    }
}

/// The strength analytics engine
///
/// Holds only immutable configuration and shared collaborators, so one engine
/// can serve concurrent requests for different trainees and exercises.
#[derive(Clone)]
pub struct AnalyticsEngine {
    config: Arc<AnalyticsConfig>,
    normalizer: SetRecordNormalizer,
    volume: VolumeCalculator,
    trend: TrendExtractor,
    plateau: PlateauDetector,
    skill: SkillLevelClassifier,
    growth: GrowthCurvePredictor,
    profiles: Arc<dyn TraineeProfileProvider>,
    clock: Arc<dyn TimeSource>,
}

impl AnalyticsEngine {
    /// Build an engine, validating the configuration first
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any threshold or the tier table is invalid
    pub fn new(
        config: AnalyticsConfig,
        catalog: Arc<dyn ExerciseCatalog>,
        profiles: Arc<dyn TraineeProfileProvider>,
        clock: Arc<dyn TimeSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            normalizer: SetRecordNormalizer::new(config.normalizer.clone(), catalog),
            volume: VolumeCalculator::new(&config.volume),
            trend: TrendExtractor::new(config.trend.clone()),
            plateau: PlateauDetector::new(config.plateau.clone()),
            skill: SkillLevelClassifier::new(config.skill.clone()),
            growth: GrowthCurvePredictor::new(config.growth.clone()),
            config: Arc::new(config),
            profiles,
            clock,
        })
    }

    /// Configuration the engine was built with
    #[must_use]
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Normalizer bound to the engine's catalog and bounds
    #[must_use]
    pub const fn normalizer(&self) -> &SetRecordNormalizer {
        &self.normalizer
    }

    /// Volume calculator using the configured 1RM formula
    #[must_use]
    pub const fn volume_calculator(&self) -> &VolumeCalculator {
        &self.volume
    }

    /// Full analytics for one exercise of one trainee
    ///
    /// Records of other exercises are ignored. Too little data is reported
    /// through `InsufficientData` markers in the result, not as an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if a regression over a trend window cannot be fitted
    pub fn compute_analytics(
        &self,
        trainee_id: TraineeId,
        exercise_id: &ExerciseId,
        records: &[SetRecord],
    ) -> AppResult<ExerciseAnalytics> {
        let aggregates = self.volume.aggregate_sessions(exercise_id, records);
        let segments = self.trend.segments(&aggregates);
        let trend: Vec<TrendPoint> = segments
            .clone()
            .flat_map(|segment| segment.points())
            .collect();
        debug!(
            exercise = %exercise_id,
            points = trend.len(),
            segments = segments.clone().count(),
            "extracted trend"
        );

        let plateaus = self.plateau.detect(exercise_id, segments)?;

        let latest_one_rm = trend.last().map(|point| point.smoothed_one_rm);
        let best_one_rm = aggregates
            .iter()
            .map(|session| session.estimated_one_rm)
            .max_by(f64::total_cmp);
        let now = self.clock.now();
        let tier = self.skill_tier(trainee_id, exercise_id, records, &trend, now);
        let verdict = self
            .growth
            .predict(exercise_id, tier, plateaus.last(), latest_one_rm);

        let stale = aggregates.last().is_some_and(|session| {
            now - session.timestamp > Duration::days(self.config.trend.max_gap_days)
        });
        if stale {
            warn!(exercise = %exercise_id, "latest session is older than the maximum gap");
        }

        info!(
            trainee = %trainee_id,
            exercise = %exercise_id,
            sessions = aggregates.len(),
            tier = %tier,
            verdict = %verdict.verdict,
            "computed exercise analytics"
        );

        Ok(ExerciseAnalytics {
            trainee_id,
            exercise_id: exercise_id.clone(),
            total_tonnage: aggregates.iter().map(|session| session.total_tonnage).sum(),
            aggregates,
            trend,
            plateaus,
            verdict,
            latest_one_rm,
            best_one_rm,
            stale,
        })
    }

    /// Skill tier for one exercise as of `now`
    ///
    /// Strength uses the best smoothed 1RM of the latest trend segment. Training
    /// age starts at the profile's first session, else the earliest record.
    #[must_use]
    pub fn skill_tier(
        &self,
        trainee_id: TraineeId,
        exercise_id: &ExerciseId,
        records: &[SetRecord],
        trend: &[TrendPoint],
        now: DateTime<Utc>,
    ) -> SkillTier {
        let latest_segment = trend.last().map(|point| point.segment_index);
        let best_recent = trend
            .iter()
            .filter(|point| Some(point.segment_index) == latest_segment)
            .map(|point| point.smoothed_one_rm)
            .max_by(f64::total_cmp);
        let first_session = self
            .profiles
            .first_session(trainee_id, exercise_id)
            .or_else(|| {
                records
                    .iter()
                    .filter(|set| &set.exercise_id == exercise_id)
                    .map(|set| set.timestamp)
                    .min()
            });

        let signals = SkillSignals::from_inputs(
            self.profiles.bodyweight(trainee_id),
            best_recent,
            first_session,
            now,
        );
        self.skill.classify(&signals)
    }

    /// Analytics for every exercise present in `records`, computed in parallel
    ///
    /// One exercise failing does not abort the others.
    #[must_use]
    pub fn analyze_batch(
        &self,
        trainee_id: TraineeId,
        records: &[SetRecord],
    ) -> BTreeMap<ExerciseId, AppResult<ExerciseAnalytics>> {
        let exercises: BTreeSet<&ExerciseId> =
            records.iter().map(|set| &set.exercise_id).collect();

        exercises
            .into_par_iter()
            .map(|exercise_id| {
                let result = self.compute_analytics(trainee_id, exercise_id, records);
                (exercise_id.clone(), result)
            })
            .collect()
    }

    /// Normalize raw sets, then analyze every exercise that survived validation
    ///
    /// Rejected records and per-exercise failures are reported alongside the
    /// successful results.
    #[must_use]
    pub fn analyze_raw(&self, trainee_id: TraineeId, raws: &[RawSetRecord]) -> BatchAnalytics {
        let batch = self.normalizer.normalize_batch(raws);
        if !batch.rejected.is_empty() {
            warn!(
                rejected = batch.rejected.len(),
                accepted = batch.records.len(),
                "some set records failed validation"
            );
        }
        let results = self.analyze_batch(trainee_id, &batch.records);
        BatchAnalytics::from_results(results, batch.rejected)
    }

    /// Training summary over a batch of validated sets
    #[must_use]
    pub fn summarize(&self, records: &[SetRecord]) -> TrainingSummary {
        TrainingSummary::from_records(records, &self.volume)
    }
}
