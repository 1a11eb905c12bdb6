// ABOUTME: Plateau detector classifying smoothed 1RM trends with sliding-window regression
// ABOUTME: Relative weekly thresholds plus two-window hysteresis so one noisy session never flips state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: window and sample counts are small

use liftlens_core::constants::time::{DAYS_PER_WEEK, SECONDS_PER_DAY};
use liftlens_core::errors::AppResult;
use liftlens_core::models::{
    ConfidenceLevel, ExerciseId, PlateauClassification, PlateauSegment, TrendPoint,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PlateauConfig;
use crate::statistical_analysis::StatisticalAnalyzer;
use crate::trend_extractor::TrendSegments;

/// Regression fit of one sliding window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowFit {
    /// Slope of smoothed 1RM in units per week
    pub slope_per_week: f64,
    /// Slope as a fraction of the window's last smoothed 1RM
    pub relative_slope: f64,
    /// Residual standard error over mean level
    pub residual_cv: f64,
    /// Classification of this window alone, before hysteresis
    pub classification: PlateauClassification,
}

/// Classifies trend segments as progressing, plateaued or regressing
#[derive(Debug, Clone)]
pub struct PlateauDetector {
    config: PlateauConfig,
}

impl PlateauDetector {
    /// Create a detector with the given window and thresholds
    #[must_use]
    pub const fn new(config: PlateauConfig) -> Self {
        Self { config }
    }

    /// Fewest points a trend segment needs before windows are classified
    #[must_use]
    pub fn required_points(&self) -> usize {
        self.config.window_size.max(self.config.min_samples)
    }

    /// Classify a relative weekly slope against the thresholds
    #[must_use]
    pub fn classify_relative_slope(&self, relative_slope: f64) -> PlateauClassification {
        if relative_slope > self.config.threshold_progress {
            PlateauClassification::Progressing
        } else if relative_slope < -self.config.threshold_regress {
            PlateauClassification::Regressing
        } else {
            PlateauClassification::Plateaued
        }
    }

    /// Fit one window of trend points
    ///
    /// x is days since the window's first point divided by seven, so the slope
    /// is per week regardless of how sessions are spaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the window has fewer than two distinct timestamps
    pub fn fit_window(&self, window: &[TrendPoint]) -> AppResult<WindowFit> {
        let origin = window.first().map(|point| point.timestamp);
        let points: Vec<(f64, f64)> = window
            .iter()
            .map(|point| {
                let elapsed = origin.map_or(0, |start| (point.timestamp - start).num_seconds());
                (
                    elapsed as f64 / SECONDS_PER_DAY / DAYS_PER_WEEK,
                    point.smoothed_one_rm,
                )
            })
            .collect();
        let fit = StatisticalAnalyzer::linear_regression(&points)?;

        let current = window.last().map_or(0.0, |point| point.smoothed_one_rm);
        let relative_slope = if current.abs() < f64::EPSILON {
            0.0
        } else {
            fit.slope / current
        };

        Ok(WindowFit {
            slope_per_week: fit.slope,
            relative_slope,
            residual_cv: fit.residual_cv(),
            classification: self.classify_relative_slope(relative_slope),
        })
    }

    /// Classify every trend segment, yielding plateau segments in time order
    ///
    /// # Errors
    ///
    /// Returns an error if a window regression cannot be fitted
    pub fn detect(
        &self,
        exercise_id: &ExerciseId,
        segments: TrendSegments<'_>,
    ) -> AppResult<Vec<PlateauSegment>> {
        let mut plateaus = Vec::new();
        for segment in segments {
            let points: Vec<TrendPoint> = segment.points().collect();
            plateaus.extend(self.detect_segment(exercise_id, &points)?);
        }
        Ok(plateaus)
    }

    /// Classify the points of a single trend segment
    ///
    /// A segment shorter than the window (or the minimum sample count) yields
    /// exactly one `InsufficientData` segment spanning it.
    ///
    /// # Errors
    ///
    /// Returns an error if a window regression cannot be fitted
    pub fn detect_segment(
        &self,
        exercise_id: &ExerciseId,
        points: &[TrendPoint],
    ) -> AppResult<Vec<PlateauSegment>> {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return Ok(Vec::new());
        };

        if points.len() < self.required_points() {
            debug!(
                exercise = %exercise_id,
                points = points.len(),
                required = self.required_points(),
                "trend segment too short to classify"
            );
            return Ok(vec![PlateauSegment {
                exercise_id: exercise_id.clone(),
                trend_segment: first.segment_index,
                start: first.timestamp,
                end: last.timestamp,
                classification: PlateauClassification::InsufficientData,
                slope_per_week: None,
                relative_slope: None,
                sample_count: points.len(),
                confidence: 0.0,
                confidence_level: ConfidenceLevel::Low,
            }]);
        }

        let fits = points
            .windows(self.config.window_size)
            .map(|window| self.fit_window(window))
            .collect::<AppResult<Vec<_>>>()?;
        let classifications: Vec<PlateauClassification> =
            fits.iter().map(|fit| fit.classification).collect();
        let states = Self::apply_hysteresis(&classifications);

        Ok(self.build_runs(exercise_id, points, &fits, &states))
    }

    /// State after each window once a change needs two consecutive agreeing windows
    ///
    /// The first window sets the initial state. A lone disagreeing window is
    /// absorbed; only a second consecutive window with the same new
    /// classification moves the state. Hysteresis works on window
    /// classifications, so a single outlier session that sways every window
    /// containing it is only held back when the trend despike is enabled.
    #[must_use]
    pub fn apply_hysteresis(windows: &[PlateauClassification]) -> Vec<PlateauClassification> {
        let mut states = Vec::with_capacity(windows.len());
        let Some(&initial) = windows.first() else {
            return states;
        };

        let mut state = initial;
        let mut pending: Option<PlateauClassification> = None;
        for &candidate in windows {
            if candidate == state {
                pending = None;
            } else if pending == Some(candidate) {
                state = candidate;
                pending = None;
            } else {
                pending = Some(candidate);
            }
            states.push(state);
        }
        states
    }

    /// Group points into runs of equal state
    ///
    /// The first window's state covers all of its points; every later window's
    /// state is attributed to its last point.
    fn build_runs(
        &self,
        exercise_id: &ExerciseId,
        points: &[TrendPoint],
        fits: &[WindowFit],
        states: &[PlateauClassification],
    ) -> Vec<PlateauSegment> {
        let offset = self.config.window_size - 1;
        let state_of_point = |point: usize| states[point.saturating_sub(offset)];
        let window_of_point = |point: usize| point.checked_sub(offset);

        let mut runs = Vec::new();
        let mut run_start = 0;
        while run_start < points.len() {
            let state = state_of_point(run_start);
            let mut run_end = run_start;
            while run_end + 1 < points.len() && state_of_point(run_end + 1) == state {
                run_end += 1;
            }

            let run_fits: Vec<&WindowFit> = (run_start..=run_end)
                .filter_map(window_of_point)
                .map(|window| &fits[window])
                .collect();
            runs.push(self.summarize_run(
                exercise_id,
                &points[run_start..=run_end],
                state,
                &run_fits,
            ));
            run_start = run_end + 1;
        }
        runs
    }

    fn summarize_run(
        &self,
        exercise_id: &ExerciseId,
        run: &[TrendPoint],
        classification: PlateauClassification,
        fits: &[&WindowFit],
    ) -> PlateauSegment {
        let slopes: Vec<f64> = fits.iter().map(|fit| fit.slope_per_week).collect();
        let relative: Vec<f64> = fits.iter().map(|fit| fit.relative_slope).collect();
        let residual_cvs: Vec<f64> = fits.iter().map(|fit| fit.residual_cv).collect();

        let confidence = self.confidence(
            run.len(),
            StatisticalAnalyzer::mean(&residual_cvs).unwrap_or(0.0),
        );
        let trend_segment = run.first().map_or(0, |point| point.segment_index);

        PlateauSegment {
            exercise_id: exercise_id.clone(),
            trend_segment,
            start: run.first().map(|point| point.timestamp).unwrap_or_default(),
            end: run.last().map(|point| point.timestamp).unwrap_or_default(),
            classification,
            slope_per_week: StatisticalAnalyzer::mean(&slopes),
            relative_slope: StatisticalAnalyzer::mean(&relative),
            sample_count: run.len(),
            confidence,
            confidence_level: ConfidenceLevel::from_score(confidence),
        }
    }

    /// Sample factor times fit factor, in `[0, 1]`
    #[must_use]
    pub fn confidence(&self, sample_count: usize, residual_cv: f64) -> f64 {
        let sample_factor =
            (sample_count as f64 / self.config.full_confidence_samples as f64).min(1.0);
        let fit_factor = (-residual_cv / self.config.noise_tolerance).exp();
        (sample_factor * fit_factor).clamp(0.0, 1.0)
    }
}
