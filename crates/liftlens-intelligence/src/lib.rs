// ABOUTME: Strength progress analytics engine: normalize, aggregate, smooth, classify, judge
// ABOUTME: Pure synchronous computation over immutable set-record snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftLens Intelligence
//!
//! The pipeline runs one way:
//!
//! raw sets → [`normalizer`] → [`volume_calculator`] → [`trend_extractor`] →
//! [`plateau_detector`] + [`skill_classifier`] → [`growth_predictor`]
//!
//! [`engine::AnalyticsEngine`] wires the stages together behind
//! `compute_analytics`. Every stage is built from an immutable slice of
//! [`config::AnalyticsConfig`], so no threshold is read from process state
//! mid-computation.

/// Pluggable 1RM estimation formulas
pub mod algorithms;

/// Engine configuration and its validation errors
pub mod config;

/// Engine facade and batch analysis
pub mod engine;

/// Expected-growth verdicts and projections
pub mod growth_predictor;

/// Raw set validation and canonicalization
pub mod normalizer;

/// Sliding-window plateau classification with hysteresis
pub mod plateau_detector;

/// Skill tier heuristic
pub mod skill_classifier;

/// Regression, smoothing and despike helpers
pub mod statistical_analysis;

/// Whole-log volume summary by muscle group
pub mod training_summary;

/// EWMA trend segments
pub mod trend_extractor;

/// Session aggregates and per-set 1RM
pub mod volume_calculator;

pub use algorithms::OneRepMaxAlgorithm;
pub use config::{AnalyticsConfig, ConfigError};
pub use engine::{AnalyticsEngine, BatchAnalytics, FailedExercise};
pub use growth_predictor::GrowthCurvePredictor;
pub use normalizer::{parse_timestamp, NormalizedBatch, RejectedRecord, SetRecordNormalizer};
pub use plateau_detector::{PlateauDetector, WindowFit};
pub use skill_classifier::{SkillLevelClassifier, SkillSignals};
pub use training_summary::{MuscleGroupSummary, TrainingSummary, WeeklyVolume};
pub use trend_extractor::{TrendExtractor, TrendPoints, TrendSegment, TrendSegments};
pub use volume_calculator::VolumeCalculator;
