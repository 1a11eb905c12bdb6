// ABOUTME: Configuration module for the liftlens-intelligence crate
// ABOUTME: Re-exports the analytics configuration object and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Analytics configuration (thresholds, tier table, smoothing)
pub mod analytics;
/// Configuration error types
pub mod error;

pub use analytics::{
    AnalyticsConfig, GrowthConfig, NormalizerConfig, PlateauConfig, SkillConfig,
    TierGrowthTable, TrendConfig, VolumeConfig,
};
pub use error::ConfigError;
