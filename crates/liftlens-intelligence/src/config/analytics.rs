// ABOUTME: Configuration-driven thresholds for the analytics pipeline replacing magic numbers
// ABOUTME: Immutable object handed to every component at construction, with env overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use liftlens_core::constants::{growth, normalizer, plateau, skill, trend};
use liftlens_core::models::{GrowthRange, SkillTier};
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::algorithms::OneRepMaxAlgorithm;

/// Set validation bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Lowest accepted reps-in-reserve
    pub rir_min: u8,
    /// Highest accepted reps-in-reserve
    pub rir_max: u8,
    /// RIR assumed when a set has none; `None` rejects such sets
    pub default_rir: Option<u8>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            rir_min: normalizer::DEFAULT_RIR_MIN,
            rir_max: normalizer::DEFAULT_RIR_MAX,
            default_rir: Some(normalizer::DEFAULT_MISSING_RIR),
        }
    }
}

/// Session aggregation parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeConfig {
    /// Per-set 1RM estimation formula
    pub one_rep_max: OneRepMaxAlgorithm,
}

/// Trend extraction parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// EWMA smoothing factor in `(0, 1]`
    pub smoothing_alpha: f64,
    /// Gaps longer than this many days split the series
    pub max_gap_days: i64,
    /// Replace isolated single-session spikes by their neighbourhood median before smoothing
    ///
    /// Plateau hysteresis only absorbs one disagreeing window, while a single
    /// outlier session enters every window that contains it. With despike off
    /// one outlier among progressing sessions can flip the classification.
    pub despike: bool,
}

impl TrendConfig {
    /// Smoothing factor for which a session's weight halves every `sessions` sessions
    #[must_use]
    pub fn alpha_for_half_life(sessions: f64) -> f64 {
        1.0 - 0.5_f64.powf(1.0 / sessions)
    }
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            smoothing_alpha: Self::alpha_for_half_life(trend::DEFAULT_HALF_LIFE_SESSIONS),
            max_gap_days: trend::DEFAULT_MAX_GAP_DAYS,
            despike: true,
        }
    }
}

/// Sliding-window plateau classification parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlateauConfig {
    /// Trend points per window
    pub window_size: usize,
    /// Fewest points a segment needs before it is classified
    pub min_samples: usize,
    /// Relative weekly slope above which a window is progressing
    pub threshold_progress: f64,
    /// Relative weekly slope below whose negative a window is regressing
    pub threshold_regress: f64,
    /// Points at which sample-count confidence saturates
    pub full_confidence_samples: usize,
    /// Residual coefficient of variation at which fit confidence falls to 1/e
    pub noise_tolerance: f64,
}

impl Default for PlateauConfig {
    fn default() -> Self {
        Self {
            window_size: plateau::DEFAULT_WINDOW_SIZE,
            min_samples: plateau::DEFAULT_MIN_SAMPLES,
            threshold_progress: plateau::DEFAULT_THRESHOLD_PROGRESS,
            threshold_regress: plateau::DEFAULT_THRESHOLD_REGRESS,
            full_confidence_samples: plateau::DEFAULT_FULL_CONFIDENCE_SAMPLES,
            noise_tolerance: plateau::DEFAULT_NOISE_TOLERANCE,
        }
    }
}

/// Expected weekly 1RM growth per tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierGrowthTable {
    /// Beginner band
    pub beginner: GrowthRange,
    /// Intermediate band
    pub intermediate: GrowthRange,
    /// Advanced band
    pub advanced: GrowthRange,
}

impl TierGrowthTable {
    /// Band for a tier
    #[must_use]
    pub const fn range_for(&self, tier: SkillTier) -> GrowthRange {
        match tier {
            SkillTier::Beginner => self.beginner,
            SkillTier::Intermediate => self.intermediate,
            SkillTier::Advanced => self.advanced,
        }
    }

    /// Replace the band for one tier
    #[must_use]
    pub fn with_range(mut self, tier: SkillTier, range: GrowthRange) -> Self {
        match tier {
            SkillTier::Beginner => self.beginner = range,
            SkillTier::Intermediate => self.intermediate = range,
            SkillTier::Advanced => self.advanced = range,
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for tier in SkillTier::ALL {
            let range = self.range_for(tier);
            if !range.low.is_finite() || !range.high.is_finite() {
                return Err(ConfigError::InvalidTierTable("growth bounds must be finite"));
            }
            if range.low > range.high {
                return Err(ConfigError::InvalidTierTable(
                    "growth low bound must not exceed high bound",
                ));
            }
        }
        if self.beginner.high < self.intermediate.high
            || self.intermediate.high < self.advanced.high
        {
            return Err(ConfigError::InvalidTierTable(
                "expected growth must not increase with training experience",
            ));
        }
        Ok(())
    }
}

impl Default for TierGrowthTable {
    fn default() -> Self {
        Self {
            beginner: GrowthRange::weekly(growth::BEGINNER_WEEKLY.0, growth::BEGINNER_WEEKLY.1),
            intermediate: GrowthRange::weekly(
                growth::INTERMEDIATE_WEEKLY.0,
                growth::INTERMEDIATE_WEEKLY.1,
            ),
            advanced: GrowthRange::weekly(growth::ADVANCED_WEEKLY.0, growth::ADVANCED_WEEKLY.1),
        }
    }
}

/// Growth verdict parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// Expected weekly growth per tier
    pub tiers: TierGrowthTable,
    /// Projection horizon in weeks
    pub projection_weeks: u32,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            tiers: TierGrowthTable::default(),
            projection_weeks: growth::DEFAULT_PROJECTION_WEEKS,
        }
    }
}

/// Skill tier breakpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillConfig {
    /// 1RM / bodyweight for intermediate
    pub intermediate_strength_ratio: f64,
    /// 1RM / bodyweight for advanced
    pub advanced_strength_ratio: f64,
    /// Training age in months for intermediate
    pub intermediate_training_months: f64,
    /// Training age in months for advanced
    pub advanced_training_months: f64,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            intermediate_strength_ratio: skill::INTERMEDIATE_STRENGTH_RATIO,
            advanced_strength_ratio: skill::ADVANCED_STRENGTH_RATIO,
            intermediate_training_months: skill::INTERMEDIATE_TRAINING_MONTHS,
            advanced_training_months: skill::ADVANCED_TRAINING_MONTHS,
        }
    }
}

/// Main analytics configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Set validation
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    /// Session aggregation
    #[serde(default)]
    pub volume: VolumeConfig,
    /// Trend extraction
    #[serde(default)]
    pub trend: TrendConfig,
    /// Plateau detection
    #[serde(default)]
    pub plateau: PlateauConfig,
    /// Growth verdicts
    #[serde(default)]
    pub growth: GrowthConfig,
    /// Skill tiers
    #[serde(default)]
    pub skill: SkillConfig,
}

impl AnalyticsConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or the
    /// resulting configuration fails validation
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_environment()?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file, then apply environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or validation fails
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::File(format!("{}: {e}", path.display())))?;
        let mut config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::Parse(format!("{}: {e}", path.display())))?;
        config.apply_environment()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_environment(&mut self) -> Result<(), ConfigError> {
        env_override("LIFTLENS_RIR_MAX", &mut self.normalizer.rir_max)?;
        if let Ok(val) = env::var("LIFTLENS_DEFAULT_RIR") {
            self.normalizer.default_rir = if val.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(parse_env("LIFTLENS_DEFAULT_RIR", &val)?)
            };
        }
        env_override("LIFTLENS_SMOOTHING_ALPHA", &mut self.trend.smoothing_alpha)?;
        env_override("LIFTLENS_MAX_GAP_DAYS", &mut self.trend.max_gap_days)?;
        env_override("LIFTLENS_WINDOW_SIZE", &mut self.plateau.window_size)?;
        env_override("LIFTLENS_MIN_SAMPLES", &mut self.plateau.min_samples)?;
        env_override(
            "LIFTLENS_THRESHOLD_PROGRESS",
            &mut self.plateau.threshold_progress,
        )?;
        env_override(
            "LIFTLENS_THRESHOLD_REGRESS",
            &mut self.plateau.threshold_regress,
        )?;
        env_override("LIFTLENS_PROJECTION_WEEKS", &mut self.growth.projection_weeks)?;
        if let Ok(val) = env::var("LIFTLENS_ONE_RM_ALGORITHM") {
            self.volume.one_rep_max = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("LIFTLENS_ONE_RM_ALGORITHM={val}")))?;
        }
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = &self.normalizer;
        if n.rir_min > n.rir_max {
            return Err(ConfigError::InvalidRange("rir_min must be <= rir_max"));
        }
        if let Some(default_rir) = n.default_rir {
            if !(n.rir_min..=n.rir_max).contains(&default_rir) {
                return Err(ConfigError::InvalidRange(
                    "default_rir must lie within rir_min..=rir_max",
                ));
            }
        }

        let t = &self.trend;
        if !(t.smoothing_alpha > 0.0 && t.smoothing_alpha <= 1.0) {
            return Err(ConfigError::InvalidRange(
                "smoothing_alpha must be in (0, 1]",
            ));
        }
        if t.max_gap_days <= 0 {
            return Err(ConfigError::InvalidRange("max_gap_days must be > 0"));
        }

        let p = &self.plateau;
        if p.window_size < 2 {
            return Err(ConfigError::InvalidRange("window_size must be >= 2"));
        }
        if p.min_samples < 2 {
            return Err(ConfigError::InvalidRange("min_samples must be >= 2"));
        }
        if !(p.threshold_progress.is_finite() && p.threshold_progress >= 0.0) {
            return Err(ConfigError::InvalidRange(
                "threshold_progress must be finite and >= 0",
            ));
        }
        if !(p.threshold_regress.is_finite() && p.threshold_regress >= 0.0) {
            return Err(ConfigError::InvalidRange(
                "threshold_regress must be finite and >= 0",
            ));
        }
        if p.full_confidence_samples == 0 {
            return Err(ConfigError::InvalidRange(
                "full_confidence_samples must be > 0",
            ));
        }
        if !(p.noise_tolerance.is_finite() && p.noise_tolerance > 0.0) {
            return Err(ConfigError::InvalidRange("noise_tolerance must be > 0"));
        }

        self.growth.tiers.validate()?;
        if self.growth.projection_weeks == 0 {
            return Err(ConfigError::InvalidRange("projection_weeks must be > 0"));
        }

        let s = &self.skill;
        if !(s.intermediate_strength_ratio > 0.0
            && s.intermediate_strength_ratio < s.advanced_strength_ratio)
        {
            return Err(ConfigError::InvalidRange(
                "strength ratios must satisfy 0 < intermediate < advanced",
            ));
        }
        if !(s.intermediate_training_months > 0.0
            && s.intermediate_training_months < s.advanced_training_months)
        {
            return Err(ConfigError::InvalidRange(
                "training months must satisfy 0 < intermediate < advanced",
            ));
        }

        Ok(())
    }
}

fn parse_env<T>(name: &str, val: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    val.trim()
        .parse()
        .map_err(|e| ConfigError::Parse(format!("{name}={val}: {e}")))
}

fn env_override<T>(name: &str, target: &mut T) -> Result<(), ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    if let Ok(val) = env::var(name) {
        *target = parse_env(name, &val)?;
    }
    Ok(())
}
