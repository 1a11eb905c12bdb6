// ABOUTME: Unit tests for analytics configuration defaults, validation and overrides
// ABOUTME: Covers environment variable overrides, JSON config files and rejected values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::fs;

use liftlens_core::models::{GrowthRange, SkillTier};
use liftlens_intelligence::config::TrendConfig;
use liftlens_intelligence::{AnalyticsConfig, ConfigError, OneRepMaxAlgorithm};
use serial_test::serial;
use tempfile::TempDir;

#[test]
fn test_default_config_validation() {
    let config = AnalyticsConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.plateau.window_size, 4);
    assert_eq!(config.trend.max_gap_days, 14);
    assert_eq!(config.volume.one_rep_max, OneRepMaxAlgorithm::Epley);
}

#[test]
fn test_default_alpha_has_three_session_half_life() {
    let alpha = AnalyticsConfig::default().trend.smoothing_alpha;
    let remaining = (1.0 - alpha).powi(3);
    assert!((remaining - 0.5).abs() < 1e-12);
    assert!((TrendConfig::alpha_for_half_life(1.0) - 0.5).abs() < 1e-12);
}

#[test]
fn test_invalid_alpha_rejected() {
    for alpha in [0.0, -0.1, 1.5, f64::NAN] {
        let mut config = AnalyticsConfig::default();
        config.trend.smoothing_alpha = alpha;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))), "alpha {alpha}");
    }
}

#[test]
fn test_invalid_rir_bounds_rejected() {
    let mut config = AnalyticsConfig::default();
    config.normalizer.rir_min = 4;
    config.normalizer.rir_max = 2;
    assert!(config.validate().is_err());

    let mut config = AnalyticsConfig::default();
    config.normalizer.default_rir = Some(9);
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_thresholds_rejected() {
    let mut config = AnalyticsConfig::default();
    config.plateau.threshold_regress = -0.01;
    assert!(config.validate().is_err());

    let mut config = AnalyticsConfig::default();
    config.plateau.min_samples = 1;
    assert!(config.validate().is_err());

    let mut config = AnalyticsConfig::default();
    config.trend.max_gap_days = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_default_tier_table_is_weekly() {
    let tiers = AnalyticsConfig::default().growth.tiers;

    assert_eq!(
        tiers.range_for(SkillTier::Beginner),
        GrowthRange::weekly(0.010, 0.025)
    );
    assert_eq!(
        tiers.range_for(SkillTier::Intermediate),
        GrowthRange::weekly(0.0025, 0.010)
    );
    assert_eq!(
        tiers.range_for(SkillTier::Advanced),
        GrowthRange::weekly(0.0, 0.0025)
    );

    let (monthly_low, monthly_high) = tiers.range_for(SkillTier::Beginner).monthly();
    assert!(monthly_low > 0.04 && monthly_high < 0.11);
}

#[test]
fn test_tier_table_must_diminish_with_tier() {
    let mut config = AnalyticsConfig::default();
    config.growth.tiers = config
        .growth
        .tiers
        .clone()
        .with_range(SkillTier::Advanced, GrowthRange::weekly(0.0, 0.05));
    assert!(matches!(config.validate(), Err(ConfigError::InvalidTierTable(_))));

    let mut config = AnalyticsConfig::default();
    config.growth.tiers.beginner = GrowthRange::weekly(0.03, 0.01);
    assert!(matches!(config.validate(), Err(ConfigError::InvalidTierTable(_))));
}

#[test]
fn test_skill_breakpoints_must_ascend() {
    let mut config = AnalyticsConfig::default();
    config.skill.advanced_training_months = 3.0;
    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_environment_variable_override() {
    env::set_var("LIFTLENS_WINDOW_SIZE", "5");
    env::set_var("LIFTLENS_THRESHOLD_PROGRESS", "0.01");
    env::set_var("LIFTLENS_DEFAULT_RIR", "none");
    env::set_var("LIFTLENS_ONE_RM_ALGORITHM", "brzycki");

    let config = AnalyticsConfig::from_environment().unwrap();

    assert_eq!(config.plateau.window_size, 5);
    assert!((config.plateau.threshold_progress - 0.01).abs() < 1e-12);
    assert_eq!(config.normalizer.default_rir, None);
    assert_eq!(config.volume.one_rep_max, OneRepMaxAlgorithm::Brzycki);

    env::remove_var("LIFTLENS_WINDOW_SIZE");
    env::remove_var("LIFTLENS_THRESHOLD_PROGRESS");
    env::remove_var("LIFTLENS_DEFAULT_RIR");
    env::remove_var("LIFTLENS_ONE_RM_ALGORITHM");
}

#[test]
#[serial]
fn test_unparseable_environment_value_rejected() {
    env::set_var("LIFTLENS_MAX_GAP_DAYS", "two weeks");

    let result = AnalyticsConfig::from_environment();

    env::remove_var("LIFTLENS_MAX_GAP_DAYS");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_environment_override_still_validated() {
    env::set_var("LIFTLENS_SMOOTHING_ALPHA", "2.0");

    let result = AnalyticsConfig::from_environment();

    env::remove_var("LIFTLENS_SMOOTHING_ALPHA");
    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_partial_json_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("liftlens.json");
    fs::write(
        &path,
        r#"{
            "plateau": { "window_size": 6 },
            "growth": { "tiers": { "beginner": { "low": 0.02, "high": 0.06 } } },
            "volume": { "one_rep_max": "lombardi" }
        }"#,
    )
    .unwrap();

    let config = AnalyticsConfig::from_json_file(&path).unwrap();

    assert_eq!(config.plateau.window_size, 6);
    assert_eq!(config.plateau.min_samples, 4);
    assert_eq!(
        config.growth.tiers.range_for(SkillTier::Beginner),
        GrowthRange::weekly(0.02, 0.06)
    );
    assert_eq!(
        config.growth.tiers.intermediate,
        AnalyticsConfig::default().growth.tiers.intermediate
    );
    assert_eq!(config.volume.one_rep_max, OneRepMaxAlgorithm::Lombardi);
}

#[test]
#[serial]
fn test_missing_and_malformed_files_rejected() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.json");
    assert!(matches!(
        AnalyticsConfig::from_json_file(&missing),
        Err(ConfigError::File(_))
    ));

    let malformed = dir.path().join("broken.json");
    fs::write(&malformed, "{ not json").unwrap();
    assert!(matches!(
        AnalyticsConfig::from_json_file(&malformed),
        Err(ConfigError::Parse(_))
    ));
}
