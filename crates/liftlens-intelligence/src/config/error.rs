// ABOUTME: Configuration error types for analytics configuration validation
// ABOUTME: Defines error variants for invalid ranges, tier tables, and environment parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types. These are fatal: they surface at startup when the
//! engine is constructed and never mid-computation.

use liftlens_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Value outside acceptable range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Expected-growth tier table is inconsistent
    #[error("Invalid tier table: {0}")]
    InvalidTierTable(&'static str),

    /// Failed to parse a configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Failed to read a configuration file
    #[error("Configuration file error: {0}")]
    File(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::File(_) => ErrorCode::ConfigError,
            _ => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
