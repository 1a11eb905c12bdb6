// ABOUTME: Unified error handling with standard error codes for the analytics engine
// ABOUTME: Defines AppError, ErrorCode, and conversions from the domain-specific error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! `AppError` is the error every public engine entry point returns. Domain
//! errors (`ValidationError`, `InsufficientDataError`) stay typed inside the
//! pipeline and are converted at the boundary.

/// Set validation and data sufficiency errors
pub mod analytics;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use analytics::{
    AnalysisStage, InsufficientDataError, SetField, ValidationError, ValidationReason,
};

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input
    InvalidInput = 3000,
    /// A required field is absent
    MissingRequiredField = 3001,
    /// A field could not be parsed
    InvalidFormat = 3002,
    /// A field is outside its accepted range
    ValueOutOfRange = 3003,

    // Data availability (4000-4999)
    /// The requested resource does not exist
    ResourceNotFound = 4000,
    /// A computation step lacks enough points
    InsufficientData = 4001,

    // Configuration (6000-6999)
    /// Configuration could not be loaded
    ConfigError = 6000,
    /// Configuration was loaded but failed validation
    ConfigInvalid = 6002,

    // Input/output (9000-9999)
    /// Reading input from storage failed
    StorageError = 9002,
    /// Data serialization/deserialization failed
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the record",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::InsufficientData => "Not enough data points for this computation",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether callers should treat this code as an expected, non-exceptional outcome
    #[must_use]
    pub const fn is_data_gap(self) -> bool {
        matches!(self, Self::InsufficientData)
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Not enough data for a computation step
    #[must_use]
    pub fn insufficient_data(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InsufficientData, message)
    }

    /// Configuration failed validation
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Storage read failure
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization failure
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let code = match error.reason {
            ValidationReason::Missing => ErrorCode::MissingRequiredField,
            ValidationReason::Unparseable(_) | ValidationReason::UnknownUnit(_) => {
                ErrorCode::InvalidFormat
            }
            ValidationReason::OutOfRange(_) => ErrorCode::ValueOutOfRange,
            ValidationReason::UnknownExercise(_) => ErrorCode::ResourceNotFound,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<InsufficientDataError> for AppError {
    fn from(error: InsufficientDataError) -> Self {
        Self::insufficient_data(error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
