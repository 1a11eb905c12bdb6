// ABOUTME: Domain errors raised by the analytics pipeline before results are assembled
// ABOUTME: ValidationError names the offending set field, InsufficientDataError marks data gaps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::models::ExerciseId;

/// Field of a logged set that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetField {
    /// Exercise label
    Exercise,
    /// Load lifted
    Weight,
    /// Repetitions performed
    Reps,
    /// Reps in reserve
    Rir,
    /// Time the set was logged
    Timestamp,
    /// Unit the weight was logged in
    Unit,
}

impl SetField {
    /// Field name as it appears in raw records
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exercise => "exercise",
            Self::Weight => "weight",
            Self::Reps => "reps",
            Self::Rir => "rir",
            Self::Timestamp => "timestamp",
            Self::Unit => "unit",
        }
    }
}

impl fmt::Display for SetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum ValidationReason {
    /// Field absent or blank
    Missing,
    /// Field present but could not be parsed
    Unparseable(String),
    /// Field parsed but outside its accepted range
    OutOfRange(String),
    /// Exercise label unknown to the catalog
    UnknownExercise(String),
    /// Weight unit not supported
    UnknownUnit(String),
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("missing"),
            Self::Unparseable(value) => write!(f, "unparseable value '{value}'"),
            Self::OutOfRange(detail) => write!(f, "out of range ({detail})"),
            Self::UnknownExercise(name) => write!(f, "unknown exercise '{name}'"),
            Self::UnknownUnit(unit) => write!(f, "unknown unit '{unit}'"),
        }
    }
}

/// Malformed input record, rejected before it enters the pipeline
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// Offending field
    pub field: SetField,
    /// What was wrong with it
    pub reason: ValidationReason,
}

impl ValidationError {
    /// Field absent or blank
    #[must_use]
    pub const fn missing(field: SetField) -> Self {
        Self {
            field,
            reason: ValidationReason::Missing,
        }
    }

    /// Field could not be parsed
    #[must_use]
    pub fn unparseable(field: SetField, value: impl Into<String>) -> Self {
        Self {
            field,
            reason: ValidationReason::Unparseable(value.into()),
        }
    }

    /// Field outside its accepted range
    #[must_use]
    pub fn out_of_range(field: SetField, detail: impl Into<String>) -> Self {
        Self {
            field,
            reason: ValidationReason::OutOfRange(detail.into()),
        }
    }
}

/// Pipeline stage that ran short of data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    /// Building a session aggregate
    SessionAggregate,
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SessionAggregate => f.write_str("session aggregate"),
        }
    }
}

/// A computation step lacks enough points.
///
/// This is a gap marker, never a zero value: callers skip the gap instead of
/// feeding a zero into the series.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("insufficient data for {stage} of exercise {exercise_id}: need {required}, got {available}")]
pub struct InsufficientDataError {
    /// Exercise the computation was for
    pub exercise_id: ExerciseId,
    /// Stage that could not run
    pub stage: AnalysisStage,
    /// Points required
    pub required: usize,
    /// Points available
    pub available: usize,
}
