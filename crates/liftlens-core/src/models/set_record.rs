// ABOUTME: Logged workout sets, both raw as received and canonical after validation
// ABOUTME: SetRecord is immutable once built and is the only entity ingestion owns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::ExerciseId;
use crate::constants::units;
use crate::errors::{SetField, ValidationError, ValidationReason};

/// Set as received from the log storage layer, every field possibly missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSetRecord {
    /// Exercise label as typed by the trainee
    #[serde(default, alias = "exercise_name")]
    pub exercise: Option<String>,
    /// Load lifted
    #[serde(default)]
    pub weight: Option<f64>,
    /// Repetitions performed
    #[serde(default)]
    pub reps: Option<i64>,
    /// Reps in reserve
    #[serde(default)]
    pub rir: Option<i64>,
    /// Timestamp text (RFC 3339, ISO date, or legacy log formats)
    #[serde(default, alias = "date")]
    pub timestamp: Option<String>,
    /// Unit the weight was logged in; kilograms when absent
    #[serde(default)]
    pub unit: Option<String>,
    /// Muscle group the trainee filed the exercise under
    #[serde(default)]
    pub muscle_group: Option<String>,
}

/// Weight units accepted on input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    /// Kilograms (internal unit)
    Kilogram,
    /// Pounds
    Pound,
}

impl WeightUnit {
    /// Convert a weight in this unit to kilograms
    #[must_use]
    pub fn to_kilograms(self, weight: f64) -> f64 {
        match self {
            Self::Kilogram => weight,
            Self::Pound => weight * units::KG_PER_LB,
        }
    }
}

impl FromStr for WeightUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(Self::Kilogram),
            "lb" | "lbs" | "pound" | "pounds" => Ok(Self::Pound),
            other => Err(ValidationError {
                field: SetField::Unit,
                reason: ValidationReason::UnknownUnit(other.to_owned()),
            }),
        }
    }
}

/// Canonical, validated set in the internal unit (kilograms)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    /// Resolved exercise id
    pub exercise_id: ExerciseId,
    /// Weight in kilograms, strictly positive
    pub weight: f64,
    /// Repetitions, at least one
    pub reps: u32,
    /// Reps in reserve, within the configured bounds
    pub rir: u8,
    /// When the set was logged
    pub timestamp: DateTime<Utc>,
    /// Muscle group label, if the log carried one
    pub muscle_group: Option<String>,
}

impl SetRecord {
    /// Reps the trainee could have performed to failure
    #[must_use]
    pub fn reps_effective(&self) -> u32 {
        self.reps + u32::from(self.rir)
    }

    /// Weight × reps for this set
    #[must_use]
    pub fn tonnage(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }

    /// UTC calendar day the set belongs to (session key)
    #[must_use]
    pub fn session_day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}
