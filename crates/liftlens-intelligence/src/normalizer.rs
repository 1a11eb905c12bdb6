// ABOUTME: Set record normalizer validating raw logged sets into canonical kilogram records
// ABOUTME: Resolves exercise names through the catalog and rejects bad fields without coercion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use liftlens_core::catalog::ExerciseCatalog;
use liftlens_core::errors::{SetField, ValidationError, ValidationReason};
use liftlens_core::models::{ExerciseId, RawSetRecord, SetRecord, WeightUnit};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::NormalizerConfig;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d, %B, %Y"];

/// A raw record that failed validation, with its position in the batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedRecord {
    /// Index of the record in the submitted batch
    pub index: usize,
    /// Why it was rejected
    pub error: ValidationError,
}

/// Result of normalizing a batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBatch {
    /// Accepted records, deduplicated and sorted by timestamp
    pub records: Vec<SetRecord>,
    /// Records that failed validation
    pub rejected: Vec<RejectedRecord>,
}

/// Validates and canonicalizes raw sets
#[derive(Clone)]
pub struct SetRecordNormalizer {
    config: NormalizerConfig,
    catalog: Arc<dyn ExerciseCatalog>,
}

impl SetRecordNormalizer {
    /// Create a normalizer over an exercise catalog
    #[must_use]
    pub fn new(config: NormalizerConfig, catalog: Arc<dyn ExerciseCatalog>) -> Self {
        Self { config, catalog }
    }

    /// Validate one raw record
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the first offending field
    pub fn normalize(&self, raw: &RawSetRecord) -> Result<SetRecord, ValidationError> {
        let exercise_id = self.resolve_exercise(raw.exercise.as_deref())?;
        let unit = match raw.unit.as_deref().map(str::trim) {
            None | Some("") => WeightUnit::Kilogram,
            Some(text) => text.parse()?,
        };
        let weight = Self::validate_weight(raw.weight, unit)?;
        let reps = Self::validate_reps(raw.reps)?;
        let rir = self.validate_rir(raw.rir)?;
        let timestamp = match raw.timestamp.as_deref() {
            Some(text) if !text.trim().is_empty() => parse_timestamp(text)?,
            _ => return Err(ValidationError::missing(SetField::Timestamp)),
        };

        Ok(SetRecord {
            exercise_id,
            weight,
            reps,
            rir,
            timestamp,
            muscle_group: raw
                .muscle_group
                .as_deref()
                .map(str::trim)
                .filter(|group| !group.is_empty())
                .map(str::to_lowercase),
        })
    }

    /// Validate a batch without aborting on bad records
    ///
    /// A later record with the same exercise and timestamp supersedes an
    /// earlier one. Accepted records come back ordered by timestamp.
    #[must_use]
    pub fn normalize_batch(&self, raws: &[RawSetRecord]) -> NormalizedBatch {
        let mut accepted = BTreeMap::new();
        let mut rejected = Vec::new();

        for (index, raw) in raws.iter().enumerate() {
            match self.normalize(raw) {
                Ok(record) => {
                    let key = (record.timestamp, record.exercise_id.clone());
                    if accepted.insert(key, record).is_some() {
                        debug!(index, "set superseded by later record with same key");
                    }
                }
                Err(error) => {
                    warn!(
                        index,
                        field = %error.field,
                        reason = %error.reason,
                        "rejected set record"
                    );
                    rejected.push(RejectedRecord { index, error });
                }
            }
        }

        NormalizedBatch {
            records: accepted.into_values().collect(),
            rejected,
        }
    }

    fn resolve_exercise(&self, label: Option<&str>) -> Result<ExerciseId, ValidationError> {
        let label = label
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ValidationError::missing(SetField::Exercise))?;
        self.catalog.resolve(label).ok_or_else(|| ValidationError {
            field: SetField::Exercise,
            reason: ValidationReason::UnknownExercise(label.to_owned()),
        })
    }

    fn validate_weight(weight: Option<f64>, unit: WeightUnit) -> Result<f64, ValidationError> {
        let weight = weight.ok_or_else(|| ValidationError::missing(SetField::Weight))?;
        if !weight.is_finite() {
            return Err(ValidationError::unparseable(
                SetField::Weight,
                weight.to_string(),
            ));
        }
        if weight <= 0.0 {
            return Err(ValidationError::out_of_range(
                SetField::Weight,
                format!("{weight} must be > 0"),
            ));
        }
        Ok(unit.to_kilograms(weight))
    }

    fn validate_reps(reps: Option<i64>) -> Result<u32, ValidationError> {
        let reps = reps.ok_or_else(|| ValidationError::missing(SetField::Reps))?;
        if reps < 1 {
            return Err(ValidationError::out_of_range(
                SetField::Reps,
                format!("{reps} must be >= 1"),
            ));
        }
        u32::try_from(reps).map_err(|_| {
            ValidationError::out_of_range(SetField::Reps, format!("{reps} is too large"))
        })
    }

    fn validate_rir(&self, rir: Option<i64>) -> Result<u8, ValidationError> {
        let Some(rir) = rir else {
            return self
                .config
                .default_rir
                .ok_or_else(|| ValidationError::missing(SetField::Rir));
        };
        let (min, max) = (self.config.rir_min, self.config.rir_max);
        u8::try_from(rir)
            .ok()
            .filter(|value| (min..=max).contains(value))
            .ok_or_else(|| {
                ValidationError::out_of_range(SetField::Rir, format!("{rir} not in {min}..={max}"))
            })
    }
}

/// Parse a logged timestamp into UTC
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS` (UTC assumed), `YYYY-MM-DD`,
/// `DD/MM/YYYY` and the legacy `D, Month, YYYY` log format. Date-only values
/// are midnight UTC.
///
/// # Errors
///
/// Returns a `ValidationError` on the timestamp field if no format matches
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>, ValidationError> {
    let text = text.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        return Ok(naive.and_utc());
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .ok_or_else(|| ValidationError::unparseable(SetField::Timestamp, text))
}
