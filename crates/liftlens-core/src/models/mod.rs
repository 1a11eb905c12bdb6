// ABOUTME: Domain models for strength progress analytics
// ABOUTME: Set records in, session aggregates, trend points, plateau segments and verdicts out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data flows one way through these types:
//! `RawSetRecord` → `SetRecord` → `SessionAggregate` → `TrendPoint` →
//! `PlateauSegment` + `SkillTier` → `GrowthVerdict`.
//! Only `SetRecord` is ever owned by ingestion; everything downstream is a
//! pure derivation rebuilt on demand.

mod analytics;
mod ids;
mod set_record;

pub use analytics::{
    ConfidenceLevel, ExerciseAnalytics, GrowthRange, GrowthVerdict, PlateauClassification,
    PlateauSegment, ProjectedRange, SessionAggregate, SkillTier, TrendPoint, VerdictKind,
};
pub use ids::{ExerciseId, TraineeId};
pub use set_record::{RawSetRecord, SetRecord, WeightUnit};
