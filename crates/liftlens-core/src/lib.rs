// ABOUTME: Core types and constants for LiftLens strength progress analytics
// ABOUTME: Foundation crate with error handling, domain models, and collaborator interfaces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftLens Core
//!
//! Foundation crate providing shared types for the LiftLens analytics engine.
//! It holds no algorithms; the engine lives in `liftlens-intelligence`.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Units and engine defaults organized by domain
//! - **models**: Set records and every derived analytics entity
//! - **catalog**: Exercise name to id resolution
//! - **profile**: Trainee profile lookups (bodyweight, first logged session)
//! - **clock**: Injectable time source

/// Unified error handling system with standard error codes
pub mod errors;

/// Units and engine defaults organized by domain
pub mod constants;

/// Domain models (set records, aggregates, trend points, verdicts)
pub mod models;

/// Exercise catalog interface and in-memory implementation
pub mod catalog;

/// Trainee profile interface and in-memory implementation
pub mod profile;

/// Time source abstraction so "now" is never read implicitly
pub mod clock;

pub use catalog::{ExerciseCatalog, InMemoryExerciseCatalog};
pub use clock::{FixedClock, SystemClock, TimeSource};
pub use errors::{AppError, AppResult, ErrorCode};
pub use profile::{StaticTraineeProfiles, TraineeProfile, TraineeProfileProvider};
