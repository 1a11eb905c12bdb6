// ABOUTME: Algorithm abstraction layer for pluggable strength estimation methods
// ABOUTME: Enum-based dispatch so the configured formula travels inside the immutable config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Algorithm Selection Module
//!
//! Algorithms are enums, not strings or booleans, so a configuration can name
//! one and serialize it. Enum dispatch keeps estimation a plain `match`.
//!
//! # Example
//!
//! ```rust,no_run
//! use liftlens_intelligence::algorithms::OneRepMaxAlgorithm;
//!
//! let algorithm: OneRepMaxAlgorithm = "brzycki".parse()?;
//! let one_rm = algorithm.estimate(100.0, 5);
//! # Ok::<(), liftlens_core::AppError>(())
//! ```

pub mod one_rep_max;

pub use one_rep_max::OneRepMaxAlgorithm;
