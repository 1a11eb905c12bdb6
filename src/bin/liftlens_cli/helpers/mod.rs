// ABOUTME: Helper modules for liftlens-cli
// ABOUTME: Provides display formatting for analytics reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
