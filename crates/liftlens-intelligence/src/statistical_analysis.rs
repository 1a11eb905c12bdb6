// ABOUTME: Statistical primitives for strength trends: least-squares fit, EWMA step, median despike
// ABOUTME: Pure functions over plain f64 slices, shared by the trend extractor and plateau detector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: window sizes are small

use liftlens_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Ordinary least-squares fit of `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (rate of change)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination (goodness of fit, 0-1)
    pub r_squared: f64,
    /// Standard error of the estimate
    pub standard_error: f64,
    /// Degrees of freedom (n - 2)
    pub degrees_of_freedom: usize,
    /// Mean of the fitted y values
    pub mean_y: f64,
}

impl RegressionResult {
    /// Residual standard error relative to the mean level (0 for a perfect fit)
    #[must_use]
    pub fn residual_cv(&self) -> f64 {
        if self.mean_y.abs() < f64::EPSILON {
            0.0
        } else {
            (self.standard_error / self.mean_y).abs()
        }
    }
}

/// Stateless statistical helpers
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Fit a least-squares line through `(x, y)` points
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are supplied or every x is equal
    pub fn linear_regression(points: &[(f64, f64)]) -> AppResult<RegressionResult> {
        if points.len() < 2 {
            return Err(AppError::insufficient_data(format!(
                "Insufficient data points for regression: need at least 2, got {}",
                points.len()
            )));
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let (sxx, sxy, syy) = points.iter().fold((0.0, 0.0, 0.0), |(sxx, sxy, syy), (x, y)| {
            let dx = x - mean_x;
            let dy = y - mean_y;
            (dx.mul_add(dx, sxx), dx.mul_add(dy, sxy), dy.mul_add(dy, syy))
        });

        if sxx.abs() < f64::EPSILON {
            return Err(AppError::invalid_input(
                "Cannot calculate regression: zero variance in x",
            ));
        }

        let slope = sxy / sxx;
        let intercept = slope.mul_add(-mean_x, mean_y);

        let sse = points
            .iter()
            .map(|(x, y)| {
                let residual = y - slope.mul_add(*x, intercept);
                residual * residual
            })
            .sum::<f64>();

        let r_squared = if syy.abs() < f64::EPSILON {
            1.0
        } else {
            (1.0 - sse / syy).clamp(0.0, 1.0)
        };

        let degrees_of_freedom = points.len().saturating_sub(2);
        let standard_error = if degrees_of_freedom > 0 {
            (sse / degrees_of_freedom as f64).sqrt()
        } else {
            0.0
        };

        Ok(RegressionResult {
            slope,
            intercept,
            r_squared,
            standard_error,
            degrees_of_freedom,
            mean_y,
        })
    }

    /// One EWMA step: `S_t = α·x_t + (1-α)·S_{t-1}`, seeded with the first value
    #[must_use]
    pub fn exponential_smoothing_step(alpha: f64, previous: Option<f64>, value: f64) -> f64 {
        previous.map_or(value, |prev| alpha.mul_add(value, (1.0 - alpha) * prev))
    }

    /// Value at `index` after a 3-point median filter; endpoints pass through
    ///
    /// An isolated single-session spike is replaced by the median of itself and
    /// its two neighbours, so one bad session never drags the smoothed line.
    #[must_use]
    pub fn despiked_value(values: &[f64], index: usize) -> f64 {
        let Some(&current) = values.get(index) else {
            return f64::NAN;
        };
        if index == 0 || index + 1 >= values.len() {
            return current;
        }
        Self::median_of_three(values[index - 1], current, values[index + 1])
    }

    fn median_of_three(a: f64, b: f64, c: f64) -> f64 {
        a.max(b).min(a.min(b).max(c))
    }

    /// Arithmetic mean, `None` for an empty input
    #[must_use]
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }
}
