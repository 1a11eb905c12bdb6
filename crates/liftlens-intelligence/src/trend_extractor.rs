// ABOUTME: Trend extractor turning session aggregates into EWMA-smoothed 1RM series
// ABOUTME: Long gaps split the series into independent segments exposed as lazy, restartable iterators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Trend extraction
//!
//! Sessions are walked in time order. A gap strictly longer than
//! `max_gap_days` closes the current segment; the next session opens a new one
//! and the EWMA restarts from its value. Nothing is interpolated across a gap,
//! so a layoff shows up as two segments rather than a fake plateau.
//!
//! Both levels are lazy: [`TrendSegments`] finds segment boundaries as it is
//! advanced, and [`TrendSegment::points`] smooths one point per `next()`. Both
//! are `Clone`, so a consumer can restart either sequence without recomputing
//! anything upstream.

use std::iter::FusedIterator;

use chrono::{DateTime, Utc};
use liftlens_core::models::{SessionAggregate, TrendPoint};

use crate::config::TrendConfig;
use crate::statistical_analysis::StatisticalAnalyzer;

/// Builds smoothed trend segments from session aggregates
#[derive(Debug, Clone)]
pub struct TrendExtractor {
    config: TrendConfig,
}

impl TrendExtractor {
    /// Create an extractor with the given smoothing parameters
    #[must_use]
    pub const fn new(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Lazily split time-ordered aggregates into gap-delimited segments
    #[must_use]
    pub fn segments<'a>(&self, aggregates: &'a [SessionAggregate]) -> TrendSegments<'a> {
        TrendSegments {
            aggregates,
            cursor: 0,
            next_index: 0,
            params: SmoothingParams {
                alpha: self.config.smoothing_alpha,
                despike: self.config.despike,
            },
            max_gap_days: self.config.max_gap_days,
        }
    }

    /// Every trend point across all segments, in time order
    #[must_use]
    pub fn extract(&self, aggregates: &[SessionAggregate]) -> Vec<TrendPoint> {
        self.segments(aggregates)
            .flat_map(|segment| segment.points())
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct SmoothingParams {
    alpha: f64,
    despike: bool,
}

/// Lazy iterator over gap-delimited trend segments
#[derive(Debug, Clone)]
pub struct TrendSegments<'a> {
    aggregates: &'a [SessionAggregate],
    cursor: usize,
    next_index: usize,
    params: SmoothingParams,
    max_gap_days: i64,
}

impl<'a> Iterator for TrendSegments<'a> {
    type Item = TrendSegment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.aggregates.get(self.cursor..)?;
        if remaining.is_empty() {
            return None;
        }

        let length = remaining
            .windows(2)
            .position(|pair| (pair[1].day - pair[0].day).num_days() > self.max_gap_days)
            .map_or(remaining.len(), |split| split + 1);

        let segment = TrendSegment {
            index: self.next_index,
            sessions: &remaining[..length],
            params: self.params,
        };
        self.cursor += length;
        self.next_index += 1;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.aggregates.len().saturating_sub(self.cursor);
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for TrendSegments<'_> {}

/// One gap-free run of sessions
#[derive(Debug, Clone, Copy)]
pub struct TrendSegment<'a> {
    index: usize,
    sessions: &'a [SessionAggregate],
    params: SmoothingParams,
}

impl<'a> TrendSegment<'a> {
    /// Position of this segment in the series (0-based)
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Sessions in the segment
    #[must_use]
    pub const fn sessions(&self) -> &'a [SessionAggregate] {
        self.sessions
    }

    /// Number of sessions (and trend points) in the segment
    #[must_use]
    pub const fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Segments produced by [`TrendSegments`] are never empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Timestamp of the first session
    #[must_use]
    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.sessions.first().map(|session| session.timestamp)
    }

    /// Timestamp of the last session
    #[must_use]
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.sessions.last().map(|session| session.timestamp)
    }

    /// Lazily smoothed points, restarting the EWMA at the segment's first session
    #[must_use]
    pub fn points(&self) -> TrendPoints<'a> {
        TrendPoints {
            segment: *self,
            position: 0,
            smoothed: None,
        }
    }
}

/// Lazy EWMA over one segment
#[derive(Debug, Clone)]
pub struct TrendPoints<'a> {
    segment: TrendSegment<'a>,
    position: usize,
    smoothed: Option<f64>,
}

impl TrendPoints<'_> {
    fn input_at(&self, position: usize) -> Option<f64> {
        let sessions = self.segment.sessions;
        let raw = sessions.get(position)?.estimated_one_rm;
        if !self.segment.params.despike || position == 0 || position + 1 >= sessions.len() {
            return Some(raw);
        }
        let neighbourhood = [
            sessions[position - 1].estimated_one_rm,
            raw,
            sessions[position + 1].estimated_one_rm,
        ];
        Some(StatisticalAnalyzer::despiked_value(&neighbourhood, 1))
    }
}

impl Iterator for TrendPoints<'_> {
    type Item = TrendPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let session = self.segment.sessions.get(self.position)?;
        let input = self.input_at(self.position)?;
        let smoothed = StatisticalAnalyzer::exponential_smoothing_step(
            self.segment.params.alpha,
            self.smoothed,
            input,
        );
        self.smoothed = Some(smoothed);
        self.position += 1;

        Some(TrendPoint {
            exercise_id: session.exercise_id.clone(),
            timestamp: session.timestamp,
            raw_one_rm: session.estimated_one_rm,
            smoothed_one_rm: smoothed,
            segment_index: self.segment.index,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.segment.sessions.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TrendPoints<'_> {}

impl FusedIterator for TrendPoints<'_> {}
