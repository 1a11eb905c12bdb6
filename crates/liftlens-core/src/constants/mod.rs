// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Units, time conversions, and engine defaults used when no override is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain. Every threshold here is a default only; the
//! engine reads the values it uses from its configuration object.

/// Weight units
pub mod units {
    /// Internal canonical unit label
    pub const KILOGRAM: &str = "kg";
    /// Pounds label
    pub const POUND: &str = "lb";
    /// Kilograms per pound (exact, international avoirdupois pound)
    pub const KG_PER_LB: f64 = 0.453_592_37;
}

/// Time conversions
pub mod time {
    /// Days in a week
    pub const DAYS_PER_WEEK: f64 = 7.0;
    /// Average weeks per month (52 / 12)
    pub const WEEKS_PER_MONTH: f64 = 52.0 / 12.0;
    /// Average days per month (365.25 / 12)
    pub const DAYS_PER_MONTH: f64 = 365.25 / 12.0;
    /// Seconds in a day
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}

/// Set validation defaults
pub mod normalizer {
    /// Lowest accepted reps-in-reserve
    pub const DEFAULT_RIR_MIN: u8 = 0;
    /// Highest accepted reps-in-reserve
    pub const DEFAULT_RIR_MAX: u8 = 5;
    /// RIR assumed for sets logged without one (taken to failure)
    pub const DEFAULT_MISSING_RIR: u8 = 0;
}

/// Trend extraction defaults
pub mod trend {
    /// Sessions for a single session's EWMA weight to halve
    pub const DEFAULT_HALF_LIFE_SESSIONS: f64 = 3.0;
    /// Longest gap (days) bridged inside one trend segment
    pub const DEFAULT_MAX_GAP_DAYS: i64 = 14;
}

/// Plateau detection defaults
pub mod plateau {
    /// Sessions per sliding window
    pub const DEFAULT_WINDOW_SIZE: usize = 4;
    /// Fewest points for a forced classification
    pub const DEFAULT_MIN_SAMPLES: usize = 4;
    /// Relative weekly slope above which a window is progressing (0.5 %/week)
    pub const DEFAULT_THRESHOLD_PROGRESS: f64 = 0.005;
    /// Relative weekly slope below whose negative a window is regressing (0.5 %/week)
    pub const DEFAULT_THRESHOLD_REGRESS: f64 = 0.005;
    /// Points at which sample-count confidence saturates
    pub const DEFAULT_FULL_CONFIDENCE_SAMPLES: usize = 8;
    /// Residual coefficient of variation that cuts fit confidence to 1/e
    pub const DEFAULT_NOISE_TOLERANCE: f64 = 0.02;
}

/// Expected weekly 1RM growth per tier, as a fraction of current 1RM
pub mod growth {
    /// Beginner range
    pub const BEGINNER_WEEKLY: (f64, f64) = (0.010, 0.025);
    /// Intermediate range
    pub const INTERMEDIATE_WEEKLY: (f64, f64) = (0.0025, 0.010);
    /// Advanced range
    pub const ADVANCED_WEEKLY: (f64, f64) = (0.0, 0.0025);
    /// Projection horizon in weeks
    pub const DEFAULT_PROJECTION_WEEKS: u32 = 4;
}

/// Skill tier breakpoints
pub mod skill {
    /// 1RM / bodyweight ratio at which a lifter counts as intermediate
    pub const INTERMEDIATE_STRENGTH_RATIO: f64 = 1.0;
    /// 1RM / bodyweight ratio at which a lifter counts as advanced
    pub const ADVANCED_STRENGTH_RATIO: f64 = 1.5;
    /// Training age (months) at which a lifter counts as intermediate
    pub const INTERMEDIATE_TRAINING_MONTHS: f64 = 6.0;
    /// Training age (months) at which a lifter counts as advanced
    pub const ADVANCED_TRAINING_MONTHS: f64 = 24.0;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Engine service name
    pub const LIFTLENS: &str = "liftlens";
}
