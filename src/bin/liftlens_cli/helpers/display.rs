// ABOUTME: Output formatting helpers for liftlens-cli
// ABOUTME: Renders exercise analytics, training summaries and rejected sets as plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlens::ExerciseAnalytics;
use liftlens_core::constants::time::WEEKS_PER_MONTH;
use liftlens_intelligence::{RejectedRecord, TrainingSummary};

/// Print the analytics report for one exercise
pub fn print_analytics(name: &str, analytics: &ExerciseAnalytics) {
    println!("\n{name} ({})", analytics.exercise_id);
    println!("{}", "=".repeat(60));
    println!("   Sessions: {}", analytics.aggregates.len());
    println!("   Total tonnage: {:.1} kg", analytics.total_tonnage);
    if let Some(best) = analytics.best_one_rm {
        println!("   Best estimated 1RM: {best:.1} kg");
    }
    if let Some(latest) = analytics.latest_one_rm {
        println!("   Current trend 1RM: {latest:.1} kg");
    }
    if analytics.stale {
        println!("   Note: no session within the maximum gap; the trend may be out of date");
    }

    if !analytics.plateaus.is_empty() {
        println!("\nTREND SEGMENTS:");
        for segment in &analytics.plateaus {
            let slope = segment
                .relative_slope
                .map_or_else(|| "n/a".to_owned(), |rate| format!("{:+.2}%/wk", rate * 100.0));
            println!(
                "   {} .. {}  {:<17} {:>11}  confidence {:.2} ({:?})",
                segment.start.format("%Y-%m-%d"),
                segment.end.format("%Y-%m-%d"),
                segment.classification.as_str(),
                slope,
                segment.confidence,
                segment.confidence_level,
            );
        }
    }

    let verdict = &analytics.verdict;
    let (monthly_low, monthly_high) = verdict.expected_range.monthly();
    println!("\nGROWTH VERDICT:");
    println!("   Tier: {}", verdict.tier);
    println!(
        "   Expected: {:.2}% - {:.2}% per week ({:.1}% - {:.1}% per month)",
        verdict.expected_range.low * 100.0,
        verdict.expected_range.high * 100.0,
        monthly_low * 100.0,
        monthly_high * 100.0,
    );
    if let Some(observed) = verdict.observed_slope {
        println!(
            "   Observed: {:.2}% per week ({:.1}% per month)",
            observed * 100.0,
            observed * WEEKS_PER_MONTH * 100.0
        );
    }
    println!("   Verdict: {}", verdict.verdict);
    if let Some(projection) = verdict.projection {
        println!(
            "   In {} weeks: expected {:.1} - {:.1} kg, current pace {:.1} kg",
            projection.horizon_weeks,
            projection.expected_low,
            projection.expected_high,
            projection.observed
        );
    }
    println!("   {}", verdict.note);
}

/// Print the training summary
pub fn print_summary(summary: &TrainingSummary) {
    println!("\nTRAINING SUMMARY");
    println!("{}", "=".repeat(60));
    println!("   Sessions: {}", summary.total_sessions);
    println!("   Exercises: {}", summary.unique_exercises);
    println!("   Sets: {}", summary.total_sets);
    println!("   Total tonnage: {:.1} kg", summary.total_tonnage);

    for group in &summary.muscle_groups {
        println!("\n{}", group.muscle_group.to_uppercase());
        println!(
            "   {} sets, {:.1} kg moved, best 1RM {:.1} kg ({})",
            group.set_count, group.tonnage, group.best_one_rm, group.best_exercise
        );
        for week in &group.weekly_tonnage {
            println!(
                "   {}-W{:02}: {:.1} kg",
                week.iso_year, week.iso_week, week.tonnage
            );
        }
    }
}

/// Print sets that failed validation, if any
pub fn print_rejected(rejected: &[RejectedRecord]) {
    if rejected.is_empty() {
        return;
    }
    println!("\nSKIPPED {} INVALID SETS:", rejected.len());
    for record in rejected {
        println!("   set #{}: {}", record.index + 1, record.error);
    }
}
