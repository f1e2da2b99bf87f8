// ABOUTME: Workout statistics computation over logged sessions
// ABOUTME: Derives totals, averages, activity windows, and the consecutive-day streak
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge

//! Workout statistics and streak computation
//!
//! Derives aggregate statistics from an unordered slice of session records
//! and a reference "today" date. Nothing here persists or mutates; an empty
//! slice yields all-zero statistics rather than an error.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::stats::{MONTHLY_WINDOW_DAYS, WEEKLY_WINDOW_DAYS};
use crate::models::WorkoutSession;

/// Aggregated workout statistics for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutStats {
    /// Total number of logged sessions
    pub total_workouts: u64,
    /// Total time spent working out (minutes)
    pub total_duration: u64,
    /// Total calories burned across all sessions
    pub total_calories: u64,
    /// Mean session duration in minutes, rounded to 1 decimal
    pub avg_workout_duration: f64,
    /// Sessions dated within the last 7 days (inclusive)
    pub workouts_this_week: u64,
    /// Sessions dated within the last 30 days (inclusive)
    pub workouts_this_month: u64,
    /// Consecutive workout days ending at (or just before) today
    pub streak_days: u32,
}

/// Compute aggregate statistics over `sessions` as of `today`.
#[must_use]
pub fn compute_stats(sessions: &[WorkoutSession], today: NaiveDate) -> WorkoutStats {
    let total_workouts = sessions.len() as u64;
    let total_duration: u64 = sessions
        .iter()
        .map(|s| u64::from(s.duration_minutes))
        .sum();
    let total_calories: u64 = sessions.iter().map(|s| u64::from(s.calories_burned)).sum();

    let avg_workout_duration = if sessions.is_empty() {
        0.0
    } else {
        round_to_tenth(total_duration as f64 / sessions.len() as f64)
    };

    let week_ago = today - Duration::days(WEEKLY_WINDOW_DAYS);
    let month_ago = today - Duration::days(MONTHLY_WINDOW_DAYS);
    let workouts_this_week = sessions.iter().filter(|s| s.date >= week_ago).count() as u64;
    let workouts_this_month = sessions.iter().filter(|s| s.date >= month_ago).count() as u64;

    WorkoutStats {
        total_workouts,
        total_duration,
        total_calories,
        avg_workout_duration,
        workouts_this_week,
        workouts_this_month,
        streak_days: calculate_streak(sessions, today),
    }
}

/// Count consecutive workout days walking backward from `today`.
///
/// Today itself may be absent without breaking the count (a workout due
/// today may simply not be logged yet), but once the counter is positive any
/// earlier gap terminates the walk. Input size is small, so this is a plain
/// backward walk with early termination.
fn calculate_streak(sessions: &[WorkoutSession], today: NaiveDate) -> u32 {
    if sessions.is_empty() {
        return 0;
    }

    let dates: HashSet<NaiveDate> = sessions.iter().map(|s| s.date).collect();
    let mut streak = 0u32;
    let mut current = today;

    while dates.contains(&current) || current == today {
        if dates.contains(&current) {
            streak += 1;
        }
        current = current - Duration::days(1);
        if streak > 0 && !dates.contains(&current) {
            break;
        }
    }

    streak
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
