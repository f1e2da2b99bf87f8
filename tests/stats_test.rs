// ABOUTME: Integration tests for workout statistics and streak computation
// ABOUTME: Covers totals, averages, activity windows, and streak edge cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge

mod common;

use common::{init_test_logging, reference_today, session_days_ago, session_on};
use fitforge::intelligence::stats::compute_stats;

#[test]
fn totals_match_the_session_set() {
    init_test_logging();
    let today = reference_today();
    let sessions = vec![
        session_on(today, 30, 250),
        session_on(today, 60, 500),
        session_on(today, 45, 300),
    ];

    let stats = compute_stats(&sessions, today);
    assert_eq!(stats.total_workouts, 3);
    assert_eq!(stats.total_duration, 135);
    assert_eq!(stats.total_calories, 1050);
    assert!((stats.avg_workout_duration - 45.0).abs() < f64::EPSILON);
}

#[test]
fn empty_session_set_yields_all_zero_fields() {
    init_test_logging();
    let stats = compute_stats(&[], reference_today());
    assert_eq!(stats.total_workouts, 0);
    assert_eq!(stats.total_duration, 0);
    assert_eq!(stats.total_calories, 0);
    assert!(stats.avg_workout_duration.abs() < f64::EPSILON);
    assert_eq!(stats.workouts_this_week, 0);
    assert_eq!(stats.workouts_this_month, 0);
    assert_eq!(stats.streak_days, 0);
}

#[test]
fn streak_counts_three_consecutive_days_ending_today() {
    init_test_logging();
    let today = reference_today();
    let sessions = vec![
        session_days_ago(today, 0),
        session_days_ago(today, 1),
        session_days_ago(today, 2),
    ];
    assert_eq!(compute_stats(&sessions, today).streak_days, 3);
}

#[test]
fn streak_survives_an_unlogged_today() {
    init_test_logging();
    let today = reference_today();
    let sessions = vec![session_days_ago(today, 1)];
    assert_eq!(compute_stats(&sessions, today).streak_days, 1);
}

#[test]
fn streak_breaks_at_the_first_earlier_gap() {
    init_test_logging();
    let today = reference_today();
    // Yesterday counts; the gap two days ago hides the session three days ago.
    let sessions = vec![session_days_ago(today, 1), session_days_ago(today, 3)];
    assert_eq!(compute_stats(&sessions, today).streak_days, 1);
}

#[test]
fn weekly_and_monthly_windows_count_inclusively() {
    init_test_logging();
    let today = reference_today();
    let sessions = vec![
        session_days_ago(today, 0),
        session_days_ago(today, 7),
        session_days_ago(today, 8),
        session_days_ago(today, 30),
        session_days_ago(today, 31),
    ];

    let stats = compute_stats(&sessions, today);
    assert_eq!(stats.workouts_this_week, 2);
    assert_eq!(stats.workouts_this_month, 4);
    assert_eq!(stats.total_workouts, 5);
}

#[test]
fn average_duration_rounds_to_one_decimal() {
    init_test_logging();
    let today = reference_today();
    let sessions = vec![
        session_on(today, 40, 0),
        session_on(today, 45, 0),
        session_on(today, 55, 0),
    ];
    // 140 / 3 = 46.666... -> 46.7
    let stats = compute_stats(&sessions, today);
    assert!((stats.avg_workout_duration - 46.7).abs() < f64::EPSILON);
}
