// ABOUTME: Shared test utilities and builders for integration tests
// ABOUTME: Provides quiet logging setup and workout session fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge

#![allow(dead_code)]

//! Shared test utilities for `fitforge` integration tests

use chrono::{Duration, NaiveDate};
use fitforge::models::WorkoutSession;
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed reference date so streak fixtures are stable
pub fn reference_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

/// A session `offset` days before `today`
pub fn session_days_ago(today: NaiveDate, offset: i64) -> WorkoutSession {
    session_on(today - Duration::days(offset), 45, 350)
}

/// A session on an explicit date with explicit duration and calories
pub fn session_on(date: NaiveDate, duration_minutes: u32, calories_burned: u32) -> WorkoutSession {
    WorkoutSession::new(
        Uuid::new_v4(),
        "Evening session",
        date,
        duration_minutes,
        calories_burned,
    )
}
