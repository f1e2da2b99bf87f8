// ABOUTME: Application constants and tunable product values grouped by concern
// ABOUTME: Holds forecast baselines, statistics windows, and plan generation bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge

//! Product constants used by the analytics engines
//!
//! These are product-tuning values, not physiological facts; they are grouped
//! here so the engines stay free of magic numbers and the external layer can
//! surface the same limits in its documentation.

/// Constants for the synthetic performance forecast
pub mod forecast {
    /// Baseline strength score the projection starts from
    pub const BASE_STRENGTH_SCORE: f64 = 75.0;

    /// Baseline endurance score the projection starts from
    pub const BASE_ENDURANCE_SCORE: f64 = 70.0;

    /// Strength score gained per projected day
    pub const DAILY_STRENGTH_GAIN: f64 = 0.3;

    /// Endurance score gained per projected day
    pub const DAILY_ENDURANCE_GAIN: f64 = 0.25;

    /// Uniform noise amplitude applied independently to each score each day
    pub const NOISE_AMPLITUDE: f64 = 2.0;

    /// Confidence assigned to the first projected day
    pub const STARTING_CONFIDENCE: f64 = 0.95;

    /// Confidence lost per projected day
    pub const DAILY_CONFIDENCE_DECAY: f64 = 0.01;

    /// Confidence never decays below this floor
    pub const CONFIDENCE_FLOOR: f64 = 0.5;

    /// Scores are capped at this ceiling
    pub const SCORE_CEILING: f64 = 100.0;

    /// Longest forecast horizon a caller may request, in days
    pub const MAX_HORIZON_DAYS: u32 = 365;
}

/// Constants for workout statistics
pub mod stats {
    /// Window for the weekly workout count, in days
    pub const WEEKLY_WINDOW_DAYS: i64 = 7;

    /// Window for the monthly workout count, in days
    pub const MONTHLY_WINDOW_DAYS: i64 = 30;
}

/// Constants for generated workout plans
pub mod plan {
    /// Duration assigned to every generated plan, in weeks
    pub const GENERATED_PLAN_WEEKS: u32 = 4;

    /// Shortest scheduled session, in minutes
    pub const MIN_SESSION_MINUTES: u32 = 30;

    /// Longest scheduled session, in minutes
    pub const MAX_SESSION_MINUTES: u32 = 60;
}
