// ABOUTME: Synthetic performance forecast generation with decaying confidence
// ABOUTME: Projects strength and endurance scores with linear drift plus uniform noise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge

//! Synthetic performance forecasting
//!
//! Produces a finite ordered series of projected strength/endurance scores.
//! The series is synthetic: a linear drift over fixed baselines plus uniform
//! noise, with a confidence score that decays toward a floor. It is not model
//! inference, and the confidence is not a statistical confidence interval.
//!
//! Noise is drawn independently per field per day from the caller-supplied
//! RNG, so outputs are only reproducible under a seeded generator.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::forecast::{
    BASE_ENDURANCE_SCORE, BASE_STRENGTH_SCORE, CONFIDENCE_FLOOR, DAILY_CONFIDENCE_DECAY,
    DAILY_ENDURANCE_GAIN, DAILY_STRENGTH_GAIN, MAX_HORIZON_DAYS, NOISE_AMPLITUDE, SCORE_CEILING,
    STARTING_CONFIDENCE,
};
use crate::errors::{AppError, AppResult};

/// A single day of projected performance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Day the projection applies to
    pub date: NaiveDate,
    /// Projected strength score, capped at 100, rounded to 1 decimal
    pub predicted_strength: f64,
    /// Projected endurance score, capped at 100, rounded to 1 decimal
    pub predicted_endurance: f64,
    /// Synthetic confidence in [0.5, 0.95], rounded to 2 decimals
    pub confidence: f64,
}

/// Generate a `days`-long performance forecast starting at `today`.
///
/// A zero-day horizon yields an empty series.
///
/// # Errors
///
/// Returns a validation error if `days` exceeds
/// [`MAX_HORIZON_DAYS`], which bounds the allocation a single
/// request can cause.
pub fn generate_forecast<R: Rng>(
    days: u32,
    today: NaiveDate,
    rng: &mut R,
) -> AppResult<Vec<ForecastPoint>> {
    if days > MAX_HORIZON_DAYS {
        return Err(AppError::value_out_of_range(format!(
            "forecast horizon of {days} days exceeds the {MAX_HORIZON_DAYS}-day limit"
        )));
    }

    let mut points = Vec::with_capacity(days as usize);
    for i in 0..days {
        let day = f64::from(i);

        let strength = day.mul_add(DAILY_STRENGTH_GAIN, BASE_STRENGTH_SCORE)
            + rng.gen_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE);
        let endurance = day.mul_add(DAILY_ENDURANCE_GAIN, BASE_ENDURANCE_SCORE)
            + rng.gen_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE);
        let confidence = day
            .mul_add(-DAILY_CONFIDENCE_DECAY, STARTING_CONFIDENCE)
            .max(CONFIDENCE_FLOOR);

        points.push(ForecastPoint {
            date: today + Duration::days(i64::from(i)),
            predicted_strength: round_to(strength.min(SCORE_CEILING), 1),
            predicted_endurance: round_to(endurance.min(SCORE_CEILING), 1),
            confidence: round_to(confidence, 2),
        });
    }

    Ok(points)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
