// ABOUTME: Integration tests for the synthetic performance forecast
// ABOUTME: Covers horizon bounds, score ceilings, confidence decay, and seeded reproducibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge

mod common;

use chrono::Duration;
use common::{init_test_logging, reference_today};
use fitforge::constants::forecast::{CONFIDENCE_FLOOR, MAX_HORIZON_DAYS, SCORE_CEILING};
use fitforge::errors::ErrorCode;
use fitforge::intelligence::forecast::generate_forecast;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn zero_day_horizon_yields_empty_sequence() {
    init_test_logging();
    let mut rng = StdRng::seed_from_u64(11);
    let points = generate_forecast(0, reference_today(), &mut rng).unwrap();
    assert!(points.is_empty());
}

#[test]
fn five_day_horizon_yields_five_dated_points() {
    init_test_logging();
    let today = reference_today();
    let mut rng = StdRng::seed_from_u64(11);
    let points = generate_forecast(5, today, &mut rng).unwrap();

    assert_eq!(points.len(), 5);
    for (i, point) in points.iter().enumerate() {
        assert_eq!(point.date, today + Duration::days(i as i64));
    }
}

#[test]
fn confidence_decays_monotonically_and_respects_the_floor() {
    init_test_logging();
    let mut rng = StdRng::seed_from_u64(23);
    let points = generate_forecast(100, reference_today(), &mut rng).unwrap();

    for pair in points.windows(2) {
        assert!(pair[1].confidence <= pair[0].confidence);
    }
    for point in &points {
        assert!(point.confidence >= CONFIDENCE_FLOOR);
    }
    // Far enough out, the floor is reached exactly.
    assert!((points[99].confidence - CONFIDENCE_FLOOR).abs() < f64::EPSILON);
}

#[test]
fn predicted_scores_never_exceed_the_ceiling() {
    init_test_logging();
    let mut rng = StdRng::seed_from_u64(23);
    let points = generate_forecast(MAX_HORIZON_DAYS, reference_today(), &mut rng).unwrap();
    for point in &points {
        assert!(point.predicted_strength <= SCORE_CEILING);
        assert!(point.predicted_endurance <= SCORE_CEILING);
    }
}

#[test]
fn oversized_horizon_is_a_validation_error() {
    init_test_logging();
    let mut rng = StdRng::seed_from_u64(11);
    let error = generate_forecast(MAX_HORIZON_DAYS + 1, reference_today(), &mut rng).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.http_status(), 400);
}

#[test]
fn seeded_generators_reproduce_the_series() {
    init_test_logging();
    let today = reference_today();
    let mut first_rng = StdRng::seed_from_u64(5);
    let mut second_rng = StdRng::seed_from_u64(5);

    let first = generate_forecast(14, today, &mut first_rng).unwrap();
    let second = generate_forecast(14, today, &mut second_rng).unwrap();
    assert_eq!(first, second);
}
