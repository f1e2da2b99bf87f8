// ABOUTME: Main library entry point for the FitForge fitness analytics core
// ABOUTME: Exposes workout statistics, forecasting, plan generation, and chat reply modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge

#![deny(unsafe_code)]

//! # FitForge
//!
//! Analytics core for a fitness-tracking backend. An external request layer
//! owns persistence, authentication, and routing; this crate owns the derived
//! views it serves:
//!
//! - **Statistics**: totals, averages, activity windows, and workout streaks
//!   computed over logged sessions
//! - **Forecasting**: synthetic strength/endurance projections with decaying
//!   confidence
//! - **Plan generation**: goal-keyed training plans with weekly schedules
//! - **Chat replies**: keyword-matched coaching responses
//!
//! All four engines are pure, synchronous functions over their inputs. The
//! only injected effect is randomness, supplied by the caller as a
//! [`rand::Rng`] so tests can seed it.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fitforge::intelligence::stats::compute_stats;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//! let stats = compute_stats(&[], today);
//! assert_eq!(stats.total_workouts, 0);
//! assert_eq!(stats.streak_days, 0);
//! ```

/// Application constants and tunable product values
pub mod constants;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Analytics engines: statistics, forecasting, plan generation, and chat
pub mod intelligence;

/// Logging configuration and structured subscriber setup
pub mod logging;

/// Core data models shared with the external request layer
pub mod models;
