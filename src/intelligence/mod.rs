// ABOUTME: Analytics module root for statistics, forecasting, planning, and chat
// ABOUTME: Re-exports the engine entry points used by the external request layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge

//! # Intelligence Module
//!
//! Analytics engines over fitness data. Each engine is a pure, synchronous
//! function: the external request layer reads records from its store, calls
//! an engine, and serializes the result. Randomized engines take a
//! caller-supplied [`rand::Rng`] so tests can seed them.

/// Keyword-matched coaching replies
pub mod chat;
/// Synthetic performance forecasting
pub mod forecast;
/// Goal-keyed workout plan generation
pub mod planner;
/// Workout statistics and streak computation
pub mod stats;

pub use chat::{respond_to_chat, ChatReply};
pub use forecast::{generate_forecast, ForecastPoint};
pub use planner::{generate_plan, GeneratedPlan, PlanDescriptor, ScheduleEntry, TrainingGoal};
pub use stats::{compute_stats, WorkoutStats};
