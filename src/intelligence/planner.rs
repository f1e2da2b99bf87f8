// ABOUTME: Workout plan generation from fitness level, training goal, and weekly frequency
// ABOUTME: Maps categorical inputs to fixed templates, weekday splits, and workout rotations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge

//! Goal-keyed workout plan generation
//!
//! A plan is a fixed template looked up by training goal plus a weekly
//! schedule built from a weekday split and a goal-keyed workout rotation.
//! There is no personalization beyond the category lookups; the only
//! randomness is the per-day session duration.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::constants::plan::{GENERATED_PLAN_WEEKS, MAX_SESSION_MINUTES, MIN_SESSION_MINUTES};
use crate::models::{FitnessLevel, PlanDifficulty};

/// Training goal driving template and rotation selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingGoal {
    /// Reduce body weight
    WeightLoss,
    /// Build muscle mass
    MuscleGain,
    /// Balanced overall fitness
    GeneralFitness,
    /// Build cardiovascular capacity
    Endurance,
}

impl Default for TrainingGoal {
    fn default() -> Self {
        Self::GeneralFitness
    }
}

impl TrainingGoal {
    /// Parse a goal from request input, falling back to the default on
    /// unrecognized values instead of erroring.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "weight_loss" => Self::WeightLoss,
            "muscle_gain" => Self::MuscleGain,
            "general_fitness" => Self::GeneralFitness,
            "endurance" => Self::Endurance,
            other => {
                tracing::debug!(value = other, "unrecognized training goal, using default");
                Self::default()
            }
        }
    }
}

impl Display for TrainingGoal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::GeneralFitness => "general_fitness",
            Self::Endurance => "endurance",
        };
        write!(f, "{name}")
    }
}

/// Descriptor of a generated plan, ready for the external layer to persist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDescriptor {
    /// Template plan name
    pub name: String,
    /// Template plan description
    pub description: String,
    /// Difficulty derived from the user's fitness level
    pub difficulty: PlanDifficulty,
    /// Plan duration in weeks
    pub duration_weeks: u32,
    /// Marks the plan as generator output rather than user-authored
    pub is_generated: bool,
}

/// One scheduled training day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Weekday name
    pub day: String,
    /// Workout label for that day
    pub workout: String,
    /// Planned session length in minutes
    pub duration_minutes: u32,
}

/// A generated plan plus its weekly schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    /// Plan descriptor
    pub plan: PlanDescriptor,
    /// Ordered weekly schedule
    pub schedule: Vec<ScheduleEntry>,
}

/// Generate a plan for the given level, goal, and weekly frequency.
///
/// Weekly frequencies outside {3, 4, 5, 6} fall back to the three-day split.
/// Per-day durations are drawn uniformly from [30, 60] minutes.
#[must_use]
pub fn generate_plan<R: Rng>(
    fitness_level: FitnessLevel,
    goal: TrainingGoal,
    days_per_week: u8,
    rng: &mut R,
) -> GeneratedPlan {
    let (name, description) = plan_template(goal);
    let plan = PlanDescriptor {
        name: name.to_owned(),
        description: description.to_owned(),
        difficulty: difficulty_for(fitness_level),
        duration_weeks: GENERATED_PLAN_WEEKS,
        is_generated: true,
    };

    let rotation = workout_rotation(goal);
    let schedule = weekday_split(days_per_week)
        .iter()
        .enumerate()
        .map(|(i, day)| ScheduleEntry {
            day: (*day).to_owned(),
            workout: rotation[i % rotation.len()].to_owned(),
            duration_minutes: rng.gen_range(MIN_SESSION_MINUTES..=MAX_SESSION_MINUTES),
        })
        .collect();

    GeneratedPlan { plan, schedule }
}

/// Fixed template {name, description} keyed by goal
fn plan_template(goal: TrainingGoal) -> (&'static str, &'static str) {
    match goal {
        TrainingGoal::WeightLoss => (
            "Fat Burn Challenge",
            "High-intensity cardio and strength training for maximum calorie burn",
        ),
        TrainingGoal::MuscleGain => (
            "Muscle Builder Pro",
            "Progressive overload program focusing on compound movements",
        ),
        TrainingGoal::GeneralFitness => (
            "Total Body Transformation",
            "Balanced program combining strength, cardio, and flexibility",
        ),
        TrainingGoal::Endurance => (
            "Endurance Elite",
            "Build stamina and cardiovascular capacity",
        ),
    }
}

/// Workout labels cycled through the schedule by index
fn workout_rotation(goal: TrainingGoal) -> &'static [&'static str] {
    match goal {
        TrainingGoal::WeightLoss => &["HIIT Cardio", "Full Body Strength", "Cardio & Core"],
        TrainingGoal::MuscleGain => &[
            "Push Day",
            "Pull Day",
            "Leg Day",
            "Upper Body",
            "Lower Body",
        ],
        TrainingGoal::GeneralFitness => &["Upper Body", "Lower Body", "Cardio", "Full Body"],
        TrainingGoal::Endurance => &[
            "Long Run",
            "Interval Training",
            "Cross Training",
            "Recovery Run",
        ],
    }
}

/// Weekday split keyed by training days per week
fn weekday_split(days_per_week: u8) -> &'static [&'static str] {
    match days_per_week {
        4 => &["Monday", "Tuesday", "Thursday", "Friday"],
        5 => &["Monday", "Tuesday", "Wednesday", "Friday", "Saturday"],
        6 => &[
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday",
        ],
        3 => &["Monday", "Wednesday", "Friday"],
        other => {
            tracing::debug!(
                days_per_week = other,
                "unsupported weekly frequency, using three-day split"
            );
            &["Monday", "Wednesday", "Friday"]
        }
    }
}

fn difficulty_for(fitness_level: FitnessLevel) -> PlanDifficulty {
    match fitness_level {
        FitnessLevel::Beginner => PlanDifficulty::Easy,
        FitnessLevel::Intermediate => PlanDifficulty::Medium,
        FitnessLevel::Advanced => PlanDifficulty::Hard,
    }
}
