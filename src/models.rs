// ABOUTME: Core data models for the FitForge analytics core
// ABOUTME: Defines profiles, exercises, sessions, metrics, goals and their enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge

//! # Data Models
//!
//! Data structures shared between the analytics core and the external request
//! layer. The external layer owns persistence; this crate only reads these
//! records and computes derived, non-persisted views from them.
//!
//! ## Design Principles
//!
//! - **Storage agnostic**: no ORM or schema concerns leak into the types
//! - **Serializable**: all models support JSON serialization for the
//!   response layer
//! - **Type safe**: categorical fields are enums, not free strings; lenient
//!   parsing happens once at the boundary

use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Self-reported experience level of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// New to structured training
    Beginner,
    /// Trains regularly with some technique base
    Intermediate,
    /// Years of consistent training
    Advanced,
}

impl Default for FitnessLevel {
    fn default() -> Self {
        Self::Intermediate
    }
}

impl FitnessLevel {
    /// Parse a level from request input, falling back to the default on
    /// unrecognized values instead of erroring.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "beginner" => Self::Beginner,
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            other => {
                tracing::debug!(value = other, "unrecognized fitness level, using default");
                Self::default()
            }
        }
    }
}

impl Display for FitnessLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        };
        write!(f, "{name}")
    }
}

/// Primary muscle group targeted by an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Chest
    Chest,
    /// Back
    Back,
    /// Shoulders
    Shoulders,
    /// Biceps
    Biceps,
    /// Triceps
    Triceps,
    /// Legs
    Legs,
    /// Core
    Core,
    /// Cardiovascular work rather than a muscle group
    Cardio,
    /// Compound full-body movements
    FullBody,
}

/// Difficulty rating of a workout plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanDifficulty {
    /// Suitable for beginners
    Easy,
    /// Standard training load
    Medium,
    /// Demanding volume and intensity
    Hard,
}

/// Extended user profile with fitness data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique profile identifier
    pub id: Uuid,
    /// Display name shown in the client
    pub display_name: String,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Age in years
    pub age: Option<u32>,
    /// Self-reported experience level
    pub fitness_level: FitnessLevel,
    /// Free-text description of what the user wants to achieve
    pub fitness_goals: String,
    /// When the profile was created
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated
    pub updated_at: DateTime<Utc>,
}

/// Exercise catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique exercise identifier
    pub id: Uuid,
    /// Exercise name
    pub name: String,
    /// How to perform the exercise
    pub description: String,
    /// Primary muscle group targeted
    pub muscle_group: MuscleGroup,
    /// Equipment required, empty for bodyweight movements
    pub equipment_needed: String,
    /// Recommended experience level
    pub difficulty: FitnessLevel,
    /// Estimated calories burned per minute
    pub calories_per_minute: f64,
    /// When the entry was created
    pub created_at: DateTime<Utc>,
}

/// A workout plan, either user-authored or produced by the plan generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Unique plan identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Plan name
    pub name: String,
    /// Plan description
    pub description: String,
    /// Whether the plan came from the generator rather than the user
    pub is_generated: bool,
    /// Difficulty rating
    pub difficulty: PlanDifficulty,
    /// Planned duration in weeks
    pub duration_weeks: u32,
    /// When the plan was created
    pub created_at: DateTime<Utc>,
    /// When the plan was last updated
    pub updated_at: DateTime<Utc>,
}

/// A single logged workout session
///
/// One record per logged session. Dates need not be unique or contiguous;
/// the statistics engine deduplicates dates itself where that matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Unique session identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Plan this session belongs to, if any
    pub plan_id: Option<Uuid>,
    /// Session name
    pub name: String,
    /// Calendar day the session was performed
    pub date: NaiveDate,
    /// Wall-clock start time, when recorded
    pub start_time: Option<NaiveTime>,
    /// Wall-clock end time, when recorded
    pub end_time: Option<NaiveTime>,
    /// Total duration in minutes
    pub duration_minutes: u32,
    /// Total calories burned
    pub calories_burned: u32,
    /// Free-text notes
    pub notes: String,
    /// Mood before the session on a 1-5 scale
    pub mood_before: Option<u8>,
    /// Mood after the session on a 1-5 scale
    pub mood_after: Option<u8>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl WorkoutSession {
    /// Create a session with the required fields; optional fields start empty.
    #[must_use]
    pub fn new(
        user_id: Uuid,
        name: impl Into<String>,
        date: NaiveDate,
        duration_minutes: u32,
        calories_burned: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            plan_id: None,
            name: name.into(),
            date,
            start_time: None,
            end_time: None,
            duration_minutes,
            calories_burned,
            notes: String::new(),
            mood_before: None,
            mood_after: None,
            created_at: Utc::now(),
        }
    }
}

/// An individual exercise entry within a workout session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseLog {
    /// Unique log identifier
    pub id: Uuid,
    /// Session this entry belongs to
    pub session_id: Uuid,
    /// Exercise performed
    pub exercise_id: Uuid,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set, when applicable
    pub reps: Option<u32>,
    /// Load in kilograms, when applicable
    pub weight_kg: Option<f64>,
    /// Duration in seconds for timed work
    pub duration_seconds: Option<u32>,
    /// Distance in meters for distance work
    pub distance_meters: Option<f64>,
    /// Free-text notes
    pub notes: String,
    /// Ordering position within the session
    pub position: u32,
}

/// Kind of performance score tracked over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    /// Strength score
    Strength,
    /// Endurance score
    Endurance,
    /// Consistency score
    Consistency,
    /// Total training volume
    Volume,
    /// Calories burned
    Calories,
}

impl Display for MetricType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Strength => "strength",
            Self::Endurance => "endurance",
            Self::Consistency => "consistency",
            Self::Volume => "volume",
            Self::Calories => "calories",
        };
        write!(f, "{name}")
    }
}

/// A dated performance score for one user
///
/// The external store guarantees the (user, date, metric type) triple is
/// unique; this crate relies on that invariant rather than re-checking it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetric {
    /// Unique metric identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Day the score applies to
    pub date: NaiveDate,
    /// Kind of score
    pub metric_type: MetricType,
    /// Score value
    pub value: f64,
    /// When the record was created
    pub created_at: DateTime<Utc>,
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// The end user
    User,
    /// The canned responder
    Assistant,
}

/// A stored chat exchange entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Message author
    pub role: MessageRole,
    /// Message text
    pub content: String,
    /// When the message was created
    pub created_at: DateTime<Utc>,
}

/// A user fitness goal with measurable progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique goal identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Goal title
    pub title: String,
    /// Goal description
    pub description: String,
    /// Target value to reach, if the goal is quantified
    pub target_value: Option<f64>,
    /// Current progress value
    pub current_value: f64,
    /// Unit the values are measured in
    pub unit: String,
    /// Deadline, if any
    pub deadline: Option<NaiveDate>,
    /// Whether the user marked the goal complete
    pub is_completed: bool,
    /// When the goal was created
    pub created_at: DateTime<Utc>,
    /// When the goal was last updated
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Progress toward the target as a percentage, clamped to [0, 100].
    ///
    /// Goals without a positive target have no meaningful ratio and report 0.
    #[must_use]
    pub fn progress_percentage(&self) -> f64 {
        match self.target_value {
            Some(target) if target > 0.0 => {
                ((self.current_value / target) * 100.0).clamp(0.0, 100.0)
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal_with(target_value: Option<f64>, current_value: f64) -> Goal {
        Goal {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Bench 100kg".into(),
            description: String::new(),
            target_value,
            current_value,
            unit: "kg".into(),
            deadline: None,
            is_completed: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_goal_progress_halfway() {
        let goal = goal_with(Some(50.0), 25.0);
        assert!((goal.progress_percentage() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_goal_progress_without_target() {
        assert!(goal_with(None, 25.0).progress_percentage().abs() < f64::EPSILON);
        assert!(goal_with(Some(0.0), 25.0).progress_percentage().abs() < f64::EPSILON);
    }

    #[test]
    fn test_goal_progress_is_clamped() {
        assert!((goal_with(Some(50.0), 80.0).progress_percentage() - 100.0).abs() < f64::EPSILON);
        assert!(goal_with(Some(50.0), -10.0).progress_percentage().abs() < f64::EPSILON);
    }

    #[test]
    fn test_fitness_level_lenient_parse() {
        assert_eq!(
            FitnessLevel::parse_or_default("advanced"),
            FitnessLevel::Advanced
        );
        assert_eq!(
            FitnessLevel::parse_or_default(" Beginner "),
            FitnessLevel::Beginner
        );
        assert_eq!(
            FitnessLevel::parse_or_default("superhuman"),
            FitnessLevel::Intermediate
        );
    }

    #[test]
    fn test_metric_type_serializes_snake_case() {
        let json = serde_json::to_string(&MetricType::Strength).unwrap();
        assert_eq!(json, "\"strength\"");
    }
}
