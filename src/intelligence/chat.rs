// ABOUTME: Keyword-matched coaching replies drawn from fixed response pools
// ABOUTME: Scans an ordered keyword table and picks a canned reply at random
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitForge

//! Keyword-matched coaching replies
//!
//! A rule table, not a model: the message is lower-cased, the keyword table
//! is scanned in declaration order, and the first key found as a substring
//! selects its reply pool. Each call is independent; no conversation state is
//! carried between calls.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Reply pools keyed by keyword.
///
/// Scanned in declaration order with a first-match policy, so overlapping
/// keywords resolve to the earliest entry. Reordering this table is a
/// user-visible behavior change.
pub const KEYWORD_REPLIES: &[(&str, &[&str])] = &[
    (
        "workout",
        &[
            "Based on your fitness level, I recommend starting with a full-body workout 3 times per week. Focus on compound movements like squats, deadlifts, and bench press for maximum efficiency.",
            "Great question! For optimal results, try alternating between strength training and cardio. I suggest a push/pull/legs split if you can commit to 4-5 days per week.",
            "Let me create a personalized workout plan for you. Would you prefer to focus on strength, endurance, or a balanced approach?",
        ],
    ),
    (
        "diet",
        &[
            "Nutrition is crucial for your fitness goals! Aim for 1.6-2.2g of protein per kg of body weight if you're building muscle. Don't forget to stay hydrated!",
            "For sustainable results, focus on whole foods: lean proteins, complex carbs, healthy fats, and plenty of vegetables. Would you like a sample meal plan?",
            "Pre-workout, try eating complex carbs 2-3 hours before. Post-workout, aim for protein within 30-60 minutes to optimize recovery.",
        ],
    ),
    (
        "rest",
        &[
            "Recovery is just as important as training! Aim for 7-9 hours of sleep and include at least 1-2 rest days per week.",
            "Active recovery like light walking, stretching, or yoga can help reduce muscle soreness. Don't underestimate the power of rest!",
            "Signs you need more rest: persistent fatigue, decreased performance, or mood changes. Listen to your body!",
        ],
    ),
    (
        "motivation",
        &[
            "Remember, consistency beats perfection! Even a 15-minute workout is better than none. You've got this!",
            "Set small, achievable goals and celebrate each milestone. Progress is progress, no matter how small!",
            "Track your progress with photos and measurements, not just the scale. Your body is changing even when the numbers don't show it!",
        ],
    ),
    (
        "weight",
        &[
            "For healthy weight loss, aim for 0.5-1kg per week through a moderate calorie deficit. Crash diets don't work long-term!",
            "Building muscle can actually help with weight management as muscle burns more calories at rest. Consider adding resistance training!",
            "Focus on body composition rather than just weight. You might be gaining muscle while losing fat!",
        ],
    ),
    (
        "muscle",
        &[
            "For muscle growth, progressive overload is key. Gradually increase weight, reps, or sets over time.",
            "The muscle-building sweet spot is typically 8-12 reps per set with weights that challenge you by the last few reps.",
            "Don't forget about the mind-muscle connection! Focus on the muscle you're working for better activation and results.",
        ],
    ),
];

/// Fallback replies used when no keyword matches.
pub const DEFAULT_REPLIES: &[&str] = &[
    "I'm here to help with your fitness journey! You can ask me about workouts, nutrition, recovery, or motivation. What would you like to know?",
    "That's a great question! To give you the best advice, could you tell me more about your current fitness level and goals?",
    "I'd love to help you achieve your fitness goals! What specific area would you like to focus on - strength, cardio, flexibility, or nutrition?",
];

/// A coaching reply to one user message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// The message the user sent
    pub message: String,
    /// The selected canned reply
    pub reply: String,
    /// When the reply was produced
    pub timestamp: DateTime<Utc>,
}

/// Produce a coaching reply for a free-text message.
///
/// # Errors
///
/// Returns a validation error when the message is empty or all whitespace.
pub fn respond_to_chat<R: Rng>(message: &str, rng: &mut R) -> AppResult<ChatReply> {
    if message.trim().is_empty() {
        return Err(AppError::missing_required_field("message"));
    }

    Ok(ChatReply {
        message: message.to_owned(),
        reply: select_reply(message, rng).to_owned(),
        timestamp: Utc::now(),
    })
}

/// Pick a reply pool by first keyword match, then a pool entry at random.
fn select_reply<R: Rng>(message: &str, rng: &mut R) -> &'static str {
    let lowered = message.to_lowercase();
    let pool = KEYWORD_REPLIES
        .iter()
        .find(|(keyword, _)| lowered.contains(*keyword))
        .map_or(DEFAULT_REPLIES, |(_, replies)| *replies);
    pool[rng.gen_range(0..pool.len())]
}
