// ABOUTME: Daily log records for workouts, meals, mood, and water intake
// ABOUTME: Plain serde structs consumed by the weekly and daily reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A completed workout session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutLog {
    /// Stable identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// When the workout happened
    pub date: DateTime<Utc>,
    /// Free-form description of the session
    pub exercise: String,
    /// Session length, when recorded
    pub duration_minutes: Option<u32>,
}

/// A logged meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealLog {
    /// Stable identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// When the meal was eaten
    pub date: DateTime<Utc>,
    /// Free-form description of the meal
    pub description: String,
    /// Energy content in kcal, when known
    pub calories: Option<f64>,
}

/// Self-reported mood, highest to lowest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Score 5
    Excellent,
    /// Score 4
    Good,
    /// Score 3
    Okay,
    /// Score 2
    Bad,
    /// Score 1
    Terrible,
}

impl Mood {
    /// Numeric score used for weekly averaging (excellent 5 .. terrible 1)
    #[must_use]
    pub fn score(self) -> u8 {
        match self {
            Self::Excellent => 5,
            Self::Good => 4,
            Self::Okay => 3,
            Self::Bad => 2,
            Self::Terrible => 1,
        }
    }
}

/// A mood check-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodLog {
    /// Stable identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// When the check-in happened
    pub date: DateTime<Utc>,
    /// Reported mood
    pub mood: Mood,
    /// Optional free-form note
    pub note: Option<String>,
}

/// A water intake entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterLog {
    /// Stable identifier
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// When the water was logged
    pub date: DateTime<Utc>,
    /// Amount in milliliters, when recorded
    pub amount_ml: Option<f64>,
}
