// ABOUTME: User profile model with goal, fitness level, and body metrics
// ABOUTME: Drives TDEE calculation, plan generation, and agent selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::CoachError;

/// Training goal of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    WeightLoss,
    /// Caloric balance
    Maintenance,
    /// Caloric surplus
    MuscleGain,
}

impl Goal {
    /// All goals, in state-index order
    pub const ALL: [Self; 3] = [Self::WeightLoss, Self::Maintenance, Self::MuscleGain];

    /// Position of this goal in the recommender state space
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::WeightLoss => 0,
            Self::Maintenance => 1,
            Self::MuscleGain => 2,
        }
    }

    /// Stable string form, matching the serde representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::Maintenance => "maintenance",
            Self::MuscleGain => "muscle_gain",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weight_loss" => Ok(Self::WeightLoss),
            "maintenance" => Ok(Self::Maintenance),
            "muscle_gain" => Ok(Self::MuscleGain),
            other => Err(CoachError::invalid_input(format!(
                "unknown goal '{other}' (expected weight_loss, maintenance, or muscle_gain)"
            ))),
        }
    }
}

/// Biological sex used for BMR estimation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Higher BMR offset (+5)
    Male,
    /// Lower BMR offset (-161)
    Female,
}

impl FromStr for Gender {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(CoachError::invalid_input(format!(
                "unknown gender '{other}' (expected male or female)"
            ))),
        }
    }
}

/// Self-reported training experience, keyed to an activity multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// 1-3 sessions per week
    Beginner,
    /// 3-5 sessions per week
    Intermediate,
    /// 6-7 sessions per week
    Advanced,
}

impl FitnessLevel {
    /// Activity multiplier applied to BMR when deriving TDEE
    #[must_use]
    pub fn activity_multiplier(self) -> f64 {
        match self {
            Self::Beginner => 1.375,
            Self::Intermediate => 1.55,
            Self::Advanced => 1.725,
        }
    }

    /// Parse a free-form label, falling back to `Intermediate` (1.55) when
    /// the label is unrecognized
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "beginner" => Self::Beginner,
            "advanced" => Self::Advanced,
            _ => Self::Intermediate,
        }
    }
}

/// Equipment available to the user, constrains the exercise pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingEquipment {
    /// Full gym access, nothing filtered
    Gym,
    /// Bodyweight plus dumbbells at home
    HomeDumbbells,
    /// Bodyweight only
    BodyweightOnly,
}

/// A registered user of the coaching engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable identifier
    pub id: Uuid,
    /// Display name
    pub username: String,
    /// Age in years
    pub age: u32,
    /// Biological sex for BMR estimation
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Training goal
    pub goal: Goal,
    /// Experience level (activity multiplier)
    pub fitness_level: FitnessLevel,
    /// Available training equipment
    pub equipment: TrainingEquipment,
}
