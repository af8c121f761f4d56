// ABOUTME: RL core for the meal recommender: state space, actions, and Q-table
// ABOUTME: Environment, agent, training driver, and persistence live in submodules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

//! # Meal Recommender RL Core
//!
//! Tabular Q-learning over a small, fixed state space. The state is a tuple
//! of four discrete dimensions (day-of-week, goal, caloric status, emotion
//! bucket); the action is one of three meal-calorie tiers. The state space
//! and the Q-table shape are co-designed and must never drift apart: every
//! state the environment produces is a valid index into the table.

/// Q-learning agent with epsilon-greedy action selection
pub mod agent;
/// Simulated daily meal-decision environment
pub mod environment;
/// TDEE estimation from body metrics (Mifflin-St Jeor)
pub mod nutrition;
/// Persisted per-goal agent bundles
pub mod store;
/// Offline training driver
pub mod trainer;

pub use agent::{Hyperparameters, QLearningAgent};
pub use environment::{NutritionEnvironment, MEALS_PER_DAY};
pub use store::{AgentBundle, AgentStore};
pub use trainer::{train, TrainingConfig};

use forma_core::Goal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::emotion::EmotionBucket;

/// Days in the weekly schedule dimension
pub const DAYS_PER_WEEK: usize = 7;
/// Cardinality of each state dimension: day, goal, caloric status, emotion
pub const STATE_SHAPE: [usize; 4] = [DAYS_PER_WEEK, 3, 3, 3];
/// Number of meal-calorie tiers
pub const ACTION_COUNT: usize = 3;

/// Bucketed comparison of calories consumed so far against the daily target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaloricStatus {
    /// Ratio below 0.85
    Under,
    /// Ratio within 0.85..=1.15
    Within,
    /// Ratio above 1.15
    Over,
}

impl CaloricStatus {
    /// Bucket a consumed/target energy ratio
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < 0.85 {
            Self::Under
        } else if ratio <= 1.15 {
            Self::Within
        } else {
            Self::Over
        }
    }

    /// Position of this bucket in the recommender state space
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Under => 0,
            Self::Within => 1,
            Self::Over => 2,
        }
    }
}

/// Meal-calorie tier chosen by the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealTier {
    /// ~300 kcal meal; serving filter 100-450 kcal
    Low,
    /// ~600 kcal meal; serving filter 451-700 kcal
    Medium,
    /// ~900 kcal meal; serving filter above 700 kcal
    High,
}

impl MealTier {
    /// All tiers, in action-index order
    pub const ALL: [Self; ACTION_COUNT] = [Self::Low, Self::Medium, Self::High];

    /// Action index of this tier
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    /// Tier for an action index. Panics on an out-of-range index, which is a
    /// programming error given the fixed action count.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    /// Simulated energy content of one meal in this tier
    #[must_use]
    pub fn calories(self) -> f64 {
        match self {
            Self::Low => 300.0,
            Self::Medium => 600.0,
            Self::High => 900.0,
        }
    }

    /// Whether a recipe's calorie count falls inside this tier's serving
    /// filter (low 100-450, medium 451-700, high above 700)
    #[must_use]
    pub fn matches(self, calories: f64) -> bool {
        match self {
            Self::Low => (100.0..=450.0).contains(&calories),
            Self::Medium => calories > 450.0 && calories <= 700.0,
            Self::High => calories > 700.0,
        }
    }
}

impl fmt::Display for MealTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// One point in the recommender state space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealState {
    /// Calendar day within the weekly schedule (0-6)
    pub day_of_week: usize,
    /// Training goal dimension
    pub goal: Goal,
    /// Energy-ratio bucket for the day so far
    pub caloric_status: CaloricStatus,
    /// Current mood signal
    pub emotion: EmotionBucket,
}

/// Dense table of expected returns indexed by (state, action).
///
/// Shape is fixed at `(7, 3, 3, 3) x 3` and validated when a persisted table
/// is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    shape: [usize; 4],
    values: Vec<f64>,
}

impl QTable {
    /// Zero-initialized table covering the full state space
    #[must_use]
    pub fn zeroed() -> Self {
        let len: usize = STATE_SHAPE.iter().product::<usize>() * ACTION_COUNT;
        Self {
            shape: STATE_SHAPE,
            values: vec![0.0; len],
        }
    }

    fn row_offset(&self, state: MealState) -> usize {
        debug_assert!(state.day_of_week < DAYS_PER_WEEK, "day index out of range");
        let idx = ((state.day_of_week * STATE_SHAPE[1] + state.goal.index()) * STATE_SHAPE[2]
            + state.caloric_status.index())
            * STATE_SHAPE[3]
            + state.emotion.index();
        idx * ACTION_COUNT
    }

    /// The three action values for a state
    #[must_use]
    pub fn row(&self, state: MealState) -> &[f64] {
        let offset = self.row_offset(state);
        &self.values[offset..offset + ACTION_COUNT]
    }

    /// Expected return for one (state, action) pair
    #[must_use]
    pub fn get(&self, state: MealState, action: MealTier) -> f64 {
        self.values[self.row_offset(state) + action.index()]
    }

    /// Overwrite the expected return for one (state, action) pair
    pub fn set(&mut self, state: MealState, action: MealTier, value: f64) {
        let offset = self.row_offset(state) + action.index();
        self.values[offset] = value;
    }

    /// Maximum action value for a state (the bootstrap term)
    #[must_use]
    pub fn max_value(&self, state: MealState) -> f64 {
        self.row(state).iter().copied().fold(f64::MIN, f64::max)
    }

    /// Greedy action for a state; ties resolve to the lowest action index
    #[must_use]
    pub fn argmax(&self, state: MealState) -> MealTier {
        let row = self.row(state);
        let mut best = 0;
        for (i, value) in row.iter().enumerate().skip(1) {
            if *value > row[best] {
                best = i;
            }
        }
        MealTier::from_index(best)
    }

    /// Check that a loaded table still matches the state space declared by
    /// the environment
    ///
    /// # Errors
    ///
    /// Returns a serialization error when the shape or entry count drifted.
    pub fn validate_shape(&self) -> forma_core::CoachResult<()> {
        let expected_len: usize = STATE_SHAPE.iter().product::<usize>() * ACTION_COUNT;
        if self.shape != STATE_SHAPE || self.values.len() != expected_len {
            return Err(forma_core::CoachError::serialization(format!(
                "q-table shape {:?} with {} entries does not match the {:?} x {ACTION_COUNT} state space",
                self.shape,
                self.values.len(),
                STATE_SHAPE,
            )));
        }
        Ok(())
    }
}

impl Default for QTable {
    fn default() -> Self {
        Self::zeroed()
    }
}
