// ABOUTME: Simulated daily meal-decision environment for the Q-learning agent
// ABOUTME: Encodes state transitions and the goal/emotion-aligned reward function
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

//! The meal-decision environment.
//!
//! One episode is one simulated day: three meal decisions, then terminal.
//! Episodes are independent; nothing carries across them except the shared
//! Q-table held by the agent.

use forma_core::{CoachResult, Goal, UserProfile};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::nutrition::calculate_tdee;
use super::{CaloricStatus, MealState, MealTier, DAYS_PER_WEEK};
use crate::emotion::{EmotionAnalyzer, EmotionBucket};
use crate::planner::WeekSchedule;

/// Meal decisions per simulated day
pub const MEALS_PER_DAY: usize = 3;

/// Mood text pool sampled for the emotion signal during training
const MOOD_SAMPLES: [&str; 3] = ["I feel great today", "I am so sad", "Just a regular day"];

/// Simulated environment for one user: state space, transition function, and
/// reward function of the meal recommender.
pub struct NutritionEnvironment<'a> {
    tdee: f64,
    goal: Goal,
    schedule: WeekSchedule,
    analyzer: &'a dyn EmotionAnalyzer,
    rng: StdRng,
    day_of_week: usize,
    time_of_day: usize,
    calories_consumed: f64,
    emotion: EmotionBucket,
    done: bool,
}

impl<'a> NutritionEnvironment<'a> {
    /// Build an environment for a user, deriving the daily energy target from
    /// body metrics (Mifflin-St Jeor with activity multiplier).
    ///
    /// # Errors
    ///
    /// Returns an error when the profile's body metrics are implausible.
    pub fn new(
        profile: &UserProfile,
        schedule: WeekSchedule,
        analyzer: &'a dyn EmotionAnalyzer,
    ) -> CoachResult<Self> {
        let tdee = calculate_tdee(profile)?;
        Self::with_energy_target(profile, schedule, analyzer, tdee)
    }

    /// Build an environment with an externally supplied daily energy target,
    /// e.g. one measured by a tracker.
    ///
    /// # Errors
    ///
    /// Returns an error when the target is not positive.
    pub fn with_energy_target(
        profile: &UserProfile,
        schedule: WeekSchedule,
        analyzer: &'a dyn EmotionAnalyzer,
        tdee: f64,
    ) -> CoachResult<Self> {
        if tdee <= 0.0 {
            return Err(forma_core::CoachError::invalid_input(
                "daily energy target must be positive",
            ));
        }
        Ok(Self {
            tdee,
            goal: profile.goal,
            schedule,
            analyzer,
            rng: StdRng::from_entropy(),
            day_of_week: 0,
            time_of_day: 0,
            calories_consumed: 0.0,
            emotion: EmotionBucket::Neutral,
            done: false,
        })
    }

    /// Replace the internal RNG with a seeded one for reproducible runs
    #[must_use]
    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Daily energy target the caloric-status bucketing compares against
    #[must_use]
    pub fn energy_target(&self) -> f64 {
        self.tdee
    }

    /// Begin a new episode. The day of week is derived from the episode
    /// number so training sweeps evenly across the week; accumulators reset
    /// and a fresh mood sample is classified.
    pub fn reset(&mut self, episode: usize) -> MealState {
        self.day_of_week = episode % DAYS_PER_WEEK;
        self.time_of_day = 0;
        self.calories_consumed = 0.0;
        self.done = false;
        self.emotion = self.sample_emotion();
        self.state()
    }

    /// Take one meal decision.
    ///
    /// Returns the next state, the reward, and whether the day is finished.
    ///
    /// # Panics
    ///
    /// Panics when called on a finished episode; that is a usage-contract
    /// violation, not a recoverable condition.
    pub fn step(&mut self, action: MealTier) -> (MealState, f64, bool) {
        assert!(
            !self.done,
            "episode is finished; call reset() before stepping again"
        );

        self.calories_consumed += action.calories();
        let status = self.caloric_status();
        let training_day = self.schedule.is_training_day(self.day_of_week);

        let reward = goal_reward(self.goal, status, training_day)
            + emotion_reward(self.emotion, action);

        self.time_of_day += 1;
        if self.time_of_day >= MEALS_PER_DAY {
            self.done = true;
        }

        // The mood signal is resampled independently each step rather than
        // evolved as a trajectory; the next state sees the fresh draw.
        self.emotion = self.sample_emotion();
        (self.state(), reward, self.done)
    }

    fn caloric_status(&self) -> CaloricStatus {
        CaloricStatus::from_ratio(self.calories_consumed / self.tdee)
    }

    fn state(&self) -> MealState {
        MealState {
            day_of_week: self.day_of_week,
            goal: self.goal,
            caloric_status: self.caloric_status(),
            emotion: self.emotion,
        }
    }

    fn sample_emotion(&mut self) -> EmotionBucket {
        let text = MOOD_SAMPLES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(MOOD_SAMPLES[2]);
        self.analyzer.analyze(text).bucket()
    }
}

/// Goal-alignment reward term, training-day aware
fn goal_reward(goal: Goal, status: CaloricStatus, training_day: bool) -> f64 {
    match goal {
        Goal::WeightLoss => match status {
            CaloricStatus::Under => 15.0,
            CaloricStatus::Within => {
                if training_day {
                    5.0
                } else {
                    -5.0
                }
            }
            CaloricStatus::Over => {
                if training_day {
                    -10.0
                } else {
                    -20.0
                }
            }
        },
        Goal::Maintenance => {
            if status == CaloricStatus::Within {
                15.0
            } else {
                -10.0
            }
        }
        Goal::MuscleGain => match status {
            CaloricStatus::Over => {
                if training_day {
                    15.0
                } else {
                    10.0
                }
            }
            CaloricStatus::Within => 5.0,
            CaloricStatus::Under => -20.0,
        },
    }
}

/// Emotion-alignment reward term: a medium meal soothes a negative mood, a
/// light meal suits a positive one
fn emotion_reward(emotion: EmotionBucket, action: MealTier) -> f64 {
    match emotion {
        EmotionBucket::Negative => match action {
            MealTier::Medium => 10.0,
            MealTier::Low => -5.0,
            MealTier::High => 0.0,
        },
        EmotionBucket::Positive => {
            if action == MealTier::Low {
                10.0
            } else {
                0.0
            }
        }
        EmotionBucket::Neutral => 0.0,
    }
}
