// ABOUTME: Rule-based weekly workout plan generation from an exercise pool
// ABOUTME: Equipment filtering, push/pull/legs splits, and tutorial links
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

//! Workout planning.
//!
//! Generates a seven-day plan from an exercise pool: muscle-gain users get a
//! push/pull/legs split, everyone else a three-day full-body week. The plan's
//! training/rest structure is what the meal-recommender environment consumes
//! as its training-day signal.

use forma_core::{CoachError, CoachResult, Goal, TrainingEquipment, UserProfile};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::intelligence::DAYS_PER_WEEK;

/// Body part targeted by an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Push family
    Chest,
    /// Push family
    Shoulders,
    /// Push family
    Triceps,
    /// Pull family
    Back,
    /// Pull family
    Biceps,
    /// Pull family
    Lats,
    /// Leg family
    Legs,
    /// Leg family
    Calves,
    /// Leg family
    Glutes,
    /// Leg family
    Hamstrings,
    /// Leg family
    Quads,
}

impl MuscleGroup {
    fn is_push(self) -> bool {
        matches!(self, Self::Chest | Self::Shoulders | Self::Triceps)
    }

    fn is_pull(self) -> bool {
        matches!(self, Self::Back | Self::Biceps | Self::Lats)
    }

    fn is_legs(self) -> bool {
        matches!(
            self,
            Self::Legs | Self::Calves | Self::Glutes | Self::Hamstrings | Self::Quads
        )
    }
}

/// Equipment an exercise requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseEquipment {
    /// No equipment beyond bodyweight
    BodyOnly,
    /// Dumbbells
    Dumbbells,
    /// Barbell
    Barbell,
    /// Fixed machine
    Machine,
    /// Cable station
    Cable,
    /// Kettlebells
    Kettlebells,
    /// Resistance bands
    Bands,
}

/// One exercise in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Display name
    pub name: String,
    /// Targeted body part
    pub body_part: MuscleGroup,
    /// Required equipment
    pub equipment: ExerciseEquipment,
}

impl Exercise {
    fn available_with(&self, setting: TrainingEquipment) -> bool {
        match setting {
            TrainingEquipment::Gym => true,
            TrainingEquipment::HomeDumbbells => matches!(
                self.equipment,
                ExerciseEquipment::BodyOnly | ExerciseEquipment::Dumbbells
            ),
            TrainingEquipment::BodyweightOnly => {
                self.equipment == ExerciseEquipment::BodyOnly
            }
        }
    }
}

/// An exercise scheduled into a session, with a tutorial search link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedExercise {
    /// Exercise name
    pub name: String,
    /// Video tutorial search link
    pub tutorial_url: String,
}

impl PlannedExercise {
    fn from_exercise(exercise: &Exercise) -> Self {
        let query = urlencoding::encode(&format!("{} exercise tutorial", exercise.name))
            .into_owned();
        Self {
            name: exercise.name.clone(),
            tutorial_url: format!("https://www.youtube.com/results?search_query={query}"),
        }
    }
}

/// One day of the weekly plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayPlan {
    /// A training session
    Training {
        /// Session label (push, pull, full body, ...)
        label: String,
        /// Exercises in the session
        exercises: Vec<PlannedExercise>,
    },
    /// A rest day
    Rest,
}

impl DayPlan {
    fn training(label: &str, pool: Vec<&Exercise>) -> Self {
        Self::Training {
            label: label.to_owned(),
            exercises: pool.into_iter().map(PlannedExercise::from_exercise).collect(),
        }
    }

    /// Whether this day contains a session
    #[must_use]
    pub fn is_training(&self) -> bool {
        matches!(self, Self::Training { .. })
    }
}

/// Per-day training/rest flags consumed by the RL environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    training: [bool; DAYS_PER_WEEK],
}

impl WeekSchedule {
    /// Build a schedule from explicit per-day flags (Monday first)
    #[must_use]
    pub fn new(training: [bool; DAYS_PER_WEEK]) -> Self {
        Self { training }
    }

    /// Whether the given day (0 = Monday) is a training day
    #[must_use]
    pub fn is_training_day(&self, day_of_week: usize) -> bool {
        self.training[day_of_week % DAYS_PER_WEEK]
    }

    /// Number of training days in the week
    #[must_use]
    pub fn training_days(&self) -> usize {
        self.training.iter().filter(|t| **t).count()
    }
}

/// A generated seven-day workout plan, Monday first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlan {
    days: Vec<DayPlan>,
}

impl WorkoutPlan {
    /// The seven day plans, Monday first
    #[must_use]
    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    /// The training/rest structure the RL environment consumes
    #[must_use]
    pub fn week_schedule(&self) -> WeekSchedule {
        let mut training = [false; DAYS_PER_WEEK];
        for (day, plan) in self.days.iter().enumerate() {
            training[day] = plan.is_training();
        }
        WeekSchedule::new(training)
    }
}

fn sample<'a, R: Rng + ?Sized>(pool: &[&'a Exercise], k: usize, rng: &mut R) -> Vec<&'a Exercise> {
    pool.choose_multiple(rng, k.min(pool.len())).copied().collect()
}

/// Generate a weekly plan for the user from the available exercise pool.
///
/// The pool is first filtered by the user's equipment setting; muscle-gain
/// users get a push/pull/rest/legs/upper split with five exercises per
/// session, everyone else a full-body session (two per muscle family)
/// repeated on days 1, 3, and 5.
///
/// # Errors
///
/// Returns an error when no exercise survives the equipment filter.
pub fn generate_plan<R: Rng + ?Sized>(
    profile: &UserProfile,
    exercises: &[Exercise],
    rng: &mut R,
) -> CoachResult<WorkoutPlan> {
    let pool: Vec<&Exercise> = exercises
        .iter()
        .filter(|e| e.available_with(profile.equipment))
        .collect();
    if pool.is_empty() {
        return Err(CoachError::not_found(
            "no exercises available for the selected equipment",
        ));
    }

    let push: Vec<&Exercise> = pool.iter().filter(|e| e.body_part.is_push()).copied().collect();
    let pull: Vec<&Exercise> = pool.iter().filter(|e| e.body_part.is_pull()).copied().collect();
    let legs: Vec<&Exercise> = pool.iter().filter(|e| e.body_part.is_legs()).copied().collect();

    let days = if profile.goal == Goal::MuscleGain {
        let upper: Vec<&Exercise> = push.iter().chain(pull.iter()).copied().collect();
        vec![
            DayPlan::training("Push", sample(&push, 5, rng)),
            DayPlan::training("Pull", sample(&pull, 5, rng)),
            DayPlan::Rest,
            DayPlan::training("Legs", sample(&legs, 5, rng)),
            DayPlan::training("Upper body", sample(&upper, 5, rng)),
            DayPlan::Rest,
            DayPlan::Rest,
        ]
    } else {
        let mut full_body = sample(&push, 2, rng);
        full_body.extend(sample(&pull, 2, rng));
        full_body.extend(sample(&legs, 2, rng));
        let session = DayPlan::training("Full body", full_body);
        vec![
            session.clone(),
            DayPlan::Rest,
            session.clone(),
            DayPlan::Rest,
            session,
            DayPlan::Rest,
            DayPlan::Rest,
        ]
    };

    Ok(WorkoutPlan { days })
}
