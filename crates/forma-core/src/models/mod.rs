// ABOUTME: Core domain models for the Forma coaching engine
// ABOUTME: User profiles, goals, fitness levels, and daily log records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

//! Core domain models consumed by the coaching engine.
//!
//! Persistence of these records is a collaborator concern; the engine only
//! works with the in-memory shapes defined here.

/// Daily log records (workouts, meals, mood, water)
pub mod logs;
/// User profile and its enumerated attributes
pub mod user;

pub use logs::{MealLog, Mood, MoodLog, WaterLog, WorkoutLog};
pub use user::{FitnessLevel, Gender, Goal, TrainingEquipment, UserProfile};
