// ABOUTME: Core types and error handling for the Forma coaching engine
// ABOUTME: Foundation crate with domain models, error codes, and shared enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

#![deny(unsafe_code)]

//! # Forma Core
//!
//! Foundation crate providing the shared types of the Forma coaching engine.
//! This crate is designed to change infrequently: it carries the unified error
//! type, the user profile, and the daily log records that every other part of
//! the engine consumes.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `CoachError`, `CoachErrorCode`,
//!   and the serializable `ErrorPayload` used by degrading serving paths
//! - **models**: Core domain models (`UserProfile`, `Goal`, daily logs)

/// Unified error handling with standard error codes and structured payloads
pub mod errors;

/// Core domain models (user profile, goals, daily logs)
pub mod models;

pub use errors::{CoachError, CoachErrorCode, CoachResult, ErrorPayload};
pub use models::{
    FitnessLevel, Gender, Goal, MealLog, Mood, MoodLog, TrainingEquipment, UserProfile, WaterLog,
    WorkoutLog,
};
