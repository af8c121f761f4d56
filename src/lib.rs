// ABOUTME: Forma Coach engine library with RL meal recommender and coaching services
// ABOUTME: Exposes intelligence, emotion, recipes, planner, reports, and serving modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

#![deny(unsafe_code)]

//! # Forma Coach
//!
//! Fitness and nutrition coaching engine. The core is a tabular Q-learning
//! meal recommender: an environment encodes a user's day into a finite state
//! (day-of-week, goal, caloric status, emotion bucket), an agent learns
//! expected returns over three meal-calorie tiers, a training driver persists
//! one agent per goal, and a serving layer maps greedy tier choices onto a
//! recipe catalog. Around it sit the supporting coaching services: rule-based
//! workout planning, weekly and daily reporting, and emotion analysis.
//!
//! HTTP routing, the relational store, file ingestion, and hosted language
//! model pipelines are collaborators behind the seams exposed here.

/// Engine configuration loaded from environment variables
pub mod config;
/// Emotion analysis capability and the bucketed mood vocabulary
pub mod emotion;
/// RL core: environment, Q-learning agent, training driver, persistence
pub mod intelligence;
/// Structured logging setup
pub mod logging;
/// Rule-based workout plan generation
pub mod planner;
/// Recipe catalog loading and calorie-tier filtering
pub mod recipes;
/// Meal recommendation serving path
pub mod recommendation;
/// Weekly, daily, and demographic reporting
pub mod reports;

pub use forma_core::{
    CoachError, CoachErrorCode, CoachResult, ErrorPayload, FitnessLevel, Gender, Goal, MealLog,
    Mood, MoodLog, TrainingEquipment, UserProfile, WaterLog, WorkoutLog,
};
