// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Stub emotion analyzer, user profiles, and a small recipe catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

#![allow(dead_code)]

use forma_coach::emotion::{EmotionAnalyzer, EmotionLabel};
use forma_coach::planner::WeekSchedule;
use forma_coach::recipes::{Recipe, RecipeCatalog};
use forma_coach::{FitnessLevel, Gender, Goal, TrainingEquipment, UserProfile};
use uuid::Uuid;

/// Analyzer that always returns the same label, keeping the environment's
/// emotion dimension fixed during tests
pub struct StubAnalyzer(pub EmotionLabel);

impl EmotionAnalyzer for StubAnalyzer {
    fn analyze(&self, _text: &str) -> EmotionLabel {
        self.0
    }
}

/// 30-year-old intermediate male, 180 cm / 85 kg (BMR 1830, TDEE 2836.5)
pub fn profile(goal: Goal) -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        username: "test_user".to_owned(),
        age: 30,
        gender: Gender::Male,
        height_cm: 180.0,
        weight_kg: 85.0,
        goal,
        fitness_level: FitnessLevel::Intermediate,
        equipment: TrainingEquipment::Gym,
    }
}

/// Mon/Tue/Thu/Fri training, rest otherwise
pub fn weekday_schedule() -> WeekSchedule {
    WeekSchedule::new([true, true, false, true, true, false, false])
}

pub fn recipe(name: &str, calories: f64) -> Recipe {
    Recipe {
        name: name.to_owned(),
        calories,
        url: format!("https://recipes.example/{name}"),
    }
}

/// Catalog with recipes in every calorie tier
pub fn catalog() -> RecipeCatalog {
    RecipeCatalog::from_recipes(vec![
        recipe("overnight oats", 320.0),
        recipe("green salad", 210.0),
        recipe("chicken wrap", 440.0),
        recipe("beef stew", 660.0),
        recipe("salmon bowl", 580.0),
        recipe("pasta bake", 690.0),
        recipe("family lasagna", 950.0),
        recipe("loaded burrito", 820.0),
    ])
}
