// ABOUTME: Energy expenditure estimation from body metrics
// ABOUTME: Mifflin-St Jeor BMR with fitness-level activity multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

//! TDEE estimation.
//!
//! # Reference
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>

use forma_core::{CoachError, CoachResult, Gender, UserProfile};

const MSJ_WEIGHT_COEF: f64 = 10.0;
const MSJ_HEIGHT_COEF: f64 = 6.25;
const MSJ_AGE_COEF: f64 = 5.0;
const MSJ_MALE_OFFSET: f64 = 5.0;
const MSJ_FEMALE_OFFSET: f64 = -161.0;

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990).
///
/// Formula: `BMR = 10 x weight_kg + 6.25 x height_cm - 5 x age + offset`
/// with offset +5 for men and -161 for women.
///
/// # Errors
///
/// Returns an error when body metrics are out of plausible ranges.
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
) -> CoachResult<f64> {
    if weight_kg <= 0.0 || weight_kg > 300.0 {
        return Err(CoachError::invalid_input(
            "weight must be between 0 and 300 kg",
        ));
    }
    if height_cm <= 0.0 || height_cm > 300.0 {
        return Err(CoachError::invalid_input(
            "height must be between 0 and 300 cm",
        ));
    }
    if !(10..=120).contains(&age) {
        return Err(CoachError::invalid_input(
            "age must be between 10 and 120 years",
        ));
    }

    let offset = match gender {
        Gender::Male => MSJ_MALE_OFFSET,
        Gender::Female => MSJ_FEMALE_OFFSET,
    };
    Ok(MSJ_WEIGHT_COEF * weight_kg + MSJ_HEIGHT_COEF * height_cm - MSJ_AGE_COEF * f64::from(age)
        + offset)
}

/// Total Daily Energy Expenditure: BMR scaled by the activity multiplier of
/// the user's fitness level (beginner 1.375, intermediate 1.55, advanced
/// 1.725).
///
/// # Errors
///
/// Returns an error when body metrics are out of plausible ranges.
pub fn calculate_tdee(profile: &UserProfile) -> CoachResult<f64> {
    let bmr = calculate_mifflin_st_jeor(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
    )?;
    Ok(bmr * profile.fitness_level.activity_multiplier())
}
