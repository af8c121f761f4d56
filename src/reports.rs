// ABOUTME: Weekly, daily, and demographic reporting over user log records
// ABOUTME: Pure aggregation functions; persistence is a collaborator concern
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

//! Reporting.
//!
//! All functions here aggregate over log slices handed in by the caller; the
//! relational store behind them is a collaborator.

use chrono::{Duration, NaiveDate};
use forma_core::{MealLog, MoodLog, UserProfile, WaterLog, WorkoutLog};
use serde::Serialize;

const REPORT_WINDOW_DAYS: i64 = 7;
const WORKOUT_PRAISE_THRESHOLD: usize = 4;
const DAILY_WATER_TARGET_ML: f64 = 2000.0;

/// Aggregated weekly numbers for one user
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyReport {
    /// Workouts completed in the window
    pub workout_count: usize,
    /// Average calories logged per day
    pub avg_daily_calories: f64,
    /// Average mood score (excellent 5 .. terrible 1); 3.0 when no check-ins
    pub avg_mood_score: f64,
    /// Average water intake per day in milliliters
    pub avg_daily_water_ml: f64,
    /// Day with the highest mood score, when any check-in exists
    pub best_mood_day: Option<NaiveDate>,
    /// First day of the window
    pub period_start: NaiveDate,
    /// Last day of the window
    pub period_end: NaiveDate,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Build the weekly report for the seven days ending at `end_date`, along
/// with coaching insight lines.
#[must_use]
pub fn weekly_report(
    workouts: &[WorkoutLog],
    meals: &[MealLog],
    moods: &[MoodLog],
    water: &[WaterLog],
    end_date: NaiveDate,
) -> (WeeklyReport, Vec<String>) {
    let start_date = end_date - Duration::days(REPORT_WINDOW_DAYS);
    let in_window = |date: chrono::DateTime<chrono::Utc>| date.date_naive() >= start_date;

    let workout_count = workouts.iter().filter(|l| in_window(l.date)).count();

    let total_calories: f64 = meals
        .iter()
        .filter(|l| in_window(l.date))
        .filter_map(|l| l.calories)
        .sum();
    let any_meals = meals.iter().any(|l| in_window(l.date));
    let avg_daily_calories = if any_meals {
        round1(total_calories / REPORT_WINDOW_DAYS as f64)
    } else {
        0.0
    };

    let total_water: f64 = water
        .iter()
        .filter(|l| in_window(l.date))
        .filter_map(|l| l.amount_ml)
        .sum();
    let any_water = water.iter().any(|l| in_window(l.date));
    let avg_daily_water_ml = if any_water {
        round1(total_water / REPORT_WINDOW_DAYS as f64)
    } else {
        0.0
    };

    let window_moods: Vec<&MoodLog> = moods.iter().filter(|l| in_window(l.date)).collect();
    let avg_mood_score = if window_moods.is_empty() {
        3.0
    } else {
        let sum: u32 = window_moods.iter().map(|l| u32::from(l.mood.score())).sum();
        round1(f64::from(sum) / window_moods.len() as f64)
    };
    let best_mood_day = window_moods
        .iter()
        .max_by_key(|l| l.mood.score())
        .map(|l| l.date.date_naive());

    let mut insights = Vec::new();
    if workout_count >= WORKOUT_PRAISE_THRESHOLD {
        insights.push("Great training effort! You are keeping excellent consistency.".to_owned());
    } else {
        insights.push(
            "Good start - try adding one more session this week for better results.".to_owned(),
        );
    }
    if avg_daily_water_ml >= DAILY_WATER_TARGET_ML {
        insights.push("Excellent hydration! Your body thanks you.".to_owned());
    } else {
        insights.push(
            "Remember to drink enough water. Aim for at least 2 liters a day.".to_owned(),
        );
    }

    (
        WeeklyReport {
            workout_count,
            avg_daily_calories,
            avg_mood_score,
            avg_daily_water_ml,
            best_mood_day,
            period_start: start_date,
            period_end: end_date,
        },
        insights,
    )
}

/// Totals for a single day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    /// Calories logged on the day
    pub total_calories: f64,
    /// Workouts completed on the day
    pub workout_count: usize,
}

/// Sum up the day's logged meals and workouts
#[must_use]
pub fn daily_summary(meals: &[MealLog], workouts: &[WorkoutLog], day: NaiveDate) -> DailySummary {
    let total_calories = meals
        .iter()
        .filter(|l| l.date.date_naive() == day)
        .filter_map(|l| l.calories)
        .sum();
    let workout_count = workouts
        .iter()
        .filter(|l| l.date.date_naive() == day)
        .count();
    DailySummary {
        total_calories,
        workout_count,
    }
}

/// A demographic or health insight card
#[derive(Debug, Clone, Serialize)]
pub struct InsightCard {
    /// Card category (demographic, health)
    pub kind: String,
    /// Short headline
    pub title: String,
    /// Body text
    pub message: String,
    /// Actionable suggestion
    pub recommendation: String,
}

/// Peer-comparison insight cards for the user's demographic. The comparison
/// data is static for now; a richer backend would supply population numbers.
#[must_use]
pub fn demographic_insights(profile: &UserProfile) -> Vec<InsightCard> {
    vec![
        InsightCard {
            kind: "demographic".to_owned(),
            title: format!("Comparison with peers ({} years old)", profile.age),
            message: "Your age group completes 2-3 workouts per week on average.".to_owned(),
            recommendation: "If you are below the average, try adding a short weekend session. \
                             If you are above it, keep it up!"
                .to_owned(),
        },
        InsightCard {
            kind: "health".to_owned(),
            title: "Nutrition insight".to_owned(),
            message: "People training for muscle gain often fall short on protein. Aim for \
                      1.6-2.2 g per kg of body weight."
                .to_owned(),
            recommendation: "Consider adding a protein shake or Greek yogurt to your day."
                .to_owned(),
        },
    ]
}
