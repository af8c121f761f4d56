// ABOUTME: Tests for weekly, daily, and demographic reporting
// ABOUTME: Covers window filtering, averaging, insight thresholds, and summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use common::profile;
use forma_coach::reports::{daily_summary, demographic_insights, weekly_report};
use forma_coach::{Goal, MealLog, Mood, MoodLog, WaterLog, WorkoutLog};
use uuid::Uuid;

fn day(y: i32, m: u32, d: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

fn workout(date: chrono::DateTime<Utc>) -> WorkoutLog {
    WorkoutLog {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        date,
        exercise: "Full body".to_owned(),
        duration_minutes: Some(45),
    }
}

fn meal(date: chrono::DateTime<Utc>, calories: Option<f64>) -> MealLog {
    MealLog {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        date,
        description: "meal".to_owned(),
        calories,
    }
}

fn mood(date: chrono::DateTime<Utc>, mood: Mood) -> MoodLog {
    MoodLog {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        date,
        mood,
        note: None,
    }
}

fn water(date: chrono::DateTime<Utc>, amount_ml: Option<f64>) -> WaterLog {
    WaterLog {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        date,
        amount_ml,
    }
}

#[test]
fn weekly_report_aggregates_only_the_window() {
    let end = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();

    let workouts = vec![
        workout(day(2026, 8, 27)),
        workout(day(2026, 8, 25)),
        workout(day(2026, 8, 22)),
        // Outside the seven-day window.
        workout(day(2026, 8, 10)),
    ];
    let meals = vec![
        meal(day(2026, 8, 27), Some(1800.0)),
        meal(day(2026, 8, 26), Some(2100.0)),
        meal(day(2026, 8, 26), None),
        meal(day(2026, 8, 1), Some(9000.0)),
    ];
    let moods = vec![
        mood(day(2026, 8, 27), Mood::Good),
        mood(day(2026, 8, 24), Mood::Excellent),
        mood(day(2026, 8, 22), Mood::Bad),
        mood(day(2026, 8, 2), Mood::Terrible),
    ];
    let waters = vec![
        water(day(2026, 8, 27), Some(1500.0)),
        water(day(2026, 8, 26), Some(2000.0)),
        water(day(2026, 8, 3), Some(4000.0)),
    ];

    let (report, insights) = weekly_report(&workouts, &meals, &moods, &waters, end);

    assert_eq!(report.workout_count, 3);
    // (1800 + 2100) / 7 = 557.142..., rounded to one decimal.
    assert!((report.avg_daily_calories - 557.1).abs() < 1e-9);
    // (4 + 5 + 2) / 3 = 3.666..., rounded.
    assert!((report.avg_mood_score - 3.7).abs() < 1e-9);
    // (1500 + 2000) / 7 = 500.0
    assert!((report.avg_daily_water_ml - 500.0).abs() < 1e-9);
    assert_eq!(
        report.best_mood_day,
        Some(NaiveDate::from_ymd_opt(2026, 8, 24).unwrap())
    );

    assert_eq!(insights.len(), 2);
    assert!(insights[0].contains("one more session"), "3 workouts get a nudge");
    assert!(insights[1].contains("water"), "low hydration gets a reminder");
}

#[test]
fn consistent_week_earns_praise() {
    let end = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
    let workouts: Vec<WorkoutLog> = (22..=27).map(|d| workout(day(2026, 8, d))).collect();
    let waters: Vec<WaterLog> = (22..=28)
        .map(|d| water(day(2026, 8, d), Some(2500.0)))
        .collect();

    let (report, insights) = weekly_report(&workouts, &[], &[], &waters, end);
    assert_eq!(report.workout_count, 6);
    assert!(insights[0].contains("consistency"));
    assert!(insights[1].contains("Excellent hydration"));
}

#[test]
fn empty_week_defaults_to_neutral_mood_and_zero_averages() {
    let end = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
    let (report, _) = weekly_report(&[], &[], &[], &[], end);
    assert_eq!(report.workout_count, 0);
    assert!((report.avg_daily_calories).abs() < 1e-9);
    assert!((report.avg_mood_score - 3.0).abs() < 1e-9);
    assert!(report.best_mood_day.is_none());
}

#[test]
fn daily_summary_counts_only_the_given_day() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
    let meals = vec![
        meal(day(2026, 8, 28), Some(450.0)),
        meal(day(2026, 8, 28), Some(700.0)),
        meal(day(2026, 8, 27), Some(2000.0)),
    ];
    let workouts = vec![workout(day(2026, 8, 28)), workout(day(2026, 8, 26))];

    let summary = daily_summary(&meals, &workouts, today);
    assert!((summary.total_calories - 1150.0).abs() < 1e-9);
    assert_eq!(summary.workout_count, 1);
}

#[test]
fn demographic_insights_mention_the_users_age() {
    let user = profile(Goal::MuscleGain);
    let cards = demographic_insights(&user);
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].kind, "demographic");
    assert!(cards[0].title.contains("30"));
    assert_eq!(cards[1].kind, "health");
}
