// ABOUTME: Tests for the meal recommendation serving path
// ABOUTME: Covers greedy tier mapping, goal aliasing, and structured error payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{catalog, profile, recipe, weekday_schedule, StubAnalyzer};
use forma_coach::emotion::{EmotionBucket, EmotionLabel, KeywordEmotionAnalyzer};
use forma_coach::intelligence::{
    train, AgentStore, CaloricStatus, Hyperparameters, MealState, MealTier, NutritionEnvironment,
    QLearningAgent, QTable, TrainingConfig,
};
use forma_coach::recipes::RecipeCatalog;
use forma_coach::recommendation::{
    serving_caloric_status, MealRecommender, RecommendationError, RecommendationRequest,
};
use forma_coach::{CoachErrorCode, Goal};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

fn rigged_recommender(state: MealState, row: [f64; 3]) -> MealRecommender {
    let mut table = QTable::zeroed();
    table.set(state, MealTier::Low, row[0]);
    table.set(state, MealTier::Medium, row[1]);
    table.set(state, MealTier::High, row[2]);

    let serving_goal = match state.goal {
        Goal::Maintenance => Goal::WeightLoss,
        other => other,
    };
    let mut agents = HashMap::new();
    agents.insert(
        serving_goal,
        QLearningAgent::from_parts(table, Hyperparameters::default()),
    );
    MealRecommender::from_parts(agents, catalog())
}

#[test]
fn greedy_medium_choice_filters_recipes_to_the_medium_range() {
    let user = profile(Goal::WeightLoss);
    // 900 kcal consumed buckets as within under the fixed serving thresholds.
    let state = MealState {
        day_of_week: 2,
        goal: Goal::WeightLoss,
        caloric_status: CaloricStatus::Within,
        emotion: EmotionBucket::Neutral,
    };
    let recommender = rigged_recommender(state, [0.1, 0.9, 0.2]);

    let request = RecommendationRequest {
        profile: &user,
        day_of_week: 2,
        calories_consumed: 900.0,
        mood_text: None,
    };
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        let meals = recommender
            .recommend(&request, &KeywordEmotionAnalyzer, &mut rng)
            .unwrap();
        assert!(!meals.is_empty() && meals.len() <= 3);
        for meal in &meals {
            assert!(
                meal.calories > 450 && meal.calories <= 700,
                "{} kcal is outside the medium tier",
                meal.calories
            );
        }
    }
}

#[test]
fn mood_text_shifts_the_emotion_dimension() {
    let user = profile(Goal::WeightLoss);
    let state = MealState {
        day_of_week: 0,
        goal: Goal::WeightLoss,
        caloric_status: CaloricStatus::Under,
        emotion: EmotionBucket::Negative,
    };
    // Only the negative-mood row prefers the high tier.
    let recommender = rigged_recommender(state, [0.0, 0.0, 1.0]);

    let request = RecommendationRequest {
        profile: &user,
        day_of_week: 0,
        calories_consumed: 0.0,
        mood_text: Some("I am so sad"),
    };
    let mut rng = StdRng::seed_from_u64(8);
    let meals = recommender
        .recommend(&request, &KeywordEmotionAnalyzer, &mut rng)
        .unwrap();
    assert!(meals.iter().all(|m| m.calories > 700));
}

#[test]
fn maintenance_requests_are_served_by_the_weight_loss_agent() {
    let user = profile(Goal::Maintenance);
    // The state keeps the maintenance goal index even though the weight-loss
    // table answers for it.
    let state = MealState {
        day_of_week: 4,
        goal: Goal::Maintenance,
        caloric_status: CaloricStatus::Under,
        emotion: EmotionBucket::Neutral,
    };
    let recommender = rigged_recommender(state, [0.9, 0.1, 0.0]);

    let request = RecommendationRequest {
        profile: &user,
        day_of_week: 4,
        calories_consumed: 100.0,
        mood_text: None,
    };
    let mut rng = StdRng::seed_from_u64(12);
    let meals = recommender
        .recommend(&request, &KeywordEmotionAnalyzer, &mut rng)
        .unwrap();
    assert!(meals
        .iter()
        .all(|m| m.calories >= 100 && m.calories <= 450));
}

#[test]
fn missing_agent_yields_a_structured_not_found_payload() {
    let recommender = MealRecommender::from_parts(HashMap::new(), catalog());
    let user = profile(Goal::MuscleGain);
    let request = RecommendationRequest {
        profile: &user,
        day_of_week: 0,
        calories_consumed: 0.0,
        mood_text: None,
    };
    let mut rng = StdRng::seed_from_u64(1);
    let err = recommender
        .recommend(&request, &KeywordEmotionAnalyzer, &mut rng)
        .unwrap_err();
    assert_eq!(
        err,
        RecommendationError::AgentNotFound {
            goal: Goal::MuscleGain
        }
    );
    assert_eq!(err.payload().code, CoachErrorCode::ResourceNotFound);
}

#[test]
fn empty_tier_yields_a_structured_no_recipes_payload() {
    let user = profile(Goal::WeightLoss);
    let state = MealState {
        day_of_week: 0,
        goal: Goal::WeightLoss,
        caloric_status: CaloricStatus::Under,
        emotion: EmotionBucket::Neutral,
    };
    // Greedy choice lands on the high tier, but the catalog only has light meals.
    let mut table = QTable::zeroed();
    table.set(state, MealTier::High, 1.0);
    let mut agents = HashMap::new();
    agents.insert(
        Goal::WeightLoss,
        QLearningAgent::from_parts(table, Hyperparameters::default()),
    );
    let light_catalog = RecipeCatalog::from_recipes(vec![
        recipe("green salad", 210.0),
        recipe("overnight oats", 320.0),
    ]);
    let recommender = MealRecommender::from_parts(agents, light_catalog);

    let request = RecommendationRequest {
        profile: &user,
        day_of_week: 0,
        calories_consumed: 0.0,
        mood_text: None,
    };
    let mut rng = StdRng::seed_from_u64(2);
    let err = recommender
        .recommend(&request, &KeywordEmotionAnalyzer, &mut rng)
        .unwrap_err();
    assert_eq!(
        err,
        RecommendationError::NoMatchingRecipes {
            tier: MealTier::High
        }
    );
    assert_eq!(err.payload().code, CoachErrorCode::ResourceUnavailable);
}

#[test]
fn serving_thresholds_match_the_fixed_buckets() {
    assert_eq!(serving_caloric_status(499.0), CaloricStatus::Under);
    assert_eq!(serving_caloric_status(900.0), CaloricStatus::Within);
    assert_eq!(serving_caloric_status(1500.0), CaloricStatus::Over);
}

#[test]
fn recommender_loads_trained_bundles_and_a_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = AgentStore::new(dir.path().join("models"));

    let analyzer = StubAnalyzer(EmotionLabel::Neutral);
    let config = TrainingConfig {
        episodes: 300,
        progress_interval: 0,
        seed: Some(41),
    };
    for goal in [Goal::WeightLoss, Goal::MuscleGain] {
        let env =
            NutritionEnvironment::new(&profile(goal), weekday_schedule(), &analyzer).unwrap();
        let agent = train(env, &config);
        store.save(goal, &agent).unwrap();
    }

    // Catalog rows missing calories or a link are dropped at load.
    let catalog_path = dir.path().join("recipes.json");
    std::fs::write(
        &catalog_path,
        r#"[
            {"name": "green salad", "calories": 210.0, "url": "https://recipes.example/salad"},
            {"name": "beef stew", "calories": 660.0, "url": "https://recipes.example/stew"},
            {"name": "family lasagna", "calories": 950.0, "url": "https://recipes.example/lasagna"},
            {"name": "mystery dish", "calories": null, "url": "https://recipes.example/mystery"},
            {"name": "unlinked pie", "calories": 512.0, "url": null}
        ]"#,
    )
    .unwrap();

    let recommender = MealRecommender::load(&store, &catalog_path).unwrap();
    let user = profile(Goal::WeightLoss);
    let request = RecommendationRequest {
        profile: &user,
        day_of_week: 1,
        calories_consumed: 250.0,
        mood_text: Some("Just a regular day"),
    };
    let mut rng = StdRng::seed_from_u64(77);
    let meals = recommender
        .recommend(&request, &KeywordEmotionAnalyzer, &mut rng)
        .unwrap();
    assert!(!meals.is_empty());
    for meal in &meals {
        assert_ne!(meal.name, "mystery dish");
        assert_ne!(meal.name, "unlinked pie");
    }
}

#[test]
fn missing_models_surface_as_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = AgentStore::new(dir.path().join("empty"));
    let catalog_path = dir.path().join("recipes.json");
    std::fs::write(&catalog_path, "[]").unwrap();

    let err = MealRecommender::load(&store, &catalog_path).unwrap_err();
    assert_eq!(err.code, CoachErrorCode::ResourceNotFound);
}
