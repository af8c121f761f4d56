// ABOUTME: CLI serving path for meal recommendations from trained agents
// ABOUTME: Prints recipe suggestions or a structured error payload as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

//! One-shot recommendation query.
//!
//! Usage:
//! ```bash
//! cargo run --bin forma-recommend -- --goal weight_loss --day 2 \
//!     --calories-consumed 900 --mood "I feel great today"
//! ```

use anyhow::Result;
use clap::Parser;
use forma_coach::config::CoachConfig;
use forma_coach::emotion::KeywordEmotionAnalyzer;
use forma_coach::intelligence::AgentStore;
use forma_coach::recommendation::{MealRecommender, RecommendationRequest};
use forma_coach::{FitnessLevel, Gender, Goal, TrainingEquipment, UserProfile};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "forma-recommend",
    about = "Query the Forma meal recommender",
    long_about = "Loads the trained agent bundles and the recipe catalog, reconstructs \
                  today's state, and prints up to three meal suggestions as JSON"
)]
struct RecommendArgs {
    /// Training goal of the user
    #[arg(long)]
    goal: Goal,

    /// Day of week, 0 = Monday
    #[arg(long, default_value = "0")]
    day: usize,

    /// Calories already consumed today
    #[arg(long, default_value = "0")]
    calories_consumed: f64,

    /// Mood text sample; neutral when omitted
    #[arg(long)]
    mood: Option<String>,

    /// Age in years
    #[arg(long, default_value = "30")]
    age: u32,

    /// Gender (male or female)
    #[arg(long, default_value = "male")]
    gender: Gender,

    /// Height in centimeters
    #[arg(long, default_value = "180")]
    height_cm: f64,

    /// Weight in kilograms
    #[arg(long, default_value = "85")]
    weight_kg: f64,

    /// Fitness level label (beginner, intermediate, advanced)
    #[arg(long, default_value = "intermediate")]
    fitness_level: String,

    /// Models directory override
    #[arg(long)]
    models_dir: Option<PathBuf>,

    /// Recipe catalog override
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn main() -> Result<()> {
    forma_coach::logging::init_from_env()?;
    let args = RecommendArgs::parse();

    let config = CoachConfig::from_env();
    let store = AgentStore::new(args.models_dir.unwrap_or(config.models_dir));
    let catalog_path = args.catalog.unwrap_or(config.recipe_catalog);

    let profile = UserProfile {
        id: Uuid::new_v4(),
        username: "cli".to_owned(),
        age: args.age,
        gender: args.gender,
        height_cm: args.height_cm,
        weight_kg: args.weight_kg,
        goal: args.goal,
        fitness_level: FitnessLevel::from_label(&args.fitness_level),
        equipment: TrainingEquipment::Gym,
    };

    // Load failures and serving failures both degrade into a structured
    // payload on stdout; the process itself still exits cleanly.
    let recommender = match MealRecommender::load(&store, &catalog_path) {
        Ok(recommender) => recommender,
        Err(err) => {
            println!("{}", serde_json::to_string_pretty(&err.payload())?);
            return Ok(());
        }
    };

    let request = RecommendationRequest {
        profile: &profile,
        day_of_week: args.day,
        calories_consumed: args.calories_consumed,
        mood_text: args.mood.as_deref(),
    };
    let mut rng = StdRng::from_entropy();
    match recommender.recommend(&request, &KeywordEmotionAnalyzer, &mut rng) {
        Ok(meals) => println!("{}", serde_json::to_string_pretty(&meals)?),
        Err(err) => println!("{}", serde_json::to_string_pretty(&err.payload())?),
    }
    Ok(())
}
