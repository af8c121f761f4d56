// ABOUTME: Offline training binary for the per-goal meal recommender agents
// ABOUTME: Runs the Q-learning loop and persists bundles to the models directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

//! Trainer for the meal recommender.
//!
//! Usage:
//! ```bash
//! # Train agents for every goal population with defaults
//! cargo run --bin forma-train
//!
//! # Train one goal with a fixed seed and fewer episodes
//! cargo run --bin forma-train -- --goal muscle_gain --episodes 20000 --seed 42
//! ```

use anyhow::Result;
use clap::Parser;
use forma_coach::config::CoachConfig;
use forma_coach::emotion::KeywordEmotionAnalyzer;
use forma_coach::intelligence::{train, AgentStore, NutritionEnvironment, TrainingConfig};
use forma_coach::planner::WeekSchedule;
use forma_coach::{FitnessLevel, Gender, Goal, TrainingEquipment, UserProfile};
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "forma-train",
    about = "Train the Forma meal recommender agents",
    long_about = "Runs the offline Q-learning loop for each goal population and persists \
                  the trained bundles to the models directory"
)]
struct TrainArgs {
    /// Train only this goal (weight_loss or muscle_gain); all when omitted
    #[arg(long)]
    goal: Option<Goal>,

    /// Number of episodes per goal
    #[arg(long, default_value = "100000")]
    episodes: usize,

    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Models directory override
    #[arg(long)]
    models_dir: Option<PathBuf>,
}

/// Representative profile for a goal population. Training simulates days for
/// a typical member; the learned policy is shared across the population.
fn population_profile(goal: Goal) -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        username: format!("population_{goal}"),
        age: 30,
        gender: Gender::Male,
        height_cm: 180.0,
        weight_kg: 85.0,
        goal,
        fitness_level: FitnessLevel::Intermediate,
        equipment: TrainingEquipment::Gym,
    }
}

fn main() -> Result<()> {
    forma_coach::logging::init_from_env()?;
    let args = TrainArgs::parse();

    let config = CoachConfig::from_env();
    let models_dir = args.models_dir.unwrap_or(config.models_dir);
    let store = AgentStore::new(models_dir);

    // Maintenance is served by the weight-loss bundle, so only two goal
    // populations are trained.
    let goals: Vec<Goal> = match args.goal {
        Some(goal) => vec![goal],
        None => vec![Goal::WeightLoss, Goal::MuscleGain],
    };

    // Four sessions a week: Monday, Tuesday, Thursday, Friday.
    let schedule = WeekSchedule::new([true, true, false, true, true, false, false]);
    let analyzer = KeywordEmotionAnalyzer;
    let training = TrainingConfig {
        episodes: args.episodes,
        seed: args.seed,
        ..TrainingConfig::default()
    };

    for goal in goals {
        info!(goal = %goal, episodes = training.episodes, "training agent");
        let profile = population_profile(goal);
        let env = NutritionEnvironment::new(&profile, schedule, &analyzer)?;
        let agent = train(env, &training);
        let path = store.save(goal, &agent)?;
        info!(goal = %goal, path = %path.display(), "agent trained and saved");
    }

    Ok(())
}
