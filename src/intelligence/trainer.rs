// ABOUTME: Offline training driver for the meal recommender agent
// ABOUTME: Runs sequential episodes and reports progress through tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

use tracing::info;

use super::environment::NutritionEnvironment;
use super::QLearningAgent;

/// Training run parameters
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Number of simulated days to run
    pub episodes: usize,
    /// Log a progress line every this many episodes
    pub progress_interval: usize,
    /// Seed for the agent and environment RNGs; entropy when absent
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 100_000,
            progress_interval: 10_000,
            seed: None,
        }
    }
}

/// Run the full training loop against an environment and return the trained
/// agent. Purely sequential: each episode resets the environment, then
/// alternates action selection, environment step, and TD update until the
/// simulated day ends.
#[must_use]
pub fn train(mut env: NutritionEnvironment<'_>, config: &TrainingConfig) -> QLearningAgent {
    let mut agent = QLearningAgent::new();
    if let Some(seed) = config.seed {
        agent = agent.seeded(seed);
        env = env.seeded(seed.wrapping_add(1));
    }

    info!(episodes = config.episodes, "starting training run");
    for episode in 0..config.episodes {
        let mut state = env.reset(episode);
        loop {
            let action = agent.choose_action(state);
            let (next_state, reward, done) = env.step(action);
            agent.learn(state, action, reward, next_state, done);
            state = next_state;
            if done {
                break;
            }
        }

        let completed = episode + 1;
        if config.progress_interval > 0 && completed % config.progress_interval == 0 {
            info!(
                completed,
                total = config.episodes,
                epsilon = agent.epsilon(),
                "training progress"
            );
        }
    }
    info!(episodes = config.episodes, "training finished");
    agent
}
