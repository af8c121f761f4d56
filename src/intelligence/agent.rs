// ABOUTME: Tabular Q-learning agent with epsilon-greedy action selection
// ABOUTME: One-step TD updates with multiplicative epsilon decay toward a floor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::{MealState, MealTier, QTable, ACTION_COUNT};

/// Learning hyperparameters persisted alongside the Q-table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hyperparameters {
    /// Step size of the TD update (alpha)
    pub learning_rate: f64,
    /// Future-return discount (gamma)
    pub discount: f64,
    /// Current exploration probability (epsilon)
    pub epsilon: f64,
    /// Multiplicative epsilon decay applied after each update
    pub epsilon_decay: f64,
    /// Exploration floor; epsilon never drops below this during training
    pub epsilon_min: f64,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            discount: 0.9,
            epsilon: 1.0,
            epsilon_decay: 0.999_95,
            epsilon_min: 0.01,
        }
    }
}

fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}

/// Tabular Q-learning agent over the meal-recommender state space.
///
/// During training it selects actions epsilon-greedily and updates the table
/// with the standard one-step temporal-difference rule. At serving time
/// exploration is disabled and selection is pure greedy.
#[derive(Debug, Serialize, Deserialize)]
pub struct QLearningAgent {
    q_table: QTable,
    hyper: Hyperparameters,
    #[serde(skip, default = "entropy_rng")]
    rng: StdRng,
}

impl QLearningAgent {
    /// Fresh agent with a zeroed table and default hyperparameters
    #[must_use]
    pub fn new() -> Self {
        Self::with_hyperparameters(Hyperparameters::default())
    }

    /// Fresh agent with explicit hyperparameters
    #[must_use]
    pub fn with_hyperparameters(hyper: Hyperparameters) -> Self {
        Self {
            q_table: QTable::zeroed(),
            hyper,
            rng: entropy_rng(),
        }
    }

    /// Rebuild an agent from a table and hyperparameters (used by tests and
    /// by deserialization validation)
    #[must_use]
    pub fn from_parts(q_table: QTable, hyper: Hyperparameters) -> Self {
        Self {
            q_table,
            hyper,
            rng: entropy_rng(),
        }
    }

    /// Replace the internal RNG with a seeded one for reproducible runs
    #[must_use]
    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Current exploration probability
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.hyper.epsilon
    }

    /// Learning hyperparameters
    #[must_use]
    pub fn hyperparameters(&self) -> &Hyperparameters {
        &self.hyper
    }

    /// The value table
    #[must_use]
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Force pure-greedy selection; the serving path never explores
    pub fn disable_exploration(&mut self) {
        self.hyper.epsilon = 0.0;
    }

    /// Epsilon-greedy action selection: with probability epsilon a uniformly
    /// random tier, otherwise the greedy choice
    pub fn choose_action(&mut self, state: MealState) -> MealTier {
        if self.rng.gen::<f64>() < self.hyper.epsilon {
            MealTier::from_index(self.rng.gen_range(0..ACTION_COUNT))
        } else {
            self.best_action(state)
        }
    }

    /// Greedy action for a state; ties resolve to the lowest action index
    #[must_use]
    pub fn best_action(&self, state: MealState) -> MealTier {
        self.q_table.argmax(state)
    }

    /// One-step tabular TD update:
    /// `q[s,a] <- (1-a)*q[s,a] + a*(r + g*max_a' q[s',a'] * (1 - done))`.
    /// Afterwards epsilon decays multiplicatively, floored at `epsilon_min`.
    pub fn learn(
        &mut self,
        state: MealState,
        action: MealTier,
        reward: f64,
        next_state: MealState,
        done: bool,
    ) {
        let old_value = self.q_table.get(state, action);
        let bootstrap = if done {
            0.0
        } else {
            self.q_table.max_value(next_state)
        };
        let target = reward + self.hyper.discount * bootstrap;
        let new_value =
            (1.0 - self.hyper.learning_rate) * old_value + self.hyper.learning_rate * target;
        self.q_table.set(state, action, new_value);

        self.hyper.epsilon =
            (self.hyper.epsilon * self.hyper.epsilon_decay).max(self.hyper.epsilon_min);
    }

    /// Check the loaded table against the declared state space
    ///
    /// # Errors
    ///
    /// Returns a serialization error when the persisted shape drifted.
    pub fn validate(&self) -> forma_core::CoachResult<()> {
        self.q_table.validate_shape()
    }
}

impl Default for QLearningAgent {
    fn default() -> Self {
        Self::new()
    }
}
