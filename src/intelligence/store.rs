// ABOUTME: Persistence for trained per-goal agent bundles
// ABOUTME: JSON files under a models directory, one bundle per training goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

use chrono::{DateTime, Utc};
use forma_core::{CoachError, CoachResult, Goal};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::QLearningAgent;

/// A trained agent together with its provenance, as persisted to disk
#[derive(Debug, Serialize, Deserialize)]
pub struct AgentBundle {
    /// Goal population this agent was trained for
    pub goal: Goal,
    /// When the training run finished
    pub trained_at: DateTime<Utc>,
    /// The trained agent (Q-table plus hyperparameters)
    pub agent: QLearningAgent,
}

/// Durable storage for trained agents, one JSON bundle per goal
#[derive(Debug, Clone)]
pub struct AgentStore {
    models_dir: PathBuf,
}

impl AgentStore {
    /// Store rooted at a models directory
    pub fn new(models_dir: impl Into<PathBuf>) -> Self {
        Self {
            models_dir: models_dir.into(),
        }
    }

    /// Path of the bundle for a goal
    #[must_use]
    pub fn path_for(&self, goal: Goal) -> PathBuf {
        self.models_dir.join(format!("meal_agent_{goal}.json"))
    }

    /// Persist a trained agent for a goal, creating the models directory if
    /// needed. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the directory or file cannot be written.
    pub fn save(&self, goal: Goal, agent: &QLearningAgent) -> CoachResult<PathBuf> {
        fs::create_dir_all(&self.models_dir).map_err(|e| {
            CoachError::storage(format!(
                "cannot create models directory {}: {e}",
                self.models_dir.display()
            ))
        })?;

        let bundle = AgentBundle {
            goal,
            trained_at: Utc::now(),
            agent: QLearningAgent::from_parts(
                agent.q_table().clone(),
                agent.hyperparameters().clone(),
            ),
        };
        let path = self.path_for(goal);
        let json = serde_json::to_string(&bundle)?;
        fs::write(&path, json)
            .map_err(|e| CoachError::storage(format!("cannot write {}: {e}", path.display())))?;
        info!(goal = %goal, path = %path.display(), "saved agent bundle");
        Ok(path)
    }

    /// Load the bundle trained for exactly this goal.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the bundle file is missing, a
    /// serialization error when it is corrupt or its table shape drifted.
    pub fn load(&self, goal: Goal) -> CoachResult<AgentBundle> {
        let path = self.path_for(goal);
        Self::load_path(&path)
    }

    /// Load the bundle serving a goal.
    ///
    /// The maintenance goal has no dedicated agent: it is deliberately
    /// aliased to the weight-loss bundle until a maintenance-specific model
    /// exists. The returned bundle still reports the goal it was trained for.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AgentStore::load`], for the aliased goal.
    pub fn load_for_goal(&self, goal: Goal) -> CoachResult<AgentBundle> {
        let effective = match goal {
            Goal::Maintenance => Goal::WeightLoss,
            other => other,
        };
        if effective != goal {
            debug!(requested = %goal, served_by = %effective, "goal aliased to shared bundle");
        }
        self.load(effective)
    }

    fn load_path(path: &Path) -> CoachResult<AgentBundle> {
        let json = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CoachError::not_found(format!("no agent bundle at {}", path.display()))
            } else {
                CoachError::storage(format!("cannot read {}: {e}", path.display()))
            }
        })?;
        let bundle: AgentBundle = serde_json::from_str(&json)?;
        bundle.agent.validate()?;
        Ok(bundle)
    }
}
