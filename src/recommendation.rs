// ABOUTME: Meal recommendation serving path over trained per-goal agents
// ABOUTME: Greedy tier selection mapped onto calorie-filtered recipe samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

//! Meal recommendation service.
//!
//! Serving is a single request-response computation: reconstruct today's
//! state from the live user record, pick the greedy meal tier (exploration is
//! disabled the moment agents are loaded, and the tables are never mutated
//! afterwards), then sample recipes from that tier's calorie range. Failures
//! surface as structured, serializable errors so callers can degrade
//! gracefully instead of crashing.

use forma_core::{CoachErrorCode, CoachResult, ErrorPayload, Goal, UserProfile};
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::emotion::{EmotionAnalyzer, EmotionBucket};
use crate::intelligence::{AgentStore, CaloricStatus, MealState, MealTier, QLearningAgent};
use crate::recipes::RecipeCatalog;

/// Maximum number of recipes returned per request
pub const MAX_SUGGESTIONS: usize = 3;

/// One suggested meal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealRecommendation {
    /// Recipe name
    pub name: String,
    /// Energy content in kcal
    pub calories: u32,
    /// Reference link for the full recipe
    pub link: String,
}

/// Structured serving-path failure; serializable so the caller can show a
/// user-facing message instead of an exception trace
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum RecommendationError {
    /// No trained agent covers the user's goal
    #[error("no trained agent available for goal {goal}")]
    AgentNotFound {
        /// The goal that had no bundle
        goal: Goal,
    },
    /// The chosen calorie tier has no recipes in the catalog
    #[error("no recipes match the {tier} calorie tier")]
    NoMatchingRecipes {
        /// The tier that came up empty
        tier: MealTier,
    },
}

impl RecommendationError {
    /// Convert into the engine-wide structured payload
    #[must_use]
    pub fn payload(&self) -> ErrorPayload {
        let code = match self {
            Self::AgentNotFound { .. } => CoachErrorCode::ResourceNotFound,
            Self::NoMatchingRecipes { .. } => CoachErrorCode::ResourceUnavailable,
        };
        ErrorPayload {
            code,
            message: self.to_string(),
        }
    }
}

/// Everything the serving path needs to know about one request
#[derive(Debug, Clone)]
pub struct RecommendationRequest<'a> {
    /// The live user record
    pub profile: &'a UserProfile,
    /// Calendar day within the weekly schedule (0-6)
    pub day_of_week: usize,
    /// Calories the user has already consumed today
    pub calories_consumed: f64,
    /// Optional mood text; absent means a neutral signal
    pub mood_text: Option<&'a str>,
}

/// Loaded recommendation service: read-only per-goal agents plus the recipe
/// catalog. Construction is an explicit initialization step; a missing model
/// or catalog is a load error, never a silent empty fallback.
#[derive(Debug)]
pub struct MealRecommender {
    agents: HashMap<Goal, QLearningAgent>,
    catalog: RecipeCatalog,
}

impl MealRecommender {
    /// Load the trained bundles and the recipe catalog.
    ///
    /// Weight-loss and muscle-gain agents are loaded directly; maintenance is
    /// served by the weight-loss table through the store's goal aliasing.
    /// Exploration is disabled on every loaded agent.
    ///
    /// # Errors
    ///
    /// Returns the underlying storage/serialization error when a bundle or
    /// the catalog cannot be loaded.
    pub fn load(store: &AgentStore, catalog_path: &Path) -> CoachResult<Self> {
        let mut agents = HashMap::new();
        for goal in [Goal::WeightLoss, Goal::MuscleGain] {
            let mut bundle = store.load(goal)?;
            bundle.agent.disable_exploration();
            agents.insert(goal, bundle.agent);
        }
        let catalog = RecipeCatalog::load(catalog_path)?;
        Ok(Self { agents, catalog })
    }

    /// Build a service from already-loaded parts (tests, embedded catalogs).
    /// Exploration is disabled on every agent passed in.
    #[must_use]
    pub fn from_parts(agents: HashMap<Goal, QLearningAgent>, catalog: RecipeCatalog) -> Self {
        let mut agents = agents;
        for agent in agents.values_mut() {
            agent.disable_exploration();
        }
        Self { agents, catalog }
    }

    /// Recommend up to [`MAX_SUGGESTIONS`] meals for the user's current state.
    ///
    /// # Errors
    ///
    /// Returns a structured [`RecommendationError`] when no agent covers the
    /// goal or the chosen tier has no recipes.
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        request: &RecommendationRequest<'_>,
        analyzer: &dyn EmotionAnalyzer,
        rng: &mut R,
    ) -> Result<Vec<MealRecommendation>, RecommendationError> {
        let goal = request.profile.goal;
        // Maintenance reuses the weight-loss table in the serving path.
        let serving_goal = match goal {
            Goal::Maintenance => Goal::WeightLoss,
            other => other,
        };
        let agent = self
            .agents
            .get(&serving_goal)
            .ok_or(RecommendationError::AgentNotFound { goal })?;

        let emotion = request
            .mood_text
            .map_or(EmotionBucket::Neutral, |text| analyzer.analyze(text).bucket());
        let state = MealState {
            day_of_week: request.day_of_week % crate::intelligence::DAYS_PER_WEEK,
            goal,
            caloric_status: serving_caloric_status(request.calories_consumed),
            emotion,
        };

        let tier = agent.best_action(state);
        debug!(goal = %goal, tier = %tier, day = state.day_of_week, "selected meal tier");

        let picks = self.catalog.sample_in_tier(tier, MAX_SUGGESTIONS, rng);
        if picks.is_empty() {
            return Err(RecommendationError::NoMatchingRecipes { tier });
        }
        Ok(picks
            .into_iter()
            .map(|r| MealRecommendation {
                name: r.name,
                calories: r.calories as u32,
                link: r.url,
            })
            .collect())
    }
}

/// Serving-side caloric bucketing against fixed thresholds: below 500 kcal
/// counts as under, below 1500 as within, anything above as over
#[must_use]
pub fn serving_caloric_status(calories_consumed: f64) -> CaloricStatus {
    if calories_consumed < 500.0 {
        CaloricStatus::Under
    } else if calories_consumed < 1500.0 {
        CaloricStatus::Within
    } else {
        CaloricStatus::Over
    }
}
