// ABOUTME: Recipe catalog loading and calorie-tier filtering
// ABOUTME: JSON-backed catalog of name/calories/url rows for meal suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

//! Recipe catalog.
//!
//! The catalog is a local JSON artifact produced by the ingestion pipeline (a
//! collaborator). Rows missing a calorie count or a link are dropped at load,
//! mirroring the pipeline's pre-filtering contract.

use forma_core::{CoachError, CoachResult};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::intelligence::MealTier;

/// One recipe the recommender can suggest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name
    pub name: String,
    /// Energy content in kcal
    pub calories: f64,
    /// Reference link for the full recipe
    pub url: String,
}

/// Raw catalog row as produced by the ingestion pipeline; calorie and link
/// fields may be absent
#[derive(Debug, Deserialize)]
struct RawRecipe {
    name: String,
    calories: Option<f64>,
    url: Option<String>,
}

/// In-memory recipe catalog with calorie-tier sampling
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Load the catalog from a JSON array, dropping rows without calories or
    /// a link.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the file cannot be read, a serialization
    /// error when it is not a valid catalog, and an unavailable error when no
    /// usable rows remain.
    pub fn load(path: &Path) -> CoachResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            CoachError::storage(format!("cannot read recipe catalog {}: {e}", path.display()))
        })?;
        let raw: Vec<RawRecipe> = serde_json::from_str(&json)?;
        let total = raw.len();

        let recipes: Vec<Recipe> = raw
            .into_iter()
            .filter_map(|r| {
                let calories = r.calories?;
                let url = r.url?;
                Some(Recipe {
                    name: r.name,
                    calories,
                    url,
                })
            })
            .collect();
        debug!(
            kept = recipes.len(),
            dropped = total - recipes.len(),
            "loaded recipe catalog"
        );

        if recipes.is_empty() {
            return Err(CoachError::unavailable(format!(
                "recipe catalog {} has no usable rows",
                path.display()
            )));
        }
        Ok(Self { recipes })
    }

    /// Build a catalog from already-validated recipes (tests, fixtures)
    #[must_use]
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Number of usable recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Up to `n` random recipes whose calorie count falls in the tier's range
    pub fn sample_in_tier<R: Rng + ?Sized>(
        &self,
        tier: MealTier,
        n: usize,
        rng: &mut R,
    ) -> Vec<Recipe> {
        let candidates: Vec<&Recipe> = self
            .recipes
            .iter()
            .filter(|r| tier.matches(r.calories))
            .collect();
        candidates
            .choose_multiple(rng, n.min(candidates.len()))
            .map(|r| (**r).clone())
            .collect()
    }
}
