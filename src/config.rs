// ABOUTME: Engine configuration loaded from environment variables
// ABOUTME: Paths for the models directory and the data catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Forma Fitness

use std::env;
use std::path::PathBuf;

/// Filesystem configuration for the coaching engine.
///
/// Environment-driven with local defaults:
///
/// - `FORMA_MODELS_DIR` (default `models`) - trained agent bundles
/// - `FORMA_DATA_DIR` (default `data/processed`) - processed catalogs
/// - `FORMA_RECIPE_CATALOG` (default `<data dir>/recipes.json`)
/// - `FORMA_EXERCISE_CATALOG` (default `<data dir>/exercises.json`)
#[derive(Debug, Clone)]
pub struct CoachConfig {
    /// Directory holding trained agent bundles
    pub models_dir: PathBuf,
    /// Directory holding processed data catalogs
    pub data_dir: PathBuf,
    /// Recipe catalog file
    pub recipe_catalog: PathBuf,
    /// Exercise catalog file
    pub exercise_catalog: PathBuf,
}

impl CoachConfig {
    /// Load configuration from the environment, falling back to local
    /// defaults for anything unset
    #[must_use]
    pub fn from_env() -> Self {
        let models_dir =
            PathBuf::from(env::var("FORMA_MODELS_DIR").unwrap_or_else(|_| "models".into()));
        let data_dir =
            PathBuf::from(env::var("FORMA_DATA_DIR").unwrap_or_else(|_| "data/processed".into()));
        let recipe_catalog = env::var("FORMA_RECIPE_CATALOG")
            .map_or_else(|_| data_dir.join("recipes.json"), PathBuf::from);
        let exercise_catalog = env::var("FORMA_EXERCISE_CATALOG")
            .map_or_else(|_| data_dir.join("exercises.json"), PathBuf::from);
        Self {
            models_dir,
            data_dir,
            recipe_catalog,
            exercise_catalog,
        }
    }
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
