// ABOUTME: Planner configuration assembled from defaults, environment overrides, and validation
// ABOUTME: PlannerConfig is passed explicitly to the engine; there is no global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

//! Configuration module for nutriplan
//!
//! - **nutrition**: BMR coefficients, profile input defaults, fiber target
//! - **planner**: meal split, candidate limits, scoring constants, portions
//!
//! Every setting has a default. `PlannerConfig::load` applies `NUTRIPLAN_*`
//! environment overrides on top and validates the result.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration error type
pub mod error;
/// Nutrition target configuration
pub mod nutrition;
/// Meal planner configuration
pub mod planner;

pub use error::ConfigError;
pub use nutrition::{BmrConfig, NutritionConfig, ProfileDefaultsConfig, TargetDefaultsConfig};
pub use planner::{
    CandidateConfig, MacroBand, MealDistributionConfig, MealPlannerConfig, PortionConfig,
    ScoringConfig,
};

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Nutrition target settings
    pub nutrition: NutritionConfig,
    /// Meal planner settings
    pub planner: MealPlannerConfig,
}

impl PlannerConfig {
    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            candidates_per_slot = config.planner.candidates.per_slot_limit,
            fiber_target_g = config.nutrition.targets.fiber_g,
            "Planner configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.planner.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Profile input defaults
        let defaults = &mut self.nutrition.profile_defaults;
        Self::apply_env_var("NUTRIPLAN_DEFAULT_AGE", &mut defaults.age)?;
        Self::apply_env_var("NUTRIPLAN_DEFAULT_WEIGHT_KG", &mut defaults.weight_kg)?;
        Self::apply_env_var("NUTRIPLAN_DEFAULT_HEIGHT_CM", &mut defaults.height_cm)?;
        Self::apply_env_var(
            "NUTRIPLAN_DEFAULT_ACTIVITY_LEVEL",
            &mut defaults.activity_level,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_DEFAULT_GOAL_WEEKS",
            &mut defaults.goal_duration_weeks,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_FIBER_TARGET_G",
            &mut self.nutrition.targets.fiber_g,
        )?;

        // Meal split
        let distribution = &mut self.planner.distribution;
        Self::apply_env_var("NUTRIPLAN_SHARE_BREAKFAST", &mut distribution.breakfast)?;
        Self::apply_env_var("NUTRIPLAN_SHARE_LUNCH", &mut distribution.lunch)?;
        Self::apply_env_var("NUTRIPLAN_SHARE_DINNER", &mut distribution.dinner)?;
        Self::apply_env_var("NUTRIPLAN_SHARE_SNACK", &mut distribution.snack)?;

        // Candidates, scoring, portions
        Self::apply_env_var(
            "NUTRIPLAN_CANDIDATES_PER_SLOT",
            &mut self.planner.candidates.per_slot_limit,
        )?;
        let scoring = &mut self.planner.scoring;
        Self::apply_env_var("NUTRIPLAN_PROTEIN_BONUS", &mut scoring.protein_bonus)?;
        Self::apply_env_var("NUTRIPLAN_FIBER_BONUS", &mut scoring.fiber_bonus)?;
        Self::apply_env_var(
            "NUTRIPLAN_MACRO_BALANCE_WEIGHT",
            &mut scoring.macro_balance_weight,
        )?;
        Self::apply_env_var(
            "NUTRIPLAN_DEFAULT_PORTION_G",
            &mut self.planner.portion.default_portion_grams,
        )?;

        Ok(self)
    }
}
