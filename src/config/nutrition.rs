// ABOUTME: Nutrition configuration for BMR coefficients, profile input defaults, and target defaults
// ABOUTME: Holds Mifflin-St Jeor coefficients and the values substituted for missing biometrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

//! Nutrition Target Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Nutrition target configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Values used when a profile field is zero or not finite
    pub profile_defaults: ProfileDefaultsConfig,
    /// Targets not derived from the goal formulas
    pub targets: TargetDefaultsConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Offset for unspecified gender, midpoint of male and female (-78)
    pub msj_other_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            msj_other_constant: -78.0,
        }
    }
}

/// Substitutes for missing or zero profile fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDefaultsConfig {
    /// Age in years
    pub age: u32,
    /// Weight in kg
    pub weight_kg: f64,
    /// Height in cm
    pub height_cm: f64,
    /// Activity multiplier (lightly active)
    pub activity_level: f64,
    /// Goal duration in weeks
    pub goal_duration_weeks: u32,
}

impl Default for ProfileDefaultsConfig {
    fn default() -> Self {
        Self {
            age: 25,
            weight_kg: 60.0,
            height_cm: 165.0,
            activity_level: 1.4,
            goal_duration_weeks: 12,
        }
    }
}

/// Targets that do not depend on the goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetDefaultsConfig {
    /// Daily fiber target in grams
    pub fiber_g: f64,
}

impl Default for TargetDefaultsConfig {
    fn default() -> Self {
        Self { fiber_g: 25.0 }
    }
}

impl NutritionConfig {
    /// Validate nutrition settings
    ///
    /// # Errors
    ///
    /// Returns an error if a coefficient or default lies outside its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if self.bmr.msj_age_coef > 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient must not be positive",
            ));
        }

        let defaults = &self.profile_defaults;
        if !(1..=120).contains(&defaults.age) {
            return Err(ConfigError::ValueOutOfRange(
                "Default age must be between 1 and 120 years",
            ));
        }
        if !(defaults.weight_kg > 0.0 && defaults.weight_kg <= 300.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Default weight must be between 0 and 300 kg",
            ));
        }
        if !(defaults.height_cm > 0.0 && defaults.height_cm <= 300.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Default height must be between 0 and 300 cm",
            ));
        }
        if !(1.0..=2.5).contains(&defaults.activity_level) {
            return Err(ConfigError::ValueOutOfRange(
                "Default activity level must be between 1.0 and 2.5",
            ));
        }
        if defaults.goal_duration_weeks == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Default goal duration must be at least one week",
            ));
        }

        if !(self.targets.fiber_g >= 0.0 && self.targets.fiber_g.is_finite()) {
            return Err(ConfigError::ValueOutOfRange(
                "Fiber target must be a non-negative number",
            ));
        }

        Ok(())
    }
}
