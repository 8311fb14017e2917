// ABOUTME: Daily macro target calculation from biometrics and a nutrition goal
// ABOUTME: Mifflin-St Jeor BMR, TDEE, goal calorie adjustment, and protein/fat/carb split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

//! Macro Target Calculator
//!
//! Profile -> BMR -> TDEE -> goal-adjusted calories -> protein, fat, carbohydrate grams.
//!
//! Missing biometrics (zero or non-finite) are replaced with configured defaults
//! before any formula runs, so every function here is total.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use nutriplan_core::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use nutriplan_core::models::{
    calculate_bmi, describe_activity_level, describe_calorie_adjustment, describe_goal_duration,
    BmiCategory, Gender, Goal, MacroSplit, MacroTargets, Profile, ProfileId,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{BmrConfig, NutritionConfig, ProfileDefaultsConfig};

/// Biometrics after default substitution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedBiometrics {
    /// Age in years
    pub age: u32,
    /// Weight in kg
    pub weight_kg: f64,
    /// Height in cm
    pub height_cm: f64,
    /// Activity multiplier
    pub activity_level: f64,
    /// Goal duration in weeks
    pub goal_duration_weeks: u32,
}

fn usable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Replace zero or non-finite profile fields with defaults
#[must_use]
pub fn resolve_biometrics(profile: &Profile, defaults: &ProfileDefaultsConfig) -> ResolvedBiometrics {
    let resolved = ResolvedBiometrics {
        age: if profile.age > 0 {
            profile.age
        } else {
            defaults.age
        },
        weight_kg: if usable(profile.weight_kg) {
            profile.weight_kg
        } else {
            defaults.weight_kg
        },
        height_cm: if usable(profile.height_cm) {
            profile.height_cm
        } else {
            defaults.height_cm
        },
        activity_level: if usable(profile.activity_level) {
            profile.activity_level
        } else {
            defaults.activity_level
        },
        goal_duration_weeks: if profile.goal_duration_weeks > 0 {
            profile.goal_duration_weeks
        } else {
            defaults.goal_duration_weeks
        },
    };

    log_substitutions(profile, &resolved);
    resolved
}

fn log_substitutions(profile: &Profile, resolved: &ResolvedBiometrics) {
    let substituted = [
        ("age", profile.age == 0),
        ("weight_kg", !usable(profile.weight_kg)),
        ("height_cm", !usable(profile.height_cm)),
        ("activity_level", !usable(profile.activity_level)),
        ("goal_duration_weeks", profile.goal_duration_weeks == 0),
    ];
    for (field, replaced) in substituted {
        if replaced {
            debug!(
                profile.id = %profile.id,
                field,
                resolved = ?resolved,
                "Substituted default for missing profile field"
            );
        }
    }
}

fn gender_constant(gender: Gender, config: &BmrConfig) -> f64 {
    match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
        Gender::Other => config.msj_other_constant,
    }
}

fn bmr_from(biometrics: &ResolvedBiometrics, gender: Gender, config: &BmrConfig) -> f64 {
    let weight_component = config.msj_weight_coef * biometrics.weight_kg;
    let height_component = config.msj_height_coef * biometrics.height_cm;
    let age_component = config.msj_age_coef * f64::from(biometrics.age);
    weight_component + height_component + age_component + gender_constant(gender, config)
}

/// Basal Metabolic Rate (kcal/day), Mifflin-St Jeor
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Male: +5
/// - Female: -161
/// - Other: -78
///
/// No clamping or rounding is applied.
#[must_use]
pub fn calculate_bmr(profile: &Profile, config: &NutritionConfig) -> f64 {
    let biometrics = resolve_biometrics(profile, &config.profile_defaults);
    bmr_from(&biometrics, profile.gender, &config.bmr)
}

/// Total Daily Energy Expenditure: BMR x activity multiplier
#[must_use]
pub fn calculate_tdee(profile: &Profile, config: &NutritionConfig) -> f64 {
    let biometrics = resolve_biometrics(profile, &config.profile_defaults);
    bmr_from(&biometrics, profile.gender, &config.bmr) * biometrics.activity_level
}

fn targets_from(
    goal: Goal,
    biometrics: &ResolvedBiometrics,
    tdee: f64,
    fiber_g: f64,
) -> MacroTargets {
    let goal_profile = goal.profile();
    let calories = tdee * goal_profile.calories.multiplier(biometrics.goal_duration_weeks);
    let protein_g = biometrics.weight_kg * goal_profile.protein_g_per_kg;
    let protein_kcal = protein_g * KCAL_PER_G_PROTEIN;

    let (carbs_g, fat_g) = match goal_profile.split {
        MacroSplit::FatShare { fat_fraction } => {
            let fat_g = calories * fat_fraction / KCAL_PER_G_FAT;
            let carbs_g = (calories - protein_kcal - fat_g * KCAL_PER_G_FAT) / KCAL_PER_G_CARBS;
            (carbs_g, fat_g)
        }
        MacroSplit::CarbShare { carb_fraction } => {
            let carbs_g = calories * carb_fraction / KCAL_PER_G_CARBS;
            let fat_g = (calories - protein_kcal - carbs_g * KCAL_PER_G_CARBS) / KCAL_PER_G_FAT;
            (carbs_g, fat_g)
        }
        MacroSplit::FatShareFixedCarbs {
            fat_fraction,
            carbs_g_per_kg,
        } => (
            biometrics.weight_kg * carbs_g_per_kg,
            calories * fat_fraction / KCAL_PER_G_FAT,
        ),
    };

    MacroTargets {
        calories,
        protein_g,
        carbs_g,
        fat_g,
        fiber_g,
    }
}

/// Goal-adjusted macro targets straight from the formulas
///
/// Remainder terms can be negative for extreme inputs; use
/// [`compute_macro_targets`] for values safe to store.
#[must_use]
pub fn calculate_macro_targets(profile: &Profile, config: &NutritionConfig) -> MacroTargets {
    let biometrics = resolve_biometrics(profile, &config.profile_defaults);
    let tdee = bmr_from(&biometrics, profile.gender, &config.bmr) * biometrics.activity_level;
    targets_from(profile.goal, &biometrics, tdee, config.targets.fiber_g)
}

/// Macro targets with every value floored at zero
#[must_use]
pub fn compute_macro_targets(profile: &Profile, config: &NutritionConfig) -> MacroTargets {
    let raw = calculate_macro_targets(profile, config);
    let clamped = raw.clamped();
    if clamped != raw {
        debug!(
            profile.id = %profile.id,
            raw = ?raw,
            "Clamped negative macro remainder to zero"
        );
    }
    clamped
}

/// Targets a plan should be built against
///
/// Stored targets win when they carry a calorie value; otherwise they are computed.
#[must_use]
pub fn daily_targets(profile: &Profile, config: &NutritionConfig) -> MacroTargets {
    if profile.targets.is_unset() {
        compute_macro_targets(profile, config)
    } else {
        profile.targets
    }
}

/// Everything shown beside computed targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetBreakdown {
    /// Profile the numbers belong to
    pub profile_id: ProfileId,
    /// Goal used
    pub goal: Goal,
    /// Biometrics after default substitution
    pub biometrics: ResolvedBiometrics,
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Clamped targets
    pub targets: MacroTargets,
    /// Body mass index, if computable
    pub bmi: Option<f64>,
    /// BMI category
    pub bmi_category: Option<BmiCategory>,
    /// Activity level in words
    pub activity_description: String,
    /// Goal in words
    pub goal_description: String,
    /// Duration in words
    pub duration_description: String,
    /// Calorie change in words
    pub calorie_adjustment: String,
}

/// Compute targets together with the intermediate values and descriptions
#[must_use]
pub fn explain_targets(profile: &Profile, config: &NutritionConfig) -> TargetBreakdown {
    let biometrics = resolve_biometrics(profile, &config.profile_defaults);
    let bmr = bmr_from(&biometrics, profile.gender, &config.bmr);
    let tdee = bmr * biometrics.activity_level;
    let targets =
        targets_from(profile.goal, &biometrics, tdee, config.targets.fiber_g).clamped();
    let bmi = calculate_bmi(biometrics.weight_kg, biometrics.height_cm);

    TargetBreakdown {
        profile_id: profile.id,
        goal: profile.goal,
        biometrics,
        bmr,
        tdee,
        targets,
        bmi,
        bmi_category: bmi.map(BmiCategory::from_bmi),
        activity_description: describe_activity_level(biometrics.activity_level).to_owned(),
        goal_description: profile.goal.description().to_owned(),
        duration_description: describe_goal_duration(biometrics.goal_duration_weeks),
        calorie_adjustment: describe_calorie_adjustment(
            profile.goal,
            biometrics.goal_duration_weeks,
        ),
    }
}
