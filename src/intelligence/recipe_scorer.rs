// ABOUTME: Scores recipes against a slot calorie target and a macro balance heuristic
// ABOUTME: Picks the highest score deterministically, first candidate wins ties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

//! Recipe Scorer
//!
//! ```text
//! score = scale / (1 + |kcal_per_100g - target|)
//!       + protein_bonus   (protein_per_100g > threshold)
//!       + fiber_bonus     (fiber_per_100g > threshold)
//!       + weight * macro_balance
//! ```
//!
//! The calorie term compares energy per 100 g with the slot target as given.
//! Portion sizing later closes the gap, so the term mostly favours energy-dense
//! recipes for large slots.

use nutriplan_core::constants::energy::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use nutriplan_core::models::{Recipe, RecipeCandidate};
use serde::{Deserialize, Serialize};

use crate::config::{MacroBand, ScoringConfig};

/// Score of one candidate with its components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeScore {
    /// Calorie closeness term
    pub calorie_closeness: f64,
    /// Protein bonus earned
    pub protein_bonus: f64,
    /// Fiber bonus earned
    pub fiber_bonus: f64,
    /// Macro balance in [0, 1]
    pub macro_balance: f64,
    /// Weighted sum of all terms
    pub total: f64,
}

fn band_score(fraction: f64, band: &MacroBand, config: &ScoringConfig) -> f64 {
    if (band.ideal_min..=band.ideal_max).contains(&fraction) {
        config.ideal_score
    } else if (band.tolerance_min..=band.tolerance_max).contains(&fraction) {
        config.tolerance_score
    } else {
        config.outside_score
    }
}

/// Average band score of the protein, carbohydrate, and fat shares of calories
///
/// Zero when the recipe has no calories or no macro calories.
#[must_use]
pub fn macro_balance(recipe: &Recipe, config: &ScoringConfig) -> f64 {
    let protein_kcal = recipe.protein_per_100g * KCAL_PER_G_PROTEIN;
    let carbs_kcal = recipe.carbs_per_100g * KCAL_PER_G_CARBS;
    let fat_kcal = recipe.fat_per_100g * KCAL_PER_G_FAT;
    let total_kcal = protein_kcal + carbs_kcal + fat_kcal;

    if recipe.calories_per_100g == 0 || total_kcal <= 0.0 {
        return 0.0;
    }

    let sub_scores = [
        band_score(protein_kcal / total_kcal, &config.protein_band, config),
        band_score(carbs_kcal / total_kcal, &config.carbs_band, config),
        band_score(fat_kcal / total_kcal, &config.fat_band, config),
    ];
    sub_scores.iter().sum::<f64>() / 3.0
}

/// Score a recipe for a slot calorie target
#[must_use]
pub fn score_recipe(recipe: &Recipe, target_calories: f64, config: &ScoringConfig) -> RecipeScore {
    let calorie_gap = (f64::from(recipe.calories_per_100g) - target_calories).abs();
    let calorie_closeness = config.calorie_closeness_scale / (1.0 + calorie_gap);
    let protein_bonus = if recipe.protein_per_100g > config.protein_bonus_threshold_g {
        config.protein_bonus
    } else {
        0.0
    };
    let fiber_bonus = if recipe.fiber_per_100g > config.fiber_bonus_threshold_g {
        config.fiber_bonus
    } else {
        0.0
    };
    let macro_balance = macro_balance(recipe, config);

    RecipeScore {
        calorie_closeness,
        protein_bonus,
        fiber_bonus,
        macro_balance,
        total: config.macro_balance_weight.mul_add(
            macro_balance,
            calorie_closeness + protein_bonus + fiber_bonus,
        ),
    }
}

/// Highest scoring candidate; the earliest one wins ties
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn select_best<'a>(
    candidates: &[&'a RecipeCandidate],
    target_calories: f64,
    config: &ScoringConfig,
) -> Option<(&'a RecipeCandidate, RecipeScore)> {
    let mut best: Option<(&'a RecipeCandidate, RecipeScore)> = None;
    for &candidate in candidates {
        let score = score_recipe(&candidate.recipe, target_calories, config);
        let better = best
            .as_ref()
            .is_none_or(|(_, best_score)| score.total > best_score.total);
        if better {
            best = Some((candidate, score));
        }
    }
    best
}
