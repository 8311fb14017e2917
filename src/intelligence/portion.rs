// ABOUTME: Portion sizing: grams of a recipe that meet a calorie target, and the scaled nutrition
// ABOUTME: Linear scaling of per-100g values; recipes without calorie data get a default portion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

use nutriplan_core::models::{NutritionFacts, Recipe};
use serde::{Deserialize, Serialize};

use super::error::PlanningError;
use crate::config::PortionConfig;

/// A sized portion of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Portion {
    /// Grams to serve
    pub grams: f64,
    /// Nutrition of those grams
    pub nutrition: NutritionFacts,
}

/// Scale per-100g nutrition to `grams`
#[must_use]
pub fn scale_nutrition(per_100g: &NutritionFacts, grams: f64) -> NutritionFacts {
    per_100g.scaled(grams / 100.0)
}

fn check_recipe(recipe: &Recipe) -> Result<(), PlanningError> {
    let fields = [
        ("protein", recipe.protein_per_100g),
        ("carbs", recipe.carbs_per_100g),
        ("fat", recipe.fat_per_100g),
        ("fiber", recipe.fiber_per_100g),
    ];
    match fields
        .iter()
        .find(|(_, value)| !(value.is_finite() && *value >= 0.0))
    {
        Some(&(field, _)) => Err(PlanningError::InvalidNutrition {
            recipe: recipe.id,
            field,
        }),
        None => Ok(()),
    }
}

/// Size a portion of `recipe` for `target_calories`
///
/// `grams = target / kcal_per_100g x 100`, or the configured default when the
/// recipe has no calorie data.
///
/// # Errors
///
/// Returns an error if the target is negative or not finite, or the recipe
/// carries negative or non-finite nutrition values
pub fn size_portion(
    recipe: &Recipe,
    target_calories: f64,
    config: &PortionConfig,
) -> Result<Portion, PlanningError> {
    if !(target_calories.is_finite() && target_calories >= 0.0) {
        return Err(PlanningError::InvalidCalorieTarget(target_calories));
    }
    check_recipe(recipe)?;

    let grams = if recipe.calories_per_100g > 0 {
        target_calories / f64::from(recipe.calories_per_100g) * 100.0
    } else {
        config.default_portion_grams
    };

    Ok(Portion {
        grams,
        nutrition: scale_nutrition(&recipe.per_100g(), grams),
    })
}

#[cfg(test)]
mod tests {
    use nutriplan_core::models::RecipeId;

    use super::*;

    fn upma() -> Recipe {
        Recipe {
            id: RecipeId(4),
            name: "Upma".to_owned(),
            cuisine: "South Indian".to_owned(),
            category: "breakfast".to_owned(),
            calories_per_100g: 200,
            protein_per_100g: 5.0,
            carbs_per_100g: 30.0,
            fat_per_100g: 6.0,
            fiber_per_100g: 3.0,
        }
    }

    #[test]
    fn test_portion_meets_target() {
        let portion = size_portion(&upma(), 500.0, &PortionConfig::default()).unwrap();
        assert!((portion.grams - 250.0).abs() < 1e-9);
        assert!((portion.nutrition.calories - 500.0).abs() < 1e-9);
        assert!((portion.nutrition.protein_g - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_calorie_recipe_gets_default_portion() {
        let water = Recipe {
            calories_per_100g: 0,
            ..upma()
        };
        let portion = size_portion(&water, 500.0, &PortionConfig::default()).unwrap();
        assert!((portion.grams - 100.0).abs() < f64::EPSILON);
        assert!(portion.nutrition.calories.abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_inputs_fail() {
        let config = PortionConfig::default();
        assert_eq!(
            size_portion(&upma(), -1.0, &config),
            Err(PlanningError::InvalidCalorieTarget(-1.0))
        );
        assert!(size_portion(&upma(), f64::INFINITY, &config).is_err());
        let broken = Recipe {
            fat_per_100g: f64::NAN,
            ..upma()
        };
        assert_eq!(
            size_portion(&broken, 500.0, &config),
            Err(PlanningError::InvalidNutrition {
                recipe: RecipeId(4),
                field: "fat"
            })
        );
    }
}
