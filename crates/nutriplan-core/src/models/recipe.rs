// ABOUTME: Recipe and ingredient models consumed by the meal planner
// ABOUTME: Per-100g nutrition, required ingredients, and candidates paired with their ingredient lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

use std::fmt;

use serde::{Deserialize, Serialize};

use super::nutrition::NutritionFacts;

/// Identifier of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(pub i64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recipe with nutrition per 100 grams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe identifier
    pub id: RecipeId,
    /// Display name
    pub name: String,
    /// Cuisine (free text, informational)
    #[serde(default)]
    pub cuisine: String,
    /// Meal-type hint such as "breakfast" or "snack"
    #[serde(default)]
    pub category: String,
    /// Energy per 100 g
    pub calories_per_100g: u32,
    /// Protein grams per 100 g
    #[serde(default)]
    pub protein_per_100g: f64,
    /// Carbohydrate grams per 100 g
    #[serde(default)]
    pub carbs_per_100g: f64,
    /// Fat grams per 100 g
    #[serde(default)]
    pub fat_per_100g: f64,
    /// Fiber grams per 100 g
    #[serde(default)]
    pub fiber_per_100g: f64,
}

impl Recipe {
    /// Nutrition of a 100 g serving
    #[must_use]
    pub fn per_100g(&self) -> NutritionFacts {
        NutritionFacts {
            calories: f64::from(self.calories_per_100g),
            protein_g: self.protein_per_100g,
            carbs_g: self.carbs_per_100g,
            fat_g: self.fat_per_100g,
            fiber_g: self.fiber_per_100g,
        }
    }
}

/// An ingredient a recipe requires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Owning recipe
    pub recipe_id: RecipeId,
    /// Ingredient name as written in the recipe
    pub ingredient_name: String,
    /// Required amount (not used for matching)
    #[serde(default)]
    pub quantity: f64,
    /// Unit of `quantity`
    #[serde(default)]
    pub unit: String,
}

/// Outcome of looking up a recipe's ingredients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum IngredientList {
    /// Lookup succeeded
    Resolved(Vec<RecipeIngredient>),
    /// Lookup failed; carries the reason
    Unavailable(String),
}

impl IngredientList {
    /// True when the lookup failed
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// A recipe paired with its ingredient lookup, ready for feasibility checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCandidate {
    /// The recipe
    pub recipe: Recipe,
    /// Its ingredients, or why they could not be fetched
    pub ingredients: IngredientList,
}

impl RecipeCandidate {
    /// Candidate with a resolved ingredient list
    #[must_use]
    pub const fn new(recipe: Recipe, ingredients: Vec<RecipeIngredient>) -> Self {
        Self {
            recipe,
            ingredients: IngredientList::Resolved(ingredients),
        }
    }

    /// Candidate whose ingredient lookup failed
    #[must_use]
    pub fn unavailable(recipe: Recipe, reason: impl Into<String>) -> Self {
        Self {
            recipe,
            ingredients: IngredientList::Unavailable(reason.into()),
        }
    }
}
