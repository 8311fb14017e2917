// ABOUTME: Recipe feasibility against a pantry snapshot and per-slot candidate narrowing
// ABOUTME: Fuzzy name matching (equal or substring either way); failed lookups pass unless strict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

//! Recipe Feasibility Filter
//!
//! Matching is deliberately permissive so that "onion" is satisfied by
//! "red onion" and "olive oil" by "oil". Cost is
//! O(candidates x ingredients x pantry names), fine for pantry-sized inputs.

use nutriplan_core::constants::placeholders::UNABLE_TO_CHECK_INGREDIENTS;
use nutriplan_core::models::{
    IngredientList, InventorySnapshot, MealSlot, RecipeCandidate, RecipeIngredient,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Result of checking one recipe against the pantry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeasibilityReport {
    /// Whether the recipe can be cooked from the pantry
    pub feasible: bool,
    /// Ingredients without a pantry match, spelled as in the recipe
    pub missing_ingredients: Vec<String>,
    /// The ingredient lookup itself failed
    pub lookup_unavailable: bool,
}

fn missing_from(ingredients: &[RecipeIngredient], inventory: &InventorySnapshot) -> Vec<String> {
    ingredients
        .iter()
        .filter(|ingredient| !inventory.has_match(&ingredient.ingredient_name))
        .map(|ingredient| ingredient.ingredient_name.trim().to_owned())
        .collect()
}

/// Check a candidate for planning; a failed ingredient lookup counts as feasible
#[must_use]
pub fn assess_availability(
    candidate: &RecipeCandidate,
    inventory: &InventorySnapshot,
) -> FeasibilityReport {
    match &candidate.ingredients {
        IngredientList::Resolved(ingredients) => {
            let missing_ingredients = missing_from(ingredients, inventory);
            FeasibilityReport {
                feasible: missing_ingredients.is_empty(),
                missing_ingredients,
                lookup_unavailable: false,
            }
        }
        IngredientList::Unavailable(reason) => {
            warn!(
                recipe.id = %candidate.recipe.id,
                recipe.name = %candidate.recipe.name,
                reason = %reason,
                "Ingredient lookup failed, treating recipe as feasible"
            );
            FeasibilityReport {
                feasible: true,
                missing_ingredients: Vec::new(),
                lookup_unavailable: true,
            }
        }
    }
}

/// Standalone availability check shown to users; a failed lookup is reported as not available
#[must_use]
pub fn check_ingredient_availability(
    candidate: &RecipeCandidate,
    inventory: &InventorySnapshot,
) -> FeasibilityReport {
    match &candidate.ingredients {
        IngredientList::Resolved(_) => assess_availability(candidate, inventory),
        IngredientList::Unavailable(_) => FeasibilityReport {
            feasible: false,
            missing_ingredients: vec![UNABLE_TO_CHECK_INGREDIENTS.to_owned()],
            lookup_unavailable: true,
        },
    }
}

/// Whether a recipe's category or name points at `slot`
#[must_use]
pub fn matches_slot(candidate: &RecipeCandidate, slot: MealSlot) -> bool {
    let label = slot.label();
    candidate.recipe.category.trim().eq_ignore_ascii_case(label)
        || candidate.recipe.name.to_lowercase().contains(label)
}

/// Candidates for a slot, in input order and truncated to `limit`
///
/// Falls back to the whole pool when nothing matches the slot.
#[must_use]
pub fn candidates_for_slot(
    slot: MealSlot,
    pool: &[RecipeCandidate],
    limit: usize,
) -> Vec<&RecipeCandidate> {
    let matching: Vec<&RecipeCandidate> = pool
        .iter()
        .filter(|candidate| matches_slot(candidate, slot))
        .take(limit)
        .collect();
    if matching.is_empty() {
        debug!(meal.slot = %slot, pool = pool.len(), "No slot match, using full pool");
        pool.iter().take(limit).collect()
    } else {
        matching
    }
}

/// Keep only feasible candidates, preserving order
#[must_use]
pub fn feasible_candidates<'a>(
    candidates: &[&'a RecipeCandidate],
    inventory: &InventorySnapshot,
) -> Vec<&'a RecipeCandidate> {
    candidates
        .iter()
        .copied()
        .filter(|candidate| {
            let report = assess_availability(candidate, inventory);
            if !report.feasible {
                debug!(
                    recipe.id = %candidate.recipe.id,
                    missing = ?report.missing_ingredients,
                    "Recipe not feasible"
                );
            }
            report.feasible
        })
        .collect()
}
