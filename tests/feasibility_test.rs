// ABOUTME: Integration tests for pantry feasibility checks and slot candidate narrowing
// ABOUTME: Covers fuzzy name matching, fail-open planning checks, and strict user-facing checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan::intelligence::{
    assess_availability, candidates_for_slot, check_ingredient_availability, feasible_candidates,
};
use nutriplan_core::constants::placeholders::UNABLE_TO_CHECK_INGREDIENTS;
use nutriplan_core::models::{InventoryItem, InventorySnapshot, MealSlot, RecipeCandidate, RecipeId};

mod common;

#[test]
fn test_all_ingredients_matched_by_substring() {
    common::init_test_logging();
    let candidate = common::candidate(
        common::recipe(1, "Vegetable Poha", "breakfast", 158),
        &["onion", "Flattened Rice", "oil"],
    );
    let inventory = common::pantry(&["Red Onion", "flattened rice", "Mustard Oil"]);

    let report = assess_availability(&candidate, &inventory);
    assert!(report.feasible);
    assert!(report.missing_ingredients.is_empty());
    assert!(!report.lookup_unavailable);
}

#[test]
fn test_pantry_name_inside_ingredient_name_matches() {
    let candidate = common::candidate(
        common::recipe(2, "Salad", "lunch", 60),
        &["extra virgin olive oil"],
    );
    let report = assess_availability(&candidate, &common::pantry(&["olive oil"]));
    assert!(report.feasible);
}

#[test]
fn test_unmatched_ingredient_is_reported() {
    let candidate = common::candidate(
        common::recipe(3, "Paneer Tikka", "dinner", 210),
        &["paneer", "capsicum", "yogurt"],
    );
    let inventory = common::pantry(&["Capsicum", "Greek Yogurt"]);

    let report = assess_availability(&candidate, &inventory);
    assert!(!report.feasible);
    assert_eq!(report.missing_ingredients, vec!["paneer"]);
}

#[test]
fn test_empty_pantry_misses_everything() {
    let candidate = common::candidate(
        common::recipe(4, "Dal", "dinner", 150),
        &["toor dal", "ghee"],
    );
    let report = assess_availability(&candidate, &InventorySnapshot::default());
    assert_eq!(report.missing_ingredients, vec!["toor dal", "ghee"]);
}

#[test]
fn test_recipe_without_ingredients_is_feasible() {
    let candidate = common::candidate(common::recipe(5, "Water", "snack", 0), &[]);
    assert!(assess_availability(&candidate, &InventorySnapshot::default()).feasible);
}

#[test]
fn test_failed_lookup_is_open_for_planning_and_strict_for_users() {
    let candidate = RecipeCandidate::unavailable(
        common::recipe(6, "Khichdi", "dinner", 120),
        "ingredient store timed out",
    );
    let inventory = common::pantry(&["rice"]);

    let planning = assess_availability(&candidate, &inventory);
    assert!(planning.feasible);
    assert!(planning.lookup_unavailable);

    let user_facing = check_ingredient_availability(&candidate, &inventory);
    assert!(!user_facing.feasible);
    assert_eq!(
        user_facing.missing_ingredients,
        vec![UNABLE_TO_CHECK_INGREDIENTS]
    );
}

#[test]
fn test_strict_check_matches_planning_check_when_lookup_succeeds() {
    let candidate = common::candidate(
        common::recipe(7, "Rajma", "lunch", 140),
        &["kidney beans", "tomato"],
    );
    let inventory = common::pantry(&["kidney beans"]);
    assert_eq!(
        check_ingredient_availability(&candidate, &inventory),
        assess_availability(&candidate, &inventory)
    );
}

#[test]
fn test_snapshot_from_items_normalizes_names() {
    let items = vec![
        InventoryItem {
            name: "  Basmati RICE ".to_owned(),
            quantity: 2.0,
            unit: "kg".to_owned(),
            category: "grains".to_owned(),
        },
        InventoryItem {
            name: "   ".to_owned(),
            quantity: 1.0,
            unit: String::new(),
            category: String::new(),
        },
    ];
    let snapshot = InventorySnapshot::from_items(&items);
    assert_eq!(snapshot.names(), ["basmati rice"]);
    assert!(snapshot.has_match("Rice"));
}

#[test]
fn test_slot_candidates_respect_limit_and_order() {
    let pool: Vec<RecipeCandidate> = (1..=5)
        .map(|id| common::candidate(common::recipe(id, "Snack Mix", "snack", 300), &[]))
        .collect();
    let snacks = candidates_for_slot(MealSlot::Snack, &pool, 3);
    let ids: Vec<RecipeId> = snacks.iter().map(|c| c.recipe.id).collect();
    assert_eq!(ids, vec![RecipeId(1), RecipeId(2), RecipeId(3)]);
}

#[test]
fn test_feasible_candidates_preserve_order() {
    let pool = vec![
        common::candidate(common::recipe(1, "A", "lunch", 100), &["rice"]),
        common::candidate(common::recipe(2, "B", "lunch", 100), &["paneer"]),
        common::candidate(common::recipe(3, "C", "lunch", 100), &[]),
    ];
    let refs: Vec<&RecipeCandidate> = pool.iter().collect();
    let feasible = feasible_candidates(&refs, &common::pantry(&["rice"]));
    let ids: Vec<RecipeId> = feasible.iter().map(|c| c.recipe.id).collect();
    assert_eq!(ids, vec![RecipeId(1), RecipeId(3)]);
}
