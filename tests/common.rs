// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging setup plus profile, recipe, and pantry constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutriplan`

use std::env;
use std::sync::{Arc, Once};

use chrono::NaiveDate;
use nutriplan::config::PlannerConfig;
use nutriplan_core::models::{
    Gender, Goal, InventorySnapshot, MacroTargets, Profile, ProfileId, Recipe, RecipeCandidate,
    RecipeId, RecipeIngredient,
};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

pub fn default_config() -> Arc<PlannerConfig> {
    Arc::new(PlannerConfig::default())
}

pub fn plan_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

/// 30-year-old male, 70 kg, 175 cm, moderately active, maintenance
pub fn reference_profile(id: i64) -> Profile {
    Profile {
        id: ProfileId(id),
        name: "Ravi".to_owned(),
        age: 30,
        weight_kg: 70.0,
        height_cm: 175.0,
        gender: Gender::Male,
        activity_level: 1.55,
        goal: Goal::Maintenance,
        goal_duration_weeks: 12,
        targets: MacroTargets::zero(),
    }
}

/// Profile whose stored targets are 2000 kcal
pub fn profile_with_2000_kcal(id: i64) -> Profile {
    reference_profile(id).with_targets(MacroTargets {
        calories: 2000.0,
        protein_g: 112.0,
        carbs_g: 250.0,
        fat_g: 62.0,
        fiber_g: 25.0,
    })
}

pub fn recipe(id: i64, name: &str, category: &str, calories_per_100g: u32) -> Recipe {
    Recipe {
        id: RecipeId(id),
        name: name.to_owned(),
        cuisine: "Indian".to_owned(),
        category: category.to_owned(),
        calories_per_100g,
        protein_per_100g: 8.0,
        carbs_per_100g: 20.0,
        fat_per_100g: 5.0,
        fiber_per_100g: 3.0,
    }
}

pub fn ingredient(recipe_id: i64, name: &str) -> RecipeIngredient {
    RecipeIngredient {
        recipe_id: RecipeId(recipe_id),
        ingredient_name: name.to_owned(),
        quantity: 100.0,
        unit: "g".to_owned(),
    }
}

pub fn candidate(recipe: Recipe, ingredient_names: &[&str]) -> RecipeCandidate {
    let recipe_id = recipe.id.0;
    let ingredients = ingredient_names
        .iter()
        .map(|name| ingredient(recipe_id, name))
        .collect();
    RecipeCandidate::new(recipe, ingredients)
}

pub fn pantry(names: &[&str]) -> InventorySnapshot {
    InventorySnapshot::from_names(names.iter().copied())
}

/// One feasible recipe per slot with no ingredients required
pub fn one_recipe_per_slot() -> Vec<RecipeCandidate> {
    vec![
        candidate(recipe(1, "Poha", "breakfast", 160), &[]),
        candidate(recipe(2, "Rajma Chawal", "lunch", 140), &[]),
        candidate(recipe(3, "Dal Tadka", "dinner", 150), &[]),
        candidate(recipe(4, "Fruit Chaat", "snack", 65), &[]),
    ]
}
