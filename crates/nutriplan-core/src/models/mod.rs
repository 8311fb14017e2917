// ABOUTME: Domain models for nutrition targets, recipes, inventory, and daily meal plans
// ABOUTME: Re-exports the model types so callers can import from `nutriplan_core::models`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

//! # Domain Models
//!
//! Plain data types shared by the planning engine, the repositories that feed
//! it, and the front ends that render its output. Every type is serde-enabled.

/// Nutrition goals and their formula parameters
pub mod goal;
/// Pantry items and the normalized name snapshot
pub mod inventory;
/// Meal slots, suggestions, and daily plans
pub mod meal_plan;
/// Nutrition value bundles and daily targets
pub mod nutrition;
/// Profiles, BMI, activity descriptions
pub mod profile;
/// Recipes, ingredients, and planning candidates
pub mod recipe;

pub use goal::{
    describe_calorie_adjustment, describe_goal_duration, CalorieAdjustment, Goal, GoalProfile,
    MacroSplit,
};
pub use inventory::{normalize_name, InventoryItem, InventorySnapshot};
pub use meal_plan::{
    DailyMacroSummary, DailyMealPlan, MealSlot, MealSuggestion, PlanStatus, RecipeRef,
    SuggestionStatus,
};
pub use nutrition::{MacroTargets, NutritionFacts};
pub use profile::{
    calculate_bmi, describe_activity_level, BmiCategory, Gender, Profile, ProfileId,
};
pub use recipe::{IngredientList, Recipe, RecipeCandidate, RecipeId, RecipeIngredient};
