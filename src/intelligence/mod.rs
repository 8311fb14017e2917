// ABOUTME: Planning engine: macro targets, meal split, feasibility, scoring, portions, assembly
// ABOUTME: Pure computation over snapshots; persistence and fetching live in services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

//! # Intelligence Module
//!
//! Nutrition targets and meal recommendations. Every function here works on
//! values already loaded into memory and is deterministic for equal inputs.

/// Planning error type
pub mod error;
/// Pantry feasibility and slot candidate selection
pub mod feasibility;
/// BMR, TDEE, and macro target calculation
pub mod macro_targets;
/// Daily target split across meal slots
pub mod meal_distribution;
/// Daily plan assembly
pub mod meal_planner;
/// Portion sizing
pub mod portion;
/// Recipe scoring and selection
pub mod recipe_scorer;

pub use error::PlanningError;
pub use feasibility::{
    assess_availability, candidates_for_slot, check_ingredient_availability, feasible_candidates,
    matches_slot, FeasibilityReport,
};
pub use macro_targets::{
    calculate_bmr, calculate_macro_targets, calculate_tdee, compute_macro_targets, daily_targets,
    explain_targets, resolve_biometrics, ResolvedBiometrics, TargetBreakdown,
};
pub use meal_distribution::{slot_target, slot_targets, SlotTarget};
pub use meal_planner::{MealPlanner, RecipePool};
pub use portion::{scale_nutrition, size_portion, Portion};
pub use recipe_scorer::{macro_balance, score_recipe, select_best, RecipeScore};
