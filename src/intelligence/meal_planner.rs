// ABOUTME: Daily meal plan assembly: per-slot target, candidates, feasibility, scoring, portion
// ABOUTME: Greedy and deterministic; a failing slot becomes a placeholder without aborting the plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

//! Meal Plan Assembler
//!
//! For breakfast, lunch, dinner, and snack in that order:
//!
//! 1. slot target from the daily targets and the meal split
//! 2. slot candidates from the recipe pool
//! 3. feasibility against the pantry snapshot
//! 4. best score
//! 5. portion sized to the slot calories
//!
//! The planner only works on snapshots handed to it; fetching them is the
//! caller's job (see `services::meal_plans`).

use std::sync::Arc;

use chrono::NaiveDate;
use nutriplan_core::models::{
    DailyMealPlan, InventorySnapshot, MacroTargets, MealSlot, MealSuggestion, Profile,
    RecipeCandidate, RecipeRef, SuggestionStatus,
};
use tracing::{debug, warn};

use super::error::PlanningError;
use super::feasibility::{assess_availability, candidates_for_slot, feasible_candidates};
use super::macro_targets::daily_targets;
use super::meal_distribution::{slot_target, SlotTarget};
use super::portion::size_portion;
use super::recipe_scorer::select_best;
use crate::config::PlannerConfig;

/// Recipe candidates shared by all slots, plus slots whose candidates could not be fetched
#[derive(Debug, Clone, Default)]
pub struct RecipePool {
    candidates: Vec<RecipeCandidate>,
    unavailable: Vec<(MealSlot, String)>,
}

impl RecipePool {
    /// Pool over `candidates`
    #[must_use]
    pub const fn new(candidates: Vec<RecipeCandidate>) -> Self {
        Self {
            candidates,
            unavailable: Vec::new(),
        }
    }

    /// Record that candidates for `slot` could not be fetched
    pub fn mark_unavailable(&mut self, slot: MealSlot, reason: impl Into<String>) {
        self.unavailable.push((slot, reason.into()));
    }

    /// All candidates in input order
    #[must_use]
    pub fn candidates(&self) -> &[RecipeCandidate] {
        &self.candidates
    }

    /// Why `slot` has no candidates, if its fetch failed
    #[must_use]
    pub fn failure_for(&self, slot: MealSlot) -> Option<&str> {
        self.unavailable
            .iter()
            .find(|(failed, _)| *failed == slot)
            .map(|(_, reason)| reason.as_str())
    }
}

impl From<Vec<RecipeCandidate>> for RecipePool {
    fn from(candidates: Vec<RecipeCandidate>) -> Self {
        Self::new(candidates)
    }
}

/// Greedy daily meal planner
#[derive(Debug, Clone)]
pub struct MealPlanner {
    config: Arc<PlannerConfig>,
}

impl MealPlanner {
    /// Planner using `config`
    #[must_use]
    pub const fn new(config: Arc<PlannerConfig>) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Build a plan for `profile` on `date`
    ///
    /// Never fails: slots without candidates or with errors hold placeholders
    /// and the plan status lists them.
    #[must_use]
    pub fn generate_daily_plan(
        &self,
        profile: &Profile,
        date: NaiveDate,
        pool: &RecipePool,
        inventory: &InventorySnapshot,
    ) -> DailyMealPlan {
        let targets = daily_targets(profile, &self.config.nutrition);
        debug!(
            profile.id = %profile.id,
            %date,
            target_calories = targets.calories,
            candidates = pool.candidates().len(),
            pantry_items = inventory.len(),
            "Generating daily meal plan"
        );

        let suggestions = MealSlot::ALL
            .map(|slot| self.plan_slot(slot, &targets, pool, inventory));
        DailyMealPlan::assemble(profile.id, date, targets, suggestions)
    }

    /// Recompute one slot from the profile's current targets
    ///
    /// A plan that belongs to another profile yields a failed placeholder.
    /// Use `DailyMealPlan::replace_slot` to store the result.
    #[must_use]
    pub fn regenerate_slot(
        &self,
        slot: MealSlot,
        profile: &Profile,
        plan: &DailyMealPlan,
        pool: &RecipePool,
        inventory: &InventorySnapshot,
    ) -> MealSuggestion {
        if plan.subject_id != profile.id {
            let error = PlanningError::SubjectMismatch {
                plan_subject: plan.subject_id,
                profile: profile.id,
            };
            warn!(plan.id = %plan.id, meal.slot = %slot, error = %error, "Cannot regenerate slot");
            return MealSuggestion::failed(slot, error.to_string());
        }
        let targets = daily_targets(profile, &self.config.nutrition);
        self.plan_slot(slot, &targets, pool, inventory)
    }

    /// Plan one slot, converting failures into placeholders
    #[must_use]
    pub fn plan_slot(
        &self,
        slot: MealSlot,
        daily: &MacroTargets,
        pool: &RecipePool,
        inventory: &InventorySnapshot,
    ) -> MealSuggestion {
        if let Some(reason) = pool.failure_for(slot) {
            warn!(meal.slot = %slot, reason, "Recipe candidates unavailable for slot");
            return MealSuggestion::failed(slot, reason);
        }
        let target = slot_target(slot, daily, &self.config.planner.distribution);
        match self.try_plan_slot(&target, pool, inventory) {
            Ok(suggestion) => suggestion,
            Err(error) => {
                warn!(meal.slot = %slot, error = %error, "Slot planning failed");
                MealSuggestion::failed(slot, error.to_string())
            }
        }
    }

    fn try_plan_slot(
        &self,
        target: &SlotTarget,
        pool: &RecipePool,
        inventory: &InventorySnapshot,
    ) -> Result<MealSuggestion, PlanningError> {
        let planner = &self.config.planner;
        let slot_candidates =
            candidates_for_slot(target.slot, pool.candidates(), planner.candidates.per_slot_limit);
        let feasible = feasible_candidates(&slot_candidates, inventory);

        let Some((chosen, score)) = select_best(&feasible, target.calories(), &planner.scoring)
        else {
            debug!(meal.slot = %target.slot, "No feasible candidates");
            return Ok(MealSuggestion::no_suitable_recipe(target.slot));
        };

        let portion = size_portion(&chosen.recipe, target.calories(), &planner.portion)?;
        let report = assess_availability(chosen, inventory);
        debug!(
            meal.slot = %target.slot,
            recipe.id = %chosen.recipe.id,
            score = score.total,
            portion_g = portion.grams,
            "Selected recipe"
        );

        Ok(MealSuggestion {
            recipe: Some(RecipeRef::from(&chosen.recipe)),
            slot: target.slot,
            portion_grams: portion.grams,
            nutrition: portion.nutrition,
            feasible: report.feasible,
            missing_ingredients: report.missing_ingredients,
            status: SuggestionStatus::Planned,
        })
    }
}
