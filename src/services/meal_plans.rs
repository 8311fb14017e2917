// ABOUTME: Meal plan service: fetches profile, pantry, and recipes, then runs the planner
// ABOUTME: Collaborator failures degrade to placeholders or a fallback plan; only a missing profile errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use nutriplan_core::errors::AppResult;
use nutriplan_core::models::{
    DailyMealPlan, InventorySnapshot, MealSlot, MealSuggestion, Profile, ProfileId, Recipe,
    RecipeCandidate,
};
use tracing::{debug, instrument};

use crate::config::PlannerConfig;
use crate::intelligence::{daily_targets, MealPlanner, RecipePool};
use crate::logging::PlanLogger;
use crate::repository::{InventoryRepository, ProfileRepository, RecipeRepository};

/// Plans meals for stored profiles using the configured repositories
#[derive(Clone)]
pub struct MealPlanService {
    recipes: Arc<dyn RecipeRepository>,
    inventory: Arc<dyn InventoryRepository>,
    profiles: Arc<dyn ProfileRepository>,
    planner: MealPlanner,
}

impl MealPlanService {
    /// Create a service over the given collaborators
    #[must_use]
    pub fn new(
        recipes: Arc<dyn RecipeRepository>,
        inventory: Arc<dyn InventoryRepository>,
        profiles: Arc<dyn ProfileRepository>,
        config: Arc<PlannerConfig>,
    ) -> Self {
        Self {
            recipes,
            inventory,
            profiles,
            planner: MealPlanner::new(config),
        }
    }

    /// Planner used by this service
    #[must_use]
    pub const fn planner(&self) -> &MealPlanner {
        &self.planner
    }

    /// Generate a plan for `profile_id` on `date`
    ///
    /// A failed pantry fetch yields a zeroed plan with `PlanStatus::Fallback`.
    /// A failed recipe fetch empties only the affected slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be loaded
    #[instrument(skip(self), fields(profile.id = %profile_id, %date))]
    pub async fn generate_plan(
        &self,
        profile_id: ProfileId,
        date: NaiveDate,
    ) -> AppResult<DailyMealPlan> {
        let profile = self.profiles.fetch_profile(profile_id).await?;

        let inventory = match self.inventory_snapshot().await {
            Ok(snapshot) => snapshot,
            Err(reason) => {
                let targets = daily_targets(&profile, &self.planner.config().nutrition);
                let plan = DailyMealPlan::fallback(profile.id, date, targets, reason);
                PlanLogger::log_plan_generated(&plan);
                return Ok(plan);
            }
        };

        let pool = self.recipe_pool(&MealSlot::ALL).await;
        let plan = self
            .planner
            .generate_daily_plan(&profile, date, &pool, &inventory);
        for suggestion in plan.suggestions() {
            PlanLogger::log_slot_placeholder(plan.subject_id, suggestion.slot, &suggestion.status);
        }
        PlanLogger::log_plan_generated(&plan);
        Ok(plan)
    }

    /// Recompute one slot of `plan` from fresh collaborator data
    ///
    /// Returns a `Failed` placeholder when the pantry cannot be read or the
    /// plan belongs to another profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be loaded
    #[instrument(skip(self, plan), fields(profile.id = %profile_id, meal.slot = %slot, plan.id = %plan.id))]
    pub async fn regenerate_slot(
        &self,
        slot: MealSlot,
        profile_id: ProfileId,
        plan: &DailyMealPlan,
    ) -> AppResult<MealSuggestion> {
        let profile = self.profiles.fetch_profile(profile_id).await?;
        let inventory = match self.inventory_snapshot().await {
            Ok(snapshot) => snapshot,
            Err(reason) => return Ok(MealSuggestion::failed(slot, reason)),
        };
        let pool = self.recipe_pool(&[slot]).await;
        let suggestion = self
            .planner
            .regenerate_slot(slot, &profile, plan, &pool, &inventory);
        PlanLogger::log_slot_placeholder(profile.id, slot, &suggestion.status);
        Ok(suggestion)
    }

    /// Load a profile without planning
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be loaded
    pub async fn profile(&self, profile_id: ProfileId) -> AppResult<Profile> {
        self.profiles.fetch_profile(profile_id).await
    }

    async fn inventory_snapshot(&self) -> Result<InventorySnapshot, String> {
        match self.inventory.fetch_inventory_names().await {
            Ok(names) => Ok(InventorySnapshot::from_names(names)),
            Err(e) => {
                PlanLogger::log_fetch_failure("inventory", "fetch_inventory_names", &e);
                Err(format!("Inventory unavailable: {}", e.message))
            }
        }
    }

    /// Candidates for `slots`, deduplicated by recipe id in fetch order
    async fn recipe_pool(&self, slots: &[MealSlot]) -> RecipePool {
        let limit = self.planner.config().planner.candidates.per_slot_limit;
        let mut seen = HashSet::new();
        let mut recipes: Vec<Recipe> = Vec::new();
        let mut failed: Vec<(MealSlot, String)> = Vec::new();

        for &slot in slots {
            match self.recipes.fetch_recipes(slot.label(), limit).await {
                Ok(fetched) => {
                    recipes.extend(fetched.into_iter().filter(|recipe| seen.insert(recipe.id)));
                }
                Err(e) => {
                    PlanLogger::log_fetch_failure("recipes", "fetch_recipes", &e);
                    failed.push((slot, format!("Recipes unavailable: {}", e.message)));
                }
            }
        }

        let mut candidates = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            let candidate = match self.recipes.fetch_ingredients(recipe.id).await {
                Ok(ingredients) => RecipeCandidate::new(recipe, ingredients),
                Err(e) => {
                    PlanLogger::log_fetch_failure("recipes", "fetch_ingredients", &e);
                    RecipeCandidate::unavailable(recipe, e.message)
                }
            };
            candidates.push(candidate);
        }
        debug!(candidates = candidates.len(), failed_slots = failed.len(), "Built recipe pool");

        let mut pool = RecipePool::new(candidates);
        for (slot, reason) in failed {
            pool.mark_unavailable(slot, reason);
        }
        pool
    }
}
