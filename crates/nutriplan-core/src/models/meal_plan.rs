// ABOUTME: Meal slots, per-slot suggestions, and the daily meal plan entity
// ABOUTME: Plans keep totals equal to the sum of their slots and a copied targets snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::nutrition::{MacroTargets, NutritionFacts};
use super::profile::ProfileId;
use super::recipe::{Recipe, RecipeId};
use crate::constants::placeholders::NO_SUITABLE_RECIPE;

/// The four fixed meal slots of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between-meal snack
    Snack,
}

impl MealSlot {
    /// Slots in planning order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Lower-case label, also used to match recipe categories
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Parse a slot label, accepting household aliases (tiffin, evening, night)
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" | "morning" | "tiffin" => Some(Self::Breakfast),
            "lunch" | "afternoon" => Some(Self::Lunch),
            "dinner" | "night" | "supper" => Some(Self::Dinner),
            "snack" | "snacks" | "evening" => Some(Self::Snack),
            _ => None,
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_lossy(s).ok_or_else(|| format!("Unknown meal slot: {s}"))
    }
}

/// Lightweight reference to the recipe a suggestion uses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRef {
    /// Recipe identifier
    pub id: RecipeId,
    /// Recipe name at planning time
    pub name: String,
}

impl From<&Recipe> for RecipeRef {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
        }
    }
}

/// How a suggestion came to be
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SuggestionStatus {
    /// A recipe was chosen and sized
    Planned,
    /// No candidate was available for the slot
    NoSuitableRecipe,
    /// Computing the slot failed
    Failed {
        /// What went wrong
        reason: String,
    },
}

/// One slot's recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSuggestion {
    /// Chosen recipe; `None` for placeholders
    pub recipe: Option<RecipeRef>,
    /// Slot this suggestion fills
    pub slot: MealSlot,
    /// Portion in grams
    pub portion_grams: f64,
    /// Nutrition of the portion
    pub nutrition: NutritionFacts,
    /// Whether all ingredients were judged available
    pub feasible: bool,
    /// Ingredients not found in the pantry
    pub missing_ingredients: Vec<String>,
    /// Outcome
    pub status: SuggestionStatus,
}

impl MealSuggestion {
    /// Placeholder for a slot with no candidates
    #[must_use]
    pub fn no_suitable_recipe(slot: MealSlot) -> Self {
        Self {
            recipe: None,
            slot,
            portion_grams: 0.0,
            nutrition: NutritionFacts::ZERO,
            feasible: false,
            missing_ingredients: vec![NO_SUITABLE_RECIPE.to_owned()],
            status: SuggestionStatus::NoSuitableRecipe,
        }
    }

    /// Placeholder for a slot whose computation failed
    #[must_use]
    pub fn failed(slot: MealSlot, reason: impl Into<String>) -> Self {
        Self {
            recipe: None,
            slot,
            portion_grams: 0.0,
            nutrition: NutritionFacts::ZERO,
            feasible: false,
            missing_ingredients: Vec::new(),
            status: SuggestionStatus::Failed {
                reason: reason.into(),
            },
        }
    }

    /// True when a recipe was actually chosen
    #[must_use]
    pub const fn is_planned(&self) -> bool {
        matches!(self.status, SuggestionStatus::Planned)
    }
}

/// Overall outcome of a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanStatus {
    /// Every slot has a planned recipe
    Complete,
    /// Some slots are empty or hold placeholders
    Partial {
        /// Slots without a planned recipe
        unplanned: Vec<MealSlot>,
    },
    /// Plan could not be assembled; everything is zero
    Fallback {
        /// What went wrong
        reason: String,
    },
}

/// A day's meal plan for one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMealPlan {
    /// Plan identifier
    pub id: Uuid,
    /// Day the plan is for
    pub date: NaiveDate,
    /// Profile the plan belongs to
    pub subject_id: ProfileId,
    /// Breakfast suggestion
    pub breakfast: Option<MealSuggestion>,
    /// Lunch suggestion
    pub lunch: Option<MealSuggestion>,
    /// Dinner suggestion
    pub dinner: Option<MealSuggestion>,
    /// Snack suggestion
    pub snack: Option<MealSuggestion>,
    /// Sum of the slot nutrition
    pub totals: NutritionFacts,
    /// Targets the plan was built against
    pub targets: MacroTargets,
    /// Outcome
    pub status: PlanStatus,
    /// Creation time
    pub generated_at: DateTime<Utc>,
}

impl DailyMealPlan {
    /// Build a plan from slot suggestions; later entries for the same slot win
    #[must_use]
    pub fn assemble(
        subject_id: ProfileId,
        date: NaiveDate,
        targets: MacroTargets,
        suggestions: impl IntoIterator<Item = MealSuggestion>,
    ) -> Self {
        let mut plan = Self::empty(subject_id, date, targets);
        for suggestion in suggestions {
            let slot = suggestion.slot;
            *plan.slot_entry(slot) = Some(suggestion);
        }
        plan.refresh();
        plan
    }

    /// Zeroed plan used when assembly could not run
    #[must_use]
    pub fn fallback(
        subject_id: ProfileId,
        date: NaiveDate,
        targets: MacroTargets,
        reason: impl Into<String>,
    ) -> Self {
        let mut plan = Self::empty(subject_id, date, targets);
        plan.status = PlanStatus::Fallback {
            reason: reason.into(),
        };
        plan
    }

    fn empty(subject_id: ProfileId, date: NaiveDate, targets: MacroTargets) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            subject_id,
            breakfast: None,
            lunch: None,
            dinner: None,
            snack: None,
            totals: NutritionFacts::ZERO,
            targets,
            status: PlanStatus::Complete,
            generated_at: Utc::now(),
        }
    }

    /// Suggestion stored for `slot`
    #[must_use]
    pub const fn slot(&self, slot: MealSlot) -> Option<&MealSuggestion> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_ref(),
            MealSlot::Lunch => self.lunch.as_ref(),
            MealSlot::Dinner => self.dinner.as_ref(),
            MealSlot::Snack => self.snack.as_ref(),
        }
    }

    fn slot_entry(&mut self, slot: MealSlot) -> &mut Option<MealSuggestion> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snack => &mut self.snack,
        }
    }

    /// Present suggestions in slot order
    pub fn suggestions(&self) -> impl Iterator<Item = &MealSuggestion> {
        MealSlot::ALL.into_iter().filter_map(|slot| self.slot(slot))
    }

    /// Swap in a new suggestion for its slot and recompute totals and status
    ///
    /// Returns the suggestion previously stored for that slot.
    pub fn replace_slot(&mut self, suggestion: MealSuggestion) -> Option<MealSuggestion> {
        let previous = self.slot_entry(suggestion.slot).replace(suggestion);
        self.refresh();
        previous
    }

    fn refresh(&mut self) {
        self.totals = self.suggestions().map(|s| s.nutrition).sum();
        if matches!(self.status, PlanStatus::Fallback { .. }) {
            return;
        }
        let unplanned: Vec<MealSlot> = MealSlot::ALL
            .into_iter()
            .filter(|slot| !self.slot(*slot).is_some_and(MealSuggestion::is_planned))
            .collect();
        self.status = if unplanned.is_empty() {
            PlanStatus::Complete
        } else {
            PlanStatus::Partial { unplanned }
        };
    }

    /// Totals compared with targets
    #[must_use]
    pub fn macro_summary(&self) -> DailyMacroSummary {
        DailyMacroSummary::new(self.totals, self.targets)
    }
}

/// Progress of a day's totals against targets, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyMacroSummary {
    /// Summed nutrition
    pub totals: NutritionFacts,
    /// Targets
    pub targets: MacroTargets,
    /// Calories as percent of target
    pub calories_progress: f64,
    /// Protein as percent of target
    pub protein_progress: f64,
    /// Carbohydrates as percent of target
    pub carbs_progress: f64,
    /// Fat as percent of target
    pub fat_progress: f64,
    /// Fiber as percent of target
    pub fiber_progress: f64,
}

impl DailyMacroSummary {
    /// Compute progress percentages; a zero target yields 0%
    #[must_use]
    pub fn new(totals: NutritionFacts, targets: MacroTargets) -> Self {
        Self {
            totals,
            targets,
            calories_progress: progress_percent(totals.calories, targets.calories),
            protein_progress: progress_percent(totals.protein_g, targets.protein_g),
            carbs_progress: progress_percent(totals.carbs_g, targets.carbs_g),
            fat_progress: progress_percent(totals.fat_g, targets.fat_g),
            fiber_progress: progress_percent(totals.fiber_g, targets.fiber_g),
        }
    }
}

fn progress_percent(total: f64, target: f64) -> f64 {
    if target > 0.0 {
        total / target * 100.0
    } else {
        0.0
    }
}
