// ABOUTME: Error type for failures inside the meal planning engine
// ABOUTME: Slot-level errors are turned into placeholders by the assembler, never propagated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

use nutriplan_core::errors::AppError;
use nutriplan_core::models::{ProfileId, RecipeId};
use thiserror::Error;

/// Failures while computing one meal slot
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanningError {
    /// Calorie target is negative or not a finite number
    #[error("invalid calorie target {0}")]
    InvalidCalorieTarget(f64),

    /// Recipe nutrition contains a negative or non-finite value
    #[error("recipe {recipe} has invalid {field} per 100g")]
    InvalidNutrition {
        /// Offending recipe
        recipe: RecipeId,
        /// Field name
        field: &'static str,
    },

    /// Plan belongs to another profile
    #[error("plan belongs to profile {plan_subject}, not {profile}")]
    SubjectMismatch {
        /// Subject recorded on the plan
        plan_subject: ProfileId,
        /// Profile passed in
        profile: ProfileId,
    },
}

impl From<PlanningError> for AppError {
    fn from(error: PlanningError) -> Self {
        Self::invalid_input(error.to_string()).with_source(error)
    }
}
