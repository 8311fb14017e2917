// ABOUTME: Collaborator interfaces the planner depends on: recipes, ingredients, pantry, profiles
// ABOUTME: Async traits implemented by storage back ends and by the in-memory fixture store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

//! Repository traits
//!
//! Implementations must be `Send + Sync` so services can share them across tasks.

use async_trait::async_trait;
use nutriplan_core::errors::AppResult;
use nutriplan_core::models::{Profile, ProfileId, Recipe, RecipeId, RecipeIngredient};

/// In-memory repository backed by a JSON fixture
pub mod memory;

pub use memory::{InMemoryRepository, PantryFixture};

/// Recipe catalogue
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Up to `limit` recipes for a meal type hint such as "breakfast"
    async fn fetch_recipes(&self, meal_type_hint: &str, limit: usize) -> AppResult<Vec<Recipe>>;

    /// Ingredients of one recipe
    async fn fetch_ingredients(&self, recipe_id: RecipeId) -> AppResult<Vec<RecipeIngredient>>;
}

/// Household pantry
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Names of every item currently in the pantry
    async fn fetch_inventory_names(&self) -> AppResult<Vec<String>>;
}

/// Family member profiles
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Load a profile
    ///
    /// Missing profiles are `ErrorCode::ResourceNotFound`.
    async fn fetch_profile(&self, id: ProfileId) -> AppResult<Profile>;
}
