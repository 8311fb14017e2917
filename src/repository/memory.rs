// ABOUTME: In-memory implementation of the recipe, inventory, and profile repositories
// ABOUTME: Loaded from a JSON pantry fixture; used by the CLI, tests, and benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

use std::path::Path;

use async_trait::async_trait;
use nutriplan_core::errors::{AppError, AppResult};
use nutriplan_core::models::{
    InventoryItem, Profile, ProfileId, Recipe, RecipeId, RecipeIngredient,
};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use super::{InventoryRepository, ProfileRepository, RecipeRepository};

/// Everything a household plan needs, as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PantryFixture {
    /// Family members
    #[serde(default)]
    pub profiles: Vec<Profile>,
    /// Recipe catalogue
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// Ingredients of every recipe
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    /// Pantry contents
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
}

/// Repository over a [`PantryFixture`] held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    fixture: PantryFixture,
}

impl InMemoryRepository {
    /// Create a repository over `fixture`
    #[must_use]
    pub const fn new(fixture: PantryFixture) -> Self {
        Self { fixture }
    }

    /// Parse a fixture from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a fixture
    pub fn from_json(json: &str) -> AppResult<Self> {
        let fixture: PantryFixture = serde_json::from_str(json)?;
        Ok(Self::new(fixture))
    }

    /// Read and parse a fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).await.map_err(|e| {
            AppError::invalid_input(format!("Cannot read fixture {}: {e}", path.display()))
                .with_source(e)
        })?;
        let repository = Self::from_json(&json)?;
        debug!(
            fixture.path = %path.display(),
            profiles = repository.fixture.profiles.len(),
            recipes = repository.fixture.recipes.len(),
            pantry_items = repository.fixture.inventory.len(),
            "Loaded pantry fixture"
        );
        Ok(repository)
    }

    /// Underlying fixture
    #[must_use]
    pub const fn fixture(&self) -> &PantryFixture {
        &self.fixture
    }

    /// Look up a recipe by id
    #[must_use]
    pub fn find_recipe(&self, id: RecipeId) -> Option<&Recipe> {
        self.fixture.recipes.iter().find(|recipe| recipe.id == id)
    }
}

fn matches_hint(recipe: &Recipe, hint: &str) -> bool {
    recipe.category.trim().eq_ignore_ascii_case(hint)
        || recipe.name.to_lowercase().contains(hint)
}

#[async_trait]
impl RecipeRepository for InMemoryRepository {
    async fn fetch_recipes(&self, meal_type_hint: &str, limit: usize) -> AppResult<Vec<Recipe>> {
        let hint = meal_type_hint.trim().to_lowercase();
        let matching: Vec<Recipe> = self
            .fixture
            .recipes
            .iter()
            .filter(|recipe| matches_hint(recipe, &hint))
            .take(limit)
            .cloned()
            .collect();
        if matching.is_empty() {
            return Ok(self.fixture.recipes.iter().take(limit).cloned().collect());
        }
        Ok(matching)
    }

    async fn fetch_ingredients(&self, recipe_id: RecipeId) -> AppResult<Vec<RecipeIngredient>> {
        Ok(self
            .fixture
            .ingredients
            .iter()
            .filter(|ingredient| ingredient.recipe_id == recipe_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl InventoryRepository for InMemoryRepository {
    async fn fetch_inventory_names(&self) -> AppResult<Vec<String>> {
        Ok(self
            .fixture
            .inventory
            .iter()
            .map(|item| item.name.clone())
            .collect())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryRepository {
    async fn fetch_profile(&self, id: ProfileId) -> AppResult<Profile> {
        self.fixture
            .profiles
            .iter()
            .find(|profile| profile.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Profile {id}")))
    }
}

#[cfg(test)]
mod tests {
    use nutriplan_core::errors::ErrorCode;

    use super::*;

    const FIXTURE: &str = r#"{
        "profiles": [{"id": 1, "name": "Asha"}],
        "recipes": [
            {"id": 10, "name": "Poha", "category": "breakfast", "calories_per_100g": 130},
            {"id": 11, "name": "Dal Tadka", "category": "dinner", "calories_per_100g": 120},
            {"id": 12, "name": "Breakfast Paratha", "category": "", "calories_per_100g": 260}
        ],
        "ingredients": [
            {"recipe_id": 10, "ingredient_name": "flattened rice", "quantity": 100.0, "unit": "g"},
            {"recipe_id": 11, "ingredient_name": "toor dal", "quantity": 80.0, "unit": "g"}
        ],
        "inventory": [{"name": "Toor Dal", "quantity": 1.0, "unit": "kg"}]
    }"#;

    #[tokio::test]
    async fn test_recipes_match_category_or_name() {
        let repo = InMemoryRepository::from_json(FIXTURE).unwrap();
        let breakfast = repo.fetch_recipes("Breakfast", 10).await.unwrap();
        let ids: Vec<i64> = breakfast.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![10, 12]);

        let fallback = repo.fetch_recipes("snack", 2).await.unwrap();
        assert_eq!(fallback.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_profile_is_not_found() {
        let repo = InMemoryRepository::from_json(FIXTURE).unwrap();
        assert_eq!(repo.fetch_profile(ProfileId(1)).await.unwrap().name, "Asha");
        let error = repo.fetch_profile(ProfileId(9)).await.unwrap_err();
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
    }

    #[tokio::test]
    async fn test_ingredients_and_inventory() {
        let repo = InMemoryRepository::from_json(FIXTURE).unwrap();
        let dal = repo.fetch_ingredients(RecipeId(11)).await.unwrap();
        assert_eq!(dal.len(), 1);
        assert!(repo.fetch_ingredients(RecipeId(12)).await.unwrap().is_empty());
        assert_eq!(repo.fetch_inventory_names().await.unwrap(), vec!["Toor Dal"]);
    }
}
