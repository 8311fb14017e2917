// ABOUTME: Tests for loading pantry fixtures from disk as the CLI does
// ABOUTME: Uses temporary files for good and malformed fixtures plus the bundled demo pantry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use nutriplan::intelligence::check_ingredient_availability;
use nutriplan::repository::{
    InMemoryRepository, InventoryRepository, ProfileRepository, RecipeRepository,
};
use nutriplan::services::MealPlanService;
use nutriplan_core::errors::ErrorCode;
use nutriplan_core::models::{
    Gender, Goal, InventorySnapshot, MealSlot, PlanStatus, ProfileId, RecipeCandidate, RecipeId,
};
use tempfile::NamedTempFile;

mod common;

const SMALL_FIXTURE: &str = r#"{
    "profiles": [
        {"id": 3, "name": "Kiran", "age": 45, "weight_kg": 80.0, "height_cm": 172.0,
         "gender": "male", "activity_level": 1.2, "goal": "Diabetes Management",
         "goal_duration_weeks": 24}
    ],
    "recipes": [
        {"id": 1, "name": "Vegetable Oats", "category": "breakfast", "calories_per_100g": 110,
         "protein_per_100g": 4.0, "carbs_per_100g": 18.0, "fat_per_100g": 2.5, "fiber_per_100g": 3.0}
    ],
    "ingredients": [
        {"recipe_id": 1, "ingredient_name": "oats", "quantity": 60.0, "unit": "g"}
    ],
    "inventory": [{"name": "Rolled Oats"}]
}"#;

fn write_fixture(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn demo_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/sample_pantry.json")
}

#[tokio::test]
async fn test_unknown_goal_label_loads_as_maintenance() {
    let repo = InMemoryRepository::from_json(
        r#"{"profiles": [{"id": 1, "name": "Ravi", "goal": "Bulk Season", "gender": "Male"}]}"#,
    )
    .unwrap();
    let profile = repo.fetch_profile(ProfileId(1)).await.unwrap();
    assert_eq!(profile.goal, Goal::Maintenance);
    assert_eq!(profile.gender, Gender::Male);
}

#[tokio::test]
async fn test_load_fixture_from_file() {
    common::init_test_logging();
    let file = write_fixture(SMALL_FIXTURE);
    let repo = InMemoryRepository::load(file.path()).await.unwrap();

    assert_eq!(repo.fixture().profiles.len(), 1);
    assert_eq!(repo.fetch_inventory_names().await.unwrap(), vec!["Rolled Oats"]);
    assert!(repo.find_recipe(RecipeId(1)).is_some());
}

#[tokio::test]
async fn test_single_recipe_fixture_fills_every_slot() {
    let file = write_fixture(SMALL_FIXTURE);
    let repo = Arc::new(InMemoryRepository::load(file.path()).await.unwrap());
    let service = MealPlanService::new(repo.clone(), repo.clone(), repo, common::default_config());

    let plan = service
        .generate_plan(ProfileId(3), common::plan_date())
        .await
        .unwrap();
    // Slots without a category match fall back to the whole catalogue
    assert_eq!(plan.status, PlanStatus::Complete);
    assert!((plan.totals.calories - plan.targets.calories).abs() < 1e-6);
    assert!(plan.slot(MealSlot::Dinner).unwrap().is_planned());
}

#[tokio::test]
async fn test_missing_file_is_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let error = InMemoryRepository::load(dir.path().join("absent.json"))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_malformed_fixture_is_serialization_error() {
    let file = write_fixture(r#"{"recipes": [{"id": "not a number"}]}"#);
    let error = InMemoryRepository::load(file.path()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_demo_pantry_plans_every_profile() {
    let repo = Arc::new(InMemoryRepository::load(demo_fixture()).await.unwrap());
    let service = MealPlanService::new(repo.clone(), repo.clone(), repo, common::default_config());

    for id in [1, 2] {
        let plan = service
            .generate_plan(ProfileId(id), common::plan_date())
            .await
            .unwrap();
        assert!(plan.targets.calories > 0.0);
        assert!(plan.suggestions().any(|s| s.is_planned()));
        assert_eq!(plan.totals, plan.suggestions().map(|s| s.nutrition).sum());
    }
}

#[tokio::test]
async fn test_demo_pantry_availability_report() {
    let repo = InMemoryRepository::load(demo_fixture()).await.unwrap();
    // Paneer Tikka Bowl: neither paneer nor capsicum is stocked
    let recipe = repo.find_recipe(RecipeId(4)).cloned().unwrap();
    let ingredients = repo.fetch_ingredients(RecipeId(4)).await.unwrap();
    let inventory = InventorySnapshot::from_names(repo.fetch_inventory_names().await.unwrap());

    let report =
        check_ingredient_availability(&RecipeCandidate::new(recipe, ingredients), &inventory);
    assert!(!report.feasible);
    assert_eq!(report.missing_ingredients, vec!["paneer", "capsicum"]);
}
