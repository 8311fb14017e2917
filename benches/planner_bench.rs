// ABOUTME: Criterion benchmarks for macro targets and daily meal plan generation
// ABOUTME: Measures planner cost against recipe pool size and the async service round trip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

//! Criterion benchmarks for the planning engine.
//!
//! Pools are synthetic: every recipe has three ingredients and the pantry
//! covers roughly two thirds of them.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutriplan::config::{NutritionConfig, PlannerConfig};
use nutriplan::intelligence::{compute_macro_targets, MealPlanner, RecipePool};
use nutriplan::repository::{InMemoryRepository, PantryFixture};
use nutriplan::services::MealPlanService;
use nutriplan_core::models::{
    Gender, Goal, InventoryItem, InventorySnapshot, MacroTargets, MealSlot, Profile, ProfileId,
    Recipe, RecipeCandidate, RecipeId, RecipeIngredient,
};
use tokio::runtime::Runtime;

const POOL_SIZES: [usize; 3] = [10, 100, 500];

fn bench_profile() -> Profile {
    Profile {
        id: ProfileId(1),
        name: "Bench".to_owned(),
        age: 35,
        weight_kg: 72.0,
        height_cm: 170.0,
        gender: Gender::Female,
        activity_level: 1.55,
        goal: Goal::WeightLoss,
        goal_duration_weeks: 10,
        targets: MacroTargets::zero(),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn synthetic_recipes(count: usize) -> (Vec<Recipe>, Vec<RecipeIngredient>) {
    let mut recipes = Vec::with_capacity(count);
    let mut ingredients = Vec::with_capacity(count * 3);
    for index in 0..count {
        let id = RecipeId(index as i64 + 1);
        let slot = MealSlot::ALL[index % MealSlot::ALL.len()];
        recipes.push(Recipe {
            id,
            name: format!("Recipe {index}"),
            cuisine: "Indian".to_owned(),
            category: slot.label().to_owned(),
            calories_per_100g: 80 + ((index * 37) % 300) as u32,
            protein_per_100g: 2.0 + ((index * 7) % 20) as f64,
            carbs_per_100g: 5.0 + ((index * 11) % 40) as f64,
            fat_per_100g: 1.0 + ((index * 5) % 15) as f64,
            fiber_per_100g: ((index * 3) % 8) as f64,
        });
        for part in 0..3 {
            ingredients.push(RecipeIngredient {
                recipe_id: id,
                ingredient_name: format!("ingredient {}", (index + part * 17) % 60),
                quantity: 50.0,
                unit: "g".to_owned(),
            });
        }
    }
    (recipes, ingredients)
}

fn pantry_names() -> Vec<String> {
    (0..40).map(|index| format!("Ingredient {index}")).collect()
}

fn candidates(recipes: &[Recipe], ingredients: &[RecipeIngredient]) -> Vec<RecipeCandidate> {
    recipes
        .iter()
        .map(|recipe| {
            let own = ingredients
                .iter()
                .filter(|ingredient| ingredient.recipe_id == recipe.id)
                .cloned()
                .collect();
            RecipeCandidate::new(recipe.clone(), own)
        })
        .collect()
}

fn bench_macro_targets(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let profile = bench_profile();
    c.bench_function("compute_macro_targets", |b| {
        b.iter(|| compute_macro_targets(black_box(&profile), black_box(&config)));
    });
}

#[allow(clippy::cast_possible_truncation)]
fn bench_generate_daily_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_daily_plan");
    let planner = MealPlanner::new(Arc::new(PlannerConfig::default()));
    let profile = bench_profile();
    let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    let inventory = InventorySnapshot::from_names(pantry_names());

    for size in POOL_SIZES {
        let (recipes, ingredients) = synthetic_recipes(size);
        let pool = RecipePool::from(candidates(&recipes, &ingredients));

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("pool", size), &pool, |b, pool| {
            b.iter(|| {
                planner.generate_daily_plan(
                    black_box(&profile),
                    date,
                    black_box(pool),
                    black_box(&inventory),
                )
            });
        });
    }

    group.finish();
}

fn bench_service_round_trip(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let (recipes, ingredients) = synthetic_recipes(100);
    let fixture = PantryFixture {
        profiles: vec![bench_profile()],
        recipes,
        ingredients,
        inventory: pantry_names()
            .into_iter()
            .map(|name| InventoryItem {
                name,
                quantity: 1.0,
                unit: "kg".to_owned(),
                category: String::new(),
            })
            .collect(),
    };
    let repo = Arc::new(InMemoryRepository::new(fixture));
    let service = MealPlanService::new(
        repo.clone(),
        repo.clone(),
        repo,
        Arc::new(PlannerConfig::default()),
    );
    let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();

    c.bench_function("service_generate_plan", |b| {
        b.iter(|| {
            rt.block_on(async {
                service
                    .generate_plan(black_box(ProfileId(1)), date)
                    .await
                    .unwrap()
            })
        });
    });
}

criterion_group!(
    benches,
    bench_macro_targets,
    bench_generate_daily_plan,
    bench_service_round_trip
);
criterion_main!(benches);
