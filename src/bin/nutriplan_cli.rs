// ABOUTME: nutriplan CLI - computes targets, plans a day of meals, and checks recipe availability
// ABOUTME: Reads JSON profiles and pantry fixtures, prints pretty JSON to stdout, logs to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors
//!
//! Usage:
//! ```bash
//! # Daily targets for a profile stored as JSON
//! nutriplan-cli targets --profile profile.json
//!
//! # Plan today's meals for profile 1 of a household fixture
//! nutriplan-cli plan --fixture demos/sample_pantry.json --profile-id 1
//!
//! # Plan a specific day and re-plan dinner
//! nutriplan-cli plan --fixture demos/sample_pantry.json --profile-id 1 --date 2025-06-02 --regenerate dinner
//!
//! # Which ingredients of recipe 3 are missing from the pantry
//! nutriplan-cli availability --fixture demos/sample_pantry.json --recipe-id 3
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use nutriplan::config::PlannerConfig;
use nutriplan::intelligence::{check_ingredient_availability, explain_targets};
use nutriplan::logging::LoggingConfig;
use nutriplan::repository::{InMemoryRepository, InventoryRepository, RecipeRepository};
use nutriplan::services::MealPlanService;
use nutriplan_core::models::{
    InventorySnapshot, MealSlot, Profile, ProfileId, RecipeCandidate, RecipeId,
};
use serde::Serialize;
use tokio::fs;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "nutriplan-cli",
    about = "Nutrition targets and daily meal plans",
    long_about = "Computes calorie and macro targets from a profile and plans breakfast, lunch, dinner, and snack from a household pantry fixture."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compute daily targets for a profile
    Targets {
        /// Path to a profile JSON file
        #[arg(long)]
        profile: PathBuf,
    },

    /// Generate a daily meal plan
    Plan {
        /// Path to a pantry fixture JSON file
        #[arg(long)]
        fixture: PathBuf,

        /// Profile to plan for
        #[arg(long)]
        profile_id: i64,

        /// Day to plan (YYYY-MM-DD, defaults to today in UTC)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Re-plan one slot after generating (breakfast, lunch, dinner, snack)
        #[arg(long)]
        regenerate: Option<MealSlot>,
    },

    /// Check a recipe's ingredients against the pantry
    Availability {
        /// Path to a pantry fixture JSON file
        #[arg(long)]
        fixture: PathBuf,

        /// Recipe to check
        #[arg(long)]
        recipe_id: i64,
    },
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn load_fixture(path: &Path) -> Result<Arc<InMemoryRepository>> {
    let repo = InMemoryRepository::load(path)
        .await
        .with_context(|| format!("Failed to load fixture {}", path.display()))?;
    Ok(Arc::new(repo))
}

async fn targets(path: &Path, config: &PlannerConfig) -> Result<()> {
    let json = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&json).context("Invalid profile JSON")?;
    print_json(&explain_targets(&profile, &config.nutrition))
}

async fn plan(
    fixture: &Path,
    profile_id: ProfileId,
    date: NaiveDate,
    regenerate: Option<MealSlot>,
    config: Arc<PlannerConfig>,
) -> Result<()> {
    let repo = load_fixture(fixture).await?;
    let service = MealPlanService::new(repo.clone(), repo.clone(), repo, config);
    let mut plan = service.generate_plan(profile_id, date).await?;
    if let Some(slot) = regenerate {
        let suggestion = service.regenerate_slot(slot, profile_id, &plan).await?;
        plan.replace_slot(suggestion);
    }
    info!(plan.id = %plan.id, "Plan ready");
    print_json(&plan)
}

async fn availability(fixture: &Path, recipe_id: RecipeId) -> Result<()> {
    let repo = load_fixture(fixture).await?;
    let recipe = repo
        .find_recipe(recipe_id)
        .cloned()
        .with_context(|| format!("Recipe {recipe_id} not found"))?;
    let candidate = match repo.fetch_ingredients(recipe_id).await {
        Ok(ingredients) => RecipeCandidate::new(recipe, ingredients),
        Err(e) => RecipeCandidate::unavailable(recipe, e.message),
    };
    let inventory = InventorySnapshot::from_names(repo.fetch_inventory_names().await?);
    print_json(&check_ingredient_availability(&candidate, &inventory))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = Arc::new(PlannerConfig::load().context("Invalid planner configuration")?);

    match cli.command {
        Command::Targets { profile } => targets(&profile, &config).await,
        Command::Plan {
            fixture,
            profile_id,
            date,
            regenerate,
        } => {
            let date = date.unwrap_or_else(|| Utc::now().date_naive());
            plan(&fixture, ProfileId(profile_id), date, regenerate, config).await
        }
        Command::Availability { fixture, recipe_id } => {
            availability(&fixture, RecipeId(recipe_id)).await
        }
    }
}
