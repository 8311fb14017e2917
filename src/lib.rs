// ABOUTME: Main library entry point for the nutriplan meal planning engine
// ABOUTME: Macro targets, meal splits, recipe selection, and portion sizing for household meal plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

#![deny(unsafe_code)]

//! # nutriplan
//!
//! Turns a family member's biometrics and goal into daily calorie and macro
//! targets, then fills breakfast, lunch, dinner, and snack with recipes that
//! the household pantry can cover, sized to each meal's share of the day.
//!
//! ## Architecture
//!
//! - **intelligence**: synchronous planning engine over in-memory snapshots
//! - **repository**: async collaborator traits plus an in-memory fixture store
//! - **services**: fetches snapshots and runs the engine
//! - **config**: `PlannerConfig` defaults, environment overrides, validation
//! - **logging**: `tracing` subscriber setup and plan events
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use nutriplan::config::PlannerConfig;
//! use nutriplan::repository::InMemoryRepository;
//! use nutriplan::services::MealPlanService;
//! use nutriplan_core::models::ProfileId;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repo = Arc::new(InMemoryRepository::load("demos/sample_pantry.json").await?);
//!     let service = MealPlanService::new(
//!         repo.clone(),
//!         repo.clone(),
//!         repo,
//!         Arc::new(PlannerConfig::load()?),
//!     );
//!     let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap_or_default();
//!     let plan = service.generate_plan(ProfileId(1), date).await?;
//!     println!("{}", serde_json::to_string_pretty(&plan)?);
//!     Ok(())
//! }
//! ```

/// Engine configuration
pub mod config;

/// Planning engine
pub mod intelligence;

/// Logging setup and structured plan events
pub mod logging;

/// Collaborator interfaces and the in-memory implementation
pub mod repository;

/// Service layer
pub mod services;

pub use nutriplan_core::{constants, errors, models};
