// ABOUTME: Service layer that connects repositories to the planning engine
// ABOUTME: Async boundary of the crate; reusable from the CLI or any other front end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

//! Domain service layer
//!
//! Services await collaborator fetches, build immutable snapshots, and hand
//! them to the synchronous engine in `intelligence`.

/// Daily meal plan generation and slot regeneration
pub mod meal_plans;

pub use meal_plans::MealPlanService;
