// ABOUTME: Core types and constants for the nutriplan meal-planning engine
// ABOUTME: Foundation crate with error handling, domain models, and nutrition constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! Foundation crate providing shared types and constants for the nutriplan
//! engine. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy densities, meal-slot labels, placeholder texts
//! - **models**: Profiles, recipes, inventory, and daily meal plans

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition constants and fixed labels
pub mod constants;

/// Core data models (Profile, Recipe, InventoryItem, `DailyMealPlan`, etc.)
pub mod models;
