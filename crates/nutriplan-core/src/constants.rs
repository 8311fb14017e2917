// ABOUTME: Nutrition constants and fixed labels used by the meal-planning engine
// ABOUTME: Atwater energy densities, placeholder texts, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

/// Energy density of macronutrients (Atwater general factors)
pub mod energy {
    /// Protein: 4 kcal per gram
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrate: 4 kcal per gram
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Fat: 9 kcal per gram
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Texts attached to suggestions that could not be planned
pub mod placeholders {
    /// Reason recorded when a slot has no feasible candidate
    pub const NO_SUITABLE_RECIPE: &str = "no suitable recipe";
    /// Missing-ingredient marker when ingredient lookup could not be performed
    pub const UNABLE_TO_CHECK_INGREDIENTS: &str = "Unable to check ingredients";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Library / CLI service name
    pub const NUTRIPLAN: &str = "nutriplan";
}
