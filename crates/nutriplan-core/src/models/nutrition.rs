// ABOUTME: Nutrition value types shared by targets, suggestions, and plan totals
// ABOUTME: NutritionFacts (scalable macro bundle) and MacroTargets (daily goals snapshot)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Calories and macronutrients for some quantity of food
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Fiber in grams
    pub fiber_g: f64,
}

impl NutritionFacts {
    /// All-zero value, used for placeholders and empty sums
    pub const ZERO: Self = Self {
        calories: 0.0,
        protein_g: 0.0,
        carbs_g: 0.0,
        fat_g: 0.0,
        fiber_g: 0.0,
    };

    /// Multiply every field by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein_g: self.protein_g * factor,
            carbs_g: self.carbs_g * factor,
            fat_g: self.fat_g * factor,
            fiber_g: self.fiber_g * factor,
        }
    }
}

impl Add for NutritionFacts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein_g: self.protein_g + rhs.protein_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fat_g: self.fat_g + rhs.fat_g,
            fiber_g: self.fiber_g + rhs.fiber_g,
        }
    }
}

impl AddAssign for NutritionFacts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutritionFacts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for NutritionFacts {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Daily macro targets
///
/// `Copy` on purpose: a plan stores its own snapshot, never a reference into
/// the profile it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Daily energy target in kcal
    pub calories: f64,
    /// Protein target in grams
    pub protein_g: f64,
    /// Carbohydrate target in grams
    pub carbs_g: f64,
    /// Fat target in grams
    pub fat_g: f64,
    /// Fiber target in grams
    pub fiber_g: f64,
}

impl MacroTargets {
    /// Targets with every value at zero
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            calories: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
            fiber_g: 0.0,
        }
    }

    /// Floor every value at zero
    ///
    /// Remainder formulas can go negative for extreme inputs (e.g. very high
    /// protein per kg on a small calorie budget).
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            calories: self.calories.max(0.0),
            protein_g: self.protein_g.max(0.0),
            carbs_g: self.carbs_g.max(0.0),
            fat_g: self.fat_g.max(0.0),
            fiber_g: self.fiber_g.max(0.0),
        }
    }

    /// Apply a fraction (e.g. a meal's share of the day) to every value
    #[must_use]
    pub fn portion(&self, fraction: f64) -> Self {
        Self {
            calories: self.calories * fraction,
            protein_g: self.protein_g * fraction,
            carbs_g: self.carbs_g * fraction,
            fat_g: self.fat_g * fraction,
            fiber_g: self.fiber_g * fraction,
        }
    }

    /// True when no calorie target has been set yet
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.calories <= 0.0 || !self.calories.is_finite()
    }
}
