// ABOUTME: Meal planner configuration: daily calorie split, candidate limits, scoring, portions
// ABOUTME: Defaults reproduce the 25/35/30/10 split and the recipe scoring constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

use nutriplan_core::models::MealSlot;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Allowed drift when checking that meal shares sum to one
pub const SHARE_SUM_TOLERANCE: f64 = 1e-6;

/// Fraction of the daily targets assigned to each meal slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDistributionConfig {
    /// Breakfast share (0.25)
    pub breakfast: f64,
    /// Lunch share (0.35)
    pub lunch: f64,
    /// Dinner share (0.30)
    pub dinner: f64,
    /// Snack share (0.10)
    pub snack: f64,
}

impl Default for MealDistributionConfig {
    fn default() -> Self {
        Self {
            breakfast: 0.25,
            lunch: 0.35,
            dinner: 0.30,
            snack: 0.10,
        }
    }
}

impl MealDistributionConfig {
    /// Share of the day for `slot`
    #[must_use]
    pub const fn fraction(&self, slot: MealSlot) -> f64 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
            MealSlot::Snack => self.snack,
        }
    }

    /// Sum of all four shares
    #[must_use]
    pub fn total(&self) -> f64 {
        MealSlot::ALL.iter().map(|slot| self.fraction(*slot)).sum()
    }

    /// Validate that shares are non-negative and sum to one
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if a share is negative or the shares do not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if MealSlot::ALL
            .iter()
            .any(|slot| !(self.fraction(*slot) >= 0.0 && self.fraction(*slot).is_finite()))
        {
            return Err(ConfigError::InvalidWeights(
                "Meal shares must be non-negative numbers",
            ));
        }
        if (self.total() - 1.0).abs() > SHARE_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights("Meal shares must sum to 1.0"));
        }
        Ok(())
    }
}

/// Candidate pool limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateConfig {
    /// Maximum candidates considered per slot
    pub per_slot_limit: usize,
}

impl Default for CandidateConfig {
    fn default() -> Self {
        Self { per_slot_limit: 10 }
    }
}

/// Ideal and tolerated share of calories for one macronutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroBand {
    /// Lower bound of the ideal band
    pub ideal_min: f64,
    /// Upper bound of the ideal band
    pub ideal_max: f64,
    /// Lower bound of the tolerance band
    pub tolerance_min: f64,
    /// Upper bound of the tolerance band
    pub tolerance_max: f64,
}

impl MacroBand {
    /// Band with the given inclusive bounds
    #[must_use]
    pub const fn new(ideal: (f64, f64), tolerance: (f64, f64)) -> Self {
        Self {
            ideal_min: ideal.0,
            ideal_max: ideal.1,
            tolerance_min: tolerance.0,
            tolerance_max: tolerance.1,
        }
    }

    fn is_ordered(&self) -> bool {
        self.tolerance_min <= self.ideal_min
            && self.ideal_min <= self.ideal_max
            && self.ideal_max <= self.tolerance_max
    }
}

/// Recipe scoring constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Numerator of the calorie closeness term `n / (1 + |diff|)`
    pub calorie_closeness_scale: f64,
    /// Bonus when protein per 100 g exceeds the threshold
    pub protein_bonus: f64,
    /// Protein grams per 100 g that earn the bonus (strictly greater)
    pub protein_bonus_threshold_g: f64,
    /// Bonus when fiber per 100 g exceeds the threshold
    pub fiber_bonus: f64,
    /// Fiber grams per 100 g that earn the bonus (strictly greater)
    pub fiber_bonus_threshold_g: f64,
    /// Multiplier on the macro balance term
    pub macro_balance_weight: f64,
    /// Protein share of calories
    pub protein_band: MacroBand,
    /// Carbohydrate share of calories
    pub carbs_band: MacroBand,
    /// Fat share of calories
    pub fat_band: MacroBand,
    /// Sub-score inside the ideal band
    pub ideal_score: f64,
    /// Sub-score inside the tolerance band
    pub tolerance_score: f64,
    /// Sub-score outside both bands
    pub outside_score: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            calorie_closeness_scale: 100.0,
            protein_bonus: 10.0,
            protein_bonus_threshold_g: 15.0,
            fiber_bonus: 5.0,
            fiber_bonus_threshold_g: 5.0,
            macro_balance_weight: 20.0,
            protein_band: MacroBand::new((0.20, 0.30), (0.15, 0.35)),
            carbs_band: MacroBand::new((0.45, 0.65), (0.35, 0.75)),
            fat_band: MacroBand::new((0.20, 0.35), (0.15, 0.45)),
            ideal_score: 1.0,
            tolerance_score: 0.8,
            outside_score: 0.5,
        }
    }
}

impl ScoringConfig {
    /// Validate band ordering and weights
    ///
    /// # Errors
    ///
    /// Returns an error if a band is not nested or a weight is negative or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        for band in [self.protein_band, self.carbs_band, self.fat_band] {
            if !band.is_ordered() {
                return Err(ConfigError::InvalidRange(
                    "Macro bands must satisfy tolerance_min <= ideal_min <= ideal_max <= tolerance_max",
                ));
            }
        }
        let weights = [
            self.calorie_closeness_scale,
            self.protein_bonus,
            self.protein_bonus_threshold_g,
            self.fiber_bonus,
            self.fiber_bonus_threshold_g,
            self.macro_balance_weight,
            self.ideal_score,
            self.tolerance_score,
            self.outside_score,
        ];
        if weights
            .iter()
            .any(|weight| !(weight.is_finite() && *weight >= 0.0))
        {
            return Err(ConfigError::ValueOutOfRange(
                "Scoring weights must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

/// Portion sizing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortionConfig {
    /// Portion used when a recipe has no calorie data
    pub default_portion_grams: f64,
}

impl Default for PortionConfig {
    fn default() -> Self {
        Self {
            default_portion_grams: 100.0,
        }
    }
}

/// Everything the meal planner needs besides nutrition formulas
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealPlannerConfig {
    /// Daily split across slots
    pub distribution: MealDistributionConfig,
    /// Candidate pool limits
    pub candidates: CandidateConfig,
    /// Recipe scoring constants
    pub scoring: ScoringConfig,
    /// Portion sizing
    pub portion: PortionConfig,
}

impl MealPlannerConfig {
    /// Validate all planner settings
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.distribution.validate()?;
        if self.candidates.per_slot_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Candidates per slot must be at least 1",
            ));
        }
        self.scoring.validate()?;
        if !(self.portion.default_portion_grams > 0.0
            && self.portion.default_portion_grams.is_finite())
        {
            return Err(ConfigError::ValueOutOfRange(
                "Default portion must be a positive number of grams",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shares_sum_to_one() {
        let distribution = MealDistributionConfig::default();
        assert!((distribution.total() - 1.0).abs() < SHARE_SUM_TOLERANCE);
        assert!(distribution.validate().is_ok());
    }

    #[test]
    fn test_shares_not_summing_to_one_rejected() {
        let distribution = MealDistributionConfig {
            snack: 0.2,
            ..MealDistributionConfig::default()
        };
        assert!(matches!(
            distribution.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_negative_share_rejected() {
        let distribution = MealDistributionConfig {
            breakfast: -0.05,
            lunch: 0.65,
            ..MealDistributionConfig::default()
        };
        assert!(distribution.validate().is_err());
    }

    #[test]
    fn test_unordered_band_rejected() {
        let scoring = ScoringConfig {
            fat_band: MacroBand::new((0.20, 0.50), (0.15, 0.45)),
            ..ScoringConfig::default()
        };
        assert!(matches!(
            scoring.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_non_finite_scoring_weights_rejected() {
        let scoring = ScoringConfig {
            protein_bonus: f64::NAN,
            ..ScoringConfig::default()
        };
        assert!(matches!(
            scoring.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let scoring = ScoringConfig {
            macro_balance_weight: f64::INFINITY,
            ..ScoringConfig::default()
        };
        assert!(scoring.validate().is_err());
    }
}
