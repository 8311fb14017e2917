// ABOUTME: Closed set of nutrition goals and the parameters each goal implies
// ABOUTME: Goal enum, GoalProfile (calorie adjustment, protein per kg, macro split), labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Nutrition goal chosen by a profile
///
/// Deserializes through [`Goal::from_label_lossy`]: app labels and snake_case
/// identifiers parse, anything else becomes `Maintenance`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Goal {
    /// Caloric deficit tapered by goal duration
    WeightLoss,
    /// Caloric surplus tapered by goal duration
    MuscleGain,
    /// Deficit with elevated protein
    FatLossHighProtein,
    /// Small surplus, carbohydrate heavy
    EnduranceTraining,
    /// Ketogenic: fat dominant, fixed low carbohydrate
    Keto,
    /// Moderate carbohydrate at maintenance calories
    DiabetesManagement,
    /// User-defined plan, computed like maintenance
    Custom,
    /// Caloric balance
    #[default]
    Maintenance,
}

/// How a goal moves calories away from TDEE
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CalorieAdjustment {
    /// Multiplier chosen by goal duration: up to 4, 8, 12, 16 weeks, then beyond
    Tiered([f64; 5]),
    /// Same multiplier regardless of duration
    Fixed(f64),
}

impl CalorieAdjustment {
    /// Upper week bound of each tier; the fifth multiplier applies beyond the last
    pub const TIER_BOUNDS_WEEKS: [u32; 4] = [4, 8, 12, 16];

    /// Multiplier applied to TDEE for a goal lasting `duration_weeks`
    #[must_use]
    pub fn multiplier(&self, duration_weeks: u32) -> f64 {
        match self {
            Self::Fixed(factor) => *factor,
            Self::Tiered(tiers) => {
                let index = Self::TIER_BOUNDS_WEEKS
                    .iter()
                    .position(|bound| duration_weeks <= *bound)
                    .unwrap_or(Self::TIER_BOUNDS_WEEKS.len());
                tiers[index]
            }
        }
    }
}

/// Which macro is fixed as a share of calories and which fills the remainder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MacroSplit {
    /// Fat is a share of calories, carbohydrates take what is left
    FatShare {
        /// Fraction of calories from fat
        fat_fraction: f64,
    },
    /// Carbohydrates are a share of calories, fat takes what is left
    CarbShare {
        /// Fraction of calories from carbohydrates
        carb_fraction: f64,
    },
    /// Fat is a share of calories, carbohydrates are fixed per kg of body weight
    FatShareFixedCarbs {
        /// Fraction of calories from fat
        fat_fraction: f64,
        /// Carbohydrate grams per kg
        carbs_g_per_kg: f64,
    },
}

/// Parameters that a goal feeds into the macro target formulas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProfile {
    /// Calorie multiplier on TDEE
    pub calories: CalorieAdjustment,
    /// Protein grams per kg of body weight
    pub protein_g_per_kg: f64,
    /// Split between fat and carbohydrates
    pub split: MacroSplit,
}

impl Goal {
    /// Every goal, in menu order
    pub const ALL: [Self; 8] = [
        Self::WeightLoss,
        Self::MuscleGain,
        Self::FatLossHighProtein,
        Self::EnduranceTraining,
        Self::Keto,
        Self::DiabetesManagement,
        Self::Custom,
        Self::Maintenance,
    ];

    /// Formula parameters for this goal
    #[must_use]
    pub const fn profile(&self) -> GoalProfile {
        match self {
            Self::WeightLoss => GoalProfile {
                calories: CalorieAdjustment::Tiered([0.75, 0.80, 0.85, 0.90, 0.95]),
                protein_g_per_kg: 2.0,
                split: MacroSplit::FatShare { fat_fraction: 0.25 },
            },
            Self::MuscleGain => GoalProfile {
                calories: CalorieAdjustment::Tiered([1.25, 1.20, 1.15, 1.10, 1.05]),
                protein_g_per_kg: 2.2,
                split: MacroSplit::FatShare { fat_fraction: 0.25 },
            },
            Self::FatLossHighProtein => GoalProfile {
                calories: CalorieAdjustment::Tiered([0.80, 0.85, 0.90, 0.95, 0.98]),
                protein_g_per_kg: 2.5,
                split: MacroSplit::FatShare { fat_fraction: 0.30 },
            },
            Self::EnduranceTraining => GoalProfile {
                calories: CalorieAdjustment::Fixed(1.10),
                protein_g_per_kg: 1.6,
                split: MacroSplit::CarbShare {
                    carb_fraction: 0.60,
                },
            },
            Self::Keto => GoalProfile {
                calories: CalorieAdjustment::Fixed(0.90),
                protein_g_per_kg: 1.8,
                split: MacroSplit::FatShareFixedCarbs {
                    fat_fraction: 0.70,
                    carbs_g_per_kg: 0.5,
                },
            },
            Self::DiabetesManagement => GoalProfile {
                calories: CalorieAdjustment::Fixed(1.0),
                protein_g_per_kg: 1.2,
                split: MacroSplit::CarbShare {
                    carb_fraction: 0.45,
                },
            },
            Self::Custom | Self::Maintenance => GoalProfile {
                calories: CalorieAdjustment::Fixed(1.0),
                protein_g_per_kg: 1.6,
                split: MacroSplit::FatShare { fat_fraction: 0.25 },
            },
        }
    }

    /// Display label used by the mobile app's goal picker
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::FatLossHighProtein => "Fat Loss (High Protein)",
            Self::EnduranceTraining => "Endurance Training",
            Self::Keto => "Keto Diet",
            Self::DiabetesManagement => "Diabetes Management",
            Self::Custom => "Custom Plan",
            Self::Maintenance => "Maintenance",
        }
    }

    /// Parse a label or identifier, falling back to `Maintenance` for anything unknown
    #[must_use]
    pub fn from_label_lossy(label: &str) -> Self {
        label.parse().unwrap_or(Self::Maintenance)
    }

    /// One-sentence explanation of the goal
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::WeightLoss => {
                "Gradual calorie deficit with high protein to preserve lean mass"
            }
            Self::MuscleGain => "Calorie surplus with high protein to support muscle growth",
            Self::FatLossHighProtein => {
                "Moderate deficit with very high protein for body recomposition"
            }
            Self::EnduranceTraining => "Extra energy and carbohydrates to fuel long sessions",
            Self::Keto => "Very low carbohydrate, high fat intake to stay in ketosis",
            Self::DiabetesManagement => {
                "Balanced calories with controlled carbohydrates for steady blood sugar"
            }
            Self::Custom => "Personalised targets starting from maintenance values",
            Self::Maintenance => "Eat at maintenance to keep current body weight",
        }
    }

}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Goal {
    fn from(label: String) -> Self {
        Self::from_label_lossy(&label)
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "weight loss" | "weightloss" => Ok(Self::WeightLoss),
            "muscle gain" | "musclegain" => Ok(Self::MuscleGain),
            "fat loss (high protein)" | "fat loss high protein" | "fatlosshighprotein" => {
                Ok(Self::FatLossHighProtein)
            }
            "endurance training" | "endurance" | "endurancetraining" => {
                Ok(Self::EnduranceTraining)
            }
            "keto diet" | "keto" => Ok(Self::Keto),
            "diabetes management" | "diabetes" | "diabetesmanagement" => {
                Ok(Self::DiabetesManagement)
            }
            "custom plan" | "custom" => Ok(Self::Custom),
            "maintenance" => Ok(Self::Maintenance),
            _ => Err(format!("Unknown goal: {s}")),
        }
    }
}

/// Describe a goal duration in weeks
#[must_use]
pub fn describe_goal_duration(weeks: u32) -> String {
    match weeks {
        0..=4 => "1 month (aggressive)".to_owned(),
        5..=8 => "2 months (moderate)".to_owned(),
        9..=12 => "3 months (balanced)".to_owned(),
        13..=16 => "4 months (gradual)".to_owned(),
        17..=24 => "6 months (sustainable)".to_owned(),
        _ => format!("{} months (long-term)", weeks / 4),
    }
}

/// Describe how a goal changes calories for a given duration
#[must_use]
pub fn describe_calorie_adjustment(goal: Goal, duration_weeks: u32) -> String {
    let multiplier = goal.profile().calories.multiplier(duration_weeks);
    let percent = ((multiplier - 1.0) * 100.0).round();
    if percent < 0.0 {
        format!("{:.0}% calorie deficit from maintenance", percent.abs())
    } else if percent > 0.0 {
        format!("{percent:.0}% calorie surplus over maintenance")
    } else {
        "Maintenance calories".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_selection_at_boundaries() {
        let tiers = Goal::WeightLoss.profile().calories;
        assert!((tiers.multiplier(4) - 0.75).abs() < f64::EPSILON);
        assert!((tiers.multiplier(5) - 0.80).abs() < f64::EPSILON);
        assert!((tiers.multiplier(12) - 0.85).abs() < f64::EPSILON);
        assert!((tiers.multiplier(16) - 0.90).abs() < f64::EPSILON);
        assert!((tiers.multiplier(17) - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn test_labels_round_trip_through_parser() {
        for goal in Goal::ALL {
            assert_eq!(Goal::from_label_lossy(goal.label()), goal);
        }
    }

    #[test]
    fn test_unknown_label_is_maintenance() {
        assert_eq!(Goal::from_label_lossy("Bulk Season"), Goal::Maintenance);
        assert_eq!(Goal::from_label_lossy(""), Goal::Maintenance);
    }

    #[test]
    fn test_serde_accepts_app_labels() {
        let goal: Goal = serde_json::from_str("\"Fat Loss (High Protein)\"").unwrap();
        assert_eq!(goal, Goal::FatLossHighProtein);
        let goal: Goal = serde_json::from_str("\"keto\"").unwrap();
        assert_eq!(goal, Goal::Keto);
    }

    #[test]
    fn test_serde_unknown_label_is_maintenance() {
        let goal: Goal = serde_json::from_str("\"Bulk Season\"").unwrap();
        assert_eq!(goal, Goal::Maintenance);
        let json = serde_json::to_string(&Goal::FatLossHighProtein).unwrap();
        assert_eq!(json, "\"fat_loss_high_protein\"");
        assert_eq!(serde_json::from_str::<Goal>(&json).unwrap(), Goal::FatLossHighProtein);
    }

    #[test]
    fn test_duration_description() {
        assert_eq!(describe_goal_duration(3), "1 month (aggressive)");
        assert_eq!(describe_goal_duration(20), "6 months (sustainable)");
        assert_eq!(describe_goal_duration(52), "13 months (long-term)");
    }

    #[test]
    fn test_calorie_adjustment_description() {
        assert_eq!(
            describe_calorie_adjustment(Goal::WeightLoss, 4),
            "25% calorie deficit from maintenance"
        );
        assert_eq!(
            describe_calorie_adjustment(Goal::EnduranceTraining, 10),
            "10% calorie surplus over maintenance"
        );
        assert_eq!(
            describe_calorie_adjustment(Goal::Maintenance, 10),
            "Maintenance calories"
        );
    }
}
