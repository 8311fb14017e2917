// ABOUTME: Person profile read by the engine: biometrics, goal, and stored daily targets
// ABOUTME: Includes BMI helpers and activity-level descriptions shown beside computed targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

use std::fmt;

use serde::{Deserialize, Serialize};

use super::goal::Goal;
use super::nutrition::MacroTargets;

/// Identifier of a profile (household member)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub i64);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gender used for the BMR offset
///
/// Deserializes through [`Gender::from_str_lossy`], so app labels such as
/// "Male" or "F" are accepted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Gender {
    /// Male offset (+5)
    Male,
    /// Female offset (-161)
    Female,
    /// Unspecified, midpoint offset (-78)
    #[default]
    Other,
}

impl Gender {
    /// Parse loosely; anything not recognised is `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            _ => Self::Other,
        }
    }
}

impl From<String> for Gender {
    fn from(label: String) -> Self {
        Self::from_str_lossy(&label)
    }
}

/// A person the engine plans meals for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile identifier
    pub id: ProfileId,
    /// Display name
    pub name: String,
    /// Age in years
    #[serde(default)]
    pub age: u32,
    /// Body weight in kilograms
    #[serde(default)]
    pub weight_kg: f64,
    /// Height in centimeters
    #[serde(default)]
    pub height_cm: f64,
    /// Gender for BMR
    #[serde(default)]
    pub gender: Gender,
    /// Activity multiplier applied to BMR (typically 1.2 to 1.9)
    #[serde(default)]
    pub activity_level: f64,
    /// Stated goal
    #[serde(default)]
    pub goal: Goal,
    /// Planned goal duration in weeks
    #[serde(default)]
    pub goal_duration_weeks: u32,
    /// Stored daily targets; zero calories means not yet computed
    #[serde(default)]
    pub targets: MacroTargets,
}

impl Profile {
    /// Return a copy carrying freshly computed targets
    #[must_use]
    pub fn with_targets(&self, targets: MacroTargets) -> Self {
        Self {
            targets,
            ..self.clone()
        }
    }

    /// Body mass index, if weight and height are usable
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        calculate_bmi(self.weight_kg, self.height_cm)
    }
}

/// BMI = weight(kg) / height(m)^2
///
/// Returns `None` when either value is not a positive finite number.
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !(weight_kg.is_finite() && height_cm.is_finite()) || weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    Some(weight_kg / (height_m * height_m))
}

/// WHO adult BMI categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 up to 25
    Normal,
    /// 25 up to 30
    Overweight,
    /// 30 and above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// Describe an activity multiplier in words
#[must_use]
pub fn describe_activity_level(multiplier: f64) -> &'static str {
    if multiplier < 1.2 {
        "Sedentary (little or no exercise)"
    } else if multiplier < 1.375 {
        "Lightly active (light exercise 1-3 days/week)"
    } else if multiplier < 1.55 {
        "Moderately active (moderate exercise 3-5 days/week)"
    } else if multiplier < 1.725 {
        "Very active (hard exercise 6-7 days/week)"
    } else if multiplier < 1.9 {
        "Extra active (very hard exercise or physical job)"
    } else {
        "Athlete (training twice a day)"
    }
}
