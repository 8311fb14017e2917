// ABOUTME: Splits daily macro targets across the four meal slots using configured shares
// ABOUTME: Default split is breakfast 25%, lunch 35%, dinner 30%, snack 10%
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

use nutriplan_core::models::{MacroTargets, MealSlot};
use serde::{Deserialize, Serialize};

use crate::config::MealDistributionConfig;

/// Targets for one meal slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotTarget {
    /// Slot
    pub slot: MealSlot,
    /// Share of the day applied
    pub fraction: f64,
    /// Daily targets scaled by `fraction`
    pub targets: MacroTargets,
}

impl SlotTarget {
    /// Calorie target for the slot
    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.targets.calories
    }
}

/// Targets for a single slot
#[must_use]
pub fn slot_target(
    slot: MealSlot,
    daily: &MacroTargets,
    distribution: &MealDistributionConfig,
) -> SlotTarget {
    let fraction = distribution.fraction(slot);
    SlotTarget {
        slot,
        fraction,
        targets: daily.portion(fraction),
    }
}

/// Targets for every slot, in planning order
#[must_use]
pub fn slot_targets(daily: &MacroTargets, distribution: &MealDistributionConfig) -> [SlotTarget; 4] {
    MealSlot::ALL.map(|slot| slot_target(slot, daily, distribution))
}
