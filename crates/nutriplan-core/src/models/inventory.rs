// ABOUTME: Pantry inventory items and the normalized name snapshot used for feasibility
// ABOUTME: Quantities are informational; planning only asks whether a name is present
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 nutriplan contributors

use serde::{Deserialize, Serialize};

/// An item in the pantry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Free-text name
    pub name: String,
    /// Amount on hand
    #[serde(default)]
    pub quantity: f64,
    /// Unit of `quantity`
    #[serde(default)]
    pub unit: String,
    /// Grouping such as "vegetables" or "dairy"
    #[serde(default)]
    pub category: String,
}

/// Immutable set of available ingredient names, lower-cased and trimmed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    names: Vec<String>,
}

impl InventorySnapshot {
    /// Normalize raw names; blank entries are dropped
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .filter_map(|name| normalize_name(name.as_ref()))
            .collect();
        Self { names }
    }

    /// Snapshot of the names of `items`
    #[must_use]
    pub fn from_items(items: &[InventoryItem]) -> Self {
        Self::from_names(items.iter().map(|item| item.name.as_str()))
    }

    /// Normalized names in input order
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of names
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the pantry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Fuzzy presence check: equal, or either name contains the other
    ///
    /// `ingredient` is normalized here; a blank ingredient is always present.
    #[must_use]
    pub fn has_match(&self, ingredient: &str) -> bool {
        let Some(wanted) = normalize_name(ingredient) else {
            return true;
        };
        self.names
            .iter()
            .any(|have| *have == wanted || have.contains(&wanted) || wanted.contains(have.as_str()))
    }
}

/// Lower-case and trim a name, `None` if nothing is left
#[must_use]
pub fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
