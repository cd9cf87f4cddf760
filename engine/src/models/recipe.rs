//! Engine output models

use serde::{Deserialize, Serialize};

/// One phase of the recipe with its start moment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipePhase {
    pub title: String,
    /// "Ein Tag vorher: " style prefix, only for day-before preparation
    pub day_prefix: Option<String>,
    pub date: String,
    pub steps: Vec<String>,
}

/// A fully rendered recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    pub title: String,
    /// Absent when the dough is made without pre-dough
    pub pre_dough: Option<RecipePhase>,
    pub main_dough: RecipePhase,
    pub baking: RecipePhase,
    pub eating_date: String,
    pub total_time: String,
}

impl Recipe {
    /// Baking steps as one newline-separated string
    pub fn baking_instructions(&self) -> String {
        self.baking.steps.join("\n")
    }

    pub fn step_count(&self) -> usize {
        self.pre_dough.as_ref().map_or(0, |p| p.steps.len())
            + self.main_dough.steps.len()
            + self.baking.steps.len()
    }
}

/// A line on the shopping list
///
/// `checked` belongs to the UI; the engine always emits unchecked items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoppingListItem {
    pub name: String,
    pub amount: String,
    pub checked: bool,
}

impl ShoppingListItem {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            checked: false,
        }
    }
}

/// Label/value pair describing one configuration field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryEntry {
    pub label: String,
    pub value: String,
}
