//! Entry points used by the UI bindings and the preview binary

use chrono::NaiveDateTime;

use crate::models::{Configuration, Recipe, ShoppingListItem};
use crate::types::{Language, UnitSystem};
use crate::{schedule, shopping, steps};

/// Compute the full recipe for a configuration
///
/// Pure: the same configuration, language and unit system always give the
/// same recipe.
pub fn compute_recipe(config: &Configuration, language: Language, units: UnitSystem) -> Recipe {
    steps::assemble_recipe(config, language, units)
}

pub fn compute_shopping_list(
    config: &Configuration,
    language: Language,
    units: UnitSystem,
) -> Vec<ShoppingListItem> {
    shopping::build_shopping_list(config, language, units)
}

/// Whether the first preparation task lies before `now`
pub fn is_start_time_in_past(config: &Configuration, now: NaiveDateTime) -> bool {
    schedule::is_start_time_in_past(config, now)
}
