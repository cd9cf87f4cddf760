//! UI-owned state of one configurator page
//!
//! The engine is pure; everything the user toggles after generation (the
//! checked shopping items, the hide-checked view, language and unit
//! preference) lives here, together with the generation gate.
//!
//! The shown recipe and shopping list always belong to the configuration
//! captured when the generate request was made. Form edits only take effect
//! with the next generation; language and unit changes re-render that
//! snapshot.

use std::collections::HashSet;

use pizza_engine::i18n::{self, ShoppingItem};
use pizza_engine::shopping::build_keyed_shopping_list;
use pizza_engine::{
    compute_recipe, summarize_configuration, Configuration, ConfigurationError, GenerationGate,
    Language, Recipe, ShoppingListItem, UnitSystem, GENERATION_DELAY,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{console_log, js_error, local_now, parse_configuration, parse_raw_configuration, to_json};

/// Shopping list line as the page renders it
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
struct ShoppingRow<'a> {
    index: usize,
    name: &'a str,
    amount: &'a str,
    checked: bool,
}

#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct ConfiguratorSession {
    /// Current form state
    config: Configuration,
    language: Language,
    units: UnitSystem,
    gate: GenerationGate,
    /// Configuration captured by the latest generate request
    requested: Option<Configuration>,
    /// Configuration the shown recipe was generated from
    generated: Option<Configuration>,
    recipe: Option<Recipe>,
    /// Ingredient of each shopping list line, index-aligned
    shopping_keys: Vec<ShoppingItem>,
    shopping_list: Vec<ShoppingListItem>,
    hide_checked: bool,
}

// ============================================================================
// Native API
// ============================================================================

impl ConfiguratorSession {
    pub fn with_configuration(config: Configuration) -> Self {
        Self {
            config: config.normalized(),
            language: Language::default(),
            units: UnitSystem::default(),
            gate: GenerationGate::new(),
            requested: None,
            generated: None,
            recipe: None,
            shopping_keys: Vec::new(),
            shopping_list: Vec::new(),
            hide_checked: false,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn generated_configuration(&self) -> Option<&Configuration> {
        self.generated.as_ref()
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn shopping_list(&self) -> &[ShoppingListItem] {
        &self.shopping_list
    }

    /// Replace the configuration; the shown recipe stays until the next generation
    pub fn set_configuration(&mut self, config: Configuration) {
        self.config = config.normalized();
    }

    pub(crate) fn parse_and_set(&mut self, config_json: &str) -> Result<(), ConfigurationError> {
        self.set_configuration(parse_configuration(config_json)?);
        Ok(())
    }

    pub(crate) fn normalize_and_set(&mut self, raw_json: &str) -> Result<(), ConfigurationError> {
        self.set_configuration(parse_raw_configuration(raw_json)?);
        Ok(())
    }

    /// Render the generated snapshot in the current language and units
    ///
    /// With `keep_checked` the checked flags follow their ingredient, so a
    /// re-render never moves a tick to another line.
    fn render(&mut self, keep_checked: bool) {
        let Some(config) = &self.generated else {
            return;
        };
        let recipe = compute_recipe(config, self.language, self.units);
        let keyed = build_keyed_shopping_list(config, self.language, self.units);

        let checked = if keep_checked {
            self.checked_keys()
        } else {
            HashSet::new()
        };
        let (keys, list): (Vec<_>, Vec<_>) = keyed
            .into_iter()
            .map(|(key, mut item)| {
                item.checked = checked.contains(&key);
                (key, item)
            })
            .unzip();

        self.recipe = Some(recipe);
        self.shopping_keys = keys;
        self.shopping_list = list;
    }

    fn checked_keys(&self) -> HashSet<ShoppingItem> {
        self.shopping_keys
            .iter()
            .zip(&self.shopping_list)
            .filter(|(_, item)| item.checked)
            .map(|(&key, _)| key)
            .collect()
    }

    fn visible_rows(&self) -> Vec<ShoppingRow<'_>> {
        self.shopping_list
            .iter()
            .enumerate()
            .filter(|(_, item)| !(self.hide_checked && item.checked))
            .map(|(index, item)| ShoppingRow {
                index,
                name: &item.name,
                amount: &item.amount,
                checked: item.checked,
            })
            .collect()
    }
}

// ============================================================================
// JavaScript API
// ============================================================================

#[wasm_bindgen]
impl ConfiguratorSession {
    /// Start a session with the default configuration for the given day
    #[wasm_bindgen(constructor)]
    pub fn new(eating_date: &str) -> Result<ConfiguratorSession, JsValue> {
        let date = pizza_engine::normalize::parse_date(eating_date)
            .map_err(|e| js_error(e.into(), Language::default()))?;
        Ok(Self::with_configuration(Configuration::default_on(date)))
    }

    pub fn language(&self) -> String {
        self.language.code().to_string()
    }

    pub fn set_language(&mut self, code: &str) {
        self.language = Language::from_code(code);
        self.render(true);
    }

    pub fn unit_system(&self) -> String {
        self.units.code().to_string()
    }

    pub fn set_unit_system(&mut self, code: &str) {
        self.units = UnitSystem::from_code(code);
        self.render(true);
    }

    /// Replace the configuration from a normalized configuration JSON
    pub fn update_configuration(&mut self, config_json: &str) -> Result<(), JsValue> {
        self.parse_and_set(config_json)
            .map_err(|e| js_error(e, self.language))
    }

    /// Replace the configuration from raw form input
    pub fn update_from_form(&mut self, raw_json: &str) -> Result<(), JsValue> {
        self.normalize_and_set(raw_json)
            .map_err(|e| js_error(e, self.language))
    }

    pub fn configuration_json(&self) -> Result<String, JsValue> {
        to_json(&self.config).map_err(|e| js_error(e, self.language))
    }

    /// Milliseconds the page waits before showing a generated recipe
    pub fn generation_delay_ms() -> u32 {
        GENERATION_DELAY.as_millis() as u32
    }

    /// Take a ticket for a generate request; later requests supersede it
    ///
    /// The configuration is captured now, not when the delayed work completes.
    pub fn begin_generation(&mut self) -> u64 {
        self.requested = Some(self.config.clone());
        self.gate.begin().value()
    }

    /// Apply a delayed generation if its ticket is still the latest
    pub fn complete_generation(&mut self, ticket: u64) -> bool {
        let Some(snapshot) = self
            .gate
            .complete(ticket.into(), ())
            .and_then(|()| self.requested.take())
        else {
            return false;
        };
        self.generated = Some(snapshot);
        self.render(false);
        console_log(&format!(
            "recipe generated with {} steps",
            self.recipe.as_ref().map_or(0, Recipe::step_count)
        ));
        true
    }

    pub fn has_recipe(&self) -> bool {
        self.recipe.is_some()
    }

    pub fn recipe_json(&self) -> Result<Option<String>, JsValue> {
        self.recipe
            .as_ref()
            .map(to_json)
            .transpose()
            .map_err(|e| js_error(e, self.language))
    }

    /// Visible shopping rows, each with its index in the full list
    pub fn shopping_list_json(&self) -> Result<String, JsValue> {
        to_json(&self.visible_rows()).map_err(|e| js_error(e, self.language))
    }

    /// Title of the shown list, or of the form state before the first generation
    pub fn shopping_list_title(&self) -> String {
        let config = self.generated.as_ref().unwrap_or(&self.config);
        pizza_engine::shopping_list_title(config, self.language, self.units)
    }

    /// Flip the checked flag of one item; returns the new state
    pub fn toggle_item(&mut self, index: usize) -> bool {
        match self.shopping_list.get_mut(index) {
            Some(item) => {
                item.checked = !item.checked;
                item.checked
            }
            None => false,
        }
    }

    pub fn hide_checked(&self) -> bool {
        self.hide_checked
    }

    pub fn set_hide_checked(&mut self, hide: bool) {
        self.hide_checked = hide;
    }

    pub fn summary_json(&self) -> Result<String, JsValue> {
        let entries = summarize_configuration(&self.config, self.language, self.units);
        to_json(&entries).map_err(|e| js_error(e, self.language))
    }

    /// Localized warning when the first task already lies in the past
    pub fn past_start_warning(&self) -> Option<String> {
        pizza_engine::is_start_time_in_past(&self.config, local_now())
            .then(|| i18n::text(self.language, i18n::Text::PastStartTimeWarning).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pizza_engine::{PreparationMethod, Topping};

    fn session() -> ConfiguratorSession {
        let config = Configuration::default_on(NaiveDate::from_ymd_opt(2024, 7, 2).unwrap());
        ConfiguratorSession::with_configuration(config)
    }

    #[test]
    fn test_only_latest_generation_is_applied() {
        let mut s = session();
        let first = s.begin_generation();
        let second = s.begin_generation();

        assert!(!s.complete_generation(first));
        assert!(!s.has_recipe());
        assert!(s.complete_generation(second));
        assert!(s.has_recipe());
        assert_eq!(s.shopping_list().len(), 10);
    }

    #[test]
    fn test_generation_delay() {
        assert_eq!(ConfiguratorSession::generation_delay_ms(), 1500);
    }

    #[test]
    fn test_toggle_and_hide_checked() {
        let mut s = session();
        let ticket = s.begin_generation();
        s.complete_generation(ticket);

        assert!(s.toggle_item(0));
        assert!(s.toggle_item(2));
        assert!(!s.toggle_item(2));
        assert!(!s.toggle_item(99));

        s.set_hide_checked(true);
        let rows = s.visible_rows();
        assert_eq!(rows.len(), s.shopping_list().len() - 1);
        assert_eq!(rows[0].index, 1);

        s.set_hide_checked(false);
        assert_eq!(s.visible_rows().len(), s.shopping_list().len());
    }

    #[test]
    fn test_language_switch_keeps_checked_items() {
        let mut s = session();
        let ticket = s.begin_generation();
        s.complete_generation(ticket);
        s.toggle_item(1);

        s.set_language("en");
        assert_eq!(s.language(), "en");
        assert_eq!(s.shopping_list()[1].name, "Dry yeast");
        assert!(s.shopping_list()[1].checked);
        assert!(s.recipe().unwrap().title.starts_with("Pizza Recipe"));
    }

    #[test]
    fn test_form_edit_does_not_change_shown_recipe() {
        let mut s = session();
        let ticket = s.begin_generation();
        s.complete_generation(ticket);
        assert_eq!(s.shopping_list()[8].name, "Salami");
        assert!(s.toggle_item(8));

        let mut edited = s
            .configuration()
            .clone()
            .with_topping(Topping::Salami, false)
            .with_topping(Topping::Ham, true);
        edited.pizza_count = 12;
        s.set_configuration(edited);
        s.set_language("en");

        let recipe = s.recipe().unwrap();
        assert_eq!(recipe.title, "Pizza Recipe for 4 Pizzas with Ø25-28cm");
        assert_eq!(s.shopping_list_title(), "Shopping List for 4 Pizzas with Ø25-28cm");
        let salami = &s.shopping_list()[8];
        assert_eq!(salami.name, "Salami");
        assert_eq!(salami.amount, "120g");
        assert!(salami.checked);
        assert_eq!(s.shopping_list().iter().filter(|i| i.checked).count(), 1);
        assert_eq!(s.generated_configuration().map(|c| c.pizza_count), Some(4));
        assert_eq!(s.configuration().pizza_count, 12);
    }

    #[test]
    fn test_generation_uses_configuration_at_request_time() {
        let mut s = session();
        let ticket = s.begin_generation();

        let mut edited = s.configuration().clone();
        edited.pizza_count = 12;
        s.set_configuration(edited);

        assert!(s.complete_generation(ticket));
        assert!(s.recipe().unwrap().title.contains(" 4 Pizzen"));
        assert_eq!(s.shopping_list()[5].amount, "300ml");
    }

    #[test]
    fn test_completed_ticket_is_applied_once() {
        let mut s = session();
        let ticket = s.begin_generation();
        assert!(s.complete_generation(ticket));
        s.toggle_item(3);
        assert!(!s.complete_generation(ticket));
        assert!(s.shopping_list()[3].checked);
    }

    #[test]
    fn test_language_switch_before_generation_renders_nothing() {
        let mut s = session();
        s.set_language("en");
        s.set_unit_system("us");
        assert!(!s.has_recipe());
        assert!(s.shopping_list().is_empty());
    }

    #[test]
    fn test_unit_switch_rerenders() {
        let mut s = session();
        let ticket = s.begin_generation();
        s.complete_generation(ticket);

        s.toggle_item(8);

        s.set_unit_system("us");
        assert_eq!(s.unit_system(), "us");
        assert_eq!(s.shopping_list()[0].amount, "1lb 2oz");
        assert_eq!(s.shopping_list()[8].amount, "4.23oz");
        assert!(s.shopping_list()[8].checked);
    }

    #[test]
    fn test_new_generation_resets_checked_items() {
        let mut s = session();
        let ticket = s.begin_generation();
        s.complete_generation(ticket);
        s.toggle_item(0);

        let config = s
            .configuration()
            .clone()
            .with_topping(Topping::Ham, true)
            .with_preparation_method(PreparationMethod::NoPreDough);
        s.set_configuration(config);
        let ticket = s.begin_generation();
        s.complete_generation(ticket);

        assert_eq!(s.shopping_list().len(), 11);
        assert!(s.shopping_list().iter().all(|item| !item.checked));
        assert!(s.recipe().unwrap().pre_dough.is_none());
    }

    #[test]
    fn test_update_from_form() {
        let mut s = session();
        s.normalize_and_set(
            r#"{"pizza_count": 8, "oven_type": "wood_stone", "eating_date": "2024-08-01", "eating_time": "18:00"}"#,
        )
        .unwrap();
        assert_eq!(s.configuration().pizza_count, 8);
        assert_eq!(s.configuration().pizza_surface, pizza_engine::PizzaSurface::None);
    }

    #[test]
    fn test_update_with_malformed_json() {
        let mut s = session();
        let before = s.configuration().clone();
        assert!(s.parse_and_set("{").is_err());
        assert_eq!(s.configuration(), &before);
    }
}
