//! WebAssembly module for the Pizza Configurator
//!
//! Provides client-side computation for:
//! - Recipe and shopping list generation
//! - Configuration normalization from form input
//! - Unit display conversion
//! - The UI session state (preferences, checked items, generation tickets)

mod session;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export engine types for use in JavaScript
pub use pizza_engine::models::*;
pub use pizza_engine::types::*;
pub use pizza_engine::validation::*;
pub use session::ConfiguratorSession;

use pizza_engine::{units, ConfigurationError, RawConfiguration};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_log("pizza configurator engine loaded");
}

/// Write a lifecycle message to the browser console
pub(crate) fn console_log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("{}", message);
}

/// Current wall-clock time of the browser
pub(crate) fn local_now() -> NaiveDateTime {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        chrono::NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
            .and_then(|date| date.and_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds()))
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Local::now().naive_local()
    }
}

// ============================================================================
// Native helpers
// ============================================================================

pub(crate) fn parse_configuration(config_json: &str) -> Result<Configuration, ConfigurationError> {
    serde_json::from_str::<Configuration>(config_json)
        .map(Configuration::normalized)
        .map_err(|e| ConfigurationError::Malformed(e.to_string()))
}

pub(crate) fn parse_raw_configuration(raw_json: &str) -> Result<Configuration, ConfigurationError> {
    let raw: RawConfiguration = serde_json::from_str(raw_json)
        .map_err(|e| ConfigurationError::Malformed(e.to_string()))?;
    raw.normalize()
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<String, ConfigurationError> {
    serde_json::to_string(value).map_err(|e| ConfigurationError::Malformed(e.to_string()))
}

fn parse_now(now: &str) -> Result<NaiveDateTime, ConfigurationError> {
    NaiveDateTime::parse_from_str(now.trim(), "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(now.trim(), "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| ConfigurationError::Malformed(format!("now '{}': {}", now, e)))
}

fn decimal_from(value: f64) -> Decimal {
    Decimal::try_from(value).unwrap_or(Decimal::ZERO)
}

pub(crate) fn js_error(error: ConfigurationError, language: Language) -> JsValue {
    JsValue::from_str(&error.message(language))
}

// ============================================================================
// Engine exports
// ============================================================================

/// Normalize raw form input into a configuration
#[wasm_bindgen]
pub fn normalize_configuration(raw_json: &str, language: &str) -> Result<String, JsValue> {
    let language = Language::from_code(language);
    parse_raw_configuration(raw_json)
        .and_then(|config| to_json(&config))
        .map_err(|e| js_error(e, language))
}

/// Default configuration eating at 20:00 on the given day
#[wasm_bindgen]
pub fn default_configuration(eating_date: &str) -> Result<String, JsValue> {
    let date = pizza_engine::normalize::parse_date(eating_date)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&Configuration::default_on(date))
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Compute the recipe for a configuration
#[wasm_bindgen]
pub fn compute_recipe(config_json: &str, language: &str, unit_system: &str) -> Result<String, JsValue> {
    let language = Language::from_code(language);
    let config = parse_configuration(config_json).map_err(|e| js_error(e, language))?;
    let recipe = pizza_engine::compute_recipe(&config, language, UnitSystem::from_code(unit_system));
    to_json(&recipe).map_err(|e| js_error(e, language))
}

/// Compute the shopping list for a configuration
#[wasm_bindgen]
pub fn compute_shopping_list(
    config_json: &str,
    language: &str,
    unit_system: &str,
) -> Result<String, JsValue> {
    let language = Language::from_code(language);
    let config = parse_configuration(config_json).map_err(|e| js_error(e, language))?;
    let items =
        pizza_engine::compute_shopping_list(&config, language, UnitSystem::from_code(unit_system));
    to_json(&items).map_err(|e| js_error(e, language))
}

#[wasm_bindgen]
pub fn shopping_list_title(config_json: &str, language: &str, unit_system: &str) -> Result<String, JsValue> {
    let language = Language::from_code(language);
    let config = parse_configuration(config_json).map_err(|e| js_error(e, language))?;
    Ok(pizza_engine::shopping_list_title(
        &config,
        language,
        UnitSystem::from_code(unit_system),
    ))
}

/// Label/value pairs describing the configuration
#[wasm_bindgen]
pub fn summarize_configuration(
    config_json: &str,
    language: &str,
    unit_system: &str,
) -> Result<String, JsValue> {
    let language = Language::from_code(language);
    let config = parse_configuration(config_json).map_err(|e| js_error(e, language))?;
    let entries =
        pizza_engine::summarize_configuration(&config, language, UnitSystem::from_code(unit_system));
    to_json(&entries).map_err(|e| js_error(e, language))
}

/// Check the first preparation task against the browser clock
#[wasm_bindgen]
pub fn is_start_time_in_past(config_json: &str) -> Result<bool, JsValue> {
    let config = parse_configuration(config_json).map_err(|e| js_error(e, Language::default()))?;
    Ok(pizza_engine::is_start_time_in_past(&config, local_now()))
}

/// Check the first preparation task against an explicit "YYYY-MM-DDTHH:MM"
#[wasm_bindgen]
pub fn is_start_time_in_past_at(config_json: &str, now: &str) -> Result<bool, JsValue> {
    let config = parse_configuration(config_json).map_err(|e| js_error(e, Language::default()))?;
    let now = parse_now(now).map_err(|e| js_error(e, Language::default()))?;
    Ok(pizza_engine::is_start_time_in_past(&config, now))
}

// ============================================================================
// Unit exports
// ============================================================================

#[wasm_bindgen]
pub fn format_weight(grams: f64, unit_system: &str) -> String {
    units::format_weight(decimal_from(grams), UnitSystem::from_code(unit_system))
}

#[wasm_bindgen]
pub fn format_volume(ml: f64, unit_system: &str) -> String {
    units::format_volume(decimal_from(ml), UnitSystem::from_code(unit_system))
}

#[wasm_bindgen]
pub fn celsius_to_fahrenheit(celsius: &str) -> String {
    units::celsius_to_fahrenheit(celsius)
}

#[wasm_bindgen]
pub fn cm_to_inches(cm: &str) -> String {
    units::cm_to_inches(cm)
}

#[wasm_bindgen]
pub fn oven_size_to_inches(size: &str) -> String {
    units::oven_size_to_inches(size)
}

/// Reformat a canonical metric amount such as "509g" or "1.5L"
#[wasm_bindgen]
pub fn convert_amount(amount: &str, unit_system: &str) -> String {
    units::convert_amount(amount, UnitSystem::from_code(unit_system))
}

#[wasm_bindgen]
pub fn convert_measurements_in_text(text: &str, unit_system: &str) -> String {
    units::convert_measurements_in_text(text, UnitSystem::from_code(unit_system))
}

/// Whether a pizza count can be selected in the form
#[wasm_bindgen]
pub fn is_valid_pizza_count(count: u32) -> bool {
    validate_pizza_count(count).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG_JSON: &str = r#"{
        "pizza_count": 4,
        "pizza_size": "ball_210",
        "preparation_method": "day_before",
        "hydration_percent": 65,
        "yeast_type": "dry",
        "predough_percent": 30,
        "kneading_method": "by_hand",
        "oven_type": "kitchen",
        "max_temperature": "c250_275",
        "pizza_surface": "stone",
        "oven_size": "cm60",
        "toppings": ["salami"],
        "eating_at": "2024-07-02T20:00:00"
    }"#;

    #[test]
    fn test_parse_raw_configuration() {
        let raw = r#"{"pizza_count": 6, "eating_date": "2024-07-02", "eating_time": "19:30"}"#;
        let config = parse_raw_configuration(raw).unwrap();
        assert_eq!(config.pizza_count, 6);
        assert_eq!(config.eating_at, parse_now("2024-07-02T19:30").unwrap());
    }

    #[test]
    fn test_parse_raw_configuration_bad_time() {
        let raw = r#"{"eating_date": "2024-07-02", "eating_time": "7pm"}"#;
        let err = parse_raw_configuration(raw).unwrap_err();
        assert!(matches!(err, ConfigurationError::DateParse(_)));
        assert!(err.message(Language::En).contains("HH:MM"));
    }

    #[test]
    fn test_malformed_configuration_json() {
        let err = parse_configuration("{not json").unwrap_err();
        assert!(matches!(err, ConfigurationError::Malformed(_)));
        assert!(err.message(Language::De).starts_with("Ungültige Konfiguration"));
    }

    #[test]
    fn test_configuration_round_trips_through_json() {
        let config = parse_configuration(CONFIG_JSON).unwrap();
        assert_eq!(config.preparation_method, PreparationMethod::DayBefore);
        assert_eq!(parse_configuration(&to_json(&config).unwrap()).unwrap(), config);
    }

    #[test]
    fn test_parse_now() {
        assert!(parse_now("2024-07-01T20:00").is_ok());
        assert!(parse_now("2024-07-01T20:00:30").is_ok());
        assert!(parse_now("yesterday").is_err());
    }

    #[test]
    fn test_unit_exports() {
        assert_eq!(format_weight(509.0, "metric"), "509g");
        assert_eq!(format_weight(453.6, "us"), "1lb");
        assert_eq!(celsius_to_fahrenheit("275-300°C"), "527-572°F");
        assert_eq!(cm_to_inches("Ø25-28cm"), "Ø9.8-11.0in");
        assert_eq!(
            convert_measurements_in_text("Dann 15g Salz", "us"),
            "Dann 0.53oz Salz"
        );
    }

    #[test]
    fn test_pizza_count_bounds() {
        assert!(!is_valid_pizza_count(1));
        assert!(is_valid_pizza_count(2));
        assert!(is_valid_pizza_count(32));
        assert!(!is_valid_pizza_count(33));
    }
}
