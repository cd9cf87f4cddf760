//! Turning raw form input into a `Configuration`
//!
//! Raw records carry identifier strings as they come from a form or a JSON
//! file. Anything unknown falls back to a default and is logged; only the
//! eating date and time can fail.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{DateField, DateParseError, Result, UnknownOption};
use crate::models::{
    Configuration, OvenSize, PizzaSize, TemperatureBand, Topping, DEFAULT_HYDRATION_PERCENT,
    DEFAULT_PIZZA_COUNT, DEFAULT_PREDOUGH_PERCENT,
};
use crate::validation::{self, MAX_PIZZA_COUNT, MIN_PIZZA_COUNT};

/// Unvalidated configuration as submitted by the form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RawConfiguration {
    pub pizza_count: Option<i64>,
    pub pizza_size: Option<String>,
    pub preparation_method: Option<String>,
    /// "65%" or "65"
    pub hydration: Option<String>,
    pub yeast_type: Option<String>,
    /// "30%", "30" or "none"
    pub predough: Option<String>,
    pub kneading_method: Option<String>,
    pub oven_type: Option<String>,
    pub max_temperature: Option<String>,
    pub pizza_surface: Option<String>,
    pub oven_size: Option<String>,
    pub toppings: Vec<String>,
    /// YYYY-MM-DD
    pub eating_date: String,
    /// HH:MM
    pub eating_time: String,
}

impl RawConfiguration {
    pub fn normalize(&self) -> Result<Configuration> {
        let eating_at = parse_date(&self.eating_date)?.and_time(parse_time(&self.eating_time)?);
        let mut config = Configuration::default_for(eating_at);

        config.pizza_count = match self.pizza_count {
            None => DEFAULT_PIZZA_COUNT,
            Some(count) => {
                let clamped = count.clamp(i64::from(MIN_PIZZA_COUNT), i64::from(MAX_PIZZA_COUNT));
                if clamped != count {
                    tracing::warn!(count, clamped, "pizza count out of range, clamping");
                }
                u32::try_from(clamped).unwrap_or(DEFAULT_PIZZA_COUNT)
            }
        };

        config.pizza_size = option_or(self.pizza_size.as_deref(), PizzaSize::Ball210);
        config.hydration_percent = hydration(self.hydration.as_deref());
        config.yeast_type = option_or(self.yeast_type.as_deref(), config.yeast_type);
        config.kneading_method = option_or(self.kneading_method.as_deref(), config.kneading_method);
        config.max_temperature =
            option_or(self.max_temperature.as_deref(), TemperatureBand::C250To275);
        config.oven_size = option_or(self.oven_size.as_deref(), OvenSize::Cm60);
        config.toppings = toppings(&self.toppings);

        let method = option_or(self.preparation_method.as_deref(), config.preparation_method);
        let oven_type = option_or(self.oven_type.as_deref(), config.oven_type);
        let surface = option_or(self.pizza_surface.as_deref(), config.pizza_surface);
        config = config
            .with_preparation_method(method)
            .with_oven_type(oven_type)
            .with_pizza_surface(surface);
        config.predough_percent = predough(self.predough.as_deref(), method.uses_predough());

        Ok(config.normalized())
    }
}

/// Parse a `YYYY-MM-DD` eating date
pub fn parse_date(value: &str) -> std::result::Result<NaiveDate, DateParseError> {
    let value = value.trim();
    validation::validate_date_format(value)
        .ok()
        .and_then(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
        .ok_or_else(|| DateParseError::new(DateField::EatingDate, value))
}

/// Parse an `HH:MM` eating time
pub fn parse_time(value: &str) -> std::result::Result<NaiveTime, DateParseError> {
    let value = value.trim();
    validation::validate_time_format(value)
        .ok()
        .and_then(|_| NaiveTime::parse_from_str(value, "%H:%M").ok())
        .ok_or_else(|| DateParseError::new(DateField::EatingTime, value))
}

/// Parse an option, falling back when it is missing or unknown
fn option_or<T>(value: Option<&str>, fallback: T) -> T
where
    T: FromStr<Err = UnknownOption> + std::fmt::Debug,
{
    match value {
        None => fallback,
        Some(raw) => raw.parse().unwrap_or_else(|e: UnknownOption| {
            tracing::warn!(error = %e, ?fallback, "unknown option, using default");
            fallback
        }),
    }
}

fn percent(value: &str) -> Option<u8> {
    value.trim().trim_end_matches('%').trim().parse().ok()
}

fn hydration(value: Option<&str>) -> u8 {
    let Some(raw) = value else {
        return DEFAULT_HYDRATION_PERCENT;
    };
    match percent(raw) {
        Some(p) if validation::validate_hydration(p).is_ok() => p,
        _ => {
            tracing::warn!(value = raw, "invalid hydration, using default");
            DEFAULT_HYDRATION_PERCENT
        }
    }
}

fn predough(value: Option<&str>, uses_predough: bool) -> Option<u8> {
    if !uses_predough {
        return None;
    }
    let Some(raw) = value else {
        return Some(DEFAULT_PREDOUGH_PERCENT);
    };
    if raw.trim().eq_ignore_ascii_case("none") {
        return Some(DEFAULT_PREDOUGH_PERCENT);
    }
    match percent(raw) {
        Some(p) if validation::validate_predough_percent(p).is_ok() => Some(p),
        _ => {
            tracing::warn!(value = raw, "invalid pre-dough share, using default");
            Some(DEFAULT_PREDOUGH_PERCENT)
        }
    }
}

fn toppings(values: &[String]) -> BTreeSet<Topping> {
    values
        .iter()
        .filter_map(|raw| match raw.parse::<Topping>() {
            Ok(topping) => Some(topping),
            Err(e) => {
                tracing::warn!(error = %e, "dropping unknown topping");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;
    use crate::models::{OvenType, PizzaSurface, PreparationMethod};

    fn raw() -> RawConfiguration {
        RawConfiguration {
            eating_date: "2024-07-02".to_string(),
            eating_time: "20:00".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_raw_gives_defaults() {
        let config = raw().normalize().unwrap();
        assert_eq!(config.pizza_count, 4);
        assert_eq!(config.pizza_size, PizzaSize::Ball210);
        assert_eq!(config.hydration_percent, 65);
        assert_eq!(config.predough_percent, Some(30));
        assert!(config.toppings.is_empty());
        assert_eq!(config.eating_at.to_string(), "2024-07-02 20:00:00");
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let config = RawConfiguration {
            pizza_count: Some(99),
            pizza_size: Some("huge".into()),
            hydration: Some("90%".into()),
            predough: Some("35%".into()),
            max_temperature: Some("1000°C".into()),
            oven_size: Some("12x12cm".into()),
            toppings: vec!["Anchovies".into(), "ham".into(), "Ham".into()],
            ..raw()
        }
        .normalize()
        .unwrap();

        assert_eq!(config.pizza_count, 32);
        assert_eq!(config.pizza_size, PizzaSize::Ball210);
        assert_eq!(config.hydration_percent, 65);
        assert_eq!(config.predough_percent, Some(30));
        assert_eq!(config.max_temperature, TemperatureBand::C250To275);
        assert_eq!(config.oven_size, OvenSize::Cm60);
        assert_eq!(config.toppings, BTreeSet::from([Topping::Ham]));
    }

    #[test]
    fn test_form_labels_are_accepted() {
        let config = RawConfiguration {
            pizza_count: Some(1),
            preparation_method: Some("Without Predough".into()),
            predough: Some("40%".into()),
            oven_type: Some("Pizza oven stone".into()),
            pizza_surface: Some("Pizza steel".into()),
            ..raw()
        }
        .normalize()
        .unwrap();

        assert_eq!(config.pizza_count, 2);
        assert_eq!(config.preparation_method, PreparationMethod::NoPreDough);
        assert_eq!(config.predough_percent, None);
        assert_eq!(config.oven_type, OvenType::WoodStone);
        assert_eq!(config.pizza_surface, PizzaSurface::None);
    }

    #[test]
    fn test_bad_date_and_time() {
        let err = RawConfiguration {
            eating_date: "02.07.2024".into(),
            ..raw()
        }
        .normalize()
        .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::DateParse(DateParseError::new(DateField::EatingDate, "02.07.2024"))
        );

        let err = RawConfiguration {
            eating_time: "25:00".into(),
            ..raw()
        }
        .normalize()
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::DateParse(DateParseError {
                field: DateField::EatingTime,
                ..
            })
        ));
    }

    #[test]
    fn test_impossible_calendar_date() {
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("2024-02-29").is_ok());
    }
}
