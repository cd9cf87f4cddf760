//! Human-readable summary of a configuration, shown above the recipe

use crate::i18n::{self, SummaryField, Text};
use crate::models::{Configuration, SummaryEntry};
use crate::schedule;
use crate::steps;
use crate::types::{Language, UnitSystem};
use crate::units;

pub fn summarize_configuration(
    config: &Configuration,
    language: Language,
    units: UnitSystem,
) -> Vec<SummaryEntry> {
    let label = |field: SummaryField| i18n::text(language, Text::Summary(field)).to_string();
    let text = |key: Text| i18n::text(language, key).to_string();

    let ball = units::format_weight(config.pizza_size.ball_weight_grams().into(), units);
    let pizzas = format!(
        "{} × {} ({})",
        config.pizza_count,
        ball,
        steps::diameter_text(config, units)
    );

    let predough = match config.predough_percent {
        Some(percent) if config.preparation_method.uses_predough() => format!("{}%", percent),
        _ => text(Text::NoPredough),
    };

    let temperature = {
        let band = i18n::text(language, Text::TemperatureBand(config.max_temperature));
        if units.is_metric() {
            band.to_string()
        } else {
            units::celsius_to_fahrenheit(band)
        }
    };

    let oven_size = if units.is_metric() {
        config.oven_size.label()
    } else {
        units::oven_size_to_inches(&config.oven_size.label())
    };

    let toppings = if config.toppings.is_empty() {
        "-".to_string()
    } else {
        config
            .toppings
            .iter()
            .map(|&t| i18n::text(language, Text::Topping(t)))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let entries = [
        (SummaryField::Pizzas, pizzas),
        (
            SummaryField::Date,
            schedule::format_date_time(config.eating_at, language),
        ),
        (
            SummaryField::Preparation,
            text(Text::PreparationMethod(config.preparation_method)),
        ),
        (SummaryField::Hydration, format!("{}%", config.hydration_percent)),
        (SummaryField::Yeast, text(Text::YeastType(config.yeast_type))),
        (SummaryField::PredoughShare, predough),
        (
            SummaryField::Kneading,
            text(Text::KneadingMethod(config.kneading_method)),
        ),
        (SummaryField::OvenType, text(Text::OvenType(config.oven_type))),
        (SummaryField::MaxTemperature, temperature),
        (
            SummaryField::Surface,
            text(Text::PizzaSurface(config.pizza_surface)),
        ),
        (SummaryField::OvenSize, oven_size),
        (SummaryField::Toppings, toppings),
    ];

    entries
        .into_iter()
        .map(|(field, value)| SummaryEntry {
            label: label(field),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OvenType, PreparationMethod};
    use chrono::NaiveDate;

    fn config() -> Configuration {
        Configuration::default_on(NaiveDate::from_ymd_opt(2024, 7, 2).unwrap())
    }

    fn value<'a>(entries: &'a [SummaryEntry], label: &str) -> &'a str {
        entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
            .unwrap_or_default()
    }

    #[test]
    fn test_metric_german_summary() {
        let entries = summarize_configuration(&config(), Language::De, UnitSystem::Metric);
        assert_eq!(entries.len(), 12);
        assert_eq!(value(&entries, "Pizzen"), "4 × 210g (Ø25-28cm)");
        assert_eq!(value(&entries, "Datum"), "Dienstag, 02.07.2024, 20:00 Uhr");
        assert_eq!(value(&entries, "Vorteiganteil"), "30%");
        assert_eq!(value(&entries, "Ofengröße"), "60x60cm");
        assert_eq!(value(&entries, "Belag"), "Salami, Champignons");
    }

    #[test]
    fn test_us_summary_converts_measurements() {
        let c = config().with_oven_type(OvenType::WoodStone);
        let entries = summarize_configuration(&c, Language::En, UnitSystem::Us);
        assert_eq!(value(&entries, "Max. temperature"), "527-572°F");
        assert_eq!(value(&entries, "Oven size"), "24x24in");
        assert_eq!(value(&entries, "Pizza surface"), "Not necessary");
    }

    #[test]
    fn test_no_predough_summary() {
        let c = config().with_preparation_method(PreparationMethod::NoPreDough);
        let entries = summarize_configuration(&c, Language::En, UnitSystem::Metric);
        assert_eq!(value(&entries, "Pre-dough share"), "No pre-dough");
    }
}
