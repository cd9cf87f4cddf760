//! Metric to US customary display conversion
//!
//! Metric values are canonical. Every function here is display-only: the
//! engine computes in grams and milliliters and converts at the edge.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::quantities::round_half_up;
use crate::types::UnitSystem;

const OUNCES_PER_GRAM: Decimal = Decimal::from_parts(35274, 0, 0, false, 6);
const FL_OZ_PER_ML: Decimal = Decimal::from_parts(33814, 0, 0, false, 6);
const INCHES_PER_CM: Decimal = Decimal::from_parts(393701, 0, 0, false, 6);

// Rewrite rules for free text, applied in this order
static TEMPERATURE_RANGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+)-(\d+)°C\b").expect("Invalid regex pattern"));
static TEMPERATURE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+)°C\b").expect("Invalid regex pattern"));
static KILOGRAM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+(?:\.\d+)?)kg\b").expect("Invalid regex pattern"));
static LITER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+(?:\.\d+)?)L\b").expect("Invalid regex pattern"));
static GRAM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+(?:\.\d+)?)g\b").expect("Invalid regex pattern"));
static MILLILITER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+)ml\b").expect("Invalid regex pattern"));

pub fn grams_to_ounces(grams: Decimal) -> Decimal {
    (grams * OUNCES_PER_GRAM).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn ml_to_fl_oz(ml: Decimal) -> Decimal {
    (ml * FL_OZ_PER_ML).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert a Celsius label to Fahrenheit
///
/// Accepts "275-300°C", "> 350°C", "über 350°C" and "250°C". Labels without
/// digits are returned unchanged.
pub fn celsius_to_fahrenheit(celsius: &str) -> String {
    if let Some((min, max)) = celsius.split_once('-') {
        return match (leading_integer(min), leading_integer(max)) {
            (Some(min), Some(max)) => format!("{}-{}°F", to_fahrenheit(min), to_fahrenheit(max)),
            _ => celsius.to_string(),
        };
    }

    let Some(value) = leading_integer(celsius) else {
        return celsius.to_string();
    };
    let fahrenheit = to_fahrenheit(value);
    if celsius.contains('>') {
        format!("> {}°F", fahrenheit)
    } else if celsius.contains("über") {
        format!("über {}°F", fahrenheit)
    } else {
        format!("{}°F", fahrenheit)
    }
}

/// Convert "Ø25-28cm" or "30cm" to inches with one decimal
pub fn cm_to_inches(cm: &str) -> String {
    if cm.contains('Ø') {
        if let Some((min, max)) = cm.replace('Ø', "").split_once('-') {
            if let (Some(min), Some(max)) = (leading_integer(min), leading_integer(max)) {
                return format!("Ø{}-{}in", inches_one_decimal(min), inches_one_decimal(max));
            }
        }
    }

    if cm.contains("cm") {
        if let Some(value) = leading_integer(cm) {
            return format!("{}in", inches_one_decimal(value));
        }
    }

    cm.to_string()
}

/// Convert "60x60cm" to "24x24in"
pub fn oven_size_to_inches(size: &str) -> String {
    let Some(dimensions) = size.strip_suffix("cm") else {
        return size.to_string();
    };
    let Some((width, height)) = dimensions.split_once('x') else {
        return size.to_string();
    };
    match (width.trim().parse::<i64>(), height.trim().parse::<i64>()) {
        (Ok(width), Ok(height)) => {
            let to_inches = |cm: i64| round_half_up(cm as f64 * 0.393701);
            format!("{}x{}in", to_inches(width), to_inches(height))
        }
        _ => size.to_string(),
    }
}

/// Display a gram amount
///
/// Metric prints grams, switching to kilograms from 1000g. US prints ounces,
/// switching to pounds plus ounces from 16oz.
pub fn format_weight(grams: Decimal, units: UnitSystem) -> String {
    if units.is_metric() {
        if grams >= Decimal::ONE_THOUSAND {
            return format!("{}kg", one_decimal(grams / Decimal::ONE_THOUSAND));
        }
        return format!("{}g", grams.normalize());
    }

    let ounces = grams_to_ounces(grams);
    let ounces_per_pound = Decimal::from(16);
    if ounces >= ounces_per_pound {
        let pounds = (ounces / ounces_per_pound).floor();
        with_remainder(pounds, "lb", ounces % ounces_per_pound, "oz")
    } else {
        format!("{}oz", ounces.normalize())
    }
}

/// Display a milliliter amount
///
/// Metric prints milliliters, switching to liters from 1000ml. US prints
/// fluid ounces, cups from 8fl oz and quarts from 32fl oz.
pub fn format_volume(ml: Decimal, units: UnitSystem) -> String {
    if units.is_metric() {
        if ml >= Decimal::ONE_THOUSAND {
            return format!("{}L", one_decimal(ml / Decimal::ONE_THOUSAND));
        }
        return format!("{}ml", ml.normalize());
    }

    let fl_oz = ml_to_fl_oz(ml);
    let per_quart = Decimal::from(32);
    let per_cup = Decimal::from(8);
    if fl_oz >= per_quart {
        with_remainder((fl_oz / per_quart).floor(), "qt", fl_oz % per_quart, "fl oz")
    } else if fl_oz >= per_cup {
        with_remainder((fl_oz / per_cup).floor(), "cup", fl_oz % per_cup, "fl oz")
    } else {
        format!("{}fl oz", fl_oz.normalize())
    }
}

/// Reformat a canonical amount such as "509g", "1.5kg", "331ml" or "2.3L"
///
/// Anything that is not a plain weight or volume is returned unchanged,
/// except that Celsius amounts are relabeled for US display.
pub fn convert_amount(amount: &str, units: UnitSystem) -> String {
    let amount = amount.trim();
    let parse = |number: &str| number.trim().parse::<Decimal>().ok();

    if let Some(kg) = amount.strip_suffix("kg").and_then(parse) {
        return format_weight(kg * Decimal::ONE_THOUSAND, units);
    }
    if let Some(grams) = amount.strip_suffix('g').and_then(parse) {
        return format_weight(grams, units);
    }
    if let Some(ml) = amount.strip_suffix("ml").and_then(parse) {
        return format_volume(ml, units);
    }
    if let Some(liters) = amount
        .strip_suffix('L')
        .or_else(|| amount.strip_suffix('l'))
        .and_then(parse)
    {
        return format_volume(liters * Decimal::ONE_THOUSAND, units);
    }
    if amount.contains("°C") && !units.is_metric() {
        return celsius_to_fahrenheit(amount);
    }

    amount.to_string()
}

/// Rewrite every metric measurement inside a sentence
///
/// Rules run in a fixed order: temperature ranges, single temperatures,
/// kilograms, liters, grams, milliliters. Text around the measurements is
/// left untouched. Metric output is the identity.
pub fn convert_measurements_in_text(text: &str, units: UnitSystem) -> String {
    if units.is_metric() {
        return text.to_string();
    }

    let text = TEMPERATURE_RANGE_PATTERN.replace_all(text, |caps: &Captures| {
        match (caps[1].parse::<i64>(), caps[2].parse::<i64>()) {
            (Ok(min), Ok(max)) => format!("{}-{}°F", to_fahrenheit(min), to_fahrenheit(max)),
            _ => caps[0].to_string(),
        }
    });
    let text = TEMPERATURE_PATTERN.replace_all(&text, |caps: &Captures| {
        caps[1]
            .parse::<i64>()
            .map(|c| format!("{}°F", to_fahrenheit(c)))
            .unwrap_or_else(|_| caps[0].to_string())
    });
    let text = KILOGRAM_PATTERN.replace_all(&text, |caps: &Captures| {
        rewrite_decimal(caps, |kg| format_weight(kg * Decimal::ONE_THOUSAND, units))
    });
    let text = LITER_PATTERN.replace_all(&text, |caps: &Captures| {
        rewrite_decimal(caps, |l| format_volume(l * Decimal::ONE_THOUSAND, units))
    });
    let text = GRAM_PATTERN.replace_all(&text, |caps: &Captures| {
        rewrite_decimal(caps, |g| format_weight(g, units))
    });
    let text = MILLILITER_PATTERN.replace_all(&text, |caps: &Captures| {
        rewrite_decimal(caps, |ml| format_volume(ml, units))
    });

    text.into_owned()
}

fn rewrite_decimal(caps: &Captures, convert: impl Fn(Decimal) -> String) -> String {
    caps[1]
        .parse::<Decimal>()
        .map(convert)
        .unwrap_or_else(|_| caps[0].to_string())
}

fn to_fahrenheit(celsius: i64) -> i64 {
    round_half_up(celsius as f64 * 9.0 / 5.0 + 32.0)
}

/// First run of ASCII digits in a label
fn leading_integer(label: &str) -> Option<i64> {
    let digits: String = label
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Inches with exactly one decimal, keeping a trailing ".0"
fn inches_one_decimal(cm: i64) -> String {
    let inches = (Decimal::from(cm) * INCHES_PER_CM)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}", inches)
}

/// One decimal with a trailing ".0" dropped
fn one_decimal(value: Decimal) -> String {
    value
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

fn with_remainder(whole: Decimal, unit: &str, remainder: Decimal, remainder_unit: &str) -> String {
    let remainder = one_decimal(remainder);
    if remainder == "0" {
        format!("{}{}", whole.normalize(), unit)
    } else {
        format!("{}{} {}{}", whole.normalize(), unit, remainder, remainder_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: u32) -> Decimal {
        Decimal::from(value)
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(celsius_to_fahrenheit("275-300°C"), "527-572°F");
        assert_eq!(celsius_to_fahrenheit("> 350°C"), "> 662°F");
        assert_eq!(celsius_to_fahrenheit("über 350°C"), "über 662°F");
        assert_eq!(celsius_to_fahrenheit("250°C"), "482°F");
        assert_eq!(celsius_to_fahrenheit("hot"), "hot");
    }

    #[test]
    fn test_cm_to_inches() {
        assert_eq!(cm_to_inches("Ø25-28cm"), "Ø9.8-11.0in");
        assert_eq!(cm_to_inches("30cm"), "11.8in");
        assert_eq!(cm_to_inches("large"), "large");
    }

    #[test]
    fn test_oven_size_to_inches() {
        assert_eq!(oven_size_to_inches("60x60cm"), "24x24in");
        assert_eq!(oven_size_to_inches("40x40cm"), "16x16in");
        assert_eq!(oven_size_to_inches("big"), "big");
    }

    #[test]
    fn test_format_weight_metric() {
        assert_eq!(format_weight(dec(509), UnitSystem::Metric), "509g");
        assert_eq!(format_weight(dec(1000), UnitSystem::Metric), "1kg");
        assert_eq!(format_weight(dec(1527), UnitSystem::Metric), "1.5kg");
    }

    #[test]
    fn test_format_weight_us() {
        assert_eq!(format_weight(dec(5), UnitSystem::Us), "0.18oz");
        assert_eq!(format_weight(dec(100), UnitSystem::Us), "3.53oz");
        // 509g is 17.95oz
        assert_eq!(format_weight(dec(509), UnitSystem::Us), "1lb 2oz");
    }

    #[test]
    fn test_format_volume() {
        assert_eq!(format_volume(dec(331), UnitSystem::Metric), "331ml");
        assert_eq!(format_volume(dec(2300), UnitSystem::Metric), "2.3L");
        assert_eq!(format_volume(dec(40), UnitSystem::Us), "1.35fl oz");
        // 331ml is 11.19fl oz
        assert_eq!(format_volume(dec(331), UnitSystem::Us), "1cup 3.2fl oz");
        // 1000ml is 33.81fl oz
        assert_eq!(format_volume(dec(1000), UnitSystem::Us), "1qt 1.8fl oz");
    }

    #[test]
    fn test_convert_amount() {
        assert_eq!(convert_amount("1500g", UnitSystem::Metric), "1.5kg");
        assert_eq!(convert_amount("1.5kg", UnitSystem::Metric), "1.5kg");
        assert_eq!(convert_amount("40ml", UnitSystem::Us), "1.35fl oz");
        assert_eq!(convert_amount("1/2 Bund", UnitSystem::Us), "1/2 Bund");
        assert_eq!(convert_amount("250°C", UnitSystem::Us), "482°F");
    }

    #[test]
    fn test_convert_measurements_in_text() {
        let us = UnitSystem::Us;
        assert_eq!(
            convert_measurements_in_text("Add 331ml of water", us),
            "Add 1cup 3.2fl oz of water"
        );
        assert_eq!(
            convert_measurements_in_text("bake at 275-300°C", us),
            "bake at 527-572°F"
        );
        assert_eq!(
            convert_measurements_in_text("a bowl of at least 2.3L", us),
            "a bowl of at least 2qt 13.8fl oz"
        );
        assert_eq!(convert_measurements_in_text("knead 10min", us), "knead 10min");
    }

    #[test]
    fn test_metric_text_is_identity() {
        let text = "509g Mehl, 331ml Wasser, 275-300°C";
        assert_eq!(convert_measurements_in_text(text, UnitSystem::Metric), text);
    }
}
