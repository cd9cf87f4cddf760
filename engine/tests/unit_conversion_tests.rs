//! Unit formatter tests
//!
//! Tests for metric to US customary display conversion including:
//! - Temperature, diameter and oven size labels
//! - Weight and volume formatting
//! - Measurement rewriting inside sentences

use pizza_engine::units::{
    celsius_to_fahrenheit, cm_to_inches, convert_measurements_in_text, format_volume,
    format_weight, grams_to_ounces, ml_to_fl_oz, oven_size_to_inches,
};
use pizza_engine::UnitSystem;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_temperature_labels() {
        assert_eq!(celsius_to_fahrenheit("250-275°C"), "482-527°F");
        assert_eq!(celsius_to_fahrenheit("275-300°C"), "527-572°F");
        assert_eq!(celsius_to_fahrenheit("300-350°C"), "572-662°F");
        assert_eq!(celsius_to_fahrenheit("> 350°C"), "> 662°F");
    }

    #[test]
    fn test_diameters() {
        assert_eq!(cm_to_inches("Ø20-25cm"), "Ø7.9-9.8in");
        assert_eq!(cm_to_inches("Ø25-28cm"), "Ø9.8-11.0in");
        assert_eq!(cm_to_inches("Ø30-32cm"), "Ø11.8-12.6in");
    }

    #[test]
    fn test_oven_sizes() {
        assert_eq!(oven_size_to_inches("80x80cm"), "31x31in");
        assert_eq!(oven_size_to_inches("100x100cm"), "39x39in");
    }

    #[test]
    fn test_ounce_conversions() {
        assert_eq!(grams_to_ounces(Decimal::from(100)), dec("3.53"));
        assert_eq!(ml_to_fl_oz(Decimal::from(100)), dec("3.38"));
    }

    #[test]
    fn test_pounds_without_remainder() {
        // 453.6g is 16.0oz
        assert_eq!(format_weight(dec("453.6"), UnitSystem::Us), "1lb");
    }

    #[test]
    fn test_text_rules_in_order() {
        let us = UnitSystem::Us;
        assert_eq!(
            convert_measurements_in_text("Ofen auf über 350°C bringen", us),
            "Ofen auf über 662°F bringen"
        );
        assert_eq!(
            convert_measurements_in_text("1.5kg Mehl und 2L Wasser", us),
            "3lb 4.9oz Mehl und 2qt 3.6fl oz Wasser"
        );
        assert_eq!(
            convert_measurements_in_text("Dann 15g Salz", us),
            "Dann 0.53oz Salz"
        );
    }

    #[test]
    fn test_non_measurements_untouched() {
        let us = UnitSystem::Us;
        let text = "Teig ca. 10mal anheben und um 90° drehen, 8h warten";
        assert_eq!(convert_measurements_in_text(text, us), text);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Metric display is the identity on arbitrary text
        #[test]
        fn prop_metric_text_identity(text in ".{0,80}") {
            prop_assert_eq!(convert_measurements_in_text(&text, UnitSystem::Metric), text);
        }

        /// Gram amounts always come out in oz or lb
        #[test]
        fn prop_us_weight_units(grams in 1u32..=20000) {
            let out = format_weight(Decimal::from(grams), UnitSystem::Us);
            prop_assert!(out.ends_with("oz") || out.ends_with("lb"), "{}", out);
        }

        /// Milliliter amounts always come out in fl oz, cups or quarts
        #[test]
        fn prop_us_volume_units(ml in 1u32..=20000) {
            let out = format_volume(Decimal::from(ml), UnitSystem::Us);
            prop_assert!(
                out.ends_with("fl oz") || out.ends_with("cup") || out.ends_with("qt"),
                "{}",
                out
            );
        }

        /// Every whole-degree Celsius value converts with C x 9/5 + 32
        #[test]
        fn prop_single_temperature(celsius in 0i64..=500) {
            let expected = (celsius as f64 * 9.0 / 5.0 + 32.0 + 0.5).floor() as i64;
            prop_assert_eq!(
                celsius_to_fahrenheit(&format!("{}°C", celsius)),
                format!("{}°F", expected)
            );
        }
    }
}
