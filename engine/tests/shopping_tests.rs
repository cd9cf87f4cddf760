//! Shopping list tests
//!
//! Tests for compute_shopping_list including:
//! - Canonical topping order
//! - Scaling with the pizza count
//! - Localized names and unit conversion

use std::collections::HashSet;

use chrono::NaiveDate;
use pizza_engine::{
    compute_shopping_list, shopping_list_title, Configuration, Language, Topping, UnitSystem,
    YeastType,
};
use proptest::prelude::*;

/// Default configuration without any toppings
fn plain(count: u32) -> Configuration {
    let mut c = Configuration::default_on(NaiveDate::from_ymd_opt(2024, 7, 2).unwrap());
    c.pizza_count = count;
    c.toppings.clear();
    c
}

fn names(config: &Configuration, language: Language) -> Vec<String> {
    compute_shopping_list(config, language, UnitSystem::Metric)
        .into_iter()
        .map(|item| item.name)
        .collect()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_toppings_in_canonical_order() {
        let c = plain(4)
            .with_topping(Topping::Pineapple, true)
            .with_topping(Topping::Ham, true)
            .with_topping(Topping::Onion, true);
        let names = names(&c, Language::De);
        assert_eq!(&names[8..], &["Schinken", "Zwiebeln", "Ananas Dose"]);
    }

    #[test]
    fn test_base_items_in_english() {
        let names = names(&plain(4), Language::En);
        assert_eq!(
            names,
            vec![
                "Flour (Tipo 00)",
                "Dry yeast",
                "Salt",
                "Olive oil",
                "Honey",
                "Tomato sauce",
                "Mozzarella",
                "Basil",
            ]
        );
    }

    #[test]
    fn test_fresh_yeast_name_and_amount() {
        let mut c = plain(4);
        c.yeast_type = YeastType::Fresh;
        let list = compute_shopping_list(&c, Language::De, UnitSystem::Metric);
        assert_eq!(list[1].name, "Frischhefe");
        assert_eq!(list[1].amount, "10g");
        assert_eq!(list[4].amount, "10g");
    }

    #[test]
    fn test_every_topping_once() {
        let mut c = plain(8);
        c.toppings = Topping::ALL.into_iter().collect();
        let list = compute_shopping_list(&c, Language::De, UnitSystem::Metric);
        assert_eq!(list.len(), 8 + Topping::ALL.len());

        let amount = |name: &str| {
            list.iter()
                .find(|i| i.name == name)
                .map(|i| i.amount.as_str())
                .unwrap_or_default()
        };
        assert_eq!(amount("Scharfe Salami"), "240g");
        assert_eq!(amount("Oliven"), "120g");
        assert_eq!(amount("Kirschtomaten"), "320g");
        assert_eq!(amount("Rucola"), "80g");
        assert_eq!(amount("Ananas Dose"), "1 Stück");
        assert_eq!(amount("Knoblauch"), "2 Zehen");
        assert_eq!(amount("Burrata"), "4 Stück");
        assert_eq!(amount("Basilikum"), "1 Bund");
    }

    #[test]
    fn test_us_amounts() {
        let c = plain(4).with_topping(Topping::Salami, true);
        let list = compute_shopping_list(&c, Language::En, UnitSystem::Us);
        // 509g flour is 17.95oz
        assert_eq!(list[0].amount, "1lb 2oz");
        // 40ml oil is 1.35fl oz
        assert_eq!(list[3].amount, "1.35fl oz");
        // 300ml tomato sauce is 10.14fl oz
        assert_eq!(list[5].amount, "1cup 2.1fl oz");
        // 120g salami is 4.23oz
        assert_eq!(list[8].amount, "4.23oz");
    }

    #[test]
    fn test_title_in_us_units() {
        assert_eq!(
            shopping_list_title(&plain(6), Language::De, UnitSystem::Us),
            "Einkaufsliste für 6 Pizzen mit Ø9.8-11.0in"
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn toppings_strategy() -> impl Strategy<Value = Vec<Topping>> {
        prop::collection::vec(prop::sample::select(Topping::ALL.to_vec()), 0..20)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Selection order never changes the list and nothing appears twice
        #[test]
        fn prop_topping_order_is_canonical(
            count in 2u32..=32,
            selection in toppings_strategy()
        ) {
            let forward = selection
                .iter()
                .fold(plain(count), |c, &t| c.with_topping(t, true));
            let backward = selection
                .iter()
                .rev()
                .fold(plain(count), |c, &t| c.with_topping(t, true));

            let list = names(&forward, Language::De);
            prop_assert_eq!(&list, &names(&backward, Language::De));

            let unique: HashSet<&String> = list.iter().collect();
            prop_assert_eq!(unique.len(), list.len());

            let mut expected: Vec<Topping> = selection.clone();
            expected.sort();
            expected.dedup();
            prop_assert_eq!(list.len(), 8 + expected.len());
        }

        /// Nothing on the list is pre-checked
        #[test]
        fn prop_items_start_unchecked(
            count in 2u32..=32,
            selection in toppings_strategy()
        ) {
            let c = selection.iter().fold(plain(count), |c, &t| c.with_topping(t, true));
            let list = compute_shopping_list(&c, Language::En, UnitSystem::Us);
            prop_assert!(list.iter().all(|item| !item.checked));
        }
    }
}
