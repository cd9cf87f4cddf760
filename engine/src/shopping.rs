//! Shopping list for a configuration
//!
//! Base ingredients come first in a fixed order, followed by the selected
//! toppings in their canonical order. Amounts scale with the pizza count.

use rust_decimal::Decimal;

use crate::i18n::{self, CountUnit, ShoppingItem, Text};
use crate::models::{Configuration, ShoppingListItem, Topping};
use crate::quantities::DerivedQuantities;
use crate::steps;
use crate::types::{Language, UnitSystem};
use crate::units;

pub const TOMATO_SAUCE_ML_PER_PIZZA: u32 = 75;
pub const MOZZARELLA_GRAMS_PER_PIZZA: u32 = 100;
pub const PIZZAS_PER_BASIL_BUNCH: u32 = 8;

/// How much of a topping is bought
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Portion {
    /// Weighed per pizza
    GramsPerPizza(u32),
    /// Whole units, one per this many pizzas, rounded up
    Counted { pizzas_per_unit: u32, unit: CountUnit },
}

impl Portion {
    pub fn for_topping(topping: Topping) -> Self {
        let counted = |pizzas_per_unit, unit| Portion::Counted {
            pizzas_per_unit,
            unit,
        };
        match topping {
            Topping::Ham | Topping::Salami | Topping::HotSalami | Topping::RawHam => {
                Portion::GramsPerPizza(30)
            }
            Topping::Onion => counted(4, CountUnit::Piece),
            Topping::Mushrooms => Portion::GramsPerPizza(20),
            Topping::Pepperoni => counted(4, CountUnit::Piece),
            Topping::Pineapple => counted(8, CountUnit::Piece),
            Topping::Olives => Portion::GramsPerPizza(15),
            Topping::Artichokes => Portion::GramsPerPizza(20),
            Topping::Garlic => counted(4, CountUnit::Clove),
            Topping::CherryTomatoes => Portion::GramsPerPizza(40),
            Topping::Arugula => Portion::GramsPerPizza(10),
            Topping::Mascarpone => Portion::GramsPerPizza(30),
            Topping::Burrata => counted(2, CountUnit::Piece),
        }
    }

    fn amount(&self, pizza_count: u32, language: Language, units: UnitSystem) -> String {
        match *self {
            Portion::GramsPerPizza(grams) => weight(grams * pizza_count, units),
            Portion::Counted {
                pizzas_per_unit,
                unit,
            } => counted(
                Decimal::from(pizza_count.div_ceil(pizzas_per_unit)),
                unit,
                language,
            ),
        }
    }
}

/// Build the shopping list; every item starts unchecked
pub fn build_shopping_list(
    config: &Configuration,
    language: Language,
    units: UnitSystem,
) -> Vec<ShoppingListItem> {
    build_keyed_shopping_list(config, language, units)
        .into_iter()
        .map(|(_, item)| item)
        .collect()
}

/// Shopping list with the ingredient each line stands for
///
/// The key does not depend on language or unit system, so UI state such as
/// checked flags can follow an ingredient across re-renders.
pub fn build_keyed_shopping_list(
    config: &Configuration,
    language: Language,
    units: UnitSystem,
) -> Vec<(ShoppingItem, ShoppingListItem)> {
    let q = DerivedQuantities::for_configuration(config);
    let count = config.pizza_count;
    let item = |key: ShoppingItem, amount: String| {
        let name = i18n::text(language, Text::ShoppingItem(key));
        (key, ShoppingListItem::new(name, amount))
    };

    let basil = Decimal::from(count) / Decimal::from(PIZZAS_PER_BASIL_BUNCH);
    let mut list = vec![
        item(ShoppingItem::Flour, weight(q.flour_grams, units)),
        item(ShoppingItem::Yeast(config.yeast_type), weight(q.yeast_grams, units)),
        item(ShoppingItem::Salt, weight(q.salt_grams, units)),
        item(ShoppingItem::OliveOil, volume(q.oil_ml, units)),
        item(ShoppingItem::Honey, weight(q.honey_grams, units)),
        item(
            ShoppingItem::TomatoSauce,
            volume(TOMATO_SAUCE_ML_PER_PIZZA * count, units),
        ),
        item(
            ShoppingItem::Mozzarella,
            weight(MOZZARELLA_GRAMS_PER_PIZZA * count, units),
        ),
        item(ShoppingItem::Basil, counted(basil, CountUnit::Bunch, language)),
    ];

    list.extend(ordered_toppings(config).into_iter().map(|topping| {
        let amount = Portion::for_topping(topping).amount(count, language, units);
        item(ShoppingItem::Topping(topping), amount)
    }));

    tracing::debug!(items = list.len(), "built shopping list");
    list
}

/// Selected toppings grouped meat, vegetables, cheese
pub fn ordered_toppings(config: &Configuration) -> Vec<Topping> {
    let mut toppings: Vec<Topping> = config.toppings.iter().copied().collect();
    toppings.sort_by_key(|&topping| (topping.category(), topping));
    toppings
}

/// "Einkaufsliste für 4 Pizzen mit Ø25-28cm"
pub fn shopping_list_title(config: &Configuration, language: Language, units: UnitSystem) -> String {
    let size = steps::diameter_text(config, units);
    i18n::render(
        language,
        Text::ShoppingTitle,
        &[
            ("count", config.pizza_count.to_string().as_str()),
            ("size", size.as_str()),
        ],
    )
}

fn weight(grams: u32, units: UnitSystem) -> String {
    units::format_weight(Decimal::from(grams), units)
}

fn volume(ml: u32, units: UnitSystem) -> String {
    units::format_volume(Decimal::from(ml), units)
}

fn counted(amount: Decimal, unit: CountUnit, language: Language) -> String {
    format!(
        "{} {}",
        amount.normalize(),
        i18n::text(language, Text::CountUnit(unit))
    )
}
