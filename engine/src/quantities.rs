//! Dough quantity calculations
//!
//! Flour is approximated as `total / (1 + hydration)`, ignoring the mass of
//! salt, oil, honey and yeast. Everything downstream (pre-dough split, bowl
//! sizes, shopping list) is derived from the same approximation.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::{Configuration, YeastType};

/// Dough weight at which the yeast amount steps up
pub const LARGE_BATCH_GRAMS: u32 = 5000;

/// Olive oil per pizza
pub const OIL_ML_PER_PIZZA: u32 = 10;

/// Quantities derived once per configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DerivedQuantities {
    pub total_dough_weight: u32,
    pub flour_grams: u32,
    pub water_ml: u32,
    pub yeast_grams: u32,
    pub salt_grams: u32,
    /// Always equal to the yeast amount
    pub honey_grams: u32,
    pub oil_ml: u32,
    pub bowl_size_liters: Decimal,
}

impl DerivedQuantities {
    pub fn for_configuration(config: &Configuration) -> Self {
        let total = config.total_dough_weight();
        let flour = flour_grams(total, config.hydration_percent);
        let yeast = yeast_grams(total, config.yeast_type);

        let quantities = Self {
            total_dough_weight: total,
            flour_grams: flour,
            water_ml: water_ml(flour, config.hydration_percent),
            yeast_grams: yeast,
            salt_grams: salt_grams(flour),
            honey_grams: yeast,
            oil_ml: config.pizza_count * OIL_ML_PER_PIZZA,
            bowl_size_liters: bowl_size_liters(total),
        };
        tracing::debug!(?quantities, "derived dough quantities");
        quantities
    }
}

/// Split of flour and water between pre-dough and main dough
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredoughSplit {
    pub predough_weight: u32,
    pub predough_flour: u32,
    pub predough_water: u32,
    pub predough_bowl_liters: Decimal,
    pub main_dough_flour: u32,
    pub main_dough_water: u32,
    pub main_dough_bowl_liters: Decimal,
}

impl PredoughSplit {
    /// The pre-dough is a 100% hydration poolish: whatever is left of the
    /// target weight after yeast and honey is split evenly into flour and
    /// water.
    pub fn new(quantities: &DerivedQuantities, predough_percent: u8) -> Self {
        let target = round_half_up(
            f64::from(quantities.total_dough_weight) * f64::from(predough_percent) / 100.0,
        );
        let flour_and_water =
            target - i64::from(quantities.yeast_grams) - i64::from(quantities.honey_grams);
        let half = round_half_up(flour_and_water as f64 / 2.0).max(0);

        let predough_flour = to_grams(half);
        let predough_water = to_grams(half);
        let predough_weight =
            predough_flour + predough_water + quantities.yeast_grams + quantities.honey_grams;

        let main_dough_flour = quantities.flour_grams.saturating_sub(predough_flour);
        let main_dough_water = quantities.water_ml.saturating_sub(predough_water);
        let total_weight =
            predough_weight + main_dough_flour + main_dough_water + quantities.salt_grams;

        Self {
            predough_weight,
            predough_flour,
            predough_water,
            predough_bowl_liters: bowl_size_liters(predough_weight),
            main_dough_flour,
            main_dough_water,
            main_dough_bowl_liters: bowl_size_liters(total_weight),
        }
    }
}

/// Flour for the given dough weight and hydration
pub fn flour_grams(total_dough_weight: u32, hydration_percent: u8) -> u32 {
    let hydration = f64::from(hydration_percent) / 100.0;
    to_grams(round_half_up(f64::from(total_dough_weight) / (1.0 + hydration)))
}

/// Water for the given flour and hydration
pub fn water_ml(flour_grams: u32, hydration_percent: u8) -> u32 {
    to_grams(round_half_up(
        f64::from(flour_grams) * (f64::from(hydration_percent) / 100.0),
    ))
}

/// Yeast is a step function of batch size, not a ratio
pub fn yeast_grams(total_dough_weight: u32, yeast_type: YeastType) -> u32 {
    let large = total_dough_weight >= LARGE_BATCH_GRAMS;
    match (yeast_type, large) {
        (YeastType::Dry, false) => 5,
        (YeastType::Dry, true) => 10,
        (YeastType::Fresh, false) => 10,
        (YeastType::Fresh, true) => 21,
    }
}

pub fn salt_grams(flour_grams: u32) -> u32 {
    to_grams(round_half_up(f64::from(flour_grams) / 35.0))
}

/// Bowl volume in liters: twice the dough mass, to one decimal
pub fn bowl_size_liters(dough_weight_grams: u32) -> Decimal {
    (Decimal::from(dough_weight_grams) * Decimal::TWO / Decimal::ONE_THOUSAND)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Round with halves going up
pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn to_grams(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
