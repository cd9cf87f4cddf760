//! Configuration models
//!
//! A `Configuration` is the immutable snapshot the UI hands to the engine.
//! Every dimension is a closed enum; display strings are produced only by the
//! i18n tables.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::UnknownOption;
use crate::validation::{self, MAX_PIZZA_COUNT, MIN_PIZZA_COUNT};

pub const DEFAULT_PIZZA_COUNT: u32 = 4;
pub const DEFAULT_HYDRATION_PERCENT: u8 = 65;
pub const DEFAULT_PREDOUGH_PERCENT: u8 = 30;

/// Dough ball size
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum PizzaSize {
    #[serde(rename = "ball_180")]
    Ball180,
    #[default]
    #[serde(rename = "ball_210")]
    Ball210,
    #[serde(rename = "ball_240")]
    Ball240,
    #[serde(rename = "ball_280")]
    Ball280,
}

impl PizzaSize {
    pub fn ball_weight_grams(&self) -> u32 {
        match self {
            PizzaSize::Ball180 => 180,
            PizzaSize::Ball210 => 210,
            PizzaSize::Ball240 => 240,
            PizzaSize::Ball280 => 280,
        }
    }

    /// Pizza diameter range, always in centimeters
    pub fn diameter(&self) -> &'static str {
        match self {
            PizzaSize::Ball180 => "Ø20-25cm",
            PizzaSize::Ball210 => "Ø25-28cm",
            PizzaSize::Ball240 => "Ø28-30cm",
            PizzaSize::Ball280 => "Ø30-32cm",
        }
    }
}

impl FromStr for PizzaSize {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Form values look like "25-28cm (210g Dough ball)"
        let s = s.trim();
        if s == "ball_180" || s.contains("180g") {
            Ok(PizzaSize::Ball180)
        } else if s == "ball_210" || s.contains("210g") {
            Ok(PizzaSize::Ball210)
        } else if s == "ball_240" || s.contains("240g") {
            Ok(PizzaSize::Ball240)
        } else if s == "ball_280" || s.contains("280g") {
            Ok(PizzaSize::Ball280)
        } else {
            Err(UnknownOption::new("pizza size", s))
        }
    }
}

/// When and how the dough is prepared
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PreparationMethod {
    DayBefore,
    #[default]
    EightHoursBefore,
    NoPreDough,
}

impl PreparationMethod {
    pub fn uses_predough(&self) -> bool {
        !matches!(self, PreparationMethod::NoPreDough)
    }
}

impl FromStr for PreparationMethod {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "day_before" | "Predough a day before" => Ok(PreparationMethod::DayBefore),
            "eight_hours_before" | "8h before Eating Time" => {
                Ok(PreparationMethod::EightHoursBefore)
            }
            "no_pre_dough" | "Without Predough" => Ok(PreparationMethod::NoPreDough),
            other => Err(UnknownOption::new("preparation method", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum YeastType {
    #[default]
    Dry,
    Fresh,
}

impl FromStr for YeastType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dry" | "Dry yeast" => Ok(YeastType::Dry),
            "fresh" | "Fresh yeast" => Ok(YeastType::Fresh),
            other => Err(UnknownOption::new("yeast type", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum KneadingMethod {
    #[default]
    ByHand,
    ByMachine,
}

impl FromStr for KneadingMethod {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "by_hand" | "By Hand" => Ok(KneadingMethod::ByHand),
            "by_machine" | "With Machine" => Ok(KneadingMethod::ByMachine),
            other => Err(UnknownOption::new("kneading method", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum OvenType {
    #[default]
    Kitchen,
    GasGrill,
    WoodStone,
    WoodStainless,
}

impl OvenType {
    /// Wood-fired pizza ovens bake directly on their floor
    pub fn is_wood_oven(&self) -> bool {
        matches!(self, OvenType::WoodStone | OvenType::WoodStainless)
    }

    /// Preheat time for a 40x40cm oven
    pub fn base_preheat_minutes(&self) -> u32 {
        match self {
            OvenType::Kitchen => 40,
            OvenType::GasGrill => 30,
            OvenType::WoodStainless => 40,
            OvenType::WoodStone => 105,
        }
    }
}

impl FromStr for OvenType {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "kitchen" | "Kitchen oven" => Ok(OvenType::Kitchen),
            "gas_grill" | "Grill" => Ok(OvenType::GasGrill),
            "wood_stone" | "Pizza oven stone" => Ok(OvenType::WoodStone),
            "wood_stainless" | "Pizza oven stainless steel" => Ok(OvenType::WoodStainless),
            other => Err(UnknownOption::new("oven type", other)),
        }
    }
}

/// Maximum temperature the oven reaches
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TemperatureBand {
    #[serde(rename = "c250_275")]
    C250To275,
    #[default]
    #[serde(rename = "c275_300")]
    C275To300,
    #[serde(rename = "c300_350")]
    C300To350,
    #[serde(rename = "above_350")]
    Above350,
}

impl TemperatureBand {
    pub fn baking_minutes(&self) -> u32 {
        match self {
            TemperatureBand::C250To275 => 7,
            TemperatureBand::C275To300 => 5,
            TemperatureBand::C300To350 => 3,
            TemperatureBand::Above350 => 2,
        }
    }
}

impl FromStr for TemperatureBand {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "c250_275" | "250-275°C" => Ok(TemperatureBand::C250To275),
            "c275_300" | "275-300°C" => Ok(TemperatureBand::C275To300),
            "c300_350" | "300-350°C" => Ok(TemperatureBand::C300To350),
            "above_350" | "über 350°C" | "> 350°C" => Ok(TemperatureBand::Above350),
            other => Err(UnknownOption::new("temperature band", other)),
        }
    }
}

/// Baking surface placed in kitchen ovens and grills
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum PizzaSurface {
    #[default]
    Stone,
    Steel,
    None,
}

impl FromStr for PizzaSurface {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "stone" | "Pizza stone" => Ok(PizzaSurface::Stone),
            "steel" | "Pizza steel" => Ok(PizzaSurface::Steel),
            "none" | "Not necessary" => Ok(PizzaSurface::None),
            other => Err(UnknownOption::new("pizza surface", other)),
        }
    }
}

/// Square oven floor size
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum OvenSize {
    Cm40,
    #[default]
    Cm60,
    Cm80,
    Cm100,
}

impl OvenSize {
    pub fn side_cm(&self) -> u32 {
        match self {
            OvenSize::Cm40 => 40,
            OvenSize::Cm60 => 60,
            OvenSize::Cm80 => 80,
            OvenSize::Cm100 => 100,
        }
    }

    /// Preheat multiplier in tenths (1.5 is 15)
    pub fn preheat_multiplier_tenths(&self) -> u32 {
        match self {
            OvenSize::Cm40 => 10,
            OvenSize::Cm60 => 15,
            OvenSize::Cm80 => 20,
            OvenSize::Cm100 => 25,
        }
    }

    /// Metric label such as "60x60cm"
    pub fn label(&self) -> String {
        format!("{0}x{0}cm", self.side_cm())
    }
}

impl FromStr for OvenSize {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "cm40" | "40x40cm" => Ok(OvenSize::Cm40),
            "cm60" | "60x60cm" => Ok(OvenSize::Cm60),
            "cm80" | "80x80cm" => Ok(OvenSize::Cm80),
            "cm100" | "100x100cm" => Ok(OvenSize::Cm100),
            other => Err(UnknownOption::new("oven size", other)),
        }
    }
}

/// Shopping list group of a topping, in list order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ToppingCategory {
    Meat,
    Vegetables,
    Cheese,
}

/// Topping identifiers
///
/// Declaration order is the canonical shopping list order: meat, then
/// vegetables, then cheese.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Topping {
    Ham,
    Salami,
    HotSalami,
    RawHam,
    Onion,
    Mushrooms,
    Pepperoni,
    Pineapple,
    Olives,
    Artichokes,
    Garlic,
    CherryTomatoes,
    Arugula,
    Mascarpone,
    Burrata,
}

impl Topping {
    pub const ALL: [Topping; 15] = [
        Topping::Ham,
        Topping::Salami,
        Topping::HotSalami,
        Topping::RawHam,
        Topping::Onion,
        Topping::Mushrooms,
        Topping::Pepperoni,
        Topping::Pineapple,
        Topping::Olives,
        Topping::Artichokes,
        Topping::Garlic,
        Topping::CherryTomatoes,
        Topping::Arugula,
        Topping::Mascarpone,
        Topping::Burrata,
    ];

    pub fn category(&self) -> ToppingCategory {
        match self {
            Topping::Ham | Topping::Salami | Topping::HotSalami | Topping::RawHam => {
                ToppingCategory::Meat
            }
            Topping::Onion
            | Topping::Mushrooms
            | Topping::Pepperoni
            | Topping::Pineapple
            | Topping::Olives
            | Topping::Artichokes
            | Topping::Garlic
            | Topping::CherryTomatoes
            | Topping::Arugula => ToppingCategory::Vegetables,
            Topping::Mascarpone | Topping::Burrata => ToppingCategory::Cheese,
        }
    }
}

impl FromStr for Topping {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ham" | "Ham" => Ok(Topping::Ham),
            "salami" | "Salami" => Ok(Topping::Salami),
            "hot_salami" | "Hot Salami" => Ok(Topping::HotSalami),
            "raw_ham" | "Raw Ham" => Ok(Topping::RawHam),
            "onion" | "Onion" => Ok(Topping::Onion),
            "mushrooms" | "Mushrooms" => Ok(Topping::Mushrooms),
            "pepperoni" | "Pepperoni" => Ok(Topping::Pepperoni),
            "pineapple" | "Pineapple" => Ok(Topping::Pineapple),
            "olives" | "Olives" => Ok(Topping::Olives),
            "artichokes" | "Artichokes" => Ok(Topping::Artichokes),
            "garlic" | "Garlic" => Ok(Topping::Garlic),
            "cherry_tomatoes" | "Cherry Tomatoes" => Ok(Topping::CherryTomatoes),
            "arugula" | "Arugula" => Ok(Topping::Arugula),
            "mascarpone" | "Mascarpone" => Ok(Topping::Mascarpone),
            "burrata" | "Burrata" => Ok(Topping::Burrata),
            other => Err(UnknownOption::new("topping", other)),
        }
    }
}

/// A complete, normalized pizza configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Configuration {
    pub pizza_count: u32,
    pub pizza_size: PizzaSize,
    pub preparation_method: PreparationMethod,
    pub hydration_percent: u8,
    pub yeast_type: YeastType,
    /// `None` when no pre-dough is made
    pub predough_percent: Option<u8>,
    pub kneading_method: KneadingMethod,
    pub oven_type: OvenType,
    pub max_temperature: TemperatureBand,
    pub pizza_surface: PizzaSurface,
    pub oven_size: OvenSize,
    #[serde(default)]
    pub toppings: BTreeSet<Topping>,
    pub eating_at: NaiveDateTime,
}

impl Configuration {
    /// The configurator's initial selection for a given eating moment
    pub fn default_for(eating_at: NaiveDateTime) -> Self {
        Self {
            pizza_count: DEFAULT_PIZZA_COUNT,
            pizza_size: PizzaSize::default(),
            preparation_method: PreparationMethod::default(),
            hydration_percent: DEFAULT_HYDRATION_PERCENT,
            yeast_type: YeastType::default(),
            predough_percent: Some(DEFAULT_PREDOUGH_PERCENT),
            kneading_method: KneadingMethod::default(),
            oven_type: OvenType::default(),
            max_temperature: TemperatureBand::default(),
            pizza_surface: PizzaSurface::default(),
            oven_size: OvenSize::default(),
            toppings: BTreeSet::from([Topping::Salami, Topping::Mushrooms]),
            eating_at,
        }
    }

    /// Default configuration eating at 20:00 on the given day
    pub fn default_on(date: NaiveDate) -> Self {
        let eight_pm = NaiveTime::from_hms_opt(20, 0, 0).unwrap_or_default();
        Self::default_for(date.and_time(eight_pm))
    }

    pub fn total_dough_weight(&self) -> u32 {
        self.pizza_count * self.pizza_size.ball_weight_grams()
    }

    /// Pre-dough share actually used for the recipe, zero without pre-dough
    pub fn effective_predough_percent(&self) -> u8 {
        if self.preparation_method.uses_predough() {
            self.predough_percent.unwrap_or(DEFAULT_PREDOUGH_PERCENT)
        } else {
            0
        }
    }

    /// Enforce the cross-field invariants and pull numeric fields back into
    /// their selectable domains.
    pub fn normalized(mut self) -> Self {
        self.pizza_count = self.pizza_count.clamp(MIN_PIZZA_COUNT, MAX_PIZZA_COUNT);
        if validation::validate_hydration(self.hydration_percent).is_err() {
            self.hydration_percent = DEFAULT_HYDRATION_PERCENT;
        }
        self.predough_percent = match (self.preparation_method.uses_predough(), self.predough_percent) {
            (false, _) => None,
            (true, Some(p)) if validation::validate_predough_percent(p).is_ok() => Some(p),
            (true, _) => Some(DEFAULT_PREDOUGH_PERCENT),
        };
        if self.oven_type.is_wood_oven() {
            self.pizza_surface = PizzaSurface::None;
        }
        self
    }

    /// Change the preparation method the way the form does
    pub fn with_preparation_method(mut self, method: PreparationMethod) -> Self {
        if !method.uses_predough() {
            self.predough_percent = None;
        } else if !self.preparation_method.uses_predough() && self.predough_percent.is_none() {
            self.predough_percent = Some(DEFAULT_PREDOUGH_PERCENT);
        }
        self.preparation_method = method;
        self
    }

    /// Change the oven type; wood ovens never use a separate surface
    pub fn with_oven_type(mut self, oven_type: OvenType) -> Self {
        self.oven_type = oven_type;
        if oven_type.is_wood_oven() {
            self.pizza_surface = PizzaSurface::None;
        }
        self
    }

    /// Change the surface; ignored for wood ovens
    pub fn with_pizza_surface(mut self, surface: PizzaSurface) -> Self {
        self.pizza_surface = if self.oven_type.is_wood_oven() {
            PizzaSurface::None
        } else {
            surface
        };
        self
    }

    pub fn with_topping(mut self, topping: Topping, selected: bool) -> Self {
        if selected {
            self.toppings.insert(topping);
        } else {
            self.toppings.remove(&topping);
        }
        self
    }
}
