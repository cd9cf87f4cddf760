//! Static German and English text tables
//!
//! Every piece of display text is addressed by a typed key. Templates contain
//! `{name}` placeholders that are filled by [`interpolate`].

mod de;
mod en;

use chrono::Weekday;

use crate::models::{
    KneadingMethod, OvenType, PizzaSurface, PreparationMethod, TemperatureBand, Topping, YeastType,
};
use crate::types::Language;

/// Recipe step templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKey {
    // Pre-dough
    MakePredoughDayBefore,
    MakePredoughSameDay,
    TakePredoughBowl,
    TakeBowl,
    PourWater,
    AddYeast,
    AddHoney,
    AddHoneyAndWait,
    AddPredoughFlour,
    RestPredough,
    RestPredoughLong,
    PutInFridge,
    // Main dough
    TakeFromFridge,
    PrepareMixer,
    PredoughIntoMixer,
    PredoughIntoNewBowl,
    AddWaterSlowly,
    AddWater,
    AddSaltAndStir,
    AddOil,
    AddFlourAndMix,
    AddFlour,
    AddSaltAndMix,
    KneadByMachine,
    KneadByHand,
    FormBall,
    CoverAndRest,
    FoldDough,
    FormBallAgain,
    DivideDough,
    PutInContainer,
    // Baking
    PreheatOven,
    FormPizza,
    CheckTemperature,
}

impl StepKey {
    /// Last step of the pre-dough phase
    pub fn closes_predough(&self) -> bool {
        matches!(self, StepKey::PutInFridge | StepKey::RestPredoughLong)
    }
}

/// Shopping list entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShoppingItem {
    Flour,
    Yeast(YeastType),
    Salt,
    OliveOil,
    Honey,
    TomatoSauce,
    Mozzarella,
    Basil,
    Topping(Topping),
}

/// Units for counted shopping amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountUnit {
    Piece,
    Bunch,
    Clove,
}

/// Labels of the configuration summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryField {
    Pizzas,
    Date,
    Preparation,
    Hydration,
    Yeast,
    PredoughShare,
    Kneading,
    OvenType,
    MaxTemperature,
    Surface,
    OvenSize,
    Toppings,
}

/// Every text the engine can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    RecipeTitle,
    PreDoughTitle,
    MainDoughTitle,
    BakingTitle,
    DayBeforePrefix,
    DayAfterPrefix,
    ShoppingTitle,
    PastStartTimeWarning,
    NoPredough,
    TotalTime(PreparationMethod),
    Weekday(Weekday),
    /// chrono format string for dates
    DateFormat,
    /// chrono format string for clock times
    TimeFormat,
    DateTimeLayout,
    Step(StepKey),
    PreparationMethod(PreparationMethod),
    YeastType(YeastType),
    KneadingMethod(KneadingMethod),
    OvenType(OvenType),
    PizzaSurface(PizzaSurface),
    /// Surface as it reads inside a sentence
    SurfaceInText(PizzaSurface),
    TemperatureBand(TemperatureBand),
    Topping(Topping),
    ShoppingItem(ShoppingItem),
    CountUnit(CountUnit),
    Summary(SummaryField),
}

/// Look up a text in the table of the given language
pub fn text(language: Language, key: Text) -> &'static str {
    match language {
        Language::De => de::text(key),
        Language::En => en::text(key),
    }
}

/// Look up a template and fill its placeholders
pub fn render(language: Language, key: Text, params: &[(&str, &str)]) -> String {
    interpolate(text(language, key), params)
}

/// Replace `{name}` placeholders with their values
///
/// Placeholders without a value are left in place so missing parameters are
/// visible instead of silently dropped.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match params.iter().find(|(key, _)| *key == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_fills_placeholders() {
        let out = interpolate("Add {amount}ml of {what}", &[("amount", "250"), ("what", "water")]);
        assert_eq!(out, "Add 250ml of water");
    }

    #[test]
    fn test_interpolate_keeps_unknown_placeholders() {
        assert_eq!(interpolate("{a} and {b}", &[("a", "x")]), "x and {b}");
        assert_eq!(interpolate("open { brace", &[]), "open { brace");
        assert_eq!(interpolate("", &[]), "");
    }

    #[test]
    fn test_render_step_in_both_languages() {
        let de = render(Language::De, Text::Step(StepKey::AddWater), &[("amount", "331")]);
        let en = render(Language::En, Text::Step(StepKey::AddWater), &[("amount", "331")]);
        assert_eq!(de, "331ml Wasser hinzugeben");
        assert_eq!(en, "Add 331ml of water");
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(text(Language::De, Text::Weekday(Weekday::Tue)), "Dienstag");
        assert_eq!(text(Language::En, Text::Weekday(Weekday::Sun)), "Sunday");
    }
}
