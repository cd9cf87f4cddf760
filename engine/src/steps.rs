//! Recipe step assembly
//!
//! The dough steps are produced as one keyed sequence and then split into the
//! pre-dough and main dough phases at the first step that closes the
//! pre-dough. Rendered text is never inspected.

use crate::i18n::{self, StepKey, Text};
use crate::models::{
    Configuration, KneadingMethod, PreparationMethod, Recipe, RecipePhase, YeastType,
};
use crate::quantities::{DerivedQuantities, PredoughSplit};
use crate::schedule::{self, ScheduleMoments};
use crate::types::{Language, UnitSystem};
use crate::units;

/// A rendered step together with the key it was rendered from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub key: StepKey,
    pub text: String,
}

/// Collects rendered steps in order
struct StepWriter {
    language: Language,
    units: UnitSystem,
    steps: Vec<Step>,
}

impl StepWriter {
    fn new(language: Language, units: UnitSystem) -> Self {
        Self {
            language,
            units,
            steps: Vec::new(),
        }
    }

    fn push(&mut self, key: StepKey, params: &[(&str, &str)]) {
        let text = i18n::render(self.language, Text::Step(key), params);
        self.steps.push(Step {
            key,
            text: units::convert_measurements_in_text(&text, self.units),
        });
    }

    fn push_plain(&mut self, key: StepKey) {
        self.push(key, &[]);
    }

    fn push_amount(&mut self, key: StepKey, amount: u32) {
        self.push(key, &[("amount", amount.to_string().as_str())]);
    }

    fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

/// All dough steps from the first pre-dough task to the dough balls
pub fn dough_steps(config: &Configuration, language: Language, units: UnitSystem) -> Vec<Step> {
    let quantities = DerivedQuantities::for_configuration(config);
    let machine = config.kneading_method == KneadingMethod::ByMachine;
    let yeast = yeast_in_sentence(config.yeast_type, language);
    let mut w = StepWriter::new(language, units);

    match config.preparation_method {
        PreparationMethod::DayBefore | PreparationMethod::EightHoursBefore => {
            let day_before = config.preparation_method == PreparationMethod::DayBefore;
            let split = PredoughSplit::new(&quantities, config.effective_predough_percent());

            let make = if day_before {
                StepKey::MakePredoughDayBefore
            } else {
                StepKey::MakePredoughSameDay
            };
            w.push(make, &[("weight", split.predough_weight.to_string().as_str())]);
            w.push(
                StepKey::TakePredoughBowl,
                &[("size", decimal_text(split.predough_bowl_liters).as_str())],
            );
            w.push_amount(StepKey::PourWater, split.predough_water);
            w.push(
                StepKey::AddYeast,
                &[
                    ("amount", quantities.yeast_grams.to_string().as_str()),
                    ("yeast", yeast.as_str()),
                ],
            );
            w.push_amount(StepKey::AddHoney, quantities.honey_grams);
            w.push_amount(StepKey::AddPredoughFlour, split.predough_flour);

            if day_before {
                w.push(StepKey::RestPredough, &[("hours", "1")]);
                w.push_plain(StepKey::PutInFridge);
                w.push_plain(StepKey::TakeFromFridge);
            } else {
                w.push(StepKey::RestPredoughLong, &[("hours", "6")]);
            }

            if machine {
                w.push_plain(StepKey::PrepareMixer);
                w.push_plain(StepKey::PredoughIntoMixer);
                w.push_amount(StepKey::AddWaterSlowly, split.main_dough_water);
            } else {
                w.push(
                    StepKey::PredoughIntoNewBowl,
                    &[("size", decimal_text(split.main_dough_bowl_liters).as_str())],
                );
                w.push_amount(StepKey::AddWater, split.main_dough_water);
            }
            w.push_amount(StepKey::AddSaltAndStir, quantities.salt_grams);
            if machine {
                w.push_plain(StepKey::AddOil);
            }
            w.push_amount(StepKey::AddFlourAndMix, split.main_dough_flour);
        }
        PreparationMethod::NoPreDough => {
            w.push(
                StepKey::TakeBowl,
                &[("size", decimal_text(quantities.bowl_size_liters).as_str())],
            );
            w.push_amount(StepKey::PourWater, quantities.water_ml);
            w.push(
                StepKey::AddYeast,
                &[
                    ("amount", quantities.yeast_grams.to_string().as_str()),
                    ("yeast", yeast.as_str()),
                ],
            );
            w.push_amount(StepKey::AddHoneyAndWait, quantities.honey_grams);
            w.push_amount(StepKey::AddFlour, quantities.flour_grams);
            w.push_amount(StepKey::AddSaltAndMix, quantities.salt_grams);
            if machine {
                w.push_plain(StepKey::AddOil);
            }
        }
    }

    w.push_plain(if machine {
        StepKey::KneadByMachine
    } else {
        StepKey::KneadByHand
    });
    w.push_plain(StepKey::FormBall);
    w.push_plain(StepKey::CoverAndRest);
    w.push_plain(StepKey::FoldDough);
    w.push_plain(StepKey::FormBallAgain);
    let ball = format!("{}g", config.pizza_size.ball_weight_grams());
    w.push(
        StepKey::DivideDough,
        &[
            ("count", config.pizza_count.to_string().as_str()),
            ("size", ball.as_str()),
        ],
    );
    w.push_plain(StepKey::PutInContainer);

    w.into_steps()
}

/// Split dough steps into pre-dough and main dough
///
/// Everything up to and including the first closing step belongs to the
/// pre-dough. Without such a step the whole sequence is main dough.
pub fn split_at_predough(steps: Vec<Step>) -> (Vec<Step>, Vec<Step>) {
    match steps.iter().position(|step| step.key.closes_predough()) {
        Some(last) => {
            let mut pre_dough = steps;
            let main_dough = pre_dough.split_off(last + 1);
            (pre_dough, main_dough)
        }
        None => (Vec::new(), steps),
    }
}

/// Preheat, shape and bake
pub fn baking_steps(
    config: &Configuration,
    moments: &ScheduleMoments,
    language: Language,
    units: UnitSystem,
) -> Vec<String> {
    let preheat = schedule::preheat_minutes(config.oven_type, config.oven_size);
    let clock_time = schedule::format_clock_time(moments.preheat_start, language);
    let mut w = StepWriter::new(language, units);

    w.push(
        StepKey::PreheatOven,
        &[
            ("duration", schedule::preheat_duration_label(preheat).as_str()),
            ("clock_time", clock_time.as_str()),
        ],
    );
    w.push_plain(StepKey::FormPizza);
    w.push(
        StepKey::CheckTemperature,
        &[
            ("surface", i18n::text(language, Text::SurfaceInText(config.pizza_surface))),
            ("temperature", i18n::text(language, Text::TemperatureBand(config.max_temperature))),
            ("minutes", config.max_temperature.baking_minutes().to_string().as_str()),
        ],
    );

    w.into_steps().into_iter().map(|step| step.text).collect()
}

/// "Pizza Rezept für 4 Pizzen mit Ø25-28cm"
pub fn recipe_title(config: &Configuration, language: Language, units: UnitSystem) -> String {
    let size = diameter_text(config, units);
    i18n::render(
        language,
        Text::RecipeTitle,
        &[
            ("count", config.pizza_count.to_string().as_str()),
            ("size", size.as_str()),
        ],
    )
}

/// Build the complete recipe for a configuration
pub fn assemble_recipe(config: &Configuration, language: Language, units: UnitSystem) -> Recipe {
    let moments = ScheduleMoments::for_configuration(config);
    let day_before = config.preparation_method == PreparationMethod::DayBefore;
    let prefix = |key: Text| day_before.then(|| i18n::text(language, key).to_string());

    let (pre_dough, main_dough) = split_at_predough(dough_steps(config, language, units));
    let texts = |steps: Vec<Step>| steps.into_iter().map(|s| s.text).collect::<Vec<_>>();

    let pre_dough = match moments.pre_dough {
        Some(moment) if !pre_dough.is_empty() => Some(RecipePhase {
            title: i18n::text(language, Text::PreDoughTitle).to_string(),
            day_prefix: prefix(Text::DayBeforePrefix),
            date: schedule::format_date_time(moment, language),
            steps: texts(pre_dough),
        }),
        _ => None,
    };

    let recipe = Recipe {
        title: recipe_title(config, language, units),
        pre_dough,
        main_dough: RecipePhase {
            title: i18n::text(language, Text::MainDoughTitle).to_string(),
            day_prefix: prefix(Text::DayAfterPrefix),
            date: schedule::format_date_time(moments.main_dough, language),
            steps: texts(main_dough),
        },
        baking: RecipePhase {
            title: i18n::text(language, Text::BakingTitle).to_string(),
            day_prefix: None,
            date: schedule::format_date_time(moments.baking_start, language),
            steps: baking_steps(config, &moments, language, units),
        },
        eating_date: schedule::format_date_time(moments.eating, language),
        total_time: schedule::total_time_label(config.preparation_method, language).to_string(),
    };

    tracing::debug!(
        method = ?config.preparation_method,
        steps = recipe.step_count(),
        "assembled recipe"
    );
    recipe
}

/// Pizza diameter in the display unit system
pub(crate) fn diameter_text(config: &Configuration, units: UnitSystem) -> String {
    let diameter = config.pizza_size.diameter();
    if units.is_metric() {
        diameter.to_string()
    } else {
        units::cm_to_inches(diameter)
    }
}

/// English sentences use the yeast name in lower case
fn yeast_in_sentence(yeast: YeastType, language: Language) -> String {
    let name = i18n::text(language, Text::YeastType(yeast));
    match language {
        Language::De => name.to_string(),
        Language::En => name.to_lowercase(),
    }
}

fn decimal_text(value: rust_decimal::Decimal) -> String {
    value.normalize().to_string()
}
