//! English text table

use chrono::Weekday;

use super::{CountUnit, ShoppingItem, StepKey, SummaryField, Text};
use crate::models::{
    KneadingMethod, OvenType, PizzaSurface, PreparationMethod, TemperatureBand, Topping, YeastType,
};

pub(super) fn text(key: Text) -> &'static str {
    match key {
        Text::RecipeTitle => "Pizza Recipe for {count} Pizzas with {size}",
        Text::PreDoughTitle => "Pre-dough Preparation",
        Text::MainDoughTitle => "Main Dough Preparation",
        Text::BakingTitle => "Baking Instructions",
        Text::DayBeforePrefix => "One day before: ",
        Text::DayAfterPrefix => "One day later: ",
        Text::ShoppingTitle => "Shopping List for {count} Pizzas with {size}",
        Text::PastStartTimeWarning => {
            "Warning: The start time for the first task is in the past. Please adjust the date or time."
        }
        Text::NoPredough => "No pre-dough",
        Text::TotalTime(method) => match method {
            PreparationMethod::DayBefore => "24 hours and 30 minutes",
            PreparationMethod::EightHoursBefore => "8 hours and 30 minutes",
            PreparationMethod::NoPreDough => "2 hours",
        },
        Text::Weekday(day) => match day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        },
        Text::DateFormat => "%m/%d/%Y",
        Text::TimeFormat => "%I:%M %p",
        Text::DateTimeLayout => "{weekday}, {date}, {time}",
        Text::Step(step) => step_text(step),
        Text::PreparationMethod(method) => match method {
            PreparationMethod::DayBefore => "Pre-dough a day before",
            PreparationMethod::EightHoursBefore => "8 hours before eating",
            PreparationMethod::NoPreDough => "Without pre-dough",
        },
        Text::YeastType(yeast) => match yeast {
            YeastType::Dry => "Dry yeast",
            YeastType::Fresh => "Fresh yeast",
        },
        Text::KneadingMethod(method) => match method {
            KneadingMethod::ByHand => "By Hand",
            KneadingMethod::ByMachine => "With Machine",
        },
        Text::OvenType(oven) => match oven {
            OvenType::Kitchen => "Kitchen oven",
            OvenType::GasGrill => "Gas grill with lid",
            OvenType::WoodStainless => "Pizza wood oven (stainless steel)",
            OvenType::WoodStone => "Pizza wood oven (stone)",
        },
        Text::PizzaSurface(surface) => match surface {
            PizzaSurface::Stone => "Pizza stone",
            PizzaSurface::Steel => "Pizza steel",
            PizzaSurface::None => "Not necessary",
        },
        Text::SurfaceInText(surface) => match surface {
            PizzaSurface::Stone => "stone",
            PizzaSurface::Steel => "steel",
            PizzaSurface::None => "surface",
        },
        Text::TemperatureBand(band) => match band {
            TemperatureBand::C250To275 => "250-275°C",
            TemperatureBand::C275To300 => "275-300°C",
            TemperatureBand::C300To350 => "300-350°C",
            TemperatureBand::Above350 => "> 350°C",
        },
        Text::Topping(topping) => match topping {
            Topping::Ham => "Ham",
            Topping::Salami => "Salami",
            Topping::HotSalami => "Hot Salami",
            Topping::RawHam => "Raw Ham",
            Topping::Onion => "Onion",
            Topping::Mushrooms => "Mushrooms",
            Topping::Pepperoni => "Pepperoni",
            Topping::Pineapple => "Pineapple",
            Topping::Olives => "Olives",
            Topping::Artichokes => "Artichokes",
            Topping::Garlic => "Garlic",
            Topping::CherryTomatoes => "Cherry Tomatoes",
            Topping::Arugula => "Arugula",
            Topping::Mascarpone => "Mascarpone",
            Topping::Burrata => "Burrata",
        },
        Text::ShoppingItem(item) => match item {
            ShoppingItem::Flour => "Flour (Tipo 00)",
            ShoppingItem::Yeast(YeastType::Dry) => "Dry yeast",
            ShoppingItem::Yeast(YeastType::Fresh) => "Fresh yeast",
            ShoppingItem::Salt => "Salt",
            ShoppingItem::OliveOil => "Olive oil",
            ShoppingItem::Honey => "Honey",
            ShoppingItem::TomatoSauce => "Tomato sauce",
            ShoppingItem::Mozzarella => "Mozzarella",
            ShoppingItem::Basil => "Basil",
            ShoppingItem::Topping(topping) => match topping {
                Topping::Ham => "Ham",
                Topping::Salami => "Salami",
                Topping::HotSalami => "Hot salami",
                Topping::RawHam => "Raw ham",
                Topping::Onion => "Onions",
                Topping::Mushrooms => "Mushrooms",
                Topping::Pepperoni => "Pepperoni",
                Topping::Pineapple => "Pineapple can",
                Topping::Olives => "Olives",
                Topping::Artichokes => "Artichokes",
                Topping::Garlic => "Garlic",
                Topping::CherryTomatoes => "Cherry tomatoes",
                Topping::Arugula => "Arugula",
                Topping::Mascarpone => "Mascarpone",
                Topping::Burrata => "Burrata",
            },
        },
        Text::CountUnit(unit) => match unit {
            CountUnit::Piece => "pcs",
            CountUnit::Bunch => "bunch",
            CountUnit::Clove => "clove(s)",
        },
        Text::Summary(field) => match field {
            SummaryField::Pizzas => "Pizzas",
            SummaryField::Date => "Date",
            SummaryField::Preparation => "Preparation",
            SummaryField::Hydration => "Hydration",
            SummaryField::Yeast => "Yeast",
            SummaryField::PredoughShare => "Pre-dough share",
            SummaryField::Kneading => "Kneading method",
            SummaryField::OvenType => "Oven type",
            SummaryField::MaxTemperature => "Max. temperature",
            SummaryField::Surface => "Pizza surface",
            SummaryField::OvenSize => "Oven size",
            SummaryField::Toppings => "Toppings",
        },
    }
}

fn step_text(step: StepKey) -> &'static str {
    match step {
        StepKey::MakePredoughDayBefore => "The day before, make {weight}g of pre-dough (poolish)",
        StepKey::MakePredoughSameDay => "About 8h before baking, make {weight}g of pre-dough (poolish)",
        StepKey::TakePredoughBowl => "For this, take a bowl with a capacity of at least {size}L",
        StepKey::TakeBowl => "Take a bowl with a capacity of at least {size}L",
        StepKey::PourWater => "Pour in {amount}ml of water",
        StepKey::AddYeast => "Then add {amount}g of {yeast} and stir briefly",
        StepKey::AddHoney => "Next, add {amount}g of honey",
        StepKey::AddHoneyAndWait => "Next, add {amount}g of honey and let it stand for 10 minutes",
        StepKey::AddPredoughFlour => {
            "Finally, add {amount}g of flour and mix with a spoon until no flour is visible"
        }
        StepKey::RestPredough => "Let it rest covered at room temperature for {hours}h",
        StepKey::RestPredoughLong => "Let it rest covered at room temperature for about {hours}h",
        StepKey::PutInFridge => "Then cover and place in the refrigerator",
        StepKey::TakeFromFridge => {
            "The next day, 3 hours before baking, take the bowl with the pre-dough (poolish) out of the refrigerator"
        }
        StepKey::PrepareMixer => "Prepare the stand mixer with the dough hook",
        StepKey::PredoughIntoMixer => "Put the pre-dough (poolish) into the mixer bowl",
        StepKey::PredoughIntoNewBowl => {
            "Take a new bowl with a capacity of at least {size}L and put the pre-dough (poolish) into it"
        }
        StepKey::AddWaterSlowly => "Slowly add {amount}ml of water, one tablespoon at a time",
        StepKey::AddWater => "Add {amount}ml of water",
        StepKey::AddSaltAndStir => "Then add {amount}g of salt and stir",
        StepKey::AddOil => "Add olive oil",
        StepKey::AddFlourAndMix => "Then add {amount}g of flour and mix by hand",
        StepKey::AddFlour => "Then add {amount}g of flour",
        StepKey::AddSaltAndMix => "Next, add {amount}g of salt and mix by hand",
        StepKey::KneadByMachine => "Knead the dough for about 10 minutes",
        StepKey::KneadByHand => {
            "Place the dough on the work surface and knead by hand for about 15-20 minutes"
        }
        StepKey::FormBall => {
            "Form the kneaded dough into a ball on the work surface and lightly coat with olive oil"
        }
        StepKey::CoverAndRest => "Cover with a bowl and let rest for 15 minutes",
        StepKey::FoldDough => {
            "Then lift the dough about 10 times and place it back on the table so that it folds. Always rotate the dough 90° each time."
        }
        StepKey::FormBallAgain => "Form into a ball again and let rest covered for 1 hour",
        StepKey::DivideDough => {
            "Divide the dough into {count} pieces of {size} each and form small balls"
        }
        StepKey::PutInContainer => "Place the balls in a closed container coated with olive oil",
        StepKey::PreheatOven => "Preheat the oven about {duration} before baking (at {clock_time})",
        StepKey::FormPizza => {
            "Form the pizza ball into a pizza base by hand and add toppings just before baking"
        }
        StepKey::CheckTemperature => {
            "Check the temperature of the oven and {surface}. When both are at {temperature}, bake the pizza for about {minutes} minutes"
        }
    }
}
