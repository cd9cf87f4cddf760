//! German text table

use chrono::Weekday;

use super::{CountUnit, ShoppingItem, StepKey, SummaryField, Text};
use crate::models::{
    KneadingMethod, OvenType, PizzaSurface, PreparationMethod, TemperatureBand, Topping, YeastType,
};

pub(super) fn text(key: Text) -> &'static str {
    match key {
        Text::RecipeTitle => "Pizza Rezept für {count} Pizzen mit {size}",
        Text::PreDoughTitle => "Vorteig Zubereitung",
        Text::MainDoughTitle => "Hauptteig Zubereitung",
        Text::BakingTitle => "Backanleitung",
        Text::DayBeforePrefix => "Ein Tag vorher: ",
        Text::DayAfterPrefix => "Ein Tag später: ",
        Text::ShoppingTitle => "Einkaufsliste für {count} Pizzen mit {size}",
        Text::PastStartTimeWarning => {
            "Achtung: Der Startzeitpunkt für die erste Aufgabe liegt in der Vergangenheit. Bitte passe das Datum oder die Uhrzeit an."
        }
        Text::NoPredough => "Kein Vorteig",
        Text::TotalTime(method) => match method {
            PreparationMethod::DayBefore => "24 Stunden und 30 Minuten",
            PreparationMethod::EightHoursBefore => "8 Stunden und 30 Minuten",
            PreparationMethod::NoPreDough => "2 Stunden",
        },
        Text::Weekday(day) => match day {
            Weekday::Mon => "Montag",
            Weekday::Tue => "Dienstag",
            Weekday::Wed => "Mittwoch",
            Weekday::Thu => "Donnerstag",
            Weekday::Fri => "Freitag",
            Weekday::Sat => "Samstag",
            Weekday::Sun => "Sonntag",
        },
        Text::DateFormat => "%d.%m.%Y",
        Text::TimeFormat => "%H:%M",
        Text::DateTimeLayout => "{weekday}, {date}, {time} Uhr",
        Text::Step(step) => step_text(step),
        Text::PreparationMethod(method) => match method {
            PreparationMethod::DayBefore => "Vorteig ein Tag zuvor",
            PreparationMethod::EightHoursBefore => "Vorteig 8 Stunden vor dem Essen",
            PreparationMethod::NoPreDough => "Ohne Vorteig",
        },
        Text::YeastType(yeast) => match yeast {
            YeastType::Dry => "Trockenhefe",
            YeastType::Fresh => "Frischhefe",
        },
        Text::KneadingMethod(method) => match method {
            KneadingMethod::ByHand => "Von Hand",
            KneadingMethod::ByMachine => "Mit Maschine",
        },
        Text::OvenType(oven) => match oven {
            OvenType::Kitchen => "Backofen",
            OvenType::GasGrill => "Gasgrill mit Deckel",
            OvenType::WoodStainless => "Pizzaholzofen aus Edelstahl",
            OvenType::WoodStone => "Pizzaholzofen aus Stein",
        },
        Text::PizzaSurface(surface) => match surface {
            PizzaSurface::Stone => "Pizzastein",
            PizzaSurface::Steel => "Pizzastahl",
            PizzaSurface::None => "Keine",
        },
        Text::SurfaceInText(surface) => match surface {
            PizzaSurface::Stone => "Stein",
            PizzaSurface::Steel => "Stahl",
            PizzaSurface::None => "Oberfläche",
        },
        Text::TemperatureBand(band) => match band {
            TemperatureBand::C250To275 => "250-275°C",
            TemperatureBand::C275To300 => "275-300°C",
            TemperatureBand::C300To350 => "300-350°C",
            TemperatureBand::Above350 => "über 350°C",
        },
        Text::Topping(topping) => match topping {
            Topping::Ham => "Schinken",
            Topping::Salami => "Salami",
            Topping::HotSalami => "Scharfe Salami",
            Topping::RawHam => "Rohschinken",
            Topping::Onion => "Zwiebeln",
            Topping::Mushrooms => "Champignons",
            Topping::Pepperoni => "Peperoni",
            Topping::Pineapple => "Ananas",
            Topping::Olives => "Oliven",
            Topping::Artichokes => "Artischocken",
            Topping::Garlic => "Knoblauch",
            Topping::CherryTomatoes => "Kirschtomaten",
            Topping::Arugula => "Rucola",
            Topping::Mascarpone => "Mascarpone",
            Topping::Burrata => "Burrata",
        },
        Text::ShoppingItem(item) => match item {
            ShoppingItem::Flour => "Mehl (Tipo 00)",
            ShoppingItem::Yeast(YeastType::Dry) => "Trockenhefe",
            ShoppingItem::Yeast(YeastType::Fresh) => "Frischhefe",
            ShoppingItem::Salt => "Salz",
            ShoppingItem::OliveOil => "Olivenöl",
            ShoppingItem::Honey => "Honig",
            ShoppingItem::TomatoSauce => "Tomatensoße",
            ShoppingItem::Mozzarella => "Mozzarella",
            ShoppingItem::Basil => "Basilikum",
            ShoppingItem::Topping(Topping::Pineapple) => "Ananas Dose",
            ShoppingItem::Topping(topping) => text(Text::Topping(topping)),
        },
        Text::CountUnit(unit) => match unit {
            CountUnit::Piece => "Stück",
            CountUnit::Bunch => "Bund",
            CountUnit::Clove => "Zehen",
        },
        Text::Summary(field) => match field {
            SummaryField::Pizzas => "Pizzen",
            SummaryField::Date => "Datum",
            SummaryField::Preparation => "Vorbereitung",
            SummaryField::Hydration => "Hydration",
            SummaryField::Yeast => "Hefe",
            SummaryField::PredoughShare => "Vorteiganteil",
            SummaryField::Kneading => "Knetmethode",
            SummaryField::OvenType => "Ofentyp",
            SummaryField::MaxTemperature => "Max. Temperatur",
            SummaryField::Surface => "Pizzaunterlage",
            SummaryField::OvenSize => "Ofengröße",
            SummaryField::Toppings => "Belag",
        },
    }
}

fn step_text(step: StepKey) -> &'static str {
    match step {
        StepKey::MakePredoughDayBefore => "Am Vortag {weight}g Vorteig (Poolish) herstellen",
        StepKey::MakePredoughSameDay => "Ca. 8h vor dem Backen {weight}g Vorteig (Poolish) herstellen",
        StepKey::TakePredoughBowl => {
            "Dazu eine Schüssel mit einem Fassungsvermögen von mind. {size}L nehmen"
        }
        StepKey::TakeBowl => "Eine Schüssel mit einem Fassungsvermögen von mind. {size}L nehmen",
        StepKey::PourWater => "{amount}ml Wasser hineingeben",
        StepKey::AddYeast => "Dann {amount}g {yeast} dazu geben und kurz umrühren",
        StepKey::AddHoney => "Danach {amount}g Honig beimischen",
        StepKey::AddHoneyAndWait => "Danach {amount}g Honig beimischen und 10min stehen lassen",
        StepKey::AddPredoughFlour => {
            "Zum Schluss {amount}g Mehl hinein geben und mit einem Löffel mischen bis kein Mehl mehr zu sehen ist"
        }
        StepKey::RestPredough => "Dann {hours}h zugedeckt bei Zimmertemperatur stehen lassen",
        StepKey::RestPredoughLong => "Dann ca. {hours}h zugedeckt bei Zimmertemperatur stehen lassen",
        StepKey::PutInFridge => "Danach zugedeckt in den Kühlschrank geben",
        StepKey::TakeFromFridge => {
            "Am nächsten Tag 3h vor dem Backen die Schüssel mit dem Vorteig (Poolish) aus dem Kühlschrank nehmen"
        }
        StepKey::PrepareMixer => "Küchenmaschine mit Knethaken vorbereiten",
        StepKey::PredoughIntoMixer => "Den Vorteig (Poolish) in den Behälter der Küchenmaschine geben",
        StepKey::PredoughIntoNewBowl => {
            "Eine neue Schüssel mit Fassungsvermögen von mind. {size}L nehmen und den Vorteig (Poolish) dort hineingeben"
        }
        StepKey::AddWaterSlowly => "{amount}ml Wasser langsam esslöffelweise hinzugeben",
        StepKey::AddWater => "{amount}ml Wasser hinzugeben",
        StepKey::AddSaltAndStir => "Dann {amount}g Salz hinzugeben und umrühren",
        StepKey::AddOil => "Olivenöl zugeben",
        StepKey::AddFlourAndMix => "Danach {amount}g Mehl dazugeben und von Hand vermischen",
        StepKey::AddFlour => "Dann {amount}g Mehl dazugeben",
        StepKey::AddSaltAndMix => "Als nächstes {amount}g Salz hinzugeben und von Hand vermischen",
        StepKey::KneadByMachine => "Teig ca. 10min kneten lassen",
        StepKey::KneadByHand => {
            "Teig auf die Arbeitsplatte geben und Teig ca. 15-20min von Hand kneten"
        }
        StepKey::FormBall => {
            "Gekneteten Teig auf der Arbeitsplatte zu einer Kugel formen und mit Olivenöl leicht einreiben"
        }
        StepKey::CoverAndRest => "Dann mit einer Schüssel zudecken und 15min stehen lassen",
        StepKey::FoldDough => {
            "Dann Teig ca. 10mal anheben und auf den Tisch zurück legen sodass er gefaltet wird. Dabei den Teig immer um 90° drehen."
        }
        StepKey::FormBallAgain => "Wieder zu einer Kugel formen und zugedeckt für 1h stehen lassen",
        StepKey::DivideDough => "Teig in {count} Teiglinge à {size} teilen und kleine Kugeln formen",
        StepKey::PutInContainer => {
            "Kugeln in einen geschlossenen, mit Olivenöl eingeriebenen Behälter geben"
        }
        StepKey::PreheatOven => "Ofen ca. {duration} vor dem Backen aufheizen (um {clock_time} Uhr)",
        StepKey::FormPizza => {
            "Pizzakugel von Hand zu einem Pizzaboden formen und Pizza kurz vor dem Backen belegen"
        }
        StepKey::CheckTemperature => {
            "Temperatur von Ofen und {surface} prüfen. Wenn beides bei {temperature} liegt, Pizza für ca. {minutes}min backen"
        }
    }
}
