//! Timeline of the preparation, counted backwards from the eating moment

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::i18n::{self, Text};
use crate::models::{Configuration, OvenSize, OvenType, PreparationMethod};
use crate::types::Language;

/// Minutes between the start of baking and eating
pub const BAKING_WINDOW_MINUTES: i64 = 60;

/// Preheat times are rounded up to this step
pub const PREHEAT_STEP_MINUTES: u32 = 15;

/// Hour at which the day-before pre-dough is made
const DAY_BEFORE_PREDOUGH_HOUR: u32 = 20;

/// Key moments of the preparation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleMoments {
    pub eating: NaiveDateTime,
    pub baking_start: NaiveDateTime,
    pub pre_dough: Option<NaiveDateTime>,
    pub main_dough: NaiveDateTime,
    pub preheat_start: NaiveDateTime,
}

impl ScheduleMoments {
    pub fn for_configuration(config: &Configuration) -> Self {
        let eating = config.eating_at;
        let baking_start = eating - Duration::minutes(BAKING_WINDOW_MINUTES);

        let (pre_dough, main_dough) = match config.preparation_method {
            PreparationMethod::DayBefore => {
                let evening = NaiveTime::from_hms_opt(DAY_BEFORE_PREDOUGH_HOUR, 0, 0)
                    .unwrap_or_default();
                let day_before = (eating - Duration::days(1)).date();
                (
                    Some(day_before.and_time(evening)),
                    baking_start - Duration::hours(3),
                )
            }
            PreparationMethod::EightHoursBefore => (
                Some(eating - Duration::hours(8)),
                baking_start - Duration::hours(2),
            ),
            PreparationMethod::NoPreDough => (None, baking_start - Duration::hours(2)),
        };

        let preheat = preheat_minutes(config.oven_type, config.oven_size);
        Self {
            eating,
            baking_start,
            pre_dough,
            main_dough,
            preheat_start: baking_start - Duration::minutes(i64::from(preheat)),
        }
    }

    /// Moment of the first task
    pub fn earliest_start(&self) -> NaiveDateTime {
        self.pre_dough
            .map_or(self.main_dough, |pre| pre.min(self.main_dough))
    }
}

/// True when the first task should already have started
///
/// Advisory only; the recipe is still produced.
pub fn is_start_time_in_past(config: &Configuration, now: NaiveDateTime) -> bool {
    let in_past = ScheduleMoments::for_configuration(config).earliest_start() < now;
    if in_past {
        tracing::debug!(eating_at = %config.eating_at, %now, "first task lies in the past");
    }
    in_past
}

/// Preheat time for an oven, rounded up to full quarter hours
pub fn preheat_minutes(oven_type: OvenType, oven_size: OvenSize) -> u32 {
    let scaled_tenths = oven_type.base_preheat_minutes() * oven_size.preheat_multiplier_tenths();
    let step_tenths = PREHEAT_STEP_MINUTES * 10;
    scaled_tenths.div_ceil(step_tenths) * PREHEAT_STEP_MINUTES
}

/// "45min", "60min (1h)" or "90min (1h 30min)"
pub fn preheat_duration_label(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{}min", minutes);
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest == 0 {
        format!("{}min ({}h)", minutes, hours)
    } else {
        format!("{}min ({}h {}min)", minutes, hours, rest)
    }
}

pub fn total_time_label(method: PreparationMethod, language: Language) -> &'static str {
    i18n::text(language, Text::TotalTime(method))
}

/// Weekday, date and time in the conventions of the language
pub fn format_date_time(moment: NaiveDateTime, language: Language) -> String {
    let weekday = i18n::text(language, Text::Weekday(moment.weekday()));
    let date = moment
        .format(i18n::text(language, Text::DateFormat))
        .to_string();
    let time = format_clock_time(moment, language);
    i18n::render(
        language,
        Text::DateTimeLayout,
        &[("weekday", weekday), ("date", date.as_str()), ("time", time.as_str())],
    )
}

/// Clock time alone: "16:15" or "04:15 PM"
pub fn format_clock_time(moment: NaiveDateTime, language: Language) -> String {
    moment
        .format(i18n::text(language, Text::TimeFormat))
        .to_string()
}
