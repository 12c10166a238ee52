//! Clock formatting: locale rules for the header time/date and date stamps.

use chrono::format::{DelayedFormat, StrftimeItems};
use chrono::{Locale, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;

/// Locales the clock can render in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateLocale {
    #[default]
    Polish,
    English,
}

/// Snapshot of what the clock widget displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    pub time: String,
    pub date: String,
}

impl ClockFace {
    #[must_use]
    pub fn at(now: NaiveDateTime, locale: DateLocale) -> Self {
        Self {
            time: format_time(now.time()),
            date: format_long_date(now.date(), locale),
        }
    }
}

/// 24-hour `HH:MM:SS`, identical in every supported locale.
#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Weekday, day, month name and year.
#[must_use]
pub fn format_long_date(date: NaiveDate, locale: DateLocale) -> String {
    let pattern = match locale {
        DateLocale::Polish => "%A, %-d %B %Y",
        DateLocale::English => "%A, %B %-d, %Y",
    };
    localized(date, pattern, locale)
}

/// Numeric date used for "Data:" stamps.
#[must_use]
pub fn format_short_date(date: NaiveDate, locale: DateLocale) -> String {
    let pattern = match locale {
        DateLocale::Polish => "%d.%m.%Y",
        DateLocale::English => "%-m/%-d/%Y",
    };
    date.format(pattern).to_string()
}

impl DateLocale {
    fn chrono(self) -> Locale {
        match self {
            Self::Polish => Locale::pl_PL,
            Self::English => Locale::en_US,
        }
    }
}

fn localized(date: NaiveDate, pattern: &str, locale: DateLocale) -> String {
    let locale = locale.chrono();
    DelayedFormat::new_with_locale(
        Some(date),
        None,
        StrftimeItems::new_with_locale(pattern, locale),
        locale,
    )
    .to_string()
}
