//! @acp:module "Calendar"
//! @acp:summary "Resolve a calendar date to weekday, Russian labels and weekend flag"
//! @acp:domain core
//! @acp:layer logic
//!
//! The program runs Monday through Saturday, so only Sunday counts as a
//! weekend here.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use serde::Serialize;

const DAY_NAMES: [&str; 7] = [
    "Воскресенье",
    "Понедельник",
    "Вторник",
    "Среда",
    "Четверг",
    "Пятница",
    "Суббота",
];

// Genitive forms, as used after a day number ("16 октября").
const MONTH_NAMES: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// @acp:summary "Everything the views need to know about a single day"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateInfo {
    /// Calendar date the info was derived from
    pub date: NaiveDate,
    /// 0 = Sunday .. 6 = Saturday
    pub day_index: u8,
    /// Weekday name, e.g. "Понедельник"
    pub day_name: String,
    /// Long form date, e.g. "16 октября 2026 г."
    pub full_date: String,
    pub is_weekend: bool,
}

impl DateInfo {
    /// @acp:summary "Derive date info for an explicit date"
    pub fn for_date(date: NaiveDate) -> Self {
        let day_index = date.weekday().num_days_from_sunday() as u8;
        Self {
            date,
            day_index,
            day_name: DAY_NAMES[day_index as usize].to_string(),
            full_date: full_date(date),
            is_weekend: date.weekday() == Weekday::Sun,
        }
    }

    /// @acp:summary "Derive date info from the local system clock"
    pub fn today() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    /// Resolve an optional injected date, falling back to the system clock
    pub fn resolve(date: Option<NaiveDate>) -> Self {
        date.map(Self::for_date).unwrap_or_else(Self::today)
    }

    /// Program day: 1 (Monday) ..= 6 (Saturday), none on Sunday
    pub fn working_day(&self) -> Option<u8> {
        if self.is_weekend {
            None
        } else {
            Some(self.day_index)
        }
    }
}

fn full_date(date: NaiveDate) -> String {
    format!(
        "{} {} {} г.",
        date.day(),
        MONTH_NAMES[date.month0() as usize],
        date.year()
    )
}
