//! Calendar helpers shared by the date, time and showing dimensions.
//!
//! Weekends follow the Friday/Saturday convention and weeks start on Monday.

use chrono::Datelike;
use chrono::Duration;
use chrono::NaiveDate;
use chrono::NaiveTime;
use chrono::Timelike;
use chrono::Weekday;
use strum_macros::Display;
use strum_macros::IntoStaticStr;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, IntoStaticStr)]
pub enum TimeSlot {
    #[strum(serialize = "MORNING")]
    Morning,
    #[strum(serialize = "AFTERNOON")]
    Afternoon,
    #[strum(serialize = "NIGHT")]
    Night,
}

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, IntoStaticStr)]
pub enum HallSizeCategory {
    #[strum(serialize = "SMALL")]
    Small,
    #[strum(serialize = "MID")]
    Mid,
    #[strum(serialize = "LARGE")]
    Large,
}

pub fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Fri | Weekday::Sat)
}

pub fn week_start(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.weekday().num_days_from_monday() as i64)
}

/// `YYYYMMDD` surrogate key.
pub fn date_key(d: NaiveDate) -> i32 {
    d.year() * 10000 + d.month() as i32 * 100 + d.day() as i32
}

/// `HHMMSS` surrogate key.
pub fn time_key(t: NaiveTime) -> i32 {
    t.hour() as i32 * 10000 + t.minute() as i32 * 100 + t.second() as i32
}

// 06:00:00-11:59:59 morning, 12:00:00-17:59:59 afternoon, the rest is night
pub fn time_slot(t: NaiveTime) -> TimeSlot {
    match t.hour() {
        6..=11 => TimeSlot::Morning,
        12..=17 => TimeSlot::Afternoon,
        _ => TimeSlot::Night,
    }
}

pub fn hall_size_category(size: i32) -> HallSizeCategory {
    if size <= 80 {
        HallSizeCategory::Small
    } else if size <= 180 {
        HallSizeCategory::Mid
    } else {
        HallSizeCategory::Large
    }
}

/// Every day in `[start, end]`.
pub fn days(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}
