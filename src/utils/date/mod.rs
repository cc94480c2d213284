// Date utility functions
// Week windows and day-relative time arithmetic on local wall-clock values

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

pub const DAYS_PER_WEEK: usize = 7;
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc. Taken modulo 7.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64).rem_euclid(7);
    date - Duration::days(offset)
}

/// Last date of the week containing `date` (inclusive).
pub fn get_week_end(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    get_week_start(date, first_day_of_week) + Duration::days(DAYS_PER_WEEK as i64 - 1)
}

/// The seven consecutive dates of the week containing `date`.
pub fn week_dates(date: NaiveDate, first_day_of_week: u8) -> [NaiveDate; DAYS_PER_WEEK] {
    let start = get_week_start(date, first_day_of_week);
    std::array::from_fn(|offset| start + Duration::days(offset as i64))
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Half-open `[00:00, next 00:00)` bounds of a day.
pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = start_of_day(date);
    (start, start + Duration::days(1))
}

/// Hours elapsed since `day_start`, truncated to whole minutes.
///
/// The next midnight yields `24.0`, so a clipped end still lands on the grid.
pub fn fractional_hours_since(day_start: NaiveDateTime, at: NaiveDateTime) -> f32 {
    (at - day_start).num_minutes() as f32 / 60.0
}
