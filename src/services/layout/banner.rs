//! All-day / multi-day banner segments per day cell.

use chrono::NaiveDate;

use super::bucket::touches_day;
use crate::models::event::Event;
use crate::models::layout::{BannerEntry, BannerRounding};

/// Banner segments for `day`, in the order of `all_day`.
///
/// The title is drawn on the event's first day, and on the window's first
/// day for events that were already running when the window began.
pub fn banner_for_day(all_day: &[&Event], day: NaiveDate, window_start: NaiveDate) -> Vec<BannerEntry> {
    let leading_edge = day == window_start;

    all_day
        .iter()
        .filter(|event| touches_day(event, day))
        .map(|&event| {
            let is_first_day = event.start_date() == day;
            let is_last_day = event.end_date() == day;
            let continues_into_window = leading_edge && event.start_date() < window_start;

            BannerEntry {
                event: event.clone(),
                is_first_day,
                is_last_day,
                show_title: is_first_day || continues_into_window,
                rounding: BannerRounding::for_segment(is_first_day, is_last_day),
                draggable: event.start_date() == event.end_date(),
            }
        })
        .collect()
}
