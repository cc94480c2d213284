//! Routes events to the all-day banner or the timed grid.

use crate::models::event::Event;

/// Where an event is drawn in the week grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// All-day strip above the hourly grid.
    Banner,
    /// Hourly grid of a single day.
    Timed,
}

/// An event is multi-day when it is flagged all-day or its end falls on a
/// later calendar date than its start.
///
/// The comparison is on calendar dates, not duration: 23:00 to 01:00 the
/// next morning is a two-hour event but still lands in the banner.
pub fn is_multi_day(event: &Event) -> bool {
    event.all_day || (event.end_date() - event.start_date()).num_days() >= 1
}

pub fn classify(event: &Event) -> EventKind {
    if is_multi_day(event) {
        EventKind::Banner
    } else {
        EventKind::Timed
    }
}
