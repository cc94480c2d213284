//! Distributes events across the days of a display window.

use std::cmp::Ordering;

use chrono::NaiveDate;

use super::classifier::{classify, EventKind};
use crate::models::event::Event;

/// Events of one window, split by where they are drawn.
#[derive(Debug, Default)]
pub struct DayBuckets<'a> {
    /// Banner events touching at least one day of the window.
    pub all_day: Vec<&'a Event>,
    /// Timed events per window day, same order as the window's dates.
    pub timed: Vec<Vec<&'a Event>>,
}

/// True when `day` is the event's start date, its end date, or lies between.
pub fn touches_day(event: &Event, day: NaiveDate) -> bool {
    let start = event.start_date();
    let end = event.end_date();
    day == start || day == end || (start < day && day < end)
}

/// Start ascending, then longer events first, then id for a stable result
/// regardless of input order.
pub fn display_order(a: &Event, b: &Event) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| b.duration().cmp(&a.duration()))
        .then_with(|| a.id.cmp(&b.id))
}

pub fn bucket_events<'a>(days: &[NaiveDate], events: &[&'a Event]) -> DayBuckets<'a> {
    let mut buckets = DayBuckets {
        all_day: Vec::new(),
        timed: vec![Vec::new(); days.len()],
    };

    for &event in events {
        match classify(event) {
            EventKind::Banner => {
                if days.iter().any(|&day| touches_day(event, day)) {
                    buckets.all_day.push(event);
                }
            }
            EventKind::Timed => {
                for (bucket, &day) in buckets.timed.iter_mut().zip(days) {
                    if touches_day(event, day) {
                        bucket.push(event);
                    }
                }
            }
        }
    }

    buckets.all_day.sort_by(|a, b| display_order(a, b));
    buckets
}
