//! Week and day layout entry points.
//!
//! A layout pass is a pure function of `(date, events, settings)`:
//! events are validated, split into banner and timed sets, bucketed per
//! day, and each day's timed events are packed into overlap columns
//! independently of its neighbours.

use chrono::NaiveDate;

use crate::models::event::{Event, EventError};
use crate::models::layout::{CalendarLayout, DayLayout};
use crate::models::settings::LayoutSettings;
use crate::utils::date::{get_week_start, week_dates};

pub mod banner;
pub mod bucket;
pub mod classifier;
pub mod columns;

pub use banner::banner_for_day;
pub use bucket::{bucket_events, touches_day, DayBuckets};
pub use classifier::{classify, is_multi_day, EventKind};
pub use columns::pack_day;

/// Lay out the week containing `current_date`.
pub fn layout_week(
    current_date: NaiveDate,
    events: &[Event],
    settings: &LayoutSettings,
) -> CalendarLayout {
    let days = week_dates(current_date, settings.first_day_of_week);
    layout_window(days[0], &days, events, settings)
}

/// Lay out a single day; the day itself acts as the window's first column.
pub fn layout_day(date: NaiveDate, events: &[Event], settings: &LayoutSettings) -> CalendarLayout {
    layout_window(date, &[date], events, settings)
}

/// Lay out the consecutive `days` of a window beginning at `window_start`.
fn layout_window(
    window_start: NaiveDate,
    days: &[NaiveDate],
    events: &[Event],
    settings: &LayoutSettings,
) -> CalendarLayout {
    let (accepted, rejected) = ingest(events);

    let window_end = days.last().copied().unwrap_or(window_start);
    let buckets = bucket_events(days, &accepted);

    let days = days
        .iter()
        .zip(&buckets.timed)
        .map(|(&date, timed)| {
            let timed = pack_day(date, timed, settings.hour_unit_height);
            let column_count = timed.iter().map(|placed| placed.column + 1).max().unwrap_or(0);
            DayLayout {
                date,
                banner: banner_for_day(&buckets.all_day, date, window_start),
                timed,
                column_count,
            }
        })
        .collect();

    CalendarLayout {
        start: window_start,
        end: window_end,
        days,
        rejected,
    }
}

/// Split out events whose range is inverted instead of producing negative geometry.
fn ingest(events: &[Event]) -> (Vec<&Event>, Vec<EventError>) {
    let mut accepted = Vec::with_capacity(events.len());
    let mut rejected = Vec::new();

    for event in events {
        match event.validate() {
            Ok(()) => accepted.push(event),
            Err(err) => {
                log::warn!("Skipping event in layout: {}", err);
                rejected.push(err);
            }
        }
    }

    (accepted, rejected)
}

struct CacheEntry {
    window_start: NaiveDate,
    events: Vec<Event>,
    settings: LayoutSettings,
    layout: CalendarLayout,
}

/// Remembers the last week layout and reuses it while the input is unchanged.
#[derive(Default)]
pub struct LayoutCache {
    entry: Option<CacheEntry>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn week(
        &mut self,
        current_date: NaiveDate,
        events: &[Event],
        settings: &LayoutSettings,
    ) -> &CalendarLayout {
        let window_start = get_week_start(current_date, settings.first_day_of_week);
        let fresh = self.entry.as_ref().is_some_and(|entry| {
            entry.window_start == window_start
                && entry.settings == *settings
                && entry.events == events
        });

        if !fresh {
            log::debug!("Recomputing week layout starting {}", window_start);
            self.entry = None;
        }

        let entry = self.entry.get_or_insert_with(|| CacheEntry {
            window_start,
            events: events.to_vec(),
            settings: settings.clone(),
            layout: layout_week(current_date, events, settings),
        });
        &entry.layout
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
