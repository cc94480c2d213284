// Property-based tests for overlap column packing
// Random single-day event sets checked against interval-graph invariants

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use week_layout::models::event::Event;
use week_layout::models::settings::LayoutSettings;
use week_layout::services::layout::columns::overlaps;
use week_layout::services::layout::{layout_week, pack_day};

const HOUR: f32 = 56.0;

fn day() -> NaiveDate {
    // Wednesday, Jun 12, 2024
    NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
}

fn midnight() -> NaiveDateTime {
    day().and_hms_opt(0, 0, 0).unwrap()
}

/// (start minute, duration in minutes) pairs relative to the day's midnight.
///
/// Starts may fall on the previous day and ends may run past the next
/// midnight, so clipping is exercised. Zero durations are included.
fn event_samples() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((-180i64..1440, 0i64..=180), 0..24)
}

fn build_events(samples: &[(i64, i64)]) -> Vec<Event> {
    samples
        .iter()
        .enumerate()
        .map(|(id, &(start, duration))| {
            let start_at = midnight() + Duration::minutes(start);
            let end_at = start_at + Duration::minutes(duration);
            Event::new(id as i64, format!("Event {id}"), start_at, end_at).unwrap()
        })
        .collect()
}

/// Each event's span after clamping to `day()`, indexed like `events`
fn clipped(events: &[Event]) -> Vec<(NaiveDateTime, NaiveDateTime)> {
    let day_start = midnight();
    let day_end = day_start + Duration::days(1);
    events
        .iter()
        .map(|e| {
            let start = e.start.clamp(day_start, day_end);
            (start, e.end.clamp(start, day_end))
        })
        .collect()
}

/// Largest set of pairwise-overlapping spans.
///
/// Any such set has a latest starter that every other member overlaps, so
/// it is enough to count, for each span, the earlier-or-equal starters that
/// overlap it. Zero-length spans overlap nothing and only count themselves.
fn max_clique(spans: &[(NaiveDateTime, NaiveDateTime)]) -> usize {
    spans
        .iter()
        .enumerate()
        .map(|(i, &(start, end))| {
            1 + spans
                .iter()
                .enumerate()
                .filter(|&(j, &(s, e))| j != i && s <= start && overlaps(s, e, start, end))
                .count()
        })
        .max()
        .unwrap_or(0)
}

proptest! {
    /// Property: events sharing a column never overlap
    #[test]
    fn prop_same_column_never_overlaps(samples in event_samples()) {
        let events = build_events(&samples);
        let refs: Vec<&Event> = events.iter().collect();
        let placed = pack_day(day(), &refs, HOUR);
        let spans = clipped(&events);

        prop_assert_eq!(placed.len(), events.len());
        for (i, a) in placed.iter().enumerate() {
            for b in placed.iter().skip(i + 1) {
                if a.column == b.column {
                    let (a_start, a_end) = spans[a.event.id as usize];
                    let (b_start, b_end) = spans[b.event.id as usize];
                    prop_assert!(!overlaps(a_start, a_end, b_start, b_end));
                }
            }
        }
    }

    /// Property: column count equals the largest overlapping clique
    #[test]
    fn prop_column_count_is_max_clique(samples in event_samples()) {
        let events = build_events(&samples);
        let refs: Vec<&Event> = events.iter().collect();
        let placed = pack_day(day(), &refs, HOUR);

        let columns = placed.iter().map(|p| p.column + 1).max().unwrap_or(0);
        prop_assert_eq!(columns, max_clique(&clipped(&events)));
    }

    /// Property: geometry stays inside the day column
    #[test]
    fn prop_geometry_within_day(samples in event_samples()) {
        let events = build_events(&samples);
        let refs: Vec<&Event> = events.iter().collect();

        for placed in pack_day(day(), &refs, HOUR) {
            prop_assert!(placed.top >= 0.0);
            prop_assert!(placed.height >= 0.0);
            prop_assert!(placed.top + placed.height <= 24.0 * HOUR + 1e-3);
            prop_assert_eq!(placed.z_index, 10 + placed.column as u32);
        }
    }

    /// Property: layout is identical across runs and input orders
    #[test]
    fn prop_layout_ignores_input_order(samples in event_samples()) {
        let events = build_events(&samples);
        let mut reversed = events.clone();
        reversed.reverse();
        let settings = LayoutSettings::default();

        let first = layout_week(day(), &events, &settings);
        prop_assert_eq!(&first, &layout_week(day(), &events, &settings));
        prop_assert_eq!(&first, &layout_week(day(), &reversed, &settings));
    }
}
