//! Overlap column packing for the timed events of one day.
//!
//! Events are clipped to the day, ordered by start (longer first on ties)
//! and greedily dropped into the first column where they overlap nothing.
//! Column 0 spans the whole day width; every further column is shifted
//! right by a tenth and narrowed to 90% so the group renders as a cascade.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::event::Event;
use crate::models::layout::PositionedEvent;
use crate::utils::date::{day_bounds, fractional_hours_since};

pub const COLUMN_OFFSET_STEP: f32 = 0.1;
pub const STACKED_COLUMN_WIDTH: f32 = 0.9;
pub const BASE_Z_INDEX: u32 = 10;

/// An event's portion of the day being laid out.
#[derive(Debug, Clone, Copy)]
struct Clipped<'a> {
    event: &'a Event,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

/// Events already placed in one horizontal slot, as `(start, end)` pairs.
#[derive(Debug, Default)]
struct Column {
    placed: Vec<(NaiveDateTime, NaiveDateTime)>,
}

impl Column {
    fn fits(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.placed
            .iter()
            .all(|&(placed_start, placed_end)| !overlaps(placed_start, placed_end, start, end))
    }
}

/// Open-interval overlap: touching endpoints do not count.
pub fn overlaps(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Horizontal placement `(left, width)` for a column index.
pub fn column_geometry(column: usize) -> (f32, f32) {
    if column == 0 {
        (0.0, 1.0)
    } else {
        (column as f32 * COLUMN_OFFSET_STEP, STACKED_COLUMN_WIDTH)
    }
}

/// Lay out the timed events of `day`, returning them in placement order.
pub fn pack_day(day: NaiveDate, events: &[&Event], hour_unit_height: f32) -> Vec<PositionedEvent> {
    let (day_start, day_end) = day_bounds(day);

    let mut clipped: Vec<Clipped<'_>> = events
        .iter()
        .map(|&event| {
            let start = event.start.clamp(day_start, day_end);
            let end = event.end.clamp(start, day_end);
            Clipped { event, start, end }
        })
        .collect();

    clipped.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| (b.end - b.start).cmp(&(a.end - a.start)))
            .then_with(|| a.event.id.cmp(&b.event.id))
    });

    let mut columns: Vec<Column> = Vec::new();
    let mut positioned = Vec::with_capacity(clipped.len());

    for item in clipped {
        let index = match columns.iter().position(|column| column.fits(item.start, item.end)) {
            Some(index) => index,
            None => {
                columns.push(Column::default());
                columns.len() - 1
            }
        };
        columns[index].placed.push((item.start, item.end));

        let start_hour = fractional_hours_since(day_start, item.start);
        let end_hour = fractional_hours_since(day_start, item.end);
        let (left, width) = column_geometry(index);

        positioned.push(PositionedEvent {
            event: item.event.clone(),
            top: start_hour * hour_unit_height,
            height: (end_hour - start_hour) * hour_unit_height,
            left,
            width,
            z_index: BASE_Z_INDEX + index as u32,
            column: index,
        });
    }

    if !positioned.is_empty() {
        log::debug!(
            "packed {} timed events on {} into {} columns",
            positioned.len(),
            day,
            columns.len()
        );
    }

    positioned
}
