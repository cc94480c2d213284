//! Walks a computed layout and hands every piece to the renderer.

use chrono::{Duration, NaiveDateTime};

use super::{EventCallbacks, EventVisual, TimeSlotTarget, SLOT_INTERVAL};
use crate::models::event::Event;
use crate::models::layout::{CalendarLayout, DayLayout};
use crate::models::settings::LayoutSettings;
use crate::utils::date::{start_of_day, MINUTES_PER_DAY};

/// Interactions collected while rendering one layout.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EventInteractionResult {
    /// Event that was clicked for editing
    pub event_to_edit: Option<Event>,
    /// Start time of an empty slot that was clicked
    pub create_at: Option<NaiveDateTime>,
}

impl EventInteractionResult {
    pub fn merge(&mut self, other: EventInteractionResult) {
        if other.event_to_edit.is_some() {
            self.event_to_edit = other.event_to_edit;
        }
        if other.create_at.is_some() {
            self.create_at = other.create_at;
        }
    }

    pub fn has_actions(&self) -> bool {
        self.event_to_edit.is_some() || self.create_at.is_some()
    }
}

/// Format an event's time range according to the clock preference.
pub fn format_time_label(event: &Event, settings: &LayoutSettings) -> String {
    let format = if settings.uses_24h_clock() {
        "%H:%M"
    } else {
        "%-I:%M %p"
    };
    format!(
        "{} - {}",
        event.start.format(format),
        event.end.format(format)
    )
}

/// Render every day of `layout`: banner segments, grid cells, then timed
/// events so that events draw over the cells. Clicks are forwarded to
/// `callbacks` and also returned.
pub fn render_layout(
    layout: &CalendarLayout,
    settings: &LayoutSettings,
    slots: &mut dyn TimeSlotTarget,
    visuals: &mut dyn EventVisual,
    callbacks: &mut dyn EventCallbacks,
) -> EventInteractionResult {
    let mut result = EventInteractionResult::default();
    for day in &layout.days {
        result.merge(render_day(day, settings, slots, visuals, callbacks));
    }
    result
}

fn render_day(
    day: &DayLayout,
    settings: &LayoutSettings,
    slots: &mut dyn TimeSlotTarget,
    visuals: &mut dyn EventVisual,
    callbacks: &mut dyn EventCallbacks,
) -> EventInteractionResult {
    let mut result = EventInteractionResult::default();

    for entry in &day.banner {
        if visuals.render_banner_event(day.date, entry) {
            callbacks.on_event_select(&entry.event);
            result.event_to_edit = Some(entry.event.clone());
        }
    }

    let day_start = start_of_day(day.date);
    for minute in (0..MINUTES_PER_DAY).step_by(SLOT_INTERVAL as usize) {
        if slots.render_slot(day.date, minute as f32 / 60.0) {
            let start = day_start + Duration::minutes(minute);
            callbacks.on_event_create(start);
            result.create_at = Some(start);
        }
    }

    // Labels only fit on blocks at least half an hour tall
    let min_label_height = settings.hour_unit_height / 2.0;
    for placed in &day.timed {
        let label = (placed.height >= min_label_height)
            .then(|| format_time_label(&placed.event, settings));
        if visuals.render_timed_event(placed, placed.height, label) {
            callbacks.on_event_select(&placed.event);
            result.event_to_edit = Some(placed.event.clone());
        }
    }

    result
}
