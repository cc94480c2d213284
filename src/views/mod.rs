//! Seams to the rendering layer.
//!
//! The layout core never draws anything. A renderer implements the two
//! visual traits below; a host implements [`EventCallbacks`] to decide what
//! selecting an event or clicking an empty slot means.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::event::Event;
use crate::models::layout::{BannerEntry, PositionedEvent};

pub mod week_view;

pub use week_view::{format_time_label, render_layout, EventInteractionResult};

/// Minutes covered by one clickable grid cell.
pub const SLOT_INTERVAL: i64 = 15;

/// A clickable cell of the hourly grid.
#[cfg_attr(test, mockall::automock)]
pub trait TimeSlotTarget {
    /// Draw the cell starting at `hour` (fractional) on `date`. Returns true
    /// when the cell was clicked.
    fn render_slot(&mut self, date: NaiveDate, hour: f32) -> bool;
}

/// Visual for a positioned event.
#[cfg_attr(test, mockall::automock)]
pub trait EventVisual {
    /// Returns true when the event was clicked.
    fn render_timed_event(
        &mut self,
        placed: &PositionedEvent,
        pixel_height: f32,
        time_label: Option<String>,
    ) -> bool;

    /// Returns true when the banner segment was clicked.
    fn render_banner_event(&mut self, date: NaiveDate, entry: &BannerEntry) -> bool;
}

#[cfg_attr(test, mockall::automock)]
pub trait EventCallbacks {
    fn on_event_select(&mut self, event: &Event);
    fn on_event_create(&mut self, start: NaiveDateTime);
}
