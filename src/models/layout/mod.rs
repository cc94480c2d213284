//! Layout output types.
//!
//! Everything here is derived data, rebuilt on every layout pass and never
//! patched in place.

use chrono::NaiveDate;
use serde::Serialize;

use super::event::{Event, EventError};

/// A timed event placed in a day column of the hourly grid.
///
/// `top`/`height` share the unit of the configured hour height (24 hours per
/// day). `left`/`width` are fractions of the day column width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedEvent {
    pub event: Event,
    pub top: f32,
    pub height: f32,
    pub left: f32,
    pub width: f32,
    pub z_index: u32,
    /// Overlap column the event was packed into (0 = full width).
    pub column: usize,
}

/// Corner rounding of a banner segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerRounding {
    /// Event starts and ends on this day.
    Full,
    /// First day of a longer span.
    Leading,
    /// Last day of a longer span.
    Trailing,
    /// Middle segment.
    Square,
}

impl BannerRounding {
    pub fn for_segment(is_first_day: bool, is_last_day: bool) -> Self {
        match (is_first_day, is_last_day) {
            (true, true) => Self::Full,
            (true, false) => Self::Leading,
            (false, true) => Self::Trailing,
            (false, false) => Self::Square,
        }
    }
}

/// One day's segment of an all-day or multi-day event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BannerEntry {
    pub event: Event,
    pub is_first_day: bool,
    pub is_last_day: bool,
    pub show_title: bool,
    pub rounding: BannerRounding,
    /// Only events that start and end on the same date can be relocated.
    pub draggable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub timed: Vec<PositionedEvent>,
    pub banner: Vec<BannerEntry>,
    /// Number of overlap columns used by the timed grid.
    pub column_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarLayout {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub days: Vec<DayLayout>,
    /// Events excluded from geometry because their range is malformed.
    #[serde(serialize_with = "serialize_errors")]
    pub rejected: Vec<EventError>,
}

impl CalendarLayout {
    pub fn day(&self, date: NaiveDate) -> Option<&DayLayout> {
        self.days.iter().find(|day| day.date == date)
    }
}

/// Vertical offset of "now" in percent of the day height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimePosition {
    pub position: f32,
    pub visible: bool,
}

fn serialize_errors<S>(errors: &[EventError], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(errors.iter().map(ToString::to_string))
}
