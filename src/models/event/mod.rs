// Event module
// Read-only calendar event consumed by the week layout

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque identifier, stable across layout passes.
pub type EventId = i64;

/// Calendar event as handed to the layout engine.
///
/// Times are local wall-clock values with minute precision. The layout
/// never mutates an event; `color` and `title` are carried through to the
/// output untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub color: Option<String>,
}

/// Errors raised while ingesting events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("event {id} ends ({end}) before it starts ({start})")]
    InvalidEventRange {
        id: EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("event {0} is required")]
    MissingField(&'static str),
}

impl Event {
    /// Create a new timed event
    ///
    /// # Examples
    /// ```
    /// use week_layout::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap().and_hms_opt(9, 0, 0).unwrap();
    /// let end = start + chrono::Duration::minutes(90);
    /// let event = Event::new(1, "Team Meeting", start, end).unwrap();
    /// assert!(!event.all_day);
    /// ```
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, EventError> {
        let event = Self {
            id,
            title: title.into(),
            start,
            end,
            all_day: false,
            color: None,
        };
        event.validate()?;
        Ok(event)
    }

    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Reject ranges that end before they start. Zero-length events are valid.
    pub fn validate(&self) -> Result<(), EventError> {
        if self.end < self.start {
            return Err(EventError::InvalidEventRange {
                id: self.id,
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }
}

/// Builder for events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<EventId>,
    title: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    all_day: bool,
    color: Option<String>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: EventId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Set the display color (passed through to renderers)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn build(self) -> Result<Event, EventError> {
        let id = self.id.ok_or(EventError::MissingField("id"))?;
        let start = self.start.ok_or(EventError::MissingField("start"))?;
        let end = self.end.ok_or(EventError::MissingField("end"))?;

        let event = Event {
            id,
            title: self.title.unwrap_or_default(),
            start,
            end,
            all_day: self.all_day,
            color: self.color,
        };

        event.validate()?;
        Ok(event)
    }
}
