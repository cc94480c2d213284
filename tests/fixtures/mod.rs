// Test fixtures - reusable test data
// Provides a consistent week of events across all test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use week_layout::models::event::Event;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Sunday, Jun 9, 2024: first day of the sample week
    pub fn week_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 9).unwrap()
    }

    /// Saturday, Jun 15, 2024: last day of the sample week
    pub fn week_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    pub fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    pub fn june_at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        june(day).and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::dates::june_at;
    use super::*;

    pub fn timed(id: i64, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event::new(id, format!("Event {id}"), start, end).unwrap()
    }

    /// Friday Jun 7 09:00 through Tuesday Jun 11 17:00
    pub fn conference() -> Event {
        Event::builder()
            .id(100)
            .title("Conference")
            .start(june_at(7, 9, 0))
            .end(june_at(11, 17, 0))
            .color("#3B82F6")
            .build()
            .unwrap()
    }

    /// All-day holiday on Wednesday Jun 12
    pub fn holiday() -> Event {
        Event::builder()
            .id(101)
            .title("Holiday")
            .start(june_at(12, 0, 0))
            .end(june_at(12, 23, 59))
            .all_day(true)
            .build()
            .unwrap()
    }

    /// Two-hour event crossing midnight from Thursday into Friday
    pub fn late_show() -> Event {
        timed(102, june_at(13, 23, 0), june_at(14, 1, 0))
    }

    /// A busy Monday: a long anchor, two overlapping meetings and a follow-up
    pub fn busy_monday() -> Vec<Event> {
        vec![
            timed(1, june_at(10, 9, 0), june_at(10, 12, 0)),
            timed(2, june_at(10, 9, 0), june_at(10, 10, 0)),
            timed(3, june_at(10, 9, 30), june_at(10, 10, 30)),
            timed(4, june_at(10, 12, 0), june_at(10, 13, 0)),
        ]
    }

    pub fn sample_week() -> Vec<Event> {
        let mut events = busy_monday();
        events.push(timed(5, june_at(15, 9, 0), june_at(15, 10, 30)));
        events.push(conference());
        events.push(holiday());
        events.push(late_show());
        events
    }
}
