//! "Now" indicator for the timed grid.
//!
//! The position is refreshed by a background task: once on activation,
//! then on every tick of the configured interval. The displayed value can
//! therefore lag the wall clock by up to one interval. The task belongs to
//! the view that activated it and is aborted when the view deactivates,
//! switches window, or drops the tracker.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use tokio::runtime::{Handle, TryCurrentError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::models::layout::TimePosition;
use crate::models::settings::{LayoutSettings, SettingsError};
use crate::utils::date::{get_week_end, get_week_start, MINUTES_PER_DAY};

pub const MIN_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// The span of dates currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewWindow {
    Day(NaiveDate),
    Week { start: NaiveDate, end: NaiveDate },
}

impl ViewWindow {
    pub fn week_of(date: NaiveDate, first_day_of_week: u8) -> Self {
        Self::Week {
            start: get_week_start(date, first_day_of_week),
            end: get_week_end(date, first_day_of_week),
        }
    }

    pub fn contains(&self, now: NaiveDateTime) -> bool {
        let today = now.date();
        match *self {
            Self::Day(date) => today == date,
            Self::Week { start, end } => start <= today && today <= end,
        }
    }
}

/// Percent of the day elapsed at `now`, and whether `now` is on screen.
pub fn compute_time_position(now: NaiveDateTime, window: ViewWindow) -> TimePosition {
    let minutes = now.hour() * 60 + now.minute();
    TimePosition {
        position: minutes as f32 / MINUTES_PER_DAY as f32 * 100.0,
        visible: window.contains(now),
    }
}

/// Source of the current local wall-clock time.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> NaiveDateTime;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a settable instant.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now: Mutex::new(now) }
    }

    pub fn set(&self, now: NaiveDateTime) {
        // A poisoned lock still holds a valid timestamp
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Owns the periodic refresh task for one displayed window at a time.
pub struct TimeTracker {
    clock: Arc<dyn Clock>,
    interval: Duration,
    sender: Arc<watch::Sender<TimePosition>>,
    task: Option<JoinHandle<()>>,
    window: Option<ViewWindow>,
}

impl TimeTracker {
    /// Tracker on the system clock, refreshing every `tick_interval_secs`.
    pub fn new(settings: &LayoutSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::with_clock(
            Arc::new(SystemClock),
            Duration::from_secs(settings.tick_interval_secs),
        ))
    }

    /// A zero `interval` is raised to [`MIN_TICK_INTERVAL`].
    pub fn with_clock(clock: Arc<dyn Clock>, interval: Duration) -> Self {
        let interval = if interval.is_zero() {
            log::warn!("Time tracker interval must be non-zero, using {:?}", MIN_TICK_INTERVAL);
            MIN_TICK_INTERVAL
        } else {
            interval
        };
        let (sender, _) = watch::channel(TimePosition {
            position: 0.0,
            visible: false,
        });
        Self {
            clock,
            interval,
            sender: Arc::new(sender),
            task: None,
            window: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<TimePosition> {
        self.sender.subscribe()
    }

    /// Last published position.
    pub fn current(&self) -> TimePosition {
        *self.sender.borrow()
    }

    pub fn window(&self) -> Option<ViewWindow> {
        self.window
    }

    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    /// Start tracking `window`, replacing any running task.
    ///
    /// Must be called from inside a Tokio runtime.
    pub fn activate(&mut self, window: ViewWindow) -> Result<(), TryCurrentError> {
        let runtime = Handle::try_current()?;
        self.deactivate();

        let clock = Arc::clone(&self.clock);
        let sender = Arc::clone(&self.sender);
        let period = self.interval;

        log::debug!("Time tracker activated for {:?} every {:?}", window, period);
        self.task = Some(runtime.spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let position = compute_time_position(clock.now(), window);
                log::trace!("Time tracker tick: {:?}", position);
                sender.send_replace(position);
            }
        }));
        self.window = Some(window);
        Ok(())
    }

    /// Stop the refresh task. Safe to call when inactive.
    pub fn deactivate(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            log::debug!("Time tracker deactivated for {:?}", self.window);
        }
        self.window = None;
    }
}

impl Drop for TimeTracker {
    fn drop(&mut self) {
        self.deactivate();
    }
}
