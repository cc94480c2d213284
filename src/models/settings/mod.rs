// Settings module
// Layout configuration: grid scale, week start and time-label format

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pixels per hour in the timed grid.
pub const DEFAULT_HOUR_UNIT_HEIGHT: f32 = 56.0;
/// Seconds between two "now" indicator refreshes.
pub const DEFAULT_TICK_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub hour_unit_height: f32,
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday
    pub first_day_of_week: u8,
    /// "12h" or "24h"
    pub time_format: String,
    pub tick_interval_secs: u64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            hour_unit_height: DEFAULT_HOUR_UNIT_HEIGHT,
            first_day_of_week: 0, // Sunday
            time_format: "12h".to_string(),
            tick_interval_secs: DEFAULT_TICK_INTERVAL_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("hour unit height must be a positive number of pixels, got {0}")]
    InvalidHourHeight(f32),
    #[error("first day of week must be between 0 and 6, got {0}")]
    InvalidFirstDayOfWeek(u8),
    #[error("tick interval must be at least one second")]
    InvalidTickInterval,
    #[error("time format must be \"12h\" or \"24h\", got {0:?}")]
    InvalidTimeFormat(String),
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.hour_unit_height.is_finite() && self.hour_unit_height > 0.0) {
            return Err(SettingsError::InvalidHourHeight(self.hour_unit_height));
        }
        if self.first_day_of_week > 6 {
            return Err(SettingsError::InvalidFirstDayOfWeek(self.first_day_of_week));
        }
        if self.tick_interval_secs == 0 {
            return Err(SettingsError::InvalidTickInterval);
        }
        if !matches!(self.time_format.as_str(), "12h" | "24h") {
            return Err(SettingsError::InvalidTimeFormat(self.time_format.clone()));
        }
        Ok(())
    }

    pub fn uses_24h_clock(&self) -> bool {
        self.time_format == "24h"
    }
}
