use crate::constants::HOUR_S;
use crate::coordinates::angle::normalize_hours;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An hour angle split into whole hours, minutes and seconds for display
///
/// Seconds are floored, so `Hms` is a truncation and not a rounding of the
/// underlying value; a clock reading never shows a second that has not yet
/// elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hms {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Hms {
    /// Split an hour value, wrapped into `[0, 24)` first
    pub fn from_hours(hours: f64) -> Self {
        let total_seconds = normalize_hours(hours) * HOUR_S;

        let hours = (total_seconds / HOUR_S).floor() as u32;
        let minutes = ((total_seconds % HOUR_S) / 60.0).floor() as u32;
        let seconds = (total_seconds % 60.0).floor() as u32;

        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Back to fractional hours
    pub fn to_hours(&self) -> f64 {
        self.hours as f64 + self.minutes as f64 / 60.0 + self.seconds as f64 / HOUR_S
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}
