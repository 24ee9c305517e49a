//! Wrap-around arithmetic for hour and degree angles
//!
//! `f64::rem_euclid` already returns a non-negative remainder for negative
//! operands, but it can round up to the modulus itself (for example
//! `(-1e-17_f64).rem_euclid(24.0) == 24.0`). The helpers here fold that case
//! back to zero so results always land in the half-open range.

use crate::constants::{DEG2RAD, DEG360, DEG_PER_HOUR, HOURS_PER_DAY};

fn wrap(value: f64, period: f64) -> f64 {
    let wrapped = value.rem_euclid(period);
    if wrapped >= period {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an hour angle into `[0, 24)`
pub fn normalize_hours(hours: f64) -> f64 {
    wrap(hours, HOURS_PER_DAY)
}

/// Wrap a degree angle into `[0, 360)`
pub fn normalize_degrees(degrees: f64) -> f64 {
    wrap(degrees, DEG360)
}

/// Hours of rotation to degrees
pub fn hours_to_degrees(hours: f64) -> f64 {
    hours * DEG_PER_HOUR
}

/// Degrees of rotation to hours
pub fn degrees_to_hours(degrees: f64) -> f64 {
    degrees / DEG_PER_HOUR
}

/// Hours of rotation to radians
pub fn hours_to_radians(hours: f64) -> f64 {
    hours_to_degrees(hours) * DEG2RAD
}
