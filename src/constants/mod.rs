//! Constants module for time and pointing calculations

use std::f64::consts::PI;

// Time constants
/// Seconds in an hour
pub const HOUR_S: f64 = 3_600.0;
/// Hours in a day (and sidereal hours in a full turn)
pub const HOURS_PER_DAY: f64 = 24.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Days in a Julian century
pub const JULIAN_CENTURY_DAYS: f64 = 36_525.0;
/// Ratio of sidereal to solar time (IAU 1982)
pub const SIDEREAL_RATE: f64 = 1.002_737_909_350_795;

// IAU 1982 GMST polynomial, seconds of time, argument in Julian centuries of UT1.
// Kept as published; do not fold or reassociate.
/// Constant term, seconds
pub const GMST_C0: f64 = 67310.54841;
/// Linear term, seconds per century
pub const GMST_C1: f64 = 876600.0 * 3600.0 + 8640184.812866;
/// Quadratic term, seconds per century squared
pub const GMST_C2: f64 = 0.093104;
/// Cubic term, seconds per century cubed
pub const GMST_C3: f64 = 6.2e-6;

// Angles
/// Degrees of rotation per hour of sidereal time
pub const DEG_PER_HOUR: f64 = 15.0;
/// Degrees in a complete circle
pub const DEG360: f64 = 360.0;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
