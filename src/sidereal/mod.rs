//! Greenwich and local mean sidereal time
//!
//! GMST follows the IAU 1982 expression (Aoki et al. 1982) evaluated in
//! seconds of time, with the full-day term folded into the linear
//! coefficient so the argument can be any UT instant rather than 0h UT:
//!
//! ```text
//! GMST = 67310.54841 + (876600h + 8640184.812866) T + 0.093104 T^2 - 6.2e-6 T^3
//! ```
//!
//! where `T` is Julian centuries from J2000.0. No nutation term is applied,
//! so this is mean (not apparent) sidereal time, good to well under a second
//! for planning purposes around the present epoch.
//!
//! All results are hours in `[0, 24)`.

mod hms;

pub use hms::Hms;

use crate::constants::{GMST_C0, GMST_C1, GMST_C2, GMST_C3, HOUR_S};
use crate::coordinates::angle::{degrees_to_hours, normalize_hours};
use crate::coordinates::GeoLocation;
use crate::time::{julian_centuries_since_j2000, julian_date, ToUtc};

/// Greenwich Mean Sidereal Time in hours for a Julian Date (UT)
pub fn greenwich_mean_sidereal_time_from_jd(jd: f64) -> f64 {
    let t = julian_centuries_since_j2000(jd);

    let gmst_sec = GMST_C0 + GMST_C1 * t + GMST_C2 * t * t - GMST_C3 * t * t * t;

    normalize_hours(gmst_sec / HOUR_S)
}

/// Greenwich Mean Sidereal Time in hours for a timestamp
pub fn greenwich_mean_sidereal_time<T: ToUtc>(timestamp: T) -> f64 {
    greenwich_mean_sidereal_time_from_jd(julian_date(timestamp))
}

/// Local Sidereal Time from an already computed GMST
///
/// Longitude is east-positive degrees and may lie outside `[-180, 180]`.
pub fn local_sidereal_time_from_gmst(gmst_hours: f64, longitude_deg: f64) -> f64 {
    normalize_hours(gmst_hours + degrees_to_hours(longitude_deg))
}

/// Local Sidereal Time in hours for a timestamp and observer location
pub fn local_sidereal_time<T: ToUtc>(timestamp: T, location: &GeoLocation) -> f64 {
    local_sidereal_time_from_gmst(
        greenwich_mean_sidereal_time(timestamp),
        location.longitude_deg,
    )
}
