//! Skypoint: sidereal time and alt/az pointing for small radio telescopes
//!
//! This crate answers "where in my sky is this object right now": it turns a
//! timestamp into a Julian Date, the Julian Date into Greenwich and local
//! mean sidereal time, and an equatorial position plus local sidereal time
//! into altitude and azimuth.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use skypoint::{local_sidereal_time, ra_dec_to_alt_az, GeoLocation};
//!
//! let green_bank = GeoLocation::new(38.433, -79.840);
//! let when = Utc.with_ymd_and_hms(2024, 9, 1, 3, 0, 0).unwrap();
//!
//! let lst = local_sidereal_time(when, &green_bank);
//! // Cygnus A
//! let (alt, az) = ra_dec_to_alt_az(lst, 19.991, 40.734, &green_bank);
//! assert!((0.0..24.0).contains(&lst));
//! assert!((-90.0..=90.0).contains(&alt) && (0.0..360.0).contains(&az));
//! ```
//!
//! Every function is pure. No precession, nutation, aberration or refraction
//! corrections are applied, which keeps results within a fraction of a degree
//! of apparent positions for present-day dates.

use thiserror::Error;

pub mod celestial;
pub mod constants;
pub mod coordinates;
pub mod sidereal;
pub mod time;
pub mod visibility;

// Re-export commonly used types
pub use celestial::{CatalogSource, CelestialObject};
pub use coordinates::{
    hour_angle, ra_dec_to_alt_az, EquatorialCoordinate, GeoLocation, HorizontalCoordinate,
};
pub use sidereal::{
    greenwich_mean_sidereal_time, greenwich_mean_sidereal_time_from_jd, local_sidereal_time,
    local_sidereal_time_from_gmst, Hms,
};
pub use time::{julian_centuries_since_j2000, julian_date, to_utc, TimeError, Timestamp, ToUtc};
pub use visibility::{observe, rank_by_visibility, Observation, VisibilitySummary};

/// Main error type for the skypoint library
#[derive(Debug, Error)]
pub enum SkypointError {
    #[error("Time error: {0}")]
    Time(#[from] TimeError),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

/// Result type for skypoint operations
pub type Result<T> = std::result::Result<T, SkypointError>;
