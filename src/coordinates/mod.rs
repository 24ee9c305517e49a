//! Observer location, equatorial and horizontal coordinates
//!
//! Right ascension is carried in hours, everything else in degrees. The
//! conversion to altitude/azimuth is the plain spherical-triangle solution
//! with no refraction, precession or nutation applied.

pub mod angle;

use crate::constants::{DEG2RAD, RAD2DEG};
use crate::{Result, SkypointError};
use angle::{degrees_to_hours, hours_to_radians, normalize_degrees, normalize_hours};
use serde::{Deserialize, Serialize};

/// `1 - |sin(alt)|` below which a position counts as zenith or nadir.
/// Corresponds to roughly 0.3 arcseconds from the pole of the horizon.
const ZENITH_EPSILON: f64 = 1e-12;

/// Geographic location of an observer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive, any range
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Create a location, rejecting latitudes outside `[-90, 90]` and
    /// non-finite values
    pub fn checked(latitude_deg: f64, longitude_deg: f64) -> Result<Self> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(SkypointError::InvalidLocation(format!(
                "latitude {latitude_deg} outside [-90, 90]"
            )));
        }
        if !longitude_deg.is_finite() {
            return Err(SkypointError::InvalidLocation(format!(
                "longitude {longitude_deg} is not finite"
            )));
        }
        Ok(Self::new(latitude_deg, longitude_deg))
    }
}

/// A fixed position on the sky
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoordinate {
    /// Right ascension in hours, `[0, 24)`
    pub ra_hours: f64,
    /// Declination in degrees
    pub dec_deg: f64,
}

impl EquatorialCoordinate {
    /// Create a coordinate; right ascension is wrapped into `[0, 24)`
    pub fn new(ra_hours: f64, dec_deg: f64) -> Self {
        Self {
            ra_hours: normalize_hours(ra_hours),
            dec_deg,
        }
    }

    /// Create a coordinate from right ascension in degrees, as catalogs store it
    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Self {
        Self::new(degrees_to_hours(ra_deg), dec_deg)
    }

    /// Create a coordinate, rejecting declinations outside `[-90, 90]`
    pub fn checked(ra_hours: f64, dec_deg: f64) -> Result<Self> {
        if !ra_hours.is_finite() {
            return Err(SkypointError::InvalidCoordinate(format!(
                "right ascension {ra_hours} is not finite"
            )));
        }
        if !dec_deg.is_finite() || !(-90.0..=90.0).contains(&dec_deg) {
            return Err(SkypointError::InvalidCoordinate(format!(
                "declination {dec_deg} outside [-90, 90]"
            )));
        }
        Ok(Self::new(ra_hours, dec_deg))
    }

    /// Right ascension in degrees
    pub fn ra_degrees(&self) -> f64 {
        angle::hours_to_degrees(self.ra_hours)
    }

    /// Hour angle of this position at the given local sidereal time
    pub fn hour_angle(&self, lst_hours: f64) -> f64 {
        hour_angle(lst_hours, self.ra_hours)
    }

    /// Altitude and azimuth seen from `location` at local sidereal time `lst_hours`
    pub fn to_horizontal(&self, lst_hours: f64, location: &GeoLocation) -> HorizontalCoordinate {
        let (altitude_deg, azimuth_deg) =
            ra_dec_to_alt_az(lst_hours, self.ra_hours, self.dec_deg, location);
        HorizontalCoordinate {
            altitude_deg,
            azimuth_deg,
        }
    }
}

/// Position in the observer's local sky
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalCoordinate {
    /// Altitude above the horizon in degrees, `[-90, 90]`
    pub altitude_deg: f64,
    /// Azimuth in degrees from north through east, `[0, 360)`
    pub azimuth_deg: f64,
}

impl HorizontalCoordinate {
    pub fn is_above(&self, min_elevation_deg: f64) -> bool {
        self.altitude_deg >= min_elevation_deg
    }
}

/// Hour angle in hours, `[0, 24)`; zero at upper transit
pub fn hour_angle(lst_hours: f64, ra_hours: f64) -> f64 {
    normalize_hours(lst_hours - ra_hours)
}

/// Convert equatorial coordinates to (altitude, azimuth) in degrees
///
/// Azimuth is measured from north through east and wrapped into `[0, 360)`.
/// At the zenith or nadir the azimuth has no meaning and the division by
/// `cos(alt)` breaks down; within `ZENITH_EPSILON` of either the result is
/// exactly `(±90.0, 0.0)`.
pub fn ra_dec_to_alt_az(
    lst_hours: f64,
    ra_hours: f64,
    dec_deg: f64,
    location: &GeoLocation,
) -> (f64, f64) {
    let h_rad = hours_to_radians(hour_angle(lst_hours, ra_hours));
    let dec_rad = dec_deg * DEG2RAD;
    let lat_rad = location.latitude_deg * DEG2RAD;

    // Rounding can push the sum just past 1 at the zenith
    let sin_alt = (dec_rad.sin() * lat_rad.sin() + dec_rad.cos() * lat_rad.cos() * h_rad.cos())
        .clamp(-1.0, 1.0);

    if 1.0 - sin_alt.abs() < ZENITH_EPSILON {
        log::trace!("azimuth undefined at sin(alt) = {sin_alt}, reporting 0");
        return (90.0_f64.copysign(sin_alt), 0.0);
    }

    let alt_rad = sin_alt.asin();
    let cos_alt = alt_rad.cos();

    let cos_az = (dec_rad.sin() - alt_rad.sin() * lat_rad.sin()) / (cos_alt * lat_rad.cos());
    let sin_az = -dec_rad.cos() * h_rad.sin() / cos_alt;
    let az_rad = sin_az.atan2(cos_az);

    (alt_rad * RAD2DEG, normalize_degrees(az_rad * RAD2DEG))
}
