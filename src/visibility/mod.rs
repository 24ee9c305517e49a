//! Visibility planning for a list of targets
//!
//! Given an observer, a moment and a minimum elevation, work out where each
//! target sits in the local sky, whether it clears the elevation limit and
//! when it next crosses the meridian. This is what a "what can I point at
//! right now" table is built from.

use crate::celestial::CelestialObject;
use crate::constants::{HOUR_S, SIDEREAL_RATE};
use crate::coordinates::angle::normalize_hours;
use crate::coordinates::{EquatorialCoordinate, GeoLocation, HorizontalCoordinate};
use crate::sidereal::local_sidereal_time;
use crate::time::{to_utc, ToUtc};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Where a target is at one moment, and when it next transits
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    /// Altitude and azimuth at the moment of observation
    pub horizontal: HorizontalCoordinate,
    /// Altitude is at or above the requested minimum elevation
    pub visible: bool,
    /// Hour angle in hours, `[0, 24)`
    pub hour_angle_hours: f64,
    /// Solar (clock) hours until the next upper transit, `[0, ~23.93)`
    pub hours_until_transit: f64,
    /// UTC instant of the next upper transit
    pub transit_time: DateTime<Utc>,
}

/// Observe a single target
pub fn observe<T: ToUtc>(
    target: &EquatorialCoordinate,
    timestamp: T,
    location: &GeoLocation,
    min_elevation_deg: f64,
) -> Observation {
    let utc = to_utc(timestamp);
    let lst = local_sidereal_time(utc, location);
    observe_at_lst(target, utc, lst, location, min_elevation_deg)
}

fn observe_at_lst(
    target: &EquatorialCoordinate,
    utc: DateTime<Utc>,
    lst_hours: f64,
    location: &GeoLocation,
    min_elevation_deg: f64,
) -> Observation {
    let horizontal = target.to_horizontal(lst_hours, location);

    // Sidereal hours until RA reaches the meridian, converted to clock hours
    let sidereal_wait = normalize_hours(target.ra_hours - lst_hours);
    let hours_until_transit = sidereal_wait / SIDEREAL_RATE;
    let transit_time =
        utc + Duration::microseconds((hours_until_transit * HOUR_S * 1e6).round() as i64);

    Observation {
        horizontal,
        visible: horizontal.is_above(min_elevation_deg),
        hour_angle_hours: target.hour_angle(lst_hours),
        hours_until_transit,
        transit_time,
    }
}

/// An observation paired with the target it belongs to
#[derive(Debug, Clone, Serialize)]
pub struct RankedObservation<'a, O> {
    pub target: &'a O,
    pub observation: Observation,
}

/// Observe every target and order them for display
///
/// Visible targets come first; within each group targets are sorted by
/// altitude, highest first. Targets with a non-finite altitude go last.
/// Ties keep their input order.
pub fn rank_by_visibility<'a, O, T>(
    targets: &'a [O],
    timestamp: T,
    location: &GeoLocation,
    min_elevation_deg: f64,
) -> Vec<RankedObservation<'a, O>>
where
    O: CelestialObject,
    T: ToUtc,
{
    let utc = to_utc(timestamp);
    let lst = local_sidereal_time(utc, location);

    let mut ranked: Vec<RankedObservation<'a, O>> = targets
        .iter()
        .map(|target| RankedObservation {
            target,
            observation: observe_at_lst(
                &target.equatorial(),
                utc,
                lst,
                location,
                min_elevation_deg,
            ),
        })
        .collect();

    ranked.sort_by(|a, b| compare_for_display(&a.observation, &b.observation));

    log::debug!(
        "ranked {} targets at {} (LST {:.4}h), {} above {}°",
        ranked.len(),
        utc,
        lst,
        ranked.iter().filter(|r| r.observation.visible).count(),
        min_elevation_deg
    );

    ranked
}

fn compare_for_display(a: &Observation, b: &Observation) -> Ordering {
    let alt_a = a.horizontal.altitude_deg;
    let alt_b = b.horizontal.altitude_deg;

    b.visible
        .cmp(&a.visible)
        .then_with(|| alt_a.is_nan().cmp(&alt_b.is_nan()))
        .then_with(|| alt_b.total_cmp(&alt_a))
}

/// Count of visible targets out of the total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisibilitySummary {
    pub visible: usize,
    pub total: usize,
    pub min_elevation_deg: f64,
}

impl VisibilitySummary {
    pub fn from_ranked<O>(ranked: &[RankedObservation<'_, O>], min_elevation_deg: f64) -> Self {
        Self {
            visible: ranked.iter().filter(|r| r.observation.visible).count(),
            total: ranked.len(),
            min_elevation_deg,
        }
    }
}

impl fmt::Display for VisibilitySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} sources above {}°",
            self.visible, self.total, self.min_elevation_deg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::celestial::CatalogSource;
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    fn green_bank() -> GeoLocation {
        GeoLocation::new(38.433, -79.840)
    }

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 1, 3, 0, 0).unwrap()
    }

    #[test]
    fn test_target_on_meridian_transits_now() {
        let lst = local_sidereal_time(instant(), &green_bank());
        let target = EquatorialCoordinate::new(lst, 10.0);

        let obs = observe(&target, instant(), &green_bank(), 0.0);
        assert!(obs.hours_until_transit < 1e-9 || obs.hours_until_transit > 23.9);
        assert!(obs.hour_angle_hours < 1e-9 || obs.hour_angle_hours > 24.0 - 1e-9);
        assert_abs_diff_eq!(obs.horizontal.altitude_deg, 90.0 - 38.433 + 10.0, epsilon = 1e-6);
        assert_abs_diff_eq!(obs.horizontal.azimuth_deg, 180.0, epsilon = 1e-6);
    }

    #[test]
    fn test_transit_time_uses_sidereal_rate() {
        let lst = local_sidereal_time(instant(), &green_bank());
        let target = EquatorialCoordinate::new(lst + 6.0, 0.0);

        let obs = observe(&target, instant(), &green_bank(), 0.0);
        assert_abs_diff_eq!(obs.hours_until_transit, 6.0 / SIDEREAL_RATE, epsilon = 1e-9);

        // At the predicted moment the target sits on the meridian
        let lst_at_transit = local_sidereal_time(obs.transit_time, &green_bank());
        let miss = normalize_hours(lst_at_transit - target.ra_hours);
        let miss = miss.min(24.0 - miss);
        assert!(miss * 3600.0 < 0.01, "missed transit by {}s", miss * 3600.0);
    }

    #[test]
    fn test_visibility_threshold() {
        let lst = local_sidereal_time(instant(), &green_bank());
        // Transit altitude of 30 degrees
        let target = EquatorialCoordinate::new(lst, 30.0 + 38.433 - 90.0);

        assert!(observe(&target, instant(), &green_bank(), 29.9).visible);
        assert!(!observe(&target, instant(), &green_bank(), 30.1).visible);
    }

    #[test]
    fn test_rank_visible_first_then_by_altitude() {
        let lst = local_sidereal_time(instant(), &green_bank());
        let ra_deg = lst * 15.0;

        let targets = vec![
            // Transits at 20 degrees altitude
            CatalogSource::new("low", ra_deg, 20.0 + 38.433 - 90.0),
            // Twelve hours away, below the horizon
            CatalogSource::new("set", ra_deg + 180.0, -10.0),
            // Transits at 80 degrees
            CatalogSource::new("high", ra_deg, 80.0 + 38.433 - 90.0),
            // Transits at 50 degrees
            CatalogSource::new("mid", ra_deg, 50.0 + 38.433 - 90.0),
            // Deep south, never rises, but less deep than "set"
            CatalogSource::new("south", ra_deg + 180.0, -40.0),
        ];

        let ranked = rank_by_visibility(&targets, instant(), &green_bank(), 10.0);
        let names: Vec<&str> = ranked.iter().map(|r| r.target.name()).collect();
        assert_eq!(names, vec!["high", "mid", "low", "set", "south"]);

        let summary = VisibilitySummary::from_ranked(&ranked, 10.0);
        assert_eq!(summary.visible, 3);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.to_string(), "3 / 5 sources above 10°");
    }

    #[test]
    fn test_rank_puts_nan_last() {
        let targets = vec![
            CatalogSource::new("broken", f64::NAN, f64::NAN),
            CatalogSource::new("fine", 0.0, -89.0),
        ];
        let ranked = rank_by_visibility(&targets, instant(), &green_bank(), 0.0);
        assert_eq!(ranked[0].target.name(), "fine");
        assert_eq!(ranked[1].target.name(), "broken");
    }

    #[test]
    fn test_rank_empty() {
        let targets: Vec<CatalogSource> = Vec::new();
        let ranked = rank_by_visibility(&targets, instant(), &green_bank(), 0.0);
        assert!(ranked.is_empty());
        assert_eq!(
            VisibilitySummary::from_ranked(&ranked, 0.0).to_string(),
            "0 / 0 sources above 0°"
        );
    }
}
