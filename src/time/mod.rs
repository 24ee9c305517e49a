//! Time module for pointing calculations
//!
//! Everything downstream of this module works on UTC instants. Timestamps
//! arrive either "naive" (no offset) or "aware" (explicit offset); a naive
//! timestamp is always taken to be UTC already, never system-local time.
//! chrono's own conversions default naive values to the local zone in a few
//! places, so the rule is enforced here through [`ToUtc`] rather than left to
//! the caller.

pub mod calendar;

use crate::constants::{J2000, JULIAN_CENTURY_DAYS};
use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc,
};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for time operations
#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),

    #[error("Parsing error: {0}")]
    ParseError(String),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// Naive layouts accepted by [`Timestamp::from_str`], tried in order
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Anything that can be pinned to a UTC instant
pub trait ToUtc {
    /// The same physical instant expressed in UTC
    fn to_utc(&self) -> DateTime<Utc>;
}

impl ToUtc for NaiveDateTime {
    /// Attaches UTC without moving the wall-clock value.
    fn to_utc(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_naive_utc_and_offset(*self, Utc)
    }
}

impl<Tz: TimeZone> ToUtc for DateTime<Tz> {
    fn to_utc(&self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}

impl<T: ToUtc + ?Sized> ToUtc for &T {
    fn to_utc(&self) -> DateTime<Utc> {
        (**self).to_utc()
    }
}

/// A timestamp as supplied by a user, with or without a UTC offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// No offset given; interpreted as UTC
    Naive(NaiveDateTime),
    /// Explicit offset from UTC
    Aware(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Returns true when the timestamp carried no offset information
    pub fn is_naive(&self) -> bool {
        matches!(self, Timestamp::Naive(_))
    }
}

impl ToUtc for Timestamp {
    fn to_utc(&self) -> DateTime<Utc> {
        match self {
            Timestamp::Naive(naive) => naive.to_utc(),
            Timestamp::Aware(aware) => aware.to_utc(),
        }
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(naive: NaiveDateTime) -> Self {
        Timestamp::Naive(naive)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(aware: DateTime<FixedOffset>) -> Self {
        Timestamp::Aware(aware)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(utc: DateTime<Utc>) -> Self {
        Timestamp::Aware(utc.fixed_offset())
    }
}

impl FromStr for Timestamp {
    type Err = TimeError;

    /// Parses RFC 3339 (`2000-01-01T12:00:00+02:00`) first, then the naive
    /// layouts `YYYY-MM-DDTHH:MM:SS[.f]`, `YYYY-MM-DD HH:MM:SS[.f]`,
    /// `YYYY-MM-DDTHH:MM` and a bare `YYYY-MM-DD` (midnight).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TimeError::InvalidFormat("empty timestamp".to_string()));
        }

        if let Ok(aware) = DateTime::parse_from_rfc3339(s) {
            return Ok(Timestamp::Aware(aware));
        }

        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(Timestamp::Naive(naive));
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return date
                .and_hms_opt(0, 0, 0)
                .map(Timestamp::Naive)
                .ok_or_else(|| TimeError::InvalidFormat(format!("no midnight on {date}")));
        }

        Err(TimeError::ParseError(format!("unrecognized timestamp '{s}'")))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Naive(naive) => write!(f, "{}", naive.format("%Y-%m-%dT%H:%M:%S%.f")),
            Timestamp::Aware(aware) => write!(f, "{}", aware.to_rfc3339()),
        }
    }
}

/// Normalize any supported timestamp to a UTC instant
pub fn to_utc<T: ToUtc>(timestamp: T) -> DateTime<Utc> {
    timestamp.to_utc()
}

/// Julian Date of a timestamp
///
/// The timestamp is normalized to UTC first. Sub-second precision is kept
/// down to the microsecond.
pub fn julian_date<T: ToUtc>(timestamp: T) -> f64 {
    let utc = to_utc(timestamp);
    let day = utc.day() as f64
        + calendar::day_fraction(
            utc.hour(),
            utc.minute(),
            utc.second(),
            utc.timestamp_subsec_micros(),
        );
    calendar::julian_date_from_calendar(utc.year(), utc.month(), day)
}

/// Julian centuries elapsed since the J2000.0 epoch
pub fn julian_centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000) / JULIAN_CENTURY_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::Duration;

    fn j2000_utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_julian_date_j2000() {
        assert_abs_diff_eq!(julian_date(j2000_utc()), 2451545.0, epsilon = 1e-6);
    }

    #[test]
    fn test_naive_timestamp_is_utc() {
        let naive = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();

        assert_eq!(to_utc(naive), j2000_utc());
        assert_eq!(julian_date(naive), julian_date(j2000_utc()));
    }

    #[test]
    fn test_aware_timestamp_keeps_instant() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = plus_two.with_ymd_and_hms(2000, 1, 1, 14, 0, 0).unwrap();

        assert_eq!(to_utc(local), j2000_utc());
        assert_abs_diff_eq!(julian_date(local), 2451545.0, epsilon = 1e-6);
    }

    #[test]
    fn test_naive_and_offset_differ_by_offset() {
        let naive = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
        let aware = minus_five.from_local_datetime(&naive).single().unwrap();

        let shift_days = julian_date(aware) - julian_date(naive);
        assert_abs_diff_eq!(shift_days, 5.0 / 24.0, epsilon = 1e-8);
    }

    #[test]
    fn test_sub_second_precision() {
        let base = j2000_utc();
        let later = base + Duration::microseconds(500_000);
        assert_abs_diff_eq!(
            julian_date(later) - julian_date(base),
            0.5 / 86_400.0,
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_julian_date_continuous_across_boundaries() {
        let one_second = 1.0 / 86_400.0;
        let boundaries = [
            Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 28, 23, 59, 59).unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap(),
            Utc.with_ymd_and_hms(2023, 2, 28, 23, 59, 59).unwrap(),
            Utc.with_ymd_and_hms(2100, 2, 28, 23, 59, 59).unwrap(),
        ];

        for before in boundaries {
            let after = before + Duration::seconds(1);
            let step = julian_date(after) - julian_date(before);
            assert_abs_diff_eq!(step, one_second, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_julian_centuries() {
        assert_eq!(julian_centuries_since_j2000(J2000), 0.0);
        assert_abs_diff_eq!(
            julian_centuries_since_j2000(J2000 + JULIAN_CENTURY_DAYS),
            1.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_parse_rfc3339() {
        let ts: Timestamp = "2000-01-01T14:00:00+02:00".parse().unwrap();
        assert!(!ts.is_naive());
        assert_eq!(ts.to_utc(), j2000_utc());

        let zulu: Timestamp = "2000-01-01T12:00:00Z".parse().unwrap();
        assert_eq!(zulu.to_utc(), j2000_utc());
    }

    #[test]
    fn test_parse_naive_layouts() {
        for input in [
            "2000-01-01T12:00:00",
            "2000-01-01 12:00:00",
            "2000-01-01T12:00",
            "2000-01-01T12:00:00.000",
        ] {
            let ts: Timestamp = input.parse().unwrap();
            assert!(ts.is_naive(), "{input} should parse as naive");
            assert_eq!(ts.to_utc(), j2000_utc(), "{input}");
        }

        let midnight: Timestamp = "2000-01-01".parse().unwrap();
        assert_abs_diff_eq!(julian_date(midnight), 2451544.5, epsilon = 1e-9);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "".parse::<Timestamp>(),
            Err(TimeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "yesterday at noon".parse::<Timestamp>(),
            Err(TimeError::ParseError(_))
        ));
        assert!(matches!(
            "2000-02-30T12:00:00".parse::<Timestamp>(),
            Err(TimeError::ParseError(_))
        ));
    }

    #[test]
    fn test_display_round_trips() {
        for input in ["2000-01-01T14:00:00+02:00", "2000-01-01T12:00:00"] {
            let ts: Timestamp = input.parse().unwrap();
            let reparsed: Timestamp = ts.to_string().parse().unwrap();
            assert_eq!(ts, reparsed);
        }
    }
}
