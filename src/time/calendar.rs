//! Calendar date to Julian date conversion
//!
//! Proleptic Gregorian calendar only. The day-of-month carries the time of
//! day as a fraction, so `(2000, 1, 1.5)` is noon on 2000-01-01.

/// Fraction of a day represented by a time of day
///
/// `microsecond` is the sub-second part in microseconds. Values at or above
/// one million (chrono's leap second representation) simply extend the
/// fraction past the last second of the minute.
pub fn day_fraction(hour: u32, minute: u32, second: u32, microsecond: u32) -> f64 {
    (hour as f64
        + minute as f64 / 60.0
        + second as f64 / 3600.0
        + microsecond as f64 / 3_600_000_000.0)
        / 24.0
}

/// Convert (year, month, fractional day) to a Julian date
///
/// January and February count as months 13 and 14 of the previous year, and
/// the Gregorian century correction `B = 2 - A + A/4` is applied.
pub fn julian_date_from_calendar(year: i32, month: u32, day: f64) -> f64 {
    let (year, month) = if month <= 2 {
        (year - 1, month as i32 + 12)
    } else {
        (year, month as i32)
    };

    let a = year.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);

    (365.25 * (year + 4716) as f64).floor()
        + (30.6001 * (month + 1) as f64).floor()
        + day
        + b as f64
        - 1524.5
}
