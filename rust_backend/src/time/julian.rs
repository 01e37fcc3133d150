//! Julian day conversions.
//!
//! A Julian day is a real-valued day count starting at noon UTC on
//! 1 January 4713 BCE. Every ephemeris formula in this crate is expressed
//! in days since [`J2000`].

use chrono::{DateTime, Utc};

use super::temporal::{FromEpochMillis, Temporal};
use crate::error::SunCalcResult;

/// Length of a day in milliseconds.
pub const DAY_MS: f64 = 86_400_000.0;

/// Julian day of the Unix epoch (1970-01-01T00:00:00Z), at the preceding noon.
pub const J1970: f64 = 2_440_588.0;

/// Julian day of the J2000.0 epoch (2000-01-01T12:00:00 TT, treated as UTC).
pub const J2000: f64 = 2_451_545.0;

/// Julian day for a number of milliseconds since the Unix epoch.
#[inline]
pub fn julian_from_millis(ms: f64) -> f64 {
    ms / DAY_MS - 0.5 + J1970
}

/// Milliseconds since the Unix epoch for a Julian day.
#[inline]
pub fn millis_from_julian(j: f64) -> f64 {
    (j + 0.5 - J1970) * DAY_MS
}

/// Convert an instant to a Julian day number.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use suncalc_rust::time::to_julian_day;
///
/// let noon = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
/// assert_eq!(to_julian_day(&noon).unwrap(), 2_451_545.0);
/// ```
pub fn to_julian_day<T: Temporal + ?Sized>(instant: &T) -> SunCalcResult<f64> {
    Ok(julian_from_millis(instant.to_epoch_millis()?))
}

/// Convert a Julian day number back to a UTC timestamp.
///
/// NaN (an event that never happens) gives `None`.
pub fn from_julian_day(j: f64) -> Option<DateTime<Utc>> {
    from_julian_day_as(j)
}

/// Convert a Julian day number into any [`FromEpochMillis`] representation.
pub fn from_julian_day_as<T: FromEpochMillis>(j: f64) -> Option<T> {
    T::from_epoch_millis(millis_from_julian(j))
}

/// Days elapsed since [`J2000`]; the time argument of every formula.
pub fn to_days<T: Temporal + ?Sized>(instant: &T) -> SunCalcResult<f64> {
    Ok(to_julian_day(instant)? - J2000)
}
