//! Conversion capability between calendar types and epoch milliseconds.
//!
//! The numeric core only ever sees milliseconds since the Unix epoch (UTC).
//! Any calendar/datetime representation can feed the calculator by
//! implementing [`Temporal`], and any representation can be produced from
//! results by implementing [`FromEpochMillis`].

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::error::{SunCalcError, SunCalcResult};

/// A value that can be read as an instant in UTC.
pub trait Temporal {
    /// Milliseconds since 1970-01-01T00:00:00Z.
    fn to_epoch_millis(&self) -> SunCalcResult<f64>;
}

/// A value that can be rebuilt from milliseconds since the Unix epoch.
///
/// Returns `None` for non-finite input or values the target type cannot
/// represent; callers treat that as "not-a-time".
pub trait FromEpochMillis: Sized {
    fn from_epoch_millis(ms: f64) -> Option<Self>;
}

impl<T: Temporal + ?Sized> Temporal for &T {
    fn to_epoch_millis(&self) -> SunCalcResult<f64> {
        (**self).to_epoch_millis()
    }
}

impl Temporal for DateTime<Utc> {
    fn to_epoch_millis(&self) -> SunCalcResult<f64> {
        Ok(micros_to_millis(self.timestamp_micros()))
    }
}

impl Temporal for DateTime<FixedOffset> {
    fn to_epoch_millis(&self) -> SunCalcResult<f64> {
        Ok(micros_to_millis(self.timestamp_micros()))
    }
}

/// Naive timestamps are taken to be UTC.
impl Temporal for NaiveDateTime {
    fn to_epoch_millis(&self) -> SunCalcResult<f64> {
        Ok(micros_to_millis(self.and_utc().timestamp_micros()))
    }
}

/// A calendar date means midnight UTC of that day.
impl Temporal for NaiveDate {
    fn to_epoch_millis(&self) -> SunCalcResult<f64> {
        self.and_hms_opt(0, 0, 0)
            .ok_or_else(|| SunCalcError::unsupported(format!("date {}", self)))?
            .to_epoch_millis()
    }
}

/// Epoch milliseconds.
impl Temporal for i64 {
    fn to_epoch_millis(&self) -> SunCalcResult<f64> {
        Ok(*self as f64)
    }
}

/// Epoch milliseconds, possibly fractional. NaN is accepted and propagates.
impl Temporal for f64 {
    fn to_epoch_millis(&self) -> SunCalcResult<f64> {
        Ok(*self)
    }
}

/// ISO-8601 text: RFC 3339 with offset, a naive `YYYY-MM-DDTHH:MM:SS[.f]`
/// (UTC), or a bare `YYYY-MM-DD` (midnight UTC).
impl Temporal for str {
    fn to_epoch_millis(&self) -> SunCalcResult<f64> {
        let text = self.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return dt.to_epoch_millis();
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
                return naive.to_epoch_millis();
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return date.to_epoch_millis();
        }
        Err(SunCalcError::unsupported(format!(
            "cannot read {:?} as a timestamp",
            self
        )))
    }
}

impl Temporal for String {
    fn to_epoch_millis(&self) -> SunCalcResult<f64> {
        self.as_str().to_epoch_millis()
    }
}

impl FromEpochMillis for DateTime<Utc> {
    fn from_epoch_millis(ms: f64) -> Option<Self> {
        if !ms.is_finite() {
            return None;
        }
        // Julian days near the present carry ~40us of f64 resolution; round
        // to the microsecond, the finest unit Python datetimes hold.
        // `as` saturates; out-of-range values are rejected by chrono.
        DateTime::from_timestamp_micros((ms * 1000.0).round() as i64)
    }
}

impl FromEpochMillis for NaiveDateTime {
    fn from_epoch_millis(ms: f64) -> Option<Self> {
        DateTime::<Utc>::from_epoch_millis(ms).map(|dt| dt.naive_utc())
    }
}

impl FromEpochMillis for i64 {
    fn from_epoch_millis(ms: f64) -> Option<Self> {
        let rounded = ms.round();
        if !rounded.is_finite() || rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
            return None;
        }
        Some(rounded as i64)
    }
}

impl FromEpochMillis for f64 {
    fn from_epoch_millis(ms: f64) -> Option<Self> {
        ms.is_finite().then_some(ms)
    }
}

fn micros_to_millis(micros: i64) -> f64 {
    micros as f64 / 1000.0
}
