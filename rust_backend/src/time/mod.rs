//! Time conversion between calendar instants and Julian days.

pub mod julian;
pub mod temporal;

pub use julian::{
    from_julian_day, from_julian_day_as, julian_from_millis, millis_from_julian, to_days,
    to_julian_day, DAY_MS, J1970, J2000,
};
pub use temporal::{FromEpochMillis, Temporal};
