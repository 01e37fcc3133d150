//! Core domain models.
//!
//! Observer locations, twilight definitions and the value types returned by
//! the calculator.

pub mod domain;

pub use domain::{
    default_times, format_instant, EventTime, GeoCoordinate, MoonIllumination, MoonPosition,
    Position, SunTimes, TwilightDefinition, DEFAULT_TIMES, NADIR, SOLAR_NOON,
};
