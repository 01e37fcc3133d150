//! Sun position, sun times and moon phase calculations.
//!
//! A vectorized rendition of the suncalc formulas: every operation accepts a
//! single observation or a column of observations and returns results of
//! the same shape.
//!
//! # Modules
//!
//! - [`time`]: Julian day conversions and the [`Temporal`] input capability
//! - [`ephemeris`]: closed-form solar and lunar formulas
//! - [`core`]: value types (locations, twilight definitions, results)
//! - [`batch`]: the [`SunCalc`] calculator and scalar/batch evaluation
//! - [`config`]: TOML configuration of the twilight table
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use suncalc_rust::{format_instant, SunCalc};
//!
//! let calc = SunCalc::new();
//! let date = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
//! let times = calc.get_times(&date, 50.5, 30.5).unwrap();
//! assert_eq!(format_instant(&times.solar_noon()), "2013-03-05T10:10:57Z");
//! ```

pub mod batch;
pub mod config;
pub mod core;
pub mod ephemeris;
pub mod error;
pub mod time;

#[cfg(feature = "python")]
pub mod python;

pub use batch::{
    get_moon_illumination, get_moon_illumination_batch, get_moon_position,
    get_moon_position_batch, Column, Shape, SunCalc, TimesTable,
};
pub use config::TimesConfig;
pub use crate::core::domain::{
    format_instant, EventTime, GeoCoordinate, MoonIllumination, MoonPosition, Position, SunTimes,
    TwilightDefinition,
};
pub use error::{SunCalcError, SunCalcResult};
pub use time::{from_julian_day, to_days, to_julian_day, FromEpochMillis, Temporal};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// suncalc_rust - Vectorized sun and moon calculations
#[cfg(feature = "python")]
#[pymodule]
fn suncalc_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Calculator class
    m.add_class::<python::PySunCalc>()?;

    // Moon functions
    m.add_function(wrap_pyfunction!(python::calculator::get_moon_position, m)?)?;
    m.add_function(wrap_pyfunction!(python::calculator::get_moon_illumination, m)?)?;

    // Time conversion functions
    m.add_function(wrap_pyfunction!(python::time_bindings::to_julian, m)?)?;
    m.add_function(wrap_pyfunction!(python::time_bindings::from_julian, m)?)?;

    Ok(())
}
