//! Python bindings for the sun and moon calculator.
//!
//! This module exposes the calculator to Python via PyO3 as the
//! `suncalc_rust` extension module.
//!
//! # Modules
//!
//! - [`coercion`]: reading Python dates, numbers and sequences into columns
//! - [`calculator`]: the `SunCalc` class and the moon functions
//! - [`time_bindings`]: Julian day conversions and `datetime` output
//!
//! # Python API
//!
//! ```python
//! from datetime import datetime, timezone
//! from suncalc_rust import SunCalc, get_moon_illumination
//!
//! calc = SunCalc()
//! times = calc.get_times(datetime(2013, 3, 5, tzinfo=timezone.utc), 50.5, 30.5)
//! times["sunrise"]  # datetime(2013, 3, 5, 4, 34, 56, ..., tzinfo=timezone.utc)
//! ```

use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::PyErr;

use crate::error::SunCalcError;

pub mod calculator;
pub mod coercion;
pub mod time_bindings;

pub use calculator::*;
pub use time_bindings::*;

impl From<SunCalcError> for PyErr {
    fn from(err: SunCalcError) -> Self {
        match err {
            SunCalcError::UnsupportedInputType(_) => PyTypeError::new_err(err.to_string()),
            SunCalcError::ShapeMismatch { .. } | SunCalcError::ConfigurationError(_) => {
                PyValueError::new_err(err.to_string())
            }
        }
    }
}
