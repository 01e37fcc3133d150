use std::path::PathBuf;

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyFloat};

use super::coercion::{extract_floats, extract_instants};
use super::time_bindings::{column_to_py, DateTimeFactory};
use crate::batch::{self, Column, SunCalc};
use crate::config::TimesConfig;
use crate::core::domain::TwilightDefinition;

/// Python wrapper for SunCalc
///
/// Every method accepts a single value or equal-length lists/arrays for
/// `date`, `lat` and `lng`, and returns scalars or lists to match.
#[pyclass(name = "SunCalc", module = "suncalc_rust")]
#[derive(Clone)]
pub struct PySunCalc {
    inner: SunCalc,
}

#[pymethods]
impl PySunCalc {
    #[new]
    #[pyo3(signature = (times=None))]
    fn new(times: Option<Vec<(f64, String, String)>>) -> Self {
        let inner = match times {
            Some(times) => SunCalc::with_times(
                times
                    .into_iter()
                    .map(|(angle, rise, set)| TwilightDefinition::new(angle, rise, set))
                    .collect(),
            ),
            None => SunCalc::new(),
        };
        Self { inner }
    }

    /// Build a calculator from a TOML configuration file
    #[staticmethod]
    fn from_config(path: PathBuf) -> PyResult<Self> {
        let config = TimesConfig::from_file(path)?;
        Ok(Self {
            inner: SunCalc::from_config(&config),
        })
    }

    /// Add a custom time to the times config
    fn add_time(&mut self, angle: f64, rise_name: String, set_name: String) {
        self.inner.add_custom_time(angle, rise_name, set_name);
    }

    /// The twilight table as `(angle, rise_name, set_name)` tuples
    #[getter(times)]
    fn times_table(&self) -> Vec<(f64, String, String)> {
        self.inner
            .times()
            .iter()
            .map(|t| (t.angle.value(), t.rise_name.clone(), t.set_name.clone()))
            .collect()
    }

    /// Calculate sun position for a given date and latitude/longitude
    fn get_position<'py>(
        &self,
        py: Python<'py>,
        date: &Bound<'py, PyAny>,
        lat: &Bound<'py, PyAny>,
        lng: &Bound<'py, PyAny>,
    ) -> PyResult<Bound<'py, PyDict>> {
        let positions = self.inner.get_position_batch(
            &extract_instants(date)?,
            &extract_floats(lat)?,
            &extract_floats(lng)?,
        )?;

        let result = PyDict::new(py);
        result.set_item("azimuth", floats(py, &positions, |p| p.azimuth.value())?)?;
        result.set_item("altitude", floats(py, &positions, |p| p.altitude.value())?)?;
        Ok(result)
    }

    /// Calculate sun times
    ///
    /// Optionally for an observer `height` meters above the horizon.
    #[pyo3(signature = (date, lat, lng, height=None))]
    fn get_times<'py>(
        &self,
        py: Python<'py>,
        date: &Bound<'py, PyAny>,
        lat: &Bound<'py, PyAny>,
        lng: &Bound<'py, PyAny>,
        height: Option<f64>,
    ) -> PyResult<Bound<'py, PyDict>> {
        let table = self.inner.get_times_batch(
            &extract_instants(date)?,
            &extract_floats(lat)?,
            &extract_floats(lng)?,
            height,
        )?;

        let factory = DateTimeFactory::new(py)?;
        let result = PyDict::new(py);
        for (name, column) in table.iter() {
            result.set_item(name, factory.column(column)?)?;
        }
        Ok(result)
    }

    fn __repr__(&self) -> String {
        format!(
            "SunCalc(times={}, height={:.1})",
            self.inner.times().len(),
            self.inner.observer_height().value()
        )
    }
}

/// Calculate moon position for a given date and latitude/longitude (PyO3 binding)
#[pyfunction]
pub fn get_moon_position<'py>(
    py: Python<'py>,
    date: &Bound<'py, PyAny>,
    lat: &Bound<'py, PyAny>,
    lng: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyDict>> {
    let positions = batch::get_moon_position_batch(
        &extract_instants(date)?,
        &extract_floats(lat)?,
        &extract_floats(lng)?,
    )?;

    let result = PyDict::new(py);
    result.set_item("azimuth", floats(py, &positions, |p| p.azimuth.value())?)?;
    result.set_item("altitude", floats(py, &positions, |p| p.altitude.value())?)?;
    result.set_item("distance", floats(py, &positions, |p| p.distance.value())?)?;
    result.set_item(
        "parallacticAngle",
        floats(py, &positions, |p| p.parallactic_angle.value())?,
    )?;
    Ok(result)
}

/// Calculate moon illumination for a given date (PyO3 binding)
#[pyfunction]
pub fn get_moon_illumination<'py>(
    py: Python<'py>,
    date: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyDict>> {
    let illumination = batch::get_moon_illumination_batch(&extract_instants(date)?)?;

    let result = PyDict::new(py);
    result.set_item("fraction", floats(py, &illumination, |i| i.fraction)?)?;
    result.set_item("phase", floats(py, &illumination, |i| i.phase)?)?;
    result.set_item("angle", floats(py, &illumination, |i| i.angle.value())?)?;
    Ok(result)
}

fn floats<'py, T>(
    py: Python<'py>,
    column: &Column<T>,
    field: impl Fn(&T) -> f64,
) -> PyResult<Bound<'py, PyAny>> {
    column_to_py(py, column, |value| Ok(PyFloat::new(py, field(value)).into_any()))
}
