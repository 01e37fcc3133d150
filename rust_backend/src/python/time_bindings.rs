use chrono::{Datelike, Timelike};
use pyo3::prelude::*;
use pyo3::types::PyList;

use super::coercion::{extract_floats, extract_instants};
use crate::batch::{from_julian_days, to_julian_days, Column};
use crate::core::domain::EventTime;

/// Builds timezone-aware `datetime.datetime` objects in UTC.
pub struct DateTimeFactory<'py> {
    py: Python<'py>,
    datetime_cls: Bound<'py, PyAny>,
    utc: Bound<'py, PyAny>,
}

impl<'py> DateTimeFactory<'py> {
    pub fn new(py: Python<'py>) -> PyResult<Self> {
        let datetime_module = py.import("datetime")?;
        let datetime_cls = datetime_module.getattr("datetime")?;
        let utc = datetime_module.getattr("timezone")?.getattr("utc")?;
        Ok(Self {
            py,
            datetime_cls,
            utc,
        })
    }

    /// `datetime` for an event, `None` when the event does not occur.
    pub fn event(&self, time: &EventTime) -> PyResult<Bound<'py, PyAny>> {
        let Some(datetime_utc) = time else {
            return Ok(self.py.None().into_bound(self.py));
        };

        self.datetime_cls.call1((
            datetime_utc.year(),
            datetime_utc.month(),
            datetime_utc.day(),
            datetime_utc.hour(),
            datetime_utc.minute(),
            datetime_utc.second(),
            datetime_utc.timestamp_subsec_micros(),
            &self.utc,
        ))
    }

    /// A scalar `datetime` or a list of them, following the column shape.
    pub fn column(&self, times: &Column<EventTime>) -> PyResult<Bound<'py, PyAny>> {
        column_to_py(self.py, times, |time| self.event(time))
    }
}

/// A scalar or a list, following the column shape.
pub fn column_to_py<'py, T, F>(
    py: Python<'py>,
    column: &Column<T>,
    mut convert: F,
) -> PyResult<Bound<'py, PyAny>>
where
    F: FnMut(&T) -> PyResult<Bound<'py, PyAny>>,
{
    match column {
        Column::Scalar(value) => convert(value),
        Column::Batch(values) => {
            let items = values.iter().map(&mut convert).collect::<PyResult<Vec<_>>>()?;
            Ok(PyList::new(py, items)?.into_any())
        }
    }
}

/// Convert dates to Julian day numbers (PyO3 binding)
///
/// Accepts a single date or a list/array of dates; returns a float or a list.
#[pyfunction]
pub fn to_julian<'py>(py: Python<'py>, date: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyAny>> {
    let days = to_julian_days(&extract_instants(date)?)?;
    column_to_py(py, &days, |&j| Ok(pyo3::types::PyFloat::new(py, j).into_any()))
}

/// Convert Julian day numbers to UTC datetimes (PyO3 binding)
///
/// NaN gives `None`.
#[pyfunction]
pub fn from_julian<'py>(py: Python<'py>, j: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyAny>> {
    let times = from_julian_days(&extract_floats(j)?);
    DateTimeFactory::new(py)?.column(&times)
}
