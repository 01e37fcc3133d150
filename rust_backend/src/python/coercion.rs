//! Conversion of Python inputs into calculator columns.
//!
//! Inputs with a length (lists, tuples, numpy arrays, pandas series) are
//! batches; anything else, including strings, is a scalar. Instants are
//! read into epoch milliseconds from `datetime.datetime`, `datetime.date`,
//! `numpy.datetime64`, ISO-8601 strings, or numbers of milliseconds.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDate, PyDateTime, PyString};

use crate::batch::Column;
use crate::error::{SunCalcError, SunCalcResult};
use crate::time::Temporal;

/// Read a scalar or batch of instants as epoch milliseconds.
pub fn extract_instants(obj: &Bound<'_, PyAny>) -> PyResult<Column<f64>> {
    extract_column(obj, extract_instant)
}

/// Read a scalar or batch of floats.
pub fn extract_floats(obj: &Bound<'_, PyAny>) -> PyResult<Column<f64>> {
    extract_column(obj, |item| Ok(item.extract::<f64>()?))
}

fn extract_column<F>(obj: &Bound<'_, PyAny>, mut extract: F) -> PyResult<Column<f64>>
where
    F: FnMut(&Bound<'_, PyAny>) -> PyResult<f64>,
{
    if obj.cast::<PyString>().is_ok() || obj.len().is_err() {
        return Ok(Column::scalar(extract(obj)?));
    }

    let mut values = Vec::with_capacity(obj.len()?);
    for item in obj.try_iter()? {
        values.push(extract(&item?)?);
    }
    Ok(Column::batch(values))
}

/// Read one instant as epoch milliseconds.
pub fn extract_instant(obj: &Bound<'_, PyAny>) -> PyResult<f64> {
    if obj.cast::<PyDateTime>().is_ok() {
        return Ok(datetime_to_millis(obj)?);
    }
    if obj.cast::<PyDate>().is_ok() {
        return Ok(date_to_millis(obj)?);
    }
    if obj.cast::<PyString>().is_ok() {
        let text = obj.extract::<String>()?;
        return Ok(text.to_epoch_millis()?);
    }
    if obj.cast::<PyBool>().is_ok() {
        return Err(SunCalcError::unsupported("bool is not a timestamp").into());
    }

    let type_name = obj.get_type().name()?.to_string();
    if type_name == "datetime64" {
        // numpy.datetime64: normalise the unit, then read the integer count
        let ms = obj
            .call_method1("astype", ("datetime64[ms]",))?
            .call_method1("astype", ("int64",))?
            .extract::<i64>()?;
        return Ok(ms as f64);
    }
    if let Ok(ms) = obj.extract::<i64>() {
        return Ok(ms as f64);
    }
    if let Ok(ms) = obj.extract::<f64>() {
        return Ok(ms);
    }

    Err(SunCalcError::unsupported(format!("unknown date type: {}", type_name)).into())
}

/// Naive datetimes are taken to be UTC; aware ones are shifted by their offset.
fn datetime_to_millis(dt: &Bound<'_, PyAny>) -> SunCalcResult<f64> {
    let invalid = |e: PyErr| SunCalcError::unsupported(format!("invalid datetime: {}", e));

    let date = naive_date(dt).map_err(invalid)?;
    let time = naive_time(dt).map_err(invalid)?;

    let mut ms = NaiveDateTime::new(date, time).to_epoch_millis()?;

    let offset = dt.call_method0("utcoffset").map_err(invalid)?;
    if !offset.is_none() {
        let seconds = offset
            .call_method0("total_seconds")
            .and_then(|s| s.extract::<f64>())
            .map_err(invalid)?;
        ms -= seconds * 1000.0;
    }

    Ok(ms)
}

fn date_to_millis(date: &Bound<'_, PyAny>) -> SunCalcResult<f64> {
    naive_date(date)
        .map_err(|e| SunCalcError::unsupported(format!("invalid date: {}", e)))?
        .to_epoch_millis()
}

fn naive_time(obj: &Bound<'_, PyAny>) -> PyResult<NaiveTime> {
    let hour = obj.getattr("hour")?.extract::<u32>()?;
    let minute = obj.getattr("minute")?.extract::<u32>()?;
    let second = obj.getattr("second")?.extract::<u32>()?;
    let microsecond = obj.getattr("microsecond")?.extract::<u32>()?;

    NaiveTime::from_hms_micro_opt(hour, minute, second, microsecond)
        .ok_or_else(|| pyo3::exceptions::PyValueError::new_err("Invalid time"))
}

fn naive_date(obj: &Bound<'_, PyAny>) -> PyResult<NaiveDate> {
    let year = obj.getattr("year")?.extract::<i32>()?;
    let month = obj.getattr("month")?.extract::<u32>()?;
    let day = obj.getattr("day")?.extract::<u32>()?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| pyo3::exceptions::PyValueError::new_err("Invalid date"))
}
