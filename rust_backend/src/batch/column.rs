//! Scalar-or-batch container used for every calculator input and output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SunCalcError, SunCalcResult};
use crate::time::{from_julian_day, to_julian_day, Temporal};

/// Either a single value or a column of values.
///
/// Outputs mirror the shape of the inputs: scalars in give scalars out, a
/// batch of `N` rows gives columns of `N` rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Column<T> {
    Scalar(T),
    Batch(Vec<T>),
}

/// Shape shared by the inputs of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Scalar,
    Batch(usize),
}

impl Shape {
    /// Number of rows to evaluate.
    pub fn rows(&self) -> usize {
        match self {
            Shape::Scalar => 1,
            Shape::Batch(n) => *n,
        }
    }
}

impl<T> Column<T> {
    pub fn scalar(value: T) -> Self {
        Column::Scalar(value)
    }

    pub fn batch(values: Vec<T>) -> Self {
        Column::Batch(values)
    }

    /// Number of rows, or `None` for a scalar (which has no length).
    pub fn len(&self) -> Option<usize> {
        match self {
            Column::Scalar(_) => None,
            Column::Batch(values) => Some(values.len()),
        }
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, Column::Batch(_))
    }

    pub fn as_scalar(&self) -> Option<&T> {
        match self {
            Column::Scalar(value) => Some(value),
            Column::Batch(_) => None,
        }
    }

    /// The rows as a slice; a scalar is a single row.
    pub fn as_slice(&self) -> &[T] {
        match self {
            Column::Scalar(value) => std::slice::from_ref(value),
            Column::Batch(values) => values,
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Column::Scalar(value) => vec![value],
            Column::Batch(values) => values,
        }
    }

    /// Value at `row`, broadcasting a scalar to every row.
    pub fn get(&self, row: usize) -> Option<&T> {
        match self {
            Column::Scalar(value) => Some(value),
            Column::Batch(values) => values.get(row),
        }
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, mut f: F) -> Column<U> {
        match self {
            Column::Scalar(value) => Column::Scalar(f(value)),
            Column::Batch(values) => Column::Batch(values.iter().map(f).collect()),
        }
    }

    pub fn try_map<U, E, F: FnMut(&T) -> Result<U, E>>(&self, mut f: F) -> Result<Column<U>, E> {
        Ok(match self {
            Column::Scalar(value) => Column::Scalar(f(value)?),
            Column::Batch(values) => Column::Batch(values.iter().map(f).collect::<Result<_, _>>()?),
        })
    }

    /// Wrap evaluated rows back into the input shape.
    pub(crate) fn from_rows(mut rows: Vec<T>, shape: Shape) -> Self {
        match shape {
            Shape::Scalar if rows.len() == 1 => Column::Scalar(rows.remove(0)),
            _ => Column::Batch(rows),
        }
    }
}

impl<T> From<Vec<T>> for Column<T> {
    fn from(values: Vec<T>) -> Self {
        Column::Batch(values)
    }
}

/// Resolve the common shape of several named inputs.
///
/// Scalars broadcast against batches; batches must all have the same length.
pub fn broadcast_shape(fields: &[(&'static str, Option<usize>)]) -> SunCalcResult<Shape> {
    let mut shape = Shape::Scalar;
    for &(field, len) in fields {
        let Some(found) = len else { continue };
        match shape {
            Shape::Scalar => shape = Shape::Batch(found),
            Shape::Batch(expected) if expected != found => {
                return Err(SunCalcError::ShapeMismatch {
                    field,
                    expected,
                    found,
                })
            }
            Shape::Batch(_) => {}
        }
    }
    Ok(shape)
}

/// Julian day numbers of one or many instants.
pub fn to_julian_days<T: Temporal>(instants: &Column<T>) -> SunCalcResult<Column<f64>> {
    instants.try_map(|instant| to_julian_day(instant))
}

/// Instants of one or many Julian day numbers; NaN rows become `None`.
pub fn from_julian_days(days: &Column<f64>) -> Column<Option<DateTime<Utc>>> {
    days.map(|&j| from_julian_day(j))
}
