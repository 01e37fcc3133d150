//! Columnar sun-times results.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::column::{Column, Shape};
use crate::core::domain::{EventTime, SunTimes};

/// Sun event times for a batch of observations, one column per event name.
///
/// Columns keep the order of [`SunTimes`] keys. For scalar input every
/// column holds a single scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct TimesTable {
    shape: Shape,
    columns: Vec<(String, Column<EventTime>)>,
}

impl TimesTable {
    pub(crate) fn new(shape: Shape, capacity: usize) -> Self {
        Self {
            shape,
            columns: Vec::with_capacity(capacity),
        }
    }

    /// Insert or overwrite the column `name`. An overwritten column keeps its position.
    pub(crate) fn insert(&mut self, name: &str, rows: Vec<EventTime>) {
        let column = Column::from_rows(rows, self.shape);
        match self.columns.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = column,
            None => self.columns.push((name.to_string(), column)),
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of observation rows.
    pub fn num_rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn get(&self, name: &str) -> Option<&Column<EventTime>> {
        self.columns
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, column)| column)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column<EventTime>)> {
        self.columns.iter().map(|(key, column)| (key.as_str(), column))
    }

    /// The event times of a single observation row.
    pub fn row(&self, row: usize) -> Option<SunTimes> {
        if row >= self.num_rows() {
            return None;
        }
        let mut times = SunTimes::with_capacity(self.columns.len());
        for (name, column) in &self.columns {
            times.insert(name, column.get(row).copied().flatten());
        }
        Some(times)
    }

    /// Transpose the columns into one [`SunTimes`] per observation row.
    pub fn rows(&self) -> Vec<SunTimes> {
        (0..self.num_rows()).filter_map(|row| self.row(row)).collect()
    }

    /// Number of events, over all rows, that do not occur.
    pub fn not_a_time_count(&self) -> usize {
        self.columns
            .iter()
            .map(|(_, column)| column.as_slice().iter().filter(|t| t.is_none()).count())
            .sum()
    }
}

impl Serialize for TimesTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, column) in &self.columns {
            map.serialize_entry(name, column)?;
        }
        map.end()
    }
}
