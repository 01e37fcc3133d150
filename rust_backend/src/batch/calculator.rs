//! The sun/moon calculator and its batch evaluation.

use log::{debug, warn};
use qtty::Meters;

use super::column::{broadcast_shape, Column, Shape};
use super::table::TimesTable;
use crate::config::TimesConfig;
use crate::core::domain::{
    default_times, EventTime, GeoCoordinate, MoonIllumination, MoonPosition, Position, SunTimes,
    TwilightDefinition, NADIR, SOLAR_NOON,
};
use crate::ephemeris::{
    moon_illumination, moon_position, observer_angle, sun_position, SolarTransit, RAD,
};
use crate::error::SunCalcResult;
use crate::time::{from_julian_day, to_days, Temporal};

/// Sun position and sun-times calculator.
///
/// Owns the table of twilight definitions evaluated by [`SunCalc::get_times`].
/// The table only grows through [`SunCalc::add_custom_time`]; sharing one
/// calculator across threads while adding times requires external locking,
/// which `&mut self` enforces.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use suncalc_rust::SunCalc;
///
/// let calc = SunCalc::new();
/// let date = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
/// let times = calc.get_times(&date, 50.5, 30.5).unwrap();
/// assert!(times.get("sunrise").is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SunCalc {
    times: Vec<TwilightDefinition>,
    observer_height: Meters,
}

impl Default for SunCalc {
    fn default() -> Self {
        Self::new()
    }
}

impl SunCalc {
    /// Calculator with the default twilight table, observer at the horizon.
    pub fn new() -> Self {
        Self::with_times(default_times())
    }

    /// Calculator with a custom initial twilight table.
    pub fn with_times(times: Vec<TwilightDefinition>) -> Self {
        debug!("SunCalc created with {} twilight definitions", times.len());
        Self {
            times,
            observer_height: Meters::new(0.0),
        }
    }

    /// Calculator configured from a [`TimesConfig`].
    pub fn from_config(config: &TimesConfig) -> Self {
        Self::with_times(config.times.clone()).with_observer_height(config.observer.height.value())
    }

    /// Set the observer height used by [`SunCalc::get_times`] and
    /// [`SunCalc::get_times_batch`] when no height is given.
    pub fn with_observer_height(mut self, height_m: f64) -> Self {
        self.observer_height = Meters::new(height_m);
        self
    }

    pub fn observer_height(&self) -> Meters {
        self.observer_height
    }

    /// The twilight definitions evaluated by `get_times`, in output order.
    pub fn times(&self) -> &[TwilightDefinition] {
        &self.times
    }

    /// Append a twilight definition; later `get_times` calls report
    /// `rise_name` and `set_name` for the sun crossing `angle_deg`.
    pub fn add_custom_time(
        &mut self,
        angle_deg: f64,
        rise_name: impl Into<String>,
        set_name: impl Into<String>,
    ) {
        let time = TwilightDefinition::new(angle_deg, rise_name, set_name);
        debug!(
            "Adding custom time {}/{} at {}°",
            time.rise_name,
            time.set_name,
            time.angle.value()
        );
        self.times.push(time);
    }

    /// Sun azimuth and altitude (radians) for an instant and a location given in degrees.
    pub fn get_position<T: Temporal + ?Sized>(
        &self,
        date: &T,
        lat: f64,
        lng: f64,
    ) -> SunCalcResult<Position> {
        let geo = GeoCoordinate::new(lat, lng);
        Ok(sun_position(to_days(date)?, geo.phi(), geo.lw()))
    }

    /// Sun event times around `date` for a location, at the configured
    /// observer height.
    pub fn get_times<T: Temporal + ?Sized>(
        &self,
        date: &T,
        lat: f64,
        lng: f64,
    ) -> SunCalcResult<SunTimes> {
        self.get_times_at_height(date, lat, lng, self.observer_height.value())
    }

    /// Sun event times for an observer `height_m` meters above the horizon.
    ///
    /// Higher observers see the sun earlier in the morning and later in the
    /// evening.
    pub fn get_times_at_height<T: Temporal + ?Sized>(
        &self,
        date: &T,
        lat: f64,
        lng: f64,
        height_m: f64,
    ) -> SunCalcResult<SunTimes> {
        let transit = solar_transit(date, lat, lng)?;
        let dh = observer_angle(height_m);

        let mut result = SunTimes::with_capacity(2 + 2 * self.times.len());
        result.insert(SOLAR_NOON, from_julian_day(transit.noon()));
        result.insert(NADIR, from_julian_day(transit.nadir()));

        for time in &self.times {
            let (rise, set) = transit.rise_and_set(altitude_threshold(time, dh));
            result.insert(&time.rise_name, from_julian_day(rise));
            result.insert(&time.set_name, from_julian_day(set));
        }

        Ok(result)
    }

    /// Sun positions for scalar or batch input.
    pub fn get_position_batch<T: Temporal>(
        &self,
        dates: &Column<T>,
        lats: &Column<f64>,
        lngs: &Column<f64>,
    ) -> SunCalcResult<Column<Position>> {
        evaluate_rows(dates, lats, lngs, |date, lat, lng| {
            self.get_position(date, lat, lng)
        })
    }

    /// Sun event times for scalar or batch input, one column per event.
    ///
    /// Each twilight definition is evaluated against every row before moving
    /// on to the next, so the work is a definitions × rows grid built column
    /// by column. Rows where an event does not occur hold `None`.
    pub fn get_times_batch<T: Temporal>(
        &self,
        dates: &Column<T>,
        lats: &Column<f64>,
        lngs: &Column<f64>,
        height_m: Option<f64>,
    ) -> SunCalcResult<TimesTable> {
        let shape = input_shape(dates, lats, lngs)?;
        let dh = observer_angle(height_m.unwrap_or(self.observer_height.value()));

        let transits = (0..shape.rows())
            .map(|row| solar_transit(row_of(dates, row), *row_of(lats, row), *row_of(lngs, row)))
            .collect::<SunCalcResult<Vec<_>>>()?;

        debug!(
            "Evaluating {} twilight definitions over {} rows",
            self.times.len(),
            transits.len()
        );

        let mut table = TimesTable::new(shape, 2 + 2 * self.times.len());
        table.insert(SOLAR_NOON, transits.iter().map(|t| from_julian_day(t.noon())).collect());
        table.insert(NADIR, transits.iter().map(|t| from_julian_day(t.nadir())).collect());

        for time in &self.times {
            let h0 = altitude_threshold(time, dh);
            let (rises, sets): (Vec<EventTime>, Vec<EventTime>) = transits
                .iter()
                .map(|t| {
                    let (rise, set) = t.rise_and_set(h0);
                    (from_julian_day(rise), from_julian_day(set))
                })
                .unzip();
            table.insert(&time.rise_name, rises);
            table.insert(&time.set_name, sets);
        }

        let missing = table.not_a_time_count();
        if missing > 0 {
            warn!(
                "{} sun events over {} rows do not occur (sun never reaches the altitude)",
                missing,
                transits.len()
            );
        }

        Ok(table)
    }
}

/// Moon position for an instant and a location given in degrees.
pub fn get_moon_position<T: Temporal + ?Sized>(
    date: &T,
    lat: f64,
    lng: f64,
) -> SunCalcResult<MoonPosition> {
    let geo = GeoCoordinate::new(lat, lng);
    Ok(moon_position(to_days(date)?, geo.phi(), geo.lw()))
}

/// Moon illumination at an instant.
pub fn get_moon_illumination<T: Temporal + ?Sized>(date: &T) -> SunCalcResult<MoonIllumination> {
    Ok(moon_illumination(to_days(date)?))
}

/// Moon positions for scalar or batch input.
pub fn get_moon_position_batch<T: Temporal>(
    dates: &Column<T>,
    lats: &Column<f64>,
    lngs: &Column<f64>,
) -> SunCalcResult<Column<MoonPosition>> {
    evaluate_rows(dates, lats, lngs, |date, lat, lng| {
        get_moon_position(date, lat, lng)
    })
}

/// Moon illumination for one or many instants.
pub fn get_moon_illumination_batch<T: Temporal>(
    dates: &Column<T>,
) -> SunCalcResult<Column<MoonIllumination>> {
    dates.try_map(|date| get_moon_illumination(date))
}

fn solar_transit<T: Temporal + ?Sized>(date: &T, lat: f64, lng: f64) -> SunCalcResult<SolarTransit> {
    let geo = GeoCoordinate::new(lat, lng);
    Ok(SolarTransit::new(to_days(date)?, geo.phi(), geo.lw()))
}

/// Sun altitude (radians) of a twilight definition, lowered by the horizon
/// dip `dh` (degrees).
fn altitude_threshold(time: &TwilightDefinition, dh: f64) -> f64 {
    (time.angle.value() + dh) * RAD
}

fn input_shape<T>(dates: &Column<T>, lats: &Column<f64>, lngs: &Column<f64>) -> SunCalcResult<Shape> {
    broadcast_shape(&[
        ("date", dates.len()),
        ("latitude", lats.len()),
        ("longitude", lngs.len()),
    ])
}

/// Value at `row` of a column whose length was checked by [`input_shape`].
fn row_of<T>(column: &Column<T>, row: usize) -> &T {
    match column {
        Column::Scalar(value) => value,
        Column::Batch(values) => &values[row],
    }
}

fn evaluate_rows<T, R, F>(
    dates: &Column<T>,
    lats: &Column<f64>,
    lngs: &Column<f64>,
    mut f: F,
) -> SunCalcResult<Column<R>>
where
    F: FnMut(&T, f64, f64) -> SunCalcResult<R>,
{
    let shape = input_shape(dates, lats, lngs)?;
    let rows = (0..shape.rows())
        .map(|row| f(row_of(dates, row), *row_of(lats, row), *row_of(lngs, row)))
        .collect::<SunCalcResult<Vec<_>>>()?;
    Ok(Column::from_rows(rows, shape))
}
