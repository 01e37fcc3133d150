//! Batch evaluation of the ephemeris over scalar or columnar input.

pub mod calculator;
pub mod column;
pub mod table;

pub use calculator::{
    get_moon_illumination, get_moon_illumination_batch, get_moon_position,
    get_moon_position_batch, SunCalc,
};
pub use column::{broadcast_shape, from_julian_days, to_julian_days, Column, Shape};
pub use table::TimesTable;
