//! Closed-form solar and lunar ephemeris.
//!
//! Low-precision formulas after Schlyter/Meeus as popularised by suncalc.js;
//! accurate to about a minute for sun times, not suitable for precise
//! astrometry.

pub mod moon;
pub mod position;
pub mod sun;

pub use moon::{moon_coordinates, moon_illumination, moon_position, MoonCoordinates};
pub use position::{
    altitude, astro_refraction, azimuth, declination, right_ascension, sidereal_time, OBLIQUITY,
    RAD,
};
pub use sun::{
    approx_transit, ecliptic_longitude, get_set_j, hour_angle, julian_cycle, observer_angle,
    solar_mean_anomaly, solar_transit_j, sun_coordinates, sun_position, SolarTransit,
    SunCoordinates, J0,
};
