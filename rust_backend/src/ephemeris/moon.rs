//! Lunar model: geocentric coordinates, position and illumination.
//!
//! Coordinates follow the low-precision series from
//! <http://aa.quae.nl/en/reken/hemelpositie.html>; illumination follows
//! Meeus, *Astronomical Algorithms* (2nd ed.), chapter 48.

use std::f64::consts::PI;

use qtty::{Kilometers, Radians};

use super::position::{
    altitude, astro_refraction, azimuth, declination, right_ascension, sidereal_time, RAD,
};
use super::sun::sun_coordinates;
use crate::core::domain::{MoonIllumination, MoonPosition};

/// Mean Earth–Sun distance, km.
pub const SUN_DISTANCE_KM: f64 = 149_598_000.0;

/// Geocentric equatorial coordinates of the moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonCoordinates {
    /// radians
    pub declination: f64,
    /// radians
    pub right_ascension: f64,
    /// km
    pub distance: f64,
}

pub fn moon_coordinates(d: f64) -> MoonCoordinates {
    let mean_longitude = RAD * (218.316 + 13.176_396 * d);
    let mean_anomaly = RAD * (134.963 + 13.064_993 * d);
    let mean_distance = RAD * (93.272 + 13.229_350 * d);

    let l = mean_longitude + RAD * 6.289 * mean_anomaly.sin();
    let b = RAD * 5.128 * mean_distance.sin();
    let dt = 385_001.0 - 20_905.0 * mean_anomaly.cos();

    MoonCoordinates {
        declination: declination(l, b),
        right_ascension: right_ascension(l, b),
        distance: dt,
    }
}

/// Moon position for `d` days since J2000, latitude `phi` and negated
/// longitude `lw` (radians). Altitude includes atmospheric refraction.
pub fn moon_position(d: f64, phi: f64, lw: f64) -> MoonPosition {
    let c = moon_coordinates(d);
    let h = sidereal_time(d, lw) - c.right_ascension;
    let alt = altitude(h, phi, c.declination);

    // Meeus formula 14.1
    let pa = h
        .sin()
        .atan2(phi.tan() * c.declination.cos() - c.declination.sin() * h.cos());

    MoonPosition {
        azimuth: Radians::new(azimuth(h, phi, c.declination)),
        altitude: Radians::new(alt + astro_refraction(alt)),
        distance: Kilometers::new(c.distance),
        parallactic_angle: Radians::new(pa),
    }
}

/// Illuminated fraction, phase and bright-limb angle of the moon at `d`
/// days since J2000.
pub fn moon_illumination(d: f64) -> MoonIllumination {
    let s = sun_coordinates(d);
    let m = moon_coordinates(d);

    let d_ra = s.right_ascension - m.right_ascension;
    let elongation = (s.declination.sin() * m.declination.sin()
        + s.declination.cos() * m.declination.cos() * d_ra.cos())
    .acos();
    let inc = (SUN_DISTANCE_KM * elongation.sin())
        .atan2(m.distance - SUN_DISTANCE_KM * elongation.cos());
    let angle = (s.declination.cos() * d_ra.sin()).atan2(
        s.declination.sin() * m.declination.cos()
            - s.declination.cos() * m.declination.sin() * d_ra.cos(),
    );

    MoonIllumination {
        fraction: (1.0 + inc.cos()) / 2.0,
        phase: 0.5 + 0.5 * inc * limb_side(angle) / PI,
        angle: Radians::new(angle),
    }
}

/// Sign of the bright-limb angle: -1, 0 or 1, NaN for NaN.
fn limb_side(angle: f64) -> f64 {
    if angle == 0.0 {
        0.0
    } else {
        angle.signum()
    }
}
