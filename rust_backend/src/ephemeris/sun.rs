//! Solar model: coordinates, instantaneous position and transit-based event times.

use std::f64::consts::PI;

use qtty::Radians;

use super::position::{altitude, azimuth, declination, right_ascension, sidereal_time, RAD};
use crate::core::domain::Position;
use crate::time::J2000;

/// Fractional-day correction applied to the transit cycle.
pub const J0: f64 = 0.0009;

/// Equatorial coordinates of the sun, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunCoordinates {
    pub declination: f64,
    pub right_ascension: f64,
}

/// Solar mean anomaly for `d` days since J2000.
#[inline]
pub fn solar_mean_anomaly(d: f64) -> f64 {
    RAD * (357.5291 + 0.985_600_28 * d)
}

/// Ecliptic longitude of the sun for mean anomaly `m`.
pub fn ecliptic_longitude(m: f64) -> f64 {
    // equation of center
    let c = RAD * (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin());
    // perihelion of the Earth
    let p = RAD * 102.9372;

    m + c + p + PI
}

pub fn sun_coordinates(d: f64) -> SunCoordinates {
    let l = ecliptic_longitude(solar_mean_anomaly(d));
    SunCoordinates {
        declination: declination(l, 0.0),
        right_ascension: right_ascension(l, 0.0),
    }
}

/// Sun azimuth/altitude for `d` days since J2000, latitude `phi` and negated
/// longitude `lw` (radians).
pub fn sun_position(d: f64, phi: f64, lw: f64) -> Position {
    let c = sun_coordinates(d);
    let h = sidereal_time(d, lw) - c.right_ascension;

    Position {
        azimuth: Radians::new(azimuth(h, phi, c.declination)),
        altitude: Radians::new(altitude(h, phi, c.declination)),
    }
}

/// Number of the solar transit nearest to `d`.
#[inline]
pub fn julian_cycle(d: f64, lw: f64) -> f64 {
    (d - J0 - lw / (2.0 * PI)).round()
}

/// Approximate days since J2000 at which hour angle `ht` is reached in cycle `n`.
#[inline]
pub fn approx_transit(ht: f64, lw: f64, n: f64) -> f64 {
    J0 + (ht + lw) / (2.0 * PI) + n
}

/// Julian day of the transit, corrected for orbital eccentricity and obliquity.
#[inline]
pub fn solar_transit_j(ds: f64, m: f64, l: f64) -> f64 {
    J2000 + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin()
}

/// Hour angle at which a body of declination `dec` reaches altitude `h`.
///
/// NaN when the body never reaches that altitude at latitude `phi`.
#[inline]
pub fn hour_angle(h: f64, phi: f64, dec: f64) -> f64 {
    ((h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())).acos()
}

/// Dip of the horizon, in degrees, for an observer `height` meters up.
#[inline]
pub fn observer_angle(height: f64) -> f64 {
    -2.076 * height.sqrt() / 60.0
}

/// Julian day at which the sun sets through altitude `h`.
pub fn get_set_j(h: f64, lw: f64, phi: f64, dec: f64, n: f64, m: f64, l: f64) -> f64 {
    let w = hour_angle(h, phi, dec);
    let a = approx_transit(w, lw, n);
    solar_transit_j(a, m, l)
}

/// The solar transit (local noon) nearest to a given day, with everything
/// needed to derive rise/set times for arbitrary altitudes from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTransit {
    lw: f64,
    phi: f64,
    cycle: f64,
    mean_anomaly: f64,
    ecliptic_longitude: f64,
    declination: f64,
    noon: f64,
}

impl SolarTransit {
    /// Locate the transit nearest `d` days since J2000 for latitude `phi` and
    /// negated longitude `lw` (radians).
    pub fn new(d: f64, phi: f64, lw: f64) -> Self {
        let cycle = julian_cycle(d, lw);
        let ds = approx_transit(0.0, lw, cycle);

        let mean_anomaly = solar_mean_anomaly(ds);
        let ecliptic_longitude = ecliptic_longitude(mean_anomaly);
        let declination = declination(ecliptic_longitude, 0.0);

        Self {
            lw,
            phi,
            cycle,
            mean_anomaly,
            ecliptic_longitude,
            declination,
            noon: solar_transit_j(ds, mean_anomaly, ecliptic_longitude),
        }
    }

    /// Julian day of solar noon.
    pub fn noon(&self) -> f64 {
        self.noon
    }

    /// Julian day of solar midnight preceding noon.
    pub fn nadir(&self) -> f64 {
        self.noon - 0.5
    }

    /// Julian days of the morning and evening crossings of altitude `h0`
    /// (radians). Both are NaN when the crossing does not happen.
    pub fn rise_and_set(&self, h0: f64) -> (f64, f64) {
        let set = get_set_j(
            h0,
            self.lw,
            self.phi,
            self.declination,
            self.cycle,
            self.mean_anomaly,
            self.ecliptic_longitude,
        );
        let rise = self.noon - (set - self.noon);
        (rise, set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // 2013-03-05T00:00:00Z at 50.5N 30.5E
    const D: f64 = 4_811.5;
    const PHI: f64 = 50.5 * RAD;
    const LW: f64 = -30.5 * RAD;

    #[test]
    fn test_sun_position_reference() {
        let pos = sun_position(D, PHI, LW);
        assert_abs_diff_eq!(pos.azimuth.value(), -2.500_317_590_716_839, epsilon = 1e-12);
        assert_abs_diff_eq!(pos.altitude.value(), -0.700_040_683_878_161, epsilon = 1e-12);
    }

    #[test]
    fn test_observer_angle() {
        assert_eq!(observer_angle(0.0), 0.0);
        assert_abs_diff_eq!(observer_angle(3600.0), -2.076, epsilon = 1e-12);
    }

    #[test]
    fn test_rise_and_set_symmetric_about_noon() {
        let transit = SolarTransit::new(D, PHI, LW);
        let (rise, set) = transit.rise_and_set(-0.833 * RAD);
        assert_abs_diff_eq!(transit.noon() - rise, set - transit.noon(), epsilon = 1e-9);
        assert!(rise < transit.noon() && transit.noon() < set);
        assert_eq!(transit.noon() - transit.nadir(), 0.5);
    }

    #[test]
    fn test_polar_night_yields_nan() {
        // Mid-winter above the arctic circle: the sun never climbs to the horizon.
        let d = 4_720.5; // 2012-12-04
        let transit = SolarTransit::new(d, 80.0 * RAD, 0.0);
        let (rise, set) = transit.rise_and_set(-0.833 * RAD);
        assert!(rise.is_nan());
        assert!(set.is_nan());
        assert!(transit.noon().is_finite());
    }

    #[test]
    fn test_hour_angle_out_of_domain_is_nan() {
        assert!(hour_angle(0.0, 89.0 * RAD, 20.0 * RAD).is_nan());
        assert!(hour_angle(0.0, 0.0, 0.0).is_finite());
    }
}
