//! Position formulas shared by the sun and moon models.
//!
//! All angles are radians. Longitudes enter as `lw`, the *negated* longitude,
//! and azimuth is measured from south, positive towards west.

use std::f64::consts::PI;

/// Degrees to radians.
pub const RAD: f64 = PI / 180.0;

/// Obliquity of the ecliptic.
pub const OBLIQUITY: f64 = RAD * 23.4397;

/// Right ascension of ecliptic coordinates (`l` longitude, `b` latitude).
#[inline]
pub fn right_ascension(l: f64, b: f64) -> f64 {
    (l.sin() * OBLIQUITY.cos() - b.tan() * OBLIQUITY.sin()).atan2(l.cos())
}

/// Declination of ecliptic coordinates (`l` longitude, `b` latitude).
#[inline]
pub fn declination(l: f64, b: f64) -> f64 {
    (b.sin() * OBLIQUITY.cos() + b.cos() * OBLIQUITY.sin() * l.sin()).asin()
}

/// Azimuth for hour angle `h`, observer latitude `phi` and declination `dec`.
#[inline]
pub fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

/// Altitude above the horizon for hour angle `h`, latitude `phi`, declination `dec`.
#[inline]
pub fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin()
}

/// Local sidereal time for `d` days since J2000 at negated longitude `lw`.
#[inline]
pub fn sidereal_time(d: f64, lw: f64) -> f64 {
    RAD * (280.16 + 360.985_623_5 * d) - lw
}

/// Atmospheric refraction at apparent altitude `h`.
///
/// Meeus, *Astronomical Algorithms* (2nd ed.), formula 16.4, converted from
/// degrees/arcminutes to radians. Negative altitudes are clamped to the
/// horizon; the formula has a pole at `h = -0.08901179`.
#[inline]
pub fn astro_refraction(h: f64) -> f64 {
    let h = h.max(0.0);
    0.000_296_7 / (h + 0.003_125_36 / (h + 0.089_011_79)).tan()
}
