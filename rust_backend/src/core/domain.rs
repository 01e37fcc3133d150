//! Value types for observer locations, twilight definitions and results.
//!
//! Every result is computed fresh per call; none of these types carry
//! identity or shared state.

use chrono::{DateTime, Utc};
use qtty::{Degrees, Kilometers, Radian, Radians};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Result key of the solar transit.
pub const SOLAR_NOON: &str = "solarNoon";
/// Result key of the solar anti-transit, 12 hours before noon.
pub const NADIR: &str = "nadir";

/// An event instant in UTC, or `None` when the event does not occur
/// (the sun never reaches the altitude that day).
pub type EventTime = Option<DateTime<Utc>>;

/// The default twilight table: `(angle in degrees, morning name, evening name)`.
pub const DEFAULT_TIMES: [(f64, &str, &str); 6] = [
    (-0.833, "sunrise", "sunset"),
    (-0.3, "sunrise_end", "sunset_start"),
    (-6.0, "dawn", "dusk"),
    (-12.0, "nautical_dawn", "nautical_dusk"),
    (-18.0, "night_end", "night"),
    (6.0, "golden_hour_end", "golden_hour"),
];

/// Geographic observer location.
///
/// Ranges are conventional (latitude in [-90, 90], longitude in [-180, 180])
/// and not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: Degrees,
    pub longitude: Degrees,
}

impl GeoCoordinate {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude: Degrees::new(latitude_deg),
            longitude: Degrees::new(longitude_deg),
        }
    }

    /// Latitude in radians (`φ` in the formulas).
    pub fn phi(&self) -> f64 {
        self.latitude.to::<Radian>().value()
    }

    /// Negated longitude in radians (`lw` in the formulas).
    pub fn lw(&self) -> f64 {
        -self.longitude.to::<Radian>().value()
    }
}

/// A named pair of events at which the sun crosses `angle` (degrees above
/// the horizon, negative below) in the morning and in the evening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwilightDefinition {
    pub angle: Degrees,
    #[serde(rename = "rise")]
    pub rise_name: String,
    #[serde(rename = "set")]
    pub set_name: String,
}

impl TwilightDefinition {
    pub fn new(angle_deg: f64, rise_name: impl Into<String>, set_name: impl Into<String>) -> Self {
        Self {
            angle: Degrees::new(angle_deg),
            rise_name: rise_name.into(),
            set_name: set_name.into(),
        }
    }
}

/// The six standard sun events: sunrise/sunset, the end/start of the
/// sunrise/sunset, civil, nautical and astronomical twilight, golden hour.
pub fn default_times() -> Vec<TwilightDefinition> {
    DEFAULT_TIMES
        .iter()
        .map(|&(angle, rise, set)| TwilightDefinition::new(angle, rise, set))
        .collect()
}

/// Horizontal position of the sun.
///
/// Azimuth is measured from south, positive towards west.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub azimuth: Radians,
    pub altitude: Radians,
}

/// Horizontal position of the moon. Altitude includes atmospheric refraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonPosition {
    pub azimuth: Radians,
    pub altitude: Radians,
    pub distance: Kilometers,
    pub parallactic_angle: Radians,
}

/// Illumination of the moon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonIllumination {
    /// Illuminated fraction of the disc, 0 (new) to 1 (full).
    pub fraction: f64,
    /// Position in the lunation: 0 new, 0.25 first quarter, 0.5 full,
    /// 0.75 last quarter, back to 1 at the next new moon.
    pub phase: f64,
    /// Midpoint angle of the illuminated limb, eastward from north.
    pub angle: Radians,
}

/// Sun event times for one observation, keyed by event name.
///
/// Keys keep their insertion order: `solarNoon`, `nadir`, then the morning
/// and evening name of each twilight definition in table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SunTimes {
    events: Vec<(String, EventTime)>,
}

impl SunTimes {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
        }
    }

    /// Insert or overwrite an event. An overwritten key keeps its position.
    pub(crate) fn insert(&mut self, name: &str, time: EventTime) {
        match self.events.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = time,
            None => self.events.push((name.to_string(), time)),
        }
    }

    /// The time of event `name`; `None` if no such key, `Some(None)` if the
    /// event does not occur.
    pub fn get(&self, name: &str) -> Option<&EventTime> {
        self.events
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, time)| time)
    }

    pub fn solar_noon(&self) -> EventTime {
        self.get(SOLAR_NOON).copied().flatten()
    }

    pub fn nadir(&self) -> EventTime {
        self.get(NADIR).copied().flatten()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EventTime)> {
        self.events.iter().map(|(key, time)| (key.as_str(), time))
    }
}

impl Serialize for SunTimes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.events.len()))?;
        for (name, time) in &self.events {
            map.serialize_entry(name, time)?;
        }
        map.end()
    }
}

/// Render an event time as `YYYY-MM-DDTHH:MM:SSZ` (seconds truncated), or
/// `NaT` when the event does not occur.
pub fn format_instant(time: &EventTime) -> String {
    match time {
        Some(dt) => dt.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        None => "NaT".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_geo_coordinate_radians() {
        let geo = GeoCoordinate::new(90.0, 180.0);
        assert!((geo.phi() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((geo.lw() + std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_default_times_table() {
        let times = default_times();
        assert_eq!(times.len(), 6);
        assert_eq!(times[0].rise_name, "sunrise");
        assert_eq!(times[0].set_name, "sunset");
        assert_eq!(times[5].angle.value(), 6.0);
    }

    #[test]
    fn test_sun_times_preserves_order_and_overwrites_in_place() {
        let t = Utc.with_ymd_and_hms(2013, 3, 5, 10, 10, 57).unwrap();
        let mut times = SunTimes::with_capacity(3);
        times.insert(SOLAR_NOON, Some(t));
        times.insert(NADIR, None);
        times.insert("dawn", Some(t));
        times.insert(NADIR, Some(t));

        assert_eq!(times.names().collect::<Vec<_>>(), vec![SOLAR_NOON, NADIR, "dawn"]);
        assert_eq!(times.nadir(), Some(t));
        assert!(times.get("dusk").is_none());
    }

    #[test]
    fn test_sun_times_serializes_as_ordered_map() {
        let t = Utc.with_ymd_and_hms(2013, 3, 5, 10, 10, 57).unwrap();
        let mut times = SunTimes::default();
        times.insert(SOLAR_NOON, Some(t));
        times.insert("night", None);

        let json = serde_json::to_string(&times).unwrap();
        assert_eq!(json, r#"{"solarNoon":"2013-03-05T10:10:57Z","night":null}"#);
    }

    #[test]
    fn test_format_instant() {
        let t = Utc.timestamp_millis_opt(1_362_478_257_999).unwrap();
        assert_eq!(format_instant(&Some(t)), "2013-03-05T10:10:57Z");
        assert_eq!(format_instant(&None), "NaT");
    }

    #[test]
    fn test_moon_position_serializes_camel_case() {
        let pos = MoonPosition {
            azimuth: Radians::new(1.0),
            altitude: Radians::new(0.5),
            distance: Kilometers::new(384_400.0),
            parallactic_angle: Radians::new(0.25),
        };
        let value = serde_json::to_value(pos).unwrap();
        assert_eq!(value["parallacticAngle"], 0.25);
        assert_eq!(value["distance"], 384_400.0);
    }
}
