//! Reference values for 2013-03-05T00:00:00Z at latitude 50.5, longitude 30.5.

use approx::assert_abs_diff_eq;
use chrono::{DateTime, TimeZone, Utc};
use suncalc_rust::{
    format_instant, get_moon_illumination, get_moon_position, to_julian_day, SunCalc,
};

const LAT: f64 = 50.5;
const LNG: f64 = 30.5;
const HEIGHT: f64 = 2000.0;

fn date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap()
}

const TEST_TIMES: [(&str, &str); 14] = [
    ("solarNoon", "2013-03-05T10:10:57Z"),
    ("nadir", "2013-03-04T22:10:57Z"),
    ("sunrise", "2013-03-05T04:34:56Z"),
    ("sunset", "2013-03-05T15:46:57Z"),
    ("sunrise_end", "2013-03-05T04:38:19Z"),
    ("sunset_start", "2013-03-05T15:43:34Z"),
    ("dawn", "2013-03-05T04:02:17Z"),
    ("dusk", "2013-03-05T16:19:36Z"),
    ("nautical_dawn", "2013-03-05T03:24:31Z"),
    ("nautical_dusk", "2013-03-05T16:57:22Z"),
    ("night_end", "2013-03-05T02:46:17Z"),
    ("night", "2013-03-05T17:35:36Z"),
    ("golden_hour_end", "2013-03-05T05:19:01Z"),
    ("golden_hour", "2013-03-05T15:02:52Z"),
];

const HEIGHT_TEST_TIMES: [(&str, &str); 4] = [
    ("solarNoon", "2013-03-05T10:10:57Z"),
    ("nadir", "2013-03-04T22:10:57Z"),
    ("sunrise", "2013-03-05T04:25:07Z"),
    ("sunset", "2013-03-05T15:56:46Z"),
];

#[test]
fn test_get_position() {
    let pos = SunCalc::new().get_position(&date(), LAT, LNG).unwrap();
    assert_abs_diff_eq!(pos.azimuth.value(), -2.500_317_590_716_838_5, epsilon = 1e-12);
    assert_abs_diff_eq!(pos.altitude.value(), -0.700_040_683_878_161_1, epsilon = 1e-12);
}

#[test]
fn test_get_times() {
    let times = SunCalc::new().get_times(&date(), LAT, LNG).unwrap();
    assert_eq!(times.len(), TEST_TIMES.len());
    for (key, expected) in TEST_TIMES {
        let value = times.get(key).unwrap_or_else(|| panic!("missing {key}"));
        assert_eq!(format_instant(value), expected, "{key}");
    }
}

#[test]
fn test_get_times_height() {
    let times = SunCalc::new()
        .get_times_at_height(&date(), LAT, LNG, HEIGHT)
        .unwrap();
    for (key, expected) in HEIGHT_TEST_TIMES {
        assert_eq!(format_instant(times.get(key).unwrap()), expected, "{key}");
    }
}

#[test]
fn test_height_widens_the_day() {
    let calc = SunCalc::new();
    let sea = calc.get_times(&date(), LAT, LNG).unwrap();
    let high = calc.get_times_at_height(&date(), LAT, LNG, HEIGHT).unwrap();
    assert!(high.get("sunrise").unwrap() < sea.get("sunrise").unwrap());
    assert!(high.get("sunset").unwrap() > sea.get("sunset").unwrap());
}

#[test]
fn test_epoch_millis_and_string_inputs_agree() {
    let calc = SunCalc::new();
    let expected = calc.get_times(&date(), LAT, LNG).unwrap();
    assert_eq!(
        calc.get_times(&1_362_441_600_000_i64, LAT, LNG).unwrap(),
        expected
    );
    assert_eq!(calc.get_times("2013-03-05T00:00:00Z", LAT, LNG).unwrap(), expected);
    assert_eq!(calc.get_times(&date().naive_utc(), LAT, LNG).unwrap(), expected);
}

#[test]
fn test_solar_noon_and_nadir_twelve_hours_apart() {
    let times = SunCalc::new().get_times(&date(), LAT, LNG).unwrap();
    let noon = to_julian_day(&times.solar_noon().unwrap()).unwrap();
    let nadir = to_julian_day(&times.nadir().unwrap()).unwrap();
    assert_abs_diff_eq!(noon - nadir, 0.5, epsilon = 1e-8);
}

#[test]
fn test_custom_time_adds_keys_without_changing_others() {
    let mut calc = SunCalc::new();
    let before = calc.get_times(&date(), LAT, LNG).unwrap();

    calc.add_custom_time(-4.0, "blue_hour_end", "blue_hour");
    let after = calc.get_times(&date(), LAT, LNG).unwrap();

    assert_eq!(after.len(), before.len() + 2);
    for (key, value) in before.iter() {
        assert_eq!(after.get(key), Some(value), "{key}");
    }
    let blue_end = after.get("blue_hour_end").unwrap().unwrap();
    let blue = after.get("blue_hour").unwrap().unwrap();
    // between civil dawn and sunrise, and between sunset and civil dusk
    assert!(blue_end > before.get("dawn").unwrap().unwrap());
    assert!(blue_end < before.get("sunrise").unwrap().unwrap());
    assert!(blue > before.get("sunset").unwrap().unwrap());
    assert!(blue < before.get("dusk").unwrap().unwrap());
}

#[test]
fn test_get_moon_position() {
    let pos = get_moon_position(&date(), LAT, LNG).unwrap();
    assert_abs_diff_eq!(pos.azimuth.value(), -0.978_399_952_243_822_6, epsilon = 1e-10);
    assert_abs_diff_eq!(pos.altitude.value(), 0.014_551_482_243_892_251, epsilon = 1e-10);
    assert_abs_diff_eq!(pos.distance.value(), 364_121.372_562_561_94, epsilon = 1e-6);
}

#[test]
fn test_get_moon_illumination() {
    let illum = get_moon_illumination(&date()).unwrap();
    assert_abs_diff_eq!(illum.fraction, 0.484_806_820_245_637_3, epsilon = 1e-10);
    assert_abs_diff_eq!(illum.phase, 0.754_836_883_853_876_2, epsilon = 1e-10);
    assert_abs_diff_eq!(illum.angle.value(), 1.673_294_267_857_834_6, epsilon = 1e-10);
}
