//! Laws of the batch evaluator and the time conversions.

use approx::assert_abs_diff_eq;
use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use suncalc_rust::ephemeris::{SolarTransit, RAD};
use suncalc_rust::time::{from_julian_day, to_days, to_julian_day};
use suncalc_rust::{get_moon_illumination, Column, SunCalc, SunCalcError};

fn date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap()
}

#[test]
fn test_identical_rows_match_scalar() {
    let calc = SunCalc::new();
    let n = 5;
    let table = calc
        .get_times_batch(
            &Column::batch(vec![date(); n]),
            &Column::batch(vec![50.5; n]),
            &Column::batch(vec![30.5; n]),
            None,
        )
        .unwrap();

    let scalar = calc.get_times(&date(), 50.5, 30.5).unwrap();
    assert_eq!(table.num_rows(), n);
    assert_eq!(table.rows(), vec![scalar; n]);
    for (_, column) in table.iter() {
        assert_eq!(column.len(), Some(n));
    }
}

#[test]
fn test_batch_rows_match_individual_rows() {
    let calc = SunCalc::new();
    let dates: Vec<DateTime<Utc>> = (0..4)
        .map(|i| date() + chrono::Duration::days(45 * i))
        .collect();
    let lats = vec![50.5, -33.9, 0.0, 64.1];
    let lngs = vec![30.5, 18.4, -78.5, -21.9];

    let table = calc
        .get_times_batch(
            &Column::batch(dates.clone()),
            &Column::batch(lats.clone()),
            &Column::batch(lngs.clone()),
            Some(100.0),
        )
        .unwrap();

    for (i, row) in table.rows().into_iter().enumerate() {
        let expected = calc
            .get_times_at_height(&dates[i], lats[i], lngs[i], 100.0)
            .unwrap();
        assert_eq!(row, expected);
    }
}

#[test]
fn test_empty_batch() {
    let calc = SunCalc::new();
    let table = calc
        .get_times_batch(
            &Column::<DateTime<Utc>>::batch(vec![]),
            &Column::batch(vec![]),
            &Column::batch(vec![]),
            None,
        )
        .unwrap();
    assert_eq!(table.num_rows(), 0);
    assert!(table.rows().is_empty());
    assert_eq!(table.get("sunrise"), Some(&Column::Batch(vec![])));
}

#[test]
fn test_unequal_lengths_fail_fast() {
    let calc = SunCalc::new();
    let result = calc.get_position_batch(
        &Column::batch(vec![date(); 2]),
        &Column::batch(vec![50.5; 2]),
        &Column::batch(vec![30.5; 3]),
    );
    assert!(matches!(
        result,
        Err(SunCalcError::ShapeMismatch {
            field: "longitude",
            ..
        })
    ));
}

#[test]
fn test_unsupported_row_fails_the_call() {
    let calc = SunCalc::new();
    let result = calc.get_times_batch(
        &Column::batch(vec!["2013-03-05", "the ides of march"]),
        &Column::scalar(50.5),
        &Column::scalar(30.5),
        None,
    );
    assert!(matches!(result, Err(SunCalcError::UnsupportedInputType(_))));
}

#[test]
fn test_midnight_sun_row() {
    // Tromsø around the June solstice: the sun never sets.
    let calc = SunCalc::new();
    let june = Utc.with_ymd_and_hms(2013, 6, 21, 0, 0, 0).unwrap();
    let times = calc.get_times(&june, 69.65, 18.96).unwrap();
    assert!(times.get("sunrise").unwrap().is_none());
    assert!(times.get("sunset").unwrap().is_none());
    assert!(times.solar_noon().is_some());
    // lowest altitude is about +3°, so the golden hour still happens
    assert!(times.get("golden_hour_end").unwrap().is_some());
    assert!(times.get("dawn").unwrap().is_none());
}

proptest! {
    #[test]
    fn prop_julian_roundtrip(ms in -2_000_000_000_000_i64..4_000_000_000_000_i64) {
        let instant = Utc.timestamp_millis_opt(ms).unwrap();
        let j = to_julian_day(&instant).unwrap();
        let back = from_julian_day(j).unwrap();
        let drift = (back - instant).num_microseconds().unwrap();
        prop_assert!(drift.abs() < 1_000, "drift of {}us", drift);
    }

    #[test]
    fn prop_illumination_in_range(ms in 0_i64..4_000_000_000_000_i64) {
        let illum = get_moon_illumination(&ms).unwrap();
        prop_assert!((0.0..=1.0).contains(&illum.fraction));
        prop_assert!((0.0..=1.0).contains(&illum.phase));
    }

    #[test]
    fn prop_rise_and_set_symmetric(
        ms in 0_i64..4_000_000_000_000_i64,
        lat in -60.0_f64..60.0,
        lng in -180.0_f64..180.0,
        angle in -18.0_f64..6.0,
    ) {
        let d = to_days(&ms).unwrap();
        let transit = SolarTransit::new(d, lat * RAD, -lng * RAD);
        let (rise, set) = transit.rise_and_set(angle * RAD);
        if rise.is_finite() {
            assert_abs_diff_eq!(transit.noon() - rise, set - transit.noon(), epsilon = 1e-8);
        } else {
            prop_assert!(set.is_nan());
        }
    }

    #[test]
    fn prop_noon_nadir_half_day(ms in 0_i64..4_000_000_000_000_i64, lat in -89.0_f64..89.0, lng in -180.0_f64..180.0) {
        let times = SunCalc::with_times(vec![]).get_times(&ms, lat, lng).unwrap();
        let noon = times.solar_noon().unwrap();
        let nadir = times.nadir().unwrap();
        let gap = (noon - nadir).num_microseconds().unwrap();
        prop_assert!((gap - 43_200_000_000).abs() < 1_000);
    }
}
