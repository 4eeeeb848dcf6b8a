//! Sunrise/sunset against published almanac times.
//!
//! Reference times are apparent upper-limb events from the USNO calculator.
//! The analytic model uses a fixed refraction shift, so tolerances are a few
//! minutes.

use kaal_core::AnalyticEphemeris;
use kaal_time::calendar_to_jd;
use kaal_vedic_base::{
    GeoLocation, RiseSetConfig, RiseSetResult, SunEvent, VedicError, approximate_local_noon_jd,
    compute_moon_events, compute_rise_set, compute_sun_events,
};

fn utc_hours(jd: f64) -> f64 {
    ((jd - jd.floor() + 0.5).rem_euclid(1.0)) * 24.0
}

fn assert_close_minutes(label: &str, jd: f64, expected_utc_hours: f64, tol_min: f64) {
    let got = utc_hours(jd);
    let diff_min = (got - expected_utc_hours) * 60.0;
    assert!(
        diff_min.abs() <= tol_min,
        "{label}: got {got:.4} h, expected {expected_utc_hours:.4} h, diff {diff_min:.1} min"
    );
}

#[test]
fn new_delhi_equinox() {
    let eph = AnalyticEphemeris::new();
    let loc = GeoLocation::new(28.6139, 77.209, 0.0).unwrap();
    let ev = compute_sun_events(&eph, &loc, calendar_to_jd(2024, 3, 20.0), &RiseSetConfig::default())
        .unwrap();
    // 06:24 and 18:32 IST
    assert_close_minutes("sunrise", ev.sunrise_jd, 0.0 + 54.0 / 60.0, 5.0);
    assert_close_minutes("sunset", ev.sunset_jd, 13.0 + 2.0 / 60.0, 5.0);
    assert!(ev.civil_dawn_jd.unwrap() < ev.sunrise_jd);
    assert!(ev.civil_dusk_jd.unwrap() > ev.sunset_jd);
}

#[test]
fn london_summer_solstice() {
    let eph = AnalyticEphemeris::new();
    let loc = GeoLocation::new(51.5074, -0.1278, 0.0).unwrap();
    let ev = compute_sun_events(&eph, &loc, calendar_to_jd(2024, 6, 20.0), &RiseSetConfig::default())
        .unwrap();
    // 04:43 and 21:21 BST
    assert_close_minutes("sunrise", ev.sunrise_jd, 3.0 + 43.0 / 60.0, 8.0);
    assert_close_minutes("sunset", ev.sunset_jd, 20.0 + 21.0 / 60.0, 8.0);
    assert!(ev.day_length_hours > 16.0 && ev.day_length_hours < 17.0);
}

#[test]
fn geometric_event_precedes_corrected_sunrise_shift() {
    let eph = AnalyticEphemeris::new();
    let loc = GeoLocation::new(23.1765, 75.7885, 0.0).unwrap();
    let midnight = calendar_to_jd(2025, 1, 10.0);
    let noon = approximate_local_noon_jd(midnight, loc.longitude_deg);
    let raw = compute_rise_set(&eph, &loc, SunEvent::Sunrise, noon).unwrap();
    let RiseSetResult::Event { jd_utc, .. } = raw else {
        panic!("expected a sunrise at Ujjain");
    };
    let corrected = compute_sun_events(&eph, &loc, midnight, &RiseSetConfig::default()).unwrap();
    assert!(corrected.sunrise_jd < jd_utc);
}

#[test]
fn elevated_site_rises_earlier() {
    let eph = AnalyticEphemeris::new();
    let midnight = calendar_to_jd(2024, 9, 1.0);
    let low = GeoLocation::new(27.0, 85.0, 0.0).unwrap();
    let high = GeoLocation::new(27.0, 85.0, 2500.0).unwrap();
    let cfg = RiseSetConfig::default();
    let a = compute_sun_events(&eph, &low, midnight, &cfg).unwrap();
    let b = compute_sun_events(&eph, &high, midnight, &cfg).unwrap();
    assert!(b.sunrise_jd < a.sunrise_jd);
    assert!(b.sunset_jd > a.sunset_jd);
}

#[test]
fn polar_night_is_degenerate() {
    let eph = AnalyticEphemeris::new();
    let loc = GeoLocation::new(78.2, 15.6, 0.0).unwrap();
    let err = compute_sun_events(&eph, &loc, calendar_to_jd(2024, 12, 21.0), &RiseSetConfig::default())
        .unwrap_err();
    assert!(matches!(err, VedicError::DegenerateGeometry(_)));
}

#[test]
fn moon_events_within_day() {
    let eph = AnalyticEphemeris::new();
    let loc = GeoLocation::new(19.076, 72.8777, 0.0).unwrap();
    let midnight = calendar_to_jd(2024, 5, 5.0);
    let ev = compute_moon_events(&eph, &loc, midnight).unwrap();
    let start = midnight - loc.longitude_deg / 360.0;
    for jd in [ev.moonrise_jd, ev.moonset_jd] {
        assert!(jd > start - 1.0 && jd < start + 2.0);
    }
}

#[test]
fn high_latitude_moon_falls_back_to_estimates() {
    let eph = AnalyticEphemeris::new();
    let loc = GeoLocation::new(75.0, 20.0, 0.0).unwrap();
    let start = calendar_to_jd(2024, 1, 1.0);
    let mut approximate = 0;
    for day in 0..60 {
        let ev = compute_moon_events(&eph, &loc, start + f64::from(day)).unwrap();
        assert!(ev.moonrise_jd.is_finite() && ev.moonset_jd.is_finite(), "day {day}");
        if ev.approximate() {
            approximate += 1;
        }
    }
    // The Moon stays up or down for days at a time this far north.
    assert!(approximate > 0);
    assert!(approximate < 60);
}

#[test]
fn tropical_moon_events_are_mostly_exact() {
    let eph = AnalyticEphemeris::new();
    let loc = GeoLocation::new(23.1765, 75.7885, 0.0).unwrap();
    let start = calendar_to_jd(2024, 1, 1.0);
    let approximate = (0..60)
        .filter(|&day| {
            compute_moon_events(&eph, &loc, start + f64::from(day))
                .unwrap()
                .approximate()
        })
        .count();
    assert!(approximate < 10, "{approximate} of 60 days approximate");
}
