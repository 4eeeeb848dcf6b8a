//! Golden checks of the analytic provider against known lunations.

use kaal_core::{AnalyticEphemeris, Body, EphemerisProvider, Observer};
use kaal_time::{Instant, UtcTime};

fn elongation(eph: &AnalyticEphemeris, utc: UtcTime) -> f64 {
    let i = Instant::from_utc(&utc).unwrap();
    let moon = eph
        .apparent_position(i.jd_tt(), Body::Moon, &Observer::Geocentric)
        .unwrap();
    let sun = eph
        .apparent_position(i.jd_tt(), Body::Sun, &Observer::Geocentric)
        .unwrap();
    (moon.longitude_deg - sun.longitude_deg).rem_euclid(360.0)
}

fn wrapped(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

#[test]
fn new_moon_2025_02_28() {
    let eph = AnalyticEphemeris::new();
    let e = elongation(&eph, UtcTime::new(2025, 2, 28, 0, 45, 0.0));
    assert!(wrapped(e).abs() < 0.5, "elongation at new moon = {e}");
}

#[test]
fn full_moon_2024_10_17() {
    let eph = AnalyticEphemeris::new();
    let e = elongation(&eph, UtcTime::new(2024, 10, 17, 11, 26, 0.0));
    assert!((e - 180.0).abs() < 0.5, "elongation at full moon = {e}");
}

#[test]
fn waning_elongation_two_days_before_new_moon() {
    let eph = AnalyticEphemeris::new();
    let e = elongation(&eph, UtcTime::midnight(2025, 2, 26));
    assert!((330.0..342.0).contains(&e), "elongation = {e}");
}

#[test]
fn june_solstice_2024() {
    // 2024-06-20 20:51 UTC
    let eph = AnalyticEphemeris::new();
    let i = Instant::from_utc(&UtcTime::new(2024, 6, 20, 20, 51, 0.0)).unwrap();
    let sun = eph
        .apparent_position(i.jd_tt(), Body::Sun, &Observer::Geocentric)
        .unwrap();
    assert!((sun.longitude_deg - 90.0).abs() < 0.02, "λ = {}", sun.longitude_deg);
}

#[test]
fn inner_planets_stay_near_the_sun() {
    let eph = AnalyticEphemeris::new();
    let i = Instant::from_utc(&UtcTime::midnight(2024, 5, 1)).unwrap();
    let sun = eph
        .apparent_position(i.jd_tt(), Body::Sun, &Observer::Geocentric)
        .unwrap();
    for (body, max_elong) in [(Body::Mercury, 28.5), (Body::Venus, 47.5)] {
        let p = eph
            .apparent_position(i.jd_tt(), body, &Observer::Geocentric)
            .unwrap();
        let d = wrapped(p.longitude_deg - sun.longitude_deg).abs();
        assert!(d < max_elong, "{body:?} elongation {d}");
    }
}

#[test]
fn shared_across_threads() {
    let eph = std::sync::Arc::new(AnalyticEphemeris::new());
    let handles: Vec<_> = (0..4)
        .map(|k| {
            let eph = eph.clone();
            std::thread::spawn(move || {
                eph.apparent_position(2_460_000.5 + k as f64, Body::Moon, &Observer::Geocentric)
                    .map(|p| p.longitude_deg)
            })
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap().is_ok());
    }
}
