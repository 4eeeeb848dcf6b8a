//! Sunrise/sunset, civil twilight, and moonrise/moonset.
//!
//! Solar events use an iterative hour-angle solution: a first guess from
//! the noon declination, refined against the Sun's position at the guessed
//! instant until the correction falls below a millisecond-scale threshold.
//! The geometric event (Sun centre on the horizon) is then shifted by the
//! refraction and elevation-dip offsets from [`RiseSetConfig`].
//!
//! Lunar events use a discrete altitude scan, since the Moon's motion makes
//! a closed-form hour angle unreliable.

use std::f64::consts::{PI, TAU};

use kaal_core::{Body, EphemerisProvider, Observer, ecliptic_to_equatorial, true_obliquity_deg};
use kaal_time::{J2000_JD, SECONDS_PER_DAY, delta_t_seconds_for_jd, gmst_deg};
use tracing::debug;

use crate::error::VedicError;
use crate::riseset_types::{
    GeoLocation, MoonEvents, RiseSetConfig, RiseSetResult, SunEvent, SunEvents,
};
use crate::util::normalize_360;

/// Maximum iterations for the rise/set refinement loop.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Sidereal rotation rate in radians per solar day.
const SIDEREAL_RATE: f64 = TAU * 1.002_737_811_911_354_6;

/// Half-hour samples across one local day.
const MOON_SCAN_STEPS: usize = 48;
const MOON_SCAN_STEP_DAYS: f64 = 1.0 / 48.0;

/// Mean solar days per lunar day, for the transit estimate.
const LUNAR_DAY_RATIO: f64 = 1.0351;

/// Approximate local solar noon JD from 0h UT JD and longitude.
///
/// `JD_noon = JD_0h + 0.5 - longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

fn jd_utc_to_tt(jd_utc: f64) -> f64 {
    jd_utc + delta_t_seconds_for_jd(jd_utc) / SECONDS_PER_DAY
}

/// Apparent RA/Dec of a body in radians, from the provider's ecliptic position.
fn equatorial_rad<P: EphemerisProvider + ?Sized>(
    provider: &P,
    body: Body,
    observer: &Observer,
    jd_utc: f64,
) -> Result<(f64, f64), VedicError> {
    let jd_tt = jd_utc_to_tt(jd_utc);
    let pos = provider.apparent_position(jd_tt, body, observer)?;
    let eps = true_obliquity_deg((jd_tt - J2000_JD) / 36525.0);
    let (ra, dec) = ecliptic_to_equatorial(pos.longitude_deg, pos.latitude_deg, eps);
    Ok((ra.to_radians(), dec.to_radians()))
}

/// Hour angle in (-pi, pi] for a right ascension at `jd_utc`.
fn hour_angle_rad(jd_utc: f64, longitude_deg: f64, ra_rad: f64) -> f64 {
    let lst = (gmst_deg(jd_utc) + longitude_deg).to_radians();
    let ha = (lst - ra_rad).rem_euclid(TAU);
    if ha > PI { ha - TAU } else { ha }
}

/// Compute one geometric solar event.
///
/// `jd_utc_noon` is approximate local noon on the desired date; use
/// [`approximate_local_noon_jd`]. The returned time has no refraction or
/// dip correction applied.
pub fn compute_rise_set<P: EphemerisProvider + ?Sized>(
    provider: &P,
    location: &GeoLocation,
    event: SunEvent,
    jd_utc_noon: f64,
) -> Result<RiseSetResult, VedicError> {
    let phi = location.latitude_rad();
    let h0 = event.target_altitude_deg().to_radians();
    let observer = Observer::Geocentric;

    let (ra, dec) = equatorial_rad(provider, Body::Sun, &observer, jd_utc_noon)?;
    let cos_h0 = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if cos_h0 > 1.0 {
        return Ok(RiseSetResult::NeverRises);
    }
    if cos_h0 < -1.0 {
        return Ok(RiseSetResult::NeverSets);
    }

    // Transit: shift noon by the hour angle at noon
    let ha_noon = hour_angle_rad(jd_utc_noon, location.longitude_deg, ra);
    let jd_transit = jd_utc_noon - ha_noon / SIDEREAL_RATE;
    let h_days = cos_h0.acos() / SIDEREAL_RATE;
    let mut jd_event = if event.is_rising() {
        jd_transit - h_days
    } else {
        jd_transit + h_days
    };

    for _ in 0..MAX_ITERATIONS {
        let (ra_i, dec_i) = equatorial_rad(provider, Body::Sun, &observer, jd_event)?;
        let cos_h = (h0.sin() - phi.sin() * dec_i.sin()) / (phi.cos() * dec_i.cos());
        if cos_h > 1.0 {
            return Ok(RiseSetResult::NeverRises);
        }
        if cos_h < -1.0 {
            return Ok(RiseSetResult::NeverSets);
        }
        let h_target = cos_h.acos();
        let ha_target = if event.is_rising() { -h_target } else { h_target };
        let ha_actual = hour_angle_rad(jd_event, location.longitude_deg, ra_i);

        let mut dha = ha_target - ha_actual;
        if dha > PI {
            dha -= TAU;
        } else if dha < -PI {
            dha += TAU;
        }
        let correction = dha / SIDEREAL_RATE;
        jd_event += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    Ok(RiseSetResult::Event {
        jd_utc: jd_event,
        event,
    })
}

/// Sunrise, sunset, solar noon, day length, and civil twilight for the
/// civil date whose 0h UT is `jd_utc_midnight`.
///
/// Sunrise is moved earlier and sunset later by
/// [`RiseSetConfig::correction_minutes`]. Polar day or night yields
/// [`VedicError::DegenerateGeometry`].
pub fn compute_sun_events<P: EphemerisProvider + ?Sized>(
    provider: &P,
    location: &GeoLocation,
    jd_utc_midnight: f64,
    config: &RiseSetConfig,
) -> Result<SunEvents, VedicError> {
    let noon = approximate_local_noon_jd(jd_utc_midnight, location.longitude_deg);
    let shift_days = config.correction_minutes(location.elevation_m) / 1440.0;

    let rise = match compute_rise_set(provider, location, SunEvent::Sunrise, noon)? {
        RiseSetResult::Event { jd_utc, .. } => jd_utc - shift_days,
        RiseSetResult::NeverRises => {
            return Err(VedicError::DegenerateGeometry("sun never rises (polar night)"));
        }
        RiseSetResult::NeverSets => {
            return Err(VedicError::DegenerateGeometry("sun never sets (midnight sun)"));
        }
    };
    let set = match compute_rise_set(provider, location, SunEvent::Sunset, noon)? {
        RiseSetResult::Event { jd_utc, .. } => jd_utc + shift_days,
        RiseSetResult::NeverRises => {
            return Err(VedicError::DegenerateGeometry("sun never rises (polar night)"));
        }
        RiseSetResult::NeverSets => {
            return Err(VedicError::DegenerateGeometry("sun never sets (midnight sun)"));
        }
    };

    let civil_dawn_jd = compute_rise_set(provider, location, SunEvent::CivilDawn, noon)?.jd_utc();
    let civil_dusk_jd = compute_rise_set(provider, location, SunEvent::CivilDusk, noon)?.jd_utc();

    Ok(SunEvents {
        sunrise_jd: rise,
        sunset_jd: set,
        solar_noon_jd: 0.5 * (rise + set),
        day_length_hours: (set - rise) * 24.0,
        civil_dawn_jd,
        civil_dusk_jd,
    })
}

/// Topocentric altitude of the Moon's centre in degrees.
pub fn moon_altitude_deg<P: EphemerisProvider + ?Sized>(
    provider: &P,
    location: &GeoLocation,
    jd_utc: f64,
) -> Result<f64, VedicError> {
    let (ra, dec) = equatorial_rad(provider, Body::Moon, &location.to_observer(), jd_utc)?;
    let phi = location.latitude_rad();
    let ha = hour_angle_rad(jd_utc, location.longitude_deg, ra);
    let sin_alt = phi.sin() * dec.sin() + phi.cos() * dec.cos() * ha.cos();
    Ok(sin_alt.clamp(-1.0, 1.0).asin().to_degrees())
}

/// Moonrise and moonset for the local day starting at local mean midnight
/// of the civil date whose 0h UT is `jd_utc_midnight`.
///
/// Samples the altitude every half hour and interpolates linearly inside the
/// first bracketing interval of each sign change. Missing events fall back
/// to an elongation-based estimate and are flagged approximate.
pub fn compute_moon_events<P: EphemerisProvider + ?Sized>(
    provider: &P,
    location: &GeoLocation,
    jd_utc_midnight: f64,
) -> Result<MoonEvents, VedicError> {
    let start = jd_utc_midnight - location.longitude_deg / 360.0;
    let mut rise = None;
    let mut set = None;

    let mut prev_t = start;
    let mut prev_alt = moon_altitude_deg(provider, location, prev_t)?;
    for i in 1..=MOON_SCAN_STEPS {
        let t = start + i as f64 * MOON_SCAN_STEP_DAYS;
        let alt = moon_altitude_deg(provider, location, t)?;
        if prev_alt < 0.0 && alt >= 0.0 && rise.is_none() {
            rise = Some(interpolate_zero(prev_t, prev_alt, t, alt));
        } else if prev_alt >= 0.0 && alt < 0.0 && set.is_none() {
            set = Some(interpolate_zero(prev_t, prev_alt, t, alt));
        }
        if rise.is_some() && set.is_some() {
            break;
        }
        prev_t = t;
        prev_alt = alt;
    }

    if let (Some(moonrise_jd), Some(moonset_jd)) = (rise, set) {
        return Ok(MoonEvents {
            moonrise_jd,
            moonset_jd,
            moonrise_approximate: false,
            moonset_approximate: false,
        });
    }

    debug!(
        found_rise = rise.is_some(),
        found_set = set.is_some(),
        "moon scan incomplete, estimating from elongation"
    );
    let (est_rise, est_set) = estimate_moon_events(provider, location, jd_utc_midnight)?;
    Ok(MoonEvents {
        moonrise_jd: rise.unwrap_or(est_rise),
        moonset_jd: set.unwrap_or(est_set),
        moonrise_approximate: rise.is_none(),
        moonset_approximate: set.is_none(),
    })
}

fn interpolate_zero(t0: f64, a0: f64, t1: f64, a1: f64) -> f64 {
    let denom = a1 - a0;
    if denom.abs() < f64::EPSILON {
        return 0.5 * (t0 + t1);
    }
    t0 + (t1 - t0) * (-a0 / denom)
}

/// Transit ≈ local noon delayed by elongation/360 lunar days; rise and set
/// a quarter day either side.
fn estimate_moon_events<P: EphemerisProvider + ?Sized>(
    provider: &P,
    location: &GeoLocation,
    jd_utc_midnight: f64,
) -> Result<(f64, f64), VedicError> {
    let noon = approximate_local_noon_jd(jd_utc_midnight, location.longitude_deg);
    let jd_tt = jd_utc_to_tt(noon);
    let sun = provider.apparent_position(jd_tt, Body::Sun, &Observer::Geocentric)?;
    let moon = provider.apparent_position(jd_tt, Body::Moon, &Observer::Geocentric)?;
    let elongation = normalize_360(moon.longitude_deg - sun.longitude_deg);
    let transit = noon + elongation / 360.0 * LUNAR_DAY_RATIO;
    Ok((transit - 0.25, transit + 0.25))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaal_core::AnalyticEphemeris;

    fn ujjain() -> GeoLocation {
        GeoLocation::new(23.1765, 75.7885, 0.0).unwrap()
    }

    #[test]
    fn interpolation_midpoint() {
        assert!((interpolate_zero(0.0, -1.0, 1.0, 1.0) - 0.5).abs() < 1e-12);
        assert!((interpolate_zero(0.0, -1.0, 1.0, 3.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn sunrise_before_noon_before_sunset() {
        let eph = AnalyticEphemeris::new();
        let ev = compute_sun_events(&eph, &ujjain(), 2_460_732.5, &RiseSetConfig::default())
            .unwrap();
        assert!(ev.sunrise_jd < ev.solar_noon_jd && ev.solar_noon_jd < ev.sunset_jd);
        assert!(ev.day_length_hours > 11.0 && ev.day_length_hours < 12.5);
        let dawn = ev.civil_dawn_jd.unwrap();
        assert!(dawn < ev.sunrise_jd);
    }

    #[test]
    fn correction_widens_day() {
        let eph = AnalyticEphemeris::new();
        let none = RiseSetConfig {
            refraction_minutes: 0.0,
            elevation_dip: false,
        };
        let a = compute_sun_events(&eph, &ujjain(), 2_460_732.5, &none).unwrap();
        let b = compute_sun_events(&eph, &ujjain(), 2_460_732.5, &RiseSetConfig::default())
            .unwrap();
        let minutes = (a.sunrise_jd - b.sunrise_jd) * 1440.0;
        assert!((minutes - 2.3).abs() < 1e-6);
        assert!(b.sunset_jd > a.sunset_jd);
    }

    #[test]
    fn polar_night_is_degenerate() {
        let eph = AnalyticEphemeris::new();
        let tromso = GeoLocation::new(78.0, 15.0, 0.0).unwrap();
        // 2024-12-21
        let err = compute_sun_events(&eph, &tromso, 2_460_665.5, &RiseSetConfig::default());
        assert!(matches!(err, Err(VedicError::DegenerateGeometry(_))));
    }

    #[test]
    fn moon_events_are_within_a_day_window() {
        let eph = AnalyticEphemeris::new();
        let ev = compute_moon_events(&eph, &ujjain(), 2_460_732.5).unwrap();
        assert!((ev.moonrise_jd - 2_460_732.5).abs() < 1.5);
        assert!((ev.moonset_jd - 2_460_732.5).abs() < 1.5);
    }

    #[test]
    fn moon_altitude_is_bounded() {
        let eph = AnalyticEphemeris::new();
        for i in 0..24 {
            let alt = moon_altitude_deg(&eph, &ujjain(), 2_460_732.5 + f64::from(i) / 24.0)
                .unwrap();
            assert!((-90.0..=90.0).contains(&alt));
        }
    }
}
