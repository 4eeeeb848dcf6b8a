//! Geocentric longitudes and the derived angles the searches track.
//!
//! Transition times are conventionally geocentric, so everything here uses
//! [`Observer::Geocentric`]. The snapshot builder queries topocentric
//! positions separately.

use kaal_core::{Body, EphemerisProvider, Observer};
use kaal_vedic_base::{AyanamshaSystem, ayanamsha_deg, normalize_360, rashi_from_longitude};

use crate::error::PanchangError;

/// Geocentric apparent (longitude, latitude) of `body` in degrees.
pub fn body_lon_lat<P: EphemerisProvider + ?Sized>(
    provider: &P,
    body: Body,
    jd_tt: f64,
) -> Result<(f64, f64), PanchangError> {
    let pos = provider.apparent_position(jd_tt, body, &Observer::Geocentric)?;
    Ok((pos.longitude_deg, pos.latitude_deg))
}

/// Moon-Sun elongation in [0, 360). Ayanamsha cancels in the difference.
pub fn elongation_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
) -> Result<f64, PanchangError> {
    let (moon, _) = body_lon_lat(provider, Body::Moon, jd_tt)?;
    let (sun, _) = body_lon_lat(provider, Body::Sun, jd_tt)?;
    Ok(normalize_360(moon - sun))
}

/// Sum of Moon and Sun sidereal longitudes in [0, 360).
///
/// Ayanamsha does not cancel in the sum.
pub fn sidereal_sum_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
    system: AyanamshaSystem,
) -> Result<f64, PanchangError> {
    let (moon, _) = body_lon_lat(provider, Body::Moon, jd_tt)?;
    let (sun, _) = body_lon_lat(provider, Body::Sun, jd_tt)?;
    let aya = ayanamsha_deg(system, jd_tt);
    Ok(normalize_360(moon + sun - 2.0 * aya))
}

pub fn moon_sidereal_longitude_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
    system: AyanamshaSystem,
) -> Result<f64, PanchangError> {
    let (moon, _) = body_lon_lat(provider, Body::Moon, jd_tt)?;
    Ok(normalize_360(moon - ayanamsha_deg(system, jd_tt)))
}

pub fn sun_sidereal_longitude_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
    system: AyanamshaSystem,
) -> Result<f64, PanchangError> {
    let (sun, _) = body_lon_lat(provider, Body::Sun, jd_tt)?;
    Ok(normalize_360(sun - ayanamsha_deg(system, jd_tt)))
}

/// Sun's sidereal rashi index (0 = Mesha).
pub fn sun_sidereal_rashi_index<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
    system: AyanamshaSystem,
) -> Result<u8, PanchangError> {
    let sid = sun_sidereal_longitude_at(provider, jd_tt, system)?;
    Ok(rashi_from_longitude(sid).rashi_index)
}
