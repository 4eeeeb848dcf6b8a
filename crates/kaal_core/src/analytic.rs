//! Built-in analytic ephemeris provider.

use kaal_time::{delta_t_seconds_for_jd, gmst_deg, jd_to_centuries};
use tracing::debug;

use crate::error::EphemerisError;
use crate::frames::{ecliptic_to_equatorial, equatorial_to_ecliptic, true_obliquity_deg};
use crate::lunar::lunar_position;
use crate::nutation::nutation;
use crate::planets::{
    COVERAGE_MARGIN_DAYS, ELEMENTS_VALID_FROM_JD, ELEMENTS_VALID_TO_JD, planet_geocentric,
};
use crate::solar::solar_position;
use crate::{Body, EclipticPosition, EphemerisProvider, Observer};

/// Equatorial radius of the Earth in km (IAU 1976).
const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6_378.14;

/// Polar/equatorial axis ratio, b/a.
const EARTH_AXIS_RATIO: f64 = 0.996_647_19;

/// Kilometres per astronomical unit.
const KM_PER_AU: f64 = 149_597_870.7;

/// Coverage configuration for [`AnalyticEphemeris`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticConfig {
    /// First covered JD TT.
    pub coverage_start_jd: f64,
    /// Last covered JD TT.
    pub coverage_end_jd: f64,
}

impl Default for AnalyticConfig {
    fn default() -> Self {
        Self {
            coverage_start_jd: ELEMENTS_VALID_FROM_JD - COVERAGE_MARGIN_DAYS,
            coverage_end_jd: ELEMENTS_VALID_TO_JD + COVERAGE_MARGIN_DAYS,
        }
    }
}

impl AnalyticConfig {
    fn validate(&self) -> Result<(), EphemerisError> {
        if !self.coverage_start_jd.is_finite() || !self.coverage_end_jd.is_finite() {
            return Err(EphemerisError::InvalidConfig("coverage bounds must be finite"));
        }
        if self.coverage_start_jd >= self.coverage_end_jd {
            return Err(EphemerisError::InvalidConfig(
                "coverage_start_jd must precede coverage_end_jd",
            ));
        }
        Ok(())
    }
}

/// Closed-form ephemeris: solar theory, truncated lunar series, and
/// Keplerian planets. Stateless and freely shareable across threads.
#[derive(Debug, Clone)]
pub struct AnalyticEphemeris {
    config: AnalyticConfig,
}

impl AnalyticEphemeris {
    /// Provider covering 1800–2050 plus [`COVERAGE_MARGIN_DAYS`] on each side.
    pub fn new() -> Self {
        Self {
            config: AnalyticConfig::default(),
        }
    }

    /// Provider with explicit coverage bounds.
    pub fn with_config(config: AnalyticConfig) -> Result<Self, EphemerisError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalyticConfig {
        &self.config
    }

    fn geocentric(&self, t: f64, body: Body) -> Result<EclipticPosition, EphemerisError> {
        let pos = match body {
            Body::Sun => {
                let s = solar_position(t);
                EclipticPosition {
                    longitude_deg: s.longitude_deg,
                    latitude_deg: 0.0,
                    distance_au: s.distance_au,
                }
            }
            Body::Moon => {
                let m = lunar_position(t);
                EclipticPosition {
                    longitude_deg: (m.longitude_deg + nutation(t).longitude_deg).rem_euclid(360.0),
                    latitude_deg: m.latitude_deg,
                    distance_au: m.distance_km / KM_PER_AU,
                }
            }
            planet => {
                let (lon, lat, dist) =
                    planet_geocentric(planet, t).ok_or(EphemerisError::BodyUnavailable(planet))?;
                EclipticPosition {
                    longitude_deg: (lon + nutation(t).longitude_deg).rem_euclid(360.0),
                    latitude_deg: lat,
                    distance_au: dist,
                }
            }
        };
        Ok(pos)
    }
}

impl Default for AnalyticEphemeris {
    fn default() -> Self {
        Self::new()
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn apparent_position(
        &self,
        jd_tt: f64,
        body: Body,
        observer: &Observer,
    ) -> Result<EclipticPosition, EphemerisError> {
        if !jd_tt.is_finite() {
            return Err(EphemerisError::NonFinite);
        }
        if jd_tt < self.config.coverage_start_jd || jd_tt > self.config.coverage_end_jd {
            debug!(jd_tt, ?body, "epoch outside analytic coverage");
            return Err(EphemerisError::OutOfRange { body, jd_tt });
        }

        let t = jd_to_centuries(jd_tt);
        let geo = self.geocentric(t, body)?;

        match *observer {
            Observer::Topocentric {
                latitude_deg,
                longitude_deg,
                elevation_m,
            } if body == Body::Moon => Ok(topocentric_correction(
                geo,
                jd_tt,
                t,
                latitude_deg,
                longitude_deg,
                elevation_m,
            )),
            _ => Ok(geo),
        }
    }

    fn coverage(&self) -> (f64, f64) {
        (self.config.coverage_start_jd, self.config.coverage_end_jd)
    }
}

/// Shift a geocentric position to a surface observer (diurnal parallax).
///
/// Source: Meeus, *Astronomical Algorithms*, ch. 11 and eqs. 40.2–40.3.
fn topocentric_correction(
    geo: EclipticPosition,
    jd_tt: f64,
    t: f64,
    latitude_deg: f64,
    longitude_deg: f64,
    elevation_m: f64,
) -> EclipticPosition {
    let eps = true_obliquity_deg(t);
    let (ra, dec) = ecliptic_to_equatorial(geo.longitude_deg, geo.latitude_deg, eps);

    let phi = latitude_deg.to_radians();
    let u = (EARTH_AXIS_RATIO * phi.tan()).atan();
    let height_ratio = elevation_m / (EARTH_EQUATORIAL_RADIUS_KM * 1000.0);
    let rho_sin = EARTH_AXIS_RATIO * u.sin() + height_ratio * phi.sin();
    let rho_cos = u.cos() + height_ratio * phi.cos();

    let distance_km = geo.distance_au * KM_PER_AU;
    let sin_pi = EARTH_EQUATORIAL_RADIUS_KM / distance_km;

    let jd_ut = jd_tt - delta_t_seconds_for_jd(jd_tt) / 86_400.0;
    let hour_angle = (gmst_deg(jd_ut) + longitude_deg - ra).to_radians();
    let dec_r = dec.to_radians();

    let denom = dec_r.cos() - rho_cos * sin_pi * hour_angle.cos();
    let d_ra = (-rho_cos * sin_pi * hour_angle.sin()).atan2(denom);
    let dec_topo = ((dec_r.sin() - rho_sin * sin_pi) * d_ra.cos()).atan2(denom);

    let (lon, lat) = equatorial_to_ecliptic(ra + d_ra.to_degrees(), dec_topo.to_degrees(), eps);

    // Topocentric distance from the parallax-shifted geometry.
    let topo_dist_km = distance_km
        * ((1.0 - 2.0 * rho_cos * sin_pi * hour_angle.cos() * dec_r.cos()
            - 2.0 * rho_sin * sin_pi * dec_r.sin()
            + sin_pi * sin_pi)
            .max(0.0))
        .sqrt();

    EclipticPosition {
        longitude_deg: lon,
        latitude_deg: lat,
        distance_au: topo_dist_km / KM_PER_AU,
    }
}
