//! Types for sunrise/sunset, twilight and moonrise/moonset calculations.

use kaal_core::Observer;
use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Height above mean sea level in meters, at least -1000.
    pub elevation_m: f64,
}

impl GeoLocation {
    /// Create a validated location.
    pub fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64) -> Result<Self, VedicError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(VedicError::InvalidInput(format!(
                "latitude {latitude_deg} outside [-90, 90]"
            )));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(VedicError::InvalidInput(format!(
                "longitude {longitude_deg} outside [-180, 180]"
            )));
        }
        if !elevation_m.is_finite() || elevation_m < -1000.0 {
            return Err(VedicError::InvalidInput(format!(
                "elevation {elevation_m} below -1000 m"
            )));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
        })
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Topocentric observer for ephemeris queries.
    pub fn to_observer(&self) -> Observer {
        Observer::Topocentric {
            latitude_deg: self.latitude_deg,
            longitude_deg: self.longitude_deg,
            elevation_m: self.elevation_m,
        }
    }
}

/// Solar horizon events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SunEvent {
    /// Sun centre crosses the geometric horizon upward.
    Sunrise,
    /// Sun centre crosses the geometric horizon downward.
    Sunset,
    /// Sun centre at -6 deg, rising.
    CivilDawn,
    /// Sun centre at -6 deg, setting.
    CivilDusk,
}

impl SunEvent {
    /// Geometric altitude of the Sun centre at the event, degrees.
    pub fn target_altitude_deg(self) -> f64 {
        match self {
            Self::Sunrise | Self::Sunset => 0.0,
            Self::CivilDawn | Self::CivilDusk => -6.0,
        }
    }

    /// Whether this is a rising (morning) event.
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise | Self::CivilDawn)
    }
}

/// Corrections applied on top of the geometric sunrise/sunset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiseSetConfig {
    /// Fixed atmospheric refraction offset in minutes of time. Default 2.3
    /// (34 arcminutes at the horizon).
    pub refraction_minutes: f64,
    /// Apply the elevation dip offset `1.76 * sqrt(h) / 4` minutes.
    pub elevation_dip: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_minutes: 2.3,
            elevation_dip: true,
        }
    }
}

impl RiseSetConfig {
    /// Total time shift in minutes for an observer at `elevation_m`.
    ///
    /// Sunrise moves earlier and sunset later by this amount.
    pub fn correction_minutes(&self, elevation_m: f64) -> f64 {
        let dip = if self.elevation_dip && elevation_m > 0.0 {
            1.76 * elevation_m.sqrt() / 4.0
        } else {
            0.0
        };
        self.refraction_minutes + dip
    }
}

/// Result of a single solar rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given UTC Julian Date.
    Event { jd_utc: f64, event: SunEvent },
    /// Sun stays below the target altitude all day.
    NeverRises,
    /// Sun stays above the target altitude all day.
    NeverSets,
}

impl RiseSetResult {
    pub fn jd_utc(&self) -> Option<f64> {
        match self {
            Self::Event { jd_utc, .. } => Some(*jd_utc),
            _ => None,
        }
    }
}

/// Corrected solar day for one location and date. Times are UTC JDs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunEvents {
    pub sunrise_jd: f64,
    pub sunset_jd: f64,
    /// Midpoint of sunrise and sunset.
    pub solar_noon_jd: f64,
    pub day_length_hours: f64,
    pub civil_dawn_jd: Option<f64>,
    pub civil_dusk_jd: Option<f64>,
}

/// Moonrise/moonset for one local day. Times are UTC JDs.
///
/// When the altitude scan finds no crossing, the value is an estimate from
/// the Moon's elongation and the matching flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonEvents {
    pub moonrise_jd: f64,
    pub moonset_jd: f64,
    pub moonrise_approximate: bool,
    pub moonset_approximate: bool,
}

impl MoonEvents {
    /// True when either time is an estimate.
    pub fn approximate(&self) -> bool {
        self.moonrise_approximate || self.moonset_approximate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_coordinates() {
        assert!(GeoLocation::new(91.0, 0.0, 0.0).is_err());
        assert!(GeoLocation::new(0.0, -180.5, 0.0).is_err());
        assert!(GeoLocation::new(0.0, 0.0, -1500.0).is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0, 0.0).is_err());
        assert!(GeoLocation::new(23.1765, 75.7885, 491.0).is_ok());
    }

    #[test]
    fn observer_carries_coordinates() {
        let loc = GeoLocation::new(10.0, 20.0, 30.0).unwrap();
        assert_eq!(
            loc.to_observer(),
            Observer::Topocentric {
                latitude_deg: 10.0,
                longitude_deg: 20.0,
                elevation_m: 30.0
            }
        );
    }

    #[test]
    fn sea_level_correction_is_refraction_only() {
        let c = RiseSetConfig::default();
        assert!((c.correction_minutes(0.0) - 2.3).abs() < 1e-12);
        assert!((c.correction_minutes(-10.0) - 2.3).abs() < 1e-12);
    }

    #[test]
    fn elevation_dip_minutes() {
        let c = RiseSetConfig::default();
        // 1.76 * 10 / 4 = 4.4
        assert!((c.correction_minutes(100.0) - 6.7).abs() < 1e-12);
        let off = RiseSetConfig {
            elevation_dip: false,
            ..Default::default()
        };
        assert!((off.correction_minutes(100.0) - 2.3).abs() < 1e-12);
    }

    #[test]
    fn targets() {
        assert_eq!(SunEvent::Sunrise.target_altitude_deg(), 0.0);
        assert_eq!(SunEvent::CivilDusk.target_altitude_deg(), -6.0);
        assert!(SunEvent::CivilDawn.is_rising());
        assert!(!SunEvent::Sunset.is_rising());
    }
}
