//! The panchang snapshot: every element for one (location, instant,
//! ayanamsha) request.
//!
//! All timestamps are chrono UTC and serialize as RFC 3339. The raw Julian
//! Dates stay alongside so downstream scoring can compare intervals without
//! reconverting.

use chrono::{DateTime, Utc};
use kaal_time::Instant;
use kaal_vedic_base::{
    Aspect, Ayana, AyanamshaSystem, ChandrabalaInfo, Combination, GeoLocation, Graha, Karana,
    Masa, MoonPhase, Nakshatra, Paksha, PanchakaInfo, Rashi, ShoolInfo, TarabalaInfo, TimeWindow,
    Tithi, TraditionalYears, Vaar, WindowKind, Yoga,
};
use serde::Serialize;

use crate::error::PanchangError;

/// UTC timestamp for a Julian Date.
pub(crate) fn datetime_from_jd(jd_utc: f64) -> Result<DateTime<Utc>, PanchangError> {
    Ok(Instant::from_jd_utc(jd_utc)?.to_datetime()?)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TithiSnapshot {
    pub tithi: Tithi,
    /// Continuous tithi value in [0, 30).
    pub value: f64,
    /// 1-based tithi number (1..=30).
    pub number: u8,
    /// 1-based continuous position within the paksha, in [1, 16).
    pub paksha_position: f64,
    pub paksha: Paksha,
    /// Display name with paksha, e.g. "Krishna Trayodashi".
    pub name: String,
    /// Mean-motion estimate of hours until the tithi ends.
    pub remaining_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraSnapshot {
    pub nakshatra: Nakshatra,
    /// 1-based (1..=27).
    pub number: u8,
    pub name: &'static str,
    pub lord: Graha,
    pub pada: u8,
    pub remaining_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaSnapshot {
    pub yoga: Yoga,
    /// 1-based (1..=27).
    pub number: u8,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaSnapshot {
    pub karana: Karana,
    /// 0-based position in the 60-step cycle.
    pub index: u8,
    pub name: &'static str,
    pub movable: bool,
}

/// One graha's place in both zodiacs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrahaPosition {
    pub graha: Graha,
    pub tropical_longitude_deg: f64,
    pub sidereal_longitude_deg: f64,
    pub latitude_deg: f64,
    pub rashi: Rashi,
    pub degrees_in_rashi: f64,
    pub nakshatra: Nakshatra,
    pub pada: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunTimes {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
    pub solar_noon: DateTime<Utc>,
    pub day_length_hours: f64,
    pub civil_dawn: Option<DateTime<Utc>>,
    pub civil_dusk: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub sunrise_jd: f64,
    #[serde(skip)]
    pub solar_noon_jd: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonTimes {
    pub moonrise: DateTime<Utc>,
    pub moonset: DateTime<Utc>,
    /// Either time is an estimate rather than a located crossing.
    pub approximate: bool,
}

/// A named daily window with both representations of its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowSpan {
    pub kind: WindowKind,
    pub name: &'static str,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub inauspicious: bool,
    #[serde(skip)]
    pub start_jd: f64,
    #[serde(skip)]
    pub end_jd: f64,
}

impl WindowSpan {
    pub(crate) fn from_window(w: TimeWindow) -> Result<Self, PanchangError> {
        Ok(Self {
            kind: w.kind,
            name: w.kind.name(),
            start: datetime_from_jd(w.start_jd)?,
            end: datetime_from_jd(w.end_jd)?,
            inauspicious: w.kind.is_inauspicious(),
            start_jd: w.start_jd,
            end_jd: w.end_jd,
        })
    }

    /// Whether `[start_jd, end_jd]` (UTC) intersects the window.
    pub fn overlaps(&self, start_jd: f64, end_jd: f64) -> bool {
        start_jd <= self.end_jd && end_jd >= self.start_jd
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonPhaseInfo {
    pub phase: MoonPhase,
    pub name: &'static str,
    pub illumination_percent: f64,
    pub waxing: bool,
    pub elongation_deg: f64,
}

/// Exact end instants of the current elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementTransitions {
    pub tithi_end: DateTime<Utc>,
    pub nakshatra_end: DateTime<Utc>,
    pub yoga_end: DateTime<Utc>,
    pub karana_end: DateTime<Utc>,
}

/// Immutable panchang for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangSnapshot {
    pub timestamp: DateTime<Utc>,
    pub jd_utc: f64,
    pub jd_tt: f64,
    pub location: GeoLocation,
    pub ayanamsha_system: AyanamshaSystem,
    pub ayanamsha_deg: f64,

    pub tithi: TithiSnapshot,
    pub nakshatra: NakshatraSnapshot,
    pub yoga: YogaSnapshot,
    pub karana: KaranaSnapshot,
    pub vaar: Vaar,

    pub grahas: Vec<GrahaPosition>,
    pub sun: SunTimes,
    pub moon: MoonTimes,
    pub windows: Vec<WindowSpan>,
    pub moon_phase: MoonPhaseInfo,

    pub local_mean_time: String,
    pub local_sidereal_time_hours: f64,
    pub season: &'static str,
    /// Amanta month estimated from the Sun's position at the coming new moon.
    pub masa: Masa,
    pub ayana: Ayana,

    pub tarabala: TarabalaInfo,
    pub chandrabala: ChandrabalaInfo,
    pub shool: ShoolInfo,
    pub panchaka: PanchakaInfo,
    pub traditional_years: TraditionalYears,

    pub aspects: Vec<Aspect>,
    pub combinations: Vec<Combination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitions: Option<ElementTransitions>,
}

impl PanchangSnapshot {
    pub fn graha(&self, graha: Graha) -> Option<&GrahaPosition> {
        self.grahas.iter().find(|g| g.graha == graha)
    }

    pub fn window(&self, kind: WindowKind) -> Option<&WindowSpan> {
        self.windows.iter().find(|w| w.kind == kind)
    }
}
