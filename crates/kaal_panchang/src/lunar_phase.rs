//! New moon (amavasya) and full moon (purnima) search.

use kaal_core::{Body, EphemerisProvider};
use kaal_time::Instant;
use serde::Serialize;

use crate::error::PanchangError;
use crate::positions::{body_lon_lat, elongation_at};
use crate::search_util::{find_zero_crossing, normalize_to_pm180};

/// Coarse step for bracketing; elongation moves about 12 deg per day.
const STEP_DAYS: f64 = 1.0;
/// More than one synodic month of steps.
const MAX_STEPS: usize = 35;
const MAX_BISECTIONS: usize = 60;
const TOL_DAYS: f64 = 1e-7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LunarPhase {
    NewMoon,
    FullMoon,
}

impl LunarPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "Amavasya",
            Self::FullMoon => "Purnima",
        }
    }

    const fn target_elongation_deg(self) -> f64 {
        match self {
            Self::NewMoon => 0.0,
            Self::FullMoon => 180.0,
        }
    }
}

/// A located syzygy with the geometry eclipse checks need.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LunarPhaseEvent {
    pub phase: LunarPhase,
    pub jd_tt: f64,
    pub instant: Instant,
    pub sun_longitude_deg: f64,
    pub moon_longitude_deg: f64,
    /// Ecliptic latitude of the Moon; small values mean an eclipse season.
    pub moon_latitude_deg: f64,
}

fn find_phase<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
    phase: LunarPhase,
    step: f64,
) -> Result<Option<LunarPhaseEvent>, PanchangError> {
    let target = phase.target_elongation_deg();
    let f = |t: f64| -> Result<f64, PanchangError> {
        Ok(normalize_to_pm180(elongation_at(provider, t)? - target))
    };
    let Some(jd) = find_zero_crossing(&f, jd_tt, step, MAX_STEPS, MAX_BISECTIONS, TOL_DAYS)? else {
        return Ok(None);
    };
    let (sun_longitude_deg, _) = body_lon_lat(provider, Body::Sun, jd)?;
    let (moon_longitude_deg, moon_latitude_deg) = body_lon_lat(provider, Body::Moon, jd)?;
    Ok(Some(LunarPhaseEvent {
        phase,
        jd_tt: jd,
        instant: Instant::from_jd_tt(jd)?,
        sun_longitude_deg,
        moon_longitude_deg,
        moon_latitude_deg,
    }))
}

pub fn next_amavasya<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
) -> Result<Option<LunarPhaseEvent>, PanchangError> {
    find_phase(provider, jd_tt, LunarPhase::NewMoon, STEP_DAYS)
}

pub fn prev_amavasya<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
) -> Result<Option<LunarPhaseEvent>, PanchangError> {
    find_phase(provider, jd_tt, LunarPhase::NewMoon, -STEP_DAYS)
}

pub fn next_purnima<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
) -> Result<Option<LunarPhaseEvent>, PanchangError> {
    find_phase(provider, jd_tt, LunarPhase::FullMoon, STEP_DAYS)
}

pub fn prev_purnima<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
) -> Result<Option<LunarPhaseEvent>, PanchangError> {
    find_phase(provider, jd_tt, LunarPhase::FullMoon, -STEP_DAYS)
}

fn search_phase<P: EphemerisProvider + ?Sized>(
    provider: &P,
    start_jd_tt: f64,
    end_jd_tt: f64,
    phase: LunarPhase,
) -> Result<Vec<LunarPhaseEvent>, PanchangError> {
    if !(end_jd_tt > start_jd_tt) {
        return Err(PanchangError::InvalidInput(format!(
            "search range {start_jd_tt}..{end_jd_tt} is empty"
        )));
    }
    let mut out = Vec::new();
    let mut cursor = start_jd_tt;
    while let Some(ev) = find_phase(provider, cursor, phase, STEP_DAYS)? {
        if ev.jd_tt > end_jd_tt {
            break;
        }
        cursor = ev.jd_tt + 1.0;
        out.push(ev);
    }
    Ok(out)
}

/// All new moons in `[start, end]` (JD TT), chronological.
pub fn search_amavasyas<P: EphemerisProvider + ?Sized>(
    provider: &P,
    start_jd_tt: f64,
    end_jd_tt: f64,
) -> Result<Vec<LunarPhaseEvent>, PanchangError> {
    search_phase(provider, start_jd_tt, end_jd_tt, LunarPhase::NewMoon)
}

/// All full moons in `[start, end]` (JD TT), chronological.
pub fn search_purnimas<P: EphemerisProvider + ?Sized>(
    provider: &P,
    start_jd_tt: f64,
    end_jd_tt: f64,
) -> Result<Vec<LunarPhaseEvent>, PanchangError> {
    search_phase(provider, start_jd_tt, end_jd_tt, LunarPhase::FullMoon)
}
