//! Sankranti (sidereal ingress of the Sun) and tropical solar-longitude
//! crossings.

use kaal_core::{Body, EphemerisProvider};
use kaal_time::Instant;
use kaal_vedic_base::{ALL_RASHIS, AyanamshaSystem, Rashi, rashi_from_longitude};
use serde::Serialize;

use crate::error::PanchangError;
use crate::positions::{body_lon_lat, sun_sidereal_longitude_at};
use crate::search_util::{find_zero_crossing, normalize_to_pm180};

const MAX_BISECTIONS: usize = 60;
const TOL_DAYS: f64 = 1e-7;

/// Configuration for sankranti search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SankrantiConfig {
    pub ayanamsha_system: AyanamshaSystem,
    /// Bracketing step; the Sun moves about one degree per day.
    pub step_days: f64,
}

impl Default for SankrantiConfig {
    fn default() -> Self {
        Self {
            ayanamsha_system: AyanamshaSystem::Lahiri,
            step_days: 1.0,
        }
    }
}

impl SankrantiConfig {
    pub fn new(ayanamsha_system: AyanamshaSystem) -> Self {
        Self {
            ayanamsha_system,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SankrantiEvent {
    /// Rashi being entered.
    pub rashi: Rashi,
    pub rashi_index: u8,
    pub jd_tt: f64,
    pub instant: Instant,
    pub sun_sidereal_longitude_deg: f64,
}

fn steps_for(span_days: f64, step: f64) -> usize {
    (span_days / step.abs()).ceil() as usize + 1
}

fn find_ingress<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
    rashi_index: u8,
    config: &SankrantiConfig,
    step: f64,
    span_days: f64,
) -> Result<Option<SankrantiEvent>, PanchangError> {
    if !(config.step_days.is_finite() && config.step_days > 0.0) {
        return Err(PanchangError::InvalidInput(format!(
            "sankranti step {} must be positive",
            config.step_days
        )));
    }
    let target = f64::from(rashi_index) * 30.0;
    let system = config.ayanamsha_system;
    let f = |t: f64| -> Result<f64, PanchangError> {
        Ok(normalize_to_pm180(sun_sidereal_longitude_at(provider, t, system)? - target))
    };
    let steps = steps_for(span_days, step);
    let Some(jd) = find_zero_crossing(&f, jd_tt, step, steps, MAX_BISECTIONS, TOL_DAYS)? else {
        return Ok(None);
    };
    Ok(Some(SankrantiEvent {
        rashi: ALL_RASHIS[rashi_index as usize % 12],
        rashi_index: rashi_index % 12,
        jd_tt: jd,
        instant: Instant::from_jd_tt(jd)?,
        sun_sidereal_longitude_deg: sun_sidereal_longitude_at(provider, jd, system)?,
    }))
}

/// Next ingress into any rashi after `jd_tt`.
pub fn next_sankranti<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
    config: &SankrantiConfig,
) -> Result<Option<SankrantiEvent>, PanchangError> {
    let sid = sun_sidereal_longitude_at(provider, jd_tt, config.ayanamsha_system)?;
    let next = (rashi_from_longitude(sid).rashi_index + 1) % 12;
    find_ingress(provider, jd_tt, next, config, config.step_days, 40.0)
}

/// Most recent ingress into any rashi before `jd_tt`.
pub fn prev_sankranti<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
    config: &SankrantiConfig,
) -> Result<Option<SankrantiEvent>, PanchangError> {
    let sid = sun_sidereal_longitude_at(provider, jd_tt, config.ayanamsha_system)?;
    let current = rashi_from_longitude(sid).rashi_index;
    find_ingress(provider, jd_tt, current, config, -config.step_days, 40.0)
}

/// Next ingress into a specific rashi, searching up to one year ahead.
pub fn next_specific_sankranti<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
    rashi: Rashi,
    config: &SankrantiConfig,
) -> Result<Option<SankrantiEvent>, PanchangError> {
    find_ingress(provider, jd_tt, rashi.index(), config, config.step_days, 370.0)
}

/// Previous ingress into a specific rashi, searching up to one year back.
pub fn prev_specific_sankranti<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
    rashi: Rashi,
    config: &SankrantiConfig,
) -> Result<Option<SankrantiEvent>, PanchangError> {
    find_ingress(provider, jd_tt, rashi.index(), config, -config.step_days, 370.0)
}

/// All ingresses in `[start, end]` (JD TT), chronological.
pub fn search_sankrantis<P: EphemerisProvider + ?Sized>(
    provider: &P,
    start_jd_tt: f64,
    end_jd_tt: f64,
    config: &SankrantiConfig,
) -> Result<Vec<SankrantiEvent>, PanchangError> {
    if !(end_jd_tt > start_jd_tt) {
        return Err(PanchangError::InvalidInput(format!(
            "search range {start_jd_tt}..{end_jd_tt} is empty"
        )));
    }
    let mut out = Vec::new();
    let mut cursor = start_jd_tt;
    while let Some(ev) = next_sankranti(provider, cursor, config)? {
        if ev.jd_tt > end_jd_tt {
            break;
        }
        cursor = ev.jd_tt + 1.0;
        out.push(ev);
    }
    Ok(out)
}

/// Next instant the Sun's tropical longitude reaches `target_deg`
/// (270 for the December solstice, 90 for June).
pub fn next_solar_longitude<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
    target_deg: f64,
) -> Result<Option<Instant>, PanchangError> {
    let f = |t: f64| -> Result<f64, PanchangError> {
        let (lon, _) = body_lon_lat(provider, Body::Sun, t)?;
        Ok(normalize_to_pm180(lon - target_deg))
    };
    match find_zero_crossing(&f, jd_tt, 1.0, 370, MAX_BISECTIONS, TOL_DAYS)? {
        Some(jd) => Ok(Some(Instant::from_jd_tt(jd)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaal_core::AnalyticEphemeris;
    use kaal_time::calendar_to_jd;

    #[test]
    fn makara_sankranti_mid_january() {
        let eph = AnalyticEphemeris::new();
        let ev = next_specific_sankranti(
            &eph,
            calendar_to_jd(2025, 1, 1.0),
            Rashi::Makara,
            &SankrantiConfig::default(),
        )
        .unwrap()
        .unwrap();
        let utc = ev.instant.to_utc();
        assert_eq!((utc.year, utc.month), (2025, 1));
        assert!((13..=15).contains(&utc.day), "day {}", utc.day);
        assert!((ev.sun_sidereal_longitude_deg - 270.0).abs() < 1e-4);
    }

    #[test]
    fn twelve_per_year() {
        let eph = AnalyticEphemeris::new();
        let start = calendar_to_jd(2024, 1, 1.0);
        let v = search_sankrantis(&eph, start, start + 365.0, &SankrantiConfig::default()).unwrap();
        assert_eq!(v.len(), 12);
    }

    #[test]
    fn prev_precedes_next() {
        let eph = AnalyticEphemeris::new();
        let cfg = SankrantiConfig::default();
        let jd = calendar_to_jd(2024, 7, 1.0);
        let p = prev_sankranti(&eph, jd, &cfg).unwrap().unwrap();
        let n = next_sankranti(&eph, jd, &cfg).unwrap().unwrap();
        assert!(p.jd_tt < jd && jd < n.jd_tt);
        assert_eq!((p.rashi_index + 1) % 12, n.rashi_index);
    }

    #[test]
    fn december_solstice() {
        let eph = AnalyticEphemeris::new();
        let i = next_solar_longitude(&eph, calendar_to_jd(2024, 11, 1.0), 270.0)
            .unwrap()
            .unwrap();
        let utc = i.to_utc();
        assert_eq!((utc.month, utc.day), (12, 21));
    }
}
