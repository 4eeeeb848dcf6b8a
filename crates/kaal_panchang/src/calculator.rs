//! `PanchangCalculator`: the snapshot builder.
//!
//! The calculator owns its provider and two bounded caches (ayanamsha values
//! and finished snapshots). Both are `RwLock`-guarded so one calculator can
//! serve a parallel sweep.

use std::collections::HashMap;
use std::sync::Arc;

use kaal_core::{EphemerisProvider, Observer};
use kaal_time::{Instant, jd_to_calendar, local_mean_time, local_sidereal_time_hours};
use kaal_vedic_base::{
    ALL_GRAHAS, AyanamshaCache, AyanamshaSystem, DashaPeriod, GeoLocation, Graha, LunarNode,
    Nakshatra, NodeMode, RiseSetConfig, SunEvents, ayana_from_longitude, chandrabala,
    compute_moon_events, compute_sun_events, current_mahadasha, daily_windows,
    detect_combinations, find_aspects, illumination_percent, is_waxing, karana_from_elongation,
    lunar_node_deg, masa_from_rashi_index, moon_phase_from_elongation, nakshatra_from_longitude,
    normalize_360, panchaka, rashi_from_longitude, season_from_sun_longitude, shool_nivas,
    tarabala, tithi_from_elongation, traditional_years, vaar_for_local_date, yoga_from_sum,
};
use parking_lot::RwLock;
use tracing::debug;

use crate::error::PanchangError;
use crate::panchang::{karana_for_date, nakshatra_for_date, tithi_for_date, yoga_for_date};
use crate::positions::moon_sidereal_longitude_at;
use crate::snapshot::{
    ElementTransitions, GrahaPosition, KaranaSnapshot, MoonPhaseInfo, MoonTimes,
    NakshatraSnapshot, PanchangSnapshot, SunTimes, TithiSnapshot, WindowSpan, YogaSnapshot,
    datetime_from_jd,
};

/// Default number of cached snapshots.
pub const DEFAULT_SNAPSHOT_CAPACITY: usize = 1024;

/// Mean synodic motion of the Moon relative to the Sun, degrees per day.
const MEAN_ELONGATION_RATE: f64 = 12.19;
/// Mean solar motion, degrees per day.
const MEAN_SUN_RATE: f64 = 0.9856;

/// Calculator tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangConfig {
    pub rise_set: RiseSetConfig,
    /// Snapshot cache size; the ayanamsha cache is four times larger.
    pub cache_capacity: usize,
    pub node_mode: NodeMode,
}

impl Default for PanchangConfig {
    fn default() -> Self {
        Self {
            rise_set: RiseSetConfig::default(),
            cache_capacity: DEFAULT_SNAPSHOT_CAPACITY,
            node_mode: NodeMode::Mean,
        }
    }
}

/// What to compute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangRequest {
    pub instant: Instant,
    pub location: GeoLocation,
    pub system: AyanamshaSystem,
    /// Reference nakshatra for tarabala.
    pub birth_nakshatra: Nakshatra,
    /// Also locate exact element end times (several root searches).
    pub include_transitions: bool,
}

impl PanchangRequest {
    /// Lahiri, Ashwini birth nakshatra, no transition search.
    pub fn new(instant: Instant, location: GeoLocation) -> Self {
        Self {
            instant,
            location,
            system: AyanamshaSystem::Lahiri,
            birth_nakshatra: Nakshatra::Ashwini,
            include_transitions: false,
        }
    }

    pub fn with_system(mut self, system: AyanamshaSystem) -> Self {
        self.system = system;
        self
    }

    pub fn with_birth_nakshatra(mut self, nakshatra: Nakshatra) -> Self {
        self.birth_nakshatra = nakshatra;
        self
    }

    pub fn with_transitions(mut self, include: bool) -> Self {
        self.include_transitions = include;
        self
    }

    fn key(&self) -> SnapshotKey {
        SnapshotKey {
            jd_bits: self.instant.jd_utc().to_bits(),
            lat_bits: self.location.latitude_deg.to_bits(),
            lon_bits: self.location.longitude_deg.to_bits(),
            elev_bits: self.location.elevation_m.to_bits(),
            system: self.system,
            birth: self.birth_nakshatra,
            transitions: self.include_transitions,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SnapshotKey {
    jd_bits: u64,
    lat_bits: u64,
    lon_bits: u64,
    elev_bits: u64,
    system: AyanamshaSystem,
    birth: Nakshatra,
    transitions: bool,
}

/// 0h UT Julian Date of the local civil date containing `jd_utc`, with the
/// local date taken from mean solar time at `longitude_deg`.
pub fn local_civil_midnight_jd(jd_utc: f64, longitude_deg: f64) -> f64 {
    (jd_utc + longitude_deg / 360.0 - 0.5).floor() + 0.5
}

pub struct PanchangCalculator<P> {
    provider: P,
    config: PanchangConfig,
    ayanamsha: AyanamshaCache,
    snapshots: RwLock<HashMap<SnapshotKey, Arc<PanchangSnapshot>>>,
}

impl<P: EphemerisProvider> PanchangCalculator<P> {
    pub fn new(provider: P) -> Self {
        let config = PanchangConfig::default();
        Self {
            provider,
            ayanamsha: AyanamshaCache::new(config.cache_capacity * 4),
            config,
            snapshots: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_config(provider: P, config: PanchangConfig) -> Result<Self, PanchangError> {
        if config.cache_capacity == 0 {
            return Err(PanchangError::InvalidInput(
                "snapshot cache capacity must be positive".into(),
            ));
        }
        Ok(Self {
            provider,
            ayanamsha: AyanamshaCache::new(config.cache_capacity * 4),
            config,
            snapshots: RwLock::new(HashMap::new()),
        })
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &PanchangConfig {
        &self.config
    }

    /// Memoized ayanamsha.
    pub fn ayanamsha_deg(&self, system: AyanamshaSystem, jd_tt: f64) -> f64 {
        self.ayanamsha.get(system, jd_tt)
    }

    pub fn ayanamsha_cache(&self) -> &AyanamshaCache {
        &self.ayanamsha
    }

    pub fn cached_snapshots(&self) -> usize {
        self.snapshots.read().len()
    }

    pub fn clear_cache(&self) {
        self.snapshots.write().clear();
        self.ayanamsha.clear();
    }

    /// Snapshot for the request, served from cache when an identical request
    /// was computed before.
    pub fn compute(&self, request: &PanchangRequest) -> Result<Arc<PanchangSnapshot>, PanchangError> {
        let key = request.key();
        if let Some(hit) = self.snapshots.read().get(&key) {
            return Ok(Arc::clone(hit));
        }

        debug!(jd_utc = request.instant.jd_utc(), "panchang snapshot cache miss");
        let snapshot = Arc::new(self.build(request)?);

        let mut map = self.snapshots.write();
        if map.len() >= self.config.cache_capacity {
            debug!(entries = map.len(), "panchang snapshot cache full, clearing");
            map.clear();
        }
        map.insert(key, Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// All nine grahas. Nodes use the configured node mode and zero latitude.
    pub fn graha_positions(
        &self,
        instant: &Instant,
        observer: &Observer,
        system: AyanamshaSystem,
    ) -> Result<Vec<GrahaPosition>, PanchangError> {
        let jd_tt = instant.jd_tt();
        let aya = self.ayanamsha.get(system, jd_tt);
        let t = instant.centuries_tt();

        ALL_GRAHAS
            .iter()
            .map(|&graha| {
                let (tropical, latitude) = match graha.body() {
                    Some(body) => {
                        let p = self.provider.apparent_position(jd_tt, body, observer)?;
                        (p.longitude_deg, p.latitude_deg)
                    }
                    None => {
                        let node = if graha == Graha::Rahu {
                            LunarNode::Rahu
                        } else {
                            LunarNode::Ketu
                        };
                        (lunar_node_deg(node, t, self.config.node_mode), 0.0)
                    }
                };
                let sidereal = normalize_360(tropical - aya);
                let rashi = rashi_from_longitude(sidereal);
                let nak = nakshatra_from_longitude(sidereal);
                Ok(GrahaPosition {
                    graha,
                    tropical_longitude_deg: tropical,
                    sidereal_longitude_deg: sidereal,
                    latitude_deg: latitude,
                    rashi: rashi.rashi,
                    degrees_in_rashi: rashi.degrees_in_rashi,
                    nakshatra: nak.nakshatra,
                    pada: nak.pada,
                })
            })
            .collect()
    }

    /// Sunrise, sunset and twilight for the civil date at `jd_utc_midnight`.
    pub fn sun_events(
        &self,
        location: &GeoLocation,
        jd_utc_midnight: f64,
    ) -> Result<SunEvents, PanchangError> {
        Ok(compute_sun_events(
            &self.provider,
            location,
            jd_utc_midnight,
            &self.config.rise_set,
        )?)
    }

    /// Exact geocentric end times of the current tithi, nakshatra, yoga and
    /// karana.
    pub fn transitions(
        &self,
        instant: &Instant,
        system: AyanamshaSystem,
    ) -> Result<ElementTransitions, PanchangError> {
        let tithi = tithi_for_date(&self.provider, instant)?;
        let nakshatra = nakshatra_for_date(&self.provider, instant, system)?;
        let yoga = yoga_for_date(&self.provider, instant, system)?;
        let karana = karana_for_date(&self.provider, instant)?;
        Ok(ElementTransitions {
            tithi_end: tithi.end.to_datetime()?,
            nakshatra_end: nakshatra.end.to_datetime()?,
            yoga_end: yoga.end.to_datetime()?,
            karana_end: karana.end.to_datetime()?,
        })
    }

    /// Vimshottari mahadasha running at `at` for a birth at `birth`.
    pub fn mahadasha_at(
        &self,
        birth: &Instant,
        at: &Instant,
        system: AyanamshaSystem,
    ) -> Result<Option<DashaPeriod>, PanchangError> {
        let moon = moon_sidereal_longitude_at(&self.provider, birth.jd_tt(), system)?;
        Ok(current_mahadasha(birth.jd_utc(), moon, at.jd_utc()))
    }

    fn build(&self, req: &PanchangRequest) -> Result<PanchangSnapshot, PanchangError> {
        let jd_utc = req.instant.jd_utc();
        let jd_tt = req.instant.jd_tt();
        let loc = req.location;
        let aya = self.ayanamsha.get(req.system, jd_tt);

        let grahas = self.graha_positions(&req.instant, &loc.to_observer(), req.system)?;
        let sun = grahas[0];
        let moon = grahas[1];

        let elongation = normalize_360(moon.tropical_longitude_deg - sun.tropical_longitude_deg);
        let tithi_pos = tithi_from_elongation(elongation);
        let karana_pos = karana_from_elongation(elongation);
        let yoga_pos = yoga_from_sum(sun.sidereal_longitude_deg + moon.sidereal_longitude_deg);
        let nak = nakshatra_from_longitude(moon.sidereal_longitude_deg);

        let midnight = local_civil_midnight_jd(jd_utc, loc.longitude_deg);
        let sun_ev = self.sun_events(&loc, midnight)?;
        let moon_ev = compute_moon_events(&self.provider, &loc, midnight)?;

        let vaar = vaar_for_local_date(jd_utc, loc.longitude_deg);
        let windows = daily_windows(sun_ev.sunrise_jd, sun_ev.solar_noon_jd, vaar)
            .all()
            .into_iter()
            .map(WindowSpan::from_window)
            .collect::<Result<Vec<_>, _>>()?;

        // Sun's place when the elongation next returns to zero names the month.
        let days_to_new_moon = (360.0 - elongation) / MEAN_ELONGATION_RATE;
        let sun_at_new_moon = sun.sidereal_longitude_deg + days_to_new_moon * MEAN_SUN_RATE;
        let masa = masa_from_rashi_index(rashi_from_longitude(sun_at_new_moon).rashi_index);

        let moon_rashi = rashi_from_longitude(moon.sidereal_longitude_deg).rashi_index;
        let (year, month, _) = jd_to_calendar(midnight);

        let bodies: Vec<(Graha, f64)> = grahas
            .iter()
            .filter(|g| g.graha.body().is_some())
            .map(|g| (g.graha, g.sidereal_longitude_deg))
            .collect();
        let jupiter = grahas[4].sidereal_longitude_deg;
        let venus = grahas[5].sidereal_longitude_deg;

        let transitions = if req.include_transitions {
            Some(self.transitions(&req.instant, req.system)?)
        } else {
            None
        };

        Ok(PanchangSnapshot {
            timestamp: req.instant.to_datetime()?,
            jd_utc,
            jd_tt,
            location: loc,
            ayanamsha_system: req.system,
            ayanamsha_deg: aya,
            tithi: TithiSnapshot {
                tithi: tithi_pos.tithi,
                value: tithi_pos.value,
                number: tithi_pos.number(),
                paksha_position: tithi_pos.paksha_position(),
                paksha: tithi_pos.paksha,
                name: tithi_pos.full_name(),
                remaining_hours: tithi_pos.remaining_hours_mean(),
            },
            nakshatra: NakshatraSnapshot {
                nakshatra: nak.nakshatra,
                number: nak.nakshatra.number(),
                name: nak.nakshatra.name(),
                lord: nak.nakshatra.lord(),
                pada: nak.pada,
                remaining_hours: nak.remaining_hours_mean_motion(),
            },
            yoga: YogaSnapshot {
                yoga: yoga_pos.yoga,
                number: yoga_pos.yoga.number(),
                name: yoga_pos.yoga.name(),
            },
            karana: KaranaSnapshot {
                karana: karana_pos.karana,
                index: karana_pos.karana_index,
                name: karana_pos.karana.name(),
                movable: karana_pos.karana.is_movable(),
            },
            vaar,
            sun: SunTimes {
                sunrise: datetime_from_jd(sun_ev.sunrise_jd)?,
                sunset: datetime_from_jd(sun_ev.sunset_jd)?,
                solar_noon: datetime_from_jd(sun_ev.solar_noon_jd)?,
                day_length_hours: sun_ev.day_length_hours,
                civil_dawn: sun_ev.civil_dawn_jd.map(datetime_from_jd).transpose()?,
                civil_dusk: sun_ev.civil_dusk_jd.map(datetime_from_jd).transpose()?,
                sunrise_jd: sun_ev.sunrise_jd,
                solar_noon_jd: sun_ev.solar_noon_jd,
            },
            moon: MoonTimes {
                moonrise: datetime_from_jd(moon_ev.moonrise_jd)?,
                moonset: datetime_from_jd(moon_ev.moonset_jd)?,
                approximate: moon_ev.approximate(),
            },
            windows,
            moon_phase: {
                let phase = moon_phase_from_elongation(elongation);
                MoonPhaseInfo {
                    phase,
                    name: phase.name(),
                    illumination_percent: illumination_percent(elongation),
                    waxing: is_waxing(elongation),
                    elongation_deg: elongation,
                }
            },
            local_mean_time: local_mean_time(jd_utc, loc.longitude_deg).to_string(),
            local_sidereal_time_hours: local_sidereal_time_hours(jd_utc, loc.longitude_deg),
            season: season_from_sun_longitude(sun.tropical_longitude_deg),
            masa,
            ayana: ayana_from_longitude(sun.sidereal_longitude_deg),
            tarabala: tarabala(req.birth_nakshatra, nak.nakshatra),
            chandrabala: chandrabala(tithi_pos.tithi_index),
            shool: shool_nivas(vaar, moon_rashi),
            panchaka: panchaka(nak.nakshatra, vaar),
            traditional_years: traditional_years(year, month),
            aspects: find_aspects(&bodies),
            combinations: detect_combinations(moon.sidereal_longitude_deg, jupiter, venus),
            grahas,
            transitions,
        })
    }
}
