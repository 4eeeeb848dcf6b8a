//! Panchang calculation over an ephemeris provider.
//!
//! This crate provides:
//! - [`PanchangCalculator`], the cached snapshot builder
//! - Exact start/end search for tithi, karana, yoga and nakshatra
//! - Amanta masa determination
//! - New/full moon and sankranti search

pub mod calculator;
pub mod error;
pub mod lunar_phase;
pub mod panchang;
pub mod panchang_types;
pub mod positions;
pub mod sankranti;
pub(crate) mod search_util;
pub mod snapshot;

pub use calculator::{
    DEFAULT_SNAPSHOT_CAPACITY, PanchangCalculator, PanchangConfig, PanchangRequest,
    local_civil_midnight_jd,
};
pub use error::PanchangError;
pub use lunar_phase::{
    LunarPhase, LunarPhaseEvent, next_amavasya, next_purnima, prev_amavasya, prev_purnima,
    search_amavasyas, search_purnimas,
};
pub use panchang::{
    karana_at, karana_for_date, masa_for_date, nakshatra_at, nakshatra_for_date, tithi_at,
    tithi_for_date, yoga_at, yoga_for_date,
};
pub use panchang_types::{KaranaInfo, MasaInfo, PanchangNakshatraInfo, TithiInfo, YogaInfo};
pub use positions::{
    body_lon_lat, elongation_at, moon_sidereal_longitude_at, sidereal_sum_at,
    sun_sidereal_longitude_at, sun_sidereal_rashi_index,
};
pub use sankranti::{
    SankrantiConfig, SankrantiEvent, next_sankranti, next_solar_longitude,
    next_specific_sankranti, prev_sankranti, prev_specific_sankranti, search_sankrantis,
};
pub use snapshot::{
    ElementTransitions, GrahaPosition, KaranaSnapshot, MoonPhaseInfo, MoonTimes,
    NakshatraSnapshot, PanchangSnapshot, SunTimes, TithiSnapshot, WindowSpan, YogaSnapshot,
};
