//! Derived Vedic calculations built on the kaal ephemeris.
//!
//! This crate provides:
//! - Ayanamsha computation for ten sidereal reference systems, with a cache
//! - Sunrise/sunset, twilight, and moonrise/moonset
//! - Table-driven classifications: tithi, karana, yoga, nakshatra, rashi,
//!   vaar, masa, samvatsara, moon phase, tarabala, directions
//! - Daily time windows (Rahu Kaal and friends), aspects, Vimshottari dasha

pub mod aspects;
pub mod ayanamsha;
pub mod ayanamsha_cache;
pub mod dasha;
pub mod direction;
pub mod error;
pub mod graha;
pub mod karana;
pub mod lunar_nodes;
pub mod masa;
pub mod moon_phase;
pub mod nakshatra;
pub mod rashi;
pub mod riseset;
pub mod riseset_types;
pub mod samvatsara;
pub mod tarabala;
pub mod time_windows;
pub mod tithi;
pub mod traditional;
pub mod util;
pub mod vaar;
pub mod yoga;

pub use aspects::{
    Aspect, AspectKind, Combination, aspect_between, detect_combinations, find_aspects,
    separation_deg,
};
pub use ayanamsha::{
    AyanamshaComparison, AyanamshaInfo, AyanamshaSystem, ayanamsha_deg, compare_all,
    compare_all_map, historical_values, sidereal_to_tropical, system_info, tropical_to_sidereal,
};
pub use ayanamsha_cache::{AyanamshaCache, CacheStats, DEFAULT_CACHE_CAPACITY};
pub use dasha::{DAYS_PER_YEAR, DashaPeriod, current_mahadasha, vimshottari_mahadashas};
pub use direction::{Direction, PanchakaInfo, PanchakaKind, ShoolInfo, panchaka, shool_nivas};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha};
pub use karana::{KARANA_SEGMENT_DEG, Karana, KaranaPosition, karana_from_elongation};
pub use lunar_nodes::{LunarNode, NodeMode, lunar_node_deg, mean_rahu_deg, true_rahu_deg};
pub use masa::{ALL_MASAS, Ayana, Masa, ayana_from_longitude, masa_from_rashi_index};
pub use moon_phase::{MoonPhase, illumination_percent, is_waxing, moon_phase_from_elongation};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, nakshatra_from_longitude,
    nakshatra_from_tropical,
};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude, rashi_from_tropical};
pub use riseset::{
    approximate_local_noon_jd, compute_moon_events, compute_rise_set, compute_sun_events,
    moon_altitude_deg,
};
pub use riseset_types::{GeoLocation, MoonEvents, RiseSetConfig, RiseSetResult, SunEvent, SunEvents};
pub use samvatsara::{Samvatsara, samvatsara_from_year};
pub use tarabala::{ChandrabalaInfo, Tara, TarabalaInfo, chandrabala, tarabala};
pub use time_windows::{DailyWindows, TimeWindow, WindowKind, daily_windows};
pub use tithi::{Paksha, TITHI_SEGMENT_DEG, Tithi, TithiPosition, tithi_from_elongation};
pub use traditional::{TraditionalYears, season_from_sun_longitude, traditional_years};
pub use util::{normalize_360, normalize_pm180};
pub use vaar::{ALL_VAARS, Vaar, vaar_for_local_date, vaar_from_jd};
pub use yoga::{ALL_YOGAS, YOGA_SEGMENT_DEG, Yoga, YogaPosition, yoga_from_sum};
