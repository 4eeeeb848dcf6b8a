//! Convenience facade over the kaal panchang, muhurta and festival engines.
//!
//! A [`Kaal`] owns one [`PanchangCalculator`] (and its caches) plus a
//! [`KaalConfig`], and accepts `chrono` UTC timestamps directly.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use kaal_rs::*;
//!
//! let kaal = Kaal::new();
//! let ujjain = GeoLocation::new(23.1765, 75.7885, 0.0)?;
//! let at = "2025-02-26T00:00:00Z".parse()?;
//! let snap = kaal.compute_panchang(ujjain, at, None)?;
//! println!("{} {}", snap.tithi.paksha.name(), snap.tithi.name);
//!
//! for f in kaal.resolve_festivals(2025, &[Region::Bengal], &[])? {
//!     println!("{} {}", f.date, f.name());
//! }
//! ```

pub mod config;
pub mod error;
pub mod facade;

pub use config::{
    AyanamshaSection, CacheSection, FestivalSection, KaalConfig, LocationConfig, MuhurtaSection,
};
pub use error::KaalError;
pub use facade::{ExportFormat, Kaal, render_festivals};

// Re-export the types that appear in facade signatures so callers only need
// `use kaal_rs::*`.
pub use kaal_core::{AnalyticEphemeris, Body, EphemerisProvider, Observer};
pub use kaal_festival::{
    DayInfo, FestivalCategory, FestivalDate, FestivalRule, Observance, Region, ResolutionMode,
};
pub use kaal_muhurta::{
    CustomRules, FactorWeights, MuhurtaQuality, MuhurtaRequest, MuhurtaResult, MuhurtaType,
    TravelDirection,
};
pub use kaal_panchang::{
    GrahaPosition, LunarPhaseEvent, PanchangCalculator, PanchangRequest, PanchangSnapshot,
    SankrantiEvent,
};
pub use kaal_time::Instant;
pub use kaal_vedic_base::{
    AyanamshaComparison, AyanamshaSystem, GeoLocation, Masa, Nakshatra, NodeMode, Paksha, Rashi,
    RiseSetConfig,
};
