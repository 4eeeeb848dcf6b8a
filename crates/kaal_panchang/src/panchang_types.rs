//! Element classifications bounded by their exact start and end instants.

use kaal_time::Instant;
use kaal_vedic_base::{Karana, Masa, Nakshatra, Paksha, Tithi, Yoga};
use serde::Serialize;

/// Masa (lunar month, amanta) with its bounding new moons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MasaInfo {
    pub masa: Masa,
    /// Intercalary month: no sankranti between its new moons.
    pub adhika: bool,
    /// Previous new moon.
    pub start: Instant,
    /// Next new moon.
    pub end: Instant,
}

/// Tithi with start/end times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiInfo {
    pub tithi: Tithi,
    /// 0-based tithi index (0..29).
    pub tithi_index: u8,
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    pub start: Instant,
    pub end: Instant,
}

/// Karana with start/end times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaInfo {
    pub karana: Karana,
    /// 0-based position within the synodic month (0..59).
    pub karana_index: u8,
    pub start: Instant,
    pub end: Instant,
}

/// Yoga with start/end times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaInfo {
    pub yoga: Yoga,
    /// 0-based yoga index (0..26).
    pub yoga_index: u8,
    pub start: Instant,
    pub end: Instant,
}

/// Moon's nakshatra with start/end times.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanchangNakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based nakshatra index (0 = Ashwini .. 26 = Revati).
    pub nakshatra_index: u8,
    /// Quarter within the nakshatra, 1-4.
    pub pada: u8,
    pub start: Instant,
    pub end: Instant,
}
