//! Nakshatra (lunar mansion) classification.
//!
//! The ecliptic is divided into 27 equal nakshatras of 13 deg 20' each,
//! each with 4 padas of 3 deg 20'. Lords follow the Vimshottari order
//! (Ketu, Venus, Sun, Moon, Mars, Rahu, Jupiter, Saturn, Mercury), three
//! times round.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg};
use crate::error::VedicError;
use crate::graha::Graha;
use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// Mean lunar motion used for the approximate remaining-time estimate.
pub const MEAN_MOON_DEG_PER_DAY: f64 = 13.2;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

const LORD_CYCLE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Venus,
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Rahu,
    Graha::Jupiter,
    Graha::Saturn,
    Graha::Mercury,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (Ashwini=1 .. Revati=27).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Nakshatra for a 1-based number, `None` outside 1..=27.
    pub fn from_number(n: u8) -> Option<Self> {
        ALL_NAKSHATRAS.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Vimshottari ruling graha.
    pub const fn lord(self) -> Graha {
        LORD_CYCLE[(self as usize) % 9]
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

impl FromStr for Nakshatra {
    type Err = VedicError;

    /// Case-insensitive, ignores spaces and hyphens ("uttara-phalguni").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if let Ok(n) = key.parse::<u8>() {
            return Self::from_number(n)
                .ok_or_else(|| VedicError::InvalidInput(format!("nakshatra number {n}")));
        }
        ALL_NAKSHATRAS
            .iter()
            .copied()
            .find(|n| {
                let name: String = n
                    .name()
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .map(|c| c.to_ascii_lowercase())
                    .collect();
                name == key || (key == "moola" && *n == Nakshatra::Mula)
            })
            .ok_or_else(|| VedicError::InvalidInput(format!("unknown nakshatra: {s}")))
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Decimal degrees within the pada [0.0, 3.333...).
    pub degrees_in_pada: f64,
}

impl NakshatraInfo {
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fn progress(&self) -> f64 {
        self.degrees_in_nakshatra / NAKSHATRA_SPAN_27
    }

    /// Approximate hours until the Moon leaves this nakshatra, using the
    /// mean lunar motion. Only meaningful for the Moon.
    pub fn remaining_hours_mean_motion(&self) -> f64 {
        (NAKSHATRA_SPAN_27 - self.degrees_in_nakshatra) / MEAN_MOON_DEG_PER_DAY * 24.0
    }
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - f64::from(nak_idx) * NAKSHATRA_SPAN_27;
    let pada_idx = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3);
    let degrees_in_pada = degrees_in_nakshatra - f64::from(pada_idx) * PADA_SPAN;

    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[nak_idx as usize],
        nakshatra_index: nak_idx,
        pada: pada_idx + 1,
        degrees_in_nakshatra,
        degrees_in_pada,
    }
}

/// Convenience: nakshatra from tropical longitude and an ayanamsha system.
pub fn nakshatra_from_tropical(
    tropical_lon_deg: f64,
    system: AyanamshaSystem,
    jd_tt: f64,
) -> NakshatraInfo {
    nakshatra_from_longitude(tropical_lon_deg - ayanamsha_deg(system, jd_tt))
}
