//! Per-activity rule tables.
//!
//! Tithi numbers run 1..=30 with 15 = Purnima and 30 = Amavasya.

use std::fmt;
use std::str::FromStr;

use kaal_vedic_base::{Graha, Nakshatra, Vaar};
use serde::{Deserialize, Serialize};

use crate::error::MuhurtaError;
use crate::types::MuhurtaType;

/// Penalty applied inside the planetary factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Penalty {
    /// Jupiter conjunct Rahu.
    GuruChandal,
    /// Vishti karana in effect.
    Bhadra,
}

impl Penalty {
    pub const fn points(self) -> f64 {
        match self {
            Self::GuruChandal => 20.0,
            Self::Bhadra => 30.0,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::GuruChandal => "guru_chandal",
            Self::Bhadra => "bhadra",
        }
    }
}

/// Largest Jupiter-Rahu separation treated as a conjunction, in degrees.
pub const GURU_CHANDAL_ORB_DEG: f64 = 10.0;

/// Ganda-Moola nakshatras, penalized for every activity.
pub const GANDA_MOOLA: [Nakshatra; 6] = [
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::Mula,
    Nakshatra::Jyeshtha,
    Nakshatra::Revati,
    Nakshatra::Ashwini,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleSet {
    pub favorable_tithis: &'static [u8],
    pub avoid_tithis: &'static [u8],
    pub favorable_nakshatras: &'static [Nakshatra],
    pub avoid_nakshatras: &'static [Nakshatra],
    pub favorable_vaars: &'static [Vaar],
    pub avoid_vaars: &'static [Vaar],
    /// Gregorian months (1..=12) traditionally preferred; empty means any.
    pub favorable_months: &'static [u32],
    /// Grahas whose dignity feeds the planetary factor, with their weight.
    pub planetary: &'static [(Graha, f64)],
    pub penalties: &'static [Penalty],
}

const AVOID_TITHIS: &[u8] = &[1, 4, 6, 8, 9, 14, 15, 30];
const AVOID_NAKSHATRAS: &[Nakshatra] = &[
    Nakshatra::Bharani,
    Nakshatra::Ashlesha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
];
const AVOID_VAARS: &[Vaar] = &[Vaar::Mangalvaar, Vaar::Shanivaar];

pub const MARRIAGE_RULES: RuleSet = RuleSet {
    favorable_tithis: &[2, 3, 5, 7, 10, 11, 12, 13],
    avoid_tithis: AVOID_TITHIS,
    favorable_nakshatras: &[
        Nakshatra::Rohini,
        Nakshatra::Mrigashira,
        Nakshatra::Magha,
        Nakshatra::UttaraPhalguni,
        Nakshatra::Hasta,
        Nakshatra::Swati,
        Nakshatra::Anuradha,
        Nakshatra::UttaraAshadha,
        Nakshatra::UttaraBhadrapada,
    ],
    avoid_nakshatras: AVOID_NAKSHATRAS,
    favorable_vaars: &[
        Vaar::Ravivaar,
        Vaar::Somvaar,
        Vaar::Budhvaar,
        Vaar::Guruvaar,
        Vaar::Shukravaar,
    ],
    avoid_vaars: AVOID_VAARS,
    favorable_months: &[1, 2, 3, 4, 5, 10, 11, 12],
    planetary: &[],
    penalties: &[Penalty::GuruChandal, Penalty::Bhadra],
};

pub const BUSINESS_RULES: RuleSet = RuleSet {
    favorable_tithis: &[2, 3, 5, 7, 10, 11, 13],
    avoid_tithis: AVOID_TITHIS,
    favorable_nakshatras: &[
        Nakshatra::Ashwini,
        Nakshatra::Rohini,
        Nakshatra::Pushya,
        Nakshatra::Magha,
        Nakshatra::UttaraPhalguni,
        Nakshatra::Hasta,
        Nakshatra::Chitra,
        Nakshatra::Swati,
        Nakshatra::Anuradha,
        Nakshatra::UttaraAshadha,
        Nakshatra::Shravana,
        Nakshatra::Dhanishtha,
        Nakshatra::Shatabhisha,
    ],
    avoid_nakshatras: AVOID_NAKSHATRAS,
    favorable_vaars: &[Vaar::Ravivaar, Vaar::Somvaar, Vaar::Budhvaar, Vaar::Guruvaar],
    avoid_vaars: AVOID_VAARS,
    favorable_months: &[],
    planetary: &[
        (Graha::Mercury, 10.0),
        (Graha::Jupiter, 15.0),
        (Graha::Venus, 10.0),
        (Graha::Moon, 10.0),
    ],
    penalties: &[],
};

pub const TRAVEL_RULES: RuleSet = RuleSet {
    favorable_tithis: &[2, 3, 5, 6, 7, 10, 11, 12, 13],
    avoid_tithis: &[1, 4, 8, 9, 14, 15, 30],
    favorable_nakshatras: &[
        Nakshatra::Ashwini,
        Nakshatra::Rohini,
        Nakshatra::Mrigashira,
        Nakshatra::Punarvasu,
        Nakshatra::Pushya,
        Nakshatra::Hasta,
        Nakshatra::Chitra,
        Nakshatra::Swati,
        Nakshatra::Anuradha,
        Nakshatra::Shravana,
        Nakshatra::Dhanishtha,
        Nakshatra::Shatabhisha,
    ],
    avoid_nakshatras: AVOID_NAKSHATRAS,
    favorable_vaars: &[Vaar::Somvaar, Vaar::Budhvaar, Vaar::Guruvaar, Vaar::Shukravaar],
    avoid_vaars: AVOID_VAARS,
    favorable_months: &[],
    planetary: &[],
    penalties: &[],
};

pub const EDUCATION_RULES: RuleSet = RuleSet {
    favorable_tithis: &[2, 3, 5, 7, 10, 11, 12, 13],
    avoid_tithis: AVOID_TITHIS,
    favorable_nakshatras: &[
        Nakshatra::Ashwini,
        Nakshatra::Rohini,
        Nakshatra::Punarvasu,
        Nakshatra::Pushya,
        Nakshatra::Hasta,
        Nakshatra::Chitra,
        Nakshatra::Swati,
        Nakshatra::Anuradha,
        Nakshatra::UttaraAshadha,
        Nakshatra::Shravana,
        Nakshatra::Dhanishtha,
        Nakshatra::Revati,
    ],
    avoid_nakshatras: AVOID_NAKSHATRAS,
    favorable_vaars: &[Vaar::Somvaar, Vaar::Budhvaar, Vaar::Guruvaar, Vaar::Shukravaar],
    avoid_vaars: AVOID_VAARS,
    favorable_months: &[],
    planetary: &[(Graha::Mercury, 20.0), (Graha::Jupiter, 15.0)],
    penalties: &[],
};

pub const PROPERTY_RULES: RuleSet = RuleSet {
    favorable_tithis: &[2, 3, 5, 7, 10, 11, 12, 13],
    avoid_tithis: AVOID_TITHIS,
    favorable_nakshatras: &[
        Nakshatra::Rohini,
        Nakshatra::Mrigashira,
        Nakshatra::Pushya,
        Nakshatra::Magha,
        Nakshatra::UttaraPhalguni,
        Nakshatra::Hasta,
        Nakshatra::Chitra,
        Nakshatra::Swati,
        Nakshatra::Anuradha,
        Nakshatra::UttaraAshadha,
        Nakshatra::Shravana,
        Nakshatra::UttaraBhadrapada,
    ],
    avoid_nakshatras: AVOID_NAKSHATRAS,
    favorable_vaars: &[
        Vaar::Ravivaar,
        Vaar::Somvaar,
        Vaar::Budhvaar,
        Vaar::Guruvaar,
        Vaar::Shukravaar,
    ],
    avoid_vaars: AVOID_VAARS,
    favorable_months: &[],
    planetary: &[(Graha::Mars, 15.0), (Graha::Venus, 10.0), (Graha::Moon, 10.0)],
    penalties: &[],
};

pub const EMPTY_RULES: RuleSet = RuleSet {
    favorable_tithis: &[],
    avoid_tithis: &[],
    favorable_nakshatras: &[],
    avoid_nakshatras: &[],
    favorable_vaars: &[],
    avoid_vaars: &[],
    favorable_months: &[],
    planetary: &[],
    penalties: &[],
};

pub const fn rules_for(muhurta_type: MuhurtaType) -> &'static RuleSet {
    match muhurta_type {
        MuhurtaType::Marriage => &MARRIAGE_RULES,
        MuhurtaType::Business | MuhurtaType::General => &BUSINESS_RULES,
        MuhurtaType::Travel => &TRAVEL_RULES,
        MuhurtaType::Education => &EDUCATION_RULES,
        MuhurtaType::Property => &PROPERTY_RULES,
        MuhurtaType::Custom => &EMPTY_RULES,
    }
}

/// Direction of travel, each with two favorable weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelDirection {
    East,
    South,
    West,
    North,
}

impl TravelDirection {
    pub const fn name(self) -> &'static str {
        match self {
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
            Self::North => "north",
        }
    }

    pub const fn favorable_vaars(self) -> [Vaar; 2] {
        match self {
            Self::East => [Vaar::Ravivaar, Vaar::Somvaar],
            Self::South => [Vaar::Mangalvaar, Vaar::Budhvaar],
            Self::West => [Vaar::Guruvaar, Vaar::Shukravaar],
            Self::North => [Vaar::Shanivaar, Vaar::Ravivaar],
        }
    }
}

impl fmt::Display for TravelDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TravelDirection {
    type Err = MuhurtaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "east" => Ok(Self::East),
            "south" => Ok(Self::South),
            "west" => Ok(Self::West),
            "north" => Ok(Self::North),
            _ => Err(MuhurtaError::InvalidInput(format!("unknown direction '{s}'"))),
        }
    }
}
