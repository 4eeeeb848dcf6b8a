//! Festival rule and resolved-date types.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate};
use kaal_vedic_base::{Masa, Nakshatra, Paksha, Rashi};
use serde::{Deserialize, Serialize};

use crate::error::FestivalError;

// ---------------------------------------------------------------------------
// Regions and categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Matches every requested region.
    AllIndia,
    NorthIndia,
    SouthIndia,
    WestIndia,
    EastIndia,
    Maharashtra,
    Gujarat,
    Bengal,
    TamilNadu,
    Kerala,
    Karnataka,
    AndhraPradesh,
    Rajasthan,
    Punjab,
    Odisha,
    Assam,
}

pub const ALL_REGIONS: [Region; 16] = [
    Region::AllIndia,
    Region::NorthIndia,
    Region::SouthIndia,
    Region::WestIndia,
    Region::EastIndia,
    Region::Maharashtra,
    Region::Gujarat,
    Region::Bengal,
    Region::TamilNadu,
    Region::Kerala,
    Region::Karnataka,
    Region::AndhraPradesh,
    Region::Rajasthan,
    Region::Punjab,
    Region::Odisha,
    Region::Assam,
];

impl Region {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllIndia => "all_india",
            Self::NorthIndia => "north_india",
            Self::SouthIndia => "south_india",
            Self::WestIndia => "west_india",
            Self::EastIndia => "east_india",
            Self::Maharashtra => "maharashtra",
            Self::Gujarat => "gujarat",
            Self::Bengal => "bengal",
            Self::TamilNadu => "tamil_nadu",
            Self::Kerala => "kerala",
            Self::Karnataka => "karnataka",
            Self::AndhraPradesh => "andhra_pradesh",
            Self::Rajasthan => "rajasthan",
            Self::Punjab => "punjab",
            Self::Odisha => "odisha",
            Self::Assam => "assam",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = FestivalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        ALL_REGIONS
            .iter()
            .copied()
            .find(|r| r.as_str() == key)
            .ok_or_else(|| FestivalError::InvalidInput(format!("unknown region '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FestivalCategory {
    Major,
    Religious,
    Seasonal,
    Regional,
    Spiritual,
    Cultural,
    Astronomical,
}

pub const ALL_CATEGORIES: [FestivalCategory; 7] = [
    FestivalCategory::Major,
    FestivalCategory::Religious,
    FestivalCategory::Seasonal,
    FestivalCategory::Regional,
    FestivalCategory::Spiritual,
    FestivalCategory::Cultural,
    FestivalCategory::Astronomical,
];

impl FestivalCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Religious => "religious",
            Self::Seasonal => "seasonal",
            Self::Regional => "regional",
            Self::Spiritual => "spiritual",
            Self::Cultural => "cultural",
            Self::Astronomical => "astronomical",
        }
    }
}

impl fmt::Display for FestivalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FestivalCategory {
    type Err = FestivalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| FestivalError::InvalidInput(format!("unknown category '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// When in the day the observance falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Observance {
    FullDay,
    Sunrise,
    Noon,
    Sunset,
    Moonrise,
    Night,
    Midnight,
}

impl Observance {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullDay => "full_day",
            Self::Sunrise => "sunrise",
            Self::Noon => "noon",
            Self::Sunset => "sunset",
            Self::Moonrise => "moonrise",
            Self::Night => "night",
            Self::Midnight => "midnight",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EclipseKind {
    Solar,
    Lunar,
}

/// Resolution family of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FestivalKind {
    Lunar,
    Solar,
    Nakshatra,
    Computed,
}

/// How a rule binds to a date.
///
/// Lunar months are amanta: each month ends at a new moon and Krishna
/// paksha is its second half.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleKind {
    /// Tithi (1..=15) of a paksha in a lunar month, prevailing at sunrise.
    Lunar { masa: Masa, paksha: Paksha, tithi: u8 },
    /// Day of the Sun's sidereal ingress into a rashi, shifted by
    /// `day_offset` days.
    Sankranti { rashi: Rashi, day_offset: i8 },
    /// Day the Sun reaches a tropical longitude.
    Solstice { tropical_longitude_deg: f64 },
    /// Moon in a nakshatra at sunrise during a solar month.
    Nakshatra { nakshatra: Nakshatra, solar_month: Rashi },
    /// Eleventh tithi of both pakshas, every lunar month.
    Ekadashi,
    /// New or full moon close enough to a node.
    Eclipse { eclipse: EclipseKind },
}

impl RuleKind {
    pub const fn family(&self) -> FestivalKind {
        match self {
            Self::Lunar { .. } => FestivalKind::Lunar,
            Self::Sankranti { .. } | Self::Solstice { .. } => FestivalKind::Solar,
            Self::Nakshatra { .. } => FestivalKind::Nakshatra,
            Self::Ekadashi | Self::Eclipse { .. } => FestivalKind::Computed,
        }
    }
}

/// 1..=30 tithi number for a paksha-relative tithi (1..=15).
pub const fn tithi_number(paksha: Paksha, tithi: u8) -> u8 {
    match paksha {
        Paksha::Shukla => tithi,
        Paksha::Krishna => tithi + 15,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FestivalRule {
    pub name: &'static str,
    pub english_name: &'static str,
    pub rule: RuleKind,
    pub category: FestivalCategory,
    pub regions: &'static [Region],
    pub description: &'static str,
    pub alternative_names: &'static [&'static str],
    pub duration_days: u8,
    pub observance: Observance,
}

impl FestivalRule {
    pub const fn kind(&self) -> FestivalKind {
        self.rule.family()
    }

    /// Whether any requested region is covered. All-India rules always match.
    pub fn matches_regions(&self, regions: &[Region]) -> bool {
        self.regions.contains(&Region::AllIndia)
            || regions.iter().any(|r| self.regions.contains(r))
    }
}

// ---------------------------------------------------------------------------
// Resolved dates
// ---------------------------------------------------------------------------

/// A rule bound to a civil date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FestivalDate {
    pub rule: &'static FestivalRule,
    pub date: NaiveDate,
    pub year: i32,
    /// Derived details such as the paksha variant or the exact event time.
    pub info: BTreeMap<&'static str, String>,
}

impl FestivalDate {
    pub fn new(rule: &'static FestivalRule, date: NaiveDate, year: i32) -> Self {
        Self {
            rule,
            date,
            year,
            info: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.info.insert(key, value.into());
        self
    }

    pub fn name(&self) -> &'static str {
        self.rule.name
    }

    /// Last day of the observance.
    pub fn end_date(&self) -> NaiveDate {
        self.date + Duration::days(i64::from(self.rule.duration_days.max(1)) - 1)
    }
}
