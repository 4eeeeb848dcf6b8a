//! Request, result and weighting types for muhurta search.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use kaal_vedic_base::{GeoLocation, Nakshatra, Vaar};
use serde::{Deserialize, Serialize};

use crate::error::MuhurtaError;
use crate::rules::TravelDirection;

/// Longest sample duration accepted, one day.
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

/// Weight tolerance when validating a custom override.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Extra weight applied to the custom-rule factor, on top of the fixed eight.
pub const CUSTOM_RULE_WEIGHT: f64 = 0.10;

// ---------------------------------------------------------------------------
// Event type
// ---------------------------------------------------------------------------

/// Activity a muhurta is sought for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuhurtaType {
    Marriage,
    Business,
    Travel,
    Education,
    Property,
    /// Scored with the business tables.
    General,
    /// No built-in tables; only custom rules discriminate.
    Custom,
}

pub const ALL_MUHURTA_TYPES: [MuhurtaType; 7] = [
    MuhurtaType::Marriage,
    MuhurtaType::Business,
    MuhurtaType::Travel,
    MuhurtaType::Education,
    MuhurtaType::Property,
    MuhurtaType::General,
    MuhurtaType::Custom,
];

impl MuhurtaType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Marriage => "marriage",
            Self::Business => "business",
            Self::Travel => "travel",
            Self::Education => "education",
            Self::Property => "property",
            Self::General => "general",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for MuhurtaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuhurtaType {
    type Err = MuhurtaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ALL_MUHURTA_TYPES
            .iter()
            .copied()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| MuhurtaError::UnsupportedEventType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Quality tiers
// ---------------------------------------------------------------------------

/// Six-tier quality, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MuhurtaQuality {
    Avoid,
    Poor,
    Average,
    Good,
    VeryGood,
    Excellent,
}

impl MuhurtaQuality {
    /// Tier for a total score. Lower bounds are inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            Self::Excellent
        } else if score >= 75.0 {
            Self::VeryGood
        } else if score >= 65.0 {
            Self::Good
        } else if score >= 50.0 {
            Self::Average
        } else if score >= 35.0 {
            Self::Poor
        } else {
            Self::Avoid
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Avoid => "avoid",
            Self::Poor => "poor",
            Self::Average => "average",
            Self::Good => "good",
            Self::VeryGood => "very_good",
            Self::Excellent => "excellent",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Avoid => "Avoid",
            Self::Poor => "Poor",
            Self::Average => "Average",
            Self::Good => "Good",
            Self::VeryGood => "Very Good",
            Self::Excellent => "Excellent",
        }
    }

    /// Whether a sweep keeps results of this tier.
    pub fn is_acceptable(self) -> bool {
        self >= Self::Average
    }
}

impl fmt::Display for MuhurtaQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Weights of the eight fixed factors. Must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorWeights {
    pub tithi: f64,
    pub nakshatra: f64,
    pub yoga: f64,
    pub karana: f64,
    pub vara: f64,
    pub inauspicious_periods: f64,
    pub moon_phase: f64,
    pub planetary_strength: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            tithi: 0.15,
            nakshatra: 0.15,
            yoga: 0.10,
            karana: 0.10,
            vara: 0.10,
            inauspicious_periods: 0.15,
            moon_phase: 0.10,
            planetary_strength: 0.15,
        }
    }
}

impl FactorWeights {
    pub fn sum(&self) -> f64 {
        self.tithi
            + self.nakshatra
            + self.yoga
            + self.karana
            + self.vara
            + self.inauspicious_periods
            + self.moon_phase
            + self.planetary_strength
    }

    /// Reject negative or non-finite weights and sums away from 1.
    pub fn validate(&self) -> Result<(), MuhurtaError> {
        let all = [
            self.tithi,
            self.nakshatra,
            self.yoga,
            self.karana,
            self.vara,
            self.inauspicious_periods,
            self.moon_phase,
            self.planetary_strength,
        ];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(MuhurtaError::InvalidInput(
                "factor weights must be finite and non-negative".into(),
            ));
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(MuhurtaError::InvalidInput(format!(
                "factor weights sum to {sum}, expected 1.0"
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Custom rules
// ---------------------------------------------------------------------------

/// Caller-defined preferences scored as an extra factor.
///
/// Each non-empty category is one check: a favorable hit scores 100, an
/// avoid hit 0, anything else 50. The factor is the mean of the checks, or a
/// neutral 50 when no category is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomRules {
    /// Tithi numbers 1..=30.
    pub favorable_tithis: Vec<u8>,
    pub avoid_tithis: Vec<u8>,
    pub favorable_nakshatras: Vec<Nakshatra>,
    pub avoid_nakshatras: Vec<Nakshatra>,
    pub favorable_vaars: Vec<Vaar>,
    pub avoid_vaars: Vec<Vaar>,
    pub min_illumination_percent: Option<f64>,
}

impl CustomRules {
    pub fn is_empty(&self) -> bool {
        self.favorable_tithis.is_empty()
            && self.avoid_tithis.is_empty()
            && self.favorable_nakshatras.is_empty()
            && self.avoid_nakshatras.is_empty()
            && self.favorable_vaars.is_empty()
            && self.avoid_vaars.is_empty()
            && self.min_illumination_percent.is_none()
    }
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// A closed UTC interval the sweep must not sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExcludedPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ExcludedPeriod {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MuhurtaRequest {
    pub muhurta_type: MuhurtaType,
    /// Inclusive start of the sweep.
    pub start: DateTime<Utc>,
    /// Inclusive end of the sweep.
    pub end: DateTime<Utc>,
    pub location: GeoLocation,
    /// Length of the activity, used for the inauspicious-period overlap.
    pub duration_minutes: u32,
    pub weights: Option<FactorWeights>,
    pub custom_rules: Option<CustomRules>,
    pub excluded: Vec<ExcludedPeriod>,
    /// Travel only: adds a note when the weekday suits the direction.
    pub direction: Option<TravelDirection>,
}

impl MuhurtaRequest {
    /// One-hour activity with default weights and no exclusions.
    pub fn new(
        muhurta_type: MuhurtaType,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        location: GeoLocation,
    ) -> Self {
        Self {
            muhurta_type,
            start,
            end,
            location,
            duration_minutes: 60,
            weights: None,
            custom_rules: None,
            excluded: Vec::new(),
            direction: None,
        }
    }

    pub fn with_duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    pub fn with_weights(mut self, weights: FactorWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn with_custom_rules(mut self, rules: CustomRules) -> Self {
        self.custom_rules = Some(rules);
        self
    }

    pub fn exclude(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.excluded.push(ExcludedPeriod::new(start, end));
        self
    }

    pub fn with_direction(mut self, direction: TravelDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn is_excluded(&self, at: DateTime<Utc>) -> bool {
        self.excluded.iter().any(|p| p.contains(at))
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Annotation value attached to a factor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Note {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl From<bool> for Note {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<f64> for Note {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<u8> for Note {
    fn from(v: u8) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<&str> for Note {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Note {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// One factor's sub-score (0..=100), the weight it entered the total with,
/// and its annotations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorReport {
    pub score: f64,
    pub weight: f64,
    pub notes: BTreeMap<&'static str, Note>,
}

impl FactorReport {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            weight: 0.0,
            notes: BTreeMap::new(),
        }
    }

    pub fn note(mut self, key: &'static str, value: impl Into<Note>) -> Self {
        self.notes.insert(key, value.into());
        self
    }

    pub fn flag(&self, key: &str) -> bool {
        matches!(self.notes.get(key), Some(Note::Flag(true)))
    }

    pub fn weighted(&self) -> f64 {
        self.score * self.weight
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MuhurtaResult {
    pub datetime: DateTime<Utc>,
    pub quality: MuhurtaQuality,
    /// Weighted total, clamped to [0, 100].
    pub score: f64,
    pub factors: BTreeMap<&'static str, FactorReport>,
    pub recommendations: Vec<String>,
    pub warnings: Vec<String>,
    pub duration_minutes: u32,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let w = FactorWeights::default();
        assert!((w.sum() - 1.0).abs() < 1e-9);
        assert!(w.validate().is_ok());
    }

    #[test]
    fn unbalanced_weights_rejected() {
        let w = FactorWeights {
            tithi: 0.5,
            ..FactorWeights::default()
        };
        assert!(matches!(w.validate(), Err(MuhurtaError::InvalidInput(_))));
    }

    #[test]
    fn negative_weight_rejected() {
        let w = FactorWeights {
            tithi: -0.05,
            nakshatra: 0.35,
            ..FactorWeights::default()
        };
        assert!(w.validate().is_err());
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(MuhurtaQuality::from_score(100.0), MuhurtaQuality::Excellent);
        assert_eq!(MuhurtaQuality::from_score(85.0), MuhurtaQuality::Excellent);
        assert_eq!(MuhurtaQuality::from_score(84.99), MuhurtaQuality::VeryGood);
        assert_eq!(MuhurtaQuality::from_score(75.0), MuhurtaQuality::VeryGood);
        assert_eq!(MuhurtaQuality::from_score(65.0), MuhurtaQuality::Good);
        assert_eq!(MuhurtaQuality::from_score(50.0), MuhurtaQuality::Average);
        assert_eq!(MuhurtaQuality::from_score(49.99), MuhurtaQuality::Poor);
        assert_eq!(MuhurtaQuality::from_score(35.0), MuhurtaQuality::Poor);
        assert_eq!(MuhurtaQuality::from_score(34.99), MuhurtaQuality::Avoid);
        assert_eq!(MuhurtaQuality::from_score(0.0), MuhurtaQuality::Avoid);
    }

    #[test]
    fn tiers_are_monotonic() {
        let mut prev = MuhurtaQuality::Avoid;
        for i in 0..=1000 {
            let q = MuhurtaQuality::from_score(f64::from(i) / 10.0);
            assert!(q >= prev);
            prev = q;
        }
    }

    #[test]
    fn acceptable_cutoff_is_average() {
        assert!(MuhurtaQuality::Average.is_acceptable());
        assert!(!MuhurtaQuality::Poor.is_acceptable());
        assert!(!MuhurtaQuality::Avoid.is_acceptable());
    }

    #[test]
    fn parse_event_type() {
        assert_eq!("Marriage".parse::<MuhurtaType>().unwrap(), MuhurtaType::Marriage);
        assert_eq!(" travel ".parse::<MuhurtaType>().unwrap(), MuhurtaType::Travel);
        assert!(matches!(
            "coronation".parse::<MuhurtaType>(),
            Err(MuhurtaError::UnsupportedEventType(_))
        ));
    }

    #[test]
    fn exclusion_is_inclusive() {
        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let end = DateTime::from_timestamp(1_700_003_600, 0).unwrap();
        let p = ExcludedPeriod::new(start, end);
        assert!(p.contains(start));
        assert!(p.contains(end));
        assert!(!p.contains(end + chrono::Duration::seconds(1)));
    }

    #[test]
    fn quality_serializes_snake_case() {
        let s = serde_json::to_string(&MuhurtaQuality::VeryGood).unwrap();
        assert_eq!(s, "\"very_good\"");
    }
}
