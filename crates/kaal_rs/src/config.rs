//! YAML configuration for the facade.
//!
//! Every field has a default, so an empty file is a valid configuration.
//!
//! ```yaml
//! ayanamsha:
//!   system: lahiri
//! location:
//!   latitude_deg: 28.6139
//!   longitude_deg: 77.2090
//! muhurta:
//!   max_results: 10
//! festival:
//!   mode: approximate
//! ```

use std::path::Path;

use kaal_festival::{FestivalConfig, IST_OFFSET_MINUTES, ResolutionMode};
use kaal_muhurta::{
    DEFAULT_MAX_RESULTS, DEFAULT_MAX_SWEEP_DAYS, DEFAULT_STEP_MINUTES, FactorWeights,
    MuhurtaConfig,
};
use kaal_panchang::{DEFAULT_SNAPSHOT_CAPACITY, PanchangConfig};
use kaal_vedic_base::{AyanamshaSystem, GeoLocation, NodeMode, RiseSetConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::KaalError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AyanamshaSection {
    pub system: AyanamshaSystem,
}

impl Default for AyanamshaSection {
    fn default() -> Self {
        Self {
            system: AyanamshaSystem::Lahiri,
        }
    }
}

/// Observer coordinates as written in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub elevation_m: f64,
}

impl Default for LocationConfig {
    /// Ujjain.
    fn default() -> Self {
        Self {
            latitude_deg: 23.1765,
            longitude_deg: 75.7885,
            elevation_m: 0.0,
        }
    }
}

impl LocationConfig {
    pub fn to_location(&self) -> Result<GeoLocation, KaalError> {
        Ok(GeoLocation::new(
            self.latitude_deg,
            self.longitude_deg,
            self.elevation_m,
        )?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MuhurtaSection {
    pub max_results: usize,
    pub step_minutes: u32,
    pub max_days: u32,
    /// Default factor weights for new requests; must sum to 1.0.
    pub weights: FactorWeights,
}

impl Default for MuhurtaSection {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            step_minutes: DEFAULT_STEP_MINUTES,
            max_days: DEFAULT_MAX_SWEEP_DAYS,
            weights: FactorWeights::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FestivalSection {
    pub mode: ResolutionMode,
    /// Location whose sunrise decides the prevailing tithi.
    pub reference: LocationConfig,
    pub utc_offset_minutes: i32,
}

impl Default for FestivalSection {
    fn default() -> Self {
        Self {
            mode: ResolutionMode::default(),
            reference: LocationConfig::default(),
            utc_offset_minutes: IST_OFFSET_MINUTES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSection {
    /// Snapshot cache entries; the ayanamsha cache holds four times as many.
    pub capacity: usize,
    pub node_mode: NodeMode,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_SNAPSHOT_CAPACITY,
            node_mode: NodeMode::Mean,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KaalConfig {
    pub ayanamsha: AyanamshaSection,
    pub location: LocationConfig,
    pub rise_set: RiseSetConfig,
    pub muhurta: MuhurtaSection,
    pub festival: FestivalSection,
    pub cache: CacheSection,
}

impl KaalConfig {
    /// Read and validate a YAML file. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self, KaalError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| KaalError::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "loading config");
        Self::from_yaml_str(&text)
    }

    /// Parse and validate YAML text. Empty or comment-only text yields
    /// defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, KaalError> {
        let value: serde_yaml::Value = serde_yaml::from_str(text)?;
        let config = if value.is_null() {
            Self::default()
        } else {
            serde_yaml::from_value(value)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, KaalError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), KaalError> {
        let invalid = |msg: String| Err(KaalError::Config(msg));

        if let Err(e) = self.location.to_location() {
            return invalid(format!("location: {e}"));
        }
        if let Err(e) = self.festival.reference.to_location() {
            return invalid(format!("festival.reference: {e}"));
        }
        if !self.rise_set.refraction_minutes.is_finite() || self.rise_set.refraction_minutes < 0.0
        {
            return invalid(format!(
                "rise_set.refraction_minutes {} must be finite and non-negative",
                self.rise_set.refraction_minutes
            ));
        }
        if self.cache.capacity == 0 {
            return invalid("cache.capacity must be positive".into());
        }
        if let Err(e) = self.muhurta_config().validate() {
            return invalid(format!("muhurta: {e}"));
        }
        if let Err(e) = self.muhurta.weights.validate() {
            return invalid(format!("muhurta.weights: {e}"));
        }
        if let Err(e) = self.festival_config().validate() {
            return invalid(format!("festival: {e}"));
        }
        Ok(())
    }

    pub fn panchang_config(&self) -> PanchangConfig {
        PanchangConfig {
            rise_set: self.rise_set,
            cache_capacity: self.cache.capacity,
            node_mode: self.cache.node_mode,
        }
    }

    pub fn muhurta_config(&self) -> MuhurtaConfig {
        MuhurtaConfig {
            max_results: self.muhurta.max_results,
            step_minutes: self.muhurta.step_minutes,
            max_days: self.muhurta.max_days,
            ayanamsha_system: self.ayanamsha.system,
        }
    }

    pub fn festival_config(&self) -> FestivalConfig {
        FestivalConfig {
            mode: self.festival.mode,
            latitude_deg: self.festival.reference.latitude_deg,
            longitude_deg: self.festival.reference.longitude_deg,
            elevation_m: self.festival.reference.elevation_m,
            utc_offset_minutes: self.festival.utc_offset_minutes,
            ayanamsha_system: self.ayanamsha.system,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_gives_defaults() {
        assert_eq!(KaalConfig::from_yaml_str("").unwrap(), KaalConfig::default());
        assert_eq!(
            KaalConfig::from_yaml_str("# nothing here\n").unwrap(),
            KaalConfig::default()
        );
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let cfg = KaalConfig::from_yaml_str(
            "ayanamsha:\n  system: raman\nfestival:\n  mode: approximate\nmuhurta:\n  max_results: 5\n",
        )
        .unwrap();
        assert_eq!(cfg.ayanamsha.system, AyanamshaSystem::Raman);
        assert_eq!(cfg.festival.mode, ResolutionMode::Approximate);
        assert_eq!(cfg.festival.utc_offset_minutes, 330);
        assert_eq!(cfg.muhurta.max_results, 5);
        assert_eq!(cfg.muhurta.step_minutes, DEFAULT_STEP_MINUTES);
        assert_eq!(cfg.muhurta_config().ayanamsha_system, AyanamshaSystem::Raman);
        assert_eq!(cfg.festival_config().ayanamsha_system, AyanamshaSystem::Raman);
    }

    #[test]
    fn validation_rejects_bad_values() {
        for text in [
            "location:\n  latitude_deg: 95.0\n",
            "cache:\n  capacity: 0\n",
            "muhurta:\n  weights:\n    tithi: 0.5\n",
            "muhurta:\n  step_minutes: 0\n",
            "rise_set:\n  refraction_minutes: -1.0\n",
            "festival:\n  utc_offset_minutes: 2000\n",
        ] {
            assert!(
                matches!(KaalConfig::from_yaml_str(text), Err(KaalError::Config(_))),
                "{text}"
            );
        }
    }

    #[test]
    fn malformed_yaml_is_config_error() {
        assert!(matches!(
            KaalConfig::from_yaml_str("ayanamsha: [unclosed"),
            Err(KaalError::Config(_))
        ));
        assert!(matches!(
            KaalConfig::from_yaml_str("ayanamsha:\n  system: babylonian\n"),
            Err(KaalError::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_error() {
        let err = KaalConfig::load(Path::new("/nonexistent/kaal.yaml")).unwrap_err();
        assert!(matches!(err, KaalError::Config(_)));
    }

    #[test]
    fn yaml_round_trip() {
        let cfg = KaalConfig::default();
        let text = cfg.to_yaml_string().unwrap();
        assert_eq!(KaalConfig::from_yaml_str(&text).unwrap(), cfg);
    }
}
