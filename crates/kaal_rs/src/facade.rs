//! The `Kaal` facade: one owned calculator plus configuration, and the
//! handful of calls a front end needs.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use kaal_core::{AnalyticEphemeris, EphemerisProvider};
use kaal_festival::{
    DayInfo, FestivalCategory, FestivalDate, FestivalResolver, Region, to_csv, to_ical, to_json,
};
use kaal_muhurta::{MuhurtaEngine, MuhurtaRequest, MuhurtaResult, MuhurtaType};
use kaal_panchang::{
    GrahaPosition, LunarPhaseEvent, PanchangCalculator, PanchangRequest, PanchangSnapshot,
    SankrantiConfig, SankrantiEvent, next_amavasya, next_purnima, next_sankranti,
};
use kaal_time::Instant;
use kaal_vedic_base::{
    AyanamshaComparison, AyanamshaSystem, GeoLocation, compare_all, compare_all_map,
};
use serde::Serialize;
use tracing::debug;

use crate::config::KaalConfig;
use crate::error::KaalError;

/// Output format for [`Kaal::export_festivals`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Ical,
    Json,
    Csv,
}

impl ExportFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ical => "ical",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// Conventional file extension.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Ical => "ics",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = KaalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ical" | "ics" | "icalendar" => Ok(Self::Ical),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(KaalError::InvalidInput(format!(
                "unknown export format '{other}'"
            ))),
        }
    }
}

/// Engine handle. Cheap to query repeatedly: the calculator keeps its
/// snapshot and ayanamsha caches across calls.
pub struct Kaal<P = AnalyticEphemeris> {
    calculator: PanchangCalculator<P>,
    config: KaalConfig,
}

impl Kaal<AnalyticEphemeris> {
    /// Built-in analytic ephemeris with default configuration.
    pub fn new() -> Self {
        Self {
            calculator: PanchangCalculator::new(AnalyticEphemeris::new()),
            config: KaalConfig::default(),
        }
    }

    pub fn from_config(config: KaalConfig) -> Result<Self, KaalError> {
        Self::with_provider(AnalyticEphemeris::new(), config)
    }

    /// Load a YAML configuration file and build an engine from it.
    pub fn load(path: &Path) -> Result<Self, KaalError> {
        Self::from_config(KaalConfig::load(path)?)
    }
}

impl Default for Kaal<AnalyticEphemeris> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: EphemerisProvider> Kaal<P> {
    pub fn with_provider(provider: P, config: KaalConfig) -> Result<Self, KaalError> {
        config.validate()?;
        let calculator = PanchangCalculator::with_config(provider, config.panchang_config())?;
        Ok(Self { calculator, config })
    }

    pub fn config(&self) -> &KaalConfig {
        &self.config
    }

    pub fn calculator(&self) -> &PanchangCalculator<P> {
        &self.calculator
    }

    /// Configured default observer.
    pub fn default_location(&self) -> Result<GeoLocation, KaalError> {
        self.config.location.to_location()
    }

    fn system_or_default(&self, system: Option<AyanamshaSystem>) -> AyanamshaSystem {
        system.unwrap_or(self.config.ayanamsha.system)
    }

    // -----------------------------------------------------------------------
    // Panchang
    // -----------------------------------------------------------------------

    /// Full panchang at `at` for `location`. `None` uses the configured
    /// ayanamsha system.
    pub fn compute_panchang(
        &self,
        location: GeoLocation,
        at: DateTime<Utc>,
        system: Option<AyanamshaSystem>,
    ) -> Result<Arc<PanchangSnapshot>, KaalError> {
        let request = PanchangRequest::new(Instant::from_datetime(at), location)
            .with_system(self.system_or_default(system));
        self.panchang(&request)
    }

    /// Panchang for a fully specified request (birth nakshatra, transitions).
    pub fn panchang(&self, request: &PanchangRequest) -> Result<Arc<PanchangSnapshot>, KaalError> {
        Ok(self.calculator.compute(request)?)
    }

    /// Nine graha positions seen from `location`.
    pub fn planets(
        &self,
        location: GeoLocation,
        at: DateTime<Utc>,
        system: Option<AyanamshaSystem>,
    ) -> Result<Vec<GrahaPosition>, KaalError> {
        Ok(self.calculator.graha_positions(
            &Instant::from_datetime(at),
            &location.to_observer(),
            self.system_or_default(system),
        )?)
    }

    /// Every system's ayanamsha at `at`, in degrees.
    pub fn compare_ayanamsha(&self, at: DateTime<Utc>) -> BTreeMap<AyanamshaSystem, f64> {
        compare_all_map(Instant::from_datetime(at).jd_tt())
    }

    /// Like [`Kaal::compare_ayanamsha`] with each system's offset from Lahiri.
    pub fn ayanamsha_table(&self, at: DateTime<Utc>) -> Vec<AyanamshaComparison> {
        compare_all(Instant::from_datetime(at).jd_tt())
    }

    pub fn next_new_moon(&self, at: DateTime<Utc>) -> Result<Option<LunarPhaseEvent>, KaalError> {
        Ok(next_amavasya(
            self.calculator.provider(),
            Instant::from_datetime(at).jd_tt(),
        )?)
    }

    pub fn next_full_moon(&self, at: DateTime<Utc>) -> Result<Option<LunarPhaseEvent>, KaalError> {
        Ok(next_purnima(
            self.calculator.provider(),
            Instant::from_datetime(at).jd_tt(),
        )?)
    }

    pub fn next_sankranti(
        &self,
        at: DateTime<Utc>,
        system: Option<AyanamshaSystem>,
    ) -> Result<Option<SankrantiEvent>, KaalError> {
        let cfg = SankrantiConfig::new(self.system_or_default(system));
        Ok(next_sankranti(
            self.calculator.provider(),
            Instant::from_datetime(at).jd_tt(),
            &cfg,
        )?)
    }

    // -----------------------------------------------------------------------
    // Muhurta
    // -----------------------------------------------------------------------

    fn muhurta_engine(&self) -> Result<MuhurtaEngine<'_, P>, KaalError> {
        Ok(MuhurtaEngine::with_config(
            &self.calculator,
            self.config.muhurta_config(),
        )?)
    }

    /// Request carrying the configured factor weights.
    pub fn muhurta_request(
        &self,
        muhurta_type: MuhurtaType,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        location: GeoLocation,
    ) -> MuhurtaRequest {
        MuhurtaRequest::new(muhurta_type, start, end, location)
            .with_weights(self.config.muhurta.weights)
    }

    /// Ranked results, best first, capped at the configured maximum.
    pub fn find_muhurta(&self, request: &MuhurtaRequest) -> Result<Vec<MuhurtaResult>, KaalError> {
        let results = self.muhurta_engine()?.find_muhurta(request)?;
        debug!(
            muhurta_type = %request.muhurta_type,
            results = results.len(),
            "muhurta search finished"
        );
        Ok(results)
    }

    pub fn best_muhurta(&self, request: &MuhurtaRequest) -> Result<Option<MuhurtaResult>, KaalError> {
        Ok(self.muhurta_engine()?.best_muhurta(request)?)
    }

    /// GOOD-or-better windows per day in `[start, end]`.
    pub fn muhurta_calendar(
        &self,
        muhurta_type: MuhurtaType,
        start: NaiveDate,
        end: NaiveDate,
        location: GeoLocation,
    ) -> Result<BTreeMap<String, Vec<MuhurtaResult>>, KaalError> {
        Ok(self
            .muhurta_engine()?
            .muhurta_calendar(muhurta_type, start, end, location)?)
    }

    // -----------------------------------------------------------------------
    // Festivals
    // -----------------------------------------------------------------------

    fn festival_resolver(&self) -> Result<FestivalResolver<'_, P>, KaalError> {
        Ok(FestivalResolver::with_config(
            &self.calculator,
            self.config.festival_config(),
        )?)
    }

    /// Festivals of `year`. Empty `regions` means pan-Indian festivals only;
    /// empty `categories` means every category.
    pub fn resolve_festivals(
        &self,
        year: i32,
        regions: &[Region],
        categories: &[FestivalCategory],
    ) -> Result<Vec<FestivalDate>, KaalError> {
        Ok(self.festival_resolver()?.resolve(year, regions, categories)?)
    }

    pub fn festivals_for_date(
        &self,
        date: NaiveDate,
        regions: &[Region],
    ) -> Result<Vec<FestivalDate>, KaalError> {
        Ok(self.festival_resolver()?.festivals_for_date(date, regions)?)
    }

    pub fn festivals_for_month(
        &self,
        year: i32,
        month: u32,
        regions: &[Region],
    ) -> Result<Vec<FestivalDate>, KaalError> {
        Ok(self
            .festival_resolver()?
            .festivals_for_month(year, month, regions)?)
    }

    pub fn festival_calendar(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        regions: &[Region],
        categories: &[FestivalCategory],
    ) -> Result<BTreeMap<String, Vec<FestivalDate>>, KaalError> {
        Ok(self
            .festival_resolver()?
            .generate_calendar(start, end, regions, categories)?)
    }

    /// Sunrise tithi, nakshatra and lunar month at the festival reference
    /// location.
    pub fn day_info(&self, date: NaiveDate) -> Result<DayInfo, KaalError> {
        Ok(self.festival_resolver()?.day_info(date)?)
    }

    /// Resolve `year` and render it.
    pub fn export_festivals(
        &self,
        year: i32,
        regions: &[Region],
        categories: &[FestivalCategory],
        format: ExportFormat,
    ) -> Result<String, KaalError> {
        let festivals = self.resolve_festivals(year, regions, categories)?;
        render_festivals(&festivals, format)
    }
}

/// Render already-resolved festivals.
pub fn render_festivals(
    festivals: &[FestivalDate],
    format: ExportFormat,
) -> Result<String, KaalError> {
    Ok(match format {
        ExportFormat::Ical => to_ical(festivals),
        ExportFormat::Json => to_json(festivals)?,
        ExportFormat::Csv => to_csv(festivals),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocationConfig;

    #[test]
    fn export_format_parsing() {
        assert_eq!("ICS".parse::<ExportFormat>().unwrap(), ExportFormat::Ical);
        assert_eq!(" csv ".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::Ical.extension(), "ics");
        assert!(matches!(
            "pdf".parse::<ExportFormat>(),
            Err(KaalError::InvalidInput(_))
        ));
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let mut cfg = KaalConfig::default();
        cfg.location = LocationConfig {
            latitude_deg: f64::NAN,
            ..LocationConfig::default()
        };
        assert!(matches!(Kaal::from_config(cfg), Err(KaalError::Config(_))));
    }

    #[test]
    fn comparison_has_every_system() {
        let kaal = Kaal::new();
        let at = "2024-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let map = kaal.compare_ayanamsha(at);
        assert_eq!(map.len(), 10);
        assert!(map.values().all(|v| v.is_finite()));
        let table = kaal.ayanamsha_table(at);
        let lahiri = map[&AyanamshaSystem::Lahiri];
        for row in table {
            assert!((row.diff_from_lahiri_deg - (row.value_deg - lahiri)).abs() < 1e-12);
        }
    }

    #[test]
    fn request_carries_configured_weights() {
        let kaal = Kaal::new();
        let start = "2024-05-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let loc = kaal.default_location().unwrap();
        let req = kaal.muhurta_request(MuhurtaType::Travel, start, start, loc);
        assert_eq!(req.weights, Some(kaal.config().muhurta.weights));
    }
}
