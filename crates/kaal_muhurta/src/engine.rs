//! Parallel muhurta sweep over a borrowed panchang calculator.
//!
//! Every sample is scored independently: a snapshot is built, the eight
//! factors are weighted, and the total is mapped to a quality tier. The
//! sweep is a rayon map over the sample instants followed by a sequential
//! sort and truncate.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use kaal_core::EphemerisProvider;
use kaal_panchang::{PanchangCalculator, PanchangRequest, PanchangSnapshot};
use kaal_time::Instant;
use kaal_vedic_base::{AyanamshaSystem, GeoLocation};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::MuhurtaError;
use crate::factors::{
    custom_factor, inauspicious_factor, karana_factor, moon_factor, nakshatra_factor,
    planetary_factor, tithi_factor, vara_factor, yoga_factor,
};
use crate::rules::rules_for;
use crate::types::{
    CUSTOM_RULE_WEIGHT, FactorReport, FactorWeights, MAX_DURATION_MINUTES, MuhurtaQuality,
    MuhurtaRequest, MuhurtaResult, MuhurtaType,
};

pub const DEFAULT_MAX_RESULTS: usize = 20;
pub const DEFAULT_STEP_MINUTES: u32 = 60;
pub const DEFAULT_MAX_SWEEP_DAYS: u32 = 90;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MuhurtaConfig {
    /// Upper bound on results returned by a sweep.
    pub max_results: usize,
    /// Spacing between samples.
    pub step_minutes: u32,
    /// Longest accepted sweep.
    pub max_days: u32,
    pub ayanamsha_system: AyanamshaSystem,
}

impl Default for MuhurtaConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            step_minutes: DEFAULT_STEP_MINUTES,
            max_days: DEFAULT_MAX_SWEEP_DAYS,
            ayanamsha_system: AyanamshaSystem::Lahiri,
        }
    }
}

impl MuhurtaConfig {
    pub fn validate(&self) -> Result<(), MuhurtaError> {
        if self.max_results == 0 || self.step_minutes == 0 || self.max_days == 0 {
            return Err(MuhurtaError::InvalidInput(
                "max_results, step_minutes and max_days must be positive".into(),
            ));
        }
        Ok(())
    }
}

pub struct MuhurtaEngine<'a, P> {
    calculator: &'a PanchangCalculator<P>,
    config: MuhurtaConfig,
}

impl<'a, P: EphemerisProvider> MuhurtaEngine<'a, P> {
    pub fn new(calculator: &'a PanchangCalculator<P>) -> Self {
        Self {
            calculator,
            config: MuhurtaConfig::default(),
        }
    }

    pub fn with_config(
        calculator: &'a PanchangCalculator<P>,
        config: MuhurtaConfig,
    ) -> Result<Self, MuhurtaError> {
        config.validate()?;
        Ok(Self { calculator, config })
    }

    pub fn config(&self) -> &MuhurtaConfig {
        &self.config
    }

    /// Ranked acceptable results (AVERAGE or better), best first, at most
    /// `max_results`. Samples whose snapshot fails are logged and skipped.
    pub fn find_muhurta(&self, request: &MuhurtaRequest) -> Result<Vec<MuhurtaResult>, MuhurtaError> {
        self.validate(request)?;
        let samples = self.samples(request);
        debug!(
            muhurta_type = %request.muhurta_type,
            samples = samples.len(),
            "muhurta sweep"
        );

        let mut results: Vec<MuhurtaResult> = samples
            .par_iter()
            .filter_map(|&at| match self.evaluate_unchecked(request, at) {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!(%at, error = %e, "skipping muhurta sample");
                    None
                }
            })
            .filter(|r| r.quality.is_acceptable())
            .collect();

        results.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.datetime.cmp(&b.datetime))
        });
        results.truncate(self.config.max_results);
        Ok(results)
    }

    pub fn best_muhurta(
        &self,
        request: &MuhurtaRequest,
    ) -> Result<Option<MuhurtaResult>, MuhurtaError> {
        Ok(self.find_muhurta(request)?.into_iter().next())
    }

    /// GOOD-or-better results for each civil day in `[start, end]`, keyed by
    /// ISO date. Days with nothing good are absent.
    pub fn muhurta_calendar(
        &self,
        muhurta_type: MuhurtaType,
        start: NaiveDate,
        end: NaiveDate,
        location: GeoLocation,
    ) -> Result<BTreeMap<String, Vec<MuhurtaResult>>, MuhurtaError> {
        if end < start {
            return Err(MuhurtaError::InvalidInput(format!(
                "calendar end {end} precedes start {start}"
            )));
        }
        let days = (end - start).num_days() + 1;
        if days > i64::from(self.config.max_days) {
            return Err(MuhurtaError::InvalidInput(format!(
                "calendar spans {days} days, limit is {}",
                self.config.max_days
            )));
        }

        let mut calendar = BTreeMap::new();
        for date in start.iter_days().take_while(|d| *d <= end) {
            let day_start = date.and_time(NaiveTime::MIN).and_utc();
            let request =
                MuhurtaRequest::new(muhurta_type, day_start, day_start + Duration::days(1), location);
            let good: Vec<MuhurtaResult> = self
                .find_muhurta(&request)?
                .into_iter()
                .filter(|r| r.quality >= MuhurtaQuality::Good)
                .collect();
            if !good.is_empty() {
                calendar.insert(date.format("%Y-%m-%d").to_string(), good);
            }
        }
        Ok(calendar)
    }

    /// Score a single instant, whatever its tier.
    pub fn evaluate(
        &self,
        request: &MuhurtaRequest,
        at: DateTime<Utc>,
    ) -> Result<MuhurtaResult, MuhurtaError> {
        self.validate_weights(request)?;
        self.evaluate_unchecked(request, at)
    }

    fn evaluate_unchecked(
        &self,
        request: &MuhurtaRequest,
        at: DateTime<Utc>,
    ) -> Result<MuhurtaResult, MuhurtaError> {
        let instant = Instant::from_datetime(at);
        let panchang_request = PanchangRequest::new(instant, request.location)
            .with_system(self.config.ayanamsha_system);
        let snap = self.calculator.compute(&panchang_request)?;

        let rules = rules_for(request.muhurta_type);
        let w = request.weights.unwrap_or_default();
        let start_jd = instant.jd_utc();
        let end_jd = start_jd + f64::from(request.duration_minutes) / 1440.0;

        let mut factors: BTreeMap<&'static str, FactorReport> = BTreeMap::new();
        let mut add = |key: &'static str, mut report: FactorReport, weight: f64| {
            report.weight = weight;
            factors.insert(key, report);
        };
        add("tithi", tithi_factor(&snap, rules), w.tithi);
        add("nakshatra", nakshatra_factor(&snap, rules), w.nakshatra);
        add("yoga", yoga_factor(&snap), w.yoga);
        add("karana", karana_factor(&snap), w.karana);
        add("vara", vara_factor(&snap, rules), w.vara);
        add(
            "inauspicious_periods",
            inauspicious_factor(&snap, start_jd, end_jd),
            w.inauspicious_periods,
        );
        add("moon_phase", moon_factor(&snap, request.muhurta_type), w.moon_phase);
        add("planetary_strength", planetary_factor(&snap, rules), w.planetary_strength);
        if let Some(custom) = &request.custom_rules {
            add("custom", custom_factor(&snap, custom), CUSTOM_RULE_WEIGHT);
        }

        let score = factors
            .values()
            .map(FactorReport::weighted)
            .sum::<f64>()
            .clamp(0.0, 100.0);
        let quality = MuhurtaQuality::from_score(score);
        let (recommendations, warnings) = advice(request, at, &snap, &factors, quality);
        let description = describe(request.muhurta_type, quality, &snap);

        Ok(MuhurtaResult {
            datetime: at,
            quality,
            score,
            factors,
            recommendations,
            warnings,
            duration_minutes: request.duration_minutes,
            description,
        })
    }

    fn validate(&self, request: &MuhurtaRequest) -> Result<(), MuhurtaError> {
        if request.end < request.start {
            return Err(MuhurtaError::InvalidInput(format!(
                "range end {} precedes start {}",
                request.end, request.start
            )));
        }
        let limit = Duration::days(i64::from(self.config.max_days));
        if request.end - request.start > limit {
            return Err(MuhurtaError::InvalidInput(format!(
                "range exceeds {} days",
                self.config.max_days
            )));
        }
        self.validate_weights(request)
    }

    fn validate_weights(&self, request: &MuhurtaRequest) -> Result<(), MuhurtaError> {
        if request.duration_minutes == 0 || request.duration_minutes > MAX_DURATION_MINUTES {
            return Err(MuhurtaError::InvalidInput(format!(
                "duration {} minutes outside 1..={MAX_DURATION_MINUTES}",
                request.duration_minutes
            )));
        }
        request
            .weights
            .as_ref()
            .map_or(Ok(()), FactorWeights::validate)
    }

    fn samples(&self, request: &MuhurtaRequest) -> Vec<DateTime<Utc>> {
        let step = Duration::minutes(i64::from(self.config.step_minutes));
        let mut out = Vec::new();
        let mut t = request.start;
        while t <= request.end {
            if !request.is_excluded(t) {
                out.push(t);
            }
            t += step;
        }
        out
    }
}

fn advice(
    request: &MuhurtaRequest,
    at: DateTime<Utc>,
    snap: &PanchangSnapshot,
    factors: &BTreeMap<&'static str, FactorReport>,
    quality: MuhurtaQuality,
) -> (Vec<String>, Vec<String>) {
    let mut recommendations = Vec::new();
    let mut warnings = Vec::new();

    match quality {
        MuhurtaQuality::Excellent => recommendations
            .push("Excellent time for this activity - all factors are highly favorable".into()),
        MuhurtaQuality::VeryGood => {
            recommendations.push("Very auspicious timing with strong favorable factors".into())
        }
        MuhurtaQuality::Good => recommendations
            .push("Good timing for this activity with mostly favorable conditions".into()),
        MuhurtaQuality::Average => recommendations
            .push("Acceptable timing but consider waiting for better muhurta if possible".into()),
        MuhurtaQuality::Poor | MuhurtaQuality::Avoid => warnings.push(
            "This timing has significant challenges - strongly recommend finding alternative"
                .into(),
        ),
    }

    let flagged = |factor: &str, key: &str| factors.get(factor).is_some_and(|f| f.flag(key));
    if flagged("nakshatra", "ganda_moola") {
        warnings.push(format!("{} is a Ganda-Moola nakshatra", snap.nakshatra.name));
    }
    if flagged("inauspicious_periods", "rahu_kaal") {
        warnings.push("Overlaps Rahu Kaal".into());
    }
    if flagged("inauspicious_periods", "yamaganda_kaal") {
        warnings.push("Overlaps Yamaganda".into());
    }
    if flagged("inauspicious_periods", "gulika_kaal") {
        warnings.push("Overlaps Gulika Kaal".into());
    }
    if flagged("planetary_strength", "guru_chandal") {
        warnings.push("Jupiter is conjunct Rahu (Guru-Chandal)".into());
    }
    if flagged("planetary_strength", "bhadra") {
        warnings.push("Bhadra (Vishti karana) is in effect".into());
    }

    let rules = rules_for(request.muhurta_type);
    let month = at.month();
    if !rules.favorable_months.is_empty() && !rules.favorable_months.contains(&month) {
        let name = MONTH_NAMES[(month as usize + 11) % 12];
        warnings.push(format!(
            "{name} falls outside the traditional {} season",
            request.muhurta_type
        ));
    }

    if request.muhurta_type == MuhurtaType::Travel {
        if let Some(direction) = request.direction {
            if direction.favorable_vaars().contains(&snap.vaar) {
                recommendations.push(format!(
                    "{} is favorable for travel towards the {direction}",
                    snap.vaar.english_name()
                ));
            } else {
                warnings.push(format!(
                    "{} is not a traditional day for travel towards the {direction}",
                    snap.vaar.english_name()
                ));
            }
        }
    }

    (recommendations, warnings)
}

fn describe(muhurta_type: MuhurtaType, quality: MuhurtaQuality, snap: &PanchangSnapshot) -> String {
    let closing = match quality {
        MuhurtaQuality::Excellent | MuhurtaQuality::VeryGood => {
            "Highly recommended timing with strong traditional support."
        }
        MuhurtaQuality::Good => "Good timing with favorable astrological conditions.",
        MuhurtaQuality::Average => "Acceptable timing with mixed astrological factors.",
        MuhurtaQuality::Poor | MuhurtaQuality::Avoid => {
            "Consider alternative timing due to challenging factors."
        }
    };
    format!(
        "{} {muhurta_type} muhurta on {}, {} tithi in {} nakshatra. {closing}",
        quality.title(),
        snap.vaar.english_name(),
        snap.tithi.name,
        snap.nakshatra.name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaal_core::AnalyticEphemeris;

    fn ujjain() -> GeoLocation {
        GeoLocation::new(23.1765, 75.7885, 0.0).unwrap()
    }

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn zero_config_rejected() {
        let calc = PanchangCalculator::new(AnalyticEphemeris::new());
        let cfg = MuhurtaConfig {
            max_results: 0,
            ..MuhurtaConfig::default()
        };
        assert!(MuhurtaEngine::with_config(&calc, cfg).is_err());
    }

    #[test]
    fn samples_are_hourly_and_inclusive() {
        let calc = PanchangCalculator::new(AnalyticEphemeris::new());
        let engine = MuhurtaEngine::new(&calc);
        let req = MuhurtaRequest::new(
            MuhurtaType::General,
            utc(2024, 1, 1, 0),
            utc(2024, 1, 1, 5),
            ujjain(),
        );
        assert_eq!(engine.samples(&req).len(), 6);
    }

    #[test]
    fn excluded_samples_dropped() {
        let calc = PanchangCalculator::new(AnalyticEphemeris::new());
        let engine = MuhurtaEngine::new(&calc);
        let req = MuhurtaRequest::new(
            MuhurtaType::General,
            utc(2024, 1, 1, 0),
            utc(2024, 1, 1, 5),
            ujjain(),
        )
        .exclude(utc(2024, 1, 1, 1), utc(2024, 1, 1, 3));
        let s = engine.samples(&req);
        assert_eq!(s.len(), 3);
        assert!(!s.contains(&utc(2024, 1, 1, 3)));
    }

    #[test]
    fn inverted_range_rejected() {
        let calc = PanchangCalculator::new(AnalyticEphemeris::new());
        let engine = MuhurtaEngine::new(&calc);
        let req = MuhurtaRequest::new(
            MuhurtaType::Travel,
            utc(2024, 1, 2, 0),
            utc(2024, 1, 1, 0),
            ujjain(),
        );
        assert!(matches!(
            engine.find_muhurta(&req),
            Err(MuhurtaError::InvalidInput(_))
        ));
    }

    #[test]
    fn description_mentions_type_and_weekday() {
        let calc = PanchangCalculator::new(AnalyticEphemeris::new());
        let engine = MuhurtaEngine::new(&calc);
        let at = utc(2024, 3, 3, 6);
        let req = MuhurtaRequest::new(MuhurtaType::Business, at, at, ujjain());
        let r = engine.evaluate(&req, at).unwrap();
        assert!(r.description.contains("business muhurta on Sunday"));
        assert!(r.description.ends_with('.'));
    }
}
