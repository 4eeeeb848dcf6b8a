//! End-to-end sweeps over the analytic ephemeris.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use kaal_core::{AnalyticConfig, AnalyticEphemeris, EphemerisProvider};
use kaal_muhurta::{
    CustomRules, FactorWeights, MuhurtaConfig, MuhurtaEngine, MuhurtaError, MuhurtaQuality,
    MuhurtaRequest, MuhurtaType, TravelDirection,
};
use kaal_panchang::{PanchangCalculator, PanchangRequest};
use kaal_time::Instant;
use kaal_vedic_base::{ALL_VAARS, GeoLocation, WindowKind};

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

fn calculator() -> PanchangCalculator<AnalyticEphemeris> {
    PanchangCalculator::new(AnalyticEphemeris::new())
}

#[test]
fn sweep_is_ranked_and_capped() {
    let calc = calculator();
    let engine = MuhurtaEngine::new(&calc);
    let req = MuhurtaRequest::new(
        MuhurtaType::Business,
        utc(2024, 11, 1, 0),
        utc(2024, 11, 4, 0),
        ujjain(),
    );
    let results = engine.find_muhurta(&req).unwrap();
    assert!(results.len() <= 20);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for r in &results {
        assert!(r.quality >= MuhurtaQuality::Average);
        assert!((0.0..=100.0).contains(&r.score));
        assert_eq!(r.factors.len(), 8);
        assert_eq!(r.duration_minutes, 60);
    }
}

#[test]
fn best_is_first_of_ranked() {
    let calc = calculator();
    let engine = MuhurtaEngine::new(&calc);
    let req = MuhurtaRequest::new(
        MuhurtaType::Education,
        utc(2024, 6, 10, 0),
        utc(2024, 6, 12, 0),
        ujjain(),
    );
    let all = engine.find_muhurta(&req).unwrap();
    let best = engine.best_muhurta(&req).unwrap();
    assert_eq!(all.first().map(|r| r.datetime), best.map(|r| r.datetime));
}

#[test]
fn sweep_past_coverage_skips_failed_samples() {
    let coverage_end = Instant::from_datetime(utc(2024, 6, 3, 0)).jd_tt();
    let eph = AnalyticEphemeris::with_config(AnalyticConfig {
        coverage_start_jd: AnalyticEphemeris::new().coverage().0,
        coverage_end_jd: coverage_end,
    })
    .unwrap();
    let calc = PanchangCalculator::new(eph);
    let engine = MuhurtaEngine::new(&calc);
    let req = MuhurtaRequest::new(
        MuhurtaType::General,
        utc(2024, 6, 1, 0),
        utc(2024, 6, 5, 0),
        ujjain(),
    );
    let results = engine.find_muhurta(&req).unwrap();
    assert!(!results.is_empty());
    for r in &results {
        assert!(Instant::from_datetime(r.datetime).jd_tt() < coverage_end, "{}", r.datetime);
    }
}

#[test]
fn result_cap_follows_config() {
    let calc = calculator();
    let cfg = MuhurtaConfig {
        max_results: 3,
        ..MuhurtaConfig::default()
    };
    let engine = MuhurtaEngine::with_config(&calc, cfg).unwrap();
    let req = MuhurtaRequest::new(
        MuhurtaType::General,
        utc(2024, 2, 1, 0),
        utc(2024, 2, 5, 0),
        ujjain(),
    );
    assert!(engine.find_muhurta(&req).unwrap().len() <= 3);
}

#[test]
fn weights_recorded_per_factor() {
    let calc = calculator();
    let engine = MuhurtaEngine::new(&calc);
    let at = utc(2024, 5, 15, 4);
    let req = MuhurtaRequest::new(MuhurtaType::Property, at, at, ujjain());
    let r = engine.evaluate(&req, at).unwrap();
    let total_weight: f64 = r.factors.values().map(|f| f.weight).sum();
    assert!((total_weight - 1.0).abs() < 1e-9);
    let recomputed: f64 = r.factors.values().map(|f| f.score * f.weight).sum();
    assert!((recomputed.clamp(0.0, 100.0) - r.score).abs() < 1e-9);
}

#[test]
fn unbalanced_override_rejected() {
    let calc = calculator();
    let engine = MuhurtaEngine::new(&calc);
    let req = MuhurtaRequest::new(
        MuhurtaType::Marriage,
        utc(2024, 1, 1, 0),
        utc(2024, 1, 2, 0),
        ujjain(),
    )
    .with_weights(FactorWeights {
        vara: 0.30,
        ..FactorWeights::default()
    });
    assert!(matches!(
        engine.find_muhurta(&req),
        Err(MuhurtaError::InvalidInput(_))
    ));
}

#[test]
fn range_longer_than_cap_rejected() {
    let calc = calculator();
    let engine = MuhurtaEngine::new(&calc);
    let start = utc(2024, 1, 1, 0);
    let req = MuhurtaRequest::new(
        MuhurtaType::Travel,
        start,
        start + Duration::days(91),
        ujjain(),
    );
    assert!(matches!(
        engine.find_muhurta(&req),
        Err(MuhurtaError::InvalidInput(_))
    ));
}

#[test]
fn fully_excluded_range_yields_nothing() {
    let calc = calculator();
    let engine = MuhurtaEngine::new(&calc);
    let start = utc(2024, 3, 1, 0);
    let end = utc(2024, 3, 1, 12);
    let req = MuhurtaRequest::new(MuhurtaType::General, start, end, ujjain()).exclude(start, end);
    assert!(engine.find_muhurta(&req).unwrap().is_empty());
}

#[test]
fn monsoon_marriage_carries_season_warning() {
    let calc = calculator();
    let engine = MuhurtaEngine::new(&calc);
    let at = utc(2024, 7, 20, 5);
    let req = MuhurtaRequest::new(MuhurtaType::Marriage, at, at, ujjain());
    let r = engine.evaluate(&req, at).unwrap();
    assert!(
        r.warnings
            .iter()
            .any(|w| w == "July falls outside the traditional marriage season")
    );

    let winter = utc(2024, 12, 5, 5);
    let req = MuhurtaRequest::new(MuhurtaType::Marriage, winter, winter, ujjain());
    let r = engine.evaluate(&req, winter).unwrap();
    assert!(!r.warnings.iter().any(|w| w.contains("season")));
}

#[test]
fn rahu_kaal_overlap_is_penalized() {
    let calc = calculator();
    // 2024-03-03 is a Sunday in Ujjain.
    let snap = calc
        .compute(&PanchangRequest::new(
            Instant::from_datetime(utc(2024, 3, 3, 6)),
            ujjain(),
        ))
        .unwrap();
    let rahu = snap.window(WindowKind::RahuKaal).unwrap();
    let at = rahu.start + Duration::minutes(30);

    let engine = MuhurtaEngine::new(&calc);
    let req = MuhurtaRequest::new(MuhurtaType::General, at, at, ujjain());
    let r = engine.evaluate(&req, at).unwrap();
    let f = &r.factors["inauspicious_periods"];
    assert!(f.score <= 50.0);
    assert!(f.flag("rahu_kaal"));
    assert!(!f.flag("clean_period"));
    assert!(r.warnings.iter().any(|w| w == "Overlaps Rahu Kaal"));
}

#[test]
fn custom_rules_add_a_weighted_factor() {
    let calc = calculator();
    let engine = MuhurtaEngine::new(&calc);
    let at = utc(2024, 8, 8, 6);
    let rules = CustomRules {
        favorable_vaars: ALL_VAARS.to_vec(),
        ..CustomRules::default()
    };
    let plain = MuhurtaRequest::new(MuhurtaType::Custom, at, at, ujjain());
    let with_rules = plain.clone().with_custom_rules(rules);

    let a = engine.evaluate(&plain, at).unwrap();
    let b = engine.evaluate(&with_rules, at).unwrap();
    let custom = &b.factors["custom"];
    assert_eq!(custom.score, 100.0);
    assert!((custom.weight - 0.10).abs() < 1e-12);
    assert!(b.score >= a.score);
}

#[test]
fn travel_direction_note() {
    let calc = calculator();
    let engine = MuhurtaEngine::new(&calc);
    let at = utc(2024, 3, 3, 6);
    let req = MuhurtaRequest::new(MuhurtaType::Travel, at, at, ujjain())
        .with_direction(TravelDirection::East);
    let r = engine.evaluate(&req, at).unwrap();
    assert!(
        r.recommendations
            .iter()
            .any(|s| s == "Sunday is favorable for travel towards the east")
    );
}

#[test]
fn calendar_keeps_good_days_only() {
    let calc = calculator();
    let engine = MuhurtaEngine::new(&calc);
    let start = NaiveDate::from_ymd_opt(2024, 11, 10).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 11, 14).unwrap();
    let cal = engine
        .muhurta_calendar(MuhurtaType::Business, start, end, ujjain())
        .unwrap();
    for (day, results) in &cal {
        let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap();
        assert!(date >= start && date <= end);
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.quality >= MuhurtaQuality::Good));
    }
    assert!(
        engine
            .muhurta_calendar(MuhurtaType::Business, end, start, ujjain())
            .is_err()
    );
}

#[test]
fn result_serializes() {
    let calc = calculator();
    let engine = MuhurtaEngine::new(&calc);
    let at = utc(2024, 4, 1, 3);
    let req = MuhurtaRequest::new(MuhurtaType::Business, at, at, ujjain());
    let r = engine.evaluate(&req, at).unwrap();
    let json = serde_json::to_string(&r).unwrap();
    assert!(json.contains("\"planetary_strength\""));
    assert!(json.contains("\"datetime\":\"2024-04-01T03:00:00Z\""));
}
