//! Factor scoring. Each function maps a snapshot to a 0..=100 sub-score
//! with annotations; weights are applied by the engine.

use kaal_panchang::PanchangSnapshot;
use kaal_vedic_base::{Graha, Karana, MoonPhase, WindowKind, Yoga, separation_deg};

use crate::dignity::dignity;
use crate::rules::{GANDA_MOOLA, GURU_CHANDAL_ORB_DEG, Penalty, RuleSet};
use crate::types::{CustomRules, FactorReport, MuhurtaType};

const EXCELLENT_YOGAS: [Yoga; 6] = [
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
];
const AVOID_YOGAS: [Yoga; 3] = [Yoga::Vyaghata, Yoga::Parigha, Yoga::Vaidhriti];

pub fn tithi_factor(snap: &PanchangSnapshot, rules: &RuleSet) -> FactorReport {
    let number = snap.tithi.number;
    let favorable = rules.favorable_tithis.contains(&number);
    let avoid = !favorable && rules.avoid_tithis.contains(&number);
    let mut score = if favorable {
        80.0
    } else if avoid {
        20.0
    } else {
        50.0
    };
    // Purnima and Amavasya are generally weaker.
    if number == 15 || number == 30 {
        score -= 10.0;
    }
    FactorReport::new(score)
        .note("tithi_number", number)
        .note("tithi_name", snap.tithi.name.as_str())
        .note("favorable", favorable)
        .note("avoid", avoid)
}

pub fn nakshatra_factor(snap: &PanchangSnapshot, rules: &RuleSet) -> FactorReport {
    let n = snap.nakshatra.nakshatra;
    let favorable = rules.favorable_nakshatras.contains(&n);
    let avoid = !favorable && rules.avoid_nakshatras.contains(&n);
    let mut score = if favorable {
        85.0
    } else if avoid {
        15.0
    } else {
        50.0
    };
    let ganda_moola = GANDA_MOOLA.contains(&n);
    if ganda_moola {
        score -= 15.0;
    }
    FactorReport::new(score)
        .note("nakshatra", snap.nakshatra.name)
        .note("nakshatra_lord", snap.nakshatra.lord.name())
        .note("favorable", favorable)
        .note("avoid", avoid)
        .note("ganda_moola", ganda_moola)
}

pub fn yoga_factor(snap: &PanchangSnapshot) -> FactorReport {
    let y = snap.yoga.yoga;
    let favorable = EXCELLENT_YOGAS.contains(&y);
    let avoid = AVOID_YOGAS.contains(&y);
    let score = if favorable {
        90.0
    } else if avoid {
        25.0
    } else {
        50.0
    };
    FactorReport::new(score)
        .note("yoga_number", snap.yoga.number)
        .note("yoga_name", snap.yoga.name)
        .note("favorable", favorable)
        .note("avoid", avoid)
}

/// Movable karanas score well; the four fixed ones do not.
pub fn karana_factor(snap: &PanchangSnapshot) -> FactorReport {
    let movable = snap.karana.movable;
    FactorReport::new(if movable { 75.0 } else { 30.0 })
        .note("karana_number", snap.karana.index)
        .note("karana_name", snap.karana.name)
        .note("favorable", movable)
        .note("avoid", !movable)
}

pub fn vara_factor(snap: &PanchangSnapshot, rules: &RuleSet) -> FactorReport {
    let favorable = rules.favorable_vaars.contains(&snap.vaar);
    let avoid = !favorable && rules.avoid_vaars.contains(&snap.vaar);
    let score = if favorable {
        80.0
    } else if avoid {
        30.0
    } else {
        50.0
    };
    FactorReport::new(score)
        .note("vara", snap.vaar.english_name())
        .note("favorable", favorable)
        .note("avoid", avoid)
}

/// Penalizes overlap of `[start_jd, end_jd]` (UTC) with the day's Rahu Kaal,
/// Yamaganda and Gulika Kaal.
pub fn inauspicious_factor(snap: &PanchangSnapshot, start_jd: f64, end_jd: f64) -> FactorReport {
    let hits = |kind: WindowKind| {
        snap.window(kind)
            .is_some_and(|w| w.overlaps(start_jd, end_jd))
    };
    let rahu = hits(WindowKind::RahuKaal);
    let yamaganda = hits(WindowKind::Yamaganda);
    let gulika = hits(WindowKind::GulikaKaal);

    let mut score = 100.0;
    if rahu {
        score -= 50.0;
    }
    if yamaganda {
        score -= 30.0;
    }
    if gulika {
        score -= 20.0;
    }
    FactorReport::new(f64::max(score, 0.0))
        .note("rahu_kaal", rahu)
        .note("yamaganda_kaal", yamaganda)
        .note("gulika_kaal", gulika)
        .note("clean_period", !(rahu || yamaganda || gulika))
}

pub fn moon_factor(snap: &PanchangSnapshot, muhurta_type: MuhurtaType) -> FactorReport {
    let phase = snap.moon_phase.phase;
    let illum = snap.moon_phase.illumination_percent;
    let waxing_phase = matches!(phase, MoonPhase::WaxingCrescent | MoonPhase::WaxingGibbous);

    let (score, full_moon_power) = match muhurta_type {
        MuhurtaType::Marriage | MuhurtaType::Business => {
            if waxing_phase && illum > 25.0 {
                (80.0, false)
            } else if phase == MoonPhase::FullMoon {
                (90.0, true)
            } else {
                (50.0, false)
            }
        }
        MuhurtaType::Travel if (25.0..=75.0).contains(&illum) => (75.0, false),
        _ => (50.0, false),
    };
    FactorReport::new(score)
        .note("moon_phase", snap.moon_phase.name)
        .note("illumination_percent", illum)
        .note("favorable", score > 50.0)
        .note("full_moon_power", full_moon_power)
}

/// Base 50, plus weighted dignity of the rule set's grahas, minus penalties.
pub fn planetary_factor(snap: &PanchangSnapshot, rules: &RuleSet) -> FactorReport {
    let mut score = 50.0;
    let mut report = FactorReport::new(0.0);

    for &(graha, weight) in rules.planetary {
        let Some(pos) = snap.graha(graha) else {
            continue;
        };
        let d = dignity(graha, pos.sidereal_longitude_deg);
        score += d.strength() * weight / 100.0;
        report = report.note(graha_key(graha), d.name());
    }

    for &penalty in rules.penalties {
        if penalty_applies(snap, penalty) {
            score -= penalty.points();
            report = report.note(penalty.key(), true);
        }
    }

    report.score = score.clamp(0.0, 100.0);
    let strength = if report.score >= 70.0 {
        "strong"
    } else if report.score >= 40.0 {
        "average"
    } else {
        "weak"
    };
    report.note("planetary_strength", strength)
}

fn graha_key(graha: Graha) -> &'static str {
    match graha {
        Graha::Sun => "sun",
        Graha::Moon => "moon",
        Graha::Mars => "mars",
        Graha::Mercury => "mercury",
        Graha::Jupiter => "jupiter",
        Graha::Venus => "venus",
        Graha::Saturn => "saturn",
        Graha::Rahu => "rahu",
        Graha::Ketu => "ketu",
    }
}

fn penalty_applies(snap: &PanchangSnapshot, penalty: Penalty) -> bool {
    match penalty {
        Penalty::GuruChandal => match (snap.graha(Graha::Jupiter), snap.graha(Graha::Rahu)) {
            (Some(j), Some(r)) => {
                separation_deg(j.sidereal_longitude_deg, r.sidereal_longitude_deg)
                    <= GURU_CHANDAL_ORB_DEG
            }
            _ => false,
        },
        Penalty::Bhadra => snap.karana.karana == Karana::Vishti,
    }
}

pub fn custom_factor(snap: &PanchangSnapshot, custom: &CustomRules) -> FactorReport {
    fn check<T: PartialEq>(value: &T, favorable: &[T], avoid: &[T]) -> Option<f64> {
        if favorable.is_empty() && avoid.is_empty() {
            None
        } else if favorable.contains(value) {
            Some(100.0)
        } else if avoid.contains(value) {
            Some(0.0)
        } else {
            Some(50.0)
        }
    }

    let illumination = custom.min_illumination_percent.map(|min| {
        if snap.moon_phase.illumination_percent >= min {
            100.0
        } else {
            0.0
        }
    });
    let checks: Vec<f64> = [
        check(&snap.tithi.number, &custom.favorable_tithis, &custom.avoid_tithis),
        check(
            &snap.nakshatra.nakshatra,
            &custom.favorable_nakshatras,
            &custom.avoid_nakshatras,
        ),
        check(&snap.vaar, &custom.favorable_vaars, &custom.avoid_vaars),
        illumination,
    ]
    .into_iter()
    .flatten()
    .collect();

    let score = if checks.is_empty() {
        50.0
    } else {
        checks.iter().sum::<f64>() / checks.len() as f64
    };
    FactorReport::new(score).note("checks_applied", checks.len() as f64)
}
