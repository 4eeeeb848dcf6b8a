//! Angular aspects between bodies and two simple graha combinations.

use serde::Serialize;

use crate::graha::Graha;
use crate::util::normalize_360;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

impl AspectKind {
    /// Exact separation in degrees.
    pub const fn angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Opposition => 180.0,
            Self::Trine => 120.0,
            Self::Square => 90.0,
            Self::Sextile => 60.0,
        }
    }

    /// Allowed deviation from the exact angle.
    pub const fn orb_deg(self) -> f64 {
        match self {
            Self::Conjunction | Self::Opposition => 8.0,
            Self::Trine | Self::Square => 6.0,
            Self::Sextile => 4.0,
        }
    }
}

/// Checked in this order; the first match wins.
const ASPECT_ORDER: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aspect {
    pub first: Graha,
    pub second: Graha,
    pub kind: AspectKind,
    /// Folded separation in [0, 180].
    pub separation_deg: f64,
}

/// Folded angular separation in [0, 180].
pub fn separation_deg(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    if d > 180.0 { 360.0 - d } else { d }
}

pub fn aspect_between(lon_a: f64, lon_b: f64) -> Option<(AspectKind, f64)> {
    let sep = separation_deg(lon_a, lon_b);
    ASPECT_ORDER
        .iter()
        .find(|k| (sep - k.angle_deg()).abs() <= k.orb_deg())
        .map(|&k| (k, sep))
}

/// All pairwise aspects, in input order.
pub fn find_aspects(positions: &[(Graha, f64)]) -> Vec<Aspect> {
    let mut out = Vec::new();
    for (i, &(first, lon_a)) in positions.iter().enumerate() {
        for &(second, lon_b) in &positions[i + 1..] {
            if let Some((kind, separation_deg)) = aspect_between(lon_a, lon_b) {
                out.push(Aspect {
                    first,
                    second,
                    kind,
                    separation_deg,
                });
            }
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Combination {
    pub name: &'static str,
    pub description: &'static str,
    pub strength: &'static str,
}

/// Guru-Shukra (Jupiter-Venus within 10 deg) and Gaja-Kesari (Moon-Jupiter
/// within 10 deg).
pub fn detect_combinations(moon: f64, jupiter: f64, venus: f64) -> Vec<Combination> {
    let mut out = Vec::new();
    let jv = separation_deg(jupiter, venus);
    if jv <= 10.0 {
        out.push(Combination {
            name: "Guru-Shukra Yoga",
            description: "Jupiter-Venus conjunction brings wealth and knowledge",
            strength: if jv <= 5.0 { "Strong" } else { "Moderate" },
        });
    }
    if separation_deg(moon, jupiter) <= 10.0 {
        out.push(Combination {
            name: "Gaja Kesari Yoga",
            description: "Moon-Jupiter combination brings fame and prosperity",
            strength: "Strong",
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separation_folds() {
        assert!((separation_deg(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((separation_deg(0.0, 180.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn aspect_orbs() {
        assert_eq!(aspect_between(0.0, 7.9).map(|a| a.0), Some(AspectKind::Conjunction));
        assert_eq!(aspect_between(0.0, 125.0).map(|a| a.0), Some(AspectKind::Trine));
        assert_eq!(aspect_between(0.0, 127.0), None);
        assert_eq!(aspect_between(10.0, 306.0).map(|a| a.0), Some(AspectKind::Sextile));
        assert_eq!(aspect_between(0.0, 40.0), None);
    }

    #[test]
    fn pairwise() {
        let pos = [(Graha::Sun, 0.0), (Graha::Moon, 180.0), (Graha::Mars, 90.0)];
        let aspects = find_aspects(&pos);
        assert_eq!(aspects.len(), 3);
        assert_eq!(aspects[0].kind, AspectKind::Opposition);
        assert_eq!(aspects[1].kind, AspectKind::Square);
    }

    #[test]
    fn combinations() {
        let c = detect_combinations(100.0, 103.0, 106.0);
        assert_eq!(c.len(), 2);
        assert_eq!(c[0].strength, "Strong");
        assert_eq!(detect_combinations(0.0, 100.0, 108.0)[0].strength, "Moderate");
        assert!(detect_combinations(0.0, 90.0, 200.0).is_empty());
    }
}
