//! Sign-placement strength of a graha from its sidereal longitude.

use kaal_vedic_base::{Graha, normalize_360};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dignity {
    Exalted,
    OwnSign,
    Debilitated,
    Neutral,
}

impl Dignity {
    /// Strength on a 0..=100 scale.
    pub const fn strength(self) -> f64 {
        match self {
            Self::Exalted => 95.0,
            Self::OwnSign => 80.0,
            Self::Debilitated => 20.0,
            Self::Neutral => 50.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Exalted => "exalted",
            Self::OwnSign => "own sign",
            Self::Debilitated => "debilitated",
            Self::Neutral => "neutral",
        }
    }
}

type DegreeSpan = (f64, f64);

struct DignityTable {
    exalted: &'static [DegreeSpan],
    own: &'static [DegreeSpan],
    debilitated: &'static [DegreeSpan],
}

fn table(graha: Graha) -> Option<DignityTable> {
    let t = match graha {
        Graha::Sun => DignityTable {
            exalted: &[(0.0, 10.0)],
            own: &[(120.0, 150.0)],
            debilitated: &[(180.0, 190.0)],
        },
        Graha::Moon => DignityTable {
            exalted: &[(30.0, 33.0)],
            own: &[(90.0, 120.0), (30.0, 60.0)],
            debilitated: &[(210.0, 213.0)],
        },
        Graha::Mars => DignityTable {
            exalted: &[(270.0, 298.0)],
            own: &[(0.0, 30.0), (210.0, 240.0)],
            debilitated: &[(90.0, 118.0)],
        },
        Graha::Mercury => DignityTable {
            exalted: &[(150.0, 165.0)],
            own: &[(60.0, 90.0), (150.0, 180.0)],
            debilitated: &[(330.0, 345.0)],
        },
        Graha::Jupiter => DignityTable {
            exalted: &[(90.0, 95.0)],
            own: &[(240.0, 270.0), (330.0, 360.0)],
            debilitated: &[(270.0, 275.0)],
        },
        Graha::Venus => DignityTable {
            exalted: &[(330.0, 357.0)],
            own: &[(30.0, 60.0), (180.0, 210.0)],
            debilitated: &[(150.0, 177.0)],
        },
        Graha::Saturn => DignityTable {
            exalted: &[(180.0, 200.0)],
            own: &[(270.0, 330.0)],
            debilitated: &[(0.0, 20.0)],
        },
        Graha::Rahu | Graha::Ketu => return None,
    };
    Some(t)
}

fn within(spans: &[DegreeSpan], lon: f64) -> bool {
    spans.iter().any(|&(lo, hi)| lo <= lon && lon <= hi)
}

/// Dignity at a sidereal longitude. Exaltation is checked first, then own
/// sign, then debilitation; the nodes are always neutral.
pub fn dignity(graha: Graha, sidereal_lon_deg: f64) -> Dignity {
    let Some(t) = table(graha) else {
        return Dignity::Neutral;
    };
    let lon = normalize_360(sidereal_lon_deg);
    if within(t.exalted, lon) {
        Dignity::Exalted
    } else if within(t.own, lon) {
        Dignity::OwnSign
    } else if within(t.debilitated, lon) {
        Dignity::Debilitated
    } else {
        Dignity::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mercury_in_virgo() {
        assert_eq!(dignity(Graha::Mercury, 155.0), Dignity::Exalted);
        assert_eq!(dignity(Graha::Mercury, 170.0), Dignity::OwnSign);
        assert_eq!(dignity(Graha::Mercury, 340.0), Dignity::Debilitated);
        assert_eq!(dignity(Graha::Mercury, 10.0), Dignity::Neutral);
    }

    #[test]
    fn exaltation_wins_over_own_sign() {
        // Moon at 31 deg sits in both the exaltation arc and Taurus.
        assert_eq!(dignity(Graha::Moon, 31.0), Dignity::Exalted);
    }

    #[test]
    fn nodes_are_neutral() {
        assert_eq!(dignity(Graha::Rahu, 45.0), Dignity::Neutral);
        assert_eq!(dignity(Graha::Ketu, 225.0).strength(), 50.0);
    }

    #[test]
    fn longitude_wraps() {
        assert_eq!(dignity(Graha::Sun, 365.0), Dignity::Exalted);
        assert_eq!(dignity(Graha::Saturn, -170.0), Dignity::Exalted);
    }
}
