//! Vimshottari mahadasha sequence from the birth Moon.
//!
//! The starting lord is the lord of the Moon's nakshatra; the first period
//! is shortened by the fraction of that nakshatra already traversed.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};

/// Year length for dasha arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

const ORDER: [Graha; 9] = [
    Graha::Ketu,
    Graha::Venus,
    Graha::Sun,
    Graha::Moon,
    Graha::Mars,
    Graha::Rahu,
    Graha::Jupiter,
    Graha::Saturn,
    Graha::Mercury,
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashaPeriod {
    pub lord: Graha,
    pub start_jd: f64,
    pub end_jd: f64,
}

impl DashaPeriod {
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// Nine mahadashas starting at birth, covering one full 120-year cycle less
/// the elapsed part of the first period.
pub fn vimshottari_mahadashas(birth_jd: f64, moon_sidereal_lon: f64) -> Vec<DashaPeriod> {
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    let start = ORDER
        .iter()
        .position(|&g| g == info.nakshatra.lord())
        .unwrap_or(0);
    let mut out = Vec::with_capacity(9);
    let mut jd = birth_jd;
    for i in 0..9 {
        let lord = ORDER[(start + i) % 9];
        let mut days = lord.vimshottari_years() * DAYS_PER_YEAR;
        if i == 0 {
            days *= 1.0 - info.progress();
        }
        out.push(DashaPeriod {
            lord,
            start_jd: jd,
            end_jd: jd + days,
        });
        jd += days;
    }
    out
}

/// Mahadasha running at `jd`, if within the first cycle.
pub fn current_mahadasha(birth_jd: f64, moon_sidereal_lon: f64, jd: f64) -> Option<DashaPeriod> {
    vimshottari_mahadashas(birth_jd, moon_sidereal_lon)
        .into_iter()
        .find(|p| p.contains(jd))
}

/// Starting lord for a birth nakshatra.
pub fn starting_lord(birth: Nakshatra) -> Graha {
    birth.lord()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nakshatra_lord() {
        // Rohini start -> Moon
        let lon = 3.0 * crate::nakshatra::NAKSHATRA_SPAN_27;
        let d = vimshottari_mahadashas(2_451_545.0, lon);
        assert_eq!(d[0].lord, Graha::Moon);
        assert_eq!(d[1].lord, Graha::Mars);
        assert!((d[0].end_jd - d[0].start_jd - 10.0 * DAYS_PER_YEAR).abs() < 1e-6);
    }

    #[test]
    fn balance_shortens_first_period() {
        let lon = 0.5 * crate::nakshatra::NAKSHATRA_SPAN_27;
        let d = vimshottari_mahadashas(0.0, lon);
        assert_eq!(d[0].lord, Graha::Ketu);
        assert!((d[0].end_jd - 3.5 * DAYS_PER_YEAR).abs() < 1e-6);
        assert!((d[8].end_jd - (120.0 - 3.5) * DAYS_PER_YEAR).abs() < 1e-6);
    }

    #[test]
    fn current_period_lookup() {
        let d = current_mahadasha(0.0, 0.0, 8.0 * DAYS_PER_YEAR).unwrap();
        assert_eq!(d.lord, Graha::Venus);
        assert_eq!(starting_lord(Nakshatra::Revati), Graha::Mercury);
    }
}
