//! Daily auspicious and inauspicious windows anchored to sunrise and noon.
//!
//! Rahu Kaal, Gulika Kaal and Yamaganda each last 1.5 hours and start at a
//! fixed weekday-specific offset from sunrise. Brahma Muhurta is the
//! 48-minute span ending 48 minutes before sunrise; Abhijit Muhurta is the
//! 48 minutes centred on solar noon.

use serde::Serialize;

use crate::vaar::Vaar;

/// Length of Rahu, Gulika and Yamaganda windows in hours.
pub const KAAL_DURATION_HOURS: f64 = 1.5;

/// Start offsets from sunrise in hours, Sunday..Saturday.
const RAHU_OFFSETS: [f64; 7] = [4.5, 7.5, 1.5, 6.0, 3.0, 5.5, 2.5];
const GULIKA_OFFSETS: [f64; 7] = [6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 7.0];
const YAMAGANDA_OFFSETS: [f64; 7] = [2.0, 1.0, 7.0, 4.5, 6.0, 3.0, 5.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WindowKind {
    RahuKaal,
    GulikaKaal,
    Yamaganda,
    BrahmaMuhurta,
    AbhijitMuhurta,
}

impl WindowKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::RahuKaal => "Rahu Kaal",
            Self::GulikaKaal => "Gulika Kaal",
            Self::Yamaganda => "Yamaganda",
            Self::BrahmaMuhurta => "Brahma Muhurta",
            Self::AbhijitMuhurta => "Abhijit Muhurta",
        }
    }

    pub const fn is_inauspicious(self) -> bool {
        matches!(self, Self::RahuKaal | Self::GulikaKaal | Self::Yamaganda)
    }
}

/// A closed interval of UTC Julian Dates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeWindow {
    pub kind: WindowKind,
    pub start_jd: f64,
    pub end_jd: f64,
}

impl TimeWindow {
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd <= self.end_jd
    }

    /// Whether `[start_jd, end_jd]` intersects this window.
    pub fn overlaps(&self, start_jd: f64, end_jd: f64) -> bool {
        start_jd <= self.end_jd && end_jd >= self.start_jd
    }

    pub fn duration_hours(&self) -> f64 {
        (self.end_jd - self.start_jd) * 24.0
    }
}

/// The five named windows of one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyWindows {
    pub rahu_kaal: TimeWindow,
    pub gulika_kaal: TimeWindow,
    pub yamaganda: TimeWindow,
    pub brahma_muhurta: TimeWindow,
    pub abhijit_muhurta: TimeWindow,
}

impl DailyWindows {
    pub fn all(&self) -> [TimeWindow; 5] {
        [
            self.rahu_kaal,
            self.gulika_kaal,
            self.yamaganda,
            self.brahma_muhurta,
            self.abhijit_muhurta,
        ]
    }
}

fn kaal(kind: WindowKind, sunrise_jd: f64, offset_hours: f64) -> TimeWindow {
    let start_jd = sunrise_jd + offset_hours / 24.0;
    TimeWindow {
        kind,
        start_jd,
        end_jd: start_jd + KAAL_DURATION_HOURS / 24.0,
    }
}

/// Compute the five windows for a day from its sunrise, solar noon and weekday.
pub fn daily_windows(sunrise_jd: f64, solar_noon_jd: f64, vaar: Vaar) -> DailyWindows {
    let day = vaar.index() as usize;
    let minute = 1.0 / 1440.0;
    DailyWindows {
        rahu_kaal: kaal(WindowKind::RahuKaal, sunrise_jd, RAHU_OFFSETS[day]),
        gulika_kaal: kaal(WindowKind::GulikaKaal, sunrise_jd, GULIKA_OFFSETS[day]),
        yamaganda: kaal(WindowKind::Yamaganda, sunrise_jd, YAMAGANDA_OFFSETS[day]),
        brahma_muhurta: TimeWindow {
            kind: WindowKind::BrahmaMuhurta,
            start_jd: sunrise_jd - 96.0 * minute,
            end_jd: sunrise_jd - 48.0 * minute,
        },
        abhijit_muhurta: TimeWindow {
            kind: WindowKind::AbhijitMuhurta,
            start_jd: solar_noon_jd - 24.0 * minute,
            end_jd: solar_noon_jd + 24.0 * minute,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUNRISE: f64 = 2_460_732.5;
    const NOON: f64 = SUNRISE + 0.25;

    #[test]
    fn wednesday_rahu_kaal() {
        let w = daily_windows(SUNRISE, NOON, Vaar::Budhvaar);
        assert!((w.rahu_kaal.start_jd - (SUNRISE + 6.0 / 24.0)).abs() < 1e-8);
        assert!((w.rahu_kaal.duration_hours() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn sunday_tables() {
        let w = daily_windows(SUNRISE, NOON, Vaar::Ravivaar);
        assert!((w.rahu_kaal.start_jd - SUNRISE - 4.5 / 24.0).abs() < 1e-8);
        assert!((w.gulika_kaal.start_jd - SUNRISE - 6.0 / 24.0).abs() < 1e-8);
        assert!((w.yamaganda.start_jd - SUNRISE - 2.0 / 24.0).abs() < 1e-8);
    }

    #[test]
    fn brahma_and_abhijit() {
        let w = daily_windows(SUNRISE, NOON, Vaar::Shanivaar);
        assert!((w.brahma_muhurta.duration_hours() - 0.8).abs() < 1e-6);
        assert!(w.brahma_muhurta.end_jd < SUNRISE);
        assert!(w.abhijit_muhurta.contains(NOON));
        assert!((w.abhijit_muhurta.duration_hours() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn overlap() {
        let w = daily_windows(SUNRISE, NOON, Vaar::Somvaar);
        let r = w.rahu_kaal;
        assert!(r.overlaps(r.start_jd - 0.1, r.start_jd));
        assert!(!r.overlaps(r.end_jd + 0.01, r.end_jd + 0.1));
    }

    #[test]
    fn inauspicious_kinds() {
        let w = daily_windows(SUNRISE, NOON, Vaar::Somvaar);
        let bad = w.all().iter().filter(|t| t.kind.is_inauspicious()).count();
        assert_eq!(bad, 3);
    }
}
