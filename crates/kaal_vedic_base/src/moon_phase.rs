//! Moon phase buckets and illuminated fraction.

use serde::Serialize;

use crate::util::normalize_360;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

const PHASES: [MoonPhase; 8] = [
    MoonPhase::NewMoon,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::FullMoon,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

impl MoonPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

/// Phase bucket: 8 equal 45-degree slices of the elongation.
pub fn moon_phase_from_elongation(elongation_deg: f64) -> MoonPhase {
    let idx = ((normalize_360(elongation_deg) / 45.0).floor() as usize).min(7);
    PHASES[idx]
}

/// Waxing while elongation is below 180 degrees.
pub fn is_waxing(elongation_deg: f64) -> bool {
    normalize_360(elongation_deg) < 180.0
}

/// Illuminated percentage, rounded to one decimal.
///
/// The phase angle is `180 - folded elongation`, so it is 0 at full moon
/// (100%) and 180 at new moon (0%).
pub fn illumination_percent(elongation_deg: f64) -> f64 {
    let mut folded = normalize_360(elongation_deg);
    if folded > 180.0 {
        folded = 360.0 - folded;
    }
    let phase_angle = (180.0 - folded).to_radians();
    let pct = 100.0 * (1.0 + phase_angle.cos()) / 2.0;
    (pct * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_and_new() {
        assert_eq!(illumination_percent(180.0), 100.0);
        assert_eq!(illumination_percent(0.0), 0.0);
        assert_eq!(illumination_percent(90.0), 50.0);
        assert_eq!(illumination_percent(270.0), 50.0);
    }

    #[test]
    fn illumination_bounded() {
        for i in 0..=720 {
            let p = illumination_percent(f64::from(i) * 0.5);
            assert!((0.0..=100.0).contains(&p));
        }
    }

    #[test]
    fn buckets() {
        assert_eq!(moon_phase_from_elongation(10.0), MoonPhase::NewMoon);
        assert_eq!(moon_phase_from_elongation(100.0), MoonPhase::FirstQuarter);
        assert_eq!(moon_phase_from_elongation(190.0), MoonPhase::FullMoon);
        assert_eq!(moon_phase_from_elongation(336.0), MoonPhase::WaningCrescent);
    }

    #[test]
    fn waxing() {
        assert!(is_waxing(179.0));
        assert!(!is_waxing(181.0));
    }
}
