//! Tithi (lunar day) classification from Moon-Sun elongation.
//!
//! A synodic month holds 30 tithis of 12 degrees of elongation each. The
//! first 15 make up Shukla paksha (waxing), ending at Purnima; the next 15
//! make up Krishna paksha (waning), ending at Amavasya.

use std::fmt;

use serde::Serialize;

use crate::util::normalize_360;

/// Elongation covered by one tithi.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Mean duration of a tithi in hours (synodic month / 30).
pub const MEAN_TITHI_HOURS: f64 = 23.62;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    /// Waxing half, elongation [0, 180).
    Shukla,
    /// Waning half, elongation [180, 360).
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }

    /// Lowercase label used in festival variants.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shukla => "shukla",
            Self::Krishna => "krishna",
        }
    }
}

impl fmt::Display for Paksha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tithi names. Both pakshas share the first 14; the 15th is Purnima in
/// Shukla paksha and Amavasya in Krishna paksha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tithi {
    Pratipada,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    Purnima,
    Amavasya,
}

const PAKSHA_TITHIS: [Tithi; 14] = [
    Tithi::Pratipada,
    Tithi::Dwitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
];

impl Tithi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pratipada => "Pratipada",
            Self::Dwitiya => "Dwitiya",
            Self::Tritiya => "Tritiya",
            Self::Chaturthi => "Chaturthi",
            Self::Panchami => "Panchami",
            Self::Shashthi => "Shashthi",
            Self::Saptami => "Saptami",
            Self::Ashtami => "Ashtami",
            Self::Navami => "Navami",
            Self::Dashami => "Dashami",
            Self::Ekadashi => "Ekadashi",
            Self::Dwadashi => "Dwadashi",
            Self::Trayodashi => "Trayodashi",
            Self::Chaturdashi => "Chaturdashi",
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
        }
    }

    /// Tithi for a 0-based month index (0 = Shukla Pratipada, 29 = Amavasya).
    pub const fn from_index(index: u8) -> Self {
        let i = index % 30;
        match i {
            14 => Self::Purnima,
            29 => Self::Amavasya,
            _ => PAKSHA_TITHIS[(i % 15) as usize],
        }
    }
}

/// Position of an elongation within the tithi cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiPosition {
    pub tithi: Tithi,
    /// 0-based tithi index (0..29).
    pub tithi_index: u8,
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Continuous tithi value in [0, 30).
    pub value: f64,
    /// Decimal degrees of elongation within this tithi [0, 12).
    pub degrees_in_tithi: f64,
}

impl TithiPosition {
    /// 1-based tithi number within the month (1-30).
    pub fn number(&self) -> u8 {
        self.tithi_index + 1
    }

    /// Continuous 1-based position within the paksha, [1, 16).
    pub fn paksha_position(&self) -> f64 {
        self.value % 15.0 + 1.0
    }

    /// Fraction of the tithi already elapsed, [0, 1).
    pub fn progress(&self) -> f64 {
        self.value.fract()
    }

    /// Approximate hours left in this tithi from the mean tithi length.
    pub fn remaining_hours_mean(&self) -> f64 {
        (1.0 - self.progress()) * MEAN_TITHI_HOURS
    }

    /// Full name such as "Krishna Trayodashi".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.paksha.name(), self.tithi.name())
    }
}

/// Classify an elongation (Moon minus Sun longitude) into a tithi.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let elong = normalize_360(elongation_deg);
    let value = elong / TITHI_SEGMENT_DEG;
    let tithi_index = (value.floor() as u8).min(29);
    let paksha = if tithi_index < 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    TithiPosition {
        tithi: Tithi::from_index(tithi_index),
        tithi_index,
        paksha,
        tithi_in_paksha: tithi_index % 15 + 1,
        value,
        degrees_in_tithi: elong - f64::from(tithi_index) * TITHI_SEGMENT_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_month() {
        let pos = tithi_from_elongation(0.0);
        assert_eq!(pos.tithi, Tithi::Pratipada);
        assert_eq!(pos.paksha, Paksha::Shukla);
        assert_eq!(pos.tithi_in_paksha, 1);
        assert_eq!(pos.number(), 1);
    }

    #[test]
    fn purnima_and_amavasya() {
        let p = tithi_from_elongation(175.0);
        assert_eq!(p.tithi, Tithi::Purnima);
        assert_eq!(p.tithi_in_paksha, 15);
        let a = tithi_from_elongation(355.0);
        assert_eq!(a.tithi, Tithi::Amavasya);
        assert_eq!(a.paksha, Paksha::Krishna);
        assert_eq!(a.number(), 30);
    }

    #[test]
    fn krishna_trayodashi() {
        // tithi 27.7
        let pos = tithi_from_elongation(27.7 * 12.0);
        assert_eq!(pos.tithi, Tithi::Trayodashi);
        assert_eq!(pos.paksha, Paksha::Krishna);
        assert_eq!(pos.tithi_in_paksha, 13);
        assert!((pos.paksha_position() - 13.7).abs() < 1e-9);
        assert_eq!(pos.full_name(), "Krishna Trayodashi");
    }

    #[test]
    fn value_in_range() {
        for i in 0..720 {
            let pos = tithi_from_elongation(f64::from(i) * 0.5 - 1.0);
            assert!((0.0..30.0).contains(&pos.value));
            assert!(pos.tithi_index < 30);
        }
    }

    #[test]
    fn remaining_hours() {
        let pos = tithi_from_elongation(6.0);
        assert!((pos.remaining_hours_mean() - 11.81).abs() < 1e-9);
    }

    #[test]
    fn index_names_cover_both_pakshas() {
        assert_eq!(Tithi::from_index(10), Tithi::Ekadashi);
        assert_eq!(Tithi::from_index(25), Tithi::Ekadashi);
        assert_eq!(Tithi::from_index(15), Tithi::Pratipada);
    }
}
