//! Tarabala (star strength relative to a birth nakshatra) and chandrabala.

use serde::Serialize;

use crate::nakshatra::Nakshatra;

/// The nine taras counted from the birth nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tara {
    Janma,
    Sampat,
    Vipat,
    Kshema,
    Pratyak,
    Sadhaka,
    Vadha,
    Mitra,
    ParamMitra,
}

const TARAS: [Tara; 9] = [
    Tara::Janma,
    Tara::Sampat,
    Tara::Vipat,
    Tara::Kshema,
    Tara::Pratyak,
    Tara::Sadhaka,
    Tara::Vadha,
    Tara::Mitra,
    Tara::ParamMitra,
];

impl Tara {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Janma => "Janma",
            Self::Sampat => "Sampat",
            Self::Vipat => "Vipat",
            Self::Kshema => "Kshema",
            Self::Pratyak => "Pratyak",
            Self::Sadhaka => "Sadhaka",
            Self::Vadha => "Vadha",
            Self::Mitra => "Mitra",
            Self::ParamMitra => "Param Mitra",
        }
    }

    /// Traditional verdict for this tara.
    pub const fn result(self) -> &'static str {
        match self {
            Self::Janma => "Neutral",
            Self::Sampat | Self::Mitra => "Very Good",
            Self::Vipat | Self::Pratyak => "Bad",
            Self::Kshema | Self::Sadhaka => "Good",
            Self::Vadha => "Very Bad",
            Self::ParamMitra => "Excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TarabalaInfo {
    pub birth_nakshatra: Nakshatra,
    pub tara: Tara,
    /// 1-9 position in the tara cycle.
    pub number: u8,
    pub result: &'static str,
}

/// Tarabala for the Moon's current nakshatra counted from `birth`.
pub fn tarabala(birth: Nakshatra, current: Nakshatra) -> TarabalaInfo {
    let count = (current.index() + 27 - birth.index()) % 27 + 1;
    let number = (count - 1) % 9 + 1;
    let tara = TARAS[(number - 1) as usize];
    TarabalaInfo {
        birth_nakshatra: birth,
        tara,
        number,
        result: tara.result(),
    }
}

const CHANDRABALA_NAMES: [&str; 7] = [
    "Very Weak",
    "Weak",
    "Average",
    "Good",
    "Very Good",
    "Excellent",
    "Supreme",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChandrabalaInfo {
    /// 0-6.
    pub points: u8,
    pub strength: &'static str,
}

/// Chandrabala from the 0-based tithi index: `min(6, index % 8)` points.
pub fn chandrabala(tithi_index: u8) -> ChandrabalaInfo {
    let points = (tithi_index % 8).min(6);
    ChandrabalaInfo {
        points,
        strength: CHANDRABALA_NAMES[points as usize],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_nakshatra_is_janma() {
        let t = tarabala(Nakshatra::Rohini, Nakshatra::Rohini);
        assert_eq!(t.tara, Tara::Janma);
        assert_eq!(t.number, 1);
        assert_eq!(t.result, "Neutral");
    }

    #[test]
    fn counts_wrap_around_revati() {
        // Revati (27) from Rohini (4): 27 - 4 + 1 = 24 -> 24 % 9 = 6 -> Sadhaka
        let t = tarabala(Nakshatra::Rohini, Nakshatra::Revati);
        assert_eq!(t.number, 6);
        assert_eq!(t.tara, Tara::Sadhaka);
        // Ashwini (1) from Rohini: 1 + 27 - 4 + 1 = 25 -> 7 -> Vadha
        let t = tarabala(Nakshatra::Rohini, Nakshatra::Ashwini);
        assert_eq!(t.tara, Tara::Vadha);
        assert_eq!(t.result, "Very Bad");
    }

    #[test]
    fn tenth_is_janma_again() {
        let t = tarabala(Nakshatra::Ashwini, Nakshatra::Magha);
        assert_eq!(t.tara, Tara::Janma);
    }

    #[test]
    fn chandrabala_cycles_every_eight() {
        assert_eq!(chandrabala(0).strength, "Very Weak");
        assert_eq!(chandrabala(7).points, 6);
        assert_eq!(chandrabala(8).points, 0);
        assert_eq!(chandrabala(27).points, 3);
        assert_eq!(chandrabala(27).strength, CHANDRABALA_NAMES[3]);
    }
}
