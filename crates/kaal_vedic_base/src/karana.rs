//! Karana (half-tithi) classification.
//!
//! 60 karanas of 6 degrees fill a synodic month. The traditional sequence
//! opens with the fixed Kimstughna, cycles the 7 movable karanas eight
//! times, and closes with the fixed Shakuni, Chatushpada and Naga.

use serde::Serialize;

use crate::util::normalize_360;

/// Elongation covered by one karana.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

const MOVABLE: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Movable (chara) karanas repeat through the month.
    pub const fn is_movable(self) -> bool {
        !matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }

    /// Karana for a 0-based sequence index (0..59).
    pub const fn from_index(index: u8) -> Self {
        match index % 60 {
            0 => Self::Kimstughna,
            57 => Self::Shakuni,
            58 => Self::Chatushpada,
            59 => Self::Naga,
            k => MOVABLE[((k - 1) % 7) as usize],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaPosition {
    pub karana: Karana,
    /// 0-based karana sequence index (0..59).
    pub karana_index: u8,
    /// Continuous karana value in [0, 60).
    pub value: f64,
}

/// Classify an elongation into a karana.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let value = normalize_360(elongation_deg) / KARANA_SEGMENT_DEG;
    let karana_index = (value.floor() as u8).min(59);
    KaranaPosition {
        karana: Karana::from_index(karana_index),
        karana_index,
        value,
    }
}
