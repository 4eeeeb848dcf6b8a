//! Yoga (luni-solar combination) from the sum of sidereal longitudes.

use serde::Serialize;

use crate::util::normalize_360;

/// Span of one yoga: 360/27 degrees.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// 1-based yoga number.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaPosition {
    pub yoga: Yoga,
    /// 0-based yoga index (0..26).
    pub yoga_index: u8,
    /// Continuous yoga value in [0, 27).
    pub value: f64,
}

/// Classify `(sun_sid + moon_sid) mod 360` into a yoga.
pub fn yoga_from_sum(sidereal_sum_deg: f64) -> YogaPosition {
    let value = normalize_360(sidereal_sum_deg) / YOGA_SEGMENT_DEG;
    let yoga_index = (value.floor() as u8).min(26);
    YogaPosition {
        yoga: ALL_YOGAS[yoga_index as usize],
        yoga_index,
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        assert_eq!(yoga_from_sum(0.0).yoga, Yoga::Vishkambha);
        assert_eq!(yoga_from_sum(359.99).yoga, Yoga::Vaidhriti);
        assert_eq!(yoga_from_sum(720.5).yoga, Yoga::Vishkambha);
    }

    #[test]
    fn numbers() {
        assert_eq!(Yoga::Vishkambha.number(), 1);
        assert_eq!(Yoga::Siddha.number(), 21);
        assert_eq!(Yoga::Vaidhriti.number(), 27);
    }

    #[test]
    fn boundaries() {
        for i in 0..27u8 {
            let y = yoga_from_sum(f64::from(i) * YOGA_SEGMENT_DEG + 0.01);
            assert_eq!(y.yoga_index, i);
        }
    }
}
