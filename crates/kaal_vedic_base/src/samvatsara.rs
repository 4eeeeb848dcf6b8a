//! Samvatsara: the 60-year Jovian cycle used for Tamil and Telugu year names.
//!
//! CE 1987 is Prabhava (order 1); the cycle repeats every 60 years.

use std::fmt;

use serde::Serialize;

/// CE year that starts a cycle with Prabhava.
pub const SAMVATSARA_EPOCH_YEAR: i32 = 1987;

const NAMES: [&str; 60] = [
    "Prabhava",
    "Vibhava",
    "Shukla",
    "Pramoda",
    "Prajapati",
    "Angirasa",
    "Shrimukha",
    "Bhava",
    "Yuva",
    "Dhata",
    "Ishvara",
    "Bahudhanya",
    "Pramathi",
    "Vikrama",
    "Vrusha",
    "Chitrabhanu",
    "Svabhanu",
    "Tarana",
    "Parthiva",
    "Vyaya",
    "Sarvajeeth",
    "Sarvadhari",
    "Virodhi",
    "Vikrita",
    "Khara",
    "Nandana",
    "Vijaya",
    "Jaya",
    "Manmatha",
    "Durmukhi",
    "Hemalamba",
    "Vilamba",
    "Vikari",
    "Sharvari",
    "Plava",
    "Shubhakrit",
    "Sobhakrit",
    "Krodhi",
    "Vishvavasu",
    "Parabhava",
    "Plavanga",
    "Kilaka",
    "Saumya",
    "Sadharana",
    "Virodhikrit",
    "Paridhavi",
    "Pramadi",
    "Ananda",
    "Rakshasa",
    "Nala",
    "Pingala",
    "Kalayukti",
    "Siddharthi",
    "Raudra",
    "Durmati",
    "Dundubhi",
    "Rudhirodgari",
    "Raktakshi",
    "Krodhana",
    "Akshaya",
];

/// A year of the 60-year cycle, stored as its 0-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub struct Samvatsara(u8);

impl Samvatsara {
    /// Samvatsara at 0-based cycle position, `None` for 60 and above.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 60 { Some(Self(index)) } else { None }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// 1-based order in the cycle (1 = Prabhava).
    pub const fn order(self) -> u8 {
        self.0 + 1
    }

    pub const fn name(self) -> &'static str {
        NAMES[self.0 as usize]
    }
}

impl From<Samvatsara> for &'static str {
    fn from(s: Samvatsara) -> Self {
        s.name()
    }
}

impl fmt::Display for Samvatsara {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Samvatsara for a CE year.
pub fn samvatsara_from_year(ce_year: i32) -> Samvatsara {
    Samvatsara((ce_year - SAMVATSARA_EPOCH_YEAR).rem_euclid(60) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_distinct() {
        let mut names = NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 60);
    }

    #[test]
    fn epoch_year_is_prabhava() {
        let s = samvatsara_from_year(1987);
        assert_eq!(s.name(), "Prabhava");
        assert_eq!(s.order(), 1);
    }

    #[test]
    fn wraps_after_sixty() {
        assert_eq!(samvatsara_from_year(2047), samvatsara_from_year(1987));
    }

    #[test]
    fn year_2025() {
        // 2025 - 1987 = 38
        assert_eq!(samvatsara_from_year(2025).name(), "Vishvavasu");
    }

    #[test]
    fn before_epoch() {
        let s = samvatsara_from_year(1986);
        assert_eq!(s.name(), "Akshaya");
        assert_eq!(s.order(), 60);
    }

    #[test]
    fn from_index_bounds() {
        assert!(Samvatsara::from_index(59).is_some());
        assert!(Samvatsara::from_index(60).is_none());
    }
}
