//! Masa (lunar month) and ayana.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Masa {
    Chaitra,
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashwin,
    Kartik,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaishakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashwin,
    Masa::Kartik,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashwin => "Ashwin",
            Self::Kartik => "Kartik",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_MASAS[(index % 12) as usize]
    }

    /// The month before this one.
    pub const fn previous(self) -> Self {
        Self::from_index(self as u8 + 11)
    }
}

/// Amanta masa named after the Sun's sidereal rashi at the new moon that
/// ends the month: Mesha (0) gives Chaitra.
pub const fn masa_from_rashi_index(rashi_index: u8) -> Masa {
    Masa::from_index(rashi_index)
}

/// Half-year by the Sun's course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Ayana {
    /// Northward course, Makara to Mithuna.
    Uttarayana,
    /// Southward course, Karka to Dhanu.
    Dakshinayana,
}

impl Ayana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uttarayana => "Uttarayana",
            Self::Dakshinayana => "Dakshinayana",
        }
    }
}

/// Ayana from the Sun's longitude: [270, 360) and [0, 90) are Uttarayana.
pub fn ayana_from_longitude(sun_lon_deg: f64) -> Ayana {
    let lon = crate::util::normalize_360(sun_lon_deg);
    if !(90.0..270.0).contains(&lon) {
        Ayana::Uttarayana
    } else {
        Ayana::Dakshinayana
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesha_is_chaitra() {
        assert_eq!(masa_from_rashi_index(0), Masa::Chaitra);
        assert_eq!(masa_from_rashi_index(11), Masa::Phalguna);
    }

    #[test]
    fn previous_wraps() {
        assert_eq!(Masa::Chaitra.previous(), Masa::Phalguna);
        assert_eq!(Masa::Kartik.previous(), Masa::Ashwin);
    }

    #[test]
    fn ayana_split() {
        assert_eq!(ayana_from_longitude(280.0), Ayana::Uttarayana);
        assert_eq!(ayana_from_longitude(45.0), Ayana::Uttarayana);
        assert_eq!(ayana_from_longitude(90.0), Ayana::Dakshinayana);
    }
}
