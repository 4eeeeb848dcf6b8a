//! Vaar (weekday).

use serde::{Deserialize, Serialize};

use kaal_time::weekday_from_jd;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// 0 = Sunday .. 6 = Saturday.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 0 = Monday .. 6 = Sunday, the ordering some traditional tables use.
    pub const fn monday_index(self) -> u8 {
        (self as u8 + 6) % 7
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_VAARS[(index % 7) as usize]
    }
}

/// Weekday of the civil date containing `jd`.
pub fn vaar_from_jd(jd: f64) -> Vaar {
    Vaar::from_index(weekday_from_jd(jd))
}

/// Weekday of the local mean solar date (UTC shifted by longitude / 15 hours).
pub fn vaar_for_local_date(jd_utc: f64, longitude_east_deg: f64) -> Vaar {
    vaar_from_jd(jd_utc + longitude_east_deg / 360.0)
}
