//! Rashi (zodiac sign) and degrees-minutes-seconds position.
//!
//! 12 equal signs of 30 degrees, starting from Mesha at 0 deg sidereal.

use serde::Serialize;

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg};
use crate::graha::Graha;
use crate::util::normalize_360;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Tropical zodiac sign with the same index.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Position in the zodiac, Mesha first.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi at a 0-based index, wrapping past 11.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Sign lord.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Mesha | Self::Vrischika => Graha::Mars,
            Self::Vrishabha | Self::Tula => Graha::Venus,
            Self::Mithuna | Self::Kanya => Graha::Mercury,
            Self::Karka => Graha::Moon,
            Self::Simha => Graha::Sun,
            Self::Dhanu | Self::Meena => Graha::Jupiter,
            Self::Makara | Self::Kumbha => Graha::Saturn,
        }
    }
}

/// Angle split into whole degrees, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

/// Rashi and offset of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Position within the rashi as DMS.
    pub dms: Dms,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Convert decimal degrees to DMS. Negative input is taken by magnitude.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor();
    let rem_min = (d - degrees) * 60.0;
    let minutes = rem_min.floor();
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: (rem_min - minutes) * 60.0,
    }
}

/// Rashi containing a sidereal longitude; any finite input is normalized first.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi_index = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_rashi = lon - f64::from(rashi_index) * 30.0;
    RashiInfo {
        rashi: ALL_RASHIS[rashi_index as usize],
        rashi_index,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}

/// Convenience: rashi from tropical longitude and an ayanamsha system.
pub fn rashi_from_tropical(tropical_lon_deg: f64, system: AyanamshaSystem, jd_tt: f64) -> RashiInfo {
    rashi_from_longitude(tropical_lon_deg - ayanamsha_deg(system, jd_tt))
}
