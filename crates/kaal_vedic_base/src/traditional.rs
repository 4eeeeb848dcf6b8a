//! Traditional era years and the seasonal label.

use serde::Serialize;

use crate::samvatsara::{Samvatsara, samvatsara_from_year};
use crate::util::normalize_360;

/// Era years for a civil date. New-year boundaries are approximated by the
/// Gregorian month in which each era turns over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraditionalYears {
    pub vikram_samvat: i32,
    pub shaka_samvat: i32,
    pub kali_yuga: i32,
    pub bengali_san: i32,
    /// Name in the 60-year cycle, as used for the Tamil year.
    pub tamil_year: Samvatsara,
}

/// Era years for Gregorian `year` and 1-based `month`.
pub fn traditional_years(year: i32, month: u32) -> TraditionalYears {
    TraditionalYears {
        vikram_samvat: if month >= 4 { year + 57 } else { year + 56 },
        shaka_samvat: if month >= 3 { year - 78 } else { year - 79 },
        kali_yuga: year + 3102,
        bengali_san: if month >= 4 { year - 593 } else { year - 594 },
        tamil_year: samvatsara_from_year(year),
    }
}

const SEASONS: [&str; 12] = [
    "Spring",
    "Late Spring",
    "Summer",
    "Late Summer",
    "Monsoon",
    "Late Monsoon",
    "Autumn",
    "Late Autumn",
    "Winter",
    "Late Winter",
    "Pre-Spring",
    "Late Winter",
];

/// Season label from the Sun's tropical longitude in 30-degree steps.
pub fn season_from_sun_longitude(sun_tropical_deg: f64) -> &'static str {
    let idx = ((normalize_360(sun_tropical_deg) / 30.0).floor() as usize).min(11);
    SEASONS[idx]
}
