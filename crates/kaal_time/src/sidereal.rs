//! Greenwich/local sidereal time and local mean time.
//!
//! Source: Meeus, *Astronomical Algorithms*, eq. 12.4 (GMST in degrees
//! for any instant of UT).

use serde::Serialize;

use crate::julian::{J2000_JD, jd_to_centuries};

/// Greenwich Mean Sidereal Time in degrees [0, 360).
///
/// θ₀ = 280.46061837 + 360.98564736629·d + 0.000387933·T² − T³/38710000
/// with d = JD − 2451545.0.
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = jd_to_centuries(jd_ut);
    let theta = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local sidereal time in degrees for an east longitude.
pub fn local_sidereal_time_deg(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg(jd_ut) + longitude_east_deg).rem_euclid(360.0)
}

/// Local sidereal time in hours [0, 24).
pub fn local_sidereal_time_hours(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    local_sidereal_time_deg(jd_ut, longitude_east_deg) / 15.0
}

/// Local mean (solar) time of day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LocalMeanTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl std::fmt::Display for LocalMeanTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Local mean time: UTC shifted by longitude/15 hours, wrapped to one day.
pub fn local_mean_time(jd_utc: f64, longitude_east_deg: f64) -> LocalMeanTime {
    let utc_hours = ((jd_utc + 0.5).fract()) * 24.0;
    let lmt_hours = (utc_hours + longitude_east_deg / 15.0).rem_euclid(24.0);
    let total_seconds = (lmt_hours * 3600.0).floor() as u32 % 86_400;
    LocalMeanTime {
        hour: total_seconds / 3600,
        minute: (total_seconds % 3600) / 60,
        second: total_seconds % 60,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT: GMST ≈ 6h 39m 52s ≈ 99.97°
        let g = gmst_deg(2_451_544.5);
        assert!((g - 99.97).abs() < 0.05, "GMST = {g}°, expected ~99.97°");
    }

    #[test]
    fn meeus_example_12a() {
        // 1987-04-10 0h UT → 13h10m46.3668s = 197.693195°
        let g = gmst_deg(2_446_895.5);
        assert!((g - 197.693_195).abs() < 1e-4, "GMST = {g}°");
    }

    #[test]
    fn lst_east_offset() {
        let jd = 2_460_000.5;
        let lst = local_sidereal_time_deg(jd, 90.0);
        let expected = (gmst_deg(jd) + 90.0).rem_euclid(360.0);
        assert!((lst - expected).abs() < 1e-12);
        assert!((0.0..24.0).contains(&local_sidereal_time_hours(jd, 90.0)));
    }

    #[test]
    fn lmt_east_of_greenwich() {
        // 00:00 UTC at 75.7885°E → 05:03:09 LMT
        let lmt = local_mean_time(2_460_732.5, 75.7885);
        assert_eq!(lmt.to_string(), "05:03:09");
    }

    #[test]
    fn lmt_wraps_west() {
        let lmt = local_mean_time(2_460_732.5, -90.0);
        assert_eq!((lmt.hour, lmt.minute), (18, 0));
    }
}
