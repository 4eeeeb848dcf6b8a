//! Low-precision solar theory.
//!
//! Geometric mean longitude plus equation of centre, then nutation and
//! aberration to get the apparent longitude of date. Accuracy ~0.01°.
//! Source: Meeus, *Astronomical Algorithms*, ch. 25.

use crate::nutation::nutation;

/// Apparent solar coordinates of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Apparent ecliptic longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// Geometric true longitude (no nutation, no aberration), degrees.
    pub true_longitude_deg: f64,
    /// Earth–Sun distance in AU.
    pub distance_au: f64,
}

/// Sun's position at `t` Julian centuries TT from J2000.0.
pub fn solar_position(t: f64) -> SolarPosition {
    let t2 = t * t;
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2).to_radians();
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2;

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    let nu = m + c.to_radians();
    let r = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    // Aberration −20.4898″/R with nutation in longitude.
    let aberration = -0.005_691_611 / r;
    let apparent = true_lon + nutation(t).longitude_deg + aberration;

    SolarPosition {
        longitude_deg: apparent.rem_euclid(360.0),
        true_longitude_deg: true_lon.rem_euclid(360.0),
        distance_au: r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992-10-13 0h TD: ☉ = 199.90988°, λ = 199.90895°, R = 0.99766 AU
        let t = (2_448_908.5 - 2_451_545.0) / 36_525.0;
        let s = solar_position(t);
        assert!((s.true_longitude_deg - 199.909_88).abs() < 1e-3, "☉ = {}", s.true_longitude_deg);
        assert!((s.longitude_deg - 199.908_95).abs() < 2e-3, "λ = {}", s.longitude_deg);
        assert!((s.distance_au - 0.997_66).abs() < 1e-4, "R = {}", s.distance_au);
    }

    #[test]
    fn march_equinox_2024() {
        // 2024-03-20 03:06 UTC: apparent longitude crosses 0°
        let jd = 2_460_389.629_2;
        let s = solar_position((jd - 2_451_545.0) / 36_525.0);
        let off = if s.longitude_deg > 180.0 { s.longitude_deg - 360.0 } else { s.longitude_deg };
        assert!(off.abs() < 0.02, "λ at equinox = {}", s.longitude_deg);
    }
}
