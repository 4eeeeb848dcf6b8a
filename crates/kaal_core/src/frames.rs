//! Ecliptic ↔ equatorial rotations and the obliquity of the ecliptic.
//!
//! All angles are degrees. Source: Meeus, *Astronomical Algorithms*,
//! eqs. 13.3–13.4 and 22.2.

use crate::nutation::nutation;

/// Mean obliquity of the ecliptic at `t` centuries TT from J2000.0.
///
/// ε₀ = 23°26′21.448″ − 46.8150″T − 0.00059″T² + 0.001813″T³
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - 46.815_0 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}

/// True obliquity: mean obliquity plus nutation in obliquity.
pub fn true_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + nutation(t).obliquity_deg
}

/// Ecliptic (λ, β) → equatorial (α, δ), all in degrees. α in [0, 360).
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let (lam, bet, eps) = (
        lon_deg.to_radians(),
        lat_deg.to_radians(),
        obliquity_deg.to_radians(),
    );
    let ra = (lam.sin() * eps.cos() - bet.tan() * eps.sin()).atan2(lam.cos());
    let dec = (bet.sin() * eps.cos() + bet.cos() * eps.sin() * lam.sin()).asin();
    (ra.to_degrees().rem_euclid(360.0), dec.to_degrees())
}

/// Equatorial (α, δ) → ecliptic (λ, β), all in degrees. λ in [0, 360).
pub fn equatorial_to_ecliptic(ra_deg: f64, dec_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let (alp, del, eps) = (
        ra_deg.to_radians(),
        dec_deg.to_radians(),
        obliquity_deg.to_radians(),
    );
    let lon = (alp.sin() * eps.cos() + del.tan() * eps.sin()).atan2(alp.cos());
    let lat = (del.sin() * eps.cos() - del.cos() * eps.sin() * alp.sin()).asin();
    (lon.to_degrees().rem_euclid(360.0), lat.to_degrees())
}

/// Great-circle separation between two ecliptic positions, degrees.
pub fn angular_separation_deg(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let (l1, b1, l2, b2) = (
        lon1.to_radians(),
        lat1.to_radians(),
        lon2.to_radians(),
        lat2.to_radians(),
    );
    let cos_d = b1.sin() * b2.sin() + b1.cos() * b2.cos() * (l1 - l2).cos();
    cos_d.clamp(-1.0, 1.0).acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obliquity_at_j2000() {
        let eps = mean_obliquity_deg(0.0);
        assert!((eps - 23.439_291).abs() < 1e-6, "ε₀ = {eps}");
    }

    #[test]
    fn meeus_example_13a() {
        // Pollux: α = 116.328942°, δ = 28.026183°, ε = 23.4392911° → λ = 113.215630°, β = 6.684170°
        let (lon, lat) = equatorial_to_ecliptic(116.328_942, 28.026_183, 23.439_291_1);
        assert!((lon - 113.215_630).abs() < 1e-5, "λ = {lon}");
        assert!((lat - 6.684_170).abs() < 1e-5, "β = {lat}");
    }

    #[test]
    fn rotation_roundtrip() {
        let eps = 23.44;
        for &(lon, lat) in &[(0.0, 0.0), (123.4, -5.1), (300.0, 2.5), (89.9, 0.0)] {
            let (ra, dec) = ecliptic_to_equatorial(lon, lat, eps);
            let (lon2, lat2) = equatorial_to_ecliptic(ra, dec, eps);
            assert!((lon - lon2).abs() < 1e-9, "{lon} vs {lon2}");
            assert!((lat - lat2).abs() < 1e-9, "{lat} vs {lat2}");
        }
    }

    #[test]
    fn separation_of_opposites() {
        assert!((angular_separation_deg(10.0, 0.0, 190.0, 0.0) - 180.0).abs() < 1e-9);
        assert!(angular_separation_deg(42.0, 1.0, 42.0, 1.0) < 1e-6);
    }
}
