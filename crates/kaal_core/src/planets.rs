//! Planetary positions from Keplerian mean elements.
//!
//! Elements and rates relative to the J2000 ecliptic and equinox, valid
//! 1800–2050 AD. Heliocentric positions of the planet and the Earth–Moon
//! barycentre are differenced, then precessed to the equinox of date.
//! Source: Standish, "Keplerian Elements for Approximate Positions of the
//! Major Planets" (JPL), table 1.

use std::f64::consts::TAU;

use crate::Body;

/// Mean elements at J2000 and their rates per Julian century:
/// a (AU), e, I (°), L (°), ϖ (°), Ω (°).
#[derive(Debug, Clone, Copy)]
struct Elements {
    a: [f64; 2],
    e: [f64; 2],
    i: [f64; 2],
    l: [f64; 2],
    peri: [f64; 2],
    node: [f64; 2],
}

const MERCURY: Elements = Elements {
    a: [0.387_099_27, 0.000_000_37],
    e: [0.205_635_93, 0.000_019_06],
    i: [7.004_979_02, -0.005_947_49],
    l: [252.250_323_50, 149_472.674_111_75],
    peri: [77.457_796_28, 0.160_476_89],
    node: [48.330_765_93, -0.125_340_81],
};

const VENUS: Elements = Elements {
    a: [0.723_335_66, 0.000_003_90],
    e: [0.006_776_72, -0.000_041_07],
    i: [3.394_676_05, -0.000_788_90],
    l: [181.979_099_50, 58_517.815_387_29],
    peri: [131.602_467_18, 0.002_683_29],
    node: [76.679_842_55, -0.277_694_18],
};

const EARTH_MOON_BARY: Elements = Elements {
    a: [1.000_002_61, 0.000_005_62],
    e: [0.016_711_23, -0.000_043_92],
    i: [-0.000_015_31, -0.012_946_68],
    l: [100.464_571_66, 35_999.372_449_81],
    peri: [102.937_681_93, 0.323_273_64],
    node: [0.0, 0.0],
};

const MARS: Elements = Elements {
    a: [1.523_710_34, 0.000_018_47],
    e: [0.093_394_10, 0.000_078_82],
    i: [1.849_691_42, -0.008_131_31],
    l: [-4.553_432_05, 19_140.302_684_99],
    peri: [-23.943_629_59, 0.444_410_88],
    node: [49.559_538_91, -0.292_573_43],
};

const JUPITER: Elements = Elements {
    a: [5.202_887_00, -0.000_116_07],
    e: [0.048_386_24, -0.000_132_53],
    i: [1.304_396_95, -0.001_837_14],
    l: [34.396_440_51, 3_034.746_127_75],
    peri: [14.728_479_83, 0.212_526_68],
    node: [100.473_909_09, 0.204_691_06],
};

const SATURN: Elements = Elements {
    a: [9.536_675_94, -0.001_250_60],
    e: [0.053_861_79, -0.000_509_91],
    i: [2.485_991_87, 0.001_936_09],
    l: [49.954_244_23, 1_222.493_622_01],
    peri: [92.598_878_31, -0.418_972_16],
    node: [113.662_424_48, -0.288_677_94],
};

/// Earliest JD TT the element table is fitted for (1800-01-01).
pub const ELEMENTS_VALID_FROM_JD: f64 = 2_378_496.5;

/// End of the element table's fitted span (2051-01-01 0h).
pub const ELEMENTS_VALID_TO_JD: f64 = 2_470_171.5;

/// Days the default provider extrapolates past either end of the fitted
/// span. Two lunations, so year-long scans of 1800 and 2050 can reach the
/// bracketing new moons.
pub const COVERAGE_MARGIN_DAYS: f64 = 60.0;

/// Maximum Kepler-equation iterations.
const KEPLER_MAX_ITERATIONS: usize = 30;

/// Kepler-equation convergence in radians.
const KEPLER_TOLERANCE: f64 = 1.0e-12;

fn elements_for(body: Body) -> Option<&'static Elements> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Sun | Body::Moon => None,
    }
}

/// Solve E − e·sin E = M for E (radians).
fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let m = mean_anomaly.rem_euclid(TAU);
    let mut ecc_anom = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta = (ecc_anom - e * ecc_anom.sin() - m) / (1.0 - e * ecc_anom.cos());
        ecc_anom -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            break;
        }
    }
    ecc_anom
}

/// Heliocentric J2000 ecliptic rectangular coordinates in AU.
fn heliocentric_xyz(el: &Elements, t: f64) -> [f64; 3] {
    let at = |p: [f64; 2]| p[0] + p[1] * t;
    let a = at(el.a);
    let e = at(el.e);
    let inc = at(el.i).to_radians();
    let l = at(el.l);
    let peri = at(el.peri);
    let node = at(el.node);

    let omega = (peri - node).to_radians();
    let node = node.to_radians();
    let m = (l - peri).to_radians();

    let ea = solve_kepler(m, e);
    let xp = a * (ea.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ea.sin();

    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = inc.sin_cos();

    [
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        (so * si) * xp + (co * si) * yp,
    ]
}

/// Geocentric ecliptic `(lon_deg, lat_deg, distance_au)` of a planet,
/// mean equinox of date, without nutation.
///
/// Returns `None` for the Sun and Moon, which have their own theories.
pub fn planet_geocentric(body: Body, t: f64) -> Option<(f64, f64, f64)> {
    let el = elements_for(body)?;
    let p = heliocentric_xyz(el, t);
    let earth = heliocentric_xyz(&EARTH_MOON_BARY, t);
    let (x, y, z) = (p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]);

    let dist = (x * x + y * y + z * z).sqrt();
    let lon_j2000 = y.atan2(x).to_degrees();
    let lat = z.atan2((x * x + y * y).sqrt()).to_degrees();

    // General precession in longitude, J2000 → date.
    let precession = (5_029.096_6 * t + 1.111_13 * t * t) / 3600.0;
    Some(((lon_j2000 + precession).rem_euclid(360.0), lat, dist))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kepler_circular_orbit() {
        assert!((solve_kepler(1.0, 0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn kepler_satisfies_equation() {
        let e = 0.2;
        let m = 2.5_f64;
        let ea = solve_kepler(m, e);
        assert!((ea - e * ea.sin() - m).abs() < 1e-10);
    }

    #[test]
    fn earth_at_one_au() {
        let p = heliocentric_xyz(&EARTH_MOON_BARY, 0.25);
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((r - 1.0).abs() < 0.02, "r = {r}");
    }

    #[test]
    fn sun_and_moon_not_served() {
        assert!(planet_geocentric(Body::Sun, 0.0).is_none());
        assert!(planet_geocentric(Body::Moon, 0.0).is_none());
    }

    #[test]
    fn venus_meeus_example_33a() {
        // 1992-12-20 0h TD: apparent λ = 313.08102°, β = −2.08474°
        let t = (2_448_976.5 - 2_451_545.0) / 36_525.0;
        let (lon, lat, _) = planet_geocentric(Body::Venus, t).unwrap();
        assert!((lon - 313.081).abs() < 0.1, "λ = {lon}");
        assert!((lat + 2.085).abs() < 0.1, "β = {lat}");
    }
}
