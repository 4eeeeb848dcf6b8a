//! Ayanamsha computation for 10 sidereal reference systems.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (anchored
//! to the vernal equinox) and a sidereal zodiac (anchored to fixed stars).
//! Each system is a linear precession model: a J2000.0 reference value plus
//! a constant annual rate, with small polynomial terms for three systems.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use kaal_time::J2000_JD;
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::util::normalize_360;

/// Sidereal reference systems for ayanamsha computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AyanamshaSystem {
    /// Lahiri (Chitrapaksha): Spica at 0 Libra sidereal.
    /// Indian government standard (Calendar Reform Committee, 1957).
    Lahiri,

    /// B.V. Raman: from "Hindu Predictive Astrology".
    Raman,

    /// Krishnamurti Paddhati (KP): minimal offset from Lahiri.
    Krishnamurti,

    /// Sri Yukteshwar: from "The Holy Science" (1894).
    Yukteshwar,

    /// Surya Siddhanta: traditional 54 arcsec/yr precession.
    SuryaSiddhanta,

    /// Fagan-Bradley: primary Western sidereal system.
    FaganBradley,

    /// Robert DeLuce ayanamsha (1930s).
    DeLuce,

    /// Pushya Paksha: delta Cancri at 16 deg Cancer.
    PushyaPaksha,

    /// Galactic Center at 0 deg Sagittarius sidereal.
    GalacticCenter,

    /// True Citra: Lahiri anchor with Spica's proper motion applied.
    TrueCitra,
}

/// All 10 ayanamsha systems in enum order.
const ALL_SYSTEMS: [AyanamshaSystem; 10] = [
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::Raman,
    AyanamshaSystem::Krishnamurti,
    AyanamshaSystem::Yukteshwar,
    AyanamshaSystem::SuryaSiddhanta,
    AyanamshaSystem::FaganBradley,
    AyanamshaSystem::DeLuce,
    AyanamshaSystem::PushyaPaksha,
    AyanamshaSystem::GalacticCenter,
    AyanamshaSystem::TrueCitra,
];

impl AyanamshaSystem {
    /// Reference ayanamsha at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri => 23.85209,
            Self::Raman => 21.45292,
            Self::Krishnamurti => 23.86388,
            Self::Yukteshwar => 22.46667,
            Self::SuryaSiddhanta => 22.46157,
            Self::FaganBradley => 24.74204,
            Self::DeLuce => 24.02958,
            Self::PushyaPaksha => 25.11667,
            Self::GalacticCenter => 26.96667,
            Self::TrueCitra => 23.86289,
        }
    }

    /// Annual precession rate in arcseconds per Julian year.
    pub const fn rate_arcsec_per_year(self) -> f64 {
        match self {
            Self::Lahiri => 50.29,
            Self::Raman => 50.26,
            Self::Krishnamurti => 50.29,
            Self::Yukteshwar => 50.33,
            Self::SuryaSiddhanta => 54.0,
            Self::FaganBradley => 50.25,
            Self::DeLuce => 50.27,
            Self::PushyaPaksha => 50.29,
            Self::GalacticCenter => 50.29,
            Self::TrueCitra => 50.29,
        }
    }

    /// Canonical lowercase identifier.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Lahiri => "lahiri",
            Self::Raman => "raman",
            Self::Krishnamurti => "krishnamurti",
            Self::Yukteshwar => "yukteshwar",
            Self::SuryaSiddhanta => "surya_siddhanta",
            Self::FaganBradley => "fagan_bradley",
            Self::DeLuce => "deluce",
            Self::PushyaPaksha => "pushya_paksha",
            Self::GalacticCenter => "galactic_center",
            Self::TrueCitra => "true_citra",
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "Lahiri",
            Self::Raman => "Raman",
            Self::Krishnamurti => "Krishnamurti",
            Self::Yukteshwar => "Sri Yukteshwar",
            Self::SuryaSiddhanta => "Surya Siddhanta",
            Self::FaganBradley => "Fagan-Bradley",
            Self::DeLuce => "DeLuce",
            Self::PushyaPaksha => "Pushya Paksha",
            Self::GalacticCenter => "Galactic Center",
            Self::TrueCitra => "True Citra",
        }
    }

    /// One-line description of the anchor.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Lahiri => "Indian government standard, Spica at 0 Libra",
            Self::Raman => "B.V. Raman system, zero year near 397 CE",
            Self::Krishnamurti => "Krishnamurti Paddhati, close to Lahiri",
            Self::Yukteshwar => "Sri Yukteshwar, The Holy Science",
            Self::SuryaSiddhanta => "Surya Siddhanta, 54 arcsec per year",
            Self::FaganBradley => "Western sidereal, Synetic Vernal Point",
            Self::DeLuce => "Robert DeLuce",
            Self::PushyaPaksha => "delta Cancri at 16 Cancer",
            Self::GalacticCenter => "Galactic Center at 0 Sagittarius",
            Self::TrueCitra => "Spica at 0 Libra with proper motion",
        }
    }

    /// Small polynomial correction in degrees for centuries `t` past J2000.
    fn polynomial_deg(self, t: f64) -> f64 {
        match self {
            Self::Lahiri => (0.000139 * t * t + 0.000_000_2 * t * t * t) / 3600.0,
            Self::Krishnamurti => 0.000144 * t * t / 3600.0,
            Self::TrueCitra => 0.000035 * t / 3600.0,
            _ => 0.0,
        }
    }

    /// All 10 defined ayanamsha systems.
    pub const fn all() -> &'static [AyanamshaSystem] {
        &ALL_SYSTEMS
    }
}

impl fmt::Display for AyanamshaSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AyanamshaSystem {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "lahiri" | "chitrapaksha" => Ok(Self::Lahiri),
            "raman" => Ok(Self::Raman),
            "kp" | "krishnamurti" => Ok(Self::Krishnamurti),
            "yukteshwar" | "sriyukteshwar" => Ok(Self::Yukteshwar),
            "suryasiddhanta" => Ok(Self::SuryaSiddhanta),
            "faganbradley" | "fagan" => Ok(Self::FaganBradley),
            "deluce" => Ok(Self::DeLuce),
            "pushyapaksha" | "pushya" => Ok(Self::PushyaPaksha),
            "galacticcenter" | "galactic" => Ok(Self::GalacticCenter),
            "truecitra" | "truechitra" => Ok(Self::TrueCitra),
            _ => Err(VedicError::UnsupportedSystem(s.to_string())),
        }
    }
}

/// Static description of one system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AyanamshaInfo {
    pub system: AyanamshaSystem,
    pub name: &'static str,
    pub reference_j2000_deg: f64,
    pub rate_arcsec_per_year: f64,
    pub description: &'static str,
}

/// Describe a system.
pub fn system_info(system: AyanamshaSystem) -> AyanamshaInfo {
    AyanamshaInfo {
        system,
        name: system.name(),
        reference_j2000_deg: system.reference_j2000_deg(),
        rate_arcsec_per_year: system.rate_arcsec_per_year(),
        description: system.description(),
    }
}

/// Ayanamsha in degrees at a TT Julian Date.
///
/// # Formula
/// `value = reference_j2000 + T · rate · 100 / 3600 + polynomial(T)`
///
/// where T is Julian centuries of TT since J2000.0. The rate is per year,
/// so one century contributes 100 rate units.
pub fn ayanamsha_deg(system: AyanamshaSystem, jd_tt: f64) -> f64 {
    let t = (jd_tt - J2000_JD) / 36525.0;
    let years = t * 100.0;
    system.reference_j2000_deg()
        + years * system.rate_arcsec_per_year() / 3600.0
        + system.polynomial_deg(t)
}

/// Tropical to sidereal longitude, result in [0, 360).
pub fn tropical_to_sidereal(tropical_deg: f64, jd_tt: f64, system: AyanamshaSystem) -> f64 {
    normalize_360(tropical_deg - ayanamsha_deg(system, jd_tt))
}

/// Sidereal to tropical longitude, result in [0, 360).
pub fn sidereal_to_tropical(sidereal_deg: f64, jd_tt: f64, system: AyanamshaSystem) -> f64 {
    normalize_360(sidereal_deg + ayanamsha_deg(system, jd_tt))
}

/// One row of a multi-system comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AyanamshaComparison {
    pub system: AyanamshaSystem,
    pub value_deg: f64,
    /// `value(system) - value(Lahiri)`.
    pub diff_from_lahiri_deg: f64,
}

/// Evaluate every system at one epoch, in enum order.
pub fn compare_all(jd_tt: f64) -> Vec<AyanamshaComparison> {
    let lahiri = ayanamsha_deg(AyanamshaSystem::Lahiri, jd_tt);
    ALL_SYSTEMS
        .iter()
        .map(|&system| {
            let value_deg = ayanamsha_deg(system, jd_tt);
            AyanamshaComparison {
                system,
                value_deg,
                diff_from_lahiri_deg: value_deg - lahiri,
            }
        })
        .collect()
}

/// Map form of [`compare_all`]: system to degrees.
pub fn compare_all_map(jd_tt: f64) -> BTreeMap<AyanamshaSystem, f64> {
    ALL_SYSTEMS
        .iter()
        .map(|&s| (s, ayanamsha_deg(s, jd_tt)))
        .collect()
}

/// Ayanamsha at 1 January 00:00 TT of every `step`-th year in
/// `start_year..=end_year`.
pub fn historical_values(
    system: AyanamshaSystem,
    start_year: i32,
    end_year: i32,
    step: u32,
) -> Result<Vec<(i32, f64)>, VedicError> {
    if step == 0 || end_year < start_year {
        return Err(VedicError::InvalidInput(format!(
            "year range {start_year}..={end_year} step {step}"
        )));
    }
    Ok((start_year..=end_year)
        .step_by(step as usize)
        .map(|y| {
            let jd = kaal_time::calendar_to_jd(y, 1, 1.0);
            (y, ayanamsha_deg(system, jd))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_is_applied_per_year() {
        // Raman carries no polynomial: one century adds 100 annual rates.
        let drift = ayanamsha_deg(AyanamshaSystem::Raman, J2000_JD + 36525.0)
            - ayanamsha_deg(AyanamshaSystem::Raman, J2000_JD);
        assert!((drift - 50.26 * 100.0 / 3600.0).abs() < 1e-9, "drift {drift}");
        // Lahiri: about 1.397° per century plus a sub-arcsecond T² term.
        let lahiri = ayanamsha_deg(AyanamshaSystem::Lahiri, J2000_JD + 36525.0) - 23.85209;
        assert!((lahiri - 1.396_944).abs() < 1e-5, "lahiri {lahiri}");
    }

    #[test]
    fn all_systems_count() {
        assert_eq!(AyanamshaSystem::all().len(), 10);
    }

    #[test]
    fn lahiri_at_j2000() {
        let val = ayanamsha_deg(AyanamshaSystem::Lahiri, J2000_JD);
        assert!((val - 23.85209).abs() < 1e-15, "Lahiri at J2000 = {val}");
    }

    #[test]
    fn one_century_drift() {
        let at_0 = ayanamsha_deg(AyanamshaSystem::Lahiri, J2000_JD);
        let at_1 = ayanamsha_deg(AyanamshaSystem::Lahiri, J2000_JD + 36525.0);
        // 50.29" * 100 = 1.397 deg
        assert!((at_1 - at_0 - 1.397).abs() < 0.001, "drift = {}", at_1 - at_0);
    }

    #[test]
    fn increases_with_time() {
        for &sys in AyanamshaSystem::all() {
            let a = ayanamsha_deg(sys, J2000_JD - 20000.0);
            let b = ayanamsha_deg(sys, J2000_JD);
            let c = ayanamsha_deg(sys, J2000_JD + 20000.0);
            assert!(a < b && b < c, "{sys:?} not increasing");
        }
    }

    #[test]
    fn roundtrip_sidereal_tropical() {
        let jd = 2_460_732.5;
        for &sys in AyanamshaSystem::all() {
            for lon in [0.0, 0.5, 123.456, 359.9] {
                let back = sidereal_to_tropical(tropical_to_sidereal(lon, jd, sys), jd, sys);
                let diff = (back - lon).abs();
                assert!(diff < 1e-9 || (diff - 360.0).abs() < 1e-9, "{sys:?} {lon}");
            }
        }
    }

    #[test]
    fn historical_rejects_zero_step() {
        assert!(historical_values(AyanamshaSystem::Raman, 2000, 2010, 0).is_err());
        assert!(historical_values(AyanamshaSystem::Raman, 2010, 2000, 1).is_err());
    }

    #[test]
    fn parse_ids() {
        assert_eq!("KP".parse::<AyanamshaSystem>(), Ok(AyanamshaSystem::Krishnamurti));
        assert_eq!(
            "fagan-bradley".parse::<AyanamshaSystem>(),
            Ok(AyanamshaSystem::FaganBradley)
        );
        for &sys in AyanamshaSystem::all() {
            assert_eq!(sys.id().parse::<AyanamshaSystem>(), Ok(sys));
        }
    }

    #[test]
    fn parse_unknown_is_unsupported() {
        assert!(matches!(
            "hipparchos".parse::<AyanamshaSystem>(),
            Err(VedicError::UnsupportedSystem(_))
        ));
    }

    #[test]
    fn comparison_relative_to_lahiri() {
        let rows = compare_all(2_460_732.5);
        assert_eq!(rows.len(), 10);
        let lahiri = rows[0].value_deg;
        assert_eq!(rows[0].diff_from_lahiri_deg, 0.0);
        for r in &rows {
            assert!(r.value_deg.is_finite());
            assert!((r.diff_from_lahiri_deg - (r.value_deg - lahiri)).abs() < 1e-12);
        }
    }

    #[test]
    fn comparison_map_matches_rows() {
        let map = compare_all_map(2_451_545.0);
        assert_eq!(map.len(), 10);
        assert_eq!(map[&AyanamshaSystem::Raman], 21.45292);
    }

    #[test]
    fn historical_values_are_ordered() {
        let v = historical_values(AyanamshaSystem::Lahiri, 1900, 2100, 100).unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v[1].0, 2000);
        assert!(v[0].1 < v[1].1 && v[1].1 < v[2].1);
    }
}
