//! Fixed Gregorian stand-ins for festival rules.
//!
//! Fast and deterministic, with no ephemeris access. Dates can be off by
//! several weeks for lunar rules; eclipses are never produced.

use chrono::{Datelike, Duration, NaiveDate};
use kaal_vedic_base::{Masa, Paksha, Rashi};

use crate::error::FestivalError;
use crate::types::{FestivalDate, FestivalRule, RuleKind};

/// Day of month used for every lunar stand-in.
const LUNAR_STAND_IN_DAY: u32 = 15;

/// Gregorian month in which a lunar month's bright half usually falls.
const fn gregorian_month(masa: Masa) -> u32 {
    match masa {
        Masa::Chaitra => 3,
        Masa::Vaishakha => 4,
        Masa::Jyeshtha => 5,
        Masa::Ashadha => 6,
        Masa::Shravana => 7,
        Masa::Bhadrapada => 8,
        Masa::Ashwin => 9,
        Masa::Kartik => 10,
        Masa::Margashirsha => 11,
        Masa::Pausha => 12,
        Masa::Magha => 1,
        Masa::Phalguna => 2,
    }
}

/// Typical civil date of the Sun's sidereal ingress into a rashi.
pub const fn typical_ingress(rashi: Rashi) -> (u32, u32) {
    match rashi {
        Rashi::Mesha => (4, 13),
        Rashi::Vrishabha => (5, 14),
        Rashi::Mithuna => (6, 14),
        Rashi::Karka => (7, 16),
        Rashi::Simha => (8, 16),
        Rashi::Kanya => (9, 16),
        Rashi::Tula => (10, 17),
        Rashi::Vrischika => (11, 16),
        Rashi::Dhanu => (12, 15),
        Rashi::Makara => (1, 14),
        Rashi::Kumbha => (2, 12),
        Rashi::Meena => (3, 14),
    }
}

/// Typical date the Sun reaches a tropical longitude, from the nearest
/// preceding equinox or solstice.
fn typical_tropical_date(year: i32, longitude_deg: f64) -> Option<NaiveDate> {
    const CARDINAL: [(u32, u32); 4] = [(3, 20), (6, 21), (9, 23), (12, 21)];
    let lon = longitude_deg.rem_euclid(360.0);
    let quadrant = ((lon / 90.0).floor() as usize).min(3);
    let (m, d) = CARDINAL[quadrant];
    let extra = ((lon - 90.0 * quadrant as f64) * 365.2422 / 360.0).round() as i64;
    NaiveDate::from_ymd_opt(year, m, d).map(|base| base + Duration::days(extra))
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, FestivalError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| FestivalError::InvalidInput(format!("no date {year}-{month}-{day}")))
}

pub fn bind(rule: &'static FestivalRule, year: i32) -> Result<Vec<FestivalDate>, FestivalError> {
    let ambiguous = || FestivalError::ResolutionAmbiguous {
        name: rule.name,
        year,
    };
    let stamp = |d: NaiveDate| FestivalDate::new(rule, d, year).with("resolution", "approximate");

    let dates = match rule.rule {
        RuleKind::Lunar { masa, paksha, .. } => {
            let bright = gregorian_month(masa);
            let month = match paksha {
                Paksha::Shukla => bright,
                Paksha::Krishna => bright % 12 + 1,
            };
            vec![
                stamp(date(year, month, LUNAR_STAND_IN_DAY)?)
                    .with("lunar_month", masa.name())
                    .with("paksha", paksha.label()),
            ]
        }
        RuleKind::Sankranti { rashi, day_offset } => {
            let (m, d) = typical_ingress(rashi);
            let day = date(year, m, d)? + Duration::days(i64::from(day_offset));
            vec![stamp(day).with("rashi", rashi.name())]
        }
        RuleKind::Solstice {
            tropical_longitude_deg,
        } => vec![stamp(
            typical_tropical_date(year, tropical_longitude_deg).ok_or_else(ambiguous)?,
        )],
        RuleKind::Nakshatra {
            nakshatra,
            solar_month,
        } => {
            let (m, _) = typical_ingress(solar_month);
            vec![
                stamp(date(year, m % 12 + 1, LUNAR_STAND_IN_DAY)?)
                    .with("nakshatra", nakshatra.name()),
            ]
        }
        RuleKind::Ekadashi => {
            let mut out = Vec::with_capacity(24);
            for month in 1..=12 {
                for (day, paksha) in [(11, Paksha::Shukla), (26, Paksha::Krishna)] {
                    out.push(
                        stamp(date(year, month, day)?)
                            .with("paksha", paksha.label())
                            .with("ekadashi_type", format!("{} Ekadashi", paksha.name())),
                    );
                }
            }
            out
        }
        RuleKind::Eclipse { .. } => Vec::new(),
    };
    Ok(dates
        .into_iter()
        .filter(|f| f.date.year() == year)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::rule_by_name;

    fn one(name: &str, year: i32) -> FestivalDate {
        let mut v = bind(rule_by_name(name).unwrap(), year).unwrap();
        assert_eq!(v.len(), 1, "{name}");
        v.remove(0)
    }

    #[test]
    fn krishna_rules_use_following_month() {
        let d = one("Diwali", 2024);
        assert_eq!(d.date, NaiveDate::from_ymd_opt(2024, 10, 15).unwrap());
        assert_eq!(d.info["paksha"], "krishna");
        let h = one("Holi", 2024);
        assert_eq!(h.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn sankranti_offsets() {
        assert_eq!(
            one("Makar Sankranti", 2025).date,
            NaiveDate::from_ymd_opt(2025, 1, 14).unwrap()
        );
        assert_eq!(
            one("Lohri", 2025).date,
            NaiveDate::from_ymd_opt(2025, 1, 13).unwrap()
        );
        assert_eq!(
            one("Pohela Boishakh", 2025).date,
            NaiveDate::from_ymd_opt(2025, 4, 14).unwrap()
        );
    }

    #[test]
    fn solstices_and_onam() {
        assert_eq!(
            one("Dakshinayana", 2024).date,
            NaiveDate::from_ymd_opt(2024, 6, 21).unwrap()
        );
        assert_eq!(
            one("Uttarayana", 2024).date,
            NaiveDate::from_ymd_opt(2024, 12, 21).unwrap()
        );
        assert_eq!(
            one("Onam", 2024).date,
            NaiveDate::from_ymd_opt(2024, 9, 15).unwrap()
        );
    }

    #[test]
    fn ekadashi_twice_a_month() {
        let v = bind(rule_by_name("Ekadashi").unwrap(), 2024).unwrap();
        assert_eq!(v.len(), 24);
        assert!(v.iter().all(|f| f.info["resolution"] == "approximate"));
    }

    #[test]
    fn no_eclipses() {
        assert!(bind(rule_by_name("Surya Grahan").unwrap(), 2024)
            .unwrap()
            .is_empty());
    }
}
