//! Binding rules to real days from the sunrise table and event searches.
//!
//! A lunar rule binds to the first day of its (non-adhika) month whose
//! sunrise tithi is the target. If the tithi begins and ends between two
//! sunrises (kshaya) it binds to the day it falls on.

use chrono::{Datelike, Duration, NaiveDate};
use kaal_core::EphemerisProvider;
use kaal_panchang::{
    LunarPhaseEvent, PanchangCalculator, SankrantiConfig, next_solar_longitude,
    next_specific_sankranti, search_amavasyas, search_purnimas,
};
use kaal_time::{Instant, calendar_to_jd};
use kaal_vedic_base::{Masa, Paksha};

use crate::calendar::{DayInfo, YearTable};
use crate::error::FestivalError;
use crate::resolver::FestivalConfig;
use crate::types::{EclipseKind, FestivalDate, FestivalRule, RuleKind, tithi_number};

/// Moon latitude limit at new moon for a solar eclipse candidate.
pub const SOLAR_ECLIPSE_LIMIT_DEG: f64 = 1.5;
/// Moon latitude limit at full moon for a lunar eclipse candidate.
pub const LUNAR_ECLIPSE_LIMIT_DEG: f64 = 1.0;

/// Whether `target` lies strictly between `from` and `to` going forward on
/// a cycle of `len` values numbered from 1.
fn skipped(from: u8, to: u8, target: u8, len: i32) -> bool {
    let ahead = (i32::from(target) - i32::from(from)).rem_euclid(len);
    let span = (i32::from(to) - i32::from(from)).rem_euclid(len);
    0 < ahead && ahead < span
}

/// First day where `pred` holds and the sunrise value equals `target`,
/// else the first day where `target` is skipped before the next sunrise.
/// A skipped value may open its month, so either sunrise may satisfy
/// `pred` in that case.
fn first_binding<'t>(
    table: &'t YearTable,
    pred: impl Fn(&DayInfo) -> bool,
    value: impl Fn(&DayInfo) -> u8,
    target: u8,
    cycle: i32,
) -> Option<&'t DayInfo> {
    table
        .day_pairs()
        .find(|(d, _)| pred(d) && value(d) == target)
        .or_else(|| {
            table
                .day_pairs()
                .find(|(d, next)| {
                    (pred(d) || pred(next)) && skipped(value(d), value(next), target, cycle)
                })
        })
        .map(|(d, _)| d)
}

const fn ekadashi_name(masa: Masa, paksha: Paksha, adhika: bool) -> &'static str {
    if adhika {
        return match paksha {
            Paksha::Shukla => "Padmini",
            Paksha::Krishna => "Parama",
        };
    }
    let pair = match masa {
        Masa::Chaitra => ("Kamada", "Varuthini"),
        Masa::Vaishakha => ("Mohini", "Apara"),
        Masa::Jyeshtha => ("Nirjala", "Yogini"),
        Masa::Ashadha => ("Devshayani", "Kamika"),
        Masa::Shravana => ("Shravana Putrada", "Aja"),
        Masa::Bhadrapada => ("Parivartini", "Indira"),
        Masa::Ashwin => ("Papankusha", "Rama"),
        Masa::Kartik => ("Prabodhini", "Utpanna"),
        Masa::Margashirsha => ("Mokshada", "Saphala"),
        Masa::Pausha => ("Pausha Putrada", "Shattila"),
        Masa::Magha => ("Jaya", "Vijaya"),
        Masa::Phalguna => ("Amalaki", "Papmochani"),
    };
    match paksha {
        Paksha::Shukla => pair.0,
        Paksha::Krishna => pair.1,
    }
}

fn local_date(instant: &Instant, config: &FestivalConfig) -> Result<NaiveDate, FestivalError> {
    let utc = instant.to_datetime()?;
    Ok((utc + Duration::minutes(i64::from(config.utc_offset_minutes))).date_naive())
}

fn exact_time(instant: &Instant) -> Result<String, FestivalError> {
    Ok(instant.to_datetime()?.to_rfc3339())
}

pub fn bind<P: EphemerisProvider>(
    calc: &PanchangCalculator<P>,
    table: &YearTable,
    rule: &'static FestivalRule,
    config: &FestivalConfig,
) -> Result<Vec<FestivalDate>, FestivalError> {
    let year = table.year;
    let ambiguous = || FestivalError::ResolutionAmbiguous {
        name: rule.name,
        year,
    };
    let stamp =
        |d: NaiveDate| FestivalDate::new(rule, d, year).with("resolution", "astronomical");
    let provider = calc.provider();
    let year_start = calendar_to_jd(year, 1, 1.0);
    let year_end = calendar_to_jd(year + 1, 1, 1.0);

    let dates = match rule.rule {
        RuleKind::Lunar {
            masa,
            paksha,
            tithi,
        } => {
            let day = first_binding(
                table,
                |d| d.masa == Some(masa) && !d.adhika,
                |d| d.tithi,
                tithi_number(paksha, tithi),
                30,
            )
            .ok_or_else(ambiguous)?;
            vec![
                stamp(day.date)
                    .with("lunar_month", masa.name())
                    .with("paksha", paksha.label())
                    .with("tithi", tithi.to_string()),
            ]
        }
        RuleKind::Nakshatra {
            nakshatra,
            solar_month,
        } => {
            let day = first_binding(
                table,
                |d| d.sun_rashi == solar_month.index(),
                |d| d.nakshatra.index() + 1,
                nakshatra.index() + 1,
                27,
            )
            .ok_or_else(ambiguous)?;
            vec![
                stamp(day.date)
                    .with("nakshatra", nakshatra.name())
                    .with("solar_month", solar_month.name()),
            ]
        }
        RuleKind::Sankranti { rashi, day_offset } => {
            let cfg = SankrantiConfig::new(config.ayanamsha_system);
            let event =
                next_specific_sankranti(provider, year_start, rashi, &cfg)?.ok_or_else(ambiguous)?;
            let day = local_date(&event.instant, config)? + Duration::days(i64::from(day_offset));
            vec![
                stamp(day)
                    .with("rashi", rashi.name())
                    .with("exact_time", exact_time(&event.instant)?),
            ]
        }
        RuleKind::Solstice {
            tropical_longitude_deg,
        } => {
            let instant = next_solar_longitude(provider, year_start, tropical_longitude_deg)?
                .ok_or_else(ambiguous)?;
            vec![stamp(local_date(&instant, config)?).with("exact_time", exact_time(&instant)?)]
        }
        RuleKind::Ekadashi => ekadashis(table, rule),
        RuleKind::Eclipse { eclipse } => {
            let (events, limit): (Vec<LunarPhaseEvent>, f64) = match eclipse {
                EclipseKind::Solar => (
                    search_amavasyas(provider, year_start, year_end)?,
                    SOLAR_ECLIPSE_LIMIT_DEG,
                ),
                EclipseKind::Lunar => (
                    search_purnimas(provider, year_start, year_end)?,
                    LUNAR_ECLIPSE_LIMIT_DEG,
                ),
            };
            events
                .iter()
                .filter(|ev| ev.moon_latitude_deg.abs() < limit)
                .map(|ev| {
                    Ok(stamp(local_date(&ev.instant, config)?)
                        .with("exact_time", exact_time(&ev.instant)?)
                        .with("moon_latitude_deg", format!("{:.3}", ev.moon_latitude_deg)))
                })
                .collect::<Result<Vec<_>, FestivalError>>()?
        }
    };
    Ok(dates.into_iter().filter(|f| f.date.year() == year).collect())
}

/// Both ekadashis of every lunar month touching the year: the first
/// sunrise of tithi 11 or 26, or the day a kshaya ekadashi falls on.
fn ekadashis(table: &YearTable, rule: &'static FestivalRule) -> Vec<FestivalDate> {
    let mut out = Vec::with_capacity(26);
    for (i, (day, next)) in table.day_pairs().enumerate() {
        let prev = i.checked_sub(1).map(|p| &table.days[p]);
        for paksha in [Paksha::Shukla, Paksha::Krishna] {
            let target = tithi_number(paksha, 11);
            let begins = day.tithi == target && prev.is_none_or(|p| p.tithi != target);
            if !begins && !skipped(day.tithi, next.tithi, target, 30) {
                continue;
            }
            let mut fd = FestivalDate::new(rule, day.date, table.year)
                .with("resolution", "astronomical")
                .with("paksha", paksha.label());
            if let Some(masa) = day.masa {
                fd = fd
                    .with("lunar_month", masa.name())
                    .with("ekadashi_type", ekadashi_name(masa, paksha, day.adhika));
            }
            if day.adhika {
                fd = fd.with("adhika", "true");
            }
            out.push(fd);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_is_cyclic_and_strict() {
        assert!(skipped(10, 12, 11, 30));
        assert!(!skipped(10, 11, 11, 30));
        assert!(!skipped(11, 12, 11, 30));
        assert!(skipped(29, 1, 30, 30));
        assert!(skipped(26, 1, 27, 27));
        assert!(!skipped(5, 5, 5, 30));
    }

    #[test]
    fn ekadashi_names_by_amanta_month() {
        assert_eq!(
            ekadashi_name(Masa::Jyeshtha, Paksha::Shukla, false),
            "Nirjala"
        );
        assert_eq!(
            ekadashi_name(Masa::Phalguna, Paksha::Krishna, false),
            "Papmochani"
        );
        assert_eq!(ekadashi_name(Masa::Ashwin, Paksha::Krishna, true), "Parama");
    }
}
