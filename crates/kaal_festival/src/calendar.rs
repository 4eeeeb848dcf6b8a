//! Per-day panchang table for a Gregorian year, sampled at sunrise.
//!
//! Lunar festivals bind to the tithi prevailing at sunrise, so one sample
//! per civil day is enough for resolution. Amanta months are attached from
//! the new moons bracketing each day.

use chrono::{Datelike, Duration, NaiveDate};
use kaal_core::EphemerisProvider;
use kaal_panchang::{
    PanchangCalculator, elongation_at, moon_sidereal_longitude_at, search_amavasyas,
    sun_sidereal_rashi_index,
};
use kaal_time::{Instant, calendar_to_jd};
use kaal_vedic_base::{
    AyanamshaSystem, GeoLocation, Masa, Nakshatra, masa_from_rashi_index,
    nakshatra_from_longitude, tithi_from_elongation,
};
use serde::Serialize;
use tracing::debug;

use crate::error::FestivalError;

/// Margin around the year when collecting new moons; longer than a lunation.
const LUNATION_MARGIN_DAYS: f64 = 35.0;
/// Fallback sunrise, local clock hours, when the rise search fails.
const FALLBACK_SUNRISE_HOURS: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayInfo {
    pub date: NaiveDate,
    pub sunrise_jd_utc: f64,
    /// 1..=30 tithi at sunrise.
    pub tithi: u8,
    pub nakshatra: Nakshatra,
    /// Sun's sidereal rashi index at sunrise (0 = Mesha).
    pub sun_rashi: u8,
    /// Amanta month containing sunrise, when the new moon search covers it.
    pub masa: Option<Masa>,
    /// The month contains no sankranti.
    pub adhika: bool,
}

/// Days from Jan 1 of `year` through Jan 1 of the following year. The last
/// entry is a sentinel so every in-year day has a successor.
#[derive(Debug, Clone)]
pub struct YearTable {
    pub year: i32,
    pub days: Vec<DayInfo>,
}

impl YearTable {
    /// In-year days paired with the following day.
    pub fn day_pairs(&self) -> impl Iterator<Item = (&DayInfo, &DayInfo)> {
        self.days.iter().zip(self.days.iter().skip(1))
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayInfo> {
        let offset = usize::try_from((date - self.days.first()?.date).num_days()).ok()?;
        self.days.get(offset)
    }
}

struct MonthSpan {
    start_jd_tt: f64,
    end_jd_tt: f64,
    masa: Masa,
    adhika: bool,
}

pub fn build_year_table<P: EphemerisProvider>(
    calc: &PanchangCalculator<P>,
    year: i32,
    location: &GeoLocation,
    utc_offset_minutes: i32,
    system: AyanamshaSystem,
) -> Result<YearTable, FestivalError> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| FestivalError::InvalidInput(format!("year {year} out of range")))?;
    let last = NaiveDate::from_ymd_opt(year + 1, 1, 1)
        .ok_or_else(|| FestivalError::InvalidInput(format!("year {year} out of range")))?;

    let months = month_spans(calc, year, system)?;
    let provider = calc.provider();
    let mut days = Vec::with_capacity(367);
    let mut date = first;
    while date <= last {
        let jd0 = calendar_to_jd(date.year(), date.month(), f64::from(date.day()));
        let sunrise_jd_utc = match calc.sun_events(location, jd0) {
            Ok(ev) => ev.sunrise_jd,
            Err(e) => {
                debug!(%date, error = %e, "sunrise unavailable, using local 06:00");
                jd0 + (FALLBACK_SUNRISE_HOURS - f64::from(utc_offset_minutes) / 60.0) / 24.0
            }
        };
        let jd_tt = Instant::from_jd_utc(sunrise_jd_utc)?.jd_tt();

        let tithi = tithi_from_elongation(elongation_at(provider, jd_tt)?).number();
        let nakshatra =
            nakshatra_from_longitude(moon_sidereal_longitude_at(provider, jd_tt, system)?)
                .nakshatra;
        let sun_rashi = sun_sidereal_rashi_index(provider, jd_tt, system)?;
        let month = months
            .iter()
            .find(|m| m.start_jd_tt <= jd_tt && jd_tt < m.end_jd_tt);

        days.push(DayInfo {
            date,
            sunrise_jd_utc,
            tithi,
            nakshatra,
            sun_rashi,
            masa: month.map(|m| m.masa),
            adhika: month.is_some_and(|m| m.adhika),
        });
        date += Duration::days(1);
    }
    debug!(year, days = days.len(), months = months.len(), "year table built");
    Ok(YearTable { year, days })
}

/// Amanta months overlapping the year. Each is named by the Sun's rashi at
/// its closing new moon; a month whose two new moons share a rashi holds
/// no sankranti and is adhika.
fn month_spans<P: EphemerisProvider>(
    calc: &PanchangCalculator<P>,
    year: i32,
    system: AyanamshaSystem,
) -> Result<Vec<MonthSpan>, FestivalError> {
    let provider = calc.provider();
    let start = calendar_to_jd(year, 1, 1.0) - LUNATION_MARGIN_DAYS;
    let end = calendar_to_jd(year + 1, 1, 1.0) + LUNATION_MARGIN_DAYS;
    let new_moons = search_amavasyas(provider, start, end)?;

    new_moons
        .windows(2)
        .map(|pair| {
            let opening = sun_sidereal_rashi_index(provider, pair[0].jd_tt, system)?;
            let closing = sun_sidereal_rashi_index(provider, pair[1].jd_tt, system)?;
            let adhika = opening == closing;
            // An adhika month borrows the name of the month that follows it.
            let named_by = if adhika { (closing + 1) % 12 } else { closing };
            Ok(MonthSpan {
                start_jd_tt: pair[0].jd_tt,
                end_jd_tt: pair[1].jd_tt,
                masa: masa_from_rashi_index(named_by),
                adhika,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaal_core::AnalyticEphemeris;

    fn table(year: i32) -> YearTable {
        let calc = PanchangCalculator::new(AnalyticEphemeris::new());
        let loc = GeoLocation::new(23.1765, 75.7885, 0.0).unwrap();
        build_year_table(&calc, year, &loc, 330, AyanamshaSystem::Lahiri).unwrap()
    }

    #[test]
    fn covers_year_plus_sentinel() {
        let t = table(2024);
        assert_eq!(t.days.len(), 367);
        assert_eq!(t.days[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(
            t.days.last().unwrap().date,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
        assert_eq!(t.day_pairs().count(), 366);
        let leap = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(t.day(leap).unwrap().date, leap);
        assert!(t.day(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()).is_none());
    }

    #[test]
    fn every_day_has_a_month_and_valid_tithi() {
        let t = table(2025);
        for d in &t.days {
            assert!(d.masa.is_some(), "{}", d.date);
            assert!((1..=30).contains(&d.tithi));
            assert!(d.sun_rashi < 12);
        }
    }

    #[test]
    fn tithi_advances_at_most_two_per_day() {
        let t = table(2025);
        for (a, b) in t.day_pairs() {
            let step = (i32::from(b.tithi) - i32::from(a.tithi)).rem_euclid(30);
            assert!(step <= 2, "{} -> {}: {step}", a.date, b.date);
        }
    }

    #[test]
    fn sunrise_is_morning_in_india() {
        let t = table(2024);
        for d in t.days.iter().step_by(30) {
            let local_hours = ((d.sunrise_jd_utc + 0.5).fract() * 24.0 + 5.5).rem_euclid(24.0);
            assert!((5.0..8.0).contains(&local_hours), "{}: {local_hours}", d.date);
        }
    }
}
