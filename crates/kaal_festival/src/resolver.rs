//! Festival resolution for a year, and the date/month/range queries built
//! on it.
//!
//! Year tables are cached per year behind an `RwLock` so repeated queries
//! for the same year share one sunrise sweep.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use kaal_core::EphemerisProvider;
use kaal_panchang::PanchangCalculator;
use kaal_vedic_base::{AyanamshaSystem, GeoLocation};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calendar::{DayInfo, YearTable, build_year_table};
use crate::error::FestivalError;
use crate::rules::matching_rules;
use crate::types::{FestivalCategory, FestivalDate, Region};
use crate::{approximate, astronomical};

/// Longest range `generate_calendar` accepts.
pub const MAX_CALENDAR_DAYS: i64 = 5 * 366;

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9998;

/// Ujjain, the traditional prime meridian of Indian astronomy.
pub const REFERENCE_LATITUDE_DEG: f64 = 23.1765;
pub const REFERENCE_LONGITUDE_DEG: f64 = 75.7885;
/// Indian Standard Time.
pub const IST_OFFSET_MINUTES: i32 = 330;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMode {
    /// Fixed Gregorian stand-ins, no ephemeris access.
    Approximate,
    /// Day-by-day sunrise table and event searches.
    #[default]
    Astronomical,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FestivalConfig {
    pub mode: ResolutionMode,
    /// Location whose sunrise decides the prevailing tithi.
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub elevation_m: f64,
    /// Civil offset used to turn event instants into dates.
    pub utc_offset_minutes: i32,
    pub ayanamsha_system: AyanamshaSystem,
}

impl Default for FestivalConfig {
    fn default() -> Self {
        Self {
            mode: ResolutionMode::default(),
            latitude_deg: REFERENCE_LATITUDE_DEG,
            longitude_deg: REFERENCE_LONGITUDE_DEG,
            elevation_m: 0.0,
            utc_offset_minutes: IST_OFFSET_MINUTES,
            ayanamsha_system: AyanamshaSystem::Lahiri,
        }
    }
}

impl FestivalConfig {
    /// Validated reference location.
    pub fn location(&self) -> Result<GeoLocation, FestivalError> {
        GeoLocation::new(self.latitude_deg, self.longitude_deg, self.elevation_m)
            .map_err(|e| FestivalError::InvalidInput(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), FestivalError> {
        self.location()?;
        if !(-14 * 60..=14 * 60).contains(&self.utc_offset_minutes) {
            return Err(FestivalError::InvalidInput(format!(
                "utc offset {} minutes outside +/-14 h",
                self.utc_offset_minutes
            )));
        }
        Ok(())
    }
}

pub struct FestivalResolver<'a, P> {
    calculator: &'a PanchangCalculator<P>,
    config: FestivalConfig,
    location: GeoLocation,
    tables: RwLock<HashMap<i32, Arc<YearTable>>>,
}

impl<'a, P: EphemerisProvider> FestivalResolver<'a, P> {
    pub fn new(calculator: &'a PanchangCalculator<P>) -> Self {
        Self {
            calculator,
            config: FestivalConfig::default(),
            location: GeoLocation {
                latitude_deg: REFERENCE_LATITUDE_DEG,
                longitude_deg: REFERENCE_LONGITUDE_DEG,
                elevation_m: 0.0,
            },
            tables: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_config(
        calculator: &'a PanchangCalculator<P>,
        config: FestivalConfig,
    ) -> Result<Self, FestivalError> {
        config.validate()?;
        Ok(Self {
            calculator,
            location: config.location()?,
            config,
            tables: RwLock::new(HashMap::new()),
        })
    }

    pub fn config(&self) -> &FestivalConfig {
        &self.config
    }

    /// Festivals of `year`, sorted by date then name. Rules that bind to no
    /// day are logged and skipped.
    pub fn resolve(
        &self,
        year: i32,
        regions: &[Region],
        categories: &[FestivalCategory],
    ) -> Result<Vec<FestivalDate>, FestivalError> {
        validate_year(year)?;
        let table = match self.config.mode {
            ResolutionMode::Astronomical => Some(self.year_table(year)?),
            ResolutionMode::Approximate => None,
        };

        let mut out = Vec::new();
        for rule in matching_rules(regions, categories) {
            let bound = match &table {
                Some(t) => astronomical::bind(self.calculator, t, rule, &self.config),
                None => approximate::bind(rule, year),
            };
            match bound {
                Ok(mut dates) => out.append(&mut dates),
                Err(FestivalError::ResolutionAmbiguous { name, year }) => {
                    warn!(festival = name, year, "festival has no date this year, skipping");
                }
                Err(e) => return Err(e),
            }
        }
        out.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name().cmp(b.name())));
        debug!(year, festivals = out.len(), mode = ?self.config.mode, "festivals resolved");
        Ok(out)
    }

    /// Festivals starting on `date`.
    pub fn festivals_for_date(
        &self,
        date: NaiveDate,
        regions: &[Region],
    ) -> Result<Vec<FestivalDate>, FestivalError> {
        let mut all = self.resolve(date.year(), regions, &[])?;
        all.retain(|f| f.date == date);
        Ok(all)
    }

    /// Festivals starting in `month` (1..=12) of `year`.
    pub fn festivals_for_month(
        &self,
        year: i32,
        month: u32,
        regions: &[Region],
    ) -> Result<Vec<FestivalDate>, FestivalError> {
        if !(1..=12).contains(&month) {
            return Err(FestivalError::InvalidInput(format!(
                "month {month} outside 1..=12"
            )));
        }
        let mut all = self.resolve(year, regions, &[])?;
        all.retain(|f| f.date.month() == month);
        Ok(all)
    }

    /// Festivals in `[start, end]` grouped by ISO date.
    pub fn generate_calendar(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        regions: &[Region],
        categories: &[FestivalCategory],
    ) -> Result<BTreeMap<String, Vec<FestivalDate>>, FestivalError> {
        if end < start {
            return Err(FestivalError::InvalidInput(format!(
                "calendar end {end} precedes start {start}"
            )));
        }
        let days = (end - start).num_days();
        if days > MAX_CALENDAR_DAYS {
            return Err(FestivalError::InvalidInput(format!(
                "calendar spans {days} days, limit is {MAX_CALENDAR_DAYS}"
            )));
        }

        let mut calendar: BTreeMap<String, Vec<FestivalDate>> = BTreeMap::new();
        for year in start.year()..=end.year() {
            for f in self.resolve(year, regions, categories)? {
                if (start..=end).contains(&f.date) {
                    calendar.entry(f.date.to_string()).or_default().push(f);
                }
            }
        }
        Ok(calendar)
    }

    /// Sunrise panchang of the reference location on `date`. Always
    /// computed astronomically, whatever the resolution mode.
    pub fn day_info(&self, date: NaiveDate) -> Result<DayInfo, FestivalError> {
        validate_year(date.year())?;
        let table = self.year_table(date.year())?;
        table
            .day(date)
            .copied()
            .ok_or_else(|| FestivalError::InvalidInput(format!("no table entry for {date}")))
    }

    fn year_table(&self, year: i32) -> Result<Arc<YearTable>, FestivalError> {
        if let Some(hit) = self.tables.read().get(&year) {
            return Ok(Arc::clone(hit));
        }
        debug!(year, "festival year table cache miss");
        let table = Arc::new(build_year_table(
            self.calculator,
            year,
            &self.location,
            self.config.utc_offset_minutes,
            self.config.ayanamsha_system,
        )?);
        self.tables.write().insert(year, Arc::clone(&table));
        Ok(table)
    }
}

fn validate_year(year: i32) -> Result<(), FestivalError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(FestivalError::InvalidInput(format!(
            "year {year} outside {MIN_YEAR}..={MAX_YEAR}"
        )))
    }
}
