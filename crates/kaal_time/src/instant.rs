//! `Instant`: a time point in both civil (UTC) and dynamical (TT) time.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::delta_t::delta_t_seconds_for_jd;
use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, jd_to_centuries};
use crate::utc_time::UtcTime;

/// Julian Date of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// An immutable time point.
///
/// `jd_tt = jd_utc + ΔT/86400` where ΔT comes from the interpolated table.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Instant {
    jd_utc: f64,
    jd_tt: f64,
}

impl Instant {
    /// Build from a UTC Julian Date.
    pub fn from_jd_utc(jd_utc: f64) -> Result<Self, TimeError> {
        if !jd_utc.is_finite() {
            return Err(TimeError::NonFinite);
        }
        Ok(Self::from_finite_jd(jd_utc))
    }

    /// Build from validated UTC calendar fields.
    pub fn from_utc(utc: &UtcTime) -> Result<Self, TimeError> {
        utc.validate()?;
        Self::from_jd_utc(utc.to_jd())
    }

    /// Build from a chrono UTC timestamp.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        let seconds = dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 * 1e-9;
        Self::from_finite_jd(UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY)
    }

    /// Build from a TT Julian Date, inverting ΔT by fixed-point iteration.
    pub fn from_jd_tt(jd_tt: f64) -> Result<Self, TimeError> {
        if !jd_tt.is_finite() {
            return Err(TimeError::NonFinite);
        }
        let mut jd_utc = jd_tt - delta_t_seconds_for_jd(jd_tt) / SECONDS_PER_DAY;
        jd_utc = jd_tt - delta_t_seconds_for_jd(jd_utc) / SECONDS_PER_DAY;
        Ok(Self::from_finite_jd(jd_utc))
    }

    fn from_finite_jd(jd_utc: f64) -> Self {
        let jd_tt = jd_utc + delta_t_seconds_for_jd(jd_utc) / SECONDS_PER_DAY;
        Self { jd_utc, jd_tt }
    }

    /// UTC Julian Date.
    pub fn jd_utc(&self) -> f64 {
        self.jd_utc
    }

    /// Terrestrial Time Julian Date.
    pub fn jd_tt(&self) -> f64 {
        self.jd_tt
    }

    /// ΔT in seconds applied to this instant.
    pub fn delta_t_seconds(&self) -> f64 {
        (self.jd_tt - self.jd_utc) * SECONDS_PER_DAY
    }

    /// Julian centuries of TT since J2000.0.
    pub fn centuries_tt(&self) -> f64 {
        jd_to_centuries(self.jd_tt)
    }

    /// Shift by a number of hours (negative moves backward).
    pub fn add_hours(&self, hours: f64) -> Self {
        Self::from_finite_jd(self.jd_utc + hours / 24.0)
    }

    /// Shift by a number of days.
    pub fn add_days(&self, days: f64) -> Self {
        Self::from_finite_jd(self.jd_utc + days)
    }

    /// UTC calendar breakdown.
    pub fn to_utc(&self) -> UtcTime {
        UtcTime::from_jd(self.jd_utc)
    }

    /// chrono UTC timestamp, rounded to the millisecond.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, TimeError> {
        let millis = ((self.jd_utc - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round() as i64;
        DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| TimeError::InvalidDate(format!("JD {} outside chrono range", self.jd_utc)))
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_utc())
    }
}
