//! Time handling for the kaal engine.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - A table-interpolated Delta-T model (TT − UTC)
//! - `Instant`, an immutable time point carrying both UTC and TT
//! - Greenwich/local sidereal time and local mean time

pub mod delta_t;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use delta_t::{decimal_year_from_jd, delta_t_seconds, delta_t_seconds_for_jd};
pub use error::TimeError;
pub use instant::Instant;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_centuries, weekday_from_jd,
};
pub use sidereal::{
    LocalMeanTime, gmst_deg, local_mean_time, local_sidereal_time_deg, local_sidereal_time_hours,
};
pub use utc_time::UtcTime;
