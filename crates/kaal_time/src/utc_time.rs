//! UTC calendar date/time with sub-second precision.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight at the start of a calendar day.
    pub fn midnight(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Check every field against its calendar range.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidDate(format!("month {}", self.month)));
        }
        let max_day = days_in_month(self.year, self.month);
        if self.day == 0 || self.day > max_day {
            return Err(TimeError::InvalidDate(format!(
                "day {} in {:04}-{:02}",
                self.day, self.year, self.month
            )));
        }
        if self.hour > 23 || self.minute > 59 {
            return Err(TimeError::InvalidDate(format!(
                "time {:02}:{:02}",
                self.hour, self.minute
            )));
        }
        if !(0.0..61.0).contains(&self.second) {
            return Err(TimeError::InvalidDate(format!("second {}", self.second)));
        }
        Ok(())
    }

    /// Julian Date (UTC) of this calendar instant.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Calendar breakdown of a Julian Date (UTC).
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour: hour.min(23),
            minute: minute.min(59),
            second,
        }
    }
}

impl From<DateTime<Utc>> for UtcTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 * 1e-9,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

/// Number of days in a Gregorian month.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
        2 => 28,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::midnight(2025, 2, 26);
        assert_eq!(t.to_string(), "2025-02-26T00:00:00Z");
    }

    #[test]
    fn rejects_bad_fields() {
        assert!(UtcTime::new(2025, 13, 1, 0, 0, 0.0).validate().is_err());
        assert!(UtcTime::new(2025, 2, 29, 0, 0, 0.0).validate().is_err());
        assert!(UtcTime::new(2024, 2, 29, 0, 0, 0.0).validate().is_ok());
        assert!(UtcTime::new(2025, 1, 1, 24, 0, 0.0).validate().is_err());
    }

    #[test]
    fn jd_roundtrip_keeps_minutes() {
        let t = UtcTime::new(2025, 2, 26, 6, 45, 30.0);
        let back = UtcTime::from_jd(t.to_jd());
        assert_eq!((back.year, back.month, back.day), (2025, 2, 26));
        assert_eq!((back.hour, back.minute), (6, 45));
        assert!((back.second - 30.0).abs() < 1e-3, "second = {}", back.second);
    }

    #[test]
    fn leap_year_rules() {
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
    }
}
