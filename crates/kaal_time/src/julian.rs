//! Julian Date ↔ Gregorian calendar conversions.
//!
//! Source: Meeus, *Astronomical Algorithms*, ch. 7. Dates on or after
//! 1582-10-15 use the Gregorian reform; earlier dates are Julian.

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in a Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert a calendar date with fractional day to a Julian Date.
///
/// `day` may carry a fraction (`15.5` is noon on the 15th).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let m = m as f64;

    let gregorian = (year, month, day) >= (1582, 10, 15.0);
    let b = if gregorian {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Convert a Julian Date to `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Civil weekday of the UTC calendar day containing `jd`, 0 = Sunday.
pub fn weekday_from_jd(jd: f64) -> u8 {
    ((jd + 1.5).floor() as i64).rem_euclid(7) as u8
}
