//! Delta-T (TT − UTC) estimate.
//!
//! Coarse table of historical values in seconds, linearly interpolated by
//! decimal year and clamped at both ends. The table is monotonic in
//! civil time over its span, so `Instant` TT stays monotonic too.

/// Julian Date of 0001-01-01 (proleptic), the zero point of decimal years.
const YEAR_ZERO_JD: f64 = 1_721_424.5;

/// Mean length of a year in days for decimal-year conversion.
const DAYS_PER_YEAR: f64 = 365.25;

/// `(year, delta_t_seconds)` pairs, ascending by year.
const DELTA_T_TABLE: [(f64, f64); 6] = [
    (-500.0, 17_190.0),
    (0.0, 10_583.0),
    (500.0, 5_700.0),
    (1000.0, 1_570.0),
    (1500.0, 200.0),
    (2000.0, 64.0),
];

/// Decimal year of a Julian Date.
pub fn decimal_year_from_jd(jd: f64) -> f64 {
    (jd - YEAR_ZERO_JD) / DAYS_PER_YEAR
}

/// Delta-T in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    let (first_year, first_dt) = DELTA_T_TABLE[0];
    if year <= first_year {
        return first_dt;
    }
    for pair in DELTA_T_TABLE.windows(2) {
        let (y0, dt0) = pair[0];
        let (y1, dt1) = pair[1];
        if year <= y1 {
            let frac = (year - y0) / (y1 - y0);
            return dt0 + frac * (dt1 - dt0);
        }
    }
    DELTA_T_TABLE[DELTA_T_TABLE.len() - 1].1
}

/// Delta-T in seconds at a Julian Date.
pub fn delta_t_seconds_for_jd(jd: f64) -> f64 {
    delta_t_seconds(decimal_year_from_jd(jd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_nodes_exact() {
        for &(y, dt) in &DELTA_T_TABLE {
            assert!((delta_t_seconds(y) - dt).abs() < 1e-9, "year {y}");
        }
    }

    #[test]
    fn interpolates_between_nodes() {
        let mid = delta_t_seconds(1750.0);
        assert!((mid - 132.0).abs() < 1e-9, "got {mid}");
    }

    #[test]
    fn clamps_outside_table() {
        assert_eq!(delta_t_seconds(-3000.0), 17_190.0);
        assert_eq!(delta_t_seconds(2025.0), 64.0);
    }

    #[test]
    fn non_increasing_toward_present() {
        let mut prev = f64::INFINITY;
        let mut y = -600.0;
        while y < 2100.0 {
            let dt = delta_t_seconds(y);
            assert!(dt <= prev, "delta-T rose at {y}");
            prev = dt;
            y += 25.0;
        }
    }

    #[test]
    fn decimal_year_of_2025() {
        let y = decimal_year_from_jd(2_460_676.5);
        assert!((y - 2024.0).abs() < 1.0, "got {y}");
    }
}
