//! Exact boundaries of tithi, karana, yoga and nakshatra, and the amanta
//! masa of a date.
//!
//! Each `*_at` function classifies a pre-computed angle and then brackets
//! and bisects the segment edges on either side of `jd_tt`.

use kaal_core::EphemerisProvider;
use kaal_time::Instant;
use kaal_vedic_base::{
    AyanamshaSystem, KARANA_SEGMENT_DEG, NAKSHATRA_SPAN_27, TITHI_SEGMENT_DEG, YOGA_SEGMENT_DEG,
    karana_from_elongation, masa_from_rashi_index, nakshatra_from_longitude,
    tithi_from_elongation, yoga_from_sum,
};

use crate::error::PanchangError;
use crate::lunar_phase::{next_amavasya, prev_amavasya};
use crate::panchang_types::{KaranaInfo, MasaInfo, PanchangNakshatraInfo, TithiInfo, YogaInfo};
use crate::positions::{
    elongation_at, moon_sidereal_longitude_at, sidereal_sum_at, sun_sidereal_rashi_index,
};
use crate::search_util::{find_zero_crossing, normalize_to_pm180};

/// Masa for the instant.
///
/// The month runs new moon to new moon and is named after the Sun's
/// sidereal rashi at the closing new moon. When the Sun stays in one rashi
/// across the whole month it is adhika and takes the following month's name.
pub fn masa_for_date<P: EphemerisProvider + ?Sized>(
    provider: &P,
    instant: &Instant,
    system: AyanamshaSystem,
) -> Result<MasaInfo, PanchangError> {
    let jd = instant.jd_tt();
    let prev_nm = prev_amavasya(provider, jd)?
        .ok_or(PanchangError::NoConvergence("could not find previous new moon"))?;
    let next_nm = next_amavasya(provider, jd)?
        .ok_or(PanchangError::NoConvergence("could not find next new moon"))?;

    let rashi_at_prev = sun_sidereal_rashi_index(provider, prev_nm.jd_tt, system)?;
    let rashi_at_next = sun_sidereal_rashi_index(provider, next_nm.jd_tt, system)?;

    let (masa, adhika) = if rashi_at_prev != rashi_at_next {
        (masa_from_rashi_index(rashi_at_next), false)
    } else {
        (masa_from_rashi_index((rashi_at_prev + 1) % 12), true)
    };

    Ok(MasaInfo {
        masa,
        adhika,
        start: prev_nm.instant,
        end: next_nm.instant,
    })
}

// ---------------------------------------------------------------------------
// Angular segments
// ---------------------------------------------------------------------------

fn find_angle_boundary<F>(
    f: &F,
    jd_start: f64,
    target_deg: f64,
    step: f64,
    max_steps: usize,
) -> Result<Option<f64>, PanchangError>
where
    F: Fn(f64) -> Result<f64, PanchangError>,
{
    let wrapped = |t: f64| -> Result<f64, PanchangError> { Ok(normalize_to_pm180(f(t)? - target_deg)) };
    find_zero_crossing(&wrapped, jd_start, step, max_steps, 50, 1e-8)
}

fn segment_bounds<F>(
    f: &F,
    jd_tt: f64,
    index: u8,
    span_deg: f64,
    step: f64,
    what: (&'static str, &'static str),
) -> Result<(Instant, Instant), PanchangError>
where
    F: Fn(f64) -> Result<f64, PanchangError>,
{
    let start_target = f64::from(index) * span_deg;
    let end_target = (f64::from(index) + 1.0) * span_deg;
    let start = find_angle_boundary(f, jd_tt, start_target, -step, 20)?
        .ok_or(PanchangError::NoConvergence(what.0))?;
    let end = find_angle_boundary(f, jd_tt, end_target, step, 20)?
        .ok_or(PanchangError::NoConvergence(what.1))?;
    Ok((Instant::from_jd_tt(start)?, Instant::from_jd_tt(end)?))
}

/// Tithi for the instant.
pub fn tithi_for_date<P: EphemerisProvider + ?Sized>(
    provider: &P,
    instant: &Instant,
) -> Result<TithiInfo, PanchangError> {
    let jd = instant.jd_tt();
    tithi_at(provider, jd, elongation_at(provider, jd)?)
}

/// Tithi from a pre-computed elongation at `jd_tt`.
pub fn tithi_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
    elongation_deg: f64,
) -> Result<TithiInfo, PanchangError> {
    let pos = tithi_from_elongation(elongation_deg);
    let f = |t: f64| elongation_at(provider, t);
    let (start, end) = segment_bounds(
        &f,
        jd_tt,
        pos.tithi_index,
        TITHI_SEGMENT_DEG,
        0.25,
        ("could not find tithi start", "could not find tithi end"),
    )?;
    Ok(TithiInfo {
        tithi: pos.tithi,
        tithi_index: pos.tithi_index,
        paksha: pos.paksha,
        tithi_in_paksha: pos.tithi_in_paksha,
        start,
        end,
    })
}

/// Karana for the instant.
pub fn karana_for_date<P: EphemerisProvider + ?Sized>(
    provider: &P,
    instant: &Instant,
) -> Result<KaranaInfo, PanchangError> {
    let jd = instant.jd_tt();
    karana_at(provider, jd, elongation_at(provider, jd)?)
}

/// Karana from a pre-computed elongation at `jd_tt`.
pub fn karana_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
    elongation_deg: f64,
) -> Result<KaranaInfo, PanchangError> {
    let pos = karana_from_elongation(elongation_deg);
    let f = |t: f64| elongation_at(provider, t);
    let (start, end) = segment_bounds(
        &f,
        jd_tt,
        pos.karana_index,
        KARANA_SEGMENT_DEG,
        0.25,
        ("could not find karana start", "could not find karana end"),
    )?;
    Ok(KaranaInfo {
        karana: pos.karana,
        karana_index: pos.karana_index,
        start,
        end,
    })
}

/// Yoga for the instant.
pub fn yoga_for_date<P: EphemerisProvider + ?Sized>(
    provider: &P,
    instant: &Instant,
    system: AyanamshaSystem,
) -> Result<YogaInfo, PanchangError> {
    let jd = instant.jd_tt();
    yoga_at(provider, jd, sidereal_sum_at(provider, jd, system)?, system)
}

/// Yoga from a pre-computed sidereal sum at `jd_tt`.
pub fn yoga_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
    sidereal_sum_deg: f64,
    system: AyanamshaSystem,
) -> Result<YogaInfo, PanchangError> {
    let pos = yoga_from_sum(sidereal_sum_deg);
    let f = |t: f64| sidereal_sum_at(provider, t, system);
    let (start, end) = segment_bounds(
        &f,
        jd_tt,
        pos.yoga_index,
        YOGA_SEGMENT_DEG,
        0.25,
        ("could not find yoga start", "could not find yoga end"),
    )?;
    Ok(YogaInfo {
        yoga: pos.yoga,
        yoga_index: pos.yoga_index,
        start,
        end,
    })
}

/// Moon's nakshatra for the instant.
pub fn nakshatra_for_date<P: EphemerisProvider + ?Sized>(
    provider: &P,
    instant: &Instant,
    system: AyanamshaSystem,
) -> Result<PanchangNakshatraInfo, PanchangError> {
    let jd = instant.jd_tt();
    nakshatra_at(provider, jd, moon_sidereal_longitude_at(provider, jd, system)?, system)
}

/// Nakshatra from a pre-computed Moon sidereal longitude at `jd_tt`.
pub fn nakshatra_at<P: EphemerisProvider + ?Sized>(
    provider: &P,
    jd_tt: f64,
    moon_sidereal_deg: f64,
    system: AyanamshaSystem,
) -> Result<PanchangNakshatraInfo, PanchangError> {
    let pos = nakshatra_from_longitude(moon_sidereal_deg);
    // One nakshatra is roughly one day of lunar motion.
    let f = |t: f64| moon_sidereal_longitude_at(provider, t, system);
    let (start, end) = segment_bounds(
        &f,
        jd_tt,
        pos.nakshatra_index,
        NAKSHATRA_SPAN_27,
        0.5,
        ("could not find nakshatra start", "could not find nakshatra end"),
    )?;
    Ok(PanchangNakshatraInfo {
        nakshatra: pos.nakshatra,
        nakshatra_index: pos.nakshatra_index,
        pada: pos.pada,
        start,
        end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaal_core::AnalyticEphemeris;
    use kaal_time::UtcTime;

    fn instant(y: i32, m: u32, d: u32, h: u32) -> Instant {
        Instant::from_utc(&UtcTime::new(y, m, d, h, 0, 0.0)).unwrap()
    }

    #[test]
    fn tithi_bounds_bracket_instant() {
        let eph = AnalyticEphemeris::new();
        let i = instant(2025, 2, 26, 0);
        let t = tithi_for_date(&eph, &i).unwrap();
        assert!(t.start.jd_utc() < i.jd_utc() && i.jd_utc() < t.end.jd_utc());
        let hours = (t.end.jd_utc() - t.start.jd_utc()) * 24.0;
        assert!((19.0..27.0).contains(&hours), "tithi length {hours} h");
    }

    #[test]
    fn karana_is_half_tithi() {
        let eph = AnalyticEphemeris::new();
        let i = instant(2024, 8, 10, 6);
        let k = karana_for_date(&eph, &i).unwrap();
        let t = tithi_for_date(&eph, &i).unwrap();
        assert!(k.start.jd_utc() >= t.start.jd_utc() - 1e-6);
        assert!(k.end.jd_utc() <= t.end.jd_utc() + 1e-6);
        assert_eq!(k.karana_index / 2, t.tithi_index);
    }

    #[test]
    fn yoga_and_nakshatra_bounds() {
        let eph = AnalyticEphemeris::new();
        let i = instant(2024, 3, 1, 12);
        let y = yoga_for_date(&eph, &i, AyanamshaSystem::Lahiri).unwrap();
        assert!(y.start.jd_utc() < i.jd_utc() && i.jd_utc() < y.end.jd_utc());
        let n = nakshatra_for_date(&eph, &i, AyanamshaSystem::Lahiri).unwrap();
        assert!(n.start.jd_utc() < i.jd_utc() && i.jd_utc() < n.end.jd_utc());
        assert!((1..=4).contains(&n.pada));
    }

    #[test]
    fn month_ending_at_diwali_is_ashwin() {
        let eph = AnalyticEphemeris::new();
        // Amanta Ashwin ends at the Diwali new moon.
        let m = masa_for_date(&eph, &instant(2024, 10, 20, 0), AyanamshaSystem::Lahiri).unwrap();
        assert_eq!(m.masa, kaal_vedic_base::Masa::Ashwin);
        assert!(!m.adhika);
    }
}
