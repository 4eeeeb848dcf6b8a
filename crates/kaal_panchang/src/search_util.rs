//! Bracketing and bisection over angle-valued functions of time.

use kaal_vedic_base::normalize_pm180;

use crate::error::PanchangError;

/// Wrap an angle difference into (-180, 180].
pub(crate) fn normalize_to_pm180(deg: f64) -> f64 {
    normalize_pm180(deg)
}

/// Step from `jd_start` by `step` days until `f` changes sign, then bisect.
///
/// `f` is expected to be a wrapped angle difference, so a sign change whose
/// jump exceeds 180 deg is the wrap point, not a root, and is skipped.
/// Returns `None` when no root is bracketed within `max_steps`.
pub(crate) fn find_zero_crossing<F>(
    f: &F,
    jd_start: f64,
    step: f64,
    max_steps: usize,
    max_iter: usize,
    tol_days: f64,
) -> Result<Option<f64>, PanchangError>
where
    F: Fn(f64) -> Result<f64, PanchangError> + ?Sized,
{
    let mut t0 = jd_start;
    let mut f0 = f(t0)?;
    if f0 == 0.0 {
        return Ok(Some(t0));
    }

    for _ in 0..max_steps {
        let t1 = t0 + step;
        let f1 = f(t1)?;
        if f1 == 0.0 {
            return Ok(Some(t1));
        }
        if (f0 < 0.0) != (f1 < 0.0) && (f1 - f0).abs() < 180.0 {
            return bisect(f, t0, f0, t1, max_iter, tol_days).map(Some);
        }
        t0 = t1;
        f0 = f1;
    }
    Ok(None)
}

fn bisect<F>(
    f: &F,
    mut a: f64,
    mut fa: f64,
    mut b: f64,
    max_iter: usize,
    tol_days: f64,
) -> Result<f64, PanchangError>
where
    F: Fn(f64) -> Result<f64, PanchangError> + ?Sized,
{
    for _ in 0..max_iter {
        if (b - a).abs() < tol_days {
            break;
        }
        let mid = 0.5 * (a + b);
        let fm = f(mid)?;
        if fm == 0.0 {
            return Ok(mid);
        }
        if (fa < 0.0) == (fm < 0.0) {
            a = mid;
            fa = fm;
        } else {
            b = mid;
        }
    }
    Ok(0.5 * (a + b))
}
