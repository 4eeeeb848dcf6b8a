//! Lunar node (Rahu/Ketu) longitude.
//!
//! Mean node: Meeus, *Astronomical Algorithms* (2nd ed.), eq. 47.7.
//! True node: mean node plus the five principal periodic terms from the
//! same chapter. Ketu is always Rahu + 180 deg.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Which lunar node to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LunarNode {
    /// Ascending node (Rahu / North Node).
    Rahu,
    /// Descending node (Ketu / South Node).
    Ketu,
}

/// Mean or true node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeMode {
    /// Smooth polynomial motion only.
    #[default]
    Mean,
    /// Mean plus short-period perturbations.
    True,
}

/// Mean Rahu longitude in degrees [0, 360). `t` = Julian centuries TT.
pub fn mean_rahu_deg(t: f64) -> f64 {
    let t2 = t * t;
    normalize_360(
        125.044_547_9 - 1_934.136_289_1 * t + 0.002_075_4 * t2 + t2 * t / 467_441.0
            - t2 * t2 / 60_616_000.0,
    )
}

/// Mean Ketu longitude in degrees [0, 360).
pub fn mean_ketu_deg(t: f64) -> f64 {
    normalize_360(mean_rahu_deg(t) + 180.0)
}

fn true_node_correction_deg(t: f64) -> f64 {
    let d = (297.850_192_1 + 445_267.111_403_4 * t).to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * t).to_radians();
    let mp = (134.963_396_4 + 477_198.867_505_5 * t).to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * t).to_radians();
    -1.4979 * (2.0 * (d - f)).sin() - 0.1500 * m.sin() - 0.1226 * (2.0 * d).sin()
        + 0.1176 * (2.0 * f).sin()
        + 0.0801 * (2.0 * (mp - f)).sin()
}

/// True Rahu longitude in degrees [0, 360).
pub fn true_rahu_deg(t: f64) -> f64 {
    normalize_360(mean_rahu_deg(t) + true_node_correction_deg(t))
}

/// True Ketu longitude in degrees [0, 360).
pub fn true_ketu_deg(t: f64) -> f64 {
    normalize_360(true_rahu_deg(t) + 180.0)
}

/// Unified entry point: lunar node longitude in degrees [0, 360).
pub fn lunar_node_deg(node: LunarNode, t: f64, mode: NodeMode) -> f64 {
    match (node, mode) {
        (LunarNode::Rahu, NodeMode::Mean) => mean_rahu_deg(t),
        (LunarNode::Ketu, NodeMode::Mean) => mean_ketu_deg(t),
        (LunarNode::Rahu, NodeMode::True) => true_rahu_deg(t),
        (LunarNode::Ketu, NodeMode::True) => true_ketu_deg(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_rahu_at_j2000() {
        assert!((mean_rahu_deg(0.0) - 125.0445479).abs() < 1e-9);
    }

    #[test]
    fn retrograde_motion() {
        // about -19.34 deg per year
        let a = mean_rahu_deg(0.0);
        let b = mean_rahu_deg(0.01);
        let diff = normalize_360(b - a);
        assert!((diff - (360.0 - 19.341)).abs() < 0.01, "diff = {diff}");
    }

    #[test]
    fn ketu_opposite() {
        for t in [-0.5, 0.0, 0.25] {
            let d = normalize_360(mean_ketu_deg(t) - mean_rahu_deg(t));
            assert!((d - 180.0).abs() < 1e-9);
            let d = normalize_360(true_ketu_deg(t) - true_rahu_deg(t));
            assert!((d - 180.0).abs() < 1e-9);
        }
    }

    #[test]
    fn true_within_two_degrees_of_mean() {
        for i in 0..100 {
            let t = f64::from(i) * 0.002;
            let diff = crate::util::normalize_pm180(true_rahu_deg(t) - mean_rahu_deg(t));
            assert!(diff.abs() < 2.0, "t={t} diff={diff}");
        }
    }

    #[test]
    fn mean_node_1992_april() {
        // 1992 April 12 0h TD
        let t = (2_448_724.5 - 2_451_545.0) / 36525.0;
        assert!((mean_rahu_deg(t) - 274.4006).abs() < 1e-3);
    }
}
