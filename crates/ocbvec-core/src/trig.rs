//! Haversine primitives.
//!
//! All angular differences in the engine go through these rather than the
//! raw law of cosines: the haversine form keeps precision when separations
//! approach 0 or the poles, where `1 - cos x` underflows catastrophically.

/// Haversine: hav(x) = (1 - cos x) / 2. Input in radians, output in [0, 1].
pub fn hav(x: f64) -> f64 {
    (1.0 - x.cos()) / 2.0
}

/// Inverse haversine: archav(h) = arccos(1 - 2h), for h in [0, 1].
///
/// The argument is clamped into the arccos domain so that accumulated
/// floating-point drift just past 0 or 1 folds to the nearest endpoint
/// instead of producing NaN.
pub fn archav(h: f64) -> f64 {
    (1.0 - 2.0 * h).clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_hav_endpoints() {
        assert_eq!(hav(0.0), 0.0);
        assert_eq!(hav(PI), 1.0);
        assert_eq!(hav(-PI), 1.0);
    }

    #[test]
    fn test_hav_full_turn() {
        assert!(hav(2.0 * PI).abs() < 1e-9, "hav(2π) should vanish");
        assert!(hav(-2.0 * PI).abs() < 1e-9, "hav(-2π) should vanish");
    }

    #[test]
    fn test_archav_endpoints() {
        assert_eq!(archav(0.0), 0.0);
        assert_eq!(archav(1.0), PI);
    }

    #[test]
    fn test_archav_clamps_drifted_input() {
        assert_eq!(archav(1.0 + 1e-15), PI);
        assert_eq!(archav(-1e-15), 0.0);
    }

    #[test]
    fn test_roundtrip_first_half_turn() {
        for i in 0..=100 {
            let x = PI * i as f64 / 100.0;
            assert_abs_diff_eq!(archav(hav(x)), x, epsilon = 1e-9);
        }
    }
}
