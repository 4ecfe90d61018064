//! Pole-angle calculator.
//!
//! The pole angle is the interior angle, at the measurement point, of the
//! spherical triangle {source pole, measurement point, boundary pole}. It
//! is the single rotation that carries source-frame north into
//! boundary-frame north at that point, so everything downstream (quadrants,
//! signs, polar-angle composition) hangs off this one number.

use crate::constants::{LT_HOURS, RAD_PER_HOUR};
use crate::error::{Result, StateError};
use crate::trig::{archav, hav};

/// Angle (degrees, [0, 180]) at the measurement point between the source
/// pole and the boundary pole.
///
/// `vec_lt`/`vec_lat` locate the measurement in the source frame
/// (local-time hours, degrees latitude); `pole_lt`/`pole_lat` locate the
/// boundary pole in the same frame. Two configurations have exact answers
/// rather than computed ones: a measurement on the boundary pole's meridian
/// sits at angle 0, and one on the opposite meridian at 180. A measurement
/// on a source pole or antipodal to the boundary pole degenerates the
/// triangle and is rejected rather than returned as NaN.
pub fn vec_pole_angle(vec_lt: f64, vec_lat: f64, pole_lt: f64, pole_lat: f64) -> Result<f64> {
    if vec_lt.is_nan() {
        return Err(StateError("source-frame longitude of vector undefined"));
    }
    if pole_lt.is_nan() {
        return Err(StateError("source-frame longitude of boundary pole undefined"));
    }
    if pole_lat.is_nan() {
        return Err(StateError("source-frame latitude of boundary pole undefined"));
    }
    if vec_lat.is_nan() {
        return Err(StateError("source-frame latitude of vector undefined"));
    }

    // Wrapped local-time offset decides the two degenerate meridian cases
    // exactly; comparing hours avoids rounding through radians first.
    let del_lt = (pole_lt - vec_lt).rem_euclid(LT_HOURS);
    if del_lt == 0.0 {
        return Ok(0.0);
    }
    if del_lt == LT_HOURS / 2.0 {
        return Ok(180.0);
    }
    let del_long = del_lt * RAD_PER_HOUR;

    // Colatitudes from the source pole of the boundary's hemisphere.
    let hemi = pole_lat.signum();
    let del_pole = std::f64::consts::FRAC_PI_2 - hemi * pole_lat.to_radians();
    let del_vect = std::f64::consts::FRAC_PI_2 - hemi * vec_lat.to_radians();

    // Haversine law of cosines: side from measurement to boundary pole,
    // then the angle opposite the pole-pole side.
    let hav_dist = hav(del_pole - del_vect) + del_pole.sin() * del_vect.sin() * hav(del_long);
    let dist = archav(hav_dist);

    // A measurement on a source pole, or antipodal to the boundary pole,
    // has no defined direction to one of the triangle's other corners.
    if del_vect.sin().abs() < 1e-12 || dist.sin().abs() < 1e-12 {
        return Err(StateError("pole-pole-vector triangle degenerate"));
    }
    let hav_angle = (hav(del_pole) - hav(del_vect - dist)) / (dist.sin() * del_vect.sin());

    Ok(archav(hav_angle).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_same_meridian_is_zero() {
        assert_eq!(vec_pole_angle(5.832, 75.0, 5.832, 87.24).unwrap(), 0.0);
    }

    #[test]
    fn test_opposite_meridian_is_180() {
        assert_eq!(vec_pole_angle(17.832, 75.0, 5.832, 87.24).unwrap(), 180.0);
        // Offset below zero wraps the same way.
        assert_eq!(vec_pole_angle(5.832, 75.0, 17.832, 87.24).unwrap(), 180.0);
    }

    #[test]
    fn test_reference_geometry() {
        let angle = vec_pole_angle(22.0, 75.0, 5.832, 87.24).unwrap();
        assert!(
            (angle - 8.67527923044).abs() < 1e-9,
            "pole angle {angle}, expected 8.67527923044"
        );
    }

    #[test]
    fn test_obtuse_geometry() {
        // Measurement poleward of the boundary pole: angle opens past 90.
        let angle = vec_pole_angle(21.22, 87.2, 1.260677777, 83.99).unwrap();
        assert!(
            (angle - 91.72024697182087).abs() < 1e-9,
            "pole angle {angle}, expected 91.72024697182087"
        );
    }

    #[test]
    fn test_isosceles_geometry() {
        // Measurement colatitude equal to the pole-pole separation; were the
        // triangle flat the angle would be 46.26 degrees.
        let angle = vec_pole_angle(0.0, 87.24, 5.832, 87.24).unwrap();
        assert!(
            (angle - 46.2932179019).abs() < 1e-9,
            "pole angle {angle}, expected 46.2932179019"
        );
    }

    #[test]
    fn test_southern_hemisphere_mirrors_northern() {
        let north = vec_pole_angle(22.0, 75.0, 5.832, 87.24).unwrap();
        let south = vec_pole_angle(22.0, -75.0, 5.832, -87.24).unwrap();
        assert!(
            (north - south).abs() < 1e-9,
            "hemispheres should mirror: {north} vs {south}"
        );
    }

    #[test]
    fn test_each_undefined_input_has_its_own_error() {
        let nan = f64::NAN;
        assert_eq!(
            vec_pole_angle(nan, 75.0, 5.832, 87.24).unwrap_err(),
            StateError("source-frame longitude of vector undefined")
        );
        assert_eq!(
            vec_pole_angle(22.0, 75.0, nan, 87.24).unwrap_err(),
            StateError("source-frame longitude of boundary pole undefined")
        );
        assert_eq!(
            vec_pole_angle(22.0, 75.0, 5.832, nan).unwrap_err(),
            StateError("source-frame latitude of boundary pole undefined")
        );
        assert_eq!(
            vec_pole_angle(22.0, nan, 5.832, 87.24).unwrap_err(),
            StateError("source-frame latitude of vector undefined")
        );
    }

    #[test]
    fn test_measurement_on_source_pole_is_degenerate() {
        assert_eq!(
            vec_pole_angle(22.0, 90.0, 5.832, 87.24).unwrap_err(),
            StateError("pole-pole-vector triangle degenerate")
        );
        assert_eq!(
            vec_pole_angle(22.0, -90.0, 5.832, 87.24).unwrap_err(),
            StateError("pole-pole-vector triangle degenerate")
        );
    }

    proptest! {
        #[test]
        fn prop_angle_stays_in_range(
            vec_lt in 0.0..24.0f64,
            vec_lat in 40.0..89.0f64,
            pole_lt in 0.0..24.0f64,
            pole_colat in 0.5..30.0f64,
        ) {
            let angle = vec_pole_angle(vec_lt, vec_lat, pole_lt, 90.0 - pole_colat).unwrap();
            prop_assert!((0.0..=180.0).contains(&angle), "angle out of range: {}", angle);
        }
    }
}
