//! Sign resolver.
//!
//! Crossing from the source frame into the boundary frame rotates the north
//! reference toward the boundary pole. The folded polar angle reports only
//! how far from boundary north the rotated vector lies; which side of north
//! it lies on, and whether it ends up pointing poleward or equatorward, are
//! carried by the sign of the signed fold. The resolver turns that one
//! signed angle into per-component sign flags.

use crate::error::{Result, StateError};
use crate::quadrant::Quadrant;
use crate::scale::signed_boundary_polar_angle;

/// Boundary-frame component signs; `None` for directions not requested.
///
/// `Some(true)` means the boundary-frame component is non-negative: north
/// when the rotated vector lies within 90 degrees of boundary north, east
/// when it lies on the eastern side of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignFlags {
    pub north: Option<bool>,
    pub east: Option<bool>,
}

/// Resolve the signs of the boundary-frame north/east components.
///
/// At least one direction must be requested; an undefined quadrant or
/// angle on any input is rejected rather than silently propagated.
pub fn resolve_signs(
    boundary_quad: Option<Quadrant>,
    vector_quad: Option<Quadrant>,
    apex_naz: Option<f64>,
    pole_angle: Option<f64>,
    north: bool,
    east: bool,
) -> Result<SignFlags> {
    if !north && !east {
        return Err(StateError("must request at least one direction"));
    }
    let signed = signed_boundary_polar_angle(boundary_quad, vector_quad, apex_naz, pole_angle)?;

    Ok(SignFlags {
        north: north.then(|| signed.abs() <= 90.0),
        east: east.then(|| signed >= 0.0),
    })
}
