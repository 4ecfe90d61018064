//! Polar-angle composition and magnitude laws.
//!
//! The polar angle of a vector within the boundary frame is the source-frame
//! azimuth composed with the pole angle: both are signed east-positive via
//! their quadrant labels and the difference is normalized to (-180, 180],
//! which is the spherical-triangle interior/exterior angle rule written
//! down once instead of case by case.
//! The magnitude side is an injected [`ScaleLaw`], a pure function of the
//! value and the two representative boundary radii.

use std::fmt;
use std::sync::Arc;

use crate::error::{Result, StateError};
use crate::quadrant::Quadrant;

/// Signed polar angle (degrees, (-180, 180]) of the vector measured from
/// boundary-frame north, east positive.
///
/// Signed azimuths (east positive) are taken from the quadrant labels:
/// the vector sits at `±apex_naz` from source north, the boundary pole at
/// `±pole_angle`. Their difference, normalized into (-180, 180], is the
/// full rotation result: the magnitude is the angle from boundary north
/// and the sign says which side of boundary north the vector falls on.
pub fn signed_boundary_polar_angle(
    boundary_quad: Option<Quadrant>,
    vector_quad: Option<Quadrant>,
    apex_naz: Option<f64>,
    pole_angle: Option<f64>,
) -> Result<f64> {
    let b = boundary_quad.ok_or(StateError("boundary quadrant undefined"))?;
    let v = vector_quad.ok_or(StateError("vector quadrant undefined"))?;
    let naz = apex_naz
        .filter(|x| x.is_finite())
        .ok_or(StateError("source-frame polar azimuth undefined"))?;
    let pole = pole_angle
        .filter(|x| x.is_finite())
        .ok_or(StateError("vector angle undefined"))?;

    let mut angle = (v.azimuth_sign() * naz - b.azimuth_sign() * pole).rem_euclid(360.0);
    if angle > 180.0 {
        angle -= 360.0;
    }
    Ok(angle)
}

/// Polar angle (degrees, [0, 180]) of the vector measured from
/// boundary-frame north: the magnitude of the signed fold. The discarded
/// sign lives in [`crate::sign::resolve_signs`].
pub fn boundary_polar_angle(
    boundary_quad: Option<Quadrant>,
    vector_quad: Option<Quadrant>,
    apex_naz: Option<f64>,
    pole_angle: Option<f64>,
) -> Result<f64> {
    Ok(signed_boundary_polar_angle(boundary_quad, vector_quad, apex_naz, pole_angle)?.abs())
}

/// Physical magnitude law, injected by the caller.
///
/// Maps `(value, unscaled_radius, scaled_radius)` to the boundary-frame
/// value. Pure and side-effect free; the engine treats the radii as opaque
/// inputs supplied by the boundary collaborator. The name appears in the
/// measurement summary.
#[derive(Clone)]
pub struct ScaleLaw {
    name: String,
    law: Arc<dyn Fn(f64, f64, f64) -> f64 + Send + Sync>,
}

impl ScaleLaw {
    pub fn new(
        name: impl Into<String>,
        law: impl Fn(f64, f64, f64) -> f64 + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            law: Arc::new(law),
        }
    }

    /// Law for quantities proportional to the electric field:
    /// value × unscaled / scaled.
    pub fn field_proportional() -> Self {
        Self::new("electric field", |value, unscaled_r, scaled_r| {
            value * unscaled_r / scaled_r
        })
    }

    /// Law for quantities proportional to the curl of the electric field:
    /// value × (unscaled / scaled)².
    pub fn curl_proportional() -> Self {
        Self::new("curl of electric field", |value, unscaled_r, scaled_r| {
            value * (unscaled_r / scaled_r).powi(2)
        })
    }

    pub fn apply(&self, value: f64, unscaled_r: f64, scaled_r: f64) -> f64 {
        (self.law)(value, unscaled_r, scaled_r)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for ScaleLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaleLaw")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
