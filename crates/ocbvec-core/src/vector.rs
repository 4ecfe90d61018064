//! Measurement entity and its normalization pipeline.
//!
//! [`VectorData`] is the unit of work: one measurement's source-frame
//! coordinates and components, plus the boundary-frame state the pipeline
//! fills in. Boundary-frame fields are `Option`s and populate monotonically
//! through `set_boundary_frame`; `None` is the designed "no result", which
//! is also what a wrong-hemisphere measurement leaves behind. Each stage
//! validates the state it needs and stops at the first unmet precondition.

use serde::{Deserialize, Serialize};

use crate::boundary::BoundaryRecord;
use crate::constants::{LT_HOURS, MAG_TOLERANCE};
use crate::error::{Result, StateError};
use crate::pole::vec_pole_angle;
use crate::quadrant::{self, Quadrant};
use crate::scale::{ScaleLaw, boundary_polar_angle};
use crate::sign::resolve_signs;

/// North, east, and vertical (positive down) components of one measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    pub n: f64,
    pub e: f64,
    pub z: f64,
}

impl Components {
    pub fn new(n: f64, e: f64, z: f64) -> Self {
        Self { n, e, z }
    }

    /// Euclidean norm over all three components.
    pub fn magnitude(self) -> f64 {
        (self.n * self.n + self.e * self.e + self.z * self.z).sqrt()
    }

    /// Norm of the horizontal (north/east) part.
    pub fn horizontal(self) -> f64 {
        (self.n * self.n + self.e * self.e).sqrt()
    }
}

/// One vector measurement and its boundary-frame normalization state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VectorData {
    // Identity, immutable after creation.
    dat_ind: usize,
    rec_ind: usize,
    name: String,
    units: String,

    // Source-frame inputs.
    apex_lat: f64,
    apex_lt: f64,
    apex: Components,
    apex_mag: f64,

    // Boundary-frame state, populated by the pipeline.
    ocb_lat: Option<f64>,
    ocb_lt: Option<f64>,
    r_corr: Option<f64>,
    pole_lat: Option<f64>,
    pole_lt: Option<f64>,
    pole_angle: Option<f64>,
    ocb_quad: Option<Quadrant>,
    vec_quad: Option<Quadrant>,
    apex_naz: Option<f64>,
    ocb_n: Option<f64>,
    ocb_e: Option<f64>,
    ocb_z: Option<f64>,
    ocb_mag: Option<f64>,
    unscaled_r: Option<f64>,
    scaled_r: Option<f64>,

    #[serde(skip)]
    scale_law: Option<ScaleLaw>,
}

impl VectorData {
    /// Create a measurement from source-frame data.
    ///
    /// `dat_ind` identifies the measurement, `rec_ind` the boundary record
    /// it was matched to in time. A supplied magnitude must agree with the
    /// component norm within [`MAG_TOLERANCE`]; omitted, it is derived.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        dat_ind: usize,
        rec_ind: usize,
        apex_lat: f64,
        apex_lt: f64,
        apex: Components,
        magnitude: Option<f64>,
        name: &str,
        units: &str,
    ) -> Result<Self> {
        let derived = apex.magnitude();
        let apex_mag = match magnitude {
            Some(mag) if (mag - derived).abs() > MAG_TOLERANCE => {
                return Err(StateError("inconsistent vector components"));
            }
            Some(mag) => mag,
            None => derived,
        };

        Ok(Self {
            dat_ind,
            rec_ind,
            name: name.to_string(),
            units: units.to_string(),
            apex_lat,
            apex_lt,
            apex,
            apex_mag,
            ocb_lat: None,
            ocb_lt: None,
            r_corr: None,
            pole_lat: None,
            pole_lt: None,
            pole_angle: None,
            ocb_quad: None,
            vec_quad: None,
            apex_naz: None,
            ocb_n: None,
            ocb_e: None,
            ocb_z: None,
            ocb_mag: None,
            unscaled_r: None,
            scaled_r: None,
            scale_law: None,
        })
    }

    /// Establish the boundary frame from one time-matched record and run
    /// the full pipeline: pole angle, quadrants, then vector scaling.
    ///
    /// A measurement in the wrong hemisphere, or one the record's transform
    /// cannot place, leaves every boundary-frame field unset and returns
    /// `Ok` — no correspondence is a result, not an error.
    pub fn set_boundary_frame<R: BoundaryRecord + ?Sized>(
        &mut self,
        record: &R,
        law: Option<ScaleLaw>,
    ) -> Result<()> {
        let (pole_lt, pole_colat) = record.pole_location();
        let hemi = record.hemisphere();

        self.scale_law = law;
        self.pole_lt = Some(pole_lt);
        self.pole_lat = Some(hemi * (90.0 - pole_colat));
        self.unscaled_r = Some(record.unscaled_radius());
        self.scaled_r = Some(record.scaled_radius());

        if self.apex_lat.signum() != hemi.signum() {
            tracing::debug!(
                dat_ind = self.dat_ind,
                apex_lat = self.apex_lat,
                "measurement outside boundary hemisphere, no correspondence"
            );
            self.clear_boundary_frame();
            return Ok(());
        }

        let (ocb_lat, ocb_lt, r_corr) = record.normalize(self.apex_lat, self.apex_lt);
        if !ocb_lat.is_finite() || !ocb_lt.is_finite() {
            self.clear_boundary_frame();
            return Ok(());
        }
        self.ocb_lat = Some(ocb_lat);
        self.ocb_lt = Some(ocb_lt);
        self.r_corr = Some(r_corr);

        self.calc_vec_pole_angle()?;
        self.define_quadrants()?;
        self.scale_vector()
    }

    /// Compute the angle at the measurement point between the source pole
    /// and the boundary pole.
    pub fn calc_vec_pole_angle(&mut self) -> Result<()> {
        let angle = vec_pole_angle(
            self.apex_lt,
            self.apex_lat,
            self.pole_lt.unwrap_or(f64::NAN),
            self.pole_lat.unwrap_or(f64::NAN),
        )?;
        self.pole_angle = Some(angle);
        Ok(())
    }

    /// Assign the boundary-pole and vector-heading quadrant labels.
    pub fn define_quadrants(&mut self) -> Result<()> {
        let pole_lt = self
            .pole_lt
            .zip(self.pole_lat)
            .filter(|(lt, lat)| lt.is_finite() && lat.is_finite())
            .map(|(lt, _)| lt)
            .ok_or(StateError("boundary pole location required"))?;
        if !self.apex_lt.is_finite() || !self.apex_lat.is_finite() {
            return Err(StateError("vector source-frame location required"));
        }
        if !self.pole_angle.is_some_and(f64::is_finite) {
            return Err(StateError("vector angle in pole-pole-vector triangle required"));
        }

        let adj_lt = (pole_lt - self.apex_lt).rem_euclid(LT_HOURS);
        let poleward = self.pole_lat.unwrap_or(f64::NAN).abs() >= self.apex_lat.abs();
        self.ocb_quad = Some(quadrant::boundary_quadrant(adj_lt, poleward));
        self.vec_quad = Some(quadrant::vector_quadrant(self.apex.n, self.apex.e));
        Ok(())
    }

    /// Rotate and rescale the vector into the boundary frame.
    ///
    /// Requires boundary coordinates, the boundary-pole location, and the
    /// pole angle; computes quadrants itself if they are not yet assigned.
    /// With no scaling law the operation is a pure rotation and the
    /// magnitude is preserved. With a law, the law scales the horizontal
    /// magnitude and the vertical component; the reported magnitude pairs
    /// the scaled horizontal part with the source-frame vertical component.
    pub fn scale_vector(&mut self) -> Result<()> {
        if !(self.ocb_lat.is_some_and(f64::is_finite) && self.ocb_lt.is_some_and(f64::is_finite)) {
            return Err(StateError("boundary coordinates required"));
        }
        if !(self.pole_lt.is_some_and(f64::is_finite) && self.pole_lat.is_some_and(f64::is_finite))
        {
            return Err(StateError("boundary pole location required"));
        }
        let pole_angle = self
            .pole_angle
            .filter(|x| x.is_finite())
            .ok_or(StateError("vector angle in pole-pole-vector triangle required"))?;

        if self.apex.n == 0.0 && self.apex.e == 0.0 && self.apex.z == 0.0 {
            self.ocb_n = Some(0.0);
            self.ocb_e = Some(0.0);
            self.ocb_z = Some(0.0);
            self.ocb_mag = Some(0.0);
            return Ok(());
        }

        let unscaled_r = self.unscaled_r.unwrap_or(f64::NAN);
        let scaled_r = self.scaled_r.unwrap_or(f64::NAN);
        let horizontal = self.apex.horizontal();

        if horizontal == 0.0 {
            // Purely vertical: no azimuth to speak of, nothing rotates.
            self.apex_naz = None;
            self.ocb_n = Some(0.0);
            self.ocb_e = Some(0.0);
            self.ocb_z = Some(match &self.scale_law {
                None => self.apex.z,
                Some(law) => law.apply(self.apex.z, unscaled_r, scaled_r),
            });
            self.ocb_mag = Some(self.apex.z.abs());
            return Ok(());
        }

        self.apex_naz = Some((self.apex.n / horizontal).clamp(-1.0, 1.0).acos().to_degrees());

        if pole_angle == 0.0 || pole_angle == 180.0 {
            // Measurement on the pole-pole meridian: the frames share their
            // north axis, reversed when the poles are on opposite sides.
            let flip = if pole_angle == 180.0 { -1.0 } else { 1.0 };
            let (n, e, z) = match &self.scale_law {
                None => (self.apex.n, self.apex.e, self.apex.z),
                Some(law) => (
                    law.apply(self.apex.n, unscaled_r, scaled_r),
                    law.apply(self.apex.e, unscaled_r, scaled_r),
                    law.apply(self.apex.z, unscaled_r, scaled_r),
                ),
            };
            self.ocb_n = Some(flip * n);
            self.ocb_e = Some(flip * e);
            self.ocb_z = Some(z);
            self.ocb_mag = Some((n * n + e * e + self.apex.z * self.apex.z).sqrt());
            return Ok(());
        }

        if self.ocb_quad.is_none() || self.vec_quad.is_none() {
            self.define_quadrants()?;
        }

        let ocb_naz =
            boundary_polar_angle(self.ocb_quad, self.vec_quad, self.apex_naz, Some(pole_angle))?;
        let signs = resolve_signs(
            self.ocb_quad,
            self.vec_quad,
            self.apex_naz,
            Some(pole_angle),
            true,
            true,
        )?;

        let (scaled_h, ocb_z) = match &self.scale_law {
            None => (horizontal, self.apex.z),
            Some(law) => (
                law.apply(horizontal, unscaled_r, scaled_r),
                law.apply(self.apex.z, unscaled_r, scaled_r),
            ),
        };

        // The resolver owns both component signs; the folded angle
        // contributes magnitude only.
        let n_sign = if signs.north == Some(true) { 1.0 } else { -1.0 };
        let e_sign = if signs.east == Some(true) { 1.0 } else { -1.0 };
        let rad = ocb_naz.to_radians();
        let ocb_n = n_sign * scaled_h * rad.cos().abs();
        let ocb_e = e_sign * scaled_h * rad.sin();

        self.ocb_n = Some(ocb_n);
        self.ocb_e = Some(ocb_e);
        self.ocb_z = Some(ocb_z);
        self.ocb_mag =
            Some((ocb_n * ocb_n + ocb_e * ocb_e + self.apex.z * self.apex.z).sqrt());
        Ok(())
    }

    fn clear_boundary_frame(&mut self) {
        self.ocb_lat = None;
        self.ocb_lt = None;
        self.r_corr = None;
        self.pole_lat = None;
        self.pole_lt = None;
        self.pole_angle = None;
        self.ocb_quad = None;
        self.vec_quad = None;
        self.apex_naz = None;
        self.ocb_n = None;
        self.ocb_e = None;
        self.ocb_z = None;
        self.ocb_mag = None;
        self.unscaled_r = None;
        self.scaled_r = None;
    }

    // Identity and source-frame accessors.

    pub fn dat_ind(&self) -> usize {
        self.dat_ind
    }

    pub fn rec_ind(&self) -> usize {
        self.rec_ind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn apex_lat(&self) -> f64 {
        self.apex_lat
    }

    pub fn apex_lt(&self) -> f64 {
        self.apex_lt
    }

    pub fn components(&self) -> Components {
        self.apex
    }

    pub fn apex_mag(&self) -> f64 {
        self.apex_mag
    }

    // Boundary-frame accessors; `None` until computed, and `None` forever
    // for measurements with no correspondence in the record.

    pub fn ocb_lat(&self) -> Option<f64> {
        self.ocb_lat
    }

    pub fn ocb_lt(&self) -> Option<f64> {
        self.ocb_lt
    }

    pub fn r_corr(&self) -> Option<f64> {
        self.r_corr
    }

    /// Boundary-pole latitude as seen in the source frame.
    pub fn pole_lat(&self) -> Option<f64> {
        self.pole_lat
    }

    /// Boundary-pole local time as seen in the source frame.
    pub fn pole_lt(&self) -> Option<f64> {
        self.pole_lt
    }

    pub fn pole_angle(&self) -> Option<f64> {
        self.pole_angle
    }

    pub fn ocb_quad(&self) -> Option<Quadrant> {
        self.ocb_quad
    }

    pub fn vec_quad(&self) -> Option<Quadrant> {
        self.vec_quad
    }

    /// Source-frame polar azimuth of the vector, degrees from north.
    pub fn apex_naz(&self) -> Option<f64> {
        self.apex_naz
    }

    pub fn ocb_n(&self) -> Option<f64> {
        self.ocb_n
    }

    pub fn ocb_e(&self) -> Option<f64> {
        self.ocb_e
    }

    pub fn ocb_z(&self) -> Option<f64> {
        self.ocb_z
    }

    pub fn ocb_mag(&self) -> Option<f64> {
        self.ocb_mag
    }

    pub fn unscaled_r(&self) -> Option<f64> {
        self.unscaled_r
    }

    pub fn scaled_r(&self) -> Option<f64> {
        self.scaled_r
    }

    pub fn scale_law(&self) -> Option<&ScaleLaw> {
        self.scale_law.as_ref()
    }
}

impl std::fmt::Display for VectorData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Vector data {} ({}): measurement {}, boundary record {}",
            self.name, self.units, self.dat_ind, self.rec_ind
        )?;
        writeln!(
            f,
            "  apex: lat {:.3}, lt {:.3} h; n {:.3}, e {:.3}, z {:.3}, mag {:.3}",
            self.apex_lat, self.apex_lt, self.apex.n, self.apex.e, self.apex.z, self.apex_mag
        )?;
        match (self.ocb_lat, self.ocb_lt, self.ocb_mag) {
            (Some(lat), Some(lt), Some(mag)) => writeln!(
                f,
                "  boundary: lat {:.3}, lt {:.3} h; mag {:.3}",
                lat, lt, mag
            )?,
            _ => writeln!(f, "  boundary: not computed")?,
        }
        match &self.scale_law {
            None => write!(f, "  no magnitude scaling function"),
            Some(law) => write!(f, "  magnitude scaling function: {}", law.name()),
        }
    }
}
