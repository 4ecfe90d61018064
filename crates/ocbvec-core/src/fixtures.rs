//! Shared boundary-record double for unit tests.

use crate::boundary::BoundaryRecord;
use crate::constants::{DEG_PER_HOUR, LT_HOURS};

/// A circular boundary offset from the source pole, with a planar
/// transform that recenters colatitude on the boundary pole and rescales
/// by the scaled-to-unscaled radius ratio.
pub(crate) struct CircleRecord {
    pub pole_lt: f64,
    pub pole_colat: f64,
    pub radius: f64,
    pub scaled: f64,
    pub hemi: f64,
}

impl CircleRecord {
    /// The record most tests share: a northern boundary whose pole sits at
    /// 5.832 h, 2.76 degrees colatitude, radius 14.09 scaled to 16.
    pub fn reference() -> Self {
        Self {
            pole_lt: 5.832,
            pole_colat: 2.76,
            radius: 14.09,
            scaled: 16.0,
            hemi: 1.0,
        }
    }
}

impl BoundaryRecord for CircleRecord {
    fn pole_location(&self) -> (f64, f64) {
        (self.pole_lt, self.pole_colat)
    }

    fn hemisphere(&self) -> f64 {
        self.hemi
    }

    fn normalize(&self, lat: f64, lt: f64) -> (f64, f64, f64) {
        if lat.signum() != self.hemi {
            return (f64::NAN, f64::NAN, 0.0);
        }
        let pole_theta = (self.pole_lt * DEG_PER_HOUR).to_radians();
        let xc = self.pole_colat * pole_theta.cos();
        let yc = self.pole_colat * pole_theta.sin();

        let theta = (lt * DEG_PER_HOUR).to_radians();
        let colat = 90.0 - lat.abs();
        let xp = colat * theta.cos();
        let yp = colat * theta.sin();

        let ratio = self.scaled / self.radius;
        let xn = (xp - xc) * ratio;
        let yn = (yp - yc) * ratio;

        let bnd_lat = self.hemi * (90.0 - xn.hypot(yn));
        let bnd_lt = (yn.atan2(xn).to_degrees() / DEG_PER_HOUR).rem_euclid(LT_HOURS);
        (bnd_lat, bnd_lt, 0.0)
    }

    fn unscaled_radius(&self) -> f64 {
        self.radius
    }

    fn scaled_radius(&self) -> f64 {
        self.scaled
    }
}
