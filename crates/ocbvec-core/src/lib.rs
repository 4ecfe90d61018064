//! OCB vector normalization engine.
//!
//! Maps vector-valued measurements (electric field, plasma drift) from the
//! magnetic-apex frame into a frame normalized to a time-varying open/closed
//! field-line boundary (OCB). Each measurement is rotated through the
//! spherical triangle spanned by the apex pole, the boundary pole, and the
//! measurement point, then rescaled by a pluggable physical law.
//!
//! Zero I/O — pure math engine with no opinions about boundary-file formats
//! or time matching; those live behind the [`BoundaryRecord`] contract.

pub mod batch;
pub mod boundary;
pub mod constants;
pub mod error;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod pole;
pub mod quadrant;
pub mod scale;
pub mod sign;
pub mod trig;
pub mod vector;

pub use batch::set_boundary_frames;
pub use boundary::BoundaryRecord;
pub use constants::{DEG_PER_HOUR, LT_HOURS, MAG_TOLERANCE, RAD_PER_HOUR};
pub use error::{Result, StateError};
pub use pole::vec_pole_angle;
pub use quadrant::Quadrant;
pub use scale::{ScaleLaw, boundary_polar_angle, signed_boundary_polar_angle};
pub use sign::{SignFlags, resolve_signs};
pub use trig::{archav, hav};
pub use vector::{Components, VectorData};
