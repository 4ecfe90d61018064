//! Contract for the external boundary-record provider.
//!
//! The engine never reads boundary files, fits boundaries, or matches
//! records in time — an upstream collaborator does all of that and hands
//! the engine one already-selected record through this trait. Boundary data
//! stays owned by the collaborator; the engine copies out only the scalars
//! it needs for a single measurement.

/// One time-matched boundary record.
pub trait BoundaryRecord {
    /// Boundary-pole location in the source frame: local-time coordinate
    /// (hours, 0-24) and colatitude from the source pole (degrees).
    fn pole_location(&self) -> (f64, f64);

    /// Hemisphere the boundary was fit in: +1.0 north, -1.0 south.
    fn hemisphere(&self) -> f64;

    /// Map a source-frame location into the boundary frame.
    ///
    /// Returns (boundary latitude, boundary local time, radial correction).
    /// Non-finite outputs mean the location has no correspondence in this
    /// record; the engine treats that as a valid "no result", not an error.
    fn normalize(&self, lat: f64, lt: f64) -> (f64, f64, f64);

    /// Representative boundary radius before normalization (degrees).
    fn unscaled_radius(&self) -> f64;

    /// Representative boundary radius after normalization (degrees).
    fn scaled_radius(&self) -> f64;
}
