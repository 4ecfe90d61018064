//! Quadrant classifier.
//!
//! Two quadrant labels disambiguate every sign and angle-folding decision
//! downstream: one for where the boundary pole sits relative to the
//! measurement, one for where the measurement's vector points. Both use the
//! same compass convention centred on the measurement location, with
//! vertical positive down: 1 [N,E], 2 [N,W], 3 [S,W], 4 [S,E].

use serde::{Deserialize, Serialize};

use crate::constants::LT_HOURS;

/// One of the four compass quadrants at the measurement location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quadrant {
    /// Quadrant 1: north and east.
    NorthEast,
    /// Quadrant 2: north and west.
    NorthWest,
    /// Quadrant 3: south and west.
    SouthWest,
    /// Quadrant 4: south and east.
    SouthEast,
}

impl Quadrant {
    /// Zero-based index for table lookups, in label order 1-4.
    pub fn index(self) -> usize {
        match self {
            Quadrant::NorthEast => 0,
            Quadrant::NorthWest => 1,
            Quadrant::SouthWest => 2,
            Quadrant::SouthEast => 3,
        }
    }

    /// Sign of an azimuth measured from north into this quadrant:
    /// positive toward east, negative toward west.
    pub fn azimuth_sign(self) -> f64 {
        match self {
            Quadrant::NorthEast | Quadrant::SouthEast => 1.0,
            Quadrant::NorthWest | Quadrant::SouthWest => -1.0,
        }
    }
}

/// Quadrant of the boundary pole relative to the measurement location.
///
/// `adj_lt` is the boundary-pole local time minus the measurement local
/// time, wrapped into [0, 24); under 12 hours the pole sits to the east.
/// `poleward` says whether the boundary pole is closer to the source pole
/// than the measurement is.
pub fn boundary_quadrant(adj_lt: f64, poleward: bool) -> Quadrant {
    let east = adj_lt.rem_euclid(LT_HOURS) < LT_HOURS / 2.0;
    match (poleward, east) {
        (true, true) => Quadrant::NorthEast,
        (true, false) => Quadrant::NorthWest,
        (false, false) => Quadrant::SouthWest,
        (false, true) => Quadrant::SouthEast,
    }
}

/// Quadrant the measurement's vector points into, from its north and east
/// component signs. Zero components count as positive, matching the
/// compass convention above.
pub fn vector_quadrant(n: f64, e: f64) -> Quadrant {
    if n >= 0.0 {
        if e >= 0.0 {
            Quadrant::NorthEast
        } else {
            Quadrant::NorthWest
        }
    } else if e < 0.0 {
        Quadrant::SouthWest
    } else {
        Quadrant::SouthEast
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_quadrant_compass() {
        assert_eq!(boundary_quadrant(7.832, true), Quadrant::NorthEast);
        assert_eq!(boundary_quadrant(13.0, true), Quadrant::NorthWest);
        assert_eq!(boundary_quadrant(13.0, false), Quadrant::SouthWest);
        assert_eq!(boundary_quadrant(7.832, false), Quadrant::SouthEast);
    }

    #[test]
    fn test_boundary_quadrant_wraps_offset() {
        // -22 h measurement local time pushes the raw offset past 24.
        assert_eq!(boundary_quadrant(27.832, true), Quadrant::NorthEast);
        assert_eq!(boundary_quadrant(-2.0, true), Quadrant::NorthWest);
    }

    #[test]
    fn test_vector_quadrant_signs() {
        assert_eq!(vector_quadrant(50.0, 86.5), Quadrant::NorthEast);
        assert_eq!(vector_quadrant(50.0, -86.5), Quadrant::NorthWest);
        assert_eq!(vector_quadrant(-50.0, -86.5), Quadrant::SouthWest);
        assert_eq!(vector_quadrant(-50.0, 86.5), Quadrant::SouthEast);
    }

    #[test]
    fn test_vector_quadrant_zero_components() {
        assert_eq!(vector_quadrant(0.0, 0.0), Quadrant::NorthEast);
        assert_eq!(vector_quadrant(0.0, -1.0), Quadrant::NorthWest);
        assert_eq!(vector_quadrant(-1.0, 0.0), Quadrant::SouthEast);
    }

    #[test]
    fn test_azimuth_sign_east_positive() {
        assert_eq!(Quadrant::NorthEast.azimuth_sign(), 1.0);
        assert_eq!(Quadrant::SouthEast.azimuth_sign(), 1.0);
        assert_eq!(Quadrant::NorthWest.azimuth_sign(), -1.0);
        assert_eq!(Quadrant::SouthWest.azimuth_sign(), -1.0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let q = Quadrant::SouthWest;
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(serde_json::from_str::<Quadrant>(&json).unwrap(), q);
    }
}
