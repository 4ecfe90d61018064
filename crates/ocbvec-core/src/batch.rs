//! Batch normalization: run the full pipeline over many measurements.
//!
//! A pass over a satellite track produces thousands of measurements matched
//! to the same handful of boundary records. Each measurement's pipeline is
//! independent of every other's, so the batch fans out with rayon and each
//! worker mutates only its own entry. Failures are per-measurement: one
//! ill-formed vector must not discard the rest of the pass.

use rayon::prelude::*;

use crate::boundary::BoundaryRecord;
use crate::error::Result;
use crate::scale::ScaleLaw;
use crate::vector::VectorData;

/// Normalize every measurement in `vectors` against `record`, applying
/// `law` to each. Returns one `Result` per input, index-aligned, so a
/// caller can report failures without losing the successes around them.
pub fn set_boundary_frames<R>(
    vectors: &mut [VectorData],
    record: &R,
    law: Option<&ScaleLaw>,
) -> Vec<Result<()>>
where
    R: BoundaryRecord + Sync + ?Sized,
{
    let outcomes: Vec<Result<()>> = vectors
        .par_iter_mut()
        .map(|vec| vec.set_boundary_frame(record, law.cloned()))
        .collect();

    let failed = outcomes.iter().filter(|res| res.is_err()).count();
    tracing::info!(
        total = vectors.len(),
        failed,
        "batch boundary-frame normalization finished"
    );
    outcomes
}
