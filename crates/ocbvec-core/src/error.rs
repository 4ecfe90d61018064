use std::fmt;

/// A required quantity is missing or inconsistent at the point of use.
///
/// Every engine failure is this one kind, distinguished by message: the
/// pipeline validates its partially-computed state before each stage and
/// stops at the first unmet precondition. These are logic errors in the
/// caller's pipeline, never transient faults — retrying cannot fix them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateError(pub &'static str);

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid state for operation: {}", self.0)
    }
}

impl std::error::Error for StateError {}

pub type Result<T> = std::result::Result<T, StateError>;
