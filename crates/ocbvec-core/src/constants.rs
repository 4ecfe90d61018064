/// Hours of local time in one full rotation of the source frame.
pub const LT_HOURS: f64 = 24.0;

/// Degrees of longitude per local-time hour.
pub const DEG_PER_HOUR: f64 = 15.0;

/// Radians of longitude per local-time hour (π / 12).
pub const RAD_PER_HOUR: f64 = std::f64::consts::PI / 12.0;

/// Tolerance when checking a caller-supplied magnitude against the
/// component norm at construction.
pub const MAG_TOLERANCE: f64 = 1.0e-3;
