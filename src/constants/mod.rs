//! Constants module for vector calculations

use std::f64::consts::PI;

// Tolerance
/// Absolute tolerance used by the near-zero and near-equal comparisons
///
/// This is machine epsilon for `f64`. It is an absolute tolerance, so it is
/// only meaningful for values close to zero.
pub const EPSILON: f64 = f64::EPSILON;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

/// Returns true if `value` is strictly within [`EPSILON`] of zero
///
/// Both signed zeros count as zero. NaN never does.
#[inline]
pub(crate) fn is_near_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Returns true if `a` and `b` differ by strictly less than [`EPSILON`]
///
/// Infinities of the same sign are not near-equal, since their difference is NaN.
#[inline]
pub(crate) fn is_near_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
