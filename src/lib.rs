//! Vector3D: a precise, allocation-free 3D vector value type
//!
//! This crate provides a single geometric value type, [`Vector3D`], with
//! componentwise arithmetic, tolerance-based comparison, length, distance and
//! angle queries, and axis-angle rotation by quaternion conjugation.
//!
//! Degenerate numeric input never panics. Each degenerate case has a
//! documented result (NaN, a zero angle, or a no-op); the only reported
//! failure is rescaling a zero vector to a non-zero length.
//!
//! ```rust
//! use vector3d::{AngularUnits, Vector3D};
//!
//! let mut v = Vector3D::new(31.374, -34.234, 11.474);
//! v.set_length(42.0)?;
//! assert!((v.length() - 42.0).abs() < 1e-12);
//!
//! let nan = Vector3D::new(1.0, 2.0, 3.0) / 0.0;
//! assert!(nan.is_nan());
//!
//! let deg = Vector3D::new(3.436, 0.0, 0.0).angle_in((0.0, -5.346, 0.0), AngularUnits::Degrees);
//! assert!((deg - 90.0).abs() < 1e-8);
//! # Ok::<(), vector3d::VectorError>(())
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;

// Re-export commonly used types
pub use coordinates::angle::AngularUnits;
pub use coordinates::vector3d::Vector3D;

/// Main error type for the vector3d library
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum VectorError {
    /// A zero vector has no direction to preserve when rescaling
    #[error("Cannot set length {target} on a zero vector: direction is undefined")]
    ZeroLength {
        /// The requested length
        target: f64,
    },
}

/// Result type for vector3d operations
pub type Result<T> = std::result::Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = VectorError::ZeroLength { target: 42.0 };
        assert_eq!(
            err.to_string(),
            "Cannot set length 42 on a zero vector: direction is undefined"
        );
    }

    #[test]
    fn test_set_length_propagates_with_question_mark() {
        fn rescale(v: &mut Vector3D) -> Result<f64> {
            v.set_length(2.0)?;
            Ok(v.length())
        }

        let mut unit = Vector3D::new(0.0, 1.0, 0.0);
        assert_eq!(rescale(&mut unit), Ok(2.0));

        let mut zero = Vector3D::default();
        assert_eq!(
            rescale(&mut zero),
            Err(VectorError::ZeroLength { target: 2.0 })
        );
    }
}
