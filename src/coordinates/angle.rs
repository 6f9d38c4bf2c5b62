//! # Angular Units Module
//!
//! This module provides the unit selector used by the angle and rotation
//! methods of [`Vector3D`](crate::Vector3D).
//!
//! ## Design Philosophy
//!
//! Angles are passed around as plain `f64` values. The caller states which
//! unit a value is in with [`AngularUnits`], and conversion happens exactly
//! once at the boundary: inputs are converted to radians before any
//! trigonometry, outputs are converted from radians on the way out.
//!
//! Radians are the default unit.
//!
//! ## Examples
//!
//! ```rust
//! use vector3d::coordinates::angle::AngularUnits;
//!
//! let right_angle = AngularUnits::Degrees.to_radians(90.0);
//! assert!((right_angle - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//!
//! // Radians pass through untouched
//! assert_eq!(AngularUnits::Radians.to_radians(1.25), 1.25);
//! ```

use crate::constants::{DEG2RAD, RAD2DEG};

/// Unit in which an angle argument or result is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngularUnits {
    /// Angle in radians
    #[default]
    Radians,
    /// Angle in degrees
    Degrees,
}

impl AngularUnits {
    /// Converts a value expressed in these units to radians
    ///
    /// # Precision Notes
    ///
    /// - Radian values are returned exactly
    /// - Conversion from degrees uses: `degrees * (π / 180.0)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::coordinates::angle::AngularUnits;
    ///
    /// let rad = AngularUnits::Degrees.to_radians(180.0);
    /// assert!((rad - std::f64::consts::PI).abs() < 1e-15);
    /// ```
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngularUnits::Radians => value,
            AngularUnits::Degrees => value * DEG2RAD,
        }
    }

    /// Converts a value in radians to these units
    ///
    /// # Precision Notes
    ///
    /// - Radian values are returned exactly
    /// - Conversion to degrees uses: `radians * (180.0 / π)`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::coordinates::angle::AngularUnits;
    ///
    /// let deg = AngularUnits::Degrees.express_radians(std::f64::consts::FRAC_PI_2);
    /// assert!((deg - 90.0).abs() < 1e-13);
    /// ```
    pub fn express_radians(self, radians: f64) -> f64 {
        match self {
            AngularUnits::Radians => radians,
            AngularUnits::Degrees => radians * RAD2DEG,
        }
    }
}
