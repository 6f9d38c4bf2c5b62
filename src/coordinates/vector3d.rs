//! # Vector3D Module
//!
//! This module provides [`Vector3D`], a small allocation-free value type for a
//! point or direction in three-dimensional space, together with the arithmetic,
//! metric and rotation operations needed to manipulate it.
//!
//! ## Tolerance
//!
//! Zero tests and equality use an absolute tolerance of machine epsilon
//! ([`EPSILON`](crate::constants::EPSILON)):
//! - a component is *near-zero* if `|c| < ε`
//! - two components are *near-equal* if `|a - b| < ε`
//!
//! The tolerance is absolute, not relative. It is only meaningful for values
//! close to zero, and equality between large-magnitude vectors degenerates to
//! (almost) exact comparison. This is the defined behavior of the type.
//!
//! ## Degenerate Inputs
//!
//! No operation panics on degenerate numeric input:
//! - dividing by a near-zero scalar yields NaN in all three components
//! - the angle involving a zero vector is `0.0`
//! - rotating a zero vector, about a zero axis, or by a near-zero angle is a no-op
//! - [`Vector3D::set_length`] on a zero vector with a non-zero target is the
//!   only operation that reports failure, via [`VectorError::ZeroLength`]
//!
//! ## Examples
//!
//! ```rust
//! use vector3d::{AngularUnits, Vector3D};
//!
//! let mut v = Vector3D::new(5.0, 0.0, 0.0);
//! v.rotate_in((0.0, 0.0, -1.0), 90.0, AngularUnits::Degrees);
//! assert!((v.x() - 0.0).abs() < 1e-12);
//! assert!((v.y() - 5.0).abs() < 1e-12);
//!
//! let quarter = Vector3D::new(3.436, 0.0, 0.0).angle_in((0.0, -5.346, 0.0), AngularUnits::Degrees);
//! assert!((quarter - 90.0).abs() < 1e-8);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use log::{debug, trace};
use nalgebra::Vector3;

use super::angle::AngularUnits;
use super::quaternion::Quaternion;
use crate::constants::{is_near_equal, is_near_zero};
use crate::{Result, VectorError};

/// Three-dimensional vector of `f64` components
///
/// Represents either a position or a direction. No invariant is enforced on
/// the components: they may be any finite value, NaN or infinity, and some
/// operations deliberately produce NaN on degenerate input.
///
/// # Comparison Semantics
///
/// Equality and ordering deliberately use different rules:
/// - `==` compares each component pair with the near-equal tolerance
/// - `<`, `<=`, `>`, `>=` compare `(x, y, z)` lexicographically with plain
///   floating-point comparison, no tolerance
///
/// Two vectors whose components differ by less than epsilon but are not
/// bit-identical therefore compare equal under `==` while one is still
/// strictly less than the other. Equality is reflexive only for vectors
/// with finite components, and is not transitive across chains of values
/// each within epsilon of the next.
///
/// ```rust
/// use vector3d::Vector3D;
///
/// let a = Vector3D::new(1.0, 0.0, 0.0);
/// let b = Vector3D::new(1.0, 0.0, 1e-17);
/// assert!(a == b);
/// assert!(a < b);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3D {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3D {
    /// The zero vector
    pub const ZERO: Vector3D = Vector3D {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    const NAN: Vector3D = Vector3D {
        x: f64::NAN,
        y: f64::NAN,
        z: f64::NAN,
    };

    /// Creates a new vector from its three components
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3D;
    ///
    /// let v = Vector3D::new(1.0, -2.0, 3.0);
    /// assert_eq!(v.x(), 1.0);
    /// assert_eq!(v.y(), -2.0);
    /// assert_eq!(v.z(), 3.0);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3D { x, y, z }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn set_z(&mut self, z: f64) {
        self.z = z;
    }

    /// Sets all three components
    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Copies all three components from another vector
    pub fn set_from(&mut self, other: &Vector3D) {
        *self = *other;
    }

    /// Returns true if every component is near-zero
    ///
    /// Tiny signed values, including both signed zeros, count as zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3D;
    ///
    /// assert!(Vector3D::new(0.0, -0.0, 1e-17).is_zero());
    /// assert!(!Vector3D::new(0.0, 42.0, 0.0).is_zero());
    /// ```
    pub fn is_zero(&self) -> bool {
        is_near_zero(self.x) && is_near_zero(self.y) && is_near_zero(self.z)
    }

    /// Returns true if any component is NaN
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Calculates the Euclidean length of the vector
    ///
    /// # Mathematical Formula
    ///
    /// `length = sqrt(x² + y² + z²)`
    ///
    /// NaN and infinite components propagate through the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3D;
    ///
    /// assert_eq!(Vector3D::new(3.0, 4.0, 0.0).length(), 5.0);
    /// assert_eq!(Vector3D::default().length(), 0.0);
    /// ```
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Rescales the vector to `length`, preserving its direction
    ///
    /// A near-zero target sets the vector to exactly `(0, 0, 0)` and always
    /// succeeds. A negative target flips the direction and yields length
    /// `|length|`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::ZeroLength`] if the vector is zero and the
    /// target is not, since there is no direction to preserve. The vector is
    /// left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3D;
    ///
    /// let mut v = Vector3D::new(3.0, 4.0, 0.0);
    /// v.set_length(10.0).unwrap();
    /// assert!((v.x() - 6.0).abs() < 1e-12);
    /// assert!((v.y() - 8.0).abs() < 1e-12);
    ///
    /// assert!(Vector3D::default().set_length(1.0).is_err());
    /// ```
    pub fn set_length(&mut self, length: f64) -> Result<()> {
        if is_near_zero(length) {
            *self = Vector3D::ZERO;
            return Ok(());
        }

        if self.is_zero() {
            debug!("cannot rescale zero vector {} to length {}", self, length);
            return Err(VectorError::ZeroLength { target: length });
        }

        let factor = self.length() / length;
        self.x /= factor;
        self.y /= factor;
        self.z /= factor;
        Ok(())
    }

    /// Calculates the Euclidean distance to another point
    ///
    /// Equivalent to `(self - other).length()`. The other point may be given
    /// as a `Vector3D`, an `[f64; 3]` or an `(f64, f64, f64)` tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3D;
    ///
    /// let origin = Vector3D::default();
    /// assert_eq!(origin.distance((3.0, 0.0, 4.0)), 5.0);
    /// assert_eq!(origin.distance(Vector3D::new(0.0, -5.0, 0.0)), 5.0);
    /// ```
    pub fn distance(&self, other: impl Into<Vector3D>) -> f64 {
        (*self - other.into()).length()
    }

    /// Calculates the dot product with another vector
    ///
    /// # Mathematical Formula
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`
    pub fn dot(&self, other: &Vector3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product with another vector
    ///
    /// # Mathematical Formula
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3D;
    ///
    /// let x_axis = Vector3D::new(1.0, 0.0, 0.0);
    /// let y_axis = Vector3D::new(0.0, 1.0, 0.0);
    /// assert_eq!(x_axis.cross(&y_axis), Vector3D::new(0.0, 0.0, 1.0));
    /// ```
    pub fn cross(&self, other: &Vector3D) -> Vector3D {
        Vector3D {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Angle to another vector in radians, in `[0, π]`
    ///
    /// See [`Vector3D::angle_in`].
    pub fn angle(&self, other: impl Into<Vector3D>) -> f64 {
        self.angle_in(other, AngularUnits::Radians)
    }

    /// Angle to another vector in the given units
    ///
    /// Computed as `acos((a·b) / (|a|·|b|))`. The cosine is clamped to
    /// `[-1, 1]` first so rounding cannot push it outside the domain of
    /// `acos`. If either vector is zero the angle is `0.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::{AngularUnits, Vector3D};
    ///
    /// let up = Vector3D::new(0.0, 2.567, 0.0);
    /// let down = [0.0, -14.346, 0.0];
    /// assert!((up.angle_in(down, AngularUnits::Degrees) - 180.0).abs() < 1e-8);
    /// assert_eq!(up.angle(Vector3D::default()), 0.0);
    /// ```
    pub fn angle_in(&self, other: impl Into<Vector3D>, units: AngularUnits) -> f64 {
        let other = other.into();
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }

        let cos_angle = (self.dot(&other) / (self.length() * other.length())).clamp(-1.0, 1.0);
        units.express_radians(cos_angle.acos())
    }

    /// Rotates the vector in place about `axis` by `angle` radians
    ///
    /// See [`Vector3D::rotate_in`].
    pub fn rotate(&mut self, axis: impl Into<Vector3D>, angle: f64) {
        self.rotate_in(axis, angle, AngularUnits::Radians)
    }

    /// Rotates the vector in place about `axis` (through the origin) by `angle`
    ///
    /// The rotation is applied by quaternion conjugation. A positive angle
    /// turns the vector clockwise when viewed from the tip of the axis
    /// looking toward the origin: rotating `(5, 0, 0)` by 90° about
    /// `(0, 0, -1)` gives `(0, 5, 0)`.
    ///
    /// The angle is not range-reduced. Angles beyond a full turn give the
    /// equivalent rotation through the periodicity of `sin`/`cos`.
    ///
    /// The vector is left unchanged if the axis is zero, the vector itself
    /// is zero, or the angle (after conversion to radians) is near-zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::{AngularUnits, Vector3D};
    ///
    /// let mut v = Vector3D::new(1.0, 0.0, 0.0);
    /// v.rotate_in(Vector3D::new(0.0, 1.0, 0.0), 90.0, AngularUnits::Degrees);
    /// assert!(v.x().abs() < 1e-15);
    /// assert!((v.z() - 1.0).abs() < 1e-15);
    /// ```
    pub fn rotate_in(&mut self, axis: impl Into<Vector3D>, angle: f64, units: AngularUnits) {
        let axis = axis.into();
        let angle = units.to_radians(angle);

        if axis.is_zero() || self.is_zero() || is_near_zero(angle) {
            debug!(
                "rotation of {} about {} by {} rad is degenerate; leaving unchanged",
                self, axis, angle
            );
            return;
        }

        let rotation = Quaternion::from_axis_angle(axis, -angle);
        *self = rotation.conjugate_vector(*self);
        trace!("rotated about {} by {} rad to {}", axis, angle, self);
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vector3d::Vector3D;
    /// use nalgebra::Vector3;
    ///
    /// let vec: Vector3<f64> = Vector3D::new(1.0, 2.0, 3.0).to_vector3();
    /// assert_eq!(vec.x, 1.0);
    /// assert_eq!(vec.y, 2.0);
    /// assert_eq!(vec.z, 3.0);
    /// ```
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Vector3D {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl From<[f64; 3]> for Vector3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3D { x, y, z }
    }
}

impl From<(f64, f64, f64)> for Vector3D {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3D { x, y, z }
    }
}

impl From<Vector3<f64>> for Vector3D {
    fn from(vec: Vector3<f64>) -> Self {
        Vector3D::from_vector3(vec)
    }
}

impl From<Vector3D> for [f64; 3] {
    fn from(v: Vector3D) -> Self {
        [v.x, v.y, v.z]
    }
}

impl PartialEq for Vector3D {
    fn eq(&self, other: &Vector3D) -> bool {
        is_near_equal(self.x, other.x)
            && is_near_equal(self.y, other.y)
            && is_near_equal(self.z, other.z)
    }
}

// Lexicographic over (x, y, z) without tolerance; see the type docs
impl PartialOrd for Vector3D {
    fn partial_cmp(&self, other: &Vector3D) -> Option<Ordering> {
        match self.x.partial_cmp(&other.x)? {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        match self.y.partial_cmp(&other.y)? {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        self.z.partial_cmp(&other.z)
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector3D({},{},{}, length={})",
            self.x,
            self.y,
            self.z,
            self.length()
        )
    }
}

// Arithmetic operations
impl Add for Vector3D {
    type Output = Vector3D;

    fn add(self, other: Vector3D) -> Vector3D {
        Vector3D {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vector3D {
    fn add_assign(&mut self, other: Vector3D) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vector3D {
    type Output = Vector3D;

    fn sub(self, other: Vector3D) -> Vector3D {
        Vector3D {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl SubAssign for Vector3D {
    fn sub_assign(&mut self, other: Vector3D) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Neg for Vector3D {
    type Output = Vector3D;

    fn neg(self) -> Vector3D {
        Vector3D {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

// Plain IEEE scaling: an infinite component times 0.0 is NaN
impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, scalar: f64) -> Vector3D {
        Vector3D {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Mul<Vector3D> for f64 {
    type Output = Vector3D;

    fn mul(self, vector: Vector3D) -> Vector3D {
        vector * self
    }
}

impl MulAssign<f64> for Vector3D {
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}

/// Componentwise division
///
/// A near-zero divisor makes every component NaN. Tiny divisors outside the
/// tolerance follow IEEE division and may produce infinities.
impl Div<f64> for Vector3D {
    type Output = Vector3D;

    fn div(self, scalar: f64) -> Vector3D {
        if is_near_zero(scalar) {
            debug!("division of {} by near-zero scalar {}; result is NaN", self, scalar);
            return Vector3D::NAN;
        }

        Vector3D {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl DivAssign<f64> for Vector3D {
    fn div_assign(&mut self, scalar: f64) {
        *self = *self / scalar;
    }
}
