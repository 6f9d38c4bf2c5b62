//! Unit quaternion arithmetic backing [`Vector3D::rotate`](crate::Vector3D::rotate)
//!
//! A vector is rotated by conjugation: it is embedded as the pure quaternion
//! `(0, v)` and sandwiched as `q · v · q*`. For a unit quaternion the
//! conjugate `q*` is also its inverse.

use std::ops::Mul;

use super::vector3d::Vector3D;

/// Quaternion `w + xi + yj + zk`
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    /// Builds the rotation quaternion for `angle` radians about `axis`
    ///
    /// The axis is normalized here; callers must reject a zero axis first.
    /// It is rescaled by its largest component beforehand so the length
    /// cannot overflow for huge finite components.
    pub fn from_axis_angle(axis: Vector3D, angle: f64) -> Self {
        let largest = axis.x().abs().max(axis.y().abs()).max(axis.z().abs());
        let axis = Vector3D::new(axis.x() / largest, axis.y() / largest, axis.z() / largest);
        let half_angle = angle / 2.0;
        let s = half_angle.sin() / axis.length();
        Quaternion {
            x: axis.x() * s,
            y: axis.y() * s,
            z: axis.z() * s,
            w: half_angle.cos(),
        }
    }

    /// Embeds a vector as the pure quaternion `(0, v)`
    pub fn pure(v: Vector3D) -> Self {
        Quaternion {
            x: v.x(),
            y: v.y(),
            z: v.z(),
            w: 0.0,
        }
    }

    pub fn conjugate(self) -> Self {
        Quaternion {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Vector part `(x, y, z)`, discarding the scalar part
    pub fn vector_part(self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }

    /// Rotates `v` by conjugation with this quaternion
    pub fn conjugate_vector(self, v: Vector3D) -> Vector3D {
        (self * Quaternion::pure(v) * self.conjugate()).vector_part()
    }
}

// Hamilton product
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}
