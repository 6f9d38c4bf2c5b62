pub mod angle;
pub(crate) mod quaternion;
pub mod vector3d;
