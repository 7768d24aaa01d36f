//! Cartesian vectors and rotation matrices.

mod rotation_matrix;
mod vector3;

pub use rotation_matrix::{compute_rotation_matrix, RotationMatrix3};
pub use vector3::Vector3;
