//! 3x3 rotation matrices.
//!
//! Every frame-to-frame rotation in the conversion engine (frame bias, precession,
//! nutation, FK4 to FK5, galactic, earth rotation, horizon) is a [`RotationMatrix3`].
//! All of them are built from one axis-angle kernel (Rodrigues' formula), exposed
//! for arbitrary axes as [`compute_rotation_matrix`].
//!
//! # Two conventions
//!
//! [`compute_rotation_matrix`] is an *active*, right-handed rotation in degrees: it
//! turns a vector counter-clockwise about the axis as seen from the axis tip.
//!
//! ```
//! use coordconv_core::{compute_rotation_matrix, Vector3};
//!
//! let m = compute_rotation_matrix(Vector3::z_axis(), 90.0).unwrap();
//! let v = m * Vector3::x_axis();
//! assert!(v.x.abs() < 1e-15 && (v.y - 1.0).abs() < 1e-15);
//! ```
//!
//! [`rotate_x`](RotationMatrix3::rotate_x), [`rotate_y`](RotationMatrix3::rotate_y)
//! and [`rotate_z`](RotationMatrix3::rotate_z) follow the SOFA/ERFA `Rx`, `Ry`, `Rz`
//! convention used by published precession and nutation formulae: they rotate the
//! *frame* (passive) by an angle in radians and prepend the result, so
//! `m.rotate_z(a)` makes `m` become `Rz(a) * m`. A passive rotation by `a` is the
//! active rotation by `-a`.
//!
//! ```
//! use coordconv_core::{RotationMatrix3, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let mut m = RotationMatrix3::identity();
//! m.rotate_z(FRAC_PI_2);
//! let v = m * Vector3::x_axis();
//! assert!((v.y + 1.0).abs() < 1e-15);
//! ```
//!
//! Storage is row-major; the inverse of a rotation is its transpose.

use crate::constants::DEG_TO_RAD;
use crate::errors::{AstroError, AstroResult, MathErrorKind};
use crate::matrix::Vector3;
use std::fmt;

/// A 3x3 orthogonal matrix. Frame rotations are proper (determinant +1); a
/// change to a left-handed frame such as north/east/zenith has determinant -1.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Rodrigues' formula for a unit axis `k` and an active angle in radians:
/// `R = cos(a) I + sin(a) [k]x + (1 - cos(a)) k kᵀ`.
fn axis_angle(k: Vector3, angle: f64) -> [[f64; 3]; 3] {
    let (s, c) = libm::sincos(angle);
    let t = 1.0 - c;
    [
        [
            c + t * k.x * k.x,
            t * k.x * k.y - s * k.z,
            t * k.x * k.z + s * k.y,
        ],
        [
            t * k.y * k.x + s * k.z,
            c + t * k.y * k.y,
            t * k.y * k.z - s * k.x,
        ],
        [
            t * k.z * k.x - s * k.y,
            t * k.z * k.y + s * k.x,
            c + t * k.z * k.z,
        ],
    ]
}

/// Rotation of `rot_angle` degrees (active, right-handed) about `axis`.
///
/// The magnitude of `axis` is ignored. A zero or non-finite axis (or a non-finite
/// angle) is rejected with [`MathErrorKind::InvalidInput`]; substituting some default
/// axis would silently corrupt whatever is built on the result.
///
/// ```
/// use coordconv_core::{compute_rotation_matrix, MathErrorKind, Vector3};
///
/// let m = compute_rotation_matrix(Vector3::new(1.0, 1.0, 1.0), 120.0).unwrap();
/// // a third of a turn about the body diagonal permutes the axes
/// let v = m * Vector3::x_axis();
/// assert!((v.y - 1.0).abs() < 1e-15);
///
/// let err = compute_rotation_matrix(Vector3::zeros(), 10.0).unwrap_err();
/// assert_eq!(err.kind(), MathErrorKind::InvalidInput);
/// ```
pub fn compute_rotation_matrix(axis: Vector3, rot_angle: f64) -> AstroResult<RotationMatrix3> {
    if !axis.is_finite() || !rot_angle.is_finite() {
        return Err(AstroError::math_error(
            "compute_rotation_matrix",
            MathErrorKind::InvalidInput,
            "axis and angle must be finite",
        ));
    }
    let mag = axis.magnitude();
    if mag < f64::MIN_POSITIVE {
        return Err(AstroError::math_error(
            "compute_rotation_matrix",
            MathErrorKind::InvalidInput,
            "axis has zero magnitude",
        ));
    }
    Ok(RotationMatrix3::from_array(axis_angle(
        axis / mag,
        rot_angle * DEG_TO_RAD,
    )))
}

impl RotationMatrix3 {
    pub const fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Row-major: `elements[i][j]` is row `i`, column `j`. Not validated.
    pub const fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    fn prepend_passive(&mut self, axis: Vector3, angle: f64) {
        let r = Self::from_array(axis_angle(axis, -angle));
        *self = r.multiply(self);
    }

    /// `self = Rx(phi) * self`, passive, radians.
    ///
    /// ```text
    /// Rx(phi) = | 1    0         0       |
    ///           | 0    cos(phi)  sin(phi)|
    ///           | 0   -sin(phi)  cos(phi)|
    /// ```
    pub fn rotate_x(&mut self, phi: f64) {
        self.prepend_passive(Vector3::x_axis(), phi);
    }

    /// `self = Ry(theta) * self`, passive, radians.
    pub fn rotate_y(&mut self, theta: f64) {
        self.prepend_passive(Vector3::y_axis(), theta);
    }

    /// `self = Rz(psi) * self`, passive, radians.
    pub fn rotate_z(&mut self, psi: f64) {
        self.prepend_passive(Vector3::z_axis(), psi);
    }

    /// `self * other`: `other` acts first.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    pub fn apply(&self, v: Vector3) -> Vector3 {
        let m = &self.elements;
        Vector3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    /// `selfᵀ * v`, the inverse rotation, without forming the transpose.
    pub fn apply_transpose(&self, v: Vector3) -> Vector3 {
        let m = &self.elements;
        Vector3::new(
            m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z,
            m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z,
            m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z,
        )
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Determinant +1 and `M Mᵀ = I`, each within `tolerance`.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        if (self.determinant() - 1.0).abs() > tolerance {
            return false;
        }
        self.multiply(&self.transpose())
            .max_difference(&Self::identity())
            <= tolerance
    }

    /// Largest absolute element-wise difference.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..3 {
            for j in 0..3 {
                let diff = (self.elements[i][j] - other.elements[i][j]).abs();
                max_diff = max_diff.max(diff);
            }
        }

        max_diff
    }
}

impl std::ops::Mul for RotationMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&RotationMatrix3> for &RotationMatrix3 {
    type Output = RotationMatrix3;

    fn mul(self, rhs: &RotationMatrix3) -> RotationMatrix3 {
        self.multiply(rhs)
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        self.apply(rhs)
    }
}

impl std::ops::Mul<Vector3> for &RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        self.apply(rhs)
    }
}

impl std::ops::Index<(usize, usize)> for RotationMatrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.elements {
            writeln!(f, "[{:14.11} {:14.11} {:14.11}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
