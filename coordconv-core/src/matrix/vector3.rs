//! Cartesian 3-vectors.
//!
//! Every frame conversion in this workspace works on cartesian vectors: a position
//! is turned into `(x, y, z)`, rotated and corrected, then turned back into two
//! spherical angles. The angle convention matches celestial practice:
//!
//! - equatorial angle: from +X toward +Y (right ascension, longitude), degrees
//! - polar angle: from the XY plane toward +Z (declination, latitude), degrees
//!
//! ```
//! use coordconv_core::Vector3;
//!
//! let v = Vector3::from_spherical(90.0, 0.0);
//! assert!((v.y - 1.0).abs() < 1e-15);
//!
//! let (equat, polar) = Vector3::new(0.0, 0.0, 2.0).to_spherical();
//! assert_eq!(equat, 0.0);
//! assert!((polar - 90.0).abs() < 1e-13);
//! ```

use crate::angle::wrap_pos;
use crate::constants::DEG_TO_RAD;
use crate::math::{atan2d, hypot, polar_from_xy, POLAR_AXIS_TOLERANCE};
use std::fmt;

/// A cartesian 3-vector (position in AU, velocity in AU/yr, or a direction).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub const fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Euclidean length.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.magnitude_squared())
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Unit vector in the same direction. The zero vector is returned unchanged.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            *self
        } else {
            *self / mag
        }
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    ///
    /// ```
    /// use coordconv_core::Vector3;
    ///
    /// assert_eq!(Vector3::x_axis().cross(&Vector3::y_axis()), Vector3::z_axis());
    /// ```
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Unit vector from an equatorial and a polar angle in degrees.
    pub fn from_spherical(equat_ang: f64, polar_ang: f64) -> Self {
        let (sin_e, cos_e) = libm::sincos(equat_ang * DEG_TO_RAD);
        let (sin_p, cos_p) = libm::sincos(polar_ang * DEG_TO_RAD);
        Self::new(cos_p * cos_e, cos_p * sin_e, sin_p)
    }

    /// True when the vector lies on the z axis to within rounding, or is zero.
    pub fn is_on_polar_axis(&self) -> bool {
        hypot(self.x, self.y) <= POLAR_AXIS_TOLERANCE * self.magnitude()
    }

    /// Equatorial angle in [0, 360) and polar angle in [-90, 90], degrees.
    ///
    /// The vector need not be normalized. On the polar axis (see
    /// [`is_on_polar_axis`](Self::is_on_polar_axis)) the equatorial angle is 0 and
    /// the polar angle exactly ±90; the zero vector gives (0, 0).
    pub fn to_spherical(&self) -> (f64, f64) {
        if self.magnitude_squared() == 0.0 {
            return (0.0, 0.0);
        }
        if self.is_on_polar_axis() {
            return (0.0, libm::copysign(90.0, self.z));
        }
        let xy = polar_from_xy(self.x, self.y);
        let equat = if xy.at_origin { 0.0 } else { wrap_pos(xy.theta) };
        let polar = if self.z == 0.0 { 0.0 } else { atan2d(self.z, xy.r) };
        (equat, polar)
    }

    /// Angle between two vectors in degrees, accurate at all separations.
    pub fn angle_to(&self, other: &Self) -> f64 {
        atan2d(self.cross(other).magnitude(), self.dot(other))
    }
}

impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec * self
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// v[i] indexing (panics if i > 2)
impl std::ops::Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let v = Vector3::new(3.0, 4.0, 0.0).normalize();
        assert_eq!(v, Vector3::new(0.6, 0.8, 0.0));
        assert_eq!(Vector3::zeros().normalize(), Vector3::zeros());
    }

    #[test]
    fn test_dot_and_cross() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(&b), 32.0);
        assert_eq!(a.cross(&b), Vector3::new(-3.0, 6.0, -3.0));
        assert_eq!(a.cross(&b).dot(&a), 0.0);
    }

    #[test]
    fn test_spherical_round_trip() {
        for &(e, p) in &[(0.0, 0.0), (45.0, 30.0), (200.0, -60.0), (359.0, 89.0)] {
            let (e2, p2) = Vector3::from_spherical(e, p).to_spherical();
            assert!((e2 - e).abs() < 1e-12, "equat {} -> {}", e, e2);
            assert!((p2 - p).abs() < 1e-12, "polar {} -> {}", p, p2);
        }
    }

    #[test]
    fn test_to_spherical_wraps_equat() {
        let (e, p) = Vector3::new(0.0, -1.0, 0.0).to_spherical();
        assert!((e - 270.0).abs() < 1e-12);
        assert_eq!(p, 0.0);
    }

    #[test]
    fn test_to_spherical_pole() {
        let (e, p) = Vector3::new(0.0, 0.0, -5.0).to_spherical();
        assert_eq!(e, 0.0);
        assert!((p + 90.0).abs() < 1e-13);
        assert_eq!(Vector3::zeros().to_spherical(), (0.0, 0.0));
    }

    #[test]
    fn test_rotated_pole_has_no_equat_noise() {
        let m = crate::compute_rotation_matrix(Vector3::new(0.3, -1.2, 0.7), 63.0).unwrap();
        let back = m.transpose() * (m * Vector3::z_axis());
        assert!(back.is_on_polar_axis());
        assert_eq!(back.to_spherical(), (0.0, 90.0));

        let south = Vector3::from_spherical(123.0, -90.0);
        assert_eq!(south.to_spherical(), (0.0, -90.0));
        assert!(!Vector3::from_spherical(10.0, 89.9999).is_on_polar_axis());
    }

    #[test]
    fn test_angle_to() {
        let a = Vector3::x_axis();
        assert!((a.angle_to(&Vector3::y_axis()) - 90.0).abs() < 1e-12);
        assert!((a.angle_to(&-a) - 180.0).abs() < 1e-12);
        let tiny = Vector3::from_spherical(1e-9, 0.0);
        assert!((a.angle_to(&tiny) - 1e-9).abs() < 1e-18);
    }

    #[test]
    fn test_ops() {
        let mut a = Vector3::new(1.0, 2.0, 3.0);
        a += Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(a, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a + a, Vector3::zeros());
        assert_eq!(a[2], 4.0);
        assert!(!Vector3::new(f64::NAN, 0.0, 0.0).is_finite());
    }
}
