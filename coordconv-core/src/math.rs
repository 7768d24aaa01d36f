//! Scalar and 2D vector primitives in degrees.
//!
//! Everything public in this crate that takes or returns an angle uses degrees;
//! these helpers keep the radian conversions in one place.
//!
//! # Changing between 2D frames with [`rot_2d`]
//!
//! Given frame A and a frame B whose origin is at `B_A_xy` in A and whose x axis
//! is rotated by `B_A_ang` from A's:
//!
//! ```text
//! P_B_xy = rot_2d(P_A_xy - B_A_xy, -B_A_ang)
//! P_A_xy = B_A_xy + rot_2d(P_B_xy, +B_A_ang)
//! ```
//!
//! ```
//! use coordconv_core::math::{polar_from_xy, rot_2d, xy_from_polar};
//!
//! let (x, y) = rot_2d(1.0, 0.0, 90.0);
//! assert!(x.abs() < 1e-15 && (y - 1.0).abs() < 1e-15);
//!
//! let polar = polar_from_xy(3.0, 4.0);
//! assert!(!polar.at_origin);
//! let (x, y) = xy_from_polar(polar.r, polar.theta);
//! assert!((x - 3.0).abs() < 1e-14 && (y - 4.0).abs() < 1e-14);
//! ```

use crate::constants::{DEG_TO_RAD, RAD_TO_DEG};

/// Radius below which [`polar_from_xy`] treats a vector as directionless.
pub const POLAR_NOISE_THRESHOLD: f64 = f64::EPSILON;

/// Distance from the polar axis, relative to the vector's length, below which a
/// direction counts as lying on the axis. A pole sent through a few rotations
/// picks up a few ulp of `x` and `y`.
pub const POLAR_AXIS_TOLERANCE: f64 = 16.0 * f64::EPSILON;

#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// Sine of an angle in degrees.
#[inline]
pub fn sind(ang: f64) -> f64 {
    libm::sin(ang * DEG_TO_RAD)
}

/// Cosine of an angle in degrees.
#[inline]
pub fn cosd(ang: f64) -> f64 {
    libm::cos(ang * DEG_TO_RAD)
}

/// Tangent of an angle in degrees.
#[inline]
pub fn tand(ang: f64) -> f64 {
    libm::tan(ang * DEG_TO_RAD)
}

#[inline]
pub fn asind(x: f64) -> f64 {
    libm::asin(x) * RAD_TO_DEG
}

#[inline]
pub fn acosd(x: f64) -> f64 {
    libm::acos(x) * RAD_TO_DEG
}

#[inline]
pub fn atand(x: f64) -> f64 {
    libm::atan(x) * RAD_TO_DEG
}

/// Two-argument arctangent in degrees, `atan2(y, x)`.
#[inline]
pub fn atan2d(y: f64, x: f64) -> f64 {
    libm::atan2(y, x) * RAD_TO_DEG
}

#[inline]
pub fn hypot(x: f64, y: f64) -> f64 {
    libm::hypot(x, y)
}

/// Result of [`polar_from_xy`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    /// Magnitude, same units as the inputs.
    pub r: f64,
    /// Angle from +x toward +y in degrees, (-180, 180]. Zero when `at_origin`.
    pub theta: f64,
    /// `r` is too small for `theta` to mean anything.
    pub at_origin: bool,
}

/// Converts cartesian coordinates to polar coordinates.
///
/// Near the origin the angle is undefined. Rather than return noise, the angle is
/// set to 0 and [`Polar::at_origin`] is set so callers can branch on it (this is
/// the ordinary case of an object exactly at a pole, not an error).
///
/// ```
/// use coordconv_core::math::polar_from_xy;
///
/// let p = polar_from_xy(0.0, 0.0);
/// assert_eq!((p.r, p.theta, p.at_origin), (0.0, 0.0, true));
///
/// let p = polar_from_xy(0.0, -2.0);
/// assert!((p.theta + 90.0).abs() < 1e-13);
/// ```
pub fn polar_from_xy(x: f64, y: f64) -> Polar {
    let r = hypot(x, y);
    if r < POLAR_NOISE_THRESHOLD {
        return Polar {
            r,
            theta: 0.0,
            at_origin: true,
        };
    }
    Polar {
        r,
        theta: atan2d(y, x),
        at_origin: false,
    }
}

/// Converts polar coordinates (`theta` in degrees from +x toward +y) to cartesian.
pub fn xy_from_polar(r: f64, theta: f64) -> (f64, f64) {
    let (sin_t, cos_t) = libm::sincos(theta * DEG_TO_RAD);
    (r * cos_t, r * sin_t)
}

/// Rotates a 2D vector by `ang` degrees, counter-clockwise positive.
pub fn rot_2d(x: f64, y: f64, ang: f64) -> (f64, f64) {
    let (sin_a, cos_a) = libm::sincos(ang * DEG_TO_RAD);
    (cos_a * x - sin_a * y, sin_a * x + cos_a * y)
}
