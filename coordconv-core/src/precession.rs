//! Precession models and the ICRS frame bias.
//!
//! Precession turns the mean equator and equinox of one epoch into those of
//! another. Two classical models are provided because the catalog frames need both:
//!
//! | Function | Model | Epochs | Used by |
//! |----------|-------|--------|---------|
//! | [`iau1976_precession_matrix`] | IAU 1976 (Lieske) | Julian | FK5, apparent places |
//! | [`newcomb_precession_matrix`] | Newcomb / Andoyer | Besselian | FK4 |
//!
//! Both build the matrix from the equatorial angles ζ, z, θ as
//! `Rz(-z) · Ry(θ) · Rz(-ζ)`, mapping mean-of-`from` vectors to mean-of-`to`.
//!
//! [`frame_bias_matrix`] is the constant IERS 2003 rotation from ICRS to the mean
//! dynamical frame of J2000.0 (tens of milliarcseconds).
//!
//! ```
//! use coordconv_core::precession::{frame_bias_matrix, iau1976_precession_matrix};
//! use coordconv_core::Vector3;
//!
//! // mean J2000 to mean J2100: the equinox point moves ~1.28° in right ascension
//! let p = iau1976_precession_matrix(2000.0, 2100.0);
//! let (ra, _dec) = (p * Vector3::x_axis()).to_spherical();
//! assert!((ra - 1.2817).abs() < 1e-4);
//!
//! assert!(frame_bias_matrix().is_rotation_matrix(1e-15));
//! ```

use crate::constants::{ARCSEC_TO_RAD, J2000_OBLIQUITY_1980_RAD};
use crate::matrix::RotationMatrix3;

/// ICRS to mean equator and equinox of J2000.0 (IERS Conventions 2003).
///
/// Built as `Rx(-dε) · Ry(dψ sin ε₀) · Rz(dα₀)`.
pub fn frame_bias_matrix() -> RotationMatrix3 {
    // arcseconds
    const DPSI_BIAS: f64 = -0.041775;
    const DEPS_BIAS: f64 = -0.0068192;
    const DRA0: f64 = -0.0146;

    let mut rb = RotationMatrix3::identity();
    rb.rotate_z(DRA0 * ARCSEC_TO_RAD);
    rb.rotate_y(DPSI_BIAS * ARCSEC_TO_RAD * libm::sin(J2000_OBLIQUITY_1980_RAD));
    rb.rotate_x(-DEPS_BIAS * ARCSEC_TO_RAD);
    rb
}

fn zyz_precession(zeta: f64, z: f64, theta: f64) -> RotationMatrix3 {
    let mut m = RotationMatrix3::identity();
    m.rotate_z(-zeta * ARCSEC_TO_RAD);
    m.rotate_y(theta * ARCSEC_TO_RAD);
    m.rotate_z(-z * ARCSEC_TO_RAD);
    m
}

/// IAU 1976 precession from mean of Julian epoch `from_epoch` to mean of `to_epoch`.
pub fn iau1976_precession_matrix(from_epoch: f64, to_epoch: f64) -> RotationMatrix3 {
    // t0: centuries from J2000 to the start epoch; t: centuries of the interval
    let t0 = (from_epoch - 2000.0) / 100.0;
    let t = (to_epoch - from_epoch) / 100.0;

    let w = 2306.2181 + (1.39656 - 0.000139 * t0) * t0;
    let zeta = (w + ((0.30188 - 0.000344 * t0) + 0.017998 * t) * t) * t;
    let z = (w + ((1.09468 + 0.000066 * t0) + 0.018203 * t) * t) * t;
    let theta = ((2004.3109 + (-0.85330 - 0.000217 * t0) * t0)
        + ((-0.42665 - 0.000217 * t0) - 0.041833 * t) * t)
        * t;

    zyz_precession(zeta, z, theta)
}

/// Newcomb precession from mean of Besselian epoch `from_epoch` to mean of `to_epoch`
/// (Kinoshita 1975 formulation in Besselian centuries from B1850).
pub fn newcomb_precession_matrix(from_epoch: f64, to_epoch: f64) -> RotationMatrix3 {
    let big_t = (from_epoch - 1850.0) / 100.0;
    let t = (to_epoch - from_epoch) / 100.0;

    let w = 2303.5548 + (1.39720 + 0.000059 * big_t) * big_t;
    let zeta = (w + (0.30242 - 0.000269 * big_t + 0.017996 * t) * t) * t;
    let z = (w + (1.09478 + 0.000387 * big_t + 0.018324 * t) * t) * t;
    let theta = (2005.1125 + (-0.85294 - 0.000365 * big_t) * big_t
        + (-0.42647 - 0.000365 * big_t - 0.041802 * t) * t)
        * t;

    zyz_precession(zeta, z, theta)
}

/// Frame bias and IAU 1976 precession, ICRS to mean of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecessionResult {
    /// ICRS to mean J2000.0.
    pub bias_matrix: RotationMatrix3,
    /// Mean J2000.0 to mean of date.
    pub precession_matrix: RotationMatrix3,
    /// `precession_matrix * bias_matrix`.
    pub bias_precession_matrix: RotationMatrix3,
}

/// Bias-precession for a date given as Julian epoch (TT).
pub fn bias_precession(julian_epoch: f64) -> PrecessionResult {
    let bias_matrix = frame_bias_matrix();
    let precession_matrix = iau1976_precession_matrix(2000.0, julian_epoch);
    PrecessionResult {
        bias_matrix,
        precession_matrix,
        bias_precession_matrix: precession_matrix * bias_matrix,
    }
}
