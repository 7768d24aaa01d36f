//! Numeric foundations for celestial coordinate conversion.
//!
//! `coordconv-core` holds everything the frame conversions in `coordconv-coords`
//! are built from: degree trigonometry and angle wrapping, cartesian vectors and
//! rotation matrices, and the classical IAU models (1976 precession, 1980 nutation
//! and obliquity, IERS 2003 frame bias, Meeus sidereal time).
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | `wrap_pos`, `wrap_ctr`, `wrap_near` |
//! | [`math`] | degree trig, polar/cartesian, `rot_2d` |
//! | [`matrix`] | [`Vector3`], [`RotationMatrix3`], [`compute_rotation_matrix`] |
//! | [`precession`] | IAU 1976 and Newcomb precession, frame bias |
//! | [`nutation`] | IAU 1980 nutation (18 terms) |
//! | [`obliquity`] | IAU 1980 mean obliquity |
//! | [`sidereal`] | mean and apparent sidereal time |
//! | [`geodesy`] | WGS84 geodetic to geocentric |
//! | [`time`] | TAI (MJD seconds) to TT, Julian and Besselian epochs |
//! | [`constants`] | physical constants and the `DOUBLE_*` sentinels |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//!
//! # Conventions
//!
//! - **Degrees in public APIs**: every angle a caller passes or receives is in
//!   degrees. Radians appear only in the IAU model internals and in the passive
//!   `rotate_x/y/z` helpers, which follow the published formulae.
//!
//! - **Dates are TAI MJD seconds**: a single `f64`. See [`time`].
//!
//! - **Total functions**: wrapping, rotation and the IAU models never fail.
//!   Degenerate geometry is reported as a flag ([`math::Polar::at_origin`]). Only
//!   [`compute_rotation_matrix`] rejects its input.
//!
//! ```
//! use coordconv_core::{compute_rotation_matrix, Vector3};
//! use coordconv_core::angle::wrap_near;
//!
//! let m = compute_rotation_matrix(Vector3::z_axis(), 30.0)?;
//! let (ra, _) = (m * Vector3::from_spherical(350.0, 0.0)).to_spherical();
//! assert!((wrap_near(ra, 0.0) - 20.0).abs() < 1e-12);
//! # Ok::<(), coordconv_core::AstroError>(())
//! ```

pub mod angle;
pub mod constants;
pub mod errors;
pub mod geodesy;
pub mod math;
pub mod matrix;
pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod sidereal;
pub mod time;

pub use errors::{AstroError, AstroResult, MathErrorKind};
pub use matrix::{compute_rotation_matrix, RotationMatrix3, Vector3};

pub mod test_helpers;
