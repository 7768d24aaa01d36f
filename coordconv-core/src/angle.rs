//! Angle wrapping in degrees.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Right ascension, azimuth, galactic longitude | [0, 360) | [`wrap_pos`] |
//! | Hour angle, offsets, position angle differences | [-180, 180) | [`wrap_ctr`] |
//! | Continuity with a previous value | [ref - 180, ref + 180) | [`wrap_near`] |
//!
//! All intervals are half-open and every function guards against the rounding
//! case where `w + 360` or `w - 360` lands exactly on the excluded end point. That
//! is what lets a round trip through any frame reproduce the input angle itself,
//! not just a member of its equivalence class.
//!
//! The wrapping uses `libm::fmod` (via [`crate::math::fmod`]), which keeps the sign
//! of the dividend:
//!
//! - `fmod(-1.0, 360.0)` = `-1.0`, then shifted into range
//!
//! # Example
//!
//! ```
//! use coordconv_core::angle::{wrap_ctr, wrap_near, wrap_pos};
//!
//! assert_eq!(wrap_pos(-90.0), 270.0);
//! assert_eq!(wrap_ctr(270.0), -90.0);
//! assert_eq!(wrap_ctr(180.0), -180.0);
//! assert_eq!(wrap_near(350.0, 0.0), -10.0);
//! ```

use crate::math::fmod;

/// Wraps an angle in degrees into [0, 360).
///
/// Use for quantities that are conventionally non-negative: right ascension,
/// azimuth, galactic longitude, sidereal time.
///
/// ```
/// use coordconv_core::angle::wrap_pos;
///
/// assert_eq!(wrap_pos(360.0), 0.0);
/// assert_eq!(wrap_pos(725.0), 5.0);
/// // tiny negative values must not round up to 360
/// let w = wrap_pos(-1e-15);
/// assert!(w >= 0.0 && w < 360.0);
/// ```
#[inline]
pub fn wrap_pos(ang: f64) -> f64 {
    let mut w = fmod(ang, 360.0);
    if w < 0.0 {
        w += 360.0;
    }
    if w >= 360.0 {
        w = 0.0;
    }
    w
}

/// Wraps an angle in degrees into [-180, 180).
///
/// The discontinuity sits at the anti-meridian, far from the reference direction,
/// which suits hour angles and differences between two angles.
///
/// ```
/// use coordconv_core::angle::wrap_ctr;
///
/// assert_eq!(wrap_ctr(190.0), -170.0);
/// assert_eq!(wrap_ctr(-180.0), -180.0);
/// assert_eq!(wrap_ctr(-540.0), -180.0);
/// ```
#[inline]
pub fn wrap_ctr(ang: f64) -> f64 {
    let mut w = fmod(ang, 360.0);
    if w >= 180.0 {
        w -= 360.0;
    } else if w < -180.0 {
        w += 360.0;
        if w >= 180.0 {
            w -= 360.0;
        }
    }
    w
}

/// Wraps `ang` into [ref_ang - 180, ref_ang + 180).
///
/// Returns the member of `ang`'s equivalence class (mod 360) nearest `ref_ang`;
/// an angle exactly opposite the reference resolves to `ref_ang - 180`. Used to keep
/// a sequence of angles continuous, e.g. when differencing two samples of a moving
/// object to estimate its velocity.
///
/// ```
/// use coordconv_core::angle::wrap_near;
///
/// assert_eq!(wrap_near(350.0, 0.0), -10.0);
/// assert_eq!(wrap_near(10.0, 350.0), 370.0);
/// assert_eq!(wrap_near(180.0, 0.0), -180.0);
/// ```
#[inline]
pub fn wrap_near(ang: f64, ref_ang: f64) -> f64 {
    let mut w = ref_ang + wrap_ctr(ang - ref_ang);
    // the addition can round onto the excluded upper end or just below the lower one
    if w >= ref_ang + 180.0 {
        w -= 360.0;
    } else if w < ref_ang - 180.0 {
        w += 360.0;
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_pos() {
        assert_eq!(wrap_pos(0.0), 0.0);
        assert_eq!(wrap_pos(359.5), 359.5);
        assert_eq!(wrap_pos(360.0), 0.0);
        assert_eq!(wrap_pos(-90.0), 270.0);
        assert_eq!(wrap_pos(-360.0), 0.0);
        assert_eq!(wrap_pos(1080.25), 0.25);
    }

    #[test]
    fn test_wrap_pos_rounding_guard() {
        // -1e-14 + 360 rounds to exactly 360 in f64
        let w = wrap_pos(-1e-14);
        assert!((0.0..360.0).contains(&w));
    }

    #[test]
    fn test_wrap_ctr() {
        assert_eq!(wrap_ctr(0.0), 0.0);
        assert_eq!(wrap_ctr(179.0), 179.0);
        assert_eq!(wrap_ctr(180.0), -180.0);
        assert_eq!(wrap_ctr(-180.0), -180.0);
        assert_eq!(wrap_ctr(270.0), -90.0);
        assert_eq!(wrap_ctr(-270.0), 90.0);
        assert_eq!(wrap_ctr(540.0), -180.0);
    }

    #[test]
    fn test_wrap_ctr_rounding_guard() {
        let w = wrap_ctr(-180.0 - 1e-14);
        assert!((-180.0..180.0).contains(&w));
    }

    #[test]
    fn test_wrap_near() {
        assert_eq!(wrap_near(350.0, 0.0), -10.0);
        assert_eq!(wrap_near(-10.0, 0.0), -10.0);
        assert_eq!(wrap_near(10.0, 350.0), 370.0);
        assert_eq!(wrap_near(720.0, 0.0), 0.0);
        assert_eq!(wrap_near(90.0, 1000.0), 1170.0);
    }

    #[test]
    fn test_wrap_near_tie() {
        // exactly opposite the reference: always the lower representative
        assert_eq!(wrap_near(180.0, 0.0), -180.0);
        assert_eq!(wrap_near(-180.0, 0.0), -180.0);
        assert_eq!(wrap_near(270.0, 90.0), -90.0);
    }
}
