//! Assertions shared by the unit and integration tests of both crates.

use crate::angle::wrap_ctr;
use crate::matrix::Vector3;

#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    let ua = f64_to_ordered_u64(a);
    let ub = f64_to_ordered_u64(b);
    ua.abs_diff(ub)
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite value in {}",
        ctx
    );
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        ctx,
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

/// Asserts two angles in degrees agree to `tol_deg`, modulo 360.
#[track_caller]
pub fn assert_angle_near(a: f64, b: f64, tol_deg: f64, ctx: &str) {
    let d = wrap_ctr(a - b).abs();
    assert!(
        d <= tol_deg,
        "{}: {} vs {} differ by {:e} deg (tol {:e})",
        ctx,
        a,
        b,
        d,
        tol_deg
    );
}

/// Asserts two unit directions are within `tol_arcsec` of each other.
#[track_caller]
pub fn assert_direction_near(a: Vector3, b: Vector3, tol_arcsec: f64, ctx: &str) {
    let sep = a.angle_to(&b) * 3600.0;
    assert!(
        sep <= tol_arcsec,
        "{}: {} vs {} separated by {:e}\" (tol {:e}\")",
        ctx,
        a,
        b,
        sep,
        tol_arcsec
    );
}
