//! Catalog frames: FK5, FK4 and galactic, each to and from ICRS.
//!
//! These are rotations, applied alike to a coord's position and its space motion,
//! apart from the FK4 E-terms which act on the direction only.

use crate::constants::{
    FK4_B1950_TO_FK5_J2000, FK4_E_TERMS, FK4_REFERENCE_EQUINOX, FK5_REFERENCE_EQUINOX,
    ICRS_TO_GALACTIC,
};
use crate::Coord;
use coordconv_core::precession::{
    frame_bias_matrix, iau1976_precession_matrix, newcomb_precession_matrix,
};
use coordconv_core::{RotationMatrix3, Vector3};

const E_TERMS_ITERATIONS: usize = 3;

pub(crate) fn rotate(coord: &Coord, m: &RotationMatrix3) -> Coord {
    coord.with_vectors(*m * coord.pos(), *m * coord.pm(), coord.epoch())
}

/// Mean FK5 of Julian `equinox` to ICRS.
pub fn fk5_to_icrs(coord: &Coord, equinox: f64) -> Coord {
    let to_j2000 = iau1976_precession_matrix(equinox, FK5_REFERENCE_EQUINOX);
    let m = frame_bias_matrix().transpose() * to_j2000;
    rotate(coord, &m)
}

pub fn icrs_to_fk5(icrs: &Coord, equinox: f64) -> Coord {
    let from_j2000 = iau1976_precession_matrix(FK5_REFERENCE_EQUINOX, equinox);
    let m = from_j2000 * frame_bias_matrix();
    rotate(icrs, &m)
}

/// Mean FK4 of Besselian `equinox` (E-terms included) to ICRS.
///
/// The FK4 frame is treated as non-rotating: the fictitious FK4 proper motion
/// relative to the inertial frame is not applied.
pub fn fk4_to_icrs(coord: &Coord, equinox: f64) -> Coord {
    let b1950 = rotate(coord, &newcomb_precession_matrix(equinox, FK4_REFERENCE_EQUINOX));
    let dist = b1950.pos().magnitude();
    let cleaned = remove_e_terms(b1950.pos()) * dist;
    let without_e_terms = b1950.with_vectors(cleaned, b1950.pm(), b1950.epoch());

    let m = frame_bias_matrix().transpose() * FK4_B1950_TO_FK5_J2000;
    rotate(&without_e_terms, &m)
}

pub fn icrs_to_fk4(icrs: &Coord, equinox: f64) -> Coord {
    let m = fk5_j2000_to_fk4_b1950() * frame_bias_matrix();
    let b1950 = rotate(icrs, &m);

    let dist = b1950.pos().magnitude();
    let with_e_terms = add_e_terms(b1950.pos()) * dist;
    let b1950 = b1950.with_vectors(with_e_terms, b1950.pm(), b1950.epoch());

    rotate(&b1950, &newcomb_precession_matrix(FK4_REFERENCE_EQUINOX, equinox))
}

pub fn galactic_to_icrs(coord: &Coord) -> Coord {
    rotate(coord, &ICRS_TO_GALACTIC.transpose())
}

pub fn icrs_to_galactic(icrs: &Coord) -> Coord {
    rotate(icrs, &ICRS_TO_GALACTIC)
}

/// Inverse of [`FK4_B1950_TO_FK5_J2000`]. The published matrix is orthogonal only
/// to about 1e-10, so its transpose is not used.
fn fk5_j2000_to_fk4_b1950() -> RotationMatrix3 {
    let forward = FK4_B1950_TO_FK5_J2000;
    let rows = forward.elements();
    let r0 = Vector3::from_array(rows[0]);
    let r1 = Vector3::from_array(rows[1]);
    let r2 = Vector3::from_array(rows[2]);
    let det = r0.dot(&r1.cross(&r2));

    // columns of the inverse are the cross products of row pairs
    let c0 = r1.cross(&r2) / det;
    let c1 = r2.cross(&r0) / det;
    let c2 = r0.cross(&r1) / det;
    RotationMatrix3::from_array([
        [c0.x, c1.x, c2.x],
        [c0.y, c1.y, c2.y],
        [c0.z, c1.z, c2.z],
    ])
}

/// Unit direction with the E-terms of aberration taken out.
pub fn remove_e_terms(dir: Vector3) -> Vector3 {
    let r = dir.normalize();
    let a = Vector3::from_array(FK4_E_TERMS);
    (r - a + r * r.dot(&a)).normalize()
}

/// Inverse of [`remove_e_terms`], by fixed-point iteration.
pub fn add_e_terms(dir: Vector3) -> Vector3 {
    let u = dir.normalize();
    let a = Vector3::from_array(FK4_E_TERMS);
    let mut r = u;
    for _ in 0..E_TERMS_ITERATIONS {
        let scale = (r - a + r * r.dot(&a)).magnitude();
        r = (u * scale + a).normalize();
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use coordconv_core::constants::ARCSEC_PER_RAD;
    use coordconv_core::test_helpers::{assert_angle_near, assert_direction_near};

    fn hms(h: f64, m: f64, s: f64) -> f64 {
        (h + m / 60.0 + s / 3600.0) * 15.0
    }

    fn dms(d: f64, m: f64, s: f64) -> f64 {
        d + m / 60.0 + s / 3600.0
    }

    #[test]
    fn test_fk5_j2000_is_icrs_within_frame_bias() {
        for (e, p) in [(0.0, 0.0), (90.0, 30.0), (250.0, -70.0)] {
            let c = Coord::new(e, p).unwrap();
            let icrs = fk5_to_icrs(&c, 2000.0);
            let sep = c.angular_separation(&icrs) * 3600.0;
            assert!(sep > 0.0 && sep < 0.03, "sep {}", sep);
        }
    }

    #[test]
    fn test_fk5_round_trip() {
        let c = Coord::from_catalog(123.0, -33.0, 0.2, 0.01, -0.02, 12.0, 0.0).unwrap();
        for equinox in [1900.0, 2000.0, 2050.5] {
            let back = icrs_to_fk5(&fk5_to_icrs(&c, equinox), equinox);
            assert!((back.pos() - c.pos()).magnitude() < 1e-9 * c.pos().magnitude());
            assert!((back.pm() - c.pm()).magnitude() < 1e-9 * c.pm().magnitude());
        }
    }

    #[test]
    fn test_fk4_b1950_to_icrs_3c273() {
        // B1950 optical position and VLBI ICRS position
        let fk4 = Coord::new(hms(12.0, 26.0, 33.246), dms(2.0, 19.0, 43.30)).unwrap();
        let icrs = fk4_to_icrs(&fk4, 1950.0);
        let expected = Coord::new(hms(12.0, 29.0, 6.6997), dms(2.0, 3.0, 8.598)).unwrap();
        let sep = icrs.angular_separation(&expected) * 3600.0;
        assert!(sep < 0.5, "sep {}″", sep);
    }

    #[test]
    fn test_fk4_round_trip() {
        let c = Coord::new(300.0, 60.0).unwrap();
        for equinox in [1875.0, 1950.0] {
            let back = icrs_to_fk4(&fk4_to_icrs(&c, equinox), equinox);
            assert_direction_near(back.pos(), c.pos(), 1e-8, "fk4 round trip");
        }
    }

    #[test]
    fn test_fk4_inverse_matrix() {
        let product = fk5_j2000_to_fk4_b1950() * FK4_B1950_TO_FK5_J2000;
        assert!(product.max_difference(&RotationMatrix3::identity()) < 1e-15);
    }

    #[test]
    fn test_e_terms() {
        let r = Vector3::from_spherical(40.0, 10.0);
        let shift = r.angle_to(&remove_e_terms(r)) * 3600.0;
        // at most |A| = 0.343″
        assert!(shift > 0.0 && shift < 0.35, "shift {}", shift);
        let back = add_e_terms(remove_e_terms(r));
        assert!((back - r).magnitude() * ARCSEC_PER_RAD < 1e-9);
    }

    #[test]
    fn test_galactic_reference_directions() {
        let centre = galactic_to_icrs(&Coord::new(0.0, 0.0).unwrap());
        assert_angle_near(centre.equat_ang(), 266.4049948010461, 1e-9, "centre ra");
        assert_angle_near(centre.polar_ang(), -28.936173960138692, 1e-9, "centre dec");

        let pole = galactic_to_icrs(&Coord::new(0.0, 90.0).unwrap());
        assert_angle_near(pole.equat_ang(), 192.85948, 1e-9, "pole ra");
        assert_angle_near(pole.polar_ang(), 27.12825, 1e-9, "pole dec");
    }

    #[test]
    fn test_galactic_round_trip() {
        let c = Coord::new(17.0, -4.0).unwrap();
        let back = galactic_to_icrs(&icrs_to_galactic(&c));
        assert_direction_near(back.pos(), c.pos(), 1e-9, "galactic round trip");
    }
}
