//! Geodetic to geocentric conversion on the WGS84 ellipsoid.
//!
//! Diurnal parallax and diurnal aberration need the observer's distance from the
//! rotation axis (`u`) and from the equatorial plane (`v`), not the geodetic
//! latitude and height a site is specified with. At mid-latitudes the geocentric
//! latitude differs from the geodetic one by up to about 11′.
//!
//! ```
//! use coordconv_core::geodesy::geocentric_cylindrical;
//!
//! let (u, v) = geocentric_cylindrical(0.0, 0.0);
//! assert!((u - 6_378_137.0).abs() < 1e-6);
//! assert!(v.abs() < 1e-9);
//! ```

use crate::constants::{WGS84_ECCENTRICITY_SQUARED, WGS84_SEMI_MAJOR_AXIS};
use crate::math::{cosd, sind};

/// Returns `(u, v)` in meters for geodetic latitude `lat` (degrees) and height
/// `height` (meters) above the ellipsoid.
///
/// `1 - e² sin²φ` is bounded below by `1 - e²`, so this is total for any finite
/// latitude.
pub fn geocentric_cylindrical(lat: f64, height: f64) -> (f64, f64) {
    let (sin_lat, cos_lat) = (sind(lat), cosd(lat));

    // prime vertical radius of curvature
    let n =
        WGS84_SEMI_MAJOR_AXIS / libm::sqrt(1.0 - WGS84_ECCENTRICITY_SQUARED * sin_lat * sin_lat);

    let u = (n + height) * cos_lat;
    let v = (n * (1.0 - WGS84_ECCENTRICITY_SQUARED) + height) * sin_lat;

    (u, v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WGS84_FLATTENING;

    #[test]
    fn test_north_pole() {
        let (u, v) = geocentric_cylindrical(90.0, 0.0);
        let polar_radius = WGS84_SEMI_MAJOR_AXIS * (1.0 - WGS84_FLATTENING);
        assert!(u.abs() < 1e-6);
        assert!((v - polar_radius).abs() < 1e-6);
    }

    #[test]
    fn test_45_degrees() {
        let (u, v) = geocentric_cylindrical(45.0, 0.0);
        assert!(u > 4_500_000.0 && u < 4_600_000.0);
        assert!(v > 4_400_000.0 && v < 4_500_000.0);
        assert!(u > v);
    }

    #[test]
    fn test_height_adds_along_normal() {
        let (u0, v0) = geocentric_cylindrical(30.0, 0.0);
        let (u1, v1) = geocentric_cylindrical(30.0, 1000.0);
        assert!((libm::hypot(u1 - u0, v1 - v0) - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_geocentric_latitude_smaller() {
        // difference peaks near 45°, about 692″
        let (u, v) = geocentric_cylindrical(45.0, 0.0);
        let diff = 45.0 - libm::atan2(v, u).to_degrees();
        assert!((diff * 3600.0 - 692.7).abs() < 1.0);
    }
}
