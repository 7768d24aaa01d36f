//! Mean obliquity of the ecliptic, IAU 1980.
//!
//! The angle between the mean equator and the ecliptic, about 23.44°. It is the
//! obliquity that goes with IAU 1976 precession and IAU 1980 nutation; the true
//! obliquity adds [`Nutation::delta_eps`](crate::nutation::Nutation::delta_eps).
//!
//! ```
//! use coordconv_core::obliquity::iau_1980_mean_obliquity;
//!
//! let eps_deg = iau_1980_mean_obliquity(0.0).to_degrees();
//! assert!((eps_deg - 23.4392911).abs() < 1e-6);
//! ```

use crate::constants::ARCSEC_TO_RAD;

/// Mean obliquity in radians for `t` Julian centuries (TT) from J2000.0.
///
/// At J2000.0: ε₀ = 84381.448″.
pub fn iau_1980_mean_obliquity(t: f64) -> f64 {
    let obliquity_arcsec = 84381.448 + (-46.8150 + (-0.00059 + (0.001813) * t) * t) * t;

    obliquity_arcsec * ARCSEC_TO_RAD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{J2000_OBLIQUITY_1980_RAD, RAD_TO_DEG};

    #[test]
    fn test_j2000_value() {
        assert_eq!(iau_1980_mean_obliquity(0.0), J2000_OBLIQUITY_1980_RAD);
    }

    #[test]
    fn test_meeus_example_22a() {
        // 1987 April 10, 0h TD: ε₀ = 23°26'27.407"
        let t = (2446895.5 - 2451545.0) / 36525.0;
        let eps = iau_1980_mean_obliquity(t) * RAD_TO_DEG;
        assert!((eps - (23.0 + 26.0 / 60.0 + 27.407 / 3600.0)).abs() < 1e-6);
    }

    #[test]
    fn test_decreasing() {
        assert!(iau_1980_mean_obliquity(1.0) < iau_1980_mean_obliquity(0.0));
    }
}
