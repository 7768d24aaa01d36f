//! Greenwich and local sidereal time, in degrees.
//!
//! Mean sidereal time is the Meeus (12.4) expression, consistent with IAU 1976
//! precession. Apparent sidereal time adds the equation of the equinoxes from the
//! IAU 1980 nutation.
//!
//! ```
//! use coordconv_core::sidereal::gmst;
//!
//! // 1987 April 10, 19:21:00 UT1
//! let days = 2446896.30625 - 2451545.0;
//! assert!((gmst(days) - 128.7378734).abs() < 1e-6);
//! ```

use crate::angle::wrap_pos;
use crate::constants::{DAYS_PER_JULIAN_CENTURY, RAD_TO_DEG};
use crate::nutation::Nutation;

/// Greenwich mean sidereal time in [0, 360) for `ut1_days` days of UT1 from J2000.0.
pub fn gmst(ut1_days: f64) -> f64 {
    let t = ut1_days / DAYS_PER_JULIAN_CENTURY;
    let gmst = 280.46061837 + 360.98564736629 * ut1_days + (0.000387933 - t / 38710000.0) * t * t;
    wrap_pos(gmst)
}

/// Greenwich apparent sidereal time in [0, 360).
pub fn gast(ut1_days: f64, nutation: &Nutation) -> f64 {
    wrap_pos(gmst(ut1_days) + nutation.equation_of_equinoxes() * RAD_TO_DEG)
}

/// Local apparent sidereal time in [0, 360) at east longitude `east_long` (degrees).
pub fn last(ut1_days: f64, nutation: &Nutation, east_long: f64) -> f64 {
    wrap_pos(gast(ut1_days, nutation) + east_long)
}
