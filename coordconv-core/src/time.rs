//! Date conversions for TAI expressed as MJD seconds.
//!
//! Every date in this workspace is a single `f64`: TAI as a Modified Julian Date
//! multiplied by 86400 (named `tai`). Time-scale tables (leap seconds, UT1) are the
//! caller's concern; the only offsets applied here are the exact `TT - TAI` and,
//! for sidereal time, the site's `UT1 - TAI`. TDB is taken equal to TT.
//!
//! Catalog equinoxes and epochs are given as Julian years (J2000.0, FK5) or
//! Besselian years (B1950.0, FK4), both reckoned in TT.
//!
//! ```
//! use coordconv_core::time::{julian_epoch_from_tai, tai_from_julian_epoch, J2000_TAI};
//!
//! assert_eq!(julian_epoch_from_tai(J2000_TAI), 2000.0);
//! let tai = tai_from_julian_epoch(2024.5);
//! assert!((julian_epoch_from_tai(tai) - 2024.5).abs() < 1e-12);
//! ```

use crate::constants::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_YEAR, DAYS_PER_TROPICAL_YEAR, J2000_MJD,
    SECONDS_PER_DAY, TT_MINUS_TAI,
};

/// MJD (TT) of the start of Besselian year 1900.
const B1900_MJD: f64 = 15019.81352;

/// TAI (MJD seconds) of J2000.0 = 2000 January 1, 12h TT.
pub const J2000_TAI: f64 = J2000_MJD * SECONDS_PER_DAY - TT_MINUS_TAI;

/// TT as MJD in days.
#[inline]
pub fn tt_mjd_from_tai(tai: f64) -> f64 {
    (tai + TT_MINUS_TAI) / SECONDS_PER_DAY
}

/// Days of TT from J2000.0.
#[inline]
pub fn tt_days_from_j2000(tai: f64) -> f64 {
    (tai - J2000_TAI) / SECONDS_PER_DAY
}

/// Julian centuries of TT from J2000.0, the argument of the IAU models.
#[inline]
pub fn tt_centuries_from_tai(tai: f64) -> f64 {
    tt_days_from_j2000(tai) / DAYS_PER_JULIAN_CENTURY
}

/// Days of UT1 from J2000.0, given `UT1 - TAI` in seconds.
#[inline]
pub fn ut1_days_from_j2000(tai: f64, ut1_tai: f64) -> f64 {
    (tai + ut1_tai - J2000_MJD * SECONDS_PER_DAY) / SECONDS_PER_DAY
}

pub fn julian_epoch_from_tai(tai: f64) -> f64 {
    2000.0 + tt_days_from_j2000(tai) / DAYS_PER_JULIAN_YEAR
}

pub fn tai_from_julian_epoch(epoch: f64) -> f64 {
    J2000_TAI + (epoch - 2000.0) * DAYS_PER_JULIAN_YEAR * SECONDS_PER_DAY
}

pub fn besselian_epoch_from_tai(tai: f64) -> f64 {
    1900.0 + (tt_mjd_from_tai(tai) - B1900_MJD) / DAYS_PER_TROPICAL_YEAR
}

pub fn tai_from_besselian_epoch(epoch: f64) -> f64 {
    (B1900_MJD + (epoch - 1900.0) * DAYS_PER_TROPICAL_YEAR) * SECONDS_PER_DAY - TT_MINUS_TAI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_j2000() {
        assert_eq!(tt_days_from_j2000(J2000_TAI), 0.0);
        assert_eq!(tt_centuries_from_tai(J2000_TAI), 0.0);
        assert!((tt_mjd_from_tai(J2000_TAI) - J2000_MJD).abs() < 1e-12);
    }

    #[test]
    fn test_b1950_is_julian_1949_99979() {
        // B1950.0 = JD 2433282.42345905 = J1949.9997904
        let epj = julian_epoch_from_tai(tai_from_besselian_epoch(1950.0));
        assert!((epj - 1949.9997904).abs() < 1e-7);
        let mjd = tt_mjd_from_tai(tai_from_besselian_epoch(1950.0));
        assert!((mjd - 33281.92345905).abs() < 1e-7);
    }

    #[test]
    fn test_epoch_round_trips() {
        for epoch in [1850.0, 1950.0, 2000.0, 2031.25] {
            let j = julian_epoch_from_tai(tai_from_julian_epoch(epoch));
            assert!((j - epoch).abs() < 1e-11);
            let b = besselian_epoch_from_tai(tai_from_besselian_epoch(epoch));
            assert!((b - epoch).abs() < 1e-11);
        }
    }

    #[test]
    fn test_ut1_days() {
        // UT1 = TT exactly when UT1 - TAI = 32.184 s
        let tai = J2000_TAI + 12_345.0;
        assert!((ut1_days_from_j2000(tai, TT_MINUS_TAI) - tt_days_from_j2000(tai)).abs() < 1e-12);
    }
}
