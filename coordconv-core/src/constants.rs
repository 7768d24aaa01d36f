//! Physical, astronomical and numeric constants.
//!
//! The `DOUBLE_*` sentinels are exported for hosts that have no direct access to
//! IEEE 754 limits (scripting bindings, configuration files).

pub const DOUBLE_EPSILON: f64 = f64::EPSILON;

pub const DOUBLE_MAX: f64 = f64::MAX;

/// Smallest positive normal `f64`.
pub const DOUBLE_MIN: f64 = f64::MIN_POSITIVE;

pub const DOUBLE_NAN: f64 = f64::NAN;

/// MJD of J2000.0 (TT).
pub const J2000_MJD: f64 = 51544.5;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

pub const DAYS_PER_TROPICAL_YEAR: f64 = 365.242198781;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// TT - TAI in seconds (exact by definition).
pub const TT_MINUS_TAI: f64 = 32.184;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_PER_RAD: f64 = 206264.8062470963551564734;

pub const ARCSEC_PER_DEG: f64 = 3600.0;

/// Astronomical Unit in meters (IAU 2012 definition, exact)
pub const AU_M: f64 = 149_597_870_700.0;

pub const AU_KM: f64 = 149_597_870.7;

/// One parsec is the distance at which 1 AU subtends 1 arcsec.
pub const AU_PER_PARSEC: f64 = ARCSEC_PER_RAD;

pub const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;

pub const SPEED_OF_LIGHT_AU_PER_DAY: f64 = 173.1446326846693;

/// Schwarzschild radius of the Sun (2GM/c²) in AU.
pub const SCHWARZSCHILD_RADIUS_SUN_AU: f64 = 1.97412574336e-8;

/// Earth rotation rate in rad/s (sidereal).
pub const EARTH_ROTATION_RATE: f64 = 7.292_115_855_3e-5;

/// WGS84 semi-major axis in meters.
pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

pub const WGS84_FLATTENING: f64 = 0.0033528106647474805;

/// WGS84 first eccentricity squared: e² = (a² - b²) / a².
pub const WGS84_ECCENTRICITY_SQUARED: f64 = 6.6943799901413165e-3;

/// Mean obliquity at J2000.0 used by the IERS 2003 frame bias (IAU 1980 value).
#[allow(clippy::excessive_precision)]
pub const J2000_OBLIQUITY_1980_RAD: f64 = 84381.448 * ARCSEC_TO_RAD;
