//! Fixed frame-to-frame constants.

use coordconv_core::RotationMatrix3;

/// ICRS to galactic rotation; rows are the galactic x, y, z axes expressed in
/// ICRS.
///
/// Derived from the IAU-defined galactic pole and zero point transferred to the
/// ICRS (Hipparcos): the north galactic pole lies at RA 192.85948°, Dec 27.12825°,
/// the galactic centre at RA 266.40499°, Dec -28.93617°.
///
/// Reference: Liu, J.-C., Zhu, Z., & Zhang, H. (2011), A&A 526, A16.
#[allow(clippy::excessive_precision)]
pub const ICRS_TO_GALACTIC: RotationMatrix3 = RotationMatrix3::from_array([
    [
        -0.054875560416215368492398900454,
        -0.873437090234885048760383168409,
        -0.483835015548713226831774175116,
    ],
    [
        0.494109427875583673525222371358,
        -0.444829629960011178146614061616,
        0.746982244497218890527388004556,
    ],
    [
        -0.867666149019004701181616534570,
        -0.198076373431201528180486091412,
        0.455983776175066922272100478348,
    ],
]);

/// Mean FK4 B1950.0 (E-terms removed) to mean FK5 J2000.0, the position block of
/// the Standish (1982) / Aoki et al. (1983) transformation.
pub const FK4_B1950_TO_FK5_J2000: RotationMatrix3 = RotationMatrix3::from_array([
    [0.9999256782, -0.0111820611, -0.0048579477],
    [0.0111820610, 0.9999374784, -0.0000271765],
    [0.0048579479, -0.0000271474, 0.9999881997],
]);

/// E-terms of aberration folded into FK4 positions, radians.
pub const FK4_E_TERMS: [f64; 3] = [-1.62557e-6, -0.31919e-6, -0.13843e-6];

/// Besselian equinox the FK4 to FK5 matrix is defined at.
pub const FK4_REFERENCE_EQUINOX: f64 = 1950.0;

/// Julian equinox of the FK5 side of the FK4 to FK5 matrix.
pub const FK5_REFERENCE_EQUINOX: f64 = 2000.0;
