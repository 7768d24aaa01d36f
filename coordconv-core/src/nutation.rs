//! IAU 1980 nutation, truncated to its 18 largest terms.
//!
//! Nutation is the short-period wobble of the pole on top of precession, dominated
//! by the 18.6-year lunar node term (about 17″ in longitude, 9″ in obliquity). The
//! 18 terms here (Meeus, *Astronomical Algorithms*, table 22.A) reproduce the full
//! 106-term IAU 1980 series to a few milliarcseconds, which is below the error of
//! the low-precision Earth ephemeris used for aberration.
//!
//! ```
//! use coordconv_core::nutation::Nutation;
//!
//! let n = Nutation::compute(0.0);
//! // at J2000.0: Δψ ≈ -13.9″, Δε ≈ -5.8″
//! assert!((n.delta_psi_arcsec() + 13.93).abs() < 0.01);
//! assert!((n.delta_eps_arcsec() + 5.77).abs() < 0.01);
//! ```

use crate::constants::{ARCSEC_TO_RAD, DEG_TO_RAD};
use crate::matrix::RotationMatrix3;
use crate::math::fmod;
use crate::obliquity::iau_1980_mean_obliquity;

/// One periodic term: multipliers of (D, M, M', F, Ω), then Δψ sine coefficient
/// and its rate, Δε cosine coefficient and its rate, in units of 0.0001″.
type Term = ([i8; 5], f64, f64, f64, f64);

#[rustfmt::skip]
const TERMS: [Term; 18] = [
    ([ 0,  0,  0,  0,  1], -171996.0, -174.2, 92025.0,  8.9),
    ([-2,  0,  0,  2,  2],  -13187.0,   -1.6,  5736.0, -3.1),
    ([ 0,  0,  0,  2,  2],   -2274.0,   -0.2,   977.0, -0.5),
    ([ 0,  0,  0,  0,  2],    2062.0,    0.2,  -895.0,  0.5),
    ([ 0,  1,  0,  0,  0],    1426.0,   -3.4,    54.0, -0.1),
    ([ 0,  0,  1,  0,  0],     712.0,    0.1,    -7.0,  0.0),
    ([-2,  1,  0,  2,  2],    -517.0,    1.2,   224.0, -0.6),
    ([ 0,  0,  0,  2,  1],    -386.0,   -0.4,   200.0,  0.0),
    ([ 0,  0,  1,  2,  2],    -301.0,    0.0,   129.0, -0.1),
    ([-2, -1,  0,  2,  2],     217.0,   -0.5,   -95.0,  0.3),
    ([-2,  0,  1,  0,  0],    -158.0,    0.0,     0.0,  0.0),
    ([-2,  0,  0,  2,  1],     129.0,    0.1,   -70.0,  0.0),
    ([ 0,  0, -1,  2,  2],     123.0,    0.0,   -53.0,  0.0),
    ([ 2,  0,  0,  0,  0],      63.0,    0.0,     0.0,  0.0),
    ([ 0,  0,  1,  0,  1],      63.0,    0.1,   -33.0,  0.0),
    ([ 2,  0, -1,  2,  2],     -59.0,    0.0,    26.0,  0.0),
    ([ 0,  0, -1,  0,  1],     -58.0,   -0.1,    32.0,  0.0),
    ([ 0,  0,  1,  2,  1],     -51.0,    0.0,    27.0,  0.0),
];

const TERM_UNIT_TO_RAD: f64 = 1.0e-4 * ARCSEC_TO_RAD;

/// Delaunay-style arguments (D, M, M', F, Ω) in degrees, reduced to [0, 360).
fn fundamental_args(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        fmod(297.85036 + 445267.111480 * t - 0.0019142 * t2 + t3 / 189474.0, 360.0),
        fmod(357.52772 + 35999.050340 * t - 0.0001603 * t2 - t3 / 300000.0, 360.0),
        fmod(134.96298 + 477198.867398 * t + 0.0086972 * t2 + t3 / 56250.0, 360.0),
        fmod(93.27191 + 483202.017538 * t - 0.0036825 * t2 + t3 / 327270.0, 360.0),
        fmod(125.04452 - 1934.136261 * t + 0.0020708 * t2 + t3 / 450000.0, 360.0),
    ]
}

/// Nutation angles and the mean obliquity they apply to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude, radians.
    pub delta_psi: f64,
    /// Nutation in obliquity, radians.
    pub delta_eps: f64,
    /// IAU 1980 mean obliquity of date, radians.
    pub mean_obliquity: f64,
}

impl Nutation {
    /// Nutation for `t` Julian centuries (TT) from J2000.0.
    pub fn compute(t: f64) -> Self {
        let args = fundamental_args(t);

        let mut dpsi = 0.0;
        let mut deps = 0.0;
        // smallest terms first
        for &(mult, sp, spt, ce, cet) in TERMS.iter().rev() {
            let arg: f64 = mult
                .iter()
                .zip(args.iter())
                .map(|(&m, &a)| f64::from(m) * a)
                .sum();
            let (sarg, carg) = libm::sincos(arg * DEG_TO_RAD);
            dpsi += (sp + spt * t) * sarg;
            deps += (ce + cet * t) * carg;
        }

        Self {
            delta_psi: dpsi * TERM_UNIT_TO_RAD,
            delta_eps: deps * TERM_UNIT_TO_RAD,
            mean_obliquity: iau_1980_mean_obliquity(t),
        }
    }

    pub fn delta_psi_arcsec(&self) -> f64 {
        self.delta_psi / ARCSEC_TO_RAD
    }

    pub fn delta_eps_arcsec(&self) -> f64 {
        self.delta_eps / ARCSEC_TO_RAD
    }

    /// True obliquity of date (mean + Δε), radians.
    pub fn true_obliquity(&self) -> f64 {
        self.mean_obliquity + self.delta_eps
    }

    /// Equation of the equinoxes, `Δψ cos ε`, radians.
    pub fn equation_of_equinoxes(&self) -> f64 {
        self.delta_psi * libm::cos(self.mean_obliquity)
    }

    /// Mean equator and equinox of date to true equator and equinox of date:
    /// `Rx(-(ε + Δε)) · Rz(-Δψ) · Rx(ε)`.
    pub fn matrix(&self) -> RotationMatrix3 {
        let mut m = RotationMatrix3::identity();
        m.rotate_x(self.mean_obliquity);
        m.rotate_z(-self.delta_psi);
        m.rotate_x(-self.true_obliquity());
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeus_example_22a() {
        // 1987 April 10, 0h TD: Δψ = -3.788″, Δε = +9.443″
        let t = (2446895.5 - 2451545.0) / 36525.0;
        let n = Nutation::compute(t);
        assert!((n.delta_psi_arcsec() - -3.788).abs() < 0.005);
        assert!((n.delta_eps_arcsec() - 9.443).abs() < 0.005);
    }

    #[test]
    fn test_j2000_values() {
        let n = Nutation::compute(0.0);
        assert!((n.delta_psi_arcsec() - -13.926997086834385).abs() < 1e-9);
        assert!((n.delta_eps_arcsec() - -5.774421591628259).abs() < 1e-9);
    }

    #[test]
    fn test_amplitude_bounded() {
        for i in 0..200 {
            let t = -1.0 + i as f64 * 0.01;
            let n = Nutation::compute(t);
            assert!(n.delta_psi_arcsec().abs() < 20.0);
            assert!(n.delta_eps_arcsec().abs() < 11.0);
        }
    }

    #[test]
    fn test_matrix_reference() {
        let m = Nutation::compute(0.25).matrix();
        assert!(m.is_rotation_matrix(1e-14));
        assert!((m.get(0, 1) - -6.463996377870733e-07).abs() < 1e-15);
        assert!((m.get(1, 2) - -4.114061742949149e-05).abs() < 1e-15);
        assert!((m.get(2, 0) - 2.8023156349479543e-07).abs() < 1e-15);
    }

    #[test]
    fn test_equation_of_equinoxes() {
        let n = Nutation::compute(0.25);
        let eqeq = n.equation_of_equinoxes();
        assert!(eqeq.abs() < n.delta_psi.abs());
        assert_eq!(eqeq.signum(), n.delta_psi.signum());
    }
}
