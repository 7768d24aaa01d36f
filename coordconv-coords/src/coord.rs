//! A celestial position with optional distance and space motion.
//!
//! Internally a [`Coord`] is cartesian: `pos` in AU (a unit vector when the object is
//! at infinity) and `pm`, the space motion in AU per Julian year. Objects at infinity
//! keep their proper motion as the motion of a fictitious point at unit distance;
//! it is reported by [`Coord::proper_motion`] but never applied.
//!
//! The public view is spherical: an equatorial angle in [0, 360), a polar angle in
//! [-90, 90], parallax in arcsec, proper motion in arcsec per Julian year (the
//! equatorial rate is dα/dt, not dα/dt cos δ) and radial velocity in km/s.
//!
//! ```
//! use coordconv_coords::Coord;
//! use coordconv_core::time::J2000_TAI;
//!
//! // Barnard's star
//! let star =
//!     Coord::from_catalog(269.4521, 4.6934, 0.5470, -0.8020, 10.3624, -110.6, J2000_TAI)
//!         .unwrap();
//! assert!((star.distance().unwrap() / 206264.806 - 1.828).abs() < 1e-3);
//!
//! let later = star.with_proper_motion_applied(J2000_TAI + 10.0 * 365.25 * 86400.0);
//! assert!((later.polar_ang() - star.polar_ang() - 103.6 / 3600.0).abs() < 1e-3);
//! ```

use crate::pvt::Pvt;
use crate::{CoordError, CoordResult};
use coordconv_core::angle::wrap_pos;
use coordconv_core::constants::{
    ARCSEC_PER_DEG, ARCSEC_TO_RAD, AU_KM, AU_PER_PARSEC, DAYS_PER_JULIAN_YEAR, RAD_TO_DEG,
    SECONDS_PER_DAY,
};
use coordconv_core::math::{atan2d, cosd, sind};
use coordconv_core::time::J2000_TAI;
use coordconv_core::{compute_rotation_matrix, Vector3};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parallaxes below this (arcsec) put the object at infinity.
pub const MIN_PARALLAX: f64 = 1e-7;

pub const SECONDS_PER_JULIAN_YEAR: f64 = DAYS_PER_JULIAN_YEAR * SECONDS_PER_DAY;

/// 1 km/s in AU per Julian year.
const KM_PER_S_TO_AU_PER_YEAR: f64 = SECONDS_PER_JULIAN_YEAR / AU_KM;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "CoordRecord", into = "CoordRecord")
)]
pub struct Coord {
    pos: Vector3,
    pm: Vector3,
    at_infinity: bool,
    epoch: f64,
}

/// The stored form of a [`Coord`]. Loading one goes through
/// [`Coord::from_vectors`], so it is checked like any other construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordRecord {
    pub pos: Vector3,
    pub pm: Vector3,
    pub at_infinity: bool,
    pub epoch: f64,
}

impl TryFrom<CoordRecord> for Coord {
    type Error = CoordError;

    fn try_from(record: CoordRecord) -> CoordResult<Self> {
        Self::from_vectors(record.pos, record.pm, record.at_infinity, record.epoch)
    }
}

impl From<Coord> for CoordRecord {
    fn from(coord: Coord) -> Self {
        Self {
            pos: coord.pos,
            pm: coord.pm,
            at_infinity: coord.at_infinity,
            epoch: coord.epoch,
        }
    }
}

/// Unit vectors along increasing equatorial and polar angle at a direction.
fn tangent_axes(equat_ang: f64, polar_ang: f64) -> (Vector3, Vector3) {
    let (se, ce) = (sind(equat_ang), cosd(equat_ang));
    let (sp, cp) = (sind(polar_ang), cosd(polar_ang));
    (
        Vector3::new(-se, ce, 0.0),
        Vector3::new(-sp * ce, -sp * se, cp),
    )
}

fn check_finite(name: &str, value: f64) -> CoordResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoordError::invalid_coordinate(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

impl Coord {
    /// A direction at infinity with no motion, epoch J2000.0.
    pub fn new(equat_ang: f64, polar_ang: f64) -> CoordResult<Self> {
        Self::from_catalog(equat_ang, polar_ang, 0.0, 0.0, 0.0, 0.0, J2000_TAI)
    }

    /// A catalog entry.
    ///
    /// * `parallax` - arcsec; below [`MIN_PARALLAX`] (including negative values)
    ///   the object is at infinity and `radial_vel` is ignored
    /// * `equat_pm`, `polar_pm` - dEquat/dt and dPolar/dt, arcsec per Julian year
    /// * `radial_vel` - km/s, positive receding
    /// * `epoch` - TAI (MJD seconds) the position refers to
    pub fn from_catalog(
        equat_ang: f64,
        polar_ang: f64,
        parallax: f64,
        equat_pm: f64,
        polar_pm: f64,
        radial_vel: f64,
        epoch: f64,
    ) -> CoordResult<Self> {
        for (name, value) in [
            ("equat_ang", equat_ang),
            ("polar_ang", polar_ang),
            ("parallax", parallax),
            ("equat_pm", equat_pm),
            ("polar_pm", polar_pm),
            ("radial_vel", radial_vel),
            ("epoch", epoch),
        ] {
            check_finite(name, value)?;
        }
        if !(-90.0..=90.0).contains(&polar_ang) {
            return Err(CoordError::invalid_coordinate(format!(
                "polar_ang = {} is outside [-90, 90]",
                polar_ang
            )));
        }

        let at_infinity = parallax < MIN_PARALLAX;
        let dist = if at_infinity {
            1.0
        } else {
            AU_PER_PARSEC / parallax
        };
        let rad_vel = if at_infinity {
            0.0
        } else {
            radial_vel * KM_PER_S_TO_AU_PER_YEAR
        };

        let r_hat = Vector3::from_spherical(equat_ang, polar_ang);
        let (e_hat, p_hat) = tangent_axes(equat_ang, polar_ang);
        let pm = r_hat * rad_vel
            + e_hat * (dist * equat_pm * ARCSEC_TO_RAD * cosd(polar_ang))
            + p_hat * (dist * polar_pm * ARCSEC_TO_RAD);

        Ok(Self {
            pos: r_hat * dist,
            pm,
            at_infinity,
            epoch,
        })
    }

    /// From cartesian position (AU, or any length when `at_infinity`) and space
    /// motion (AU per Julian year).
    pub fn from_vectors(
        pos: Vector3,
        pm: Vector3,
        at_infinity: bool,
        epoch: f64,
    ) -> CoordResult<Self> {
        if !pos.is_finite() || !pm.is_finite() {
            return Err(CoordError::invalid_coordinate("non-finite position or motion"));
        }
        check_finite("epoch", epoch)?;
        let mag = pos.magnitude();
        if mag == 0.0 {
            return Err(CoordError::invalid_coordinate("zero position vector"));
        }
        let (pos, pm) = if at_infinity {
            (pos / mag, pm / mag)
        } else {
            (pos, pm)
        };
        Ok(Self {
            pos,
            pm,
            at_infinity,
            epoch,
        })
    }

    /// Same coord with new position and motion vectors, which the caller has
    /// produced by rotating or correcting this one's.
    pub(crate) fn with_vectors(&self, pos: Vector3, pm: Vector3, epoch: f64) -> Self {
        Self {
            pos,
            pm,
            at_infinity: self.at_infinity,
            epoch,
        }
    }

    pub fn pos(&self) -> Vector3 {
        self.pos
    }

    pub fn pm(&self) -> Vector3 {
        self.pm
    }

    pub fn at_infinity(&self) -> bool {
        self.at_infinity
    }

    /// TAI, MJD seconds.
    pub fn epoch(&self) -> f64 {
        self.epoch
    }

    /// `(equat_ang, polar_ang)` in degrees.
    pub fn spherical(&self) -> (f64, f64) {
        self.pos.to_spherical()
    }

    pub fn equat_ang(&self) -> f64 {
        self.spherical().0
    }

    pub fn polar_ang(&self) -> f64 {
        self.spherical().1
    }

    /// AU; `None` at infinity.
    pub fn distance(&self) -> Option<f64> {
        (!self.at_infinity).then(|| self.pos.magnitude())
    }

    /// Arcsec; 0 at infinity.
    pub fn parallax(&self) -> f64 {
        self.distance().map_or(0.0, |d| AU_PER_PARSEC / d)
    }

    /// True when the equatorial angle is undefined.
    pub fn is_at_pole(&self) -> bool {
        self.pos.is_on_polar_axis()
    }

    /// `(dEquat/dt, dPolar/dt)` in arcsec per Julian year. The equatorial rate is
    /// reported as 0 at a pole.
    pub fn proper_motion(&self) -> (f64, f64) {
        let (equat, polar) = self.spherical();
        let (e_hat, p_hat) = tangent_axes(equat, polar);
        let dist = self.pos.magnitude();
        let to_arcsec = RAD_TO_DEG * ARCSEC_PER_DEG / dist;

        let polar_pm = self.pm.dot(&p_hat) * to_arcsec;
        let equat_pm = if self.is_at_pole() {
            0.0
        } else {
            self.pm.dot(&e_hat) * to_arcsec / cosd(polar)
        };
        (equat_pm, polar_pm)
    }

    /// km/s, positive receding; 0 at infinity.
    pub fn radial_velocity(&self) -> f64 {
        if self.at_infinity {
            return 0.0;
        }
        self.pm.dot(&self.pos.normalize()) / KM_PER_S_TO_AU_PER_YEAR
    }

    /// Equatorial angle and its rate (deg/s) at the epoch; no rate at infinity.
    pub fn equat_pvt(&self) -> Pvt {
        Pvt::new(self.equat_ang(), self.angular_rate().0, self.epoch)
    }

    /// Polar angle and its rate (deg/s) at the epoch; no rate at infinity.
    pub fn polar_pvt(&self) -> Pvt {
        Pvt::new(self.polar_ang(), self.angular_rate().1, self.epoch)
    }

    /// Distance (AU) and its rate (AU/s); `None` at infinity.
    pub fn distance_pvt(&self) -> Option<Pvt> {
        self.distance().map(|d| {
            Pvt::new(
                d,
                self.radial_velocity() * KM_PER_S_TO_AU_PER_YEAR / SECONDS_PER_JULIAN_YEAR,
                self.epoch,
            )
        })
    }

    fn angular_rate(&self) -> (f64, f64) {
        if self.at_infinity {
            return (0.0, 0.0);
        }
        let (equat_pm, polar_pm) = self.proper_motion();
        let to_deg_per_s = 1.0 / (ARCSEC_PER_DEG * SECONDS_PER_JULIAN_YEAR);
        (equat_pm * to_deg_per_s, polar_pm * to_deg_per_s)
    }

    /// `(equat_ang, polar_ang, distance)` linearly extrapolated to `tai`.
    ///
    /// This is the first-order model; over long intervals use
    /// [`with_proper_motion_applied`](Self::with_proper_motion_applied). Each angle
    /// is extrapolated on its own, so near a pole the polar angle can run past ±90
    /// and is returned as is.
    pub fn position_at(&self, tai: f64) -> (f64, f64, Option<f64>) {
        (
            wrap_pos(self.equat_pvt().value_at(tai)),
            self.polar_pvt().value_at(tai),
            self.distance_pvt().map(|d| d.value_at(tai)),
        )
    }

    /// The coord moved along its space motion to `tai`.
    ///
    /// Objects at infinity do not move; only their epoch changes.
    pub fn with_proper_motion_applied(&self, tai: f64) -> Self {
        if self.at_infinity {
            return Self { epoch: tai, ..*self };
        }
        let years = (tai - self.epoch) / SECONDS_PER_JULIAN_YEAR;
        Self {
            pos: self.pos + self.pm * years,
            epoch: tai,
            ..*self
        }
    }

    pub fn with_proper_motion_removed(&self) -> Self {
        Self {
            pm: Vector3::zeros(),
            ..*self
        }
    }

    /// Great-circle distance to `other`, degrees.
    pub fn angular_separation(&self, other: &Self) -> f64 {
        self.pos.angle_to(&other.pos)
    }

    /// Direction of the great circle from this coord toward `other`, degrees:
    /// 0 along increasing equatorial angle, 90 along increasing polar angle.
    ///
    /// NaN when this coord is at a pole or `other` is coincident or antipodal.
    pub fn orientation_to(&self, other: &Self) -> f64 {
        if self.is_at_pole() {
            return f64::NAN;
        }
        let r = self.pos.normalize();
        let q = other.pos.normalize();
        let toward = q - r * r.dot(&q);
        if toward.magnitude() < 1e-15 {
            return f64::NAN;
        }
        let (equat, polar) = self.spherical();
        let (e_hat, p_hat) = tangent_axes(equat, polar);
        atan2d(toward.dot(&p_hat), toward.dot(&e_hat))
    }

    /// Moves `dist` degrees along the great circle leaving this coord at
    /// orientation `orient` (same convention as [`orientation_to`](Self::orientation_to)).
    ///
    /// Returns the new coord, with its motion carried along the same rotation, and
    /// the orientation of the great circle at the destination.
    pub fn offset(&self, orient: f64, dist: f64) -> CoordResult<(Self, f64)> {
        check_finite("orient", orient)?;
        check_finite("dist", dist)?;

        let (equat, polar) = self.spherical();
        let (e_hat, p_hat) = tangent_axes(equat, polar);
        let r = self.pos.normalize();
        let u = e_hat * cosd(orient) + p_hat * sind(orient);

        let rotation = compute_rotation_matrix(r.cross(&u), dist)?;
        let moved = Self {
            pos: rotation * self.pos,
            pm: rotation * self.pm,
            ..*self
        };

        let heading = rotation * u;
        let (equat2, polar2) = moved.spherical();
        let (e2, p2) = tangent_axes(equat2, polar2);
        let to_orient = atan2d(heading.dot(&p2), heading.dot(&e2));
        Ok((moved, to_orient))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (equat, polar) = self.spherical();
        write!(f, "Coord({:.9}°, {:.9}°", equat, polar)?;
        if !self.at_infinity {
            write!(
                f,
                ", plx={:.6}″, rv={:.3} km/s",
                self.parallax(),
                self.radial_velocity()
            )?;
        }
        let (equat_pm, polar_pm) = self.proper_motion();
        if equat_pm != 0.0 || polar_pm != 0.0 {
            write!(f, ", pm=({:.6}, {:.6})″/yr", equat_pm, polar_pm)?;
        }
        write!(f, ", epoch={:.3})", self.epoch)
    }
}
