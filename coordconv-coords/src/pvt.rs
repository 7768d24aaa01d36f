//! Position, velocity and time of a single scalar.
//!
//! A [`Pvt`] is a value (an angle or a length), its rate of change per second, and
//! the TAI date at which the value holds. It lets a caller ask where something is
//! at any nearby time without redoing the computation that produced it:
//!
//! ```text
//! value_at(t') = pos + vel * (t' - t)
//! ```
//!
//! The model is linear, so it degrades with distance from `t`; callers that keep a
//! `Pvt` around for long should [`rebase`](Pvt::rebase) or recompute it.
//!
//! ```
//! use coordconv_coords::Pvt;
//!
//! let az = Pvt::new(120.0, 0.01, 1000.0);
//! assert_eq!(az.value_at(1100.0), 121.0);
//!
//! let later = az.rebase(1100.0);
//! assert_eq!((later.pos, later.vel, later.t), (121.0, 0.01, 1100.0));
//! ```

use coordconv_core::angle::wrap_near;
use coordconv_core::math::{polar_from_xy, rot_2d, xy_from_polar};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Time step in seconds used to estimate velocities by finite differences.
pub const DELTA_T: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pvt {
    /// Value at `t`.
    pub pos: f64,
    /// Rate of change per second.
    pub vel: f64,
    /// TAI, MJD seconds.
    pub t: f64,
}

impl Default for Pvt {
    fn default() -> Self {
        Self::invalid(0.0)
    }
}

impl Pvt {
    pub const fn new(pos: f64, vel: f64, t: f64) -> Self {
        Self { pos, vel, t }
    }

    /// A value that does not change.
    pub const fn constant(pos: f64, t: f64) -> Self {
        Self { pos, vel: 0.0, t }
    }

    /// NaN position and velocity; any arithmetic with it stays invalid.
    pub const fn invalid(t: f64) -> Self {
        Self {
            pos: f64::NAN,
            vel: f64::NAN,
            t,
        }
    }

    /// Builds a PVT from the values at `t` and `t + delta_t`.
    ///
    /// For angles (`is_angle`) the second value is first wrapped near the first, so
    /// crossing 0/360 between the samples does not produce a 360° jump in velocity.
    ///
    /// ```
    /// use coordconv_coords::Pvt;
    ///
    /// let p = Pvt::from_pair([359.99, 0.01], 0.0, 1.0, true);
    /// assert!((p.vel - 0.02).abs() < 1e-9);
    /// ```
    pub fn from_pair(pos_pair: [f64; 2], t: f64, delta_t: f64, is_angle: bool) -> Self {
        let [pos0, mut pos1] = pos_pair;
        if is_angle {
            pos1 = wrap_near(pos1, pos0);
        }
        Self {
            pos: pos0,
            vel: (pos1 - pos0) / delta_t,
            t,
        }
    }

    pub fn value_at(&self, t: f64) -> f64 {
        self.pos + self.vel * (t - self.t)
    }

    /// Same motion, referenced to `t`.
    pub fn rebase(&self, t: f64) -> Self {
        Self {
            pos: self.value_at(t),
            vel: self.vel,
            t,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite() && self.t.is_finite()
    }

    /// Values at `t` and `t + DELTA_T`.
    fn sample_pair(&self) -> [f64; 2] {
        [self.pos, self.value_at(self.t + DELTA_T)]
    }
}

impl Add for Pvt {
    type Output = Pvt;

    /// `rhs` is evaluated at this PVT's time.
    fn add(self, rhs: Pvt) -> Pvt {
        Pvt::new(self.pos + rhs.value_at(self.t), self.vel + rhs.vel, self.t)
    }
}

impl Sub for Pvt {
    type Output = Pvt;

    /// `rhs` is evaluated at this PVT's time.
    fn sub(self, rhs: Pvt) -> Pvt {
        Pvt::new(self.pos - rhs.value_at(self.t), self.vel - rhs.vel, self.t)
    }
}

impl Add<f64> for Pvt {
    type Output = Pvt;

    fn add(self, rhs: f64) -> Pvt {
        Pvt::new(self.pos + rhs, self.vel, self.t)
    }
}

impl Sub<f64> for Pvt {
    type Output = Pvt;

    fn sub(self, rhs: f64) -> Pvt {
        Pvt::new(self.pos - rhs, self.vel, self.t)
    }
}

impl Mul<f64> for Pvt {
    type Output = Pvt;

    fn mul(self, rhs: f64) -> Pvt {
        Pvt::new(self.pos * rhs, self.vel * rhs, self.t)
    }
}

impl Div<f64> for Pvt {
    type Output = Pvt;

    fn div(self, rhs: f64) -> Pvt {
        Pvt::new(self.pos / rhs, self.vel / rhs, self.t)
    }
}

impl Neg for Pvt {
    type Output = Pvt;

    fn neg(self) -> Pvt {
        Pvt::new(-self.pos, -self.vel, self.t)
    }
}

impl fmt::Display for Pvt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PVT({}, {}, {})", self.pos, self.vel, self.t)
    }
}

/// [`polar_from_xy`] for moving points.
///
/// Returns `(r, theta, at_origin)` with `theta` in degrees; `y` is evaluated at `x`'s
/// time. When the point is at the origin at `x.t` the angle is 0 and its velocity is
/// taken from where the point is heading, if anywhere.
pub fn polar_from_xy_pvt(x: &Pvt, y: &Pvt) -> (Pvt, Pvt, bool) {
    let t = x.t;
    let xs = x.sample_pair();
    let ys = [y.value_at(t), y.value_at(t + DELTA_T)];

    let p0 = polar_from_xy(xs[0], ys[0]);
    let p1 = polar_from_xy(xs[1], ys[1]);

    let r = Pvt::from_pair([p0.r, p1.r], t, DELTA_T, false);
    let theta = if p0.at_origin || p1.at_origin {
        Pvt::constant(if p0.at_origin { 0.0 } else { p0.theta }, t)
    } else {
        Pvt::from_pair([p0.theta, p1.theta], t, DELTA_T, true)
    };
    (r, theta, p0.at_origin)
}

/// [`xy_from_polar`] for moving points; `theta` is evaluated at `r`'s time.
pub fn xy_from_polar_pvt(r: &Pvt, theta: &Pvt) -> (Pvt, Pvt) {
    let t = r.t;
    let rs = r.sample_pair();
    let ts = [theta.value_at(t), theta.value_at(t + DELTA_T)];

    let (x0, y0) = xy_from_polar(rs[0], ts[0]);
    let (x1, y1) = xy_from_polar(rs[1], ts[1]);
    (
        Pvt::from_pair([x0, x1], t, DELTA_T, false),
        Pvt::from_pair([y0, y1], t, DELTA_T, false),
    )
}

/// [`rot_2d`] for moving points; a rotation by a constant angle is linear, so the
/// velocities rotate like the positions.
pub fn rot_2d_pvt(x: &Pvt, y: &Pvt, ang: f64) -> (Pvt, Pvt) {
    let t = x.t;
    let y = y.rebase(t);
    let (px, py) = rot_2d(x.pos, y.pos, ang);
    let (vx, vy) = rot_2d(x.vel, y.vel, ang);
    (Pvt::new(px, vx, t), Pvt::new(py, vy, t))
}
