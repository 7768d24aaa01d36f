//! A [`Coord`] together with its rate of change.
//!
//! Converting into an apparent or observed frame is costly and the result drifts
//! quickly (an altitude moves up to 15″ per second). A [`PvtCoord`] holds the
//! converted coord at a reference time plus the velocity of its cartesian position,
//! so nearby positions come from linear extrapolation instead of a new conversion.

use crate::pvt::{Pvt, DELTA_T};
use crate::Coord;
use coordconv_core::Vector3;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PvtCoord {
    coord: Coord,
    /// d(pos)/dt, per second.
    vel: Vector3,
    /// TAI at which `coord` holds.
    t: f64,
}

impl PvtCoord {
    pub fn new(coord: Coord, vel: Vector3, t: f64) -> Self {
        Self { coord, vel, t }
    }

    /// A coord that stays put (apart from its own space motion).
    pub fn fixed(coord: Coord, t: f64) -> Self {
        Self::new(coord, Vector3::zeros(), t)
    }

    /// From the same object at `t` and `t + delta_t`.
    pub fn from_pair(coord: Coord, later: Coord, t: f64, delta_t: f64) -> Self {
        let vel = (later.pos() - coord.pos()) / delta_t;
        Self { coord, vel, t }
    }

    pub fn coord(&self) -> &Coord {
        &self.coord
    }

    pub fn vel(&self) -> Vector3 {
        self.vel
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    /// The coord extrapolated to `tai`; its epoch moves by the same interval.
    pub fn coord_at(&self, tai: f64) -> Coord {
        let dt = tai - self.t;
        let pos = self.coord.pos() + self.vel * dt;
        let pos = if self.coord.at_infinity() {
            pos.normalize()
        } else {
            pos
        };
        self.coord
            .with_vectors(pos, self.coord.pm(), self.coord.epoch() + dt)
    }

    pub fn equat_pvt(&self) -> Pvt {
        Pvt::from_pair(
            [self.coord.equat_ang(), self.coord_at(self.t + DELTA_T).equat_ang()],
            self.t,
            DELTA_T,
            true,
        )
    }

    pub fn polar_pvt(&self) -> Pvt {
        Pvt::from_pair(
            [self.coord.polar_ang(), self.coord_at(self.t + DELTA_T).polar_ang()],
            self.t,
            DELTA_T,
            false,
        )
    }

    /// The same motion referenced to `tai`.
    pub fn rebase(&self, tai: f64) -> Self {
        Self {
            coord: self.coord_at(tai),
            vel: self.vel,
            t: tai,
        }
    }
}

impl fmt::Display for PvtCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PvtCoord({}, vel=({:e}, {:e}, {:e})/s, t={:.3})",
            self.coord, self.vel.x, self.vel.y, self.vel.z, self.t
        )
    }
}
