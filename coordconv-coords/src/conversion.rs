//! Conversion between any two [`CoordSys`], routed through ICRS.
//!
//! ```
//! use coordconv_coords::{ConversionEngine, Coord, CoordSys, Site};
//! use coordconv_core::time::J2000_TAI;
//!
//! let site = Site::new(-105.82, 32.78, 2788.0).unwrap();
//! let engine = ConversionEngine::with_site(site);
//!
//! let star = Coord::new(83.8221, -5.3911).unwrap();
//! let tai = J2000_TAI + 8000.0 * 86400.0;
//! let topo = engine
//!     .convert(&star, &CoordSys::Icrs, &CoordSys::AppTopo, tai)
//!     .unwrap();
//! assert!((-90.0..=90.0).contains(&topo.polar_ang()));
//! ```

use crate::pvt::DELTA_T;
use crate::transforms::CoordinateFrame;
use crate::{Coord, CoordError, CoordResult, CoordSys, PvtCoord, Site};
use tracing::trace;

/// Length of the great-circle step used to carry an orientation through a
/// conversion, degrees.
const ORIENT_OFFSET: f64 = 1e-4;

/// A converted coord with a position angle carried along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedCoord {
    pub coord: Coord,
    /// Orientation in the destination frame, degrees; NaN if the destination
    /// coord sits at a pole.
    pub orient: f64,
    /// Ratio of a small angular step in the destination frame to the same
    /// step in the source frame.
    pub scale_change: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ConversionEngine {
    site: Option<Site>,
}

impl ConversionEngine {
    /// An engine for site-free conversions.
    pub fn new() -> Self {
        Self { site: None }
    }

    pub fn with_site(site: Site) -> Self {
        Self { site: Some(site) }
    }

    pub fn site(&self) -> Option<&Site> {
        self.site.as_ref()
    }

    /// Converts `coord` from `from` to `to` at `tai` (MJD seconds).
    ///
    /// A coord in a mean frame first has its space motion applied up to `tai`.
    pub fn convert(
        &self,
        coord: &Coord,
        from: &CoordSys,
        to: &CoordSys,
        tai: f64,
    ) -> CoordResult<Coord> {
        convert_via_icrs(coord, from, to, tai, self.site.as_ref())
    }

    /// Converts a moving coord, returning position and rate in the destination
    /// frame at the same reference time.
    pub fn convert_pvt(
        &self,
        pvt_coord: &PvtCoord,
        from: &CoordSys,
        to: &CoordSys,
    ) -> CoordResult<PvtCoord> {
        let t = pvt_coord.t();
        let now = self.convert(&pvt_coord.coord_at(t), from, to, t)?;
        let later = self.convert(&pvt_coord.coord_at(t + DELTA_T), from, to, t + DELTA_T)?;
        Ok(PvtCoord::from_pair(now, later, t, DELTA_T))
    }

    /// Converts `coord` together with an orientation `from_orient` (degrees, 0 along
    /// increasing equatorial angle, 90 along increasing polar angle).
    pub fn convert_with_orientation(
        &self,
        coord: &Coord,
        from_orient: f64,
        from: &CoordSys,
        to: &CoordSys,
        tai: f64,
    ) -> CoordResult<OrientedCoord> {
        let (step, _) = coord.offset(from_orient, ORIENT_OFFSET)?;
        let converted = self.convert(coord, from, to, tai)?;
        let converted_step = self.convert(&step, from, to, tai)?;

        Ok(OrientedCoord {
            coord: converted,
            orient: converted.orientation_to(&converted_step),
            scale_change: converted.angular_separation(&converted_step) / ORIENT_OFFSET,
        })
    }
}

pub(crate) fn convert_via_icrs(
    coord: &Coord,
    from: &CoordSys,
    to: &CoordSys,
    tai: f64,
    site: Option<&Site>,
) -> CoordResult<Coord> {
    if !tai.is_finite() {
        return Err(CoordError::invalid_coordinate(format!(
            "conversion date must be finite, got {}",
            tai
        )));
    }
    trace!(from = %from, to = %to, tai, "converting coord");

    let start = if from.is_mean() {
        coord.with_proper_motion_applied(tai)
    } else {
        *coord
    };
    let icrs = from.to_icrs(&start, tai, site)?;
    to.from_icrs(&icrs, tai, site)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::SECONDS_PER_JULIAN_YEAR;
    use coordconv_core::test_helpers::assert_angle_near;
    use coordconv_core::time::J2000_TAI;

    fn date() -> f64 {
        J2000_TAI + 8845.5 * 86400.0
    }

    fn site() -> Site {
        Site::new(-105.82, 32.78, 2788.0).unwrap()
    }

    #[test]
    fn test_engine_matches_coord_sys_entry_point() {
        let c = Coord::new(150.0, -20.0).unwrap();
        let engine = ConversionEngine::new();
        let a = engine
            .convert(&c, &CoordSys::Icrs, &CoordSys::Galactic, date())
            .unwrap();
        let b = CoordSys::Galactic
            .convert_from(&CoordSys::Icrs, &c, date(), None)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_space_motion_applied_from_mean_frames() {
        let star =
            Coord::from_catalog(269.4521, 4.6934, 0.5470, -0.8020, 10.3624, -110.6, J2000_TAI)
                .unwrap();
        let tai = J2000_TAI + 10.0 * SECONDS_PER_JULIAN_YEAR;
        let moved = ConversionEngine::new()
            .convert(&star, &CoordSys::Icrs, &CoordSys::Icrs, tai)
            .unwrap();
        assert_eq!(moved.epoch(), tai);
        assert_angle_near(
            moved.polar_ang() - star.polar_ang(),
            103.624 / 3600.0,
            1e-4,
            "polar motion",
        );
    }

    #[test]
    fn test_site_frames_need_site() {
        let c = Coord::new(10.0, 20.0).unwrap();
        let err = ConversionEngine::new()
            .convert(&c, &CoordSys::Icrs, &CoordSys::AppTopo, date())
            .unwrap_err();
        assert!(matches!(err, CoordError::MissingSite { .. }));

        assert!(ConversionEngine::new()
            .convert(&c, &CoordSys::Icrs, &CoordSys::AppGeo, date())
            .is_ok());
        assert!(ConversionEngine::with_site(site())
            .convert(&c, &CoordSys::Icrs, &CoordSys::AppTopo, date())
            .is_ok());
    }

    #[test]
    fn test_non_finite_date_rejected() {
        let c = Coord::new(10.0, 20.0).unwrap();
        let fk5 = CoordSys::Fk5 { equinox: 2000.0 };
        let result = ConversionEngine::new().convert(&c, &CoordSys::Icrs, &fk5, f64::NAN);
        assert!(matches!(result, Err(CoordError::InvalidCoordinate { .. })));
    }

    #[test]
    fn test_orientation_survives_rotation_round_trip() {
        let engine = ConversionEngine::new();
        let c = Coord::new(210.0, 35.0).unwrap();
        let there = engine
            .convert_with_orientation(&c, 30.0, &CoordSys::Icrs, &CoordSys::Galactic, J2000_TAI)
            .unwrap();
        assert!((there.scale_change - 1.0).abs() < 1e-6);

        let back = engine
            .convert_with_orientation(
                &there.coord,
                there.orient,
                &CoordSys::Galactic,
                &CoordSys::Icrs,
                J2000_TAI,
            )
            .unwrap();
        assert_angle_near(back.orient, 30.0, 1e-6, "orientation");
        assert!((back.scale_change - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_refraction_compresses_altitude_steps() {
        let engine = ConversionEngine::with_site(site());
        let topo = Coord::new(120.0, 20.0).unwrap();
        let obs = engine
            .convert_with_orientation(&topo, 90.0, &CoordSys::AppTopo, &CoordSys::Obs, date())
            .unwrap();
        assert!(obs.coord.polar_ang() > 20.0);
        assert_angle_near(obs.orient, 90.0, 1e-3, "vertical stays vertical");
        assert!(obs.scale_change < 1.0 && obs.scale_change > 0.99, "{}", obs.scale_change);
    }

    #[test]
    fn test_convert_pvt_tracks_diurnal_motion() {
        let engine = ConversionEngine::with_site(site());
        let star = PvtCoord::fixed(Coord::new(83.8221, -5.3911).unwrap(), date());
        let topo = engine
            .convert_pvt(&star, &CoordSys::Icrs, &CoordSys::AppTopo)
            .unwrap();

        let later = date() + 10.0;
        let direct = engine
            .convert(&star.coord_at(later), &CoordSys::Icrs, &CoordSys::AppTopo, later)
            .unwrap();
        let extrapolated = topo.coord_at(later);
        // ten seconds of Earth rotation, extrapolated along the tangent
        assert!(extrapolated.angular_separation(&direct) < 1e-4);
        assert!(topo.vel().magnitude() > 0.0);
    }
}
