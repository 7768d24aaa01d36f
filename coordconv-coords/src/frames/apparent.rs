//! Observation-time frames: apparent geocentric, apparent topocentric, observed.
//!
//! ICRS to apparent geocentric follows the usual place-of-star chain: space motion
//! to the date, annual parallax, light deflection by the Sun, annual aberration,
//! then bias, precession and nutation to the true equator and equinox of date.
//! Apparent topocentric continues with earth rotation (local apparent sidereal
//! time), diurnal parallax and diurnal aberration into horizon coordinates
//! (azimuth from north through east, altitude). Observed adds refraction.
//!
//! Each step has an inverse; deflection and aberration are inverted iteratively.

use crate::earth::{
    apply_aberration, apply_light_deflection, compute_earth_state, remove_aberration,
    remove_light_deflection, EarthState,
};
use crate::refraction::{observed_from_topocentric, topocentric_from_observed};
use crate::{Coord, CoordResult, Site};
use coordconv_core::constants::DEG_TO_RAD;
use coordconv_core::math::{cosd, sind};
use coordconv_core::nutation::Nutation;
use coordconv_core::precession::bias_precession;
use coordconv_core::sidereal::last;
use coordconv_core::time::{julian_epoch_from_tai, tt_centuries_from_tai, ut1_days_from_j2000};
use coordconv_core::{RotationMatrix3, Vector3};

/// Date-dependent quantities shared by every step of one conversion.
#[derive(Debug, Clone, Copy)]
pub struct ApparentContext {
    pub tai: f64,
    pub nutation: Nutation,
    /// ICRS to true equator and equinox of date.
    pub npb: RotationMatrix3,
    pub earth: EarthState,
}

impl ApparentContext {
    pub fn new(tai: f64) -> Self {
        let nutation = Nutation::compute(tt_centuries_from_tai(tai));
        let bp = bias_precession(julian_epoch_from_tai(tai)).bias_precession_matrix;
        Self {
            tai,
            nutation,
            npb: nutation.matrix() * bp,
            earth: compute_earth_state(tai),
        }
    }

    /// True equator of date to the site's hour-angle frame (x toward the
    /// meridian, y toward the east), a rotation by local apparent sidereal time.
    fn earth_rotation(&self, site: &Site) -> RotationMatrix3 {
        let ut1_days = ut1_days_from_j2000(self.tai, site.ut1_tai());
        let lst = last(ut1_days, &self.nutation, site.mean_long());
        let mut m = RotationMatrix3::identity();
        m.rotate_z(lst * DEG_TO_RAD);
        m
    }
}

/// Hour-angle frame to horizon frame; rows are north, east and zenith.
///
/// North, east, zenith is left-handed, so this is a reflection (determinant -1).
/// It puts azimuth at `atan2(east, north)`, measured from north through east.
fn horizon_matrix(site: &Site) -> RotationMatrix3 {
    let (sin_lat, cos_lat) = (sind(site.mean_lat()), cosd(site.mean_lat()));
    RotationMatrix3::from_array([
        [-sin_lat, 0.0, cos_lat],
        [0.0, 1.0, 0.0],
        [cos_lat, 0.0, sin_lat],
    ])
}

/// Direction and optional distance of a coord's position.
fn split(coord: &Coord) -> (Vector3, Option<f64>) {
    let pos = coord.pos();
    (pos.normalize(), coord.distance().map(|_| pos.magnitude()))
}

/// An apparent coord: no space motion, epoch equal to the date.
fn apparent(like: &Coord, dir: Vector3, dist: Option<f64>, tai: f64) -> Coord {
    like.with_vectors(dir * dist.unwrap_or(1.0), Vector3::zeros(), tai)
}

pub fn icrs_to_app_geo(icrs: &Coord, ctx: &ApparentContext) -> Coord {
    let moved = icrs.with_proper_motion_applied(ctx.tai);
    let earth = &ctx.earth;
    let em = earth.sun_distance();

    let (dir, dist) = match split(&moved) {
        (_, Some(_)) => {
            let geocentric = moved.pos() - earth.heliocentric_position;
            (geocentric.normalize(), Some(geocentric.magnitude()))
        }
        (dir, None) => (dir, None),
    };

    let deflected = apply_light_deflection(dir, earth.sun_to_observer(), em);
    let aberrated = apply_aberration(deflected, earth.barycentric_velocity, em);
    apparent(icrs, ctx.npb * aberrated, dist, ctx.tai)
}

pub fn app_geo_to_icrs(app_geo: &Coord, ctx: &ApparentContext) -> Coord {
    let earth = &ctx.earth;
    let em = earth.sun_distance();
    let (dir, dist) = split(app_geo);

    let mean = ctx.npb.apply_transpose(dir);
    let unaberrated = remove_aberration(mean, earth.barycentric_velocity, em);
    let undeflected = remove_light_deflection(unaberrated, earth.sun_to_observer(), em);

    match dist {
        Some(d) => {
            let barycentric = undeflected * d + earth.heliocentric_position;
            apparent(
                app_geo,
                barycentric.normalize(),
                Some(barycentric.magnitude()),
                ctx.tai,
            )
        }
        None => apparent(app_geo, undeflected, None, ctx.tai),
    }
}

pub fn app_geo_to_app_topo(app_geo: &Coord, ctx: &ApparentContext, site: &Site) -> Coord {
    let (dir, dist) = split(app_geo);
    let local = ctx.earth_rotation(site) * dir;

    let (local, dist) = match dist {
        Some(d) => {
            let topocentric = local * d - site.pos();
            (topocentric.normalize(), Some(topocentric.magnitude()))
        }
        None => (local, None),
    };

    // the observer moves toward the east point at ω u
    let aberrated = (local + Vector3::y_axis() * site.diur_ab_mag()).normalize();
    apparent(app_geo, horizon_matrix(site) * aberrated, dist, ctx.tai)
}

pub fn app_topo_to_app_geo(app_topo: &Coord, ctx: &ApparentContext, site: &Site) -> Coord {
    let (dir, dist) = split(app_topo);
    let local = horizon_matrix(site).apply_transpose(dir);

    // solve |s·local - k·ŷ| = 1 for the unaberrated direction
    let k = site.diur_ab_mag();
    let ly = local.y;
    let s = k * ly + libm::sqrt(1.0 - k * k * (1.0 - ly * ly));
    let local = (local * s - Vector3::y_axis() * k).normalize();

    let (local, dist) = match dist {
        Some(d) => {
            let geocentric = local * d + site.pos();
            (geocentric.normalize(), Some(geocentric.magnitude()))
        }
        None => (local, None),
    };

    let dir = ctx.earth_rotation(site).apply_transpose(local);
    apparent(app_topo, dir, dist, ctx.tai)
}

pub fn app_topo_to_obs(app_topo: &Coord, site: &Site, tai: f64) -> CoordResult<Coord> {
    let (az, alt) = app_topo.spherical();
    let obs_alt = observed_from_topocentric(alt, site)?;
    let (_, dist) = split(app_topo);
    Ok(apparent(app_topo, Vector3::from_spherical(az, obs_alt), dist, tai))
}

pub fn obs_to_app_topo(obs: &Coord, site: &Site, tai: f64) -> CoordResult<Coord> {
    let (az, alt) = obs.spherical();
    let topo_alt = topocentric_from_observed(alt, site)?;
    let (_, dist) = split(obs);
    Ok(apparent(obs, Vector3::from_spherical(az, topo_alt), dist, tai))
}
