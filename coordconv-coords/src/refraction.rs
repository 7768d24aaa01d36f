//! Atmospheric refraction, `R = A tan z + B tan³ z`.
//!
//! `A` and `B` come from the [`Site`]'s weather. Below the site's
//! `min_refraction_alt` the two-term model is no longer trusted, and every function
//! here fails with [`CoordError::OutOfRange`] instead of extrapolating.
//!
//! ```
//! use coordconv_coords::refraction::refraction;
//! use coordconv_coords::Site;
//!
//! let site = Site::new(0.0, 45.0, 0.0).unwrap();
//! let r = refraction(45.0, &site).unwrap();
//! assert!((r * 3600.0 - 58.14).abs() < 0.01);
//! assert!(refraction(2.0, &site).unwrap_err().is_out_of_range());
//! ```

use crate::{CoordError, CoordResult, Site};
use coordconv_core::constants::RAD_TO_DEG;
use coordconv_core::math::tand;
use tracing::debug;

/// Newton steps taken to solve for the observed altitude.
const NEWTON_ITERATIONS: usize = 5;

/// Refraction in degrees for an apparent (observed) altitude in degrees.
///
/// The result is the amount the atmosphere raises the object:
/// `topocentric_alt = apparent_alt - refraction(apparent_alt)`.
pub fn refraction(apparent_alt: f64, site: &Site) -> CoordResult<f64> {
    check_floor(apparent_alt, site)?;
    Ok(refraction_unchecked(apparent_alt, site))
}

/// Observed altitude of an object at unrefracted topocentric altitude `topo_alt`.
///
/// Solves `obs - refraction(obs) = topo_alt` by Newton's method, starting no lower
/// than the floor so every step stays where the model is monotonic.
pub fn observed_from_topocentric(topo_alt: f64, site: &Site) -> CoordResult<f64> {
    let floor = site.min_refraction_alt();
    let lowest_topo = floor - refraction_unchecked(floor, site);
    if !(topo_alt >= lowest_topo) {
        debug!(topo_alt, lowest_topo, "object too low to refract");
        return Err(CoordError::out_of_range("topocentric altitude", topo_alt, lowest_topo));
    }

    let mut obs = topo_alt.max(floor);
    for _ in 0..NEWTON_ITERATIONS {
        let residual = obs - refraction_unchecked(obs, site) - topo_alt;
        let slope = 1.0 - refraction_rate(obs, site);
        obs -= residual / slope;
    }
    // the true solution can sit a rounding error under the floor
    Ok(obs.max(floor))
}

/// Topocentric altitude of an object observed at `obs_alt`.
pub fn topocentric_from_observed(obs_alt: f64, site: &Site) -> CoordResult<f64> {
    Ok(obs_alt - refraction(obs_alt, site)?)
}

fn check_floor(apparent_alt: f64, site: &Site) -> CoordResult<()> {
    let floor = site.min_refraction_alt();
    if apparent_alt >= floor {
        Ok(())
    } else {
        debug!(apparent_alt, floor, "altitude below refraction floor");
        Err(CoordError::out_of_range("apparent altitude", apparent_alt, floor))
    }
}

fn refraction_unchecked(alt: f64, site: &Site) -> f64 {
    let tan_z = tand(90.0 - alt);
    (site.ref_co_a() + site.ref_co_b() * tan_z * tan_z) * tan_z * RAD_TO_DEG
}

/// d(refraction)/d(altitude), dimensionless.
fn refraction_rate(alt: f64, site: &Site) -> f64 {
    let tan_z = tand(90.0 - alt);
    let sec2 = 1.0 + tan_z * tan_z;
    -sec2 * (site.ref_co_a() + 3.0 * site.ref_co_b() * tan_z * tan_z)
}
