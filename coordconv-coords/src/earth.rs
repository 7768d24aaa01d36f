//! Earth's position and velocity, and the two corrections they drive: solar light
//! deflection and annual aberration.
//!
//! The ephemeris is the low-precision solar theory of the Astronomical Almanac
//! (good to about 0.01° in longitude between 1950 and 2050), differentiated
//! analytically for the velocity. Heliocentric velocity stands in for barycentric;
//! the difference is below 0.2″ of aberration. Vectors are in the mean equator and
//! equinox of J2000.0.

use coordconv_core::constants::{
    DAYS_PER_JULIAN_CENTURY, DEG_TO_RAD, SCHWARZSCHILD_RADIUS_SUN_AU,
    SPEED_OF_LIGHT_AU_PER_DAY,
};
use coordconv_core::time::tt_days_from_j2000;
use coordconv_core::Vector3;

/// Mean obliquity of J2000.0 in degrees.
const J2000_OBLIQUITY_DEG: f64 = 23.4392911;

/// General precession in longitude, degrees per Julian century.
const PRECESSION_IN_LONGITUDE: f64 = 1.3969713;

/// Iterations used to invert deflection and aberration.
const INVERSE_ITERATIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthState {
    /// Sun to Earth, AU.
    pub heliocentric_position: Vector3,
    /// AU per day.
    pub barycentric_velocity: Vector3,
}

impl EarthState {
    pub fn sun_distance(&self) -> f64 {
        self.heliocentric_position.magnitude()
    }

    /// Unit vector from the Sun to the Earth.
    pub fn sun_to_observer(&self) -> Vector3 {
        self.heliocentric_position.normalize()
    }
}

/// Earth state at a TAI date (MJD seconds).
pub fn compute_earth_state(tai: f64) -> EarthState {
    let n = tt_days_from_j2000(tai);

    let mean_long = 280.460 + 0.9856474 * n;
    let g = (357.528 + 0.9856003 * n) * DEG_TO_RAD;
    let g_rate = 0.9856003 * DEG_TO_RAD;
    let (sin_g, cos_g) = libm::sincos(g);
    let (sin_2g, cos_2g) = libm::sincos(2.0 * g);

    // ecliptic longitude of date, brought back to the J2000 equinox
    let lambda = mean_long + 1.915 * sin_g + 0.020 * sin_2g
        - PRECESSION_IN_LONGITUDE * n / DAYS_PER_JULIAN_CENTURY;
    let lambda_rate = 0.9856474 + (1.915 * cos_g + 0.040 * cos_2g) * g_rate
        - PRECESSION_IN_LONGITUDE / DAYS_PER_JULIAN_CENTURY;

    let r = 1.00014 - 0.01671 * cos_g - 0.00014 * cos_2g;
    let r_rate = (0.01671 * sin_g + 0.00028 * sin_2g) * g_rate;

    let (sin_l, cos_l) = libm::sincos(lambda * DEG_TO_RAD);
    let (sin_e, cos_e) = libm::sincos(J2000_OBLIQUITY_DEG * DEG_TO_RAD);
    let dir = Vector3::new(cos_l, sin_l * cos_e, sin_l * sin_e);
    let dir_rate = Vector3::new(-sin_l, cos_l * cos_e, cos_l * sin_e) * (lambda_rate * DEG_TO_RAD);

    // the Earth sits opposite the geocentric Sun
    EarthState {
        heliocentric_position: -(dir * r),
        barycentric_velocity: -(dir * r_rate + dir_rate * r),
    }
}

/// Apply gravitational light deflection by the Sun.
///
/// `star_direction` is the unit vector from the observer to the star; the
/// Sun-to-star direction is taken to be the same, which holds for anything well
/// outside the solar system. Near the Sun the deflection is limited rather than
/// allowed to diverge.
pub fn apply_light_deflection(
    star_direction: Vector3,
    sun_to_observer: Vector3,
    sun_observer_distance_au: f64,
) -> Vector3 {
    let em2 = sun_observer_distance_au * sun_observer_distance_au;
    let dlim = 1e-6 / em2.max(1.0);

    let p = star_direction;
    let q = star_direction;
    let e = sun_to_observer;

    let qdqpe = q.dot(&(q + e)).max(dlim);
    let w = SCHWARZSCHILD_RADIUS_SUN_AU / sun_observer_distance_au / qdqpe;

    p + p.cross(&e.cross(&q)) * w
}

/// Inverse of [`apply_light_deflection`].
pub fn remove_light_deflection(
    deflected_direction: Vector3,
    sun_to_observer: Vector3,
    sun_observer_distance_au: f64,
) -> Vector3 {
    invert(deflected_direction, |before| {
        apply_light_deflection(before, sun_to_observer, sun_observer_distance_au)
    })
}

/// Relativistic annual aberration for an observer moving at `velocity_au_day`.
///
/// Returns a unit vector.
pub fn apply_aberration(
    direction: Vector3,
    velocity_au_day: Vector3,
    sun_earth_distance_au: f64,
) -> Vector3 {
    let v = velocity_au_day / SPEED_OF_LIGHT_AU_PER_DAY;
    let bm1 = libm::sqrt(1.0 - v.magnitude_squared());

    let pdv = direction.dot(&v);
    let w1 = 1.0 + pdv / (1.0 + bm1);
    let w2 = SCHWARZSCHILD_RADIUS_SUN_AU / sun_earth_distance_au;

    (direction * bm1 + v * w1 + (v - direction * pdv) * w2).normalize()
}

/// Inverse of [`apply_aberration`].
pub fn remove_aberration(
    apparent_direction: Vector3,
    velocity_au_day: Vector3,
    sun_earth_distance_au: f64,
) -> Vector3 {
    invert(apparent_direction, |before| {
        apply_aberration(before, velocity_au_day, sun_earth_distance_au)
    })
}

/// Fixed-point inversion of a small direction correction `forward`.
fn invert(observed: Vector3, forward: impl Fn(Vector3) -> Vector3) -> Vector3 {
    let observed = observed.normalize();
    let mut d = Vector3::zeros();
    for _ in 0..INVERSE_ITERATIONS {
        let before = (observed - d).normalize();
        d = forward(before) - before;
    }
    (observed - d).normalize()
}
