//! Observing site: location, atmosphere and the quantities derived from them.
//!
//! A [`Site`] is built from a [`SiteParams`] record and validated once; the
//! geocentric position, diurnal aberration magnitude and refraction coefficients are
//! computed at construction so conversions never redo them. Invalid values are
//! rejected, never clamped.
//!
//! ```
//! use coordconv_coords::Site;
//!
//! let site = Site::new(-105.82, 32.78, 2788.0)
//!     .and_then(|s| s.with_weather(740.0, 5.0, 0.3))
//!     .unwrap();
//! assert!(site.ref_co_a() > 0.0);
//! assert!(site.pos().x > 0.0 && site.pos().y == 0.0);
//! ```

use crate::{CoordError, CoordResult};
use coordconv_core::constants::{AU_M, EARTH_ROTATION_RATE, SPEED_OF_LIGHT_KM_S};
use coordconv_core::geodesy::geocentric_cylindrical;
use coordconv_core::math::atand;
use coordconv_core::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_PRESSURE: f64 = 1013.25;
pub const DEFAULT_TEMPERATURE: f64 = 10.0;
pub const DEFAULT_HUMIDITY: f64 = 0.5;
pub const DEFAULT_WAVELENGTH: f64 = 0.55;
pub const DEFAULT_MIN_REFRACTION_ALT: f64 = 5.0;

/// Wavelengths at or above this (µm) use the radio refraction model.
pub const RADIO_WAVELENGTH: f64 = 100.0;

/// The inputs a [`Site`] is built from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SiteParams {
    /// East longitude, degrees.
    pub mean_long: f64,
    /// Geodetic latitude, degrees.
    pub mean_lat: f64,
    /// Height above the WGS84 ellipsoid, meters.
    pub elev: f64,
    /// hPa
    pub pressure: f64,
    /// °C
    pub temperature: f64,
    /// Relative humidity, 0 to 1.
    pub humidity: f64,
    /// Effective wavelength, µm.
    pub wavelength: f64,
    /// UT1 - TAI, seconds.
    pub ut1_tai: f64,
    /// Lowest apparent altitude refraction is computed for, degrees.
    pub min_refraction_alt: f64,
}

impl Default for SiteParams {
    fn default() -> Self {
        Self {
            mean_long: 0.0,
            mean_lat: 0.0,
            elev: 0.0,
            pressure: DEFAULT_PRESSURE,
            temperature: DEFAULT_TEMPERATURE,
            humidity: DEFAULT_HUMIDITY,
            wavelength: DEFAULT_WAVELENGTH,
            ut1_tai: 0.0,
            min_refraction_alt: DEFAULT_MIN_REFRACTION_ALT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "SiteParams", into = "SiteParams")
)]
pub struct Site {
    params: SiteParams,
    pos: Vector3,
    diur_ab_mag: f64,
    ref_co_a: f64,
    ref_co_b: f64,
}

impl Site {
    /// A site with the standard atmosphere and no UT1 correction.
    pub fn new(mean_long: f64, mean_lat: f64, elev: f64) -> CoordResult<Self> {
        Self::from_params(SiteParams {
            mean_long,
            mean_lat,
            elev,
            ..SiteParams::default()
        })
    }

    pub fn from_params(params: SiteParams) -> CoordResult<Self> {
        validate(&params)?;

        let (u, v) = geocentric_cylindrical(params.mean_lat, params.elev);
        let (ref_co_a, ref_co_b) = refraction_coefficients(
            params.pressure,
            params.temperature,
            params.humidity,
            params.wavelength,
        );

        let floor = params.min_refraction_alt;
        let turnover = refraction_turnover_alt(ref_co_a, ref_co_b);
        if floor < turnover {
            return Err(CoordError::invalid_site(format!(
                "min_refraction_alt {} is below {:.3}, where the refraction model stops increasing",
                floor, turnover
            )));
        }

        Ok(Self {
            params,
            pos: Vector3::new(u / AU_M, 0.0, v / AU_M),
            diur_ab_mag: EARTH_ROTATION_RATE * (u / 1000.0) / SPEED_OF_LIGHT_KM_S,
            ref_co_a,
            ref_co_b,
        })
    }

    pub fn with_weather(self, pressure: f64, temperature: f64, humidity: f64) -> CoordResult<Self> {
        Self::from_params(SiteParams {
            pressure,
            temperature,
            humidity,
            ..self.params
        })
    }

    pub fn with_wavelength(self, wavelength: f64) -> CoordResult<Self> {
        Self::from_params(SiteParams {
            wavelength,
            ..self.params
        })
    }

    pub fn with_ut1_tai(self, ut1_tai: f64) -> CoordResult<Self> {
        Self::from_params(SiteParams {
            ut1_tai,
            ..self.params
        })
    }

    pub fn with_min_refraction_alt(self, min_refraction_alt: f64) -> CoordResult<Self> {
        Self::from_params(SiteParams {
            min_refraction_alt,
            ..self.params
        })
    }

    pub fn params(&self) -> &SiteParams {
        &self.params
    }

    pub fn mean_long(&self) -> f64 {
        self.params.mean_long
    }

    pub fn mean_lat(&self) -> f64 {
        self.params.mean_lat
    }

    pub fn elev(&self) -> f64 {
        self.params.elev
    }

    pub fn pressure(&self) -> f64 {
        self.params.pressure
    }

    pub fn temperature(&self) -> f64 {
        self.params.temperature
    }

    pub fn humidity(&self) -> f64 {
        self.params.humidity
    }

    pub fn wavelength(&self) -> f64 {
        self.params.wavelength
    }

    pub fn ut1_tai(&self) -> f64 {
        self.params.ut1_tai
    }

    pub fn min_refraction_alt(&self) -> f64 {
        self.params.min_refraction_alt
    }

    /// Geocentric position in AU, in the frame whose x axis lies in the site's
    /// meridian on the equator and whose z axis is the celestial pole.
    pub fn pos(&self) -> Vector3 {
        self.pos
    }

    /// Diurnal aberration, `ω u / c`, radians.
    pub fn diur_ab_mag(&self) -> f64 {
        self.diur_ab_mag
    }

    /// Refraction coefficient A (radians) of `A tan z + B tan³ z`.
    pub fn ref_co_a(&self) -> f64 {
        self.ref_co_a
    }

    /// Refraction coefficient B (radians).
    pub fn ref_co_b(&self) -> f64 {
        self.ref_co_b
    }
}

impl TryFrom<SiteParams> for Site {
    type Error = CoordError;

    fn try_from(params: SiteParams) -> CoordResult<Self> {
        Self::from_params(params)
    }
}

impl From<Site> for SiteParams {
    fn from(site: Site) -> Self {
        site.params
    }
}

fn check_range(name: &str, value: f64, min: f64, max: f64) -> CoordResult<()> {
    if !value.is_finite() {
        return Err(CoordError::invalid_site(format!("{} must be finite, got {}", name, value)));
    }
    if value < min || value > max {
        return Err(CoordError::invalid_site(format!(
            "{} = {} is outside [{}, {}]",
            name, value, min, max
        )));
    }
    Ok(())
}

fn validate(p: &SiteParams) -> CoordResult<()> {
    check_range("mean_long", p.mean_long, f64::MIN, f64::MAX)?;
    check_range("mean_lat", p.mean_lat, -90.0, 90.0)?;
    check_range("elev", p.elev, -12_000.0, 100_000.0)?;
    check_range("pressure", p.pressure, 0.0, 10_000.0)?;
    check_range("temperature", p.temperature, -150.0, 200.0)?;
    check_range("humidity", p.humidity, 0.0, 1.0)?;
    check_range("ut1_tai", p.ut1_tai, f64::MIN, f64::MAX)?;
    check_range("min_refraction_alt", p.min_refraction_alt, 0.0, 90.0)?;
    check_range("wavelength", p.wavelength, 0.0, f64::MAX)?;
    if p.wavelength == 0.0 {
        return Err(CoordError::invalid_site("wavelength must be positive"));
    }
    if p.min_refraction_alt == 0.0 {
        return Err(CoordError::invalid_site("min_refraction_alt must be above the horizon"));
    }
    Ok(())
}

/// Refraction coefficients `(A, B)` in radians for `A tan z + B tan³ z`.
///
/// Optical/IR: Hohenkerk & Sinclair refractivity with Green (1987) eq. 4.31. Radio
/// (at or above [`RADIO_WAVELENGTH`]): Rueger (2002). Saturation vapour pressure
/// from Gill (1982); partial pressure from Crane (1976). Inputs must already be
/// validated.
pub fn refraction_coefficients(
    pressure: f64,
    temperature: f64,
    humidity: f64,
    wavelength: f64,
) -> (f64, f64) {
    if pressure <= 0.0 {
        return (0.0, 0.0);
    }

    let temp_kelvin = temperature + 273.15;

    let ps = libm::pow(
        10.0,
        (0.7859 + 0.03477 * temperature) / (1.0 + 0.00412 * temperature),
    ) * (1.0 + pressure * (4.5e-6 + 6e-10 * temperature * temperature));
    let pw = humidity * ps / (1.0 - (1.0 - humidity) * ps / pressure);

    let (gamma, beta) = if wavelength < RADIO_WAVELENGTH {
        let wl_sq = wavelength * wavelength;
        let gamma = ((77.53484e-6 + (4.39108e-7 + 3.666e-9 / wl_sq) / wl_sq) * pressure
            - 11.2684e-6 * pw)
            / temp_kelvin;
        (gamma, 4.4474e-6 * temp_kelvin)
    } else {
        let gamma =
            (77.6890e-6 * pressure - (6.3938e-6 - 0.375463 / temp_kelvin) * pw) / temp_kelvin;
        let beta = 4.4474e-6 * temp_kelvin;
        (gamma, beta - 0.0074 * pw * beta)
    };

    let refa = gamma * (1.0 - beta);
    let refb = -gamma * (beta - gamma / 2.0);
    (refa, refb)
}

/// Altitude (degrees) below which `A tan z + B tan³ z` decreases with zenith
/// distance; 0 when it increases all the way to the horizon.
pub fn refraction_turnover_alt(ref_co_a: f64, ref_co_b: f64) -> f64 {
    if ref_co_b >= 0.0 || ref_co_a <= 0.0 {
        return 0.0;
    }
    // d/dz (A tan z + B tan³ z) = sec² z (A + 3B tan² z)
    90.0 - atand(libm::sqrt(ref_co_a / (-3.0 * ref_co_b)))
}
