//! Celestial coordinates and the conversions between their frames.
//!
//! A [`Coord`] is a direction with optional distance and space motion. A
//! [`CoordSys`] names the frame it is expressed in: the mean catalog frames
//! (ICRS, FK5, FK4, galactic), the apparent geocentric and topocentric frames,
//! and observed (refracted) azimuth/altitude. The [`ConversionEngine`] converts
//! between any two of them through ICRS, given a date and, for the topocentric
//! frames, an observing [`Site`].
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`coord`] | [`Coord`]: position, parallax, proper motion, radial velocity |
//! | [`pvt`] | [`Pvt`]: a scalar with its rate, and polar/cartesian helpers |
//! | [`pvt_coord`] | [`PvtCoord`]: a coord with its rate of change |
//! | [`frames`] | [`CoordSys`] and the per-frame transforms |
//! | [`transforms`] | the [`CoordinateFrame`] trait |
//! | [`conversion`] | [`ConversionEngine`] |
//! | [`site`] | [`Site`]: observer location and atmosphere |
//! | [`refraction`] | refraction and its inverse |
//! | [`earth`] | low-precision Earth ephemeris, aberration, light deflection |
//! | [`errors`] | [`CoordError`] and [`CoordResult`] |
//!
//! # Conventions
//!
//! - Angles are degrees; dates are TAI in MJD seconds.
//! - Apparent and observed coords carry no space motion and take the date of
//!   observation as their epoch.
//! - Conversions never clamp: invalid input and altitudes below the site's
//!   refraction floor are errors.
//!
//! ```
//! use coordconv_coords::{ConversionEngine, Coord, CoordSys};
//! use coordconv_core::time::J2000_TAI;
//!
//! let engine = ConversionEngine::new();
//! let centre = engine.convert(
//!     &Coord::new(0.0, 0.0)?,
//!     &CoordSys::Galactic,
//!     &CoordSys::Icrs,
//!     J2000_TAI,
//! )?;
//! assert!((centre.equat_ang() - 266.405).abs() < 1e-3);
//! # Ok::<(), coordconv_coords::CoordError>(())
//! ```

pub(crate) mod constants;
pub mod conversion;
pub mod coord;
pub mod earth;
pub mod errors;
pub mod frames;
pub mod pvt;
pub mod pvt_coord;
pub mod refraction;
pub mod site;
pub mod transforms;

pub use conversion::{ConversionEngine, OrientedCoord};
pub use coord::Coord;
pub use errors::{CoordError, CoordResult};
pub use frames::{CoordSys, DateType};
pub use pvt::Pvt;
pub use pvt_coord::PvtCoord;
pub use site::{Site, SiteParams};
pub use transforms::CoordinateFrame;

pub use coordconv_core::Vector3;
