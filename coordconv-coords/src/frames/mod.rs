//! The coordinate systems a [`Coord`] can be expressed in.
//!
//! [`CoordSys`] is a closed set of frame descriptors:
//!
//! | Family | Variants | Date argument |
//! |--------|----------|---------------|
//! | mean (catalog) | `Icrs`, `Fk5 { equinox }`, `Fk4 { equinox }`, `Galactic` | epoch to apply space motion to |
//! | apparent | `AppGeo`, `AppTopo`, `Obs` | date of observation |
//! | passthrough | `Other { name }`, `None` | ignored |
//!
//! The observation date is never stored in a `CoordSys`; it is an argument of each
//! conversion. `AppTopo` and `Obs` also need a [`Site`].
//!
//! ```
//! use coordconv_coords::{CoordSys, DateType};
//!
//! let fk4 = CoordSys::from_name("fk4", None).unwrap();
//! assert_eq!(fk4, CoordSys::Fk4 { equinox: 1950.0 });
//! assert!(fk4.is_mean());
//! assert_eq!(fk4.date_type(), DateType::Besselian);
//! assert!(CoordSys::Obs.requires_site());
//! ```

pub mod apparent;
pub mod mean;

use crate::conversion::convert_via_icrs;
use crate::transforms::CoordinateFrame;
use crate::{Coord, CoordError, CoordResult, Site};
use apparent::{
    app_geo_to_app_topo, app_geo_to_icrs, app_topo_to_app_geo, app_topo_to_obs, icrs_to_app_geo,
    obs_to_app_topo, ApparentContext,
};
use std::fmt;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a frame's equinox or date is reckoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DateType {
    /// Julian years (J2000.0).
    Julian,
    /// Besselian years (B1950.0).
    Besselian,
    /// TAI, MJD seconds.
    Tai,
    None,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoordSys {
    Icrs,
    /// Mean equator and equinox of a Julian epoch.
    Fk5 { equinox: f64 },
    /// Mean equator and equinox of a Besselian epoch, E-terms included.
    Fk4 { equinox: f64 },
    Galactic,
    /// Apparent geocentric: true equator and equinox of date.
    AppGeo,
    /// Apparent topocentric: azimuth (N=0, E=90) and altitude, unrefracted.
    AppTopo,
    /// Observed: apparent topocentric plus refraction.
    Obs,
    /// A frame this library does not model; coords pass through unchanged.
    Other { name: String },
    None,
}

impl CoordSys {
    pub fn fk5(equinox: f64) -> CoordResult<Self> {
        check_equinox(equinox)?;
        Ok(Self::Fk5 { equinox })
    }

    pub fn fk4(equinox: f64) -> CoordResult<Self> {
        check_equinox(equinox)?;
        Ok(Self::Fk4 { equinox })
    }

    /// Looks a frame up by name, case-insensitively. `equinox` applies to FK5
    /// (default J2000) and FK4 (default B1950) and is ignored otherwise.
    pub fn from_name(name: &str, equinox: Option<f64>) -> CoordResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "icrs" => Ok(Self::Icrs),
            "fk5" => Self::fk5(equinox.unwrap_or(2000.0)),
            "fk4" => Self::fk4(equinox.unwrap_or(1950.0)),
            "gal" | "galactic" => Ok(Self::Galactic),
            "geo" | "appgeo" => Ok(Self::AppGeo),
            "topo" | "apptopo" => Ok(Self::AppTopo),
            "obs" | "observed" => Ok(Self::Obs),
            "none" => Ok(Self::None),
            _ => Err(CoordError::unsupported_operation(format!(
                "unknown coordinate system {:?}",
                name
            ))),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Icrs => "ICRS",
            Self::Fk5 { .. } => "FK5",
            Self::Fk4 { .. } => "FK4",
            Self::Galactic => "Galactic",
            Self::AppGeo => "AppGeo",
            Self::AppTopo => "AppTopo",
            Self::Obs => "Obs",
            Self::Other { name } => name.as_str(),
            Self::None => "None",
        }
    }

    /// Catalog frames, whose coords carry space motion that the conversion
    /// applies up to the date.
    pub fn is_mean(&self) -> bool {
        matches!(
            self,
            Self::Icrs | Self::Fk5 { .. } | Self::Fk4 { .. } | Self::Galactic
        )
    }

    pub fn is_apparent(&self) -> bool {
        matches!(self, Self::AppGeo | Self::AppTopo | Self::Obs)
    }

    pub fn date_type(&self) -> DateType {
        match self {
            Self::Icrs | Self::Fk5 { .. } | Self::Galactic => DateType::Julian,
            Self::Fk4 { .. } => DateType::Besselian,
            Self::AppGeo | Self::AppTopo | Self::Obs => DateType::Tai,
            Self::Other { .. } | Self::None => DateType::None,
        }
    }

    pub fn equinox(&self) -> Option<f64> {
        match self {
            Self::Fk5 { equinox } | Self::Fk4 { equinox } => Some(*equinox),
            _ => None,
        }
    }

    pub fn requires_site(&self) -> bool {
        matches!(self, Self::AppTopo | Self::Obs)
    }

    /// Converts `coord` from `from_sys` into this system at `tai`.
    pub fn convert_from(
        &self,
        from_sys: &CoordSys,
        coord: &Coord,
        tai: f64,
        site: Option<&Site>,
    ) -> CoordResult<Coord> {
        convert_via_icrs(coord, from_sys, self, tai, site)
    }

    fn require_site<'a>(&self, site: Option<&'a Site>) -> CoordResult<&'a Site> {
        site.ok_or_else(|| {
            debug!(frame = self.name(), "conversion needs an observing site");
            CoordError::missing_site(self.name())
        })
    }
}

fn check_equinox(equinox: f64) -> CoordResult<()> {
    if equinox.is_finite() {
        Ok(())
    } else {
        Err(CoordError::invalid_coordinate(format!(
            "equinox must be finite, got {}",
            equinox
        )))
    }
}

impl CoordinateFrame for CoordSys {
    fn to_icrs(&self, coord: &Coord, tai: f64, site: Option<&Site>) -> CoordResult<Coord> {
        match self {
            Self::Icrs | Self::Other { .. } | Self::None => Ok(*coord),
            Self::Fk5 { equinox } => Ok(mean::fk5_to_icrs(coord, *equinox)),
            Self::Fk4 { equinox } => Ok(mean::fk4_to_icrs(coord, *equinox)),
            Self::Galactic => Ok(mean::galactic_to_icrs(coord)),
            Self::AppGeo => Ok(app_geo_to_icrs(coord, &ApparentContext::new(tai))),
            Self::AppTopo => {
                let site = self.require_site(site)?;
                let ctx = ApparentContext::new(tai);
                let geo = app_topo_to_app_geo(coord, &ctx, site);
                Ok(app_geo_to_icrs(&geo, &ctx))
            }
            Self::Obs => {
                let site = self.require_site(site)?;
                let ctx = ApparentContext::new(tai);
                let topo = obs_to_app_topo(coord, site, tai)?;
                let geo = app_topo_to_app_geo(&topo, &ctx, site);
                Ok(app_geo_to_icrs(&geo, &ctx))
            }
        }
    }

    fn from_icrs(&self, icrs: &Coord, tai: f64, site: Option<&Site>) -> CoordResult<Coord> {
        match self {
            Self::Icrs | Self::Other { .. } | Self::None => Ok(*icrs),
            Self::Fk5 { equinox } => Ok(mean::icrs_to_fk5(icrs, *equinox)),
            Self::Fk4 { equinox } => Ok(mean::icrs_to_fk4(icrs, *equinox)),
            Self::Galactic => Ok(mean::icrs_to_galactic(icrs)),
            Self::AppGeo => Ok(icrs_to_app_geo(icrs, &ApparentContext::new(tai))),
            Self::AppTopo => {
                let site = self.require_site(site)?;
                let ctx = ApparentContext::new(tai);
                let geo = icrs_to_app_geo(icrs, &ctx);
                Ok(app_geo_to_app_topo(&geo, &ctx, site))
            }
            Self::Obs => {
                let site = self.require_site(site)?;
                let ctx = ApparentContext::new(tai);
                let geo = icrs_to_app_geo(icrs, &ctx);
                let topo = app_geo_to_app_topo(&geo, &ctx, site);
                app_topo_to_obs(&topo, site, tai)
            }
        }
    }
}

impl fmt::Display for CoordSys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fk5 { equinox } => write!(f, "FK5 J{}", equinox),
            Self::Fk4 { equinox } => write!(f, "FK4 B{}", equinox),
            other => write!(f, "{}", other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_attributes() {
        let all = [
            CoordSys::Icrs,
            CoordSys::Fk5 { equinox: 2000.0 },
            CoordSys::Fk4 { equinox: 1950.0 },
            CoordSys::Galactic,
            CoordSys::AppGeo,
            CoordSys::AppTopo,
            CoordSys::Obs,
            CoordSys::Other {
                name: "Ecliptic".to_string(),
            },
            CoordSys::None,
        ];
        let mean: Vec<bool> = all.iter().map(CoordSys::is_mean).collect();
        assert_eq!(mean, [true, true, true, true, false, false, false, false, false]);
        let site: Vec<bool> = all.iter().map(CoordSys::requires_site).collect();
        assert_eq!(site, [false, false, false, false, false, true, true, false, false]);

        assert_eq!(all[1].equinox(), Some(2000.0));
        assert_eq!(all[0].equinox(), None);
        assert_eq!(all[4].date_type(), DateType::Tai);
        assert_eq!(all[7].date_type(), DateType::None);
        assert_eq!(all[7].name(), "Ecliptic");
        assert!(all[5].is_apparent() && !all[0].is_apparent());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(CoordSys::from_name("ICRS", None).unwrap(), CoordSys::Icrs);
        assert_eq!(
            CoordSys::from_name("FK5", Some(1975.0)).unwrap(),
            CoordSys::Fk5 { equinox: 1975.0 }
        );
        assert_eq!(CoordSys::from_name("Observed", None).unwrap(), CoordSys::Obs);
        assert!(CoordSys::from_name("heliographic", None).is_err());
        assert!(CoordSys::fk5(f64::NAN).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(CoordSys::Fk5 { equinox: 2000.0 }.to_string(), "FK5 J2000");
        assert_eq!(CoordSys::Fk4 { equinox: 1950.0 }.to_string(), "FK4 B1950");
        assert_eq!(CoordSys::AppTopo.to_string(), "AppTopo");
    }

    #[test]
    fn test_missing_site() {
        let c = Coord::new(10.0, 10.0).unwrap();
        for sys in [CoordSys::AppTopo, CoordSys::Obs] {
            let err = sys.from_icrs(&c, 0.0, None).unwrap_err();
            assert_eq!(err, CoordError::missing_site(sys.name()));
            assert!(sys.to_icrs(&c, 0.0, None).is_err());
        }
    }

    #[test]
    fn test_passthrough_never_rotates() {
        let c = Coord::from_catalog(10.0, 10.0, 0.1, 0.01, 0.01, 5.0, 0.0).unwrap();
        let other = CoordSys::Other {
            name: "Mount".to_string(),
        };
        assert_eq!(other.to_icrs(&c, 1e9, None).unwrap(), c);
        assert_eq!(CoordSys::None.from_icrs(&c, 1e9, None).unwrap(), c);
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CoordSys>();
        let shared = Arc::new(CoordSys::Galactic);
        let handle = {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || shared.is_mean())
        };
        assert!(handle.join().unwrap());
    }
}
