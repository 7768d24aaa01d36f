use crate::{Coord, CoordResult, Site};

/// A frame that can be reached from ICRS.
///
/// Every conversion goes through ICRS: A to B is
/// `b.from_icrs(&a.to_icrs(coord, tai, site)?, tai, site)`. `tai` is the date of
/// observation (MJD seconds); frames that need an observer fail without `site`.
pub trait CoordinateFrame {
    fn to_icrs(&self, coord: &Coord, tai: f64, site: Option<&Site>) -> CoordResult<Coord>;

    fn from_icrs(&self, icrs: &Coord, tai: f64, site: Option<&Site>) -> CoordResult<Coord>;
}
