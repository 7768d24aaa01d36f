use approx::assert_abs_diff_eq;
use coordconv_coords::{ConversionEngine, Coord, CoordError, CoordSys, PvtCoord, Site};
use coordconv_core::test_helpers::{assert_angle_near, assert_direction_near};
use coordconv_core::time::J2000_TAI;

const DAY: f64 = 86400.0;

fn hms(h: f64, m: f64, s: f64) -> f64 {
    (h + m / 60.0 + s / 3600.0) * 15.0
}

fn dms(d: f64, m: f64, s: f64) -> f64 {
    d + m / 60.0 + s / 3600.0
}

fn apache_point() -> Site {
    Site::new(-105.820417, 32.780361, 2788.0).unwrap()
}

#[test]
fn galactic_round_trip_through_icrs() {
    let engine = ConversionEngine::new();
    let gal = CoordSys::Galactic;
    let c = Coord::new(121.0, -48.5).unwrap();

    let icrs = engine.convert(&c, &gal, &CoordSys::Icrs, J2000_TAI).unwrap();
    let back = engine.convert(&icrs, &CoordSys::Icrs, &gal, J2000_TAI).unwrap();
    assert_direction_near(back.pos(), c.pos(), 1e-9, "galactic");
}

#[test]
fn pole_keeps_zero_equat_through_round_trip() {
    let engine = ConversionEngine::new();
    let pole = Coord::new(0.0, 90.0).unwrap();
    let icrs = engine.convert(&pole, &CoordSys::Galactic, &CoordSys::Icrs, J2000_TAI).unwrap();
    let back = engine.convert(&icrs, &CoordSys::Icrs, &CoordSys::Galactic, J2000_TAI).unwrap();

    assert!(back.is_at_pole());
    assert_eq!(back.equat_ang(), 0.0);
    assert_eq!(back.polar_ang(), 90.0);
}

#[test]
fn fk4_b1950_to_fk5_j2000() {
    // 3C 273: B1950 optical position, J2000 VLBI position
    let fk4 = Coord::new(hms(12.0, 26.0, 33.246), dms(2.0, 19.0, 43.30)).unwrap();
    let fk5 = ConversionEngine::new()
        .convert(
            &fk4,
            &CoordSys::Fk4 { equinox: 1950.0 },
            &CoordSys::Fk5 { equinox: 2000.0 },
            J2000_TAI,
        )
        .unwrap();
    let expected = Coord::new(hms(12.0, 29.0, 6.6997), dms(2.0, 3.0, 8.598)).unwrap();
    let sep = fk5.angular_separation(&expected) * 3600.0;
    assert!(sep < 0.5, "separation {}″", sep);
}

#[test]
fn app_geo_round_trip_with_parallax() {
    let engine = ConversionEngine::new();
    let tai = J2000_TAI + 7300.25 * DAY;
    // Alpha Centauri A
    let star = Coord::from_catalog(219.9021, -60.8340, 0.7474, -3.6084, 0.4817, -21.4, J2000_TAI)
        .unwrap();

    let geo = engine.convert(&star, &CoordSys::Icrs, &CoordSys::AppGeo, tai).unwrap();
    assert_eq!(geo.epoch(), tai);
    assert_eq!(geo.pm(), coordconv_coords::Vector3::zeros());

    let icrs = engine.convert(&geo, &CoordSys::AppGeo, &CoordSys::Icrs, tai).unwrap();
    let moved = star.with_proper_motion_applied(tai);
    assert_direction_near(icrs.pos(), moved.pos(), 1e-3, "app geo round trip");
    assert_abs_diff_eq!(
        icrs.distance().unwrap(),
        moved.distance().unwrap(),
        epsilon = 1e-6 * moved.distance().unwrap()
    );
}

#[test]
fn observed_is_raised_by_refraction() {
    let engine = ConversionEngine::with_site(apache_point());
    let tai = J2000_TAI + 9000.0 * DAY;
    let topo = Coord::new(200.0, 40.0).unwrap();

    let obs = engine.convert(&topo, &CoordSys::AppTopo, &CoordSys::Obs, tai).unwrap();
    assert_angle_near(obs.equat_ang(), 200.0, 1e-6, "azimuth");
    let lift = (obs.polar_ang() - 40.0) * 3600.0;
    assert!(lift > 68.0 && lift < 71.0, "lift {}″", lift);

    let back = engine.convert(&obs, &CoordSys::Obs, &CoordSys::AppTopo, tai).unwrap();
    assert_direction_near(back.pos(), topo.pos(), 1e-4, "obs round trip");
}

#[test]
fn observed_rejects_low_objects() {
    let engine = ConversionEngine::with_site(apache_point());
    let topo = Coord::new(90.0, 2.0).unwrap();
    let err = engine
        .convert(&topo, &CoordSys::AppTopo, &CoordSys::Obs, J2000_TAI)
        .unwrap_err();
    assert!(err.is_out_of_range(), "{}", err);
}

#[test]
fn missing_site_is_reported() {
    let c = Coord::new(10.0, 10.0).unwrap();
    let err = CoordSys::Obs
        .convert_from(&CoordSys::Icrs, &c, J2000_TAI, None)
        .unwrap_err();
    assert_eq!(err, CoordError::missing_site("Obs"));
}

#[test]
fn pvt_extrapolation_matches_direct_conversion() {
    let engine = ConversionEngine::new();
    let t = J2000_TAI + 5000.0 * DAY;
    let star = PvtCoord::fixed(Coord::new(279.2347, 38.7837).unwrap(), t);

    let geo = engine.convert_pvt(&star, &CoordSys::Icrs, &CoordSys::AppGeo).unwrap();
    let later = t + 600.0;
    let direct = engine
        .convert(&star.coord_at(later), &CoordSys::Icrs, &CoordSys::AppGeo, later)
        .unwrap();
    assert_direction_near(geo.coord_at(later).pos(), direct.pos(), 1e-3, "extrapolated");
}

#[test]
fn passthrough_frames_keep_the_coord() {
    let engine = ConversionEngine::new();
    let other = CoordSys::Other {
        name: "Instrument".to_string(),
    };
    let c = Coord::new(33.0, 44.0).unwrap();
    let same = engine.convert(&c, &other, &other, J2000_TAI + 1e8).unwrap();
    assert_eq!(same, c);
}
