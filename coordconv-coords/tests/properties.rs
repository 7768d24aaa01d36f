use coordconv_coords::refraction::{
    observed_from_topocentric, refraction, topocentric_from_observed,
};
use coordconv_coords::{Coord, CoordSys, CoordinateFrame, Site};
use coordconv_core::time::J2000_TAI;
use proptest::prelude::*;

const CENTURY: f64 = 36525.0 * 86400.0;

fn mean_frame() -> impl Strategy<Value = CoordSys> {
    prop_oneof![
        Just(CoordSys::Icrs),
        (1800.0..2200.0f64).prop_map(|equinox| CoordSys::Fk5 { equinox }),
        (1800.0..2200.0f64).prop_map(|equinox| CoordSys::Fk4 { equinox }),
        Just(CoordSys::Galactic),
    ]
}

/// Catalog entries, at infinity or as near as 1 pc, with space motion.
fn catalog_coord() -> impl Strategy<Value = Coord> {
    (
        0.0..360.0f64,
        -89.0..89.0f64,
        prop_oneof![Just(0.0), 0.001..1.0f64],
        -5.0..5.0f64,
        -5.0..5.0f64,
        -300.0..300.0f64,
    )
        .prop_map(|(equat, polar, parallax, equat_pm, polar_pm, radial_vel)| {
            Coord::from_catalog(equat, polar, parallax, equat_pm, polar_pm, radial_vel, J2000_TAI)
                .unwrap()
        })
}

fn site() -> Site {
    Site::new(-70.7, -30.2, 2700.0).unwrap()
}

proptest! {
    #[test]
    fn prop_mean_round_trip(
        sys in mean_frame(),
        c in catalog_coord(),
        centuries in -2.0..2.0f64,
    ) {
        let tai = J2000_TAI + centuries * CENTURY;
        let icrs = sys.to_icrs(&c, tai, None).unwrap();
        let back = sys.from_icrs(&icrs, tai, None).unwrap();

        let sep = back.angular_separation(&c) * 3600.0;
        prop_assert!(sep < 1e-6, "{} drifted {}″", sys, sep);

        match (back.distance(), c.distance()) {
            (Some(b), Some(d)) => prop_assert!((b - d).abs() < 1e-12 * d, "{} vs {} AU", b, d),
            (b, d) => prop_assert_eq!(b, d),
        }

        let (be, bp) = back.proper_motion();
        let (ce, cp) = c.proper_motion();
        prop_assert!((be - ce).abs() < 1e-9, "equat pm {} vs {}", be, ce);
        prop_assert!((bp - cp).abs() < 1e-9, "polar pm {} vs {}", bp, cp);
        prop_assert!((back.radial_velocity() - c.radial_velocity()).abs() < 1e-6);
    }

    #[test]
    fn prop_no_distance_means_no_motion(
        equat in 0.0..360.0f64,
        polar in -90.0..=90.0f64,
        equat_pm in -10.0..10.0f64,
        polar_pm in -10.0..10.0f64,
        radial_vel in -500.0..500.0f64,
        centuries in -50.0..50.0f64,
    ) {
        let c = Coord::from_catalog(equat, polar, 0.0, equat_pm, polar_pm, radial_vel, J2000_TAI)
            .unwrap();
        let moved = c.with_proper_motion_applied(J2000_TAI + centuries * CENTURY);
        prop_assert_eq!(moved.pos(), c.pos());
    }

    #[test]
    fn prop_refraction_monotonic(low in 5.0..90.0f64, step in 1e-6..85.0f64) {
        let site = site();
        let high = (low + step).min(90.0);
        let r_low = refraction(low, &site).unwrap();
        let r_high = refraction(high, &site).unwrap();
        prop_assert!(r_low >= r_high, "R({}) = {} < R({}) = {}", low, r_low, high, r_high);
        prop_assert!(r_high >= 0.0);
    }

    #[test]
    fn prop_refraction_inverts(topo_alt in 5.0..90.0f64) {
        let site = site();
        let obs = observed_from_topocentric(topo_alt, &site).unwrap();
        prop_assert!(obs >= topo_alt - 1e-12);
        let back = topocentric_from_observed(obs, &site).unwrap();
        prop_assert!((back - topo_alt).abs() < 1e-9, "{} -> {} -> {}", topo_alt, obs, back);
    }
}
