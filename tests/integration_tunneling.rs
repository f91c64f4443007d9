//! Integration tests: grids, potential profiles, and barrier transmission.

use approx::assert_abs_diff_eq;
use ndarray as nd;
use qwave::{ grid::Grid, measure, packet, potential, tunnel };

#[test]
fn grid_matches_requested_bounds() {
    let g = Grid::new(-5.0, 5.0, 256).expect("grid");
    assert_eq!(g.len(), 256);
    assert!(!g.is_empty());
    assert_abs_diff_eq!(g.x[0], -5.0);
    assert_abs_diff_eq!(g.x[255], 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(g.dx, 10.0 / 255.0, epsilon = 1e-15);
    assert_abs_diff_eq!(g.x[1] - g.x[0], g.dx, epsilon = 1e-12);
}

#[test]
fn grid_rejects_degenerate_requests() {
    assert!(Grid::new(-5.0, 5.0, 1).is_err(), "fewer than 2 points");
    assert!(Grid::new(5.0, -5.0, 64).is_err(), "inverted bounds");
    assert!(Grid::new(-5.0, -5.0, 64).is_err(), "coincident bounds");
    assert!(Grid::new(f64::NAN, 5.0, 64).is_err());
}

#[test]
fn potential_profiles_have_documented_values() {
    // x = [-3, -2, -1, 0, 1, 2, 3]
    let x: nd::Array1<f64> = nd::Array1::linspace(-3.0, 3.0, 7);

    let v = potential::infinite_well(&x, 2.0);
    assert_eq!(v[3], 0.0);
    assert_eq!(v[2], 0.0, "x = -1 is on the well edge");
    assert!(v[0] >= potential::WALL);

    let v = potential::finite_well(&x, 2.0, 10.0);
    assert_eq!(v[3], 0.0);
    assert_eq!(v[6], 10.0);

    let v = potential::barrier(&x, 30.0, 2.0, 0.0);
    assert_eq!(v[3], 30.0);
    assert_eq!(v[2], 30.0, "x = -1 is on the barrier edge");
    assert_eq!(v[0], 0.0);

    let v = potential::harmonic(&x, 1.0, 2.0);
    assert_abs_diff_eq!(v[0], 18.0, epsilon = 1e-12);
    assert_eq!(v[3], 0.0);
    assert_abs_diff_eq!(v[0], v[6], epsilon = 1e-12);

    let v = potential::piecewise(&x, &[(-3.0, -1.0, 5.0), (1.0, 3.0, 7.0)]);
    assert_eq!(v[0], 5.0);
    assert_eq!(v[3], 0.0, "outside all regions");
    assert_eq!(v[6], 7.0);
}

#[test]
fn piecewise_later_regions_overwrite() {
    let x: nd::Array1<f64> = nd::array![0.0];
    let v = potential::piecewise(&x, &[(-1.0, 1.0, 5.0), (-0.5, 0.5, 7.0)]);
    assert_eq!(v[0], 7.0);
}

#[test]
fn wkb_transmission_matches_rectangular_barrier() {
    let v: nd::Array1<f64> = nd::array![0.0, 0.0, 10.0, 10.0, 0.0];
    let t = tunnel::transmission(1.0, &v, 5.0).expect("transmission");
    // two forbidden samples, each contributing sqrt(2 * 5)
    let kappa = 2.0 * 10.0_f64.sqrt();
    assert_abs_diff_eq!(t, (-2.0 * kappa).exp(), epsilon = 1e-18);
    assert!(t < 1e-5, "strongly suppressed tunneling, got {t}");
    assert!(t > 0.0);
}

#[test]
fn wkb_transmission_is_unity_without_barrier() {
    let v: nd::Array1<f64> = nd::Array1::zeros(16);
    let t = tunnel::transmission(0.05, &v, 5.0).expect("transmission");
    assert_eq!(t, 1.0);
}

#[test]
fn wkb_transmission_stays_in_unit_interval() {
    let g = Grid::new(-15.0, 15.0, 1000).expect("grid");
    let v = potential::barrier(&g.x, 30.0, 2.0, 0.0);
    for e in [0.1, 1.0, 10.0, 25.0, 40.0] {
        let t = tunnel::transmission(g.dx, &v, e).expect("transmission");
        assert!((0.0..=1.0).contains(&t), "T({e}) = {t} outside [0, 1]");
        let r = tunnel::reflection(g.dx, &v, e).expect("reflection");
        assert_abs_diff_eq!(t + r, 1.0, epsilon = 1e-15);
    }
}

#[test]
fn transmission_enforces_minimum_size() {
    let v: nd::Array1<f64> = nd::array![10.0];
    assert!(tunnel::transmission(1.0, &v, 5.0).is_err(), "N = 1 < 2");
    assert!(tunnel::transmission(1.0, &v, f64::NAN).is_err());
}

#[test]
fn forbidden_region_spans_barrier_samples() {
    let x: nd::Array1<f64> = nd::array![0.0, 1.0, 2.0, 3.0, 4.0];
    let v: nd::Array1<f64> = nd::array![0.0, 0.0, 10.0, 10.0, 0.0];
    let region = tunnel::forbidden_region(&x, &v, 5.0).expect("region");
    assert_eq!(region, Some((2.0, 3.0)));
    let none = tunnel::forbidden_region(&x, &v, 50.0).expect("region");
    assert_eq!(none, None, "no sample is forbidden above the barrier");
}

#[test]
fn transmission_split_separates_packet_mass() {
    let g = Grid::new(-10.0, 10.0, 400).expect("grid");
    let q0 = packet::gaussian_normalized(g.dx, &g.x, -4.0, 1.0, 3.0)
        .expect("incident packet");
    let prob0 = measure::probability_density(&q0).expect("density");

    // packet fully to the left of the split: nothing transmitted
    let t = tunnel::transmission_split(g.dx, &prob0, &prob0, 399)
        .expect("split");
    assert!(t < 1e-6, "left-localized packet transmits nothing, got {t}");

    // same packet measured from the left edge: all mass transmitted
    let t = tunnel::transmission_split(g.dx, &prob0, &prob0, 0)
        .expect("split");
    assert_abs_diff_eq!(t, 1.0, epsilon = 1e-9);

    // a split beyond the end counts nothing
    let t = tunnel::transmission_split(g.dx, &prob0, &prob0, 1000)
        .expect("split");
    assert_eq!(t, 0.0);
}
