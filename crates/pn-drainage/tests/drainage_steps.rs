//! End-to-end invasion behavior on small fixed networks, plus property
//! tests for the monotone/idempotent step semantics.

use pn_core::{Pressure, SiteId, m3, pa};
use pn_drainage::{Drainage, DrainageSettings, Volumes, pc_curve, pc_curve_parallel};
use pn_graph::Topology;
use proptest::prelude::*;

fn line(n: usize) -> Topology {
    let conns: Vec<(u32, u32)> = (0..n as u32 - 1).map(|i| (i, i + 1)).collect();
    Topology::from_conns(n, &conns).unwrap()
}

fn site(i: u32) -> SiteId {
    SiteId::from_index(i)
}

fn bond_drainage(topo: Topology, thresholds_pa: &[f64]) -> Drainage {
    let thresholds: Vec<Pressure> = thresholds_pa.iter().map(|&t| pa(t)).collect();
    Drainage::new(topo, DrainageSettings::default(), thresholds).unwrap()
}

#[test]
fn invasion_is_monotone_across_increasing_pressures() {
    let mut drn = bond_drainage(line(5), &[1.0, 3.0, 2.0, 4.0]);
    drn.set_inlets(&[site(0)]).unwrap();

    drn.run(pa(2.5)).unwrap();
    let first_sites = drn.state().invaded_sites.clone();
    let first_bonds = drn.state().invaded_bonds.clone();

    drn.run(pa(4.5)).unwrap();
    for (i, &was) in first_sites.iter().enumerate() {
        assert!(!was || drn.state().invaded_sites[i]);
    }
    for (i, &was) in first_bonds.iter().enumerate() {
        assert!(!was || drn.state().invaded_bonds[i]);
    }
    // And the higher pressure actually invades more here.
    assert!(drn.state().invaded_bond_count() > first_bonds.iter().filter(|&&v| v).count());
}

#[test]
fn run_is_idempotent() {
    let mut drn = bond_drainage(line(4), &[1.0, 2.0, 3.0]);
    drn.set_inlets(&[site(0)]).unwrap();
    drn.set_outlets(&[site(3)]).unwrap();

    drn.run(pa(2.5)).unwrap();
    let after_once = drn.state().clone();
    drn.run(pa(2.5)).unwrap();
    assert_eq!(drn.state(), &after_once);
}

#[test]
fn open_bond_disconnected_from_inlet_stays_dry() {
    // 3 sites in a line; inlet at the far end; only the far bond's
    // threshold is unmet. The open bond cannot be reached.
    let mut drn = bond_drainage(line(3), &[1.0, 10.0]);
    drn.set_inlets(&[site(2)]).unwrap();
    drn.run(pa(5.0)).unwrap();

    assert_eq!(drn.state().invaded_sites, vec![false; 3]);
    assert_eq!(drn.state().invaded_bonds, vec![false; 2]);
}

#[test]
fn inlet_connected_cluster_invades_fully() {
    let mut drn = bond_drainage(line(4), &[1.0, 1.0, 1.0]);
    drn.set_inlets(&[site(0)]).unwrap();
    drn.run(pa(2.0)).unwrap();

    assert_eq!(drn.state().invaded_sites, vec![true; 4]);
    assert_eq!(drn.state().invaded_bonds, vec![true; 3]);
}

#[test]
fn walled_in_pocket_is_trapped() {
    // Bond (0,1) invades at p=5; bond (1,2) stays shut. The defender at
    // site 0 has no un-invaded path to the outlet at site 2, so it and
    // its boundary bond are trapped; sites 1 and 2 drain freely.
    let mut drn = bond_drainage(line(3), &[1.0, 10.0]);
    drn.set_inlets(&[site(0)]).unwrap();
    drn.set_outlets(&[site(2)]).unwrap();
    drn.run(pa(5.0)).unwrap();

    assert_eq!(drn.state().invaded_sites, vec![true, true, false]);
    assert_eq!(drn.state().invaded_bonds, vec![true, false]);
    assert_eq!(drn.state().trapped_sites, vec![true, false, false]);
    assert_eq!(drn.state().trapped_bonds, vec![true, false]);
}

#[test]
fn no_outlet_skips_trapping() {
    let mut drn = bond_drainage(line(3), &[1.0, 10.0]);
    drn.set_inlets(&[site(0)]).unwrap();
    drn.run(pa(5.0)).unwrap();

    assert_eq!(drn.state().trapped_sites, vec![false; 3]);
    assert_eq!(drn.state().trapped_bonds, vec![false; 2]);
}

#[test]
fn residual_bond_is_open_below_its_threshold() {
    // Neither threshold is met at p=1, but the residual bond (0,1) is
    // open regardless and connects to the inlet.
    let mut drn = bond_drainage(line(3), &[10.0, 10.0]);
    drn.set_inlets(&[site(0)]).unwrap();
    drn.set_residual(&[], &[pn_core::BondId::from_index(0)]).unwrap();
    drn.run(pa(1.0)).unwrap();

    assert_eq!(drn.state().invaded_sites, vec![true, true, false]);
    assert_eq!(drn.state().invaded_bonds, vec![true, false]);
}

#[test]
fn no_inlets_invades_nothing() {
    let mut drn = bond_drainage(line(3), &[1.0, 1.0]);
    drn.run(pa(5.0)).unwrap();
    assert_eq!(drn.state().invaded_site_count(), 0);
    assert_eq!(drn.state().invaded_bond_count(), 0);
}

#[test]
fn pc_curve_tracks_threshold_steps() {
    let mut drn = bond_drainage(line(4), &[1.0, 2.0, 3.0]);
    drn.set_inlets(&[site(0)]).unwrap();
    let volumes = Volumes::uniform(4, 3, m3(1.0), m3(1.0));

    let pressures = [pa(0.5), pa(1.5), pa(2.5), pa(3.5)];
    let curve = pc_curve(&mut drn, &pressures, &volumes).unwrap();

    let sats: Vec<f64> = curve.points.iter().map(|p| p.saturation.value).collect();
    // Total volume 7: nothing, then {s0,s1,b0}, then {s0..s2,b0,b1}, then all.
    let expected = [0.0, 3.0 / 7.0, 5.0 / 7.0, 1.0];
    for (got, want) in sats.iter().zip(expected) {
        assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
    }
}

#[test]
fn parallel_curve_matches_sequential() {
    let topo = line(6);
    let thresholds = [3.0, 1.0, 4.0, 1.0, 5.0];
    let volumes = Volumes::uniform(6, 5, m3(2.0), m3(1.0));
    let pressures = [pa(0.5), pa(1.5), pa(3.5), pa(4.5), pa(5.5)];

    let mut sequential = bond_drainage(topo.clone(), &thresholds);
    sequential.set_inlets(&[site(0)]).unwrap();
    sequential.set_outlets(&[site(5)]).unwrap();
    let seq = pc_curve(&mut sequential, &pressures, &volumes).unwrap();

    let mut parallel = bond_drainage(topo, &thresholds);
    parallel.set_inlets(&[site(0)]).unwrap();
    parallel.set_outlets(&[site(5)]).unwrap();
    let par = pc_curve_parallel(&parallel, &pressures, &volumes).unwrap();

    assert_eq!(seq, par);
    // The parallel driver leaves the controller untouched.
    assert_eq!(parallel.state().invaded_site_count(), 0);
}

#[test]
fn trapped_volume_is_excluded_from_saturation() {
    let mut drn = bond_drainage(line(3), &[1.0, 10.0]);
    drn.set_inlets(&[site(0)]).unwrap();
    drn.set_outlets(&[site(2)]).unwrap();
    let volumes = Volumes::uniform(3, 2, m3(1.0), m3(1.0));

    let curve = pc_curve(&mut drn, &[pa(5.0)], &volumes).unwrap();
    // Invaded: s0, s1, b0; trapped: s0, b0. Only s1 counts, of 5 total.
    assert!((curve.points[0].saturation.value - 1.0 / 5.0).abs() < 1e-12);
}

proptest! {
    #[test]
    fn invaded_masks_only_grow(
        thresholds in prop::collection::vec(0.0_f64..10.0, 7),
        p1 in 0.0_f64..10.0,
        dp in 0.0_f64..5.0,
    ) {
        let topo = line(8);
        let mut drn = bond_drainage(topo, &thresholds);
        drn.set_inlets(&[site(0)]).unwrap();
        drn.set_outlets(&[site(7)]).unwrap();

        drn.run(pa(p1)).unwrap();
        let before = drn.state().clone();
        drn.run(pa(p1 + dp)).unwrap();

        for (i, &was) in before.invaded_sites.iter().enumerate() {
            prop_assert!(!was || drn.state().invaded_sites[i]);
        }
        for (i, &was) in before.invaded_bonds.iter().enumerate() {
            prop_assert!(!was || drn.state().invaded_bonds[i]);
        }
        for (i, &was) in before.trapped_sites.iter().enumerate() {
            prop_assert!(!was || drn.state().trapped_sites[i]);
        }
    }

    #[test]
    fn repeat_run_changes_nothing(
        thresholds in prop::collection::vec(0.0_f64..10.0, 7),
        p in 0.0_f64..10.0,
    ) {
        let topo = line(8);
        let mut drn = bond_drainage(topo, &thresholds);
        drn.set_inlets(&[site(0)]).unwrap();
        drn.set_outlets(&[site(7)]).unwrap();

        drn.run(pa(p)).unwrap();
        let once = drn.state().clone();
        drn.run(pa(p)).unwrap();
        prop_assert_eq!(drn.state(), &once);
    }
}
