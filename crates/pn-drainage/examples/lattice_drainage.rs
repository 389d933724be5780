//! Drainage of a square 2D lattice: invade from the left face, vent at
//! the right face, and print the capillary pressure curve.
//!
//! Run with: cargo run -p pn-drainage --example lattice_drainage

use pn_core::{Pressure, SiteId, m3, pa};
use pn_drainage::{Drainage, DrainageSettings, Volumes, pc_curve};
use pn_graph::{Topology, TopologyBuilder};

const NX: usize = 20;
const NY: usize = 20;

fn build_lattice() -> (Topology, Vec<Pressure>) {
    let mut builder = TopologyBuilder::new();
    builder.add_sites(NX * NY);
    let site = |x: usize, y: usize| SiteId::from_index((y * NX + x) as u32);

    let mut rng = 0x2545_f491_4f6c_dd1d_u64;
    let mut next_threshold = move || {
        // xorshift64*; thresholds spread over 1..11 kPa
        rng ^= rng >> 12;
        rng ^= rng << 25;
        rng ^= rng >> 27;
        let unit = (rng.wrapping_mul(0x2545_f491_4f6c_dd1d) >> 11) as f64 / (1u64 << 53) as f64;
        pa(1_000.0 + 10_000.0 * unit)
    };

    let mut thresholds = Vec::new();
    for y in 0..NY {
        for x in 0..NX {
            if x + 1 < NX {
                builder.add_bond(site(x, y), site(x + 1, y));
                thresholds.push(next_threshold());
            }
            if y + 1 < NY {
                builder.add_bond(site(x, y), site(x, y + 1));
                thresholds.push(next_threshold());
            }
        }
    }

    (builder.build().expect("lattice is valid"), thresholds)
}

fn main() {
    tracing_subscriber::fmt::init();

    let (topo, thresholds) = build_lattice();
    let site_count = topo.site_count();
    let bond_count = topo.bond_count();

    let mut drn =
        Drainage::new(topo, DrainageSettings::default(), thresholds).expect("valid thresholds");

    let left: Vec<SiteId> = (0..NY)
        .map(|y| SiteId::from_index((y * NX) as u32))
        .collect();
    let right: Vec<SiteId> = (0..NY)
        .map(|y| SiteId::from_index((y * NX + NX - 1) as u32))
        .collect();
    drn.set_inlets(&left).expect("inlets in range");
    drn.set_outlets(&right).expect("outlets in range");

    // Pore bodies dominate the pore space; throats hold a tenth as much.
    let volumes = Volumes::uniform(site_count, bond_count, m3(1e-12), m3(1e-13));

    let pressures: Vec<Pressure> = (1..=22).map(|i| pa(500.0 * i as f64)).collect();
    let curve = pc_curve(&mut drn, &pressures, &volumes).expect("curve evaluates");

    println!("{:>12} {:>10}", "Pc [Pa]", "Snwp [-]");
    for point in &curve.points {
        println!("{:>12.0} {:>10.4}", point.pressure.value, point.saturation.value);
    }
    println!(
        "final state: {} invaded sites, {} invaded bonds, {} trapped sites",
        drn.state().invaded_site_count(),
        drn.state().invaded_bond_count(),
        drn.state().trapped_site_count(),
    );
}
