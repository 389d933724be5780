//! Capillary pressure curve post-processing.
//!
//! Volumes feed only the saturation accounting here — the labeling logic
//! never sees them. Trapped locations are excluded from the non-wetting
//! volume: defender pockets that cannot drain hold their fluid.

use pn_core::{Pressure, Ratio, Volume, unitless};
use rayon::prelude::*;
use tracing::debug;

use crate::drainage::Drainage;
use crate::error::{DrainageError, DrainageResult};

/// Per-location volumes used by saturation accounting.
#[derive(Debug, Clone)]
pub struct Volumes {
    pub sites: Vec<Volume>,
    pub bonds: Vec<Volume>,
}

impl Volumes {
    /// The same volume for every site and every bond.
    pub fn uniform(site_count: usize, bond_count: usize, site: Volume, bond: Volume) -> Self {
        Self {
            sites: vec![site; site_count],
            bonds: vec![bond; bond_count],
        }
    }

    fn total_si(&self) -> f64 {
        self.sites.iter().map(|v| v.value).sum::<f64>()
            + self.bonds.iter().map(|v| v.value).sum::<f64>()
    }
}

/// One point of a capillary pressure curve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcPoint {
    /// Applied capillary pressure.
    pub pressure: Pressure,
    /// Non-wetting phase saturation: invaded-and-not-trapped volume over
    /// total volume.
    pub saturation: Ratio,
}

/// A capillary pressure curve: one point per applied pressure, in call
/// order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcCurve {
    pub points: Vec<PcPoint>,
}

/// Run the controller at each pressure in order, accreting state, and
/// record the non-wetting saturation after each step.
///
/// Pressures are expected in increasing order for a physically meaningful
/// curve, but ordering is not enforced.
pub fn pc_curve(
    drn: &mut Drainage,
    pressures: &[Pressure],
    volumes: &Volumes,
) -> DrainageResult<PcCurve> {
    let total = validate_volumes(drn, volumes)?;

    let mut points = Vec::with_capacity(pressures.len());
    for &pressure in pressures {
        drn.run(pressure)?;
        let state = drn.state();
        points.push(PcPoint {
            pressure,
            saturation: saturation(
                volumes,
                total,
                &state.invaded_sites,
                &state.invaded_bonds,
                &state.trapped_sites,
                &state.trapped_bonds,
            ),
        });
    }

    debug!(points = points.len(), "capillary pressure curve complete");
    Ok(PcCurve { points })
}

/// Evaluate each pressure independently from the configured baseline
/// (inlets/outlets/residual kept, invaded and trapped cleared), in
/// parallel. The controller is not mutated.
///
/// This matches the sequential curve: the activity mask is monotone in
/// pressure, so a single step at `p` invades exactly what the cumulative
/// steps up to `p` invade, and each step's trapping pass uses that step's
/// own merged invaded mask.
pub fn pc_curve_parallel(
    drn: &Drainage,
    pressures: &[Pressure],
    volumes: &Volumes,
) -> DrainageResult<PcCurve> {
    let total = validate_volumes(drn, volumes)?;
    let base = drn.state().baseline();

    let points = pressures
        .par_iter()
        .map(|&pressure| {
            let step = drn.compute_step(&base, pressure)?;
            Ok(PcPoint {
                pressure,
                saturation: saturation(
                    volumes,
                    total,
                    &step.invaded_sites,
                    &step.invaded_bonds,
                    &step.trapped_sites,
                    &step.trapped_bonds,
                ),
            })
        })
        .collect::<DrainageResult<Vec<_>>>()?;

    debug!(points = points.len(), "parallel capillary pressure curve complete");
    Ok(PcCurve { points })
}

fn validate_volumes(drn: &Drainage, volumes: &Volumes) -> DrainageResult<f64> {
    let topo = drn.topology();
    if volumes.sites.len() != topo.site_count() || volumes.bonds.len() != topo.bond_count() {
        return Err(DrainageError::InvalidArg {
            what: "volume arrays must match topology dimensions",
        });
    }
    let total = volumes.total_si();
    if total <= 0.0 {
        return Err(DrainageError::InvalidArg {
            what: "total volume must be positive",
        });
    }
    Ok(total)
}

fn saturation(
    volumes: &Volumes,
    total: f64,
    invaded_sites: &[bool],
    invaded_bonds: &[bool],
    trapped_sites: &[bool],
    trapped_bonds: &[bool],
) -> Ratio {
    let mut nonwetting = 0.0;
    for (i, volume) in volumes.sites.iter().enumerate() {
        if invaded_sites[i] && !trapped_sites[i] {
            nonwetting += volume.value;
        }
    }
    for (i, volume) in volumes.bonds.iter().enumerate() {
        if invaded_bonds[i] && !trapped_bonds[i] {
            nonwetting += volume.value;
        }
    }
    unitless(nonwetting / total)
}
