//! The drainage controller: one invasion step per `run(pressure)` call.

use pn_core::{BondId, Pressure, SiteId, ensure_finite};
use pn_graph::Topology;
use pn_percolation::{
    ClusterLabels, bond_percolation, find_trapped_clusters, retain_connected, site_percolation,
};
use tracing::{debug, trace};

use crate::error::{DrainageError, DrainageResult};
use crate::settings::{DrainageSettings, Mode};
use crate::state::InvasionState;

/// Invasion-percolation drainage over an immutable topology.
///
/// The controller is constructed with the topology, the settings, and the
/// per-location entry thresholds (per bond in bond mode, per site in site
/// mode). Inlets, outlets, and residual locations are configured through
/// the OR-add setters; [`run`](Drainage::run) then accretes invaded and
/// trapped locations at each applied pressure. Rising pressures give the
/// usual drainage sequence, but ordering is not enforced — each step is a
/// pure function of the thresholds, the settings, and the state so far.
#[derive(Debug, Clone)]
pub struct Drainage {
    topo: Topology,
    settings: DrainageSettings,
    thresholds: Vec<Pressure>,
    state: InvasionState,
}

/// Fully merged masks computed by one step, committed atomically.
pub(crate) struct StepMasks {
    pub(crate) invaded_sites: Vec<bool>,
    pub(crate) invaded_bonds: Vec<bool>,
    pub(crate) trapped_sites: Vec<bool>,
    pub(crate) trapped_bonds: Vec<bool>,
}

impl Drainage {
    /// Create a controller. The threshold array length must match the
    /// mode: one entry per bond in bond mode, per site in site mode.
    pub fn new(
        topo: Topology,
        settings: DrainageSettings,
        thresholds: Vec<Pressure>,
    ) -> DrainageResult<Self> {
        let expected = match settings.mode {
            Mode::Bond => topo.bond_count(),
            Mode::Site => topo.site_count(),
        };
        if thresholds.len() != expected {
            return Err(DrainageError::ThresholdLength {
                mode: settings.mode,
                expected,
                got: thresholds.len(),
            });
        }
        let state = InvasionState::new(topo.site_count(), topo.bond_count());
        Ok(Self {
            topo,
            settings,
            thresholds,
            state,
        })
    }

    pub fn topology(&self) -> &Topology {
        &self.topo
    }

    pub fn settings(&self) -> &DrainageSettings {
        &self.settings
    }

    /// The current invasion state, readable at any time.
    pub fn state(&self) -> &InvasionState {
        &self.state
    }

    /// Reinitialize all state masks to all-`false`.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Mark sites as inlets (adds to any existing inlet mask).
    pub fn set_inlets(&mut self, sites: &[SiteId]) -> DrainageResult<()> {
        check_ids(sites, self.topo.site_count(), "inlet site")?;
        or_ids(&mut self.state.inlet_sites, sites);
        Ok(())
    }

    /// Mark sites as outlets (adds to any existing outlet mask).
    pub fn set_outlets(&mut self, sites: &[SiteId]) -> DrainageResult<()> {
        check_ids(sites, self.topo.site_count(), "outlet site")?;
        or_ids(&mut self.state.outlet_sites, sites);
        Ok(())
    }

    /// Mark locations as pre-filled with invading fluid regardless of
    /// their entry threshold (adds to any existing residual mask).
    pub fn set_residual(&mut self, sites: &[SiteId], bonds: &[BondId]) -> DrainageResult<()> {
        check_ids(sites, self.topo.site_count(), "residual site")?;
        check_ids(bonds, self.topo.bond_count(), "residual bond")?;
        or_ids(&mut self.state.residual_sites, sites);
        or_ids(&mut self.state.residual_bonds, bonds);
        Ok(())
    }

    /// Mark locations as trapped by operator fiat (adds to any existing
    /// trapped mask).
    pub fn set_trapped(&mut self, sites: &[SiteId], bonds: &[BondId]) -> DrainageResult<()> {
        check_ids(sites, self.topo.site_count(), "trapped site")?;
        check_ids(bonds, self.topo.bond_count(), "trapped bond")?;
        or_ids(&mut self.state.trapped_sites, sites);
        or_ids(&mut self.state.trapped_bonds, bonds);
        Ok(())
    }

    /// Perform one invasion step at the given applied pressure.
    ///
    /// Locations whose threshold is met (or which are residual) and which
    /// pass the access filter are merged into the invaded masks; if any
    /// outlet is set, trapping is then evaluated against the updated
    /// invaded bonds. The step either commits fully or, on error, leaves
    /// the state untouched.
    pub fn run(&mut self, pressure: Pressure) -> DrainageResult<()> {
        let step = self.compute_step(&self.state, pressure)?;
        self.state.invaded_sites = step.invaded_sites;
        self.state.invaded_bonds = step.invaded_bonds;
        self.state.trapped_sites = step.trapped_sites;
        self.state.trapped_bonds = step.trapped_bonds;
        Ok(())
    }

    /// Compute the fully merged masks for one step from `base`, without
    /// mutating anything. Shared by `run` and the parallel curve driver.
    pub(crate) fn compute_step(
        &self,
        base: &InvasionState,
        pressure: Pressure,
    ) -> DrainageResult<StepMasks> {
        ensure_finite(pressure.value, "pressure")?;

        let labels = match self.settings.mode {
            Mode::Bond => {
                let open: Vec<bool> = self
                    .thresholds
                    .iter()
                    .zip(&base.residual_bonds)
                    .map(|(&t, &residual)| t <= pressure || residual)
                    .collect();
                bond_percolation(&self.topo, &open)?
            }
            Mode::Site => {
                let occupied: Vec<bool> = self
                    .thresholds
                    .iter()
                    .zip(&base.residual_sites)
                    .map(|(&t, &residual)| t <= pressure || residual)
                    .collect();
                site_percolation(&self.topo, &occupied)?
            }
        };

        let labels = if self.settings.access_limited {
            retain_connected(&labels, &base.inlet_sites)?
        } else {
            labels
        };

        let mut invaded_sites = base.invaded_sites.clone();
        let mut invaded_bonds = base.invaded_bonds.clone();
        merge_labels(&mut invaded_sites, &mut invaded_bonds, &labels);

        let has_outlets = base.outlet_sites.iter().any(|&o| o);
        let (trapped_sites, trapped_bonds) = if has_outlets {
            let trapped = find_trapped_clusters(&self.topo, &invaded_bonds, &base.outlet_sites)?;
            let mut sites = base.trapped_sites.clone();
            let mut bonds = base.trapped_bonds.clone();
            merge_labels(&mut sites, &mut bonds, &trapped);
            (sites, bonds)
        } else {
            trace!("no outlets designated; skipping trapping analysis");
            (base.trapped_sites.clone(), base.trapped_bonds.clone())
        };

        debug!(
            pressure_pa = pressure.value,
            invaded_sites = invaded_sites.iter().filter(|&&v| v).count(),
            invaded_bonds = invaded_bonds.iter().filter(|&&v| v).count(),
            trapped_sites = trapped_sites.iter().filter(|&&v| v).count(),
            "drainage step"
        );

        Ok(StepMasks {
            invaded_sites,
            invaded_bonds,
            trapped_sites,
            trapped_bonds,
        })
    }
}

/// OR every labeled location into the persistent masks.
fn merge_labels(sites: &mut [bool], bonds: &mut [bool], labels: &ClusterLabels) {
    for (site, &label) in labels.sites.iter().enumerate() {
        if label >= 0 {
            sites[site] = true;
        }
    }
    for (bond, &label) in labels.bonds.iter().enumerate() {
        if label >= 0 {
            bonds[bond] = true;
        }
    }
}

/// Range-check every ID before any mask is touched, so a bad entry
/// cannot leave a setter half-applied.
fn check_ids(ids: &[pn_core::Id], len: usize, what: &'static str) -> DrainageResult<()> {
    for &id in ids {
        if id.idx() >= len {
            return Err(DrainageError::LocationOutOfRange {
                what,
                index: id.idx(),
                len,
            });
        }
    }
    Ok(())
}

fn or_ids(mask: &mut [bool], ids: &[pn_core::Id]) {
    for &id in ids {
        mask[id.idx()] = true;
    }
}
