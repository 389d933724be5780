//! Persistent per-location invasion state.

/// The boolean state masks of a drainage run.
///
/// `inlet`/`outlet`/`residual` masks are set by operator calls before
/// invasion begins; `invaded` and `trapped` accrete `true` entries across
/// successive [`run`](crate::Drainage::run) calls and are never cleared
/// except by [`reset`](InvasionState::reset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvasionState {
    pub inlet_sites: Vec<bool>,
    pub outlet_sites: Vec<bool>,
    pub invaded_sites: Vec<bool>,
    pub invaded_bonds: Vec<bool>,
    pub residual_sites: Vec<bool>,
    pub residual_bonds: Vec<bool>,
    pub trapped_sites: Vec<bool>,
    pub trapped_bonds: Vec<bool>,
}

impl InvasionState {
    /// All-`false` state for a network of the given dimensions.
    pub fn new(site_count: usize, bond_count: usize) -> Self {
        Self {
            inlet_sites: vec![false; site_count],
            outlet_sites: vec![false; site_count],
            invaded_sites: vec![false; site_count],
            invaded_bonds: vec![false; bond_count],
            residual_sites: vec![false; site_count],
            residual_bonds: vec![false; bond_count],
            trapped_sites: vec![false; site_count],
            trapped_bonds: vec![false; bond_count],
        }
    }

    /// Clear every mask back to all-`false`.
    pub fn reset(&mut self) {
        for mask in [
            &mut self.inlet_sites,
            &mut self.outlet_sites,
            &mut self.invaded_sites,
            &mut self.residual_sites,
            &mut self.trapped_sites,
        ] {
            mask.fill(false);
        }
        for mask in [
            &mut self.invaded_bonds,
            &mut self.residual_bonds,
            &mut self.trapped_bonds,
        ] {
            mask.fill(false);
        }
    }

    /// Copy of this state with the run-accreted masks (`invaded`,
    /// `trapped`) cleared but the operator-set masks kept. This is the
    /// baseline an independent pressure step starts from.
    pub fn baseline(&self) -> Self {
        let mut base = self.clone();
        base.invaded_sites.fill(false);
        base.invaded_bonds.fill(false);
        base.trapped_sites.fill(false);
        base.trapped_bonds.fill(false);
        base
    }

    /// Number of invaded sites.
    pub fn invaded_site_count(&self) -> usize {
        self.invaded_sites.iter().filter(|&&v| v).count()
    }

    /// Number of invaded bonds.
    pub fn invaded_bond_count(&self) -> usize {
        self.invaded_bonds.iter().filter(|&&v| v).count()
    }

    /// Number of trapped sites.
    pub fn trapped_site_count(&self) -> usize {
        self.trapped_sites.iter().filter(|&&v| v).count()
    }
}
