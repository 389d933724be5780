//! Core topology data structure.

use pn_core::{BondId, SiteId};

use crate::builder::TopologyBuilder;
use crate::error::TopologyResult;

/// The topology: a validated, immutable pore-network graph.
///
/// Sites (pores) are dense indices `0..site_count`; bonds (throats) are an
/// ordered list of unordered site pairs. The topology is frozen for the
/// duration of an invasion run.
///
/// The structure stores:
/// - The bond list (`N_bonds x 2` site pairs).
/// - Compact adjacency: for each site, which bonds are incident.
#[derive(Debug, Clone)]
pub struct Topology {
    pub(crate) site_count: usize,
    pub(crate) bonds: Vec<[SiteId; 2]>,

    /// Offsets for site->bond adjacency: site i's bonds are in
    /// site_bonds[site_bond_offsets[i]..site_bond_offsets[i+1]].
    pub(crate) site_bond_offsets: Vec<usize>,

    /// Flat list of bond IDs incident to sites (sorted by site then bond
    /// ID for determinism).
    pub(crate) site_bonds: Vec<BondId>,
}

impl Topology {
    /// Build a topology directly from a connection list of 0-based site
    /// index pairs. Duplicate pairs are legal; self-loops are rejected.
    pub fn from_conns(site_count: usize, conns: &[(u32, u32)]) -> TopologyResult<Self> {
        let mut builder = TopologyBuilder::new();
        builder.add_sites(site_count);
        for &(i, j) in conns {
            builder.add_bond(SiteId::from_index(i), SiteId::from_index(j));
        }
        builder.build()
    }

    /// Number of sites.
    pub fn site_count(&self) -> usize {
        self.site_count
    }

    /// Number of bonds.
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// The full bond list, indexed by bond ID.
    pub fn bonds(&self) -> &[[SiteId; 2]] {
        &self.bonds
    }

    /// Endpoints of a bond (returns None if ID out of bounds).
    pub fn endpoints(&self, bond: BondId) -> Option<(SiteId, SiteId)> {
        self.bonds.get(bond.idx()).map(|b| (b[0], b[1]))
    }

    /// Iterate over all bond IDs incident to a given site.
    pub fn site_bonds(&self, site: SiteId) -> &[BondId] {
        let idx = site.idx();
        if idx >= self.site_count {
            return &[];
        }
        let start = self.site_bond_offsets[idx];
        let end = self.site_bond_offsets[idx + 1];
        &self.site_bonds[start..end]
    }
}
