//! Incremental topology builder.

use pn_core::{BondId, SiteId};

use crate::error::TopologyResult;
use crate::topology::Topology;
use crate::validate;

/// Builder for constructing a topology incrementally.
///
/// Use `add_site`/`add_sites` and `add_bond` to build up the network,
/// then call `build()` to validate and freeze it into an immutable
/// [`Topology`].
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    site_count: usize,
    bonds: Vec<[SiteId; 2]>,
}

impl TopologyBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single site and return its ID.
    pub fn add_site(&mut self) -> SiteId {
        let id = SiteId::from_index(self.site_count as u32);
        self.site_count += 1;
        id
    }

    /// Add `count` sites at once. IDs are assigned densely in order.
    pub fn add_sites(&mut self, count: usize) {
        self.site_count += count;
    }

    /// Add a bond between two sites and return its ID.
    ///
    /// Endpoint order is not significant; bonds are unordered pairs.
    /// Validity (range, self-loops) is checked at `build()` time.
    pub fn add_bond(&mut self, a: SiteId, b: SiteId) -> BondId {
        let id = BondId::from_index(self.bonds.len() as u32);
        self.bonds.push([a, b]);
        id
    }

    /// Build and validate the topology, returning an immutable `Topology`.
    ///
    /// This performs validation and constructs compact adjacency lists.
    pub fn build(self) -> TopologyResult<Topology> {
        // First validate the structure
        validate::validate_structure(self.site_count, &self.bonds)?;

        // Build adjacency lists: site -> [bonds]
        let (site_bond_offsets, site_bonds) = Self::build_adjacency(self.site_count, &self.bonds);

        // Validate adjacency consistency
        validate::validate_adjacency(&self.bonds, &site_bond_offsets, &site_bonds)?;

        Ok(Topology {
            site_count: self.site_count,
            bonds: self.bonds,
            site_bond_offsets,
            site_bonds,
        })
    }

    /// Build compact adjacency lists: for each site, collect its incident bonds.
    fn build_adjacency(site_count: usize, bonds: &[[SiteId; 2]]) -> (Vec<usize>, Vec<BondId>) {
        // Count bond endpoints per site
        let mut counts = vec![0usize; site_count];
        for bond in bonds {
            counts[bond[0].idx()] += 1;
            counts[bond[1].idx()] += 1;
        }

        // Prefix-sum into offsets
        let mut offsets = Vec::with_capacity(site_count + 1);
        offsets.push(0);
        for site in 0..site_count {
            offsets.push(offsets[site] + counts[site]);
        }

        // Fill flat list; scanning bonds in ID order keeps each site's
        // list sorted by bond ID for determinism.
        let mut cursor = offsets[..site_count].to_vec();
        let mut flat = vec![BondId::from_index(0); offsets[site_count]];
        for (b, bond) in bonds.iter().enumerate() {
            let id = BondId::from_index(b as u32);
            for &site in bond {
                flat[cursor[site.idx()]] = id;
                cursor[site.idx()] += 1;
            }
        }

        (offsets, flat)
    }
}
