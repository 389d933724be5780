//! Topology validation logic.

use pn_core::{BondId, SiteId};

use crate::error::{TopologyError, TopologyResult};

/// Validate the raw structure: every bond endpoint exists and no bond
/// is a self-loop.
pub(crate) fn validate_structure(
    site_count: usize,
    bonds: &[[SiteId; 2]],
) -> TopologyResult<()> {
    for (b, bond) in bonds.iter().enumerate() {
        let id = BondId::from_index(b as u32);

        for &site in bond {
            if site.idx() >= site_count {
                return Err(TopologyError::InvalidSiteRef { bond: id, site });
            }
        }

        if bond[0] == bond[1] {
            return Err(TopologyError::SelfLoop {
                bond: id,
                site: bond[0],
            });
        }
    }
    Ok(())
}

/// Validate the built adjacency: every bond listed under a site must
/// actually reference that site, and every endpoint must be listed.
pub(crate) fn validate_adjacency(
    bonds: &[[SiteId; 2]],
    offsets: &[usize],
    site_bonds: &[BondId],
) -> TopologyResult<()> {
    for site_idx in 0..offsets.len().saturating_sub(1) {
        let site = SiteId::from_index(site_idx as u32);
        for &bond_id in &site_bonds[offsets[site_idx]..offsets[site_idx + 1]] {
            let bond = &bonds[bond_id.idx()];
            if bond[0] != site && bond[1] != site {
                return Err(TopologyError::InconsistentAdjacency {
                    bond: bond_id,
                    site,
                });
            }
        }
    }

    // Each bond contributes exactly two endpoint entries.
    if site_bonds.len() != bonds.len() * 2 {
        let bond = BondId::from_index(0);
        let site = SiteId::from_index(0);
        return Err(TopologyError::InconsistentAdjacency { bond, site });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: u32, b: u32) -> [SiteId; 2] {
        [SiteId::from_index(a), SiteId::from_index(b)]
    }

    #[test]
    fn structure_accepts_valid_bonds() {
        assert!(validate_structure(3, &[pair(0, 1), pair(1, 2)]).is_ok());
    }

    #[test]
    fn structure_rejects_self_loop() {
        let err = validate_structure(2, &[pair(1, 1)]).unwrap_err();
        assert!(matches!(err, TopologyError::SelfLoop { .. }));
    }

    #[test]
    fn structure_rejects_bad_endpoint() {
        let err = validate_structure(2, &[pair(0, 5)]).unwrap_err();
        assert!(matches!(err, TopologyError::InvalidSiteRef { .. }));
    }
}
