//! Site percolation: cluster labeling driven by an occupied-site mask.

use pn_graph::Topology;

use crate::error::{PercResult, check_mask};
use crate::labels::{ClusterLabels, UNLABELED};
use crate::union_find::DisjointSet;

/// Label the clusters formed by the occupied sites of a topology.
///
/// A bond is open for this pass iff both endpoints are occupied. Unlike
/// [`bond_percolation`](crate::bond_percolation), every occupied site is
/// labeled: an occupied site with no occupied neighbor forms a singleton
/// cluster. Unoccupied sites and bonds with an unoccupied endpoint are
/// [`UNLABELED`].
pub fn site_percolation(topo: &Topology, occupied_sites: &[bool]) -> PercResult<ClusterLabels> {
    check_mask(occupied_sites, topo.site_count(), "occupied_sites")?;

    let n_sites = topo.site_count();
    let mut dsu = DisjointSet::new(n_sites);
    let mut open_bonds = vec![false; topo.bond_count()];

    for (b, bond) in topo.bonds().iter().enumerate() {
        let i = bond[0].idx();
        let j = bond[1].idx();
        if occupied_sites[i] && occupied_sites[j] {
            dsu.union(i, j);
            open_bonds[b] = true;
        }
    }

    let mut sites = vec![UNLABELED; n_sites];
    let mut root_label = vec![UNLABELED; n_sites];
    let mut next = 0;
    for site in 0..n_sites {
        if occupied_sites[site] {
            let root = dsu.find(site);
            if root_label[root] < 0 {
                root_label[root] = next;
                next += 1;
            }
            sites[site] = root_label[root];
        }
    }

    let bonds = topo
        .bonds()
        .iter()
        .enumerate()
        .map(|(b, bond)| {
            if open_bonds[b] {
                sites[bond[0].idx()]
            } else {
                UNLABELED
            }
        })
        .collect();

    Ok(ClusterLabels { sites, bonds })
}
