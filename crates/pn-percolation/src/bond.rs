//! Bond percolation: cluster labeling driven by an open-bond mask.

use pn_graph::Topology;

use crate::error::{PercResult, check_mask};
use crate::labels::{ClusterLabels, UNLABELED};
use crate::union_find::DisjointSet;

/// Label the clusters formed by the open bonds of a topology.
///
/// A site receives a cluster label iff it is an endpoint of at least one
/// open bond; all other sites are [`UNLABELED`]. An open bond carries its
/// endpoints' shared label; a closed bond is [`UNLABELED`]. Labels are
/// assigned in first-appearance order of component roots during a
/// left-to-right site scan, so the output is a deterministic function of
/// the mask.
///
/// Self-loop bonds cannot occur: [`Topology`] construction rejects them.
pub fn bond_percolation(topo: &Topology, open_bonds: &[bool]) -> PercResult<ClusterLabels> {
    check_mask(open_bonds, topo.bond_count(), "open_bonds")?;

    let (sites, _) = label_open_components(topo, open_bonds);

    let bonds = topo
        .bonds()
        .iter()
        .enumerate()
        .map(|(b, bond)| {
            if open_bonds[b] {
                // Both endpoints were unioned, so they share a label.
                sites[bond[0].idx()]
            } else {
                UNLABELED
            }
        })
        .collect();

    Ok(ClusterLabels { sites, bonds })
}

/// Union the endpoints of every open bond and label the components that
/// contain at least one open-bond endpoint. Returns the site labels and
/// the number of labels assigned, so callers can continue the numbering.
pub(crate) fn label_open_components(topo: &Topology, open_bonds: &[bool]) -> (Vec<i32>, i32) {
    let n_sites = topo.site_count();
    let mut dsu = DisjointSet::new(n_sites);
    let mut touched = vec![false; n_sites];

    for (b, bond) in topo.bonds().iter().enumerate() {
        if open_bonds[b] {
            let i = bond[0].idx();
            let j = bond[1].idx();
            dsu.union(i, j);
            touched[i] = true;
            touched[j] = true;
        }
    }

    let mut sites = vec![UNLABELED; n_sites];
    let mut root_label = vec![UNLABELED; n_sites];
    let mut next = 0;
    for site in 0..n_sites {
        if touched[site] {
            let root = dsu.find(site);
            if root_label[root] < 0 {
                root_label[root] = next;
                next += 1;
            }
            sites[site] = root_label[root];
        }
    }

    (sites, next)
}
