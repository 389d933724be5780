//! Trapping detection over the complement (un-invaded) graph.

use pn_graph::Topology;

use crate::bond::label_open_components;
use crate::error::{PercResult, check_mask};
use crate::labels::{ClusterLabels, UNLABELED};

/// Flag clusters of defending fluid with no path to an outlet.
///
/// Bonds are open for this pass iff they are *not* invaded. Sites touched
/// by no un-invaded bond are assigned fresh singleton labels (numbering
/// continues after the component labels), so a single-site pocket walled
/// in by invaded bonds is still detected. Clusters reaching an outlet
/// site are cleared to [`UNLABELED`]; the non-sentinel remainder are the
/// trapped locations.
///
/// A bond is trapped iff at least one endpoint is trapped, and carries
/// the larger of its endpoints' labels. For un-invaded bonds this
/// coincides with ordinary bond labeling (an un-invaded bond joins its
/// endpoints into one cluster, so they vent or trap together); the rule
/// additionally flags the invaded boundary bonds of a trapped pocket.
pub fn find_trapped_clusters(
    topo: &Topology,
    invaded_bonds: &[bool],
    outlets: &[bool],
) -> PercResult<ClusterLabels> {
    check_mask(invaded_bonds, topo.bond_count(), "invaded_bonds")?;
    check_mask(outlets, topo.site_count(), "outlets")?;

    let open: Vec<bool> = invaded_bonds.iter().map(|&inv| !inv).collect();
    let (mut sites, mut next) = label_open_components(topo, &open);

    // Walled-in sites become singleton clusters.
    for label in sites.iter_mut() {
        if *label < 0 {
            *label = next;
            next += 1;
        }
    }

    // Clusters that reach an outlet can still drain: clear them.
    let mut vented = vec![false; next as usize];
    for (site, &is_outlet) in outlets.iter().enumerate() {
        if is_outlet {
            vented[sites[site] as usize] = true;
        }
    }
    for label in sites.iter_mut() {
        if vented[*label as usize] {
            *label = UNLABELED;
        }
    }

    let bonds = topo
        .bonds()
        .iter()
        .map(|bond| sites[bond[0].idx()].max(sites[bond[1].idx()]))
        .collect();

    Ok(ClusterLabels { sites, bonds })
}
