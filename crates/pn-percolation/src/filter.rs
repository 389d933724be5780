//! Access limitation: discard clusters not touching a source site.

use crate::error::{PercResult, check_mask};
use crate::labels::{ClusterLabels, UNLABELED};

/// Keep only the clusters touching at least one source site.
///
/// Clusters with no source site are cleared to [`UNLABELED`] on both
/// sites and bonds; surviving clusters keep their original numbers. An
/// all-`false` source mask therefore clears everything — the degenerate
/// "no access" outcome, not an error.
pub fn retain_connected(labels: &ClusterLabels, sources: &[bool]) -> PercResult<ClusterLabels> {
    check_mask(sources, labels.sites.len(), "sources")?;

    let cluster_count = labels.max_label().map_or(0, |l| l as usize + 1);
    let mut hit = vec![false; cluster_count];
    for (site, &is_source) in sources.iter().enumerate() {
        if is_source && labels.sites[site] >= 0 {
            hit[labels.sites[site] as usize] = true;
        }
    }

    let keep = |label: i32| {
        if label >= 0 && hit[label as usize] {
            label
        } else {
            UNLABELED
        }
    };

    Ok(ClusterLabels {
        sites: labels.sites.iter().copied().map(keep).collect(),
        bonds: labels.bonds.iter().copied().map(keep).collect(),
    })
}
