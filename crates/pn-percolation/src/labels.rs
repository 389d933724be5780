//! Cluster label arrays shared by all labeling passes.

/// Sentinel label for sites and bonds not reached by any cluster.
pub const UNLABELED: i32 = -1;

/// Per-site and per-bond cluster labels.
///
/// Two sites share a nonnegative label iff they are connected by a path
/// of open bonds in the pass that produced the labels. A bond carries its
/// endpoints' shared label when open, [`UNLABELED`] otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterLabels {
    pub sites: Vec<i32>,
    pub bonds: Vec<i32>,
}

impl ClusterLabels {
    /// All-sentinel labels for a graph of the given dimensions.
    pub fn unlabeled(site_count: usize, bond_count: usize) -> Self {
        Self {
            sites: vec![UNLABELED; site_count],
            bonds: vec![UNLABELED; bond_count],
        }
    }

    /// Boolean mask of sites carrying a cluster label.
    pub fn site_mask(&self) -> Vec<bool> {
        self.sites.iter().map(|&l| l >= 0).collect()
    }

    /// Boolean mask of bonds carrying a cluster label.
    pub fn bond_mask(&self) -> Vec<bool> {
        self.bonds.iter().map(|&l| l >= 0).collect()
    }

    /// Number of labeled sites.
    pub fn labeled_site_count(&self) -> usize {
        self.sites.iter().filter(|&&l| l >= 0).count()
    }

    /// Number of labeled bonds.
    pub fn labeled_bond_count(&self) -> usize {
        self.bonds.iter().filter(|&&l| l >= 0).count()
    }

    /// Largest label present, or None if everything is unlabeled.
    pub fn max_label(&self) -> Option<i32> {
        self.sites.iter().copied().filter(|&l| l >= 0).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlabeled_is_all_sentinel() {
        let labels = ClusterLabels::unlabeled(3, 2);
        assert_eq!(labels.sites, vec![UNLABELED; 3]);
        assert_eq!(labels.bonds, vec![UNLABELED; 2]);
        assert_eq!(labels.labeled_site_count(), 0);
        assert_eq!(labels.max_label(), None);
    }

    #[test]
    fn masks_follow_labels() {
        let labels = ClusterLabels {
            sites: vec![0, -1, 0],
            bonds: vec![-1, 0],
        };
        assert_eq!(labels.site_mask(), vec![true, false, true]);
        assert_eq!(labels.bond_mask(), vec![false, true]);
        assert_eq!(labels.labeled_bond_count(), 1);
        assert_eq!(labels.max_label(), Some(0));
    }
}
