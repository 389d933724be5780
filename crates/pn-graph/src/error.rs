//! Topology-specific error types.

use pn_core::{BondId, SiteId};

pub type TopologyResult<T> = Result<T, TopologyError>;

/// Topology construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// A bond refers to a site index at or beyond the site count.
    InvalidSiteRef { bond: BondId, site: SiteId },

    /// A bond connects a site to itself. Self-loops have no percolation
    /// meaning and are rejected at build time.
    SelfLoop { bond: BondId, site: SiteId },

    /// Adjacency list is inconsistent (bond in a site's list but the bond
    /// doesn't reference that site).
    InconsistentAdjacency { bond: BondId, site: SiteId },
}

impl std::fmt::Display for TopologyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopologyError::InvalidSiteRef { bond, site } => {
                write!(f, "Bond {} refers to non-existent site {}", bond, site)
            }
            TopologyError::SelfLoop { bond, site } => {
                write!(f, "Bond {} is a self-loop on site {}", bond, site)
            }
            TopologyError::InconsistentAdjacency { bond, site } => {
                write!(
                    f,
                    "Bond {} in site {}'s adjacency list but doesn't reference that site",
                    bond, site
                )
            }
        }
    }
}

impl std::error::Error for TopologyError {}
