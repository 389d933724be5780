//! pn-percolation: cluster labeling for invasion percolation.
//!
//! Pure graph algorithms over a [`pn_graph::Topology`]:
//! - [`bond_percolation`] / [`site_percolation`]: union-find cluster
//!   labeling given an open-bond or occupied-site mask
//! - [`retain_connected`]: access limitation, keeping only clusters that
//!   touch a source site
//! - [`find_trapped_clusters`]: complement-graph pass flagging defender
//!   clusters with no path to an outlet
//!
//! Labels follow one convention throughout: nonnegative integers for
//! cluster membership, [`UNLABELED`] (-1) for disconnected locations.

pub mod bond;
pub mod error;
pub mod filter;
pub mod labels;
pub mod site;
pub mod trapping;
pub(crate) mod union_find;

// Re-exports for ergonomics
pub use bond::bond_percolation;
pub use error::{PercError, PercResult};
pub use filter::retain_connected;
pub use labels::{ClusterLabels, UNLABELED};
pub use site::site_percolation;
pub use trapping::find_trapped_clusters;
