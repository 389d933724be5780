//! pn-graph: pore-network topology layer for porenet.
//!
//! Provides:
//! - The immutable [`Topology`] (bond list + site->bond adjacency)
//! - An incremental [`TopologyBuilder`] with validation
//!
//! # Example
//!
//! ```
//! use pn_graph::TopologyBuilder;
//!
//! let mut builder = TopologyBuilder::new();
//! let s0 = builder.add_site();
//! let s1 = builder.add_site();
//! builder.add_bond(s0, s1);
//! let topo = builder.build().unwrap();
//!
//! assert_eq!(topo.site_count(), 2);
//! assert_eq!(topo.bond_count(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod topology;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::TopologyBuilder;
pub use error::{TopologyError, TopologyResult};
pub use topology::Topology;
