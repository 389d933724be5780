//! pn-drainage: pressure-stepped invasion of a pore network.
//!
//! The [`Drainage`] controller owns the topology, the per-location entry
//! thresholds, and the [`InvasionState`] masks. Each `run(pressure)` call
//! computes the access-limited invasion front at that pressure, merges it
//! into the persistent state, and (when outlets are set) flags trapped
//! defender clusters. [`curve`] turns repeated runs into a capillary
//! pressure curve.

pub mod curve;
pub mod drainage;
pub mod error;
pub mod settings;
pub mod state;

// Re-exports for ergonomics
pub use curve::{PcCurve, PcPoint, Volumes, pc_curve, pc_curve_parallel};
pub use drainage::Drainage;
pub use error::{DrainageError, DrainageResult};
pub use settings::{DrainageSettings, Mode};
pub use state::InvasionState;
