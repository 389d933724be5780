//! pn-core: stable foundation for porenet.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - ids (stable compact IDs for network locations)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PnError, PnResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
