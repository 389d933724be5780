use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier for network locations.
///
/// - `u32` keeps bond lists small even for large networks
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        // index+1 must be nonzero
        Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// The 0-based index widened to `usize`, for mask/array access.
    pub fn idx(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Domain-specific ID aliases for clarity (no runtime cost).
///
/// A site is a pore (graph node); a bond is a throat (graph edge).
pub type SiteId = Id;
pub type BondId = Id;
