//! Controller configuration.

/// Which entry thresholds drive the percolation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Per-site (pore) thresholds; a bond opens when both endpoints are
    /// at or below the applied pressure.
    Site,
    /// Per-bond (throat) thresholds.
    #[default]
    Bond,
}

/// Options for a drainage run.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrainageSettings {
    /// Threshold mode (default: bond).
    pub mode: Mode,
    /// Restrict invasion to clusters connected to the inlet sites
    /// (default: true). With no inlets set, nothing invades.
    pub access_limited: bool,
}

impl Default for DrainageSettings {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            access_limited: true,
        }
    }
}
