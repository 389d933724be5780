//! Error types for drainage runs.

use thiserror::Error;

use crate::settings::Mode;

pub type DrainageResult<T> = Result<T, DrainageError>;

/// Errors encountered while configuring or stepping a drainage run.
///
/// All of these are precondition violations surfaced synchronously; a
/// failed call leaves the invasion state untouched.
#[derive(Error, Debug)]
pub enum DrainageError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Threshold array has {got} entries; {mode:?} mode needs {expected}")]
    ThresholdLength {
        mode: Mode,
        expected: usize,
        got: usize,
    },

    #[error("{what} index {index} out of range for {len} locations")]
    LocationOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error(transparent)]
    Core(#[from] pn_core::PnError),

    #[error(transparent)]
    Percolation(#[from] pn_percolation::PercError),
}
