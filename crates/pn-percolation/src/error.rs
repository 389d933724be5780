//! Percolation error types.

use thiserror::Error;

pub type PercResult<T> = Result<T, PercError>;

/// Errors from the labeling passes. All are precondition violations:
/// detected before any labeling work, never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PercError {
    #[error("Mask length mismatch for {what}: expected {expected}, got {got}")]
    MaskLength {
        what: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Check a boolean mask against the array it indexes.
pub(crate) fn check_mask(mask: &[bool], expected: usize, what: &'static str) -> PercResult<()> {
    if mask.len() != expected {
        return Err(PercError::MaskLength {
            what,
            expected,
            got: mask.len(),
        });
    }
    Ok(())
}
