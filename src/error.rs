//! Layout error types.

use thiserror::Error;

/// Errors reported by element registration and updates.
///
/// The layout pass itself never fails; it degrades to best-effort geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlexError {
    /// The requested parent was never created.
    #[error("parent element {0} does not exist")]
    InvalidParent(u64),

    /// No element with this id exists.
    #[error("element {0} does not exist")]
    UnknownElement(u64),

    /// Every `u64` id has been handed out.
    #[error("element id space exhausted")]
    IdsExhausted,
}

/// Result alias for fallible engine operations.
pub type Result<T> = std::result::Result<T, FlexError>;
