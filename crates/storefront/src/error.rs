//! Error types for the keyed local store.
//!
//! Store backends return typed errors to their direct callers. The state
//! managers never propagate these to consumers: a failed read loads as an
//! empty collection and a failed write is logged and absorbed, so manager
//! operations stay infallible.

use thiserror::Error;

/// Errors raised by a keyed store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying filesystem operation failed.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key cannot be mapped to a record location by this backend.
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = StoreError::InvalidKey("cart/../etc".to_owned());
        assert_eq!(err.to_string(), "invalid store key: \"cart/../etc\"");
    }
}
