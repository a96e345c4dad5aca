//! Error types for the storage layer.

use thiserror::Error;

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing the credential slot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file could not be read or written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Slot file contents could not be serialized.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
