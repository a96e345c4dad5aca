//! Core type definitions for wifiqr.
//!
//! This crate defines the shared domain types used by the cipher, payload,
//! and storage layers:
//! - Validated network credentials (ssid + password)
//! - Opaque provisioning tokens
//!
//! Anything device- or UI-specific (QR rendering, image export, print)
//! belongs to the embedding application, not here.

mod credential;
mod token;

pub use credential::{NetworkCredential, MIN_PASSWORD_LEN};
pub use token::{ProvisioningToken, DEFAULT_PROVISIONING_TOKEN};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing domain types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("network name must not be empty")]
    EmptySsid,

    #[error("password too short: minimum {minimum} characters, got {actual}")]
    PasswordTooShort { minimum: usize, actual: usize },
}
