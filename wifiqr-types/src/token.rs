//! Provisioning token carried in the QR payload.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder token used until a real per-device token source exists.
/// The companion firmware currently accepts this literal.
pub const DEFAULT_PROVISIONING_TOKEN: &str = "000000000000";

/// An opaque provisioning token.
///
/// The payload codec does not interpret or validate this value; it is
/// injected configuration so a real token source can be substituted
/// without touching the codec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProvisioningToken(String);

impl ProvisioningToken {
    /// Wraps an externally sourced token value.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProvisioningToken {
    fn default() -> Self {
        Self(DEFAULT_PROVISIONING_TOKEN.to_string())
    }
}

impl fmt::Display for ProvisioningToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProvisioningToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
