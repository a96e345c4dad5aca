//! QR provisioning payload codec.
//!
//! Builds the JSON record the companion device expects to find inside the
//! QR symbol. This is the wire contract with the scanner firmware: three
//! short keys, nothing else. The payload carries the *plaintext* password
//! on purpose — the scanning device has no access to the obfuscated local
//! slot and needs the real value to join the network.
//!
//! The caller hands the encoded string to the external QR renderer
//! unmodified; this crate never touches rendering.

use serde::{Deserialize, Serialize};
use wifiqr_types::ProvisioningToken;

/// Result type for payload operations.
pub type PayloadResult<T> = Result<T, PayloadError>;

/// Errors that can occur while encoding or decoding a payload.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The record could not be serialized or parsed as JSON.
    #[error("payload serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The provisioning record embedded in the QR symbol.
///
/// Field names are the single letters the firmware parses; they are part
/// of the wire contract and must not change. Declaration order fixes the
/// serialized key order (`s`, `p`, `t`) for reproducibility, though the
/// consumer does not depend on ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayload {
    /// Network name.
    pub s: String,
    /// Plaintext password.
    pub p: String,
    /// Provisioning token, passed through opaquely.
    pub t: String,
}

impl QrPayload {
    /// Builds a payload record from its three parts.
    pub fn new(ssid: &str, password: &str, token: &ProvisioningToken) -> Self {
        Self {
            s: ssid.to_string(),
            p: password.to_string(),
            t: token.as_str().to_string(),
        }
    }

    /// Serializes the record to the JSON text placed in the QR symbol.
    pub fn encode(&self) -> PayloadResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a payload back from JSON text.
    ///
    /// The firmware does the real parsing on-device; this exists for
    /// tests and diagnostics on the generating side.
    pub fn decode(text: &str) -> PayloadResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Encodes a provisioning payload in one step.
pub fn encode_payload(
    ssid: &str,
    password: &str,
    token: &ProvisioningToken,
) -> PayloadResult<String> {
    QrPayload::new(ssid, password, token).encode()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_serialize_in_declaration_order() {
        let token = ProvisioningToken::default();
        let text = encode_payload("a", "b", &token).unwrap();
        let s = text.find("\"s\"").unwrap();
        let p = text.find("\"p\"").unwrap();
        let t = text.find("\"t\"").unwrap();
        assert!(s < p && p < t);
    }
}
