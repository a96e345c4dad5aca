//! Validated Wi-Fi network credentials.
//!
//! Validation here mirrors what the entry form enforces: a non-empty
//! network name and a minimum password length. Downstream layers can
//! therefore assume every `NetworkCredential` is well-formed.

use crate::{Error, Result};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// A validated Wi-Fi credential pair.
///
/// Held only in memory; the password is wiped when the value is dropped.
/// Persisted forms go through the obfuscation cipher first.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct NetworkCredential {
    ssid: String,
    password: String,
}

impl NetworkCredential {
    /// Creates a credential from raw form input.
    ///
    /// The ssid is trimmed before validation, matching the entry form.
    /// Password length is counted in characters, not bytes.
    pub fn new(ssid: &str, password: &str) -> Result<Self> {
        let ssid = ssid.trim();
        if ssid.is_empty() {
            return Err(Error::EmptySsid);
        }

        let len = password.chars().count();
        if len < MIN_PASSWORD_LEN {
            return Err(Error::PasswordTooShort {
                minimum: MIN_PASSWORD_LEN,
                actual: len,
            });
        }

        Ok(Self {
            ssid: ssid.to_string(),
            password: password.to_string(),
        })
    }

    /// Returns the network name.
    pub fn ssid(&self) -> &str {
        &self.ssid
    }

    /// Returns the plaintext password.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for NetworkCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkCredential")
            .field("ssid", &self.ssid)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
