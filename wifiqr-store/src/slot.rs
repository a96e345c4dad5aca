//! The single most-recent credential slot.

use crate::backend::CredentialBackend;
use crate::error::StoreResult;
use tracing::{debug, warn};
use wifiqr_cipher::Obfuscator;
use wifiqr_types::NetworkCredential;

/// Logical key holding the plain-text network name.
pub const SSID_KEY: &str = "wifi_ssid";

/// Logical key holding the obfuscated password blob.
pub const PASSWORD_KEY: &str = "wifi_password";

/// What the form can be pre-filled with on a return visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedCredential {
    /// The last-used network name.
    pub ssid: String,
    /// The recovered password, or `None` when the stored blob did not
    /// decode (corrupted value, ssid changed out from under it).
    pub password: Option<String>,
}

/// Owns the obfuscate-on-save / deobfuscate-on-load flow.
///
/// The password blob is keyed by the ssid stored next to it; the slot
/// always writes both together so they cannot drift apart.
#[derive(Debug)]
pub struct CredentialSlot<B: CredentialBackend> {
    backend: B,
    cipher: Obfuscator,
}

impl<B: CredentialBackend> CredentialSlot<B> {
    /// Creates a slot over a backend with an injected cipher.
    pub fn new(backend: B, cipher: Obfuscator) -> Self {
        Self { backend, cipher }
    }

    /// Persists a credential, obfuscating the password under its ssid.
    pub fn save(&mut self, credential: &NetworkCredential) -> StoreResult<()> {
        let blob = self
            .cipher
            .obfuscate(credential.password(), credential.ssid());
        self.backend.set(SSID_KEY, credential.ssid())?;
        self.backend.set(PASSWORD_KEY, &blob)?;
        debug!(ssid = credential.ssid(), "credential slot updated");
        Ok(())
    }

    /// Loads the saved credential for form prefill.
    ///
    /// Returns `None` when nothing was ever saved. A present ssid with a
    /// missing or undecodable password blob still yields the ssid, with
    /// `password: None` — the caller prefills the name and leaves the
    /// password field empty.
    pub fn load(&self) -> StoreResult<Option<SavedCredential>> {
        let Some(ssid) = self.backend.get(SSID_KEY)? else {
            return Ok(None);
        };

        let password = match self.backend.get(PASSWORD_KEY)? {
            Some(blob) => {
                let recovered = self.cipher.deobfuscate(&blob, &ssid);
                if recovered.is_none() {
                    warn!(ssid = %ssid, "stored password blob did not decode, prefilling ssid only");
                }
                recovered
            }
            None => None,
        };

        debug!(ssid = %ssid, has_password = password.is_some(), "credential slot loaded");
        Ok(Some(SavedCredential { ssid, password }))
    }

    /// Consumes the slot, returning the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }
}
