//! The credential-to-QR-payload flow.
//!
//! Ties the domain crates together the way the entry form drives them:
//!
//! 1. **Submit**: validate the typed credential, persist it (password
//!    obfuscated) so the form can be pre-filled next time, and encode the
//!    payload text for the external QR renderer.
//! 2. **Restore**: on a return visit, recover the saved credential for
//!    prefill; an unreadable password blob degrades to ssid-only.
//!
//! Rendering the QR symbol, compositing a downloadable image, and print
//! triggering all happen outside this workspace; callers hand
//! [`Provisioned::payload`] to their renderer unmodified.
//!
//! # Example
//!
//! ```
//! use wifiqr_provision::Provisioner;
//! use wifiqr_store::MemoryBackend;
//!
//! let mut provisioner = Provisioner::with_defaults(MemoryBackend::new());
//! let out = provisioner.provision("HomeNet", "secret123").unwrap();
//! assert!(out.payload.contains("\"s\":\"HomeNet\""));
//! ```

use tracing::info;
use wifiqr_cipher::{ObfuscationSeed, Obfuscator};
use wifiqr_payload::{encode_payload, PayloadError};
use wifiqr_store::{CredentialBackend, CredentialSlot, SavedCredential, StoreError};
use wifiqr_types::{NetworkCredential, ProvisioningToken};

/// Result type for provisioning operations.
pub type ProvisionResult<T> = Result<T, ProvisionError>;

/// Errors surfaced by the provisioning flow.
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    /// The typed credential failed form validation.
    #[error(transparent)]
    Validation(#[from] wifiqr_types::Error),

    /// The credential slot could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The payload record could not be encoded.
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// The result of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provisioned {
    /// Display copy of the network name for the confirmation view.
    pub ssid: String,
    /// Payload text to hand to the QR renderer unmodified.
    pub payload: String,
}

/// Drives the submit and restore flows over a credential slot.
pub struct Provisioner<B: CredentialBackend> {
    slot: CredentialSlot<B>,
    token: ProvisioningToken,
}

impl<B: CredentialBackend> Provisioner<B> {
    /// Creates a provisioner with explicit seed and token configuration.
    pub fn new(backend: B, seed: ObfuscationSeed, token: ProvisioningToken) -> Self {
        Self {
            slot: CredentialSlot::new(backend, Obfuscator::new(seed)),
            token,
        }
    }

    /// Creates a provisioner with the release seed and placeholder token.
    pub fn with_defaults(backend: B) -> Self {
        Self::new(
            backend,
            ObfuscationSeed::default(),
            ProvisioningToken::default(),
        )
    }

    /// Handles a form submit: validate, persist, encode.
    ///
    /// Nothing is persisted when validation fails. The returned payload
    /// carries the plaintext password for the scanning device; only the
    /// slot holds the obfuscated form.
    pub fn provision(&mut self, ssid: &str, password: &str) -> ProvisionResult<Provisioned> {
        let credential = NetworkCredential::new(ssid, password)?;
        self.slot.save(&credential)?;

        let payload = encode_payload(credential.ssid(), credential.password(), &self.token)?;
        info!(ssid = credential.ssid(), "provisioning payload generated");

        Ok(Provisioned {
            ssid: credential.ssid().to_string(),
            payload,
        })
    }

    /// Recovers the last-used credential for form prefill.
    pub fn restore(&self) -> ProvisionResult<Option<SavedCredential>> {
        Ok(self.slot.load()?)
    }
}
