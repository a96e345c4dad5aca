//! Last-used credential storage for wifiqr.
//!
//! Keeps the single most-recent credential so the entry form can be
//! pre-filled on return visits. The ssid is stored in plain text, the
//! password only in its obfuscated form; the plaintext password never
//! touches disk.
//!
//! # Architecture
//!
//! - [`CredentialBackend`] abstracts the string key/value target
//!   (a JSON file in real use, in-memory for tests)
//! - [`CredentialSlot`] owns the obfuscate-on-save / deobfuscate-on-load
//!   flow over the two logical keys
//!
//! A blob that no longer decodes (corrupted file, seed change) degrades
//! to "ssid only" rather than an error — a stale prefill is never worth
//! failing the form for.

mod backend;
mod error;
mod slot;

pub use backend::{CredentialBackend, FileBackend, MemoryBackend};
pub use error::{StoreError, StoreResult};
pub use slot::{CredentialSlot, SavedCredential, PASSWORD_KEY, SSID_KEY};
