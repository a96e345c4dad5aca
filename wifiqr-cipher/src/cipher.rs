//! Keystream derivation and the XOR transform pair.

use crate::seed::ObfuscationSeed;
use base64::{engine::general_purpose::STANDARD, Engine};
use sha2::{Digest, Sha256};

/// XORs `data` against `key`, cycling the key when `data` is longer.
///
/// Symmetric: applying it twice with the same key is the identity. An
/// empty key leaves the data unchanged.
pub fn xor_transform(data: &[u8], key: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }
    data.iter()
        .enumerate()
        .map(|(i, &b)| b ^ key[i % key.len()])
        .collect()
}

/// Reversible password disguise keyed by seed + network name.
#[derive(Clone, Debug, Default)]
pub struct Obfuscator {
    seed: ObfuscationSeed,
}

impl Obfuscator {
    /// Creates an obfuscator with an injected seed.
    pub fn new(seed: ObfuscationSeed) -> Self {
        Self { seed }
    }

    /// Creates an obfuscator with the built-in release seed.
    pub fn with_default_seed() -> Self {
        Self::default()
    }

    /// Derives the keystream for a network name.
    ///
    /// The base material is the UTF-8 byte sequence of the seed
    /// concatenated with the ssid; each byte is then mixed with a SHA-256
    /// digest of that same concatenation so every keystream position
    /// depends on the full ssid. Without the mix, a password shorter than
    /// the seed would only ever meet seed bytes and two networks' blobs
    /// would line up byte for byte.
    ///
    /// An empty ssid is permitted and yields a seed-only key; ssid
    /// validation belongs to the entry form, not here.
    pub fn derive_key(&self, ssid: &str) -> Vec<u8> {
        let mut combined = Vec::with_capacity(self.seed.as_str().len() + ssid.len());
        combined.extend_from_slice(self.seed.as_str().as_bytes());
        combined.extend_from_slice(ssid.as_bytes());

        let digest = Sha256::digest(&combined);
        combined
            .iter()
            .enumerate()
            .map(|(i, &b)| b ^ digest[i % digest.len()])
            .collect()
    }

    /// Obfuscates a password for storage, returning a base64 blob.
    ///
    /// Deterministic: identical arguments always produce identical output.
    pub fn obfuscate(&self, password: &str, ssid: &str) -> String {
        let key = self.derive_key(ssid);
        let xored = xor_transform(password.as_bytes(), &key);
        STANDARD.encode(xored)
    }

    /// Recovers a password from a stored blob.
    ///
    /// Returns `None` when the blob is not valid base64 — callers treat
    /// that as "no saved password". A well-formed blob deobfuscated under
    /// the wrong ssid decodes to garbage text, not `None`: the transform
    /// has no integrity check, so it cannot tell a wrong key from a right
    /// one. Bytes that are not valid UTF-8 after the transform (only
    /// possible under a wrong key) are replaced rather than rejected.
    pub fn deobfuscate(&self, encoded: &str, ssid: &str) -> Option<String> {
        let bytes = STANDARD.decode(encoded).ok()?;
        let key = self.derive_key(ssid);
        let plain = xor_transform(&bytes, &key);
        Some(String::from_utf8_lossy(&plain).into_owned())
    }
}
