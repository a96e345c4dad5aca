//! Obfuscation seed handling.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Seed value baked into released builds.
/// Changing it orphans every previously stored password blob.
pub const DEFAULT_SEED: &str = "43dad696-5039-4ed7-b79e-53307971f1cb";

/// Fixed key material for the obfuscation cipher.
///
/// Injected into [`Obfuscator`](crate::Obfuscator) at construction rather
/// than read from a global, so tests can substitute their own seed and
/// audits can see exactly where it flows.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ObfuscationSeed(String);

impl ObfuscationSeed {
    /// Wraps an explicit seed value.
    pub fn new(seed: impl Into<String>) -> Self {
        Self(seed.into())
    }

    /// Returns the seed text.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ObfuscationSeed {
    fn default() -> Self {
        Self(DEFAULT_SEED.to_string())
    }
}

impl std::fmt::Debug for ObfuscationSeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObfuscationSeed")
            .field("seed", &"[REDACTED]")
            .finish()
    }
}
