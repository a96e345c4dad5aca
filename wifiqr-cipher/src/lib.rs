//! Password obfuscation for locally persisted Wi-Fi credentials.
//!
//! This is deliberately *not* encryption: it is a reversible disguise that
//! keeps a stored password out of casual view. Anyone with the seed (which
//! ships in the binary) can invert it. Use it only for the local
//! last-used-credential slot, never for anything transmitted.
//!
//! The keystream is derived from the seed concatenated with the network
//! name, so two stored networks never share a keystream even though the
//! seed is fixed. Recovery therefore requires the *same* ssid that was
//! used to obfuscate; a different ssid yields garbage, not an error.
//!
//! All operations are pure and synchronous. Decode failures surface as
//! `None`, never as a panic or error value.
//!
//! # Example
//!
//! ```
//! use wifiqr_cipher::Obfuscator;
//!
//! let cipher = Obfuscator::with_default_seed();
//! let blob = cipher.obfuscate("Password1", "MyWifi");
//! assert_eq!(cipher.deobfuscate(&blob, "MyWifi").as_deref(), Some("Password1"));
//! ```

mod cipher;
mod seed;

pub use cipher::{xor_transform, Obfuscator};
pub use seed::{ObfuscationSeed, DEFAULT_SEED};
