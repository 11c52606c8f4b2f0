//! Key derivation using PBKDF2
//!
//! Derives encryption keys from user passphrases using PBKDF2-HMAC-SHA256
//! with a deliberately high iteration count to slow brute-force guessing.

use hmac::Hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{SeedlockError, SeedlockResult};

/// PBKDF2 iteration count.
///
/// Protocol constant. Every stored envelope was produced with this value
/// and the envelope format carries no version field, so changing it makes
/// previously stored envelopes undecryptable.
pub const PBKDF2_ROUNDS: u32 = 250_000;

/// Size of the derived key in bytes (256 bits, AES-256)
pub const KEY_SIZE: usize = 32;

/// Size of the key-derivation salt in bytes
pub const SALT_SIZE: usize = 16;

/// A derived encryption key
///
/// Zeroized on drop so key material does not linger in memory.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

// Don't print the key material in Debug output
impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey").field("len", &KEY_SIZE).finish()
    }
}

/// Derive an encryption key from a passphrase and salt
///
/// Deterministic: the same passphrase and salt always produce the same
/// key. All randomness is injected through the externally supplied salt.
pub fn derive_key(passphrase: &str, salt: &[u8]) -> SeedlockResult<DerivedKey> {
    let mut key = [0u8; KEY_SIZE];

    pbkdf2::pbkdf2::<Hmac<Sha256>>(passphrase.as_bytes(), salt, PBKDF2_ROUNDS, &mut key)
        .map_err(|e| SeedlockError::Encryption(format!("Key derivation failed: {}", e)))?;

    Ok(DerivedKey { key })
}
