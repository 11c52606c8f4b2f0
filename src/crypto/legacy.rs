//! Legacy envelope decoding
//!
//! Secrets encrypted before the three-segment envelope format exist as a
//! single base64 string with no internal structure of ours: the decoded
//! bytes carry the ASCII marker `Salted__`, an 8-byte salt, and the
//! ciphertext, with key and IV expanded from the passphrase by the
//! MD5-based OpenSSL `EVP_BytesToKey` routine (AES-256-CBC, PKCS#7).
//! This module only reads the format; nothing writes it anymore.

use base64::{engine::general_purpose::STANDARD, Engine};
use md5::{Digest, Md5};

use crate::crypto::encryption::cbc_open;
use crate::crypto::envelope::IV_SIZE;
use crate::crypto::key_derivation::KEY_SIZE;

/// ASCII marker prefixing the decoded legacy payload
const SALT_MARKER: &[u8; 8] = b"Salted__";

/// Size of the embedded legacy salt in bytes
const LEGACY_SALT_SIZE: usize = 8;

/// Attempt to decrypt a pre-format blob with a passphrase
///
/// Returns `None` unless the input is a well-formed legacy payload that
/// decrypts to plausible text under the passphrase. Wrong passphrase,
/// malformed base64, a missing salt marker, and implausibly short
/// output are all indistinguishable to the caller.
pub(crate) fn decrypt_legacy(raw: &str, passphrase: &str) -> Option<String> {
    let payload = STANDARD.decode(raw.trim()).ok()?;

    if payload.len() < SALT_MARKER.len() + LEGACY_SALT_SIZE {
        return None;
    }
    if &payload[..SALT_MARKER.len()] != SALT_MARKER {
        return None;
    }

    let salt = &payload[SALT_MARKER.len()..SALT_MARKER.len() + LEGACY_SALT_SIZE];
    let ciphertext = &payload[SALT_MARKER.len() + LEGACY_SALT_SIZE..];

    let (key, iv) = evp_bytes_to_key(passphrase.as_bytes(), salt);
    cbc_open(&key, &iv, ciphertext)
}

/// OpenSSL `EVP_BytesToKey` with MD5 and a single round
///
/// Expands a passphrase and salt into a 32-byte key and 16-byte IV:
/// `D_1 = MD5(passphrase || salt)`, `D_n = MD5(D_{n-1} || passphrase ||
/// salt)`, concatenated until 48 bytes are available.
fn evp_bytes_to_key(passphrase: &[u8], salt: &[u8]) -> ([u8; KEY_SIZE], [u8; IV_SIZE]) {
    let mut material: Vec<u8> = Vec::with_capacity(KEY_SIZE + IV_SIZE + 16);
    let mut digest: Vec<u8> = Vec::new();

    while material.len() < KEY_SIZE + IV_SIZE {
        let mut hasher = Md5::new();
        hasher.update(&digest);
        hasher.update(passphrase);
        hasher.update(salt);
        digest = hasher.finalize().to_vec();
        material.extend_from_slice(&digest);
    }

    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&material[..KEY_SIZE]);
    let mut iv = [0u8; IV_SIZE];
    iv.copy_from_slice(&material[KEY_SIZE..KEY_SIZE + IV_SIZE]);

    (key, iv)
}
