//! Password-based encryption and decryption of secrets
//!
//! `encrypt` produces a self-describing envelope: a fresh random salt and
//! IV plus the AES-256-CBC ciphertext, hex-encoded and colon-joined.
//! `decrypt` re-derives the key from the embedded salt and reverses the
//! operation. Inputs that predate the envelope format are routed to the
//! legacy decoder.
//!
//! A failed decryption returns `None`. Wrong passphrases and corrupted
//! envelopes are indistinguishable to the caller; no error detail leaks
//! which one occurred.

use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::crypto::envelope::{Envelope, StructuredEnvelope, IV_SIZE};
use crate::crypto::key_derivation::{derive_key, SALT_SIZE};
use crate::crypto::legacy;
use crate::error::{SeedlockError, SeedlockResult};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Minimum plaintext length in characters.
///
/// Encrypting shorter input is rejected outright; decrypt applies the
/// same floor as a plausibility check on the recovered text.
pub const MIN_PLAINTEXT_LEN: usize = 10;

/// Encrypt a secret under a passphrase
///
/// Generates a fresh random salt and IV on every call, so encrypting the
/// same secret twice never yields the same envelope. Returns the
/// colon-joined hex envelope string.
///
/// # Errors
///
/// Returns [`SeedlockError::Validation`] if the plaintext is shorter
/// than [`MIN_PLAINTEXT_LEN`] characters. The check runs before any
/// randomness is drawn or cipher state created.
pub fn encrypt(plaintext: &str, passphrase: &str) -> SeedlockResult<String> {
    if plaintext.chars().count() < MIN_PLAINTEXT_LEN {
        return Err(SeedlockError::Validation("data too short".to_string()));
    }

    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);

    let mut iv = [0u8; IV_SIZE];
    OsRng.fill_bytes(&mut iv);

    let key = derive_key(passphrase, &salt)?;

    let cipher = Aes256CbcEnc::new_from_slices(key.as_bytes(), &iv)
        .map_err(|e| SeedlockError::Encryption(format!("Failed to create cipher: {}", e)))?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    let envelope = StructuredEnvelope {
        salt: salt.to_vec(),
        iv: iv.to_vec(),
        ciphertext,
    };

    Ok(envelope.encode())
}

/// Decrypt an envelope with a passphrase
///
/// Accepts both the current three-segment format and legacy pre-format
/// blobs. Returns `None` for a wrong passphrase, corrupted or malformed
/// data, or a recovered text shorter than [`MIN_PLAINTEXT_LEN`]
/// characters; never panics or errors for those cases.
pub fn decrypt(envelope: &str, passphrase: &str) -> Option<String> {
    match Envelope::parse(envelope)? {
        Envelope::Structured(env) => decrypt_structured(&env, passphrase),
        Envelope::Legacy(raw) => legacy::decrypt_legacy(&raw, passphrase),
    }
}

/// Decrypt a structured envelope by re-deriving the key from its salt
fn decrypt_structured(env: &StructuredEnvelope, passphrase: &str) -> Option<String> {
    let key = derive_key(passphrase, &env.salt).ok()?;
    cbc_open(key.as_bytes(), &env.iv, &env.ciphertext)
}

/// AES-256-CBC decrypt, then validate the result as plausible plaintext
///
/// Shared by the structured and legacy paths. Bad padding, a wrong-length
/// key or IV, non-UTF-8 output, and output below the length floor all
/// collapse to `None`.
pub(crate) fn cbc_open(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Option<String> {
    let cipher = Aes256CbcDec::new_from_slices(key, iv).ok()?;
    let plaintext = cipher.decrypt_padded_vec_mut::<Pkcs7>(ciphertext).ok()?;

    let text = String::from_utf8(plaintext).ok()?;
    if text.chars().count() < MIN_PLAINTEXT_LEN {
        // Wrong passphrases occasionally survive padding and UTF-8
        // checks; real secrets are never this short.
        return None;
    }

    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "my secret mnemonic phrase";
    const PASSPHRASE: &str = "correct-passphrase";

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let envelope = encrypt(SECRET, PASSPHRASE).unwrap();
        assert_eq!(decrypt(&envelope, PASSPHRASE).as_deref(), Some(SECRET));
    }

    #[test]
    fn test_round_trip_unicode() {
        let plaintext = "pièce de théâtre";
        let envelope = encrypt(plaintext, PASSPHRASE).unwrap();
        assert_eq!(decrypt(&envelope, PASSPHRASE).as_deref(), Some(plaintext));
    }

    #[test]
    fn test_wrong_passphrase_returns_none() {
        let envelope = encrypt(SECRET, PASSPHRASE).unwrap();
        assert_eq!(decrypt(&envelope, "wrong-passphrase"), None);
    }

    #[test]
    fn test_plaintext_too_short_rejected() {
        let err = encrypt("short", PASSPHRASE).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("data too short"));

        // Nine characters still fails; ten is the boundary.
        assert!(encrypt("123456789", PASSPHRASE).is_err());
        assert!(encrypt("exactly10!", PASSPHRASE).is_ok());
    }

    #[test]
    fn test_envelope_shape() {
        let envelope = encrypt(SECRET, PASSPHRASE).unwrap();
        let parts: Vec<&str> = envelope.split(':').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), SALT_SIZE * 2);
        assert_eq!(parts[1].len(), IV_SIZE * 2);
        assert!(!parts[2].is_empty());
        for part in parts {
            assert!(part.chars().all(|c| c.is_ascii_hexdigit()));
            assert_eq!(part, part.to_lowercase());
        }
    }

    #[test]
    fn test_fresh_salt_and_iv_per_call() {
        let envelope1 = encrypt(SECRET, PASSPHRASE).unwrap();
        let envelope2 = encrypt(SECRET, PASSPHRASE).unwrap();

        // Identical inputs, different envelopes
        assert_ne!(envelope1, envelope2);

        assert_eq!(decrypt(&envelope1, PASSPHRASE).as_deref(), Some(SECRET));
        assert_eq!(decrypt(&envelope2, PASSPHRASE).as_deref(), Some(SECRET));
    }

    #[test]
    fn test_corrupted_ciphertext_returns_none() {
        let envelope = encrypt(SECRET, PASSPHRASE).unwrap();

        // Flip the final hex character of the ciphertext segment.
        let mut corrupted: Vec<char> = envelope.chars().collect();
        let last = corrupted.len() - 1;
        corrupted[last] = if corrupted[last] == '0' { '1' } else { '0' };
        let corrupted: String = corrupted.into_iter().collect();

        assert_ne!(corrupted, envelope);
        assert_eq!(decrypt(&corrupted, PASSPHRASE), None);
    }

    #[test]
    fn test_malformed_hex_returns_none() {
        // Three segments, invalid hex: never falls through to legacy.
        assert_eq!(decrypt("zz:aabb:ccdd", PASSPHRASE), None);
    }

    #[test]
    fn test_truncated_envelope_returns_none() {
        let envelope = encrypt(SECRET, PASSPHRASE).unwrap();
        // Dropping a segment changes the shape, routing it to the legacy
        // path, where it is not valid either.
        let truncated = envelope.rsplit_once(':').unwrap().0;
        assert_eq!(decrypt(truncated, PASSPHRASE), None);
    }

    #[test]
    fn test_garbage_input_returns_none() {
        assert_eq!(decrypt("not an envelope at all", PASSPHRASE), None);
        assert_eq!(decrypt("", PASSPHRASE), None);
    }
}
