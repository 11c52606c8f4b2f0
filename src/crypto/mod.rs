//! Cryptographic core for seedlock
//!
//! Provides password-based AES-256-CBC encryption with PBKDF2 key
//! derivation for protecting wallet secrets at rest, including the
//! envelope wire format and the legacy decode path.

pub mod encryption;
pub mod envelope;
pub mod key_derivation;
mod legacy;
pub mod secure_memory;

pub use encryption::{decrypt, encrypt, MIN_PLAINTEXT_LEN};
pub use envelope::{Envelope, StructuredEnvelope, IV_SIZE};
pub use key_derivation::{derive_key, DerivedKey, KEY_SIZE, PBKDF2_ROUNDS, SALT_SIZE};
pub use secure_memory::SecureString;
