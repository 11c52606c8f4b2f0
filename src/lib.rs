//! seedlock - Password-based encryption for wallet secrets at rest
//!
//! This library protects funds-bearing secrets (mnemonics, private keys)
//! with a passphrase: PBKDF2-HMAC-SHA256 key derivation and AES-256-CBC,
//! serialized as a self-contained `hex(salt):hex(iv):hex(ciphertext)`
//! envelope string. Envelopes written before this format existed still
//! decrypt through a legacy path.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `crypto`: key derivation, the envelope format, and the two public
//!   operations [`encrypt`] and [`decrypt`]
//! - `error`: custom error types
//! - `cli`: command handlers for the companion binary
//!
//! # Example
//!
//! ```rust,ignore
//! use seedlock::{decrypt, encrypt};
//!
//! let envelope = encrypt("my secret mnemonic phrase", "correct-passphrase")?;
//! assert_eq!(
//!     decrypt(&envelope, "correct-passphrase").as_deref(),
//!     Some("my secret mnemonic phrase"),
//! );
//! assert_eq!(decrypt(&envelope, "wrong-passphrase"), None);
//! ```
//!
//! Both operations are pure, synchronous computations with no shared
//! state; they may run concurrently without coordination. A call is
//! CPU-bound for the duration of the fixed-cost key derivation, so
//! callers with a latency-sensitive thread should run them elsewhere.

pub mod cli;
pub mod crypto;
pub mod error;

pub use crypto::{decrypt, encrypt};
pub use error::{SeedlockError, SeedlockResult};
