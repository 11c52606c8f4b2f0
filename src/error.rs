//! Custom error types for seedlock
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.
//!
//! Note that a failed decryption is deliberately NOT an error: wrong
//! passphrases and corrupted envelopes surface as `None` from
//! [`crate::crypto::decrypt`] so that callers cannot distinguish the two.
//! The variants here cover the encrypt precondition, internal cipher/KDF
//! faults, and CLI plumbing.

use thiserror::Error;

/// The main error type for seedlock operations
#[derive(Error, Debug)]
pub enum SeedlockError {
    /// Validation errors for caller-supplied input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal cipher or key-derivation faults
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Decryption did not produce a plausible plaintext.
    ///
    /// Carries no detail on purpose: wrong passphrase and corrupted data
    /// must render identically to the user.
    #[error("wrong passphrase or corrupted data")]
    Decryption,

    /// Passphrase collection errors (prompt or file)
    #[error("Passphrase error: {0}")]
    Passphrase(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl SeedlockError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a decryption failure
    pub fn is_decryption(&self) -> bool {
        matches!(self, Self::Decryption)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SeedlockError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for seedlock operations
pub type SeedlockResult<T> = Result<T, SeedlockError>;
