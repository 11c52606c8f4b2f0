//! The `decrypt` command
//!
//! Reads an envelope from an argument, a file, or stdin, collects a
//! passphrase, and prints or writes the recovered secret. Wrong
//! passphrases and corrupted envelopes are reported with a single
//! generic message; the two are indistinguishable by design.

use std::path::PathBuf;

use clap::Args;

use crate::cli::io::{passphrase_from_file, prompt_passphrase, read_text, write_text};
use crate::crypto;
use crate::error::{SeedlockError, SeedlockResult};

/// Arguments for `seedlock decrypt`
#[derive(Args)]
pub struct DecryptArgs {
    /// The envelope string to decrypt
    #[arg(value_name = "ENVELOPE")]
    pub envelope: Option<String>,

    /// Read the envelope from a file instead of an argument or stdin
    #[arg(short, long, value_name = "FILE", conflicts_with = "envelope")]
    pub input: Option<PathBuf>,

    /// Write the secret to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Read the passphrase from the first line of a file instead of prompting
    #[arg(long, value_name = "FILE")]
    pub passphrase_file: Option<PathBuf>,
}

/// Handle the `decrypt` command
pub fn handle_decrypt_command(args: DecryptArgs) -> SeedlockResult<()> {
    let envelope = match args.envelope {
        Some(envelope) => envelope,
        None => read_text(args.input.as_deref())?,
    };

    let passphrase = match args.passphrase_file.as_deref() {
        Some(path) => passphrase_from_file(path)?,
        None => prompt_passphrase("Enter passphrase: ")?,
    };

    match crypto::decrypt(&envelope, &passphrase) {
        Some(secret) => write_text(args.output.as_deref(), &secret),
        None => Err(SeedlockError::Decryption),
    }
}
