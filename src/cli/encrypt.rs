//! The `encrypt` command
//!
//! Reads a secret from a file or stdin, collects a passphrase, and
//! prints or writes the resulting envelope.

use std::path::PathBuf;

use clap::Args;

use crate::cli::io::{passphrase_from_file, prompt_new_passphrase, read_text, write_text};
use crate::crypto;
use crate::error::SeedlockResult;

/// Arguments for `seedlock encrypt`
#[derive(Args)]
pub struct EncryptArgs {
    /// Read the secret from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write the envelope to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Read the passphrase from the first line of a file instead of prompting
    #[arg(long, value_name = "FILE")]
    pub passphrase_file: Option<PathBuf>,
}

/// Handle the `encrypt` command
pub fn handle_encrypt_command(args: EncryptArgs) -> SeedlockResult<()> {
    let plaintext = read_text(args.input.as_deref())?;

    let passphrase = match args.passphrase_file.as_deref() {
        Some(path) => passphrase_from_file(path)?,
        None => prompt_new_passphrase()?,
    };

    let envelope = crypto::encrypt(&plaintext, &passphrase)?;

    write_text(args.output.as_deref(), &envelope)?;

    Ok(())
}
