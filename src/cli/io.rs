//! Shared input/output plumbing for CLI commands
//!
//! Covers reading secrets and envelopes from files or stdin, writing
//! results, and collecting passphrases either interactively (hidden
//! input) or from a file for scripted use.

use std::io::Read;
use std::path::Path;

use crate::crypto::SecureString;
use crate::error::{SeedlockError, SeedlockResult};

/// Read text from a file, or from stdin when no path is given
///
/// Trailing newlines are stripped so that `echo secret | seedlock ...`
/// and files ending in a newline behave the same as exact input.
pub(crate) fn read_text(path: Option<&Path>) -> SeedlockResult<String> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(raw.trim_end_matches(['\r', '\n']).to_string())
}

/// Write text to a file, or to stdout when no path is given
pub(crate) fn write_text(path: Option<&Path>, contents: &str) -> SeedlockResult<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{}\n", contents))?;
        }
        None => println!("{}", contents),
    }

    Ok(())
}

/// Read a passphrase from the first line of a file
pub(crate) fn passphrase_from_file(path: &Path) -> SeedlockResult<SecureString> {
    let contents = std::fs::read_to_string(path)?;
    let line = contents.lines().next().unwrap_or("");

    if line.is_empty() {
        return Err(SeedlockError::Passphrase(format!(
            "Passphrase file is empty: {}",
            path.display()
        )));
    }

    Ok(SecureString::new(line))
}

/// Prompt for a passphrase (hidden input)
pub(crate) fn prompt_passphrase(prompt: &str) -> SeedlockResult<SecureString> {
    let passphrase = rpassword::prompt_password(prompt)
        .map_err(|e| SeedlockError::Passphrase(format!("Failed to read passphrase: {}", e)))?;

    Ok(SecureString::new(passphrase))
}

/// Prompt for a new passphrase with confirmation
pub(crate) fn prompt_new_passphrase() -> SeedlockResult<SecureString> {
    loop {
        let pass1 = prompt_passphrase("Enter passphrase: ")?;

        if pass1.is_empty() {
            println!("Passphrase must not be empty. Please try again.");
            continue;
        }

        let pass2 = prompt_passphrase("Confirm passphrase: ")?;

        if pass1.as_str() != pass2.as_str() {
            println!("Passphrases do not match. Please try again.");
            continue;
        }

        return Ok(pass1);
    }
}
