//! The `inspect` command
//!
//! Classifies an envelope without decrypting it: reports whether it is
//! the current three-segment format or a legacy blob, and the segment
//! sizes. Requires no passphrase and touches no key material.

use std::path::PathBuf;

use clap::Args;

use crate::cli::io::read_text;
use crate::crypto::Envelope;
use crate::error::{SeedlockError, SeedlockResult};

/// Arguments for `seedlock inspect`
#[derive(Args)]
pub struct InspectArgs {
    /// The envelope string to inspect
    #[arg(value_name = "ENVELOPE")]
    pub envelope: Option<String>,

    /// Read the envelope from a file instead of an argument or stdin
    #[arg(short, long, value_name = "FILE", conflicts_with = "envelope")]
    pub input: Option<PathBuf>,
}

/// Handle the `inspect` command
pub fn handle_inspect_command(args: InspectArgs) -> SeedlockResult<()> {
    let input = match args.envelope {
        Some(envelope) => envelope,
        None => read_text(args.input.as_deref())?,
    };

    match Envelope::parse(&input) {
        Some(Envelope::Structured(env)) => {
            println!("Format:     structured (salt:iv:ciphertext)");
            println!("Salt:       {} bytes", env.salt.len());
            println!("IV:         {} bytes", env.iv.len());
            println!("Ciphertext: {} bytes", env.ciphertext.len());
        }
        Some(Envelope::Legacy(raw)) => {
            println!("Format:     legacy (pre-envelope blob)");
            println!("Length:     {} characters", raw.chars().count());
            println!();
            println!("Whether it decrypts can only be determined by trying a passphrase.");
        }
        None => {
            return Err(SeedlockError::Validation(
                "malformed envelope: three segments but not valid hex".to_string(),
            ));
        }
    }

    Ok(())
}
