use anyhow::Result;
use clap::{Parser, Subcommand};

use seedlock::cli::{
    handle_decrypt_command, handle_encrypt_command, handle_inspect_command, DecryptArgs,
    EncryptArgs, InspectArgs,
};

#[derive(Parser)]
#[command(
    name = "seedlock",
    author = "Kaylee Beyene",
    version,
    about = "Password-based encryption for wallet secrets at rest",
    long_about = "seedlock encrypts wallet secrets (mnemonics, private keys) under a \
                  passphrase using PBKDF2 key derivation and AES-256-CBC, producing a \
                  self-contained envelope string suitable for at-rest storage. It also \
                  decrypts envelopes produced before the current format existed."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a secret into an envelope
    Encrypt(EncryptArgs),

    /// Decrypt an envelope back into the secret
    #[command(alias = "open")]
    Decrypt(DecryptArgs),

    /// Classify an envelope without decrypting it
    Inspect(InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt(args) => handle_encrypt_command(args)?,
        Commands::Decrypt(args) => handle_decrypt_command(args)?,
        Commands::Inspect(args) => handle_inspect_command(args)?,
    }

    Ok(())
}
