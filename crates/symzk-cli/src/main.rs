//! # symzk CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use symzk_cli::config::OperatorConfig;
use symzk_cli::profiles::{run_profiles, ProfilesArgs};
use symzk_cli::prove::{run_prove, ProveArgs};
use symzk_cli::verify::{run_verify, VerifyArgs};

/// symzk — prove symmetric decryption without revealing the key.
///
/// Generates zero-knowledge proofs that a plaintext is the decryption of a
/// ChaCha20 or AES-CTR ciphertext chunk, and verifies them.
#[derive(Parser, Debug)]
#[command(name = "symzk", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the operator configuration file (YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prove the decryption of one ciphertext chunk.
    Prove(ProveArgs),

    /// Verify a proof against a ciphertext chunk.
    Verify(VerifyArgs),

    /// Print the circuit profile table.
    Profiles(ProfilesArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match OperatorConfig::load(cli.config.as_deref()) {
        Ok(config) => match &cli.command {
            Commands::Prove(args) => run_prove(args, &config).await,
            Commands::Verify(args) => run_verify(args, &config).await,
            Commands::Profiles(args) => run_profiles(args),
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symzk_core::EncryptionAlgorithm;

    #[test]
    fn cli_parse_prove() {
        let cli = Cli::try_parse_from([
            "symzk",
            "prove",
            "--algorithm",
            "aes-256-ctr",
            "--key",
            "00112233",
            "--iv",
            "0xaabb",
            "--offset",
            "7",
            "--ciphertext",
            "ff",
        ])
        .unwrap();
        let Commands::Prove(args) = cli.command else {
            panic!("expected prove");
        };
        assert_eq!(args.algorithm, EncryptionAlgorithm::Aes256Ctr);
        assert_eq!(args.key.0, vec![0x00, 0x11, 0x22, 0x33]);
        assert_eq!(args.iv.0, vec![0xaa, 0xbb]);
        assert_eq!(args.offset, 7);
        assert!(args.out.is_none());
    }

    #[test]
    fn cli_parse_rejects_unknown_algorithm() {
        let result = Cli::try_parse_from([
            "symzk", "prove", "-a", "rc4", "--key", "00", "--iv", "00", "--ciphertext", "00",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_rejects_bad_hex() {
        let result = Cli::try_parse_from([
            "symzk", "verify", "--proof", "p.json", "--ciphertext", "xyz",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "symzk", "-vv", "profiles", "--config", "symzk.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("symzk.yaml")));
        assert!(matches!(cli.command, Commands::Profiles(_)));
    }

    #[test]
    fn cli_parse_offset_defaults_to_zero() {
        let cli = Cli::try_parse_from([
            "symzk", "prove", "-a", "chacha20", "--key", "01", "--iv", "02", "--ciphertext", "03",
        ])
        .unwrap();
        let Commands::Prove(args) = cli.command else {
            panic!("expected prove");
        };
        assert_eq!(args.offset, 0);
        assert_eq!(args.ciphertext.0, vec![0x03]);
    }
}
