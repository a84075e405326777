//! # Prove Subcommand
//!
//! Proves that a ciphertext chunk decrypts to the recovered plaintext and
//! writes the proof as JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use symzk_core::{EncryptionAlgorithm, PrivateInput, PublicInput};

use crate::config::OperatorConfig;
use crate::HexBytes;

/// Arguments for the prove subcommand.
#[derive(Args, Debug)]
pub struct ProveArgs {
    /// Cipher: chacha20, aes-256-ctr or aes-128-ctr.
    #[arg(long, short)]
    pub algorithm: EncryptionAlgorithm,

    /// Symmetric key (hex).
    #[arg(long)]
    pub key: HexBytes,

    /// IV / nonce (hex).
    #[arg(long)]
    pub iv: HexBytes,

    /// Chunk offset of the ciphertext, 0 for the first chunk.
    #[arg(long, default_value_t = 0)]
    pub offset: u64,

    /// Ciphertext chunk (hex), at most one chunk long.
    #[arg(long)]
    pub ciphertext: HexBytes,

    /// Write the proof here instead of stdout.
    #[arg(long, short)]
    pub out: Option<PathBuf>,
}

/// Execute the prove subcommand.
pub async fn run_prove(args: &ProveArgs, config: &OperatorConfig) -> anyhow::Result<u8> {
    let operator = config.operator_for(args.algorithm)?;
    let private = PrivateInput::new(args.key.0.clone(), args.iv.0.clone(), args.offset);
    let public = PublicInput::new(args.ciphertext.0.clone());

    let proof = symzk_zkp::generate_proof(args.algorithm, &private, &public, &*operator)
        .await
        .context("proof generation failed")?;
    let json = serde_json::to_string_pretty(&proof)?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, json.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "proof written");
        }
        None => println!("{json}"),
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use symzk_core::Proof;

    #[tokio::test]
    async fn writes_proof_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("proof.json");
        let args = ProveArgs {
            algorithm: EncryptionAlgorithm::Aes128Ctr,
            key: HexBytes(vec![1; 16]),
            iv: HexBytes(vec![2; 12]),
            offset: 4,
            ciphertext: HexBytes(vec![3; 40]),
            out: Some(out.clone()),
        };
        let code = run_prove(&args, &OperatorConfig::default()).await.unwrap();
        assert_eq!(code, 0);

        let proof: Proof = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(proof.algorithm, EncryptionAlgorithm::Aes128Ctr);
        assert_eq!(proof.plaintext.len(), 80);
    }

    #[tokio::test]
    async fn bad_key_length_is_an_error() {
        let args = ProveArgs {
            algorithm: EncryptionAlgorithm::ChaCha20,
            key: HexBytes(vec![1; 16]),
            iv: HexBytes(vec![2; 12]),
            offset: 0,
            ciphertext: HexBytes(vec![]),
            out: None,
        };
        let err = run_prove(&args, &OperatorConfig::default()).await.unwrap_err();
        assert!(format!("{err:#}").contains("key must be 32 bytes"));
    }
}
