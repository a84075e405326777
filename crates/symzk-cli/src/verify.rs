//! # Verify Subcommand
//!
//! Checks a proof JSON against a ciphertext chunk. Exits 0 when the proof
//! is accepted and [`EXIT_REJECTED`](crate::EXIT_REJECTED) when the
//! operator rejects it.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use symzk_core::{Proof, PublicInput, ZkError};

use crate::config::OperatorConfig;
use crate::{HexBytes, EXIT_REJECTED};

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Proof JSON produced by `prove`.
    #[arg(long, short)]
    pub proof: PathBuf,

    /// Ciphertext chunk (hex) the proof claims to decrypt.
    #[arg(long)]
    pub ciphertext: HexBytes,
}

/// Execute the verify subcommand.
pub async fn run_verify(args: &VerifyArgs, config: &OperatorConfig) -> anyhow::Result<u8> {
    let bytes = std::fs::read(&args.proof)
        .with_context(|| format!("failed to read {}", args.proof.display()))?;
    let proof: Proof = serde_json::from_slice(&bytes)
        .with_context(|| format!("{} is not a proof", args.proof.display()))?;

    let operator = config.operator_for(proof.algorithm)?;
    let public = PublicInput::new(args.ciphertext.0.clone());
    match symzk_zkp::verify_proof(&proof, &public, &*operator).await {
        Ok(()) => {
            println!("OK");
            Ok(0)
        }
        Err(ZkError::ProofRejected) => {
            println!("invalid proof");
            Ok(EXIT_REJECTED)
        }
        Err(e) => Err(e).context("proof verification failed"),
    }
}
