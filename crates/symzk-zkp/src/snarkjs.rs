//! # snarkjs Operator (Feature-Gated)
//!
//! Drives the `snarkjs` command-line tool to run the Groth16 prover and
//! verifier for a compiled circom circuit. Each call works in its own
//! temporary directory, which is removed when the call returns or is
//! cancelled; the child process is killed if the call's future is dropped.
//!
//! ## Commands
//!
//! - `snarkjs groth16 fullprove input.json circuit.wasm circuit.zkey proof.json public.json`
//! - `snarkjs zkey export verificationkey circuit.zkey verification_key.json`
//!   (only when the verification key JSON was not supplied)
//! - `snarkjs groth16 verify verification_key.json public.json proof.json`

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Output;

use async_trait::async_trait;
use tokio::process::Command;

use crate::params::{ZkInput, ZkParams};
use crate::traits::{CircuitInput, OperatorError, ProofOutput, ZkOperator};

/// Operator backed by the `snarkjs` CLI.
#[derive(Debug, Clone)]
pub struct SnarkjsOperator {
    program: PathBuf,
    params: ZkParams,
}

impl SnarkjsOperator {
    /// Operator using `snarkjs` from `PATH`.
    pub fn new(params: ZkParams) -> Self {
        Self {
            program: PathBuf::from("snarkjs"),
            params,
        }
    }

    /// Use a specific `snarkjs` executable.
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    async fn run<I, S>(&self, subcommand: &str, args: I) -> Result<Output, OperatorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        tracing::debug!(program = %self.program.display(), subcommand, "spawning snarkjs");
        let output = Command::new(&self.program)
            .args(subcommand.split_whitespace())
            .args(args)
            .kill_on_drop(true)
            .output()
            .await?;
        Ok(output)
    }

    /// Verification key JSON path inside `dir`, exporting it from the zkey if needed.
    async fn verification_key(&self, dir: &Path) -> Result<PathBuf, OperatorError> {
        let vk_path = dir.join("verification_key.json");
        if let Some(json) = &self.params.zkey.json {
            tokio::fs::write(&vk_path, serde_json::to_vec(json)?).await?;
            return Ok(vk_path);
        }

        let zkey = stage(dir, "circuit.zkey", &self.params.zkey.data).await?;
        let output = self
            .run("zkey export verificationkey", [zkey.as_os_str(), vk_path.as_os_str()])
            .await?;
        check_status("snarkjs zkey export verificationkey", &output)?;
        Ok(vk_path)
    }
}

#[async_trait]
impl ZkOperator for SnarkjsOperator {
    async fn groth16_full_prove(&self, input: &CircuitInput) -> Result<ProofOutput, OperatorError> {
        let dir = tempfile::tempdir()?;
        let input_path = dir.path().join("input.json");
        let proof_path = dir.path().join("proof.json");
        let public_path = dir.path().join("public.json");

        tokio::fs::write(&input_path, serde_json::to_vec(input)?).await?;
        let wasm = stage(dir.path(), "circuit.wasm", &self.params.circuit_wasm).await?;
        let zkey = stage(dir.path(), "circuit.zkey", &self.params.zkey.data).await?;

        let output = self
            .run(
                "groth16 fullprove",
                [&input_path, &wasm, &zkey, &proof_path, &public_path],
            )
            .await?;
        check_status("snarkjs groth16 fullprove", &output)?;

        let proof = serde_json::from_slice(&tokio::fs::read(&proof_path).await?)?;
        let public_signals = serde_json::from_slice(&tokio::fs::read(&public_path).await?)?;
        Ok(ProofOutput {
            proof,
            public_signals,
        })
    }

    async fn groth16_verify(
        &self,
        public_signals: &[String],
        proof: &serde_json::Value,
    ) -> Result<bool, OperatorError> {
        let dir = tempfile::tempdir()?;
        let proof_path = dir.path().join("proof.json");
        let public_path = dir.path().join("public.json");

        tokio::fs::write(&proof_path, serde_json::to_vec(proof)?).await?;
        tokio::fs::write(&public_path, serde_json::to_vec(public_signals)?).await?;
        let vk_path = self.verification_key(dir.path()).await?;

        let output = self
            .run("groth16 verify", [&vk_path, &public_path, &proof_path])
            .await?;
        if output.status.success() {
            return Ok(true);
        }
        if mentions_invalid_proof(&output) {
            return Ok(false);
        }
        check_status("snarkjs groth16 verify", &output).map(|()| false)
    }
}

/// Materialize `input` under `dir`, or pass its path through.
async fn stage(dir: &Path, name: &str, input: &ZkInput) -> Result<PathBuf, OperatorError> {
    match input {
        ZkInput::Path(path) => Ok(path.clone()),
        ZkInput::Bytes(bytes) => {
            let path = dir.join(name);
            tokio::fs::write(&path, bytes).await?;
            Ok(path)
        }
    }
}

fn check_status(program: &str, output: &Output) -> Result<(), OperatorError> {
    if output.status.success() {
        return Ok(());
    }
    let mut stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        // snarkjs logs most failures to stdout
        stderr = String::from_utf8_lossy(&output.stdout).trim().to_string();
    }
    Err(OperatorError::Process {
        program: program.to_string(),
        status: output.status.to_string(),
        stderr,
    })
}

fn mentions_invalid_proof(output: &Output) -> bool {
    [&output.stdout, &output.stderr]
        .iter()
        .any(|stream| String::from_utf8_lossy(stream).contains("Invalid proof"))
}
