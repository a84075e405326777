//! # Proving Operator Trait
//!
//! The capability boundary to the zero-knowledge backend. An operator runs
//! the Groth16 prover over a structured circuit input and checks a proof
//! against public signals. Circuit evaluation, witness generation and the
//! pairing check all happen behind this trait.
//!
//! Implementations: `MockOperator` (feature `mock`, transparent, for tests)
//! and `SnarkjsOperator` (feature `snarkjs`).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error surfaced by a proving operator.
#[derive(Error, Debug)]
pub enum OperatorError {
    /// The backend failed to produce or check a proof.
    #[error("backend error: {0}")]
    Backend(String),

    /// The proof object does not have the structure this backend expects.
    #[error("malformed proof: {0}")]
    MalformedProof(String),

    /// An external prover process exited unsuccessfully.
    #[error("{program} exited with {status}: {stderr}")]
    Process {
        /// Program and subcommand that was run.
        program: String,
        /// Exit status as reported by the OS.
        status: String,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// IO error while staging inputs or reading outputs.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Structured private input for the decryption circuit.
///
/// Field names are the circuit's signal names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitInput {
    /// Key bits, one group per word.
    pub key: Vec<Vec<u8>>,
    /// IV bits, one group per word.
    pub nonce: Vec<Vec<u8>>,
    /// Block counter, 32 flat bits.
    pub counter: Vec<u8>,
    /// Padded ciphertext bits, one group per word.
    #[serde(rename = "in")]
    pub ciphertext: Vec<Vec<u8>>,
}

/// Output of a full prove: the proof object and the public signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofOutput {
    /// Backend-specific proof object.
    pub proof: serde_json::Value,
    /// Public signals as decimal strings.
    pub public_signals: Vec<String>,
}

/// A Groth16 proving backend for one circuit.
///
/// Operators hold no per-call state; any number of calls may run
/// concurrently, subject to the backend's own limits.
#[async_trait]
pub trait ZkOperator: Send + Sync {
    /// Compute the witness and a proof for `input`.
    async fn groth16_full_prove(&self, input: &CircuitInput) -> Result<ProofOutput, OperatorError>;

    /// Check `proof` against `public_signals`.
    ///
    /// `Ok(false)` means the proof was evaluated and rejected.
    async fn groth16_verify(
        &self,
        public_signals: &[String],
        proof: &serde_json::Value,
    ) -> Result<bool, OperatorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circuit_input_uses_signal_names() {
        let input = CircuitInput {
            key: vec![vec![1, 0]],
            nonce: vec![vec![0, 1]],
            counter: vec![0, 0, 1],
            ciphertext: vec![vec![1, 1]],
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["in"], serde_json::json!([[1, 1]]));
        assert_eq!(value["counter"], serde_json::json!([0, 0, 1]));
        assert!(value.get("ciphertext").is_none());
    }

    #[test]
    fn proof_output_reads_snarkjs_layout() {
        let json = r#"{"proof":{"protocol":"groth16"},"publicSignals":["1","0"]}"#;
        let out: ProofOutput = serde_json::from_str(json).unwrap();
        assert_eq!(out.public_signals, vec!["1", "0"]);
        assert_eq!(out.proof["protocol"], "groth16");
    }

    #[test]
    fn process_error_display() {
        let err = OperatorError::Process {
            program: "snarkjs groth16 fullprove".into(),
            status: "exit status: 1".into(),
            stderr: "Error: Assert Failed".into(),
        };
        assert_eq!(
            err.to_string(),
            "snarkjs groth16 fullprove exited with exit status: 1: Error: Assert Failed"
        );
    }
}
