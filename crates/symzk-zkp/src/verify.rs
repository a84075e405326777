//! # Proof Verification
//!
//! Rebuilds the circuit's public input from the claimed plaintext and the
//! zero-padded ciphertext, then asks the operator to check the proof.
//!
//! The public signal layout is `plaintext_bits ++ ciphertext_bits`. Any
//! other order is a different statement and the operator will reject it.

use symzk_core::{pad_to_chunk, Proof, PublicInput, ZkError};

use crate::traits::ZkOperator;

/// Verify `proof` against `public.ciphertext`.
///
/// Returns `Ok(())` only if the operator accepts the proof. A rejected proof
/// is [`ZkError::ProofRejected`].
pub async fn verify_proof<O>(proof: &Proof, public: &PublicInput, operator: &O) -> Result<(), ZkError>
where
    O: ZkOperator + ?Sized,
{
    let public_signals = build_public_signals(proof, public)?;
    let proof_object: serde_json::Value = serde_json::from_str(&proof.proof_json)
        .map_err(|e| ZkError::MalformedProof(e.to_string()))?;

    tracing::debug!(
        algorithm = %proof.algorithm,
        signals = public_signals.len(),
        "running verify"
    );
    let verified = operator
        .groth16_verify(&public_signals, &proof_object)
        .await
        .map_err(|e| ZkError::ProvingBackend(Box::new(e)))?;

    if !verified {
        tracing::warn!(algorithm = %proof.algorithm, "proof rejected");
        return Err(ZkError::ProofRejected);
    }
    tracing::info!(algorithm = %proof.algorithm, "proof verified");
    Ok(())
}

/// The expected public signals for `proof` over `public.ciphertext`.
pub fn build_public_signals(proof: &Proof, public: &PublicInput) -> Result<Vec<String>, ZkError> {
    let profile = proof.algorithm.profile();
    let ciphertext = pad_to_chunk(proof.algorithm, &public.ciphertext)?;
    if ciphertext.len() != proof.plaintext.len() {
        return Err(ZkError::LengthMismatch {
            ciphertext: ciphertext.len(),
            plaintext: proof.plaintext.len(),
        });
    }

    let plaintext_bits = profile.bytes_to_bits(&proof.plaintext)?;
    let ciphertext_bits = profile.bytes_to_bits(&ciphertext)?;
    Ok(plaintext_bits
        .iter()
        .chain(ciphertext_bits.iter())
        .flatten()
        .map(|bit| bit.to_string())
        .collect())
}
