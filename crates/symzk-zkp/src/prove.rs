//! # Proof Generation
//!
//! Assembles the circuit's private input from key, IV, block counter and
//! padded ciphertext, runs the operator's full prove, and decodes the
//! plaintext from the leading public signals.
//!
//! ```text
//! key, iv, offset, ciphertext
//!   -> counter_for_chunk(offset)
//!   -> { key, nonce, counter, in } as circuit bits
//!   -> operator.groth16_full_prove
//!   -> publicSignals[0 .. chunk_size_bits] -> bits_to_bytes -> plaintext
//! ```

use symzk_core::{
    counter_for_chunk, pad_to_chunk, EncryptionAlgorithm, PrivateInput, Proof, PublicInput,
    ZkError,
};

use crate::traits::{CircuitInput, ZkOperator};

/// Generate a proof that decrypting `public.ciphertext` under `private`
/// yields the returned plaintext.
///
/// Shape errors are raised before the operator is called. Operator failures
/// surface as [`ZkError::ProvingBackend`] with the operator's error as source.
pub async fn generate_proof<O>(
    algorithm: EncryptionAlgorithm,
    private: &PrivateInput,
    public: &PublicInput,
    operator: &O,
) -> Result<Proof, ZkError>
where
    O: ZkOperator + ?Sized,
{
    let input = build_circuit_input(algorithm, private, public)?;

    tracing::debug!(
        algorithm = %algorithm,
        offset = private.offset,
        ciphertext_len = public.ciphertext.len(),
        "running full prove"
    );
    let output = operator
        .groth16_full_prove(&input)
        .await
        .map_err(|e| ZkError::ProvingBackend(Box::new(e)))?;

    let plaintext = decode_plaintext(algorithm, &output.public_signals)?;
    let proof_json = serde_json::to_string(&output.proof)
        .map_err(|e| ZkError::MalformedProof(e.to_string()))?;

    tracing::info!(algorithm = %algorithm, offset = private.offset, "proof generated");
    Ok(Proof {
        algorithm,
        proof_json,
        plaintext,
    })
}

/// Validate the inputs and encode them as circuit bits.
pub fn build_circuit_input(
    algorithm: EncryptionAlgorithm,
    private: &PrivateInput,
    public: &PublicInput,
) -> Result<CircuitInput, ZkError> {
    let profile = algorithm.profile();
    if private.key.len() != profile.key_size_bytes {
        return Err(ZkError::InvalidKeyLength {
            expected: profile.key_size_bytes,
            actual: private.key.len(),
        });
    }
    if private.iv.len() != profile.iv_size_bytes {
        return Err(ZkError::InvalidIvLength {
            expected: profile.iv_size_bytes,
            actual: private.iv.len(),
        });
    }

    let counter = counter_for_chunk(algorithm, private.offset)?;
    let ciphertext = pad_to_chunk(algorithm, &public.ciphertext)?;
    tracing::debug!(algorithm = %algorithm, counter, "derived block counter");

    Ok(CircuitInput {
        key: profile.bytes_to_bits(&private.key)?,
        nonce: profile.bytes_to_bits(&private.iv)?,
        counter: profile.counter_bits(counter)?,
        ciphertext: profile.bytes_to_bits(&ciphertext)?,
    })
}

/// Decode the plaintext from the first `chunk_size_bits` public signals.
pub fn decode_plaintext(
    algorithm: EncryptionAlgorithm,
    public_signals: &[String],
) -> Result<Vec<u8>, ZkError> {
    let total_bits = algorithm.profile().chunk_size_bits();
    if public_signals.len() < total_bits {
        return Err(ZkError::MalformedSignals(format!(
            "expected at least {total_bits} public signals, got {}",
            public_signals.len()
        )));
    }
    let bits = public_signals[..total_bits]
        .iter()
        .enumerate()
        .map(|(i, signal)| match signal.trim() {
            "0" => Ok(0u8),
            "1" => Ok(1u8),
            other => Err(ZkError::MalformedSignals(format!(
                "public signal {i} is {other:?}, expected 0 or 1"
            ))),
        })
        .collect::<Result<Vec<u8>, ZkError>>()?;
    algorithm.profile().bits_to_bytes(&bits)
}
