//! # Mock Operator
//!
//! A deterministic, transparent operator for development and testing. It
//! evaluates the decryption "circuit" natively and produces SHA-256-based
//! proofs that are checkable but provide **no zero-knowledge guarantees**.
//!
//! ## How It Works
//!
//! - `groth16_full_prove()` decodes the circuit input, runs the real stream
//!   cipher at the given block counter, and emits `plaintext ++ ciphertext`
//!   bits as public signals, exactly like the circuit's public layout.
//! - The proof is `SHA256(algorithm || 0x00 || signal_0 || "," || signal_1 ...)`,
//!   hex encoded, wrapped in a small JSON object.
//! - `groth16_verify()` recomputes the digest over the supplied signals.
//!
//! ## Security Warning
//!
//! **NOT PRIVATE.** Anyone can recompute a mock proof from the public
//! signals. Use only where proof cost must be avoided, such as tests.

use aes::{Aes128, Aes256};
use async_trait::async_trait;
use chacha20::cipher::consts::U10;
use chacha20::cipher::{Block, KeyIvInit, StreamCipher, StreamCipherCore, StreamCipherSeekCore};
use chacha20::ChaChaCore;
use ctr::Ctr32BE;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use symzk_core::{EncryptionAlgorithm, ZkError};

use crate::traits::{CircuitInput, OperatorError, ProofOutput, ZkOperator};

const MOCK_PROTOCOL: &str = "symzk-mock-sha256";

const CHACHA_BLOCK_BYTES: usize = 64;

/// Proof object produced by [`MockOperator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockProof {
    /// Always `symzk-mock-sha256`.
    pub protocol: String,
    /// Circuit the proof was made for.
    pub algorithm: EncryptionAlgorithm,
    /// Hex SHA-256 digest over the algorithm tag and public signals.
    pub digest: String,
}

/// Transparent operator for one algorithm's circuit.
#[derive(Debug, Clone, Copy)]
pub struct MockOperator {
    algorithm: EncryptionAlgorithm,
}

impl MockOperator {
    /// Operator for `algorithm`'s circuit.
    pub fn new(algorithm: EncryptionAlgorithm) -> Self {
        Self { algorithm }
    }

    fn digest(&self, public_signals: &[String]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.algorithm.as_str().as_bytes());
        hasher.update([0u8]);
        for (i, signal) in public_signals.iter().enumerate() {
            if i > 0 {
                hasher.update(b",");
            }
            hasher.update(signal.as_bytes());
        }
        hasher
            .finalize()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect()
    }

    /// Evaluate the circuit natively: decrypt the input chunk.
    fn evaluate(&self, input: &CircuitInput) -> Result<(Vec<u8>, Vec<u8>), ZkError> {
        let profile = self.algorithm.profile();
        let key = profile.bits_to_bytes(&input.key.concat())?;
        let iv = profile.bits_to_bytes(&input.nonce.concat())?;
        let counter = profile.counter_from_bits(&input.counter)?;
        let ciphertext = profile.bits_to_bytes(&input.ciphertext.concat())?;

        if key.len() != profile.key_size_bytes {
            return Err(ZkError::InvalidKeyLength {
                expected: profile.key_size_bytes,
                actual: key.len(),
            });
        }
        if iv.len() != profile.iv_size_bytes {
            return Err(ZkError::InvalidIvLength {
                expected: profile.iv_size_bytes,
                actual: iv.len(),
            });
        }
        if ciphertext.len() != profile.chunk_size_bytes() {
            return Err(ZkError::InvalidBits(format!(
                "circuit input must be {} bytes, got {}",
                profile.chunk_size_bytes(),
                ciphertext.len()
            )));
        }

        let mut plaintext = ciphertext.clone();
        apply_keystream(self.algorithm, &key, &iv, counter, &mut plaintext)?;
        Ok((plaintext, ciphertext))
    }
}

#[async_trait]
impl ZkOperator for MockOperator {
    async fn groth16_full_prove(&self, input: &CircuitInput) -> Result<ProofOutput, OperatorError> {
        let (plaintext, ciphertext) = self
            .evaluate(input)
            .map_err(|e| OperatorError::Backend(format!("circuit evaluation failed: {e}")))?;

        let profile = self.algorithm.profile();
        let to_bits = |bytes: &[u8]| {
            profile
                .bytes_to_bits(bytes)
                .map_err(|e| OperatorError::Backend(e.to_string()))
        };
        let public_signals: Vec<String> = to_bits(&plaintext)?
            .iter()
            .chain(to_bits(&ciphertext)?.iter())
            .flatten()
            .map(|bit| bit.to_string())
            .collect();

        let proof = MockProof {
            protocol: MOCK_PROTOCOL.to_string(),
            algorithm: self.algorithm,
            digest: self.digest(&public_signals),
        };
        Ok(ProofOutput {
            proof: serde_json::to_value(&proof)?,
            public_signals,
        })
    }

    async fn groth16_verify(
        &self,
        public_signals: &[String],
        proof: &serde_json::Value,
    ) -> Result<bool, OperatorError> {
        let proof: MockProof = serde_json::from_value(proof.clone())
            .map_err(|e| OperatorError::MalformedProof(e.to_string()))?;
        if proof.protocol != MOCK_PROTOCOL {
            return Err(OperatorError::MalformedProof(format!(
                "unexpected protocol {:?}",
                proof.protocol
            )));
        }
        if proof.digest.len() != 64 || !proof.digest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(OperatorError::MalformedProof(
                "digest must be 64 hex characters".to_string(),
            ));
        }
        if proof.algorithm != self.algorithm {
            return Ok(false);
        }
        Ok(proof.digest.eq_ignore_ascii_case(&self.digest(public_signals)))
    }
}

/// XOR `data` in place with the keystream starting at block `counter`.
///
/// ChaCha20 uses the RFC 8439 layout (32-bit counter, 96-bit nonce). AES-CTR
/// uses the 16-byte counter block `iv || counter` with a big-endian 32-bit
/// counter, as in GCM.
pub fn apply_keystream(
    algorithm: EncryptionAlgorithm,
    key: &[u8],
    iv: &[u8],
    counter: u32,
    data: &mut [u8],
) -> Result<(), ZkError> {
    let profile = algorithm.profile();
    if key.len() != profile.key_size_bytes {
        return Err(ZkError::InvalidKeyLength {
            expected: profile.key_size_bytes,
            actual: key.len(),
        });
    }
    if iv.len() != profile.iv_size_bytes {
        return Err(ZkError::InvalidIvLength {
            expected: profile.iv_size_bytes,
            actual: iv.len(),
        });
    }

    let keystream_exhausted = || {
        ZkError::ProvingBackend(
            format!("{algorithm} keystream exhausted at block counter {counter}").into(),
        )
    };
    match algorithm {
        EncryptionAlgorithm::ChaCha20 => {
            // Drive the core directly: the stream wrapper refuses block u32::MAX,
            // which is a valid counter for the last chunk.
            let blocks = data.len().div_ceil(CHACHA_BLOCK_BYTES) as u64;
            if u64::from(counter) + blocks.saturating_sub(1) > u64::from(u32::MAX) {
                return Err(keystream_exhausted());
            }
            let mut core = ChaChaCore::<U10>::new_from_slices(key, iv)
                .map_err(|_| ZkError::InvalidKeyLength { expected: 32, actual: key.len() })?;
            core.set_block_pos(counter);
            let mut keystream = Block::<ChaChaCore<U10>>::default();
            for chunk in data.chunks_mut(CHACHA_BLOCK_BYTES) {
                core.write_keystream_block(&mut keystream);
                for (byte, ks) in chunk.iter_mut().zip(keystream.iter()) {
                    *byte ^= ks;
                }
            }
            Ok(())
        }
        EncryptionAlgorithm::Aes256Ctr => {
            let mut cipher = Ctr32BE::<Aes256>::new_from_slices(key, &counter_block(iv, counter))
                .map_err(|_| ZkError::InvalidKeyLength { expected: 32, actual: key.len() })?;
            cipher.try_apply_keystream(data).map_err(|_| keystream_exhausted())
        }
        EncryptionAlgorithm::Aes128Ctr => {
            let mut cipher = Ctr32BE::<Aes128>::new_from_slices(key, &counter_block(iv, counter))
                .map_err(|_| ZkError::InvalidKeyLength { expected: 16, actual: key.len() })?;
            cipher.try_apply_keystream(data).map_err(|_| keystream_exhausted())
        }
    }
}

fn counter_block(iv: &[u8], counter: u32) -> [u8; 16] {
    let mut block = [0u8; 16];
    block[..12].copy_from_slice(iv);
    block[12..].copy_from_slice(&counter.to_be_bytes());
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prove::build_circuit_input;
    use symzk_core::{counter_for_chunk, PrivateInput, PublicInput};

    fn hex(s: &str) -> Vec<u8> {
        symzk_core::types::hex_bytes::decode(s).unwrap()
    }

    #[test]
    fn chacha20_matches_rfc8439_block() {
        let key: Vec<u8> = (0u8..32).collect();
        let nonce = hex("000000000000004a00000000");
        let mut data = b"Ladies and Gentlemen of the class of '99: If I could offer you o".to_vec();
        apply_keystream(EncryptionAlgorithm::ChaCha20, &key, &nonce, 1, &mut data).unwrap();
        assert_eq!(
            data,
            hex("6e2e359a2568f98041ba0728dd0d6981e97e7aec1d4360c20a27afccfd9fae0b\
                 f91b65c5524733ab8f593dabcd62b3571639d624e65152ab8f530c359f0861d8")
        );
    }

    #[test]
    fn aes_ctr_uses_iv_then_big_endian_counter() {
        assert_eq!(
            counter_block(&[0xa0; 12], 0x0102_0304)[12..],
            [0x01, 0x02, 0x03, 0x04]
        );
    }

    #[test]
    fn keystream_rejects_wrong_key_size() {
        let mut data = [0u8; 4];
        let err = apply_keystream(EncryptionAlgorithm::Aes128Ctr, &[0; 32], &[0; 12], 2, &mut data)
            .unwrap_err();
        assert!(matches!(err, ZkError::InvalidKeyLength { expected: 16, actual: 32 }));
    }

    #[tokio::test]
    async fn prove_then_verify_with_mock() {
        let op = MockOperator::new(EncryptionAlgorithm::Aes256Ctr);
        let private = PrivateInput::new(vec![9; 32], vec![8; 12], 0);
        let input = build_circuit_input(
            EncryptionAlgorithm::Aes256Ctr,
            &private,
            &PublicInput::new(vec![1, 2, 3]),
        )
        .unwrap();
        let out = op.groth16_full_prove(&input).await.unwrap();
        assert_eq!(out.public_signals.len(), 2 * 640);
        assert!(op.groth16_verify(&out.public_signals, &out.proof).await.unwrap());

        let mut tampered = out.public_signals.clone();
        tampered[0] = if tampered[0] == "0" { "1".into() } else { "0".into() };
        assert!(!op.groth16_verify(&tampered, &out.proof).await.unwrap());
    }

    #[tokio::test]
    async fn proof_for_other_circuit_is_rejected() {
        let chacha = MockOperator::new(EncryptionAlgorithm::ChaCha20);
        let aes = MockOperator::new(EncryptionAlgorithm::Aes128Ctr);
        let private = PrivateInput::new(vec![0; 32], vec![0; 12], 0);
        let input =
            build_circuit_input(EncryptionAlgorithm::ChaCha20, &private, &PublicInput::new(vec![]))
                .unwrap();
        let out = chacha.groth16_full_prove(&input).await.unwrap();
        assert!(!aes.groth16_verify(&out.public_signals, &out.proof).await.unwrap());
    }

    #[tokio::test]
    async fn malformed_proof_object_is_an_error() {
        let op = MockOperator::new(EncryptionAlgorithm::ChaCha20);
        let err = op
            .groth16_verify(&[], &serde_json::json!({ "pi_a": [] }))
            .await
            .unwrap_err();
        assert!(matches!(err, OperatorError::MalformedProof(_)));
    }

    #[tokio::test]
    async fn wrong_circuit_input_is_a_backend_error() {
        let op = MockOperator::new(EncryptionAlgorithm::Aes128Ctr);
        // Input built for the 32-byte-key AES profile.
        let private = PrivateInput::new(vec![0; 32], vec![0; 12], 0);
        let input =
            build_circuit_input(EncryptionAlgorithm::Aes256Ctr, &private, &PublicInput::new(vec![]))
                .unwrap();
        let err = op.groth16_full_prove(&input).await.unwrap_err();
        assert!(matches!(err, OperatorError::Backend(_)));
    }

    #[test]
    fn counters_line_up_with_profile() {
        // Chunk 3 of AES starts 15 blocks after chunk 0.
        let key = [7u8; 32];
        let iv = [1u8; 12];
        let mut whole = vec![0u8; 80 * 4];
        apply_keystream(EncryptionAlgorithm::Aes256Ctr, &key, &iv, 2, &mut whole).unwrap();
        let mut chunk3 = vec![0u8; 80];
        let c = counter_for_chunk(EncryptionAlgorithm::Aes256Ctr, 3).unwrap();
        apply_keystream(EncryptionAlgorithm::Aes256Ctr, &key, &iv, c, &mut chunk3).unwrap();
        assert_eq!(&whole[240..], &chunk3[..]);
    }

    fn chacha_block(counter: u32) -> Vec<u8> {
        let mut block = vec![0u8; 64];
        apply_keystream(EncryptionAlgorithm::ChaCha20, &[3; 32], &[4; 12], counter, &mut block)
            .unwrap();
        block
    }

    #[test]
    fn chacha20_blocks_advance_one_counter_each() {
        let mut two = vec![0u8; 128];
        apply_keystream(EncryptionAlgorithm::ChaCha20, &[3; 32], &[4; 12], 1, &mut two).unwrap();
        assert_eq!(&two[..64], &chacha_block(1)[..]);
        assert_eq!(&two[64..], &chacha_block(2)[..]);
    }

    #[test]
    fn chacha20_last_block_counter_is_usable() {
        let mut two = vec![0u8; 128];
        apply_keystream(EncryptionAlgorithm::ChaCha20, &[3; 32], &[4; 12], u32::MAX - 1, &mut two)
            .unwrap();
        let last = chacha_block(u32::MAX);
        assert_eq!(&two[64..], &last[..]);
        assert_ne!(last, vec![0u8; 64]);
        assert_ne!(last, chacha_block(u32::MAX - 1));
    }

    #[test]
    fn chacha20_keystream_past_last_block_names_the_counter() {
        let mut data = vec![0u8; 65];
        let err =
            apply_keystream(EncryptionAlgorithm::ChaCha20, &[3; 32], &[4; 12], u32::MAX, &mut data)
                .unwrap_err();
        assert!(matches!(err, ZkError::ProvingBackend(_)));
        let msg = err.to_string();
        assert!(msg.contains("block counter 4294967295"), "{msg}");
        assert!(!msg.contains("chunk offset"), "{msg}");
    }
}
