//! # Chunk Padding
//!
//! Normalizes a ciphertext to the exact chunk byte capacity of a profile by
//! zero-padding on the right. The padding is part of the public circuit
//! input, so prover and verifier must both go through [`pad_to_chunk`].

use std::borrow::Cow;

use crate::algorithm::EncryptionAlgorithm;
use crate::error::ZkError;

/// Pad `ciphertext` with trailing zeros up to the chunk capacity of `algorithm`.
///
/// Returns the input unchanged (borrowed) when it is already exactly one chunk.
pub fn pad_to_chunk(
    algorithm: EncryptionAlgorithm,
    ciphertext: &[u8],
) -> Result<Cow<'_, [u8]>, ZkError> {
    let capacity = algorithm.profile().chunk_size_bytes();
    if ciphertext.len() > capacity {
        return Err(ZkError::CiphertextTooLarge {
            capacity,
            actual: ciphertext.len(),
        });
    }
    if ciphertext.len() == capacity {
        return Ok(Cow::Borrowed(ciphertext));
    }

    tracing::trace!(
        algorithm = %algorithm,
        len = ciphertext.len(),
        capacity,
        "zero-padding ciphertext to chunk size"
    );
    let mut padded = vec![0u8; capacity];
    padded[..ciphertext.len()].copy_from_slice(ciphertext);
    Ok(Cow::Owned(padded))
}
