//! # Block Counter Derivation
//!
//! Maps a chunk offset (counted in whole chunks) to the stream cipher block
//! counter that seeds the circuit's private counter input:
//!
//! ```text
//! counter(offset) = start_counter + offset * blocks_per_chunk
//! ```
//!
//! Results that do not fit in 32 bits fail with `CounterOverflow`.

use crate::algorithm::EncryptionAlgorithm;
use crate::error::ZkError;

/// Block counter for the chunk at `offset`.
pub fn counter_for_chunk(algorithm: EncryptionAlgorithm, offset: u64) -> Result<u32, ZkError> {
    let profile = algorithm.profile();
    let overflow = || ZkError::CounterOverflow {
        algorithm: algorithm.to_string(),
        offset,
    };
    let counter = offset
        .checked_mul(u64::from(profile.blocks_per_chunk))
        .and_then(|blocks| blocks.checked_add(u64::from(profile.start_counter)))
        .ok_or_else(overflow)?;
    u32::try_from(counter).map_err(|_| overflow())
}

/// Largest chunk offset whose counter still fits in 32 bits.
pub fn max_chunk_offset(algorithm: EncryptionAlgorithm) -> u64 {
    let profile = algorithm.profile();
    (u64::from(u32::MAX) - u64::from(profile.start_counter)) / u64::from(profile.blocks_per_chunk)
}
