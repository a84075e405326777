//! Word-level bit codec shared by every profile.
//!
//! Circuit bits are `u8` values restricted to 0 and 1 so they serialize as
//! JSON numbers. Words are at most 32 bits wide.

use crate::error::ZkError;

/// Split `bytes` into words of `word_bytes` bytes read in the given byte order.
pub(crate) fn bytes_to_words(
    bytes: &[u8],
    word_bytes: usize,
    little_endian: bool,
) -> Result<Vec<u32>, ZkError> {
    if bytes.len() % word_bytes != 0 {
        return Err(ZkError::MisalignedBuffer {
            len: bytes.len(),
            word_bytes,
        });
    }
    Ok(bytes
        .chunks(word_bytes)
        .map(|chunk| {
            let fold = |acc: u32, b: &u8| (acc << 8) | u32::from(*b);
            if little_endian {
                chunk.iter().rev().fold(0, fold)
            } else {
                chunk.iter().fold(0, fold)
            }
        })
        .collect())
}

/// Append `word` to `out` as `word_bytes` bytes in the given byte order.
pub(crate) fn push_word(out: &mut Vec<u8>, word: u32, word_bytes: usize, little_endian: bool) {
    let be = word.to_be_bytes();
    let tail = &be[4 - word_bytes..];
    if little_endian {
        out.extend(tail.iter().rev());
    } else {
        out.extend_from_slice(tail);
    }
}

/// Expand a word into `width` bits, most significant first.
pub(crate) fn word_to_bits(word: u32, width: usize) -> Vec<u8> {
    (0..width).rev().map(|i| ((word >> i) & 1) as u8).collect()
}

/// Collapse MSB-first bits into a word.
pub(crate) fn bits_to_word(bits: &[u8]) -> Result<u32, ZkError> {
    bits.iter().try_fold(0u32, |acc, &bit| match bit {
        0 | 1 => Ok((acc << 1) | u32::from(bit)),
        other => Err(ZkError::InvalidBits(format!("bit value {other} is not 0 or 1"))),
    })
}
