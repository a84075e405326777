//! # Algorithm Profiles — Circuit Parameter Table
//!
//! Maps each supported stream cipher to the fixed parameters of its
//! decryption circuit: key and IV sizes, word width, chunk size, endianness,
//! and block counter convention. Profiles are process-wide constants and
//! every other component reads its sizing from here.
//!
//! | Algorithm | Key | IV | Bits/word | Words/chunk | Chunk bytes | Endianness | Start counter | Blocks/chunk |
//! |-----------|-----|----|-----------|-------------|-------------|------------|---------------|--------------|
//! | `chacha20` | 32 | 12 | 32 | 16 | 64 | little | 1 | 1 |
//! | `aes-256-ctr` | 32 | 12 | 8 | 80 | 80 | big | 2 | 5 |
//! | `aes-128-ctr` | 16 | 12 | 8 | 80 | 80 | big | 2 | 5 |
//!
//! ChaCha20 counts blocks from 1 (RFC 8439, TLS records). AES-CTR counts
//! from 2 because counter 1 of the GCM counter block is reserved for the tag.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::bits;
use crate::error::ZkError;

/// Stream ciphers with a decryption circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncryptionAlgorithm {
    /// ChaCha20 (RFC 8439), 96-bit nonce, 32-bit block counter.
    #[serde(rename = "chacha20")]
    ChaCha20,
    /// AES-256 in counter mode with a 96-bit IV and 32-bit big-endian counter.
    #[serde(rename = "aes-256-ctr")]
    Aes256Ctr,
    /// AES-128 in counter mode with a 96-bit IV and 32-bit big-endian counter.
    #[serde(rename = "aes-128-ctr")]
    Aes128Ctr,
}

impl EncryptionAlgorithm {
    /// Every supported algorithm, in table order.
    pub fn all() -> &'static [EncryptionAlgorithm] {
        &[Self::ChaCha20, Self::Aes256Ctr, Self::Aes128Ctr]
    }

    /// The circuit tag, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChaCha20 => "chacha20",
            Self::Aes256Ctr => "aes-256-ctr",
            Self::Aes128Ctr => "aes-128-ctr",
        }
    }

    /// The circuit profile for this algorithm.
    pub fn profile(&self) -> &'static AlgorithmProfile {
        match self {
            Self::ChaCha20 => &CHACHA20,
            Self::Aes256Ctr => &AES_256_CTR,
            Self::Aes128Ctr => &AES_128_CTR,
        }
    }
}

impl std::fmt::Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncryptionAlgorithm {
    type Err = ZkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| ZkError::UnsupportedAlgorithm(s.to_string()))
    }
}

/// Look up a circuit profile by algorithm tag.
///
/// Fails with [`ZkError::UnsupportedAlgorithm`] for unknown tags.
pub fn profile_for(algorithm: &str) -> Result<&'static AlgorithmProfile, ZkError> {
    Ok(algorithm.parse::<EncryptionAlgorithm>()?.profile())
}

/// Fixed circuit parameters for one algorithm.
///
/// `chunk_size_words * bits_per_word` is always a multiple of 8.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmProfile {
    /// The algorithm this profile describes.
    pub algorithm: EncryptionAlgorithm,
    /// Key length in bytes.
    pub key_size_bytes: usize,
    /// IV / nonce length in bytes.
    pub iv_size_bytes: usize,
    /// Width of one circuit word in bits.
    pub bits_per_word: usize,
    /// Number of words in one chunk.
    pub chunk_size_words: usize,
    /// Byte order of a word and of the serialized block counter.
    pub is_little_endian: bool,
    /// Block counter of chunk 0.
    pub start_counter: u32,
    /// Cipher blocks consumed by one chunk.
    pub blocks_per_chunk: u32,
}

static CHACHA20: AlgorithmProfile = AlgorithmProfile {
    algorithm: EncryptionAlgorithm::ChaCha20,
    key_size_bytes: 32,
    iv_size_bytes: 12,
    bits_per_word: 32,
    chunk_size_words: 16,
    is_little_endian: true,
    start_counter: 1,
    blocks_per_chunk: 1,
};

static AES_256_CTR: AlgorithmProfile = AlgorithmProfile {
    algorithm: EncryptionAlgorithm::Aes256Ctr,
    key_size_bytes: 32,
    iv_size_bytes: 12,
    bits_per_word: 8,
    chunk_size_words: 80,
    is_little_endian: false,
    start_counter: 2,
    blocks_per_chunk: 5,
};

static AES_128_CTR: AlgorithmProfile = AlgorithmProfile {
    algorithm: EncryptionAlgorithm::Aes128Ctr,
    key_size_bytes: 16,
    iv_size_bytes: 12,
    bits_per_word: 8,
    chunk_size_words: 80,
    is_little_endian: false,
    start_counter: 2,
    blocks_per_chunk: 5,
};

impl AlgorithmProfile {
    /// Bytes per circuit word.
    pub fn word_size_bytes(&self) -> usize {
        self.bits_per_word / 8
    }

    /// Bits in one chunk; also the number of plaintext output signals.
    pub fn chunk_size_bits(&self) -> usize {
        self.chunk_size_words * self.bits_per_word
    }

    /// Byte capacity of one chunk.
    pub fn chunk_size_bytes(&self) -> usize {
        self.chunk_size_bits() / 8
    }

    /// Encode bytes into circuit bit-groups, one group per word, MSB first.
    pub fn bytes_to_bits(&self, bytes: &[u8]) -> Result<Vec<Vec<u8>>, ZkError> {
        bits::bytes_to_words(bytes, self.word_size_bytes(), self.is_little_endian)
            .map(|words| {
                words
                    .into_iter()
                    .map(|w| bits::word_to_bits(w, self.bits_per_word))
                    .collect()
            })
    }

    /// Decode a flat bit sequence produced by the circuit back into bytes.
    ///
    /// Inverse of [`bytes_to_bits`](Self::bytes_to_bits) after flattening.
    pub fn bits_to_bytes(&self, bits: &[u8]) -> Result<Vec<u8>, ZkError> {
        if bits.len() % self.bits_per_word != 0 {
            return Err(ZkError::InvalidBits(format!(
                "{} bits is not a multiple of the {}-bit word size",
                bits.len(),
                self.bits_per_word
            )));
        }
        let mut out = Vec::with_capacity(bits.len() / 8);
        for group in bits.chunks(self.bits_per_word) {
            let word = bits::bits_to_word(group)?;
            bits::push_word(&mut out, word, self.word_size_bytes(), self.is_little_endian);
        }
        Ok(out)
    }

    /// Serialize a block counter to 4 bytes in the profile's byte order.
    pub fn serialize_counter(&self, counter: u32) -> [u8; 4] {
        if self.is_little_endian {
            counter.to_le_bytes()
        } else {
            counter.to_be_bytes()
        }
    }

    /// Block counter as the flat 32-bit circuit input.
    pub fn counter_bits(&self, counter: u32) -> Result<Vec<u8>, ZkError> {
        Ok(self
            .bytes_to_bits(&self.serialize_counter(counter))?
            .into_iter()
            .flatten()
            .collect())
    }

    /// Inverse of [`counter_bits`](Self::counter_bits).
    pub fn counter_from_bits(&self, bits: &[u8]) -> Result<u32, ZkError> {
        let bytes: [u8; 4] = self.bits_to_bytes(bits)?.try_into().map_err(|v: Vec<u8>| {
            ZkError::InvalidBits(format!("counter must be 32 bits, got {}", v.len() * 8))
        })?;
        Ok(if self.is_little_endian {
            u32::from_le_bytes(bytes)
        } else {
            u32::from_be_bytes(bytes)
        })
    }
}
