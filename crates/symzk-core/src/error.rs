//! # Error Types — Categorical Failures
//!
//! Every failure a proof generation or verification call can raise. All
//! errors are terminal for the call that raised them and none are retried.
//!
//! ## Categories
//!
//! - Input shape (`InvalidKeyLength`, `InvalidIvLength`, `CiphertextTooLarge`,
//!   `LengthMismatch`, `CounterOverflow`, `MisalignedBuffer`, `InvalidBits`):
//!   detected before the proving operator is invoked.
//! - Backend (`ProvingBackend`, `MalformedSignals`): the operator failed or
//!   returned output that does not match the circuit layout.
//! - Semantic rejection (`ProofRejected`): the operator evaluated the proof
//!   and declared it invalid.
//! - Malformed data (`MalformedProof`, `UnsupportedAlgorithm`): caller data
//!   that cannot be interpreted.

use thiserror::Error;

/// Boxed error surfaced by a proving backend, kept intact as the source.
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for symzk.
#[derive(Error, Debug)]
pub enum ZkError {
    /// The algorithm tag does not name a supported cipher profile.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Key length differs from the profile's key size.
    #[error("key must be {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Required key length in bytes.
        expected: usize,
        /// Supplied key length in bytes.
        actual: usize,
    },

    /// IV length differs from the profile's IV size.
    #[error("iv must be {expected} bytes, got {actual}")]
    InvalidIvLength {
        /// Required IV length in bytes.
        expected: usize,
        /// Supplied IV length in bytes.
        actual: usize,
    },

    /// Ciphertext exceeds the chunk byte capacity.
    #[error("ciphertext must be <= {capacity} bytes, got {actual}")]
    CiphertextTooLarge {
        /// Chunk capacity in bytes.
        capacity: usize,
        /// Supplied ciphertext length in bytes.
        actual: usize,
    },

    /// The proof's plaintext and the padded ciphertext differ in length.
    #[error("ciphertext and plaintext must be the same length: ciphertext {ciphertext}, plaintext {plaintext}")]
    LengthMismatch {
        /// Padded ciphertext length in bytes.
        ciphertext: usize,
        /// Proof plaintext length in bytes.
        plaintext: usize,
    },

    /// The block counter for the requested chunk offset does not fit in 32 bits.
    #[error("block counter for chunk offset {offset} overflows 32 bits ({algorithm})")]
    CounterOverflow {
        /// Algorithm tag.
        algorithm: String,
        /// Requested chunk offset.
        offset: u64,
    },

    /// Byte buffer is not a whole number of circuit words.
    #[error("buffer of {len} bytes is not a multiple of the {word_bytes}-byte word size")]
    MisalignedBuffer {
        /// Buffer length in bytes.
        len: usize,
        /// Word size in bytes.
        word_bytes: usize,
    },

    /// Bit sequence cannot be decoded into bytes.
    #[error("invalid bit sequence: {0}")]
    InvalidBits(String),

    /// Public signals returned by the operator do not match the circuit layout.
    #[error("malformed public signals: {0}")]
    MalformedSignals(String),

    /// The serialized proof could not be parsed.
    #[error("malformed proof: {0}")]
    MalformedProof(String),

    /// The proving operator failed. The operator's error is the source.
    #[error("proving backend error: {0}")]
    ProvingBackend(#[source] BackendError),

    /// The operator evaluated the proof and rejected it.
    #[error("invalid proof")]
    ProofRejected,
}

impl ZkError {
    /// True for errors detected before the proving operator is invoked.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeyLength { .. }
                | Self::InvalidIvLength { .. }
                | Self::CiphertextTooLarge { .. }
                | Self::LengthMismatch { .. }
                | Self::CounterOverflow { .. }
                | Self::MisalignedBuffer { .. }
                | Self::InvalidBits(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_sizes() {
        let err = ZkError::InvalidKeyLength {
            expected: 32,
            actual: 31,
        };
        assert_eq!(err.to_string(), "key must be 32 bytes, got 31");

        let err = ZkError::CiphertextTooLarge {
            capacity: 64,
            actual: 65,
        };
        assert!(err.to_string().contains("<= 64 bytes"));
    }

    #[test]
    fn backend_error_keeps_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::Other, "witness failed");
        let err = ZkError::ProvingBackend(Box::new(inner));
        let source = std::error::Error::source(&err).expect("source preserved");
        assert_eq!(source.to_string(), "witness failed");
        assert!(err.to_string().contains("witness failed"));
    }

    #[test]
    fn input_errors_are_classified() {
        assert!(ZkError::LengthMismatch {
            ciphertext: 64,
            plaintext: 80
        }
        .is_input_error());
        assert!(!ZkError::ProofRejected.is_input_error());
        assert!(!ZkError::MalformedProof("eof".into()).is_input_error());
    }
}
