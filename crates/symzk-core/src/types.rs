//! # Proof Data Model
//!
//! Per-call inputs and the proof value object exchanged between prover and
//! verifier.
//!
//! - [`PrivateInput`] holds the key, IV and chunk offset. It is zeroized on
//!   drop and its `Debug` output never prints key material.
//! - [`PublicInput`] holds the ciphertext chunk known to the verifier.
//! - [`Proof`] is immutable once produced; it serializes as
//!   `{"algorithm", "proofJson", "plaintext" (hex)}`.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::algorithm::EncryptionAlgorithm;

/// Secret material fed to the circuit.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateInput {
    /// Symmetric key; length must equal the profile's key size.
    pub key: Vec<u8>,
    /// IV / nonce; length must equal the profile's IV size.
    pub iv: Vec<u8>,
    /// Chunk offset, 0 for the first chunk.
    pub offset: u64,
}

impl PrivateInput {
    /// Input for the chunk at `offset`.
    pub fn new(key: impl Into<Vec<u8>>, iv: impl Into<Vec<u8>>, offset: u64) -> Self {
        Self {
            key: key.into(),
            iv: iv.into(),
            offset,
        }
    }
}

impl std::fmt::Debug for PrivateInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateInput")
            .field("key", &format_args!("<{} bytes redacted>", self.key.len()))
            .field("iv", &format_args!("<{} bytes redacted>", self.iv.len()))
            .field("offset", &self.offset)
            .finish()
    }
}

/// Material known to the verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicInput {
    /// Ciphertext chunk, at most one chunk long.
    #[serde(with = "hex_bytes")]
    pub ciphertext: Vec<u8>,
}

impl PublicInput {
    /// Wrap a ciphertext chunk.
    pub fn new(ciphertext: impl Into<Vec<u8>>) -> Self {
        Self {
            ciphertext: ciphertext.into(),
        }
    }
}

/// A proof that `plaintext` is the decryption of a ciphertext chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proof {
    /// Cipher the proof was generated for.
    pub algorithm: EncryptionAlgorithm,
    /// The operator's proof object in its canonical JSON text form.
    pub proof_json: String,
    /// Plaintext recovered from the circuit output, one full chunk long.
    #[serde(with = "hex_bytes")]
    pub plaintext: Vec<u8>,
}

/// Serde adapter for lowercase hex byte strings.
pub mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    /// Encode bytes as lowercase hex.
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Decode a hex string; accepts upper and lower case.
    pub fn decode(s: &str) -> Result<Vec<u8>, String> {
        if s.len() % 2 != 0 {
            return Err(format!("hex string has odd length {}", s.len()));
        }
        (0..s.len())
            .step_by(2)
            .map(|i| {
                s.get(i..i + 2)
                    .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                    .ok_or_else(|| format!("invalid hex at position {i}"))
            })
            .collect()
    }

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        decode(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proof_json_shape() {
        let proof = Proof {
            algorithm: EncryptionAlgorithm::Aes256Ctr,
            proof_json: "{\"pi_a\":[]}".to_string(),
            plaintext: vec![0xde, 0xad],
        };
        let value = serde_json::to_value(&proof).unwrap();
        assert_eq!(value["algorithm"], "aes-256-ctr");
        assert_eq!(value["proofJson"], "{\"pi_a\":[]}");
        assert_eq!(value["plaintext"], "dead");

        let back: Proof = serde_json::from_value(value).unwrap();
        assert_eq!(back, proof);
    }

    #[test]
    fn private_input_debug_redacts_key() {
        let input = PrivateInput::new(vec![0x42; 32], vec![0x24; 12], 3);
        let dbg = format!("{input:?}");
        assert!(dbg.contains("32 bytes redacted"));
        assert!(dbg.contains("offset: 3"));
        assert!(!dbg.contains("66"));
    }

    #[test]
    fn hex_decode_rejects_bad_input() {
        assert!(hex_bytes::decode("abc").is_err());
        assert!(hex_bytes::decode("zz").is_err());
        assert_eq!(hex_bytes::decode("00FFa0").unwrap(), vec![0x00, 0xff, 0xa0]);
    }

    #[test]
    fn unknown_algorithm_fails_to_deserialize() {
        let json = r#"{"algorithm":"rc4","proofJson":"{}","plaintext":""}"#;
        assert!(serde_json::from_str::<Proof>(json).is_err());
    }
}
