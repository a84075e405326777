//! # symzk-core — Circuit Encoding Contract
//!
//! The bit-exact contract between raw byte buffers and the fixed-size,
//! per-algorithm input/output format of the symmetric decryption circuits.
//! Every other crate in the workspace depends on `symzk-core`; it depends on
//! nothing internal.
//!
//! ## Modules
//!
//! - `algorithm`: closed set of supported ciphers and their circuit profiles,
//!   including the byte/bit codec.
//! - `counter`: chunk offset to block counter derivation.
//! - `chunk`: zero-padding of ciphertext to the chunk capacity.
//! - `types`: `PrivateInput`, `PublicInput`, `Proof`.
//! - `error`: the categorical `ZkError`.
//!
//! ## Crate Policy
//!
//! - Pure and synchronous. No I/O, no shared mutable state.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod algorithm;
mod bits;
pub mod chunk;
pub mod counter;
pub mod error;
pub mod types;

pub use algorithm::{profile_for, AlgorithmProfile, EncryptionAlgorithm};
pub use chunk::pad_to_chunk;
pub use counter::{counter_for_chunk, max_chunk_offset};
pub use error::{BackendError, ZkError};
pub use types::{PrivateInput, Proof, PublicInput};
