//! # symzk-zkp — Proof Generation and Verification
//!
//! Proves that a plaintext is the decryption of a public ciphertext chunk
//! under a secret key, without revealing the key, and verifies such proofs
//! against the ciphertext alone.
//!
//! ## Architecture
//!
//! - **Traits** (`traits.rs`): `ZkOperator` is the narrow capability the
//!   Groth16 backend exposes: full prove and verify. Every backend, local or
//!   remote, is a variant of this trait.
//!
//! - **Protocol** (`prove.rs`, `verify.rs`): `generate_proof` and
//!   `verify_proof` translate between byte buffers and the circuit's bit
//!   layout using the profiles in `symzk-core`.
//!
//! - **Mock** (`mock.rs`, feature `mock`): `MockOperator` evaluates the
//!   cipher natively and issues transparent SHA-256 "proofs". No privacy.
//!
//! - **snarkjs** (`snarkjs.rs`, feature `snarkjs`): `SnarkjsOperator` runs
//!   the real prover and verifier through the `snarkjs` CLI.
//!
//! ## Concurrency
//!
//! Both protocol operations are single-shot async calls with no shared
//! mutable state. Cancellation is done by the caller (for example with
//! `tokio::time::timeout`); nothing needs cleaning up beyond call-local
//! buffers.

pub mod params;
pub mod prove;
pub mod traits;
pub mod verify;

#[cfg(feature = "mock")]
pub mod mock;

#[cfg(feature = "snarkjs")]
pub mod snarkjs;

pub use params::{VerificationKey, ZkInput, ZkParams};
pub use prove::generate_proof;
pub use traits::{CircuitInput, OperatorError, ProofOutput, ZkOperator};
pub use verify::verify_proof;

#[cfg(feature = "mock")]
pub use mock::MockOperator;

#[cfg(feature = "snarkjs")]
pub use snarkjs::SnarkjsOperator;
