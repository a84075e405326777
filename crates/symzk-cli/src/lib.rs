//! # symzk-cli — Command-Line Interface
//!
//! Generates and verifies decryption proofs from the shell.
//!
//! ## Subcommands
//!
//! - `prove`: prove the decryption of one ciphertext chunk, write the proof JSON
//! - `verify`: verify a proof JSON against a ciphertext chunk
//! - `profiles`: print the circuit profile table
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from protocol logic; handlers delegate to
//!   `symzk-zkp`.
//! - Handlers return an exit code: 0 success, 2 proof rejected. Any other
//!   error exits with 1.

pub mod config;
pub mod profiles;
pub mod prove;
pub mod verify;

use std::str::FromStr;

use symzk_core::types::hex_bytes;

/// Exit code for a proof that the operator rejected.
pub const EXIT_REJECTED: u8 = 2;

/// A byte string given on the command line as hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexBytes(pub Vec<u8>);

impl FromStr for HexBytes {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("0x").unwrap_or(s);
        hex_bytes::decode(s).map(HexBytes)
    }
}
