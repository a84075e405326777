//! Circuit key material handed to a proving backend.
//!
//! The core never parses these; only the operator that consumes them knows
//! the zkey and wasm formats.

use std::path::{Path, PathBuf};

/// A circuit artifact, either loaded into memory or referenced by path.
#[derive(Clone, PartialEq, Eq)]
pub enum ZkInput {
    /// Raw file contents.
    Bytes(Vec<u8>),
    /// Path to the file on disk.
    Path(PathBuf),
}

impl From<Vec<u8>> for ZkInput {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<PathBuf> for ZkInput {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for ZkInput {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl std::fmt::Debug for ZkInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bytes(b) => write!(f, "Bytes(<{} bytes>)", b.len()),
            Self::Path(p) => f.debug_tuple("Path").field(p).finish(),
        }
    }
}

/// The circuit's `.zkey`, optionally with its exported verification key.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationKey {
    /// The `.zkey` file.
    pub data: ZkInput,
    /// Verification key JSON, if already exported.
    pub json: Option<serde_json::Value>,
}

impl VerificationKey {
    /// Key material without a pre-exported verification key.
    pub fn new(data: impl Into<ZkInput>) -> Self {
        Self {
            data: data.into(),
            json: None,
        }
    }
}

/// Everything a backend needs to prove and verify one circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct ZkParams {
    /// Proving / verification key.
    pub zkey: VerificationKey,
    /// Compiled circuit witness generator.
    pub circuit_wasm: ZkInput,
}
