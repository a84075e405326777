//! # Operator Configuration
//!
//! Selects and builds the proving operator from a YAML file:
//!
//! ```yaml
//! backend: snarkjs
//! snarkjs:
//!   binary: /usr/local/bin/snarkjs
//!   circuits:
//!     chacha20:
//!       wasm: circuits/chacha20/circuit.wasm
//!       zkey: circuits/chacha20/circuit_final.zkey
//!       verification_key: circuits/chacha20/verification_key.json
//! ```
//!
//! Relative paths resolve against the directory holding the config file.
//! Without a config file the mock operator is used.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::Deserialize;
use symzk_core::EncryptionAlgorithm;
use symzk_zkp::{MockOperator, SnarkjsOperator, VerificationKey, ZkInput, ZkOperator, ZkParams};

/// Which proving backend to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Transparent mock operator. No zero-knowledge.
    #[default]
    Mock,
    /// The `snarkjs` CLI with compiled circuits.
    Snarkjs,
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperatorConfig {
    /// Backend selection.
    #[serde(default)]
    pub backend: Backend,
    /// Settings for the snarkjs backend.
    #[serde(default)]
    pub snarkjs: Option<SnarkjsConfig>,
}

/// snarkjs executable and per-algorithm circuit artifacts.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnarkjsConfig {
    /// Path to the snarkjs executable.
    #[serde(default = "default_binary")]
    pub binary: PathBuf,
    /// Circuit artifacts keyed by algorithm tag.
    #[serde(default)]
    pub circuits: HashMap<EncryptionAlgorithm, CircuitPaths>,
}

/// Artifact paths for one circuit.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CircuitPaths {
    /// Compiled witness generator.
    pub wasm: PathBuf,
    /// Proving key.
    pub zkey: PathBuf,
    /// Exported verification key JSON.
    #[serde(default)]
    pub verification_key: Option<PathBuf>,
}

fn default_binary() -> PathBuf {
    PathBuf::from("snarkjs")
}

impl OperatorConfig {
    /// Load from `path`, or the default (mock) configuration if `None`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        tracing::debug!(path = %path.display(), backend = ?config.backend, "loaded operator config");
        Ok(config)
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        let Some(snarkjs) = self.snarkjs.as_mut() else {
            return;
        };
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        // A bare program name is looked up on PATH.
        if snarkjs.binary.components().count() > 1 {
            resolve(&mut snarkjs.binary);
        }
        for circuit in snarkjs.circuits.values_mut() {
            resolve(&mut circuit.wasm);
            resolve(&mut circuit.zkey);
            if let Some(vk) = circuit.verification_key.as_mut() {
                resolve(vk);
            }
        }
    }

    /// Build the operator for `algorithm`'s circuit.
    pub fn operator_for(&self, algorithm: EncryptionAlgorithm) -> anyhow::Result<Box<dyn ZkOperator>> {
        match self.backend {
            Backend::Mock => {
                tracing::warn!("using the mock operator: proofs are transparent and not zero-knowledge");
                Ok(Box::new(MockOperator::new(algorithm)))
            }
            Backend::Snarkjs => {
                let Some(snarkjs) = &self.snarkjs else {
                    bail!("backend is snarkjs but no `snarkjs` section is configured");
                };
                let Some(paths) = snarkjs.circuits.get(&algorithm) else {
                    bail!("no snarkjs circuit configured for {algorithm}");
                };
                let json = match &paths.verification_key {
                    Some(vk) => {
                        let bytes = std::fs::read(vk)
                            .with_context(|| format!("failed to read {}", vk.display()))?;
                        Some(serde_json::from_slice(&bytes).with_context(|| {
                            format!("verification key {} is not valid JSON", vk.display())
                        })?)
                    }
                    None => None,
                };
                let params = ZkParams {
                    zkey: VerificationKey {
                        data: ZkInput::Path(paths.zkey.clone()),
                        json,
                    },
                    circuit_wasm: ZkInput::Path(paths.wasm.clone()),
                };
                Ok(Box::new(
                    SnarkjsOperator::new(params).with_program(snarkjs.binary.clone()),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn no_file_means_mock() {
        let config = OperatorConfig::load(None).unwrap();
        assert_eq!(config.backend, Backend::Mock);
        assert!(config.operator_for(EncryptionAlgorithm::ChaCha20).is_ok());
    }

    #[test]
    fn relative_paths_resolve_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "symzk.yaml",
            "backend: snarkjs\n\
             snarkjs:\n\
             \x20 circuits:\n\
             \x20   aes-256-ctr:\n\
             \x20     wasm: aes/circuit.wasm\n\
             \x20     zkey: /abs/circuit.zkey\n",
        );
        let config = OperatorConfig::load(Some(&path)).unwrap();
        let snarkjs = config.snarkjs.as_ref().unwrap();
        assert_eq!(snarkjs.binary, PathBuf::from("snarkjs"));
        let aes = &snarkjs.circuits[&EncryptionAlgorithm::Aes256Ctr];
        assert_eq!(aes.wasm, dir.path().join("aes/circuit.wasm"));
        assert_eq!(aes.zkey, PathBuf::from("/abs/circuit.zkey"));
        assert!(aes.verification_key.is_none());
    }

    #[test]
    fn missing_circuit_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "symzk.yaml", "backend: snarkjs\nsnarkjs:\n  circuits: {}\n");
        let config = OperatorConfig::load(Some(&path)).unwrap();
        let err = config.operator_for(EncryptionAlgorithm::ChaCha20).err().unwrap();
        assert!(err.to_string().contains("no snarkjs circuit configured for chacha20"));
    }

    #[test]
    fn verification_key_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "vk.json", r#"{"protocol":"groth16","nPublic":1024}"#);
        let path = write(
            dir.path(),
            "symzk.yaml",
            "backend: snarkjs\n\
             snarkjs:\n\
             \x20 circuits:\n\
             \x20   chacha20:\n\
             \x20     wasm: c.wasm\n\
             \x20     zkey: c.zkey\n\
             \x20     verification_key: vk.json\n",
        );
        let config = OperatorConfig::load(Some(&path)).unwrap();
        assert!(config.operator_for(EncryptionAlgorithm::ChaCha20).is_ok());
    }

    #[test]
    fn unknown_algorithm_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "symzk.yaml",
            "backend: snarkjs\nsnarkjs:\n  circuits:\n    rc4:\n      wasm: a\n      zkey: b\n",
        );
        assert!(OperatorConfig::load(Some(&path)).is_err());
    }
}
