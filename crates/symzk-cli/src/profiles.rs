//! # Profiles Subcommand
//!
//! Prints the circuit profile table as JSON.

use clap::Args;
use serde::Serialize;
use symzk_core::{max_chunk_offset, AlgorithmProfile, EncryptionAlgorithm};

/// Arguments for the profiles subcommand.
#[derive(Args, Debug)]
pub struct ProfilesArgs {
    /// Only print this algorithm's profile.
    #[arg(long, short)]
    pub algorithm: Option<EncryptionAlgorithm>,
}

#[derive(Serialize)]
struct ProfileRow {
    #[serde(flatten)]
    profile: &'static AlgorithmProfile,
    chunk_size_bytes: usize,
    max_chunk_offset: u64,
}

/// Execute the profiles subcommand.
pub fn run_profiles(args: &ProfilesArgs) -> anyhow::Result<u8> {
    println!("{}", render(args)?);
    Ok(0)
}

fn render(args: &ProfilesArgs) -> anyhow::Result<String> {
    let rows: Vec<ProfileRow> = EncryptionAlgorithm::all()
        .iter()
        .filter(|alg| args.algorithm.map_or(true, |only| only == **alg))
        .map(|alg| ProfileRow {
            profile: alg.profile(),
            chunk_size_bytes: alg.profile().chunk_size_bytes(),
            max_chunk_offset: max_chunk_offset(*alg),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
