//! Hash command implementation

use std::path::Path;

use nexus_fs::{HashAlgorithm, calculate_hash};

use crate::error::{CliError, Result};

/// Run the hash command
pub fn run_hash(file: &Path, algorithm: &str) -> Result<()> {
    let algorithm = parse_algorithm(algorithm)?;
    let digest = calculate_hash(algorithm, file)?;

    // Same layout as sha1sum and friends
    println!("{}  {}", digest, file.display());
    Ok(())
}

fn parse_algorithm(name: &str) -> Result<HashAlgorithm> {
    name.parse().map_err(|_| {
        let known: Vec<&str> = HashAlgorithm::ALL.iter().map(HashAlgorithm::as_str).collect();
        CliError::user(format!(
            "Unknown hash algorithm '{}'. Valid: {}",
            name,
            known.join(", ")
        ))
    })
}
