use anyhow::Result;
use serde_json::json;
use sha2::{Digest, Sha256};

use crate::cli::OutputFormat;

pub fn handle(plaintext: &str, output: OutputFormat) -> Result<()> {
    let digest = format!("{:x}", Sha256::digest(plaintext.as_bytes()));

    match output {
        OutputFormat::Json => println!("{}", json!({ "sha256": digest })),
        OutputFormat::Text => println!("{}", digest),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_matches_known_vector() {
        // Matches the development default in config
        let digest = format!("{:x}", Sha256::digest(b"admin"));
        assert_eq!(
            digest,
            "8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918"
        );
    }
}
