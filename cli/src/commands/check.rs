//! Check Command
//!
//! Verify checksums from file (like sha256sum -c).

use anyhow::{Context, Result};
use nocturne::Variant;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use super::hash::{read_input, VariantArg};

// =============================================================================
// CHECK
// =============================================================================

/// Verify checksums from a checksum file.
pub fn check_mode(checksum_file: &PathBuf, variant: VariantArg) -> Result<()> {
    let variant = Variant::from(variant);
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Format: "hash  filename" (two spaces)
        let parts: Vec<&str> = line.splitn(2, "  ").collect();
        if parts.len() != 2 {
            eprintln!("Warning: Invalid format: {line}");
            continue;
        }

        let expected_hash = parts[0].trim();
        let file_path = parts[1].trim();
        total += 1;

        match read_input(&PathBuf::from(file_path)) {
            Ok(data) => {
                let actual_hash = hex::encode(nocturne::hash(&data, variant));

                if actual_hash == expected_hash {
                    println!("{file_path}: OK");
                } else {
                    println!("{file_path}: FAILED");
                    failed += 1;
                }
            }
            Err(e) => {
                println!("{file_path}: FAILED ({e})");
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} checksums verified");
    } else {
        eprintln!("WARNING: {failed} of {total} checksums did NOT match");
        std::process::exit(1);
    }

    Ok(())
}
