//! Hash Command
//!
//! File hashing with automatic parallelization via Rayon. Inputs are read
//! whole: the hash is one-shot by construction, and proof-of-work blobs are
//! tiny next to the scratchpad.

use anyhow::{Context, Result};
use clap::ValueEnum;
use nocturne::{Scratchpad, Variant};
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Scratchpad variant selector.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum VariantArg {
    /// 2 MiB scratchpad, 2^20 iterations
    Full,
    /// 512 KiB scratchpad, 2^18 iterations
    Light,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Full => Variant::Full,
            VariantArg::Light => Variant::Light,
        }
    }
}

/// Read one input: a regular file, or stdin for `-`.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut data = Vec::new();
        std::io::stdin()
            .read_to_end(&mut data)
            .context("Failed to read stdin")?;
        return Ok(data);
    }

    std::fs::read(path).with_context(|| format!("Failed to read: {}", path.display()))
}

/// Hash files (Rayon parallelizes automatically when beneficial).
pub fn hash_files(files: &[PathBuf], variant: VariantArg) -> Result<()> {
    let variant = Variant::from(variant);
    let results = Mutex::new(Vec::with_capacity(files.len()));
    let errors = Mutex::new(Vec::new());

    files.par_iter().for_each(|file_path| {
        let result = (|| -> Result<String> {
            let data = read_input(file_path)?;
            let mut pad = Scratchpad::new(variant)?;
            let digest = nocturne::hash_with_scratchpad(&data, &mut pad);
            Ok(hex::encode(digest))
        })();

        match result {
            Ok(hex_hash) => {
                results.lock().unwrap().push((file_path.clone(), hex_hash));
            }
            Err(e) => {
                errors.lock().unwrap().push((file_path.clone(), e));
            }
        }
    });

    let mut results = results.into_inner().unwrap();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    for (path, hex_hash) in results {
        println!("{}  {}", hex_hash, path.display());
    }

    let errors = errors.into_inner().unwrap();
    for (path, e) in &errors {
        eprintln!("nocturne: {}: {e:#}", path.display());
    }
    if !errors.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
