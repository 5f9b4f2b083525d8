//! Nocturne CLI
//!
//! Memory-hard hash command-line tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_files, VariantArg};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "nocturne")]
#[command(about = "CryptoNight-family memory-hard hash", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand); use '-' for stdin
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Scratchpad variant to hash with
    #[arg(short, long, value_enum, default_value_t = VariantArg::Full)]
    variant: VariantArg,

    /// Print the active hash backend and exit
    #[arg(long)]
    backend: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.backend {
        println!("{}", nocturne::active_backend());
        return Ok(());
    }

    match &cli.command {
        Some(Commands::Check { checksum_file }) => check_mode(checksum_file, cli.variant)?,
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: nocturne [FILE]... or nocturne --help");
                std::process::exit(1);
            }

            hash_files(&cli.files, cli.variant)?;
        }
    }

    Ok(())
}
