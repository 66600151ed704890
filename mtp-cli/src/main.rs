// File:    main.rs
// Author:  apezoo
// Date:    2025-08-02
//
// Description: Command-line harness for the many-time pad cryptanalysis engine.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Command-line harness exposing the many-time pad cryptanalysis engine
//! as `crack` (crib-less partial recovery) and `decrypt` (crib-based
//! full decryption) subcommands.

use clap::{Parser, Subcommand};
use log::{error, info};
use mtp_core::{CipherMatrix, Crib, Key, crack_partial, detect_spaces};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod cribs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recover plaintext fragments from detected space positions alone
    Crack {
        /// File with one hex-encoded ciphertext line per row
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Derive the shared key from analyst cribs and decrypt every line
    Decrypt {
        /// File with one hex-encoded ciphertext line per row
        #[arg(short, long)]
        input: PathBuf,

        /// Inline crib of the form LINE:OFFSET:TEXT (repeatable)
        #[arg(short, long = "crib", value_name = "SPEC")]
        cribs: Vec<String>,

        /// JSON file holding a crib list
        #[arg(long, value_name = "FILE")]
        crib_file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Crack { input } => run_crack(input),
        Commands::Decrypt {
            input,
            cribs,
            crib_file,
        } => run_decrypt(input, cribs, crib_file.as_deref()),
    }
}

fn run_crack(input: &Path) -> ExitCode {
    let matrix = match load_matrix(input) {
        Ok(matrix) => matrix,
        Err(e) => {
            error!("failed to load ciphertext lines: {e}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "loaded {} lines, {} aligned columns",
        matrix.line_count(),
        matrix.width()
    );

    let mask = detect_spaces(&matrix);
    for line in crack_partial(&matrix, &mask) {
        println!("{line}");
    }
    ExitCode::SUCCESS
}

fn run_decrypt(input: &Path, inline_specs: &[String], crib_file: Option<&Path>) -> ExitCode {
    let matrix = match load_matrix(input) {
        Ok(matrix) => matrix,
        Err(e) => {
            error!("failed to load ciphertext lines: {e}");
            return ExitCode::FAILURE;
        }
    };

    let cribs = match collect_cribs(inline_specs, crib_file) {
        Ok(cribs) if cribs.is_empty() => {
            error!("at least one crib is required; pass --crib or --crib-file");
            return ExitCode::FAILURE;
        }
        Ok(cribs) => cribs,
        Err(e) => {
            error!("failed to collect cribs: {e}");
            return ExitCode::FAILURE;
        }
    };

    let key = match Key::derive(&matrix, &cribs) {
        Ok(key) => key,
        Err(e) => {
            error!("key derivation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    match key.decrypt(&matrix) {
        Ok(plaintexts) => {
            for line in plaintexts {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(
                "decryption failed: {e} (cribs cover a contiguous prefix of {} columns)",
                key.covered_prefix()
            );
            ExitCode::FAILURE
        }
    }
}

/// Reads one hex-encoded ciphertext line per non-empty input line.
fn load_matrix(path: &Path) -> Result<CipherMatrix, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let matrix = CipherMatrix::from_hex_lines(&lines)?;
    Ok(matrix)
}

fn collect_cribs(
    inline_specs: &[String],
    crib_file: Option<&Path>,
) -> Result<Vec<Crib>, Box<dyn std::error::Error>> {
    let mut cribs = match crib_file {
        Some(path) => cribs::load_file(path)?,
        None => Vec::new(),
    };
    for spec in inline_specs {
        cribs.push(cribs::parse_spec(spec)?);
    }
    Ok(cribs)
}
