pub mod scan;

use std::path::PathBuf;

use clap::Parser;

/// incscan - SourcePawn include scanner
///
/// Extracts documented API declarations from `.inc` files into a JSON array.
#[derive(Parser, Debug)]
#[command(name = "incscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Include directory to scan
    pub include_dir: PathBuf,

    /// Output file (default: sourcemod_api.json, or `output` from incscan.yaml)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
