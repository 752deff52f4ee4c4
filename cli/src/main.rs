//! ButterKnife CLI
//!
//! Demonstration front-end: evaluate the TPRF and inspect its diffusion.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{distance_mode, eval_mode};

const ZERO_HEX: &str = "00000000000000000000000000000000";

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "butterknife")]
#[command(about = "Tweakable PRF: one 128-bit block to eight 128-bit branches", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the TPRF and print the eight output branches in hex
    Eval {
        /// 16-byte message block as 32 hex digits
        #[arg(short, long, default_value = ZERO_HEX)]
        message: String,
        /// 16-byte tweak as 32 hex digits
        #[arg(short, long, default_value = ZERO_HEX)]
        tweak: String,
        /// 16-byte key as 32 hex digits
        #[arg(short, long, default_value = ZERO_HEX)]
        key: String,
    },
    /// Flip each message bit in turn and report per-branch Hamming distances
    Distance {
        /// 16-byte message block as 32 hex digits
        #[arg(short, long, default_value = ZERO_HEX)]
        message: String,
        /// 16-byte tweak as 32 hex digits
        #[arg(short, long, default_value = ZERO_HEX)]
        tweak: String,
        /// 16-byte key as 32 hex digits
        #[arg(short, long, default_value = ZERO_HEX)]
        key: String,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Eval {
            message,
            tweak,
            key,
        } => eval_mode(message, tweak, key)?,
        Commands::Distance {
            message,
            tweak,
            key,
        } => distance_mode(message, tweak, key)?,
    }

    Ok(())
}
