//! Eval Command
//!
//! Evaluate one (message, tweak, key) triple and print the branches.

use anyhow::{Context, Result};

/// Parse a 16-byte block from 32 hex digits.
pub fn parse_block(label: &str, s: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(s).with_context(|| format!("{label} is not valid hex: {s}"))?;
    bytes
        .try_into()
        .map_err(|_| anyhow::anyhow!("{label} must be exactly 16 bytes (32 hex digits)"))
}

// =============================================================================
// EVAL
// =============================================================================

/// Evaluate the TPRF and print the eight branches in hex.
pub fn eval_mode(message: &str, tweak: &str, key: &str) -> Result<()> {
    let message = parse_block("message", message)?;
    let tweak = parse_block("tweak", tweak)?;
    let key = parse_block("key", key)?;

    let out = butterknife::eval(&message, &tweak, &key);

    println!("backend: {}", butterknife::active_backend());
    for (i, branch) in out.chunks_exact(16).enumerate() {
        println!("branch {i}: {}", hex::encode(branch));
    }

    Ok(())
}
