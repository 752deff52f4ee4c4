//! Distance Command
//!
//! Flip each of the 128 message bits in turn and report how many output
//! bits change per branch (Rayon fans the evaluations out across cores).

use anyhow::Result;
use rayon::prelude::*;

use crate::commands::parse_block;

fn hamming(a: &[u8], b: &[u8]) -> u32 {
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

// =============================================================================
// DISTANCE
// =============================================================================

/// Report per-branch Hamming distances for every single-bit message flip.
pub fn distance_mode(message: &str, tweak: &str, key: &str) -> Result<()> {
    let message = parse_block("message", message)?;
    let tweak = parse_block("tweak", tweak)?;
    let key = parse_block("key", key)?;

    let base = butterknife::eval(&message, &tweak, &key);

    let rows: Vec<(usize, [u32; 8], f64)> = (0..128usize)
        .into_par_iter()
        .map(|bit| {
            let mut flipped = message;
            flipped[bit / 8] ^= 1 << (bit % 8);
            let out = butterknife::eval(&flipped, &tweak, &key);

            let mut dists = [0u32; 8];
            for (i, dist) in dists.iter_mut().enumerate() {
                *dist = hamming(&base[i * 16..(i + 1) * 16], &out[i * 16..(i + 1) * 16]);
            }
            let mean = f64::from(dists.iter().sum::<u32>()) / 8.0;
            (bit, dists, mean)
        })
        .collect();

    println!("bit | per-branch Hamming distance     | mean");
    for (bit, dists, mean) in &rows {
        let cells: Vec<String> = dists.iter().map(|d| format!("{d:3}")).collect();
        println!("{bit:3} | {} | {mean:5.1}", cells.join(" "));
    }

    let overall: f64 = rows.iter().map(|(_, _, mean)| mean).sum::<f64>() / rows.len() as f64;
    println!("mean branch distance over all flips: {overall:.1} bits (ideal 64)");

    Ok(())
}
