//! Portable implementation of the ButterKnife evaluator.
//!
//! Fully self-contained scalar fallback, producing byte-identical results
//! to the AES-NI kernel on every input.

use self::utils::{aes_round, xor_block};
use crate::kernels::constants::{
    BLOCK_SIZE, BRANCH_ROUNDS, NUM_BRANCHES, OUTPUT_SIZE, TRUNK_ROUNDS,
};
use crate::tweakey::{self, branch_key};

mod utils;

// =============================================================================
// PUBLIC ENTRY POINT
// =============================================================================

/// Portable software evaluation of the TPRF.
///
/// Trunk, fork, eight branch tails, feed-forward mask. The branches run
/// sequentially here; the hardware kernel drives them as parallel lanes.
pub fn eval(
    message: &[u8; BLOCK_SIZE],
    tweak: &[u8; BLOCK_SIZE],
    key: &[u8; BLOCK_SIZE],
    out: &mut [u8; OUTPUT_SIZE],
) {
    const ZERO: [u8; BLOCK_SIZE] = [0u8; BLOCK_SIZE];

    let rtk = tweakey::schedule(tweak, key);

    // Trunk: whitening, six keyed rounds, one zero-key closing round.
    let mut state = xor_block(message, &rtk[0]);
    for tk in rtk.iter().take(TRUNK_ROUNDS + 1).skip(1) {
        state = aes_round(&state, tk);
    }

    // Fork: every branch starts from the trunk output, which doubles as
    // the feed-forward mask.
    let fork = aes_round(&state, &ZERO);

    for (slot, chunk) in out.chunks_exact_mut(BLOCK_SIZE).enumerate() {
        debug_assert!(slot < NUM_BRANCHES);
        let constant = (slot + 1) as u8;

        // Per-branch whitening with the column-2-differentiated tweakey.
        let mut branch = xor_block(&fork, &branch_key(&rtk[7], constant));
        for r in 1..=BRANCH_ROUNDS {
            branch = aes_round(&branch, &branch_key(&rtk[7 + r], constant));
        }
        branch = aes_round(&branch, &ZERO);

        // Final tweakey, then the feed-forward mask closes the branch.
        let masked = xor_block(&xor_block(&branch, &branch_key(&rtk[15], constant)), &fork);
        chunk.copy_from_slice(&masked);
    }
}
