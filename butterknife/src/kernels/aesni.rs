//! AES-NI Kernel
//!
//! Drives the eight post-fork branches as independent 128-bit lanes with
//! `_mm_aesenc_si128` (one full AES round per instruction, exactly the
//! round transformation this construction uses). Branch round keys differ
//! in column 2, so each lane carries its own key variant and keys are
//! never shared across lanes.

#![allow(clippy::cast_possible_truncation)]

use crate::kernels::constants::{
    BLOCK_SIZE, BRANCH_ROUNDS, NUM_BRANCHES, OUTPUT_SIZE, SCHEDULE_LEN, TRUNK_ROUNDS,
};
use crate::tweakey;

use core::arch::x86_64::{
    __m128i, _mm_aesenc_si128, _mm_loadu_si128, _mm_setzero_si128, _mm_storeu_si128,
    _mm_xor_si128,
};

// =============================================================================
// EVALUATION
// =============================================================================

/// AES-NI evaluation of the TPRF.
// SAFETY: Requires AES/SSE2 CPU features (enforced by dispatcher). All loads
// and stores use fixed-size references; the only pointer arithmetic indexes
// the 128-byte output in 16-byte steps.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn eval(
    message: &[u8; BLOCK_SIZE],
    tweak: &[u8; BLOCK_SIZE],
    key: &[u8; BLOCK_SIZE],
    out: &mut [u8; OUTPUT_SIZE],
) {
    // The schedule is byte-shuffle bound, so it stays scalar; the round
    // tweakeys are loaded into registers once per call.
    let rtk = tweakey::schedule(tweak, key);
    let rk: [__m128i; SCHEDULE_LEN] =
        core::array::from_fn(|r| _mm_loadu_si128(rtk[r].as_ptr().cast()));

    // Column-2 lane masks for the branch constants 1..=8.
    let masks: [__m128i; NUM_BRANCHES] = core::array::from_fn(|i| {
        let mut m = [0u8; BLOCK_SIZE];
        let c = (i + 1) as u8;
        m[8] = c;
        m[9] = c;
        m[10] = c;
        m[11] = c;
        _mm_loadu_si128(m.as_ptr().cast())
    });

    let zero = _mm_setzero_si128();

    // Trunk: whitening, six keyed rounds, one zero-key closing round.
    let mut state = _mm_xor_si128(_mm_loadu_si128(message.as_ptr().cast()), rk[0]);
    for r in 1..=TRUNK_ROUNDS {
        state = _mm_aesenc_si128(state, rk[r]);
    }
    let fork = _mm_aesenc_si128(state, zero);

    // Fork into eight lanes; whitening uses the branch variant of rk[7].
    let mut lanes: [__m128i; NUM_BRANCHES] =
        core::array::from_fn(|i| _mm_xor_si128(fork, _mm_xor_si128(rk[7], masks[i])));

    for r in 1..=BRANCH_ROUNDS {
        let base = rk[7 + r];
        for (lane, mask) in lanes.iter_mut().zip(&masks) {
            *lane = _mm_aesenc_si128(*lane, _mm_xor_si128(base, *mask));
        }
    }

    // Zero-key closing round, final tweakey, feed-forward mask.
    for (i, (lane, mask)) in lanes.iter().zip(&masks).enumerate() {
        let closed = _mm_aesenc_si128(*lane, zero);
        let masked = _mm_xor_si128(closed, _mm_xor_si128(_mm_xor_si128(rk[15], *mask), fork));
        _mm_storeu_si128(out.as_mut_ptr().add(i * BLOCK_SIZE).cast(), masked);
    }
}
