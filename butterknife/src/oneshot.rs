//! Public API Layer

use crate::engine::dispatcher;
use crate::kernels::constants::{BLOCK_SIZE, OUTPUT_SIZE};

// =============================================================================
// EVALUATION
// =============================================================================

/// Evaluate the TPRF: expand one 16-byte message block, under a 16-byte
/// tweak and a 16-byte key, into 128 bytes of pseudorandom output.
///
/// Branch `i` of the output occupies bytes `[16 * i, 16 * (i + 1))`.
/// The function is total: any input byte values are valid and evaluation
/// never fails.
///
/// # Example
/// ```rust
/// let out = butterknife::eval(&[0u8; 16], &[0u8; 16], &[0u8; 16]);
/// assert_ne!(out, [0u8; 128]);
/// ```
#[must_use]
#[inline]
pub fn eval(
    message: &[u8; BLOCK_SIZE],
    tweak: &[u8; BLOCK_SIZE],
    key: &[u8; BLOCK_SIZE],
) -> [u8; OUTPUT_SIZE] {
    let mut out = [0u8; OUTPUT_SIZE];
    eval_into(message, tweak, key, &mut out);
    out
}

/// Evaluate the TPRF into a caller-provided output buffer.
///
/// The buffer is fully written on every call; there are no partial writes
/// and no error paths.
#[inline]
pub fn eval_into(
    message: &[u8; BLOCK_SIZE],
    tweak: &[u8; BLOCK_SIZE],
    key: &[u8; BLOCK_SIZE],
    out: &mut [u8; OUTPUT_SIZE],
) {
    let kernel = dispatcher::get_best_kernel();
    kernel(message, tweak, key, out);
}
