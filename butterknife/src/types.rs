//! Shared types used across the ButterKnife library.

use crate::kernels::constants::{BLOCK_SIZE, OUTPUT_SIZE};

// =============================================================================
// KERNEL INTERFACE
// =============================================================================

/// Unified kernel function signature: `(message, tweak, key, output)`.
///
/// The hardware backend (AES-NI) and the portable fallback implement this
/// same signature so the dispatcher can swap them at runtime. The output
/// buffer is fully written on every call; there are no error paths.
pub type KernelFn = fn(
    &[u8; BLOCK_SIZE],
    &[u8; BLOCK_SIZE],
    &[u8; BLOCK_SIZE],
    &mut [u8; OUTPUT_SIZE],
);
