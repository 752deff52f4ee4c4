#![cfg_attr(not(feature = "std"), no_std)]

//! # ButterKnife
//!
//! Tweakable pseudorandom function (TPRF) expanding one 128-bit message
//! block, under a 128-bit key and a 128-bit tweak, into 1024 bits of
//! pseudorandom output arranged as eight 128-bit branches.
//!
//! The construction is masked Iterate-Fork-Iterate over the Deoxys-BC-256
//! tweakey schedule with AES round transformations: a seven-round trunk,
//! a fork into eight parallel eight-round tails whose round keys differ in
//! a single state column, and a final feed-forward mask derived from the
//! fork state.

//! # Usage
//! ```rust
//! let message = [0u8; 16];
//! let tweak = [0u8; 16];
//! let key = [0u8; 16];
//!
//! let out = butterknife::eval(&message, &tweak, &key);
//! assert_eq!(out.len(), 128);
//!
//! // Branch i occupies bytes [16 * i, 16 * (i + 1)).
//! let branch0 = &out[0..16];
//! assert_ne!(branch0, &[0u8; 16]);
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod engine;
// Re-export internal kernels for benchmarking/testing if needed, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test/bench use only
mod oneshot;
#[doc(hidden)]
pub mod tweakey; // Public for test use only
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use kernels::constants::{BLOCK_SIZE, NUM_BRANCHES, OUTPUT_SIZE};
pub use oneshot::{eval, eval_into};

/// Returns the name of the hardware backend currently in use.
#[must_use]
pub fn active_backend() -> &'static str {
    engine::get_active_backend_name()
}
