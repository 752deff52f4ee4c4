//! ButterKnife Kernel Constants
//!
//! Structural sizes of the construction plus the constants of the
//! Deoxys-BC-256 tweakey schedule: the round-constant table, the fixed
//! row constants, and the H byte permutation.

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// AES state / block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Number of parallel output branches.
pub const NUM_BRANCHES: usize = 8;

/// Output size in bytes (eight 128-bit branches).
pub const OUTPUT_SIZE: usize = NUM_BRANCHES * BLOCK_SIZE;

/// Number of round tweakeys produced by the schedule.
pub const SCHEDULE_LEN: usize = 16;

/// Keyed AES rounds in the pre-fork trunk (rounds 1..=6).
///
/// The trunk is seven rounds in total: the seventh is a full round with an
/// all-zero key, so it consumes no tweakey.
pub const TRUNK_ROUNDS: usize = 6;

/// Keyed AES rounds in each post-fork branch tail (rounds 1..=7).
///
/// Each tail is eight rounds in total; as in the trunk, the closing round
/// uses an all-zero key.
pub const BRANCH_ROUNDS: usize = 7;

/// AES GF(2^8) reduction polynomial: x^8 + x^4 + x^3 + x + 1
pub const GF_POLY: u8 = 0x1b;

// =============================================================================
// TWEAKEY SCHEDULE
// =============================================================================

/// Round-constant table injected into column 1 of each round tweakey.
///
/// 17 entries as published; only entries 0..16 are consumed by the
/// 16-tweakey schedule. The trailing 0x72 is dead and does not imply an
/// additional round.
pub const RCON: [u8; 17] = [
    0x2f, 0x5e, 0xbc, 0x63, 0xc6, 0x97, 0x35, 0x6a, 0xd4, 0xb3, 0x7d, 0xfa, 0xef, 0xc5, 0x91,
    0x39, 0x72,
];

/// Fixed row constants injected into column 0 of every round tweakey.
pub const ROW_CONSTANTS: [u8; 4] = [0x01, 0x02, 0x04, 0x08];

/// H byte-position permutation, applied each round to both tweakey halves:
/// `new[H_PERM[i]] = old[i]`.
pub const H_PERM: [usize; 16] = [1, 6, 11, 12, 5, 10, 15, 0, 9, 14, 3, 4, 13, 2, 7, 8];
