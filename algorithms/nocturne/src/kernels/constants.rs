//! Nocturne Kernel Constants
//!
//! Fixed parameters of the CryptoNight-family construction. These are part of
//! the wire format: changing any of them changes every digest.

// =============================================================================
// SCRATCHPAD GEOMETRY
// =============================================================================

/// Full-mode scratchpad: 2 MiB.
pub const MEMORY: usize = 1 << 21;

/// Light-mode scratchpad: 512 KiB.
pub const MEMORY_LIGHT: usize = 1 << 19;

/// Full-mode mixing-loop length (the loop body runs `ITER / 2` times and
/// performs two sub-iterations per pass).
pub const ITER: usize = 1 << 20;

/// Light-mode mixing-loop length.
pub const ITER_LIGHT: usize = 1 << 18;

// =============================================================================
// BLOCK STRUCTURE
// =============================================================================

/// All scratchpad addressing happens in 16-byte AES blocks.
pub const AES_BLOCK_SIZE: usize = 16;

/// The two AES keys are 32-byte slices of the sponge state.
pub const AES_KEY_SIZE: usize = 32;

/// The rolling state used for fill and re-absorb is 8 blocks (128 bytes).
pub const INIT_SIZE_BLK: usize = 8;

/// Byte size of the rolling state.
pub const INIT_SIZE_BYTE: usize = INIT_SIZE_BLK * AES_BLOCK_SIZE;

/// Round keys consumed per pseudo-round. The AES-256 schedule emits more;
/// the construction only ever uses the first ten.
pub const ROUND_KEYS: usize = 10;

// =============================================================================
// SPONGE LAYOUT
// =============================================================================

/// Size of the Keccak-1600 sponge state.
pub const KECCAK_STATE_SIZE: usize = 200;

/// Offset of AES key 0 in the sponge state.
pub const KEY0_OFFSET: usize = 0;

/// Offset of AES key 1 in the sponge state.
pub const KEY1_OFFSET: usize = 32;

/// Offset of the 128-byte rolling-state seed (`init`) in the sponge state.
pub const INIT_OFFSET: usize = 64;

/// Hash output size in bytes (256-bit digest).
pub const HASH_SIZE: usize = 32;
