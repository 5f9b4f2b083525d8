//! Public API Layer
//!
use subtle::ConstantTimeEq;

use crate::engine::dispatcher;
use crate::finalizer;
use crate::kernels::constants::HASH_SIZE;
use crate::scratchpad::Scratchpad;
use crate::sponge;
use crate::types::{Error, KernelFn, Variant};

// =============================================================================
// HASHING
// =============================================================================

/// Compute the memory-hard hash of `data`.
///
/// Allocates a scratchpad sized to `variant` for the duration of the call.
/// Treats allocation failure as fatal; use [`try_hash`] to observe it.
///
/// # Example
/// ```rust
/// use nocturne::Variant;
///
/// let digest = nocturne::hash(b"input", Variant::Light);
/// assert_eq!(digest.len(), 32);
/// ```
#[must_use]
#[inline]
pub fn hash(data: &[u8], variant: Variant) -> [u8; HASH_SIZE] {
    #[allow(clippy::expect_used)] // Infallible API; fails only on allocator exhaustion
    try_hash(data, variant).expect("scratchpad allocation failed")
}

/// Compute the memory-hard hash of `data`, reporting allocation failure.
///
/// # Errors
///
/// Returns [`Error::ResourceExhausted`] when the scratchpad cannot be
/// reserved. No partial digest is ever produced.
pub fn try_hash(data: &[u8], variant: Variant) -> Result<[u8; HASH_SIZE], Error> {
    let mut scratchpad = Scratchpad::new(variant)?;
    Ok(hash_with_scratchpad(data, &mut scratchpad))
}

/// Compute the hash using a caller-owned scratchpad.
///
/// The variant is taken from the scratchpad. Mining loops reuse one
/// allocation across nonces this way; the fill phase overwrites the whole
/// buffer, so no state leaks between invocations.
#[must_use]
pub fn hash_with_scratchpad(data: &[u8], scratchpad: &mut Scratchpad) -> [u8; HASH_SIZE] {
    hash_with_kernel(data, scratchpad, dispatcher::get_best_kernel())
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Recompute the hash of `data` and compare against `expected` in constant
/// time (timing attack resistant). Use for share/solution validation.
#[must_use]
pub fn verify(data: &[u8], variant: Variant, expected: &[u8; HASH_SIZE]) -> bool {
    let computed = hash(data, variant);
    computed.ct_eq(expected).into()
}

// =============================================================================
// INTERNAL / TEST SEAM
// =============================================================================

/// Full pipeline with an explicit kernel. Exposed for cross-backend tests
/// and benchmarks; everything else goes through the dispatcher.
#[doc(hidden)]
#[must_use]
pub fn hash_with_kernel(
    data: &[u8],
    scratchpad: &mut Scratchpad,
    kernel: KernelFn,
) -> [u8; HASH_SIZE] {
    let variant = scratchpad.variant();

    let mut state = sponge::absorb(data);
    kernel(&mut state, scratchpad.as_bytes_mut(), variant);
    sponge::permute(&mut state);

    finalizer::finish(&state, variant)
}
