//! AES-NI kernel.
//!
//! Hardware rendition of the memory-hard middle. Every 16-byte block lives in
//! an `__m128i`; the round primitive is a single `aesenc`, and the mixing
//! loop keeps its registers in vector form throughout.

#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod keys;

use crate::kernels::block_offset;
use crate::kernels::constants::{
    INIT_OFFSET, INIT_SIZE_BLK, INIT_SIZE_BYTE, KECCAK_STATE_SIZE, KEY1_OFFSET,
};
use crate::types::Variant;

use core::arch::x86_64::{
    __m128i, _mm_add_epi64, _mm_aesenc_si128, _mm_cvtsi128_si64, _mm_loadu_si128,
    _mm_set_epi64x, _mm_storeu_si128, _mm_xor_si128,
};

// =============================================================================
// KERNEL ENTRY
// =============================================================================

/// Run scratchpad fill, the mixing loop, and re-absorb over `state`.
// SAFETY: Requires AES + SSE2 CPU features (enforced by the dispatcher probe).
// All scratchpad accesses go through `block_offset`, which masks into bounds.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn transform(
    state: &mut [u8; KECCAK_STATE_SIZE],
    scratchpad: &mut [u8],
    variant: Variant,
) {
    debug_assert_eq!(scratchpad.len(), variant.memory());

    explode(state, scratchpad);
    mix(state, scratchpad, variant);
    implode(state, scratchpad);
}

// =============================================================================
// PHASES
// =============================================================================

// SAFETY: AES + SSE2 guaranteed by `transform`.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
unsafe fn explode(state: &[u8; KECCAK_STATE_SIZE], scratchpad: &mut [u8]) {
    let k = state.as_ptr();
    let keys = keys::expand_key(loadu(k), loadu(k.add(16)));
    let mut text = load_text(state);

    for chunk in scratchpad.chunks_exact_mut(INIT_SIZE_BYTE) {
        for block in &mut text {
            for key in &keys {
                *block = _mm_aesenc_si128(*block, *key);
            }
        }
        for (j, block) in text.iter().enumerate() {
            _mm_storeu_si128(chunk.as_mut_ptr().add(j * 16).cast(), *block);
        }
    }
}

// SAFETY: AES + SSE2 guaranteed by `transform`.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
unsafe fn mix(state: &[u8; KECCAK_STATE_SIZE], scratchpad: &mut [u8], variant: Variant) {
    let mask = variant.block_mask();
    let sp = scratchpad.as_mut_ptr();
    let k = state.as_ptr();

    let mut a = _mm_xor_si128(loadu(k), loadu(k.add(32)));
    let mut b = _mm_xor_si128(loadu(k.add(16)), loadu(k.add(48)));

    for _ in 0..variant.iterations() / 2 {
        // Sub-iteration 1: AES round keyed by `a`, written through; the
        // xor/swap/swap shuffle collapses to cell = b ^ c, b = a, a = c.
        let p = sp.add(block_offset(_mm_cvtsi128_si64(a) as u64, mask));
        let c = _mm_aesenc_si128(loadu(p), a);
        _mm_storeu_si128(p.cast(), _mm_xor_si128(b, c));
        b = a;
        a = c;

        // Sub-iteration 2: low-limb multiply plus carry-free half add; the
        // swap-before-xor leaves a = (b + d) ^ cell with b + d stored.
        let p = sp.add(block_offset(_mm_cvtsi128_si64(a) as u64, mask));
        let m = loadu(p);
        let t = _mm_add_epi64(b, mul_half(a, m));
        _mm_storeu_si128(p.cast(), t);
        b = a;
        a = _mm_xor_si128(t, m);
    }
}

// SAFETY: AES + SSE2 guaranteed by `transform`.
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
unsafe fn implode(state: &mut [u8; KECCAK_STATE_SIZE], scratchpad: &[u8]) {
    let k = state.as_ptr();
    let keys = keys::expand_key(loadu(k.add(KEY1_OFFSET)), loadu(k.add(KEY1_OFFSET + 16)));
    let mut text = load_text(state);

    for chunk in scratchpad.chunks_exact(INIT_SIZE_BYTE) {
        for (j, block) in text.iter_mut().enumerate() {
            *block = _mm_xor_si128(*block, loadu(chunk.as_ptr().add(j * 16)));
            for key in &keys {
                *block = _mm_aesenc_si128(*block, *key);
            }
        }
    }

    for (j, block) in text.iter().enumerate() {
        _mm_storeu_si128(state.as_mut_ptr().add(INIT_OFFSET + j * 16).cast(), *block);
    }
}

// =============================================================================
// HELPERS
// =============================================================================

// SAFETY: callers pass pointers with at least 16 readable bytes.
#[inline]
unsafe fn loadu(p: *const u8) -> __m128i {
    _mm_loadu_si128(p.cast())
}

/// Low-limb 64x64 -> 128 multiply with the product limbs stored swapped
/// (high half first). The placement is part of the wire format.
// SAFETY: SSE2 guaranteed by `mix`.
#[inline]
unsafe fn mul_half(a: __m128i, b: __m128i) -> __m128i {
    let lhs = _mm_cvtsi128_si64(a) as u64;
    let rhs = _mm_cvtsi128_si64(b) as u64;
    let product = u128::from(lhs) * u128::from(rhs);

    _mm_set_epi64x(product as i64, (product >> 64) as i64)
}

/// Copy the sponge's 128-byte `init` region into the 8-block rolling state.
// SAFETY: SSE2 guaranteed by callers; `state` always holds 200 bytes.
#[inline]
unsafe fn load_text(state: &[u8; KECCAK_STATE_SIZE]) -> [__m128i; INIT_SIZE_BLK] {
    // SAFETY: `INIT_OFFSET + 8 * 16` stays within the 200-byte state.
    core::array::from_fn(|j| unsafe { loadu(state.as_ptr().add(INIT_OFFSET + j * 16)) })
}
