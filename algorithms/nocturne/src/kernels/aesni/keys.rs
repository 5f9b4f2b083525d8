//! AES-NI Key Expansion
//!
//! AES-256 schedule via `aeskeygenassist`, truncated to the ten round keys
//! the hash consumes. Follows the Intel "AES New Instructions Set"
//! whitepaper, figure 26; the table matches the software schedule exactly.

use crate::kernels::constants::ROUND_KEYS;

use core::arch::x86_64::{
    __m128i, _mm_aeskeygenassist_si128, _mm_setzero_si128, _mm_shuffle_epi32, _mm_slli_si128,
    _mm_xor_si128,
};

/// The ten expanded round keys.
pub(super) type RoundKeys = [__m128i; ROUND_KEYS];

#[inline]
// SAFETY: SSE2 guaranteed by `expand_key` caller.
unsafe fn assist_even(temp1: &mut __m128i, mut temp2: __m128i) {
    temp2 = _mm_shuffle_epi32(temp2, 0xff);
    let mut temp4 = _mm_slli_si128(*temp1, 0x4);
    *temp1 = _mm_xor_si128(*temp1, temp4);
    temp4 = _mm_slli_si128(temp4, 0x4);
    *temp1 = _mm_xor_si128(*temp1, temp4);
    temp4 = _mm_slli_si128(temp4, 0x4);
    *temp1 = _mm_xor_si128(*temp1, temp4);
    *temp1 = _mm_xor_si128(*temp1, temp2);
}

#[inline]
// SAFETY: AES + SSE2 guaranteed by `expand_key` caller.
unsafe fn assist_odd(temp1: &__m128i, temp3: &mut __m128i) {
    let mut temp4 = _mm_aeskeygenassist_si128(*temp1, 0x0);
    let temp2 = _mm_shuffle_epi32(temp4, 0xaa);
    temp4 = _mm_slli_si128(*temp3, 0x4);
    *temp3 = _mm_xor_si128(*temp3, temp4);
    temp4 = _mm_slli_si128(temp4, 0x4);
    *temp3 = _mm_xor_si128(*temp3, temp4);
    temp4 = _mm_slli_si128(temp4, 0x4);
    *temp3 = _mm_xor_si128(*temp3, temp4);
    *temp3 = _mm_xor_si128(*temp3, temp2);
}

/// Expand a 32-byte key (passed as two loaded blocks) into ten round keys.
// SAFETY: Requires AES + SSE2 (enforced by the dispatcher probe).
#[target_feature(enable = "aes")]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub(super) unsafe fn expand_key(mut temp1: __m128i, mut temp3: __m128i) -> RoundKeys {
    let mut keys = [_mm_setzero_si128(); ROUND_KEYS];
    keys[0] = temp1;
    keys[1] = temp3;

    assist_even(&mut temp1, _mm_aeskeygenassist_si128(temp3, 0x01));
    keys[2] = temp1;
    assist_odd(&temp1, &mut temp3);
    keys[3] = temp3;

    assist_even(&mut temp1, _mm_aeskeygenassist_si128(temp3, 0x02));
    keys[4] = temp1;
    assist_odd(&temp1, &mut temp3);
    keys[5] = temp3;

    assist_even(&mut temp1, _mm_aeskeygenassist_si128(temp3, 0x04));
    keys[6] = temp1;
    assist_odd(&temp1, &mut temp3);
    keys[7] = temp3;

    assist_even(&mut temp1, _mm_aeskeygenassist_si128(temp3, 0x08));
    keys[8] = temp1;
    assist_odd(&temp1, &mut temp3);
    keys[9] = temp3;

    keys
}
