//! Portable kernel.
//!
//! Fully self-contained software rendition of the memory-hard middle,
//! producing byte-identical results to the AES-NI kernel on every input.

use crate::kernels::block_offset;
use crate::kernels::constants::{
    AES_KEY_SIZE, INIT_OFFSET, INIT_SIZE_BLK, INIT_SIZE_BYTE, KECCAK_STATE_SIZE, KEY0_OFFSET,
    KEY1_OFFSET,
};
use crate::types::Variant;

use self::utils::{
    aesenc, expand_key, lo64, mul_half, pseudo_round, sum_half_blocks, swap_blocks, xor_blocks,
    Block,
};

pub mod utils;

// =============================================================================
// KERNEL ENTRY
// =============================================================================

/// Run scratchpad fill, the mixing loop, and re-absorb over `state`.
pub fn transform(state: &mut [u8; KECCAK_STATE_SIZE], scratchpad: &mut [u8], variant: Variant) {
    debug_assert_eq!(scratchpad.len(), variant.memory());

    explode(state, scratchpad);
    mix(state, scratchpad, variant);
    implode(state, scratchpad);
}

// =============================================================================
// PHASES
// =============================================================================

/// Seed the scratchpad with a stream of AES iterates of the sponge's `init`
/// region, keyed by AES key 0.
fn explode(state: &[u8; KECCAK_STATE_SIZE], scratchpad: &mut [u8]) {
    let keys = expand_key(
        state[KEY0_OFFSET..KEY0_OFFSET + AES_KEY_SIZE]
            .try_into()
            .unwrap(),
    );
    let mut text = load_text(state);

    for chunk in scratchpad.chunks_exact_mut(INIT_SIZE_BYTE) {
        for (j, block) in text.iter_mut().enumerate() {
            pseudo_round(block, &keys);
            chunk[j * 16..j * 16 + 16].copy_from_slice(block);
        }
    }
}

/// The memory-hard loop: data-dependent reads, one AES round or a
/// multiply-add per sub-iteration, write-backs through the register shuffle.
fn mix(state: &[u8; KECCAK_STATE_SIZE], scratchpad: &mut [u8], variant: Variant) {
    let mask = variant.block_mask();

    let mut a = seed_register(state, 0);
    let mut b = seed_register(state, 16);

    for _ in 0..variant.iterations() / 2 {
        // Sub-iteration 1: one AES round with `a` as the round key, written
        // through, then the xor/swap/swap shuffle. The order is part of the
        // construction; `b` deliberately ends up holding the old `a`.
        let p = cell_mut(scratchpad, block_offset(lo64(&a), mask));
        *p = aesenc(p, &a);
        xor_blocks(&mut b, p);
        swap_blocks(&mut b, p);
        swap_blocks(&mut a, &mut b);

        // Sub-iteration 2: low-limb multiply (product limbs stored swapped),
        // carry-free half add, then swap-before-xor against the cell.
        let p = cell_mut(scratchpad, block_offset(lo64(&a), mask));
        let d = mul_half(&a, p);
        sum_half_blocks(&mut b, &d);
        swap_blocks(&mut b, p);
        xor_blocks(&mut b, p);
        swap_blocks(&mut a, &mut b);
    }
}

/// Fold the whole scratchpad back into the rolling state under AES key 1 and
/// write the result over the sponge's `init` region.
fn implode(state: &mut [u8; KECCAK_STATE_SIZE], scratchpad: &[u8]) {
    let keys = expand_key(
        state[KEY1_OFFSET..KEY1_OFFSET + AES_KEY_SIZE]
            .try_into()
            .unwrap(),
    );
    let mut text = load_text(state);

    for chunk in scratchpad.chunks_exact(INIT_SIZE_BYTE) {
        for (j, block) in text.iter_mut().enumerate() {
            xor_blocks(block, chunk[j * 16..j * 16 + 16].try_into().unwrap());
            pseudo_round(block, &keys);
        }
    }

    for (j, block) in text.iter().enumerate() {
        state[INIT_OFFSET + j * 16..INIT_OFFSET + j * 16 + 16].copy_from_slice(block);
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Copy the sponge's 128-byte `init` region into the 8-block rolling state.
fn load_text(state: &[u8; KECCAK_STATE_SIZE]) -> [Block; INIT_SIZE_BLK] {
    core::array::from_fn(|j| {
        state[INIT_OFFSET + j * 16..INIT_OFFSET + j * 16 + 16]
            .try_into()
            .unwrap()
    })
}

/// `k[off..off+16] XOR k[off+32..off+48]`: the register seeds for the loop.
fn seed_register(state: &[u8; KECCAK_STATE_SIZE], off: usize) -> Block {
    let mut reg: Block = state[off..off + 16].try_into().unwrap();
    xor_blocks(&mut reg, state[off + 32..off + 48].try_into().unwrap());
    reg
}

/// View one 16-byte scratchpad cell as a mutable block.
fn cell_mut(scratchpad: &mut [u8], offset: usize) -> &mut Block {
    (&mut scratchpad[offset..offset + 16]).try_into().unwrap()
}
