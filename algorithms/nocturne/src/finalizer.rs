//! Finalizer dispatch.
//!
//! The permuted sponge state is condensed by one of the four SHA-3 finalist
//! hashes. Full mode selects by the low two bits of the first state byte;
//! light mode always finishes with BLAKE-256.

use digest::consts::U32;

use crate::kernels::constants::{HASH_SIZE, KECCAK_STATE_SIZE};
use crate::types::Variant;

/// Condense the 200-byte permuted state into the 32-byte digest.
pub(crate) fn finish(state: &[u8; KECCAK_STATE_SIZE], variant: Variant) -> [u8; HASH_SIZE] {
    match variant {
        Variant::Light => blake(state),
        Variant::Full => match state[0] & 3 {
            0 => blake(state),
            1 => groestl(state),
            2 => jh(state),
            _ => skein(state),
        },
    }
}

fn blake(state: &[u8]) -> [u8; HASH_SIZE] {
    use blake_hash::Digest as _;
    blake_hash::Blake256::digest(state).into()
}

fn groestl(state: &[u8]) -> [u8; HASH_SIZE] {
    use digest::Digest as _;
    groestl::Groestl256::digest(state).into()
}

fn jh(state: &[u8]) -> [u8; HASH_SIZE] {
    use digest::Digest as _;
    jh::Jh256::digest(state).into()
}

fn skein(state: &[u8]) -> [u8; HASH_SIZE] {
    use digest::Digest as _;
    skein::Skein256::<U32>::digest(state).into()
}
