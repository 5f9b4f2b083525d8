//! Keccak sponge collaborators.
//!
//! Absorption runs through `sha3::Keccak256Full` (rate 136, original 0x01
//! Keccak padding, full 200-byte state output); the mid-hash permutation is
//! `tiny_keccak::keccakf`. Lane conversion is explicit little-endian so the
//! digest is identical on big-endian hosts.

use sha3::{Digest, Keccak256Full};
use tiny_keccak::keccakf;

use crate::kernels::constants::KECCAK_STATE_SIZE;

/// Absorb `data` into a fresh 200-byte sponge state.
pub(crate) fn absorb(data: &[u8]) -> [u8; KECCAK_STATE_SIZE] {
    let mut state = [0u8; KECCAK_STATE_SIZE];
    state.copy_from_slice(&Keccak256Full::digest(data));
    state
}

/// Apply one Keccak-f[1600] permutation to the state in place.
pub(crate) fn permute(state: &mut [u8; KECCAK_STATE_SIZE]) {
    let mut lanes = [0u64; 25];
    for (lane, chunk) in lanes.iter_mut().zip(state.chunks_exact(8)) {
        *lane = u64::from_le_bytes(chunk.try_into().unwrap());
    }

    keccakf(&mut lanes);

    for (chunk, lane) in state.chunks_exact_mut(8).zip(lanes.iter()) {
        chunk.copy_from_slice(&lane.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn absorb_yields_key_material_views() {
        let state = absorb(b"This is a test");
        assert_eq!(
            state[0..32],
            hex!("93b90fab55adf4e98787d33a38e71106e8c016f1a124dfc784f3cca4d938b1af")
        );
        assert_eq!(
            state[32..64],
            hex!("67ddb7b96d09cbf61a34304fe8c63bb2ebc78902842fdc97e8b9ada086375818")
        );
        assert_eq!(state[64..80], hex!("405e91deec2a0478578825373af7ea64"));
    }

    #[test]
    fn permute_matches_keccak_f1600() {
        let mut state = [0u8; KECCAK_STATE_SIZE];
        permute(&mut state);
        // First two lanes of Keccak-f[1600] applied to the zero state.
        assert_eq!(state[0..8], 0xf125_8f79_40e1_dde7_u64.to_le_bytes());
        assert_eq!(state[8..16], 0x84d5_ccf9_33c0_478a_u64.to_le_bytes());
    }
}
