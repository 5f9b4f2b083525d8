//! Cross-Backend Consistency Tests
//!
//! Verifies that the AES-NI and portable kernels produce IDENTICAL digests,
//! so CPU feature detection never alters the hash. On machines without
//! AES-NI the dispatcher already picks the portable kernel and the
//! comparison degenerates to a determinism check.

use nocturne::{hash, hash_with_kernel, kernels, Scratchpad, Variant};

// =============================================================================
// AUTO VS PORTABLE
// =============================================================================

#[test]
fn auto_vs_portable_full() {
    let scenarios: Vec<(&str, Vec<u8>)> = vec![
        ("Empty", vec![]),
        ("Small", b"Nocturne".to_vec()),
        ("Rate boundary (136)", vec![7u8; 136]),
        ("Rate boundary (137)", vec![7u8; 137]),
        ("Large (1024)", vec![0xAAu8; 1024]),
    ];

    let mut pad = Scratchpad::new(Variant::Full).unwrap();
    for (name, input) in scenarios {
        let auto = hash(&input, Variant::Full);
        let portable = hash_with_kernel(&input, &mut pad, kernels::portable::transform);

        assert_eq!(auto, portable, "Mismatch Auto vs Portable: {name}");
    }
}

#[test]
fn auto_vs_portable_light() {
    let scenarios: Vec<(&str, Vec<u8>)> = vec![
        ("Empty", vec![]),
        ("Small", b"Nocturne".to_vec()),
        ("Unaligned (63)", vec![3u8; 63]),
    ];

    let mut pad = Scratchpad::new(Variant::Light).unwrap();
    for (name, input) in scenarios {
        let auto = hash(&input, Variant::Light);
        let portable = hash_with_kernel(&input, &mut pad, kernels::portable::transform);

        assert_eq!(auto, portable, "Mismatch Auto vs Portable: {name}");
    }
}

// =============================================================================
// RANDOM INPUTS
// =============================================================================

#[test]
fn auto_vs_portable_random_lengths() {
    // Simple pseudo-random generator to avoid dependencies
    let mut rng = 0xDEAD_BEEF_CAFE_BABE_u64;
    let mut next_u64 = || {
        rng = rng.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        rng
    };

    let mut pad = Scratchpad::new(Variant::Light).unwrap();
    for _ in 0..8 {
        let len = (next_u64() % 512) as usize;
        let mut input = vec![0u8; len];
        for b in &mut input {
            *b = (next_u64() & 0xFF) as u8;
        }

        let auto = hash(&input, Variant::Light);
        let portable = hash_with_kernel(&input, &mut pad, kernels::portable::transform);

        assert_eq!(
            auto, portable,
            "Mismatch Auto vs Portable on random input len={len}"
        );
    }
}

// =============================================================================
// SCRATCHPAD INDEPENDENCE
// =============================================================================

#[test]
fn digest_independent_of_scratchpad_reuse() {
    let mut pad = Scratchpad::new(Variant::Light).unwrap();

    let first = nocturne::hash_with_scratchpad(b"reuse", &mut pad);
    // Leave garbage from an unrelated input in the buffer, then re-hash.
    let _ = nocturne::hash_with_scratchpad(b"garbage", &mut pad);
    let second = nocturne::hash_with_scratchpad(b"reuse", &mut pad);

    assert_eq!(first, second);
    assert_eq!(first, hash(b"reuse", Variant::Light));
}
