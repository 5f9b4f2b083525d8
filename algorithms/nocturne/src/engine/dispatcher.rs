//! Hardware Dispatcher
//!
//! Selects the AES-NI kernel when the CPU supports it, the portable kernel
//! otherwise. The probe runs once per process; both kernels produce identical
//! digests, so the choice is purely a throughput decision.

use crate::kernels;
use crate::types::KernelFn;

// =============================================================================
// CPU FEATURE PROBE
// =============================================================================

/// Whether the AES-NI fast path is usable on this CPU.
///
/// Memoized in a process-wide cell after the first call. A race on the first
/// write is harmless: every writer computes the same bit. Targets without
/// x86 CPUID always report `false`.
#[must_use]
pub fn aes_hw_available() -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        use std::sync::OnceLock;

        static AES_HW: OnceLock<bool> = OnceLock::new();
        *AES_HW
            .get_or_init(|| is_x86_feature_detected!("aes") && is_x86_feature_detected!("sse2"))
    }

    #[cfg(not(target_arch = "x86_64"))]
    {
        false
    }
}

// =============================================================================
// DISPATCHER
// =============================================================================

/// Returns the fastest kernel for this CPU.
#[must_use]
pub fn get_best_kernel() -> KernelFn {
    #[cfg(target_arch = "x86_64")]
    {
        if aes_hw_available() {
            return safe_aesni_wrapper;
        }
    }

    kernels::portable::transform
}

/// Returns the name of the active hardware backend.
#[must_use]
pub fn get_active_backend_name() -> &'static str {
    if aes_hw_available() {
        "AES-NI"
    } else {
        "Portable"
    }
}

// =============================================================================
// WRAPPERS
// =============================================================================

/// AES-NI wrapper with the `KernelFn` signature.
#[cfg(target_arch = "x86_64")]
#[allow(unsafe_code)]
fn safe_aesni_wrapper(
    state: &mut [u8; kernels::constants::KECCAK_STATE_SIZE],
    scratchpad: &mut [u8],
    variant: crate::types::Variant,
) {
    // SAFETY: Only reachable after the CPUID probe confirms AES + SSE2.
    unsafe { kernels::aesni::transform(state, scratchpad, variant) }
}
