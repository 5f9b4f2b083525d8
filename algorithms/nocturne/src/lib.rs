//! # Nocturne
//!
//! CryptoNight-family memory-hard proof-of-work hash.
//! Accelerated by AES-NI, with a bit-identical portable fallback.

//! # Usage
//! ```rust
//! use nocturne::Variant;
//!
//! // Full mode: 2 MiB scratchpad, 2^20 iterations
//! let digest = nocturne::hash(b"This is a test", Variant::Full);
//! println!("{:x?}", digest);
//!
//! // Light mode: 512 KiB scratchpad, 2^18 iterations
//! let light = nocturne::hash(b"This is a test", Variant::Light);
//! assert_ne!(digest, light);
//!
//! // Reuse one scratchpad across many nonces (mining loop)
//! use nocturne::Scratchpad;
//!
//! let mut pad = Scratchpad::new(Variant::Full)?;
//! let a = nocturne::hash_with_scratchpad(b"blob|nonce=0", &mut pad);
//! let b = nocturne::hash_with_scratchpad(b"blob|nonce=1", &mut pad);
//! assert_ne!(a, b);
//! # Ok::<(), nocturne::Error>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod engine;
mod finalizer;
// Re-export internal kernels for benchmarking/testing if needed, but hide from docs
#[doc(hidden)]
pub mod kernels; // Public for test/bench use only
mod oneshot;
mod scratchpad;
mod sponge;
mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use oneshot::{hash, hash_with_scratchpad, try_hash, verify};
#[doc(hidden)]
pub use oneshot::hash_with_kernel;
pub use scratchpad::Scratchpad;
pub use types::{Error, KernelFn, Variant};

/// Returns the name of the hardware backend currently in use.
#[must_use]
pub fn active_backend() -> &'static str {
    engine::get_active_backend_name()
}
