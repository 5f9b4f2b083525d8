//! Scratchpad buffer.
//!
//! The working RAM region that enforces memory-hardness: 2 MiB (full) or
//! 512 KiB (light), owned by one hash invocation at a time. Backing storage
//! is a `Vec<u128>` so the 16-byte alignment the AES-NI loads want holds on
//! every allocator.

use crate::kernels::constants::AES_BLOCK_SIZE;
use crate::types::{Error, Variant};

/// A heap-allocated, 16-byte-aligned scratchpad sized to one [`Variant`].
///
/// Allocate once and reuse across nonces in a mining loop; the fill phase
/// overwrites the whole buffer on every hash, so no clearing is needed
/// between invocations.
pub struct Scratchpad {
    blocks: Vec<u128>,
    variant: Variant,
}

impl Scratchpad {
    /// Reserve a scratchpad for `variant`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceExhausted`] if the allocator refuses the
    /// reservation.
    pub fn new(variant: Variant) -> Result<Self, Error> {
        let len = variant.memory() / AES_BLOCK_SIZE;
        let mut blocks = Vec::new();
        blocks
            .try_reserve_exact(len)
            .map_err(|_| Error::ResourceExhausted)?;
        blocks.resize(len, 0);
        Ok(Self { blocks, variant })
    }

    /// The variant this scratchpad was sized for.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// View the scratchpad as raw bytes.
    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.blocks.len() * AES_BLOCK_SIZE;
        // SAFETY: `u128` has no padding and every byte pattern is valid; the
        // pointer covers exactly `len` bytes of one live allocation.
        unsafe { core::slice::from_raw_parts_mut(self.blocks.as_mut_ptr().cast::<u8>(), len) }
    }
}
