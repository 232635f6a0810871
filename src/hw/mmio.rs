// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Memory-mapped register access.
//!
//! Every peripheral on the SoC is a block of 32-bit words at a fixed address. Drivers never touch
//! raw pointers themselves; they take a [`RegisterBlock`] and address words by byte offset. On
//! hardware that block is an [`Mmio`]; on the host it can be any simulated implementation.

use vcell::VolatileCell;

/// A block of 32-bit registers addressed by byte offset from its base.
pub trait RegisterBlock {
    /// Read the word at `offset`.
    fn read(&self, offset: usize) -> u32;

    /// Write `value` to the word at `offset`.
    fn write(&mut self, offset: usize, value: u32);
}

impl<R: RegisterBlock + ?Sized> RegisterBlock for &mut R {
    #[inline]
    fn read(&self, offset: usize) -> u32 {
        (**self).read(offset)
    }

    #[inline]
    fn write(&mut self, offset: usize, value: u32) {
        (**self).write(offset, value)
    }
}

/// Volatile register block at a fixed physical address.
pub struct Mmio {
    base: usize,
}

impl Mmio {
    /// Create a handle to the register block at `base`.
    ///
    /// # Safety
    ///
    /// `base` must be the word-aligned address of a peripheral block that stays mapped for the
    /// lifetime of the handle, and the caller must not create a second handle that is used
    /// concurrently with this one.
    #[inline]
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    #[inline]
    pub fn base(&self) -> usize {
        self.base
    }

    #[inline]
    fn cell(&self, offset: usize) -> &VolatileCell<u32> {
        debug_assert!(offset % 4 == 0, "misaligned register offset");
        // SAFETY: `new` requires `base` to point at a live, aligned register block.
        unsafe { &*((self.base + offset) as *const VolatileCell<u32>) }
    }
}

impl RegisterBlock for Mmio {
    #[inline]
    fn read(&self, offset: usize) -> u32 {
        self.cell(offset).get()
    }

    #[inline]
    fn write(&mut self, offset: usize, value: u32) {
        self.cell(offset).set(value)
    }
}
