// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Parallel I/O bus.
//!
//! `OUTBUS` is a 32-bit output latch wired to the board LEDs and test points, `INBUS` reflects
//! the switches. Single output bits can be handed out as [`OutBusPin`]s, which implement the
//! embedded-hal digital output traits.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

use crate::hw::RegisterBlock;

// Register offsets
pub mod reg {
    pub const INBUS: usize = 0x00;
    pub const OUTBUS: usize = 0x04;
}

pub struct OutBus<R: RegisterBlock> {
    regs: R,
}

impl<R: RegisterBlock> OutBus<R> {
    pub fn new(regs: R) -> Self {
        Self { regs }
    }

    #[inline]
    pub fn write(&mut self, value: u32) {
        self.regs.write(reg::OUTBUS, value);
    }

    /// Current value of the output latch.
    #[inline]
    pub fn read(&self) -> u32 {
        self.regs.read(reg::OUTBUS)
    }

    /// Current value of the input bus.
    #[inline]
    pub fn inputs(&self) -> u32 {
        self.regs.read(reg::INBUS)
    }

    /// # Panics
    ///
    /// If `bit` is not in `0..32`; likewise for [`OutBus::clear_bit`].
    pub fn set_bit(&mut self, bit: u8) {
        let v = self.read() | mask(bit);
        self.write(v);
    }

    pub fn clear_bit(&mut self, bit: u8) {
        let v = self.read() & !mask(bit);
        self.write(v);
    }

    /// Borrow one output bit as a digital pin.
    ///
    /// # Panics
    ///
    /// If `bit` is not in `0..32`.
    pub fn pin(&mut self, bit: u8) -> OutBusPin<'_, R> {
        assert!(bit < 32, "OUTBUS has 32 bits");
        OutBusPin { bus: self, bit }
    }

    pub fn free(self) -> R {
        self.regs
    }
}

#[inline]
fn mask(bit: u8) -> u32 {
    assert!(bit < 32, "OUTBUS has 32 bits");
    1 << bit
}

/// A single bit of `OUTBUS`.
pub struct OutBusPin<'a, R: RegisterBlock> {
    bus: &'a mut OutBus<R>,
    bit: u8,
}

impl<R: RegisterBlock> ErrorType for OutBusPin<'_, R> {
    type Error = Infallible;
}

impl<R: RegisterBlock> OutputPin for OutBusPin<'_, R> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.bus.clear_bit(self.bit);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.bus.set_bit(self.bit);
        Ok(())
    }
}

impl<R: RegisterBlock> StatefulOutputPin for OutBusPin<'_, R> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.bus.read() & mask(self.bit) != 0)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.bus.read() & mask(self.bit) == 0)
    }
}
