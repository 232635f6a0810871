// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial Peripheral Interface (SPI) abstraction layer.
//!
//! The SPI master shifts one byte per write to `TX` and latches the byte clocked in on MISO into
//! `RX`. Transfers complete before the next bus access, so there is nothing to poll.
//!
//! `Spi` also implements [`embedded_hal::spi::SpiBus`] so device drivers written against the
//! embedded-hal traits can sit on top of it.

use core::convert::Infallible;

use embedded_hal::spi::{ErrorType, SpiBus};

use crate::hw::RegisterBlock;

// Register offsets
pub mod reg {
    pub const TX: usize = 0x00;
    pub const RX: usize = 0x04;
}

/// Byte clocked out when only reading.
const FILL: u8 = 0x00;

pub struct Spi<R: RegisterBlock> {
    regs: R,
}

impl<R: RegisterBlock> Spi<R> {
    pub fn new(regs: R) -> Self {
        Self { regs }
    }

    /// Perform a full-duplex transfer of one byte.
    pub fn transfer_byte(&mut self, byte: u8) -> u8 {
        self.regs.write(reg::TX, byte as u32);
        self.regs.read(reg::RX) as u8
    }

    /// Send a byte, ignoring the response.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.regs.write(reg::TX, byte as u32);
    }

    /// Read a byte, sending 0x00.
    #[inline]
    pub fn read_byte(&mut self) -> u8 {
        self.transfer_byte(FILL)
    }

    pub fn free(self) -> R {
        self.regs
    }
}

impl<R: RegisterBlock> ErrorType for Spi<R> {
    type Error = Infallible;
}

impl<R: RegisterBlock> SpiBus<u8> for Spi<R> {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        for w in words.iter_mut() {
            *w = self.read_byte();
        }
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        for &w in words {
            self.write_byte(w);
        }
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        let len = read.len().max(write.len());
        for i in 0..len {
            let rx = self.transfer_byte(write.get(i).copied().unwrap_or(FILL));
            if let Some(slot) = read.get_mut(i) {
                *slot = rx;
            }
        }
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        for w in words.iter_mut() {
            *w = self.transfer_byte(*w);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
