// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! UART abstraction layer.
//!
//! Provides several printing helpers for hex, decimal, and ASCII strings to print to an attached
//! debug terminal.
//!
//! Note: When using `writeln!`, be sure to include `\r` (CR) in the format string to ensure correct
//! line endings on the terminal.
//!
//! The peripheral has no FIFO or busy flag: each write to `TX` with the send strobe (bit 8) set
//! starts a frame, and `RX` always holds the last received byte.

use core::fmt;

use crate::config::UartConfig;
use crate::hw::RegisterBlock;

// Register offsets
pub mod reg {
    pub const TX: usize = 0x00;
    pub const RX: usize = 0x04;
    pub const SETUP: usize = 0x08;
}

const SEND: u32 = 1 << 8;

pub struct Uart<R: RegisterBlock> {
    regs: R,
}

impl<R: RegisterBlock> Uart<R> {
    pub fn new(regs: R, config: &UartConfig) -> Self {
        let mut uart = Self { regs };
        uart.setup(config);
        uart
    }

    /// Program baud rate and parity.
    pub fn setup(&mut self, config: &UartConfig) {
        self.regs.write(reg::SETUP, config.setup_word());
        debug!("uart: setup baud={=u32}", config.baud.bits_per_second());
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        self.regs.write(reg::TX, SEND | b as u32);
    }

    /// Last byte received on the line.
    #[inline]
    pub fn read_byte(&self) -> u8 {
        self.regs.read(reg::RX) as u8
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    /// Write string and CRLF terminator.
    #[inline]
    pub fn println(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }

    pub fn print_hex_u8(&mut self, n: u8) {
        self.write_str("0x");
        self.write_nibbles(n as u32, 2);
    }

    pub fn print_hex_u16(&mut self, n: u16) {
        self.write_str("0x");
        self.write_nibbles(n as u32, 4);
    }

    /// Print as `0xHHHH_HHHH`.
    pub fn print_hex_u32(&mut self, n: u32) {
        self.write_str("0x");
        self.write_nibbles(n >> 16, 4);
        self.write_byte(b'_');
        self.write_nibbles(n & 0xFFFF, 4);
    }

    pub fn print_u32(&mut self, mut n: u32) {
        let mut buf = [0u8; 10];
        let mut i = buf.len();
        if n == 0 {
            self.write_byte(b'0');
            return;
        }
        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }
        for &b in &buf[i..] {
            self.write_byte(b);
        }
    }

    fn write_nibbles(&mut self, n: u32, digits: u32) {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";
        for k in (0..digits).rev() {
            self.write_byte(HEX[((n >> (4 * k)) & 0xF) as usize]);
        }
    }

    pub fn free(self) -> R {
        self.regs
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `Uart`.
impl<R: RegisterBlock> fmt::Write for Uart<R> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Uart::write_str(self, s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Baud, Parity};
    use crate::hw::mmio::fake::FakeRegs;
    use core::fmt::Write;
    use std::string::String;

    fn sent(uart: &Uart<FakeRegs>) -> String {
        uart.regs
            .writes
            .iter()
            .filter(|&&(off, _)| off == reg::TX)
            .map(|&(_, v)| {
                assert_eq!(v & SEND, SEND, "send strobe missing");
                (v & 0xFF) as u8 as char
            })
            .collect()
    }

    #[test]
    fn new_writes_setup() {
        let cfg = UartConfig {
            baud: Baud::B9600,
            parity: Parity::Odd,
        };
        let uart = Uart::new(FakeRegs::default(), &cfg);
        assert_eq!(uart.regs.writes, [(reg::SETUP, 0b1010)]);
    }

    #[test]
    fn write_byte_sets_send_strobe() {
        let mut uart = Uart::new(FakeRegs::default(), &UartConfig::default());
        uart.write_byte(b'A');
        assert_eq!(uart.regs.word(reg::TX), 0x141);
    }

    #[test]
    fn number_formatting() {
        let mut uart = Uart::new(FakeRegs::default(), &UartConfig::default());
        uart.print_hex_u8(0x5A);
        uart.write_byte(b' ');
        uart.print_hex_u16(0x0BEE);
        uart.write_byte(b' ');
        uart.print_hex_u32(0xDEAD_BEEF);
        uart.write_byte(b' ');
        uart.print_u32(0);
        uart.write_byte(b' ');
        uart.print_u32(4_294_967_295);
        assert_eq!(sent(&uart), "0x5A 0x0BEE 0xDEAD_BEEF 0 4294967295");
    }

    #[test]
    fn fmt_write_and_println() {
        let mut uart = Uart::new(FakeRegs::default(), &UartConfig::default());
        write!(uart, "top={}\r\n", 250).unwrap();
        uart.println("ok");
        assert_eq!(sent(&uart), "top=250\r\nok\r\n");
    }

    #[test]
    fn read_byte_takes_low_bits() {
        let mut regs = FakeRegs::default();
        regs.preset(reg::RX, 0x1_23);
        let uart = Uart::new(regs, &UartConfig::default());
        assert_eq!(uart.read_byte(), 0x23);
    }
}
