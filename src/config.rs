// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Peripheral configuration.
//!
//! Every struct implements `Default`, so callers usually override a single field:
//!
//! ```rust,ignore
//! let cfg = WatchdogConfig {
//!     top_counter: 1_000,
//!     ..Default::default()
//! };
//! ```

use crate::error::ConfigError;

/// Watchdog timer settings, written by `WatchdogController::configure`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WatchdogConfig {
    /// Mode-select bits, forwarded to the hardware unchanged.
    pub mode: u32,
    /// Clock divider.
    pub prescaler: u32,
    /// Count at which the watchdog expires and latches its interrupt.
    pub top_counter: u32,
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            mode: 1,
            prescaler: 1,
            top_counter: 250,
        }
    }
}

/// UART line rate. The discriminant is the hardware baud code.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum Baud {
    B38400 = 0,
    B19200 = 1,
    B9600 = 2,
    B4800 = 3,
}

impl Baud {
    #[inline]
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn bits_per_second(self) -> u32 {
        match self {
            Baud::B38400 => 38_400,
            Baud::B19200 => 19_200,
            Baud::B9600 => 9_600,
            Baud::B4800 => 4_800,
        }
    }
}

impl TryFrom<u32> for Baud {
    type Error = ConfigError;

    fn try_from(bps: u32) -> Result<Self, Self::Error> {
        match bps {
            38_400 => Ok(Baud::B38400),
            19_200 => Ok(Baud::B19200),
            9_600 => Ok(Baud::B9600),
            4_800 => Ok(Baud::B4800),
            other => Err(ConfigError::UnsupportedBaud(other)),
        }
    }
}

/// UART parity. Hardware codes 0 and 1 both disable parity.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum Parity {
    None = 0,
    Odd = 2,
    Even = 3,
}

impl Parity {
    #[inline]
    pub fn code(self) -> u32 {
        self as u32
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    pub baud: Baud,
    pub parity: Parity,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baud: Baud::B38400,
            parity: Parity::None,
        }
    }
}

impl UartConfig {
    /// Value of the UART setup register: baud code in bits 1..0, parity code in bits 3..2.
    #[inline]
    pub fn setup_word(&self) -> u32 {
        (self.baud.code() & 0x3) | ((self.parity.code() & 0x3) << 2)
    }
}

/// Delays between the steps of the watchdog self-test, in microseconds.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelftestTiming {
    /// First armed period, before the watchdog is disabled again.
    pub first_run: u32,
    /// Disabled period before re-arming.
    pub pause: u32,
    /// Armed period before the counter is held.
    pub before_hold: u32,
    /// Time spent held.
    pub hold: u32,
    /// Armed period after the hold is released.
    pub after_hold: u32,
    /// Disabled period before the final arming.
    pub rearm: u32,
}

impl Default for SelftestTiming {
    fn default() -> Self {
        Self {
            first_run: 10,
            pause: 10,
            before_hold: 3,
            hold: 3,
            after_hold: 40,
            rearm: 10,
        }
    }
}
