// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Memory map of the course SoC.
//!
//! Peripherals live in the I/O region starting at [`PERIPH_BASE`]. Each block occupies a 16-word
//! slot; offsets of the individual fields are defined next to the driver that uses them.
//!
//! | Block | Base |
//! | ----- | ---- |
//! | I/O bus (`INBUS`, `OUTBUS`) | `0x0400_0000` |
//! | UART | `0x0400_0080` |
//! | SPI | `0x0400_00C0` |
//! | Watchdog | `0x0400_0100` |
//! | Neural-inference accelerator | `0x0400_0140` |

use core::cell::Cell;
use critical_section::Mutex;

use crate::hw::Mmio;

/// Core clock of the FPGA build.
pub const CORE_CLOCK_HZ: u32 = 50_000_000;

pub const PERIPH_BASE: usize = 0x0400_0000;

const SLOT: usize = 16 * 4;

pub const IONBUS_BASE: usize = PERIPH_BASE;
pub const UART_BASE: usize = PERIPH_BASE + 2 * SLOT;
pub const SPI_BASE: usize = PERIPH_BASE + 3 * SLOT;
pub const WATCHDOG_BASE: usize = PERIPH_BASE + 4 * SLOT;
pub const NN_ACCELERATOR_BASE: usize = PERIPH_BASE + 5 * SLOT;

static TAKEN: Mutex<Cell<bool>> = Mutex::new(Cell::new(false));

/// Handles to every peripheral block. Construct this once at startup using:
///
/// ```rust,ignore
/// let p = Peripherals::take().unwrap();
/// ```
pub struct Peripherals {
    pub ionbus: Mmio,
    pub uart: Mmio,
    pub spi: Mmio,
    pub watchdog: Mmio,
    pub nn_accelerator: Mmio,
}

impl Peripherals {
    /// Returns the peripherals the first time it is called, `None` afterwards.
    pub fn take() -> Option<Self> {
        critical_section::with(|cs| {
            let taken = TAKEN.borrow(cs);
            if taken.replace(true) {
                None
            } else {
                // SAFETY: the flag guarantees this is the only `take` that succeeds.
                Some(unsafe { Self::steal() })
            }
        })
    }

    /// Unchecked variant of [`Peripherals::take`].
    ///
    /// # Safety
    ///
    /// Creates aliasing handles if the peripherals were already taken.
    pub unsafe fn steal() -> Self {
        Self {
            ionbus: Mmio::new(IONBUS_BASE),
            uart: Mmio::new(UART_BASE),
            spi: Mmio::new(SPI_BASE),
            watchdog: Mmio::new(WATCHDOG_BASE),
            nn_accelerator: Mmio::new(NN_ACCELERATOR_BASE),
        }
    }
}
