// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Watchdog timer controller.
//!
//! The watchdog counts up to `top_counter` and then latches its interrupt flag, which stays set
//! until it is strobed clear. Its state lives entirely in the register block:
//!
//! | `reset` | `hold` | State |
//! | ------- | ------ | ----- |
//! | 1 | x | [`WatchdogState::Disabled`] |
//! | 0 | 0 | [`WatchdogState::Armed`] |
//! | 0 | 1 | [`WatchdogState::Held`] |
//!
//! [`WatchdogController`] is a direct mapping of the register file and performs no sequencing
//! checks. The [`typestate`] wrapper encodes the legal transitions in the type system.

use core::convert::Infallible;

use crate::config::WatchdogConfig;
use crate::hw::RegisterBlock;

pub mod typestate;

pub use typestate::Watchdog;

// Register offsets
pub mod reg {
    pub const RESET: usize = 0x00;
    pub const MODE: usize = 0x04;
    pub const PRESCALER: usize = 0x08;
    pub const TOP_COUNTER: usize = 0x0C;
    pub const HOLD: usize = 0x10;
    pub const INTERRUPT: usize = 0x14;
    pub const INTERRUPT_CLR: usize = 0x18;
}

/// Logical state recovered from the `reset` and `hold` bits.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchdogState {
    Disabled,
    Armed,
    Held,
}

impl WatchdogState {
    /// Decode the state from raw register values. `reset` dominates `hold`.
    pub fn from_bits(reset: bool, hold: bool) -> Self {
        match (reset, hold) {
            (true, _) => WatchdogState::Disabled,
            (false, false) => WatchdogState::Armed,
            (false, true) => WatchdogState::Held,
        }
    }
}

/// Register-level watchdog driver.
pub struct WatchdogController<R: RegisterBlock> {
    regs: R,
}

impl<R: RegisterBlock> WatchdogController<R> {
    /// Wrap a register block. No register is touched.
    pub fn new(regs: R) -> Self {
        Self { regs }
    }

    /// Release the register block.
    pub fn free(self) -> R {
        self.regs
    }

    /// Hold the timer in reset, then program mode, prescaler and expiry count.
    ///
    /// The watchdog is always left disabled; the latched interrupt flag is not touched.
    pub fn configure(&mut self, mode: u32, prescaler: u32, top_counter: u32) {
        self.regs.write(reg::RESET, 1);
        self.regs.write(reg::MODE, mode);
        self.regs.write(reg::PRESCALER, prescaler);
        self.regs.write(reg::TOP_COUNTER, top_counter);
        trace!(
            "wdt: configured mode={=u32} prescaler={=u32} top={=u32}",
            mode,
            prescaler,
            top_counter
        );
    }

    #[inline]
    pub fn apply(&mut self, config: &WatchdogConfig) {
        self.configure(config.mode, config.prescaler, config.top_counter);
    }

    /// Release reset and start counting.
    pub fn enable(&mut self) {
        self.regs.write(reg::RESET, 0);
        trace!("wdt: enabled");
    }

    /// Put the timer back into reset.
    ///
    /// The `hold` bit is left as it was; reset takes precedence over it in hardware.
    pub fn disable(&mut self) {
        self.regs.write(reg::RESET, 1);
        trace!("wdt: disabled");
    }

    /// Freeze (`true`) or resume (`false`) the counter without resetting it.
    pub fn hold(&mut self, active: bool) {
        self.regs.write(reg::HOLD, active as u32);
        trace!("wdt: hold={=bool}", active);
    }

    /// Current value of the latched expiry flag.
    #[inline]
    pub fn read_interrupt(&self) -> bool {
        self.regs.read(reg::INTERRUPT) & 1 != 0
    }

    /// Strobe the clear line (1 then 0). Harmless when no interrupt is pending.
    pub fn clear_interrupt(&mut self) {
        self.regs.write(reg::INTERRUPT_CLR, 1);
        self.regs.write(reg::INTERRUPT_CLR, 0);
        trace!("wdt: interrupt cleared");
    }

    /// Read the expiry flag and clear it if set, as one critical section.
    pub fn take_interrupt(&mut self) -> bool {
        critical_section::with(|_| {
            let pending = self.read_interrupt();
            if pending {
                self.clear_interrupt();
            }
            pending
        })
    }

    /// Non-blocking check for expiry, for use with `nb::block!`.
    pub fn poll_interrupt(&self) -> nb::Result<(), Infallible> {
        if self.read_interrupt() {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }

    /// Busy-wait until the expiry flag is set. The flag is left latched.
    pub fn wait_for_interrupt(&self) {
        let _ = nb::block!(self.poll_interrupt());
        debug!("wdt: expired");
    }

    pub fn state(&self) -> WatchdogState {
        WatchdogState::from_bits(
            self.regs.read(reg::RESET) & 1 != 0,
            self.regs.read(reg::HOLD) & 1 != 0,
        )
    }

    #[inline]
    pub fn regs(&self) -> &R {
        &self.regs
    }
}
