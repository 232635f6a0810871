// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Busy-wait delays.
//!
//! The SoC has no free-running system timer, so delays spin for a number of loop iterations
//! derived from the core clock.

use embedded_hal::delay::DelayNs;

/// Approximate core cycles per spin iteration on the multicycle core.
const CYCLES_PER_LOOP: u64 = 4;

#[derive(Copy, Clone, Debug)]
pub struct BusyDelay {
    core_hz: u32,
}

impl BusyDelay {
    pub fn new(core_hz: u32) -> Self {
        Self { core_hz }
    }

    /// Spin for `ticks` loop iterations.
    #[inline(never)]
    pub fn delay_ticks(&mut self, ticks: u32) {
        for _ in 0..ticks {
            spin();
        }
    }

    fn loops_for_ns(&self, ns: u32) -> u64 {
        (ns as u64 * self.core_hz as u64) / (1_000_000_000 * CYCLES_PER_LOOP)
    }
}

impl DelayNs for BusyDelay {
    fn delay_ns(&mut self, ns: u32) {
        let mut loops = self.loops_for_ns(ns);
        while loops > 0 {
            let chunk = loops.min(u32::MAX as u64) as u32;
            self.delay_ticks(chunk);
            loops -= chunk as u64;
        }
    }
}

#[cfg(target_arch = "riscv32")]
#[inline(always)]
#[allow(unused_unsafe)]
fn spin() {
    // SAFETY: `nop` has no architectural side effects.
    unsafe { riscv::asm::nop() }
}

#[cfg(not(target_arch = "riscv32"))]
#[inline(always)]
fn spin() {
    core::hint::spin_loop();
}
