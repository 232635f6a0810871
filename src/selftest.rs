// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Watchdog bring-up sequence.
//!
//! Exercises every controller transition in the order used on the bench: a short armed run, a
//! disable, a hold/release cycle, another disable, and finally a full run to expiry. Once the
//! interrupt latches, `signal` is driven high so the result is visible on the output bus.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{SelftestTiming, WatchdogConfig};
use crate::drivers::WatchdogController;
use crate::hw::RegisterBlock;

pub fn run<R, D, P>(
    wdt: &mut WatchdogController<R>,
    delay: &mut D,
    signal: &mut P,
    config: &WatchdogConfig,
    timing: &SelftestTiming,
) -> Result<(), P::Error>
where
    R: RegisterBlock,
    D: DelayNs,
    P: OutputPin,
{
    wdt.apply(config);

    wdt.enable();
    delay.delay_us(timing.first_run);
    wdt.disable();
    delay.delay_us(timing.pause);

    wdt.enable();
    delay.delay_us(timing.before_hold);
    wdt.hold(true);
    delay.delay_us(timing.hold);
    wdt.hold(false);
    delay.delay_us(timing.after_hold);
    wdt.disable();
    delay.delay_us(timing.rearm);

    wdt.enable();
    wdt.wait_for_interrupt();
    signal.set_high()
}
