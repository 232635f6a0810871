#![no_main]
#![no_std]

use core::fmt::Write;

use panic_halt as _;
use riscv_rt::entry;

use embedded_hal::delay::DelayNs;
use pld_soc::{
    config::{SelftestTiming, UartConfig, WatchdogConfig},
    drivers::WatchdogController,
    hw::{BusyDelay, OutBus, Uart},
    selftest,
    soc::{self, Peripherals},
};

#[entry]
fn main() -> ! {
    // Peripherals
    let p = Peripherals::take().unwrap();

    let mut delay = BusyDelay::new(soc::CORE_CLOCK_HZ);
    let mut outbus = OutBus::new(p.ionbus);
    outbus.write(0);

    // UART (DBG)
    let mut uart = Uart::new(p.uart, &UartConfig::default());
    uart.println("watchdog self-test");

    let wdt_cfg = WatchdogConfig::default();
    let _ = writeln!(
        uart,
        "mode={} prescaler={} top={}\r",
        wdt_cfg.mode, wdt_cfg.prescaler, wdt_cfg.top_counter
    );

    let mut wdt = WatchdogController::new(p.watchdog);
    let _ = selftest::run(
        &mut wdt,
        &mut delay,
        &mut outbus.pin(0),
        &wdt_cfg,
        &SelftestTiming::default(),
    );

    uart.println("watchdog expired");
    wdt.clear_interrupt();

    loop {
        delay.delay_ms(10);
    }
}
