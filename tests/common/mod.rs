//! Cycle-level model of the watchdog peripheral for host tests.
//!
//! Every register access costs one core cycle, and `SimDelay` advances the model one cycle per
//! microsecond. The counter advances once every `max(prescaler, 1)` cycles while the timer is out
//! of reset and not held; reaching `top_counter` latches the interrupt and restarts the count.

#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use pld_soc::drivers::watchdog::reg;
use pld_soc::drivers::WatchdogState;
use pld_soc::hw::RegisterBlock;

#[derive(Debug)]
pub struct WatchdogModel {
    pub reset: u32,
    pub mode: u32,
    pub prescaler: u32,
    pub top_counter: u32,
    pub hold: u32,
    pub interrupt: bool,
    pub counter: u32,
    prescale: u32,
    pub cycles: u64,
    /// Cycle at which the interrupt last latched.
    pub expired_at: Option<u64>,
    pub writes: Vec<(usize, u32)>,
}

impl Default for WatchdogModel {
    fn default() -> Self {
        Self {
            reset: 1,
            mode: 0,
            prescaler: 0,
            top_counter: 0,
            hold: 0,
            interrupt: false,
            counter: 0,
            prescale: 0,
            cycles: 0,
            expired_at: None,
            writes: Vec::new(),
        }
    }
}

impl WatchdogModel {
    pub fn tick(&mut self) {
        self.cycles += 1;
        if self.reset & 1 != 0 {
            self.counter = 0;
            self.prescale = 0;
            return;
        }
        if self.hold & 1 != 0 {
            return;
        }
        self.prescale += 1;
        if self.prescale < self.prescaler.max(1) {
            return;
        }
        self.prescale = 0;
        self.counter += 1;
        if self.counter >= self.top_counter {
            self.counter = 0;
            if !self.interrupt {
                self.expired_at = Some(self.cycles);
            }
            self.interrupt = true;
        }
    }

    pub fn advance(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.tick();
        }
    }

    pub fn state(&self) -> WatchdogState {
        WatchdogState::from_bits(self.reset & 1 != 0, self.hold & 1 != 0)
    }

    fn read(&mut self, offset: usize) -> u32 {
        let v = match offset {
            reg::RESET => self.reset,
            reg::MODE => self.mode,
            reg::PRESCALER => self.prescaler,
            reg::TOP_COUNTER => self.top_counter,
            reg::HOLD => self.hold,
            reg::INTERRUPT => self.interrupt as u32,
            reg::INTERRUPT_CLR => 0,
            other => panic!("read of unmapped watchdog offset {other:#x}"),
        };
        self.tick();
        v
    }

    fn write(&mut self, offset: usize, value: u32) {
        self.writes.push((offset, value));
        match offset {
            reg::RESET => self.reset = value,
            reg::MODE => self.mode = value,
            reg::PRESCALER => self.prescaler = value,
            reg::TOP_COUNTER => self.top_counter = value,
            reg::HOLD => self.hold = value,
            reg::INTERRUPT_CLR => {
                if value & 1 != 0 {
                    self.interrupt = false;
                }
            }
            other => panic!("write to read-only or unmapped watchdog offset {other:#x}"),
        }
        self.tick();
    }
}

/// Register-block handle onto a shared [`WatchdogModel`].
#[derive(Clone, Default)]
pub struct SimWatchdog(pub Rc<RefCell<WatchdogModel>>);

impl SimWatchdog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> std::cell::Ref<'_, WatchdogModel> {
        self.0.borrow()
    }

    pub fn model_mut(&self) -> std::cell::RefMut<'_, WatchdogModel> {
        self.0.borrow_mut()
    }

    pub fn delay(&self) -> SimDelay {
        SimDelay(self.0.clone())
    }

    pub fn probe(&self) -> Probe {
        Probe {
            model: self.0.clone(),
            set_at: None,
        }
    }
}

impl RegisterBlock for SimWatchdog {
    fn read(&self, offset: usize) -> u32 {
        self.0.borrow_mut().read(offset)
    }

    fn write(&mut self, offset: usize, value: u32) {
        self.0.borrow_mut().write(offset, value)
    }
}

/// Delay that advances the model one cycle per microsecond.
pub struct SimDelay(Rc<RefCell<WatchdogModel>>);

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().advance(u64::from(ns / 1_000));
    }
}

/// Output pin that records the model cycle at which it was driven high.
pub struct Probe {
    model: Rc<RefCell<WatchdogModel>>,
    pub set_at: Option<u64>,
}

impl ErrorType for Probe {
    type Error = Infallible;
}

impl OutputPin for Probe {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_at = None;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_at = Some(self.model.borrow().cycles);
        Ok(())
    }
}
