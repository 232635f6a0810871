// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Typestate wrapper around [`WatchdogController`].
//!
//! Each state is a distinct type, so sequences the hardware does not define (arming an
//! unconfigured timer, holding a disabled one, reconfiguring a live one) do not compile:
//!
//! ```text
//!            enable              hold
//! Disabled ─────────▶ Armed ─────────▶ Held
//!     ▲  ◀─────────────┘  ◀─────────────┘ │
//!     │      disable          release      │
//!     └────────────────────────────────────┘
//!                     disable
//! ```

use core::marker::PhantomData;

use super::{WatchdogController, WatchdogState};
use crate::config::WatchdogConfig;
use crate::hw::RegisterBlock;

/// Timer held in reset.
pub struct Disabled;
/// Timer counting toward expiry.
pub struct Armed;
/// Timer frozen at its current count.
pub struct Held;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Disabled {}
    impl Sealed for super::Armed {}
    impl Sealed for super::Held {}
}

pub trait State: sealed::Sealed {
    const STATE: WatchdogState;
}

impl State for Disabled {
    const STATE: WatchdogState = WatchdogState::Disabled;
}

impl State for Armed {
    const STATE: WatchdogState = WatchdogState::Armed;
}

impl State for Held {
    const STATE: WatchdogState = WatchdogState::Held;
}

pub struct Watchdog<R: RegisterBlock, S: State> {
    inner: WatchdogController<R>,
    _state: PhantomData<S>,
}

impl<R: RegisterBlock, S: State> Watchdog<R, S> {
    #[inline]
    fn into_state<T: State>(self) -> Watchdog<R, T> {
        Watchdog {
            inner: self.inner,
            _state: PhantomData,
        }
    }

    /// The state this handle was typed with.
    #[inline]
    pub fn state(&self) -> WatchdogState {
        S::STATE
    }

    #[inline]
    pub fn read_interrupt(&self) -> bool {
        self.inner.read_interrupt()
    }

    #[inline]
    pub fn clear_interrupt(&mut self) {
        self.inner.clear_interrupt()
    }

    #[inline]
    pub fn take_interrupt(&mut self) -> bool {
        self.inner.take_interrupt()
    }

    #[inline]
    pub fn wait_for_interrupt(&self) {
        self.inner.wait_for_interrupt()
    }

    /// Drop the type-level state and return the unchecked controller.
    pub fn into_raw(self) -> WatchdogController<R> {
        self.inner
    }
}

impl<R: RegisterBlock> Watchdog<R, Disabled> {
    /// Configure the timer. The result is always disabled.
    pub fn new(regs: R, config: &WatchdogConfig) -> Self {
        let mut inner = WatchdogController::new(regs);
        inner.apply(config);
        Self {
            inner,
            _state: PhantomData,
        }
    }

    pub fn reconfigure(mut self, config: &WatchdogConfig) -> Self {
        self.inner.apply(config);
        self
    }

    /// Start counting. A `hold` bit left set by [`Watchdog::<R, Held>::disable`] is cleared first,
    /// so the timer really is armed.
    pub fn enable(mut self) -> Watchdog<R, Armed> {
        self.inner.hold(false);
        self.inner.enable();
        self.into_state()
    }

    pub fn free(self) -> R {
        self.inner.free()
    }
}

impl<R: RegisterBlock> Watchdog<R, Armed> {
    pub fn hold(mut self) -> Watchdog<R, Held> {
        self.inner.hold(true);
        self.into_state()
    }

    pub fn disable(mut self) -> Watchdog<R, Disabled> {
        self.inner.disable();
        self.into_state()
    }
}

impl<R: RegisterBlock> Watchdog<R, Held> {
    /// Resume counting from the frozen value.
    pub fn release(mut self) -> Watchdog<R, Armed> {
        self.inner.hold(false);
        self.into_state()
    }

    /// Disable directly from the held state. The `hold` bit stays set in hardware.
    pub fn disable(mut self) -> Watchdog<R, Disabled> {
        self.inner.disable();
        self.into_state()
    }
}
