// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Peripheral Drivers
//!
//! Drivers for the SoC's stateful peripherals. They sit on top of the [`RegisterBlock`] primitive
//! from `hw/` and below the application logic.
//!
//! ## Existing drivers
//!
//! - [`watchdog`] – watchdog timer with latched expiry interrupt, plus a typestate wrapper
//! - [`nn_accelerator`] – two-input, three-neuron inference accelerator
//!
//! [`RegisterBlock`]: crate::hw::RegisterBlock

pub mod nn_accelerator;
pub mod watchdog;

pub use nn_accelerator::NnAccelerator;
pub use watchdog::{Watchdog, WatchdogController, WatchdogState};
