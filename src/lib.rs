// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # PLD SoC Firmware
//!
//! Bare-metal drivers for the peripherals of the course's RV32IM soft-core SoC, written in Rust.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | Register access and thin wrappers around UART, SPI, the I/O bus and delays |
//! | [`drivers`] | Stateful peripherals (watchdog timer, inference accelerator) |
//! | [`soc`] | Memory map and peripheral ownership |
//! | [`config`] | Peripheral configuration with sensible defaults |
//! | [`selftest`] | Watchdog bring-up sequence |
//!
//! Drivers are generic over [`hw::RegisterBlock`], so the same code runs against the real
//! registers on the board and against simulated register files in host tests.
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Build the firmware image:
//!
//! ```bash
//! cargo build --release --features rt --target riscv32im-unknown-none-elf
//! ```
//!
//! ## Features
//!
//! - `rt` – runtime and panic handler for the firmware binary
//! - `defmt` – driver trace logging and `defmt::Format` impls. The crate emits frames but does
//!   not provide a transport: the final binary must link exactly one `#[defmt::global_logger]`.
//!   The soft core has no RTT/semihosting probe interface, so `defmt-rtt` will not work here;
//!   use a logger that writes frames out over [`hw::Uart`]. The bundled `pld-soc` binary does
//!   not enable this feature.
//!
//! ## License
//!
//! Licensed under the **MIT License**.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod drivers;
pub mod error;
pub mod hw;
pub mod selftest;
pub mod soc;

pub use error::ConfigError;
