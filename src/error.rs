// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Configuration errors.
//!
//! Register accesses themselves never fail; only decoding user-facing configuration values can.

use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The UART only supports 38400, 19200, 9600 and 4800 bit/s.
    #[error("unsupported UART baud rate: {0} bit/s")]
    UnsupportedBaud(u32),
}
