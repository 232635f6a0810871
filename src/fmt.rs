// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Internal logging macros.
//!
//! With the `defmt` feature these forward to the matching `defmt` macro. Without it they expand to
//! a no-op that still borrows every argument, so call sites do not produce unused-variable
//! warnings.

#![allow(unused_macros)]

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::trace!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            let _ = ($( &$x, )*);
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            let _ = ($( &$x, )*);
        }
    };
}
