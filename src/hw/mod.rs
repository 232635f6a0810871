pub mod delay;
pub mod mmio;
pub mod outbus;
pub mod spi;
pub mod uart;

pub use delay::BusyDelay;
pub use mmio::{Mmio, RegisterBlock};
pub use outbus::{OutBus, OutBusPin};
pub use spi::Spi;
pub use uart::Uart;
