//! RP2040-specific HAL for the signal bridge firmware
//!
//! This crate provides RP2040 implementations of the shared `vbox-hal`
//! traits, plus RP2040-specific functionality:
//!
//! - GPIO outputs implementing `vbox_hal::OutputPin`
//! - Dynamic pin allocation for config-driven setup
//! - UART configuration mapping and a blocking diagnostic writer

#![no_std]

pub mod gpio;
pub mod pins;
pub mod uart;

pub use gpio::RpOutput;
pub use pins::{PinBank, PinError, SerialPeripherals};
pub use uart::{to_embassy_config, UartBusError, UartWriter};
