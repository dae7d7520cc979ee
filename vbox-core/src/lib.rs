//! Board-agnostic core logic for the VBox signal bridge
//!
//! This crate contains everything between the serial byte stream and the
//! GPIO registers that does not depend on a specific chip:
//!
//! - Board configuration types and validation
//! - Polarity-aware signal pins
//! - The six-pin output bank
//! - The activity indicator blink patterns
//! - The controller that ties line accumulation, decoding, pin writes and
//!   diagnostics together

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod indicator;
pub mod outputs;
pub mod pin;

pub use config::{BoardConfig, ConfigError, IndicatorTiming, OutputPins, PinConfig, SerialConfig};
pub use controller::{Controller, Outcome, Stats};
pub use indicator::ActivityIndicator;
pub use outputs::{OutputBank, PinState};
pub use pin::SignalPin;
