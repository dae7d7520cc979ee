//! VBox Hardware Abstraction Layer
//!
//! Traits implemented by chip-specific HALs so the signal bridge logic in
//! `vbox-core` runs unchanged on the target and against in-memory fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  vbox-firmware / vbox-core              │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  vbox-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ vbox-hal-     │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output
//! - [`uart::UartTx`] - Serial transmit (diagnostic output)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod uart;

pub use gpio::OutputPin;
pub use uart::{UartConfig, UartTx};
