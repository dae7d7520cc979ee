//! GPIO outputs
//!
//! Adapts embassy-rp outputs to the `vbox_hal::OutputPin` trait.

use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::Peri;
use vbox_core::config::PinConfig;
use vbox_hal::OutputPin;

use crate::pins::{PinBank, PinError};

/// Push-pull output pin
pub struct RpOutput {
    pin: Output<'static>,
}

impl RpOutput {
    /// Configure `pin` as an output at `initial` level
    pub fn new(pin: Peri<'static, AnyPin>, initial: Level) -> Self {
        Self {
            pin: Output::new(pin, initial),
        }
    }

    /// Configure `pin` as an output idling at its deasserted level
    ///
    /// Active-low pins start high so they never glitch into the asserted
    /// state during bring-up.
    pub fn deasserted(pin: Peri<'static, AnyPin>, config: &PinConfig) -> Self {
        let initial = if config.inverted {
            Level::High
        } else {
            Level::Low
        };
        Self::new(pin, initial)
    }

    /// Take the configured pin from the bank and make it an output
    pub fn take(bank: &mut PinBank, config: &PinConfig) -> Result<Self, PinError> {
        let pin = bank.take(config.pin)?;
        Ok(Self::deasserted(pin, config))
    }
}

impl OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
