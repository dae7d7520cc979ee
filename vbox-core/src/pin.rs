//! Polarity-aware output pin
//!
//! Wraps a raw [`OutputPin`] and tracks the logical (asserted) state
//! separately from the electrical level, so active-low wiring stays a
//! configuration detail.

use vbox_hal::OutputPin;

use crate::config::PinConfig;

/// Output pin with logical asserted/deasserted state
pub struct SignalPin<P> {
    pin: P,
    /// If true, asserted = pin LOW
    inverted: bool,
    asserted: bool,
}

impl<P: OutputPin> SignalPin<P> {
    /// Wrap a pin and drive it to the deasserted level
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut signal = Self {
            pin,
            inverted,
            asserted: false,
        };
        signal.set_asserted(false);
        signal
    }

    /// Wrap a pin using the polarity from its configuration
    pub fn from_config(pin: P, config: &PinConfig) -> Self {
        Self::new(pin, config.inverted)
    }

    /// Create an active-high signal pin
    pub fn active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create an active-low signal pin
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Drive the pin to the asserted or deasserted level
    pub fn set_asserted(&mut self, asserted: bool) {
        self.asserted = asserted;
        // Normal: asserted=true, inverted=false → high
        // Inverted: asserted=true, inverted=true → low
        self.pin.set_state(asserted != self.inverted);
    }

    /// Logical state last written
    pub fn is_asserted(&self) -> bool {
        self.asserted
    }

    /// Borrow the underlying pin
    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Release the underlying pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Mock GPIO pin recording its level and write count
    #[derive(Debug, Default)]
    pub(crate) struct MockPin {
        pub high: bool,
        pub writes: u32,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
            self.writes += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
            self.writes += 1;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_high_signal() {
        let mut signal = SignalPin::active_high(MockPin::default());

        // Initially deasserted
        assert!(!signal.is_asserted());
        assert!(!signal.pin().is_set_high());

        signal.set_asserted(true);
        assert!(signal.is_asserted());
        assert!(signal.pin().is_set_high());

        signal.set_asserted(false);
        assert!(!signal.pin().is_set_high());
    }

    #[test]
    fn test_active_low_signal() {
        let mut signal = SignalPin::active_low(MockPin::default());

        // Deasserted active-low pin idles high
        assert!(!signal.is_asserted());
        assert!(signal.pin().is_set_high());

        signal.set_asserted(true);
        assert!(signal.is_asserted());
        assert!(!signal.pin().is_set_high());
    }

    #[test]
    fn test_from_config_polarity() {
        let signal = SignalPin::from_config(MockPin::default(), &PinConfig::inverted(9));
        assert!(signal.pin().is_set_high());
        assert_eq!(signal.into_inner().writes, 1);
    }
}
