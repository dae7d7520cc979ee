//! Activity LED
//!
//! One short pulse for every processed line, a burst of longer pulses for a
//! malformed one. Pulses block for their duration so a person can see them.

use embedded_hal::delay::DelayNs;
use vbox_hal::OutputPin;

use crate::config::{IndicatorTiming, PinConfig};
use crate::pin::SignalPin;

/// Activity LED with its blink timing
pub struct ActivityIndicator<P, D> {
    led: SignalPin<P>,
    delay: D,
    timing: IndicatorTiming,
}

impl<P: OutputPin, D: DelayNs> ActivityIndicator<P, D> {
    /// Create an indicator; the LED starts off
    pub fn new(led: SignalPin<P>, delay: D, timing: IndicatorTiming) -> Self {
        Self { led, delay, timing }
    }

    /// Create an indicator from the LED pin configuration
    pub fn from_config(pin: P, config: &PinConfig, delay: D, timing: IndicatorTiming) -> Self {
        Self::new(SignalPin::from_config(pin, config), delay, timing)
    }

    /// Single acknowledgment pulse
    pub fn acknowledge(&mut self) {
        self.pulse(self.timing.ack_ms, 0);
    }

    /// Fault burst
    pub fn fault(&mut self) {
        for _ in 0..self.timing.fault_pulses {
            self.pulse(self.timing.fault_on_ms, self.timing.fault_off_ms);
        }
    }

    /// True while the LED is lit
    pub fn is_lit(&self) -> bool {
        self.led.is_asserted()
    }

    /// Blink timing in use
    pub fn timing(&self) -> &IndicatorTiming {
        &self.timing
    }

    /// Borrow the LED pin
    pub fn led(&self) -> &SignalPin<P> {
        &self.led
    }

    fn pulse(&mut self, on_ms: u32, off_ms: u32) {
        self.led.set_asserted(true);
        self.delay.delay_ms(on_ms);
        self.led.set_asserted(false);
        if off_ms > 0 {
            self.delay.delay_ms(off_ms);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::pin::tests::MockPin;

    /// Delay that only accumulates the requested time
    #[derive(Debug, Default)]
    pub(crate) struct MockDelay {
        pub total_ns: u64,
        pub calls: u32,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
            self.calls += 1;
        }
    }

    impl MockDelay {
        pub fn total_ms(&self) -> u64 {
            self.total_ns / 1_000_000
        }
    }

    fn indicator() -> ActivityIndicator<MockPin, MockDelay> {
        ActivityIndicator::new(
            SignalPin::active_high(MockPin::default()),
            MockDelay::default(),
            IndicatorTiming::default(),
        )
    }

    #[test]
    fn test_acknowledge_pulse() {
        let mut ind = indicator();
        ind.acknowledge();

        assert!(!ind.is_lit());
        assert_eq!(ind.delay.total_ms(), 50);
        // Initial off + on + off
        assert_eq!(ind.led().pin().writes, 3);
    }

    #[test]
    fn test_fault_burst() {
        let mut ind = indicator();
        ind.fault();

        assert!(!ind.is_lit());
        assert_eq!(ind.delay.total_ms(), 3 * (100 + 100));
        assert_eq!(ind.led().pin().writes, 1 + 3 * 2);
    }

    #[test]
    fn test_custom_timing() {
        let timing = IndicatorTiming {
            ack_ms: 10,
            fault_on_ms: 20,
            fault_off_ms: 5,
            fault_pulses: 2,
        };
        let mut ind = ActivityIndicator::from_config(
            MockPin::default(),
            &PinConfig::new(25),
            MockDelay::default(),
            timing,
        );
        ind.fault();
        ind.acknowledge();
        assert_eq!(ind.delay.total_ms(), 2 * 25 + 10);
        assert_eq!(ind.timing().fault_pulses, 2);
    }
}
