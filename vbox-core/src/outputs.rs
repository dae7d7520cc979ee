//! Six-pin output bank
//!
//! Owns the command-driven pins and a shadow copy of their logical state.
//! All pins start deasserted; only a successfully decoded command changes
//! them.

use vbox_hal::OutputPin;
use vbox_protocol::{Command, Signal, FIELD_COUNT};

use crate::config::OutputPins;
use crate::pin::SignalPin;

/// Logical state of the six outputs, in wire field order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinState {
    levels: [bool; FIELD_COUNT],
}

impl PinState {
    /// All outputs deasserted
    pub const LOW: Self = Self {
        levels: [false; FIELD_COUNT],
    };

    /// State of a single signal
    pub const fn get(&self, signal: Signal) -> bool {
        self.levels[signal.index()]
    }

    /// Levels in wire field order
    pub const fn levels(&self) -> [bool; FIELD_COUNT] {
        self.levels
    }

    /// The command that would produce this state
    pub const fn as_command(&self) -> Command {
        Command::from_fields(self.levels)
    }
}

impl From<Command> for PinState {
    fn from(cmd: Command) -> Self {
        Self {
            levels: cmd.fields(),
        }
    }
}

/// The six command-driven output pins
pub struct OutputBank<P> {
    pins: [SignalPin<P>; FIELD_COUNT],
}

impl<P: OutputPin> OutputBank<P> {
    /// Create a bank from pins in wire field order
    ///
    /// `inverted` gives the polarity of each pin in the same order. Every
    /// pin is driven to its deasserted level.
    pub fn new(pins: [P; FIELD_COUNT], inverted: [bool; FIELD_COUNT]) -> Self {
        let mut idx = 0;
        let pins = pins.map(|pin| {
            let signal = SignalPin::new(pin, inverted[idx]);
            idx += 1;
            signal
        });
        Self { pins }
    }

    /// Create a bank of active-high pins
    pub fn active_high(pins: [P; FIELD_COUNT]) -> Self {
        Self::new(pins, [false; FIELD_COUNT])
    }

    /// Create a bank using the polarity from the board configuration
    pub fn from_config(pins: [P; FIELD_COUNT], config: &OutputPins) -> Self {
        Self::new(pins, config.as_array().map(|p| p.inverted))
    }

    /// Drive a single signal
    pub fn set_state(&mut self, signal: Signal, asserted: bool) {
        self.pins[signal.index()].set_asserted(asserted);
    }

    /// Apply every field of a command to its pin
    pub fn apply(&mut self, cmd: &Command) {
        for signal in Signal::ALL {
            self.set_state(signal, cmd.get(signal));
        }
    }

    /// Logical state of all outputs
    pub fn state(&self) -> PinState {
        let mut levels = [false; FIELD_COUNT];
        for (level, pin) in levels.iter_mut().zip(self.pins.iter()) {
            *level = pin.is_asserted();
        }
        PinState { levels }
    }

    /// Borrow the pin driving `signal`
    pub fn pin(&self, signal: Signal) -> &SignalPin<P> {
        &self.pins[signal.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pin::tests::MockPin;
    use proptest::prelude::*;

    fn bank() -> OutputBank<MockPin> {
        OutputBank::active_high(core::array::from_fn(|_| MockPin::default()))
    }

    fn electrical(bank: &OutputBank<MockPin>) -> [bool; FIELD_COUNT] {
        Signal::ALL.map(|s| bank.pin(s).pin().is_set_high())
    }

    #[test]
    fn test_starts_low() {
        let bank = bank();
        assert_eq!(bank.state(), PinState::LOW);
        assert_eq!(electrical(&bank), [false; FIELD_COUNT]);
    }

    #[test]
    fn test_apply_mirrors_fields_in_pin_order() {
        let mut bank = bank();
        let cmd = Command::decode(b"1:0:1:0:0:1").unwrap();
        bank.apply(&cmd);

        assert_eq!(electrical(&bank), [true, false, true, false, false, true]);
        assert_eq!(bank.state().as_command(), cmd);
        assert!(bank.state().get(Signal::TypeBit2));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut bank = bank();
        let cmd = Command::decode(b"0:1:1:1:0:0").unwrap();
        bank.apply(&cmd);
        let first = electrical(&bank);
        bank.apply(&cmd);
        assert_eq!(electrical(&bank), first);
        assert_eq!(bank.state(), PinState::from(cmd));
    }

    #[test]
    fn test_inverted_pins() {
        let config = OutputPins {
            error: crate::PinConfig::inverted(3),
            ..OutputPins::default()
        };
        let mut bank =
            OutputBank::from_config(core::array::from_fn(|_| MockPin::default()), &config);

        // Deasserted error line idles high
        assert!(bank.pin(Signal::Error).pin().is_set_high());

        bank.apply(&Command::decode(b"0:1:0:0:0:0").unwrap());
        assert!(bank.state().get(Signal::Error));
        assert!(!bank.pin(Signal::Error).pin().is_set_high());
    }

    proptest! {
        #[test]
        fn prop_pins_reflect_command(fields in prop::array::uniform6(any::<bool>())) {
            let mut bank = bank();
            let cmd = Command::from_fields(fields);
            bank.apply(&cmd);
            prop_assert_eq!(electrical(&bank), fields);
        }
    }
}
