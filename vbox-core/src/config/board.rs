//! Board configuration
//!
//! Defaults reproduce the reference wiring: signals on GPIO2-7, the on-board
//! LED on GPIO25, UART0 on GPIO0/1 at 9600 baud.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use vbox_hal::UartConfig;
use vbox_protocol::{Signal, FIELD_COUNT};

/// Number of GPIO pins on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// UART0 TX pin (reserved)
pub const UART_TX_PIN: u8 = 0;

/// UART0 RX pin (reserved)
pub const UART_RX_PIN: u8 = 1;

/// Default serial speed of the reference hardware
pub const DEFAULT_BAUDRATE: u32 = 9600;

/// Pins driven by configuration: six signals plus the LED
const CONFIGURED_PIN_COUNT: usize = FIELD_COUNT + 1;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin number is not a valid GPIO
    PinOutOfRange(u8),
    /// Pin is used by the serial link
    PinReserved(u8),
    /// Pin is assigned to more than one output
    DuplicatePin(u8),
    /// Baud rate of zero
    InvalidBaudrate,
    /// Fault pattern with no pulses would be invisible
    NoFaultPulses,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::PinOutOfRange(pin) => {
                write!(f, "gpio{} out of range (0-{})", pin, GPIO_COUNT - 1)
            }
            ConfigError::PinReserved(pin) => write!(f, "gpio{} is reserved for UART0", pin),
            ConfigError::DuplicatePin(pin) => write!(f, "gpio{} assigned more than once", pin),
            ConfigError::InvalidBaudrate => write!(f, "baudrate must be non-zero"),
            ConfigError::NoFaultPulses => write!(f, "fault_pulses must be at least 1"),
        }
    }
}

/// Output pin with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (asserted = electrically low)
    #[cfg_attr(feature = "serde", serde(default))]
    pub inverted: bool,
}

impl PinConfig {
    /// Create an active-high pin
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }
}

/// Signal-to-pin assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OutputPins {
    pub camera: PinConfig,
    pub error: PinConfig,
    pub detection: PinConfig,
    pub type_bit0: PinConfig,
    pub type_bit1: PinConfig,
    pub type_bit2: PinConfig,
}

impl Default for OutputPins {
    fn default() -> Self {
        Self {
            camera: PinConfig::new(2),
            error: PinConfig::new(3),
            detection: PinConfig::new(4),
            type_bit0: PinConfig::new(5),
            type_bit1: PinConfig::new(6),
            type_bit2: PinConfig::new(7),
        }
    }
}

impl OutputPins {
    /// Pins in wire field order
    pub const fn as_array(&self) -> [PinConfig; FIELD_COUNT] {
        [
            self.camera,
            self.error,
            self.detection,
            self.type_bit0,
            self.type_bit1,
            self.type_bit2,
        ]
    }

    /// Pin for a single signal
    pub const fn get(&self, signal: Signal) -> PinConfig {
        self.as_array()[signal.index()]
    }
}

/// Serial link settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SerialConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            baudrate: DEFAULT_BAUDRATE,
        }
    }
}

/// Activity LED timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndicatorTiming {
    /// LED on-time after every processed line
    pub ack_ms: u32,
    /// LED on-time of each fault pulse
    pub fault_on_ms: u32,
    /// LED off-time after each fault pulse
    pub fault_off_ms: u32,
    /// Number of fault pulses for a malformed line
    pub fault_pulses: u8,
}

impl Default for IndicatorTiming {
    fn default() -> Self {
        Self {
            ack_ms: 50,
            fault_on_ms: 100,
            fault_off_ms: 100,
            fault_pulses: 3,
        }
    }
}

/// Complete board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    /// Serial link
    pub serial: SerialConfig,
    /// Command-driven outputs
    pub outputs: OutputPins,
    /// Activity LED
    pub activity_led: PinConfig,
    /// Activity LED timing
    pub indicator: IndicatorTiming,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            serial: SerialConfig::default(),
            outputs: OutputPins::default(),
            activity_led: PinConfig::new(25),
            indicator: IndicatorTiming::default(),
        }
    }
}

impl BoardConfig {
    /// UART settings for the command link (8N1)
    pub const fn uart_config(&self) -> UartConfig {
        UartConfig::with_baudrate(self.serial.baudrate)
    }

    /// Check pin assignment and timing for consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.serial.baudrate == 0 {
            return Err(ConfigError::InvalidBaudrate);
        }
        if self.indicator.fault_pulses == 0 {
            return Err(ConfigError::NoFaultPulses);
        }

        let pins = self.configured_pins();
        for (i, cfg) in pins.iter().enumerate() {
            if cfg.pin >= GPIO_COUNT {
                return Err(ConfigError::PinOutOfRange(cfg.pin));
            }
            if cfg.pin == UART_TX_PIN || cfg.pin == UART_RX_PIN {
                return Err(ConfigError::PinReserved(cfg.pin));
            }
            if pins[..i].iter().any(|other| other.pin == cfg.pin) {
                return Err(ConfigError::DuplicatePin(cfg.pin));
            }
        }
        Ok(())
    }

    /// Every configured pin: the six outputs followed by the LED
    fn configured_pins(&self) -> [PinConfig; CONFIGURED_PIN_COUNT] {
        let outputs = self.outputs.as_array();
        let mut pins = [self.activity_led; CONFIGURED_PIN_COUNT];
        pins[..FIELD_COUNT].copy_from_slice(&outputs);
        pins
    }
}
