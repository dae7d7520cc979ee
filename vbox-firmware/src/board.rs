//! Board configuration compiled from board.toml
//!
//! `build.rs` validates the file and generates [`BOARD`]; an invalid
//! configuration fails the build rather than the boot.

use defmt::*;
use vbox_core::config::{BoardConfig, IndicatorTiming, OutputPins, PinConfig, SerialConfig};
use vbox_protocol::Signal;

include!(concat!(env!("OUT_DIR"), "/board.rs"));

/// Log a summary of the board configuration
pub fn log_config_summary(config: &BoardConfig) {
    info!("Board configuration: {} baud", config.serial.baudrate);
    for signal in Signal::ALL {
        let pin = config.outputs.get(signal);
        debug!(
            "  {} -> gpio{}{}",
            signal.name(),
            pin.pin,
            if pin.inverted { " (active-low)" } else { "" }
        );
    }
    debug!(
        "  activity LED -> gpio{} (ack {}ms, fault {}x{}/{}ms)",
        config.activity_led.pin,
        config.indicator.ack_ms,
        config.indicator.fault_pulses,
        config.indicator.fault_on_ms,
        config.indicator.fault_off_ms
    );
}
