//! VBox Signal Bridge Firmware
//!
//! Receives `camera:error:detection:type0:type1:type2` lines from the host
//! vision system over UART0 and mirrors them onto six GPIO outputs, with
//! the on-board LED as an activity indicator.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Uart};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use vbox_core::config::{BoardConfig, PinConfig};
use vbox_core::{ActivityIndicator, Controller, OutputBank};
use vbox_hal_rp2040::{to_embassy_config, PinBank, RpOutput, UartWriter};

mod board;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 128]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("VBox signal bridge starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = board::BOARD;
    board::log_config_summary(&config);

    let (mut bank, serial) = PinBank::new(p);

    // Outputs start deasserted
    let outputs = OutputBank::from_config(take_outputs(&mut bank, &config), &config.outputs);
    let led = take_output(&mut bank, &config.activity_led);
    let indicator =
        ActivityIndicator::from_config(led, &config.activity_led, Delay, config.indicator);
    info!("Outputs initialized");

    let tx_buf = TX_BUF.init([0u8; 128]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(
        serial.uart,
        serial.tx,
        serial.rx,
        to_embassy_config(&config.uart_config()),
    );
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized at {} baud", config.serial.baudrate);

    let mut controller = Controller::new(outputs, indicator, UartWriter::new(tx));
    controller.announce();

    spawner.spawn(tasks::serial_task(rx, controller)).unwrap();

    info!("Serial task spawned, firmware running");
}

/// Take the six signal pins in wire field order
fn take_outputs(bank: &mut PinBank, config: &BoardConfig) -> [RpOutput; 6] {
    config.outputs.as_array().map(|pin| take_output(bank, &pin))
}

/// Take one configured pin as an output
///
/// build.rs already rejected invalid or duplicate pins, so a failure here
/// means the bank and the validation disagree.
fn take_output(bank: &mut PinBank, config: &PinConfig) -> RpOutput {
    unwrap!(RpOutput::take(bank, config))
}
