//! Serial command task
//!
//! Reads the command link and feeds every byte to the controller. Decoding,
//! pin writes, diagnostics and LED pulses run inline in this task.

use defmt::*;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embassy_time::Delay;
use embedded_io_async::Read;

use vbox_core::{Controller, Outcome, Stats};
use vbox_hal_rp2040::{RpOutput, UartWriter};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 32;

/// Controller wired to RP2040 outputs and the UART0 transmitter
pub type BridgeController = Controller<RpOutput, RpOutput, Delay, UartWriter<BufferedUartTx>>;

/// Serial task - receives command lines and applies them
#[embassy_executor::task]
pub async fn serial_task(mut rx: BufferedUartRx, mut controller: BridgeController) {
    info!("Serial task started");

    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    let before = controller.stats();
                    if let Some(outcome) = controller.feed(byte) {
                        log_outcome(&outcome, &before, &controller.stats());
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

/// Log the result of one processed line
fn log_outcome(outcome: &Outcome, before: &Stats, after: &Stats) {
    let dropped = after.dropped_bytes.wrapping_sub(before.dropped_bytes);
    if dropped > 0 {
        warn!("Line overflowed buffer, {} bytes dropped", dropped);
    }

    match outcome {
        Outcome::Applied(cmd) => {
            debug!(
                "Applied {:?} type={} ({})",
                cmd,
                cmd.type_code().value(),
                cmd.type_code().label()
            );
        }
        Outcome::Rejected(e) => {
            warn!("Rejected line: {:?}", e);
        }
    }

    trace!(
        "Totals: {} applied, {} rejected, {} bytes dropped",
        after.applied,
        after.rejected,
        after.dropped_bytes
    );
}
