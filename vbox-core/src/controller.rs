//! Signal bridge controller
//!
//! Owns the line accumulator, the output bank, the activity indicator and
//! the diagnostic UART. Each complete line is handled to completion inside
//! [`Controller::feed`]: decode, apply or reject, report, blink.

use embedded_hal::delay::DelayNs;
use vbox_hal::{OutputPin, UartTx};
use vbox_protocol::{
    Command, Line, LineAccumulator, ParseError, Report, FORMAT_BANNER, READY_BANNER,
};

use crate::indicator::ActivityIndicator;
use crate::outputs::{OutputBank, PinState};

/// Result of handling one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Command decoded and written to the pins
    Applied(Command),
    /// Line rejected; pins untouched
    Rejected(ParseError),
}

impl Outcome {
    /// True if the line changed the outputs
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }
}

/// Running counters, for logging only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stats {
    /// Lines decoded and applied
    pub applied: u32,
    /// Lines rejected as malformed
    pub rejected: u32,
    /// Bytes dropped because a line overflowed the buffer
    pub dropped_bytes: u32,
}

/// Serial-to-GPIO controller
pub struct Controller<P, L, D, W> {
    lines: LineAccumulator,
    outputs: OutputBank<P>,
    indicator: ActivityIndicator<L, D>,
    diag: W,
    stats: Stats,
}

impl<P, L, D, W> Controller<P, L, D, W>
where
    P: OutputPin,
    L: OutputPin,
    D: DelayNs,
    W: UartTx,
{
    /// Create a controller with an empty line buffer
    pub fn new(outputs: OutputBank<P>, indicator: ActivityIndicator<L, D>, diag: W) -> Self {
        Self {
            lines: LineAccumulator::new(),
            outputs,
            indicator,
            diag,
            stats: Stats::default(),
        }
    }

    /// Print the startup banner
    pub fn announce(&mut self) {
        self.diag.write_line(READY_BANNER.as_bytes()).ok();
        self.diag.write_line(FORMAT_BANNER.as_bytes()).ok();
        self.diag.flush().ok();
    }

    /// Feed one received byte
    ///
    /// Returns the outcome when the byte completed a line.
    pub fn feed(&mut self, byte: u8) -> Option<Outcome> {
        let line = self.lines.feed(byte)?;
        Some(self.process_line(&line))
    }

    /// Handle one complete line
    ///
    /// A single trailing `\r` is stripped so CRLF senders work; the
    /// rejection echo still shows the line as received.
    pub fn process_line(&mut self, line: &Line) -> Outcome {
        self.stats.dropped_bytes = self
            .stats
            .dropped_bytes
            .saturating_add(line.dropped() as u32);

        let raw = line.as_bytes();
        let body = raw.strip_suffix(b"\r").unwrap_or(raw);

        let outcome = match Command::decode(body) {
            Ok(cmd) => {
                self.outputs.apply(&cmd);
                self.stats.applied = self.stats.applied.wrapping_add(1);
                self.report(&Report::status(&cmd));
                Outcome::Applied(cmd)
            }
            Err(e) => {
                self.stats.rejected = self.stats.rejected.wrapping_add(1);
                self.report(&Report::rejection(raw));
                self.indicator.fault();
                Outcome::Rejected(e)
            }
        };

        self.indicator.acknowledge();
        outcome
    }

    /// Logical state of the outputs
    pub fn state(&self) -> PinState {
        self.outputs.state()
    }

    /// Running counters
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Bytes of the line being received
    pub fn pending(&self) -> &[u8] {
        self.lines.pending()
    }

    /// Borrow the output bank
    pub fn outputs(&self) -> &OutputBank<P> {
        &self.outputs
    }

    /// Borrow the activity indicator
    pub fn indicator(&self) -> &ActivityIndicator<L, D> {
        &self.indicator
    }

    /// Borrow the diagnostic writer
    pub fn diag(&self) -> &W {
        &self.diag
    }

    // Diagnostics are best-effort; a failed write must not affect the pins.
    fn report(&mut self, report: &Report) {
        self.diag.write_line(report.as_bytes()).ok();
        self.diag.flush().ok();
    }
}
