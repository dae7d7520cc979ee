//! Human-readable diagnostic lines sent back to the host.
//!
//! These are for a person watching the serial monitor. Nothing parses them,
//! so the exact wording is not part of the control contract.

use core::fmt::{self, Write};

use heapless::Vec;

use crate::command::Command;

/// Maximum report length in bytes (line ending excluded)
pub const REPORT_CAPACITY: usize = 64;

/// First startup banner line
pub const READY_BANNER: &str = "Ready to receive commands";

/// Second startup banner line
pub const FORMAT_BANNER: &str = "Awaiting data in format: C:E:D:T0:T1:T2";

/// Prefix of a rejection report
pub const REJECTION_PREFIX: &[u8] = b"Invalid command: ";

/// A formatted diagnostic line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    bytes: Vec<u8, REPORT_CAPACITY>,
}

impl Report {
    /// Acknowledgment for an applied command
    ///
    /// `State: C=1 E=0 D=1 T=100 (30x50)`; the type bits are printed MSB
    /// first.
    pub fn status(cmd: &Command) -> Self {
        let mut report = Self::default();
        // 40 bytes at most, cannot overflow
        let _ = write!(
            report,
            "State: C={} E={} D={} T={}{}{} ({})",
            cmd.camera as u8,
            cmd.error as u8,
            cmd.detection as u8,
            cmd.type_bit2 as u8,
            cmd.type_bit1 as u8,
            cmd.type_bit0 as u8,
            cmd.type_code().label(),
        );
        report
    }

    /// Rejection echoing the offending line verbatim
    pub fn rejection(line: &[u8]) -> Self {
        let mut report = Self::default();
        report.push_bytes(REJECTION_PREFIX);
        report.push_bytes(line);
        report
    }

    /// Raw report bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Report as text, if valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.bytes).ok()
    }

    /// Append raw bytes, truncating at capacity
    fn push_bytes(&mut self, bytes: &[u8]) {
        let room = REPORT_CAPACITY - self.bytes.len();
        let take = bytes.len().min(room);
        let _ = self.bytes.extend_from_slice(&bytes[..take]);
    }
}

impl Write for Report {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.bytes
            .extend_from_slice(s.as_bytes())
            .map_err(|_| fmt::Error)
    }
}
