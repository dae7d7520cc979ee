//! Line accumulation for the serial command stream.
//!
//! Bytes are buffered until a `\n` arrives. The buffer has a fixed capacity
//! of [`LINE_CAPACITY`] bytes; anything past that is dropped silently and the
//! truncated line is still handed on when the terminator finally arrives.

use heapless::Vec;

/// Usable line capacity in bytes (terminator excluded)
pub const LINE_CAPACITY: usize = 31;

/// Byte that completes a line
pub const LINE_TERMINATOR: u8 = b'\n';

/// A complete line, without its terminator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Line {
    bytes: Vec<u8, LINE_CAPACITY>,
    dropped: usize,
}

impl Line {
    /// Raw line contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Line contents as text, if valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.bytes).ok()
    }

    /// Number of retained bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for an empty line (a bare `\n`)
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bytes dropped because the buffer was full
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// True if any bytes were dropped while this line was buffered
    pub fn is_truncated(&self) -> bool {
        self.dropped > 0
    }
}

/// Fixed-capacity line buffer fed one byte at a time
#[derive(Debug, Clone, Default)]
pub struct LineAccumulator {
    buffer: Vec<u8, LINE_CAPACITY>,
    dropped: usize,
}

impl LineAccumulator {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            dropped: 0,
        }
    }

    /// Feed a single byte
    ///
    /// Returns `Some(line)` when `byte` is the terminator; the buffer is
    /// empty again afterwards. A terminator on a full buffer still flushes
    /// it. Other bytes are appended, or dropped if the buffer is full.
    pub fn feed(&mut self, byte: u8) -> Option<Line> {
        if byte == LINE_TERMINATOR {
            let line = Line {
                bytes: core::mem::take(&mut self.buffer),
                dropped: self.dropped,
            };
            self.dropped = 0;
            return Some(line);
        }

        if self.buffer.push(byte).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
        None
    }

    /// Bytes buffered so far for the pending line
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// True when further non-terminator bytes will be dropped
    pub fn is_full(&self) -> bool {
        self.buffer.is_full()
    }

    /// Discard the pending line
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.dropped = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn feed_all(acc: &mut LineAccumulator, bytes: &[u8]) -> Option<Line> {
        let mut last = None;
        for &b in bytes {
            if let Some(line) = acc.feed(b) {
                last = Some(line);
            }
        }
        last
    }

    #[test]
    fn test_line_emitted_on_newline() {
        let mut acc = LineAccumulator::new();
        assert!(feed_all(&mut acc, b"1:0:1").is_none());
        assert_eq!(acc.pending(), b"1:0:1");

        let line = acc.feed(b'\n').unwrap();
        assert_eq!(line.as_bytes(), b"1:0:1");
        assert_eq!(line.as_str(), Some("1:0:1"));
        assert!(!line.is_truncated());
        assert!(acc.pending().is_empty());
    }

    #[test]
    fn test_bare_newline_yields_empty_line() {
        let mut acc = LineAccumulator::new();
        let line = acc.feed(b'\n').unwrap();
        assert!(line.is_empty());
    }

    #[test]
    fn test_overflow_truncates_silently() {
        let mut acc = LineAccumulator::new();
        let input = [b'7'; 40];
        assert!(feed_all(&mut acc, &input).is_none());
        assert!(acc.is_full());
        assert_eq!(acc.pending().len(), LINE_CAPACITY);

        let line = acc.feed(b'\n').unwrap();
        assert_eq!(line.len(), LINE_CAPACITY);
        assert_eq!(line.dropped(), 40 - LINE_CAPACITY);
    }

    #[test]
    fn test_full_buffer_still_flushes_on_newline() {
        let mut acc = LineAccumulator::new();
        feed_all(&mut acc, &[b'x'; LINE_CAPACITY]);
        assert!(acc.is_full());

        let line = acc.feed(b'\n').unwrap();
        assert_eq!(line.len(), LINE_CAPACITY);
        assert_eq!(line.dropped(), 0);
        assert!(!acc.is_full());
    }

    #[test]
    fn test_accumulator_reusable_after_line() {
        let mut acc = LineAccumulator::new();
        feed_all(&mut acc, &[b'a'; 35]);
        acc.feed(b'\n').unwrap();

        let line = feed_all(&mut acc, b"0:0:0:0:0:0\n").unwrap();
        assert_eq!(line.as_bytes(), b"0:0:0:0:0:0");
        assert_eq!(line.dropped(), 0);
    }

    #[test]
    fn test_reset_discards_pending() {
        let mut acc = LineAccumulator::new();
        feed_all(&mut acc, b"garbage");
        acc.reset();
        assert!(acc.pending().is_empty());
        assert!(acc.feed(b'\n').unwrap().is_empty());
    }

    #[test]
    fn test_carriage_return_is_kept() {
        let mut acc = LineAccumulator::new();
        let line = feed_all(&mut acc, b"1:1\r\n").unwrap();
        assert_eq!(line.as_bytes(), b"1:1\r");
    }

    proptest! {
        #[test]
        fn prop_only_prefix_retained(bytes in prop::collection::vec(any::<u8>().prop_filter("no newline", |b| *b != b'\n'), 0..100)) {
            let mut acc = LineAccumulator::new();
            for &b in &bytes {
                prop_assert!(acc.feed(b).is_none());
            }
            let line = acc.feed(b'\n').unwrap();
            let kept = bytes.len().min(LINE_CAPACITY);
            prop_assert_eq!(line.as_bytes(), &bytes[..kept]);
            prop_assert_eq!(line.dropped(), bytes.len() - kept);
        }
    }
}
