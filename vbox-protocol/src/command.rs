//! Command decoding and encoding.
//!
//! A command line is exactly six signed integers separated by `:`, with no
//! whitespace tolerance. Each integer is saturated into {0, 1}: out-of-range
//! values are coerced, never rejected.

use core::str::FromStr;

use heapless::Vec;

use crate::type_code::{BoxType, TypeCode};

/// Number of fields in a command line
pub const FIELD_COUNT: usize = 6;

/// Field separator
pub const FIELD_SEPARATOR: u8 = b':';

/// Length of an encoded command, terminator included (`1:0:1:0:0:1\n`)
pub const ENCODED_LEN: usize = FIELD_COUNT * 2;

/// Errors that can occur while decoding a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Line is not exactly six colon-separated integers
    MalformedLine,
}

/// One output signal, in wire field order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Signal {
    /// Camera operational
    Camera,
    /// System error present
    Error,
    /// Object detected
    Detection,
    /// Type code bit 0 (LSB)
    TypeBit0,
    /// Type code bit 1
    TypeBit1,
    /// Type code bit 2 (MSB)
    TypeBit2,
}

impl Signal {
    /// All signals in wire field order
    pub const ALL: [Signal; FIELD_COUNT] = [
        Signal::Camera,
        Signal::Error,
        Signal::Detection,
        Signal::TypeBit0,
        Signal::TypeBit1,
        Signal::TypeBit2,
    ];

    /// Field position on the wire
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short name used in logs
    pub const fn name(self) -> &'static str {
        match self {
            Signal::Camera => "camera",
            Signal::Error => "error",
            Signal::Detection => "detection",
            Signal::TypeBit0 => "type0",
            Signal::TypeBit1 => "type1",
            Signal::TypeBit2 => "type2",
        }
    }
}

/// Saturate a field value into {0, 1}
pub const fn clamp_level(value: i32) -> u8 {
    if value <= 0 {
        0
    } else {
        1
    }
}

/// A decoded command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    pub camera: bool,
    pub error: bool,
    pub detection: bool,
    pub type_bit0: bool,
    pub type_bit1: bool,
    pub type_bit2: bool,
}

impl Command {
    /// Build a command from fields in wire order
    pub const fn from_fields(fields: [bool; FIELD_COUNT]) -> Self {
        Self {
            camera: fields[0],
            error: fields[1],
            detection: fields[2],
            type_bit0: fields[3],
            type_bit1: fields[4],
            type_bit2: fields[5],
        }
    }

    /// Build a command for a classified box
    ///
    /// `BoxType::Invalid` has no canonical code and maps to `Unknown` (111),
    /// matching what the host sends for anything it cannot classify.
    pub fn for_box(camera: bool, error: bool, detection: bool, box_type: BoxType) -> Self {
        let code = box_type
            .code()
            .unwrap_or(TypeCode::from_bits(true, true, true));
        let (b0, b1, b2) = code.bits();
        Self::from_fields([camera, error, detection, b0, b1, b2])
    }

    /// Fields in wire order
    pub const fn fields(&self) -> [bool; FIELD_COUNT] {
        [
            self.camera,
            self.error,
            self.detection,
            self.type_bit0,
            self.type_bit1,
            self.type_bit2,
        ]
    }

    /// Value of a single signal
    pub const fn get(&self, signal: Signal) -> bool {
        self.fields()[signal.index()]
    }

    /// 3-bit type code from the type fields
    pub const fn type_code(&self) -> TypeCode {
        TypeCode::from_bits(self.type_bit0, self.type_bit1, self.type_bit2)
    }

    /// Decode a line (terminator already stripped)
    pub fn decode(line: &[u8]) -> Result<Self, ParseError> {
        let mut fields = [false; FIELD_COUNT];
        let mut count = 0;

        for token in line.split(|&b| b == FIELD_SEPARATOR) {
            if count == FIELD_COUNT {
                return Err(ParseError::MalformedLine);
            }
            fields[count] = clamp_level(parse_int(token)?) == 1;
            count += 1;
        }

        if count != FIELD_COUNT {
            return Err(ParseError::MalformedLine);
        }
        Ok(Self::from_fields(fields))
    }

    /// Encode in wire format, terminator included
    pub fn encode(&self) -> Vec<u8, ENCODED_LEN> {
        let mut out = Vec::new();
        for (i, field) in self.fields().iter().enumerate() {
            if i > 0 {
                let _ = out.push(FIELD_SEPARATOR);
            }
            let _ = out.push(if *field { b'1' } else { b'0' });
        }
        let _ = out.push(b'\n');
        out
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s.as_bytes())
    }
}

/// Parse an optionally signed decimal integer
///
/// Magnitudes beyond `i32` saturate; the value is only ever clamped to
/// {0, 1} so saturation never changes the outcome.
fn parse_int(token: &[u8]) -> Result<i32, ParseError> {
    let (negative, digits) = match token.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, token),
    };

    if digits.is_empty() {
        return Err(ParseError::MalformedLine);
    }

    let mut value: i32 = 0;
    for &b in digits {
        if !b.is_ascii_digit() {
            return Err(ParseError::MalformedLine);
        }
        value = value.saturating_mul(10).saturating_add((b - b'0') as i32);
    }

    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_well_formed() {
        let cmd = Command::decode(b"1:0:1:0:0:1").unwrap();
        assert_eq!(
            cmd,
            Command {
                camera: true,
                error: false,
                detection: true,
                type_bit0: false,
                type_bit1: false,
                type_bit2: true,
            }
        );
        assert_eq!(cmd.type_code().value(), 4);
        assert_eq!(cmd.type_code().label(), "30x50");
    }

    #[test]
    fn test_decode_all_zero_and_all_one() {
        assert_eq!(Command::decode(b"0:0:0:0:0:0").unwrap().type_code().label(), "none");
        assert_eq!(Command::decode(b"1:1:1:1:1:1").unwrap().type_code().label(), "unknown");
    }

    #[test]
    fn test_invalid_codes() {
        for line in [&b"0:0:0:1:1:0"[..], b"0:0:0:1:0:1", b"0:0:0:0:1:1"] {
            let cmd = Command::decode(line).unwrap();
            assert_eq!(cmd.type_code().label(), "invalid code");
        }
    }

    #[test]
    fn test_out_of_range_values_clamp() {
        let cmd = Command::decode(b"5:-3:2:-1:+7:0").unwrap();
        assert_eq!(cmd.fields(), [true, false, true, false, true, false]);
    }

    #[test]
    fn test_huge_magnitudes_saturate() {
        let cmd = Command::decode(b"99999999999:-99999999999:0:0:0:0").unwrap();
        assert!(cmd.camera);
        assert!(!cmd.error);
    }

    #[test]
    fn test_wrong_field_count() {
        assert_eq!(Command::decode(b"1:0:1:0:0"), Err(ParseError::MalformedLine));
        assert_eq!(Command::decode(b"1:0:1:0:0:1:1"), Err(ParseError::MalformedLine));
        assert_eq!(Command::decode(b""), Err(ParseError::MalformedLine));
    }

    #[test]
    fn test_non_numeric_tokens() {
        assert_eq!(Command::decode(b"abc"), Err(ParseError::MalformedLine));
        assert_eq!(Command::decode(b"1:0:x:0:0:1"), Err(ParseError::MalformedLine));
        assert_eq!(Command::decode(b"1:0:1:0:0:"), Err(ParseError::MalformedLine));
        assert_eq!(Command::decode(b"1:0:1:0:0:-"), Err(ParseError::MalformedLine));
        assert_eq!(Command::decode(b"1:0:1:0:0:1x"), Err(ParseError::MalformedLine));
    }

    #[test]
    fn test_whitespace_not_tolerated() {
        assert_eq!(Command::decode(b" 1:0:1:0:0:1"), Err(ParseError::MalformedLine));
        assert_eq!(Command::decode(b"1:0:1:0:0:1\r"), Err(ParseError::MalformedLine));
    }

    #[test]
    fn test_from_str() {
        let cmd: Command = "0:1:0:1:0:0".parse().unwrap();
        assert!(cmd.error);
        assert_eq!(cmd.type_code().label(), "10x20");
    }

    #[test]
    fn test_signal_order() {
        let cmd = Command::decode(b"1:0:0:0:0:1").unwrap();
        assert!(cmd.get(Signal::Camera));
        assert!(!cmd.get(Signal::Detection));
        assert!(cmd.get(Signal::TypeBit2));
        assert_eq!(Signal::TypeBit2.index(), 5);
    }

    #[test]
    fn test_encode_for_box() {
        let cmd = Command::for_box(true, false, true, BoxType::Box30x50);
        assert_eq!(&cmd.encode()[..], b"1:0:1:0:0:1\n");

        let err = Command::for_box(false, true, false, BoxType::Invalid);
        assert_eq!(&err.encode()[..], b"0:1:0:1:1:1\n");
    }

    proptest! {
        #[test]
        fn prop_clamps_any_six_integers(values in prop::array::uniform6(any::<i32>())) {
            let line = values
                .iter()
                .map(|v| v.to_string())
                .collect::<std::vec::Vec<_>>()
                .join(":");
            let cmd = Command::decode(line.as_bytes()).unwrap();
            for (field, value) in cmd.fields().iter().zip(values.iter()) {
                prop_assert_eq!(*field, *value > 0);
            }
        }

        #[test]
        fn prop_wrong_count_rejected(count in 0usize..12, value in 0i32..2) {
            prop_assume!(count != FIELD_COUNT);
            let line = std::iter::repeat(value.to_string())
                .take(count)
                .collect::<std::vec::Vec<_>>()
                .join(":");
            prop_assert_eq!(Command::decode(line.as_bytes()), Err(ParseError::MalformedLine));
        }
    }
}
