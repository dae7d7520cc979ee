//! VBox Signal Bridge Protocol
//!
//! This crate defines the line-based text protocol between the host vision
//! system and the signal bridge board. The host sends one command per line:
//!
//! ```text
//! camera:error:detection:type0:type1:type2\n
//! ```
//!
//! Each field is an ASCII signed integer. Only 0 and 1 are meaningful;
//! anything else is saturated into that range rather than rejected. The
//! three type bits form a 3-bit box-size code (`type2` is the MSB).
//!
//! Example: `1:0:1:0:0:1\n` means camera OK, no error, box detected,
//! type code `100` (30x50).
//!
//! The board answers with human-readable diagnostic lines only; there is no
//! binary framing and no readback command.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod line;
pub mod report;
pub mod type_code;

pub use command::{clamp_level, Command, ParseError, Signal, ENCODED_LEN, FIELD_COUNT};
pub use line::{Line, LineAccumulator, LINE_CAPACITY, LINE_TERMINATOR};
pub use report::{Report, FORMAT_BANNER, READY_BANNER, REPORT_CAPACITY};
pub use type_code::{BoxType, TypeCode};
