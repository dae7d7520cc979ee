//! Configuration types
//!
//! Board-level settings: which GPIO drives which signal, serial speed and
//! indicator timing. The firmware build script deserializes these from the
//! board TOML file.

pub mod board;

pub use board::*;
