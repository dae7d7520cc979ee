//! Embassy async tasks
//!
//! The bridge runs a single task; everything a line triggers happens to
//! completion inside it.

pub mod serial;

pub use serial::{serial_task, BridgeController};
