//! UART support for the command link
//!
//! Maps the chip-agnostic `vbox_hal::UartConfig` onto embassy-rp's
//! configuration and wraps a blocking `embedded_io::Write` transmitter as a
//! `vbox_hal::UartTx` for diagnostic output.

use embassy_rp::uart::{Config, DataBits, Parity, StopBits};
use embedded_io::{Error as _, ErrorKind};
use vbox_hal::uart as hal;
use vbox_hal::UartTx;

/// Error from UART operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartBusError {
    /// Receiver or FIFO overrun
    Overrun,
    /// Frame, parity or break condition
    InvalidData,
    /// Other error
    Other,
}

impl From<ErrorKind> for UartBusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::OutOfMemory => UartBusError::Overrun,
            ErrorKind::InvalidData => UartBusError::InvalidData,
            _ => UartBusError::Other,
        }
    }
}

/// Build an embassy-rp UART config
pub fn to_embassy_config(config: &hal::UartConfig) -> Config {
    let mut cfg = Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        hal::DataBits::Seven => DataBits::DataBits7,
        hal::DataBits::Eight => DataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        hal::Parity::None => Parity::ParityNone,
        hal::Parity::Even => Parity::ParityEven,
        hal::Parity::Odd => Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        hal::StopBits::One => StopBits::STOP1,
        hal::StopBits::Two => StopBits::STOP2,
    };
    cfg
}

/// Blocking transmitter adapter
pub struct UartWriter<W> {
    inner: W,
}

impl<W: embedded_io::Write> UartWriter<W> {
    /// Wrap a blocking writer
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Release the wrapped writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: embedded_io::Write> UartTx for UartWriter<W> {
    type Error = UartBusError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.inner
            .write_all(data)
            .map_err(|e| UartBusError::from(e.kind()))
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.flush().map_err(|e| UartBusError::from(e.kind()))
    }
}
