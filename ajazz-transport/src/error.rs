//! Transport error types

use thiserror::Error;

/// Errors that can occur during transport operations
#[derive(Error, Debug)]
pub enum TransportError {
    /// hidapi context could not be created
    #[error("HID subsystem init failed: {0}")]
    HidInit(String),

    /// Device not found or not accessible
    #[error("Couldn't open handle to keyboard {vid:04x}:{pid:04x}: {reason}")]
    DeviceOpen { vid: u16, pid: u16, reason: String },

    /// Operation attempted without an open session
    #[error("No open device handle")]
    NoHandle,

    /// A feature-report send or read failed
    #[error("Feature report failed: {0}")]
    Report(String),
}

impl From<hidapi::HidError> for TransportError {
    fn from(e: hidapi::HidError) -> Self {
        TransportError::Report(e.to_string())
    }
}
