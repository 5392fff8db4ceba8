//! Keyboard interface error types

use ajazz_transport::TransportError;
use thiserror::Error;

/// Errors from keyboard operations
#[derive(Error, Debug)]
pub enum KeyboardError {
    /// Transport layer error
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Parameter outside its firmware range, caught before any device I/O
    #[error("{name} must be between 0 and {max}, got {value}")]
    ParameterRange {
        name: &'static str,
        value: u8,
        max: u8,
    },

    /// Feature not supported by this driver yet
    #[error("Feature not supported: {0}")]
    NotSupported(String),

    /// Referenced file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),
}
