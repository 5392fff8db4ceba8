//! Transport layer for Ajazz AK820 Pro keyboard communication
//!
//! This crate owns the wire side of the driver: the feature-report packet
//! layouts, the exclusive HID session on one keyboard, and the command
//! sequencer that walks a list of reports through the device with the
//! mandatory response drain between sends.
//!
//! The AK820 Pro takes lighting updates as short handshakes of 65-byte
//! feature reports (START, sub-command, payload, sometimes FINISH). Every
//! sent report is acknowledged with a response that must be read before the
//! next send; the firmware rejects back-to-back reports otherwise.

pub mod error;
pub mod mock;
pub mod packet;
pub mod protocol;
pub mod session;

pub use error::TransportError;
pub use packet::{sleep_packet, ModeOptions, ModePacket};
pub use protocol::{CommandBuffer, PACKET_LENGTH, RESPONSE_PACKET_LENGTH};
pub use session::HidSession;

/// An exclusive session on one keyboard's vendor HID interface.
///
/// [`HidSession`] is the hardware implementation; tests substitute the
/// recording mock from [`mock`]. Open and close are idempotent. The trait
/// does no reference counting: callers that dispatch several operations
/// against one session must open once, await them all, and close once.
pub trait Transport: Send + Sync {
    /// Open the device handle. Opening an already-open session is a no-op.
    fn open(&self) -> Result<(), TransportError>;

    /// Release the handle so a later [`open`](Transport::open) succeeds.
    /// Closing a closed session is a no-op.
    fn close(&self);

    /// Whether the session currently holds a device handle.
    fn is_open(&self) -> bool;

    /// Send each buffer as a feature report, in order, draining one
    /// response after every send. Response content is not decoded.
    ///
    /// Fails with [`TransportError::NoHandle`] before any I/O when the
    /// session is not open. There is no rollback: a mid-sequence failure
    /// leaves the earlier exchanges applied on the device.
    fn execute(&self, commands: &[CommandBuffer]) -> Result<(), TransportError>;
}
