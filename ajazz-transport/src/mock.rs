//! In-memory transport for unit and integration tests.
//!
//! Always compiled (zero runtime cost), hidden from public docs.
#![doc(hidden)]

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::error::TransportError;
use crate::protocol::CommandBuffer;
use crate::Transport;

/// Recording stand-in for [`HidSession`](crate::HidSession).
///
/// Every executed buffer is appended to `received` under one lock per
/// `execute` call, so a sequence is recorded contiguously even when two
/// operations run concurrently.
#[derive(Default)]
pub struct MockTransport {
    open: AtomicBool,
    /// If set, `open()` fails with a device-open error.
    pub fail_open: AtomicBool,
    /// If set, `execute()` fails after recording nothing.
    pub fail_execute: AtomicBool,
    received: Mutex<Vec<CommandBuffer>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every buffer executed so far, in arrival order.
    pub fn received(&self) -> Vec<CommandBuffer> {
        self.received.lock().clone()
    }

    /// Number of buffers executed so far.
    pub fn sent_count(&self) -> usize {
        self.received.lock().len()
    }
}

impl Transport for MockTransport {
    fn open(&self) -> Result<(), TransportError> {
        if self.fail_open.load(Ordering::SeqCst) {
            return Err(TransportError::DeviceOpen {
                vid: 0,
                pid: 0,
                reason: "mock: open failure injected".into(),
            });
        }
        self.open.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }

    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    fn execute(&self, commands: &[CommandBuffer]) -> Result<(), TransportError> {
        let mut received = self.received.lock();
        if !self.is_open() {
            return Err(TransportError::NoHandle);
        }
        if self.fail_execute.load(Ordering::SeqCst) {
            return Err(TransportError::Report("mock: execute failure injected".into()));
        }
        received.extend_from_slice(commands);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol;

    #[test]
    fn open_close_are_idempotent() {
        let mock = MockTransport::new();
        assert!(!mock.is_open());
        mock.open().unwrap();
        mock.open().unwrap();
        assert!(mock.is_open());
        mock.close();
        mock.close();
        assert!(!mock.is_open());
    }

    #[test]
    fn execute_requires_open_session() {
        let mock = MockTransport::new();
        let err = mock.execute(&[protocol::start()]).unwrap_err();
        assert!(matches!(err, TransportError::NoHandle));
        assert_eq!(mock.sent_count(), 0);
    }

    #[test]
    fn execute_records_in_order() {
        let mock = MockTransport::new();
        mock.open().unwrap();
        mock.execute(&[protocol::start(), protocol::finish()]).unwrap();
        let log = mock.received();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0][1], protocol::cmd::START);
        assert_eq!(log[1][1], protocol::cmd::FINISH);
    }
}
