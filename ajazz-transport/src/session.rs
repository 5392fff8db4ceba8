//! Exclusive HID session on one AK820 Pro.

use hidapi::{HidApi, HidDevice};
use parking_lot::Mutex;
use tracing::{debug, info};

use crate::error::TransportError;
use crate::protocol::{cmd, device, CommandBuffer, COMMAND_PREFIX, RESPONSE_PACKET_LENGTH};
use crate::Transport;

/// Session owning the hidapi context and, while open, the device handle.
///
/// The handle lives behind a mutex so that two concurrently dispatched
/// command sequences serialize at sequence granularity: each [`execute`]
/// call holds the lock for its whole handshake. Open/close bracketing
/// around a burst of operations is still the caller's job.
///
/// [`execute`]: Transport::execute
pub struct HidSession {
    api: HidApi,
    vid: u16,
    pid: u16,
    device: Mutex<Option<HidDevice>>,
}

impl HidSession {
    /// Initialize the HID subsystem without opening the device yet.
    pub fn new(vid: u16, pid: u16) -> Result<Self, TransportError> {
        let api = HidApi::new().map_err(|e| TransportError::HidInit(e.to_string()))?;
        Ok(Self {
            api,
            vid,
            pid,
            device: Mutex::new(None),
        })
    }

    /// Session for the stock AK820 Pro IDs.
    pub fn ak820_pro() -> Result<Self, TransportError> {
        Self::new(device::VENDOR_ID, device::PRODUCT_ID)
    }

    /// Vendor ID this session opens
    pub fn vid(&self) -> u16 {
        self.vid
    }

    /// Product ID this session opens
    pub fn pid(&self) -> u16 {
        self.pid
    }
}

impl Transport for HidSession {
    fn open(&self) -> Result<(), TransportError> {
        let mut device = self.device.lock();
        if device.is_some() {
            return Ok(());
        }

        // First VID/PID match only; no multi-device enumeration.
        let handle = self
            .api
            .open(self.vid, self.pid)
            .map_err(|e| TransportError::DeviceOpen {
                vid: self.vid,
                pid: self.pid,
                reason: e.to_string(),
            })?;
        handle
            .set_blocking_mode(true)
            .map_err(|e| TransportError::DeviceOpen {
                vid: self.vid,
                pid: self.pid,
                reason: e.to_string(),
            })?;

        info!("Opened keyboard {:04x}:{:04x}", self.vid, self.pid);
        *device = Some(handle);
        Ok(())
    }

    fn close(&self) {
        if self.device.lock().take().is_some() {
            info!("Closed keyboard {:04x}:{:04x}", self.vid, self.pid);
        }
    }

    fn is_open(&self) -> bool {
        self.device.lock().is_some()
    }

    fn execute(&self, commands: &[CommandBuffer]) -> Result<(), TransportError> {
        let device = self.device.lock();
        let device = device.as_ref().ok_or(TransportError::NoHandle)?;

        for command in commands {
            let label = if command[0] == COMMAND_PREFIX {
                cmd::name(command[1])
            } else {
                "payload"
            };
            debug!("Sending {} report: {:02X?}", label, &command[..9]);
            device.send_feature_report(command)?;
            // Drain the acknowledgement before the next send; the firmware
            // rejects back-to-back reports otherwise. Content is not decoded.
            let mut response = [0u8; RESPONSE_PACKET_LENGTH];
            device.get_feature_report(&mut response)?;
        }
        Ok(())
    }
}
