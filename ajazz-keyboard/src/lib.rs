//! High-level lighting interface for the Ajazz AK820 Pro keyboard
//!
//! This crate turns validated lighting parameters into the fixed
//! feature-report handshakes the firmware expects, on top of any
//! [`Transport`] implementation. Operations come in a synchronous flavor
//! (runs on the caller's thread) and a task flavor (one blocking worker per
//! call, joined through the returned handle), so a frontend can apply the
//! mode and the sleep timer concurrently against one opened session.
//!
//! The two concurrent sequences serialize at the transport, each internally
//! in-order. The caller owns the open/close bracket: open once, dispatch,
//! await every handle, close once.

pub mod error;
pub mod led;
pub mod validate;

pub use error::KeyboardError;
pub use led::{Direction, LightingMode, RgbColor, SleepDelay};

use std::path::Path;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::debug;

use ajazz_transport::packet::{sleep_packet, ModeOptions, ModePacket};
use ajazz_transport::{protocol, Transport};

/// High-level handle for one AK820 Pro.
pub struct Ak820Pro {
    transport: Arc<dyn Transport>,
}

impl Ak820Pro {
    /// Create a keyboard interface over an (opened or not) session.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Get the underlying transport
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Open the device handle. No-op when already open.
    pub fn open(&self) -> Result<(), KeyboardError> {
        self.transport.open()?;
        Ok(())
    }

    /// Release the device handle. No-op when already closed.
    pub fn close(&self) {
        self.transport.close();
    }

    /// Set the lighting mode, color, brightness, speed and direction.
    ///
    /// Brightness and speed are range-checked before any device I/O.
    /// Issues the four-step handshake START, START_MODE, payload, FINISH.
    /// This is the firmware's lighting-update protocol; the steps must not
    /// be reordered, skipped or merged.
    #[allow(clippy::too_many_arguments)]
    pub fn set_mode(
        &self,
        mode: LightingMode,
        color: RgbColor,
        rainbow: bool,
        brightness: u8,
        speed: u8,
        direction: Direction,
    ) -> Result<(), KeyboardError> {
        run_set_mode(
            self.transport.as_ref(),
            mode,
            color,
            rainbow,
            brightness,
            speed,
            direction,
        )
    }

    /// [`set_mode`](Self::set_mode) on a blocking worker task.
    ///
    /// Validation failures surface as the task's error result, never a
    /// panic. The session must stay open until the handle is awaited.
    #[allow(clippy::too_many_arguments)]
    pub fn set_mode_task(
        &self,
        mode: LightingMode,
        color: RgbColor,
        rainbow: bool,
        brightness: u8,
        speed: u8,
        direction: Direction,
    ) -> JoinHandle<Result<(), KeyboardError>> {
        let transport = Arc::clone(&self.transport);
        tokio::task::spawn_blocking(move || {
            run_set_mode(
                transport.as_ref(),
                mode,
                color,
                rainbow,
                brightness,
                speed,
                direction,
            )
        })
    }

    /// Set the idle delay before the LEDs sleep.
    ///
    /// Issues START, START_SLEEP, payload. The firmware takes sleep
    /// settings without a trailing FINISH report. The delay enum is the
    /// whole argument validation; there is no further range check here.
    pub fn set_sleep_time(&self, delay: SleepDelay) -> Result<(), KeyboardError> {
        run_set_sleep(self.transport.as_ref(), delay)
    }

    /// [`set_sleep_time`](Self::set_sleep_time) on a blocking worker task.
    pub fn set_sleep_time_task(&self, delay: SleepDelay) -> JoinHandle<Result<(), KeyboardError>> {
        let transport = Arc::clone(&self.transport);
        tokio::task::spawn_blocking(move || run_set_sleep(transport.as_ref(), delay))
    }

    /// Set a static per-key color.
    pub fn set_color(&self, _r: u8, _g: u8, _b: u8) -> Result<(), KeyboardError> {
        // TODO reverse engineer the per-key RGB data format
        Err(KeyboardError::NotSupported(
            "per-key color data is not reverse engineered yet".into(),
        ))
    }

    /// Upload an image for the per-key picture mode.
    ///
    /// Only the file check is implemented; the interrupt-transfer upload
    /// behind [`protocol::start_image`] is future work.
    pub fn upload_image(&self, path: &Path) -> Result<(), KeyboardError> {
        if !path.exists() {
            return Err(KeyboardError::FileNotFound(path.display().to_string()));
        }
        Err(KeyboardError::NotSupported("image upload".into()))
    }
}

fn run_set_mode(
    transport: &dyn Transport,
    mode: LightingMode,
    color: RgbColor,
    rainbow: bool,
    brightness: u8,
    speed: u8,
    direction: Direction,
) -> Result<(), KeyboardError> {
    validate::brightness(brightness)?;
    validate::speed(speed)?;

    let packet = ModePacket {
        mode: mode as u8,
        r: color.r,
        g: color.g,
        b: color.b,
        options: ModeOptions {
            rainbow,
            brightness,
            speed,
            direction: direction.wire_bit(),
        },
    };

    debug!("Setting mode {} ({:?})", mode, packet);
    transport.execute(&[
        protocol::start(),
        protocol::start_mode(),
        packet.serialize(),
        protocol::finish(),
    ])?;
    Ok(())
}

fn run_set_sleep(transport: &dyn Transport, delay: SleepDelay) -> Result<(), KeyboardError> {
    debug!("Setting LED sleep delay to {}", delay.name());
    transport.execute(&[
        protocol::start(),
        protocol::start_sleep(),
        sleep_packet(delay.code()),
    ])?;
    Ok(())
}
