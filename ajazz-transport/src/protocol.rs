//! Protocol constants and control-report builders for the AK820 Pro dialect.
//!
//! All values here were lifted from USB captures of the vendor software.
//! Control reports share one shape: prefix byte, command code, a couple of
//! command-specific bytes, and a fixed terminator at byte 8.

/// HID feature-report size, report-ID slot included
pub const PACKET_LENGTH: usize = 65;
/// Size of the response drained after every sent report
pub const RESPONSE_PACKET_LENGTH: usize = 65;

/// A full feature report as handed to the HID layer.
pub type CommandBuffer = [u8; PACKET_LENGTH];

/// First byte of every control report (doubles as the HID report ID)
pub const COMMAND_PREFIX: u8 = 0x08;

/// Command codes (byte 1 of a control report)
pub mod cmd {
    /// Opens a settings handshake
    pub const START: u8 = 0x01;
    /// Commits a settings handshake
    pub const FINISH: u8 = 0x02;
    /// Announces a lighting-mode payload
    pub const MODE: u8 = 0x07;
    /// Announces a sleep-timer payload
    pub const SLEEP: u8 = 0x17;
    /// Announces a per-key image upload (upload itself not implemented)
    pub const IMAGE: u8 = 0x12;

    /// Get human-readable name for command byte
    pub fn name(cmd: u8) -> &'static str {
        match cmd {
            START => "START",
            FINISH => "FINISH",
            MODE => "START_MODE",
            SLEEP => "START_SLEEP",
            IMAGE => "START_IMAGE",
            _ => "UNKNOWN",
        }
    }
}

/// Device identification constants
pub mod device {
    /// Sino Wealth vendor ID used by Ajazz boards
    pub const VENDOR_ID: u16 = 0x258A;
    /// AK820 Pro, wired
    pub const PRODUCT_ID: u16 = 0x010C;
}

/// Terminator at byte 8 of control reports
const CONTROL_TERMINATOR: u8 = 0x01;
/// START_IMAGE uses a different terminator (chunked-upload framing)
const IMAGE_TERMINATOR: u8 = 0x09;

fn control(code: u8, arg: u8, terminator: u8) -> CommandBuffer {
    let mut buf = [0u8; PACKET_LENGTH];
    buf[0] = COMMAND_PREFIX;
    buf[1] = code;
    buf[2] = arg;
    buf[8] = terminator;
    buf
}

/// START report opening a settings handshake
pub fn start() -> CommandBuffer {
    control(cmd::START, 0x00, CONTROL_TERMINATOR)
}

/// FINISH report committing a settings handshake
pub fn finish() -> CommandBuffer {
    control(cmd::FINISH, 0x00, CONTROL_TERMINATOR)
}

/// START_MODE report, sent before the mode payload
pub fn start_mode() -> CommandBuffer {
    control(cmd::MODE, 0x00, CONTROL_TERMINATOR)
}

/// START_SLEEP report, sent before the sleep payload
pub fn start_sleep() -> CommandBuffer {
    control(cmd::SLEEP, 0x01, CONTROL_TERMINATOR)
}

/// START_IMAGE report, sent before a per-key image upload
pub fn start_image() -> CommandBuffer {
    control(cmd::IMAGE, 0x02, IMAGE_TERMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_reports_share_layout() {
        for (buf, code) in [
            (start(), cmd::START),
            (finish(), cmd::FINISH),
            (start_mode(), cmd::MODE),
        ] {
            assert_eq!(buf.len(), PACKET_LENGTH);
            assert_eq!(buf[0], COMMAND_PREFIX);
            assert_eq!(buf[1], code);
            assert_eq!(buf[2], 0x00);
            assert_eq!(buf[8], 0x01);
            assert!(buf[9..].iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn start_sleep_carries_sub_flag() {
        let buf = start_sleep();
        assert_eq!(buf[1], cmd::SLEEP);
        assert_eq!(buf[2], 0x01);
        assert_eq!(buf[8], 0x01);
    }

    #[test]
    fn start_image_uses_upload_terminator() {
        let buf = start_image();
        assert_eq!(buf[1], cmd::IMAGE);
        assert_eq!(buf[2], 0x02);
        assert_eq!(buf[8], 0x09);
    }

    #[test]
    fn command_names() {
        assert_eq!(cmd::name(cmd::SLEEP), "START_SLEEP");
        assert_eq!(cmd::name(0x7F), "UNKNOWN");
    }
}
