//! Lighting-mode and sleep packet layouts.
//!
//! Serialization is explicit per byte offset rather than a struct overlay,
//! so the wire image never depends on field ordering or padding.
//!
//! Mode packet layout:
//!
//! | offset | field |
//! |--------|-------|
//! | 0      | mode |
//! | 1..=3  | r, g, b |
//! | 4      | packed options (see [`ModeOptions::pack`]) |
//! | 63..=64 | `0xAA55` delimiter, little-endian |
//!
//! The sleep packet is sparser: the delay code sits at byte 8 and the
//! trailing pair is `0xAA, 0x55`, reversed relative to the mode packet's
//! delimiter. That asymmetry is what the firmware traffic shows; do not
//! normalize it without verifying against hardware.

use crate::protocol::{CommandBuffer, PACKET_LENGTH};

/// Maximum brightness level accepted by the firmware
pub const MAX_BRIGHTNESS: u8 = 5;
/// Maximum animation speed accepted by the firmware
pub const MAX_SPEED: u8 = 5;

/// 16-bit sentinel closing a mode packet, written little-endian
pub const MODE_DELIMITER: u16 = 0xAA55;

/// Bit-packed option byte of a mode packet.
///
/// `brightness` and `speed` are masked to their three wire bits;
/// `direction` to its single bit. Range enforcement happens above the
/// transport, before packets are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeOptions {
    /// Cycle through colors instead of using the fixed r/g/b
    pub rainbow: bool,
    /// Brightness level, 0..=MAX_BRIGHTNESS
    pub brightness: u8,
    /// Animation speed, 0..=MAX_SPEED
    pub speed: u8,
    /// Animation direction wire bit
    pub direction: u8,
}

impl ModeOptions {
    /// Pack into the wire byte: bit 0 rainbow, bits 1-3 brightness,
    /// bits 4-6 speed, bit 7 direction.
    pub fn pack(&self) -> u8 {
        (self.rainbow as u8)
            | (self.brightness & 0x07) << 1
            | (self.speed & 0x07) << 4
            | (self.direction & 0x01) << 7
    }

    /// Inverse of [`pack`](Self::pack)
    pub fn unpack(byte: u8) -> Self {
        Self {
            rainbow: byte & 0x01 != 0,
            brightness: (byte >> 1) & 0x07,
            speed: (byte >> 4) & 0x07,
            direction: (byte >> 7) & 0x01,
        }
    }
}

/// Payload of a lighting-mode update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModePacket {
    /// Lighting mode wire code
    pub mode: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub options: ModeOptions,
}

impl ModePacket {
    /// Serialize to a full feature report. Always exactly
    /// [`PACKET_LENGTH`] bytes, delimiter in the final two.
    pub fn serialize(&self) -> CommandBuffer {
        let mut buf = [0u8; PACKET_LENGTH];
        buf[0] = self.mode;
        buf[1] = self.r;
        buf[2] = self.g;
        buf[3] = self.b;
        buf[4] = self.options.pack();
        buf[PACKET_LENGTH - 2..].copy_from_slice(&MODE_DELIMITER.to_le_bytes());
        buf
    }

    /// Read a mode packet back from a buffer. Returns `None` when the
    /// buffer is short or the delimiter is missing.
    pub fn parse(buf: &[u8]) -> Option<Self> {
        if buf.len() != PACKET_LENGTH {
            return None;
        }
        let delim = u16::from_le_bytes([buf[PACKET_LENGTH - 2], buf[PACKET_LENGTH - 1]]);
        if delim != MODE_DELIMITER {
            return None;
        }
        Some(Self {
            mode: buf[0],
            r: buf[1],
            g: buf[2],
            b: buf[3],
            options: ModeOptions::unpack(buf[4]),
        })
    }
}

/// Build the sleep-timer payload for a delay code.
///
/// Byte 8 carries the code; the trailing pair is `0xAA, 0x55`
/// (observed order, see module docs).
pub fn sleep_packet(delay_code: u8) -> CommandBuffer {
    let mut buf = [0u8; PACKET_LENGTH];
    buf[8] = delay_code;
    buf[PACKET_LENGTH - 2] = 0xAA;
    buf[PACKET_LENGTH - 1] = 0x55;
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_packet_is_fixed_size_with_delimiter() {
        let packet = ModePacket {
            mode: 1,
            r: 0x12,
            g: 0x34,
            b: 0x56,
            options: ModeOptions {
                rainbow: true,
                brightness: MAX_BRIGHTNESS,
                speed: MAX_SPEED,
                direction: 1,
            },
        };
        let buf = packet.serialize();
        assert_eq!(buf.len(), PACKET_LENGTH);
        assert_eq!(buf[PACKET_LENGTH - 2], 0x55);
        assert_eq!(buf[PACKET_LENGTH - 1], 0xAA);
    }

    #[test]
    fn breathing_red_scenario() {
        // mode=2 (breathing), red, rainbow off, brightness 3, speed 2,
        // direction 1
        let packet = ModePacket {
            mode: 2,
            r: 255,
            g: 0,
            b: 0,
            options: ModeOptions {
                rainbow: false,
                brightness: 3,
                speed: 2,
                direction: 1,
            },
        };
        let buf = packet.serialize();
        assert_eq!(buf[0], 2);
        assert_eq!(buf[1], 255);
        assert_eq!(buf[2], 0);
        assert_eq!(buf[3], 0);
        assert_eq!(buf[4], 0xA6); // 3 << 1 | 2 << 4 | 1 << 7
        assert_eq!(&buf[PACKET_LENGTH - 2..], &[0x55, 0xAA]);
    }

    #[test]
    fn options_roundtrip() {
        for byte in 0..=u8::MAX {
            assert_eq!(ModeOptions::unpack(byte).pack(), byte);
        }
    }

    #[test]
    fn parse_roundtrip() {
        let packet = ModePacket {
            mode: 7,
            r: 10,
            g: 20,
            b: 30,
            options: ModeOptions {
                rainbow: false,
                brightness: 4,
                speed: 1,
                direction: 0,
            },
        };
        assert_eq!(ModePacket::parse(&packet.serialize()), Some(packet));
    }

    #[test]
    fn parse_rejects_bad_delimiter() {
        let mut buf = ModePacket {
            mode: 1,
            r: 0,
            g: 0,
            b: 0,
            options: ModeOptions::default(),
        }
        .serialize();
        buf[PACKET_LENGTH - 1] = 0x00;
        assert_eq!(ModePacket::parse(&buf), None);
        assert_eq!(ModePacket::parse(&buf[..10]), None);
    }

    #[test]
    fn sleep_packet_layout() {
        for code in 0..=4u8 {
            let buf = sleep_packet(code);
            assert_eq!(buf.len(), PACKET_LENGTH);
            assert_eq!(buf[8], code);
            assert_eq!(buf[PACKET_LENGTH - 2], 0xAA);
            assert_eq!(buf[PACKET_LENGTH - 1], 0x55);
            assert!(buf[..8].iter().all(|&b| b == 0));
        }
    }
}
