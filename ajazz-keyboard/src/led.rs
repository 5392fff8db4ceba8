//! LED lighting types: modes, directions, sleep delays, colors.

use std::fmt;
use std::str::FromStr;

pub use ajazz_transport::packet::{MAX_BRIGHTNESS, MAX_SPEED};

/// Lighting effect mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LightingMode {
    Off = 0,
    Static = 1,
    Breathing = 2,
    Neon = 3,
    Wave = 4,
    Ripple = 5,
    Raindrop = 6,
    Snake = 7,
    Reactive = 8,
    Aurora = 9,
    Vortex = 10,
    Laser = 11,
    Rain = 12,
}

impl LightingMode {
    /// All modes in wire order
    pub const ALL: [LightingMode; 13] = [
        Self::Off,
        Self::Static,
        Self::Breathing,
        Self::Neon,
        Self::Wave,
        Self::Ripple,
        Self::Raindrop,
        Self::Snake,
        Self::Reactive,
        Self::Aurora,
        Self::Vortex,
        Self::Laser,
        Self::Rain,
    ];

    /// Get mode from wire value
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Get the display name for this mode
    pub fn name(&self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Static => "Static",
            Self::Breathing => "Breathing",
            Self::Neon => "Neon",
            Self::Wave => "Wave",
            Self::Ripple => "Ripple",
            Self::Raindrop => "Raindrop",
            Self::Snake => "Snake",
            Self::Reactive => "Reactive",
            Self::Aurora => "Aurora",
            Self::Vortex => "Vortex",
            Self::Laser => "Laser",
            Self::Rain => "Rain",
        }
    }
}

impl fmt::Display for LightingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LightingMode {
    type Err = String;

    /// Parse a mode by wire number or name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(value) = s.parse::<u8>() {
            return Self::from_u8(value)
                .ok_or_else(|| format!("unknown mode number: {value} (0-12)"));
        }
        Self::ALL
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown mode: \"{s}\". Use a number (0-12) or name like breathing"))
    }
}

/// Animation direction for the wave-style modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Direction {
    #[default]
    LeftToRight = 0,
    RightToLeft = 1,
}

impl Direction {
    /// Get direction from wire bit
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::LeftToRight),
            1 => Some(Self::RightToLeft),
            _ => None,
        }
    }

    /// Wire bit in the packed options byte
    pub fn wire_bit(self) -> u8 {
        self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::LeftToRight => "Left to right",
            Self::RightToLeft => "Right to left",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "0" | "left" | "ltr" => Ok(Self::LeftToRight),
            "1" | "right" | "rtl" => Ok(Self::RightToLeft),
            _ => Err(format!("unknown direction: \"{s}\". Use left or right")),
        }
    }
}

/// Idle delay before the LEDs go to sleep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SleepDelay {
    Never = 0,
    OneMinute = 1,
    FiveMinutes = 2,
    TenMinutes = 3,
    ThirtyMinutes = 4,
}

impl SleepDelay {
    /// All delays in wire order
    pub const ALL: [SleepDelay; 5] = [
        Self::Never,
        Self::OneMinute,
        Self::FiveMinutes,
        Self::TenMinutes,
        Self::ThirtyMinutes,
    ];

    /// Get delay from wire code
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Wire code placed at byte 8 of the sleep payload
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::OneMinute => "1 minute",
            Self::FiveMinutes => "5 minutes",
            Self::TenMinutes => "10 minutes",
            Self::ThirtyMinutes => "30 minutes",
        }
    }
}

impl FromStr for SleepDelay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "never" | "off" => Ok(Self::Never),
            "1m" | "1min" => Ok(Self::OneMinute),
            "5m" | "5min" => Ok(Self::FiveMinutes),
            "10m" | "10min" => Ok(Self::TenMinutes),
            "30m" | "30min" => Ok(Self::ThirtyMinutes),
            other => {
                if let Ok(value) = other.parse::<u8>() {
                    return Self::from_u8(value)
                        .ok_or_else(|| format!("unknown sleep delay code: {value} (0-4)"));
                }
                Err(format!(
                    "unknown sleep delay: \"{s}\". Use never, 1m, 5m, 10m, 30m or a code (0-4)"
                ))
            }
        }
    }
}

/// RGB color value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// Create a new RGB color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (all LEDs off)
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    /// White (all LEDs full)
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Red
    pub const RED: Self = Self { r: 255, g: 0, b: 0 };
    /// Green
    pub const GREEN: Self = Self { r: 0, g: 255, b: 0 };
    /// Blue
    pub const BLUE: Self = Self { r: 0, g: 0, b: 255 };
}

impl FromStr for RgbColor {
    type Err = String;

    /// Parse a `RRGGBB` hex triplet, with or without a leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("invalid color: \"{s}\". Use RRGGBB hex"));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| format!("invalid color: \"{s}\""))
        };
        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }
}
