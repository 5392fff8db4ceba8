//! Pure parameter range checks, performed before any device I/O.

use ajazz_transport::packet::{MAX_BRIGHTNESS, MAX_SPEED};

use crate::error::KeyboardError;

/// Check a brightness level against the firmware range.
pub fn brightness(level: u8) -> Result<(), KeyboardError> {
    if level > MAX_BRIGHTNESS {
        return Err(KeyboardError::ParameterRange {
            name: "brightness",
            value: level,
            max: MAX_BRIGHTNESS,
        });
    }
    Ok(())
}

/// Check an animation speed against the firmware range.
pub fn speed(level: u8) -> Result<(), KeyboardError> {
    if level > MAX_SPEED {
        return Err(KeyboardError::ParameterRange {
            name: "speed",
            value: level,
            max: MAX_SPEED,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brightness_accepts_full_range() {
        for level in 0..=MAX_BRIGHTNESS {
            assert!(brightness(level).is_ok());
        }
        for level in MAX_BRIGHTNESS + 1..=u8::MAX {
            assert!(brightness(level).is_err());
        }
    }

    #[test]
    fn speed_accepts_full_range() {
        for level in 0..=MAX_SPEED {
            assert!(speed(level).is_ok());
        }
        assert!(speed(MAX_SPEED + 1).is_err());
    }

    #[test]
    fn range_error_names_parameter() {
        let err = brightness(6).unwrap_err();
        assert_eq!(err.to_string(), "brightness must be between 0 and 5, got 6");
    }
}
