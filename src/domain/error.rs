//! Error types for the universe engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, UniverseError>;

/// Sizes are written `width x height` in every message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UniverseError {
    #[error("invalid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("cell ({row}, {column}) is outside a {width}x{height} universe")]
    OutOfRange {
        row: u32,
        column: u32,
        height: u32,
        width: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_use_width_then_height() {
        let invalid = UniverseError::InvalidDimensions { width: 0, height: 3 };
        assert_eq!(invalid.to_string(), "invalid dimensions 0x3: both must be positive");

        let out = UniverseError::OutOfRange { row: 3, column: 1, height: 3, width: 5 };
        assert_eq!(out.to_string(), "cell (3, 1) is outside a 5x3 universe");
    }
}
