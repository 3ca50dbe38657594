//! Validation of the values typed during game setup.

use alloc::string::{String, ToString};
use core::fmt;

use crate::config::{MAZE_MAX_DIMENSION, MAZE_MIN_DIMENSION};

/// Reasons a setup answer is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing was typed.
    Empty,
    /// Input is not a whole number.
    NotInteger,
    /// Dimension is outside the accepted range.
    OutOfRange,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "The value can't be empty"),
            ValidationError::NotInteger => write!(f, "The value must be an integer"),
            ValidationError::OutOfRange => write!(
                f,
                "The value must be greater than or equal to {} and less than or equal to {}",
                MAZE_MIN_DIMENSION, MAZE_MAX_DIMENSION
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

/// Parse a maze width or height. A blank answer reads as zero.
pub fn parse_dimension(input: &str) -> Result<u32, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::OutOfRange);
    }
    // "-3" is an integer, just not a usable one
    let value: i64 = input.parse().map_err(|_| ValidationError::NotInteger)?;
    if value < MAZE_MIN_DIMENSION as i64 || value > MAZE_MAX_DIMENSION as i64 {
        return Err(ValidationError::OutOfRange);
    }
    Ok(value as u32)
}

/// Accept any non-empty player name.
pub fn validate_player_name(input: &str) -> Result<String, ValidationError> {
    let name = input.trim_end_matches(['\r', '\n']);
    if name.is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(name.to_string())
}
