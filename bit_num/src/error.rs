use std::fmt;

use crate::bit_num_constants::{MAX_RADIX, MIN_RADIX};

/// Returned by [`BitUint::from_str_radix`](crate::BitUint::from_str_radix) and `str::parse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBitUintError {
    /// Nothing but an optional `+` was given.
    Empty,
    /// `found` is not a digit of the radix; `index` counts chars from the start of the input.
    InvalidDigit { found: char, index: usize },
    InvalidRadix(u32),
}

impl fmt::Display for ParseBitUintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBitUintError::Empty => f.write_str("cannot parse integer from empty string"),
            ParseBitUintError::InvalidDigit { found, index } => {
                write!(f, "invalid digit {:?} at position {}", found, index)
            }
            ParseBitUintError::InvalidRadix(radix) => {
                write!(f, "radix {} is out of range {}..={}", radix, MIN_RADIX, MAX_RADIX)
            }
        }
    }
}

impl std::error::Error for ParseBitUintError {}

#[test]
fn test_error_display() {
    assert_eq!(ParseBitUintError::Empty.to_string(), "cannot parse integer from empty string");
    let err = ParseBitUintError::InvalidDigit { found: 'x', index: 3 };
    assert_eq!(err.to_string(), "invalid digit 'x' at position 3");
    assert_eq!(ParseBitUintError::InvalidRadix(40).to_string(), "radix 40 is out of range 2..=36");
}
