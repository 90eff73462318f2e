use std::num::ParseIntError;

use thiserror::Error;

/// Errors from building a shift register, mapping a grid, or parsing request text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The register needs at least one stage and no more than the supported maximum.
    #[error("Degree {degree} is out of range 1..={max}")]
    InvalidDegree { degree: usize, max: usize },
    /// The seed must fill the register exactly.
    #[error("The seed length ({seed_len}) does not match the degree ({degree}).")]
    ConfigMismatch { seed_len: usize, degree: usize },
    /// A seed entry was something other than 0 or 1.
    #[error("Seed bit {index} is {value}, expected 0 or 1")]
    InvalidBit { index: usize, value: u64 },
    /// A tap points outside the register.
    #[error("Tap index {tap} is outside the register (degree {degree})")]
    InvalidTapIndex { tap: usize, degree: usize },
    #[error("Grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    /// A comma separated token did not parse as a non-negative integer.
    #[error("Cannot parse {token:?} as a number: {reason}")]
    InvalidNumber { token: String, reason: String },
}

impl Error {
    pub(crate) fn invalid_number(token: &str, err: ParseIntError) -> Self {
        Error::InvalidNumber {
            token: token.to_owned(),
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
