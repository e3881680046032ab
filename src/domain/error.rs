//! Domain error types

use thiserror::Error;

/// Errors that can occur while encoding or analyzing a bit sequence
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineCodeError {
    #[error("Invalid input: bit sequence is empty")]
    EmptyBits,

    #[error("Invalid input: bit {index} has value {value}, expected 0 or 1")]
    NonBinaryBit { index: usize, value: u8 },

    #[error("Invalid input: bit string contains '{0}', expected '0' or '1'")]
    InvalidBitChar(char),

    #[error("Invalid input: samples_per_bit must be at least 1, got {0}")]
    InvalidSamplesPerBit(usize),

    #[error("Invalid input: data_rate must be positive with a finite samples_per_bit * data_rate, got {0}")]
    InvalidDataRate(f64),

    #[error("Invalid input: unknown encoding scheme '{0}'")]
    UnknownScheme(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LineCodeError {
    /// True for every failure caused by caller-supplied values
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, LineCodeError::Config(_))
    }
}

/// Result type alias for line-coding operations
pub type LineCodeResult<T> = Result<T, LineCodeError>;
