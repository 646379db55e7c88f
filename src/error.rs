use std::fmt;

use crate::core::{MAX_VALUE, MIN_VALUE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    /// Integer outside the representable range was given for conversion.
    InvalidInput { value: u32 },
    /// Text that is not a well-formed numeral was given for conversion.
    InvalidNumeral { text: String },
    /// A conversion produced output that its own checks reject.
    ///
    /// Never caused by the caller; it means the converter is inconsistent.
    InvalidResult { input: String, output: String },
}

impl NumeralError {
    pub fn invalid_input(value: u32) -> Self {
        Self::InvalidInput { value }
    }

    pub fn invalid_numeral(text: impl Into<String>) -> Self {
        Self::InvalidNumeral { text: text.into() }
    }

    pub fn invalid_result(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self::InvalidResult {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Whether the error points at the caller's input rather than at the converter.
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, Self::InvalidResult { .. })
    }
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { value } => write!(
                f,
                "{value} cannot be written as a numeral (expected {MIN_VALUE} to {MAX_VALUE})"
            ),
            Self::InvalidNumeral { text } if text.is_empty() => {
                write!(f, "an empty string is not a valid numeral")
            }
            Self::InvalidNumeral { text } => write!(f, "'{text}' is not a valid numeral"),
            Self::InvalidResult { input, output } => write!(
                f,
                "internal inconsistency: '{input}' converted to '{output}', which is not a valid result"
            ),
        }
    }
}

impl std::error::Error for NumeralError {}

pub type Result<T> = std::result::Result<T, NumeralError>;
