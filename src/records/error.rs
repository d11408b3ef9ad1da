//! Error type for the record layer
//!
//! Parsers themselves never error: failure is `None`. This type covers the
//! operations around them that must explain what went wrong, such as strict
//! multi-line parsing and loading configuration.

use std::fmt;

/// Error type for record operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A non-blank line did not parse as an employee record
    MalformedLine {
        /// 1-based line number in the original input
        line: usize,
        /// The trimmed line text
        content: String,
    },

    /// Age bounds where the minimum exceeds the maximum
    InvalidAgeRange {
        /// Requested minimum age
        min_age: u32,
        /// Requested maximum age
        max_age: u32,
    },

    /// Configuration text could not be decoded
    InvalidConfig {
        /// Decoder message
        reason: String,
    },

    /// A report could not be encoded
    Serialization {
        /// Encoder message
        message: String,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::MalformedLine { line, content } => {
                write!(f, "Malformed record at line {}: {:?}", line, content)
            }
            RecordError::InvalidAgeRange { min_age, max_age } => {
                write!(
                    f,
                    "Invalid age range: minimum {} exceeds maximum {}",
                    min_age, max_age
                )
            }
            RecordError::InvalidConfig { reason } => {
                write!(f, "Invalid configuration: {}", reason)
            }
            RecordError::Serialization { message } => {
                write!(f, "Serialization failed: {}", message)
            }
        }
    }
}

impl std::error::Error for RecordError {}
