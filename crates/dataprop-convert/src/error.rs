//! Conversion errors

use dataprop_types::{Typecode, Value};
use thiserror::Error;

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConversionError>;

/// Errors raised by the value converters
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConversionError {
    /// The value cannot be interpreted as the target type
    #[error("Cannot convert {value} ({kind}) to {target}")]
    Unconvertible {
        value: String,
        kind: &'static str,
        target: Typecode,
    },

    /// The value is NaN or infinite
    #[error("Non-finite number cannot be converted: {value}")]
    NonFinite { value: String },
}

impl ConversionError {
    /// Create an unconvertible error
    pub fn unconvertible(value: &Value, target: Typecode) -> Self {
        Self::Unconvertible {
            value: value.to_string(),
            kind: value.kind(),
            target,
        }
    }

    /// Create a non-finite error
    pub fn non_finite(value: &Value) -> Self {
        Self::NonFinite {
            value: value.to_string(),
        }
    }

    /// True for the overflow-class failure
    pub fn is_non_finite(&self) -> bool {
        matches!(self, Self::NonFinite { .. })
    }
}
