//! Errors for property extraction

use dataprop_convert::ConversionError;
use dataprop_types::Value;
use thiserror::Error;

/// Result type for dataprop operations
pub type Result<T> = std::result::Result<T, DataPropertyError>;

/// Errors that can occur while computing data properties
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DataPropertyError {
    /// A non-finite number has no digit count
    #[error("Overflow: non-finite value {value} cannot be measured")]
    Overflow { value: String },

    /// The data matrix is absent or malformed
    #[error("Invalid data matrix: {reason}")]
    InvalidMatrix { reason: String },

    /// Conversion failure surfaced to the caller
    #[error("Conversion error: {0}")]
    Conversion(#[source] ConversionError),
}

impl DataPropertyError {
    /// Create an overflow error
    pub fn overflow(value: &Value) -> Self {
        Self::Overflow {
            value: value.to_string(),
        }
    }

    /// Create an invalid matrix error
    pub fn invalid_matrix(reason: impl Into<String>) -> Self {
        Self::InvalidMatrix {
            reason: reason.into(),
        }
    }
}

impl From<ConversionError> for DataPropertyError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::NonFinite { value } => Self::Overflow { value },
            other => Self::Conversion(other),
        }
    }
}
