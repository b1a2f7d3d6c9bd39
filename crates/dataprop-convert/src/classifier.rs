//! Value classification
//!
//! Picks the single typecode that best describes a raw value and returns the
//! value converted to that type.
//!
//! With conversion enabled the precedence is
//! `NONE > INT > FLOAT > DATETIME > STRING`: the first converter that accepts
//! the value wins and `STRING` catches everything else. With conversion
//! disabled only the native kind of the value is considered.

use dataprop_types::{Typecode, Value};

use crate::converter::{DateTimeConverter, FloatConverter, IntegerConverter, ValueConverter};
use crate::error::{ConversionError, ConvertResult};
use crate::timezone::TimezoneTable;

/// Classifies raw values under a fixed conversion policy
#[derive(Debug, Clone)]
pub struct ValueClassifier<'a> {
    attempt_conversion: bool,
    none_value: &'a Value,
    timezones: &'a TimezoneTable,
}

impl<'a> ValueClassifier<'a> {
    /// Create a classifier.
    ///
    /// `none_value` is what a null cell resolves to.
    pub fn new(attempt_conversion: bool, none_value: &'a Value, timezones: &'a TimezoneTable) -> Self {
        Self {
            attempt_conversion,
            none_value,
            timezones,
        }
    }

    pub fn attempt_conversion(&self) -> bool {
        self.attempt_conversion
    }

    /// Resolve `value` and its typecode.
    ///
    /// Fails only for non-finite floats; every other conversion failure falls
    /// through to the next candidate type.
    pub fn classify(&self, value: &Value) -> ConvertResult<(Value, Typecode)> {
        if value.is_non_finite() {
            return Err(ConversionError::non_finite(value));
        }

        if value.is_none() {
            return Ok((self.none_value.clone(), Typecode::None));
        }

        if !self.attempt_conversion {
            return Ok((value.clone(), native_typecode(value)));
        }

        let int = IntegerConverter::new(true);
        let float = FloatConverter::new(true);
        let datetime = DateTimeConverter::new(true, self.timezones);
        let candidates: [&dyn ValueConverter; 3] = [&int, &float, &datetime];

        for converter in candidates {
            match converter.convert(value) {
                Ok(converted) if converted.is_non_finite() => {
                    return Err(ConversionError::non_finite(value));
                }
                Ok(converted) => {
                    log::trace!("classified {:?} as {}", value, converter.target());
                    return Ok((converted, converter.target()));
                }
                Err(err @ ConversionError::NonFinite { .. }) => return Err(err),
                Err(ConversionError::Unconvertible { .. }) => continue,
            }
        }

        Ok((value.clone(), Typecode::String))
    }
}

/// Typecode of a value judged by its variant alone
pub fn native_typecode(value: &Value) -> Typecode {
    match value {
        Value::None => Typecode::None,
        Value::Int(_) => Typecode::Int,
        Value::Float(_) => Typecode::Float,
        Value::String(_) => Typecode::String,
        Value::DateTime(_) => Typecode::DateTime,
    }
}
